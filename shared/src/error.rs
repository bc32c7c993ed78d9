use thiserror::Error;

/// Failures the takings client can surface to a screen.
///
/// Directory-fetch failures never reach the user; they are mapped to an
/// empty store list by [`crate::StoreDirectory::from_fetch`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TakingsError {
    #[error("Upload failed: {0}")]
    Upload(String),

    #[error("{0}")]
    Query(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Please select a store and date.")]
    MissingSelection,

    #[error("A store must be selected")]
    MissingStore,

    #[error("A date must be selected")]
    MissingDate,
}

impl TakingsError {
    /// True for errors raised before anything is sent to the backend
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            TakingsError::MissingSelection
                | TakingsError::MissingStore
                | TakingsError::MissingDate
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            TakingsError::Upload("Bad Request".to_string()).to_string(),
            "Upload failed: Bad Request"
        );
        assert_eq!(
            TakingsError::Query("No DailyTaking matches the given query.".to_string()).to_string(),
            "No DailyTaking matches the given query."
        );
        assert_eq!(
            TakingsError::MissingSelection.to_string(),
            "Please select a store and date."
        );
    }

    #[test]
    fn test_is_local() {
        assert!(TakingsError::MissingStore.is_local());
        assert!(TakingsError::MissingSelection.is_local());
        assert!(!TakingsError::Network("offline".to_string()).is_local());
        assert!(!TakingsError::Upload("Server Error".to_string()).is_local());
    }
}

use crate::{Store, StoreOption, TakingsError};

/// Store names available for selection on a screen.
///
/// Fallback policy: if the store list cannot be fetched for any reason
/// (transport error, non-success status, malformed body) the directory is
/// empty. The failure is handed back to the caller for logging only and is
/// never shown to the user. There is no retry and no caching between
/// screen activations.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StoreDirectory {
    options: Vec<StoreOption>,
}

impl StoreDirectory {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Options in backend order, value and label both the store name
    pub fn from_stores(stores: Vec<Store>) -> Self {
        Self {
            options: stores.into_iter().map(StoreOption::from).collect(),
        }
    }

    /// Apply the fallback policy to the outcome of a store list fetch.
    ///
    /// Returns the directory along with the swallowed error, if any.
    pub fn from_fetch(result: Result<Vec<Store>, TakingsError>) -> (Self, Option<TakingsError>) {
        match result {
            Ok(stores) => (Self::from_stores(stores), None),
            Err(e) => (Self::empty(), Some(e)),
        }
    }

    pub fn options(&self) -> &[StoreOption] {
        &self.options
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn contains(&self, store: &str) -> bool {
        self.options.iter().any(|option| option.value == store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{decode_store_list, HttpReply};

    #[test]
    fn test_from_stores_keeps_backend_order() {
        let directory = StoreDirectory::from_stores(vec![
            Store { id: 2, name: "Newtown".to_string() },
            Store { id: 1, name: "Glebe".to_string() },
        ]);
        let labels: Vec<&str> = directory.options().iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["Newtown", "Glebe"]);
        assert!(directory.contains("Glebe"));
        assert!(!directory.contains("Annandale"));
    }

    #[test]
    fn test_non_success_status_gives_empty_directory() {
        let reply = HttpReply::new(500, "Internal Server Error", "oops");
        let (directory, swallowed) = StoreDirectory::from_fetch(decode_store_list(&reply));
        assert!(directory.is_empty());
        assert!(swallowed.is_some());
    }

    #[test]
    fn test_malformed_body_gives_empty_directory() {
        let reply = HttpReply::new(200, "OK", "{\"stores\": 3}");
        let (directory, swallowed) = StoreDirectory::from_fetch(decode_store_list(&reply));
        assert!(directory.is_empty());
        assert!(matches!(swallowed, Some(TakingsError::Decode(_))));
    }

    #[test]
    fn test_network_failure_gives_empty_directory() {
        let result = Err(TakingsError::Network("connection refused".to_string()));
        let (directory, _) = StoreDirectory::from_fetch(result);
        assert_eq!(directory, StoreDirectory::empty());
    }

    #[test]
    fn test_successful_fetch() {
        let reply = HttpReply::new(200, "OK", r#"[{"id": 1, "name": "Glebe"}]"#);
        let (directory, swallowed) = StoreDirectory::from_fetch(decode_store_list(&reply));
        assert!(swallowed.is_none());
        assert_eq!(
            directory.options(),
            &[StoreOption { value: "Glebe".to_string(), label: "Glebe".to_string() }]
        );
    }
}

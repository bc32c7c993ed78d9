use shared::TakingsError;

/// Console logger that tags every line with the component it came from.
pub struct Logger;

impl Logger {
    pub fn debug_with_component(component: &str, message: &str) {
        gloo::console::debug!(Self::line(component, message));
    }

    pub fn info_with_component(component: &str, message: &str) {
        gloo::console::info!(Self::line(component, message));
    }

    pub fn warn_with_component(component: &str, message: &str) {
        gloo::console::warn!(Self::line(component, message));
    }

    pub fn error_with_component(component: &str, message: &str) {
        gloo::console::error!(Self::line(component, message));
    }

    /// Log a failed operation. Missing selections never left the browser
    /// and go to debug; everything else is a warning.
    pub fn failure_with_component(component: &str, error: &TakingsError) {
        if error.is_local() {
            Self::debug_with_component(component, &error.to_string());
        } else {
            Self::warn_with_component(component, &error.to_string());
        }
    }

    fn line(component: &str, message: &str) -> String {
        format!("[{}] {}", component, message)
    }
}

//! Imperative navigation seam between the wizard and the application shell.

/// Application paths the wizard navigates between.
pub mod paths {
    pub const LANDING: &str = "/";
    pub const ONBOARDING: &str = "/onboarding";
    pub const DASHBOARD: &str = "/dashboard";
}

/// Sends the user to another surface of the application.
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// Navigator used by the CLI shell — records the transition in the log.
pub struct TracingNavigator;

impl Navigator for TracingNavigator {
    fn navigate(&self, path: &str) {
        tracing::info!(path, "navigate");
    }
}

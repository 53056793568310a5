//! Navigator — external redirects out of the wizard.

/// Application areas the wizard can hand off to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    /// Landing page (`/`).
    Home,
    /// Itinerary builder (`/itinerary`).
    Itinerary,
}

impl Route {
    /// The client-side path for this route.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Itinerary => "/itinerary",
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// Redirect collaborator. Fire-and-forget, no return value consumed.
pub trait Navigator: Send + Sync {
    fn go_to(&self, route: Route);
}

/// Production navigator — records the redirect in the log for the
/// front-end shell to pick up.
pub struct LoggingNavigator;

impl Navigator for LoggingNavigator {
    fn go_to(&self, route: Route) {
        tracing::info!(target = %route, "Navigating out of wizard");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_paths() {
        assert_eq!(Route::Home.path(), "/");
        assert_eq!(Route::Itinerary.path(), "/itinerary");
        assert_eq!(format!("{}", Route::Itinerary), "/itinerary");
    }
}

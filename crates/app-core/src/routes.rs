//! Route model shared by every frontend.

use crate::content;

/// The three pages of the experience.
///
/// `Location` carries the canonical catalog id, so two routes to the same
/// place always compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Globe,
    Thailand,
    Location(&'static str),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Globe => "/".to_string(),
            Route::Thailand => "/thailand".to_string(),
            Route::Location(id) => format!("/location/{id}"),
        }
    }

    /// Parse a path back into a route.
    ///
    /// Unknown paths and unknown location ids yield `None`; the caller
    /// decides how to surface that.
    pub fn parse(path: &str) -> Option<Route> {
        match path {
            "" | "/" => Some(Route::Globe),
            "/thailand" => Some(Route::Thailand),
            other => {
                let id = other.strip_prefix("/location/")?;
                content::location(id).map(|loc| Route::Location(loc.id))
            }
        }
    }
}

/// Sink for navigation requests raised by interaction handling.
///
/// Frontends decide what "navigating" means (hash change on the web, a log
/// line in the native viewer); core code only ever talks to this trait.
pub trait Navigator {
    fn navigate_to(&mut self, route: Route);
}

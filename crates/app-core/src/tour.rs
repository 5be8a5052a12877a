//! Page state for the Thailand map and the individual location stops.

use crate::constants::GUIDE_MESSAGE_TIMEOUT;
use crate::content::{self, Location};
use crate::routes::{Navigator, Route};
use std::time::Duration;

/// Hover state for the Thailand map pins.
#[derive(Debug, Default, Clone)]
pub struct MapView {
    hovered: Option<&'static str>,
}

impl MapView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_hovered(&mut self, id: Option<&'static str>) {
        self.hovered = id;
    }

    #[inline]
    pub fn hovered(&self) -> Option<&'static str> {
        self.hovered
    }

    pub fn is_hovered(&self, id: &str) -> bool {
        self.hovered == Some(id)
    }
}

/// One stop of the tour: a location page with its info panel, guide
/// message and player popup.
pub struct TourStop {
    location: &'static Location,
    info_open: bool,
    player_open: bool,
    guide_remaining: Option<Duration>,
}

impl TourStop {
    pub fn new(location: &'static Location) -> Self {
        Self {
            location,
            info_open: false,
            player_open: false,
            guide_remaining: None,
        }
    }

    #[inline]
    pub fn location(&self) -> &'static Location {
        self.location
    }

    pub fn toggle_info(&mut self) -> bool {
        self.info_open = !self.info_open;
        self.info_open
    }

    #[inline]
    pub fn is_info_open(&self) -> bool {
        self.info_open
    }

    pub fn open_player(&mut self) {
        self.player_open = true;
    }

    pub fn close_player(&mut self) {
        self.player_open = false;
    }

    #[inline]
    pub fn is_player_open(&self) -> bool {
        self.player_open
    }

    /// Show the guide message and restart its auto-hide timer.
    pub fn poke_guide(&mut self) {
        self.guide_remaining = Some(GUIDE_MESSAGE_TIMEOUT);
    }

    #[inline]
    pub fn is_guide_visible(&self) -> bool {
        self.guide_remaining.is_some()
    }

    /// Wind down the guide timer.
    pub fn tick(&mut self, dt: Duration) {
        if let Some(remaining) = &mut self.guide_remaining {
            *remaining = remaining.saturating_sub(dt);
            if remaining.is_zero() {
                self.guide_remaining = None;
            }
        }
    }

    /// Navigate to the next stop on the loop and return its route.
    pub fn advance(&self, nav: &mut dyn Navigator) -> Route {
        let route = Route::Location(self.location.next);
        log::info!("[tour] {} -> {}", self.location.id, self.location.next);
        nav.navigate_to(route);
        route
    }
}

/// Convenience for frontends resolving a stop from a parsed route.
pub fn stop_for(id: &str) -> Option<TourStop> {
    content::location(id).map(TourStop::new)
}

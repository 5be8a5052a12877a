// Pure pointer-state logic, kept free of web-sys so host tests can
// include this file directly.

use app_core::constants::CLICK_DRAG_THRESHOLD_PX;
use glam::Vec2;

/// Press/drag bookkeeping for the globe canvas.
///
/// A press only becomes a drag once the pointer travels past
/// [`CLICK_DRAG_THRESHOLD_PX`]; releases inside that dead zone count as
/// clicks. Orbit deltas are reported per move, after the drag commits.
#[derive(Debug, Default, Clone, Copy)]
pub struct PointerTracker {
    position: Vec2,
    press_origin: Option<Vec2>,
    dragging: bool,
}

impl PointerTracker {
    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn is_down(&self) -> bool {
        self.press_origin.is_some()
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn press(&mut self, at: Vec2) {
        self.position = at;
        self.press_origin = Some(at);
        self.dragging = false;
    }

    /// Track a pointer move. Returns the orbit delta in pixels once the
    /// press has committed to a drag, `None` while hovering or still
    /// inside the click dead zone.
    pub fn motion(&mut self, at: Vec2) -> Option<Vec2> {
        let prev = self.position;
        self.position = at;
        let origin = self.press_origin?;
        if !self.dragging && (at - origin).length() <= CLICK_DRAG_THRESHOLD_PX {
            return None;
        }
        self.dragging = true;
        Some(at - prev)
    }

    /// End the press. Returns `true` when it stayed a clean click.
    pub fn release(&mut self, at: Vec2) -> bool {
        self.position = at;
        let pressed = self.press_origin.take().is_some();
        let dragged = self.dragging;
        self.dragging = false;
        pressed && !dragged
    }
}

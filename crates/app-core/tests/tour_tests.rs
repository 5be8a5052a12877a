// Host-side tests for the Thailand map and tour stop state.

use app_core::content;
use app_core::routes::{Navigator, Route};
use app_core::tour::{stop_for, MapView};
use std::time::Duration;

#[derive(Default)]
struct RecordingNav {
    routes: Vec<Route>,
}

impl Navigator for RecordingNav {
    fn navigate_to(&mut self, route: Route) {
        self.routes.push(route);
    }
}

#[test]
fn guide_message_hides_after_the_timeout() {
    let mut stop = stop_for("doi-suthep").unwrap();
    assert!(!stop.is_guide_visible(), "guide starts hidden until poked");

    stop.poke_guide();
    assert!(stop.is_guide_visible());
    stop.tick(Duration::from_secs(9));
    assert!(stop.is_guide_visible(), "nine seconds in, still talking");
    stop.tick(Duration::from_secs(1));
    assert!(!stop.is_guide_visible(), "ten seconds is the cutoff");
}

#[test]
fn poking_the_guide_restarts_the_timer() {
    let mut stop = stop_for("yaowarat").unwrap();
    stop.poke_guide();
    stop.tick(Duration::from_secs(9));
    stop.poke_guide();
    stop.tick(Duration::from_secs(9));
    assert!(
        stop.is_guide_visible(),
        "a fresh poke should buy another full timeout"
    );
    stop.tick(Duration::from_secs(2));
    assert!(!stop.is_guide_visible());
}

#[test]
fn info_panel_toggles() {
    let mut stop = stop_for("natural-history").unwrap();
    assert!(!stop.is_info_open());
    assert!(stop.toggle_info());
    assert!(stop.is_info_open());
    assert!(!stop.toggle_info());
    assert!(!stop.is_info_open());
}

#[test]
fn player_popup_opens_and_closes() {
    let mut stop = stop_for("lamai-beach").unwrap();
    assert!(!stop.is_player_open());
    stop.open_player();
    stop.open_player();
    assert!(stop.is_player_open());
    stop.close_player();
    assert!(!stop.is_player_open());
}

#[test]
fn advance_follows_the_tour_loop() {
    let stop = stop_for("doi-suthep").unwrap();
    let mut nav = RecordingNav::default();
    let route = stop.advance(&mut nav);
    assert_eq!(route, Route::Location("natural-history"));
    assert_eq!(nav.routes, vec![route]);
}

#[test]
fn advancing_four_times_returns_to_the_start() {
    let mut nav = RecordingNav::default();
    let mut id = "doi-suthep";
    for _ in 0..4 {
        let stop = stop_for(id).unwrap();
        let Route::Location(next) = stop.advance(&mut nav) else {
            panic!("advance must stay on location routes");
        };
        id = next;
    }
    assert_eq!(id, "doi-suthep");
    assert_eq!(nav.routes.len(), 4);
}

#[test]
fn map_hover_tracks_one_pin_at_a_time() {
    let mut map = MapView::new();
    assert!(map.hovered().is_none());

    let yaowarat = content::location("yaowarat").unwrap().id;
    map.set_hovered(Some(yaowarat));
    assert!(map.is_hovered("yaowarat"));
    assert!(!map.is_hovered("doi-suthep"));

    map.set_hovered(None);
    assert!(!map.is_hovered("yaowarat"));
}

#[test]
fn stop_for_unknown_id_is_none() {
    assert!(stop_for("atlantis").is_none());
}

#[test]
fn stop_exposes_its_catalog_entry() {
    let stop = stop_for("yaowarat").unwrap();
    assert_eq!(stop.location().city, "Bangkok");
    assert_eq!(stop.location().next, "lamai-beach");
}

// Host-side tests for route parsing and formatting.

use app_core::content;
use app_core::routes::Route;

#[test]
fn paths_and_parse_are_inverse() {
    let routes = [
        Route::Globe,
        Route::Thailand,
        Route::Location("yaowarat"),
        Route::Location("lamai-beach"),
    ];
    for route in routes {
        let path = route.path();
        assert_eq!(Route::parse(&path), Some(route), "round trip via {path}");
    }
}

#[test]
fn empty_path_is_the_globe() {
    assert_eq!(Route::parse(""), Some(Route::Globe));
    assert_eq!(Route::parse("/"), Some(Route::Globe));
}

#[test]
fn unknown_paths_are_rejected() {
    assert_eq!(Route::parse("/nope"), None);
    assert_eq!(Route::parse("/location/"), None);
    assert_eq!(Route::parse("/location/atlantis"), None);
    assert_eq!(Route::parse("thailand"), None);
}

#[test]
fn parsed_location_ids_are_canonical() {
    let parsed = Route::parse("/location/yaowarat").expect("known id");
    let Route::Location(id) = parsed else {
        panic!("expected a location route, got {parsed:?}");
    };
    let canonical = content::location("yaowarat").unwrap().id;
    assert_eq!(id.as_ptr(), canonical.as_ptr(), "id should come from the catalog");
}

use app_core::routes::{Navigator, Route};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Navigator that writes routes into the location hash.
///
/// The hashchange listener wired in [`wire_hashchange`] picks the change
/// up again, so every navigation (ours or the browser's back button) flows
/// through the same path.
pub struct HashNavigator;

impl Navigator for HashNavigator {
    fn navigate_to(&mut self, route: Route) {
        if let Some(window) = web::window() {
            let path = route.path();
            log::info!("[nav] -> {path}");
            _ = window.location().set_hash(&path);
        }
    }
}

/// Route currently encoded in the location hash.
///
/// Unknown hashes fall back to the globe rather than a dead page.
pub fn current_route() -> Route {
    let hash = web::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default();
    let path = hash.strip_prefix('#').unwrap_or(&hash);
    match Route::parse(path) {
        Some(route) => route,
        None => {
            log::warn!("[nav] unknown hash {hash:?}, falling back to the globe");
            Route::Globe
        }
    }
}

pub fn wire_hashchange(mut on_change: impl FnMut(Route) + 'static) {
    let closure = Closure::wrap(Box::new(move || {
        on_change(current_route());
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Attach a leaked listener to an element by id. No-op when the element
/// is not in the document.
pub fn add_listener(
    document: &web::Document,
    element_id: &str,
    event: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    handler: impl FnMut() + 'static,
) {
    add_listener(document, element_id, "click", handler);
}

/// Keep the canvas backing store at CSS size times device pixel ratio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Pointer position in the canvas backing store's pixel space.
#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let sx = (x_css / (rect.width() as f32).max(1.0)) * canvas.width() as f32;
    let sy = (y_css / (rect.height() as f32).max(1.0)) * canvas.height() as f32;
    Vec2::new(sx, sy)
}

/// Swap the pointer cursor over an element. Styles live in the page CSS;
/// this only touches an inline `cursor` so it never fights the stylesheet.
#[inline]
pub fn set_cursor(el: &web::Element, cursor: &str) {
    _ = el.set_attribute("style", &format!("cursor:{cursor}"));
}

#[inline]
pub fn set_hidden(el: &web::Element, hidden: bool) {
    let cl = el.class_list();
    if hidden {
        _ = cl.add_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "display:none");
    } else {
        _ = cl.remove_1("hidden");
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn set_hidden_by_id(document: &web::Document, element_id: &str, hidden: bool) {
    if let Some(el) = document.get_element_by_id(element_id) {
        set_hidden(&el, hidden);
    }
}

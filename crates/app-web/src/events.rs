//! Pointer and keyboard wiring for the globe view.
//!
//! Handlers are `Closure::forget` leaked for the page's lifetime. Every
//! handler checks the current route first, so the DOM pages keep the
//! pointer to themselves while the canvas is parked.

use crate::dom;
use crate::input::PointerTracker;
use crate::nav::HashNavigator;
use crate::overlay;
use app_core::camera::OrbitCamera;
use app_core::interaction::{pick_scene, InteractionRouter};
use app_core::notepad::PhraseDeck;
use app_core::routes::Route;
use app_core::scene::GlobeScene;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<GlobeScene>>,
    pub camera: Rc<RefCell<OrbitCamera>>,
    pub router: Rc<RefCell<InteractionRouter>>,
    pub route: Rc<RefCell<Route>>,
    pub tracker: Rc<RefCell<PointerTracker>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    // pointermove: orbit while dragging, hover picking otherwise
    {
        let canvas_m = w.canvas.clone();
        let scene_m = w.scene.clone();
        let camera_m = w.camera.clone();
        let router_m = w.router.clone();
        let route_m = w.route.clone();
        let tracker_m = w.tracker.clone();
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
                if *route_m.borrow() != Route::Globe {
                    return;
                }
                let pos = dom::pointer_canvas_px(&ev, &canvas_m);
                let drag = tracker_m.borrow_mut().motion(pos);
                if let Some(delta) = drag {
                    camera_m.borrow_mut().rotate(delta.x, delta.y);
                    return;
                }
                let (ro, rd) = camera_m.borrow().screen_ray(
                    canvas_m.width() as f32,
                    canvas_m.height() as f32,
                    pos.x,
                    pos.y,
                );
                let mut scene = scene_m.borrow_mut();
                let front = pick_scene(&scene, ro, rd).first().copied();
                router_m.borrow_mut().update_hover(&mut scene, front);
                // flag label follows the highlight, not just direct hover
                let flag_lit = scene.is_highlighted(0);
                drop(scene);
                if let Some(doc) = dom::window_document() {
                    overlay::set_globe_hint_visible(&doc, flag_lit);
                }
                dom::set_cursor(&canvas_m, if front.is_some() { "pointer" } else { "grab" });
            }) as Box<dyn FnMut(_)>);
        if let Some(wnd) = web::window() {
            _ = wnd
                .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }

    // pointerdown: arm the click-vs-drag tracker and capture the pointer
    {
        let canvas_target = w.canvas.clone();
        let route_m = w.route.clone();
        let tracker_m = w.tracker.clone();
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
                if *route_m.borrow() != Route::Globe {
                    return;
                }
                let pos = dom::pointer_canvas_px(&ev, &canvas_target);
                tracker_m.borrow_mut().press(pos);
                _ = canvas_target.set_pointer_capture(ev.pointer_id());
                ev.prevent_default();
            }) as Box<dyn FnMut(_)>);
        _ = w
            .canvas
            .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // pointerup: a clean click (no drag past the dead zone) picks and routes
    {
        let canvas_m = w.canvas.clone();
        let scene_m = w.scene.clone();
        let camera_m = w.camera.clone();
        let router_m = w.router.clone();
        let route_m = w.route.clone();
        let tracker_m = w.tracker.clone();
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
                if *route_m.borrow() != Route::Globe {
                    return;
                }
                let pos = dom::pointer_canvas_px(&ev, &canvas_m);
                if !tracker_m.borrow_mut().release(pos) {
                    return;
                }
                let (ro, rd) = camera_m.borrow().screen_ray(
                    canvas_m.width() as f32,
                    canvas_m.height() as f32,
                    pos.x,
                    pos.y,
                );
                let scene = scene_m.borrow();
                let hits = pick_scene(&scene, ro, rd);
                let mut nav = HashNavigator;
                _ = router_m.borrow().dispatch_click(&scene, &hits, &mut nav);
            }) as Box<dyn FnMut(_)>);
        if let Some(wnd) = web::window() {
            _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }

    // wheel: exponential zoom
    {
        let camera_m = w.camera.clone();
        let route_m = w.route.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
            if *route_m.borrow() != Route::Globe {
                return;
            }
            camera_m.borrow_mut().zoom(ev.delta_y() as f32);
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>);
        _ = w
            .canvas
            .add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Arrow keys page the phrase deck while the Thailand map is up.
pub fn wire_arrow_keys(route: Rc<RefCell<Route>>, deck: Rc<RefCell<PhraseDeck>>) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                if *route.borrow() != Route::Thailand {
                    return;
                }
                let moved = match ev.key().as_str() {
                    "ArrowLeft" => deck.borrow_mut().previous(),
                    "ArrowRight" => deck.borrow_mut().next(),
                    _ => return,
                };
                if moved {
                    if let Some(doc) = dom::window_document() {
                        overlay::render_notepad(&doc, &deck.borrow());
                    }
                }
                ev.prevent_default();
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

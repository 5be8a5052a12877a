#![cfg(target_arch = "wasm32")]
use app_core::camera::OrbitCamera;
use app_core::content;
use app_core::interaction::InteractionRouter;
use app_core::notepad::PhraseDeck;
use app_core::player::Player;
use app_core::routes::Route;
use app_core::scene::GlobeScene;
use app_core::tour::{self, MapView, TourStop};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod dom;
mod events;
mod frame;
mod input;
mod nav;
mod overlay;
mod render;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// Everything the route switcher and the page handlers share.
#[derive(Clone)]
struct PageState {
    canvas: web::HtmlCanvasElement,
    audio_ctx: web::AudioContext,
    scene: Rc<RefCell<GlobeScene>>,
    camera: Rc<RefCell<OrbitCamera>>,
    router: Rc<RefCell<InteractionRouter>>,
    route: Rc<RefCell<Route>>,
    stop: Rc<RefCell<Option<TourStop>>>,
    map: Rc<RefCell<MapView>>,
    deck: Rc<RefCell<PhraseDeck>>,
    player: Rc<RefCell<Player>>,
    chain: Rc<RefCell<Option<audio::AudioChain>>>,
}

/// Tear down the old view and build the one the route names.
fn apply_route(state: &PageState, new_route: Route) {
    let Some(document) = dom::window_document() else {
        return;
    };
    // park whatever track the previous page was playing
    if let Some(chain) = state.chain.borrow_mut().take() {
        audio::pause(&chain);
    }
    *state.route.borrow_mut() = new_route;

    match new_route {
        Route::Globe => {
            *state.stop.borrow_mut() = None;
            // fresh scene and camera, like a first visit
            match GlobeScene::new(&content::globe_config()) {
                Ok(fresh) => *state.scene.borrow_mut() = fresh,
                Err(e) => log::error!("[scene] rebuild failed: {e}"),
            }
            *state.camera.borrow_mut() = OrbitCamera::default();
            *state.router.borrow_mut() = InteractionRouter::new();
            dom::set_hidden(&state.canvas, false);
            dom::sync_canvas_backing_size(&state.canvas);
            overlay::render_globe(&document);
        }
        Route::Thailand => {
            state.scene.borrow_mut().detach();
            *state.stop.borrow_mut() = None;
            *state.map.borrow_mut() = MapView::new();
            dom::set_hidden(&state.canvas, true);
            overlay::render_thailand(&document, &state.deck.borrow());
            wire_thailand_page(state, &document);
        }
        Route::Location(id) => {
            state.scene.borrow_mut().detach();
            dom::set_hidden(&state.canvas, true);
            let Some(stop) = tour::stop_for(id) else {
                log::warn!("[nav] unknown location {id}");
                return;
            };
            let loc = stop.location();
            overlay::render_location(&document, &stop, &state.player.borrow());
            *state.stop.borrow_mut() = Some(stop);
            wire_location_page(state, &document);

            // each stop brings its own track, started at the player's volume
            _ = state.audio_ctx.resume();
            let volume = state.player.borrow().effective_volume();
            if let Ok(chain) = audio::build_chain(&state.audio_ctx, loc.music, volume) {
                audio::play(&chain);
                *state.chain.borrow_mut() = Some(chain);
            }
        }
    }
}

fn wire_thailand_page(state: &PageState, document: &web::Document) {
    for loc in content::LOCATIONS.iter() {
        let id = loc.id;
        let map_enter = state.map.clone();
        dom::add_listener(document, &format!("map-pin-{id}"), "mouseenter", move || {
            let mut map = map_enter.borrow_mut();
            map.set_hovered(Some(id));
            if let Some(doc) = dom::window_document() {
                overlay::update_map_hover(&doc, &map);
            }
        });
        let map_leave = state.map.clone();
        dom::add_listener(document, &format!("map-pin-{id}"), "mouseleave", move || {
            let mut map = map_leave.borrow_mut();
            map.set_hovered(None);
            if let Some(doc) = dom::window_document() {
                overlay::update_map_hover(&doc, &map);
            }
        });
    }

    let deck_prev = state.deck.clone();
    dom::add_click_listener(document, "notepad-prev", move || {
        if deck_prev.borrow_mut().previous() {
            if let Some(doc) = dom::window_document() {
                overlay::render_notepad(&doc, &deck_prev.borrow());
            }
        }
    });
    let deck_next = state.deck.clone();
    dom::add_click_listener(document, "notepad-next", move || {
        if deck_next.borrow_mut().next() {
            if let Some(doc) = dom::window_document() {
                overlay::render_notepad(&doc, &deck_next.borrow());
            }
        }
    });
    for i in 0..content::PHRASES.len() {
        let deck_dot = state.deck.clone();
        dom::add_click_listener(document, &format!("notepad-dot-{i}"), move || {
            if deck_dot.borrow_mut().select(i) {
                if let Some(doc) = dom::window_document() {
                    overlay::render_notepad(&doc, &deck_dot.borrow());
                }
            }
        });
    }
}

fn wire_location_page(state: &PageState, document: &web::Document) {
    let stop_info = state.stop.clone();
    dom::add_click_listener(document, "info-toggle", move || {
        let open = match stop_info.borrow_mut().as_mut() {
            Some(stop) => stop.toggle_info(),
            None => return,
        };
        if let Some(doc) = dom::window_document() {
            overlay::set_info_open(&doc, open);
        }
    });

    // the frame loop notices the visibility flip and patches the bubble
    let stop_guide = state.stop.clone();
    dom::add_click_listener(document, "guide-icon", move || {
        if let Some(stop) = stop_guide.borrow_mut().as_mut() {
            stop.poke_guide();
        }
    });

    let stop_next = state.stop.clone();
    dom::add_click_listener(document, "next-stop", move || {
        let mut hash_nav = nav::HashNavigator;
        if let Some(stop) = stop_next.borrow().as_ref() {
            _ = stop.advance(&mut hash_nav);
        }
    });

    let stop_open = state.stop.clone();
    let player_open = state.player.clone();
    let audio_open = state.audio_ctx.clone();
    dom::add_click_listener(document, "player-open", move || {
        if let Some(stop) = stop_open.borrow_mut().as_mut() {
            stop.open_player();
        }
        _ = audio_open.resume();
        if let Some(doc) = dom::window_document() {
            overlay::set_player_open(&doc, true);
            overlay::update_player_controls(&doc, &player_open.borrow());
        }
    });
    let stop_close = state.stop.clone();
    dom::add_click_listener(document, "player-close", move || {
        if let Some(stop) = stop_close.borrow_mut().as_mut() {
            stop.close_player();
        }
        if let Some(doc) = dom::window_document() {
            overlay::set_player_open(&doc, false);
        }
    });

    let player_mute = state.player.clone();
    let chain_mute = state.chain.clone();
    dom::add_click_listener(document, "player-mute", move || {
        let mut player = player_mute.borrow_mut();
        player.toggle_mute();
        if let Some(chain) = chain_mute.borrow().as_ref() {
            audio::set_volume(chain, player.effective_volume());
        }
        if let Some(doc) = dom::window_document() {
            overlay::update_player_controls(&doc, &player);
        }
    });

    let player_slider = state.player.clone();
    let chain_slider = state.chain.clone();
    dom::add_listener(document, "volume-slider", "input", move || {
        let Some(doc) = dom::window_document() else {
            return;
        };
        let Some(el) = doc.get_element_by_id("volume-slider") else {
            return;
        };
        let Ok(slider) = el.dyn_into::<web::HtmlInputElement>() else {
            return;
        };
        let Ok(value) = slider.value().parse::<f32>() else {
            return;
        };
        let mut player = player_slider.borrow_mut();
        player.set_volume(value);
        if let Some(chain) = chain_slider.borrow().as_ref() {
            audio::set_volume(chain, player.effective_volume());
        }
        overlay::update_player_controls(&doc, &player);
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("app-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let audio_ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let scene = GlobeScene::new(&content::globe_config())?;

    let state = PageState {
        canvas: canvas.clone(),
        audio_ctx,
        scene: Rc::new(RefCell::new(scene)),
        camera: Rc::new(RefCell::new(OrbitCamera::default())),
        router: Rc::new(RefCell::new(InteractionRouter::new())),
        route: Rc::new(RefCell::new(Route::Globe)),
        stop: Rc::new(RefCell::new(None)),
        map: Rc::new(RefCell::new(MapView::new())),
        deck: Rc::new(RefCell::new(PhraseDeck::new(content::PHRASES.len()))),
        player: Rc::new(RefCell::new(Player::new())),
        chain: Rc::new(RefCell::new(None)),
    };

    let tracker = Rc::new(RefCell::new(input::PointerTracker::default()));
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        scene: state.scene.clone(),
        camera: state.camera.clone(),
        router: state.router.clone(),
        route: state.route.clone(),
        tracker: tracker.clone(),
    });
    events::wire_arrow_keys(state.route.clone(), state.deck.clone());

    {
        let state_nav = state.clone();
        nav::wire_hashchange(move |route| apply_route(&state_nav, route));
    }

    // land on whatever the URL already names
    apply_route(&state, nav::current_route());

    let gpu = frame::init_gpu(&canvas).await;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene: state.scene.clone(),
        camera: state.camera.clone(),
        route: state.route.clone(),
        stop: state.stop.clone(),
        deck: state.deck.clone(),
        player: state.player.clone(),
        chain: state.chain.clone(),
        canvas: canvas.clone(),
        gpu,
        analyser_buf: Vec::new(),
        last_instant: Instant::now(),
        guide_was_visible: false,
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}

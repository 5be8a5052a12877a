//! Per-frame driver: advances whichever view is live and redraws.

use crate::audio::{self, AudioChain};
use crate::dom;
use crate::overlay;
use crate::render;
use app_core::camera::OrbitCamera;
use app_core::notepad::PhraseDeck;
use app_core::player::Player;
use app_core::routes::Route;
use app_core::scene::GlobeScene;
use app_core::tour::TourStop;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub scene: Rc<RefCell<GlobeScene>>,
    pub camera: Rc<RefCell<OrbitCamera>>,
    pub route: Rc<RefCell<Route>>,
    pub stop: Rc<RefCell<Option<TourStop>>>,
    pub deck: Rc<RefCell<PhraseDeck>>,
    pub player: Rc<RefCell<Player>>,
    pub chain: Rc<RefCell<Option<AudioChain>>>,

    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,

    pub analyser_buf: Vec<u8>,
    pub last_instant: Instant,
    // guide bubble is patched only on visibility transitions
    pub guide_was_visible: bool,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        match *self.route.borrow() {
            Route::Globe => self.frame_globe(dt),
            Route::Thailand => self.frame_thailand(dt),
            Route::Location(_) => self.frame_location(dt),
        }
    }

    fn frame_globe(&mut self, dt: Duration) {
        self.scene.borrow_mut().tick(dt);
        if let Some(g) = &mut self.gpu {
            let w = self.canvas.width();
            let h = self.canvas.height();
            g.resize_if_needed(w, h);
            if let Err(e) = g.render(&self.scene.borrow(), &self.camera.borrow()) {
                log::error!("render error: {:?}", e);
            }
        }
    }

    fn frame_thailand(&mut self, dt: Duration) {
        let was_animating = self.deck.borrow().is_animating();
        self.deck.borrow_mut().tick(dt);
        // repaint once when the slide lock releases so the fade completes
        if was_animating && !self.deck.borrow().is_animating() {
            if let Some(doc) = dom::window_document() {
                overlay::render_notepad(&doc, &self.deck.borrow());
            }
        }
    }

    fn frame_location(&mut self, dt: Duration) {
        let mut stop_ref = self.stop.borrow_mut();
        let Some(stop) = stop_ref.as_mut() else {
            return;
        };
        stop.tick(dt);
        let guide_visible = stop.is_guide_visible();
        if guide_visible != self.guide_was_visible {
            self.guide_was_visible = guide_visible;
            if let Some(doc) = dom::window_document() {
                overlay::set_guide_visible(&doc, guide_visible);
            }
        }
        // spectrum readout only while the popup is up
        if stop.is_player_open() {
            if let Some(chain) = self.chain.borrow().as_ref() {
                audio::sample_bars(chain, &mut self.analyser_buf, &mut self.player.borrow_mut());
                if let Some(doc) = dom::window_document() {
                    overlay::update_player_bars(&doc, &self.player.borrow());
                }
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}

//! Browser host: DOM overlay canvas, requestAnimationFrame and image loading

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlCanvasElement, HtmlImageElement};

use super::{FrameScheduler, FrameToken, OverlayStyle, Viewport};
use crate::assets::{Rank, RankAssets};
use crate::renderer::{CanvasSurface, SurfaceError};
use crate::settings::Settings;
use crate::sim::{Burst, ConfettiEngine};

/// The engine as hosted in a browser page
pub type WebEngine = ConfettiEngine<BrowserViewport, RafScheduler>;

fn dom_err(e: JsValue) -> SurfaceError {
    SurfaceError::Dom(format!("{:?}", e))
}

/// Window-sized viewport that mounts a fixed `<canvas>` over the page
#[derive(Debug, Default)]
pub struct BrowserViewport;

impl Viewport for BrowserViewport {
    type Surface = CanvasSurface;

    fn size(&self) -> (u32, u32) {
        let Some(window) = web_sys::window() else {
            return (0, 0);
        };
        let dim = |v: Result<JsValue, JsValue>| {
            v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0).max(0.0) as u32
        };
        (dim(window.inner_width()), dim(window.inner_height()))
    }

    fn mount_overlay(&mut self, style: &OverlayStyle) -> Result<CanvasSurface, SurfaceError> {
        let window = web_sys::window().ok_or(SurfaceError::HostUnavailable("no window"))?;
        let document = window
            .document()
            .ok_or(SurfaceError::HostUnavailable("no document"))?;
        let body = document
            .body()
            .ok_or(SurfaceError::HostUnavailable("no body"))?;

        let canvas: HtmlCanvasElement = document
            .create_element("canvas")
            .map_err(dom_err)?
            .dyn_into()
            .map_err(|_| SurfaceError::Dom("created element is not a canvas".into()))?;

        let css = canvas.style();
        let z_index = style.z_index.to_string();
        for (name, value) in [
            ("position", "fixed"),
            ("top", "0"),
            ("left", "0"),
            ("width", "100vw"),
            ("height", "100vh"),
            // Clicks pass through to the cards underneath
            ("pointer-events", "none"),
            ("z-index", z_index.as_str()),
        ] {
            css.set_property(name, value).map_err(dom_err)?;
        }

        body.append_child(&canvas).map_err(dom_err)?;
        CanvasSurface::new(canvas)
    }
}

/// `requestAnimationFrame` scheduler delivering frames to a shared engine
pub struct RafScheduler {
    engine: Weak<RefCell<WebEngine>>,
    next_id: u64,
}

impl RafScheduler {
    pub fn new(engine: Weak<RefCell<WebEngine>>) -> Self {
        Self { engine, next_id: 0 }
    }
}

impl FrameScheduler for RafScheduler {
    fn schedule(&mut self) -> Option<FrameToken> {
        let window = web_sys::window()?;
        self.next_id += 1;
        let token = FrameToken::new(self.next_id);

        let engine = self.engine.clone();
        let closure = Closure::once(move |_time: f64| {
            if let Some(engine) = engine.upgrade() {
                engine.borrow_mut().on_frame(token);
            }
        });
        let requested = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();

        match requested {
            Ok(_) => Some(token),
            Err(e) => {
                log::error!("requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }
}

/// Page-lifetime confetti handle
///
/// Construct once at startup and hand clones of [`WebConfetti::engine`] to
/// whatever needs to spawn bursts.
#[wasm_bindgen]
pub struct WebConfetti {
    engine: Rc<RefCell<WebEngine>>,
}

#[wasm_bindgen]
impl WebConfetti {
    /// Install the engine. `settings_json` overrides defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(settings_json: Option<String>) -> WebConfetti {
        let settings = settings_json
            .as_deref()
            .map(Settings::from_json_or_default)
            .unwrap_or_default();
        Self::install(settings)
    }

    /// Spawn a burst. Origin is normalized to the viewport.
    #[wasm_bindgen(js_name = createConfetti)]
    pub fn create_confetti(
        &self,
        origin_x: f64,
        origin_y: f64,
        count: i32,
        image: Option<HtmlImageElement>,
        particle_width: f64,
        particle_height: f64,
    ) {
        let burst = Burst::from_host(
            origin_x,
            origin_y,
            count as i64,
            image,
            particle_width,
            particle_height,
        );
        self.engine.borrow_mut().spawn_burst(burst);
    }

    /// Live particle count (for debugging from the console)
    #[wasm_bindgen(js_name = particleCount)]
    pub fn particle_count(&self) -> usize {
        self.engine.borrow().particle_count()
    }
}

impl WebConfetti {
    /// Build the engine, mount the overlay if the page is ready and track
    /// window resizes
    pub fn install(settings: Settings) -> WebConfetti {
        let seed = js_sys::Date::now() as u64;
        let engine = Rc::new_cyclic(|weak: &Weak<RefCell<WebEngine>>| {
            RefCell::new(ConfettiEngine::new(
                BrowserViewport,
                RafScheduler::new(weak.clone()),
                settings,
                seed,
            ))
        });

        // Before DOMContentLoaded there is no body; the first burst mounts lazily
        if let Err(e) = engine.borrow_mut().init() {
            log::info!("Confetti overlay deferred: {}", e);
        }

        if let Some(window) = web_sys::window() {
            let weak = Rc::downgrade(&engine);
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                if let Some(engine) = weak.upgrade() {
                    engine.borrow_mut().handle_resize();
                }
            });
            let _ = window
                .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        WebConfetti { engine }
    }

    pub fn engine(&self) -> Rc<RefCell<WebEngine>> {
        self.engine.clone()
    }
}

/// Load and decode one image. `None` on failure.
pub async fn load_image(src: &str) -> Option<HtmlImageElement> {
    let image = match HtmlImageElement::new() {
        Ok(image) => image,
        Err(e) => {
            log::error!("Failed to create image for {}: {:?}", src, e);
            return None;
        }
    };
    image.set_src(src);

    match JsFuture::from(image.decode()).await {
        Ok(_) => Some(image),
        Err(e) => {
            log::error!("Failed to load image {}: {:?}", src, e);
            None
        }
    }
}

/// Load every rank's confetti image from its default path
pub async fn load_rank_assets() -> RankAssets<HtmlImageElement> {
    let mut assets = RankAssets::new();
    for rank in Rank::ALL {
        let image = load_image(rank.asset_path()).await;
        if image.is_some() {
            log::info!("Loaded confetti image for {}", rank.as_str());
        }
        assets.insert(rank, image);
    }
    log::info!(
        "Confetti images ready ({}/{})",
        assets.loaded_count(),
        Rank::ALL.len()
    );
    assets
}

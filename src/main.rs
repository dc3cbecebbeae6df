//! Card Confetti entry point
//!
//! On the web: installs the confetti overlay, preloads rank images and
//! celebrates each card the first time it is flipped.
//! Natively: runs one burst headlessly and reports how the loop behaved.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{Element, HtmlImageElement};

    use card_confetti::platform::web::{WebConfetti, WebEngine, load_rank_assets};
    use card_confetti::{CardCelebrations, CardRect, Settings};

    /// Reveal state shared by the card click handlers
    struct Reveals {
        engine: Rc<RefCell<WebEngine>>,
        celebrations: CardCelebrations<HtmlImageElement>,
    }

    impl Reveals {
        /// Flip a card face up and celebrate it
        fn reveal(&mut self, card: &Element) {
            let classes = card.class_list();
            let was_flipped = classes.contains("flipped");
            let _ = classes.toggle("flipped");
            if was_flipped {
                return;
            }

            let Some(window) = web_sys::window() else {
                return;
            };
            let dim = |v: Result<JsValue, JsValue>| {
                v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
            };
            let viewport = Vec2::new(dim(window.inner_width()), dim(window.inner_height()));

            let rect = card.get_bounding_client_rect();
            let rect = CardRect {
                left: rect.left() as f32,
                top: rect.top() as f32,
                width: rect.width() as f32,
                height: rect.height() as f32,
            };
            let rank = card.get_attribute("cardRank").unwrap_or_default();

            let mut engine = self.engine.borrow_mut();
            self.celebrations
                .celebrate(&mut *engine, &card.id(), &rank, rect, viewport);
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Card Confetti starting...");

        let settings = Settings::default();
        let confetti = WebConfetti::install(settings.clone());
        let assets = load_rank_assets().await;

        let reveals = Rc::new(RefCell::new(Reveals {
            engine: confetti.engine(),
            celebrations: CardCelebrations::new(assets, &settings),
        }));

        setup_card_handlers(reveals);

        log::info!("Card Confetti running!");
    }

    fn setup_card_handlers(reveals: Rc<RefCell<Reveals>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::warn!("No document, card reveals disabled");
            return;
        };
        let Ok(cards) = document.query_selector_all(".card") else {
            return;
        };

        for i in 0..cards.length() {
            let Some(card) = cards.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            let reveals = reveals.clone();
            let target = card.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                reveals.borrow_mut().reveal(&target);
            });
            let _ = card.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        log::info!("Attached reveal handlers to {} cards", cards.length());
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_app::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use card_confetti::platform::{HeadlessViewport, ManualScheduler};
    use card_confetti::{Burst, ConfettiEngine, Settings};

    env_logger::init();
    log::info!("Card Confetti (native) starting...");
    log::info!("Native mode renders headlessly - run with `trunk serve` for the web version");

    let mut engine = ConfettiEngine::new(
        HeadlessViewport::new(1000, 800),
        ManualScheduler::new(),
        Settings::default(),
        0x5eed,
    );
    engine.spawn_burst(Burst::new(0.5, 0.5, 150, Some("regular".to_string()), 64.0, 64.0));

    let mut frames = 0u32;
    let mut peak_draws = 0usize;
    while let Some(token) = engine.pending_frame() {
        engine.on_frame(token);
        frames += 1;
        if let Some(surface) = engine.surface() {
            peak_draws = peak_draws.max(surface.images_drawn());
        }
    }

    println!(
        "Burst settled after {} frames (peak {} particles drawn), loop {:?}",
        frames,
        peak_draws,
        engine.loop_state()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

pub mod dom;
pub mod error;
pub mod runner;

pub use dom::DomSurface;
pub use error::WebError;
pub use runner::AppRunner;

/// Fresh seed per page load, so the star field differs between runs.
pub fn host_seed() -> u64 {
    (js_sys::Math::random() * u32::MAX as f64) as u64
}

/// Generate all `#[wasm_bindgen]` exports for an app.
///
/// The macro expands to:
/// - `thread_local!` storage for the AppRunner
/// - a `with_runner()` helper (calls before `game_init` are no-ops)
/// - every wasm-bindgen export the host page calls (init, tick, input,
///   textures, frame buffer accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
///
/// mod game;
/// use game::MyApp;
///
/// orrery_web::export_app!(MyApp, "my-app");
/// ```
///
/// # Arguments
///
/// - `$game_type`: The app struct type that implements `orrery_engine::Game`
///   and has a `new()` constructor
/// - `$game_name`: A string literal used in the initialization log message
#[macro_export]
macro_rules! export_app {
    ($game_type:ty, $game_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::AppRunner<$game_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::AppRunner<$game_type>) -> R) -> Option<R> {
            RUNNER.with(|cell| cell.borrow_mut().as_mut().map(f))
        }

        /// `width`/`height` are the window's inner size in CSS pixels.
        #[wasm_bindgen]
        pub fn game_init(width: f32, height: f32, pixel_ratio: f32) -> Result<(), JsValue> {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let game = <$game_type>::new();
            let caption = orrery_engine::Game::config(&game).caption_element;
            let surface = $crate::DomSurface::attach(&caption)?;
            let mut runner =
                $crate::AppRunner::new(game, Box::new(surface), width, height, pixel_ratio);
            runner.reseed($crate::host_seed());

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            with_runner(|r| r.init());
            log::info!("{}: initialized", $game_name);
            Ok(())
        }

        #[wasm_bindgen]
        pub fn game_tick() {
            with_runner(|r| r.tick());
        }

        #[wasm_bindgen]
        pub fn game_pointer_down(x: f32, y: f32, button: u32) {
            with_runner(|r| r.push_input(orrery_engine::InputEvent::PointerDown { x, y, button }));
        }

        #[wasm_bindgen]
        pub fn game_pointer_up(x: f32, y: f32) {
            with_runner(|r| r.push_input(orrery_engine::InputEvent::PointerUp { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_pointer_move(x: f32, y: f32) {
            with_runner(|r| r.push_input(orrery_engine::InputEvent::PointerMove { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_wheel(delta_y: f32) {
            with_runner(|r| r.push_input(orrery_engine::InputEvent::Wheel { delta_y }));
        }

        #[wasm_bindgen]
        pub fn game_resize(width: f32, height: f32) {
            with_runner(|r| r.push_input(orrery_engine::InputEvent::Resize { width, height }));
        }

        // ---- Textures ----

        #[wasm_bindgen]
        pub fn get_texture_requests() -> String {
            with_runner(|r| r.texture_requests()).unwrap_or_else(|| "[]".to_string())
        }

        #[wasm_bindgen]
        pub fn game_texture_loaded(id: u32, ok: bool) {
            if let Some(Err(err)) = with_runner(|r| r.texture_loaded(id, ok)) {
                log::warn!("{}", err);
            }
        }

        // ---- Frame buffer accessors ----

        #[wasm_bindgen]
        pub fn get_frame_ptr() -> *const f32 {
            with_runner(|r| r.frame_ptr()).unwrap_or(std::ptr::null())
        }

        #[wasm_bindgen]
        pub fn get_frame_len() -> u32 {
            with_runner(|r| r.frame_len()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_instance_count() -> u32 {
            with_runner(|r| r.instance_count()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_max_instances() -> u32 {
            with_runner(|r| r.max_instances()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_surface_width() -> u32 {
            with_runner(|r| r.surface_width()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_surface_height() -> u32 {
            with_runner(|r| r.surface_height()).unwrap_or(0)
        }
    };
}

pub mod runner;

pub use runner::GameRunner;
// Re-exported so `export_game!` expands without extra deps in the scene crate.
pub use js_sys;
pub use orrery;
pub use log;
pub use console_log;
pub use console_error_panic_hook;

/// Generate all `#[wasm_bindgen]` exports for a scene.
///
/// Generates:
/// - `thread_local!` storage for the GameRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (init, tick, input handlers, buffer accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use orrery::*;
///
/// mod game;
/// use game::MyScene;
///
/// orrery_web::export_game!(MyScene, "my-scene");
/// ```
///
/// # Arguments
///
/// - `$game_type`: The scene struct type that implements `orrery::Game` and has `new()`
/// - `$game_name`: A string literal used in the initialization log message
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $game_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::GameRunner<$game_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::GameRunner<$game_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow.as_mut().expect("Scene not initialized. Call game_init() first.");
                f(runner)
            })
        }

        #[wasm_bindgen]
        pub fn game_init() {
            $crate::console_error_panic_hook::set_once();
            let _ = $crate::console_log::init_with_level($crate::log::Level::Info);

            let game = <$game_type>::new();
            let runner = $crate::GameRunner::new(game);

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            with_runner(|r| r.init());
            $crate::log::info!("{}: initialized", $game_name);
        }

        #[wasm_bindgen]
        pub fn game_tick(dt: f32) {
            with_runner(|r| r.tick(dt));
        }

        #[wasm_bindgen]
        pub fn game_seek(seconds: f64) {
            with_runner(|r| r.seek(seconds));
        }

        #[wasm_bindgen]
        pub fn game_pointer_down(x: f32, y: f32) {
            with_runner(|r| r.push_input($crate::orrery::InputEvent::PointerDown { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_pointer_up(x: f32, y: f32) {
            with_runner(|r| r.push_input($crate::orrery::InputEvent::PointerUp { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_pointer_move(x: f32, y: f32) {
            with_runner(|r| r.push_input($crate::orrery::InputEvent::PointerMove { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_wheel(delta_y: f32) {
            with_runner(|r| r.push_input($crate::orrery::InputEvent::Wheel { delta_y }));
        }

        #[wasm_bindgen]
        pub fn game_resize(width: f32, height: f32) {
            with_runner(|r| r.push_input($crate::orrery::InputEvent::Resize { width, height }));
        }

        #[wasm_bindgen]
        pub fn game_load_manifest(json: &str) {
            with_runner(|r| r.load_manifest(json));
        }

        #[wasm_bindgen]
        pub fn get_texture_manifest() -> String {
            with_runner(|r| r.texture_manifest_json())
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_header_ptr() -> *const f32 {
            with_runner(|r| r.header_ptr())
        }

        #[wasm_bindgen]
        pub fn get_camera_ptr() -> *const f32 {
            with_runner(|r| r.camera_ptr())
        }

        /// Copy of the camera uniform, for hosts that avoid raw memory views.
        #[wasm_bindgen]
        pub fn get_camera_uniform() -> $crate::js_sys::Float32Array {
            with_runner(|r| $crate::js_sys::Float32Array::from(r.camera_floats()))
        }

        #[wasm_bindgen]
        pub fn get_instances_ptr() -> *const f32 {
            with_runner(|r| r.instances_ptr())
        }

        #[wasm_bindgen]
        pub fn get_instance_count() -> u32 {
            with_runner(|r| r.instance_count())
        }

        #[wasm_bindgen]
        pub fn get_stars_ptr() -> *const f32 {
            with_runner(|r| r.stars_ptr())
        }

        #[wasm_bindgen]
        pub fn get_star_count() -> u32 {
            with_runner(|r| r.star_count())
        }

        #[wasm_bindgen]
        pub fn get_orbit_vertices_ptr() -> *const f32 {
            with_runner(|r| r.orbit_vertices_ptr())
        }

        #[wasm_bindgen]
        pub fn get_orbit_vertex_count() -> u32 {
            with_runner(|r| r.orbit_vertex_count())
        }

        #[wasm_bindgen]
        pub fn get_orbit_strip_lengths() -> $crate::js_sys::Uint32Array {
            with_runner(|r| $crate::js_sys::Uint32Array::from(r.orbit_strip_lengths()))
        }

        #[wasm_bindgen]
        pub fn get_elapsed() -> f64 {
            with_runner(|r| r.elapsed())
        }

        #[wasm_bindgen]
        pub fn get_fov() -> f32 {
            with_runner(|r| r.fov())
        }

        #[wasm_bindgen]
        pub fn get_projection_generation() -> u32 {
            with_runner(|r| r.projection_generation())
        }

        #[wasm_bindgen]
        pub fn get_viewport_width() -> f32 {
            with_runner(|r| r.viewport_width())
        }

        #[wasm_bindgen]
        pub fn get_viewport_height() -> f32 {
            with_runner(|r| r.viewport_height())
        }

        // ---- Capacity accessors ----

        #[wasm_bindgen]
        pub fn get_max_instances() -> u32 {
            with_runner(|r| r.max_instances())
        }

        #[wasm_bindgen]
        pub fn get_max_stars() -> u32 {
            with_runner(|r| r.max_stars())
        }

        #[wasm_bindgen]
        pub fn get_max_orbit_vertices() -> u32 {
            with_runner(|r| r.max_orbit_vertices())
        }

        #[wasm_bindgen]
        pub fn get_buffer_total_floats() -> u32 {
            with_runner(|r| r.buffer_total_floats())
        }
    };
}

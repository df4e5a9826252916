/// Tab Suspender - browser extension popup that discards tabs to save memory
/// Built with Rust + WASM + Yew

pub mod error;
pub mod runtime;
pub mod selection;
pub mod tab_data;
pub mod tab_list;
pub mod ui;

use wasm_bindgen::prelude::*;

// Set up panic hook and logging for the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log_level()));
}

fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

// Start the Yew app for the popup
#[wasm_bindgen]
pub fn start_popup() {
    yew::Renderer::<ui::popup::App>::new().render();
}

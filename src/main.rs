//! Prompt Library Frontend Entry Point

mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_logger::init_logger("PromptLibrary", log::LevelFilter::Info) {
        web_sys::console::warn_1(&e.to_string().into());
    }
    mount_to_body(App);
}

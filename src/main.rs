#![allow(warnings)]
//! BugList Frontend Entry Point

mod commands;
mod navigation;
mod logger;
mod context;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init();
    mount_to_body(App);
}

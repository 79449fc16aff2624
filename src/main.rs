#![allow(warnings)]
//! Taskboard Frontend Entry Point

mod api;
mod app;
mod auth;
mod board;
mod components;
mod config;
mod context;
mod logging;
mod models;
mod pages;
mod services;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(config::AppConfig::load().log_level);
    mount_to_body(App);
}

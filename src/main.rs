//! Portfolio Frontend Entry Point

mod api;
mod app;
mod auth;
mod components;
mod config;
mod controller;
mod dates;
mod models;
mod pages;
mod store;
mod tags;
mod validate;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}

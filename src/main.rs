#![allow(warnings)]
//! Desktop Todolist Frontend Entry Point

mod models;
mod ordering;
mod task_store;
mod toggle;
mod commands;
mod context;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}

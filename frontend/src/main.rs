//! Presence Dashboard Entry Point

use std::sync::OnceLock;
use zoon::*;

/// Stores the main application task handle to prevent it from being dropped.
static MAIN_TASK: OnceLock<TaskHandle> = OnceLock::new();

// Core modules
mod aggregate;
mod api;
mod app;
mod chart;
mod config;
mod connection;
mod dataflow;
mod selector;
mod theme;
mod users;
mod views;

pub fn main() {
    let handle = Task::start_droppable(async {
        let app = crate::app::PresenceApp::new().await;
        let root_element = app.root();
        start_app("app", move || root_element);
    });
    let _ = MAIN_TASK.set(handle);
}

mod app;
mod auth;
mod config;
mod error;
mod library;
mod runtime;
mod ui;
mod view;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()
}

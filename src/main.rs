mod api;
mod app;
mod components;
mod config;
mod filter;
mod message;
mod model;
mod notifications;
mod store;
mod utils;
mod views;

pub fn main() -> iced::Result {
    app::run()
}

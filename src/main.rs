mod app;
mod components;
mod config;
mod message;
mod model;
mod views;

pub fn main() -> iced::Result {
    app::run()
}

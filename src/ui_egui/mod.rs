mod add_dialog;
mod app;
pub mod views;

pub use app::CakedayApp;

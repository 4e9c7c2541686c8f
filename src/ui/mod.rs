//! Interactive carousel front end built on Ratatui.

mod app;
mod carousel;
mod editor;
mod helpers;
mod terminal;

pub use app::App;
pub use carousel::Carousel;
pub use terminal::run_app;

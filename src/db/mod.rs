//! Persistence module split across logical submodules.

mod banners;
mod connection;

pub use banners::BannerStore;
pub use connection::db_path;
pub(crate) use connection::data_dir;

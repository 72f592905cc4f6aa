pub mod app_dirs;
pub mod db;
pub mod http;
pub mod profile;

pub use db::repositories::DieselMenuRepository;
pub use http::HttpMenuSource;
pub use profile::FileProfileRepository;

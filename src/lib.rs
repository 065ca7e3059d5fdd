// 依存関係の推移的依存により複数のバージョンが混在するための抑制
#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod args;
pub mod config;
pub mod logging;
pub mod parsers;

pub use config::{Config, ConfigBuilder};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{Cli, Command};

pub use adapters::{http::build_router, storage::InMemoryReceiptStore};
pub use config::ServerConfig;
pub use core::{points::ScoreCalculator, service::ReceiptService};
pub use domain::model::{LineItem, Points, Receipt};
pub use utils::error::{ReceiptError, Result};

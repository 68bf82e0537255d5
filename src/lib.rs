pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, SessionConfig};
pub use core::{ledger::SellerBook, session::Session, session::SessionSummary};
pub use domain::model::{Seller, Tier};
pub use utils::error::{Result, StatsError};

pub mod ledger;
pub mod session;

pub use crate::domain::model::{Seller, Tier};
pub use crate::domain::ports::{ConfigProvider, ReportStore};
pub use crate::utils::error::Result;

pub mod points;
pub mod service;

pub use crate::domain::model::{LineItem, Receipt};
pub use crate::domain::ports::ReceiptStore;
pub use crate::utils::error::Result;

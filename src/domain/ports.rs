use crate::domain::model::Receipt;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Keyed storage for processed receipts.
#[async_trait]
pub trait ReceiptStore: Send + Sync {
    async fn insert(&self, id: String, receipt: Receipt) -> Result<()>;
    async fn get(&self, id: &str) -> Result<Option<Receipt>>;
}

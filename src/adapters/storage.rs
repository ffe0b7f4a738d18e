use crate::core::{Receipt, ReceiptStore};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Process-local receipt map. Contents are lost on restart.
#[derive(Debug, Clone, Default)]
pub struct InMemoryReceiptStore {
    receipts: Arc<RwLock<HashMap<String, Receipt>>>,
}

impl InMemoryReceiptStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReceiptStore for InMemoryReceiptStore {
    async fn insert(&self, id: String, receipt: Receipt) -> Result<()> {
        self.receipts.write().await.insert(id, receipt);
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<Receipt>> {
        Ok(self.receipts.read().await.get(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_and_get() {
        let store = InMemoryReceiptStore::new();
        let receipt = Receipt {
            retailer: "Target".to_string(),
            ..Receipt::default()
        };

        store.insert("abc".to_string(), receipt.clone()).await.unwrap();

        assert_eq!(store.get("abc").await.unwrap(), Some(receipt));
        assert_eq!(store.get("xyz").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_clones_share_contents() {
        let store = InMemoryReceiptStore::new();
        let handle = store.clone();

        handle.insert("abc".to_string(), Receipt::default()).await.unwrap();

        assert!(store.get("abc").await.unwrap().is_some());
    }
}

use crate::core::points::ScoreCalculator;
use crate::core::{Receipt, ReceiptStore};
use crate::domain::model::Points;
use crate::utils::error::{ReceiptError, Result};
use std::io::Read;
use uuid::Uuid;

/// Path that `score_file` treats as standard input.
pub const STDIN_PATH: &str = "-";

/// Ties id generation, storage and scoring together.
pub struct ReceiptService<S: ReceiptStore> {
    store: S,
}

impl<S: ReceiptStore> ReceiptService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Stores the receipt under a fresh UUID v4 and returns the id.
    pub async fn process(&self, receipt: Receipt) -> Result<String> {
        let id = Uuid::new_v4().to_string();
        tracing::debug!(
            retailer = %receipt.retailer,
            items = receipt.items.len(),
            "Storing receipt"
        );
        self.store.insert(id.clone(), receipt).await?;
        tracing::info!(%id, "Receipt processed");
        Ok(id)
    }

    pub async fn points(&self, id: &str) -> Result<i64> {
        let receipt = self.store.get(id).await?.ok_or_else(|| {
            tracing::warn!(%id, "Receipt not found");
            ReceiptError::not_found(id)
        })?;

        let points = ScoreCalculator::score(&receipt);
        tracing::debug!(%id, points, "Receipt scored");
        Ok(points)
    }
}

/// Scores a receipt JSON document read from `reader`.
pub fn score_reader<R: Read>(mut reader: R) -> Result<Points> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;

    let receipt: Receipt =
        serde_json::from_str(&content).map_err(|e| ReceiptError::InvalidReceipt {
            message: e.to_string(),
        })?;

    Ok(Points {
        points: ScoreCalculator::score(&receipt),
    })
}

/// Scores a receipt JSON file, or standard input when `path` is `-`.
pub fn score_file(path: &str) -> Result<Points> {
    tracing::debug!(%path, "Scoring receipt file");
    if path == STDIN_PATH {
        score_reader(std::io::stdin().lock())
    } else {
        score_reader(std::fs::File::open(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryReceiptStore;
    use crate::domain::model::LineItem;

    fn morning_receipt() -> Receipt {
        Receipt {
            retailer: "Walgreens".to_string(),
            purchase_date: "2022-01-02".to_string(),
            purchase_time: "08:13".to_string(),
            total: "2.65".to_string(),
            items: vec![
                LineItem::new("Pepsi - 12-oz", "1.25"),
                LineItem::new("Dasani", "1.40"),
            ],
        }
    }

    #[tokio::test]
    async fn test_process_then_points() {
        let service = ReceiptService::new(InMemoryReceiptStore::new());

        let id = service.process(morning_receipt()).await.unwrap();
        assert!(Uuid::parse_str(&id).is_ok());
        assert_eq!(service.points(&id).await.unwrap(), 15);
    }

    #[tokio::test]
    async fn test_each_receipt_gets_its_own_id() {
        let service = ReceiptService::new(InMemoryReceiptStore::new());

        let first = service.process(morning_receipt()).await.unwrap();
        let second = service.process(morning_receipt()).await.unwrap();
        assert_ne!(first, second);
        assert_eq!(service.points(&first).await.unwrap(), 15);
        assert_eq!(service.points(&second).await.unwrap(), 15);
    }

    #[test]
    fn test_score_reader_parses_json() {
        let json = br#"{"retailer": "Target", "total": "1.25"}"#;
        let points = score_reader(&json[..]).unwrap();
        assert_eq!(points, Points { points: 31 });
    }

    #[test]
    fn test_score_reader_rejects_bad_json() {
        let err = score_reader(&b"{not json"[..]).unwrap_err();
        assert!(matches!(err, ReceiptError::InvalidReceipt { .. }));
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let service = ReceiptService::new(InMemoryReceiptStore::new());

        let err = service.points("missing").await.unwrap_err();
        assert!(matches!(err, ReceiptError::NotFound { ref id } if id == "missing"));
    }
}

use anyhow::Result;
use receipt_points::core::service::{score_file, score_reader};
use receipt_points::{Points, ReceiptError};
use tempfile::TempDir;

const MORNING_RECEIPT: &str = r#"{
    "retailer": "Walgreens",
    "purchaseDate": "2022-01-02",
    "purchaseTime": "08:13",
    "total": "2.65",
    "items": [
        {"shortDescription": "Pepsi - 12-oz", "price": "1.25"},
        {"shortDescription": "Dasani", "price": "1.40"}
    ]
}"#;

#[tokio::test]
async fn test_score_file_from_disk() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let receipt_path = temp_dir.path().join("morning-receipt.json");
    tokio::fs::write(&receipt_path, MORNING_RECEIPT).await?;

    let points = score_file(receipt_path.to_str().unwrap())?;

    assert_eq!(points, Points { points: 15 });
    Ok(())
}

#[tokio::test]
async fn test_score_file_rejects_bad_json() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let receipt_path = temp_dir.path().join("broken.json");
    tokio::fs::write(&receipt_path, "{\"retailer\": ").await?;

    let err = score_file(receipt_path.to_str().unwrap()).unwrap_err();

    assert!(matches!(err, ReceiptError::InvalidReceipt { .. }));
    Ok(())
}

#[test]
fn test_score_file_missing_path_is_io_error() {
    let err = score_file("/nonexistent/receipt.json").unwrap_err();
    assert!(matches!(err, ReceiptError::IoError(_)));
}

#[test]
fn test_score_reader_matches_stdin_input() -> Result<()> {
    // `-` routes standard input through the same reader path.
    let points = score_reader(MORNING_RECEIPT.as_bytes())?;
    assert_eq!(points.points, 15);
    Ok(())
}

//! Reward points for a receipt.
//!
//! The score is the sum of seven independent rules. A rule that cannot read
//! the fields it needs contributes nothing; scoring never fails.

use crate::domain::model::{LineItem, Receipt};

const ROUND_TOTAL_POINTS: i64 = 50;
const QUARTER_TOTAL_POINTS: i64 = 25;
const POINTS_PER_ITEM_PAIR: i64 = 5;
const DESCRIPTION_PRICE_MULTIPLIER: f64 = 0.2;
const ODD_DAY_POINTS: i64 = 6;
const AFTERNOON_POINTS: i64 = 10;
const AFTERNOON_START_HOUR: u32 = 14;
const AFTERNOON_END_HOUR: u32 = 16;

/// Index of the last day digit in a `YYYY-MM-DD` date.
const DAY_DIGIT_INDEX: usize = 9;
/// Index of the tens-of-minutes digit in an `HH:MM` time.
const MINUTE_TENS_INDEX: usize = 3;

pub struct ScoreCalculator;

impl ScoreCalculator {
    pub fn score(receipt: &Receipt) -> i64 {
        [
            retailer_points(&receipt.retailer),
            round_total_points(&receipt.total),
            quarter_total_points(&receipt.total),
            item_pair_points(&receipt.items),
            description_points(&receipt.items),
            purchase_day_points(&receipt.purchase_date),
            purchase_time_points(&receipt.purchase_time),
        ]
        .into_iter()
        .fold(0i64, i64::saturating_add)
    }
}

/// Amounts are read at single precision, then widened.
fn parse_amount(text: &str) -> Option<f64> {
    let value = f64::from(text.parse::<f32>().ok()?);
    value.is_finite().then_some(value)
}

fn digit_at(text: &str, index: usize) -> Option<u32> {
    text.as_bytes()
        .get(index)
        .and_then(|byte| char::from(*byte).to_digit(10))
}

pub fn retailer_points(retailer: &str) -> i64 {
    retailer.bytes().filter(u8::is_ascii_alphanumeric).count() as i64
}

pub fn round_total_points(total: &str) -> i64 {
    match parse_amount(total) {
        Some(value) if value % 1.0 == 0.0 => ROUND_TOTAL_POINTS,
        _ => 0,
    }
}

pub fn quarter_total_points(total: &str) -> i64 {
    match parse_amount(total) {
        Some(value) if value % 0.25 == 0.0 => QUARTER_TOTAL_POINTS,
        _ => 0,
    }
}

pub fn item_pair_points(items: &[LineItem]) -> i64 {
    (items.len() / 2) as i64 * POINTS_PER_ITEM_PAIR
}

pub fn description_points(items: &[LineItem]) -> i64 {
    items
        .iter()
        .filter(|item| item.short_description.trim().len() % 3 == 0)
        .filter_map(|item| parse_amount(&item.price))
        // `as` saturates at the i64 bounds; keep the running total there too.
        .map(|price| (price * DESCRIPTION_PRICE_MULTIPLIER).ceil() as i64)
        .fold(0i64, i64::saturating_add)
}

/// Only the last digit of the day is consulted.
pub fn purchase_day_points(purchase_date: &str) -> i64 {
    match digit_at(purchase_date, DAY_DIGIT_INDEX) {
        Some(digit) if digit % 2 == 1 => ODD_DAY_POINTS,
        _ => 0,
    }
}

#[allow(clippy::if_same_then_else)]
pub fn purchase_time_points(purchase_time: &str) -> i64 {
    let hour = match (digit_at(purchase_time, 0), digit_at(purchase_time, 1)) {
        (Some(tens), Some(ones)) => tens * 10 + ones,
        _ => return 0,
    };
    let minute_tens = match digit_at(purchase_time, MINUTE_TENS_INDEX) {
        Some(digit) => digit,
        None => return 0,
    };

    if !(AFTERNOON_START_HOUR..AFTERNOON_END_HOUR).contains(&hour) {
        return 0;
    }
    // The minute digit splits the window but both halves score the same.
    if hour == AFTERNOON_START_HOUR && minute_tens != 0 {
        AFTERNOON_POINTS
    } else {
        AFTERNOON_POINTS
    }
}

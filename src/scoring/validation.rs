use chrono::{NaiveDate, NaiveTime};
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

use crate::receipt::{Cents, Receipt};

static DATE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date pattern is valid"));
static TIME_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}:[0-9]{2}$").expect("time pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("invalid format for field {field}: {value:?}")]
    InvalidFormat { field: String, value: String },
}

impl ValidationError {
    fn missing(field: impl Into<String>) -> Self {
        ValidationError::MissingField(field.into())
    }

    fn invalid(field: impl Into<String>, value: &str) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            value: value.to_string(),
        }
    }

    /// Name of the offending field, e.g. `items[3].price`
    pub fn field(&self) -> &str {
        match self {
            ValidationError::MissingField(field) => field,
            ValidationError::InvalidFormat { field, .. } => field,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidItem<'a> {
    pub short_description: &'a str,
    pub price: Cents,
}

/// A receipt that passed validation, with its date, time and amounts parsed.
///
/// Scoring only accepts this type, so the engine never sees a value it
/// cannot interpret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidReceipt<'a> {
    pub retailer: &'a str,
    pub purchase_date: NaiveDate,
    pub purchase_time: NaiveTime,
    pub items: Vec<ValidItem<'a>>,
    pub total: Cents,
}

/// Validate a submitted receipt.
/// Stops at the first problem found (unlike config validation, nothing is accumulated).
pub fn validate_receipt(receipt: &Receipt) -> Result<ValidReceipt<'_>, ValidationError> {
    for (field, value) in [
        ("retailer", &receipt.retailer),
        ("purchaseDate", &receipt.purchase_date),
        ("purchaseTime", &receipt.purchase_time),
        ("total", &receipt.total),
    ] {
        if value.is_empty() {
            return Err(ValidationError::missing(field));
        }
    }
    if receipt.items.is_empty() {
        return Err(ValidationError::missing("items"));
    }

    let purchase_date = parse_date(&receipt.purchase_date)
        .ok_or_else(|| ValidationError::invalid("purchaseDate", &receipt.purchase_date))?;
    let purchase_time = parse_time(&receipt.purchase_time)
        .ok_or_else(|| ValidationError::invalid("purchaseTime", &receipt.purchase_time))?;
    let total = Cents::parse(&receipt.total)
        .map_err(|_| ValidationError::invalid("total", &receipt.total))?;

    let mut items = Vec::with_capacity(receipt.items.len());
    for (i, item) in receipt.items.iter().enumerate() {
        if item.short_description.is_empty() {
            return Err(ValidationError::missing(format!("items[{}].shortDescription", i)));
        }
        if item.price.is_empty() {
            return Err(ValidationError::missing(format!("items[{}].price", i)));
        }
        let price = Cents::parse(&item.price)
            .map_err(|_| ValidationError::invalid(format!("items[{}].price", i), &item.price))?;
        items.push(ValidItem {
            short_description: &item.short_description,
            price,
        });
    }

    Ok(ValidReceipt {
        retailer: &receipt.retailer,
        purchase_date,
        purchase_time,
        items,
        total,
    })
}

/// Parse `YYYY-MM-DD`, rejecting impossible dates like 2022-02-30
fn parse_date(s: &str) -> Option<NaiveDate> {
    if !DATE_SHAPE.is_match(s) {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Parse 24-hour `HH:MM`
fn parse_time(s: &str) -> Option<NaiveTime> {
    if !TIME_SHAPE.is_match(s) {
        return None;
    }
    NaiveTime::parse_from_str(s, "%H:%M").ok()
}

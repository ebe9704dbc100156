use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use unicode_general_category::{get_general_category, GeneralCategory};

use super::validation::ValidItem;
use crate::receipt::Cents;

pub const ROUND_DOLLAR_POINTS: u64 = 50;
pub const QUARTER_MULTIPLE_POINTS: u64 = 25;
pub const POINTS_PER_ITEM_PAIR: u64 = 5;
pub const ODD_DAY_POINTS: u64 = 6;
pub const AFTERNOON_POINTS: u64 = 10;

/// Item price is multiplied by 0.2: in cents that is `ceil(cents / 500)`
const DESCRIPTION_PRICE_DIVISOR: u64 = 500;
const QUARTER_CENTS: u64 = 25;

/// Afternoon window in minutes since midnight, both ends exclusive (14:00, 16:00)
const AFTERNOON_START: u32 = 14 * 60;
const AFTERNOON_END: u32 = 16 * 60;

/// The fixed set of scoring rules, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    RetailerName,
    RoundDollar,
    QuarterMultiple,
    ItemPairs,
    ItemDescription,
    OddDay,
    AfternoonWindow,
}

impl Rule {
    pub fn label(&self) -> &'static str {
        match self {
            Rule::RetailerName => "Retailer name",
            Rule::RoundDollar => "Round dollar total",
            Rule::QuarterMultiple => "Total multiple of 0.25",
            Rule::ItemPairs => "Item pairs",
            Rule::ItemDescription => "Item description",
            Rule::OddDay => "Odd purchase day",
            Rule::AfternoonWindow => "Afternoon purchase",
        }
    }
}

/// One point per Unicode letter or digit
pub fn retailer_points(retailer: &str) -> u64 {
    retailer.chars().filter(|&c| is_letter_or_digit(c)).count() as u64
}

/// Any `L*` general category, or `Nd`. Letter numbers (`Ⅳ`) and other
/// numbers (`²`) do not count.
fn is_letter_or_digit(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::DecimalNumber
    )
}

pub fn round_dollar_points(total: Cents) -> u64 {
    if total.is_whole_dollar() {
        ROUND_DOLLAR_POINTS
    } else {
        0
    }
}

pub fn quarter_multiple_points(total: Cents) -> u64 {
    if total.is_multiple_of(QUARTER_CENTS) {
        QUARTER_MULTIPLE_POINTS
    } else {
        0
    }
}

pub fn item_pair_points(item_count: usize) -> u64 {
    (item_count / 2) as u64 * POINTS_PER_ITEM_PAIR
}

/// Points for one item, or `None` when its trimmed description length
/// is zero or not a multiple of three.
///
/// Length is the UTF-8 byte length, so `"Éa"` has length 3.
pub fn item_description_points(item: &ValidItem<'_>) -> Option<u64> {
    let len = item.short_description.trim().len();
    if len == 0 || len % 3 != 0 {
        return None;
    }
    Some(item.price.div_ceil(DESCRIPTION_PRICE_DIVISOR))
}

pub fn odd_day_points(date: NaiveDate) -> u64 {
    if date.day() % 2 == 1 {
        ODD_DAY_POINTS
    } else {
        0
    }
}

pub fn afternoon_points(time: NaiveTime) -> u64 {
    let minutes = time.hour() * 60 + time.minute();
    if minutes > AFTERNOON_START && minutes < AFTERNOON_END {
        AFTERNOON_POINTS
    } else {
        0
    }
}

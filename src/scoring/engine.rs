use super::rules::{self, Rule};
use super::validation::ValidReceipt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleContribution {
    pub rule: Rule,
    pub description: String, // e.g. "6 alphanumeric characters", "'Emils Cheese Pizza' at 12.25"
    pub points: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointsResult {
    pub points: u64,
    pub breakdown: Vec<RuleContribution>,
}

impl PointsResult {
    /// Sum of all contributions awarded by `rule`
    pub fn points_for(&self, rule: Rule) -> u64 {
        self.breakdown
            .iter()
            .filter(|c| c.rule == rule)
            .fold(0u64, |acc, c| acc.saturating_add(c.points))
    }
}

/// Score a validated receipt.
///
/// Every rule reads the receipt as submitted; no rule depends on another's
/// result. Only rules that award points show up in the breakdown.
pub fn calculate_points(receipt: &ValidReceipt<'_>) -> PointsResult {
    let mut breakdown = Vec::new();
    let mut award = |rule: Rule, points: u64, description: String| {
        if points > 0 {
            breakdown.push(RuleContribution {
                rule,
                description,
                points,
            });
        }
    };

    let retailer = rules::retailer_points(receipt.retailer);
    award(
        Rule::RetailerName,
        retailer,
        format!("{} alphanumeric characters", retailer),
    );

    award(
        Rule::RoundDollar,
        rules::round_dollar_points(receipt.total),
        format!("total {} has no cents", receipt.total),
    );

    award(
        Rule::QuarterMultiple,
        rules::quarter_multiple_points(receipt.total),
        format!("total {} is a multiple of 0.25", receipt.total),
    );

    award(
        Rule::ItemPairs,
        rules::item_pair_points(receipt.items.len()),
        format!("{} items", receipt.items.len()),
    );

    for item in &receipt.items {
        if let Some(points) = rules::item_description_points(item) {
            award(
                Rule::ItemDescription,
                points,
                format!("'{}' at {}", item.short_description.trim(), item.price),
            );
        }
    }

    award(
        Rule::OddDay,
        rules::odd_day_points(receipt.purchase_date),
        format!("purchased on {}", receipt.purchase_date),
    );

    award(
        Rule::AfternoonWindow,
        rules::afternoon_points(receipt.purchase_time),
        format!("purchased at {}", receipt.purchase_time.format("%H:%M")),
    );

    let points = breakdown
        .iter()
        .fold(0u64, |acc, c| acc.saturating_add(c.points));

    PointsResult { points, breakdown }
}

//! Chart series for the income breakdown.
//!
//! Savings are clamped at zero here and only here: a pie slice or bar
//! cannot be negative, but the projection and exported figures keep the
//! real (possibly negative) value.

use chrono::Month;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::ProjectionResult;

/// One slice of the pie chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSlice {
    /// Slice label.
    pub label: String,
    /// Slice value, never negative.
    pub value: Decimal,
}

/// One data series of the bar chart, one value per month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// Series label.
    pub label: String,
    /// Twelve values, January to December.
    pub values: Vec<Decimal>,
}

/// Data for the income pie chart and the twelve-month bar chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartData {
    /// Monthly income, living cost and savings.
    pub pie: Vec<ChartSlice>,
    /// Month labels for the bar chart.
    pub months: Vec<String>,
    /// Monthly income, living cost and savings for each month.
    pub bars: Vec<ChartSeries>,
}

const INCOME_LABEL: &str = "Monthly income";
const LIVING_COST_LABEL: &str = "Living cost";
const SAVINGS_LABEL: &str = "Savings";

impl ChartData {
    /// Builds chart data from a projection.
    ///
    /// # Example
    ///
    /// ```
    /// use earnings_estimator::calculation::compute_session_projection;
    /// use earnings_estimator::models::SessionInputs;
    /// use earnings_estimator::report::ChartData;
    /// use rust_decimal::Decimal;
    ///
    /// let inputs = SessionInputs {
    ///     price_per_session: Decimal::from(5000),
    ///     sessions_per_day: Decimal::from(1),
    ///     days_per_week: Decimal::from(2),
    ///     living_cost: Decimal::from(100000),
    /// };
    /// let projection = compute_session_projection(&inputs);
    /// let chart = ChartData::from_projection(&projection, inputs.living_cost);
    ///
    /// assert!(projection.savings_amount < Decimal::ZERO);
    /// assert_eq!(chart.pie[2].value, Decimal::ZERO);
    /// ```
    pub fn from_projection(projection: &ProjectionResult, living_cost: Decimal) -> Self {
        let savings = projection.savings_amount.max(Decimal::ZERO);
        let values = [
            (INCOME_LABEL, projection.monthly_total),
            (LIVING_COST_LABEL, living_cost),
            (SAVINGS_LABEL, savings),
        ];

        let months = (1..=12u8)
            .filter_map(|n| Month::try_from(n).ok())
            .map(|month| month.name()[..3].to_string())
            .collect::<Vec<_>>();

        Self {
            pie: values
                .iter()
                .map(|(label, value)| ChartSlice {
                    label: label.to_string(),
                    value: *value,
                })
                .collect(),
            bars: values
                .iter()
                .map(|(label, value)| ChartSeries {
                    label: label.to_string(),
                    values: vec![*value; months.len()],
                })
                .collect(),
            months,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::compute_session_projection;
    use crate::models::SessionInputs;

    fn projection(living_cost: i64) -> ProjectionResult {
        compute_session_projection(&SessionInputs {
            price_per_session: Decimal::from(10000),
            sessions_per_day: Decimal::from(3),
            days_per_week: Decimal::from(5),
            living_cost: Decimal::from(living_cost),
        })
    }

    #[test]
    fn test_pie_has_income_cost_and_savings() {
        let chart = ChartData::from_projection(&projection(150000), Decimal::from(150000));

        let labels: Vec<&str> = chart.pie.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["Monthly income", "Living cost", "Savings"]);
        assert_eq!(chart.pie[0].value, Decimal::from(649500));
        assert_eq!(chart.pie[1].value, Decimal::from(150000));
        assert_eq!(chart.pie[2].value, Decimal::from(499500));
    }

    #[test]
    fn test_negative_savings_clamped_for_display_only() {
        let projection = projection(1_000_000);
        let chart = ChartData::from_projection(&projection, Decimal::from(1_000_000));

        assert_eq!(chart.pie[2].value, Decimal::ZERO);
        assert!(chart.bars[2].values.iter().all(|v| v.is_zero()));
        assert_eq!(projection.savings_amount, Decimal::from(-350500));
    }

    #[test]
    fn test_bars_cover_twelve_months() {
        let chart = ChartData::from_projection(&projection(150000), Decimal::from(150000));

        assert_eq!(chart.months.len(), 12);
        assert_eq!(chart.months[0], "Jan");
        assert_eq!(chart.months[11], "Dec");
        assert_eq!(chart.bars.len(), 3);
        for series in &chart.bars {
            assert_eq!(series.values.len(), 12);
        }
        assert_eq!(chart.bars[0].values[6], Decimal::from(649500));
    }
}

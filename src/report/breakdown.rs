//! The short breakdown shown next to the results.

use serde::{Deserialize, Serialize};

use crate::models::{HourlyInputs, ProjectionResult, SessionInputs};

use super::currency::{CurrencyFormatter, format_number};
use super::export::{ReportRow, approximately, with_unit};

/// Five lines summarizing how the monthly figure was reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakdown {
    /// Rows in display order.
    pub rows: Vec<ReportRow>,
}

impl Breakdown {
    /// Breakdown for a per-session projection.
    pub fn session(
        inputs: &SessionInputs,
        projection: &ProjectionResult,
        formatter: &CurrencyFormatter,
    ) -> Self {
        let sessions = projection.monthly_total_sessions.unwrap_or_default();
        Self {
            rows: vec![
                ReportRow::new("Unit price", formatter.format(inputs.price_per_session)),
                ReportRow::new(
                    "Per day",
                    with_unit(inputs.sessions_per_day, "session", "sessions"),
                ),
                ReportRow::new(
                    "Days per week",
                    with_unit(inputs.days_per_week, "day", "days"),
                ),
                ReportRow::new(
                    "Days per month",
                    approximately(projection.monthly_work_days, "day", "days"),
                ),
                ReportRow::new(
                    "Sessions per month",
                    approximately(sessions, "session", "sessions"),
                ),
            ],
        }
    }

    /// Breakdown for an hourly projection.
    pub fn hourly(
        inputs: &HourlyInputs,
        projection: &ProjectionResult,
        formatter: &CurrencyFormatter,
    ) -> Self {
        let hourly_rate = formatter.format(inputs.hourly_rate);
        Self {
            rows: vec![
                ReportRow::new("Unit price", hourly_rate.clone()),
                ReportRow::new(
                    "Per day",
                    format!(
                        "{} + {} waiting",
                        with_unit(inputs.work_hours, "hour", "hours"),
                        format_number(inputs.waiting_hours)
                    ),
                ),
                ReportRow::new(
                    "Days per week",
                    with_unit(inputs.days_per_week, "day", "days"),
                ),
                ReportRow::new(
                    "Days per month",
                    approximately(projection.monthly_work_days, "day", "days"),
                ),
                ReportRow::new("Rate", format!("hourly {hourly_rate}")),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::{compute_hourly_projection, compute_session_projection};
    use rust_decimal::Decimal;

    #[test]
    fn test_session_breakdown() {
        let inputs = SessionInputs {
            price_per_session: Decimal::from(10000),
            sessions_per_day: Decimal::from(3),
            days_per_week: Decimal::from(5),
            living_cost: Decimal::from(150000),
        };
        let projection = compute_session_projection(&inputs);
        let breakdown = Breakdown::session(&inputs, &projection, &CurrencyFormatter::default());

        let values: Vec<&str> = breakdown.rows.iter().map(|r| r.value.as_str()).collect();
        assert_eq!(
            values,
            vec![
                "¥10,000",
                "3 sessions",
                "5 days",
                "about 22 days",
                "about 66 sessions"
            ]
        );
    }

    #[test]
    fn test_hourly_breakdown() {
        let inputs = HourlyInputs {
            hourly_rate: Decimal::from(2000),
            work_hours: Decimal::from(5),
            waiting_hours: Decimal::from(3),
            days_per_week: Decimal::from(4),
            living_cost: Decimal::ZERO,
        };
        let projection = compute_hourly_projection(&inputs);
        let breakdown = Breakdown::hourly(&inputs, &projection, &CurrencyFormatter::default());

        assert_eq!(breakdown.rows[1].value, "5 hours + 3 waiting");
        assert_eq!(breakdown.rows[3].value, "about 17 days");
        assert_eq!(breakdown.rows[4].value, "hourly ¥2,000");
    }
}

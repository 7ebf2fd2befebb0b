//! Export reports.
//!
//! An [`ExportReport`] echoes the inputs of the selected mode next to the
//! calculated figures, already formatted with currency symbols and units.
//! It can be rendered as plain text or serialized as JSON.

use chrono::{Local, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{
    CalculationMode, CalculationOutcome, DaysRequirement, GoalResult, InputSnapshot,
    ProjectionResult,
};

use super::currency::{CurrencyFormatter, format_number};

/// Title printed at the top of every report.
pub const REPORT_TITLE: &str = "Earnings Simulation Results";

/// Note printed at the end of every report.
pub const DISCLAIMER: &str = "These figures are estimates only. \
Actual income varies with working conditions and venue policies.";

/// A label and its formatted value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    /// Row label.
    pub label: String,
    /// Formatted value including its unit.
    pub value: String,
}

impl ReportRow {
    /// Creates a row.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// A titled group of rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSection {
    /// Section heading.
    pub title: String,
    /// Rows in display order.
    pub rows: Vec<ReportRow>,
}

impl ReportSection {
    fn new(title: &str, rows: Vec<ReportRow>) -> Self {
        Self {
            title: title.to_string(),
            rows,
        }
    }

    /// Finds a row by label.
    pub fn row(&self, label: &str) -> Option<&ReportRow> {
        self.rows.iter().find(|row| row.label == label)
    }
}

/// A complete, formatted export of one calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportReport {
    /// Unique identifier for this report.
    pub report_id: Uuid,
    /// The date the report was generated.
    pub generated_on: NaiveDate,
    /// Report title.
    pub title: String,
    /// The mode the figures were calculated in.
    pub mode: CalculationMode,
    /// Inputs, results and details.
    pub sections: Vec<ReportSection>,
    /// Closing note.
    pub disclaimer: String,
}

/// Formats a quantity with a singular or plural unit ("1 day", "2.5 days").
pub fn with_unit(value: Decimal, singular: &str, plural: &str) -> String {
    let unit = if value == Decimal::ONE { singular } else { plural };
    format!("{} {}", format_number(value), unit)
}

/// Formats a rounded quantity as an approximation ("about 22 days").
pub fn approximately(value: Decimal, singular: &str, plural: &str) -> String {
    format!("about {}", with_unit(value, singular, plural))
}

impl ExportReport {
    /// Builds a report dated today.
    pub fn build(
        mode: CalculationMode,
        snapshot: &InputSnapshot,
        outcome: &CalculationOutcome,
        formatter: &CurrencyFormatter,
    ) -> Self {
        Self::build_on(Local::now().date_naive(), mode, snapshot, outcome, formatter)
    }

    /// Builds a report with an explicit generation date.
    pub fn build_on(
        generated_on: NaiveDate,
        mode: CalculationMode,
        snapshot: &InputSnapshot,
        outcome: &CalculationOutcome,
        formatter: &CurrencyFormatter,
    ) -> Self {
        let mut sections = vec![input_section(mode, snapshot, formatter)];

        match outcome {
            CalculationOutcome::Projection(projection) => {
                let living_cost = snapshot.living_cost(mode);
                sections.push(earnings_section(projection, formatter));
                sections.push(savings_section(projection, living_cost, formatter));
                sections.push(details_section(mode, projection, formatter));
            }
            CalculationOutcome::Goal(goal) => {
                sections.push(goal_section(goal, formatter));
            }
        }

        Self {
            report_id: Uuid::new_v4(),
            generated_on,
            title: REPORT_TITLE.to_string(),
            mode,
            sections,
            disclaimer: DISCLAIMER.to_string(),
        }
    }

    /// Finds a section by title.
    pub fn section(&self, title: &str) -> Option<&ReportSection> {
        self.sections.iter().find(|section| section.title == title)
    }

    /// Renders the report as aligned plain text.
    pub fn render_text(&self) -> String {
        let width = self
            .sections
            .iter()
            .flat_map(|section| section.rows.iter())
            .map(|row| row.label.chars().count())
            .max()
            .unwrap_or(0);

        let mut out = String::new();
        out.push_str(&self.title);
        out.push('\n');
        out.push_str(&format!("Generated: {}\n", self.generated_on));

        for section in &self.sections {
            out.push_str(&format!("\n[{}]\n", section.title));
            for row in &section.rows {
                out.push_str(&format!("  {:<width$}  {}\n", row.label, row.value));
            }
        }

        out.push('\n');
        out.push_str(&self.disclaimer);
        out.push('\n');
        out
    }

    /// Serializes the report as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn input_section(
    mode: CalculationMode,
    snapshot: &InputSnapshot,
    formatter: &CurrencyFormatter,
) -> ReportSection {
    let mut rows = vec![ReportRow::new("Calculation method", mode.label())];

    match mode {
        CalculationMode::Session => {
            let inputs = &snapshot.session;
            rows.push(ReportRow::new(
                "Price per session",
                formatter.format_exact(inputs.price_per_session),
            ));
            rows.push(ReportRow::new(
                "Sessions per day",
                with_unit(inputs.sessions_per_day, "session", "sessions"),
            ));
            rows.push(ReportRow::new(
                "Working days per week",
                with_unit(inputs.days_per_week, "day", "days"),
            ));
        }
        CalculationMode::Hourly => {
            let inputs = &snapshot.hourly;
            rows.push(ReportRow::new(
                "Hourly rate",
                formatter.format_exact(inputs.hourly_rate),
            ));
            rows.push(ReportRow::new(
                "Work hours",
                with_unit(inputs.work_hours, "hour", "hours"),
            ));
            rows.push(ReportRow::new(
                "Waiting hours",
                with_unit(inputs.waiting_hours, "hour", "hours"),
            ));
            rows.push(ReportRow::new(
                "Working days per week",
                with_unit(inputs.days_per_week, "day", "days"),
            ));
        }
        CalculationMode::Goal => {
            let inputs = &snapshot.goal;
            rows.push(ReportRow::new(
                "Savings goal",
                formatter.format_exact(inputs.goal_amount),
            ));
            rows.push(ReportRow::new(
                "Timeframe",
                with_unit(Decimal::from(inputs.goal_months), "month", "months"),
            ));
            rows.push(ReportRow::new(
                "Price per session",
                formatter.format_exact(inputs.price_per_session),
            ));
            rows.push(ReportRow::new(
                "Sessions per day",
                with_unit(inputs.sessions_per_day, "session", "sessions"),
            ));
        }
    }

    rows.push(ReportRow::new(
        "Monthly living cost",
        formatter.format_exact(snapshot.living_cost(mode)),
    ));

    ReportSection::new("Inputs", rows)
}

fn earnings_section(projection: &ProjectionResult, formatter: &CurrencyFormatter) -> ReportSection {
    ReportSection::new(
        "Earnings",
        vec![
            ReportRow::new("Daily earnings", formatter.format(projection.daily_earnings)),
            ReportRow::new("Weekly earnings", formatter.format(projection.weekly_earnings)),
            ReportRow::new("Monthly base", formatter.format(projection.monthly_base)),
            ReportRow::new("Monthly income", formatter.format(projection.monthly_total)),
            ReportRow::new("Yearly projection", formatter.format(projection.yearly_earnings)),
        ],
    )
}

fn savings_section(
    projection: &ProjectionResult,
    living_cost: Decimal,
    formatter: &CurrencyFormatter,
) -> ReportSection {
    ReportSection::new(
        "Savings & living costs",
        vec![
            ReportRow::new("Monthly living cost", formatter.format_exact(living_cost)),
            ReportRow::new("Monthly savings", formatter.format(projection.savings_amount)),
            ReportRow::new("Yearly savings", formatter.format(projection.yearly_savings)),
        ],
    )
}

fn details_section(
    mode: CalculationMode,
    projection: &ProjectionResult,
    formatter: &CurrencyFormatter,
) -> ReportSection {
    let mut rows = vec![ReportRow::new(
        "Working days per month",
        approximately(projection.monthly_work_days, "day", "days"),
    )];

    if mode == CalculationMode::Session {
        if let Some(sessions) = projection.monthly_total_sessions.filter(|s| !s.is_zero()) {
            rows.push(ReportRow::new(
                "Sessions per month",
                approximately(sessions, "session", "sessions"),
            ));
        }
    }

    if let Some(pay) = &projection.hourly_pay {
        rows.push(ReportRow::new("Work pay per day", formatter.format(pay.work_pay)));
        rows.push(ReportRow::new(
            "Waiting pay per day",
            formatter.format(pay.waiting_pay),
        ));
    }

    ReportSection::new("Details", rows)
}

fn goal_section(goal: &GoalResult, formatter: &CurrencyFormatter) -> ReportSection {
    let amount = |value: Option<Decimal>| match value {
        Some(value) => formatter.format(value),
        None => "n/a".to_string(),
    };

    let mut rows = vec![
        ReportRow::new(
            "Required monthly savings",
            amount(goal.required_monthly_savings),
        ),
        ReportRow::new(
            "Required monthly income",
            amount(goal.required_monthly_income),
        ),
        ReportRow::new("Daily income", formatter.format(goal.daily_income)),
    ];

    match &goal.required_days {
        DaysRequirement::Attainable {
            per_week,
            per_month,
        } => {
            let per_week = per_week.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            rows.push(ReportRow::new(
                "Required days per week",
                with_unit(per_week, "day", "days"),
            ));
            rows.push(ReportRow::new(
                "Required days per month",
                with_unit(*per_month, "day", "days"),
            ));
        }
        DaysRequirement::Unattainable { reason } => {
            rows.push(ReportRow::new("Required days per week", "unattainable"));
            rows.push(ReportRow::new("Required days per month", "unattainable"));
            rows.push(ReportRow::new("Status", reason.message()));
        }
    }

    rows.push(ReportRow::new(
        "Projected yearly income",
        amount(goal.projected_yearly_income),
    ));

    ReportSection::new("Goal requirement", rows)
}

//! Raw form payloads.
//!
//! A form arrives as loosely typed JSON: every field is optional and may be
//! a string, a number, or something else entirely. Decoding the JSON is the
//! only step that can fail; turning the fields into calculator inputs never
//! does.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{EstimatorError, EstimatorResult};
use crate::models::{CalculationMode, GoalInputs, HourlyInputs, InputSnapshot, SessionInputs};

use super::parse::{parse_amount, parse_count, parse_days, parse_months};

/// The raw text of every input field.
///
/// Field names follow the form's element identifiers. Living cost is a
/// single field shared by all modes; goal mode reuses the per-session price
/// and count fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawForm {
    /// Price per session.
    #[serde(default, deserialize_with = "lenient_text")]
    pub price_per_session: Option<String>,
    /// Sessions per day.
    #[serde(default, deserialize_with = "lenient_text")]
    pub sessions_per_day: Option<String>,
    /// Working days per week for session mode.
    #[serde(default, deserialize_with = "lenient_text")]
    pub days_per_week: Option<String>,
    /// Hourly rate.
    #[serde(default, deserialize_with = "lenient_text")]
    pub hourly_rate: Option<String>,
    /// Active work hours per day.
    #[serde(default, deserialize_with = "lenient_text")]
    pub work_hours: Option<String>,
    /// Waiting hours per day.
    #[serde(default, deserialize_with = "lenient_text")]
    pub waiting_hours: Option<String>,
    /// Working days per week for hourly mode.
    #[serde(default, deserialize_with = "lenient_text")]
    pub days_per_week_hourly: Option<String>,
    /// Monthly living cost.
    #[serde(default, deserialize_with = "lenient_text")]
    pub living_cost: Option<String>,
    /// Savings goal amount.
    #[serde(default, deserialize_with = "lenient_text")]
    pub goal_amount: Option<String>,
    /// Savings goal timeframe in months.
    #[serde(default, deserialize_with = "lenient_text")]
    pub goal_months: Option<String>,
}

/// Accepts a string or a number; anything else reads as an empty field.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }))
}

fn field(raw: &Option<String>) -> &str {
    raw.as_deref().unwrap_or("")
}

impl RawForm {
    /// Session inputs read from the form.
    pub fn session_inputs(&self) -> SessionInputs {
        SessionInputs {
            price_per_session: parse_amount(field(&self.price_per_session)),
            sessions_per_day: parse_count(field(&self.sessions_per_day)),
            days_per_week: parse_days(field(&self.days_per_week)),
            living_cost: parse_amount(field(&self.living_cost)),
        }
    }

    /// Hourly inputs read from the form.
    pub fn hourly_inputs(&self) -> HourlyInputs {
        HourlyInputs {
            hourly_rate: parse_amount(field(&self.hourly_rate)),
            work_hours: parse_count(field(&self.work_hours)),
            waiting_hours: parse_count(field(&self.waiting_hours)),
            days_per_week: parse_days(field(&self.days_per_week_hourly)),
            living_cost: parse_amount(field(&self.living_cost)),
        }
    }

    /// Goal inputs read from the form.
    pub fn goal_inputs(&self) -> GoalInputs {
        GoalInputs {
            goal_amount: parse_amount(field(&self.goal_amount)),
            goal_months: parse_months(field(&self.goal_months)),
            price_per_session: parse_amount(field(&self.price_per_session)),
            sessions_per_day: parse_count(field(&self.sessions_per_day)),
            living_cost: parse_amount(field(&self.living_cost)),
        }
    }

    /// Reads every mode's inputs at once.
    pub fn snapshot(&self) -> InputSnapshot {
        InputSnapshot {
            session: self.session_inputs(),
            hourly: self.hourly_inputs(),
            goal: self.goal_inputs(),
        }
    }
}

/// A form submission: the selected mode and the raw fields.
///
/// # Example
///
/// ```
/// use earnings_estimator::form::FormRequest;
/// use earnings_estimator::models::CalculationMode;
/// use rust_decimal::Decimal;
///
/// let request = FormRequest::from_json(
///     r#"{"mode": "session", "fields": {"pricePerSession": "10000", "sessionsPerDay": 3}}"#,
/// )?;
/// assert_eq!(request.mode, CalculationMode::Session);
/// assert_eq!(request.snapshot().session.sessions_per_day, Decimal::from(3));
/// # Ok::<(), earnings_estimator::error::EstimatorError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormRequest {
    /// The selected calculation mode.
    #[serde(default)]
    pub mode: CalculationMode,
    /// The raw field values.
    #[serde(default)]
    pub fields: RawForm,
}

impl FormRequest {
    /// Decodes a form submission from JSON.
    ///
    /// Returns `MalformedForm` if the payload is not JSON or has the wrong
    /// shape (for example an unknown mode). Bad field values are not errors.
    pub fn from_json(payload: &str) -> EstimatorResult<Self> {
        serde_json::from_str(payload).map_err(|e| EstimatorError::MalformedForm {
            message: e.to_string(),
        })
    }

    /// Reads every mode's inputs from the fields.
    pub fn snapshot(&self) -> InputSnapshot {
        self.fields.snapshot()
    }
}

//! Presentation and export of calculation results.
//!
//! Everything here consumes the calculator's unformatted output: currency
//! formatting, chart series, the on-screen breakdown and export reports.

mod breakdown;
mod chart;
mod currency;
mod export;

pub use breakdown::Breakdown;
pub use chart::{ChartData, ChartSeries, ChartSlice};
pub use currency::{CurrencyFormatter, format_number};
pub use export::{
    DISCLAIMER, ExportReport, REPORT_TITLE, ReportRow, ReportSection, approximately, with_unit,
};

//! Output rendering and formatting

use pacos_state::CoefficientRecord;
use pacos_trendline::Trendline;
use serde::Serialize;
use std::io::{self, Write};

/// Outcome of a command, rendered as text or JSON
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OperationResult {
    Coefficient(CoefficientRecord),
    Updated { coefficient: f64 },
    Simulated { coefficient: f64, values: Vec<f64> },
    Trend(Trendline),
    Reset,
}

/// Output renderer for CLI results
#[derive(Clone)]
pub struct OutputRenderer {
    /// Use JSON output format
    json_output: bool,
}

impl OutputRenderer {
    /// Create new output renderer
    pub fn new(json_output: bool) -> Self {
        Self { json_output }
    }

    /// Render operation result to stdout
    pub fn render_result(&self, result: &OperationResult) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        if self.json_output {
            let json = serde_json::to_string(result).map_err(io::Error::other)?;
            writeln!(out, "{json}")
        } else {
            writeln!(out, "{}", render_text(result))
        }
    }
}

/// Plain-text form of a result
///
/// Coefficients print with `{:?}` so whole numbers keep their decimal point
/// (`1.0`, not `1`); calibrated values use fixed four-decimal formatting.
pub fn render_text(result: &OperationResult) -> String {
    match result {
        OperationResult::Coefficient(record) => format!("{:?}", record.value),
        OperationResult::Updated { coefficient } => {
            format!("Trendline coefficient updated to {coefficient:?}")
        }
        OperationResult::Simulated { values, .. } => values
            .iter()
            .map(|value| format!("{value:.4}"))
            .collect::<Vec<_>>()
            .join(","),
        OperationResult::Trend(line) => {
            format!("slope: {:.4}\nintercept: {:.4}", line.slope, line.intercept)
        }
        OperationResult::Reset => "Trendline coefficient reset to default".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coefficient_keeps_decimal_point() {
        let record = CoefficientRecord {
            key: "trendline_multiplier".to_string(),
            value: 1.0,
            updated_at: 0,
        };
        assert_eq!(render_text(&OperationResult::Coefficient(record)), "1.0");
        assert_eq!(
            render_text(&OperationResult::Updated { coefficient: 2.5 }),
            "Trendline coefficient updated to 2.5"
        );
    }

    #[test]
    fn simulated_values_use_four_decimals() {
        let result = OperationResult::Simulated {
            coefficient: 2.0,
            values: vec![2.0, 4.5, -0.123_456],
        };
        assert_eq!(render_text(&result), "2.0000,4.5000,-0.1235");
    }

    #[test]
    fn json_result_is_tagged() {
        let json = serde_json::to_value(OperationResult::Updated { coefficient: 2.0 }).unwrap();
        assert_eq!(json["kind"], "updated");
        assert_eq!(json["coefficient"], 2.0);
    }
}

//! Parsing of comma separated command arguments

use crate::error::CliError;
use pacos_trendline::Point;

/// Parse `"1, 2,3"` into numbers; blank items are skipped
pub fn parse_values(raw: &str) -> Result<Vec<f64>, CliError> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| {
            item.parse::<f64>()
                .map_err(|_| CliError::InvalidArguments(format!("'{item}' is not a number")))
        })
        .collect()
}

/// Parse `"0:0,1:1"` into points; blank items are skipped
pub fn parse_points(raw: &str) -> Result<Vec<Point>, CliError> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| {
            let invalid = || CliError::InvalidArguments(format!("'{item}' is not an x:y point"));
            let (x, y) = item.split_once(':').ok_or_else(invalid)?;
            let x = x.trim().parse::<f64>().map_err(|_| invalid())?;
            let y = y.trim().parse::<f64>().map_err(|_| invalid())?;
            Ok(Point::new(x, y))
        })
        .collect()
}

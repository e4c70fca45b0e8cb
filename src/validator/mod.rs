//! # Map Validation Module
//!
//! Non-throwing validation of map files. Where [`parse`](crate::map::parse)
//! stops at the first problem, the validator runs every check and collects
//! the outcome into a [`ValidationReport`].
//!
//! ## Validation Checklist
//!
//! 1. **File extension**: `.map` expected (warning otherwise)
//! 2. **Line endings**: a single style expected (warning on a `\n`/`\r\n` mix)
//! 3. **Line count**: exactly 480 lines
//! 4. **Numeric fields**: every line is a comma-decimal number
//! 5. **Series length**: both series have 120 points after parsing
//!
//! ## Usage
//!
//! ```rust,no_run
//! use fuelmap::validator::validate_map_file;
//! use std::path::Path;
//!
//! let report = validate_map_file(Path::new("winter.map"))?;
//! println!("{}", report);
//! # Ok::<(), fuelmap::map::MapError>(())
//! ```

use std::path::Path;

use log::info;

use crate::map::{
    is_map_file, parse, split_lines, MapError, FIELDS_PER_RECORD, LINE_COUNT, RECORD_COUNT,
};
use crate::numeric::parse_decimal;

pub use report::{CheckStatus, ValidationCheck, ValidationReport, Verdict};

mod report;

/// Name of the extension check
pub const CHECK_EXTENSION: &str = "File extension";
/// Name of the line ending check
pub const CHECK_LINE_ENDINGS: &str = "Line endings";
/// Name of the line count check
pub const CHECK_LINE_COUNT: &str = "Line count";
/// Name of the numeric field check
pub const CHECK_NUMERIC: &str = "Numeric fields";
/// Name of the series length check
pub const CHECK_SERIES_LENGTH: &str = "Series length";

/// Read and validate a map file.
///
/// Only I/O failures are returned as errors; format problems end up in the
/// report.
pub fn validate_map_file(path: &Path) -> Result<ValidationReport, MapError> {
    let text = std::fs::read_to_string(path)?;
    Ok(validate_map_text(&path.display().to_string(), &text))
}

/// Validate map text; `name` is used for the extension check and the report
pub fn validate_map_text(name: &str, text: &str) -> ValidationReport {
    let mut report = ValidationReport::new(name);

    report.add_check(check_extension(name));
    report.add_check(check_line_endings(text));

    let lines = split_lines(text);
    report.add_check(check_line_count(lines.len()));
    report.add_check(check_numeric(&lines));
    report.add_check(check_series_length(text));

    info!(
        "Validated {}: {} passed, {} warnings, {} failed",
        name,
        report.success_count(),
        report.warning_count(),
        report.failure_count()
    );
    report
}

fn check_extension(name: &str) -> ValidationCheck {
    if is_map_file(name) {
        ValidationCheck::ok(CHECK_EXTENSION)
    } else {
        ValidationCheck::warning(CHECK_EXTENSION, "file name does not end in .map")
    }
}

fn check_line_endings(text: &str) -> ValidationCheck {
    let body = text.trim_end();
    let crlf = body.matches("\r\n").count();
    let lf = body.matches('\n').count();
    if crlf > 0 && crlf < lf {
        ValidationCheck::warning(
            CHECK_LINE_ENDINGS,
            format!("mixed line endings ({} CRLF, {} LF)", crlf, lf - crlf),
        )
    } else {
        ValidationCheck::ok(CHECK_LINE_ENDINGS)
    }
}

fn check_line_count(found: usize) -> ValidationCheck {
    if found == LINE_COUNT {
        ValidationCheck::ok(CHECK_LINE_COUNT)
    } else {
        ValidationCheck::failed(
            CHECK_LINE_COUNT,
            format!("expected {} lines, found {}", LINE_COUNT, found),
        )
    }
}

fn check_numeric(lines: &[&str]) -> ValidationCheck {
    let bad: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| parse_decimal(line).is_err())
        .map(|(i, _)| i)
        .collect();

    match bad.first() {
        None => ValidationCheck::ok(CHECK_NUMERIC),
        Some(&first) => {
            let record = first / FIELDS_PER_RECORD;
            ValidationCheck::failed(
                CHECK_NUMERIC,
                format!(
                    "{} invalid line(s); first is line {} ({:?}) in lines {}-{}",
                    bad.len(),
                    first + 1,
                    lines[first],
                    record * FIELDS_PER_RECORD + 1,
                    (record + 1) * FIELDS_PER_RECORD
                ),
            )
        }
    }
}

fn check_series_length(text: &str) -> ValidationCheck {
    match parse(text) {
        Ok(map) if map.primary().len() == RECORD_COUNT && map.secondary().len() == RECORD_COUNT => {
            ValidationCheck::ok(CHECK_SERIES_LENGTH)
        }
        Ok(map) => ValidationCheck::failed(
            CHECK_SERIES_LENGTH,
            format!(
                "expected {} points per series, found {} and {}",
                RECORD_COUNT,
                map.primary().len(),
                map.secondary().len()
            ),
        ),
        Err(err) => ValidationCheck::failed(CHECK_SERIES_LENGTH, format!("map does not parse: {}", err)),
    }
}

use log::debug;

use crate::numeric::format_decimal;

use super::{FuelMap, MapError, Series, FIELDS_PER_RECORD};

/// Merge two maps into map-file text.
///
/// The primary series is taken from `source_a` and the secondary series
/// from `source_b`; each row is written as four lines in the file layout.
/// Lines are joined with `\n` and the output has no trailing newline.
pub fn merge(source_a: &FuelMap, source_b: &FuelMap) -> Result<String, MapError> {
    merge_series(source_a.primary(), source_b.secondary())
}

/// Write a primary and a secondary series into map-file text.
///
/// Fails with [`MapError::LengthMismatch`] if the series differ in length.
pub fn merge_series(primary: &Series, secondary: &Series) -> Result<String, MapError> {
    if primary.len() != secondary.len() {
        return Err(MapError::LengthMismatch {
            primary: primary.len(),
            secondary: secondary.len(),
        });
    }

    let mut lines = Vec::with_capacity(primary.len() * FIELDS_PER_RECORD);
    for (p, s) in primary.iter().zip(secondary.iter()) {
        lines.push(format_decimal(p.x));
        lines.push(format_decimal(p.y));
        lines.push(format_decimal(s.x));
        lines.push(format_decimal(s.y));
    }

    debug!("Merged {} records", primary.len());
    Ok(lines.join("\n"))
}

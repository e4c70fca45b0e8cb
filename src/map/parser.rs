use log::debug;

use crate::numeric::{parse_decimal, NumericParseError};

use super::{
    FuelMap, LayoutError, MapError, Point, Series, FIELDS_PER_RECORD, LINE_COUNT, RECORD_COUNT,
};

/// Split map text into lines.
///
/// Trailing whitespace of the whole input is dropped first; leading blank
/// lines are kept and count towards the line total. Both `\n` and `\r\n`
/// line endings are accepted, including a mix of the two.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.trim_end().lines().collect()
}

/// Parse map text into a [`FuelMap`].
///
/// Fails with [`LayoutError::LineCount`] unless the text has exactly
/// [`LINE_COUNT`] lines, and with [`LayoutError::Record`] (carrying the
/// 1-based line range of the record) if any field is not a decimal number.
/// Parsing is all-or-nothing.
pub fn parse(text: &str) -> Result<FuelMap, MapError> {
    let lines = split_lines(text);
    if lines.len() != LINE_COUNT {
        return Err(LayoutError::LineCount {
            expected: LINE_COUNT,
            found: lines.len(),
        }
        .into());
    }

    let mut primary = Vec::with_capacity(RECORD_COUNT);
    let mut secondary = Vec::with_capacity(RECORD_COUNT);

    for (record, fields) in lines.chunks_exact(FIELDS_PER_RECORD).enumerate() {
        let [px, py, sx, sy] = decode_record(fields).map_err(|source| LayoutError::Record {
            first_line: record * FIELDS_PER_RECORD + 1,
            last_line: (record + 1) * FIELDS_PER_RECORD,
            source,
        })?;
        primary.push(Point::new(px, py));
        secondary.push(Point::new(sx, sy));
    }

    debug!("Parsed map with {} records", primary.len());
    Ok(FuelMap::new(Series::new(primary), Series::new(secondary)))
}

fn decode_record(fields: &[&str]) -> Result<[f64; FIELDS_PER_RECORD], NumericParseError> {
    let mut values = [0.0; FIELDS_PER_RECORD];
    for (slot, field) in values.iter_mut().zip(fields) {
        *slot = parse_decimal(field)?;
    }
    Ok(values)
}

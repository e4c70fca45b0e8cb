//! Grid step selection and tick labelling.

use serde::{Deserialize, Serialize};

/// Upper bound on generated ticks, guards against degenerate steps
const MAX_TICKS: usize = 1_000;

/// A labelled position along an axis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    /// Data-space position
    pub value: f64,
    /// Formatted label
    pub label: String,
}

/// Pick a round step (1, 2 or 5 times a power of ten) splitting `range`
/// into roughly `divisions` parts.
///
/// Returns `1.0` for empty, negative or non-finite input.
///
/// ```
/// use fuelmap::view::grid_step;
///
/// assert_eq!(grid_step(100.0, 8), 20.0);
/// assert_eq!(grid_step(3.0, 6), 0.5);
/// assert_eq!(grid_step(1000.0, 6), 200.0);
/// ```
pub fn grid_step(range: f64, divisions: usize) -> f64 {
    let raw = range / divisions.max(1) as f64;
    if !raw.is_finite() || raw <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powi(raw.log10().floor() as i32);
    let normalized = raw / magnitude;
    let factor = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    factor * magnitude
}

/// Number of decimals needed to print multiples of `step` faithfully.
///
/// ```
/// use fuelmap::view::label_decimals;
///
/// assert_eq!(label_decimals(20.0), 0);
/// assert_eq!(label_decimals(2.0), 0);
/// assert_eq!(label_decimals(2.5), 1);
/// assert_eq!(label_decimals(0.5), 1);
/// assert_eq!(label_decimals(0.05), 2);
/// ```
pub fn label_decimals(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 || step >= 10.0 {
        0
    } else if step >= 1.0 {
        if step.fract() == 0.0 {
            0
        } else {
            1
        }
    } else {
        // log10 of exact powers of ten is not always exact
        (-step.log10() - 1e-9).ceil().max(0.0) as usize
    }
}

/// Format a value with a fixed number of decimals, never printing `-0`
pub fn format_label(value: f64, decimals: usize) -> String {
    let label = format!("{:.*}", decimals, value);
    match label.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
        _ => label,
    }
}

/// Ticks at every multiple of the grid step inside `[min, max]`
pub fn ticks(min: f64, max: f64, divisions: usize) -> Vec<Tick> {
    if !min.is_finite() || !max.is_finite() || max < min {
        return Vec::new();
    }
    let step = grid_step(max - min, divisions);
    let decimals = label_decimals(step);
    let tolerance = step * 1e-9;
    let first = (min / step - 1e-9).ceil();

    (0..MAX_TICKS)
        .map(|i| (first + i as f64) * step)
        .take_while(|value| *value <= max + tolerance)
        .map(|value| Tick {
            value,
            label: format_label(value, decimals),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANONICAL: [f64; 3] = [1.0, 2.0, 5.0];

    fn is_canonical(step: f64) -> bool {
        let magnitude = 10f64.powf(step.log10().floor());
        let mantissa = step / magnitude;
        CANONICAL
            .iter()
            .chain(std::iter::once(&10.0))
            .any(|c| (mantissa - c).abs() < 1e-9)
    }

    #[test]
    fn test_grid_step_examples() {
        assert_eq!(grid_step(80.0, 8), 10.0);
        assert_eq!(grid_step(100.0, 8), 20.0);
        assert_eq!(grid_step(300.0, 8), 50.0);
        assert_eq!(grid_step(700.0, 8), 100.0);
        assert!((grid_step(0.3, 6) - 0.05).abs() < 1e-12);
    }

    #[test]
    fn test_grid_step_degenerate_input() {
        assert_eq!(grid_step(0.0, 8), 1.0);
        assert_eq!(grid_step(-5.0, 8), 1.0);
        assert_eq!(grid_step(f64::NAN, 8), 1.0);
        assert_eq!(grid_step(f64::INFINITY, 8), 1.0);
        assert_eq!(grid_step(10.0, 0), 10.0);
    }

    #[test]
    fn test_grid_step_is_canonical_across_magnitudes() {
        let mut range = 1e-4;
        while range < 1e7 {
            let step = grid_step(range, 8);
            assert!(is_canonical(step), "range {range} gave step {step}");
            range *= 1.37;
        }
    }

    #[test]
    fn test_label_decimals() {
        assert_eq!(label_decimals(100.0), 0);
        assert_eq!(label_decimals(10.0), 0);
        assert_eq!(label_decimals(5.0), 0);
        assert_eq!(label_decimals(1.5), 1);
        assert_eq!(label_decimals(0.1), 1);
        assert_eq!(label_decimals(0.2), 1);
        assert_eq!(label_decimals(0.01), 2);
        assert_eq!(label_decimals(0.001), 3);
        assert_eq!(label_decimals(0.0005), 4);
    }

    #[test]
    fn test_ticks_cover_range() {
        let ticks = ticks(-3.0, 97.0, 8);
        let values: Vec<f64> = ticks.iter().map(|t| t.value).collect();
        assert_eq!(values, vec![0.0, 20.0, 40.0, 60.0, 80.0]);
        assert_eq!(ticks[1].label, "20");
    }

    #[test]
    fn test_ticks_fractional_labels() {
        let ticks = ticks(0.95, 3.05, 6);
        let labels: Vec<&str> = ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["1.0", "1.5", "2.0", "2.5", "3.0"]);
    }

    #[test]
    fn test_ticks_include_bounds_on_exact_multiples() {
        let ticks = ticks(0.0, 1000.0, 8);
        assert_eq!(ticks.first().map(|t| t.value), Some(0.0));
        assert_eq!(ticks.last().map(|t| t.value), Some(1000.0));
        assert_eq!(ticks.len(), 6);
    }

    #[test]
    fn test_ticks_invalid_range() {
        assert!(ticks(5.0, 1.0, 8).is_empty());
        assert!(ticks(f64::NAN, 1.0, 8).is_empty());
    }

    #[test]
    fn test_format_label_drops_negative_zero() {
        assert_eq!(format_label(-0.0, 0), "0");
        assert_eq!(format_label(-0.00001, 2), "0.00");
        assert_eq!(format_label(-1.5, 1), "-1.5");
    }
}

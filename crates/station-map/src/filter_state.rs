//! Active range filters and metric selection.

use station_common::filter::DEFAULT_UPPER_BOUND;
use station_common::{FilterBounds, FilterRange, Metric};

/// Filters and metric used by the next render pass.
///
/// Bounds are stored as given; an inverted range is not an error, it just
/// matches nothing downstream.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    bounds: FilterBounds,
    metric: Metric,
}

impl FilterState {
    pub fn new(bounds: FilterBounds, metric: Metric) -> Self {
        Self { bounds, metric }
    }

    /// Replace all four bounds at once.
    pub fn update(&mut self, bounds: FilterBounds) {
        self.bounds = bounds;
    }

    pub fn current_bounds(&self) -> FilterBounds {
        self.bounds
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    pub fn set_metric(&mut self, metric: Metric) {
        self.metric = metric;
    }
}

/// Raw text of the four filter inputs, as typed by the user.
///
/// `None` means the field was missing entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterInputs {
    pub price_min: Option<String>,
    pub price_max: Option<String>,
    pub time_min: Option<String>,
    pub time_max: Option<String>,
}

impl FilterInputs {
    /// Convert to numeric bounds.
    ///
    /// Price bounds accept decimals, commute-time bounds are whole minutes
    /// (a fractional entry is truncated). Anything unparseable falls back to
    /// `0` for a min and `9999` for a max. A typed `0` is kept as a real
    /// bound rather than treated as empty, so `0` as a max matches only `0`.
    pub fn to_bounds(&self) -> FilterBounds {
        FilterBounds::new(
            FilterRange::new(
                parse_float_input(self.price_min.as_deref(), 0.0),
                parse_float_input(self.price_max.as_deref(), DEFAULT_UPPER_BOUND),
            ),
            FilterRange::new(
                parse_int_input(self.time_min.as_deref(), 0.0),
                parse_int_input(self.time_max.as_deref(), DEFAULT_UPPER_BOUND),
            ),
        )
    }
}

/// Parse the leading decimal number of `raw`, e.g. `"12.5 man"` -> `12.5`.
pub fn parse_float_input(raw: Option<&str>, default: f64) -> f64 {
    let Some(raw) = raw else {
        return default;
    };
    let trimmed = raw.trim_start();

    trimmed[..float_prefix_len(trimmed)]
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(default)
}

/// Length of the longest leading `[+-]digits[.digits][(e|E)[+-]digits]` run.
///
/// An exponent without digits is not part of the number, so `"1.5e"` yields
/// the length of `"1.5"`. Returns 0 when there is no mantissa digit.
fn float_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let count_digits = |from: usize| bytes[from..].iter().take_while(|b| b.is_ascii_digit()).count();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = count_digits(end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(end + 1);
        end += 1 + frac_digits;
    }
    if int_digits + frac_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exp_digits = count_digits(end + 1 + sign);
        if exp_digits > 0 {
            end += 1 + sign + exp_digits;
        }
    }
    end
}

/// Parse the leading integer of `raw`, e.g. `"30.9"` -> `30`.
pub fn parse_int_input(raw: Option<&str>, default: f64) -> f64 {
    let Some(raw) = raw else {
        return default;
    };
    let trimmed = raw.trim_start();
    let sign_len = usize::from(trimmed.starts_with(['+', '-']));
    let digits = trimmed[sign_len..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .count();

    trimmed[..sign_len + digits]
        .parse::<i64>()
        .map(|v| v as f64)
        .unwrap_or(default)
}

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Vertical value-to-pixel mapping shared by every bar, axis and trend vertex.
///
/// Maps `[0, domain_max]` onto `[range_high, 0]`, so larger values sit closer
/// to the top of the chart. A zero `domain_max` is a defined degenerate case:
/// every value maps to `range_high`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VerticalScale {
    domain_max: f64,
    range_high: f64,
}

impl VerticalScale {
    /// Builds the scale over `[0, max(values)]`.
    ///
    /// Non-finite values are ignored; a negative or missing maximum collapses
    /// the domain to `[0, 0]`.
    #[must_use]
    pub fn from_values(values: impl IntoIterator<Item = f64>, pixel_range_high: f64) -> Self {
        let domain_max = values
            .into_iter()
            .filter(|value| value.is_finite())
            .map(OrderedFloat)
            .max()
            .map_or(0.0, |max| max.0.max(0.0));
        Self::new(domain_max, pixel_range_high)
    }

    #[must_use]
    pub fn new(domain_max: f64, pixel_range_high: f64) -> Self {
        let sanitize = |value: f64| if value.is_finite() { value.max(0.0) } else { 0.0 };
        Self {
            domain_max: sanitize(domain_max),
            range_high: sanitize(pixel_range_high),
        }
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (0.0, self.domain_max)
    }

    #[must_use]
    pub fn range_high(self) -> f64 {
        self.range_high
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.domain_max == 0.0
    }

    #[must_use]
    pub fn value_to_pixel(self, value: f64) -> f64 {
        if self.is_degenerate() || !value.is_finite() {
            return self.range_high;
        }
        self.range_high - (value / self.domain_max) * self.range_high
    }

    /// Inverse mapping; the degenerate scale maps every pixel to `0`.
    #[must_use]
    pub fn pixel_to_value(self, pixel: f64) -> f64 {
        if self.is_degenerate() || self.range_high == 0.0 {
            return 0.0;
        }
        (self.range_high - pixel) / self.range_high * self.domain_max
    }

    /// Bar height for `value`, never negative.
    #[must_use]
    pub fn bar_height(self, value: f64) -> f64 {
        (self.range_high - self.value_to_pixel(value)).max(0.0)
    }
}

/// Builds the shared vertical scale over all normalized values.
#[must_use]
pub fn build_vertical_scale(
    values: impl IntoIterator<Item = f64>,
    pixel_range_high: f64,
) -> VerticalScale {
    VerticalScale::from_values(values, pixel_range_high)
}

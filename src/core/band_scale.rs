use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Fractional padding between and around period bands.
pub const PERIOD_BAND_PADDING: f64 = 0.1;

/// One band of an ordinal range: left edge and width in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub offset: f64,
    pub band_width: f64,
}

impl Band {
    #[must_use]
    pub fn center(self) -> f64 {
        self.offset + self.band_width / 2.0
    }
}

/// Integer-rounded band partition of `[start, stop]` into `count` slots.
///
/// `padding` is the inner gap ratio; outer padding uses the same ratio.
/// The rounding leftover is split evenly across both outer edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundBands {
    count: usize,
    first_offset: f64,
    step: f64,
    band_width: f64,
}

impl RoundBands {
    #[must_use]
    pub fn new(count: usize, start: f64, stop: f64, padding: f64) -> Self {
        let padding = if padding.is_finite() {
            padding.clamp(0.0, 1.0)
        } else {
            0.0
        };
        if count == 0 {
            return Self {
                count,
                first_offset: start,
                step: 0.0,
                band_width: 0.0,
            };
        }

        let extent = (stop - start).max(0.0);
        let slots = count as f64 - padding + 2.0 * padding;
        let step = (extent / slots).floor();
        let error = extent - (count as f64 - padding) * step;

        Self {
            count,
            first_offset: start + round_half_up(error / 2.0),
            step,
            band_width: round_half_up(step * (1.0 - padding)),
        }
    }

    #[must_use]
    pub fn count(self) -> usize {
        self.count
    }

    #[must_use]
    pub fn step(self) -> f64 {
        self.step
    }

    #[must_use]
    pub fn band_width(self) -> f64 {
        self.band_width
    }

    #[must_use]
    pub fn band(self, index: usize) -> Option<Band> {
        (index < self.count).then(|| Band {
            offset: self.first_offset + self.step * index as f64,
            band_width: self.band_width,
        })
    }

    pub fn bands(self) -> impl Iterator<Item = Band> {
        (0..self.count).filter_map(move |index| self.band(index))
    }
}

/// Ordinal band scale keyed by period title.
///
/// Titles are deduplicated in first-seen order, so repeated titles share one
/// band and the axis shows fewer ticks than there are periods.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodBandScale {
    domain: IndexMap<String, usize>,
    bands: RoundBands,
}

impl PeriodBandScale {
    #[must_use]
    pub fn new<'a>(
        titles: impl IntoIterator<Item = &'a str>,
        available_width: f64,
        padding_ratio: f64,
    ) -> Self {
        let mut domain = IndexMap::new();
        for title in titles {
            let next = domain.len();
            domain.entry(title.to_owned()).or_insert(next);
        }
        let bands = RoundBands::new(domain.len(), 0.0, available_width, padding_ratio);
        Self { domain, bands }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.domain.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.domain.is_empty()
    }

    #[must_use]
    pub fn band(&self, title: &str) -> Option<Band> {
        self.domain
            .get(title)
            .and_then(|index| self.bands.band(*index))
    }

    #[must_use]
    pub fn band_width(&self) -> f64 {
        self.bands.band_width()
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.bands.step()
    }

    /// Bands in domain order, paired with their title.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Band)> + '_ {
        self.domain
            .iter()
            .filter_map(|(title, index)| self.bands.band(*index).map(|band| (title.as_str(), band)))
    }
}

/// Builds the period band scale with the standard 0.1 padding.
#[must_use]
pub fn build_period_band_scale<'a>(
    titles: impl IntoIterator<Item = &'a str>,
    available_width: f64,
) -> PeriodBandScale {
    PeriodBandScale::new(titles, available_width, PERIOD_BAND_PADDING)
}

/// Subdivides one period band into equal, unpadded point bands.
#[must_use]
pub fn build_point_sub_band_scale(point_count: usize, period_band_width: f64) -> RoundBands {
    RoundBands::new(point_count, 0.0, period_band_width, 0.0)
}

fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

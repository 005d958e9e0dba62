use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use tracing::warn;

use crate::core::{Color, LayoutOptions};
use crate::error::{ChartError, ChartResult};

pub const DEFAULT_TIP_OFFSET_TOP: f64 = 10.0;
pub const DEFAULT_TREND_POINT_RADIUS: f64 = 3.0;
pub const DEFAULT_AXIS_OFFSET: f64 = 20.0;
pub const DEFAULT_TREND_LINE_CLASS: &str = "trend-line";
pub const DEFAULT_TREND_POINT_CLASS: &str = "trend-point";

/// Requested chart width.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ChartWidth {
    /// Fill the hosting container.
    #[default]
    Fill,
    Pixels(f64),
    /// Percentage of the parent container width.
    Percent(f64),
}

impl ChartWidth {
    /// Parses `"100%"`, `"640"` or `"640px"`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if let Some(percent) = raw.strip_suffix('%') {
            let percent: f64 = percent.trim().parse().ok()?;
            return (percent.is_finite() && percent > 0.0).then_some(Self::Percent(percent));
        }
        let pixels: f64 = raw.strip_suffix("px").unwrap_or(raw).trim().parse().ok()?;
        (pixels.is_finite() && pixels > 0.0).then_some(Self::Pixels(pixels))
    }

    /// Resolves to pixels against the element and parent widths.
    #[must_use]
    pub fn resolve(self, element_width: Option<f64>, parent_width: Option<f64>) -> Option<f64> {
        match self {
            Self::Fill => parent_width.or(element_width),
            Self::Pixels(pixels) => Some(pixels),
            Self::Percent(percent) => parent_width
                .or(element_width)
                .map(|width| width * percent / 100.0),
        }
    }

    fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Number(number) => number
                .as_f64()
                .filter(|pixels| pixels.is_finite() && *pixels > 0.0)
                .map(Self::Pixels),
            Value::String(raw) => Self::parse(raw),
            _ => None,
        }
    }
}

impl Serialize for ChartWidth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Fill => serializer.serialize_str("100%"),
            Self::Pixels(pixels) => serializer.serialize_f64(*pixels),
            Self::Percent(percent) => serializer.serialize_str(&format!("{percent}%")),
        }
    }
}

impl<'de> Deserialize<'de> for ChartWidth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_json(&value)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid chart width: {value}")))
    }
}

/// Host-facing chart options.
///
/// Serializable so hosts can keep chart setup next to their data. Every
/// field has a default; [`ChartConfig::from_json_value`] additionally
/// tolerates malformed values by falling back per field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChartConfig {
    pub width: ChartWidth,
    /// Space reserved above the chart so tooltips stay inside the surface.
    pub tip_offset_top: f64,
    pub tip_box_style_class: Option<String>,
    pub tip_text_style_class: Option<String>,
    /// Bar colors, cycled in traversal order. Empty means the default palette.
    ///
    /// JSON entries accept hex (`#rgb`, `#rrggbb`, `#rrggbbaa`) and common
    /// CSS color keywords. Any other entry is skipped with a warning, so a
    /// palette with no recognized entries falls back to the default.
    pub palette: Vec<Color>,
    pub split_pairs: bool,
    pub trend_lines: bool,
    /// Trend vertex marker radius; `0` hides the markers.
    pub trend_point_radius: f64,
    pub trend_line_style_class: String,
    pub trend_point_style_class: String,
    /// Pixels reserved below the chart for period labels.
    pub x_axis_offset: Option<f64>,
    /// Pixels reserved left of the chart for value labels.
    pub y_axis_offset: Option<f64>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: ChartWidth::Fill,
            tip_offset_top: DEFAULT_TIP_OFFSET_TOP,
            tip_box_style_class: None,
            tip_text_style_class: None,
            palette: Vec::new(),
            split_pairs: true,
            trend_lines: false,
            trend_point_radius: DEFAULT_TREND_POINT_RADIUS,
            trend_line_style_class: DEFAULT_TREND_LINE_CLASS.to_owned(),
            trend_point_style_class: DEFAULT_TREND_POINT_CLASS.to_owned(),
            x_axis_offset: None,
            y_axis_offset: None,
        }
    }
}

impl ChartConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_width(mut self, width: ChartWidth) -> Self {
        self.width = width;
        self
    }

    #[must_use]
    pub fn with_tip_offset_top(mut self, offset: f64) -> Self {
        self.tip_offset_top = offset;
        self
    }

    #[must_use]
    pub fn with_tip_style_classes(
        mut self,
        box_class: impl Into<String>,
        text_class: impl Into<String>,
    ) -> Self {
        self.tip_box_style_class = Some(box_class.into());
        self.tip_text_style_class = Some(text_class.into());
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: Vec<Color>) -> Self {
        self.palette = palette;
        self
    }

    #[must_use]
    pub fn with_split_pairs(mut self, split_pairs: bool) -> Self {
        self.split_pairs = split_pairs;
        self
    }

    #[must_use]
    pub fn with_trend_lines(mut self, trend_lines: bool) -> Self {
        self.trend_lines = trend_lines;
        self
    }

    #[must_use]
    pub fn with_trend_point_radius(mut self, radius: f64) -> Self {
        self.trend_point_radius = radius;
        self
    }

    #[must_use]
    pub fn with_trend_style_classes(
        mut self,
        line_class: impl Into<String>,
        point_class: impl Into<String>,
    ) -> Self {
        self.trend_line_style_class = line_class.into();
        self.trend_point_style_class = point_class.into();
        self
    }

    #[must_use]
    pub fn with_axis_offsets(mut self, x_axis_offset: Option<f64>, y_axis_offset: Option<f64>) -> Self {
        self.x_axis_offset = x_axis_offset;
        self.y_axis_offset = y_axis_offset;
        self
    }

    #[must_use]
    pub fn layout_options(&self) -> LayoutOptions {
        LayoutOptions {
            split_pairs: self.split_pairs,
        }
    }

    /// Tooltip top reservation; unusable values fall back to the default.
    #[must_use]
    pub fn effective_tip_offset_top(&self) -> f64 {
        non_negative_or(self.tip_offset_top, DEFAULT_TIP_OFFSET_TOP)
    }

    /// Marker radius; `0` (or anything unusable) suppresses markers.
    #[must_use]
    pub fn effective_trend_point_radius(&self) -> f64 {
        if self.trend_point_radius.is_finite() && self.trend_point_radius > 0.0 {
            self.trend_point_radius
        } else {
            0.0
        }
    }

    /// Reservation for the period axis when it is present.
    #[must_use]
    pub fn effective_x_axis_offset(&self) -> f64 {
        positive_or(self.x_axis_offset, DEFAULT_AXIS_OFFSET)
    }

    /// Reservation for the value axis when it is present.
    #[must_use]
    pub fn effective_y_axis_offset(&self) -> f64 {
        positive_or(self.y_axis_offset, DEFAULT_AXIS_OFFSET)
    }

    /// Parses configuration text leniently; only invalid JSON is an error.
    pub fn from_json_str(json: &str) -> ChartResult<Self> {
        let value: Value = serde_json::from_str(json)
            .map_err(|err| ChartError::InvalidData(format!("chart config is not valid JSON: {err}")))?;
        Ok(Self::from_json_value(&value))
    }

    /// Reads each recognized key independently.
    ///
    /// Malformed values are logged and replaced by the field default; unknown
    /// keys are ignored.
    #[must_use]
    pub fn from_json_value(value: &Value) -> Self {
        let mut config = Self::default();
        let Some(map) = value.as_object() else {
            warn!("chart config is not an object; using defaults");
            return config;
        };

        if let Some(raw) = map.get("width") {
            match ChartWidth::from_json(raw) {
                Some(width) => config.width = width,
                None => warn_fallback("width", raw),
            }
        }
        if let Some(offset) = read_number(map, "tipOffsetTop") {
            config.tip_offset_top = offset;
        }
        config.tip_box_style_class = read_string(map, "tipBoxStyleClass");
        config.tip_text_style_class = read_string(map, "tipTextStyleClass");
        if let Some(raw) = map.get("palette") {
            config.palette = read_palette(raw);
        }
        if let Some(split_pairs) = read_bool(map, "splitPairs") {
            config.split_pairs = split_pairs;
        }
        if let Some(trend_lines) = read_bool(map, "trendLines") {
            config.trend_lines = trend_lines;
        }
        if let Some(radius) = read_number(map, "trendPointRadius") {
            config.trend_point_radius = radius;
        }
        if let Some(class) = read_string(map, "trendLineStyleClass") {
            config.trend_line_style_class = class;
        }
        if let Some(class) = read_string(map, "trendPointStyleClass") {
            config.trend_point_style_class = class;
        }
        config.x_axis_offset = read_number(map, "xAxisOffset");
        config.y_axis_offset = read_number(map, "yAxisOffset");
        config
    }
}

fn non_negative_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        fallback
    }
}

fn positive_or(value: Option<f64>, fallback: f64) -> f64 {
    value
        .filter(|value| value.is_finite() && *value > 0.0)
        .unwrap_or(fallback)
}

fn warn_fallback(key: &str, raw: &Value) {
    warn!(key, value = %raw, "malformed chart option; falling back to default");
}

fn read_number(map: &Map<String, Value>, key: &str) -> Option<f64> {
    let raw = map.get(key)?;
    let parsed = match raw {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().trim_end_matches("px").trim().parse::<f64>().ok(),
        Value::Null => return None,
        _ => None,
    };
    match parsed.filter(|number| number.is_finite()) {
        Some(number) => Some(number),
        None => {
            warn_fallback(key, raw);
            None
        }
    }
}

fn read_bool(map: &Map<String, Value>, key: &str) -> Option<bool> {
    let raw = map.get(key)?;
    let parsed = match raw {
        Value::Bool(flag) => Some(*flag),
        Value::String(text) if text.eq_ignore_ascii_case("true") => Some(true),
        Value::String(text) if text.eq_ignore_ascii_case("false") => Some(false),
        Value::Null => return None,
        _ => None,
    };
    if parsed.is_none() {
        warn_fallback(key, raw);
    }
    parsed
}

fn read_string(map: &Map<String, Value>, key: &str) -> Option<String> {
    match map.get(key)? {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Null => None,
        raw => {
            warn_fallback(key, raw);
            None
        }
    }
}

fn read_palette(raw: &Value) -> Vec<Color> {
    let Some(entries) = raw.as_array() else {
        warn_fallback("palette", raw);
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(|entry| {
            let parsed = entry.as_str().map(Color::parse);
            match parsed {
                Some(Ok(color)) => Some(color),
                _ => {
                    warn!(value = %entry, "skipping malformed palette color");
                    None
                }
            }
        })
        .collect()
}

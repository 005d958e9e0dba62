use std::sync::Arc;

use crate::core::{Period, Point};

/// Context passed to bar label formatters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarLabelContext<'a> {
    pub value: f64,
    pub label: Option<&'a str>,
    /// Point that owns the bar.
    pub parent: &'a Point,
    pub period: &'a Period,
    pub value_index: usize,
}

/// Strategy producing tooltip text for one bar.
pub trait LabelFormatter: Send + Sync {
    fn format(&self, context: &BarLabelContext<'_>) -> String;
}

impl<F> LabelFormatter for F
where
    F: Fn(&BarLabelContext<'_>) -> String + Send + Sync,
{
    fn format(&self, context: &BarLabelContext<'_>) -> String {
        self(context)
    }
}

pub type SharedLabelFormatter = Arc<dyn LabelFormatter>;

/// `"label: value"` when the bar has a label, else the bare value.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultLabelFormatter;

impl LabelFormatter for DefaultLabelFormatter {
    fn format(&self, context: &BarLabelContext<'_>) -> String {
        match context.label {
            Some(label) if !label.is_empty() => format!("{label}: {}", context.value),
            _ => context.value.to_string(),
        }
    }
}

/// Tooltip text for a bar.
///
/// A custom formatter wins when it returns non-empty text; otherwise the
/// [`DefaultLabelFormatter`] rules apply.
#[must_use]
pub fn format_bar_label(
    custom: Option<&dyn LabelFormatter>,
    context: &BarLabelContext<'_>,
) -> String {
    if let Some(formatter) = custom {
        let text = formatter.format(context);
        if !text.is_empty() {
            return text;
        }
    }
    DefaultLabelFormatter.format(context)
}

use std::sync::Arc;

use tracing::{debug, trace, warn};

use crate::core::{ChartInput, ColorCycle};
use crate::error::ChartResult;
use crate::interaction::{HoverState, HoverTransition};
use crate::render::{RenderFrame, Renderer};

use super::{
    BarLabelContext, ChartConfig, ChartGeometry, InvalidationReason, LabelFormatter,
    PendingInvalidation, SharedLabelFormatter, SizeResolver, TooltipEvent,
    build_chart_geometry_with_colors, build_render_frame, build_tooltip, resolve_surface_size,
};

/// Grouped bar chart bound to a rendering backend.
///
/// The chart never redraws on its own: mutators only record why a redraw is
/// needed, and the host decides when to call [`GroupedBarChart::render`] or
/// [`GroupedBarChart::render_if_invalidated`].
pub struct GroupedBarChart<R: Renderer> {
    renderer: R,
    config: ChartConfig,
    input: Option<ChartInput>,
    colors: ColorCycle,
    label_formatter: Option<SharedLabelFormatter>,
    pending: PendingInvalidation,
    geometry: Option<ChartGeometry>,
    hover: HoverState,
}

impl<R: Renderer> GroupedBarChart<R> {
    #[must_use]
    pub fn new(renderer: R, config: ChartConfig) -> Self {
        let colors = ColorCycle::with_palette(config.palette.clone());
        Self {
            renderer,
            config,
            input: None,
            colors,
            label_formatter: None,
            pending: PendingInvalidation::none(),
            geometry: None,
            hover: HoverState::default(),
        }
    }

    /// Replaces the chart data.
    ///
    /// Returns `true` when `input` differs structurally from the current data
    /// and a redraw was scheduled.
    pub fn set_data(&mut self, input: ChartInput) -> bool {
        if self.input.as_ref() == Some(&input) {
            trace!("set data skipped: input unchanged");
            return false;
        }
        debug!(
            period_count = input.periods.len(),
            value_count = input.total_value_count(),
            "set chart data"
        );
        self.input = Some(input);
        self.pending.mark(InvalidationReason::DataChanged);
        true
    }

    /// Records that the hosting surface changed size.
    pub fn notify_resize(&mut self) {
        self.pending.mark(InvalidationReason::Resized);
    }

    pub fn set_config(&mut self, config: ChartConfig) {
        self.colors.set_palette(config.palette.clone());
        self.config = config;
        self.pending.mark(InvalidationReason::ConfigChanged);
    }

    /// Installs a closure producing tooltip text; empty output falls back to
    /// the default label rules.
    pub fn set_label_formatter<F>(&mut self, formatter: F)
    where
        F: Fn(&BarLabelContext<'_>) -> String + Send + Sync + 'static,
    {
        let formatter: SharedLabelFormatter = Arc::new(formatter);
        self.label_formatter = Some(formatter);
    }

    pub fn set_label_formatter_strategy(&mut self, formatter: SharedLabelFormatter) {
        self.label_formatter = Some(formatter);
    }

    pub fn clear_label_formatter(&mut self) {
        self.label_formatter = None;
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn input(&self) -> Option<&ChartInput> {
        self.input.as_ref()
    }

    /// Geometry of the last successful render pass.
    #[must_use]
    pub fn geometry(&self) -> Option<&ChartGeometry> {
        self.geometry.as_ref()
    }

    #[must_use]
    pub fn has_pending_invalidation(&self) -> bool {
        self.pending.is_pending()
    }

    #[must_use]
    pub fn pending_invalidation(&self) -> PendingInvalidation {
        self.pending
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Runs one full render pass.
    ///
    /// Without data nothing is drawn and `Ok(())` is returned. When the size
    /// resolver reports no usable size the pass is skipped, the pending
    /// invalidation is kept, and [`crate::ChartError::SizeUnavailable`] is
    /// returned.
    pub fn render(&mut self, sizer: &dyn SizeResolver) -> ChartResult<()> {
        let Some(input) = self.input.as_ref() else {
            trace!("render skipped: no data");
            self.pending.clear();
            return Ok(());
        };

        let surface = match resolve_surface_size(&self.config, sizer) {
            Ok(surface) => surface,
            Err(err) => {
                warn!(error = %err, "skipping render pass");
                return Err(err);
            }
        };

        self.colors.reset();
        let geometry = build_chart_geometry_with_colors(input, surface, &self.config, &mut self.colors);
        let frame = build_render_frame(&geometry, &self.config);
        self.renderer.render(&frame)?;

        debug!(
            period_count = input.periods.len(),
            bar_count = geometry.layout.bar_count(),
            chart_width = geometry.area.width,
            chart_height = geometry.area.height,
            reasons = ?self.pending.reasons().collect::<Vec<_>>(),
            "rendered grouped bar chart"
        );
        self.geometry = Some(geometry);
        self.hover.clear();
        self.pending.clear();
        Ok(())
    }

    /// Renders only when something changed since the last pass.
    ///
    /// Returns whether a pass ran.
    pub fn render_if_invalidated(&mut self, sizer: &dyn SizeResolver) -> ChartResult<bool> {
        if !self.pending.is_pending() {
            return Ok(false);
        }
        self.render(sizer)?;
        Ok(true)
    }

    /// Scene the next render pass would draw, without drawing it.
    pub fn build_render_frame(&self, sizer: &dyn SizeResolver) -> ChartResult<Option<RenderFrame>> {
        let Some(input) = self.input.as_ref() else {
            return Ok(None);
        };
        let surface = resolve_surface_size(&self.config, sizer)?;
        let mut colors = ColorCycle::with_palette(self.config.palette.clone());
        let geometry = build_chart_geometry_with_colors(input, surface, &self.config, &mut colors);
        Ok(Some(build_render_frame(&geometry, &self.config)))
    }

    /// Feeds a pointer position in surface coordinates.
    ///
    /// Returns `Show` when the pointer enters a bar, `Hide` when it leaves
    /// one, and `None` when nothing changed.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> Option<TooltipEvent> {
        let (geometry, input) = (self.geometry.as_ref()?, self.input.as_ref()?);
        let (local_x, local_y) = geometry.area.to_local(x, y);
        let hit = geometry.layout.hit_test(local_x, local_y);

        match self.hover.on_pointer_move(x, y, hit.map(|bar| bar.key())) {
            HoverTransition::Entered(_) => {
                let bar = hit?;
                let formatter: Option<&dyn LabelFormatter> = self.label_formatter.as_deref();
                build_tooltip(bar, input, &geometry.area, &self.config, formatter)
                    .map(TooltipEvent::Show)
            }
            HoverTransition::Left => Some(TooltipEvent::Hide),
            HoverTransition::Unchanged => None,
        }
    }

    pub fn pointer_leave(&mut self) -> Option<TooltipEvent> {
        match self.hover.on_pointer_leave() {
            HoverTransition::Left => Some(TooltipEvent::Hide),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::GroupedBarChart;
    use crate::api::{ChartConfig, FixedSizeResolver, InvalidationReason};
    use crate::core::{ChartInput, Period, Point};
    use crate::error::ChartError;
    use crate::render::NullRenderer;

    fn sample_input() -> ChartInput {
        ChartInput::new(vec![
            Period::new("A", vec![Point::new([4.0, 8.0])]),
            Period::new("B", vec![Point::new([15.0, 16.0])]),
        ])
    }

    #[test]
    fn identical_data_does_not_invalidate() {
        let mut chart = GroupedBarChart::new(NullRenderer::default(), ChartConfig::default());
        assert!(chart.set_data(sample_input()));
        chart
            .render(&FixedSizeResolver::new(200.0, 130.0))
            .expect("render");
        assert!(!chart.has_pending_invalidation());

        assert!(!chart.set_data(sample_input()));
        assert!(!chart.has_pending_invalidation());
    }

    #[test]
    fn unavailable_size_keeps_invalidation() {
        let mut chart = GroupedBarChart::new(NullRenderer::default(), ChartConfig::default());
        chart.set_data(sample_input());

        let err = chart
            .render(&FixedSizeResolver::detached())
            .expect_err("detached element has no size");
        assert!(matches!(err, ChartError::SizeUnavailable { .. }));
        assert!(
            chart
                .pending_invalidation()
                .contains(InvalidationReason::DataChanged)
        );
        assert_eq!(chart.renderer().render_count, 0);
        assert!(chart.geometry().is_none());
    }

    #[test]
    fn render_without_data_draws_nothing() {
        let mut chart = GroupedBarChart::new(NullRenderer::default(), ChartConfig::default());
        chart.notify_resize();
        chart
            .render(&FixedSizeResolver::new(100.0, 100.0))
            .expect("render");
        assert_eq!(chart.renderer().render_count, 0);
        assert!(!chart.has_pending_invalidation());
    }
}

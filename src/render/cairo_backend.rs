use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use std::f64::consts::PI;
use std::path::Path;

use crate::core::PathSegment;
use crate::error::{ChartError, ChartResult};
use crate::render::{AxisOrientation, AxisPrimitive, Color, RenderFrame, Renderer, TextHAlign};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub rects_drawn: usize,
    pub paths_drawn: usize,
    pub circles_drawn: usize,
    pub axes_drawn: usize,
    pub texts_drawn: usize,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// This renderer supports two modes:
/// - offscreen image-surface rendering through `Renderer::render`
/// - in-place rendering on an external Cairo context through
///   `CairoContextRenderer`
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::rgb(1.0, 1.0, 1.0),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Writes the offscreen surface as PNG.
    pub fn write_png(&self, path: impl AsRef<Path>) -> ChartResult<()> {
        let mut file = std::fs::File::create(path.as_ref()).map_err(|err| {
            ChartError::InvalidData(format!("failed to create png file: {err}"))
        })?;
        self.surface
            .write_to_png(&mut file)
            .map_err(|err| ChartError::InvalidData(format!("failed to write png: {err}")))
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.clear_color.validate()?;

        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();

        for rect in &frame.rects {
            context.new_path();
            context.rectangle(rect.x, rect.y, rect.width, rect.height);
            apply_color(context, rect.fill_color);
            context
                .fill()
                .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
            stats.rects_drawn += 1;
        }

        for path in &frame.paths {
            context.new_path();
            append_segments(context, &path.segments);
            apply_color(context, path.color);
            context.set_line_width(path.stroke_width);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke path", err))?;
            stats.paths_drawn += 1;
        }

        for circle in &frame.circles {
            context.new_path();
            context.arc(circle.cx, circle.cy, circle.radius, 0.0, 2.0 * PI);
            apply_color(context, circle.fill_color);
            context
                .fill()
                .map_err(|err| map_backend_error("failed to fill circle", err))?;
            stats.circles_drawn += 1;
        }

        for axis in &frame.axes {
            draw_axis(context, axis)?;
            stats.axes_drawn += 1;
        }

        for text in &frame.texts {
            draw_text(
                context,
                &text.text,
                text.x,
                text.y,
                text.font_size_px,
                text.color,
                text.h_align,
                text.rotation_deg,
            )?;
            stats.texts_drawn += 1;
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()> {
        self.render_with_context(context, frame)
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn append_segments(context: &Context, segments: &[PathSegment]) {
    let (mut cursor_x, mut cursor_y) = (0.0, 0.0);
    for segment in segments {
        match *segment {
            PathSegment::MoveTo { x, y } => context.move_to(x, y),
            PathSegment::LineTo { x, y } => context.line_to(x, y),
            // Cairo has no quadratic primitive; elevate to cubic.
            PathSegment::QuadTo { cx, cy, x, y } => context.curve_to(
                cursor_x + 2.0 / 3.0 * (cx - cursor_x),
                cursor_y + 2.0 / 3.0 * (cy - cursor_y),
                x + 2.0 / 3.0 * (cx - x),
                y + 2.0 / 3.0 * (cy - y),
                x,
                y,
            ),
            PathSegment::CubicTo {
                c1x,
                c1y,
                c2x,
                c2y,
                x,
                y,
            } => context.curve_to(c1x, c1y, c2x, c2y, x, y),
        }
        (cursor_x, cursor_y) = segment.end();
    }
}

fn draw_axis(context: &Context, axis: &AxisPrimitive) -> ChartResult<()> {
    apply_color(context, axis.color);
    context.set_line_width(1.0);
    context.new_path();
    match axis.orientation {
        AxisOrientation::Bottom => {
            context.move_to(axis.x, axis.y);
            context.line_to(axis.x + axis.length, axis.y);
            for tick in &axis.ticks {
                context.move_to(axis.x + tick.position, axis.y);
                context.line_to(axis.x + tick.position, axis.y + axis.tick_size_px);
            }
        }
        AxisOrientation::Left => {
            context.move_to(axis.x, axis.y);
            context.line_to(axis.x, axis.y + axis.length);
            for tick in &axis.ticks {
                context.move_to(axis.x, axis.y + tick.position);
                context.line_to(axis.x - axis.tick_size_px, axis.y + tick.position);
            }
        }
    }
    context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke axis", err))?;

    for tick in &axis.ticks {
        if tick.label.is_empty() {
            continue;
        }
        let (x, y, align) = match axis.orientation {
            AxisOrientation::Bottom => (
                axis.x + tick.position,
                axis.y + axis.tick_size_px + 3.0,
                TextHAlign::Center,
            ),
            AxisOrientation::Left => (
                axis.x - axis.tick_size_px - 3.0,
                axis.y + tick.position - axis.font_size_px / 2.0,
                TextHAlign::Right,
            ),
        };
        draw_text(context, &tick.label, x, y, axis.font_size_px, axis.color, align, 0.0)?;
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn draw_text(
    context: &Context,
    text: &str,
    x: f64,
    y: f64,
    font_size_px: f64,
    color: Color,
    h_align: TextHAlign,
    rotation_deg: f64,
) -> ChartResult<()> {
    let layout = pangocairo::functions::create_layout(context);
    let font_description = FontDescription::from_string(&format!("Sans {font_size_px}"));
    layout.set_font_description(Some(&font_description));
    layout.set_text(text);

    let (text_width, _text_height) = layout.pixel_size();
    let shift = match h_align {
        TextHAlign::Left => 0.0,
        TextHAlign::Center => -f64::from(text_width) / 2.0,
        TextHAlign::Right => -f64::from(text_width),
    };

    apply_color(context, color);
    context
        .save()
        .map_err(|err| map_backend_error("failed to save context", err))?;
    context.translate(x, y);
    context.rotate(rotation_deg.to_radians());
    context.move_to(shift, 0.0);
    pangocairo::functions::show_layout(context, &layout);
    context
        .restore()
        .map_err(|err| map_backend_error("failed to restore context", err))
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}

use serde::{Deserialize, Serialize};

use crate::core::{ChartInput, LayoutMetrics, VerticalScale};

/// Tension of the cardinal interpolation through trend vertices.
pub const CARDINAL_TENSION: f64 = 0.7;

/// One trend-line vertex per period, in chart-local pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendVertex {
    pub period_index: usize,
    pub title: String,
    /// Logical value: second value of the period's first point, or `0`.
    pub value: f64,
    pub x: f64,
    pub y: f64,
}

/// Path command in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathSegment {
    MoveTo {
        x: f64,
        y: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    QuadTo {
        cx: f64,
        cy: f64,
        x: f64,
        y: f64,
    },
    CubicTo {
        c1x: f64,
        c1y: f64,
        c2x: f64,
        c2y: f64,
        x: f64,
        y: f64,
    },
}

impl PathSegment {
    /// End point of the segment.
    #[must_use]
    pub fn end(self) -> (f64, f64) {
        match self {
            Self::MoveTo { x, y }
            | Self::LineTo { x, y }
            | Self::QuadTo { x, y, .. }
            | Self::CubicTo { x, y, .. } => (x, y),
        }
    }

    #[must_use]
    pub fn translated(self, dx: f64, dy: f64) -> Self {
        match self {
            Self::MoveTo { x, y } => Self::MoveTo { x: x + dx, y: y + dy },
            Self::LineTo { x, y } => Self::LineTo { x: x + dx, y: y + dy },
            Self::QuadTo { cx, cy, x, y } => Self::QuadTo {
                cx: cx + dx,
                cy: cy + dy,
                x: x + dx,
                y: y + dy,
            },
            Self::CubicTo {
                c1x,
                c1y,
                c2x,
                c2y,
                x,
                y,
            } => Self::CubicTo {
                c1x: c1x + dx,
                c1y: c1y + dy,
                c2x: c2x + dx,
                c2y: c2y + dy,
                x: x + dx,
                y: y + dy,
            },
        }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        match self {
            Self::MoveTo { x, y } | Self::LineTo { x, y } => x.is_finite() && y.is_finite(),
            Self::QuadTo { cx, cy, x, y } => {
                cx.is_finite() && cy.is_finite() && x.is_finite() && y.is_finite()
            }
            Self::CubicTo {
                c1x,
                c1y,
                c2x,
                c2y,
                x,
                y,
            } => [c1x, c1y, c2x, c2y, x, y].iter().all(|value| value.is_finite()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendLine {
    pub vertices: Vec<TrendVertex>,
    pub path: Vec<PathSegment>,
}

/// Horizontal position of the trend vertex for period `index`.
///
/// Tied to the two-values-per-point shape: `2i·bw + 1.25·bw + bw` plus the
/// accumulated period and point gaps. Kept as-is for irregular shapes.
#[must_use]
pub fn trend_vertex_x(index: usize, metrics: &LayoutMetrics) -> f64 {
    let i = index as f64;
    let bar = metrics.bar_width;
    2.0 * i * bar
        + 1.25 * bar
        + bar
        + i * metrics.inter_period_gap
        + (i - 1.0) * metrics.inter_point_gap / 2.0
}

/// Derives one vertex per period, in period order.
#[must_use]
pub fn build_trend_vertices(
    input: &ChartInput,
    metrics: &LayoutMetrics,
    scale: VerticalScale,
) -> Vec<TrendVertex> {
    input
        .periods
        .iter()
        .enumerate()
        .map(|(period_index, period)| {
            let value = period.trend_value();
            TrendVertex {
                period_index,
                title: period.title.clone(),
                value,
                x: trend_vertex_x(period_index, metrics),
                y: scale.value_to_pixel(value),
            }
        })
        .collect()
}

/// Builds vertices and the smoothed path through them.
#[must_use]
pub fn build_trend_line(
    input: &ChartInput,
    metrics: &LayoutMetrics,
    scale: VerticalScale,
) -> TrendLine {
    let vertices = build_trend_vertices(input, metrics, scale);
    let points: Vec<(f64, f64)> = vertices.iter().map(|vertex| (vertex.x, vertex.y)).collect();
    let path = cardinal_path(&points, CARDINAL_TENSION);
    TrendLine { vertices, path }
}

/// Cardinal-spline path through `points`.
///
/// Fewer than three points fall back to straight segments. Otherwise the
/// first and last spans are quadratic and the inner spans cubic Hermite
/// curves with tangents `(1 - tension) / 2 * (p[i + 1] - p[i - 1])`.
#[must_use]
pub fn cardinal_path(points: &[(f64, f64)], tension: f64) -> Vec<PathSegment> {
    let Some(&(start_x, start_y)) = points.first() else {
        return Vec::new();
    };

    let mut path = Vec::with_capacity(points.len());
    path.push(PathSegment::MoveTo {
        x: start_x,
        y: start_y,
    });

    if points.len() < 3 {
        path.extend(
            points[1..]
                .iter()
                .map(|&(x, y)| PathSegment::LineTo { x, y }),
        );
        return path;
    }

    let scale = (1.0 - tension) / 2.0;
    let tangents: Vec<(f64, f64)> = points
        .windows(3)
        .map(|window| {
            (
                scale * (window[2].0 - window[0].0),
                scale * (window[2].1 - window[0].1),
            )
        })
        .collect();

    // Tangent k belongs to interior point k + 1.
    let (first_x, first_y) = points[1];
    let (t0x, t0y) = tangents[0];
    path.push(PathSegment::QuadTo {
        cx: first_x - t0x * 2.0 / 3.0,
        cy: first_y - t0y * 2.0 / 3.0,
        x: first_x,
        y: first_y,
    });

    for k in 1..tangents.len() {
        let (from_x, from_y) = points[k];
        let (from_tx, from_ty) = tangents[k - 1];
        let (to_x, to_y) = points[k + 1];
        let (to_tx, to_ty) = tangents[k];
        path.push(PathSegment::CubicTo {
            c1x: from_x + from_tx,
            c1y: from_y + from_ty,
            c2x: to_x - to_tx,
            c2y: to_y - to_ty,
            x: to_x,
            y: to_y,
        });
    }

    let last_interior = points.len() - 2;
    let (px, py) = points[last_interior];
    let (tx, ty) = tangents[last_interior - 1];
    let (end_x, end_y) = points[points.len() - 1];
    path.push(PathSegment::QuadTo {
        cx: px + tx * 2.0 / 3.0,
        cy: py + ty * 2.0 / 3.0,
        x: end_x,
        y: end_y,
    });

    path
}

#[cfg(test)]
mod tests {
    use super::{PathSegment, cardinal_path};

    #[test]
    fn two_points_are_joined_by_a_line() {
        let path = cardinal_path(&[(0.0, 0.0), (10.0, 5.0)], 0.7);
        assert_eq!(
            path,
            vec![
                PathSegment::MoveTo { x: 0.0, y: 0.0 },
                PathSegment::LineTo { x: 10.0, y: 5.0 },
            ]
        );
    }

    #[test]
    fn empty_input_yields_empty_path() {
        assert!(cardinal_path(&[], 0.7).is_empty());
    }

    #[test]
    fn three_points_use_quadratic_ends() {
        let path = cardinal_path(&[(0.0, 0.0), (10.0, 10.0), (20.0, 0.0)], 0.7);
        assert_eq!(path.len(), 3);
        assert!(matches!(path[1], PathSegment::QuadTo { x, y, .. } if x == 10.0 && y == 10.0));
        assert!(matches!(path[2], PathSegment::QuadTo { x, y, .. } if x == 20.0 && y == 0.0));
    }

    #[test]
    fn path_passes_through_every_point_in_order() {
        let points = [(0.0, 4.0), (10.0, 2.0), (20.0, 8.0), (30.0, 1.0), (40.0, 3.0)];
        let path = cardinal_path(&points, 0.7);
        let ends: Vec<(f64, f64)> = path.iter().map(|segment| segment.end()).collect();
        assert_eq!(ends, points.to_vec());
    }
}

use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};

use super::ChartConfig;

/// Width and height of a hosting element, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContainerSize {
    pub width: f64,
    pub height: f64,
}

impl ContainerSize {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_usable(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Whole-pixel surface viewport covering this size.
    #[must_use]
    pub fn viewport(self) -> Viewport {
        let to_px = |value: f64| {
            if value.is_finite() && value > 0.0 {
                value.ceil().min(f64::from(u32::MAX)) as u32
            } else {
                0
            }
        };
        Viewport::new(to_px(self.width), to_px(self.height))
    }
}

/// Reports the current size of the chart element and of its parent.
///
/// Either may be unknown, for example while the element is detached.
pub trait SizeResolver {
    fn element_size(&self) -> Option<ContainerSize>;
    fn parent_size(&self) -> Option<ContainerSize>;
}

/// Resolver returning fixed sizes; handy for headless rendering and tests.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FixedSizeResolver {
    pub element: Option<ContainerSize>,
    pub parent: Option<ContainerSize>,
}

impl FixedSizeResolver {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        let size = ContainerSize::new(width, height);
        Self {
            element: Some(size),
            parent: Some(size),
        }
    }

    /// A resolver for a detached element: no size is known.
    #[must_use]
    pub fn detached() -> Self {
        Self::default()
    }
}

impl SizeResolver for FixedSizeResolver {
    fn element_size(&self) -> Option<ContainerSize> {
        self.element
    }

    fn parent_size(&self) -> Option<ContainerSize> {
        self.parent
    }
}

/// Resolves the surface size for one render pass.
///
/// Width follows `config.width`; height is the element height, or the
/// parent's when the element reports none. Fails with
/// [`ChartError::SizeUnavailable`] when no usable size can be found.
pub fn resolve_surface_size(
    config: &ChartConfig,
    resolver: &dyn SizeResolver,
) -> ChartResult<ContainerSize> {
    let element = resolver.element_size();
    let parent = resolver.parent_size();

    let width = config
        .width
        .resolve(element.map(|size| size.width), parent.map(|size| size.width));
    let height = element
        .map(|size| size.height)
        .filter(|height| height.is_finite() && *height > 0.0)
        .or_else(|| parent.map(|size| size.height));

    match (width, height) {
        (Some(width), Some(height)) => {
            let size = ContainerSize::new(width, height);
            if size.is_usable() {
                Ok(size)
            } else {
                Err(ChartError::SizeUnavailable {
                    reason: format!("unusable size {width}x{height}"),
                })
            }
        }
        (None, _) => Err(ChartError::SizeUnavailable {
            reason: "width unknown".to_owned(),
        }),
        (_, None) => Err(ChartError::SizeUnavailable {
            reason: "height unknown".to_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::{ContainerSize, FixedSizeResolver, resolve_surface_size};
    use crate::api::{ChartConfig, ChartWidth};

    #[test]
    fn detached_element_is_unavailable() {
        let err = resolve_surface_size(&ChartConfig::default(), &FixedSizeResolver::detached())
            .expect_err("detached");
        assert!(err.is_recoverable());
    }

    #[test]
    fn fixed_pixel_width_overrides_container() {
        let config = ChartConfig::default().with_width(ChartWidth::Pixels(250.0));
        let size = resolve_surface_size(&config, &FixedSizeResolver::new(800.0, 300.0))
            .expect("size");
        assert_eq!(size, ContainerSize::new(250.0, 300.0));
    }

    #[test]
    fn element_without_height_uses_parent_height() {
        let resolver = FixedSizeResolver {
            element: Some(ContainerSize::new(400.0, 0.0)),
            parent: Some(ContainerSize::new(600.0, 240.0)),
        };
        let size = resolve_surface_size(&ChartConfig::default(), &resolver).expect("size");
        assert_eq!(size, ContainerSize::new(600.0, 240.0));
    }

    #[test]
    fn viewport_rounds_up_to_whole_pixels() {
        let viewport = ContainerSize::new(199.2, 100.0).viewport();
        assert_eq!((viewport.width, viewport.height), (200, 100));
    }
}

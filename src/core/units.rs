//! Screen pixels vs. simulation units.
//!
//! The physics world works in metres-ish units with +y pointing down, the
//! same orientation as the page. `PixelScale` is the only place the two are
//! converted.

use rapier2d::prelude::*;

/// Pixels per simulation unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelScale(f32);

impl PixelScale {
    pub fn new(pixels_per_unit: f32) -> Self {
        Self(pixels_per_unit)
    }

    pub fn pixels_per_unit(&self) -> f32 {
        self.0
    }

    #[inline]
    pub fn to_units(&self, px: f32) -> f32 {
        px / self.0
    }

    #[inline]
    pub fn to_pixels(&self, units: f32) -> f32 {
        units * self.0
    }

    /// Screen position (px) -> world point (units)
    #[inline]
    pub fn point(&self, x_px: f32, y_px: f32) -> Point<Real> {
        point![self.to_units(x_px), self.to_units(y_px)]
    }

    #[inline]
    pub fn vector(&self, x_px: f32, y_px: f32) -> Vector<Real> {
        vector![self.to_units(x_px), self.to_units(y_px)]
    }
}

/// Visible area in pixels, read once at startup.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Zero, negative or NaN extents give degenerate boundary geometry.
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_both_ways() {
        let scale = PixelScale::new(200.0);
        assert_eq!(scale.to_units(400.0), 2.0);
        assert_eq!(scale.to_pixels(0.5), 100.0);

        let p = scale.point(100.0, 300.0);
        assert_eq!(p, point![0.5, 1.5]);
    }

    #[test]
    fn degenerate_viewports() {
        assert!(!Viewport::new(800.0, 600.0).is_degenerate());
        assert!(Viewport::new(0.0, 600.0).is_degenerate());
        assert!(Viewport::new(800.0, f32::NAN).is_degenerate());
    }
}

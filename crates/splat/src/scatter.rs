//! Scatter plot hand-off.
//!
//! A scatter plotter only needs each splat's position and color. Scale and
//! rotation are decoded but dropped here. Color channels pass through as
//! `0..=255` values except alpha, which plotters expect in `[0, 1]`.

use glam::Vec3;
use splat_decode::Splat;

/// One marker for a 3D scatter plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterPoint {
    pub position: Vec3,
    /// Red, green and blue in `0..=255`, alpha in `[0, 1]`.
    pub color: [f32; 4],
}

impl ScatterPoint {
    /// CSS color string, e.g. `rgba(255, 0, 0, 0.5)`.
    #[must_use]
    pub fn css_rgba(&self) -> String {
        let [r, g, b, a] = self.color;
        format!("rgba({r}, {g}, {b}, {a})")
    }
}

impl From<&Splat> for ScatterPoint {
    fn from(splat: &Splat) -> Self {
        let [r, g, b, _] = splat.color;
        Self {
            position: splat.position,
            color: [f32::from(r), f32::from(g), f32::from(b), splat.opacity()],
        }
    }
}

/// Convert splats into scatter markers, preserving order.
#[must_use]
pub fn to_scatter_points(splats: &[Splat]) -> Vec<ScatterPoint> {
    splats.iter().map(ScatterPoint::from).collect()
}

/// Axis-aligned box around every splat position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds {
    /// Bounds of a splat cloud, or `None` if it is empty.
    #[must_use]
    pub fn from_splats(splats: &[Splat]) -> Option<Self> {
        let (first, rest) = splats.split_first()?;
        let init = Self {
            min: first.position,
            max: first.position,
        };
        Some(rest.iter().fold(init, |b, s| Self {
            min: b.min.min(s.position),
            max: b.max.max(s.position),
        }))
    }

    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    #[must_use]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}

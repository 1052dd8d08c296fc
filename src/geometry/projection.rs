use serde::{Deserialize, Serialize};

use super::GeoBounds;
use crate::domain::{GeoPoint, ProjectedPoint};

/// Drawing surface the track is projected into
///
/// `padding` is a fraction of the width reserved as a margin on every side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewBox {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Default for ViewBox {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 240.0,
            padding: 0.05,
        }
    }
}

impl ViewBox {
    pub fn new(width: f64, height: f64, padding: f64) -> Self {
        Self {
            width,
            height,
            padding,
        }
    }

    /// Fallback location when there is no track to place things on
    pub fn center(&self) -> ProjectedPoint {
        ProjectedPoint::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn padding_px(&self) -> f64 {
        self.width * self.padding
    }

    /// Positive size and a padding that leaves a usable area on both axes
    pub fn is_valid(&self) -> bool {
        self.width > 0.0
            && self.height > 0.0
            && (0.0..0.5).contains(&self.padding)
            && 2.0 * self.padding_px() < self.height
    }
}

/// Linear lat/lon to drawing-surface projection over fixed bounds
///
/// Longitude maps to x, latitude to y with the axis flipped so north is up.
/// An axis with zero span places every point on its center line.
#[derive(Debug, Clone)]
pub struct Projector {
    bounds: GeoBounds,
    view_box: ViewBox,
}

impl Projector {
    pub fn new(bounds: GeoBounds, view_box: ViewBox) -> Self {
        if bounds.is_degenerate() {
            log::debug!("Degenerate track bounds {:?}, centering flat axis", bounds);
        }
        Self { bounds, view_box }
    }

    pub fn view_box(&self) -> &ViewBox {
        &self.view_box
    }

    /// Project a lat/lon point into the padded viewbox
    pub fn project(&self, lat: f64, lon: f64) -> ProjectedPoint {
        let nx = normalize(lon, self.bounds.min_lon, self.bounds.max_lon);
        let ny = normalize(lat, self.bounds.min_lat, self.bounds.max_lat);

        let pad = self.view_box.padding_px();
        let usable_width = self.view_box.width - 2.0 * pad;
        let usable_height = self.view_box.height - 2.0 * pad;

        ProjectedPoint {
            x: pad + nx * usable_width,
            y: pad + (1.0 - ny) * usable_height,
        }
    }

    /// Project a slice of points, preserving order
    pub fn project_points(&self, points: &[GeoPoint]) -> Vec<ProjectedPoint> {
        points.iter().map(|p| self.project(p.lat, p.lon)).collect()
    }
}

fn normalize(value: f64, min: f64, max: f64) -> f64 {
    let span = max - min;
    if span == 0.0 {
        0.5
    } else {
        (value - min) / span
    }
}

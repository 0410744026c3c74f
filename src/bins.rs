use geo::Contains;
use geo_types::{Point, Polygon};

use crate::pad::PadPlane;


/// Polygon registry standing in for the spatial-index collaborator.
///
/// One polygon is registered per pad, in pad index order. Bins are
/// numbered from 1 in registration order and 0 means no bin contains
/// the queried point, so `PadMap::bin_to_pad` turns a query result
/// into a pad index or -1.
pub struct PadBinning {
    polygons: Vec<Polygon<f32>>,
}

impl PadBinning {
    /// Registers one polygon per pad of a generated plane.
    pub fn from_plane(plane: &PadPlane) -> Self {
        let polygons = plane.pads().iter().map(|pad| pad.polygon()).collect();
        Self { polygons }
    }

    pub fn num_bins(&self) -> usize {
        self.polygons.len()
    }

    /// The 1-based bin whose polygon contains the point, or 0 when
    /// none does.
    pub fn find_bin(&self, x: f32, y: f32) -> i32 {
        let point = Point::new(x, y);
        for (i, polygon) in self.polygons.iter().enumerate() {
            if polygon.contains(&point) {
                return i as i32 + 1;
            }
        }
        0
    }
}

use geo_types::{Coord, LineString, Polygon};
use nalgebra::Point2;

/// One readout pad of the detection plane.
///
/// Vertices are stored in the fixed winding order produced by the plane
/// builders; downstream consumers rely on that order.
#[derive(Debug, Clone, PartialEq)]
pub struct Pad {
    pub vertices: Vec<Point2<f32>>,
}

impl Pad {
    pub fn new(vertices: Vec<Point2<f32>>) -> Self {
        Self { vertices }
    }

    /// Returns the polygon of a pad in the xy plane.
    pub fn polygon(&self) -> Polygon<f32> {
        let mut exterior = Vec::new();
        for vertex in &self.vertices {
            exterior.push(Coord {
                x: vertex.x,
                y: vertex.y,
            });
        }
        Polygon::new(LineString(exterior), vec![])
    }
}

/// The full generated pad plane.
///
/// Pads live in a contiguous arena and the position of a pad is its pad
/// index. The plane is built once and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct PadPlane {
    pads: Vec<Pad>,
}

impl PadPlane {
    pub fn new(pads: Vec<Pad>) -> Self {
        Self { pads }
    }

    pub fn num_pads(&self) -> usize {
        self.pads.len()
    }

    pub fn pad(&self, index: usize) -> Option<&Pad> {
        self.pads.get(index)
    }

    pub fn pads(&self) -> &[Pad] {
        &self.pads
    }
}

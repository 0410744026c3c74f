use nalgebra::Point2;

use crate::map::PadMap;
use crate::pad::{Pad, PadPlane};
use crate::settings::PLANE_RADIUS;
use crate::tessellate;


/// Sign of the x and y axes in each quadrant. Pads replicate from the
/// first quadrant by reflection of the same absolute coordinates,
/// keeping the vertex order unchanged.
const QUADRANT_SIGNS: [(f32, f32); 4] = [(1.0, 1.0), (-1.0, 1.0), (-1.0, -1.0), (1.0, -1.0)];

/// Circular pad plane tiled with square pads.
///
/// One quadrant is rasterized row by row and replicated to the other
/// three; each quadrant occupies a contiguous quarter of the pad index
/// range, with row-major, column-fastest order inside the quadrant.
pub struct SquaresMap {
    size_pad: f32,
    squares_per_row: Vec<i32>,
    num_pads: usize,
    plane: Option<PadPlane>,
}

impl SquaresMap {
    /// Creates the map for a given pad size in mm.
    ///
    /// The longest row holds as many squares as fit along the plane
    /// radius; the remaining rows of the quadrant follow from
    /// rasterizing the circle at that resolution.
    pub fn new(pad_size: f32) -> Self {
        let pads_in_row1 = (PLANE_RADIUS / pad_size) as i32;
        let squares_per_row = tessellate::rasterize_circle(pads_in_row1);

        let quadrant: i32 = squares_per_row.iter().sum();
        let num_pads = quadrant as usize * 4;

        log::info!(
            "squares map initialized with {} pads of size {} mm",
            num_pads,
            pad_size
        );

        Self {
            size_pad: pad_size,
            squares_per_row,
            num_pads,
            plane: None,
        }
    }

    fn build_plane(&self) -> PadPlane {
        let quadrant_pads = self.num_pads / 4;
        let mut pads = vec![Pad::new(Vec::new()); self.num_pads];
        let s = self.size_pad;

        let mut pad_num = 0;
        for (irow, &row) in self.squares_per_row.iter().enumerate() {
            for ipad in 0..row as usize {
                // First-quadrant square anchored at the row/column
                // position, extending towards +x and -y.
                let x0 = ipad as f32 * s;
                let y0 = -(irow as f32) * s;
                let corners = [
                    Point2::new(x0, y0),
                    Point2::new(x0 + s, y0),
                    Point2::new(x0 + s, -s + y0),
                    Point2::new(x0, -s + y0),
                ];

                for (iquad, (sx, sy)) in QUADRANT_SIGNS.iter().enumerate() {
                    let vertices = corners
                        .iter()
                        .map(|v| Point2::new(sx * v.x, sy * v.y))
                        .collect();
                    pads[ipad + pad_num + iquad * quadrant_pads] = Pad::new(vertices);
                }
            }
            pad_num += row as usize;
        }

        assert_eq!(pad_num * 4, self.num_pads);
        PadPlane::new(pads)
    }
}

impl PadMap for SquaresMap {
    fn pad_size(&self) -> f32 {
        self.size_pad
    }

    fn num_pads(&self) -> usize {
        self.num_pads
    }

    fn plane(&self) -> Option<&PadPlane> {
        self.plane.as_ref()
    }

    fn dump_file(&self) -> &'static str {
        "coordmap_Squares.txt"
    }

    fn generate_pad_plane(&mut self) {
        if self.plane.is_some() {
            log::error!("skipping generation of pad plane, it is already generated");
            return;
        }

        log::info!("squares map: generating the pad plane geometry");
        let plane = self.build_plane();
        assert_eq!(plane.num_pads(), self.num_pads);
        self.plane = Some(plane);
    }
}

use nalgebra::{Point2, Rotation2};
use std::f32::consts::FRAC_PI_3;

use crate::map::PadMap;
use crate::pad::{Pad, PadPlane};
use crate::settings::PLANE_RADIUS;
use crate::tessellate;


/// Hexagonal pad plane tiled with equilateral triangle pads.
///
/// One sextant is packed row by row from the tip outward and
/// replicated to the other five; each sector occupies a contiguous
/// sixth of the pad index range. Sectors 2 and 3 rotate the first
/// sector by +60 and +120 degrees, sector 4 mirrors it across the x
/// axis, and sectors 5 and 6 rotate it by -60 and -120 degrees.
pub struct TrianglesMap {
    size_pad: f32,
    height_pad: f32,
    triangles_per_row: Vec<i32>,
    num_pads: usize,
    plane: Option<PadPlane>,
}

impl TrianglesMap {
    /// Creates the map for a given pad size in mm.
    ///
    /// The capacity of one sector is the number of small triangles
    /// that fit in the equilateral triangle forming a sixth of the
    /// hexagon inscribed in the plane.
    pub fn new(pad_size: f32) -> Self {
        let height_pad = pad_size * 3.0_f32.sqrt() / 2.0;
        let height_sector = PLANE_RADIUS * 3.0_f32.sqrt() / 2.0;

        let capacity = ((PLANE_RADIUS / pad_size) * (height_sector / height_pad)) as i32;
        let triangles_per_row = tessellate::rasterize_triangle(capacity);

        let sector: i32 = triangles_per_row.iter().sum();
        let num_pads = sector as usize * 6;

        log::info!(
            "triangles map initialized with {} pads of size {} mm",
            num_pads,
            pad_size
        );

        Self {
            size_pad: pad_size,
            height_pad,
            triangles_per_row,
            num_pads,
            plane: None,
        }
    }

    /// Height of a pad in mm.
    pub fn height_pad(&self) -> f32 {
        self.height_pad
    }

    fn build_plane(&self) -> PadPlane {
        let sector_pads = self.num_pads / 6;
        let mut pads = vec![Pad::new(Vec::new()); self.num_pads];
        let s = self.size_pad;
        let h = self.height_pad;

        let rot_p60 = Rotation2::new(FRAC_PI_3);
        let rot_p120 = Rotation2::new(2.0 * FRAC_PI_3);
        let rot_m60 = Rotation2::new(-FRAC_PI_3);
        let rot_m120 = Rotation2::new(-2.0 * FRAC_PI_3);

        let mut pad_num = 0;
        for (irow, &row) in self.triangles_per_row.iter().enumerate() {
            for ipad in 0..row as usize {
                let r = irow as f32;
                let c = ipad as f32;
                // Parity of the column flips the triangle between up-
                // and down-pointing within the row.
                let even = ((ipad + 1) % 2) as f32;
                let odd = (ipad % 2) as f32;

                let base = [
                    Point2::new((c - r - 1.0) * 0.5 * s, (r + even) * h),
                    Point2::new((c - r) * 0.5 * s, (r + odd) * h),
                    Point2::new((c - r + 1.0) * 0.5 * s, (r + even) * h),
                ];

                let pid = ipad + pad_num;
                pads[pid] = Pad::new(base.to_vec());
                pads[pid + sector_pads] = Pad::new(base.iter().map(|v| rot_p60 * v).collect());
                pads[pid + 2 * sector_pads] = Pad::new(base.iter().map(|v| rot_p120 * v).collect());
                pads[pid + 3 * sector_pads] =
                    Pad::new(base.iter().map(|v| Point2::new(v.x, -v.y)).collect());
                pads[pid + 4 * sector_pads] = Pad::new(base.iter().map(|v| rot_m60 * v).collect());
                pads[pid + 5 * sector_pads] = Pad::new(base.iter().map(|v| rot_m120 * v).collect());
            }
            pad_num += row as usize;
        }

        assert_eq!(pad_num * 6, self.num_pads);
        PadPlane::new(pads)
    }
}

impl PadMap for TrianglesMap {
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
        "coordmap_Hexagon.txt"
    }

    fn generate_pad_plane(&mut self) {
        if self.plane.is_some() {
            log::error!("skipping generation of pad plane, it is already generated");
            return;
        }

        log::info!("triangles map: generating the pad plane geometry");
        let plane = self.build_plane();
        assert_eq!(plane.num_pads(), self.num_pads);
        self.plane = Some(plane);
    }
}

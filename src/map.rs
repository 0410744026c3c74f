use anyhow::Result;
use nalgebra::Point2;

use crate::output;
use crate::pad::PadPlane;
use crate::settings::{PadShape, Settings};
use crate::squares::SquaresMap;
use crate::triangles::TrianglesMap;

/// Common contract of the pad plane variants: generate the plane once,
/// resolve pad centers, and convert collaborator bins to pad indices.
///
/// Center and bin resolution are shared between variants; only the
/// tessellation and the plane construction differ.
pub trait PadMap {
    /// Pad size in mm.
    fn pad_size(&self) -> f32;

    /// Total number of pads the plane holds once generated.
    fn num_pads(&self) -> usize;

    /// The generated plane, if any.
    fn plane(&self) -> Option<&PadPlane>;

    /// Generates the pad plane. The plane is only generated once;
    /// calling this again logs an error and leaves it untouched.
    fn generate_pad_plane(&mut self);

    /// File the coordinate dump is written to.
    fn dump_file(&self) -> &'static str;

    /// Center of a pad from its vertex coordinates.
    ///
    /// The center is taken as the average of the first two vertices in
    /// x and of the second and third vertices in y, which matches the
    /// vertex ordering of both pad shapes. A pad reference of -1 is the
    /// "no pad found" answer of the binning collaborator; it resolves
    /// to the sentinel (-9999, -9999), as does any query before the
    /// plane has been generated.
    fn calc_pad_center(&self, pad_ref: i32) -> Point2<f32> {
        let plane = match self.plane() {
            Some(plane) => plane,
            None => {
                log::error!("calc_pad_center: pad plane has not been generated");
                return Point2::new(-9999.0, -9999.0);
            }
        };

        if pad_ref == -1 {
            log::debug!("calc_pad_center: pad not found");
            return Point2::new(-9999.0, -9999.0);
        }

        if pad_ref < 0 || pad_ref as usize >= plane.num_pads() {
            log::debug!("calc_pad_center: no pad with reference {}", pad_ref);
            return Point2::new(-9999.0, -9999.0);
        }

        let pad = &plane.pads()[pad_ref as usize];
        let x = (pad.vertices[0].x + pad.vertices[1].x) / 2.0;
        let y = (pad.vertices[1].y + pad.vertices[2].y) / 2.0;
        Point2::new(x, y)
    }

    /// Converts a 1-based collaborator bin id to a 0-based pad index.
    fn bin_to_pad(&self, bin: i32) -> i32 {
        bin - 1
    }

    /// Writes the coordinate dump for the first pads of the plane.
    fn dump(&self) -> Result<()> {
        match self.plane() {
            Some(plane) => output::write_coordmap(plane, self.dump_file()),
            None => {
                log::error!("dump: pad plane has not been generated");
                Ok(())
            }
        }
    }
}

/// Constructs the pad map variant selected by the settings.
pub fn from_settings(settings: &Settings) -> Box<dyn PadMap> {
    match settings.shape {
        PadShape::Squares => Box::new(SquaresMap::new(settings.pad_size)),
        PadShape::Triangles => Box::new(TrianglesMap::new(settings.pad_size)),
    }
}

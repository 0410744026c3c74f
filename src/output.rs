use std::{fs::File, io::BufWriter};

use anyhow::Result;
use std::io::Write;

use crate::pad::PadPlane;

/// Number of pads written to the coordinate dump.
const DUMP_PADS: usize = 25;

/// Write the pad index and the coordinates of the closing vertex of
/// each of the first pads to a plain text file, one pad per line.
pub fn write_coordmap(plane: &PadPlane, path: &str) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    for (index, pad) in plane.pads().iter().take(DUMP_PADS).enumerate() {
        let vertex = pad.vertices.last().expect("pad without vertices");
        writeln!(writer, "{} {} {}", index, vertex.x, vertex.y)?;
    }

    Ok(())
}

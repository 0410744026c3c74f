//! Row tessellation for one symmetric sector of the pad plane.


/// Number of pads in each row of one quadrant of the circular plane,
/// based on the midpoint circle drawing algorithm.
///
/// The midpoint walk only visits one octant and stops once y passes x,
/// so a helper list collects the lengths of the rows near the 45 degree
/// diagonal as they are crossed; appending it reversed completes the
/// quadrant in a single pass.
pub fn rasterize_circle(radius: i32) -> Vec<i32> {
    let mut values = Vec::new();
    let mut helper = Vec::new();

    let mut x = radius;
    let mut y = 0;
    let mut counter = 0; // rows walked so far, completes the quadrant
    let mut p = 1 - radius;

    while x > y {
        values.push(x);
        y += 1;
        // Decision value tells whether the curve stays outside or
        // crosses into the circle at this step.
        if p <= 0 {
            p += 2 * y + 1;
            counter += 1;
        } else {
            x -= 1;
            p += 2 * y - 2 * x + 1;
            counter += 1;
            helper.push(counter);
        }
        if x < y {
            break;
        }
    }

    values.extend(helper.into_iter().rev());
    values
}

/// Number of pads in each row of one sextant of the hexagonal plane.
///
/// The tip row holds a single triangle and every next row grows by two.
/// A row is only accepted while it fits strictly inside the remaining
/// capacity.
pub fn rasterize_triangle(total_pads: i32) -> Vec<i32> {
    let mut values = Vec::new();

    let mut remaining = total_pads;
    let mut triangles = 1;

    while remaining > 0 && remaining > triangles {
        values.push(triangles);
        remaining -= triangles;
        triangles += 2;
    }

    values
}

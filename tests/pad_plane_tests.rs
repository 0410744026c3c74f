use std::f32::consts::FRAC_PI_3;

use nalgebra::{Point2, Rotation2};

use padplane::{
    bins::PadBinning,
    map::{self, PadMap},
    settings::{self, PadShape},
    squares::SquaresMap,
    triangles::TrianglesMap,
};

// Tolerance for comparing vertex coordinates in mm
const TOL: f32 = 1e-6;

fn assert_close(a: Point2<f32>, b: Point2<f32>) {
    assert!((a.x - b.x).abs() < TOL, "a: {}, b: {}", a, b);
    assert!((a.y - b.y).abs() < TOL, "a: {}, b: {}", a, b);
}

#[test]
fn squares_pad_count() {
    let mut settings = settings::load_default_config().unwrap();
    settings.pad_size = 28.0;
    settings.shape = PadShape::Squares;

    let mut map = map::from_settings(&settings);
    assert_eq!(map.pad_size(), 28.0);
    // Quadrant profile [5, 5, 5, 4, 4, 3] over four quadrants.
    assert_eq!(map.num_pads(), 104);

    map.generate_pad_plane();
    assert_eq!(map.plane().unwrap().num_pads(), 104);
}

#[test]
fn triangles_pad_count() {
    let mut settings = settings::load_default_config().unwrap();
    settings.pad_size = 20.0;
    settings.shape = PadShape::Triangles;

    let mut map = map::from_settings(&settings);
    // Sextant profile [1, 3, 5, 7, 9, 11] over six sectors.
    assert_eq!(map.num_pads(), 216);

    map.generate_pad_plane();
    assert_eq!(map.plane().unwrap().num_pads(), 216);
}

#[test]
fn triangles_capacity_ten_packs_three_rows() {
    // A 43 mm pad gives a sector capacity of 10 small triangles, which
    // packs as [1, 3, 5]: the fourth row of 7 exceeds the single
    // remaining triangle.
    let map = TrianglesMap::new(43.0);
    assert_eq!(map.num_pads(), 54);
}

#[test]
fn square_quadrants_partition_the_index_range() {
    let mut map = SquaresMap::new(28.0);
    map.generate_pad_plane();
    let plane = map.plane().unwrap();

    let quadrant_pads = map.num_pads() / 4;
    let signs = [(-1.0, 1.0), (-1.0, -1.0), (1.0, -1.0)];

    for (k, (sx, sy)) in signs.iter().enumerate() {
        let offset = (k + 1) * quadrant_pads;
        for i in 0..quadrant_pads {
            let first = plane.pad(i).unwrap();
            let other = plane.pad(i + offset).unwrap();
            for (a, b) in first.vertices.iter().zip(other.vertices.iter()) {
                assert_close(Point2::new(sx * a.x, sy * a.y), *b);
            }
        }
    }
}

#[test]
fn triangle_sectors_partition_the_index_range() {
    let mut map = TrianglesMap::new(20.0);
    map.generate_pad_plane();
    let plane = map.plane().unwrap();

    let sector_pads = map.num_pads() / 6;
    let rotations = [
        Rotation2::new(FRAC_PI_3),
        Rotation2::new(2.0 * FRAC_PI_3),
        Rotation2::new(-FRAC_PI_3),
        Rotation2::new(-2.0 * FRAC_PI_3),
    ];

    for i in 0..sector_pads {
        let first = plane.pad(i).unwrap();

        // Sectors 2, 3, 5 and 6 are rotations of the first sector.
        for (rot, k) in rotations.iter().zip([1, 2, 4, 5]) {
            let other = plane.pad(i + k * sector_pads).unwrap();
            for (a, b) in first.vertices.iter().zip(other.vertices.iter()) {
                assert_close(rot * a, *b);
            }
        }

        // Sector 4 mirrors the first sector across the x axis.
        let mirrored = plane.pad(i + 3 * sector_pads).unwrap();
        for (a, b) in first.vertices.iter().zip(mirrored.vertices.iter()) {
            assert_close(Point2::new(a.x, -a.y), *b);
        }
    }
}

#[test]
fn center_on_unbuilt_map_is_the_sentinel() {
    let squares = SquaresMap::new(28.0);
    for pad_ref in [-1, 0, 50] {
        assert_eq!(
            squares.calc_pad_center(pad_ref),
            Point2::new(-9999.0, -9999.0)
        );
    }

    let triangles = TrianglesMap::new(20.0);
    assert_eq!(triangles.calc_pad_center(0), Point2::new(-9999.0, -9999.0));
}

#[test]
fn center_of_unresolved_pad_is_the_sentinel() {
    let mut map = SquaresMap::new(28.0);
    map.generate_pad_plane();

    assert_eq!(map.calc_pad_center(-1), Point2::new(-9999.0, -9999.0));
    assert_eq!(map.calc_pad_center(-7), Point2::new(-9999.0, -9999.0));
    assert_eq!(
        map.calc_pad_center(map.num_pads() as i32),
        Point2::new(-9999.0, -9999.0)
    );
}

#[test]
fn square_pad_center_is_the_centroid() {
    let mut map = SquaresMap::new(28.0);
    map.generate_pad_plane();

    // Pad 0 is anchored at the origin of the first quadrant.
    assert_close(map.calc_pad_center(0), Point2::new(14.0, -14.0));

    // For squares, the vertex-average rule equals the true centroid.
    let plane = map.plane().unwrap();
    for pad_ref in [1, 26, 52, 103] {
        let pad = plane.pad(pad_ref as usize).unwrap();
        let centroid = pad
            .vertices
            .iter()
            .fold(Point2::new(0.0, 0.0), |acc, v| {
                Point2::new(acc.x + v.x / 4.0, acc.y + v.y / 4.0)
            });
        assert_close(map.calc_pad_center(pad_ref), centroid);
    }
}

#[test]
fn bin_to_pad_shifts_by_one() {
    let map = SquaresMap::new(28.0);
    assert_eq!(map.bin_to_pad(1), 0);
    assert_eq!(map.bin_to_pad(104), 103);
    // Bin 0 is the collaborator's "no polygon found" answer.
    assert_eq!(map.bin_to_pad(0), -1);
}

#[test]
fn generating_twice_keeps_the_first_plane() {
    let mut map = TrianglesMap::new(20.0);
    map.generate_pad_plane();
    let first = map.plane().unwrap().clone();

    map.generate_pad_plane();
    assert_eq!(map.plane().unwrap(), &first);
}

#[test]
fn degenerate_tessellation_builds_an_empty_plane() {
    let mut settings = settings::load_default_config().unwrap();
    settings.pad_size = 100.0;
    settings.shape = PadShape::Triangles;

    let mut map = map::from_settings(&settings);
    assert_eq!(map.num_pads(), 0);

    map.generate_pad_plane();
    assert_eq!(map.plane().unwrap().num_pads(), 0);
    assert_eq!(map.calc_pad_center(0), Point2::new(-9999.0, -9999.0));
}

#[test]
fn binning_round_trip_recovers_square_pads() {
    let mut map = SquaresMap::new(28.0);
    map.generate_pad_plane();
    let binning = PadBinning::from_plane(map.plane().unwrap());

    for pad_ref in [0, 1, 26, 52, 78, 103] {
        let center = map.calc_pad_center(pad_ref);
        let bin = binning.find_bin(center.x, center.y);
        assert_eq!(map.bin_to_pad(bin), pad_ref);
    }
}

#[test]
fn binning_round_trip_recovers_triangle_pads() {
    let mut map = TrianglesMap::new(20.0);
    map.generate_pad_plane();
    let plane = map.plane().unwrap();
    let binning = PadBinning::from_plane(plane);

    // Query with the true centroid; the vertex-average center of a
    // triangle pad sits on one of its edges.
    for pad_ref in [0, 1, 35, 36, 108, 215] {
        let pad = plane.pad(pad_ref).unwrap();
        let centroid = pad.vertices.iter().fold(Point2::new(0.0, 0.0), |acc, v| {
            Point2::new(acc.x + v.x / 3.0, acc.y + v.y / 3.0)
        });
        let bin = binning.find_bin(centroid.x, centroid.y);
        assert_eq!(map.bin_to_pad(bin) as usize, pad_ref);
    }
}

#[test]
fn points_outside_the_plane_resolve_to_no_pad() {
    let mut map = SquaresMap::new(28.0);
    map.generate_pad_plane();
    let binning = PadBinning::from_plane(map.plane().unwrap());

    let bin = binning.find_bin(500.0, 500.0);
    assert_eq!(bin, 0);
    assert_eq!(map.bin_to_pad(bin), -1);
    assert_eq!(
        map.calc_pad_center(map.bin_to_pad(bin)),
        Point2::new(-9999.0, -9999.0)
    );
}

#[test]
fn dump_succeeds_on_generated_planes() {
    let mut map = SquaresMap::new(28.0);
    map.generate_pad_plane();
    map.dump().unwrap();

    let contents = std::fs::read_to_string(map.dump_file()).unwrap();
    assert_eq!(contents.lines().count(), 25);
    std::fs::remove_file(map.dump_file()).unwrap();
}

#[test]
fn dump_on_unbuilt_map_writes_nothing_but_succeeds() {
    let map = TrianglesMap::new(20.0);
    map.dump().unwrap();
}

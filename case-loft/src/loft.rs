//! Close curves and cross-sections into solids.

use case_curves::{discretize, Curve};
use nalgebra::Point3;

use crate::error::{LoftError, LoftResult};
use crate::solid::Solid;

/// Loft a clockwise ring of edges into a closed solid.
///
/// Each edge is one vertex of the polygon cross-section, in clockwise
/// order viewed from outside the start (t = 0) face. Edge `i` is sampled
/// at `steps[i] + 1` points into a column; corresponding samples across
/// the columns form the cross-sections, consecutive cross-sections are
/// closed into the side surface, and the t = 0 and t = 1 polygons are
/// fan-capped.
///
/// Step counts may differ per edge: edges of different height keep their
/// own resolution, and adjacent columns are stitched by parameter-ordered
/// triangle strips. Equal counts reduce to clean quad rings. A step count
/// far too coarse for a long edge produces sliver triangles; that is not
/// detected here.
///
/// # Errors
///
/// [`LoftError::ArityMismatch`] if `edges` and `steps` differ in length,
/// [`LoftError::TooFewEdges`] for fewer than three edges. Both abort the
/// build: they are caller defects, not data conditions.
pub fn loft<C: Curve>(edges: &[C], steps: &[usize]) -> LoftResult<Solid> {
    if edges.len() != steps.len() {
        return Err(LoftError::ArityMismatch {
            edges: edges.len(),
            steps: steps.len(),
        });
    }
    if edges.len() < 3 {
        return Err(LoftError::TooFewEdges {
            actual: edges.len(),
        });
    }

    let steps: Vec<usize> = steps.iter().map(|&n| n.max(1)).collect();
    let columns: Vec<Vec<Point3<f64>>> = edges
        .iter()
        .zip(&steps)
        .map(|(edge, &n)| discretize(edge, n))
        .collect();

    let total_points: usize = columns.iter().map(Vec::len).sum();
    let side_faces: usize = 2 * steps.iter().sum::<usize>();
    let cap_faces = 2 * (edges.len() - 2);
    let mut solid = Solid::with_capacity(total_points, side_faces + cap_faces);

    let mut bases = Vec::with_capacity(columns.len());
    for column in &columns {
        bases.push(solid.point_count() as u32);
        for &point in column {
            solid.push_point(point);
        }
    }

    // Start cap over the t = 0 ring.
    for i in 1..columns.len() - 1 {
        solid.push_face([bases[0], bases[i + 1], bases[i]]);
    }

    // Side strips between adjacent columns, wrapping around the ring.
    for a in 0..columns.len() {
        let b = (a + 1) % columns.len();
        stitch_columns(&mut solid, bases[a], steps[a], bases[b], steps[b]);
    }

    // Foot cap over the t = 1 ring.
    let foot = |i: usize| bases[i] + columns[i].len() as u32 - 1;
    for i in 1..columns.len() - 1 {
        solid.push_face([foot(0), foot(i), foot(i + 1)]);
    }

    Ok(solid)
}

/// Stitch two sampled columns with a parameter-ordered triangle strip.
///
/// Column a has `steps_a + 1` points starting at `base_a`; likewise b.
/// Advances whichever column's next parameter value is smaller, so equal
/// counts produce the usual two triangles per quad.
fn stitch_columns(solid: &mut Solid, base_a: u32, steps_a: usize, base_b: u32, steps_b: usize) {
    let mut i = 0usize;
    let mut j = 0usize;
    while i < steps_a || j < steps_b {
        let advance_b = j < steps_b
            && (i == steps_a
                || (j + 1) as f64 / steps_b as f64 <= (i + 1) as f64 / steps_a as f64);
        if advance_b {
            solid.push_face([base_a + i as u32, base_b + j as u32, base_b + (j + 1) as u32]);
            j += 1;
        } else {
            solid.push_face([base_a + i as u32, base_b + j as u32, base_a + (i + 1) as u32]);
            i += 1;
        }
    }
}

/// Close a sequence of equal-length cross-section rings into a solid.
///
/// Rings are clockwise viewed from outside the first section, with
/// sections advancing away from that viewpoint. Consecutive rings are
/// stitched with quads (wrapping around the ring) and the first and last
/// rings are fan-capped. The caps assume near-planar rings; strongly
/// non-planar end rings produce self-folded caps, which is not detected.
///
/// # Errors
///
/// [`LoftError::TooFewSections`] for fewer than two sections,
/// [`LoftError::EmptySection`] if the first section has fewer than three
/// points, [`LoftError::SectionMismatch`] if any later section's length
/// differs from the first's.
pub fn skin(sections: &[Vec<Point3<f64>>]) -> LoftResult<Solid> {
    if sections.len() < 2 {
        return Err(LoftError::TooFewSections {
            actual: sections.len(),
        });
    }
    let arity = sections[0].len();
    if arity < 3 {
        return Err(LoftError::EmptySection);
    }
    for (index, section) in sections.iter().enumerate().skip(1) {
        if section.len() != arity {
            return Err(LoftError::SectionMismatch {
                index,
                expected: arity,
                actual: section.len(),
            });
        }
    }

    let ring_faces = 2 * arity * (sections.len() - 1);
    let cap_faces = 2 * (arity - 2);
    let mut solid = Solid::with_capacity(sections.len() * arity, ring_faces + cap_faces);

    let mut bases = Vec::with_capacity(sections.len());
    for section in sections {
        bases.push(solid.point_count() as u32);
        for &point in section {
            solid.push_point(point);
        }
    }

    // First cap.
    for i in 1..arity - 1 {
        solid.push_face([bases[0], bases[0] + (i + 1) as u32, bases[0] + i as u32]);
    }

    // Quads between consecutive rings.
    for s in 0..sections.len() - 1 {
        let ra = bases[s];
        let rb = bases[s + 1];
        for k in 0..arity {
            let k1 = ((k + 1) % arity) as u32;
            let k = k as u32;
            solid.push_face([ra + k, ra + k1, rb + k1]);
            solid.push_face([ra + k, rb + k1, rb + k]);
        }
    }

    // Last cap.
    let last = bases[bases.len() - 1];
    for i in 1..arity - 1 {
        solid.push_face([last, last + i as u32, last + (i + 1) as u32]);
    }

    Ok(solid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use case_curves::QuadraticBezier;

    /// Vertical drop edges at the corners of the unit square, clockwise
    /// viewed from above (the start face).
    fn square_edges() -> Vec<QuadraticBezier> {
        [[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0]]
            .iter()
            .map(|&[x, y]| {
                QuadraticBezier::segment(Point3::new(x, y, 1.0), Point3::new(x, y, 0.0))
            })
            .collect()
    }

    #[test]
    fn arity_mismatch_is_an_error() {
        let edges = square_edges();
        let result = loft(&edges, &[4, 4, 4]);
        assert_eq!(
            result.unwrap_err(),
            LoftError::ArityMismatch { edges: 4, steps: 3 }
        );
    }

    #[test]
    fn too_few_edges_is_an_error() {
        let edges = square_edges();
        let result = loft(&edges[..2], &[4, 4]);
        assert_eq!(result.unwrap_err(), LoftError::TooFewEdges { actual: 2 });
    }

    #[test]
    fn uniform_prism_counts_and_volume() {
        let edges = square_edges();
        let solid = loft(&edges, &[2, 2, 2, 2]).unwrap();

        // 4 columns of 3 points; 2 triangles per quad on 4 sides of 2
        // rows; 2 cap triangles top and bottom.
        assert_eq!(solid.point_count(), 12);
        assert_eq!(solid.face_count(), 8 * 2 + 4);
        assert_relative_eq!(solid.signed_volume(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn ragged_prism_is_closed() {
        let edges = square_edges();
        let solid = loft(&edges, &[2, 1, 1, 1]).unwrap();

        assert_eq!(solid.point_count(), 3 + 2 + 2 + 2);
        assert_eq!(solid.face_count(), 2 * (2 + 1 + 1 + 1) + 4);
        // Straight edges: the ragged stitch still closes the same prism.
        assert_relative_eq!(solid.signed_volume(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn zero_steps_are_clamped() {
        let edges = square_edges();
        let solid = loft(&edges, &[0, 0, 0, 0]).unwrap();

        assert_eq!(solid.point_count(), 8);
        assert_relative_eq!(solid.signed_volume(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn triangle_ring_lofts() {
        let edges: Vec<QuadraticBezier> = [[0.0, 0.0], [0.0, 1.0], [1.0, 0.0]]
            .iter()
            .map(|&[x, y]| {
                QuadraticBezier::segment(Point3::new(x, y, 2.0), Point3::new(x, y, 0.0))
            })
            .collect();

        let solid = loft(&edges, &[1, 1, 1]).unwrap();
        assert_eq!(solid.face_count(), 2 * 3 + 2);
        assert_relative_eq!(solid.signed_volume(), 1.0, epsilon = 1e-12);
    }

    fn square_ring(z: f64) -> Vec<Point3<f64>> {
        // Clockwise viewed from below (outside the first section).
        vec![
            Point3::new(0.0, 0.0, z),
            Point3::new(1.0, 0.0, z),
            Point3::new(1.0, 1.0, z),
            Point3::new(0.0, 1.0, z),
        ]
    }

    #[test]
    fn skin_closes_a_cube() {
        let sections = vec![square_ring(0.0), square_ring(1.0)];
        let solid = skin(&sections).unwrap();

        assert_eq!(solid.point_count(), 8);
        assert_eq!(solid.face_count(), 8 + 4);
        assert_relative_eq!(solid.signed_volume(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn skin_stacks_many_sections() {
        let sections: Vec<_> = (0..5).map(|i| square_ring(f64::from(i))).collect();
        let solid = skin(&sections).unwrap();

        assert_eq!(solid.point_count(), 20);
        assert_eq!(solid.face_count(), 2 * 4 * 4 + 4);
        assert_relative_eq!(solid.signed_volume(), 4.0, epsilon = 1e-12);
    }

    #[test]
    fn skin_rejects_single_section() {
        let sections = vec![square_ring(0.0)];
        assert_eq!(
            skin(&sections).unwrap_err(),
            LoftError::TooFewSections { actual: 1 }
        );
    }

    #[test]
    fn skin_rejects_ragged_sections() {
        let mut short = square_ring(1.0);
        short.pop();
        let sections = vec![square_ring(0.0), short];

        assert_eq!(
            skin(&sections).unwrap_err(),
            LoftError::SectionMismatch {
                index: 1,
                expected: 4,
                actual: 3,
            }
        );
    }

    #[test]
    fn skin_rejects_degenerate_ring() {
        let sections = vec![
            vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)],
            vec![Point3::new(0.0, 0.0, 1.0), Point3::new(1.0, 0.0, 1.0)],
        ];
        assert_eq!(skin(&sections).unwrap_err(), LoftError::EmptySection);
    }
}

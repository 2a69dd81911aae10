//! Perimeter assembly: walking the sparse wall maps and unioning every
//! wall with the bridges computed between present neighbors.
//!
//! Walls are stored sparsely; a missing entry means the layout stage put
//! no wall there, and every traversal here filters absences out rather
//! than treating them as errors. Bridge computations are independent, so
//! they are evaluated in parallel via rayon when configured; the final
//! union is a plain concatenation handed to the downstream boolean
//! kernel.

use std::collections::BTreeMap;

use case_loft::Solid;
use rayon::prelude::*;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::{ClosedConfig, SkeletonConfig};
use crate::connect::{Bridge, JoinKind};
use crate::error::WallResult;
use crate::wall::Wall;

/// The up-to-two walls a column contributes to the perimeter.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ColumnWalls {
    /// Wall dropped from the column's north key face.
    pub north: Option<Wall>,
    /// Wall dropped from the column's south key face.
    pub south: Option<Wall>,
}

/// Sparse mapping from column and side-row indices to walls.
///
/// Side rows are keyed north to south; columns west to east. Entries may
/// be absent anywhere, and absent walls are filtered out of assembly,
/// never dereferenced.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WallGrid {
    /// Column walls, keyed by column index.
    pub cols: BTreeMap<usize, ColumnWalls>,
    /// West side walls, keyed by row index.
    pub west: BTreeMap<usize, Wall>,
    /// East side walls, keyed by row index.
    pub east: BTreeMap<usize, Wall>,
}

impl WallGrid {
    /// Creates an empty grid.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every wall present in the grid.
    pub fn walls(&self) -> impl Iterator<Item = &Wall> {
        self.cols
            .values()
            .flat_map(|col| col.north.iter().chain(col.south.iter()))
            .chain(self.west.values())
            .chain(self.east.values())
    }

    /// Whether the grid holds no walls at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.walls().next().is_none()
    }
}

/// The main body's wall grid plus the auxiliary thumb cluster's.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CaseWalls {
    /// Walls of the main key body.
    pub body: WallGrid,
    /// Walls of the thumb cluster.
    pub thumb: WallGrid,
}

impl CaseWalls {
    /// Creates an empty case.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every wall present in either grid.
    pub fn walls(&self) -> impl Iterator<Item = &Wall> {
        self.body.walls().chain(self.thumb.walls())
    }
}

type Join<'a> = (&'a Wall, &'a Wall, JoinKind);

fn chain<'a>(joins: &mut Vec<Join<'a>>, walls: &[&'a Wall], kind: JoinKind) {
    for pair in walls.windows(2) {
        joins.push((pair[0], pair[1], kind));
    }
}

fn link<'a>(
    joins: &mut Vec<Join<'a>>,
    from: Option<&'a Wall>,
    to: Option<&'a Wall>,
    kind: JoinKind,
) {
    if let (Some(w1), Some(w2)) = (from, to) {
        joins.push((w1, w2, kind));
    }
}

fn build_bridges(joins: &[Join<'_>], parallel: bool) -> WallResult<Vec<Bridge>> {
    if parallel {
        joins.par_iter().map(|&(w1, w2, kind)| kind.apply(w1, w2)).collect()
    } else {
        joins.iter().map(|&(w1, w2, kind)| kind.apply(w1, w2)).collect()
    }
}

fn union_parts(walls: &[&Wall], bridges: &[Bridge]) -> Solid {
    Solid::union_all(walls.iter().map(|wall| &wall.solid).chain(bridges.iter()))
}

/// Assembles the open skeletal perimeter of a case.
///
/// The walk is clockwise: up the west side, around the northwest corner,
/// across the north row, down the east side via the northeast bow, back
/// along the south row (with the inward elbow at the far-column
/// boundary), then out to the thumb cluster through a snake bow, around
/// its own corners, and back to the west side through a second snake.
/// Only present walls participate; a gap in the maps simply chains the
/// next present pair. An entirely empty case yields an empty solid.
///
/// # Errors
///
/// Returns an error if any bridge fails to loft.
pub fn skeleton(walls: &CaseWalls, config: &SkeletonConfig) -> WallResult<Solid> {
    let body = &walls.body;
    let thumb = &walls.thumb;

    let west: Vec<&Wall> = body.west.values().rev().collect();
    let norths: Vec<&Wall> = body.cols.values().filter_map(|col| col.north.as_ref()).collect();
    let east: Vec<&Wall> = body.east.values().collect();
    let souths: Vec<(usize, &Wall)> = body
        .cols
        .iter()
        .rev()
        .filter_map(|(idx, col)| col.south.as_ref().map(|wall| (*idx, wall)))
        .collect();

    let mut joins: Vec<Join<'_>> = Vec::new();
    chain(&mut joins, &west, JoinKind::Straight(config.side_links));
    link(
        &mut joins,
        west.last().copied(),
        norths.first().copied(),
        JoinKind::BezierElbow(config.west_corner),
    );
    chain(&mut joins, &norths, JoinKind::Straight(config.north_links));
    link(
        &mut joins,
        norths.last().copied(),
        east.first().copied(),
        JoinKind::CubicBow(config.east_corner),
    );
    chain(&mut joins, &east, JoinKind::Straight(config.side_links));
    link(
        &mut joins,
        east.last().copied(),
        souths.first().map(|&(_, wall)| wall),
        JoinKind::BezierElbow(config.south_corner),
    );
    for pair in souths.windows(2) {
        let (idx, w1) = pair[0];
        let (_, w2) = pair[1];
        let kind = if idx == config.far_col {
            JoinKind::InwardElbow(config.far_elbow)
        } else {
            JoinKind::Straight(config.south_links)
        };
        joins.push((w1, w2, kind));
    }

    let t_east: Vec<&Wall> = thumb.east.values().collect();
    let t_souths: Vec<&Wall> =
        thumb.cols.values().rev().filter_map(|col| col.south.as_ref()).collect();
    let t_west: Vec<&Wall> = thumb.west.values().rev().collect();

    link(
        &mut joins,
        souths.last().map(|&(_, wall)| wall),
        t_east.first().copied(),
        JoinKind::SnakeBow(config.thumb_links),
    );
    chain(&mut joins, &t_east, JoinKind::Straight(config.side_links));
    link(
        &mut joins,
        t_east.last().copied(),
        t_souths.first().copied(),
        JoinKind::BezierElbow(config.thumb_corners),
    );
    chain(&mut joins, &t_souths, JoinKind::Straight(config.south_links));
    link(
        &mut joins,
        t_souths.last().copied(),
        t_west.first().copied(),
        JoinKind::BezierElbow(config.thumb_corners),
    );
    chain(&mut joins, &t_west, JoinKind::Straight(config.side_links));
    link(
        &mut joins,
        t_west.last().copied(),
        west.first().copied(),
        JoinKind::SnakeBow(config.thumb_links),
    );

    let bridges = build_bridges(&joins, config.parallel)?;
    let parts: Vec<&Wall> = walls.walls().collect();
    let combined = union_parts(&parts, &bridges);
    info!(
        walls = parts.len(),
        bridges = bridges.len(),
        faces = combined.face_count(),
        "assembled skeleton perimeter"
    );
    Ok(combined)
}

/// Assembles the closed perimeter of a case.
///
/// Every adjacent pair of main-body walls is joined across its full
/// lateral faces, corners included, closing the loop back from the south
/// row to the west side. The side-wall rows use straight links, since
/// their faces already align. All present walls, thumb cluster included,
/// are unioned into the output.
///
/// # Errors
///
/// Returns an error if any bridge fails to loft.
pub fn closed(walls: &CaseWalls, config: &ClosedConfig) -> WallResult<Solid> {
    let body = &walls.body;

    let west: Vec<&Wall> = body.west.values().rev().collect();
    let norths: Vec<&Wall> = body.cols.values().filter_map(|col| col.north.as_ref()).collect();
    let east: Vec<&Wall> = body.east.values().collect();
    let souths: Vec<&Wall> =
        body.cols.values().rev().filter_map(|col| col.south.as_ref()).collect();

    let mut joins: Vec<Join<'_>> = Vec::new();
    chain(&mut joins, &west, JoinKind::Straight(config.side_links));
    link(
        &mut joins,
        west.last().copied(),
        norths.first().copied(),
        JoinKind::JoinEdges(config.joins),
    );
    chain(&mut joins, &norths, JoinKind::JoinEdges(config.joins));
    link(
        &mut joins,
        norths.last().copied(),
        east.first().copied(),
        JoinKind::JoinEdges(config.joins),
    );
    chain(&mut joins, &east, JoinKind::Straight(config.side_links));
    link(
        &mut joins,
        east.last().copied(),
        souths.first().copied(),
        JoinKind::JoinEdges(config.joins),
    );
    chain(&mut joins, &souths, JoinKind::JoinEdges(config.joins));
    link(
        &mut joins,
        souths.last().copied(),
        west.first().copied(),
        JoinKind::JoinEdges(config.joins),
    );

    // TODO: close the thumb cluster against the body once its wall layout
    // stabilizes; its walls are unioned unbridged until then.

    let bridges = build_bridges(&joins, config.parallel)?;
    let parts: Vec<&Wall> = walls.walls().collect();
    let combined = union_parts(&parts, &bridges);
    info!(
        walls = parts.len(),
        bridges = bridges.len(),
        faces = combined.face_count(),
        "assembled closed perimeter"
    );
    Ok(combined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use case_curves::{Point3, Vector3};

    use crate::config::WallConfig;
    use crate::points::Points;
    use crate::wall::Aperture;

    fn wall(points: Points, outward: Vector3<f64>) -> Wall {
        Wall::build(&Aperture::new(points, outward), &WallConfig::default()).unwrap()
    }

    fn north_wall(x0: f64, x1: f64, y: f64) -> Wall {
        wall(
            Points::new(
                Point3::new(x0, y, 9.0),
                Point3::new(x1, y, 9.0),
                Point3::new(x0, y, 7.5),
                Point3::new(x1, y, 7.5),
            ),
            Vector3::y(),
        )
    }

    fn south_wall(x0: f64, x1: f64, y: f64) -> Wall {
        wall(
            Points::new(
                Point3::new(x1, y, 9.0),
                Point3::new(x0, y, 9.0),
                Point3::new(x1, y, 7.5),
                Point3::new(x0, y, 7.5),
            ),
            -Vector3::y(),
        )
    }

    fn west_wall(y0: f64, y1: f64, x: f64) -> Wall {
        wall(
            Points::new(
                Point3::new(x, y0, 9.0),
                Point3::new(x, y1, 9.0),
                Point3::new(x, y0, 7.5),
                Point3::new(x, y1, 7.5),
            ),
            -Vector3::x(),
        )
    }

    fn east_wall(y0: f64, y1: f64, x: f64) -> Wall {
        wall(
            Points::new(
                Point3::new(x, y1, 9.0),
                Point3::new(x, y0, 9.0),
                Point3::new(x, y1, 7.5),
                Point3::new(x, y0, 7.5),
            ),
            Vector3::x(),
        )
    }

    fn column(north: Option<Wall>, south: Option<Wall>) -> ColumnWalls {
        ColumnWalls { north, south }
    }

    fn sample_case() -> CaseWalls {
        let mut case = CaseWalls::new();
        case.body.cols.insert(
            0,
            column(Some(north_wall(0.0, 4.0, 20.0)), Some(south_wall(0.0, 4.0, 0.0))),
        );
        case.body.cols.insert(
            1,
            column(Some(north_wall(8.0, 12.0, 20.0)), Some(south_wall(8.0, 12.0, 0.0))),
        );
        case.body.cols.insert(
            2,
            column(Some(north_wall(16.0, 20.0, 20.0)), Some(south_wall(16.0, 20.0, 0.0))),
        );
        case.body.west.insert(0, west_wall(12.0, 16.0, -2.0));
        case.body.east.insert(0, east_wall(12.0, 16.0, 22.0));

        case.thumb.east.insert(0, east_wall(-12.0, -8.0, 0.0));
        case.thumb.cols.insert(0, column(None, Some(south_wall(-8.0, -4.0, -14.0))));
        case.thumb.west.insert(0, west_wall(-12.0, -8.0, -10.0));
        case
    }

    #[test]
    fn walls_iterates_every_present_wall() {
        let case = sample_case();
        assert_eq!(case.body.walls().count(), 8);
        assert_eq!(case.walls().count(), 11);
        assert!(!case.body.is_empty());
        assert!(WallGrid::new().is_empty());
    }

    #[test]
    fn skeleton_assembles_walls_and_bridges() {
        let case = sample_case();
        let solid = skeleton(&case, &SkeletonConfig::default()).unwrap();

        let wall_faces: usize = case.walls().map(|w| w.solid.face_count()).sum();
        assert!(solid.face_count() > wall_faces);
        assert!(solid.signed_volume() > 0.0);
    }

    #[test]
    fn skeleton_is_deterministic_across_parallelism() {
        let case = sample_case();
        let parallel = skeleton(&case, &SkeletonConfig::default()).unwrap();
        let serial = skeleton(&case, &SkeletonConfig::default().with_parallel(false)).unwrap();
        assert_eq!(parallel, serial);
    }

    #[test]
    fn skeleton_elides_missing_walls() {
        let mut case = sample_case();
        if let Some(col) = case.body.cols.get_mut(&1) {
            col.north = None;
        }
        case.thumb = WallGrid::new();

        let solid = skeleton(&case, &SkeletonConfig::default()).unwrap();
        assert!(solid.signed_volume() > 0.0);

        let full = skeleton(&sample_case(), &SkeletonConfig::default()).unwrap();
        assert!(solid.face_count() < full.face_count());
    }

    #[test]
    fn skeleton_uses_the_far_column_boundary() {
        let case = sample_case();
        let config = SkeletonConfig::default().with_far_col(2).with_parallel(false);
        let solid = skeleton(&case, &config).unwrap();
        assert!(solid.signed_volume() > 0.0);

        // the inward elbow replaces a straight link, changing the shape
        let plain = skeleton(&case, &SkeletonConfig::default().with_parallel(false)).unwrap();
        assert_ne!(solid, plain);
    }

    #[test]
    fn empty_case_yields_an_empty_solid() {
        let case = CaseWalls::new();
        let open = skeleton(&case, &SkeletonConfig::default()).unwrap();
        let shut = closed(&case, &ClosedConfig::default()).unwrap();
        assert!(open.is_empty());
        assert!(shut.is_empty());
    }

    #[test]
    fn closed_chains_full_face_joins_around_the_body() {
        let case = sample_case();
        let solid = closed(&case, &ClosedConfig::default()).unwrap();

        let wall_faces: usize = case.walls().map(|w| w.solid.face_count()).sum();
        assert!(solid.face_count() > wall_faces);
        assert!(solid.signed_volume() > 0.0);
    }

    #[test]
    fn closed_is_deterministic_across_parallelism() {
        let case = sample_case();
        let parallel = closed(&case, &ClosedConfig::default()).unwrap();
        let serial = closed(&case, &ClosedConfig::default().with_parallel(false)).unwrap();
        assert_eq!(parallel, serial);
    }
}

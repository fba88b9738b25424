//! Drag gesture geometry.

use serde::{Deserialize, Serialize};

/// Pixel distance covered by one interpolated drag step.
pub const DRAG_STEP: i64 = 30;

/// A screen coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Ordered points a drag visits between press and release.
///
/// Always starts at the source and ends at the target, so it holds at least two points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPath {
    points: Vec<Point>,
}

impl DragPath {
    pub fn source(&self) -> Point {
        self.points[0]
    }

    pub fn target(&self) -> Point {
        self.points[self.points.len() - 1]
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Never true; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

impl<'a> IntoIterator for &'a DragPath {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Plan the polyline for a straight drag from `source` to `target`.
///
/// The number of interpolated points is the larger axis delta divided by
/// [`DRAG_STEP`], truncated toward zero. The first interpolated point repeats the
/// source. When both deltas are under one step no points are interpolated and the
/// path is exactly `[source, target]`.
pub fn plan_drag_path(source: Point, target: Point) -> DragPath {
    let dx = i64::from(target.x) - i64::from(source.x);
    let dy = i64::from(target.y) - i64::from(source.y);
    let steps = (dx / DRAG_STEP).abs().max((dy / DRAG_STEP).abs());

    let mut points = Vec::with_capacity(steps as usize + 2);
    points.push(source);
    for i in 0..steps {
        // Interpolated values lie between source and target, so they fit in i32.
        let x = i64::from(source.x) + dx * i / steps;
        let y = i64::from(source.y) + dy * i / steps;
        points.push(Point::new(x as i32, y as i32));
    }
    points.push(target);

    DragPath { points }
}

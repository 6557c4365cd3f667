//! Recorded wire paths, pointer hit-testing and hover emphasis.

use crate::palette::SerializableColor;
use kurbo::{Point, Vec2};
use peniko::Color;
use serde::{Deserialize, Serialize};

/// Maximum pointer distance for a wire to count as hovered.
pub const HOVER_THRESHOLD: f64 = 15.0;

/// A wire as drawn: polyline vertices plus the identity used for hover grouping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WirePath {
    /// Polyline vertices, at least two.
    pub points: Vec<Point>,
    pub color: SerializableColor,
    /// Signal identity shared by every wire of one logical signal (`"A"`, `"A'"`, `"Term 1"`).
    pub label: String,
    pub stroke_width: f64,
    /// Unique per-segment identifier (`"bus-A-top"`, `"term0-1-B'"`).
    pub id: Option<String>,
}

impl WirePath {
    pub fn new(
        points: Vec<Point>,
        color: Color,
        label: impl Into<String>,
        stroke_width: f64,
        id: Option<String>,
    ) -> Self {
        Self {
            points,
            color: color.into(),
            label: label.into(),
            stroke_width,
            id,
        }
    }

    /// Stroke color as a peniko Color.
    pub fn color(&self) -> Color {
        self.color.into()
    }
}

/// Distance from a point to a line segment (a→b).
pub fn point_to_segment_dist(point: Point, a: Point, b: Point) -> f64 {
    let seg = Vec2::new(b.x - a.x, b.y - a.y);
    let pv = Vec2::new(point.x - a.x, point.y - a.y);
    let len_sq = seg.hypot2();
    if len_sq < f64::EPSILON {
        return pv.hypot();
    }
    let t = (pv.dot(seg) / len_sq).clamp(0.0, 1.0);
    let proj = Point::new(a.x + t * seg.x, a.y + t * seg.y);
    ((point.x - proj.x).powi(2) + (point.y - proj.y).powi(2)).sqrt()
}

/// Minimum distance from a point to a polyline (sequence of connected segments).
pub fn point_to_polyline_dist(point: Point, points: &[Point]) -> f64 {
    points
        .windows(2)
        .map(|w| point_to_segment_dist(point, w[0], w[1]))
        .fold(f64::INFINITY, f64::min)
}

/// Find the wire whose closest segment is nearest to `point`.
///
/// Only wires closer than [`HOVER_THRESHOLD`] qualify. On equal distances the
/// earlier wire wins.
pub fn find_nearest_path(point: Point, paths: &[WirePath]) -> Option<&WirePath> {
    let mut nearest = None;
    let mut min_dist = HOVER_THRESHOLD;

    for path in paths {
        let dist = point_to_polyline_dist(point, &path.points);
        if dist < min_dist {
            min_dist = dist;
            nearest = Some(path);
        }
    }

    nearest
}

/// How a drawable should look relative to the current hover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Emphasis {
    /// No hover active, or a primitive related to the hover.
    #[default]
    Normal,
    /// Same signal as the hovered wire.
    Highlighted,
    /// A hover is active and this belongs to another signal.
    Dimmed,
}

/// The wire currently under the pointer, if any.
///
/// Owned by the caller and passed into every draw; the renderer never keeps it.
#[derive(Debug, Clone, Copy, Default)]
pub struct HoverState<'a> {
    hovered: Option<&'a WirePath>,
}

impl<'a> HoverState<'a> {
    pub fn new(hovered: Option<&'a WirePath>) -> Self {
        Self { hovered }
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn hovered(&self) -> Option<&'a WirePath> {
        self.hovered
    }

    pub fn label(&self) -> Option<&'a str> {
        self.hovered.map(|w| w.label.as_str())
    }

    /// Emphasis for a wire or dot: matched by label, not by id.
    ///
    /// A drawable without a label is dimmed whenever a hover is active.
    pub fn wire_emphasis(&self, label: Option<&str>) -> Emphasis {
        match (self.label(), label) {
            (None, _) => Emphasis::Normal,
            (Some(hovered), Some(label)) if hovered == label => Emphasis::Highlighted,
            _ => Emphasis::Dimmed,
        }
    }

    /// Emphasis for a gate or port related to any of the given signal labels.
    pub fn primitive_emphasis(&self, related: &[&str]) -> Emphasis {
        match self.label() {
            None => Emphasis::Normal,
            Some(hovered) if related.contains(&hovered) => Emphasis::Normal,
            Some(_) => Emphasis::Dimmed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wire(label: &str, points: &[(f64, f64)]) -> WirePath {
        WirePath::new(
            points.iter().map(|&(x, y)| Point::new(x, y)).collect(),
            Color::WHITE,
            label,
            2.0,
            Some(format!("{label}-id")),
        )
    }

    #[test]
    fn test_segment_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(100.0, 0.0);
        assert!((point_to_segment_dist(Point::new(50.0, 10.0), a, b) - 10.0).abs() < 1e-9);
        // Clamped to endpoints.
        assert!((point_to_segment_dist(Point::new(-3.0, 4.0), a, b) - 5.0).abs() < 1e-9);
        assert!((point_to_segment_dist(Point::new(103.0, 4.0), a, b) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_segment() {
        let a = Point::new(10.0, 10.0);
        assert!((point_to_segment_dist(Point::new(13.0, 14.0), a, a) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_polyline_distance() {
        let points = [Point::new(0.0, 0.0), Point::new(100.0, 0.0), Point::new(100.0, 100.0)];
        assert!((point_to_polyline_dist(Point::new(90.0, 50.0), &points) - 10.0).abs() < 1e-9);
        assert_eq!(point_to_polyline_dist(Point::new(0.0, 0.0), &points[..1]), f64::INFINITY);
    }

    #[test]
    fn test_find_nearest_on_midpoint() {
        let paths = vec![
            wire("A", &[(0.0, 0.0), (100.0, 0.0)]),
            wire("B", &[(0.0, 50.0), (100.0, 50.0), (100.0, 150.0)]),
        ];
        let hit = find_nearest_path(Point::new(100.0, 100.0), &paths).unwrap();
        assert_eq!(hit.label, "B");
        let hit = find_nearest_path(Point::new(50.0, 0.0), &paths).unwrap();
        assert_eq!(hit.label, "A");
    }

    #[test]
    fn test_find_nearest_prefers_closest() {
        let paths = vec![
            wire("A", &[(0.0, 0.0), (100.0, 0.0)]),
            wire("B", &[(0.0, 10.0), (100.0, 10.0)]),
        ];
        let hit = find_nearest_path(Point::new(50.0, 7.0), &paths).unwrap();
        assert_eq!(hit.label, "B");
    }

    #[test]
    fn test_find_nearest_tie_first_wins() {
        let paths = vec![
            wire("A", &[(0.0, 0.0), (100.0, 0.0)]),
            wire("B", &[(0.0, 10.0), (100.0, 10.0)]),
        ];
        let hit = find_nearest_path(Point::new(50.0, 5.0), &paths).unwrap();
        assert_eq!(hit.label, "A");
    }

    #[test]
    fn test_find_nearest_outside_threshold() {
        let paths = vec![wire("A", &[(0.0, 0.0), (100.0, 0.0)])];
        assert!(find_nearest_path(Point::new(50.0, HOVER_THRESHOLD), &paths).is_none());
        assert!(find_nearest_path(Point::new(50.0, 14.9), &paths).is_some());
        assert!(find_nearest_path(Point::new(500.0, 500.0), &[]).is_none());
    }

    #[test]
    fn test_wire_emphasis_by_label() {
        let hovered = wire("A'", &[(0.0, 0.0), (1.0, 0.0)]);
        let hover = HoverState::new(Some(&hovered));
        assert_eq!(hover.wire_emphasis(Some("A'")), Emphasis::Highlighted);
        assert_eq!(hover.wire_emphasis(Some("A")), Emphasis::Dimmed);
        assert_eq!(hover.wire_emphasis(None), Emphasis::Dimmed);

        let idle = HoverState::none();
        assert_eq!(idle.wire_emphasis(Some("A")), Emphasis::Normal);
        assert_eq!(idle.wire_emphasis(None), Emphasis::Normal);
    }

    #[test]
    fn test_primitive_emphasis() {
        let hovered = wire("Term 2", &[(0.0, 0.0), (1.0, 0.0)]);
        let hover = HoverState::new(Some(&hovered));
        assert_eq!(hover.primitive_emphasis(&["Term 2"]), Emphasis::Normal);
        assert_eq!(hover.primitive_emphasis(&["Term 1"]), Emphasis::Dimmed);
        assert_eq!(hover.primitive_emphasis(&[]), Emphasis::Dimmed);
        assert_eq!(HoverState::none().primitive_emphasis(&[]), Emphasis::Normal);
    }
}

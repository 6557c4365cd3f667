//! Wire routing: rounded polylines, junction dots and hover highlighting.

use crate::painter::Painter;
use gateink_core::{Emphasis, WirePath};
use kurbo::{BezPath, Cap, Circle, Join, Point, Shape, Stroke, Vec2};
use peniko::Color;

/// Corner radius at each bend of a wire.
pub const CORNER_RADIUS: f64 = 6.0;

/// Extra stroke width of a highlighted wire.
const HIGHLIGHT_EXTRA_WIDTH: f64 = 2.0;

/// Build a polyline path with rounded interior corners.
///
/// Each segment is shortened by the corner radius on both sides of a joint
/// and the gap bridged with a quadratic curve through the corner vertex.
/// The radius at a joint never exceeds half of either adjoining segment.
pub fn rounded_polyline(points: &[Point], radius: f64) -> BezPath {
    let mut path = BezPath::new();
    let Some((&first, rest)) = points.split_first() else {
        return path;
    };
    path.move_to(first);
    let Some((&last, interior)) = rest.split_last() else {
        return path;
    };

    let mut prev = first;
    for (i, &corner) in interior.iter().enumerate() {
        let next = interior.get(i + 1).copied().unwrap_or(last);
        let incoming = corner - prev;
        let outgoing = next - corner;
        let r = radius
            .min(incoming.hypot() / 2.0)
            .min(outgoing.hypot() / 2.0)
            .max(0.0);

        let entry = corner - unit(incoming) * r;
        let exit = corner + unit(outgoing) * r;
        path.line_to(entry);
        if r > 0.0 {
            path.quad_to(corner, exit);
        }
        prev = corner;
    }
    path.line_to(last);
    path
}

/// Unit vector, or zero for a degenerate segment.
fn unit(v: Vec2) -> Vec2 {
    let len = v.hypot();
    if len < f64::EPSILON { Vec2::ZERO } else { v / len }
}

fn wire_stroke(width: f64) -> Stroke {
    Stroke::new(width).with_caps(Cap::Round).with_join(Join::Round)
}

impl Painter<'_> {
    /// Draw a wire through `points` and record it for hit-testing.
    ///
    /// Wires sharing the hovered wire's label are highlighted; all others are
    /// dimmed while a hover is active.
    pub fn draw_wire(
        &mut self,
        points: &[Point],
        color: Color,
        label: &str,
        width: f64,
        id: Option<&str>,
    ) {
        if points.len() < 2 {
            log::warn!("Skipping wire {label:?} with {} point(s)", points.len());
            return;
        }
        self.wire_paths.push(WirePath::new(
            points.to_vec(),
            color,
            label,
            width,
            id.map(str::to_owned),
        ));

        let emphasis = self.hover.wire_emphasis(Some(label));
        let (stroke_color, stroke_width, glow) = match emphasis {
            Emphasis::Highlighted => (
                self.theme.wire_active(),
                width + HIGHLIGHT_EXTRA_WIDTH,
                Some(color),
            ),
            Emphasis::Dimmed => (self.theme.dimmed(), width, None),
            Emphasis::Normal => (color, width, None),
        };

        let path = if points.len() == 2 {
            let mut line = BezPath::new();
            line.move_to(points[0]);
            line.line_to(points[1]);
            line
        } else {
            rounded_polyline(points, CORNER_RADIUS)
        };
        self.surface
            .stroke(&path, &wire_stroke(stroke_width), stroke_color, glow);
    }

    /// Filled dot marking a tap or branch point on a bus.
    ///
    /// With a label it follows the wire hover rule; without one it is dimmed
    /// whenever any hover is active.
    pub fn draw_junction_dot(
        &mut self,
        center: Point,
        color: Color,
        radius: f64,
        label: Option<&str>,
    ) {
        let (fill, radius, glow) = match self.hover.wire_emphasis(label) {
            Emphasis::Highlighted => (self.theme.wire_active(), radius + 1.0, Some(color)),
            Emphasis::Dimmed => (self.theme.dimmed(), radius, None),
            Emphasis::Normal => (color, radius, None),
        };
        let dot = Circle::new(center, radius).to_path(0.1);
        self.surface.fill(&dot, fill, glow);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::{DrawCommand, RecordingSurface};
    use gateink_core::{HoverState, SerializableColor, Theme};
    use kurbo::PathEl;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn test_straight_wire_has_no_curves() {
        let path = rounded_polyline(&pts(&[(0.0, 0.0), (100.0, 0.0)]), CORNER_RADIUS);
        assert_eq!(path.elements().len(), 2);
    }

    #[test]
    fn test_corner_is_rounded() {
        let path = rounded_polyline(&pts(&[(0.0, 0.0), (100.0, 0.0), (100.0, 100.0)]), 6.0);
        let els = path.elements();
        assert_eq!(els[1], PathEl::LineTo(Point::new(94.0, 0.0)));
        assert_eq!(
            els[2],
            PathEl::QuadTo(Point::new(100.0, 0.0), Point::new(100.0, 6.0))
        );
        assert_eq!(els[3], PathEl::LineTo(Point::new(100.0, 100.0)));
    }

    #[test]
    fn test_corner_radius_clamped_to_short_segment() {
        // 4-unit segment: radius must shrink to 2.
        let path = rounded_polyline(&pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 50.0)]), 6.0);
        let els = path.elements();
        assert_eq!(els[1], PathEl::LineTo(Point::new(2.0, 0.0)));
        assert_eq!(els[2], PathEl::QuadTo(Point::new(4.0, 0.0), Point::new(4.0, 2.0)));
    }

    #[test]
    fn test_degenerate_corner() {
        let path = rounded_polyline(&pts(&[(0.0, 0.0), (0.0, 0.0), (10.0, 0.0)]), 6.0);
        assert!(
            path.elements()
                .iter()
                .all(|el| !matches!(el, PathEl::QuadTo(..)))
        );
    }

    #[test]
    fn test_draw_wire_records_path() {
        let mut surface = RecordingSurface::new(800.0, 450.0);
        let theme = Theme::default();
        let mut painter = Painter::new(&mut surface, &theme, HoverState::none());
        painter.draw_wire(
            &pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]),
            Color::WHITE,
            "A",
            2.0,
            Some("bus-A-top"),
        );
        painter.draw_wire(&pts(&[(0.0, 0.0)]), Color::WHITE, "B", 2.0, None);
        let paths = painter.into_wire_paths();
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].id.as_deref(), Some("bus-A-top"));
        assert_eq!(paths[0].points.len(), 3);
    }

    #[test]
    fn test_hover_highlights_whole_signal() {
        let theme = Theme::default();
        let hovered = WirePath::new(pts(&[(0.0, 0.0), (1.0, 0.0)]), Color::WHITE, "A'", 2.0, None);
        let mut surface = RecordingSurface::new(800.0, 450.0);
        let mut painter = Painter::new(&mut surface, &theme, HoverState::new(Some(&hovered)));
        let red = Color::from_rgba8(255, 0, 0, 255);
        painter.draw_wire(&pts(&[(0.0, 0.0), (5.0, 0.0)]), red, "A'", 2.0, Some("bus-A'-top"));
        painter.draw_wire(&pts(&[(0.0, 9.0), (5.0, 9.0)]), red, "A'", 2.5, Some("term0-0-A'"));
        painter.draw_wire(&pts(&[(0.0, 20.0), (5.0, 20.0)]), red, "A", 2.0, Some("bus-A-top"));

        let strokes: Vec<(f64, SerializableColor, Option<SerializableColor>)> = surface
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Stroke { width, color, glow, .. } => Some((*width, *color, *glow)),
                _ => None,
            })
            .collect();
        let active = SerializableColor::from(theme.wire_active());
        assert_eq!(strokes[0], (4.0, active, Some(red.into())));
        assert_eq!(strokes[1], (4.5, active, Some(red.into())));
        assert_eq!(strokes[2], (2.0, theme.dimmed, None));
    }

    #[test]
    fn test_junction_dot_emphasis() {
        let theme = Theme::default();
        let hovered = WirePath::new(pts(&[(0.0, 0.0), (1.0, 0.0)]), Color::WHITE, "B", 2.0, None);
        let mut surface = RecordingSurface::new(800.0, 450.0);
        let mut painter = Painter::new(&mut surface, &theme, HoverState::new(Some(&hovered)));
        let green = Color::from_rgba8(0, 255, 0, 255);
        painter.draw_junction_dot(Point::new(5.0, 5.0), green, 4.0, Some("B"));
        painter.draw_junction_dot(Point::new(5.0, 5.0), green, 4.0, Some("C"));
        painter.draw_junction_dot(Point::new(5.0, 5.0), green, 4.0, None);

        let fills: Vec<(SerializableColor, Option<SerializableColor>, f64)> = surface
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Fill { path, color, glow } => {
                    Some((*color, *glow, path.bounding_box().width() / 2.0))
                }
                _ => None,
            })
            .collect();
        assert_eq!((fills[0].0, fills[0].1), (theme.wire_active, Some(green.into())));
        assert_eq!((fills[1].0, fills[1].1), (theme.dimmed, None));
        assert_eq!((fills[2].0, fills[2].1), (theme.dimmed, None));
        // Highlighted dots grow by one unit; dimmed ones keep their radius.
        assert!((fills[0].2 - 5.0).abs() < 0.2, "{}", fills[0].2);
        assert!((fills[1].2 - 4.0).abs() < 0.2, "{}", fills[1].2);
        assert!((fills[2].2 - 4.0).abs() < 0.2, "{}", fills[2].2);
    }

    #[test]
    fn test_junction_dot_radius_without_hover() {
        let theme = Theme::default();
        let mut surface = RecordingSurface::new(800.0, 450.0);
        let mut painter = Painter::new(&mut surface, &theme, HoverState::none());
        painter.draw_junction_dot(Point::new(5.0, 5.0), Color::WHITE, 4.0, Some("A"));
        match &surface.commands()[0] {
            DrawCommand::Fill { path, glow, .. } => {
                assert!((path.bounding_box().width() - 8.0).abs() < 0.4);
                assert!(glow.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}

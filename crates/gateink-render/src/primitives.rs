//! Ports and gates.
//!
//! Each primitive is drawn at an origin and reports the anchor points that
//! wires connect to. Hover only changes colors, never anchors.

use crate::painter::Painter;
use crate::surface::TextStyle;
use gateink_core::{GateKind, color_for, signal_key};
use kurbo::{Arc, BezPath, Circle, Point, Shape, Stroke};
use std::f64::consts::{FRAC_PI_2, PI};

/// Radius of input and output port circles.
pub const PORT_RADIUS: f64 = 22.0;
/// Half height of the inverter triangle.
pub const NOT_HALF_HEIGHT: f64 = 12.0;
/// Length of the inverter triangle.
pub const NOT_BODY_LENGTH: f64 = 24.0;
/// Radius of the inverter bubble.
pub const NOT_BUBBLE_RADIUS: f64 = 5.0;
/// Distance from inverter input to output anchor (triangle plus bubble).
pub const NOT_GATE_LENGTH: f64 = NOT_BODY_LENGTH + 2.0 * NOT_BUBBLE_RADIUS;
/// Smallest AND/OR body height.
pub const GATE_MIN_HEIGHT: f64 = 50.0;
/// Body height per input pin.
pub const GATE_INPUT_PITCH: f64 = 22.0;
/// Length of the straight part of an AND body.
pub const AND_BODY_LENGTH: f64 = 30.0;
/// Tip-to-back length of an OR body.
pub const OR_BODY_LENGTH: f64 = 55.0;
/// How far OR input pins sit inside the curved back.
pub const OR_INPUT_INSET: f64 = 8.0;

const PORT_STROKE_WIDTH: f64 = 3.0;
const NOT_STROKE_WIDTH: f64 = 2.0;
const GATE_STROKE_WIDTH: f64 = 2.5;
const CURVE_TOLERANCE: f64 = 0.1;

/// Label of the circuit output, shared by the output wire and port.
pub const OUTPUT_LABEL: &str = "Output";

/// Anchors of an AND/OR gate.
#[derive(Debug, Clone, PartialEq)]
pub struct GateAnchor {
    /// One pin per input, top to bottom.
    pub inputs: Vec<Point>,
    pub output: Point,
    pub width: f64,
    pub height: f64,
}

/// Anchors of an inverter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NotGateAnchor {
    pub input: Point,
    pub output: Point,
}

/// Body height of an AND/OR gate with `input_count` pins.
pub fn gate_height(input_count: usize) -> f64 {
    GATE_MIN_HEIGHT.max(input_count as f64 * GATE_INPUT_PITCH)
}

/// Horizontal extent from the gate origin to its output tip.
pub fn gate_width(kind: GateKind, input_count: usize) -> f64 {
    match kind {
        GateKind::And => AND_BODY_LENGTH + gate_height(input_count) / 2.0,
        GateKind::Or => OR_BODY_LENGTH,
    }
}

/// Y of pin `index` on a gate centered at `center_y`.
///
/// Pins split the body height into `input_count + 1` equal gaps.
pub fn gate_input_y(center_y: f64, input_count: usize, index: usize) -> f64 {
    let height = gate_height(input_count);
    let gaps = (input_count + 1) as f64;
    center_y - height / 2.0 + height / gaps * (index + 1) as f64
}

/// Label of term gate `index` and of the wire leaving it.
pub fn term_label(index: usize) -> String {
    format!("Term {}", index + 1)
}

fn circle(center: Point, radius: f64) -> BezPath {
    Circle::new(center, radius).to_path(CURVE_TOLERANCE)
}

impl Painter<'_> {
    /// Circular input port labeled with its variable; returns the output anchor.
    pub fn draw_input_port(&mut self, origin: Point, variable: char) -> Point {
        let plain = signal_key(variable, false);
        let negated = signal_key(variable, true);
        let emphasis = self.hover.primitive_emphasis(&[&plain, &negated]);
        let color = self.dim(emphasis, color_for(variable));

        let body = circle(origin, PORT_RADIUS);
        self.surface.fill(&body, self.theme.gate_fill(), None);
        self.surface
            .stroke(&body, &Stroke::new(PORT_STROKE_WIDTH), color, None);
        self.surface
            .text(&plain, origin, &TextStyle::label(18.0, true, color));

        log::trace!("Input port {variable} at {origin:?}");
        Point::new(origin.x + PORT_RADIUS, origin.y)
    }

    /// Inverter (triangle plus bubble) for `variable`.
    pub fn draw_not_gate(&mut self, origin: Point, variable: char) -> NotGateAnchor {
        let label = signal_key(variable, true);
        let emphasis = self.hover.primitive_emphasis(&[&label]);
        let stroke_color = self.dim(emphasis, color_for(variable));
        let text_color = self.dim(emphasis, self.theme.text());
        let stroke = Stroke::new(NOT_STROKE_WIDTH);
        let (x, y) = (origin.x, origin.y);

        let mut triangle = BezPath::new();
        triangle.move_to((x, y - NOT_HALF_HEIGHT));
        triangle.line_to((x + NOT_BODY_LENGTH, y));
        triangle.line_to((x, y + NOT_HALF_HEIGHT));
        triangle.close_path();
        self.surface.fill(&triangle, self.theme.gate_fill(), None);
        self.surface.stroke(&triangle, &stroke, stroke_color, None);

        let bubble = circle(
            Point::new(x + NOT_BODY_LENGTH + NOT_BUBBLE_RADIUS, y),
            NOT_BUBBLE_RADIUS,
        );
        self.surface.fill(&bubble, self.theme.gate_fill(), None);
        self.surface.stroke(&bubble, &stroke, stroke_color, None);

        self.surface.text(
            &label,
            Point::new(x + NOT_HALF_HEIGHT, y - 18.0),
            &TextStyle::label(11.0, false, text_color),
        );

        NotGateAnchor {
            input: origin,
            output: Point::new(x + NOT_GATE_LENGTH, y),
        }
    }

    /// AND gate: flat back, straight top and bottom, semicircular front.
    pub fn draw_and_gate(&mut self, origin: Point, input_count: usize, label: &str) -> GateAnchor {
        let height = gate_height(input_count);
        let half = height / 2.0;
        let (x, y) = (origin.x, origin.y);

        let mut body = BezPath::new();
        body.move_to((x, y - half));
        body.line_to((x + AND_BODY_LENGTH, y - half));
        let front = Arc::new((x + AND_BODY_LENGTH, y), (half, half), -FRAC_PI_2, PI, 0.0);
        body.extend(front.append_iter(CURVE_TOLERANCE));
        body.line_to((x, y + half));
        body.close_path();

        self.paint_gate_body(&body, GateKind::And, Point::new(x + 22.0, y), label);

        GateAnchor {
            inputs: (0..input_count)
                .map(|i| Point::new(x, gate_input_y(y, input_count, i)))
                .collect(),
            output: Point::new(x + gate_width(GateKind::And, input_count), y),
            width: gate_width(GateKind::And, input_count),
            height,
        }
    }

    /// OR gate: concave back and pointed front built from quadratic curves.
    pub fn draw_or_gate(&mut self, origin: Point, input_count: usize, label: &str) -> GateAnchor {
        let height = gate_height(input_count);
        let half = height / 2.0;
        let (x, y) = (origin.x, origin.y);

        let mut body = BezPath::new();
        body.move_to((x, y - half));
        body.quad_to((x + 15.0, y), (x, y + half));
        body.quad_to((x + 35.0, y + half), (x + OR_BODY_LENGTH, y));
        body.quad_to((x + 35.0, y - half), (x, y - half));
        body.close_path();

        self.paint_gate_body(&body, GateKind::Or, Point::new(x + 28.0, y), label);

        GateAnchor {
            inputs: (0..input_count)
                .map(|i| Point::new(x + OR_INPUT_INSET, gate_input_y(y, input_count, i)))
                .collect(),
            output: Point::new(x + OR_BODY_LENGTH, y),
            width: OR_BODY_LENGTH,
            height,
        }
    }

    /// Draw a gate of the given kind.
    pub fn draw_gate(
        &mut self,
        kind: GateKind,
        origin: Point,
        input_count: usize,
        label: &str,
    ) -> GateAnchor {
        match kind {
            GateKind::And => self.draw_and_gate(origin, input_count, label),
            GateKind::Or => self.draw_or_gate(origin, input_count, label),
        }
    }

    /// Circuit output port; returns the input anchor.
    pub fn draw_output_port(&mut self, origin: Point) -> Point {
        let emphasis = self.hover.primitive_emphasis(&[OUTPUT_LABEL]);
        let color = self.dim(emphasis, self.theme.output());

        let body = circle(origin, PORT_RADIUS);
        self.surface.fill(&body, self.theme.gate_fill(), None);
        self.surface
            .stroke(&body, &Stroke::new(PORT_STROKE_WIDTH), color, None);
        self.surface
            .text("Y", origin, &TextStyle::label(16.0, true, color));

        Point::new(origin.x - PORT_RADIUS, origin.y)
    }

    fn paint_gate_body(&mut self, body: &BezPath, kind: GateKind, text_at: Point, label: &str) {
        let emphasis = self.hover.primitive_emphasis(&[label]);
        let stroke_color = self.dim(emphasis, self.theme.gate(kind));
        let text_color = self.dim(emphasis, self.theme.text());

        self.surface.fill(body, self.theme.gate_fill(), None);
        self.surface
            .stroke(body, &Stroke::new(GATE_STROKE_WIDTH), stroke_color, None);
        self.surface
            .text(kind.label(), text_at, &TextStyle::label(11.0, true, text_color));
    }
}

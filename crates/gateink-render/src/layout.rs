//! Circuit layout: canvas sizing, bus channel assignment and draw orchestration.
//!
//! Layout runs in two steps. [`CircuitGeometry::compute`] places every port,
//! channel and gate without touching a surface; [`draw_circuit`] then draws the
//! primitives and wires in dependency order using that geometry.

use crate::painter::Painter;
use crate::primitives::{NOT_GATE_LENGTH, OUTPUT_LABEL, PORT_RADIUS, gate_input_y, gate_width, term_label};
use crate::surface::{RenderResult, RendererError, Surface, TextAlign, TextStyle};
use gateink_core::{GateKind, HoverState, ParsedExpression, Theme, WirePath, color_for, signal_key};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Layout constants. Every field can be overridden from a config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// X of the input port column.
    pub start_x: f64,
    /// Vertical pitch between input rows.
    pub input_spacing: f64,
    /// Vertical pitch between term gates.
    pub term_spacing: f64,
    /// Space kept above and below the tallest column.
    pub padding: f64,
    pub min_height: f64,
    /// Inverter column, relative to `start_x`.
    pub not_gate_offset: f64,
    /// First bus channel, relative to `start_x`.
    pub bus_offset: f64,
    /// Gap between the plain and negated channel of a variable.
    pub bus_spacing: f64,
    /// How far a channel extends past its outermost tap.
    pub bus_overhang: f64,
    /// Gap between the last channel and the term gate column.
    pub term_gate_gap: f64,
    /// Minimum distance from the term gate column to the combining gate.
    pub final_gate_gap: f64,
    /// Distance from the innermost elbow to the combining gate.
    pub elbow_clearance: f64,
    /// Horizontal step between neighboring elbows.
    pub elbow_step: f64,
    /// Minimum run from a term output to the outermost elbow.
    pub elbow_margin: f64,
    /// Combining gate to output port.
    pub output_gap: f64,
    /// Term gate column to output port when there is no combining gate.
    pub single_output_gap: f64,
    /// Minimum run from a lone term output to the output port.
    pub single_output_clearance: f64,
    pub input_wire_width: f64,
    pub bus_width: f64,
    /// Taps and elbows.
    pub term_wire_width: f64,
    pub output_wire_width: f64,
    pub junction_radius: f64,
    pub title_x: f64,
    pub title_y: f64,
    pub title_size: f64,
    /// Space right of the output port.
    pub canvas_margin: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            start_x: 60.0,
            input_spacing: 70.0,
            term_spacing: 100.0,
            padding: 100.0,
            min_height: 450.0,
            not_gate_offset: 55.0,
            bus_offset: 140.0,
            bus_spacing: 18.0,
            bus_overhang: 10.0,
            term_gate_gap: 80.0,
            final_gate_gap: 140.0,
            elbow_clearance: 30.0,
            elbow_step: 12.0,
            elbow_margin: 20.0,
            output_gap: 180.0,
            single_output_gap: 120.0,
            single_output_clearance: 60.0,
            input_wire_width: 2.5,
            bus_width: 2.0,
            term_wire_width: 2.5,
            output_wire_width: 3.0,
            junction_radius: 4.0,
            title_x: 20.0,
            title_y: 22.0,
            title_size: 14.0,
            canvas_margin: 40.0,
        }
    }
}

impl LayoutConfig {
    /// Reject spacings that would collapse or invert the schematic.
    pub fn validate(&self) -> RenderResult<()> {
        let non_negative = [
            ("start_x", self.start_x),
            ("padding", self.padding),
            ("not_gate_offset", self.not_gate_offset),
            ("bus_offset", self.bus_offset),
            ("bus_overhang", self.bus_overhang),
            ("term_gate_gap", self.term_gate_gap),
            ("final_gate_gap", self.final_gate_gap),
            ("elbow_clearance", self.elbow_clearance),
            ("elbow_step", self.elbow_step),
            ("elbow_margin", self.elbow_margin),
            ("output_gap", self.output_gap),
            ("single_output_gap", self.single_output_gap),
            ("single_output_clearance", self.single_output_clearance),
            ("junction_radius", self.junction_radius),
            ("title_x", self.title_x),
            ("title_y", self.title_y),
            ("canvas_margin", self.canvas_margin),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(RendererError::InvalidLayout(format!(
                    "`{name}` must be zero or more, got {value}"
                )));
            }
        }

        let positive = [
            ("input_spacing", self.input_spacing),
            ("term_spacing", self.term_spacing),
            ("min_height", self.min_height),
            ("bus_spacing", self.bus_spacing),
            ("input_wire_width", self.input_wire_width),
            ("bus_width", self.bus_width),
            ("term_wire_width", self.term_wire_width),
            ("output_wire_width", self.output_wire_width),
            ("title_size", self.title_size),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(RendererError::InvalidLayout(format!(
                    "`{name}` must be positive, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Canvas height for the given column sizes.
    pub fn canvas_height(&self, variable_count: usize, term_count: usize) -> f64 {
        let inputs = variable_count as f64 * self.input_spacing;
        let terms = term_count as f64 * self.term_spacing;
        self.min_height.max(inputs.max(terms) + 2.0 * self.padding)
    }
}

/// A vertical routing channel carrying one signal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BusChannel {
    pub x: f64,
    /// Where the signal enters: the port output or the inverter output.
    pub source: Point,
    /// Upper end, past the highest tap.
    pub top: f64,
    /// Lower end, past the lowest tap.
    pub bottom: f64,
}

impl BusChannel {
    fn new(x: f64, source: Point) -> Self {
        Self {
            x,
            source,
            top: source.y,
            bottom: source.y,
        }
    }

    fn reach(&mut self, y: f64) {
        self.top = self.top.min(y);
        self.bottom = self.bottom.max(y);
    }

    fn trim(&mut self, overhang: f64) {
        self.top -= overhang;
        self.bottom += overhang;
    }

    /// Point where the channel meets its source row.
    pub fn junction(&self) -> Point {
        Point::new(self.x, self.source.y)
    }
}

/// One variable's row: port, inverter and both channels.
#[derive(Debug, Clone, PartialEq)]
pub struct InputRow {
    pub variable: char,
    pub port: Point,
    pub not_gate: Point,
    pub plain: BusChannel,
    pub negated: BusChannel,
}

impl InputRow {
    pub fn channel(&self, negated: bool) -> &BusChannel {
        if negated { &self.negated } else { &self.plain }
    }

    fn channel_mut(&mut self, negated: bool) -> &mut BusChannel {
        if negated { &mut self.negated } else { &mut self.plain }
    }
}

/// Placement of one term gate.
#[derive(Debug, Clone, PartialEq)]
pub struct TermPlacement {
    pub origin: Point,
    /// Pin Y per literal, top to bottom.
    pub pin_ys: Vec<f64>,
    pub output: Point,
}

/// Positions of everything in the schematic, computed without drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct CircuitGeometry {
    pub canvas_height: f64,
    pub canvas_width: f64,
    pub term_gate: GateKind,
    pub combining_gate: GateKind,
    pub inputs: Vec<InputRow>,
    pub terms: Vec<TermPlacement>,
    /// Present only with more than one term.
    pub combiner: Option<Point>,
    /// Absent only when there are no terms.
    pub output_port: Option<Point>,
}

impl CircuitGeometry {
    pub fn compute(parsed: &ParsedExpression, config: &LayoutConfig) -> Self {
        let variable_count = parsed.variable_count();
        let term_count = parsed.term_count();
        let canvas_height = config.canvas_height(variable_count, term_count);

        let inputs_height = variable_count as f64 * config.input_spacing;
        let terms_height = term_count as f64 * config.term_spacing;
        let input_start_y = (canvas_height - inputs_height) / 2.0 + config.input_spacing / 2.0;
        let term_start_y = (canvas_height - terms_height) / 2.0 + config.term_spacing / 2.0;

        let bus_start_x = config.start_x + config.bus_offset;
        let not_x = config.start_x + config.not_gate_offset;
        let mut inputs: Vec<InputRow> = parsed
            .variables
            .iter()
            .enumerate()
            .map(|(i, &variable)| {
                let y = input_start_y + i as f64 * config.input_spacing;
                let plain_x = bus_start_x + i as f64 * config.bus_spacing * 2.0;
                InputRow {
                    variable,
                    port: Point::new(config.start_x, y),
                    not_gate: Point::new(not_x, y),
                    plain: BusChannel::new(plain_x, Point::new(config.start_x + PORT_RADIUS, y)),
                    negated: BusChannel::new(
                        plain_x + config.bus_spacing,
                        Point::new(not_x + NOT_GATE_LENGTH, y),
                    ),
                }
            })
            .collect();

        let term_gate = parsed.form.term_gate();
        let combining_gate = parsed.form.combining_gate();
        let term_gate_x =
            bus_start_x + variable_count as f64 * config.bus_spacing * 2.0 + config.term_gate_gap;

        let mut terms = Vec::with_capacity(term_count);
        for (index, term) in parsed.terms.iter().enumerate() {
            let y = term_start_y + index as f64 * config.term_spacing;
            let pin_ys: Vec<f64> = (0..term.len())
                .map(|pin| gate_input_y(y, term.len(), pin))
                .collect();

            for (literal, &pin_y) in term.iter().zip(&pin_ys) {
                match parsed.variable_index(literal.variable) {
                    Some(row) => inputs[row].channel_mut(literal.negated).reach(pin_y),
                    None => log::warn!("Literal {} has no input row", literal.key()),
                }
            }

            terms.push(TermPlacement {
                origin: Point::new(term_gate_x, y),
                pin_ys,
                output: Point::new(term_gate_x + gate_width(term_gate, term.len()), y),
            });
        }

        for row in &mut inputs {
            row.plain.trim(config.bus_overhang);
            row.negated.trim(config.bus_overhang);
        }

        let (combiner, output_port) = match terms.as_slice() {
            [] => (None, None),
            [single] => {
                let x = (term_gate_x + config.single_output_gap)
                    .max(single.output.x + config.single_output_clearance);
                (None, Some(Point::new(x, single.output.y)))
            }
            many => {
                let widest = many
                    .iter()
                    .map(|t| t.output.x)
                    .fold(f64::NEG_INFINITY, f64::max);
                let elbow_run = config.elbow_clearance
                    + config.elbow_step * (many.len() - 1) as f64
                    + config.elbow_margin;
                let final_x = (term_gate_x + config.final_gate_gap).max(widest + elbow_run);
                let final_y = canvas_height / 2.0;
                (
                    Some(Point::new(final_x, final_y)),
                    Some(Point::new(final_x + config.output_gap, final_y)),
                )
            }
        };

        let right_edge = output_port.map_or(term_gate_x, |p| p.x + PORT_RADIUS);

        Self {
            canvas_height,
            canvas_width: right_edge + config.canvas_margin,
            term_gate,
            combining_gate,
            inputs,
            terms,
            combiner,
            output_port,
        }
    }

    /// Input row for a variable.
    pub fn row(&self, variable: char) -> Option<&InputRow> {
        self.inputs.iter().find(|r| r.variable == variable)
    }

    /// X of elbow `index` leading into the combining gate.
    pub fn elbow_x(&self, index: usize, config: &LayoutConfig) -> Option<f64> {
        let combiner = self.combiner?;
        let from_gate = (self.terms.len() - 1 - index) as f64 * config.elbow_step;
        Some(combiner.x - config.elbow_clearance - from_gate)
    }
}

/// Everything a host needs after a redraw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircuitDrawing {
    /// Every wire drawn, in draw order, for hit-testing.
    pub wire_paths: Vec<WirePath>,
    pub canvas_height: f64,
    pub canvas_width: f64,
}

/// Title line above the schematic.
pub fn circuit_title(parsed: &ParsedExpression, expression: &str) -> String {
    format!("{} circuit: {expression}", parsed.form.abbreviation())
}

/// Lay out and draw a complete schematic.
///
/// Resizes the surface to the computed height, clears it, and draws inputs,
/// buses, term gates, taps, the combining stage and the title in that order.
/// The returned wire paths are rebuilt from scratch on every call.
pub fn draw_circuit(
    surface: &mut dyn Surface,
    parsed: &ParsedExpression,
    expression: &str,
    hover: HoverState<'_>,
    config: &LayoutConfig,
    theme: &Theme,
) -> CircuitDrawing {
    let geometry = CircuitGeometry::compute(parsed, config);

    surface.set_height(geometry.canvas_height);
    surface.clear(theme.background());

    let mut painter = Painter::new(surface, theme, hover);
    draw_inputs(&mut painter, &geometry, config);
    draw_buses(&mut painter, &geometry, config);
    draw_terms(&mut painter, parsed, &geometry, config);
    draw_title(&mut painter, &circuit_title(parsed, expression), config);

    let wire_paths = painter.into_wire_paths();
    if let Some(label) = hover.label() {
        if !wire_paths.iter().any(|w| w.label == label) {
            log::warn!("Hovered label {label:?} matches no wire in this circuit");
        }
    }

    log::debug!(
        "Laid out {} circuit: {} variables, {} terms, {} wires, {}x{}",
        parsed.form.abbreviation(),
        parsed.variable_count(),
        parsed.term_count(),
        wire_paths.len(),
        geometry.canvas_width,
        geometry.canvas_height
    );

    CircuitDrawing {
        wire_paths,
        canvas_height: geometry.canvas_height,
        canvas_width: geometry.canvas_width,
    }
}

/// Ports, inverters and the wire between them.
fn draw_inputs(painter: &mut Painter<'_>, geometry: &CircuitGeometry, config: &LayoutConfig) {
    for row in &geometry.inputs {
        let variable = row.variable;
        let port_out = painter.draw_input_port(row.port, variable);
        let inverter = painter.draw_not_gate(row.not_gate, variable);
        let label = signal_key(variable, false);
        painter.draw_wire(
            &[port_out, inverter.input],
            color_for(variable),
            &label,
            config.input_wire_width,
            Some(&format!("input-{label}")),
        );
    }
}

/// Both channels of every variable, trimmed to their taps.
fn draw_buses(painter: &mut Painter<'_>, geometry: &CircuitGeometry, config: &LayoutConfig) {
    for row in &geometry.inputs {
        let color = color_for(row.variable);
        for negated in [false, true] {
            let channel = row.channel(negated);
            let key = signal_key(row.variable, negated);
            let junction = channel.junction();

            painter.draw_wire(
                &[channel.source, junction, Point::new(channel.x, channel.top)],
                color,
                &key,
                config.bus_width,
                Some(&format!("bus-{key}-top")),
            );
            painter.draw_wire(
                &[junction, Point::new(channel.x, channel.bottom)],
                color,
                &key,
                config.bus_width,
                Some(&format!("bus-{key}-bottom")),
            );
            painter.draw_junction_dot(junction, color, config.junction_radius, Some(&key));
        }
    }
}

/// Term gates, their taps, and the combining stage.
fn draw_terms(
    painter: &mut Painter<'_>,
    parsed: &ParsedExpression,
    geometry: &CircuitGeometry,
    config: &LayoutConfig,
) {
    let gates: Vec<_> = geometry
        .terms
        .iter()
        .zip(&parsed.terms)
        .enumerate()
        .map(|(index, (placement, term))| {
            painter.draw_gate(geometry.term_gate, placement.origin, term.len(), &term_label(index))
        })
        .collect();

    for (index, (gate, term)) in gates.iter().zip(&parsed.terms).enumerate() {
        for (pin_index, (literal, &pin)) in term.iter().zip(&gate.inputs).enumerate() {
            let Some(row) = geometry.row(literal.variable) else {
                continue;
            };
            let bus_x = row.channel(literal.negated).x;
            let key = literal.key();
            let tap = Point::new(bus_x, pin.y);
            let color = color_for(literal.variable);
            painter.draw_wire(
                &[tap, pin],
                color,
                &key,
                config.term_wire_width,
                Some(&format!("term{index}-{pin_index}-{key}")),
            );
            painter.draw_junction_dot(tap, color, config.junction_radius, Some(&key));
        }
    }

    let Some(output_port) = geometry.output_port else {
        return;
    };

    let source = match geometry.combiner {
        Some(origin) => {
            let combiner = painter.draw_gate(
                geometry.combining_gate,
                origin,
                gates.len(),
                OUTPUT_LABEL,
            );
            let color = painter.theme.gate(geometry.combining_gate);
            for (index, (gate, target)) in gates.iter().zip(&combiner.inputs).enumerate() {
                let Some(mid_x) = geometry.elbow_x(index, config) else {
                    continue;
                };
                painter.draw_wire(
                    &[
                        gate.output,
                        Point::new(mid_x, gate.output.y),
                        Point::new(mid_x, target.y),
                        *target,
                    ],
                    color,
                    &term_label(index),
                    config.term_wire_width,
                    Some(&format!("final-term{index}")),
                );
            }
            combiner.output
        }
        None => match gates.first() {
            Some(gate) => gate.output,
            None => return,
        },
    };

    let sink = painter.draw_output_port(output_port);
    let color = painter.theme.output();
    painter.draw_wire(
        &[source, sink],
        color,
        OUTPUT_LABEL,
        config.output_wire_width,
        Some("output"),
    );
}

fn draw_title(painter: &mut Painter<'_>, title: &str, config: &LayoutConfig) {
    let style = TextStyle {
        size: config.title_size,
        bold: true,
        color: painter.theme.text(),
        align: TextAlign::Left,
    };
    painter
        .surface
        .text(title, Point::new(config.title_x, config.title_y), &style);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::RecordingSurface;
    use gateink_core::parse_expression;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    fn geometry(text: &str) -> CircuitGeometry {
        let parsed = parse_expression(text).unwrap();
        CircuitGeometry::compute(&parsed, &LayoutConfig::default())
    }

    #[test]
    fn test_canvas_height() {
        let config = LayoutConfig::default();
        assert_close(config.canvas_height(3, 2), 450.0);
        assert_close(config.canvas_height(6, 1), 620.0);
        assert_close(config.canvas_height(2, 5), 700.0);
        assert_close(config.canvas_height(0, 0), 450.0);
    }

    #[test]
    fn test_input_rows_and_channels() {
        let g = geometry("AB+A'C");
        assert_eq!(g.inputs.len(), 3);
        assert_close(g.inputs[0].port.y, 155.0);
        assert_close(g.inputs[2].port.y, 295.0);
        assert_eq!(g.inputs[0].not_gate, Point::new(115.0, 155.0));

        let xs: Vec<f64> = g
            .inputs
            .iter()
            .flat_map(|r| [r.plain.x, r.negated.x])
            .collect();
        assert_eq!(xs, vec![200.0, 218.0, 236.0, 254.0, 272.0, 290.0]);
        assert_eq!(g.inputs[1].plain.source, Point::new(82.0, 225.0));
        assert_eq!(g.inputs[1].negated.source, Point::new(149.0, 225.0));
    }

    #[test]
    fn test_channels_trimmed_to_taps() {
        let g = geometry("AB+A'C");
        let a = &g.inputs[0];
        // A is tapped only by term 1 just below its source row.
        assert_close(a.plain.top, 145.0);
        assert_close(a.plain.bottom, 175.0 - 25.0 + 50.0 / 3.0 + 10.0);
        // A' is tapped only by term 2, far below.
        assert_close(a.negated.top, 145.0);
        assert_close(a.negated.bottom, 275.0 - 25.0 + 50.0 / 3.0 + 10.0);
        // B' is never tapped: just the overhang around its source.
        let b = &g.inputs[1];
        assert_close(b.negated.top, 215.0);
        assert_close(b.negated.bottom, 235.0);
    }

    #[test]
    fn test_term_and_final_columns() {
        let g = geometry("AB+A'C");
        assert_eq!(g.terms.len(), 2);
        assert_eq!(g.terms[0].origin, Point::new(388.0, 175.0));
        assert_eq!(g.terms[1].origin, Point::new(388.0, 275.0));
        assert_eq!(g.terms[0].output, Point::new(443.0, 175.0));
        assert_eq!(g.combiner, Some(Point::new(528.0, 225.0)));
        assert_eq!(g.output_port, Some(Point::new(708.0, 225.0)));
        assert_close(g.canvas_width, 770.0);
        assert_eq!(g.elbow_x(0, &LayoutConfig::default()), Some(486.0));
        assert_eq!(g.elbow_x(1, &LayoutConfig::default()), Some(498.0));
    }

    #[test]
    fn test_wide_terms_push_combiner_right() {
        // Four-literal AND gates are 74 wide; three elbows need more room.
        let g = geometry("ABCD+A'B'C'D'+AB'CD'");
        let widest = g.terms.iter().map(|t| t.output.x).fold(0.0, f64::max);
        let combiner = g.combiner.unwrap();
        assert_close(combiner.x, widest + 30.0 + 24.0 + 20.0);
        let outermost = g.elbow_x(0, &LayoutConfig::default()).unwrap();
        assert!(outermost > widest);
    }

    #[test]
    fn test_single_term_output() {
        let g = geometry("AB");
        assert!(g.combiner.is_none());
        assert_eq!(g.output_port, Some(Point::new(472.0, 225.0)));
        assert_eq!(g.elbow_x(0, &LayoutConfig::default()), None);
    }

    #[test]
    fn test_single_wide_term_keeps_clearance() {
        let g = geometry("ABCDEF");
        let term = &g.terms[0];
        let port = g.output_port.unwrap();
        assert!(port.x - PORT_RADIUS > term.output.x);
    }

    #[test]
    fn test_title_text() {
        let parsed = parse_expression("(A+B)(A'+C)").unwrap();
        assert_eq!(circuit_title(&parsed, "(A+B)(A'+C)"), "POS circuit: (A+B)(A'+C)");
    }

    #[test]
    fn test_partial_config_override() {
        let config: LayoutConfig = serde_json::from_str(r#"{"min_height": 600}"#).unwrap();
        assert_close(config.min_height, 600.0);
        assert_close(config.input_spacing, 70.0);
        assert!(serde_json::from_str::<LayoutConfig>(r#"{"corner_radius": 6}"#).is_err());
    }

    #[test]
    fn test_validate_rejects_collapsed_spacing() {
        assert!(LayoutConfig::default().validate().is_ok());
        let config = LayoutConfig {
            term_spacing: 0.0,
            ..LayoutConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("term_spacing"));
        let config = LayoutConfig {
            bus_width: f64::NAN,
            ..LayoutConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_negative_offsets() {
        for config in [
            LayoutConfig {
                padding: -1.0,
                ..LayoutConfig::default()
            },
            LayoutConfig {
                junction_radius: f64::INFINITY,
                ..LayoutConfig::default()
            },
            LayoutConfig {
                bus_offset: -140.0,
                ..LayoutConfig::default()
            },
        ] {
            let err = config.validate().unwrap_err();
            assert!(matches!(err, RendererError::InvalidLayout(_)), "{err}");
        }
        // Zero offsets are allowed.
        let flush = LayoutConfig {
            padding: 0.0,
            bus_overhang: 0.0,
            ..LayoutConfig::default()
        };
        assert!(flush.validate().is_ok());
    }

    #[test]
    fn test_draw_resizes_and_clears() {
        let parsed = parse_expression("AB+A'C").unwrap();
        let mut surface = RecordingSurface::new(900.0, 100.0);
        surface.text("stale", Point::ZERO, &TextStyle::label(10.0, false, peniko::Color::WHITE));
        let drawing = draw_circuit(
            &mut surface,
            &parsed,
            "AB+A'C",
            HoverState::none(),
            &LayoutConfig::default(),
            &Theme::default(),
        );
        assert_close(surface.height(), 450.0);
        assert_close(drawing.canvas_height, 450.0);
        assert_eq!(surface.text_count("stale"), 0);
        assert_eq!(surface.text_count("SOP circuit: AB+A'C"), 1);
    }

    #[test]
    fn test_no_terms_draws_inputs_only() {
        let parsed = ParsedExpression::new(gateink_core::ExpressionForm::SumOfProducts, Vec::new());
        let mut surface = RecordingSurface::new(900.0, 450.0);
        let drawing = draw_circuit(
            &mut surface,
            &parsed,
            "",
            HoverState::none(),
            &LayoutConfig::default(),
            &Theme::default(),
        );
        assert!(drawing.wire_paths.is_empty());
        assert_eq!(surface.text_count("Y"), 0);
    }
}

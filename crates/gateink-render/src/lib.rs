//! GateInk Render Library
//!
//! Lays out boolean expressions as gate schematics and draws them onto an
//! injected [`Surface`]. SVG and recording surfaces are always available; the
//! Vello surface sits behind the `vello-renderer` feature.

mod layout;
mod painter;
mod primitives;
mod recording;
mod surface;
mod svg;
mod wires;

#[cfg(feature = "vello-renderer")]
mod vello_impl;

pub use layout::{
    BusChannel, CircuitDrawing, CircuitGeometry, InputRow, LayoutConfig, TermPlacement,
    circuit_title, draw_circuit,
};
pub use painter::Painter;
pub use primitives::{
    GateAnchor, NotGateAnchor, OUTPUT_LABEL, PORT_RADIUS, gate_height, gate_input_y, gate_width,
    term_label,
};
pub use recording::{DrawCommand, RecordingSurface};
pub use surface::{RenderResult, RendererError, Surface, TextAlign, TextStyle};
pub use svg::SvgSurface;
pub use wires::{CORNER_RADIUS, rounded_polyline};

#[cfg(feature = "vello-renderer")]
pub use vello_impl::VelloSurface;

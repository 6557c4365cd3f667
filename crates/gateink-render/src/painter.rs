//! Per-pass drawing state shared by primitives and wires.

use crate::surface::Surface;
use gateink_core::{Emphasis, HoverState, Theme, WirePath};
use peniko::Color;

/// Draws primitives and wires onto a surface for one redraw.
///
/// Collects every wire it draws so the caller can hit-test them afterwards.
pub struct Painter<'a> {
    pub(crate) surface: &'a mut dyn Surface,
    pub(crate) theme: &'a Theme,
    pub(crate) hover: HoverState<'a>,
    pub(crate) wire_paths: Vec<WirePath>,
}

impl<'a> Painter<'a> {
    pub fn new(surface: &'a mut dyn Surface, theme: &'a Theme, hover: HoverState<'a>) -> Self {
        Self {
            surface,
            theme,
            hover,
            wire_paths: Vec::new(),
        }
    }

    /// Finish the pass and hand the recorded wires to the caller.
    pub fn into_wire_paths(self) -> Vec<WirePath> {
        self.wire_paths
    }

    /// Replace `color` with the dimmed color when dimmed.
    pub(crate) fn dim(&self, emphasis: Emphasis, color: Color) -> Color {
        if emphasis == Emphasis::Dimmed {
            self.theme.dimmed()
        } else {
            color
        }
    }
}

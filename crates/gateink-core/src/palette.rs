//! Colors: per-variable wire colors and the schematic theme.

use peniko::Color;
use serde::{Deserialize, Serialize};

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const fn white() -> Self {
        Self::rgb(255, 255, 255)
    }

    /// CSS hex notation (`#rrggbb`), alpha omitted.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Wire colors for the first six variables.
const VARIABLE_COLORS: [SerializableColor; 6] = [
    SerializableColor::rgb(0x00, 0xd9, 0xff), // A
    SerializableColor::rgb(0x00, 0xff, 0x88), // B
    SerializableColor::rgb(0xff, 0xaa, 0x00), // C
    SerializableColor::rgb(0xff, 0x6b, 0x6b), // D
    SerializableColor::rgb(0xff, 0x00, 0xff), // E
    SerializableColor::rgb(0x00, 0xff, 0xff), // F
];

/// Color for variables past `F`.
const FALLBACK_COLOR: SerializableColor = SerializableColor::rgb(0x88, 0x88, 0x88);

/// Display color for a variable letter.
pub fn color_for(variable: char) -> Color {
    let index = (variable.to_ascii_uppercase() as u32).wrapping_sub('A' as u32) as usize;
    VARIABLE_COLORS
        .get(index)
        .copied()
        .unwrap_or(FALLBACK_COLOR)
        .into()
}

/// Color scheme for the schematic.
///
/// Signal wires, ports and inverters take their color from [`color_for`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Theme {
    pub background: SerializableColor,
    /// Stroke for hovered wires.
    pub wire_active: SerializableColor,
    pub and: SerializableColor,
    pub or: SerializableColor,
    pub output: SerializableColor,
    pub text: SerializableColor,
    pub gate_fill: SerializableColor,
    /// Everything not related to the hovered wire.
    pub dimmed: SerializableColor,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: SerializableColor::rgb(0x0f, 0x0f, 0x1e),
            wire_active: SerializableColor::white(),
            and: SerializableColor::rgb(0x00, 0xff, 0x88),
            or: SerializableColor::rgb(0xff, 0xaa, 0x00),
            output: SerializableColor::rgb(0xff, 0x00, 0xff),
            text: SerializableColor::white(),
            gate_fill: SerializableColor::rgb(0x1a, 0x1a, 0x2e),
            dimmed: SerializableColor::new(100, 100, 100, 77),
        }
    }
}

impl Theme {
    pub fn background(&self) -> Color {
        self.background.into()
    }

    pub fn wire_active(&self) -> Color {
        self.wire_active.into()
    }

    pub fn output(&self) -> Color {
        self.output.into()
    }

    pub fn text(&self) -> Color {
        self.text.into()
    }

    pub fn gate_fill(&self) -> Color {
        self.gate_fill.into()
    }

    pub fn dimmed(&self) -> Color {
        self.dimmed.into()
    }

    /// Body stroke color for a gate kind.
    pub fn gate(&self, kind: crate::GateKind) -> Color {
        match kind {
            crate::GateKind::And => self.and.into(),
            crate::GateKind::Or => self.or.into(),
        }
    }
}

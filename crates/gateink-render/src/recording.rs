//! Surface that records draw calls instead of rasterizing them.

use crate::surface::{Surface, TextAlign, TextStyle};
use gateink_core::SerializableColor;
use kurbo::{BezPath, Point, Stroke};
use peniko::Color;

/// One recorded draw call.
#[derive(Debug, Clone)]
pub enum DrawCommand {
    Clear {
        background: SerializableColor,
    },
    Fill {
        path: BezPath,
        color: SerializableColor,
        glow: Option<SerializableColor>,
    },
    Stroke {
        path: BezPath,
        width: f64,
        color: SerializableColor,
        glow: Option<SerializableColor>,
    },
    Text {
        content: String,
        position: Point,
        size: f64,
        bold: bool,
        color: SerializableColor,
        align: TextAlign,
    },
}

/// Headless surface for hosts that post-process draw calls, and for tests.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// All text placed since the last clear, in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { content, .. } => Some(content.as_str()),
            _ => None,
        })
    }

    /// How many times `content` was placed as text.
    pub fn text_count(&self, content: &str) -> usize {
        self.texts().filter(|t| *t == content).count()
    }

    /// Strokes drawn in the given color.
    pub fn strokes_with_color(&self, color: Color) -> usize {
        let color = SerializableColor::from(color);
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Stroke { color: sc, .. } if *sc == color))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn set_height(&mut self, height: f64) {
        self.height = height;
    }

    fn clear(&mut self, background: Color) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear {
            background: background.into(),
        });
    }

    fn fill(&mut self, path: &BezPath, color: Color, glow: Option<Color>) {
        self.commands.push(DrawCommand::Fill {
            path: path.clone(),
            color: color.into(),
            glow: glow.map(Into::into),
        });
    }

    fn stroke(&mut self, path: &BezPath, stroke: &Stroke, color: Color, glow: Option<Color>) {
        self.commands.push(DrawCommand::Stroke {
            path: path.clone(),
            width: stroke.width,
            color: color.into(),
            glow: glow.map(Into::into),
        });
    }

    fn text(&mut self, content: &str, position: Point, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            content: content.to_string(),
            position,
            size: style.size,
            bold: style.bold,
            color: style.color.into(),
            align: style.align,
        });
    }
}

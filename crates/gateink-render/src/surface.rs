//! Drawing surface abstraction.

use kurbo::{BezPath, Point, Stroke};
use peniko::Color;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Invalid layout: {0}")]
    InvalidLayout(String),
    #[error("Surface error: {0}")]
    Surface(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Horizontal text anchoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    /// Anchor at the start of the baseline.
    #[default]
    Left,
    /// Anchor at the center, vertically middle-aligned.
    Center,
}

/// Text appearance.
#[derive(Debug, Clone, Copy)]
pub struct TextStyle {
    /// Font size in canvas units.
    pub size: f64,
    pub bold: bool,
    pub color: Color,
    pub align: TextAlign,
}

impl TextStyle {
    /// Centered label.
    pub fn label(size: f64, bold: bool, color: Color) -> Self {
        Self {
            size,
            bold,
            color,
            align: TextAlign::Center,
        }
    }
}

/// A 2D drawing target for the schematic.
///
/// Paths are built with kurbo (move/line/quad/arc) by the caller; the surface
/// only fills, strokes and places text. Hosts inject their own implementation.
pub trait Surface {
    /// Drawable width in canvas units.
    fn width(&self) -> f64;

    /// Drawable height in canvas units.
    fn height(&self) -> f64;

    /// Resize vertically before a layout pass.
    fn set_height(&mut self, height: f64);

    /// Discard everything drawn so far and paint the background.
    fn clear(&mut self, background: Color);

    /// Fill a closed path. `glow` draws a soft halo of that color behind it.
    fn fill(&mut self, path: &BezPath, color: Color, glow: Option<Color>);

    /// Stroke a path. `glow` draws a soft halo of that color behind it.
    fn stroke(&mut self, path: &BezPath, stroke: &Stroke, color: Color, glow: Option<Color>);

    /// Place a single line of text.
    fn text(&mut self, content: &str, position: Point, style: &TextStyle);
}

//! Vello scene surface.

use crate::surface::{Surface, TextAlign, TextStyle};
use kurbo::{Affine, BezPath, Point, Rect, Stroke};
use parley::layout::PositionedLayoutItem;
use parley::{FontContext, LayoutContext, StyleProperty};
use peniko::{Brush, Color, Fill};
use vello::Scene;

/// CSS family list handed to parley for every label.
const FONT_SOURCE: &str = "Courier New, monospace";

/// Extra stroke width of the halo behind glowing shapes.
const GLOW_SPREAD: f64 = 6.0;
const GLOW_ALPHA: f32 = 0.35;

/// Surface that builds a Vello scene for GPU rendering.
pub struct VelloSurface {
    scene: Scene,
    width: f64,
    height: f64,
    /// Font context for text rendering (cached to avoid re-scanning fonts).
    font_cx: FontContext,
    layout_cx: LayoutContext<Brush>,
}

impl VelloSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            scene: Scene::new(),
            width,
            height,
            font_cx: FontContext::new(),
            layout_cx: LayoutContext::new(),
        }
    }

    /// Get the built scene for rendering.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Take ownership of the scene (resets internal scene).
    pub fn take_scene(&mut self) -> Scene {
        std::mem::take(&mut self.scene)
    }

    fn halo(&mut self, path: &BezPath, width: f64, glow: Color) {
        self.scene.stroke(
            &Stroke::new(width + GLOW_SPREAD),
            Affine::IDENTITY,
            glow.with_alpha(GLOW_ALPHA),
            None,
            path,
        );
    }
}

impl Surface for VelloSurface {
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
        self.scene.reset();
        let rect = Rect::new(0.0, 0.0, self.width, self.height);
        self.scene
            .fill(Fill::NonZero, Affine::IDENTITY, background, None, &rect);
    }

    fn fill(&mut self, path: &BezPath, color: Color, glow: Option<Color>) {
        if let Some(glow) = glow {
            self.halo(path, 0.0, glow);
        }
        self.scene
            .fill(Fill::NonZero, Affine::IDENTITY, color, None, path);
    }

    fn stroke(&mut self, path: &BezPath, stroke: &Stroke, color: Color, glow: Option<Color>) {
        if let Some(glow) = glow {
            self.halo(path, stroke.width, glow);
        }
        self.scene
            .stroke(stroke, Affine::IDENTITY, color, None, path);
    }

    fn text(&mut self, content: &str, position: Point, style: &TextStyle) {
        if content.is_empty() {
            return;
        }
        let brush = Brush::Solid(style.color);
        let weight = if style.bold {
            parley::FontWeight::BOLD
        } else {
            parley::FontWeight::NORMAL
        };

        let mut builder = self
            .layout_cx
            .ranged_builder(&mut self.font_cx, content, 1.0, false);
        builder.push_default(StyleProperty::FontSize(style.size as f32));
        builder.push_default(StyleProperty::Brush(brush.clone()));
        builder.push_default(StyleProperty::FontWeight(weight));
        builder.push_default(StyleProperty::FontStack(parley::FontStack::Source(
            FONT_SOURCE.into(),
        )));
        let mut layout = builder.build(content);
        layout.break_all_lines(None);
        layout.align(None, parley::Alignment::Start, parley::AlignmentOptions::default());

        // Parley puts y=0 at the top of the layout box.
        let origin = match style.align {
            TextAlign::Center => Point::new(
                position.x - layout.width() as f64 / 2.0,
                position.y - layout.height() as f64 / 2.0,
            ),
            TextAlign::Left => {
                let baseline = layout
                    .lines()
                    .next()
                    .map_or(0.0, |line| line.metrics().baseline as f64);
                Point::new(position.x, position.y - baseline)
            }
        };
        let transform = Affine::translate(origin.to_vec2());

        let mut glyph_count = 0;
        for line in layout.lines() {
            for item in line.items() {
                let PositionedLayoutItem::GlyphRun(glyph_run) = item else {
                    continue;
                };
                let mut x = glyph_run.offset();
                let y = glyph_run.baseline();
                let run = glyph_run.run();
                let synthesis = run.synthesis();
                let glyph_xform = synthesis
                    .skew()
                    .map(|angle| Affine::skew(angle.to_radians().tan() as f64, 0.0));

                let glyphs: Vec<vello::Glyph> = glyph_run
                    .glyphs()
                    .map(|glyph| {
                        let gx = x + glyph.x;
                        let gy = y - glyph.y;
                        x += glyph.advance;
                        vello::Glyph {
                            id: glyph.id,
                            x: gx,
                            y: gy,
                        }
                    })
                    .collect();
                glyph_count += glyphs.len();

                if !glyphs.is_empty() {
                    self.scene
                        .draw_glyphs(run.font())
                        .brush(&brush)
                        .hint(true)
                        .transform(transform)
                        .glyph_transform(glyph_xform)
                        .font_size(run.font_size())
                        .normalized_coords(run.normalized_coords())
                        .draw(Fill::NonZero, glyphs.into_iter());
                }
            }
        }

        if glyph_count == 0 {
            log::warn!("No font available for label {content:?}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_resizes() {
        let mut surface = VelloSurface::new(800.0, 200.0);
        surface.set_height(450.0);
        surface.clear(Color::BLACK);
        assert_eq!(surface.height(), 450.0);
        assert_eq!(surface.width(), 800.0);
    }

    #[test]
    fn test_take_scene_resets() {
        let mut surface = VelloSurface::new(100.0, 100.0);
        surface.clear(Color::BLACK);
        let _scene = surface.take_scene();
        assert!(surface.scene().encoding().is_empty());
    }
}

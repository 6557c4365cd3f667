//! SVG document surface.

use crate::surface::{RenderResult, RendererError, Surface, TextAlign, TextStyle};
use gateink_core::SerializableColor;
use kurbo::{BezPath, Cap, Join, Point, Stroke};
use peniko::Color;
use std::fmt;
use std::path::Path;

/// Font stack for labels and the title.
const FONT_FAMILY: &str = "'Courier New', Courier, monospace";

/// Blur radius of the hover halo.
const GLOW_BLUR: f64 = 5.0;

/// Surface that accumulates an SVG document.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    width: f64,
    height: f64,
    background: Option<Color>,
    body: String,
}

impl SvgSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            background: None,
            body: String::new(),
        }
    }

    /// The complete SVG document for everything drawn since the last clear.
    pub fn finish(&self) -> String {
        let mut out = String::with_capacity(self.body.len() + 256);
        push_line(
            &mut out,
            format_args!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
                w = fmt_num(self.width),
                h = fmt_num(self.height),
            ),
        );
        if let Some(bg) = self.background {
            let (hex, opacity) = paint(bg);
            push_line(
                &mut out,
                format_args!(
                    r#"<rect width="100%" height="100%" fill="{hex}"{}/>"#,
                    opacity_attr("fill-opacity", opacity)
                ),
            );
        }
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }

    /// Write the finished document to `path`.
    pub fn save(&self, path: &Path) -> RenderResult<()> {
        std::fs::write(path, self.finish())
            .map_err(|e| RendererError::Surface(format!("{}: {e}", path.display())))?;
        log::debug!("Saved SVG to {}", path.display());
        Ok(())
    }
}

impl Surface for SvgSurface {
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
        self.background = Some(background);
        self.body.clear();
    }

    fn fill(&mut self, path: &BezPath, color: Color, glow: Option<Color>) {
        let (hex, opacity) = paint(color);
        push_line(
            &mut self.body,
            format_args!(
                r#"<path d="{}" fill="{hex}"{}{}/>"#,
                path.to_svg(),
                opacity_attr("fill-opacity", opacity),
                glow_attr(glow)
            ),
        );
    }

    fn stroke(&mut self, path: &BezPath, stroke: &Stroke, color: Color, glow: Option<Color>) {
        let (hex, opacity) = paint(color);
        push_line(
            &mut self.body,
            format_args!(
                r#"<path d="{}" fill="none" stroke="{hex}" stroke-width="{}" stroke-linecap="{}" stroke-linejoin="{}"{}{}/>"#,
                path.to_svg(),
                fmt_num(stroke.width),
                cap_name(stroke.start_cap),
                join_name(stroke.join),
                opacity_attr("stroke-opacity", opacity),
                glow_attr(glow)
            ),
        );
    }

    fn text(&mut self, content: &str, position: Point, style: &TextStyle) {
        let (hex, opacity) = paint(style.color);
        let (anchor, baseline) = match style.align {
            TextAlign::Left => ("start", ""),
            TextAlign::Center => ("middle", r#" dominant-baseline="central""#),
        };
        push_line(
            &mut self.body,
            format_args!(
                r#"<text x="{}" y="{}" font-family="{FONT_FAMILY}" font-size="{}"{} fill="{hex}"{} text-anchor="{anchor}"{baseline}>{}</text>"#,
                fmt_num(position.x),
                fmt_num(position.y),
                fmt_num(style.size),
                if style.bold { r#" font-weight="bold""# } else { "" },
                opacity_attr("fill-opacity", opacity),
                escape(content)
            ),
        );
    }
}

/// Append one formatted line to an in-memory document.
fn push_line(buf: &mut String, line: fmt::Arguments<'_>) {
    buf.push_str(&line.to_string());
    buf.push('\n');
}

/// Hex color and opacity in `0..=1`.
fn paint(color: Color) -> (String, f64) {
    let c = SerializableColor::from(color);
    (c.to_hex(), c.a as f64 / 255.0)
}

fn opacity_attr(name: &str, opacity: f64) -> String {
    if opacity >= 1.0 {
        String::new()
    } else {
        format!(r#" {name}="{}""#, fmt_num(opacity))
    }
}

fn glow_attr(glow: Option<Color>) -> String {
    match glow {
        Some(color) => format!(
            r#" style="filter: drop-shadow(0 0 {}px {})""#,
            fmt_num(GLOW_BLUR),
            SerializableColor::from(color).to_hex()
        ),
        None => String::new(),
    }
}

fn cap_name(cap: Cap) -> &'static str {
    match cap {
        Cap::Butt => "butt",
        Cap::Round => "round",
        Cap::Square => "square",
    }
}

fn join_name(join: Join) -> &'static str {
    match join {
        Join::Bevel => "bevel",
        Join::Miter => "miter",
        Join::Round => "round",
    }
}

/// Trim trailing zeros so coordinates stay short.
fn fmt_num(value: f64) -> String {
    if value.abs() < 0.0005 {
        return "0".to_string();
    }
    let s = format!("{value:.3}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

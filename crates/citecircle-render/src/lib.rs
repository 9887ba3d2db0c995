//! SVG rendering of the citation circle figure.
//!
//! This crate is the drawing surface the layout core hands its outputs to.
//! It consumes exactly the five canonical-order-aligned structures the core
//! produces (relation matrix, display titles, angles, node colors, edge
//! colormap) and contributes no layout decisions of its own: one dot per
//! label at its angle, one chord per tagged matrix cell, a manual legend,
//! and a title.

use citecircle_graph::{EdgeColormap, RelationMatrix};
use std::f32::consts::PI;
use std::fmt::Write as _;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FigureError {
    #[error(
        "figure inputs are misaligned: matrix side {side}, {titles} titles, \
         {angles} angles, {node_colors} node colors"
    )]
    Misaligned {
        side: usize,
        titles: usize,
        angles: usize,
        node_colors: usize,
    },
    #[error("writing figure: {0}")]
    Io(#[from] std::io::Error),
}

/// Cosmetic knobs for the figure. The defaults mirror the original tool's
/// black-background, white-text style.
#[derive(Debug, Clone)]
pub struct FigureConfig {
    pub width: u32,
    pub height: u32,
    pub background: String,
    pub text_color: String,
    pub legend_background: String,
    pub title: String,
    /// Circle radius as a fraction of the smaller image dimension.
    pub radius_fraction: f32,
    pub node_radius: f32,
    pub chord_width: f32,
    pub label_font_size: f32,
    pub title_font_size: f32,
    /// Legend swatches: label text plus fill color, drawn top to bottom.
    pub legend: Vec<LegendEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendEntry {
    pub label: String,
    pub color: String,
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 1200,
            background: "black".to_string(),
            text_color: "white".to_string(),
            legend_background: "white".to_string(),
            title: String::new(),
            radius_fraction: 0.38,
            node_radius: 6.0,
            chord_width: 3.0,
            label_font_size: 12.0,
            title_font_size: 28.0,
            legend: Vec::new(),
        }
    }
}

/// A complete, validated circle figure ready to be serialized.
#[derive(Debug)]
pub struct CircleFigure<'a> {
    matrix: &'a RelationMatrix,
    titles: &'a [String],
    angles: &'a [f32],
    node_colors: &'a [String],
    colormap: &'a EdgeColormap,
    config: FigureConfig,
}

impl<'a> CircleFigure<'a> {
    /// Confirms the inputs are aligned to one canonical order before
    /// anything is drawn; a mismatch means the caller mixed structures from
    /// different record sets.
    pub fn new(
        matrix: &'a RelationMatrix,
        titles: &'a [String],
        angles: &'a [f32],
        node_colors: &'a [String],
        colormap: &'a EdgeColormap,
        config: FigureConfig,
    ) -> Result<Self, FigureError> {
        let side = matrix.side();
        if titles.len() != side || angles.len() != side || node_colors.len() != side {
            return Err(FigureError::Misaligned {
                side,
                titles: titles.len(),
                angles: angles.len(),
                node_colors: node_colors.len(),
            });
        }
        Ok(Self {
            matrix,
            titles,
            angles,
            node_colors,
            colormap,
            config,
        })
    }

    fn point_at(&self, angle_deg: f32, radius: f32) -> (f32, f32) {
        let cx = self.config.width as f32 / 2.0;
        let cy = self.config.height as f32 / 2.0;
        let radians = angle_deg * PI / 180.0;
        // SVG y grows downward; negating the sine keeps angles
        // counterclockwise from east like the layout engine assumes.
        (cx + radius * radians.cos(), cy - radius * radians.sin())
    }

    fn circle_radius(&self) -> f32 {
        self.config.width.min(self.config.height) as f32 * self.config.radius_fraction
    }

    pub fn to_svg(&self) -> String {
        let config = &self.config;
        let mut svg = String::new();
        let _ = write!(
            svg,
            r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">
"#,
            w = config.width,
            h = config.height
        );
        let _ = writeln!(
            svg,
            r#"  <rect width="100%" height="100%" fill="{}"/>"#,
            escape_xml(&config.background)
        );

        self.render_chords(&mut svg);
        self.render_nodes(&mut svg);
        self.render_labels(&mut svg);
        self.render_title(&mut svg);
        self.render_legend(&mut svg);

        svg.push_str("</svg>\n");
        svg
    }

    /// Chords go behind the nodes: one quadratic curve per tagged matrix
    /// cell, from the citation's rim point to its category anchor's rim
    /// point, pulled through the center.
    fn render_chords(&self, svg: &mut String) {
        let radius = self.circle_radius();
        let (cx, cy) = self.point_at(0.0, 0.0);

        svg.push_str("  <g id=\"chords\" fill=\"none\">\n");
        for (row, cells) in self.matrix.rows().enumerate() {
            let Some((column, value)) = cells
                .iter()
                .copied()
                .enumerate()
                .find(|&(_, cell)| cell != 0)
            else {
                continue;
            };
            let (x1, y1) = self.point_at(self.angles[row], radius);
            let (x2, y2) = self.point_at(self.angles[column], radius);
            let _ = writeln!(
                svg,
                r#"    <path d="M {x1:.2} {y1:.2} Q {cx:.2} {cy:.2} {x2:.2} {y2:.2}" stroke="{}" stroke-width="{}" stroke-opacity="0.85"/>"#,
                escape_xml(self.colormap.color_for(value)),
                self.config.chord_width,
            );
        }
        svg.push_str("  </g>\n");
    }

    fn render_nodes(&self, svg: &mut String) {
        let radius = self.circle_radius();

        svg.push_str("  <g id=\"nodes\">\n");
        for (index, angle) in self.angles.iter().enumerate() {
            let (x, y) = self.point_at(*angle, radius);
            let _ = writeln!(
                svg,
                r#"    <circle cx="{x:.2}" cy="{y:.2}" r="{}" fill="{}"/>"#,
                self.config.node_radius,
                escape_xml(&self.node_colors[index]),
            );
        }
        svg.push_str("  </g>\n");
    }

    fn render_labels(&self, svg: &mut String) {
        let radius = self.circle_radius() + self.config.node_radius + 8.0;

        let _ = writeln!(
            svg,
            r#"  <g id="labels" font-family="sans-serif" font-size="{}" fill="{}">"#,
            self.config.label_font_size,
            escape_xml(&self.config.text_color),
        );
        for (index, title) in self.titles.iter().enumerate() {
            if title.is_empty() {
                continue;
            }
            let angle = self.angles[index];
            let (x, y) = self.point_at(angle, radius);
            let cosine = (angle * PI / 180.0).cos();
            let anchor = if cosine > 0.1 {
                "start"
            } else if cosine < -0.1 {
                "end"
            } else {
                "middle"
            };
            let _ = writeln!(
                svg,
                r#"    <text x="{x:.2}" y="{y:.2}" text-anchor="{anchor}" dominant-baseline="middle">{}</text>"#,
                escape_xml(title),
            );
        }
        svg.push_str("  </g>\n");
    }

    fn render_title(&self, svg: &mut String) {
        if self.config.title.is_empty() {
            return;
        }
        let _ = writeln!(
            svg,
            r#"  <text x="{}" y="{}" text-anchor="middle" font-family="sans-serif" font-size="{}" font-weight="bold" fill="{}">{}</text>"#,
            self.config.width as f32 / 2.0,
            self.config.title_font_size * 1.5,
            self.config.title_font_size,
            escape_xml(&self.config.text_color),
            escape_xml(&self.config.title),
        );
    }

    /// Manual legend in the top-right corner, on its own background.
    fn render_legend(&self, svg: &mut String) {
        if self.config.legend.is_empty() {
            return;
        }
        let row_height = 26.0;
        let swatch = 16.0;
        let box_width = 190.0;
        let box_height = row_height * (self.config.legend.len() as f32 + 1.0) + 14.0;
        let x = self.config.width as f32 - box_width - 20.0;
        let y = 20.0;

        svg.push_str("  <g id=\"legend\" font-family=\"sans-serif\">\n");
        let _ = writeln!(
            svg,
            r#"    <rect x="{x}" y="{y}" width="{box_width}" height="{box_height:.0}" rx="6" fill="{}" fill-opacity="0.98"/>"#,
            escape_xml(&self.config.legend_background),
        );
        let _ = writeln!(
            svg,
            r#"    <text x="{:.2}" y="{:.2}" text-anchor="middle" font-size="15" font-weight="bold" fill="black">Citation Type</text>"#,
            x + box_width / 2.0,
            y + row_height - 6.0,
        );
        for (index, entry) in self.config.legend.iter().enumerate() {
            let row_y = y + row_height * (index as f32 + 1.0) + 10.0;
            let _ = writeln!(
                svg,
                r#"    <rect x="{:.2}" y="{row_y:.2}" width="{swatch}" height="{swatch}" fill="{}" stroke="black"/>"#,
                x + 12.0,
                escape_xml(&entry.color),
            );
            let _ = writeln!(
                svg,
                r#"    <text x="{:.2}" y="{:.2}" font-size="13" fill="black">{}</text>"#,
                x + 12.0 + swatch + 8.0,
                row_y + swatch - 3.0,
                escape_xml(&entry.label),
            );
        }
        svg.push_str("  </g>\n");
    }

    /// Serializes and writes the figure in one shot.
    pub fn export(&self, path: &Path) -> Result<(), FigureError> {
        let svg = self.to_svg();
        std::fs::write(path, &svg)?;
        tracing::debug!("wrote {} bytes to {}", svg.len(), path.display());
        Ok(())
    }
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

//! Node and edge color assignment.

use crate::order::{CanonicalOrder, Label};
use citecircle_core::Category;
use thiserror::Error;

/// Raised when a user-supplied color list has the wrong length. Checked up
/// front, before any layout computation, so no partial output is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    #[error("edge color list needs exactly 5 entries (MM, MW, WM, WW, Unknown order), got {0}")]
    EdgeColorCount(usize),
    #[error("node color list needs exactly 6 entries (labels, MM, MW, WM, WW, Unknown order), got {0}")]
    NodeColorCount(usize),
}

/// User-facing color configuration: five edge colors in fixed category
/// order, and six node colors with the shared placeholder color first.
/// Colors are passed through verbatim as SVG/CSS color strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    edge: Vec<String>,
    node: Vec<String>,
}

impl Palette {
    pub const EDGE_COLOR_COUNT: usize = 5;
    pub const NODE_COLOR_COUNT: usize = 6;

    pub fn new(edge: Vec<String>, node: Vec<String>) -> Result<Palette, PaletteError> {
        if edge.len() != Self::EDGE_COLOR_COUNT {
            return Err(PaletteError::EdgeColorCount(edge.len()));
        }
        if node.len() != Self::NODE_COLOR_COUNT {
            return Err(PaletteError::NodeColorCount(node.len()));
        }
        Ok(Palette { edge, node })
    }

    /// Node color for one label: placeholders all share the first node
    /// color, citations inherit their category's.
    pub fn node_color(&self, label: &Label) -> &str {
        match label.citation_category() {
            None => &self.node[0],
            Some(category) => &self.node[category.index()],
        }
    }

    /// Node colors aligned to the canonical order.
    pub fn node_colors(&self, order: &CanonicalOrder) -> Vec<String> {
        order
            .labels()
            .iter()
            .map(|label| self.node_color(label).to_string())
            .collect()
    }

    /// Six-level categorical scale over matrix cell values. Level zero is
    /// the figure background so untagged cells draw nothing visible; levels
    /// 1..=5 are the edge colors in fixed category order.
    pub fn edge_colormap(&self, background: &str) -> EdgeColormap {
        let mut levels = Vec::with_capacity(Self::EDGE_COLOR_COUNT + 1);
        levels.push(background.to_string());
        levels.extend(self.edge.iter().cloned());
        EdgeColormap { levels }
    }

    /// Legend swatches: category legend wording plus the category's node
    /// color, in fixed order.
    pub fn legend_entries(&self) -> Vec<(&'static str, &str)> {
        Category::ALL
            .iter()
            .map(|category| (category.legend_name(), self.node[category.index()].as_str()))
            .collect()
    }
}

impl Default for Palette {
    /// Defaults from the original tool's CLI.
    fn default() -> Self {
        Palette {
            edge: [
                "indianred",
                "steelblue",
                "mediumpurple",
                "mediumseagreen",
                "aliceblue",
            ]
            .map(String::from)
            .to_vec(),
            node: ["dimgrey", "red", "blue", "purple", "green", "white"]
                .map(String::from)
                .to_vec(),
        }
    }
}

/// Discrete colormap keyed by relation matrix cell values `0..=5`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeColormap {
    levels: Vec<String>,
}

impl EdgeColormap {
    pub fn color_for(&self, value: u8) -> &str {
        // Values above the scale cannot come from a well-formed matrix;
        // treat them as untagged.
        self.levels
            .get(value as usize)
            .unwrap_or(&self.levels[0])
            .as_str()
    }

    pub fn levels(&self) -> &[String] {
        &self.levels
    }
}

//! The categorical relation matrix handed to the renderer.

use crate::order::{CanonicalOrder, Label, Placeholder};

/// Square integer matrix indexed by the canonical order on both axes.
///
/// This is a labeling device, not an adjacency matrix: each citation row
/// carries exactly one nonzero cell, sitting at its category anchor's column,
/// and the cell value equals that column index (1..=5). The renderer reads
/// the value through the edge colormap to draw one colored chord per
/// citation pointing at its category. Placeholder rows stay all-zero and the
/// matrix is deliberately not symmetric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationMatrix {
    side: usize,
    cells: Vec<u8>,
}

impl RelationMatrix {
    pub fn build(order: &CanonicalOrder) -> RelationMatrix {
        let side = order.len();
        let mut cells = vec![0u8; side * side];
        for (row, label) in order.labels().iter().enumerate() {
            if let Label::Citation { category, .. } = label {
                let column = Placeholder::for_category(*category).column();
                cells[row * side + column] = column as u8;
            }
        }
        RelationMatrix { side, cells }
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn get(&self, row: usize, column: usize) -> u8 {
        self.cells[row * self.side + column]
    }

    pub fn row(&self, row: usize) -> &[u8] {
        &self.cells[row * self.side..(row + 1) * self.side]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks_exact(self.side)
    }
}

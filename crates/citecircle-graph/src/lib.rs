//! Ordering, matrix, layout and color logic for the citation circle.
//!
//! Two orderings over the same label set live here and must never be
//! conflated: the canonical order ([`CanonicalOrder`]) indexes the relation
//! matrix and every per-label output, while the display order
//! ([`DisplayOrder`]) only decides where nodes sit on the circle.

pub mod colors;
pub mod layout;
pub mod matrix;
pub mod order;
pub mod titles;

pub use colors::{EdgeColormap, Palette, PaletteError};
pub use layout::{AngleMap, CircularLayouter};
pub use matrix::RelationMatrix;
pub use order::{CanonicalOrder, DisplayOrder, Label, Placeholder};
pub use titles::{display_title, display_titles};

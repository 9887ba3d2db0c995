//! Angular placement of labels around the circle.

use crate::order::{CanonicalOrder, DisplayOrder};
use std::collections::HashMap;

/// Per-label angular position in degrees, keyed by label name so lookups
/// stay correct regardless of which ordering a consumer iterates in.
#[derive(Debug, Clone, PartialEq)]
pub struct AngleMap {
    by_name: HashMap<String, f32>,
}

impl AngleMap {
    pub fn get(&self, name: &str) -> Option<f32> {
        self.by_name.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Angles re-aligned to the canonical order, for renderers that consume
    /// positional arrays next to the matrix. A name missing from the map can
    /// only happen when the two orderings were built from different record
    /// sets; it is logged and placed at zero rather than dropped, keeping
    /// the output aligned.
    pub fn canonical_angles(&self, order: &CanonicalOrder) -> Vec<f32> {
        order
            .names()
            .map(|name| match self.get(name) {
                Some(angle) => angle,
                None => {
                    tracing::warn!("label {name:?} missing from angle map");
                    0.0
                }
            })
            .collect()
    }
}

/// Divides the circle evenly among the display-order positions, proceeding
/// counterclockwise from a configurable start offset.
#[derive(Debug, Clone, Copy)]
pub struct CircularLayouter {
    /// Offset of the first display-order label, in degrees.
    pub start_angle: f32,
}

impl CircularLayouter {
    /// A quarter turn from the reference zero angle, so the first anchor
    /// node sits at the top of the figure.
    pub const DEFAULT_START_ANGLE: f32 = 90.0;

    pub fn new(start_angle: f32) -> Self {
        Self { start_angle }
    }

    /// One angle per label, at equal increments of `360 / len` degrees,
    /// normalized into `[0, 360)`.
    pub fn layout(&self, display: &DisplayOrder) -> AngleMap {
        let step = 360.0 / display.len() as f32;
        let by_name = display
            .labels()
            .iter()
            .enumerate()
            .map(|(position, label)| {
                let angle = (self.start_angle + position as f32 * step).rem_euclid(360.0);
                (label.name().to_string(), angle)
            })
            .collect();
        AngleMap { by_name }
    }
}

impl Default for CircularLayouter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_START_ANGLE)
    }
}

use egui::Pos2;

use crate::shape::ShapeStore;

/// Distance in pixels within which a dragged edge aligns to another edge
pub const SNAP_THRESHOLD: f32 = 10.0;

/// A transient alignment line, only shown for the frame that produced it
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SnapGuide {
    /// Full-width line at this y coordinate
    Horizontal(f32),
    /// Full-height line at this x coordinate
    Vertical(f32),
}

/// Adjusted drag position together with the guides to draw for it
#[derive(Debug, Clone, PartialEq)]
pub struct Snap {
    pub position: Pos2,
    pub guides: Vec<SnapGuide>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapper {
    threshold: f32,
}

impl Default for Snapper {
    fn default() -> Self {
        Self::new(SNAP_THRESHOLD)
    }
}

impl Snapper {
    pub fn new(threshold: f32) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Computes where the rectangle at `index` lands when dragged to `target`.
    ///
    /// Every other rectangle is compared in storage order, Y axis then X axis,
    /// each edge pair against the unconstrained target. A later qualifying pair
    /// overrides an earlier one on the same axis. Returns `None` when `target`
    /// is exactly the current position or `index` is not a rectangle.
    pub fn snap(&self, shapes: &ShapeStore, index: usize, target: Pos2) -> Option<Snap> {
        let current = shapes.get(index)?;
        if current.x == target.x && current.y == target.y {
            return None;
        }

        let mut position = target;
        let mut guides = Vec::new();

        for (other_index, other) in shapes.rectangles().iter().enumerate() {
            if other_index == index {
                continue;
            }

            for (y, guide) in self.axis_snaps(target.y, current.height, other.y, other.height) {
                position.y = y;
                guides.push(SnapGuide::Horizontal(guide));
            }
            for (x, guide) in self.axis_snaps(target.x, current.width, other.x, other.width) {
                position.x = x;
                guides.push(SnapGuide::Vertical(guide));
            }
        }

        Some(Snap { position, guides })
    }

    /// Qualifying edge pairs on one axis, in scan order.
    ///
    /// Each entry is the snapped origin of the moving rectangle and the
    /// coordinate of the aligned edge.
    fn axis_snaps(
        &self,
        start: f32,
        extent: f32,
        other_start: f32,
        other_extent: f32,
    ) -> Vec<(f32, f32)> {
        let moving = [0.0, extent];
        let fixed = [other_start, other_start + other_extent];

        let mut snaps = Vec::new();
        for edge_offset in moving {
            for other_edge in fixed {
                if (start + edge_offset - other_edge).abs() < self.threshold {
                    let snapped = other_edge - edge_offset;
                    snaps.push((snapped, snapped + edge_offset));
                }
            }
        }
        snaps
    }
}

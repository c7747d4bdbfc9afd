use egui::{Pos2, Rect, Vec2};
use log::debug;

use crate::error::ShapeError;

/// Default upper bound on the number of rectangles on the canvas
pub const MAX_RECTANGLES: usize = 100;

/// An axis-aligned rectangle on the canvas.
///
/// `width` and `height` are never negative once the rectangle is stored in a
/// [`ShapeStore`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub selected: bool,
}

impl Rectangle {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            selected: false,
        }
    }

    /// Builds a rectangle from a possibly negative extent, flipping the origin
    /// so the stored size is positive.
    fn normalized(mut x: f32, mut y: f32, mut width: f32, mut height: f32) -> Self {
        if width < 0.0 {
            x += width;
            width = -width;
        }
        if height < 0.0 {
            y += height;
            height = -height;
        }
        Self::new(x, y, width, height)
    }

    pub fn min(&self) -> Pos2 {
        Pos2::new(self.x, self.y)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn rect(&self) -> Rect {
        Rect::from_min_size(self.min(), self.size())
    }

    /// Inclusive on all four edges.
    pub fn contains(&self, pos: Pos2) -> bool {
        pos.x >= self.x
            && pos.x <= self.x + self.width
            && pos.y >= self.y
            && pos.y <= self.y + self.height
    }
}

/// Rectangles in creation order plus a separate back-to-front layer order.
///
/// Invariants:
/// - `layers` is always a permutation of `0..len()`; its last entry is the topmost shape.
/// - at most one rectangle has `selected == true`, and it is the one `selected()` reports.
#[derive(Debug, Clone)]
pub struct ShapeStore {
    rectangles: Vec<Rectangle>,
    layers: Vec<usize>,
    selected: Option<usize>,
    capacity: usize,
}

impl Default for ShapeStore {
    fn default() -> Self {
        Self::with_capacity(MAX_RECTANGLES)
    }
}

impl ShapeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            rectangles: Vec::with_capacity(capacity),
            layers: Vec::with_capacity(capacity),
            selected: None,
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.rectangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rectangles.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.rectangles.len() >= self.capacity
    }

    pub fn get(&self, index: usize) -> Option<&Rectangle> {
        self.rectangles.get(index)
    }

    /// Rectangles in storage (creation) order
    pub fn rectangles(&self) -> &[Rectangle] {
        &self.rectangles
    }

    /// Indices from bottom to top
    pub fn layer_order(&self) -> &[usize] {
        &self.layers
    }

    /// Rectangles in draw order, bottom first
    pub fn layered(&self) -> impl Iterator<Item = &Rectangle> + '_ {
        self.layers.iter().map(move |&index| &self.rectangles[index])
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Adds a rectangle on top of every other one and returns its index.
    ///
    /// Negative extents are normalized; a zero extent on either axis is rejected.
    pub fn create(&mut self, x: f32, y: f32, width: f32, height: f32) -> Result<usize, ShapeError> {
        if self.is_full() {
            return Err(ShapeError::CapacityReached(self.capacity));
        }
        if width == 0.0 || height == 0.0 {
            return Err(ShapeError::Degenerate { width, height });
        }

        let rectangle = Rectangle::normalized(x, y, width, height);
        let index = self.rectangles.len();
        self.rectangles.push(rectangle);
        self.layers.push(index);

        debug!("Created rectangle {} at {:?}", index, rectangle.rect());
        Ok(index)
    }

    /// Removes a rectangle, compacting storage and layer order. Clears the selection.
    pub fn delete(&mut self, index: usize) -> Result<Rectangle, ShapeError> {
        if index >= self.rectangles.len() {
            return Err(ShapeError::IndexOutOfRange(index));
        }

        self.clear_selection();
        let removed = self.rectangles.remove(index);

        self.layers.retain(|&layer| layer != index);
        for layer in &mut self.layers {
            if *layer > index {
                *layer -= 1;
            }
        }

        debug!("Deleted rectangle {}, {} left", index, self.rectangles.len());
        Ok(removed)
    }

    /// Topmost rectangle containing `pos`
    pub fn hit_test(&self, pos: Pos2) -> Option<usize> {
        self.layers
            .iter()
            .rev()
            .copied()
            .find(|&index| self.rectangles[index].contains(pos))
    }

    /// Selects a rectangle and raises it to the top of the layer order.
    ///
    /// Selecting the rectangle that is already selected changes nothing.
    pub fn select(&mut self, index: usize) -> Result<(), ShapeError> {
        if index >= self.rectangles.len() {
            return Err(ShapeError::IndexOutOfRange(index));
        }
        if self.selected == Some(index) {
            return Ok(());
        }

        self.clear_selection();
        self.rectangles[index].selected = true;
        self.selected = Some(index);

        if let Some(position) = self.layers.iter().position(|&layer| layer == index) {
            self.layers.remove(position);
            self.layers.push(index);
        }

        debug!("Selected rectangle {}", index);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        if let Some(index) = self.selected.take() {
            self.rectangles[index].selected = false;
        }
    }

    /// Moves a rectangle's origin without changing its size
    pub fn move_to(&mut self, index: usize, pos: Pos2) -> Result<(), ShapeError> {
        let rectangle = self
            .rectangles
            .get_mut(index)
            .ok_or(ShapeError::IndexOutOfRange(index))?;
        rectangle.x = pos.x;
        rectangle.y = pos.y;
        Ok(())
    }
}

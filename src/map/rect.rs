//! Pixel-space rectangles and the grid they live on.

use glam::IVec2;

use crate::constants::TILE_SIZE;

/// Converts a cell coordinate into the pixel position of its top-left corner.
pub const fn cell_to_pixel(cell: IVec2) -> IVec2 {
    IVec2::new(cell.x * TILE_SIZE, cell.y * TILE_SIZE)
}

/// An axis-aligned rectangle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// A rectangle covering exactly one grid cell.
    pub const fn tile(cell: IVec2) -> Self {
        let origin = cell_to_pixel(cell);
        Self::new(origin.x, origin.y, TILE_SIZE, TILE_SIZE)
    }

    /// A `size`×`size` square centered inside a grid cell.
    pub const fn centered_in(cell: IVec2, size: i32) -> Self {
        let origin = cell_to_pixel(cell);
        Self::new(
            origin.x + TILE_SIZE / 2 - size / 2,
            origin.y + TILE_SIZE / 2 - size / 2,
            size,
            size,
        )
    }

    pub const fn position(&self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    pub const fn center(&self) -> IVec2 {
        IVec2::new(self.x + self.w / 2, self.y + self.h / 2)
    }

    pub fn translate(&self, delta: IVec2) -> Self {
        Self::new(self.x + delta.x, self.y + delta.y, self.w, self.h)
    }

    /// Interiors intersect. Rectangles that only share an edge do not overlap.
    pub const fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.w && other.x < self.x + self.w && self.y < other.y + other.h && other.y < self.y + self.h
    }

    /// Whether the top-left corner sits exactly on a tile boundary on both axes.
    pub const fn is_aligned(&self) -> bool {
        self.x.rem_euclid(TILE_SIZE) == 0 && self.y.rem_euclid(TILE_SIZE) == 0
    }

    /// Moves the top-left corner to the nearest tile boundary on both axes.
    pub fn snapped(&self) -> Self {
        let snap = |v: i32| (v as f32 / TILE_SIZE as f32).round() as i32 * TILE_SIZE;
        Self::new(snap(self.x), snap(self.y), self.w, self.h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_rect() {
        let rect = Rect::tile(IVec2::new(2, 3));
        assert_eq!(rect, Rect::new(60, 90, TILE_SIZE, TILE_SIZE));
        assert!(rect.is_aligned());
    }

    #[test]
    fn test_centered_in() {
        let dot = Rect::centered_in(IVec2::new(1, 1), 4);
        assert_eq!(dot, Rect::new(43, 43, 4, 4));
        assert_eq!(dot.center(), Rect::tile(IVec2::new(1, 1)).center());
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::tile(IVec2::new(0, 0));
        let b = Rect::tile(IVec2::new(1, 0));
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
        assert!(a.translate(IVec2::new(1, 0)).overlaps(&b));
    }

    #[test]
    fn test_snapped_rounds_to_nearest_tile() {
        assert_eq!(Rect::new(40, 61, 30, 30).snapped(), Rect::new(30, 60, 30, 30));
        assert_eq!(Rect::new(50, 89, 30, 30).snapped(), Rect::new(60, 90, 30, 30));
    }

    #[test]
    fn test_alignment() {
        assert!(!Rect::new(35, 30, 30, 30).is_aligned());
        assert!(!Rect::new(30, 32, 30, 30).is_aligned());
        assert!(Rect::new(-30, 0, 30, 30).is_aligned());
    }
}

//! Integer axis-aligned boxes and colors shared by every entity.

/// An RGB color handed to the renderer untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Axis-aligned rectangle in world pixels. `x`/`y` is the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Rect { x, y, w, h }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn center_x(&self) -> i32 {
        self.x + self.w / 2
    }

    pub fn center_y(&self) -> i32 {
        self.y + self.h / 2
    }

    /// Strict overlap: boxes that only share an edge do not collide.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Half-open containment: the right and bottom edges are outside.
    pub fn contains_point(&self, px: i32, py: i32) -> bool {
        px >= self.left() && px < self.right() && py >= self.top() && py < self.bottom()
    }

    /// Move so the top edge's midpoint sits at `(cx, top)`.
    pub fn set_midtop(&mut self, cx: i32, top: i32) {
        self.x = cx - self.w / 2;
        self.y = top;
    }

    /// Move so the bottom edge's midpoint sits at `(cx, bottom)`.
    pub fn set_midbottom(&mut self, cx: i32, bottom: i32) {
        self.x = cx - self.w / 2;
        self.y = bottom - self.h;
    }

    /// Move so the center sits at `(cx, cy)`.
    pub fn set_center(&mut self, cx: i32, cy: i32) {
        self.x = cx - self.w / 2;
        self.y = cy - self.h / 2;
    }
}

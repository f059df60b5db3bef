use super::Vec2;

/// Axis-aligned bounding box in logical units (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Builds a rect spanning two arbitrary corners (e.g. a drag gesture).
    #[inline]
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        let min = Vec2::new(a.x.min(b.x), a.y.min(b.y));
        let max = Vec2::new(a.x.max(b.x), a.y.max(b.y));
        Self { origin: min, size: max - min }
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        self.normalized().origin
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        let r = self.normalized();
        r.origin + r.size
    }

    /// Flips negative extents so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let (mut x, mut w) = (self.origin.x, self.size.x);
        let (mut y, mut h) = (self.origin.y, self.size.y);
        if w < 0.0 {
            x += w;
            w = -w;
        }
        if h < 0.0 {
            y += h;
            h = -h;
        }
        Rect::new(x, y, w, h)
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        let (lo, hi) = (self.min(), self.max());
        p.x >= lo.x && p.y >= lo.y && p.x < hi.x && p.y < hi.y
    }

    /// Closed overlap test. Touching edges count, so zero-area bounds (points,
    /// axis-aligned lines) can still be caught by a selection box.
    #[inline]
    pub fn intersects(self, other: Rect) -> bool {
        let (a_lo, a_hi) = (self.min(), self.max());
        let (b_lo, b_hi) = (other.min(), other.max());
        a_lo.x <= b_hi.x && b_lo.x <= a_hi.x && a_lo.y <= b_hi.y && b_lo.y <= a_hi.y
    }
}

use cgmath::Vector2;

/// Axis-aligned rectangle with y growing downward. `y` is the top edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Rect { x, y, w, h }
    }

    #[inline(always)]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline(always)]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    #[inline(always)]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline(always)]
    pub fn center_x(&self) -> f32 {
        self.x + self.w * 0.5
    }

    #[inline(always)]
    pub fn area(&self) -> f32 {
        self.w * self.h
    }

    pub fn contains(&self, p: Vector2<f32>) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }
}

/// Signed area of the triangle (a, b, c); zero means collinear.
#[inline(always)]
fn orient(a: Vector2<f32>, b: Vector2<f32>, c: Vector2<f32>) -> f32 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Whether collinear point `c` lies within the bounding box of segment (a, b).
#[inline(always)]
fn on_segment(a: Vector2<f32>, b: Vector2<f32>, c: Vector2<f32>) -> bool {
    c.x >= a.x.min(b.x) && c.x <= a.x.max(b.x) && c.y >= a.y.min(b.y) && c.y <= a.y.max(b.y)
}

/// Proper or degenerate intersection of segments (a, b) and (c, d).
pub fn segments_intersect(
    a: Vector2<f32>,
    b: Vector2<f32>,
    c: Vector2<f32>,
    d: Vector2<f32>,
) -> bool {
    let o1 = orient(a, b, c);
    let o2 = orient(a, b, d);
    let o3 = orient(c, d, a);
    let o4 = orient(c, d, b);

    if o1 == 0.0 && on_segment(a, b, c) {
        return true;
    }
    if o2 == 0.0 && on_segment(a, b, d) {
        return true;
    }
    if o3 == 0.0 && on_segment(c, d, a) {
        return true;
    }
    if o4 == 0.0 && on_segment(c, d, b) {
        return true;
    }

    (o1 > 0.0) != (o2 > 0.0) && (o3 > 0.0) != (o4 > 0.0)
}

/// A segment hits a rectangle when either endpoint is inside it or the
/// segment crosses one of its four edges.
pub fn segment_intersects_rect(p1: Vector2<f32>, p2: Vector2<f32>, rect: &Rect) -> bool {
    if rect.contains(p1) || rect.contains(p2) {
        return true;
    }

    let tl = Vector2::new(rect.x, rect.y);
    let tr = Vector2::new(rect.right(), rect.y);
    let br = Vector2::new(rect.right(), rect.bottom());
    let bl = Vector2::new(rect.x, rect.bottom());

    segments_intersect(p1, p2, tl, tr)
        || segments_intersect(p1, p2, tr, br)
        || segments_intersect(p1, p2, br, bl)
        || segments_intersect(p1, p2, bl, tl)
}

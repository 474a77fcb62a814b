//! Pure geometry for the drag/dock interaction model
//!
//! Everything here is toolkit-agnostic math: hit regions, the tab insertion
//! index, window clamping, and resize arithmetic. Keeping it free of model
//! and renderer types makes the drag state machine testable in isolation.

// ============================================================================
// Primitives
// ============================================================================

/// A point or delta in window coordinates (logical pixels)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A width/height pair in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Rectangle for layout and hit-testing
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_pos_size(pos: Vec2, size: Size) -> Self {
        Self::new(pos.x, pos.y, size.width, size.height)
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x < self.x + self.width && p.y >= self.y && p.y < self.y + self.height
    }

    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

// ============================================================================
// Interaction Constants
// ============================================================================

/// Euclidean distance a pointer must travel before a press becomes a drag
pub const DRAG_THRESHOLD: f32 = 5.0;

/// Vertical tolerance around the tab strip that still counts as "in the strip"
pub const STRIP_HIT_MARGIN: f32 = 20.0;

/// Vertical displacement past which a tab dragged outside the strip detaches
pub const DETACH_DISTANCE: f32 = 50.0;

/// Pointer height below which a dragged window raises the dock highlight
pub const DOCK_ZONE_HEIGHT: f32 = 60.0;

/// Minimum horizontal sliver of a window that must stay on screen
pub const SCREEN_EDGE_MARGIN: f32 = 40.0;

/// Height of a floating window's title bar
pub const TITLE_BAR_HEIGHT: f32 = 32.0;

/// Height of the tab strip
pub const TAB_BAR_HEIGHT: f32 = 34.0;

/// Height of the status bar
pub const STATUS_BAR_HEIGHT: f32 = 24.0;

/// Floor for window resizing
pub const MIN_WINDOW_WIDTH: f32 = 300.0;
pub const MIN_WINDOW_HEIGHT: f32 = 200.0;

/// Caps for the default size of a freshly detached window
pub const MAX_DEFAULT_WINDOW_WIDTH: f32 = 900.0;
pub const MAX_DEFAULT_WINDOW_HEIGHT: f32 = 650.0;

/// Thickness of the invisible resize band around a window's edges
pub const RESIZE_HANDLE: f32 = 6.0;

/// Vertical offset of the title bar under the pointer when a tab detaches
pub const DETACH_POINTER_OFFSET: f32 = 16.0;

// ============================================================================
// Resize Direction
// ============================================================================

/// Which edge or corner of a window a resize drag grips
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeDir {
    N,
    S,
    E,
    W,
    Ne,
    Nw,
    Se,
    Sw,
}

impl ResizeDir {
    /// Whether this direction moves the top edge
    pub fn has_north(&self) -> bool {
        matches!(self, ResizeDir::N | ResizeDir::Ne | ResizeDir::Nw)
    }

    /// Whether this direction moves the bottom edge
    pub fn has_south(&self) -> bool {
        matches!(self, ResizeDir::S | ResizeDir::Se | ResizeDir::Sw)
    }

    /// Whether this direction moves the right edge
    pub fn has_east(&self) -> bool {
        matches!(self, ResizeDir::E | ResizeDir::Ne | ResizeDir::Se)
    }

    /// Whether this direction moves the left edge
    pub fn has_west(&self) -> bool {
        matches!(self, ResizeDir::W | ResizeDir::Nw | ResizeDir::Sw)
    }
}

// ============================================================================
// Drag Math
// ============================================================================

/// True once the pointer has moved far enough from the press point to count
/// as a drag rather than a click
pub fn exceeds_drag_threshold(press: Vec2, pos: Vec2) -> bool {
    let dx = pos.x - press.x;
    let dy = pos.y - press.y;
    (dx * dx + dy * dy).sqrt() > DRAG_THRESHOLD
}

/// Compute the insertion index for a dragged tab.
///
/// `centers` holds the horizontal centers of the *other* visible tabs, in
/// left-to-right order. The insertion point is the first index whose center
/// lies to the right of the pointer, or the end of the list if none does.
pub fn insertion_index(centers: &[f32], pointer_x: f32) -> usize {
    centers
        .iter()
        .position(|&cx| pointer_x < cx)
        .unwrap_or(centers.len())
}

/// The tab strip rect expanded by the vertical drag tolerance
pub fn strip_hit_region(strip: Rect) -> Rect {
    Rect::new(
        strip.x,
        strip.y - STRIP_HIT_MARGIN,
        strip.width,
        strip.height + 2.0 * STRIP_HIT_MARGIN,
    )
}

/// Default size for a window created by detaching a tab:
/// capped at 900x650, otherwise 75% of the viewport
pub fn default_window_size(viewport: Size) -> Size {
    Size::new(
        MAX_DEFAULT_WINDOW_WIDTH.min(viewport.width * 0.75),
        MAX_DEFAULT_WINDOW_HEIGHT.min(viewport.height * 0.75),
    )
}

/// Frame for a window spawned by detaching a tab at `pointer`: centered
/// horizontally under the pointer with the title bar just above it, clamped
/// on-screen
pub fn detach_frame(pointer: Vec2, viewport: Size) -> Rect {
    let size = default_window_size(viewport);
    let pos = clamp_window_pos(
        Vec2::new(
            pointer.x - size.width / 2.0,
            pointer.y - DETACH_POINTER_OFFSET,
        ),
        size,
        viewport,
    );
    Rect::from_pos_size(pos, size)
}

/// Clamp a window position so a grabbable sliver always stays on screen:
/// horizontally at least `SCREEN_EDGE_MARGIN` px remain visible on either
/// side, vertically the title bar can neither leave the top nor sink below
/// the bottom edge
pub fn clamp_window_pos(pos: Vec2, size: Size, viewport: Size) -> Vec2 {
    let min_x = SCREEN_EDGE_MARGIN - size.width;
    let max_x = viewport.width - SCREEN_EDGE_MARGIN;
    let max_y = (viewport.height - TITLE_BAR_HEIGHT).max(0.0);
    Vec2::new(pos.x.clamp(min_x, max_x), pos.y.clamp(0.0, max_y))
}

/// Apply a resize drag to a window frame.
///
/// East/south edges change size only. West/north edges move the origin and
/// shrink the size together, but the origin stays put whenever the new size
/// would fall under the floor, so the opposite edge remains anchored.
pub fn resize_frame(origin: Rect, dir: ResizeDir, dx: f32, dy: f32) -> Rect {
    let mut frame = origin;

    if dir.has_east() {
        frame.width = (origin.width + dx).max(MIN_WINDOW_WIDTH);
    }
    if dir.has_south() {
        frame.height = (origin.height + dy).max(MIN_WINDOW_HEIGHT);
    }
    if dir.has_west() {
        let new_width = origin.width - dx;
        if new_width >= MIN_WINDOW_WIDTH {
            frame.x = origin.x + dx;
            frame.width = new_width;
        } else {
            frame.width = MIN_WINDOW_WIDTH;
            frame.x = origin.x + origin.width - MIN_WINDOW_WIDTH;
        }
    }
    if dir.has_north() {
        let new_height = origin.height - dy;
        if new_height >= MIN_WINDOW_HEIGHT {
            frame.y = origin.y + dy;
            frame.height = new_height;
        } else {
            frame.height = MIN_WINDOW_HEIGHT;
            frame.y = origin.y + origin.height - MIN_WINDOW_HEIGHT;
        }
    }

    frame
}

/// Hit-test the resize band around a window frame.
///
/// Points inside the frame but clear of every edge return `None`; corners
/// win over edges so diagonal grips are reachable.
pub fn resize_dir_at(frame: Rect, p: Vec2) -> Option<ResizeDir> {
    let outer = Rect::new(
        frame.x - RESIZE_HANDLE,
        frame.y - RESIZE_HANDLE,
        frame.width + 2.0 * RESIZE_HANDLE,
        frame.height + 2.0 * RESIZE_HANDLE,
    );
    if !outer.contains(p) {
        return None;
    }

    let near_w = p.x < frame.x + RESIZE_HANDLE;
    let near_e = p.x >= frame.right() - RESIZE_HANDLE;
    let near_n = p.y < frame.y + RESIZE_HANDLE;
    let near_s = p.y >= frame.bottom() - RESIZE_HANDLE;

    match (near_n, near_s, near_w, near_e) {
        (true, _, true, _) => Some(ResizeDir::Nw),
        (true, _, _, true) => Some(ResizeDir::Ne),
        (_, true, true, _) => Some(ResizeDir::Sw),
        (_, true, _, true) => Some(ResizeDir::Se),
        (true, _, _, _) => Some(ResizeDir::N),
        (_, true, _, _) => Some(ResizeDir::S),
        (_, _, true, _) => Some(ResizeDir::W),
        (_, _, _, true) => Some(ResizeDir::E),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_threshold_is_euclidean() {
        let press = Vec2::new(10.0, 10.0);
        assert!(!exceeds_drag_threshold(press, Vec2::new(13.0, 13.0)));
        assert!(exceeds_drag_threshold(press, Vec2::new(14.0, 14.0)));
        // Exactly 5px is still a click
        assert!(!exceeds_drag_threshold(press, Vec2::new(15.0, 10.0)));
        assert!(exceeds_drag_threshold(press, Vec2::new(15.1, 10.0)));
    }

    #[test]
    fn test_insertion_index_basic() {
        let centers = [50.0, 150.0, 250.0];
        assert_eq!(insertion_index(&centers, 0.0), 0);
        assert_eq!(insertion_index(&centers, 100.0), 1);
        assert_eq!(insertion_index(&centers, 200.0), 2);
        assert_eq!(insertion_index(&centers, 300.0), 3);
    }

    #[test]
    fn test_insertion_index_empty() {
        assert_eq!(insertion_index(&[], 123.0), 0);
    }

    #[test]
    fn test_insertion_index_at_center_goes_after() {
        // Pointer exactly on a center is not "before" it
        let centers = [100.0];
        assert_eq!(insertion_index(&centers, 100.0), 1);
        assert_eq!(insertion_index(&centers, 99.9), 0);
    }

    #[test]
    fn test_strip_hit_region_expands_both_ways() {
        let strip = Rect::new(0.0, 0.0, 800.0, TAB_BAR_HEIGHT);
        let region = strip_hit_region(strip);
        assert!(region.contains(Vec2::new(400.0, -19.0)));
        assert!(region.contains(Vec2::new(400.0, TAB_BAR_HEIGHT + 19.0)));
        assert!(!region.contains(Vec2::new(400.0, TAB_BAR_HEIGHT + 21.0)));
    }

    #[test]
    fn test_default_window_size_caps() {
        let large = default_window_size(Size::new(2000.0, 1500.0));
        assert_eq!(large, Size::new(900.0, 650.0));

        let small = default_window_size(Size::new(800.0, 600.0));
        assert_eq!(small, Size::new(600.0, 450.0));
    }

    #[test]
    fn test_clamp_window_pos_bounds() {
        let viewport = Size::new(1280.0, 720.0);
        let size = Size::new(400.0, 300.0);

        // Far off the left: at least the margin remains visible
        let p = clamp_window_pos(Vec2::new(-1000.0, 100.0), size, viewport);
        assert_eq!(p.x, SCREEN_EDGE_MARGIN - size.width);

        // Far off the right
        let p = clamp_window_pos(Vec2::new(5000.0, 100.0), size, viewport);
        assert_eq!(p.x, viewport.width - SCREEN_EDGE_MARGIN);

        // Cannot go above the top
        let p = clamp_window_pos(Vec2::new(100.0, -50.0), size, viewport);
        assert_eq!(p.y, 0.0);

        // Title bar cannot sink below the bottom
        let p = clamp_window_pos(Vec2::new(100.0, 5000.0), size, viewport);
        assert_eq!(p.y, viewport.height - TITLE_BAR_HEIGHT);
    }

    #[test]
    fn test_resize_east_grows_size_only() {
        let origin = Rect::new(100.0, 100.0, 400.0, 300.0);
        let f = resize_frame(origin, ResizeDir::E, 50.0, 999.0);
        assert_eq!(f, Rect::new(100.0, 100.0, 450.0, 300.0));
    }

    #[test]
    fn test_resize_west_moves_origin() {
        let origin = Rect::new(100.0, 100.0, 400.0, 300.0);
        let f = resize_frame(origin, ResizeDir::W, -50.0, 0.0);
        assert_eq!(f, Rect::new(50.0, 100.0, 450.0, 300.0));
    }

    #[test]
    fn test_resize_floor_anchors_opposite_edge() {
        let origin = Rect::new(100.0, 100.0, 400.0, 300.0);
        // Dragging the west edge far past the floor: right edge stays at 500
        let f = resize_frame(origin, ResizeDir::W, 350.0, 0.0);
        assert_eq!(f.width, MIN_WINDOW_WIDTH);
        assert_eq!(f.right(), origin.right());
        // Same for the north edge: bottom stays at 400
        let f = resize_frame(origin, ResizeDir::N, 0.0, 250.0);
        assert_eq!(f.height, MIN_WINDOW_HEIGHT);
        assert_eq!(f.bottom(), origin.bottom());
    }

    #[test]
    fn test_resize_south_east_floors() {
        let origin = Rect::new(0.0, 0.0, 400.0, 300.0);
        let f = resize_frame(origin, ResizeDir::Se, -500.0, -500.0);
        assert_eq!(f.width, MIN_WINDOW_WIDTH);
        assert_eq!(f.height, MIN_WINDOW_HEIGHT);
        assert_eq!(f.pos(), origin.pos());
    }

    #[test]
    fn test_resize_dir_at_corners_win() {
        let frame = Rect::new(100.0, 100.0, 400.0, 300.0);
        assert_eq!(
            resize_dir_at(frame, Vec2::new(101.0, 101.0)),
            Some(ResizeDir::Nw)
        );
        assert_eq!(
            resize_dir_at(frame, Vec2::new(499.0, 399.0)),
            Some(ResizeDir::Se)
        );
        assert_eq!(
            resize_dir_at(frame, Vec2::new(300.0, 101.0)),
            Some(ResizeDir::N)
        );
        assert_eq!(resize_dir_at(frame, Vec2::new(300.0, 250.0)), None);
        assert_eq!(resize_dir_at(frame, Vec2::new(0.0, 0.0)), None);
    }
}

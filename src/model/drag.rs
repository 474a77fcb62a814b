//! Drag session state machine
//!
//! A pointer press arms a `Pending` session; crossing the movement threshold
//! promotes it to one of the active variants. The tab → window conversion
//! that happens when a tab is dragged out of the strip is an explicit
//! transition (`Tab` → `Window`) performed by the drag update handler, not a
//! field mutation, so its invariants are auditable in one place.

use crate::content::DocId;
use crate::geometry::{Rect, ResizeDir, Vec2};

/// What the pointer went down on
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PressTarget {
    /// A tab header in the strip
    Tab(DocId),
    /// A floating window's title bar
    WindowTitle(DocId),
    /// The resize band of a floating window
    WindowResize(DocId, ResizeDir),
    /// An explorer row; promotes to a window drag for closed documents
    ExplorerItem(DocId),
}

impl PressTarget {
    pub fn doc(&self) -> DocId {
        match *self {
            PressTarget::Tab(d)
            | PressTarget::WindowTitle(d)
            | PressTarget::WindowResize(d, _)
            | PressTarget::ExplorerItem(d) => d,
        }
    }
}

/// The in-progress pointer manipulation, if any.
///
/// Exactly one session exists at a time; it lives in a single
/// `Option<DragSession>` slot on the model.
#[derive(Debug, Clone, PartialEq)]
pub enum DragSession {
    /// Pointer is down but has not crossed the drag threshold
    Pending { target: PressTarget, press: Vec2 },
    /// A tab is being dragged along (or away from) the strip
    Tab { doc: DocId, press: Vec2 },
    /// A floating window is being moved. `origin` is the window position
    /// when the drag (re-)anchored; the window tracks `origin + delta`.
    Window { doc: DocId, press: Vec2, origin: Vec2 },
    /// A floating window edge or corner is being dragged
    Resize {
        doc: DocId,
        dir: ResizeDir,
        press: Vec2,
        origin: Rect,
    },
}

impl DragSession {
    pub fn doc(&self) -> DocId {
        match *self {
            DragSession::Pending { ref target, .. } => target.doc(),
            DragSession::Tab { doc, .. }
            | DragSession::Window { doc, .. }
            | DragSession::Resize { doc, .. } => doc,
        }
    }

    /// Whether the session has been promoted past the click threshold
    pub fn is_active(&self) -> bool {
        !matches!(self, DragSession::Pending { .. })
    }
}

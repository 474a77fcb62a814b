//! Tab strip and floating window state
//!
//! The workbench owns the two collections a document can live in: the
//! ordered tab sequence and the floating window set. A document id is in
//! exactly one of them at a time; detach and redock move it between the two
//! inside a single call so no intermediate state is observable.

use crate::content::{DocId, HOME_DOC};
use crate::geometry::{self, Rect, Size, Vec2};

/// A tab detached into an independently positioned, resizable panel
#[derive(Debug, Clone)]
pub struct FloatingWindow {
    pub doc: DocId,
    pub frame: Rect,
    pub z: u32,
    pub maximized: bool,
    /// Frame to restore when un-maximizing
    pub restore: Option<Rect>,
}

/// Open documents: the tab sequence plus the floating window set
#[derive(Debug, Clone)]
pub struct Workbench {
    /// Visual order of the strip, left to right
    pub tabs: Vec<DocId>,
    /// The tab whose document fills the editor viewport
    pub active: DocId,
    pub windows: Vec<FloatingWindow>,
    next_z: u32,
}

impl Workbench {
    /// A workbench with only the permanent home tab open
    pub fn new() -> Self {
        Self {
            tabs: vec![HOME_DOC],
            active: HOME_DOC,
            windows: Vec::new(),
            next_z: 1,
        }
    }

    /// Whether a document is open anywhere (tab or window)
    pub fn is_open(&self, doc: DocId) -> bool {
        self.tabs.contains(&doc) || self.window(doc).is_some()
    }

    /// Open a document: activate its tab if present, raise its window if
    /// floating, otherwise append a new tab and activate it
    pub fn open(&mut self, doc: DocId) {
        if self.tabs.contains(&doc) {
            self.active = doc;
        } else if self.window(doc).is_some() {
            self.raise(doc);
        } else {
            self.tabs.push(doc);
            self.active = doc;
        }
    }

    /// Close a tab. The home tab is permanent; closing it is a no-op.
    /// Closing the active tab activates its left neighbor.
    pub fn close_tab(&mut self, doc: DocId) {
        if doc == HOME_DOC {
            return;
        }
        let Some(idx) = self.tabs.iter().position(|&t| t == doc) else {
            return;
        };
        self.tabs.remove(idx);
        if self.active == doc {
            let fallback = idx.saturating_sub(1);
            self.active = self.tabs.get(fallback).copied().unwrap_or(HOME_DOC);
        }
    }

    /// Activate a tab by id (no-op if the id is not a tab)
    pub fn activate(&mut self, doc: DocId) {
        if self.tabs.contains(&doc) {
            self.active = doc;
        }
    }

    /// Activate the tab after the active one, wrapping
    pub fn next_tab(&mut self) {
        if let Some(idx) = self.tabs.iter().position(|&t| t == self.active) {
            self.active = self.tabs[(idx + 1) % self.tabs.len()];
        }
    }

    /// Activate the tab before the active one, wrapping
    pub fn prev_tab(&mut self) {
        if let Some(idx) = self.tabs.iter().position(|&t| t == self.active) {
            self.active = self.tabs[(idx + self.tabs.len() - 1) % self.tabs.len()];
        }
    }

    /// Splice a tab to a new position. `index` counts positions among the
    /// remaining tabs after the dragged one is removed, matching the
    /// insertion index computed during the drag.
    pub fn reorder_tab(&mut self, doc: DocId, index: usize) {
        let Some(from) = self.tabs.iter().position(|&t| t == doc) else {
            return;
        };
        self.tabs.remove(from);
        let index = index.min(self.tabs.len());
        self.tabs.insert(index, doc);
        self.active = doc;
    }

    // ========================================================================
    // Floating windows
    // ========================================================================

    pub fn window(&self, doc: DocId) -> Option<&FloatingWindow> {
        self.windows.iter().find(|w| w.doc == doc)
    }

    pub fn window_mut(&mut self, doc: DocId) -> Option<&mut FloatingWindow> {
        self.windows.iter_mut().find(|w| w.doc == doc)
    }

    /// Windows in paint order (lowest z first)
    pub fn windows_by_z(&self) -> Vec<&FloatingWindow> {
        let mut ws: Vec<&FloatingWindow> = self.windows.iter().collect();
        ws.sort_by_key(|w| w.z);
        ws
    }

    /// The window under the highest z, if any
    pub fn top_window(&self) -> Option<&FloatingWindow> {
        self.windows.iter().max_by_key(|w| w.z)
    }

    /// Detach a tab into a floating window with the given frame.
    /// Returns false if the document is not a tab or is the home tab.
    pub fn detach_tab(&mut self, doc: DocId, frame: Rect) -> bool {
        if doc == HOME_DOC {
            return false;
        }
        let Some(idx) = self.tabs.iter().position(|&t| t == doc) else {
            return false;
        };
        self.tabs.remove(idx);
        if self.active == doc {
            let fallback = idx.saturating_sub(1);
            self.active = self.tabs.get(fallback).copied().unwrap_or(HOME_DOC);
        }
        self.spawn_window(doc, frame);
        true
    }

    /// Create a floating window for a document that is not open anywhere.
    /// Used by explorer drags; refuses ids that are already open.
    pub fn spawn_window(&mut self, doc: DocId, frame: Rect) -> bool {
        if self.tabs.contains(&doc) || self.window(doc).is_some() {
            return false;
        }
        let z = self.bump_z();
        self.windows.push(FloatingWindow {
            doc,
            frame,
            z,
            maximized: false,
            restore: None,
        });
        true
    }

    /// Re-dock a floating window as a tab at the given insertion index.
    /// Returns false if no such window exists.
    pub fn redock_window(&mut self, doc: DocId, index: usize) -> bool {
        let Some(idx) = self.windows.iter().position(|w| w.doc == doc) else {
            return false;
        };
        self.windows.remove(idx);
        let index = index.min(self.tabs.len());
        self.tabs.insert(index, doc);
        self.active = doc;
        true
    }

    /// Close a floating window outright
    pub fn close_window(&mut self, doc: DocId) {
        self.windows.retain(|w| w.doc != doc);
    }

    /// Raise a window to the top of the z-order
    pub fn raise(&mut self, doc: DocId) {
        let z = self.bump_z();
        if let Some(w) = self.window_mut(doc) {
            w.z = z;
        }
    }

    /// Toggle a window between maximized (full viewport) and its remembered
    /// frame. Double-clicking the title bar lands here too.
    pub fn toggle_maximize(&mut self, doc: DocId, viewport: Size) {
        let Some(w) = self.window_mut(doc) else {
            return;
        };
        if w.maximized {
            if let Some(restore) = w.restore.take() {
                w.frame = restore;
            }
            w.maximized = false;
        } else {
            w.restore = Some(w.frame);
            w.frame = Rect::new(0.0, 0.0, viewport.width, viewport.height);
            w.maximized = true;
        }
    }

    /// Un-maximize a window so a move drag can tear it off, recentering the
    /// restored frame under the pointer. Returns the restored frame.
    pub fn unmaximize_for_drag(&mut self, doc: DocId, pointer: Vec2, viewport: Size) -> Option<Rect> {
        let w = self.window_mut(doc)?;
        if !w.maximized {
            return Some(w.frame);
        }
        let restored = w.restore.take().unwrap_or(w.frame);
        let pos = geometry::clamp_window_pos(
            Vec2::new(
                pointer.x - restored.width / 2.0,
                pointer.y - geometry::DETACH_POINTER_OFFSET,
            ),
            restored.size(),
            viewport,
        );
        w.frame = Rect::from_pos_size(pos, restored.size());
        w.maximized = false;
        Some(w.frame)
    }

    fn bump_z(&mut self) -> u32 {
        let z = self.next_z;
        self.next_z += 1;
        z
    }
}

impl Default for Workbench {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Debug Invariant Validation
// ============================================================================

impl Workbench {
    /// Validate internal invariants in debug builds:
    /// - the home tab is always present in the strip
    /// - the active id names an existing tab
    /// - no document is both a tab and a window
    /// - tab ids and window ids are unique
    #[cfg(debug_assertions)]
    pub fn assert_invariants(&self) {
        assert!(
            self.tabs.contains(&HOME_DOC),
            "home tab missing from strip"
        );
        assert!(
            self.tabs.contains(&self.active),
            "active tab {:?} is not in the strip",
            self.active
        );
        for w in &self.windows {
            assert!(
                !self.tabs.contains(&w.doc),
                "doc {:?} is both a tab and a window",
                w.doc
            );
        }
        for (i, a) in self.tabs.iter().enumerate() {
            assert!(
                !self.tabs[i + 1..].contains(a),
                "duplicate tab {:?}",
                a
            );
        }
        for (i, a) in self.windows.iter().enumerate() {
            assert!(
                self.windows[i + 1..].iter().all(|b| b.doc != a.doc),
                "duplicate window {:?}",
                a.doc
            );
        }
    }

    /// No-op in release builds
    #[cfg(not(debug_assertions))]
    #[inline]
    pub fn assert_invariants(&self) {}
}

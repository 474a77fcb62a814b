//! UI state - modals, toasts, explorer, and drag view-state

use std::collections::HashSet;
use std::time::{Duration, Instant};

use crate::content::DocId;

// ============================================================================
// Modal System
// ============================================================================

/// Identifies which modal is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalId {
    /// Command palette (Ctrl+P)
    CommandPalette,
    /// Theme marketplace
    ThemeStore,
}

/// State for the command palette modal
#[derive(Debug, Clone, Default)]
pub struct CommandPaletteState {
    /// Current input text
    pub input: String,
    /// Index of selected command in the filtered list
    pub selected_index: usize,
}

/// State for the theme marketplace modal
#[derive(Debug, Clone, Default)]
pub struct ThemeStoreState {
    /// Index of the highlighted theme in the listing
    pub selected_index: usize,
    /// Theme id that was active when the store opened, restored on cancel
    pub previous_theme: String,
    /// Listing captured when the store opened (user + builtin themes)
    pub entries: Vec<crate::theme::ThemeInfo>,
}

/// Union of all modal states
#[derive(Debug, Clone)]
pub enum ModalState {
    CommandPalette(CommandPaletteState),
    ThemeStore(ThemeStoreState),
}

impl ModalState {
    pub fn id(&self) -> ModalId {
        match self {
            ModalState::CommandPalette(_) => ModalId::CommandPalette,
            ModalState::ThemeStore(_) => ModalId::ThemeStore,
        }
    }
}

// ============================================================================
// Toasts
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

/// A transient notification with auto-expiry
#[derive(Debug, Clone)]
pub struct Toast {
    pub text: String,
    pub level: ToastLevel,
    created: Instant,
    ttl: Duration,
}

impl Toast {
    pub fn new(text: impl Into<String>, level: ToastLevel) -> Self {
        Self::with_ttl(text, level, Duration::from_millis(3500))
    }

    pub fn with_ttl(text: impl Into<String>, level: ToastLevel, ttl: Duration) -> Self {
        Self {
            text: text.into(),
            level,
            created: Instant::now(),
            ttl,
        }
    }

    pub fn expired(&self) -> bool {
        self.created.elapsed() >= self.ttl
    }
}

// ============================================================================
// Explorer
// ============================================================================

/// Sidebar listing the virtual file tree
#[derive(Debug, Clone)]
pub struct ExplorerState {
    pub visible: bool,
    pub width_logical: f32,
    pub selected: Option<DocId>,
    /// Labels of collapsed tree sections
    pub collapsed: HashSet<&'static str>,
}

impl ExplorerState {
    pub fn new() -> Self {
        Self {
            visible: true,
            width_logical: 220.0,
            selected: None,
            collapsed: HashSet::new(),
        }
    }

    pub fn toggle_section(&mut self, label: &'static str) {
        if !self.collapsed.remove(label) {
            self.collapsed.insert(label);
        }
    }
}

impl Default for ExplorerState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// UI State
// ============================================================================

/// Everything the chrome renders that is not a document: modal, toasts,
/// explorer, and the reactive view-state of an in-progress drag
#[derive(Debug, Clone)]
pub struct UiState {
    /// Currently active modal (if any)
    pub active_modal: Option<ModalState>,
    pub toasts: Vec<Toast>,
    pub explorer: ExplorerState,

    /// True once a drag session is past the click threshold; switches the
    /// global cursor and suppresses hover styling
    pub is_dragging: bool,
    /// Insertion index for the drop indicator between tabs, when a drag
    /// hovers the strip
    pub drop_index: Option<usize>,
    /// True while a dragged window hovers the top dock zone
    pub dock_highlight: bool,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            active_modal: None,
            toasts: Vec::new(),
            explorer: ExplorerState::new(),
            is_dragging: false,
            drop_index: None,
            dock_highlight: false,
        }
    }

    pub fn has_modal(&self) -> bool {
        self.active_modal.is_some()
    }

    pub fn open_modal(&mut self, state: ModalState) {
        self.active_modal = Some(state);
    }

    pub fn close_modal(&mut self) {
        self.active_modal = None;
    }

    pub fn push_toast(&mut self, text: impl Into<String>, level: ToastLevel) {
        self.toasts.push(Toast::new(text, level));
    }

    /// Drop expired toasts; returns true if any were removed
    pub fn prune_toasts(&mut self) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| !t.expired());
        self.toasts.len() != before
    }

    /// Reset all drag view-state; called when a session ends or cancels
    pub fn clear_drag_state(&mut self) {
        self.is_dragging = false;
        self.drop_index = None;
        self.dock_highlight = false;
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_expiry() {
        let fresh = Toast::new("hi", ToastLevel::Info);
        assert!(!fresh.expired());
        let stale = Toast::with_ttl("bye", ToastLevel::Info, Duration::ZERO);
        assert!(stale.expired());
    }

    #[test]
    fn test_prune_removes_only_expired() {
        let mut ui = UiState::new();
        ui.toasts.push(Toast::new("keep", ToastLevel::Info));
        ui.toasts
            .push(Toast::with_ttl("drop", ToastLevel::Error, Duration::ZERO));
        assert!(ui.prune_toasts());
        assert_eq!(ui.toasts.len(), 1);
        assert_eq!(ui.toasts[0].text, "keep");
        assert!(!ui.prune_toasts());
    }

    #[test]
    fn test_explorer_section_toggle() {
        let mut ex = ExplorerState::new();
        ex.toggle_section("projects");
        assert!(ex.collapsed.contains("projects"));
        ex.toggle_section("projects");
        assert!(!ex.collapsed.contains("projects"));
    }
}

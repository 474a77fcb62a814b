//! Application model - the complete state of the app
//!
//! This module contains all the state types following the Elm Architecture
//! pattern: the model is plain data, messages describe changes, and the
//! update functions in `crate::update` apply them.

pub mod drag;
pub mod strip;
pub mod terminal;
pub mod ui;

pub use drag::{DragSession, PressTarget};
pub use strip::{FloatingWindow, Workbench};
pub use terminal::{LineKind, TermAction, TermLine, TerminalState, TERMINAL_DEFAULT_HEIGHT};
pub use ui::{
    CommandPaletteState, ExplorerState, ModalId, ModalState, Toast, ToastLevel, ThemeStoreState,
    UiState,
};

use crate::config::FolioConfig;
use crate::content;
use crate::geometry::Size;
use crate::theme::{load_theme, Theme};

/// The complete application model
#[derive(Debug)]
pub struct AppModel {
    /// Tab strip plus floating windows
    pub workbench: Workbench,
    /// The in-progress pointer manipulation. Held in a single slot; the
    /// move/up handlers take it as an explicit argument rather than closing
    /// over shared mutable state.
    pub drag: Option<DragSession>,
    /// Modals, toasts, explorer, drag view-state
    pub ui: UiState,
    pub terminal: TerminalState,
    /// Theme for colors and styling
    pub theme: Theme,
    /// Persisted settings
    pub config: FolioConfig,
    /// Window dimensions in logical pixels
    pub window_size: (u32, u32),
    /// Monospace character width in pixels, corrected by the renderer once
    /// real font metrics exist
    pub char_width: f32,
    /// Line height in pixels
    pub line_height: usize,
}

impl AppModel {
    /// Create a new application model with the given window size,
    /// restoring persisted settings
    pub fn new(window_width: u32, window_height: u32) -> Self {
        FolioConfig::ensure_config_dirs();
        let config = FolioConfig::load();

        let theme = load_theme(&config.theme).unwrap_or_else(|e| {
            tracing::warn!(
                "Failed to load theme '{}': {}, using default",
                config.theme,
                e
            );
            Theme::default()
        });

        let mut workbench = Workbench::new();
        if let Some(last) = config.last_doc.as_deref() {
            if let Some(doc) = content::document(last) {
                workbench.open(doc.id);
            }
        }

        let mut ui = UiState::new();
        ui.explorer.visible = config.explorer_visible;

        let mut terminal = TerminalState::new();
        terminal.open = config.terminal_open;

        Self {
            workbench,
            drag: None,
            ui,
            terminal,
            theme,
            config,
            window_size: (window_width, window_height),
            char_width: 8.0,
            line_height: 20,
        }
    }

    /// Viewport size as layout geometry
    pub fn viewport(&self) -> Size {
        Size::new(self.window_size.0 as f32, self.window_size.1 as f32)
    }

    /// Update char_width from actual font metrics
    pub fn set_font_metrics(&mut self, char_width: f32, line_height: usize) {
        self.char_width = char_width;
        self.line_height = line_height;
    }
}

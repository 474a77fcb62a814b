//! Chrome layout: where every fixed UI surface lands for a given window size
//!
//! Both the renderer and the hit-testing code consume the same
//! `ChromeLayout`, so what is painted and what is clickable cannot drift
//! apart. Floating windows are not part of the chrome; their frames live in
//! the model and are laid out by the drag/resize handlers.

use crate::content::{self, DocId};
use crate::geometry::{Rect, Size, Vec2, STATUS_BAR_HEIGHT, TAB_BAR_HEIGHT, TITLE_BAR_HEIGHT};
use crate::model::AppModel;

/// Horizontal text padding inside a tab
pub const TAB_TEXT_PADDING: f32 = 12.0;
/// Width reserved for a tab's close glyph
pub const TAB_CLOSE_WIDTH: f32 = 18.0;
/// Height of one explorer row
pub const EXPLORER_ROW_HEIGHT: f32 = 24.0;
/// Indent for documents under a section header
pub const EXPLORER_INDENT: f32 = 14.0;
/// Side length of the square window title bar buttons
pub const WINDOW_BUTTON_SIZE: f32 = 16.0;

/// A tab's rect in the strip plus its close button
#[derive(Debug, Clone, Copy)]
pub struct TabRect {
    pub doc: DocId,
    pub rect: Rect,
    pub close: Rect,
}

/// One clickable row in the explorer
#[derive(Debug, Clone, Copy)]
pub enum ExplorerRow {
    Section { label: &'static str, rect: Rect },
    Doc { doc: DocId, rect: Rect },
}

impl ExplorerRow {
    pub fn rect(&self) -> Rect {
        match self {
            ExplorerRow::Section { rect, .. } | ExplorerRow::Doc { rect, .. } => *rect,
        }
    }
}

/// Computed chrome geometry for one frame
#[derive(Debug, Clone)]
pub struct ChromeLayout {
    pub viewport: Size,
    /// Explorer sidebar, when visible
    pub explorer: Option<Rect>,
    /// The tab strip (right of the explorer, full remaining width)
    pub strip: Rect,
    pub tabs: Vec<TabRect>,
    /// Document viewport under the strip
    pub content: Rect,
    /// Terminal panel, when open
    pub terminal: Option<Rect>,
    pub status_bar: Rect,
}

impl ChromeLayout {
    /// Horizontal centers of the tabs, excluding the dragged one, in strip
    /// order. This is the reference set for the insertion index.
    pub fn tab_centers_excluding(&self, exclude: Option<DocId>) -> Vec<f32> {
        self.tabs
            .iter()
            .filter(|t| Some(t.doc) != exclude)
            .map(|t| t.rect.center_x())
            .collect()
    }

    /// The tab at a point, if any
    pub fn tab_at(&self, p: Vec2) -> Option<&TabRect> {
        self.tabs.iter().find(|t| t.rect.contains(p))
    }
}

/// Compute the chrome layout for the current model state
pub fn compute_chrome(model: &AppModel) -> ChromeLayout {
    let viewport = model.viewport();

    // Logical pixels throughout; DPI scaling happens in the runtime
    let explorer_width = if model.ui.explorer.visible {
        model.ui.explorer.width_logical
    } else {
        0.0
    };
    let explorer = (explorer_width > 0.0).then(|| {
        Rect::new(
            0.0,
            0.0,
            explorer_width,
            viewport.height - STATUS_BAR_HEIGHT,
        )
    });

    let strip = Rect::new(
        explorer_width,
        0.0,
        viewport.width - explorer_width,
        TAB_BAR_HEIGHT,
    );

    let tabs = layout_tabs(model, strip);

    let terminal_height = if model.terminal.open {
        model
            .terminal
            .height_logical
            .min(viewport.height - TAB_BAR_HEIGHT - STATUS_BAR_HEIGHT)
    } else {
        0.0
    };
    let terminal = (terminal_height > 0.0).then(|| {
        Rect::new(
            explorer_width,
            viewport.height - STATUS_BAR_HEIGHT - terminal_height,
            viewport.width - explorer_width,
            terminal_height,
        )
    });

    let content = Rect::new(
        explorer_width,
        TAB_BAR_HEIGHT,
        viewport.width - explorer_width,
        viewport.height - TAB_BAR_HEIGHT - STATUS_BAR_HEIGHT - terminal_height,
    );

    let status_bar = Rect::new(
        0.0,
        viewport.height - STATUS_BAR_HEIGHT,
        viewport.width,
        STATUS_BAR_HEIGHT,
    );

    ChromeLayout {
        viewport,
        explorer,
        strip,
        tabs,
        content,
        terminal,
        status_bar,
    }
}

/// Lay the open tabs left-to-right along the strip.
///
/// Tab width tracks the title length; the permanent home tab has no close
/// glyph so its close rect is empty.
fn layout_tabs(model: &AppModel, strip: Rect) -> Vec<TabRect> {
    let char_width = model.char_width;
    let mut x = strip.x;
    let mut out = Vec::with_capacity(model.workbench.tabs.len());

    for &doc_id in &model.workbench.tabs {
        let title_len = content::document(doc_id)
            .map(|d| d.title.chars().count())
            .unwrap_or(8);
        let closable = doc_id != content::HOME_DOC;
        let close_width = if closable { TAB_CLOSE_WIDTH } else { 0.0 };
        let width = title_len as f32 * char_width + 2.0 * TAB_TEXT_PADDING + close_width;

        let rect = Rect::new(x, strip.y, width, strip.height);
        let close = if closable {
            Rect::new(
                rect.right() - TAB_CLOSE_WIDTH - 4.0,
                rect.y + (rect.height - WINDOW_BUTTON_SIZE) / 2.0,
                WINDOW_BUTTON_SIZE,
                WINDOW_BUTTON_SIZE,
            )
        } else {
            Rect::default()
        };

        out.push(TabRect {
            doc: doc_id,
            rect,
            close,
        });
        x += width;
    }
    out
}

/// Explorer rows for rendering and hit-testing, honoring collapsed sections
pub fn explorer_rows(model: &AppModel, explorer: Rect) -> Vec<ExplorerRow> {
    let mut rows = Vec::new();
    let mut y = explorer.y + 8.0;

    for section in content::FILE_TREE {
        rows.push(ExplorerRow::Section {
            label: section.label,
            rect: Rect::new(explorer.x, y, explorer.width, EXPLORER_ROW_HEIGHT),
        });
        y += EXPLORER_ROW_HEIGHT;

        if model.ui.explorer.collapsed.contains(section.label) {
            continue;
        }
        for &doc in section.doc_ids {
            rows.push(ExplorerRow::Doc {
                doc,
                rect: Rect::new(explorer.x, y, explorer.width, EXPLORER_ROW_HEIGHT),
            });
            y += EXPLORER_ROW_HEIGHT;
        }
    }
    rows
}

// ============================================================================
// Floating window parts
// ============================================================================

/// Title bar strip of a floating window frame
pub fn window_title_bar(frame: Rect) -> Rect {
    Rect::new(frame.x, frame.y, frame.width, TITLE_BAR_HEIGHT)
}

/// Close button at the right edge of the title bar
pub fn window_close_button(frame: Rect) -> Rect {
    Rect::new(
        frame.right() - WINDOW_BUTTON_SIZE - 8.0,
        frame.y + (TITLE_BAR_HEIGHT - WINDOW_BUTTON_SIZE) / 2.0,
        WINDOW_BUTTON_SIZE,
        WINDOW_BUTTON_SIZE,
    )
}

/// Maximize/restore toggle left of the close button
pub fn window_maximize_button(frame: Rect) -> Rect {
    Rect::new(
        frame.right() - 2.0 * (WINDOW_BUTTON_SIZE + 8.0),
        frame.y + (TITLE_BAR_HEIGHT - WINDOW_BUTTON_SIZE) / 2.0,
        WINDOW_BUTTON_SIZE,
        WINDOW_BUTTON_SIZE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{TerminalState, UiState, Workbench};

    fn model() -> AppModel {
        AppModel {
            workbench: Workbench::new(),
            drag: None,
            ui: UiState::new(),
            terminal: TerminalState::new(),
            theme: crate::theme::Theme::default(),
            config: Default::default(),
            window_size: (1280, 720),
            char_width: 8.0,
            line_height: 20,
        }
    }

    #[test]
    fn test_tabs_start_after_explorer() {
        let mut m = model();
        m.ui.explorer.visible = true;
        let chrome = compute_chrome(&m);
        assert_eq!(chrome.strip.x, m.ui.explorer.width_logical);
        assert_eq!(chrome.tabs[0].rect.x, chrome.strip.x);
    }

    #[test]
    fn test_tab_centers_exclude_dragged() {
        let mut m = model();
        m.workbench.open("about");
        m.workbench.open("contact");
        let chrome = compute_chrome(&m);
        let all = chrome.tab_centers_excluding(None);
        let without = chrome.tab_centers_excluding(Some("about"));
        assert_eq!(all.len(), 3);
        assert_eq!(without.len(), 2);
    }

    #[test]
    fn test_terminal_steals_content_height() {
        let mut m = model();
        m.terminal.open = false;
        let closed = compute_chrome(&m);
        m.terminal.open = true;
        let open = compute_chrome(&m);
        assert!(open.content.height < closed.content.height);
        assert!(open.terminal.is_some());
    }

    #[test]
    fn test_home_tab_has_no_close_rect() {
        let m = model();
        let chrome = compute_chrome(&m);
        assert_eq!(chrome.tabs[0].close, Rect::default());
    }

    #[test]
    fn test_collapsed_section_hides_rows() {
        let mut m = model();
        let chrome = compute_chrome(&m);
        let explorer = chrome.explorer.unwrap();
        let before = explorer_rows(&m, explorer).len();
        m.ui.explorer.toggle_section("projects");
        let after = explorer_rows(&m, explorer).len();
        assert_eq!(after, before - 3);
    }
}

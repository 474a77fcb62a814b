//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::content::DocId;
use crate::geometry::Vec2;
use crate::model::drag::PressTarget;
use crate::model::ui::{ModalId, ToastLevel};

/// Tab strip messages (open, close, activate, cycle)
#[derive(Debug, Clone)]
pub enum StripMsg {
    /// Open a document: activate its tab, raise its window, or create a tab
    OpenDoc(DocId),
    /// Activate an existing tab
    ActivateTab(DocId),
    /// Close a tab (no-op for home)
    CloseTab(DocId),
    /// Close the active tab
    CloseActiveTab,
    /// Switch to the next tab, wrapping
    NextTab,
    /// Switch to the previous tab, wrapping
    PrevTab,
}

/// Drag session messages, fed by the pointer handlers.
///
/// One session at a time: `Press` arms it, `Moved` advances it (promoting
/// past the click threshold, detaching, docking, resizing), `Released`
/// commits it, `Cancel` discards it.
#[derive(Debug, Clone)]
pub enum DragMsg {
    Press { target: PressTarget, pos: Vec2 },
    Moved { pos: Vec2 },
    Released { pos: Vec2 },
    Cancel,
}

/// Floating window messages outside of drag sessions
#[derive(Debug, Clone)]
pub enum WindowMsg {
    /// Raise a window to the top of the z-order (click on its body)
    Focus(DocId),
    /// Close a floating window
    Close(DocId),
    /// Toggle maximized/restored (title bar double-click, title bar button)
    ToggleMaximize(DocId),
    /// Open a document directly as a floating window
    OpenFloating(DocId),
    /// Detach the active tab into a floating window (palette command)
    FloatActiveTab,
}

/// Terminal panel messages
#[derive(Debug, Clone)]
pub enum TerminalMsg {
    Toggle,
    /// Insert a typed character into the prompt
    InsertChar(char),
    /// Backspace in the prompt
    DeleteBackward,
    /// Run the prompt line
    Submit,
    /// Recall older history (Up)
    HistoryPrev,
    /// Recall newer history (Down)
    HistoryNext,
    /// Scroll the scrollback by whole lines (positive = up)
    Scroll(i32),
    /// Wipe the scrollback
    Clear,
}

/// Modal messages (command palette, theme store)
#[derive(Debug, Clone)]
pub enum ModalMsg {
    Open(ModalId),
    /// Close the currently active modal
    Close,
    /// Insert character into modal input
    InsertChar(char),
    /// Delete character from modal input (backspace)
    DeleteBackward,
    /// Move selection up in the list
    SelectPrevious,
    /// Move selection down in the list
    SelectNext,
    /// Confirm/execute the modal action (Enter)
    Confirm,
}

/// UI messages (modals, toasts, explorer)
#[derive(Debug, Clone)]
pub enum UiMsg {
    Modal(ModalMsg),
    /// Toggle a modal (open if closed, close if open)
    ToggleModal(ModalId),
    ShowToast { text: String, level: ToastLevel },
    /// Drop expired toasts (driven by the runtime tick)
    PruneToasts,
    ToggleExplorer,
    /// Select an explorer row (single click)
    ExplorerSelect(DocId),
    /// Collapse or expand an explorer section header
    ExplorerToggleSection(&'static str),
}

/// Theme messages
#[derive(Debug, Clone)]
pub enum ThemeMsg {
    /// Apply a theme by id and persist the choice
    Apply(String),
    /// Apply a theme by id without persisting (theme store live preview)
    Preview(String),
}

/// Application-level messages (window events, shutdown)
#[derive(Debug, Clone)]
pub enum AppMsg {
    /// Window resized (logical pixels)
    Resize(u32, u32),
    /// Quit the application
    Quit,
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    Strip(StripMsg),
    Drag(DragMsg),
    Window(WindowMsg),
    Terminal(TerminalMsg),
    Ui(UiMsg),
    Theme(ThemeMsg),
    App(AppMsg),
}

// Convenience constructors for common messages
impl Msg {
    /// Create an open-document message
    pub fn open_doc(doc: DocId) -> Self {
        Msg::Strip(StripMsg::OpenDoc(doc))
    }

    /// Create a toast message
    pub fn toast(text: impl Into<String>, level: ToastLevel) -> Self {
        Msg::Ui(UiMsg::ShowToast {
            text: text.into(),
            level,
        })
    }
}

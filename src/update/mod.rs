//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod drag;
mod strip;
mod terminal;
mod theme;
mod ui;
mod window;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;

pub use app::update_app;
pub use drag::update_drag;
pub use strip::update_strip;
pub use terminal::update_terminal;
pub use theme::update_theme;
pub use ui::update_ui;
pub use window::update_window;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Strip(m) => strip::update_strip(model, m),
        Msg::Drag(m) => drag::update_drag(model, m),
        Msg::Window(m) => window::update_window(model, m),
        Msg::Terminal(m) => terminal::update_terminal(model, m),
        Msg::Ui(m) => ui::update_ui(model, m),
        Msg::Theme(m) => theme::update_theme(model, m),
        Msg::App(m) => app::update_app(model, m),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Filters out noisy per-frame messages like pointer moves and toast pruning.
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    use crate::messages::{DragMsg, UiMsg};
    use tracing::{debug, span, Level};

    let is_noisy = matches!(
        &msg,
        Msg::Drag(DragMsg::Moved { .. }) | Msg::Ui(UiMsg::PruneToasts)
    );

    if is_noisy {
        return update_inner(model, msg);
    }

    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();
    debug!(target: "message", msg = %msg_name, "processing");

    update_inner(model, msg)
}

/// Get a display name for a message type
///
/// Uses Debug formatting to include variant names and arguments.
/// Example outputs:
/// - `Drag::Press { target: Tab("about"), pos: ... }`
/// - `Strip::OpenDoc("contact")`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Strip(m) => format!("Strip::{:?}", m),
        Msg::Drag(m) => format!("Drag::{:?}", m),
        Msg::Window(m) => format!("Window::{:?}", m),
        Msg::Terminal(m) => format!("Terminal::{:?}", m),
        Msg::Ui(m) => format!("Ui::{:?}", m),
        Msg::Theme(m) => format!("Theme::{:?}", m),
        Msg::App(m) => format!("App::{:?}", m),
    }
}

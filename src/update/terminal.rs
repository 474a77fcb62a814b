//! Terminal update handlers
//!
//! Editing and history messages mutate the terminal state directly; a
//! submitted command may additionally hand back a `TermAction` that is
//! routed into the rest of the app (open a tab, switch theme, copy, ...).

use crate::commands::Cmd;
use crate::messages::{Msg, StripMsg, TerminalMsg, ThemeMsg};
use crate::model::{AppModel, TermAction};
use crate::update;

/// Update function for terminal messages
pub fn update_terminal(model: &mut AppModel, msg: TerminalMsg) -> Option<Cmd> {
    match msg {
        TerminalMsg::Toggle => {
            model.terminal.open = !model.terminal.open;
            model.terminal.focused = model.terminal.open;
            model.config.terminal_open = model.terminal.open;
            Some(Cmd::Batch(vec![Cmd::Redraw, Cmd::SaveConfig]))
        }
        TerminalMsg::InsertChar(ch) => {
            model.terminal.insert_char(ch);
            Some(Cmd::Redraw)
        }
        TerminalMsg::DeleteBackward => {
            model.terminal.delete_backward();
            Some(Cmd::Redraw)
        }
        TerminalMsg::HistoryPrev => {
            model.terminal.history_prev();
            Some(Cmd::Redraw)
        }
        TerminalMsg::HistoryNext => {
            model.terminal.history_next();
            Some(Cmd::Redraw)
        }
        TerminalMsg::Scroll(delta) => {
            let max = model.terminal.lines.len();
            let next = model.terminal.scroll_offset as i64 + delta as i64;
            model.terminal.scroll_offset = next.clamp(0, max as i64) as usize;
            Some(Cmd::Redraw)
        }
        TerminalMsg::Clear => {
            model.terminal.clear_screen();
            Some(Cmd::Redraw)
        }
        TerminalMsg::Submit => {
            let action = model.terminal.submit();
            let follow_up = action.and_then(|a| run_action(model, a));
            Some(match follow_up {
                Some(cmd) => Cmd::Batch(vec![Cmd::Redraw, cmd]),
                None => Cmd::Redraw,
            })
        }
    }
}

/// Route a command's side effect back through the update loop
fn run_action(model: &mut AppModel, action: TermAction) -> Option<Cmd> {
    match action {
        TermAction::OpenDoc(doc) => update::update(model, Msg::Strip(StripMsg::OpenDoc(doc))),
        TermAction::ApplyTheme(id) => update::update(model, Msg::Theme(ThemeMsg::Apply(id))),
        TermAction::CopyToClipboard(text) => Some(Cmd::CopyToClipboard(text)),
        TermAction::OpenUrl(url) => Some(Cmd::OpenUrl(url)),
    }
}

//! Keyboard input routing
//!
//! Routing priority: modal, then terminal (when focused), then global
//! shortcuts. There is no keymap file; the bindings are few and fixed.

use winit::keyboard::{Key, NamedKey};

use crate::commands::Cmd;
use crate::messages::{AppMsg, DragMsg, ModalMsg, Msg, StripMsg, TerminalMsg, UiMsg};
use crate::model::{AppModel, ModalId};
use crate::update::update;

/// Handle a key press, returning the resulting command
pub fn handle_key(
    model: &mut AppModel,
    logical_key: Key,
    ctrl: bool,
    shift: bool,
) -> Option<Cmd> {
    // An in-flight drag session swallows Escape
    if model.drag.is_some() {
        if logical_key == Key::Named(NamedKey::Escape) {
            return update(model, Msg::Drag(DragMsg::Cancel));
        }
    }

    if model.ui.has_modal() {
        return handle_modal_key(model, logical_key, ctrl);
    }

    // Global shortcuts win over terminal input so ctrl+` always toggles
    if ctrl {
        if let Some(cmd) = handle_global_shortcut(model, &logical_key, shift) {
            return Some(cmd);
        }
    }

    if model.terminal.open && model.terminal.focused {
        return handle_terminal_key(model, logical_key);
    }

    match logical_key {
        Key::Named(NamedKey::Escape) => {
            // Escape drops terminal focus as a convenience
            model.terminal.focused = false;
            Some(Cmd::Redraw)
        }
        _ => None,
    }
}

fn handle_global_shortcut(model: &mut AppModel, key: &Key, shift: bool) -> Option<Cmd> {
    match key {
        Key::Character(c) => match c.as_str() {
            "p" => update(
                model,
                Msg::Ui(UiMsg::ToggleModal(ModalId::CommandPalette)),
            ),
            "b" => update(model, Msg::Ui(UiMsg::ToggleExplorer)),
            "`" => update(model, Msg::Terminal(TerminalMsg::Toggle)),
            "w" => update(model, Msg::Strip(StripMsg::CloseActiveTab)),
            "q" => update(model, Msg::App(AppMsg::Quit)),
            "l" if model.terminal.focused => {
                update(model, Msg::Terminal(TerminalMsg::Clear))
            }
            _ => None,
        },
        Key::Named(NamedKey::Tab) => {
            if shift {
                update(model, Msg::Strip(StripMsg::PrevTab))
            } else {
                update(model, Msg::Strip(StripMsg::NextTab))
            }
        }
        _ => None,
    }
}

fn handle_modal_key(model: &mut AppModel, key: Key, ctrl: bool) -> Option<Cmd> {
    // Ctrl+P inside the palette closes it again
    if ctrl {
        if let Key::Character(c) = &key {
            if c.as_str() == "p" {
                return update(model, Msg::Ui(UiMsg::Modal(ModalMsg::Close)));
            }
        }
        return None;
    }

    let msg = match key {
        Key::Named(NamedKey::Escape) => ModalMsg::Close,
        Key::Named(NamedKey::Enter) => ModalMsg::Confirm,
        Key::Named(NamedKey::ArrowUp) => ModalMsg::SelectPrevious,
        Key::Named(NamedKey::ArrowDown) => ModalMsg::SelectNext,
        Key::Named(NamedKey::Backspace) => ModalMsg::DeleteBackward,
        Key::Named(NamedKey::Space) => ModalMsg::InsertChar(' '),
        Key::Character(c) => {
            let ch = c.chars().next()?;
            if ch.is_control() {
                return None;
            }
            ModalMsg::InsertChar(ch)
        }
        _ => return None,
    };
    update(model, Msg::Ui(UiMsg::Modal(msg)))
}

fn handle_terminal_key(model: &mut AppModel, key: Key) -> Option<Cmd> {
    let msg = match key {
        Key::Named(NamedKey::Enter) => TerminalMsg::Submit,
        Key::Named(NamedKey::Backspace) => TerminalMsg::DeleteBackward,
        Key::Named(NamedKey::ArrowUp) => TerminalMsg::HistoryPrev,
        Key::Named(NamedKey::ArrowDown) => TerminalMsg::HistoryNext,
        Key::Named(NamedKey::PageUp) => TerminalMsg::Scroll(10),
        Key::Named(NamedKey::PageDown) => TerminalMsg::Scroll(-10),
        Key::Named(NamedKey::Space) => TerminalMsg::InsertChar(' '),
        Key::Named(NamedKey::Escape) => {
            model.terminal.focused = false;
            return Some(Cmd::Redraw);
        }
        Key::Character(c) => {
            let ch = c.chars().next()?;
            if ch.is_control() {
                return None;
            }
            TerminalMsg::InsertChar(ch)
        }
        _ => return None,
    };
    update(model, Msg::Terminal(msg))
}

//! UI update handlers: modals, toasts, explorer

use crate::commands::{filter_commands, Cmd};
use crate::messages::{ModalMsg, Msg, ThemeMsg, UiMsg};
use crate::model::{
    AppModel, CommandPaletteState, ModalId, ModalState, ThemeStoreState,
};
use crate::theme;
use crate::update;

/// Update function for UI messages
pub fn update_ui(model: &mut AppModel, msg: UiMsg) -> Option<Cmd> {
    match msg {
        UiMsg::Modal(m) => update_modal(model, m),
        UiMsg::ToggleModal(id) => {
            if model.ui.active_modal.as_ref().map(|m| m.id()) == Some(id) {
                update_modal(model, ModalMsg::Close)
            } else {
                update_modal(model, ModalMsg::Open(id))
            }
        }
        UiMsg::ShowToast { text, level } => {
            model.ui.push_toast(text, level);
            Some(Cmd::Redraw)
        }
        UiMsg::PruneToasts => model.ui.prune_toasts().then_some(Cmd::Redraw),
        UiMsg::ToggleExplorer => {
            model.ui.explorer.visible = !model.ui.explorer.visible;
            model.config.explorer_visible = model.ui.explorer.visible;
            Some(Cmd::Batch(vec![Cmd::Redraw, Cmd::SaveConfig]))
        }
        UiMsg::ExplorerSelect(doc) => {
            model.ui.explorer.selected = Some(doc);
            Some(Cmd::Redraw)
        }
        UiMsg::ExplorerToggleSection(label) => {
            model.ui.explorer.toggle_section(label);
            Some(Cmd::Redraw)
        }
    }
}

/// Modal state machine: one modal at a time, keyboard driven
fn update_modal(model: &mut AppModel, msg: ModalMsg) -> Option<Cmd> {
    match msg {
        ModalMsg::Open(ModalId::CommandPalette) => {
            model
                .ui
                .open_modal(ModalState::CommandPalette(CommandPaletteState::default()));
            Some(Cmd::Redraw)
        }
        ModalMsg::Open(ModalId::ThemeStore) => {
            let entries = theme::list_available_themes();
            let selected_index = entries
                .iter()
                .position(|t| t.id == model.config.theme)
                .unwrap_or(0);
            model.ui.open_modal(ModalState::ThemeStore(ThemeStoreState {
                selected_index,
                previous_theme: model.config.theme.clone(),
                entries,
            }));
            Some(Cmd::Redraw)
        }
        ModalMsg::Close => {
            // Cancelling the theme store reverts any live preview
            if let Some(ModalState::ThemeStore(store)) = model.ui.active_modal.take() {
                let _ = update::update(
                    model,
                    Msg::Theme(ThemeMsg::Preview(store.previous_theme)),
                );
            }
            Some(Cmd::Redraw)
        }
        ModalMsg::InsertChar(ch) => {
            if let Some(ModalState::CommandPalette(state)) = &mut model.ui.active_modal {
                state.input.push(ch);
                state.selected_index = 0;
            }
            Some(Cmd::Redraw)
        }
        ModalMsg::DeleteBackward => {
            if let Some(ModalState::CommandPalette(state)) = &mut model.ui.active_modal {
                state.input.pop();
                state.selected_index = 0;
            }
            Some(Cmd::Redraw)
        }
        ModalMsg::SelectPrevious => move_selection(model, -1),
        ModalMsg::SelectNext => move_selection(model, 1),
        ModalMsg::Confirm => confirm_modal(model),
    }
}

/// Move the list selection in whichever modal is open; stepping in the
/// theme store live-previews the newly highlighted theme
fn move_selection(model: &mut AppModel, delta: i32) -> Option<Cmd> {
    let preview_id = match &mut model.ui.active_modal {
        Some(ModalState::CommandPalette(state)) => {
            let len = filter_commands(&state.input).len();
            if len > 0 {
                state.selected_index = step(state.selected_index, delta, len);
            }
            None
        }
        Some(ModalState::ThemeStore(state)) => {
            let len = state.entries.len();
            if len == 0 {
                None
            } else {
                state.selected_index = step(state.selected_index, delta, len);
                Some(state.entries[state.selected_index].id.clone())
            }
        }
        None => return None,
    };

    if let Some(id) = preview_id {
        update::update(model, Msg::Theme(ThemeMsg::Preview(id)));
    }
    Some(Cmd::Redraw)
}

fn step(index: usize, delta: i32, len: usize) -> usize {
    let next = index as i64 + delta as i64;
    next.rem_euclid(len as i64) as usize
}

fn confirm_modal(model: &mut AppModel) -> Option<Cmd> {
    match model.ui.active_modal.take() {
        Some(ModalState::CommandPalette(state)) => {
            let filtered = filter_commands(&state.input);
            let Some(def) = filtered.get(state.selected_index).copied() else {
                return Some(Cmd::Redraw);
            };
            tracing::debug!(command = def.label, "palette command executed");

            let mut cmds = vec![Cmd::Redraw];
            for msg in def.id.to_msgs() {
                if let Some(cmd) = update::update(model, msg) {
                    cmds.push(cmd);
                }
            }
            if let Some(cmd) = def.id.direct_cmd() {
                cmds.push(cmd);
            }
            Some(Cmd::Batch(cmds))
        }
        Some(ModalState::ThemeStore(state)) => {
            let Some(info) = state.entries.get(state.selected_index) else {
                return Some(Cmd::Redraw);
            };
            let id = info.id.clone();
            update::update(model, Msg::Theme(ThemeMsg::Apply(id)))
        }
        None => None,
    }
}

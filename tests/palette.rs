//! Tests for the command palette and theme store modals

mod common;

use common::test_model;
use folio::commands::filter_commands;
use folio::messages::{ModalMsg, Msg, UiMsg};
use folio::model::{ModalId, ModalState};
use folio::update::update;

fn open_palette(model: &mut folio::model::AppModel) {
    update(
        model,
        Msg::Ui(UiMsg::Modal(ModalMsg::Open(ModalId::CommandPalette))),
    );
}

fn type_query(model: &mut folio::model::AppModel, query: &str) {
    for ch in query.chars() {
        update(model, Msg::Ui(UiMsg::Modal(ModalMsg::InsertChar(ch))));
    }
}

#[test]
fn test_toggle_opens_and_closes() {
    let mut model = test_model();
    update(
        &mut model,
        Msg::Ui(UiMsg::ToggleModal(ModalId::CommandPalette)),
    );
    assert!(model.ui.has_modal());
    update(
        &mut model,
        Msg::Ui(UiMsg::ToggleModal(ModalId::CommandPalette)),
    );
    assert!(!model.ui.has_modal());
}

#[test]
fn test_typing_narrows_and_resets_selection() {
    let mut model = test_model();
    open_palette(&mut model);
    update(&mut model, Msg::Ui(UiMsg::Modal(ModalMsg::SelectNext)));

    type_query(&mut model, "theme");
    let Some(ModalState::CommandPalette(state)) = &model.ui.active_modal else {
        panic!("palette not open");
    };
    assert_eq!(state.selected_index, 0);
    assert!(filter_commands(&state.input)
        .iter()
        .any(|c| c.label.contains("Themes")));
}

#[test]
fn test_confirm_executes_selected_command() {
    let mut model = test_model();
    assert!(!model.terminal.open);

    open_palette(&mut model);
    type_query(&mut model, "toggle terminal");
    update(&mut model, Msg::Ui(UiMsg::Modal(ModalMsg::Confirm)));

    assert!(!model.ui.has_modal());
    assert!(model.terminal.open);
}

#[test]
fn test_selection_wraps() {
    let mut model = test_model();
    open_palette(&mut model);
    update(&mut model, Msg::Ui(UiMsg::Modal(ModalMsg::SelectPrevious)));
    let Some(ModalState::CommandPalette(state)) = &model.ui.active_modal else {
        panic!("palette not open");
    };
    assert_eq!(state.selected_index, filter_commands("").len() - 1);
}

#[test]
fn test_backspace_edits_query() {
    let mut model = test_model();
    open_palette(&mut model);
    type_query(&mut model, "abc");
    update(&mut model, Msg::Ui(UiMsg::Modal(ModalMsg::DeleteBackward)));
    let Some(ModalState::CommandPalette(state)) = &model.ui.active_modal else {
        panic!("palette not open");
    };
    assert_eq!(state.input, "ab");
}

// ============================================================================
// Theme store
// ============================================================================

#[test]
fn test_theme_store_lists_builtins() {
    let mut model = test_model();
    update(
        &mut model,
        Msg::Ui(UiMsg::Modal(ModalMsg::Open(ModalId::ThemeStore))),
    );
    let Some(ModalState::ThemeStore(state)) = &model.ui.active_modal else {
        panic!("store not open");
    };
    assert!(state.entries.iter().any(|t| t.id == "folio-dark"));
    assert!(state.entries.iter().any(|t| t.id == "paper"));
}

#[test]
fn test_stepping_previews_without_persisting() {
    let mut model = test_model();
    let saved = model.config.theme.clone();
    update(
        &mut model,
        Msg::Ui(UiMsg::Modal(ModalMsg::Open(ModalId::ThemeStore))),
    );

    let before = model.theme.name.clone();
    update(&mut model, Msg::Ui(UiMsg::Modal(ModalMsg::SelectNext)));

    // The preview changed the live theme but not the persisted choice
    assert_ne!(model.theme.name, before);
    assert_eq!(model.config.theme, saved);
}

#[test]
fn test_cancel_reverts_preview() {
    let mut model = test_model();
    let original = model.theme.name.clone();
    update(
        &mut model,
        Msg::Ui(UiMsg::Modal(ModalMsg::Open(ModalId::ThemeStore))),
    );
    update(&mut model, Msg::Ui(UiMsg::Modal(ModalMsg::SelectNext)));
    assert_ne!(model.theme.name, original);

    update(&mut model, Msg::Ui(UiMsg::Modal(ModalMsg::Close)));
    assert_eq!(model.theme.name, original);
    assert!(!model.ui.has_modal());
}

#[test]
fn test_confirm_applies_and_persists() {
    let mut model = test_model();
    update(
        &mut model,
        Msg::Ui(UiMsg::Modal(ModalMsg::Open(ModalId::ThemeStore))),
    );
    update(&mut model, Msg::Ui(UiMsg::Modal(ModalMsg::SelectNext)));

    let previewed = model.theme.name.clone();
    update(&mut model, Msg::Ui(UiMsg::Modal(ModalMsg::Confirm)));

    assert!(!model.ui.has_modal());
    assert_eq!(model.theme.name, previewed);
    assert_ne!(model.config.theme, "nonexistent");
}

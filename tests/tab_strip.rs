//! Tests for tab strip operations: open, close, activate, cycle

mod common;

use common::{test_model, test_model_three_tabs};
use folio::content::HOME_DOC;
use folio::geometry::Rect;
use folio::messages::{Msg, StripMsg};
use folio::update::update;

#[test]
fn test_open_appends_and_activates() {
    let mut model = test_model();
    update(&mut model, Msg::Strip(StripMsg::OpenDoc("about")));
    assert_eq!(model.workbench.tabs, vec![HOME_DOC, "about"]);
    assert_eq!(model.workbench.active, "about");
}

#[test]
fn test_open_existing_tab_only_activates() {
    let mut model = test_model_three_tabs();
    model.workbench.activate(HOME_DOC);
    update(&mut model, Msg::Strip(StripMsg::OpenDoc("about")));
    assert_eq!(model.workbench.tabs.len(), 3);
    assert_eq!(model.workbench.active, "about");
}

#[test]
fn test_open_floating_doc_raises_window_instead() {
    let mut model = test_model();
    model
        .workbench
        .spawn_window("skills", Rect::new(300.0, 200.0, 400.0, 300.0));
    model
        .workbench
        .spawn_window("about", Rect::new(350.0, 250.0, 400.0, 300.0));

    update(&mut model, Msg::Strip(StripMsg::OpenDoc("skills")));

    // No new tab; the window came to the front instead
    assert_eq!(model.workbench.tabs, vec![HOME_DOC]);
    assert_eq!(model.workbench.top_window().unwrap().doc, "skills");
}

#[test]
fn test_close_active_falls_back_to_left_neighbor() {
    let mut model = test_model_three_tabs();
    assert_eq!(model.workbench.active, "contact");
    update(&mut model, Msg::Strip(StripMsg::CloseActiveTab));
    assert_eq!(model.workbench.active, "about");
    update(&mut model, Msg::Strip(StripMsg::CloseActiveTab));
    assert_eq!(model.workbench.active, HOME_DOC);
}

#[test]
fn test_home_survives_any_close_sequence() {
    let mut model = test_model_three_tabs();
    for _ in 0..10 {
        update(&mut model, Msg::Strip(StripMsg::CloseActiveTab));
        update(&mut model, Msg::Strip(StripMsg::CloseTab(HOME_DOC)));
    }
    assert_eq!(model.workbench.tabs, vec![HOME_DOC]);
    assert_eq!(model.workbench.active, HOME_DOC);
}

#[test]
fn test_next_prev_wrap_around() {
    let mut model = test_model_three_tabs();
    model.workbench.activate(HOME_DOC);

    update(&mut model, Msg::Strip(StripMsg::NextTab));
    assert_eq!(model.workbench.active, "about");
    update(&mut model, Msg::Strip(StripMsg::NextTab));
    assert_eq!(model.workbench.active, "contact");
    update(&mut model, Msg::Strip(StripMsg::NextTab));
    assert_eq!(model.workbench.active, HOME_DOC);

    update(&mut model, Msg::Strip(StripMsg::PrevTab));
    assert_eq!(model.workbench.active, "contact");
}

#[test]
fn test_open_records_last_doc_for_persistence() {
    let mut model = test_model();
    update(&mut model, Msg::Strip(StripMsg::OpenDoc("skills")));
    assert_eq!(model.config.last_doc.as_deref(), Some("skills"));
}

#[test]
fn test_activate_unknown_doc_is_noop() {
    let mut model = test_model();
    update(&mut model, Msg::Strip(StripMsg::ActivateTab("about")));
    assert_eq!(model.workbench.active, HOME_DOC);
}

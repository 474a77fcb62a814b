//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles
//! separately.

#![allow(dead_code)]

use folio::config::FolioConfig;
use folio::content::DocId;
use folio::geometry::Vec2;
use folio::layout;
use folio::messages::{DragMsg, Msg};
use folio::model::drag::PressTarget;
use folio::model::{AppModel, TerminalState, UiState, Workbench};
use folio::theme::Theme;
use folio::update::update;

/// Create a test model without touching the filesystem
pub fn test_model() -> AppModel {
    AppModel {
        workbench: Workbench::new(),
        drag: None,
        ui: UiState::new(),
        terminal: TerminalState::new(),
        theme: Theme::default(),
        config: FolioConfig::default(),
        window_size: (1280, 720),
        char_width: 8.0,
        line_height: 20,
    }
}

/// Test model with extra tabs open: [home, about, contact]
pub fn test_model_three_tabs() -> AppModel {
    let mut model = test_model();
    model.workbench.open("about");
    model.workbench.open("contact");
    model
}

/// Center of a tab in the current chrome layout
pub fn tab_center(model: &AppModel, doc: DocId) -> Vec2 {
    let chrome = layout::compute_chrome(model);
    let tab = chrome
        .tabs
        .iter()
        .find(|t| t.doc == doc)
        .unwrap_or_else(|| panic!("no tab for {}", doc));
    Vec2::new(tab.rect.center_x(), tab.rect.y + tab.rect.height / 2.0)
}

/// Press down on a tab header
pub fn press_tab(model: &mut AppModel, doc: DocId) -> Vec2 {
    let pos = tab_center(model, doc);
    update(
        model,
        Msg::Drag(DragMsg::Press {
            target: PressTarget::Tab(doc),
            pos,
        }),
    );
    pos
}

/// Press down on a window's title bar
pub fn press_window_title(model: &mut AppModel, doc: DocId) -> Vec2 {
    let frame = model.workbench.window(doc).expect("window exists").frame;
    let pos = Vec2::new(frame.x + frame.width / 2.0, frame.y + 10.0);
    update(
        model,
        Msg::Drag(DragMsg::Press {
            target: PressTarget::WindowTitle(doc),
            pos,
        }),
    );
    pos
}

/// Move the pointer within the active session
pub fn drag_to(model: &mut AppModel, pos: Vec2) {
    update(model, Msg::Drag(DragMsg::Moved { pos }));
}

/// Release the pointer, committing the session
pub fn release(model: &mut AppModel, pos: Vec2) {
    update(model, Msg::Drag(DragMsg::Released { pos }));
}

/// Press, wiggle past the drag threshold toward `to`, then keep moving there
pub fn drag_tab_to(model: &mut AppModel, doc: DocId, to: Vec2) {
    let start = press_tab(model, doc);
    // One intermediate move guarantees the 5px promotion fires first
    drag_to(
        model,
        Vec2::new(start.x + 8.0, start.y),
    );
    drag_to(model, to);
}

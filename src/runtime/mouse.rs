//! Mouse event handling using the unified hit-test system
//!
//! This module provides centralized mouse event dispatch that:
//! - Uses `hit_test_ui()` to determine the target under the cursor
//! - Dispatches behavior based on (target, button, click_count)
//! - Feeds the drag state machine through `DragMsg` press/move/release

use std::time::{Duration, Instant};

use winit::event::MouseButton;

use crate::commands::Cmd;
use crate::content::DocId;
use crate::geometry::Vec2;
use crate::layout;
use crate::messages::{DragMsg, ModalMsg, Msg, StripMsg, TerminalMsg, UiMsg, WindowMsg};
use crate::model::drag::PressTarget;
use crate::model::AppModel;
use crate::update::update;
use crate::view::hit_test::{hit_test_ui, HitTarget};

/// Click tracking state for double-click detection
pub struct ClickTracker {
    last_click_time: Instant,
    last_doc: Option<DocId>,
    click_count: u32,
}

impl Default for ClickTracker {
    fn default() -> Self {
        Self {
            last_click_time: Instant::now() - Duration::from_secs(10),
            last_doc: None,
            click_count: 0,
        }
    }
}

impl ClickTracker {
    /// Update click count for a press on a window title bar.
    /// Returns the new click count (1 or 2).
    pub fn track(&mut self, doc: DocId) -> u8 {
        let now = Instant::now();
        let double_click_time = Duration::from_millis(300);

        let is_rapid = now.duration_since(self.last_click_time) < double_click_time;
        let is_same = self.last_doc == Some(doc);

        if is_rapid && is_same {
            self.click_count += 1;
            if self.click_count > 2 {
                self.click_count = 1;
            }
        } else {
            self.click_count = 1;
        }

        self.last_click_time = now;
        self.last_doc = Some(doc);
        self.click_count as u8
    }

    pub fn reset(&mut self) {
        self.click_count = 0;
        self.last_doc = None;
    }
}

/// Handle a left mouse press using the unified hit-test system
pub fn handle_left_press(
    model: &mut AppModel,
    pos: Vec2,
    click_tracker: &mut ClickTracker,
) -> Option<Cmd> {
    let chrome = layout::compute_chrome(model);
    let target = hit_test_ui(model, &chrome, pos)?;

    // Clicking anywhere but the terminal drops its keyboard focus
    if !matches!(target, HitTarget::Terminal) {
        model.terminal.focused = false;
    }

    match target {
        HitTarget::Modal { inside } => {
            if inside {
                // Click inside modal - consume but don't close
                Some(Cmd::Redraw)
            } else {
                update(model, Msg::Ui(UiMsg::Modal(ModalMsg::Close)))
            }
        }

        HitTarget::Tab { doc } => update(
            model,
            Msg::Drag(DragMsg::Press {
                target: PressTarget::Tab(doc),
                pos,
            }),
        ),
        HitTarget::TabClose { doc } => update(model, Msg::Strip(StripMsg::CloseTab(doc))),
        HitTarget::StripEmpty => None,

        HitTarget::WindowTitle { doc } => {
            // A double click on the title bar toggles maximize instead of
            // starting a move
            if click_tracker.track(doc) == 2 {
                update(model, Msg::Window(WindowMsg::ToggleMaximize(doc)))
            } else {
                update(
                    model,
                    Msg::Drag(DragMsg::Press {
                        target: PressTarget::WindowTitle(doc),
                        pos,
                    }),
                )
            }
        }
        HitTarget::WindowClose { doc } => update(model, Msg::Window(WindowMsg::Close(doc))),
        HitTarget::WindowMaximize { doc } => {
            update(model, Msg::Window(WindowMsg::ToggleMaximize(doc)))
        }
        HitTarget::WindowResize { doc, dir } => update(
            model,
            Msg::Drag(DragMsg::Press {
                target: PressTarget::WindowResize(doc, dir),
                pos,
            }),
        ),
        HitTarget::WindowBody { doc } => {
            // Focus-only: raise immediately, never arm a drag session
            update(model, Msg::Window(WindowMsg::Focus(doc)))
        }

        HitTarget::ExplorerSection { label } => {
            update(model, Msg::Ui(UiMsg::ExplorerToggleSection(label)))
        }
        HitTarget::ExplorerDoc { doc } => {
            // Arm a session: release-in-place opens, dragging out spawns a
            // floating window
            update(
                model,
                Msg::Drag(DragMsg::Press {
                    target: PressTarget::ExplorerItem(doc),
                    pos,
                }),
            )
        }
        HitTarget::ExplorerEmpty => Some(Cmd::Redraw),

        HitTarget::Terminal => {
            model.terminal.focused = true;
            Some(Cmd::Redraw)
        }
        HitTarget::StatusBar => None,
        HitTarget::Content => None,
    }
}

/// Handle a middle mouse press: closes tabs and windows
pub fn handle_middle_press(model: &mut AppModel, pos: Vec2) -> Option<Cmd> {
    let chrome = layout::compute_chrome(model);
    match hit_test_ui(model, &chrome, pos)? {
        HitTarget::Tab { doc } | HitTarget::TabClose { doc } => {
            update(model, Msg::Strip(StripMsg::CloseTab(doc)))
        }
        HitTarget::WindowTitle { doc } => update(model, Msg::Window(WindowMsg::Close(doc))),
        _ => None,
    }
}

/// Handle pointer movement; only relevant while a session is armed or active
pub fn handle_move(model: &mut AppModel, pos: Vec2) -> Option<Cmd> {
    if model.drag.is_none() {
        return None;
    }
    update(model, Msg::Drag(DragMsg::Moved { pos }))
}

/// Handle a left release, committing any drag session
pub fn handle_left_release(model: &mut AppModel, pos: Vec2) -> Option<Cmd> {
    if model.drag.is_none() {
        return None;
    }
    update(model, Msg::Drag(DragMsg::Released { pos }))
}

/// Handle scroll wheel: terminal scrollback when over the terminal panel
pub fn handle_wheel(model: &mut AppModel, pos: Vec2, delta_lines: i32) -> Option<Cmd> {
    let chrome = layout::compute_chrome(model);
    if chrome.terminal.is_some_and(|t| t.contains(pos)) {
        return update(model, Msg::Terminal(TerminalMsg::Scroll(delta_lines)));
    }
    None
}

/// Dispatch a press by button
pub fn handle_press(
    model: &mut AppModel,
    button: MouseButton,
    pos: Vec2,
    click_tracker: &mut ClickTracker,
) -> Option<Cmd> {
    match button {
        MouseButton::Left => handle_left_press(model, pos, click_tracker),
        MouseButton::Middle => handle_middle_press(model, pos),
        _ => None,
    }
}

//! Drag session update handlers
//!
//! The whole pointer state machine lives here: arming a session on press,
//! promoting it past the click threshold, reordering tabs, detaching a tab
//! into a window mid-drag, moving and resizing windows, and re-docking a
//! window dropped on the strip.
//!
//! Transitions (see the session type in `model::drag`):
//!
//! ```text
//! (none) --press--> Pending --5px--> Tab | Window | Resize
//! Tab --outside strip, |dy| > 50--> Window   (tab removed, window spawned)
//! Tab --release in strip--> (none)           (tab spliced at drop index)
//! Window --release in strip region--> (none) (window re-docked as tab)
//! any --release/cancel--> (none)
//! ```

use crate::commands::Cmd;
use crate::content::{DocId, HOME_DOC};
use crate::geometry::{
    self, Vec2, DETACH_DISTANCE, DOCK_ZONE_HEIGHT,
};
use crate::layout::{self, ChromeLayout};
use crate::messages::DragMsg;
use crate::model::drag::{DragSession, PressTarget};
use crate::model::AppModel;

/// Update function for drag messages
pub fn update_drag(model: &mut AppModel, msg: DragMsg) -> Option<Cmd> {
    let result = match msg {
        DragMsg::Press { target, pos } => on_press(model, target, pos),
        DragMsg::Moved { pos } => on_move(model, pos),
        DragMsg::Released { pos } => on_release(model, pos),
        DragMsg::Cancel => {
            model.drag = None;
            model.ui.clear_drag_state();
            Some(Cmd::Redraw)
        }
    };
    model.workbench.assert_invariants();
    result
}

/// Arm a pending session. Nothing moves yet; a plain click stays a click.
fn on_press(model: &mut AppModel, target: PressTarget, pos: Vec2) -> Option<Cmd> {
    // The home tab is immune to dragging; a press on it is only ever a click
    if matches!(target, PressTarget::Tab(HOME_DOC)) {
        return None;
    }
    // A resize press on a maximized window is meaningless
    if let PressTarget::WindowResize(doc, _) = target {
        if model
            .workbench
            .window(doc)
            .is_some_and(|w| w.maximized)
        {
            return None;
        }
    }
    // Window presses raise immediately, like focus clicks on the body
    if let PressTarget::WindowTitle(doc) | PressTarget::WindowResize(doc, _) = target {
        model.workbench.raise(doc);
    }

    model.drag = Some(DragSession::Pending { target, press: pos });
    Some(Cmd::Redraw)
}

fn on_move(model: &mut AppModel, pos: Vec2) -> Option<Cmd> {
    // A move with no session is a no-op, not an error
    let session = model.drag.clone()?;

    match session {
        DragSession::Pending { target, press } => {
            if !geometry::exceeds_drag_threshold(press, pos) {
                return None;
            }
            promote(model, target, press, pos)
        }
        DragSession::Tab { doc, press } => drag_tab(model, doc, press, pos),
        DragSession::Window { doc, press, origin } => drag_window(model, doc, press, origin, pos),
        DragSession::Resize {
            doc,
            dir,
            press,
            origin,
        } => {
            let frame = geometry::resize_frame(origin, dir, pos.x - press.x, pos.y - press.y);
            if let Some(w) = model.workbench.window_mut(doc) {
                w.frame = frame;
            }
            Some(Cmd::Redraw)
        }
    }
}

/// Promote a pending session that crossed the drag threshold
fn promote(model: &mut AppModel, target: PressTarget, press: Vec2, pos: Vec2) -> Option<Cmd> {
    match target {
        PressTarget::Tab(doc) => {
            model.drag = Some(DragSession::Tab { doc, press });
            model.ui.is_dragging = true;
            drag_tab(model, doc, press, pos)
        }
        PressTarget::WindowTitle(doc) => {
            // Dragging a maximized window tears it off: restore it first and
            // re-anchor the restored frame under the pointer
            let Some(frame) = model.workbench.unmaximize_for_drag(doc, pos, model.viewport())
            else {
                model.drag = None;
                return None;
            };
            model.drag = Some(DragSession::Window {
                doc,
                press: pos,
                origin: frame.pos(),
            });
            model.ui.is_dragging = true;
            Some(Cmd::Redraw)
        }
        PressTarget::WindowResize(doc, dir) => {
            let Some(origin) = model.workbench.window(doc).map(|w| w.frame) else {
                model.drag = None;
                return None;
            };
            model.drag = Some(DragSession::Resize {
                doc,
                dir,
                press,
                origin,
            });
            model.ui.is_dragging = true;
            Some(Cmd::Redraw)
        }
        PressTarget::ExplorerItem(doc) => {
            // Synthetic detach: a closed document dragged out of the explorer
            // starts life as a floating window under the pointer
            if model.workbench.is_open(doc) {
                model.drag = None;
                return None;
            }
            let frame = geometry::detach_frame(pos, model.viewport());
            model.workbench.spawn_window(doc, frame);
            model.drag = Some(DragSession::Window {
                doc,
                press: pos,
                origin: frame.pos(),
            });
            model.ui.is_dragging = true;
            Some(Cmd::Redraw)
        }
    }
}

/// Advance an active tab drag: update the drop indicator while inside the
/// strip's hit region, detach once the pointer pulls far enough away
fn drag_tab(model: &mut AppModel, doc: DocId, press: Vec2, pos: Vec2) -> Option<Cmd> {
    let chrome = layout::compute_chrome(model);
    let in_strip = geometry::strip_hit_region(chrome.strip).contains(pos);

    if in_strip {
        model.ui.drop_index = Some(drop_index(&chrome, Some(doc), pos.x));
        return Some(Cmd::Redraw);
    }

    model.ui.drop_index = None;

    if (pos.y - press.y).abs() > DETACH_DISTANCE {
        // Detach: the tab leaves the strip and the same session continues as
        // a window drag, re-anchored at the new frame
        let frame = geometry::detach_frame(pos, model.viewport());
        if model.workbench.detach_tab(doc, frame) {
            tracing::debug!(doc, "tab detached into floating window");
            model.drag = Some(DragSession::Window {
                doc,
                press: pos,
                origin: frame.pos(),
            });
        }
    }

    Some(Cmd::Redraw)
}

/// Advance an active window drag: move with clamping, light up the dock
/// zone, and keep the drop indicator live while hovering the strip
fn drag_window(
    model: &mut AppModel,
    doc: DocId,
    press: Vec2,
    origin: Vec2,
    pos: Vec2,
) -> Option<Cmd> {
    let viewport = model.viewport();
    let chrome = layout::compute_chrome(model);

    let in_strip = geometry::strip_hit_region(chrome.strip).contains(pos);
    model.ui.dock_highlight = pos.y < DOCK_ZONE_HEIGHT;
    model.ui.drop_index = in_strip.then(|| drop_index(&chrome, None, pos.x));

    if let Some(w) = model.workbench.window_mut(doc) {
        let raw = Vec2::new(origin.x + pos.x - press.x, origin.y + pos.y - press.y);
        let clamped = geometry::clamp_window_pos(raw, w.frame.size(), viewport);
        w.frame.x = clamped.x;
        w.frame.y = clamped.y;
    }

    Some(Cmd::Redraw)
}

fn on_release(model: &mut AppModel, pos: Vec2) -> Option<Cmd> {
    let session = model.drag.take()?;
    model.ui.clear_drag_state();

    match session {
        // A press that never crossed the threshold: this is the click path
        DragSession::Pending { target, .. } => match target {
            PressTarget::Tab(doc) => {
                model.workbench.activate(doc);
                Some(Cmd::Redraw)
            }
            PressTarget::ExplorerItem(doc) => {
                model.ui.explorer.selected = Some(doc);
                model.workbench.open(doc);
                Some(Cmd::Redraw)
            }
            // Window presses that don't move already raised on promote or
            // were focus-only; nothing further to commit
            PressTarget::WindowTitle(_) | PressTarget::WindowResize(_, _) => Some(Cmd::Redraw),
        },

        DragSession::Tab { doc, .. } => {
            let chrome = layout::compute_chrome(model);
            let index = drop_index(&chrome, Some(doc), pos.x);
            model.workbench.reorder_tab(doc, index);
            Some(Cmd::Redraw)
        }

        DragSession::Window { doc, .. } => {
            let chrome = layout::compute_chrome(model);
            if geometry::strip_hit_region(chrome.strip).contains(pos) {
                // Re-dock: the window comes back to the strip as a tab
                let index = drop_index(&chrome, None, pos.x);
                model.workbench.redock_window(doc, index);
                tracing::debug!(doc, index, "window re-docked into tab strip");
            }
            Some(Cmd::Redraw)
        }

        DragSession::Resize { .. } => Some(Cmd::Redraw),
    }
}

/// Insertion index among the visible tabs, excluding the dragged one
fn drop_index(chrome: &ChromeLayout, exclude: Option<DocId>, pointer_x: f32) -> usize {
    geometry::insertion_index(&chrome.tab_centers_excluding(exclude), pointer_x)
}

//! Floating window update handlers (outside of drag sessions)

use crate::commands::Cmd;
use crate::content::HOME_DOC;
use crate::geometry::{self, Vec2};
use crate::messages::WindowMsg;
use crate::model::AppModel;

/// Update function for window messages
pub fn update_window(model: &mut AppModel, msg: WindowMsg) -> Option<Cmd> {
    let result = match msg {
        WindowMsg::Focus(doc) => {
            model.workbench.raise(doc);
            Some(Cmd::Redraw)
        }
        WindowMsg::Close(doc) => {
            model.workbench.close_window(doc);
            Some(Cmd::Redraw)
        }
        WindowMsg::ToggleMaximize(doc) => {
            model.workbench.toggle_maximize(doc, model.viewport());
            model.workbench.raise(doc);
            Some(Cmd::Redraw)
        }
        WindowMsg::OpenFloating(doc) => {
            if model.workbench.is_open(doc) {
                model.workbench.raise(doc);
                model.workbench.activate(doc);
            } else {
                let viewport = model.viewport();
                let frame = geometry::detach_frame(
                    Vec2::new(viewport.width / 2.0, viewport.height / 3.0),
                    viewport,
                );
                model.workbench.spawn_window(doc, frame);
            }
            Some(Cmd::Redraw)
        }
        WindowMsg::FloatActiveTab => {
            let active = model.workbench.active;
            if active == HOME_DOC {
                return Some(Cmd::Redraw);
            }
            let viewport = model.viewport();
            let frame = geometry::detach_frame(
                Vec2::new(viewport.width / 2.0, viewport.height / 3.0),
                viewport,
            );
            model.workbench.detach_tab(active, frame);
            Some(Cmd::Redraw)
        }
    };
    model.workbench.assert_invariants();
    result
}

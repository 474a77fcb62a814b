//! Application-level update handlers

use crate::commands::Cmd;
use crate::messages::AppMsg;
use crate::model::AppModel;

/// Update function for application messages
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Resize(width, height) => {
            model.window_size = (width, height);
            // Re-clamp every floating window against the new viewport; a
            // resize mid-drag self-corrects on the next move event the same
            // way
            let viewport = model.viewport();
            for w in &mut model.workbench.windows {
                if w.maximized {
                    w.frame =
                        crate::geometry::Rect::new(0.0, 0.0, viewport.width, viewport.height);
                } else {
                    let clamped =
                        crate::geometry::clamp_window_pos(w.frame.pos(), w.frame.size(), viewport);
                    w.frame.x = clamped.x;
                    w.frame.y = clamped.y;
                }
            }
            Some(Cmd::Redraw)
        }
        AppMsg::Quit => Some(Cmd::Batch(vec![Cmd::SaveConfig, Cmd::Quit])),
    }
}

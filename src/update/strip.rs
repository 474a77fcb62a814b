//! Tab strip update handlers

use crate::commands::Cmd;
use crate::messages::StripMsg;
use crate::model::AppModel;

/// Update function for tab strip messages
pub fn update_strip(model: &mut AppModel, msg: StripMsg) -> Option<Cmd> {
    let result = match msg {
        StripMsg::OpenDoc(doc) => {
            model.workbench.open(doc);
            model.ui.explorer.selected = Some(doc);
            remember_active(model);
            Some(Cmd::Batch(vec![Cmd::Redraw, Cmd::SaveConfig]))
        }
        StripMsg::ActivateTab(doc) => {
            model.workbench.activate(doc);
            remember_active(model);
            Some(Cmd::Batch(vec![Cmd::Redraw, Cmd::SaveConfig]))
        }
        StripMsg::CloseTab(doc) => {
            model.workbench.close_tab(doc);
            remember_active(model);
            Some(Cmd::Batch(vec![Cmd::Redraw, Cmd::SaveConfig]))
        }
        StripMsg::CloseActiveTab => {
            let active = model.workbench.active;
            model.workbench.close_tab(active);
            remember_active(model);
            Some(Cmd::Batch(vec![Cmd::Redraw, Cmd::SaveConfig]))
        }
        StripMsg::NextTab => {
            model.workbench.next_tab();
            Some(Cmd::Redraw)
        }
        StripMsg::PrevTab => {
            model.workbench.prev_tab();
            Some(Cmd::Redraw)
        }
    };
    model.workbench.assert_invariants();
    result
}

/// Keep the persisted "last document" in step with the active tab
fn remember_active(model: &mut AppModel) {
    model.config.last_doc = Some(model.workbench.active.to_string());
}

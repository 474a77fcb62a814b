//! Tests for the drag/dock state machine: click vs drag, tab reorder,
//! detach into a floating window, and re-docking onto the strip

mod common;

use common::{drag_tab_to, drag_to, press_tab, release, tab_center, test_model_three_tabs};
use folio::content::HOME_DOC;
use folio::geometry::{Vec2, DETACH_DISTANCE, SCREEN_EDGE_MARGIN, TAB_BAR_HEIGHT};
use folio::messages::{DragMsg, Msg};
use folio::model::drag::{DragSession, PressTarget};
use folio::update::update;

// ============================================================================
// Click vs Drag
// ============================================================================

#[test]
fn test_plain_click_activates_without_dragging() {
    let mut model = test_model_three_tabs();
    model.workbench.activate("contact");

    let pos = press_tab(&mut model, "about");
    assert!(!model.ui.is_dragging);

    // Wiggle below the threshold, then release
    drag_to(&mut model, Vec2::new(pos.x + 3.0, pos.y + 2.0));
    assert!(!model.ui.is_dragging);
    release(&mut model, Vec2::new(pos.x + 3.0, pos.y + 2.0));

    assert_eq!(model.workbench.active, "about");
    assert_eq!(model.workbench.tabs, vec![HOME_DOC, "about", "contact"]);
    assert!(model.drag.is_none());
}

#[test]
fn test_crossing_threshold_promotes_to_drag() {
    let mut model = test_model_three_tabs();
    let pos = press_tab(&mut model, "about");

    assert!(matches!(model.drag, Some(DragSession::Pending { .. })));

    drag_to(&mut model, Vec2::new(pos.x + 9.0, pos.y));
    assert!(model.ui.is_dragging);
    assert!(matches!(model.drag, Some(DragSession::Tab { .. })));
}

#[test]
fn test_home_tab_never_arms_a_session() {
    let mut model = test_model_three_tabs();
    press_tab(&mut model, HOME_DOC);
    assert!(model.drag.is_none());

    // Even a wild move changes nothing
    drag_to(&mut model, Vec2::new(400.0, 500.0));
    assert!(model.workbench.tabs.contains(&HOME_DOC));
    assert!(model.workbench.windows.is_empty());
}

#[test]
fn test_escape_cancels_session() {
    let mut model = test_model_three_tabs();
    let pos = press_tab(&mut model, "about");
    drag_to(&mut model, Vec2::new(pos.x + 20.0, pos.y));
    assert!(model.ui.is_dragging);

    update(&mut model, Msg::Drag(DragMsg::Cancel));
    assert!(model.drag.is_none());
    assert!(!model.ui.is_dragging);
    assert!(model.ui.drop_index.is_none());
}

#[test]
fn test_move_without_session_is_noop() {
    let mut model = test_model_three_tabs();
    drag_to(&mut model, Vec2::new(300.0, 300.0));
    release(&mut model, Vec2::new(300.0, 300.0));
    assert!(model.drag.is_none());
    assert_eq!(model.workbench.tabs.len(), 3);
}

// ============================================================================
// Tab Reordering
// ============================================================================

#[test]
fn test_drag_past_neighbor_reorders() {
    let mut model = test_model_three_tabs();

    // Drag "about" just past "contact"'s center
    let target = tab_center(&model, "contact");
    drag_tab_to(&mut model, "about", Vec2::new(target.x + 30.0, target.y));
    release(&mut model, Vec2::new(target.x + 30.0, target.y));

    assert_eq!(model.workbench.tabs, vec![HOME_DOC, "contact", "about"]);
    assert_eq!(model.workbench.active, "about");
}

#[test]
fn test_drag_within_own_slot_keeps_order() {
    let mut model = test_model_three_tabs();

    // "about" dragged to a point still left of contact's center
    let own = tab_center(&model, "about");
    drag_tab_to(&mut model, "about", Vec2::new(own.x + 10.0, own.y));
    release(&mut model, Vec2::new(own.x + 10.0, own.y));

    assert_eq!(model.workbench.tabs, vec![HOME_DOC, "about", "contact"]);
}

#[test]
fn test_drop_indicator_follows_pointer_in_strip() {
    let mut model = test_model_three_tabs();
    let start = press_tab(&mut model, "contact");
    drag_to(&mut model, Vec2::new(start.x - 20.0, start.y));

    assert!(model.ui.drop_index.is_some());

    // Left of everything: index 0
    let strip_left = tab_center(&model, HOME_DOC);
    drag_to(&mut model, Vec2::new(strip_left.x - 40.0, strip_left.y));
    assert_eq!(model.ui.drop_index, Some(0));
}

#[test]
fn test_no_duplication_or_loss_across_reorders() {
    let mut model = test_model_three_tabs();
    for _ in 0..5 {
        let target = tab_center(&model, HOME_DOC);
        drag_tab_to(&mut model, "contact", Vec2::new(target.x + 1.0, target.y));
        release(&mut model, Vec2::new(target.x + 1.0, target.y));
    }
    let mut sorted = model.workbench.tabs.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, vec!["about", "contact", "home"]);
}

// ============================================================================
// Detach (tab → floating window)
// ============================================================================

#[test]
fn test_drag_down_past_detach_distance_creates_window() {
    let mut model = test_model_three_tabs();
    let start = press_tab(&mut model, "contact");

    let drop = Vec2::new(start.x, start.y + DETACH_DISTANCE + 30.0);
    drag_to(&mut model, Vec2::new(start.x + 8.0, start.y));
    drag_to(&mut model, drop);

    // Tab left the strip, exactly one window exists for it
    assert_eq!(model.workbench.tabs, vec![HOME_DOC, "about"]);
    let w = model.workbench.window("contact").expect("window spawned");

    // Frame centered under the pointer, title bar 16px above it
    assert!((w.frame.center_x() - drop.x).abs() < 1.0);
    assert!((w.frame.y - (drop.y - 16.0)).abs() < 1.0);

    // The same session continues as a window drag
    assert!(matches!(
        model.drag,
        Some(DragSession::Window { doc: "contact", .. })
    ));
}

#[test]
fn test_small_vertical_wiggle_does_not_detach() {
    let mut model = test_model_three_tabs();
    let start = press_tab(&mut model, "contact");

    // Outside the strip region but under the detach distance
    drag_to(&mut model, Vec2::new(start.x + 8.0, start.y));
    drag_to(&mut model, Vec2::new(start.x, TAB_BAR_HEIGHT + 25.0));

    assert_eq!(model.workbench.tabs.len(), 3);
    assert!(model.workbench.windows.is_empty());
}

#[test]
fn test_detached_window_keeps_following_pointer() {
    let mut model = test_model_three_tabs();
    let start = press_tab(&mut model, "contact");
    drag_to(&mut model, Vec2::new(start.x + 8.0, start.y));
    drag_to(&mut model, Vec2::new(start.x, start.y + 100.0));

    let before = model.workbench.window("contact").unwrap().frame;
    drag_to(&mut model, Vec2::new(start.x + 60.0, start.y + 140.0));
    let after = model.workbench.window("contact").unwrap().frame;

    assert!((after.x - before.x - 60.0).abs() < 1.0);
    assert!((after.y - before.y - 40.0).abs() < 1.0);
}

#[test]
fn test_detached_window_gets_top_z() {
    let mut model = test_model_three_tabs();
    model
        .workbench
        .spawn_window("skills", folio::geometry::Rect::new(500.0, 300.0, 400.0, 300.0));

    let start = press_tab(&mut model, "contact");
    drag_to(&mut model, Vec2::new(start.x + 8.0, start.y));
    drag_to(&mut model, Vec2::new(start.x, start.y + 100.0));

    assert_eq!(model.workbench.top_window().unwrap().doc, "contact");
}

#[test]
fn test_doc_never_in_both_collections() {
    let mut model = test_model_three_tabs();
    let start = press_tab(&mut model, "about");
    drag_to(&mut model, Vec2::new(start.x + 8.0, start.y));
    drag_to(&mut model, Vec2::new(start.x, start.y + 120.0));

    let in_tabs = model.workbench.tabs.contains(&"about");
    let in_windows = model.workbench.window("about").is_some();
    assert!(in_tabs ^ in_windows);
}

// ============================================================================
// Re-dock (floating window → tab)
// ============================================================================

#[test]
fn test_drop_in_strip_redocks_window() {
    let mut model = test_model_three_tabs();

    // Detach "about" first
    let start = press_tab(&mut model, "about");
    drag_to(&mut model, Vec2::new(start.x + 8.0, start.y));
    drag_to(&mut model, Vec2::new(start.x, start.y + 150.0));
    release(&mut model, Vec2::new(start.x, start.y + 150.0));
    assert!(model.workbench.window("about").is_some());

    // Now drag the window back into the strip and drop past "contact"
    let pos = common::press_window_title(&mut model, "about");
    drag_to(&mut model, Vec2::new(pos.x + 8.0, pos.y));
    let target = tab_center(&model, "contact");
    let drop = Vec2::new(target.x + 40.0, target.y);
    drag_to(&mut model, drop);
    release(&mut model, drop);

    assert!(model.workbench.window("about").is_none());
    assert_eq!(model.workbench.tabs, vec![HOME_DOC, "contact", "about"]);
    assert_eq!(model.workbench.active, "about");
}

#[test]
fn test_drop_below_strip_tolerance_stays_floating() {
    let mut model = test_model_three_tabs();
    let start = press_tab(&mut model, "about");
    drag_to(&mut model, Vec2::new(start.x + 8.0, start.y));
    drag_to(&mut model, Vec2::new(start.x, start.y + 150.0));

    // Drop well below the strip's ±20px tolerance
    let drop = Vec2::new(start.x, TAB_BAR_HEIGHT + 60.0);
    drag_to(&mut model, drop);
    release(&mut model, drop);

    assert!(model.workbench.window("about").is_some());
    assert_eq!(model.workbench.tabs, vec![HOME_DOC, "contact"]);
}

#[test]
fn test_dock_highlight_follows_dock_zone() {
    let mut model = test_model_three_tabs();
    let start = press_tab(&mut model, "about");
    drag_to(&mut model, Vec2::new(start.x + 8.0, start.y));
    drag_to(&mut model, Vec2::new(start.x, start.y + 200.0));

    // Well below the dock zone
    drag_to(&mut model, Vec2::new(start.x, 300.0));
    assert!(!model.ui.dock_highlight);

    // Into the dock zone
    drag_to(&mut model, Vec2::new(start.x, 45.0));
    assert!(model.ui.dock_highlight);

    release(&mut model, Vec2::new(start.x, 300.0));
    assert!(!model.ui.dock_highlight);
}

// ============================================================================
// Explorer drags
// ============================================================================

#[test]
fn test_explorer_click_opens_tab() {
    let mut model = test_model_three_tabs();
    let pos = Vec2::new(100.0, 200.0);
    update(
        &mut model,
        Msg::Drag(DragMsg::Press {
            target: PressTarget::ExplorerItem("skills"),
            pos,
        }),
    );
    release(&mut model, pos);

    assert!(model.workbench.tabs.contains(&"skills"));
    assert_eq!(model.workbench.active, "skills");
}

#[test]
fn test_explorer_drag_spawns_floating_window() {
    let mut model = test_model_three_tabs();
    let pos = Vec2::new(100.0, 200.0);
    update(
        &mut model,
        Msg::Drag(DragMsg::Press {
            target: PressTarget::ExplorerItem("skills"),
            pos,
        }),
    );
    drag_to(&mut model, Vec2::new(pos.x + 120.0, pos.y + 40.0));

    assert!(!model.workbench.tabs.contains(&"skills"));
    let w = model.workbench.window("skills").expect("window spawned");
    assert!(w.frame.x >= SCREEN_EDGE_MARGIN - w.frame.width);
    assert!(matches!(
        model.drag,
        Some(DragSession::Window { doc: "skills", .. })
    ));
}

#[test]
fn test_explorer_drag_of_open_doc_is_ignored() {
    let mut model = test_model_three_tabs();
    let pos = Vec2::new(100.0, 200.0);
    update(
        &mut model,
        Msg::Drag(DragMsg::Press {
            target: PressTarget::ExplorerItem("about"),
            pos,
        }),
    );
    drag_to(&mut model, Vec2::new(pos.x + 120.0, pos.y + 40.0));

    // Already open as a tab: no window, session discarded
    assert!(model.workbench.window("about").is_none());
    assert!(model.drag.is_none());
}

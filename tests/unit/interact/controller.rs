use super::*;
use crate::foundation::core::CanvasSize;

fn scene() -> SceneState {
    let mut scene = SceneState::default();
    // Non-overlapping Frame 2 boxes at known places.
    scene.frame2.title1 = TextPosition {
        x: 100.0,
        y: 100.0,
        width: 200.0,
        height: 100.0,
        rotation_rad: 0.0,
        font_size: 80.0,
    };
    scene.frame2.title2 = TextPosition {
        x: 500.0,
        y: 100.0,
        width: 200.0,
        height: 100.0,
        rotation_rad: 0.0,
        font_size: 80.0,
    };
    scene.frame2.subtitle = TextPosition {
        x: 100.0,
        y: 600.0,
        width: 200.0,
        height: 100.0,
        rotation_rad: 0.0,
        font_size: 40.0,
    };
    scene
}

fn down(x: f64, y: f64, ts: u64) -> PointerInput {
    PointerInput {
        x,
        y,
        timestamp_ms: ts,
        extend: false,
    }
}

fn down_extend(x: f64, y: f64, ts: u64) -> PointerInput {
    PointerInput {
        x,
        y,
        timestamp_ms: ts,
        extend: true,
    }
}

#[test]
fn click_selects_hit_slot_as_singleton() {
    let mut scene = scene();
    let mut ctl = Controller::new();
    // title1's box center.
    let r = ctl.pointer_down(&mut scene, down(200.0, 150.0, 0));
    assert_eq!(r, Response::Redraw);
    assert_eq!(
        ctl.selection().iter().copied().collect::<Vec<_>>(),
        vec![TextSlot::Title1]
    );

    // Clicking another slot later replaces the selection.
    ctl.pointer_up(&mut scene, down(200.0, 150.0, 10));
    ctl.pointer_down(&mut scene, down(600.0, 150.0, 5000));
    assert_eq!(
        ctl.selection().iter().copied().collect::<Vec<_>>(),
        vec![TextSlot::Title2]
    );
}

#[test]
fn click_on_empty_space_clears_selection() {
    let mut scene = scene();
    let mut ctl = Controller::new();
    ctl.pointer_down(&mut scene, down(200.0, 150.0, 0));
    ctl.pointer_up(&mut scene, down(200.0, 150.0, 10));
    assert!(!ctl.selection().is_empty());

    let r = ctl.pointer_down(&mut scene, down(950.0, 1200.0, 5000));
    assert_eq!(r, Response::Redraw);
    assert!(ctl.selection().is_empty());
}

#[test]
fn extend_click_toggles_membership() {
    let mut scene = scene();
    let mut ctl = Controller::new();
    ctl.pointer_down(&mut scene, down(200.0, 150.0, 0));
    ctl.pointer_up(&mut scene, down(200.0, 150.0, 10));
    ctl.pointer_down(&mut scene, down_extend(600.0, 150.0, 5000));
    ctl.pointer_up(&mut scene, down(600.0, 150.0, 5010));
    assert_eq!(ctl.selection().len(), 2);

    ctl.pointer_down(&mut scene, down_extend(600.0, 150.0, 10_000));
    ctl.pointer_up(&mut scene, down(600.0, 150.0, 10_010));
    assert_eq!(
        ctl.selection().iter().copied().collect::<Vec<_>>(),
        vec![TextSlot::Title1]
    );
}

#[test]
fn double_click_opens_editor_once() {
    let mut scene = scene();
    let mut ctl = Controller::new();
    ctl.pointer_down(&mut scene, down(200.0, 150.0, 1000));
    ctl.pointer_up(&mut scene, down(200.0, 150.0, 1010));

    // 150 ms later: double-click, not a second independent selection drag.
    let r = ctl.pointer_down(&mut scene, down(200.0, 150.0, 1150));
    assert_eq!(r, Response::EditRequested(TextSlot::Title1));

    // A third rapid click must not classify as another double-click; the
    // saved timestamp was cleared.
    ctl.pointer_up(&mut scene, down(200.0, 150.0, 1160));
    let r = ctl.pointer_down(&mut scene, down(200.0, 150.0, 1250));
    assert_eq!(r, Response::Redraw);
}

#[test]
fn slow_second_click_is_not_a_double_click() {
    let mut scene = scene();
    let mut ctl = Controller::new();
    ctl.pointer_down(&mut scene, down(200.0, 150.0, 0));
    ctl.pointer_up(&mut scene, down(200.0, 150.0, 10));
    let r = ctl.pointer_down(&mut scene, down(200.0, 150.0, 400));
    assert_eq!(r, Response::Redraw);
}

#[test]
fn drag_scales_display_delta_to_canvas_units() {
    let mut scene = scene();
    let mut ctl = Controller::new();
    // Display is half the canvas size: 2× internal/display ratio.
    ctl.set_display_size(540.0, 675.0);

    // title1's center (200, 150) in canvas px is (100, 75) on screen.
    ctl.pointer_down(&mut scene, down(100.0, 75.0, 0));
    let r = ctl.pointer_move(&mut scene, down(110.0, 80.0, 16));
    assert_eq!(r, Response::Redraw);

    // (10, 5) display pixels → (20, 10) canvas units.
    assert_eq!(scene.frame2.title1.x, 120.0);
    assert_eq!(scene.frame2.title1.y, 110.0);
}

#[test]
fn group_drag_moves_all_selected_slots_together() {
    let mut scene = scene();
    let mut ctl = Controller::new();
    ctl.pointer_down(&mut scene, down(200.0, 150.0, 0));
    ctl.pointer_up(&mut scene, down(200.0, 150.0, 10));
    ctl.pointer_down(&mut scene, down_extend(600.0, 150.0, 5000));
    ctl.pointer_move(&mut scene, down(630.0, 170.0, 5016));

    assert_eq!(scene.frame2.title1.x, 130.0);
    assert_eq!(scene.frame2.title1.y, 120.0);
    assert_eq!(scene.frame2.title2.x, 530.0);
    assert_eq!(scene.frame2.title2.y, 120.0);
}

#[test]
fn release_clears_gesture_state() {
    let mut scene = scene();
    let mut ctl = Controller::new();
    ctl.pointer_down(&mut scene, down(200.0, 150.0, 0));
    ctl.pointer_up(&mut scene, down(210.0, 150.0, 20));

    // A move after release drags nothing.
    let before = scene.frame2.title1;
    assert_eq!(
        ctl.pointer_move(&mut scene, down(400.0, 400.0, 40)),
        Response::None
    );
    assert_eq!(scene.frame2.title1, before);
}

#[test]
fn frame_one_is_a_read_only_reference_pose() {
    let mut scene = scene();
    let mut ctl = Controller::new();
    ctl.set_active_frame(&mut scene, FrameId::One);

    let r = ctl.pointer_down(&mut scene, down(200.0, 150.0, 0));
    assert_eq!(r, Response::None);
    assert!(ctl.selection().is_empty());
}

#[test]
fn toggling_away_from_frame_two_cancels_a_live_drag() {
    let mut scene = scene();
    let mut ctl = Controller::new();
    ctl.pointer_down(&mut scene, down(200.0, 150.0, 0));

    ctl.set_active_frame(&mut scene, FrameId::One);
    ctl.set_active_frame(&mut scene, FrameId::Two);

    let before = scene.frame2.title1;
    assert_eq!(
        ctl.pointer_move(&mut scene, down(400.0, 400.0, 32)),
        Response::None
    );
    assert_eq!(scene.frame2.title1, before);
}

#[test]
fn titles_hit_before_subtitle() {
    let mut scene = scene();
    // Overlap subtitle under title1.
    scene.frame2.subtitle = scene.frame2.title1;
    let mut ctl = Controller::new();
    ctl.pointer_down(&mut scene, down(200.0, 150.0, 0));
    assert_eq!(
        ctl.selection().iter().copied().collect::<Vec<_>>(),
        vec![TextSlot::Title1]
    );
}

#[test]
fn draw_tool_commits_a_stroke_on_release() {
    let mut scene = scene();
    let mut ctl = Controller::new();
    ctl.set_tool(Tool::Draw);

    assert_eq!(
        ctl.pointer_down(&mut scene, down(10.0, 20.0, 0)),
        Response::None
    );
    let r = ctl.pointer_up(&mut scene, down(60.0, 90.0, 100));
    assert_eq!(r, Response::Redraw);
    assert_eq!(scene.strokes.len(), 1);
    assert_eq!(scene.strokes[0].frame, FrameId::Two);
    assert_eq!(scene.strokes[0].points[0], Point::new(10.0, 20.0));
    assert_eq!(scene.strokes[0].points[1], Point::new(60.0, 90.0));

    // A zero-length stroke is dropped.
    ctl.pointer_down(&mut scene, down(5.0, 5.0, 200));
    assert_eq!(
        ctl.pointer_up(&mut scene, down(5.0, 5.0, 210)),
        Response::None
    );
    assert_eq!(scene.strokes.len(), 1);
}

#[test]
fn draw_tool_records_into_the_active_frame() {
    let mut scene = scene();
    let mut ctl = Controller::new();
    ctl.set_active_frame(&mut scene, FrameId::One);
    ctl.set_tool(Tool::Draw);
    ctl.pointer_down(&mut scene, down(0.0, 0.0, 0));
    ctl.pointer_up(&mut scene, down(50.0, 0.0, 50));
    assert_eq!(scene.strokes[0].frame, FrameId::One);
}

#[test]
fn apply_edit_patches_every_selected_slot() {
    let mut scene = scene();
    let mut ctl = Controller::new();
    ctl.pointer_down(&mut scene, down(200.0, 150.0, 0));
    ctl.pointer_up(&mut scene, down(200.0, 150.0, 10));
    ctl.pointer_down(&mut scene, down_extend(600.0, 150.0, 5000));
    ctl.pointer_up(&mut scene, down(600.0, 150.0, 5010));

    ctl.apply_edit(
        &mut scene,
        PositionEdit {
            rotation_deg: Some(45.0),
            ..PositionEdit::default()
        },
    );
    let quarter = std::f64::consts::FRAC_PI_4;
    assert!((scene.frame2.title1.rotation_rad - quarter).abs() < 1e-12);
    assert!((scene.frame2.title2.rotation_rad - quarter).abs() < 1e-12);
    assert_eq!(scene.frame2.subtitle.rotation_rad, 0.0);
}

#[test]
fn group_bounds_cover_the_whole_selection() {
    let mut scene = scene();
    let mut ctl = Controller::new();
    ctl.pointer_down(&mut scene, down(200.0, 150.0, 0));
    ctl.pointer_up(&mut scene, down(200.0, 150.0, 10));
    assert!(ctl.group_bounds(&scene).is_none(), "singleton has no group");

    ctl.pointer_down(&mut scene, down_extend(600.0, 150.0, 5000));
    ctl.pointer_up(&mut scene, down(600.0, 150.0, 5010));
    let bounds = ctl.group_bounds(&scene).unwrap();
    assert_eq!(bounds.x, 100.0);
    assert_eq!(bounds.y, 100.0);
    assert_eq!(bounds.width, 600.0);
    assert_eq!(bounds.height, 100.0);
    assert_eq!(bounds.rotation_rad, 0.0);
}

#[test]
fn display_size_defaults_to_native_canvas() {
    let ctl = Controller::new();
    let mut scene = scene();
    assert_eq!(scene.canvas, CanvasSize::NATIVE);
    // Sanity: a click at canvas coordinates hits without scaling.
    let mut ctl2 = ctl.clone();
    ctl2.pointer_down(&mut scene, down(200.0, 150.0, 0));
    assert!(!ctl2.selection().is_empty());
}

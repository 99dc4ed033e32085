use gridlock::*;

#[test]
fn top_hud_matches_design_outline() {
    let mut session = Session::new(Rules::default(), 11);
    session.start();
    let hud_line = format_hud(&session);
    assert!(hud_line.contains("Score: 0"));
    assert!(hud_line.contains("Cleared: 0"));
    assert!(hud_line.contains("Level 1"));
    assert!(hud_line.contains("30s left"));

    let controls = hud_controls(session.phase());
    assert_eq!(controls.start_label, "Start Game");
    assert_eq!(controls.reset_label, "Reset");
    assert_eq!(controls.status, "Playing");
}

#[test]
fn instruction_flow_is_exposed() {
    assert_eq!(
        IDLE_HINT,
        "Click vehicles to select them, then use arrow keys or WASD to move them out of the intersection!"
    );
    assert_eq!(SELECT_HINT, "Click a vehicle to select it");
    assert_eq!(MOVE_HINT, "Use arrow keys or WASD to move the selected vehicle");
    assert_eq!(instruction_line(Phase::Playing, None), SELECT_HINT);
    assert_eq!(instruction_line(Phase::Playing, Some(0)), MOVE_HINT);
}

#[test]
fn panels_have_named_headings() {
    assert_eq!(VEHICLE_PANEL_HEADING, "Vehicles");
    assert_eq!(LOG_PANEL_HEADING, "Events");
}

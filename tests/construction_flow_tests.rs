use glam::Vec2;
use plane_sketch::core::{BuildState, FigureGeometry};
use plane_sketch::{
    ConstructionState, FigureKind, FigureRegistry, SketchCommand, SketchController, SketchIntent,
    SketchKey, SketchState,
};

fn click(controller: &mut SketchController, state: &mut SketchState, x: f32, y: f32) {
    controller
        .handle_intent(
            state,
            SketchIntent::PointerClicked {
                device: Vec2::new(x, y),
            },
        )
        .expect("Klick sollte ohne Fehler durchlaufen");
}

fn press(controller: &mut SketchController, state: &mut SketchState, key: SketchKey) {
    controller
        .handle_intent(state, SketchIntent::KeyPressed { key })
        .expect("Taste sollte ohne Fehler durchlaufen");
}

fn select(controller: &mut SketchController, state: &mut SketchState, tool: Option<FigureKind>) {
    controller
        .handle_intent(state, SketchIntent::ToolSelected { tool })
        .expect("Werkzeugwahl sollte ohne Fehler durchlaufen");
}

fn point_count(state: &SketchState, index: usize) -> usize {
    let figure = state.figures.iter().nth(index).expect("Figur vorhanden");
    figure
        .as_constructible()
        .expect("konstruierbare Figur")
        .point_count()
}

#[test]
fn test_point_click_places_snapped_point_and_spawns_preview() {
    let mut controller = SketchController::new();
    let mut state = SketchState::new();
    select(&mut controller, &mut state, Some(FigureKind::Point));

    click(&mut controller, &mut state, 100.0, 100.0);

    assert_eq!(state.figure_count(), 1);
    let figure = state.figures.iter().next().expect("Punkt vorhanden");
    assert_eq!(figure.kind(), FigureKind::Point);
    let FigureGeometry::Single(pos) = figure.geometry() else {
        panic!("Punkt erwartet");
    };
    approx::assert_relative_eq!(pos.x, 1.05, epsilon = 1e-5);
    approx::assert_relative_eq!(pos.y, -1.05, epsilon = 1e-5);

    let preview = state.preview.as_ref().expect("Vorschau nach Platzierung");
    assert!(preview.is_preview());
    assert_eq!(preview.kind(), FigureKind::Point);
    assert_eq!(state.construction, ConstructionState::Idle);
}

#[test]
fn test_polyline_three_clicks_then_enter_finalizes() {
    let mut controller = SketchController::new();
    let mut state = SketchState::new();
    select(&mut controller, &mut state, Some(FigureKind::Polyline));

    click(&mut controller, &mut state, 100.0, 100.0);
    assert!(state.construction.is_building());
    assert!(state.preview.is_none());
    click(&mut controller, &mut state, 200.0, 100.0);
    click(&mut controller, &mut state, 200.0, 200.0);

    press(&mut controller, &mut state, SketchKey::Enter);

    assert_eq!(state.figure_count(), 1);
    assert_eq!(point_count(&state, 0), 3);
    let figure = state.figures.iter().next().expect("Polylinie vorhanden");
    let construct = figure.as_constructible().expect("konstruierbar");
    assert_eq!(construct.build_state(), BuildState::Finalized);
    assert!(!construct.is_closed());
    assert_eq!(state.construction, ConstructionState::Idle);
    assert!(state.preview.is_none());
}

#[test]
fn test_contour_two_clicks_then_escape_leaves_empty_figure() {
    let mut controller = SketchController::new();
    let mut state = SketchState::new();
    select(&mut controller, &mut state, Some(FigureKind::Contour));

    click(&mut controller, &mut state, 100.0, 100.0);
    click(&mut controller, &mut state, 200.0, 100.0);
    press(&mut controller, &mut state, SketchKey::Escape);

    assert_eq!(state.figure_count(), 1);
    assert_eq!(point_count(&state, 0), 0);
    let figure = state.figures.iter().next().expect("Kontur vorhanden");
    assert!(!figure.as_constructible().expect("konstruierbar").is_closed());
    assert_eq!(state.construction, ConstructionState::Idle);
}

#[test]
fn test_contour_finish_with_three_vertices_closes() {
    let mut controller = SketchController::new();
    let mut state = SketchState::new();
    select(&mut controller, &mut state, Some(FigureKind::Contour));

    click(&mut controller, &mut state, 100.0, 100.0);
    click(&mut controller, &mut state, 200.0, 100.0);
    click(&mut controller, &mut state, 200.0, 200.0);
    press(&mut controller, &mut state, SketchKey::Enter);

    let figure = state.figures.iter().next().expect("Kontur vorhanden");
    let FigureGeometry::Path { points, closed } = figure.geometry() else {
        panic!("Pfad erwartet");
    };
    assert!(closed);
    assert_eq!(points.len(), 4);
    assert_eq!(points.first(), points.last());
    assert_eq!(state.construction, ConstructionState::Idle);
}

#[test]
fn test_contour_finish_with_two_vertices_stays_open() {
    let mut controller = SketchController::new();
    let mut state = SketchState::new();
    select(&mut controller, &mut state, Some(FigureKind::Contour));

    click(&mut controller, &mut state, 100.0, 100.0);
    click(&mut controller, &mut state, 200.0, 100.0);
    press(&mut controller, &mut state, SketchKey::Enter);

    let figure = state.figures.iter().next().expect("Kontur vorhanden");
    let construct = figure.as_constructible().expect("konstruierbar");
    assert!(!construct.is_closed());
    assert_eq!(construct.point_count(), 2);
    assert_eq!(state.construction, ConstructionState::Idle);
}

#[test]
fn test_keys_are_noops_when_idle() {
    let mut controller = SketchController::new();
    let mut state = SketchState::new();

    press(&mut controller, &mut state, SketchKey::Enter);
    press(&mut controller, &mut state, SketchKey::Escape);

    assert_eq!(state.construction, ConstructionState::Idle);
    assert_eq!(state.figure_count(), 0);
    assert_eq!(
        state.command_log.entries(),
        &[
            SketchCommand::FinishConstruction,
            SketchCommand::CancelConstruction
        ]
    );
}

#[test]
fn test_tool_change_mid_construction_keeps_routing_clicks() {
    let mut controller = SketchController::new();
    let mut state = SketchState::new();
    select(&mut controller, &mut state, Some(FigureKind::Polyline));
    click(&mut controller, &mut state, 100.0, 100.0);

    select(&mut controller, &mut state, Some(FigureKind::Point));
    click(&mut controller, &mut state, 200.0, 100.0);

    assert_eq!(state.figure_count(), 1);
    assert_eq!(point_count(&state, 0), 2);
    assert!(state.construction.is_building());
}

#[test]
fn test_clicks_without_tool_do_nothing() {
    let mut controller = SketchController::new();
    let mut state = SketchState::new();

    click(&mut controller, &mut state, 100.0, 100.0);

    assert_eq!(state.figure_count(), 0);
    assert!(state.preview.is_none());
}

#[test]
fn test_non_finite_click_is_rejected_before_dispatch() {
    let mut controller = SketchController::new();
    let mut state = SketchState::new();
    select(&mut controller, &mut state, Some(FigureKind::Point));

    click(&mut controller, &mut state, f32::NAN, 100.0);
    click(&mut controller, &mut state, 100.0, f32::INFINITY);

    assert_eq!(state.figure_count(), 0);
    assert!(!state
        .command_log
        .entries()
        .iter()
        .any(|cmd| matches!(cmd, SketchCommand::ClickAt { .. })));
}

#[test]
fn test_unknown_kind_click_is_logged_noop() {
    let mut controller = SketchController::new();
    let mut state = SketchState::new();
    state.registry = FigureRegistry::new();
    select(&mut controller, &mut state, Some(FigureKind::Marker));

    click(&mut controller, &mut state, 100.0, 100.0);
    controller
        .handle_intent(
            &mut state,
            SketchIntent::PointerMoved {
                device: Vec2::new(120.0, 80.0),
            },
        )
        .expect("Bewegung sollte ohne Fehler durchlaufen");

    assert_eq!(state.figure_count(), 0);
    assert!(state.preview.is_none());
}

#[test]
fn test_move_with_placeable_tool_follows_snapped_cursor() {
    let mut controller = SketchController::new();
    let mut state = SketchState::new();
    select(&mut controller, &mut state, Some(FigureKind::Marker));

    controller
        .handle_intent(
            &mut state,
            SketchIntent::PointerMoved {
                device: Vec2::new(100.0, 100.0),
            },
        )
        .expect("Bewegung sollte ohne Fehler durchlaufen");

    approx::assert_relative_eq!(state.cursor.x, 1.05, epsilon = 1e-5);
    approx::assert_relative_eq!(state.cursor.y, -1.05, epsilon = 1e-5);
    let preview = state.preview.as_ref().expect("Vorschau vorhanden");
    assert_eq!(preview.geometry(), FigureGeometry::Single(state.cursor));
    assert_eq!(state.figure_count(), 0);

    let tail: Vec<_> = state.command_log.entries().iter().rev().take(3).collect();
    assert!(matches!(tail[2], SketchCommand::SetCursor { .. }));
    assert!(matches!(tail[1], SketchCommand::RefreshHover { .. }));
    assert!(matches!(tail[0], SketchCommand::RefreshPreview { .. }));
}

#[test]
fn test_move_while_building_updates_construction_preview_point() {
    let mut controller = SketchController::new();
    let mut state = SketchState::new();
    select(&mut controller, &mut state, Some(FigureKind::Polyline));
    click(&mut controller, &mut state, 100.0, 100.0);

    controller
        .handle_intent(
            &mut state,
            SketchIntent::PointerMoved {
                device: Vec2::new(300.0, 100.0),
            },
        )
        .expect("Bewegung sollte ohne Fehler durchlaufen");

    assert!(state.preview.is_none());
    assert_eq!(point_count(&state, 0), 1);
}

#[test]
fn test_removing_active_construction_returns_to_idle() {
    let mut controller = SketchController::new();
    let mut state = SketchState::new();
    select(&mut controller, &mut state, Some(FigureKind::Polyline));
    click(&mut controller, &mut state, 100.0, 100.0);
    let id = state.construction.active().expect("Konstruktion aktiv");

    controller
        .handle_intent(&mut state, SketchIntent::RemoveFigureRequested { id })
        .expect("Entfernen sollte ohne Fehler durchlaufen");

    assert_eq!(state.figure_count(), 0);
    assert_eq!(state.construction, ConstructionState::Idle);
}

#[test]
fn test_last_action_ignores_subsequent_pointer_moves() {
    let mut controller = SketchController::new();
    let mut state = SketchState::new();
    select(&mut controller, &mut state, Some(FigureKind::Polyline));
    click(&mut controller, &mut state, 100.0, 100.0);

    for x in [110.0, 120.0, 130.0] {
        controller
            .handle_intent(
                &mut state,
                SketchIntent::PointerMoved {
                    device: Vec2::new(x, 80.0),
                },
            )
            .expect("Bewegung sollte ohne Fehler durchlaufen");
    }

    let last = state.command_log.last_action().expect("Aktion geloggt");
    assert!(matches!(last, SketchCommand::ClickAt { .. }));
    assert_eq!(last.label(), "Klick");

    press(&mut controller, &mut state, SketchKey::Escape);
    assert_eq!(
        state.command_log.last_action(),
        Some(&SketchCommand::CancelConstruction)
    );
}

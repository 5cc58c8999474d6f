//! Pointer gestures driven through the tools and committed with `dispatch`.

use pretty_assertions::assert_eq;
use wm_core::document::Document;
use wm_core::format::EditConfig;
use wm_core::position::{MapPosition, Viewport, to_pixels};
use wm_core::statement::StatementKind;
use wm_core::Vec2;
use wm_editor::input::{InputEvent, Modifiers};
use wm_editor::sync::{MapElement, dispatch};
use wm_editor::tools::{Corner, LabelTool, MoveTool, RegionTool, Tool};

const MAP: &str = "title Gestures\n\
                   component Simple Component [0.6, 0.4]\n\
                   component Kettle [0.43, 0.35] label [-57, 4]\n\
                   settlers [0.60, 0.25, 0.40, 0.50]\n";

const VIEWPORT: Viewport = Viewport {
    width: 1000.0,
    height: 500.0,
};

/// Feed a gesture to `tool` and commit whatever mutation it yields.
fn run_gesture(tool: &mut dyn Tool, events: &[InputEvent]) -> Vec<String> {
    let mut commits = Vec::new();
    let mut sink = |text: String| commits.push(text);
    for event in events {
        if let Some(mutation) = tool.handle(event) {
            dispatch(MAP, &mutation, &EditConfig::default(), &mut sink).unwrap();
        }
    }
    commits
}

fn drag(from: (f64, f64), to: (f64, f64)) -> Vec<InputEvent> {
    vec![
        InputEvent::from_pointer_down(from.0, from.1, Modifiers::NONE),
        InputEvent::from_pointer_move(
            (from.0 + to.0) / 2.0,
            (from.1 + to.1) / 2.0,
            Modifiers::NONE,
        ),
        InputEvent::from_pointer_up(to.0, to.1, Modifiers::NONE),
    ]
}

#[test]
fn dragging_a_component_rewrites_its_coordinates() {
    let origin = MapPosition::new(0.4, 0.6);
    let start = to_pixels(origin, VIEWPORT);
    let target = to_pixels(MapPosition::new(0.5, 0.7), VIEWPORT);
    let mut tool = MoveTool::new(
        MapElement::new(StatementKind::Component, "Simple Component").at_line(2),
        origin,
        VIEWPORT,
        &EditConfig::default(),
    );

    let commits = run_gesture(&mut tool, &drag((start.x, start.y), (target.x, target.y)));
    assert_eq!(commits.len(), 1);
    assert_eq!(
        Document::parse(&commits[0]).line(2),
        Some("component Simple Component [0.70, 0.50]")
    );
}

#[test]
fn escape_mid_drag_commits_nothing() {
    let mut tool = MoveTool::new(
        MapElement::new(StatementKind::Component, "Simple Component").at_line(2),
        MapPosition::new(0.4, 0.6),
        VIEWPORT,
        &EditConfig::default(),
    );
    let events = [
        InputEvent::from_pointer_down(400.0, 200.0, Modifiers::NONE),
        InputEvent::from_pointer_move(600.0, 100.0, Modifiers::NONE),
        InputEvent::Cancel,
        InputEvent::from_pointer_up(600.0, 100.0, Modifiers::NONE),
    ];
    assert!(run_gesture(&mut tool, &events).is_empty());
}

#[test]
fn dragging_off_canvas_clamps_to_map_edge() {
    let mut tool = MoveTool::new(
        MapElement::new(StatementKind::Component, "Simple Component").at_line(2),
        MapPosition::new(0.4, 0.6),
        VIEWPORT,
        &EditConfig::default(),
    );
    let commits = run_gesture(&mut tool, &drag((400.0, 200.0), (1400.0, -300.0)));
    assert_eq!(
        Document::parse(&commits[0]).line(2),
        Some("component Simple Component [1.00, 1.00]")
    );
}

#[test]
fn dragging_a_label_updates_offset_in_place() {
    let mut tool = LabelTool::new(
        MapElement::new(StatementKind::Component, "Kettle").at_line(3),
        Vec2::new(-57.0, 4.0),
    );
    let commits = run_gesture(&mut tool, &drag((100.0, 100.0), (110.0, 92.0)));
    assert_eq!(
        Document::parse(&commits[0]).line(3),
        Some("component Kettle [0.43, 0.35] label [-47.00, -4.00]")
    );
}

#[test]
fn drawing_a_region_backwards_rewrites_settlers() {
    let mut tool = RegionTool::draw(
        MapElement::new(StatementKind::Settlers, "").at_line(4),
        VIEWPORT,
        &EditConfig::default(),
    );
    // Bottom-right to top-left: (800, 400) -> (200, 100)
    let commits = run_gesture(&mut tool, &drag((800.0, 400.0), (200.0, 100.0)));
    assert_eq!(commits.len(), 1);
    assert_eq!(
        Document::parse(&commits[0]).line(4),
        Some("settlers [0.80, 0.20, 0.20, 0.80]")
    );
}

#[test]
fn tiny_region_gesture_commits_nothing() {
    let mut tool = RegionTool::draw(
        MapElement::new(StatementKind::Settlers, "").at_line(4),
        VIEWPORT,
        &EditConfig::default(),
    );
    assert!(run_gesture(&mut tool, &drag((300.0, 300.0), (305.0, 360.0))).is_empty());
}

#[test]
fn resizing_a_region_by_its_top_left_corner() {
    let mut tool = RegionTool::resize(
        MapElement::new(StatementKind::Settlers, "").at_line(4),
        MapPosition::new(0.25, 0.6),
        MapPosition::new(0.5, 0.4),
        Corner::TopLeft,
        VIEWPORT,
        &EditConfig::default(),
    );
    // Top-left handle sits at (250, 200); pull it up and left by 100px.
    let commits = run_gesture(&mut tool, &drag((250.0, 200.0), (150.0, 100.0)));
    assert_eq!(
        Document::parse(&commits[0]).line(4),
        Some("settlers [0.80, 0.15, 0.40, 0.50]")
    );
}

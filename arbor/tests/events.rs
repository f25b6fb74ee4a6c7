use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use arbor::element::{walk, Element};
use arbor::tree::render::header_id;
use arbor::{
    DragAndDrop, DragEvent, DraggableOptions, GestureError, GestureHost, GestureMount,
    Interactions, Node, TreeConfig, TreeEvent, TreeView,
};

/// Host that accepts every committed element and counts attach calls.
#[derive(Default)]
struct CountingHost {
    committed: HashSet<String>,
    attached: HashMap<String, usize>,
    detached: Vec<String>,
    /// Attach calls to fail before succeeding.
    failures: usize,
}

impl GestureHost for CountingHost {
    fn commit(&mut self, root: &Element) {
        self.committed.clear();
        walk(root, &mut |element, _| {
            self.committed.insert(element.id.clone());
        });
    }

    fn attach_draggable(
        &mut self,
        target: &str,
        _options: DraggableOptions,
    ) -> Result<(), GestureError> {
        *self.attached.entry(target.to_string()).or_default() += 1;
        if self.failures > 0 {
            self.failures -= 1;
            return Err(GestureError::TargetNotMounted(target.to_string()));
        }
        Ok(())
    }

    fn detach(&mut self, target: &str) {
        self.detached.push(target.to_string());
    }
}

fn data() -> Vec<Node> {
    vec![Node::new("root")
        .id("root")
        .toggled(true)
        .child(Node::new("a").id("a"))
        .child(Node::new("b").id("b").child(Node::new("b1").id("b1")))]
}

type Log<T> = Arc<Mutex<Vec<T>>>;

fn drag_config(moves: &Log<DragEvent>, ends: &Log<DragEvent>) -> TreeConfig {
    let moves = Arc::clone(moves);
    let ends = Arc::clone(ends);
    TreeConfig::new().drag_and_drop(
        DragAndDrop::new(move |event| ends.lock().unwrap().push(event.clone()))
            .on_move(move |event| moves.lock().unwrap().push(event.clone())),
    )
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

// ============================================================================
// Toggle
// ============================================================================

#[test]
fn test_header_click_requests_toggle_once() {
    let toggles: Log<(Option<String>, bool)> = Arc::default();
    let recorded = Arc::clone(&toggles);
    let config = TreeConfig::new().on_toggle(move |node, toggled| {
        recorded.lock().unwrap().push((node.id.clone(), toggled));
    });

    let mut view = TreeView::new(data(), config, CountingHost::default()).unwrap();
    let handled = view.dispatch(&TreeEvent::Click {
        target: header_id("root/a"),
    });

    assert!(handled);
    assert_eq!(*toggles.lock().unwrap(), vec![(Some("a".to_string()), true)]);
    // The view leaves the node alone
    assert!(!view.node("root/a").unwrap().toggled);
}

#[test]
fn test_click_elsewhere_is_ignored() {
    let config = TreeConfig::new().on_toggle(|_, _| panic!("no toggle expected"));
    let mut view = TreeView::new(data(), config, CountingHost::default()).unwrap();

    assert!(!view.dispatch(&TreeEvent::Click {
        target: "root/a".to_string()
    }));
    assert!(!view.dispatch(&TreeEvent::Click {
        target: header_id("root/missing")
    }));
}

#[test]
fn test_click_without_toggle_callback_is_unhandled() {
    let mut view = TreeView::new(data(), TreeConfig::new(), CountingHost::default()).unwrap();
    assert!(!view.dispatch(&TreeEvent::Click {
        target: header_id("root")
    }));
}

#[test]
fn test_collapsing_drops_child_instances() {
    let mut view = TreeView::new(data(), TreeConfig::new(), CountingHost::default()).unwrap();
    assert!(view.instance("root/a").is_some());

    let mut collapsed = data();
    collapsed[0].toggled = false;
    view.set_data(collapsed).unwrap();

    assert!(view.instance("root").is_some());
    assert!(view.instance("root/a").is_none());
    assert!(view.node("root/a").is_none());
}

// ============================================================================
// Gesture mount
// ============================================================================

#[test]
fn test_construction_does_not_attach() {
    let moves = Log::default();
    let ends = Log::default();
    let view = TreeView::new(data(), drag_config(&moves, &ends), CountingHost::default()).unwrap();

    assert!(view.host().committed.contains(&header_id("root/a")));
    assert!(view.host().attached.is_empty());
    assert_eq!(
        view.instance("root").unwrap().mount_state(),
        GestureMount::Unmounted
    );
}

#[test]
fn test_attach_happens_once_per_instance() {
    let moves = Log::default();
    let ends = Log::default();
    let mut view =
        TreeView::new(data(), drag_config(&moves, &ends), CountingHost::default()).unwrap();

    for _ in 0..5 {
        view.set_data(data()).unwrap();
    }

    for path in ["root", "root/a", "root/b"] {
        assert_eq!(view.host().attached.get(path), Some(&1), "{path}");
        assert!(view.instance(path).unwrap().is_mounted());
    }
}

#[test]
fn test_failed_attach_is_retried_on_next_update() {
    let moves = Log::default();
    let ends = Log::default();
    let host = CountingHost {
        failures: 3,
        ..Default::default()
    };
    let mut view = TreeView::new(data(), drag_config(&moves, &ends), host).unwrap();

    // Three instances, three failures
    view.set_data(data()).unwrap();
    assert!(!view.instance("root").unwrap().is_mounted());

    view.set_data(data()).unwrap();
    view.set_data(data()).unwrap();
    for path in ["root", "root/a", "root/b"] {
        assert_eq!(view.host().attached.get(path), Some(&2), "{path}");
        assert!(view.instance(path).unwrap().is_mounted());
    }
}

#[test]
fn test_no_attach_without_drag_and_drop() {
    let mut view = TreeView::new(data(), TreeConfig::new(), CountingHost::default()).unwrap();
    view.set_data(data()).unwrap();

    assert!(view.host().attached.is_empty());
    assert!(!view.instance("root").unwrap().is_mounted());
}

#[test]
fn test_dropped_instances_are_detached() {
    let moves = Log::default();
    let ends = Log::default();
    let mut view =
        TreeView::new(data(), drag_config(&moves, &ends), CountingHost::default()).unwrap();
    view.set_data(data()).unwrap();

    let mut collapsed = data();
    collapsed[0].toggled = false;
    view.set_data(collapsed).unwrap();

    let mut detached = view.host().detached.clone();
    detached.sort();
    assert_eq!(detached, vec!["root/a", "root/b"]);
}

// ============================================================================
// Drag
// ============================================================================

fn mounted_view(moves: &Log<DragEvent>, ends: &Log<DragEvent>) -> TreeView<CountingHost> {
    let mut view =
        TreeView::new(data(), drag_config(moves, ends), CountingHost::default()).unwrap();
    view.set_data(data()).unwrap();
    view
}

#[test]
fn test_drag_moves_accumulate_offset() {
    let moves = Log::default();
    let ends = Log::default();
    let mut view = mounted_view(&moves, &ends);

    assert!(view.dispatch(&TreeEvent::DragMove(DragEvent::new("root/a", 5.0, -3.0))));
    assert!(view.dispatch(&TreeEvent::DragMove(DragEvent::new("root/a", 2.0, 2.0))));

    let tree = view.render().unwrap();
    let item = arbor::element::find_element(&tree, "root/a").unwrap();
    assert_eq!(item.get_data("data-x").map(String::as_str), Some("7"));
    assert_eq!(item.get_data("data-y").map(String::as_str), Some("-1"));
    assert_eq!(
        item.transform.unwrap().to_string(),
        "translate(7px, -1px)"
    );

    let moves = moves.lock().unwrap();
    assert_eq!(moves.len(), 2);
    assert_eq!(moves[0].dx, 5.0);
    assert!(ends.lock().unwrap().is_empty());
}

#[test]
fn test_replaying_moves_gives_same_offset() {
    let steps = [(5.0, -3.0), (2.0, 2.0), (-0.5, 4.0)];
    let mut offsets = Vec::new();

    for _ in 0..2 {
        let mut view = mounted_view(&Log::default(), &Log::default());
        for (dx, dy) in steps {
            view.dispatch(&TreeEvent::DragMove(DragEvent::new("root", dx, dy)));
        }
        offsets.push(view.instance("root").unwrap().offset());
    }

    assert_eq!(offsets[0], offsets[1]);
    assert_eq!(offsets[0].to_string(), "translate(6.5px, 3px)");
}

#[test]
fn test_move_callback_is_optional() {
    let ends = Log::default();
    let recorded = Arc::clone(&ends);
    let config = TreeConfig::new().drag_and_drop(DragAndDrop::new(move |event| {
        recorded.lock().unwrap().push(event.clone())
    }));
    let mut view = TreeView::new(data(), config, CountingHost::default()).unwrap();
    view.set_data(data()).unwrap();

    assert!(view.dispatch(&TreeEvent::DragMove(DragEvent::new("root", 1.0, 1.0))));
    assert!(view.dispatch(&TreeEvent::DragEnd(DragEvent::new("root", 0.0, 0.0))));
    assert_eq!(ends.lock().unwrap().len(), 1);
}

#[test]
fn test_drag_end_reaches_callback() {
    let moves = Log::default();
    let ends = Log::default();
    let mut view = mounted_view(&moves, &ends);

    let end = DragEvent::new("root/b", 0.0, 0.0).at(12.0, 4.0);
    assert!(view.dispatch(&TreeEvent::DragEnd(end.clone())));
    assert_eq!(*ends.lock().unwrap(), vec![end]);
}

#[test]
fn test_drag_on_unmounted_node_is_ignored() {
    let moves = Log::default();
    let ends = Log::default();
    let mut view =
        TreeView::new(data(), drag_config(&moves, &ends), CountingHost::default()).unwrap();

    assert!(!view.dispatch(&TreeEvent::DragMove(DragEvent::new("root", 3.0, 3.0))));
    assert!(moves.lock().unwrap().is_empty());
    assert!(!view.instance("root").unwrap().has_moved());
}

// ============================================================================
// Interactions
// ============================================================================

#[test]
fn test_attach_requires_committed_element() {
    let mut host = Interactions::new();
    assert_eq!(
        host.attach_draggable("root", DraggableOptions::default()),
        Err(GestureError::TargetNotMounted("root".to_string()))
    );

    host.commit(&Element::list_item().id("root"));
    assert!(host.attach_draggable("root", DraggableOptions::default()).is_ok());
    assert_eq!(
        host.options("root"),
        Some(DraggableOptions {
            inertia: true,
            auto_scroll: true
        })
    );
}

#[test]
fn test_press_and_release_in_place_clicks_header() {
    let toggles: Log<(Option<String>, bool)> = Arc::default();
    let recorded = Arc::clone(&toggles);
    let config = TreeConfig::new().on_toggle(move |node, toggled| {
        recorded.lock().unwrap().push((node.id.clone(), toggled));
    });
    let mut view = TreeView::new(data(), config, Interactions::new()).unwrap();

    let header = header_id("root/b");
    let hit = |_: u16, _: u16| Some(header.clone());
    assert!(!view.handle_mouse(&mouse(MouseEventKind::Down(MouseButton::Left), 3, 2), hit));
    assert!(view.handle_mouse(&mouse(MouseEventKind::Up(MouseButton::Left), 3, 2), hit));

    assert_eq!(*toggles.lock().unwrap(), vec![(Some("b".to_string()), true)]);
}

#[test]
fn test_mouse_drag_moves_node_root() {
    let moves = Log::default();
    let ends = Log::default();
    let mut view = TreeView::new(data(), drag_config(&moves, &ends), Interactions::new()).unwrap();
    view.set_data(data()).unwrap();

    // Pressing the header drags the list item around it
    let header = header_id("root/a");
    let hit = |_: u16, _: u16| Some(header.clone());
    view.handle_mouse(&mouse(MouseEventKind::Down(MouseButton::Left), 2, 1), hit);
    assert!(view.handle_mouse(&mouse(MouseEventKind::Drag(MouseButton::Left), 5, 1), hit));
    assert!(view.handle_mouse(&mouse(MouseEventKind::Drag(MouseButton::Left), 5, 3), hit));
    assert!(view.handle_mouse(&mouse(MouseEventKind::Up(MouseButton::Left), 5, 3), hit));

    let moves = moves.lock().unwrap();
    assert_eq!(moves.len(), 2);
    assert!(moves.iter().all(|event| event.target == "root/a"));
    assert_eq!((moves[0].dx, moves[0].dy), (3.0, 0.0));
    assert_eq!((moves[1].dx, moves[1].dy), (0.0, 2.0));

    let ends = ends.lock().unwrap();
    assert_eq!(ends.len(), 1);
    assert_eq!((ends[0].x, ends[0].y), (5.0, 3.0));

    let offset = view.instance("root/a").unwrap().offset();
    assert_eq!((offset.x, offset.y), (3.0, 2.0));
}

#[test]
fn test_drag_before_mount_does_nothing() {
    let moves = Log::default();
    let ends = Log::default();
    let mut view = TreeView::new(data(), drag_config(&moves, &ends), Interactions::new()).unwrap();

    let header = header_id("root/a");
    let hit = |_: u16, _: u16| Some(header.clone());
    view.handle_mouse(&mouse(MouseEventKind::Down(MouseButton::Left), 2, 1), hit);
    assert!(!view.handle_mouse(&mouse(MouseEventKind::Drag(MouseButton::Left), 6, 1), hit));
    assert!(moves.lock().unwrap().is_empty());
}

#[test]
fn test_drag_released_elsewhere_is_not_a_click() {
    let moves = Log::default();
    let ends = Log::default();
    let toggles: Log<(Option<String>, bool)> = Arc::default();
    let recorded = Arc::clone(&toggles);
    let config = drag_config(&moves, &ends).on_toggle(move |node, toggled| {
        recorded.lock().unwrap().push((node.id.clone(), toggled));
    });
    // No update yet, so nothing is draggable
    let mut view = TreeView::new(data(), config, Interactions::new()).unwrap();

    let header = header_id("root/a");
    let hit = |_: u16, _: u16| Some(header.clone());
    view.handle_mouse(&mouse(MouseEventKind::Down(MouseButton::Left), 2, 1), hit);
    view.handle_mouse(&mouse(MouseEventKind::Drag(MouseButton::Left), 9, 5), hit);
    assert!(!view.handle_mouse(&mouse(MouseEventKind::Up(MouseButton::Left), 9, 5), hit));

    assert!(toggles.lock().unwrap().is_empty());
    assert!(ends.lock().unwrap().is_empty());
    assert!(!view.host().is_pressed());
}

// ============================================================================
// Paths
// ============================================================================

fn toggle_log() -> (Log<(Option<String>, bool)>, TreeConfig) {
    let toggles: Log<(Option<String>, bool)> = Arc::default();
    let recorded = Arc::clone(&toggles);
    let config = TreeConfig::new().on_toggle(move |node, toggled| {
        recorded.lock().unwrap().push((node.id.clone(), toggled));
    });
    (toggles, config)
}

#[test]
fn test_numeric_id_and_position_keep_separate_paths() {
    let roots = vec![Node::new("root")
        .id("root")
        .toggled(true)
        .child(Node::new("first").id("1"))
        .child(Node::new("second"))];
    let (toggles, config) = toggle_log();
    let mut view = TreeView::new(roots, config, CountingHost::default()).unwrap();

    assert_eq!(view.node("root/1").unwrap().name, "first");
    assert_eq!(view.node("root/#1").unwrap().name, "second");
    assert!(view.instance("root/1").is_some());
    assert!(view.instance("root/#1").is_some());

    assert!(view.dispatch(&TreeEvent::Click {
        target: header_id("root/1")
    }));
    assert_eq!(*toggles.lock().unwrap(), vec![(Some("1".to_string()), true)]);
}

#[test]
fn test_duplicate_ids_stay_reachable() {
    let roots = vec![Node::new("root")
        .id("root")
        .toggled(true)
        .child(Node::new("left").id("x"))
        .child(Node::new("right").id("x"))];
    let mut view = TreeView::new(roots, TreeConfig::new(), CountingHost::default()).unwrap();

    assert_eq!(view.node("root/x").unwrap().name, "left");
    assert_eq!(view.node("root/x~1").unwrap().name, "right");
    assert_eq!(view.instances().len(), 3);
    assert!(view.render().is_ok());
}

#[test]
fn test_ids_with_path_characters_are_escaped() {
    let roots = vec![Node::new("root")
        .id("root")
        .toggled(true)
        .child(Node::new("odd").id("a/b:header"))
        .child(Node::new("hash").id("#0"))];
    let (toggles, config) = toggle_log();
    let mut view = TreeView::new(roots, config, CountingHost::default()).unwrap();

    assert_eq!(view.node("root/a%2Fb%3Aheader").unwrap().name, "odd");
    assert_eq!(view.node("root/%230").unwrap().name, "hash");
    assert!(view.node("root/a").is_none());

    assert!(view.dispatch(&TreeEvent::Click {
        target: header_id("root/a%2Fb%3Aheader")
    }));
    assert_eq!(
        *toggles.lock().unwrap(),
        vec![(Some("a/b:header".to_string()), true)]
    );
}

#[test]
fn test_empty_id_falls_back_to_position() {
    let roots = vec![Node::new("root")
        .id("root")
        .toggled(true)
        .child(Node::new("blank").id(""))];
    let view = TreeView::new(roots, TreeConfig::new(), CountingHost::default()).unwrap();

    assert_eq!(view.node("root/#0").unwrap().name, "blank");
    assert!(view.paths().all(|path| !path.ends_with('/')));
}

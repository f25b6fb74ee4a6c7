use std::fs::File;
use std::sync::{Arc, Mutex};

use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use simplelog::{Config, LevelFilter, WriteLogger};

use arbor::element::{walk, Content};
use arbor::tree::render::header_id;
use arbor::{DragAndDrop, Element, Interactions, Node, Tag, TreeConfig, TreeView};

const DATA: &str = r#"{
    "id": "root",
    "name": "project",
    "toggled": true,
    "children": [
        {
            "id": "src",
            "name": "src",
            "children": [
                { "id": "lib", "name": "lib.rs" },
                { "id": "main", "name": "main.rs" }
            ]
        },
        { "id": "docs", "name": "docs", "loading": true, "children": [] },
        { "id": "toml", "name": "Cargo.toml" }
    ]
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log_file = File::create("file_tree.log")?;
    WriteLogger::init(LevelFilter::Trace, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut data = vec![Node::from_json(DATA)?];

    // Toggles requested by the view, applied between renders.
    let toggles: Arc<Mutex<Vec<(Option<String>, bool)>>> = Arc::default();
    let recorded = Arc::clone(&toggles);

    let config = TreeConfig::new()
        .on_toggle(move |node, toggled| {
            recorded
                .lock()
                .expect("toggle log poisoned")
                .push((node.id.clone(), toggled));
        })
        .drag_and_drop(
            DragAndDrop::new(|event| println!("dropped {} at ({}, {})", event.target, event.x, event.y))
                .on_move(|event| println!("moving {} by ({}, {})", event.target, event.dx, event.dy)),
        );

    let mut view = TreeView::new(data.clone(), config, Interactions::new())?;

    // Click the "src" header.
    let src_header = header_id("root/src");
    view.handle_mouse(&mouse(MouseEventKind::Down(MouseButton::Left), 0, 1), |_, _| {
        Some(src_header.clone())
    });
    view.handle_mouse(&mouse(MouseEventKind::Up(MouseButton::Left), 0, 1), |_, _| {
        Some(src_header.clone())
    });

    for (id, toggled) in toggles.lock().expect("toggle log poisoned").drain(..) {
        let Some(id) = id else { continue };
        if let Some(node) = data[0].find_mut(&id) {
            node.toggled = toggled;
        }
    }
    let tree = view.set_data(data.clone())?;
    print_tree(&tree);

    // Drag the "toml" row two cells right and one down.
    let row = header_id("root/toml");
    view.handle_mouse(&mouse(MouseEventKind::Down(MouseButton::Left), 2, 6), |_, _| {
        Some(row.clone())
    });
    view.handle_mouse(&mouse(MouseEventKind::Drag(MouseButton::Left), 4, 7), |_, _| None);
    view.handle_mouse(&mouse(MouseEventKind::Up(MouseButton::Left), 4, 7), |_, _| None);

    print_tree(&view.render()?);
    Ok(())
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn print_tree(root: &Element) {
    let mut depth = std::collections::HashMap::new();
    walk(root, &mut |element, parent| {
        let level = parent.map_or(0, |p| depth.get(&p.id).copied().unwrap_or(0) + 1);
        depth.insert(element.id.clone(), level);
        let indent = "  ".repeat(level);
        match (&element.tag, &element.content) {
            (Tag::Text, Content::Text(text)) => println!("{indent}{text}"),
            (tag, _) => match element.transform {
                Some(offset) => println!("{indent}{tag:?} {} [{offset}]", element.id),
                None => println!("{indent}{tag:?} {}", element.id),
            },
        }
    });
}

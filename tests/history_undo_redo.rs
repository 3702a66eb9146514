use std::cell::Cell;
use std::rc::Rc;

use color_scheme_editor::style::{AmbientColor, ChunkStyle, SchemeColor, StyleValue};
use color_scheme_editor::tree::{PropertyDescription, StyleTreeView, TreeStore, TreeView};
use color_scheme_editor::{ColorSchemeHistory, HistoryEvent, NodeId, StyleCommand};

const KEYWORD: &str = "Keyword";
const GUTTER: &str = "Gutter";

const RED: SchemeColor = SchemeColor::rgb(0xff, 0x00, 0x00);
const GREEN: SchemeColor = SchemeColor::rgb(0x00, 0xff, 0x00);
const BLUE: SchemeColor = SchemeColor::rgb(0x00, 0x00, 0xff);
const YELLOW: SchemeColor = SchemeColor::rgb(0xff, 0xff, 0x00);
const BLACK: SchemeColor = SchemeColor::rgb(0x00, 0x00, 0x00);
const WHITE: SchemeColor = SchemeColor::rgb(0xff, 0xff, 0xff);
const GRAY: SchemeColor = SchemeColor::rgb(0xa0, 0xa0, 0xa0);

// Helper to create a view with one chunk style row and one ambient color row
fn create_test_view() -> (StyleTreeView, NodeId, NodeId) {
    let mut store = TreeStore::new();
    let chunks = store.add_category("Syntax highlighting");
    let keyword = store.add_style(
        chunks,
        PropertyDescription {
            name: KEYWORD.to_owned(),
            description: "Language keywords".to_owned(),
        },
        StyleValue::Chunk(ChunkStyle::with_foreground(RED)),
    );
    let ambient = store.add_category("Ambient colors");
    let gutter = store.add_style(
        ambient,
        PropertyDescription {
            name: GUTTER.to_owned(),
            description: String::new(),
        },
        StyleValue::Ambient(AmbientColor::new(WHITE)),
    );
    (StyleTreeView::new(store), keyword, gutter)
}

fn foreground(view: &StyleTreeView, node: NodeId) -> Option<SchemeColor> {
    view.data_source()
        .and_then(|store| store.value(node))
        .and_then(StyleValue::as_chunk)
        .and_then(|style| style.foreground)
}

fn recolor(from: SchemeColor, to: SchemeColor) -> StyleCommand {
    StyleCommand::chunk_style(
        KEYWORD,
        ChunkStyle::with_foreground(from),
        ChunkStyle::with_foreground(to),
    )
}

fn count_events(history: &mut ColorSchemeHistory) -> Rc<Cell<usize>> {
    let count = Rc::new(Cell::new(0));
    let counter = Rc::clone(&count);
    history.subscribe(move |event: &HistoryEvent| {
        assert_eq!(*event, HistoryEvent::CanUndoRedoChanged);
        counter.set(counter.get() + 1);
    });
    count
}

#[test]
fn test_add_command_applies_new_value() {
    let (mut view, keyword, _) = create_test_view();
    let mut history = ColorSchemeHistory::new();

    history.add_command(recolor(RED, BLUE), &mut view);

    assert_eq!(foreground(&view, keyword), Some(BLUE));
    assert!(history.can_undo());
    assert!(!history.can_redo());
}

#[test]
fn test_undo_undo_redo_walks_the_edit_sequence() {
    let (mut view, keyword, _) = create_test_view();
    let mut history = ColorSchemeHistory::new();

    history.add_command(recolor(RED, BLUE), &mut view);
    history.add_command(recolor(BLUE, GREEN), &mut view);
    assert_eq!(foreground(&view, keyword), Some(GREEN));

    assert!(history.undo(&mut view));
    assert_eq!(foreground(&view, keyword), Some(BLUE));

    assert!(history.undo(&mut view));
    assert_eq!(foreground(&view, keyword), Some(RED));

    assert!(history.redo(&mut view));
    assert_eq!(foreground(&view, keyword), Some(BLUE));

    assert_eq!(history.undo_stack().len(), 1);
    assert_eq!(history.redo_stack().len(), 1);
}

#[test]
fn test_full_undo_then_full_redo_round_trips() {
    let (mut view, keyword, _) = create_test_view();
    let mut history = ColorSchemeHistory::new();
    let colors = [
        RED,
        BLUE,
        GREEN,
        YELLOW,
        BLACK,
    ];

    for pair in colors.windows(2) {
        history.add_command(recolor(pair[0], pair[1]), &mut view);
    }
    let edits = colors.len() - 1;

    for _ in 0..edits {
        assert!(history.undo(&mut view));
    }
    assert_eq!(foreground(&view, keyword), Some(RED));
    assert!(!history.can_undo());

    for _ in 0..edits {
        assert!(history.redo(&mut view));
    }
    assert_eq!(foreground(&view, keyword), Some(BLACK));
    assert!(!history.can_redo());
}

#[test]
fn test_add_command_clears_redo_stack() {
    let (mut view, keyword, _) = create_test_view();
    let mut history = ColorSchemeHistory::new();

    history.add_command(recolor(RED, BLUE), &mut view);
    history.undo(&mut view);
    assert!(history.can_redo());

    history.add_command(recolor(RED, GREEN), &mut view);

    assert!(history.redo_stack().is_empty());
    assert!(!history.can_redo());
    assert!(!history.redo(&mut view));
    assert_eq!(foreground(&view, keyword), Some(GREEN));
}

#[test]
fn test_undo_and_redo_on_empty_stacks_are_no_ops() {
    let (mut view, keyword, _) = create_test_view();
    let mut history = ColorSchemeHistory::new();
    let events = count_events(&mut history);

    assert!(!history.undo(&mut view));
    assert!(!history.redo(&mut view));

    assert_eq!(events.get(), 0);
    assert_eq!(foreground(&view, keyword), Some(RED));
    assert_eq!(view.selected(), None);
    assert_eq!(view.scroll_target(), None);
}

#[test]
fn test_notification_fires_once_per_successful_operation() {
    let (mut view, _, _) = create_test_view();
    let mut history = ColorSchemeHistory::new();
    let events = count_events(&mut history);

    history.add_command(recolor(RED, BLUE), &mut view);
    assert_eq!(events.get(), 1);

    history.undo(&mut view);
    assert_eq!(events.get(), 2);

    history.undo(&mut view);
    assert_eq!(events.get(), 2);

    history.redo(&mut view);
    assert_eq!(events.get(), 3);

    history.redo(&mut view);
    assert_eq!(events.get(), 3);
}

#[test]
fn test_every_subscriber_is_notified() {
    let (mut view, _, _) = create_test_view();
    let mut history = ColorSchemeHistory::new();
    let first = count_events(&mut history);
    let second = count_events(&mut history);

    history.add_command(recolor(RED, BLUE), &mut view);

    assert_eq!(first.get(), 1);
    assert_eq!(second.get(), 1);
}

#[test]
fn test_undo_and_redo_select_and_scroll_to_row() {
    let (mut view, keyword, gutter) = create_test_view();
    let mut history = ColorSchemeHistory::new();

    history.add_command(recolor(RED, BLUE), &mut view);
    history.add_command(
        StyleCommand::ambient_color(
            GUTTER,
            AmbientColor::new(WHITE),
            AmbientColor::new(GRAY),
        ),
        &mut view,
    );
    // Recording an edit does not move the selection
    assert_eq!(view.selected(), None);

    history.undo(&mut view);
    assert_eq!(view.selected(), Some(gutter));
    assert_eq!(view.take_scroll_target(), Some(gutter));
    assert_eq!(view.scroll_target(), None);

    history.undo(&mut view);
    assert_eq!(view.selected(), Some(keyword));

    history.redo(&mut view);
    assert_eq!(view.selected(), Some(keyword));
    assert_eq!(view.scroll_target(), Some(keyword));
}

#[test]
fn test_ambient_color_commands_restore_old_color() {
    let (mut view, _, gutter) = create_test_view();
    let mut history = ColorSchemeHistory::new();
    let old = AmbientColor::new(WHITE);
    let new = AmbientColor {
        color: SchemeColor::rgb(0x40, 0x40, 0x40),
        second_color: Some(SchemeColor::rgba(0xd0, 0xd0, 0xd0, 0x80)),
        border_color: None,
    };

    history.add_command(StyleCommand::ambient_color(GUTTER, old, new), &mut view);
    let value = |view: &StyleTreeView| view.data_source().and_then(|s| s.value(gutter)).copied();
    assert_eq!(value(&view), Some(StyleValue::Ambient(new)));

    history.undo(&mut view);
    assert_eq!(value(&view), Some(StyleValue::Ambient(old)));
}

#[test]
fn test_unknown_style_still_moves_between_stacks() {
    let (mut view, keyword, _) = create_test_view();
    let mut history = ColorSchemeHistory::new();
    let events = count_events(&mut history);

    let command = StyleCommand::chunk_style(
        "Does not exist",
        ChunkStyle::default(),
        ChunkStyle::with_foreground(BLUE),
    );
    history.add_command(command, &mut view);
    assert!(history.can_undo());
    assert_eq!(foreground(&view, keyword), Some(RED));

    assert!(history.undo(&mut view));
    assert!(history.can_redo());
    assert_eq!(view.selected(), None);
    assert_eq!(events.get(), 2);
}

#[test]
fn test_detached_view_skips_writes() {
    let mut view = StyleTreeView::detached();
    let mut history = ColorSchemeHistory::new();

    history.add_command(recolor(RED, BLUE), &mut view);
    assert!(history.undo(&mut view));
    assert!(history.redo(&mut view));

    assert!(view.data_source().is_none());
    assert_eq!(view.selected(), None);
}

#[test]
fn test_clear_forgets_both_stacks() {
    let (mut view, _, _) = create_test_view();
    let mut history = ColorSchemeHistory::new();
    let events = count_events(&mut history);

    history.clear();
    assert_eq!(events.get(), 0);

    history.add_command(recolor(RED, BLUE), &mut view);
    history.add_command(recolor(BLUE, GREEN), &mut view);
    history.undo(&mut view);
    history.clear();

    assert!(!history.can_undo());
    assert!(!history.can_redo());
    assert_eq!(events.get(), 4);
}

mod common;

use common::{play_all, reduce};
use tictactoe::ui::game::{GameIntent, MoveOrder};
use tictactoe::ui::moves::MoveListView;

#[test]
fn ascending_labels() {
    let view = MoveListView::from_state(&play_all(&[0, 4, 5]));
    assert_eq!(
        view.labels(),
        vec![
            "Go to game start",
            "Go to move #1 (1, 1)",
            "Go to move #2 (2, 2)",
            "You are at move #3",
        ]
    );
    assert_eq!(view.toggle_label(), "Ascending");
}

#[test]
fn current_entry_is_plain_text() {
    let state = reduce(play_all(&[0, 4, 5]), GameIntent::JumpTo { position: 1 });
    let view = MoveListView::from_state(&state);
    let current = view.entry(1).unwrap();
    assert!(current.is_current);
    assert_eq!(current.label, "You are at move #1");
    assert_eq!(current.on_click, None);
    assert_eq!(
        view.entry(3).unwrap().on_click,
        Some(GameIntent::JumpTo { position: 3 })
    );
}

#[test]
fn descending_reverses_display_only() {
    let state = reduce(play_all(&[0, 4, 5]), GameIntent::ToggleOrder);
    let view = MoveListView::from_state(&state);
    assert_eq!(view.order, MoveOrder::Descending);
    assert_eq!(view.toggle_label(), "Descending");
    assert_eq!(
        view.labels(),
        vec![
            "You are at move #3",
            "Go to move #2 (2, 2)",
            "Go to move #1 (1, 1)",
            "Go to game start",
        ]
    );
    assert_eq!(
        view.entry(3).unwrap().on_click,
        Some(GameIntent::JumpTo { position: 0 })
    );
}

#[test]
fn current_marker_follows_position_after_reversal() {
    let state = reduce(play_all(&[0, 4, 5]), GameIntent::JumpTo { position: 1 });
    let state = reduce(state, GameIntent::ToggleOrder);
    let view = MoveListView::from_state(&state);
    // Four entries reversed: position 1 sits on display row 2.
    assert_eq!(view.current_row(), Some(2));
    assert_eq!(view.entry(2).unwrap().position, 1);
    assert_eq!(view.entry(2).unwrap().label, "You are at move #1");
}

#[test]
fn toggling_twice_restores_display() {
    let state = play_all(&[0, 4, 5]);
    let before = MoveListView::from_state(&state);
    let state = reduce(state, GameIntent::ToggleOrder);
    let state = reduce(state, GameIntent::ToggleOrder);
    assert_eq!(MoveListView::from_state(&state), before);
}

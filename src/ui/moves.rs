//! Move-list view: one entry per history position, plus the order toggle.

use crate::game::MoveRecord;
use crate::ui::game::{GameIntent, GameState, MoveOrder};
use crate::ui::layout::{list_row, moves_layout};
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, FOCUS_BORDER, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT,
};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveEntry {
    /// History position this entry stands for, regardless of display order.
    pub position: usize,
    pub label: String,
    pub is_current: bool,
    /// `None` for the current entry, which is plain text.
    pub on_click: Option<GameIntent>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveListView {
    /// Entries in display order.
    pub entries: Vec<MoveEntry>,
    pub order: MoveOrder,
    /// First display row drawn; earlier rows are scrolled out of view.
    pub scroll: usize,
}

impl MoveListView {
    pub fn from_state(state: &GameState) -> Self {
        let current = state.current_position();
        let mut entries: Vec<MoveEntry> = state
            .history()
            .iter()
            .enumerate()
            .map(|(position, record)| {
                let is_current = position == current;
                MoveEntry {
                    position,
                    label: describe(position, record, is_current),
                    is_current,
                    on_click: (!is_current).then_some(GameIntent::JumpTo { position }),
                }
            })
            .collect();
        if state.order() == MoveOrder::Descending {
            entries.reverse();
        }
        Self {
            entries,
            order: state.order(),
            scroll: 0,
        }
    }

    pub fn with_scroll(self, scroll: usize) -> Self {
        Self { scroll, ..self }
    }

    /// Entry shown on display row `row`.
    pub fn entry(&self, row: usize) -> Option<&MoveEntry> {
        self.entries.get(row)
    }

    /// Display row of the current entry.
    pub fn current_row(&self) -> Option<usize> {
        self.entries.iter().position(|entry| entry.is_current)
    }

    pub fn toggle_label(&self) -> &'static str {
        self.order.label()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.entries
            .iter()
            .map(|entry| entry.label.as_str())
            .collect()
    }
}

fn describe(position: usize, record: &MoveRecord, is_current: bool) -> String {
    if is_current {
        return format!("You are at move #{position}");
    }
    match record.coord {
        Some(coord) if position > 0 => format!("Go to move #{position} {coord}"),
        _ => "Go to game start".to_string(),
    }
}

/// Draws the moves pane. `cursor` is the focused display row when the
/// list has keyboard focus.
pub fn render_moves(frame: &mut Frame<'_>, area: Rect, view: &MoveListView, cursor: Option<usize>) {
    let pane_border = if cursor.is_some() {
        FOCUS_BORDER
    } else {
        GLOBAL_BORDER
    };
    frame.render_widget(
        Block::default()
            .title(Span::styled(" Moves ", Style::default().fg(HEADER_TEXT)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(pane_border)),
        area,
    );

    let layout = moves_layout(area);
    let toggle = Line::from(vec![
        Span::styled("Order: ", Style::default().fg(HEADER_SEPARATOR)),
        Span::styled(
            format!("[ {} ]", view.toggle_label()),
            Style::default()
                .fg(HEADER_TEXT)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(toggle), layout.toggle);

    for (row, entry) in view.entries.iter().enumerate().skip(view.scroll) {
        let Some(rect) = list_row(layout.rows, row - view.scroll) else {
            break;
        };
        let mut style = if entry.is_current {
            Style::default()
                .fg(HEADER_TEXT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(HEADER_TEXT)
                .add_modifier(Modifier::UNDERLINED)
        };
        if cursor == Some(row) {
            style = style.bg(ACTIVE_HIGHLIGHT);
        }
        let line = Line::from(vec![
            Span::styled(
                format!("{:>2}. ", row + 1),
                Style::default().fg(HEADER_SEPARATOR),
            ),
            Span::styled(entry.label.clone(), style),
        ]);
        frame.render_widget(Paragraph::new(line), rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Board, Coord};

    #[test]
    fn labels_use_one_based_coordinates() {
        let record = MoveRecord::new(Board::empty(), Coord::from_index(5));
        assert_eq!(describe(3, &record, false), "Go to move #3 (2, 3)");
        assert_eq!(describe(3, &record, true), "You are at move #3");
        assert_eq!(describe(0, &MoveRecord::start(), false), "Go to game start");
    }

    #[test]
    fn fresh_game_lists_only_start() {
        let view = MoveListView::from_state(&GameState::default());
        assert_eq!(view.labels(), vec!["You are at move #0"]);
        assert_eq!(view.entry(0).and_then(|e| e.on_click), None);
        assert_eq!(view.toggle_label(), "Ascending");
    }
}

//! Board view: status line plus the nine clickable cells.

use crate::game::{evaluate, Board, Cell, Outcome, Player, CELL_COUNT};
use crate::ui::game::{GameIntent, GameState};
use crate::ui::layout::board_cells;
use crate::ui::theme::{
    FOCUS_BORDER, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MARK_O, MARK_X, WIN_HIGHLIGHT,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use std::fmt;

/// Status line shown above the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Winner(Player),
    Draw,
    NextPlayer(Player),
}

impl Status {
    pub fn new(outcome: Outcome, next: Player) -> Self {
        match outcome {
            Outcome::Win { player, .. } => Status::Winner(player),
            Outcome::Draw => Status::Draw,
            Outcome::NoResult => Status::NextPlayer(next),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Winner(player) => write!(f, "Winner: {player}"),
            Status::Draw => f.write_str("Draw"),
            Status::NextPlayer(player) => write!(f, "Next player: {player}"),
        }
    }
}

/// What a single board cell shows and does when clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellBinding {
    pub index: usize,
    pub cell: Cell,
    /// Part of the winning line.
    pub highlighted: bool,
    /// `None` when the cell is taken or the game is decided.
    pub on_click: Option<GameIntent>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardView {
    pub status: Status,
    pub cells: [CellBinding; CELL_COUNT],
}

impl BoardView {
    /// Derives the view of `board` with `next` to move.
    pub fn new(board: &Board, next: Player) -> Self {
        let outcome = evaluate(board);
        let line = outcome.winning_line();
        let cells = std::array::from_fn(|index| {
            let cell = board.get(index).unwrap_or_default();
            let playable = !outcome.is_decided() && cell.is_empty();
            CellBinding {
                index,
                cell,
                highlighted: line.is_some_and(|line| line.contains(index)),
                on_click: playable.then_some(GameIntent::Play { index }),
            }
        });
        Self {
            status: Status::new(outcome, next),
            cells,
        }
    }

    pub fn from_state(state: &GameState) -> Self {
        Self::new(state.current_board(), state.next_player())
    }

    pub fn binding(&self, index: usize) -> Option<&CellBinding> {
        self.cells.get(index)
    }

    pub fn highlighted(&self) -> Vec<usize> {
        self.cells
            .iter()
            .filter(|binding| binding.highlighted)
            .map(|binding| binding.index)
            .collect()
    }
}

/// Draws the board pane. `cursor` is the focused cell when the board has
/// keyboard focus.
pub fn render_board(frame: &mut Frame<'_>, area: Rect, view: &BoardView, cursor: Option<usize>) {
    let pane_border = if cursor.is_some() {
        FOCUS_BORDER
    } else {
        GLOBAL_BORDER
    };
    frame.render_widget(
        Block::default()
            .title(Span::styled(" Board ", Style::default().fg(HEADER_TEXT)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(pane_border)),
        area,
    );

    let rects = board_cells(area);
    for (binding, rect) in view.cells.iter().zip(rects) {
        if rect.is_empty() {
            continue;
        }
        let border = if cursor == Some(binding.index) {
            FOCUS_BORDER
        } else {
            HEADER_SEPARATOR
        };
        let mut style = match binding.cell {
            Cell::Empty => Style::default(),
            Cell::Occupied(Player::X) => Style::default().fg(MARK_X).add_modifier(Modifier::BOLD),
            Cell::Occupied(Player::O) => Style::default().fg(MARK_O).add_modifier(Modifier::BOLD),
        };
        if binding.highlighted {
            style = style.bg(WIN_HIGHLIGHT);
        }
        let square = Paragraph::new(binding.cell.glyph())
            .alignment(Alignment::Center)
            .style(style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border)),
            );
        frame.render_widget(square, rect);
    }
}

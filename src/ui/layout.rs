//! Screen geometry.
//!
//! Rendering and mouse hit-testing both go through these functions, so a
//! click always lands on the element that was drawn under it.

use crate::game::{CELL_COUNT, SIDE};
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

/// Outer size of one board cell, borders included.
pub const CELL_WIDTH: u16 = 7;
pub const CELL_HEIGHT: u16 = 3;

/// Board pane: the 3x3 grid plus the pane border.
pub const BOARD_PANE_WIDTH: u16 = CELL_WIDTH * SIDE as u16 + 2;

/// Screen split into its four regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub header: Rect,
    pub board: Rect,
    pub moves: Rect,
    pub footer: Rect,
}

/// Inner areas of the moves pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovesLayout {
    /// One-line order toggle.
    pub toggle: Rect,
    /// Area holding one move-list entry per line.
    pub rows: Rect,
}

pub fn layout_regions(area: Rect) -> Regions {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(BOARD_PANE_WIDTH), Constraint::Min(0)])
        .split(body);

    Regions {
        header,
        board: panes[0],
        moves: panes[1],
        footer,
    }
}

/// Area inside a bordered block.
pub fn inner(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

/// Rects of the nine cells inside the board pane, row-major.
///
/// Cells that do not fit are clipped; a cell pushed fully off-screen gets
/// an empty rect and can never be hit.
pub fn board_cells(board_pane: Rect) -> [Rect; CELL_COUNT] {
    let grid = inner(board_pane);
    std::array::from_fn(|index| {
        let row = (index / SIDE) as u16;
        let col = (index % SIDE) as u16;
        let cell = Rect {
            x: grid.x.saturating_add(col * CELL_WIDTH),
            y: grid.y.saturating_add(row * CELL_HEIGHT),
            width: CELL_WIDTH,
            height: CELL_HEIGHT,
        };
        cell.intersection(grid)
    })
}

pub fn moves_layout(moves_pane: Rect) -> MovesLayout {
    let area = inner(moves_pane);
    let toggle = Rect {
        height: area.height.min(1),
        ..area
    };
    // One blank line between the toggle and the list.
    let skip = area.height.min(2);
    let rows = Rect {
        y: area.y + skip,
        height: area.height - skip,
        ..area
    };
    MovesLayout { toggle, rows }
}

/// Rect of the `row`-th move-list line, if it is on screen.
pub fn list_row(rows: Rect, row: usize) -> Option<Rect> {
    let offset = u16::try_from(row).ok()?;
    if offset >= rows.height {
        return None;
    }
    Some(Rect {
        y: rows.y + offset,
        height: 1,
        ..rows
    })
}

/// Index of the cell under the given screen position.
pub fn hit_cell(cells: &[Rect; CELL_COUNT], column: u16, row: u16) -> Option<usize> {
    let position = Position::new(column, row);
    cells.iter().position(|rect| rect.contains(position))
}

/// First entry to draw when only `visible` of `total` entries fit.
///
/// Starting from the window at `offset`, moves it only as far as needed to
/// bring entry `anchor` on screen, and never past the last entry.
pub fn scroll_offset(offset: usize, anchor: usize, visible: usize, total: usize) -> usize {
    if visible == 0 {
        return 0;
    }
    let offset = if anchor < offset {
        anchor
    } else if anchor >= offset + visible {
        anchor + 1 - visible
    } else {
        offset
    };
    offset.min(total.saturating_sub(visible))
}

/// Line of the move list under the given screen position, counted from the
/// top of the visible window.
pub fn hit_row(rows: Rect, column: u16, row: u16) -> Option<usize> {
    if rows.contains(Position::new(column, row)) {
        Some(usize::from(row - rows.y))
    } else {
        None
    }
}

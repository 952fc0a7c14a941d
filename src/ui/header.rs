use crate::game::Player;
use crate::ui::board::Status;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MARK_O, MARK_X, STATUS_OK};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, status: Status) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let status_style = match status {
            Status::Winner(_) => Style::default().fg(STATUS_OK).add_modifier(Modifier::BOLD),
            Status::Draw => Style::default()
                .fg(HEADER_SEPARATOR)
                .add_modifier(Modifier::BOLD),
            Status::NextPlayer(Player::X) => Style::default().fg(MARK_X),
            Status::NextPlayer(Player::O) => Style::default().fg(MARK_O),
        };
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("Tic-Tac-Toe", text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(status.to_string(), status_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

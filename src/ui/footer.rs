use crate::ui::input::KEY_HINTS;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Key hints on the left, crate version on the right.
pub fn render_footer(frame: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let content = block.inner(area);
    frame.render_widget(block, area);

    let version = format!("v{VERSION} ");
    let [hints_area, version_area] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(version.len() as u16),
    ])
    .areas(content);

    let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
    let version = Paragraph::new(Span::styled(version, text_style)).right_aligned();
    frame.render_widget(Paragraph::new(hint_line(text_style)), hints_area);
    frame.render_widget(version, version_area);
}

fn hint_line(text_style: Style) -> Line<'static> {
    let separator = Span::styled(" │ ", Style::default().fg(HEADER_SEPARATOR));
    let mut spans = vec![Span::raw(" ")];
    for (i, (key, action)) in KEY_HINTS.iter().enumerate() {
        if i > 0 {
            spans.push(separator.clone());
        }
        spans.push(Span::styled(format!("{key}: {action}"), text_style));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hints_list_every_binding() {
        let text: String = hint_line(Style::default())
            .spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect();
        assert_eq!(
            text,
            " 1-9: Play │ Arrows: Move │ Tab: Pane │ Enter: Pick │ S: Sort │ Q: Quit"
        );
    }
}

use crate::ui::app::App;
use crate::ui::board::render_board;
use crate::ui::footer::render_footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::moves::render_moves;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let regions = layout_regions(frame.area());
    let board = app.board_view();

    frame.render_widget(Header::new().widget(board.status), regions.header);
    frame.render_widget(Clear, regions.board);
    frame.render_widget(Clear, regions.moves);
    render_board(frame, regions.board, &board, app.board_cursor());
    render_moves(frame, regions.moves, &app.moves_view(), app.moves_cursor());
    render_footer(frame, regions.footer);
}

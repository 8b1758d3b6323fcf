//! Panel showing log messages

use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders};
use tui_logger::TuiLoggerWidget;

use crate::theme::Theme;

pub const LOG_BLOCK_HEIGHT: u16 = 12;

// Draw the logs panel
pub fn draw_logs<'a>(theme: &Theme) -> TuiLoggerWidget<'a> {
    TuiLoggerWidget::default()
        .style_error(Style::default().fg(Color::Red))
        .style_warn(Style::default().fg(Color::Yellow))
        .style_info(Style::default().fg(Color::Blue))
        .style_debug(Style::default().fg(Color::Green))
        .style_trace(Style::default().fg(Color::Gray))
        .block(
            Block::default()
                .title("Logs")
                .borders(Borders::ALL)
                .border_set(theme.border_set())
                .border_style(theme.border_style()),
        )
        .style(Style::default().bg(theme.roles.background))
}

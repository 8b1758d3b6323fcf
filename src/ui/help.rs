// ui/help.rs

//! Panel with contextual help

use ratatui::layout::Constraint;
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::block::Block;
use ratatui::widgets::{Borders, Cell, Row, Table};

use crate::app::actions::Actions;
use crate::theme::Theme;

const HELP_KEY_WIDTH: u16 = 11;
const HELP_ACTION_WIDTH: u16 = 20;
pub const HELP_WIDTH: u16 = HELP_KEY_WIDTH + HELP_ACTION_WIDTH;

/// Draw the help panel as a `Table` containing available keys and
/// their associated `Action`
pub fn draw_help<'a>(actions: &Actions, theme: &Theme) -> Table<'a> {
    let key_style = theme.heading();
    let help_style = theme.muted();

    let mut rows = vec![];
    for action in actions.actions().iter() {
        let mut first = true;
        for key in action.keys() {
            let help = if first {
                first = false;
                action.to_string()
            } else {
                String::from("")
            };
            let row = Row::new(vec![
                Cell::from(Span::styled(key.to_string(), key_style)),
                Cell::from(Span::styled(help, help_style)),
            ]);
            rows.push(row);
        }
    }

    Table::new(
        rows,
        [
            Constraint::Length(HELP_KEY_WIDTH),
            Constraint::Min(HELP_ACTION_WIDTH),
        ],
    )
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_set(theme.border_set())
            .border_style(theme.border_style())
            .style(Style::default().bg(theme.roles.background))
            .title("Help"),
    )
    .column_spacing(1)
}

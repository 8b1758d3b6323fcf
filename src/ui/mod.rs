// ui/mod.rs

//! Root container: composes the five page sections, in order, inside the
//! themed page frame, plus the optional help and log panels.

use log::*;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Text};
use ratatui::widgets::block::Block;
use ratatui::widgets::{Borders, Paragraph};
use ratatui::Frame;

mod help;
mod logs;

use crate::app::state::AppState;
use crate::content;
use crate::sections::{self, CONTENT_WIDTH};
use help::{draw_help, HELP_WIDTH};
use logs::{draw_logs, LOG_BLOCK_HEIGHT};

const PAGE_MIN_HEIGHT: u16 = 10;
// content plus frame and one column of breathing room on each side
const PAGE_MIN_WIDTH: u16 = CONTENT_WIDTH as u16 + 4;

/// Render all blocks.
pub fn render(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();
    check_size(&area, state);

    let mut app_constraints = vec![Constraint::Min(PAGE_MIN_HEIGHT)];
    if state.show_logs {
        app_constraints.push(Constraint::Length(LOG_BLOCK_HEIGHT));
    }

    // Vertical layout
    let app_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(app_constraints)
        .split(area);

    // Body: page, optional help column
    let mut body_constraints = vec![Constraint::Min(PAGE_MIN_WIDTH)];
    if state.show_help {
        body_constraints.push(Constraint::Length(HELP_WIDTH));
    }

    let body_columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(body_constraints)
        .split(app_rows[0]);

    // The page
    let page_area = body_columns[0];
    let lines = sections::page(&state.theme);
    state.set_page_height(lines.len());
    state.set_viewport_height(page_area.height.saturating_sub(2) as usize);
    let page = draw_page(lines, state);
    frame.render_widget(page, page_area);

    // Help
    if state.show_help {
        let help = draw_help(&state.actions, &state.theme);
        frame.render_widget(help, body_columns[1]);
    }

    // Logs
    if state.show_logs {
        let logs = draw_logs(&state.theme);
        frame.render_widget(logs, app_rows[1]);
    }
}

/// The scrollable page paragraph inside its drawing-sheet frame.
fn draw_page<'a>(lines: Vec<Line<'a>>, state: &AppState) -> Paragraph<'a> {
    let theme = &state.theme;
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(theme.border_style())
        .style(Style::default().bg(theme.roles.background));
    if theme.motifs.annotations {
        block = block
            .title_style(theme.muted())
            .title_top(Line::from(content::DRAWING_NO).right_aligned())
            .title_bottom(Line::from(content::SCALE_NOTE).left_aligned());
    }
    Paragraph::new(Text::from(lines))
        .style(theme.text())
        .block(block)
        .scroll((state.scroll(), 0))
}

/// Logs warnings when terminal size constraints are not respected.
fn check_size(rect: &Rect, state: &AppState) {
    let mut min_width = PAGE_MIN_WIDTH;
    if state.show_help {
        min_width += HELP_WIDTH
    };
    if rect.width < min_width {
        warn!("Require width >= {}, (got {})", min_width, rect.width);
    }

    let mut min_height = PAGE_MIN_HEIGHT;
    if state.show_logs {
        min_height += LOG_BLOCK_HEIGHT
    };
    if rect.height < min_height {
        warn!("Require height >= {}, (got {})", min_height, rect.height);
    }
}

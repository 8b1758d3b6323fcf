//! Solution: lede plus the three numbered method cards.

use ratatui::text::{Line, Span};

use super::{framed, gap, heading, rule, CONTENT_WIDTH};
use crate::content::{self, Card};
use crate::theme::Theme;

/// Width annotation carried by each card under the annotations motif.
const CARD_WIDTH_LABEL: &str = "W:280px";

pub(super) fn lines(theme: &Theme) -> Vec<Line<'static>> {
    let mut out = vec![gap(theme), heading(theme, 3, "The Solution"), gap(theme)];

    out.push(Line::from(vec![
        Span::styled(content::SOLUTION_LEAD, theme.text()),
        Span::raw(" "),
        Span::styled(content::SOLUTION_LEAD_EMPHASIS, theme.emphasis()),
    ]));
    out.push(gap(theme));

    for card in content::SOLUTION_CARDS.iter() {
        out.extend(framed(theme, card_body(theme, card)));
        out.push(gap(theme));
    }
    out.push(rule(theme));
    out
}

fn card_body(theme: &Theme, card: &Card) -> Vec<Line<'static>> {
    let inner_width = CONTENT_WIDTH - 4;
    let num_line = if theme.motifs.annotations {
        // Right-align the width annotation against the card edge.
        let pad = inner_width
            .saturating_sub(card.num.len())
            .saturating_sub(CARD_WIDTH_LABEL.len());
        Line::from(vec![
            Span::styled(card.num, theme.muted()),
            Span::raw(" ".repeat(pad)),
            Span::styled(CARD_WIDTH_LABEL, theme.muted()),
        ])
    } else {
        Line::from(Span::styled(card.num, theme.muted()))
    };

    let mut body = vec![
        num_line,
        Line::from(Span::styled(card.title.to_uppercase(), theme.heading())),
    ];
    // Card copy has two fewer columns on each side than the page body.
    body.extend(
        textwrap::wrap(card.desc, inner_width)
            .into_iter()
            .map(|row| Line::from(Span::styled(row.into_owned(), theme.text()))),
    );
    body
}

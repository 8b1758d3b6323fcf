//! Footer: title, credit and the variant's date/event stamp.

use ratatui::text::{Line, Span};

use super::gap;
use crate::content;
use crate::theme::Theme;

pub(super) fn lines(theme: &Theme) -> Vec<Line<'static>> {
    let separator = if theme.motifs.annotations { " | " } else { " / " };
    vec![
        gap(theme),
        Line::from(vec![
            Span::styled(content::FOOTER_TITLE, theme.muted()),
            Span::styled(separator, theme.muted()),
            Span::styled(content::FOOTER_CREDIT, theme.muted()),
        ]),
        Line::from(Span::styled(content::footer_stamp(theme.id), theme.muted())),
        gap(theme),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    #[test]
    fn stamps_follow_the_variant() {
        let brutalist: String = lines(&Theme::brutalist())
            .iter()
            .map(|l| l.to_string())
            .collect();
        assert!(brutalist.contains("Mini Hackathon 2026"));
        let blueprint: String = lines(&Theme::blueprint())
            .iter()
            .map(|l| l.to_string())
            .collect();
        assert!(blueprint.contains("DWG DATE: 2026-01-16"));
    }
}

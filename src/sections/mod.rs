//! The five page sections
//!
//! Each section is a pure function from a [`Theme`] to styled lines. Copy
//! comes from [`crate::content`] (keyed by theme identity where the variants
//! diverge); styling comes from the theme's roles and motifs. Nothing here
//! performs I/O or can fail.

use enum_iterator::{all, Sequence};
use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::theme::Theme;

mod footer;
mod hero;
mod how_it_works;
mod problem;
mod solution;

/// Character width the page copy is wrapped to.
pub const CONTENT_WIDTH: usize = 72;

/// The page regions, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Sequence)]
pub enum Section {
    Hero,
    Problem,
    Solution,
    HowItWorks,
    Footer,
}

impl Section {
    /// Render this section for the given theme.
    pub fn lines(self, theme: &Theme) -> Vec<Line<'static>> {
        match self {
            Section::Hero => hero::lines(theme),
            Section::Problem => problem::lines(theme),
            Section::Solution => solution::lines(theme),
            Section::HowItWorks => how_it_works::lines(theme),
            Section::Footer => footer::lines(theme),
        }
    }
}

/// Compose the whole page: the five sections in declaration order.
pub fn page(theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for section in all::<Section>() {
        lines.extend(section.lines(theme));
    }
    lines
}

// Shared layout primitives. The two variants of the original page duplicated
// all of this markup; here it is factored once and driven by theme tokens.

/// Wrap a paragraph to the content width.
pub(crate) fn wrapped(text: &str, style: Style) -> Vec<Line<'static>> {
    wrapped_to(text, style, CONTENT_WIDTH)
}

/// Wrap a paragraph to a narrower width, for copy nested inside frames
/// or left borders.
pub(crate) fn wrapped_to(text: &str, style: Style, width: usize) -> Vec<Line<'static>> {
    textwrap::wrap(text, width)
        .into_iter()
        .map(|row| Line::from(Span::styled(row.into_owned(), style)))
        .collect()
}

/// Section heading, with a `[SECTION 0N]` label under the annotations motif.
pub(crate) fn heading(theme: &Theme, number: u8, title: &str) -> Line<'static> {
    let text = if theme.motifs.annotations {
        format!("[SECTION 0{number}] {}", title.to_uppercase())
    } else {
        title.to_uppercase()
    };
    Line::from(Span::styled(text, theme.heading()))
}

/// Full-width horizontal rule, the section's bottom border.
pub(crate) fn rule(theme: &Theme) -> Line<'static> {
    let symbol = theme.border_set().horizontal_bottom;
    Line::from(Span::styled(
        symbol.repeat(CONTENT_WIDTH),
        theme.border_style(),
    ))
}

/// Vertical gap between blocks. Under the grid motif the gap carries the
/// sparse background grid dots of the drawing sheet.
pub(crate) fn gap(theme: &Theme) -> Line<'static> {
    if theme.motifs.grid {
        let dots: String = (0..CONTENT_WIDTH)
            .map(|i| if i % 4 == 0 { '·' } else { ' ' })
            .collect();
        Line::from(Span::styled(dots, theme.grid_style()))
    } else {
        Line::default()
    }
}

/// A block with a left border, used for notes and build steps.
pub(crate) fn left_bordered(theme: &Theme, inner: Vec<Line<'static>>) -> Vec<Line<'static>> {
    let bar = theme.border_set().vertical_left;
    inner
        .into_iter()
        .map(|line| {
            let mut spans = vec![Span::styled(format!("{bar} "), theme.border_style())];
            spans.extend(line.spans);
            Line::from(spans)
        })
        .collect()
}

/// Frame a block of lines with the theme's border symbols.
pub(crate) fn framed(theme: &Theme, inner: Vec<Line<'static>>) -> Vec<Line<'static>> {
    let set = theme.border_set();
    let inner_width = CONTENT_WIDTH - 4;
    let mut out = Vec::with_capacity(inner.len() + 2);
    out.push(Line::from(Span::styled(
        format!(
            "{}{}{}",
            set.top_left,
            set.horizontal_top.repeat(CONTENT_WIDTH - 2),
            set.top_right
        ),
        theme.border_style(),
    )));
    for line in inner {
        let pad = inner_width.saturating_sub(line.width());
        let mut spans = vec![Span::styled(
            format!("{} ", set.vertical_left),
            theme.border_style(),
        )];
        spans.extend(line.spans);
        spans.push(Span::raw(" ".repeat(pad)));
        spans.push(Span::styled(
            format!(" {}", set.vertical_right),
            theme.border_style(),
        ));
        out.push(Line::from(spans));
    }
    out.push(Line::from(Span::styled(
        format!(
            "{}{}{}",
            set.bottom_left,
            set.horizontal_bottom.repeat(CONTENT_WIDTH - 2),
            set.bottom_right
        ),
        theme.border_style(),
    )));
    out
}

/// Code/prompt excerpt, one line per row of the original snippet.
pub(crate) fn code_block(theme: &Theme, code: &'static str) -> Vec<Line<'static>> {
    code.lines()
        .flat_map(|row| {
            textwrap::wrap(row, CONTENT_WIDTH - 4)
                .into_iter()
                .map(|wrapped_row| {
                    Line::from(Span::styled(
                        format!("  {}", wrapped_row.into_owned()),
                        theme.code(),
                    ))
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use rstest::rstest;

    #[rstest]
    #[case::brutalist(Theme::brutalist())]
    #[case::blueprint(Theme::blueprint())]
    fn page_has_five_sections_in_order(#[case] theme: Theme) {
        let sections: Vec<Section> = all::<Section>().collect();
        assert_eq!(
            sections,
            vec![
                Section::Hero,
                Section::Problem,
                Section::Solution,
                Section::HowItWorks,
                Section::Footer
            ]
        );
        for section in sections {
            assert!(
                !section.lines(&theme).is_empty(),
                "{section:?} rendered empty"
            );
        }
    }

    #[rstest]
    #[case::brutalist(Theme::brutalist())]
    #[case::blueprint(Theme::blueprint())]
    fn page_is_idempotent(#[case] theme: Theme) {
        assert_eq!(page(&theme), page(&theme));
    }

    #[test]
    fn framed_lines_have_uniform_width() {
        let theme = Theme::blueprint();
        let block = framed(
            &theme,
            vec![Line::from("01"), Line::from("a longer inner line")],
        );
        for line in &block {
            assert_eq!(line.width(), CONTENT_WIDTH, "ragged frame: {line:?}");
        }
    }

    #[test]
    fn heading_label_follows_annotations_motif() {
        let blueprint = heading(&Theme::blueprint(), 2, "The Problem");
        assert_eq!(blueprint.to_string(), "[SECTION 02] THE PROBLEM");
        let brutalist = heading(&Theme::brutalist(), 2, "The Problem");
        assert_eq!(brutalist.to_string(), "THE PROBLEM");
    }

    #[test]
    fn gap_carries_grid_dots_only_under_the_motif() {
        assert!(gap(&Theme::blueprint()).to_string().contains('·'));
        assert!(!gap(&Theme::brutalist()).to_string().contains('·'));
    }
}

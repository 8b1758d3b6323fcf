//! Problem: the case against open-ended prompts.

use ratatui::text::{Line, Span};

use super::{gap, heading, left_bordered, rule, wrapped};
use crate::content;
use crate::theme::Theme;

pub(super) fn lines(theme: &Theme) -> Vec<Line<'static>> {
    let mut out = vec![gap(theme), heading(theme, 2, "The Problem"), gap(theme)];

    out.extend(wrapped(content::PROBLEM_LEAD, theme.text()));
    out.push(gap(theme));

    out.extend(wrapped(content::PROBLEM_BODY, theme.text()));
    out.push(Line::from(vec![
        Span::styled(content::PROBLEM_EMPHASIS, theme.emphasis()),
        Span::styled(".", theme.text()),
    ]));
    out.push(gap(theme));

    let note = if theme.motifs.annotations {
        format!("NOTE: {}", content::PROBLEM_NOTE)
    } else {
        content::PROBLEM_NOTE.to_string()
    };
    out.extend(left_bordered(
        theme,
        vec![Line::from(Span::styled(note, theme.muted()))],
    ));
    out.push(gap(theme));
    out.push(rule(theme));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    #[test]
    fn emphasized_span_survives_wrapping() {
        let rendered = lines(&Theme::brutalist());
        let joined: String = rendered.iter().map(|l| l.to_string() + "\n").collect();
        assert!(joined.contains("corporate website #4,892"));
    }

    #[test]
    fn note_is_prefixed_only_under_annotations() {
        let blueprint: String = lines(&Theme::blueprint())
            .iter()
            .map(|l| l.to_string() + "\n")
            .collect();
        assert!(blueprint.contains("NOTE: The paradox"));
        let brutalist: String = lines(&Theme::brutalist())
            .iter()
            .map(|l| l.to_string() + "\n")
            .collect();
        assert!(!brutalist.contains("NOTE:"));
        assert!(brutalist.contains("The paradox"));
    }
}

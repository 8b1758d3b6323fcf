//! Hero: kicker, the three-line title with its emphasized middle word,
//! tagline and proof line.

use ratatui::text::{Line, Span};

use super::{gap, rule};
use crate::content;
use crate::theme::Theme;

pub(super) fn lines(theme: &Theme) -> Vec<Line<'static>> {
    let mut out = vec![gap(theme)];

    let kicker = if theme.motifs.annotations {
        format!(
            "{} {}",
            content::SPECIFICATION_TAG,
            content::KICKER.to_uppercase()
        )
    } else {
        content::KICKER.to_uppercase()
    };
    out.push(Line::from(Span::styled(kicker, theme.muted())));
    out.push(gap(theme));

    for (i, word) in content::TITLE_LINES.iter().enumerate() {
        // The middle word carries the emphasis, like the inverted/outlined
        // span of the original title.
        if i == 1 {
            out.push(Line::from(Span::styled(
                format!(" {word} "),
                theme.emphasis(),
            )));
        } else {
            out.push(Line::from(Span::styled(*word, theme.heading())));
        }
    }
    out.push(gap(theme));

    out.push(Line::from(Span::styled(content::TAGLINE, theme.text())));
    out.push(Line::from(Span::styled(
        content::proof_line(theme.id),
        theme.muted(),
    )));
    out.push(gap(theme));
    out.push(rule(theme));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    #[test]
    fn title_words_appear_on_separate_lines() {
        let rendered = lines(&Theme::brutalist());
        let text: Vec<String> = rendered.iter().map(|l| l.to_string()).collect();
        assert!(text.iter().any(|l| l.trim() == "THE"));
        assert!(text.iter().any(|l| l.trim() == "CONSTRAINT"));
        assert!(text.iter().any(|l| l.trim() == "METHOD"));
    }

    #[test]
    fn blueprint_kicker_is_tagged_as_specification() {
        let rendered = lines(&Theme::blueprint());
        assert!(rendered
            .iter()
            .any(|l| l.to_string().starts_with("[SPECIFICATION]")));
    }
}

//! HowItWorks: the build-process steps and the closing verification block.
//!
//! This is the one section whose step list differs between variants: the
//! brutalist page recounts its three constraints, the blueprint page
//! documents all six steps of the actual build.

use ratatui::text::{Line, Span};

use super::{code_block, framed, gap, heading, left_bordered, rule, wrapped_to, CONTENT_WIDTH};
use crate::content::{self, Step};
use crate::theme::{Theme, ThemeId};

pub(super) fn lines(theme: &Theme) -> Vec<Line<'static>> {
    let mut out = vec![
        gap(theme),
        heading(theme, 4, content::how_it_works_title(theme.id)),
    ];
    if theme.motifs.annotations {
        out.push(Line::from(Span::styled(
            "// Not theory. This is exactly what we did.",
            theme.muted(),
        )));
    }
    out.push(gap(theme));

    for step in content::build_steps(theme.id) {
        out.extend(left_bordered(theme, step_body(theme, step)));
        out.push(gap(theme));
    }

    out.extend(outro(theme));
    out.push(gap(theme));
    out.push(rule(theme));
    out
}

fn step_body(theme: &Theme, step: &Step) -> Vec<Line<'static>> {
    let mut body = Vec::new();
    if theme.motifs.annotations {
        body.push(Line::from(Span::styled(
            format!("[{}]", step.id),
            theme.muted(),
        )));
    }
    body.push(Line::from(Span::styled(
        step.title.to_uppercase(),
        theme.heading(),
    )));
    body.extend(wrapped_to(step.desc, theme.text(), CONTENT_WIDTH - 2));
    if let Some(code) = step.code {
        body.extend(code_block(theme, code));
    }
    body
}

/// Closing block: the brutalist meta-truth box, or the blueprint
/// verification panel with its output metrics.
fn outro(theme: &Theme) -> Vec<Line<'static>> {
    match theme.id {
        ThemeId::Brutalist => {
            let mut inner = vec![Line::from(Span::styled(
                content::META_TRUTH_LABEL,
                theme.muted(),
            ))];
            for row in content::META_TRUTH {
                inner.push(Line::from(Span::styled(row, theme.text())));
            }
            framed(theme, inner)
        }
        ThemeId::Blueprint => {
            let mut inner = vec![
                Line::from(Span::styled(content::VERIFICATION_LABEL, theme.muted())),
                Line::from(Span::styled(content::METRICS_LABEL, theme.muted())),
            ];
            let mut spans = Vec::new();
            for (i, metric) in content::OUTPUT_METRICS.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw("   "));
                }
                spans.push(Span::styled(metric.value, theme.emphasis()));
                spans.push(Span::raw(" "));
                spans.push(Span::styled(metric.label, theme.muted()));
            }
            inner.push(Line::from(spans));
            framed(theme, inner)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    fn joined(theme: &Theme) -> String {
        lines(theme).iter().map(|l| l.to_string() + "\n").collect()
    }

    #[test]
    fn blueprint_lists_six_steps_ascending() {
        let text = joined(&Theme::blueprint());
        let mut last = 0;
        for id in ["[4.1]", "[4.2]", "[4.3]", "[4.4]", "[4.5]", "[4.6]"] {
            let pos = text[last..]
                .find(id)
                .unwrap_or_else(|| panic!("{id} missing or out of order"));
            last += pos;
        }
    }

    #[test]
    fn brutalist_lists_three_constraints() {
        let text = joined(&Theme::brutalist());
        assert_eq!(text.matches("CONSTRAINT #").count(), 3);
        assert!(!text.contains("[4.1]"));
    }

    #[test]
    fn outros_differ_per_variant() {
        assert!(joined(&Theme::brutalist()).contains("THE META TRUTH:"));
        let blueprint = joined(&Theme::blueprint());
        assert!(blueprint.contains("// OUTPUT METRICS:"));
        assert!(blueprint.contains("PARALLEL AGENTS"));
    }
}

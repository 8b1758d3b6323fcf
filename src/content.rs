//! Static page copy
//!
//! Every string on the page lives here as a literal constant. Content arrays
//! render in declaration order; nothing in this module is ever mutated.

use crate::theme::ThemeId;

/// One numbered card in the Solution grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub num: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

/// One entry in the HowItWorks list, with an optional prompt/command excerpt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub id: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
    pub code: Option<&'static str>,
}

/// A headline figure in the blueprint verification panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metric {
    pub value: &'static str,
    pub label: &'static str,
}

// Hero

pub const KICKER: &str = "A methodology for AI-assisted frontend development";
pub const TITLE_LINES: [&str; 3] = ["THE", "CONSTRAINT", "METHOD"];
pub const TAGLINE: &str = "Less freedom. Better results.";

pub fn proof_line(id: ThemeId) -> &'static str {
    match id {
        ThemeId::Brutalist => "This page is proof.",
        ThemeId::Blueprint => "[REF: THIS PAGE IS PROOF]",
    }
}

// Problem

pub const PROBLEM_LEAD: &str = "\"Make it look good\" doesn't work.";
pub const PROBLEM_BODY: &str = "Open-ended prompts produce generic results. \
The AI has infinite choices, so it picks the safest ones. You get Bootstrap. \
You get gradient buttons. You get";
pub const PROBLEM_EMPHASIS: &str = "corporate website #4,892";
pub const PROBLEM_NOTE: &str = "The paradox: more freedom = worse output.";

// Solution

pub const SOLUTION_LEAD: &str = "Constrain the problem.";
pub const SOLUTION_LEAD_EMPHASIS: &str = "Liberate the output.";

pub const SOLUTION_CARDS: [Card; 3] = [
    Card {
        num: "01",
        title: "Show",
        desc: "Reference images beat descriptions. Give the AI something to \
               match, not imagine.",
    },
    Card {
        num: "02",
        title: "Limit",
        desc: "Pick your constraints upfront. Two colors. One font. Fewer \
               choices = sharper output.",
    },
    Card {
        num: "03",
        title: "Specify",
        desc: "\"Make the header 20px smaller\" beats \"make it look \
               better.\" Precision over vibes.",
    },
];

// HowItWorks

pub fn how_it_works_title(id: ThemeId) -> &'static str {
    match id {
        ThemeId::Brutalist => "How This Page Was Built",
        ThemeId::Blueprint => "Actual Build Process",
    }
}

const BRUTALIST_STEPS: [Step; 3] = [
    Step {
        id: "1",
        title: "Constraint #1: Brutalist Aesthetic",
        desc: "Instead of \"make it pretty,\" we said: black and white, \
               monospace type, raw borders, no gradients, no shadows. The AI \
               knew exactly what to do.",
        code: Some(
            "\"Use a brutalist style: high contrast, visible grid, \
             intentional roughness\"",
        ),
    },
    Step {
        id: "2",
        title: "Constraint #2: Three Sections",
        desc: "Problem -> Solution -> How. No navigation, no footer links, \
               no scope creep. The structure was locked before the first \
               line of code.",
        code: None,
    },
    Step {
        id: "3",
        title: "Constraint #3: Specific Feedback",
        desc: "When something didn't look right, we didn't say \"fix it.\" \
               We said exactly what to change: padding, font size, spacing.",
        code: Some("\"Make the heading text-7xl instead of text-5xl\""),
    },
];

const BLUEPRINT_STEPS: [Step; 6] = [
    Step {
        id: "4.1",
        title: "Structured Interview -> PRD",
        desc: "Instead of diving into code, Claude interviewed me with \
               targeted questions: What's your setup? How do you guide \
               design? What aesthetic? Each answer constrained the solution \
               space.",
        code: Some(
            "Q: \"What visual style?\" -> A: \"Brutalist/unconventional\"\n\
             Q: \"Key insight?\" -> A: \"Constraints help\"",
        ),
    },
    Step {
        id: "4.2",
        title: "Reusable Command Templates",
        desc: "Pulled proven command templates from another project. The \
               create-prd.md template structured our requirements doc. No \
               reinventing the wheel, leverage what works.",
        code: Some(
            "rsync -av ../obsidian-ai-agent/.agents/reference/upstream-commands/ .agents/",
        ),
    },
    Step {
        id: "4.3",
        title: "Scaffold with Locked Constraints",
        desc: "Tech stack decided upfront: React + Vite + Tailwind. \
               Aesthetic locked: brutalist. Structure locked: Problem -> \
               Solution -> How. No scope creep allowed.",
        code: None,
    },
    Step {
        id: "4.4",
        title: "Parallel Subagents for Variations",
        desc: "3 AI agents ran simultaneously, each generating 5 design \
               variations. 15 options in minutes. Void Mode, Blueprint \
               Technical, Hazard Industrial, Punk Zine, Classified \
               Document...",
        code: Some(
            "Agent A: Electric Magenta, Void Mode, Daily Broadsheet, Corrupt Signal, Phosphor Terminal\n\
             Agent B: Blueprint, Constructivist, Stencil Spray, Concrete Brutalism, Punk Zine\n\
             Agent C: Wireframe Ghost, Massive Type, Broken Grid, Classified, Hazard Industrial",
        ),
    },
    Step {
        id: "4.5",
        title: "Theme Switcher for Rapid Preview",
        desc: "Built a dropdown to toggle between 4 finalist themes live in \
               the browser. No guessing from descriptions, see the actual \
               rendered output before committing.",
        code: None,
    },
    Step {
        id: "4.6",
        title: "Select and Strip",
        desc: "Picked Blueprint. Deleted the other themes, removed the \
               switcher, committed. Ship the winner, discard the rest.",
        code: Some(
            "rm src/themes/void.jsx src/themes/hazard.jsx src/components/ThemeSwitcher.jsx",
        ),
    },
];

/// Step list for the given variant. The brutalist page recounts its three
/// constraints; the blueprint page documents the full six-step build process.
pub fn build_steps(id: ThemeId) -> &'static [Step] {
    match id {
        ThemeId::Brutalist => &BRUTALIST_STEPS,
        ThemeId::Blueprint => &BLUEPRINT_STEPS,
    }
}

pub const META_TRUTH_LABEL: &str = "THE META TRUTH:";
pub const META_TRUTH: [&str; 2] = [
    "This page was built in 1 hour using Claude Code CLI.",
    "The method described is the method used.",
];

pub const VERIFICATION_LABEL: &str = "VERIFICATION";
pub const METRICS_LABEL: &str = "// OUTPUT METRICS:";
pub const OUTPUT_METRICS: [Metric; 4] = [
    Metric { value: "1", label: "HOUR" },
    Metric { value: "15", label: "VARIATIONS" },
    Metric { value: "3", label: "PARALLEL AGENTS" },
    Metric { value: "1", label: "SHIPPED" },
];

// Footer

pub const FOOTER_TITLE: &str = "THE CONSTRAINT METHOD";
pub const FOOTER_CREDIT: &str = "BUILT WITH CLAUDE CODE CLI";

pub fn footer_stamp(id: ThemeId) -> &'static str {
    match id {
        ThemeId::Brutalist => "Mini Hackathon 2026",
        ThemeId::Blueprint => "DWG DATE: 2026-01-16",
    }
}

// Drawing-sheet annotations (blueprint only, gated by the annotations motif)

pub const DRAWING_NO: &str = "DWG-001 REV.B";
pub const SCALE_NOTE: &str = "SCALE: 1:1 | UNITS: PX";
pub const SPECIFICATION_TAG: &str = "[SPECIFICATION]";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solution_cards_are_fixed() {
        assert_eq!(SOLUTION_CARDS.len(), 3);
        let nums: Vec<_> = SOLUTION_CARDS.iter().map(|c| c.num).collect();
        assert_eq!(nums, vec!["01", "02", "03"]);
        let titles: Vec<_> = SOLUTION_CARDS.iter().map(|c| c.title).collect();
        assert_eq!(titles, vec!["Show", "Limit", "Specify"]);
    }

    #[test]
    fn blueprint_steps_ascend() {
        let steps = build_steps(ThemeId::Blueprint);
        assert_eq!(steps.len(), 6);
        let ids: Vec<_> = steps.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["4.1", "4.2", "4.3", "4.4", "4.5", "4.6"]);
    }

    #[test]
    fn brutalist_steps_are_three_constraints() {
        let steps = build_steps(ThemeId::Brutalist);
        assert_eq!(steps.len(), 3);
        assert!(steps.iter().all(|s| s.title.starts_with("Constraint #")));
    }

    #[test]
    fn footer_stamps_differ() {
        assert_ne!(
            footer_stamp(ThemeId::Brutalist),
            footer_stamp(ThemeId::Blueprint)
        );
    }
}

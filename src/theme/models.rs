//! Theme data models

use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::border;

use super::color::hex;

/// The two page variants that can be wired into the root container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeId {
    Brutalist,
    Blueprint,
}

/// Complete theme definition: semantic color roles plus decorative motifs.
///
/// Sections take their styling from `roles` and `motifs`; where the two
/// page variants diverge in copy, the content module keys on `id`.
#[derive(Debug, Clone)]
pub struct Theme {
    pub id: ThemeId,
    /// Theme name for identification
    pub name: &'static str,
    /// Semantic color role assignments
    pub roles: Roles,
    /// Decorative motif flags
    pub motifs: Motifs,
}

/// Semantic color role assignments for page elements
#[derive(Debug, Clone)]
pub struct Roles {
    pub background: Color,
    /// Main body and heading ink
    pub ink: Color,
    /// Secondary text (kickers, notes, card numbers)
    pub muted: Color,
    pub border: Color,
    /// Emphasized inline spans
    pub emphasis: Color,
    /// Code/prompt excerpts
    pub code: Color,
    /// Background grid dots
    pub grid: Color,
}

/// Decorative motif flags, applied uniformly across all sections
#[derive(Debug, Clone)]
pub struct Motifs {
    /// Sparse grid dots in the gaps between blocks
    pub grid: bool,
    /// Technical-drawing annotation labels ([SECTION 02], DWG-001 ...)
    pub annotations: bool,
    /// Emphasized spans render as inverse video instead of a color change
    pub inverted_emphasis: bool,
}

impl Theme {
    /// Monochrome theme: raw heavy borders, inverse-video emphasis,
    /// no decoration beyond contrast.
    pub fn brutalist() -> Self {
        Self {
            id: ThemeId::Brutalist,
            name: "Brutalist",
            roles: Roles {
                background: Color::Reset,
                ink: Color::Reset,
                muted: Color::DarkGray,
                border: Color::Reset,
                emphasis: Color::Reset,
                code: Color::Gray,
                grid: Color::DarkGray,
            },
            motifs: Motifs {
                grid: false,
                annotations: false,
                inverted_emphasis: true,
            },
        }
    }

    /// Technical-drawing theme: amber ink on a dark sheet, dashed borders,
    /// grid dots and annotation labels.
    pub fn blueprint() -> Self {
        Self {
            id: ThemeId::Blueprint,
            name: "Blueprint",
            roles: Roles {
                background: hex("#1a1408"),
                ink: hex("#FFB000"),
                muted: hex("#8a6200"),
                border: hex("#FFB000"),
                emphasis: Color::White,
                code: Color::Gray,
                grid: hex("#3d2e0a"),
            },
            motifs: Motifs {
                grid: true,
                annotations: true,
                inverted_emphasis: false,
            },
        }
    }

    /// The theme wired into this build output.
    ///
    /// Selected at compile time: the `brutalist` feature swaps the page
    /// variant, mirroring the two build configurations of the original page.
    pub fn active() -> Self {
        #[cfg(feature = "brutalist")]
        {
            Theme::brutalist()
        }
        #[cfg(not(feature = "brutalist"))]
        {
            Theme::blueprint()
        }
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.roles.ink)
    }

    pub fn heading(&self) -> Style {
        Style::default()
            .fg(self.roles.ink)
            .add_modifier(Modifier::BOLD)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.roles.muted)
    }

    pub fn emphasis(&self) -> Style {
        if self.motifs.inverted_emphasis {
            Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
        } else {
            Style::default()
                .fg(self.roles.emphasis)
                .add_modifier(Modifier::BOLD)
        }
    }

    pub fn code(&self) -> Style {
        Style::default().fg(self.roles.code)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.roles.border)
    }

    pub fn grid_style(&self) -> Style {
        Style::default().fg(self.roles.grid)
    }

    /// Border symbols used for the page frame, card frames and rules.
    pub fn border_set(&self) -> border::Set {
        match self.id {
            ThemeId::Brutalist => border::THICK,
            ThemeId::Blueprint => DASHED,
        }
    }
}

/// Dashed technical-drawing frame with plus-sign corner brackets.
const DASHED: border::Set = border::Set {
    top_left: "+",
    top_right: "+",
    bottom_left: "+",
    bottom_right: "+",
    vertical_left: "╎",
    vertical_right: "╎",
    horizontal_top: "╌",
    horizontal_bottom: "╌",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brutalist_is_monochrome() {
        let theme = Theme::brutalist();
        for color in [
            theme.roles.background,
            theme.roles.ink,
            theme.roles.muted,
            theme.roles.border,
            theme.roles.emphasis,
            theme.roles.code,
            theme.roles.grid,
        ] {
            assert!(
                !matches!(color, Color::Rgb(..)),
                "brutalist role uses an RGB token: {color:?}"
            );
        }
        assert!(!theme.motifs.grid);
        assert!(!theme.motifs.annotations);
    }

    #[test]
    fn blueprint_uses_amber_tokens() {
        let theme = Theme::blueprint();
        assert_eq!(theme.roles.ink, Color::Rgb(0xff, 0xb0, 0x00));
        assert_eq!(theme.roles.background, Color::Rgb(0x1a, 0x14, 0x08));
        assert_eq!(theme.roles.grid, Color::Rgb(0x3d, 0x2e, 0x0a));
        assert!(theme.motifs.grid);
        assert!(theme.motifs.annotations);
    }

    #[test]
    fn emphasis_styles_differ_per_variant() {
        let brutalist = Theme::brutalist().emphasis();
        let blueprint = Theme::blueprint().emphasis();
        assert!(brutalist.add_modifier.contains(Modifier::REVERSED));
        assert!(!blueprint.add_modifier.contains(Modifier::REVERSED));
        assert_eq!(blueprint.fg, Some(Color::White));
    }

    #[test]
    fn border_sets_are_distinct() {
        assert_ne!(
            Theme::brutalist().border_set().horizontal_top,
            Theme::blueprint().border_set().horizontal_top
        );
    }
}

//! Responsive geometry shared by the stylesheet and the scroll controller.

/// Viewport width classes, from widest to narrowest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    /// Wider than 1200px.
    Wide,
    /// At most 1200px.
    Desktop,
    /// At most 768px.
    Tablet,
    /// At most 480px.
    Mobile,
}

impl Breakpoint {
    pub const ALL: [Breakpoint; 4] = [
        Breakpoint::Wide,
        Breakpoint::Desktop,
        Breakpoint::Tablet,
        Breakpoint::Mobile,
    ];

    #[must_use]
    pub fn for_viewport(width: u32) -> Self {
        match width {
            0..=480 => Breakpoint::Mobile,
            481..=768 => Breakpoint::Tablet,
            769..=1200 => Breakpoint::Desktop,
            _ => Breakpoint::Wide,
        }
    }

    /// The `max-width` of the media query, or `None` for the base rules.
    #[must_use]
    pub fn max_width(self) -> Option<u32> {
        match self {
            Breakpoint::Wide => None,
            Breakpoint::Desktop => Some(1200),
            Breakpoint::Tablet => Some(768),
            Breakpoint::Mobile => Some(480),
        }
    }

    /// Card `(width, height)` in px.
    #[must_use]
    pub fn card_size(self) -> (u32, u32) {
        match self {
            Breakpoint::Wide => (220, 450),
            Breakpoint::Desktop => (200, 430),
            Breakpoint::Tablet => (180, 400),
            Breakpoint::Mobile => (160, 370),
        }
    }

    /// Gap between cards in the strip, px.
    #[must_use]
    pub fn gap(self) -> u32 {
        match self {
            Breakpoint::Wide => 12,
            Breakpoint::Desktop => 10,
            Breakpoint::Tablet => 8,
            Breakpoint::Mobile => 6,
        }
    }

    /// Whole cards visible at once; the strip is sized so none is cut off.
    #[must_use]
    pub fn visible_cards(self) -> u32 {
        match self {
            Breakpoint::Wide => 5,
            Breakpoint::Desktop => 3,
            Breakpoint::Tablet | Breakpoint::Mobile => 2,
        }
    }

    /// Distance one prev/next click scrolls: one card plus one gap.
    #[must_use]
    pub fn scroll_step(self) -> u32 {
        self.card_size().0 + self.gap()
    }

    /// Visible strip width in px.
    #[must_use]
    pub fn strip_width(self) -> u32 {
        let cards = self.visible_cards();
        cards * self.card_size().0 + (cards - 1) * self.gap()
    }

    /// CSS expression for the strip width, e.g. `calc(5 * 220px + 4 * 12px)`.
    #[must_use]
    pub fn strip_width_css(self) -> String {
        let cards = self.visible_cards();
        format!(
            "calc({cards} * {}px + {} * {}px)",
            self.card_size().0,
            cards - 1,
            self.gap()
        )
    }

    /// Total scrollable width of a strip holding `cards` cards.
    #[must_use]
    pub fn content_width(self, cards: usize) -> u32 {
        let cards = u32::try_from(cards).unwrap_or(u32::MAX);
        if cards == 0 {
            return 0;
        }
        cards
            .saturating_mul(self.card_size().0)
            .saturating_add((cards - 1).saturating_mul(self.gap()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_boundaries_are_inclusive_max_widths() {
        assert_eq!(Breakpoint::for_viewport(1920), Breakpoint::Wide);
        assert_eq!(Breakpoint::for_viewport(1201), Breakpoint::Wide);
        assert_eq!(Breakpoint::for_viewport(1200), Breakpoint::Desktop);
        assert_eq!(Breakpoint::for_viewport(769), Breakpoint::Desktop);
        assert_eq!(Breakpoint::for_viewport(768), Breakpoint::Tablet);
        assert_eq!(Breakpoint::for_viewport(481), Breakpoint::Tablet);
        assert_eq!(Breakpoint::for_viewport(480), Breakpoint::Mobile);
        assert_eq!(Breakpoint::for_viewport(320), Breakpoint::Mobile);
    }

    #[test]
    fn scroll_steps_per_breakpoint() {
        let steps: Vec<u32> = Breakpoint::ALL.iter().map(|b| b.scroll_step()).collect();
        assert_eq!(steps, vec![232, 210, 188, 166]);
    }

    #[test]
    fn card_sizes_per_breakpoint() {
        let sizes: Vec<(u32, u32)> = Breakpoint::ALL.iter().map(|b| b.card_size()).collect();
        assert_eq!(sizes, vec![(220, 450), (200, 430), (180, 400), (160, 370)]);
    }

    #[test]
    fn strip_shows_whole_cards_only() {
        assert_eq!(Breakpoint::Wide.strip_width(), 1148);
        assert_eq!(Breakpoint::Desktop.strip_width(), 620);
        assert_eq!(Breakpoint::Tablet.strip_width(), 368);
        assert_eq!(Breakpoint::Mobile.strip_width(), 326);
        assert_eq!(
            Breakpoint::Wide.strip_width_css(),
            "calc(5 * 220px + 4 * 12px)"
        );
        assert_eq!(
            Breakpoint::Tablet.strip_width_css(),
            "calc(2 * 180px + 1 * 8px)"
        );
    }

    #[test]
    fn content_width_counts_gaps_between_cards() {
        assert_eq!(Breakpoint::Wide.content_width(0), 0);
        assert_eq!(Breakpoint::Wide.content_width(1), 220);
        assert_eq!(Breakpoint::Wide.content_width(10), 10 * 220 + 9 * 12);
    }
}

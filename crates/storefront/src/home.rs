//! Home page: hero carousel and colour-theme swatches.

use std::fmt;
use std::str::FromStr;

use lumina_core::ColorVariant;

/// Slides in the hero carousel.
pub const HERO_SLIDES: usize = 4;

/// Labelled buttons beside the hero carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeroButton {
    Start,
    One,
    Two,
    Three,
}

impl HeroButton {
    pub const ALL: [Self; 4] = [Self::Start, Self::One, Self::Two, Self::Three];

    /// Slide the button jumps to. `03` skips to the last slide.
    #[must_use]
    pub const fn slide(self) -> usize {
        match self {
            Self::Start | Self::One => 0,
            Self::Two => 1,
            Self::Three => 3,
        }
    }

    /// Indicator slot next to the button label.
    #[must_use]
    pub const fn position(self) -> usize {
        match self {
            Self::Start => 0,
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Start => "Start",
            Self::One => "01",
            Self::Two => "02",
            Self::Three => "03",
        }
    }

    /// Path segment used by the hero routes.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::One => "01",
            Self::Two => "02",
            Self::Three => "03",
        }
    }
}

impl fmt::Display for HeroButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HeroButton {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|button| button.as_str() == s)
            .ok_or_else(|| format!("invalid hero button: {s}"))
    }
}

/// Hero carousel slide state.
#[derive(Debug, Clone, Default)]
pub struct HeroCarousel {
    current_slide: usize,
    active_button: Option<HeroButton>,
}

impl HeroCarousel {
    /// Start on the first slide with the `Start` label active.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current_slide: 0,
            active_button: Some(HeroButton::Start),
        }
    }

    /// Jump to the slide behind `button`.
    pub const fn press(&mut self, button: HeroButton) {
        self.current_slide = button.slide();
        self.active_button = Some(button);
    }

    /// Timer tick: next slide, wrapping; no button is highlighted.
    pub const fn rotate(&mut self) {
        self.current_slide = (self.current_slide + 1) % HERO_SLIDES;
        self.active_button = None;
    }

    #[must_use]
    pub const fn current_slide(&self) -> usize {
        self.current_slide
    }

    #[must_use]
    pub const fn active_button(&self) -> Option<HeroButton> {
        self.active_button
    }

    /// Indicator slot: the pressed button's, or the slide's own after a tick.
    #[must_use]
    pub const fn indicator_position(&self) -> usize {
        match self.active_button {
            Some(button) => button.position(),
            None => self.current_slide,
        }
    }
}

/// Colour-theme swatches on the home page.
#[derive(Debug, Clone, Default)]
pub struct ThemeSwatches {
    active: Option<ColorVariant>,
}

impl ThemeSwatches {
    #[must_use]
    pub const fn new() -> Self {
        Self { active: None }
    }

    /// Mark `color` as the only active swatch and return its accent.
    pub const fn select(&mut self, color: ColorVariant) -> &'static str {
        self.active = Some(color);
        color.accent()
    }

    #[must_use]
    pub const fn active(&self) -> Option<ColorVariant> {
        self.active
    }
}

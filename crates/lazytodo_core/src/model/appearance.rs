//! Display preferences: theme and the completion reward background color.
//!
//! These values are cosmetic; the list engine only reads `Theme` to decide
//! whether a completion should emit a reward event.

use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::ops::RangeInclusive;
use std::str::FromStr;

static RGB_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^rgb\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*\)$")
        .expect("valid rgb regex")
});

/// Channel range for reward colors; keeps backgrounds pastel.
pub const REWARD_CHANNEL_RANGE: RangeInclusive<u8> = 200..=255;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// Stored or typed theme name that is neither `light` nor `dark`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeParseError(pub String);

impl Display for ThemeParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown theme `{}`; expected light|dark", self.0)
    }
}

impl Error for ThemeParseError {}

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ThemeParseError(other.to_string())),
        }
    }
}

impl Display for Theme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Page background color, persisted as `rgb(r, g, b)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackgroundColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl BackgroundColor {
    /// Picks a light color with every channel in `REWARD_CHANNEL_RANGE`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            r: rng.gen_range(REWARD_CHANNEL_RANGE),
            g: rng.gen_range(REWARD_CHANNEL_RANGE),
            b: rng.gen_range(REWARD_CHANNEL_RANGE),
        }
    }

    /// `random` over the thread-local generator.
    pub fn reward() -> Self {
        Self::random(&mut rand::thread_rng())
    }

    /// Parses the persisted CSS form. Returns `None` for anything else,
    /// including channels above 255.
    pub fn parse(value: &str) -> Option<Self> {
        let captures = RGB_RE.captures(value.trim())?;
        let channel = |index: usize| captures.get(index)?.as_str().parse::<u8>().ok();
        Some(Self {
            r: channel(1)?,
            g: channel(2)?,
            b: channel(3)?,
        })
    }
}

impl Display for BackgroundColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::{BackgroundColor, Theme, ThemeParseError, REWARD_CHANNEL_RANGE};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn theme_parses_and_toggles() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!(
            "sepia".parse::<Theme>(),
            Err(ThemeParseError("sepia".to_string()))
        );
        assert_eq!(
            " Dark ".parse::<Theme>().unwrap_err().to_string(),
            "unknown theme `Dark`; expected light|dark"
        );
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn random_colors_stay_in_reward_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let color = BackgroundColor::random(&mut rng);
            for channel in [color.r, color.g, color.b] {
                assert!(REWARD_CHANNEL_RANGE.contains(&channel));
            }
        }
    }

    #[test]
    fn parse_accepts_css_form_and_rejects_garbage() {
        let color = BackgroundColor::parse("rgb(201, 255,230)").unwrap();
        assert_eq!(color, BackgroundColor { r: 201, g: 255, b: 230 });
        assert_eq!(color.to_string(), "rgb(201, 255, 230)");

        assert!(BackgroundColor::parse("rgb(300, 0, 0)").is_none());
        assert!(BackgroundColor::parse("#ffffff").is_none());
        assert!(BackgroundColor::parse("").is_none());
    }
}

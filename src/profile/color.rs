//! ANSI color support for rendered figures
//!
//! Figures render to plain strings; color is applied per cell through
//! [`Styled`] with automatic terminal capability detection. `Mono` strips
//! all escapes, which keeps figure tests byte-stable.

use std::fmt;

use rand::Rng;

/// Terminal color capability mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// True color (24-bit RGB)
    TrueColor,
    /// 256 color palette
    Color256,
    /// 16 color palette
    Color16,
    /// No color
    #[default]
    Mono,
}

impl ColorMode {
    /// Detect terminal color capability from environment
    pub fn detect() -> Self {
        Self::detect_with_env(
            std::env::var("COLORTERM").ok().as_deref(),
            std::env::var("TERM").ok().as_deref(),
            std::env::var("NO_COLOR").ok().as_deref(),
        )
    }

    /// Detect with explicit environment values (for testing)
    pub fn detect_with_env(
        colorterm: Option<&str>,
        term: Option<&str>,
        no_color: Option<&str>,
    ) -> Self {
        // NO_COLOR takes precedence
        if no_color.is_some() {
            return Self::Mono;
        }

        if let Some(ct) = colorterm {
            if ct.contains("truecolor") || ct.contains("24bit") {
                return Self::TrueColor;
            }
        }

        match term {
            Some(t) if t.contains("256color") => Self::Color256,
            Some(t) if t == "dumb" || t.is_empty() => Self::Mono,
            Some(_) => Self::Color16,
            None => Self::Mono,
        }
    }
}

/// RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Nearest index in the 256-color cube (indices 16-231)
    pub fn to_256(self) -> u8 {
        let r6 = (u16::from(self.r) * 5 / 255) as u8;
        let g6 = (u16::from(self.g) * 5 / 255) as u8;
        let b6 = (u16::from(self.b) * 5 / 255) as u8;
        16 + 36 * r6 + 6 * g6 + b6
    }

    /// Approximate 16-color index: dominant channels pick the base color,
    /// overall brightness picks the bright variant
    pub fn to_16(self) -> u8 {
        let r = self.r > 85;
        let g = self.g > 85;
        let b = self.b > 85;
        let base = match (r, g, b) {
            (true, true, true) => 7,
            (true, true, false) => 3,
            (true, false, true) => 5,
            (false, true, true) => 6,
            (true, false, false) => 1,
            (false, true, false) => 2,
            (false, false, true) => 4,
            (false, false, false) => 0,
        };
        if self.r.max(self.g).max(self.b) > 180 {
            base + 8
        } else {
            base
        }
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

/// A random figure tint, kept away from the dark corner of the cube so the
/// figure stays legible
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Rgb {
    Rgb::new(
        rng.random_range(64..=255),
        rng.random_range(64..=255),
        rng.random_range(64..=255),
    )
}

/// Text styled with a foreground color for one color mode
pub struct Styled<'a> {
    text: &'a str,
    fg: Option<Rgb>,
    mode: ColorMode,
}

impl<'a> Styled<'a> {
    pub fn new(text: &'a str, mode: ColorMode) -> Self {
        Self { text, fg: None, mode }
    }

    pub fn fg(mut self, color: impl Into<Rgb>) -> Self {
        self.fg = Some(color.into());
        self
    }
}

impl fmt::Display for Styled<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(rgb) = self.fg else {
            return write!(f, "{}", self.text);
        };
        if self.mode == ColorMode::Mono {
            return write!(f, "{}", self.text);
        }

        match self.mode {
            ColorMode::TrueColor => {
                write!(f, "\x1b[38;2;{};{};{}m", rgb.r, rgb.g, rgb.b)?;
            }
            ColorMode::Color256 => {
                write!(f, "\x1b[38;5;{}m", rgb.to_256())?;
            }
            ColorMode::Color16 => {
                let code = rgb.to_16();
                if code >= 8 {
                    write!(f, "\x1b[9{}m", code - 8)?;
                } else {
                    write!(f, "\x1b[3{code}m")?;
                }
            }
            ColorMode::Mono => {}
        }
        write!(f, "{}\x1b[0m", self.text)
    }
}

//! Terminal color selection and the console color scheme.

use termcolor::ColorChoice;

/// `--color` setting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    /// Color when stdout is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

/// Resolve the effective color choice.
///
/// `no_color` covers both `--no-color` and a non-empty `NO_COLOR`; it wins
/// over `--color always`.
pub fn resolve_color(mode: ColorMode, no_color: bool, is_tty: bool) -> ColorChoice {
    if no_color {
        return ColorChoice::Never;
    }
    match mode {
        ColorMode::Always => ColorChoice::Always,
        ColorMode::Never => ColorChoice::Never,
        ColorMode::Auto if is_tty => ColorChoice::Auto,
        ColorMode::Auto => ColorChoice::Never,
    }
}

/// Color specs for the console report.
pub mod scheme {
    use termcolor::{Color, ColorSpec};

    /// Banner rule above the title.
    pub fn rule() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan));
        spec
    }

    /// Title line and module headers.
    pub fn title() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        spec
    }

    pub fn pass() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Green)).set_bold(true);
        spec
    }

    pub fn fail() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red)).set_bold(true);
        spec
    }

    /// Secondary text: separators, unearned points, failure messages.
    pub fn dim() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_dimmed(true);
        spec
    }

    pub fn warn() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Yellow));
        spec
    }

    /// Progress bar color for a percentage.
    pub fn progress(percentage: f64) -> ColorSpec {
        let color = if percentage < 40.0 {
            Color::Red
        } else if percentage < 70.0 {
            Color::Yellow
        } else {
            Color::Green
        };
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(color));
        spec
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;

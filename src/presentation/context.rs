use is_terminal::IsTerminal;

use crate::config::ColorMode;

/// How output should be rendered for the current process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    /// Emit ANSI colors
    pub color: bool,
    /// stdin and stdout are both terminals, so rich prompts can be used
    pub interactive: bool,
}

impl UiContext {
    pub fn new(color_mode: ColorMode) -> Self {
        Self::from_env(
            color_mode,
            |key| std::env::var(key).ok(),
            std::io::stdin().is_terminal(),
            std::io::stdout().is_terminal(),
        )
    }

    /// Plain output and line-based prompts; what tests and pipes get.
    pub fn plain() -> Self {
        Self {
            color: false,
            interactive: false,
        }
    }

    pub(crate) fn from_env(
        color_mode: ColorMode,
        get_env: impl Fn(&str) -> Option<String>,
        stdin_tty: bool,
        stdout_tty: bool,
    ) -> Self {
        let term_is_dumb = get_env("TERM")
            .map(|t| t.eq_ignore_ascii_case("dumb"))
            .unwrap_or(false);
        let no_color = get_env("NO_COLOR").is_some();

        let color = match color_mode {
            ColorMode::Never => false,
            ColorMode::Always => true,
            ColorMode::Auto => stdout_tty && !term_is_dumb && !no_color,
        };

        Self {
            color,
            interactive: stdin_tty && stdout_tty && !term_is_dumb,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn auto_colors_a_terminal() {
        let ui = UiContext::from_env(ColorMode::Auto, env(&[("TERM", "xterm")]), true, true);
        assert!(ui.color);
        assert!(ui.interactive);
    }

    #[test]
    fn auto_respects_no_color() {
        let ui = UiContext::from_env(ColorMode::Auto, env(&[("NO_COLOR", "1")]), true, true);
        assert!(!ui.color);
    }

    #[test]
    fn piped_output_is_plain_and_line_based() {
        let ui = UiContext::from_env(ColorMode::Auto, env(&[]), false, false);
        assert_eq!(ui, UiContext::plain());
    }

    #[test]
    fn always_forces_color_even_when_piped() {
        let ui = UiContext::from_env(ColorMode::Always, env(&[]), false, false);
        assert!(ui.color);
        assert!(!ui.interactive);
    }

    #[test]
    fn dumb_terminal_is_not_interactive() {
        let ui = UiContext::from_env(ColorMode::Never, env(&[("TERM", "dumb")]), true, true);
        assert!(!ui.color);
        assert!(!ui.interactive);
    }
}

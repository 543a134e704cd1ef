use clap::{Parser, ValueEnum};
use std::ffi::OsString;

#[derive(Debug, Parser)]
#[command(
    name = "help",
    author,
    about,
    long_about = None,
    disable_version_flag = true,
    after_help = "Examples:\n  help            list everything\n  help docker     list one section (shorthands: g, d)\n  help -v         print version and build info"
)]
pub struct Cli {
    /// When to colorize output
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Section to list, `help <section>`, or `-v`/`--version`/`version`
    #[arg(
        value_name = "ARGS",
        value_parser = clap::value_parser!(OsString),
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub args: Vec<OsString>,
}

impl Cli {
    /// Positional arguments as text; bytes that are not UTF-8 become U+FFFD.
    pub fn positional(&self) -> Vec<String> {
        self.args
            .iter()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Colorize when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Override `console`'s color detection for stdout.
    pub fn apply(self) {
        match self {
            ColorChoice::Auto => {}
            ColorChoice::Always => console::set_colors_enabled(true),
            ColorChoice::Never => console::set_colors_enabled(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("help").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn test_no_args() {
        let cli = parse(&[]);
        assert!(cli.positional().is_empty());
        assert_eq!(cli.color, ColorChoice::Auto);
    }

    #[test]
    fn test_positional_args() {
        assert_eq!(parse(&["help", "docker"]).positional(), vec!["help", "docker"]);
    }

    #[test]
    fn test_version_flags_are_positional() {
        assert_eq!(parse(&["-v"]).positional(), vec!["-v"]);
        assert_eq!(parse(&["--version"]).positional(), vec!["--version"]);
    }

    #[test]
    fn test_unknown_flag_is_positional() {
        assert_eq!(parse(&["--bogus"]).positional(), vec!["--bogus"]);
    }

    #[test]
    fn test_color_option() {
        let cli = parse(&["--color", "never", "docker"]);
        assert_eq!(cli.color, ColorChoice::Never);
        assert_eq!(cli.positional(), vec!["docker"]);
    }

    #[test]
    fn test_double_dash_ends_options() {
        assert_eq!(parse(&["--", "docker"]).positional(), vec!["docker"]);
        assert_eq!(parse(&["--", "--color"]).positional(), vec!["--color"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_argument_accepted() {
        use std::os::unix::ffi::OsStringExt;

        let argv = [
            OsString::from("help"),
            OsString::from_vec(vec![0x66, 0xff]),
        ];
        let cli = Cli::try_parse_from(argv).unwrap();
        assert_eq!(cli.positional(), vec!["f\u{FFFD}"]);
    }

    #[test]
    fn test_invalid_color_rejected() {
        assert!(Cli::try_parse_from(["help", "--color", "sometimes"]).is_err());
    }
}

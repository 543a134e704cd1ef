use tracing::debug;

/// Single-letter aliases and the section each one stands for.
pub const SHORTHANDS: &[(&str, &str)] = &[("g", "general"), ("d", "docker")];

const VERSION_FLAGS: &[&str] = &["-v", "--version", "version"];

/// What a single invocation does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Version,
    /// An empty filter lists everything
    Listing { filter: String },
}

pub fn is_version_flag(arg: &str) -> bool {
    VERSION_FLAGS.contains(&arg)
}

/// Pick the mode from the arguments following the program name.
pub fn resolve_mode(args: &[String]) -> Mode {
    if args.first().is_some_and(|arg| is_version_flag(arg)) {
        return Mode::Version;
    }
    Mode::Listing {
        filter: expand_shorthand(raw_filter(args)),
    }
}

/// Lowercased first argument, or the second one for `help <section>`.
fn raw_filter(args: &[String]) -> String {
    let Some(first) = args.first() else {
        return String::new();
    };
    let filter = first.to_lowercase();
    match args.get(1) {
        Some(second) if filter == "help" => second.to_lowercase(),
        _ => filter,
    }
}

pub fn expand_shorthand(filter: String) -> String {
    match SHORTHANDS.iter().find(|(short, _)| *short == filter) {
        Some((short, section)) => {
            debug!("expanding shorthand {} to {}", short, section);
            section.to_string()
        }
        None => filter,
    }
}

use help_types::Entry;

/// Every command the tool knows about, in display order.
pub static REGISTRY: &[Entry] = &[
    Entry::new(
        "general",
        "dnsreset",
        "When websites are not loading in MacOS browser",
    ),
    Entry::new("docker", "docker ps", "List running containers, -a for all"),
    Entry::new("go", "go build -o app .", "build for macos"),
    Entry::new(
        "go",
        "GOOS=linux GOARCH=amd64 go build -o app-linux .",
        "build for linux",
    ),
    Entry::new(
        "go",
        "GOOS=linux GOARCH=arm64 go build -o app-pi64 .",
        "build for pi",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::SHORTHANDS;

    #[test]
    fn test_sections_are_lowercase() {
        for entry in REGISTRY {
            assert_eq!(entry.section, entry.section.to_lowercase(), "{entry:?}");
            assert!(!entry.section.is_empty());
        }
    }

    #[test]
    fn test_shorthand_targets_exist() {
        for (short, section) in SHORTHANDS {
            assert!(
                REGISTRY.iter().any(|entry| entry.section == *section),
                "shorthand {short} points at missing section {section}"
            );
        }
    }

    #[test]
    fn test_go_section_keeps_build_targets() {
        let go: Vec<&str> = REGISTRY
            .iter()
            .filter(|entry| entry.section == "go")
            .map(|entry| entry.details)
            .collect();
        assert_eq!(go, vec!["build for macos", "build for linux", "build for pi"]);
    }

    #[test]
    fn test_commands_have_no_tabs() {
        for entry in REGISTRY {
            assert!(!entry.command.contains('\t'));
            assert!(!entry.command.contains('\n'));
        }
    }
}

use help_types::{BuildInfo, HelpResult};
use std::io::Write;

pub const TOOL_NAME: &str = "Help Tool";

/// `v<major>.<minor>` of this package.
pub const TOOL_VERSION: &str = concat!(
    "v",
    env!("CARGO_PKG_VERSION_MAJOR"),
    ".",
    env!("CARGO_PKG_VERSION_MINOR")
);

/// Injected by build.rs, see `HELP_BUILD_DATE` and `HELP_GIT_HASH`.
pub const BUILD_INFO: BuildInfo = BuildInfo::new(
    match option_env!("HELP_BUILD_DATE") {
        Some(date) => date,
        None => BuildInfo::DEFAULT_BUILD_DATE,
    },
    match option_env!("HELP_GIT_HASH") {
        Some(hash) => hash,
        None => BuildInfo::DEFAULT_GIT_HASH,
    },
);

pub fn write_version<W: Write>(out: &mut W, build: &BuildInfo) -> HelpResult<()> {
    writeln!(out, "{TOOL_NAME} {TOOL_VERSION}")?;
    writeln!(out, "Version: {build}")?;
    Ok(())
}

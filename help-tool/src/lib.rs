pub mod cli;
pub mod filter;
pub mod listing;
pub mod logging;
pub mod registry;
pub mod style;
pub mod version;

use filter::Mode;
use help_types::{BuildInfo, Decorate, Entry, HelpResult};
use std::io::Write;
use tracing::debug;

/// Handle one invocation against the given registry and build metadata.
///
/// `args` are the positional arguments after the program name.
pub fn run_with<W, D>(
    out: &mut W,
    args: &[String],
    registry: &[Entry],
    build: &BuildInfo,
    deco: &D,
) -> HelpResult<()>
where
    W: Write,
    D: Decorate + ?Sized,
{
    match filter::resolve_mode(args) {
        Mode::Version => {
            debug!("printing version banner");
            version::write_version(out, build)
        }
        Mode::Listing { filter } => {
            debug!("listing with filter {:?}", filter);
            let rows = listing::write_listing(out, registry, &filter, build, deco)?;
            debug!("filter {:?} matched {} entries", filter, rows);
            Ok(())
        }
    }
}

/// Handle one invocation against the built-in registry.
pub fn run<W, D>(out: &mut W, args: &[String], deco: &D) -> HelpResult<()>
where
    W: Write,
    D: Decorate + ?Sized,
{
    run_with(out, args, registry::REGISTRY, &version::BUILD_INFO, deco)
}

use help_types::{BuildInfo, Decorate, Entry, HelpResult, Style};
use std::io::Write;
use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Padding, Style as TableStyle};

/// Printed above the full listing.
pub const ALL_BANNER: &str = "AVAILABLE SCRIPTS (ALL)";

/// Indent before the command column.
const ROW_INDENT: usize = 2;
/// Gap between the widest command of a section and the details column.
const COLUMN_GAP: usize = 3;

/// An empty filter matches every entry; otherwise sections must be equal.
pub fn matches(entry: &Entry, filter: &str) -> bool {
    filter.is_empty() || entry.section == filter
}

pub fn section_header(section: &str) -> String {
    format!("{} COMMANDS", section.to_uppercase())
}

/// Write the entries of `registry` selected by `filter` and return how many
/// rows were printed.
///
/// Each run of entries sharing a section becomes one borderless table under
/// its header, so commands line up within the section. The full listing gets
/// the banner on top and the build footer below.
pub fn write_listing<W, D>(
    out: &mut W,
    registry: &[Entry],
    filter: &str,
    build: &BuildInfo,
    deco: &D,
) -> HelpResult<usize>
where
    W: Write,
    D: Decorate + ?Sized,
{
    let show_all = filter.is_empty();
    if show_all {
        writeln!(out, "{}", deco.decorate(ALL_BANNER, Style::Banner))?;
    }

    let mut rows = 0;
    let mut current_section: Option<&str> = None;
    let mut section_rows: Option<Builder> = None;

    for entry in registry.iter().filter(|entry| matches(entry, filter)) {
        if current_section != Some(entry.section) {
            if let Some(section) = section_rows.take() {
                write_rows(out, section)?;
            }
            current_section = Some(entry.section);
            writeln!(out)?;
            writeln!(
                out,
                "{}",
                deco.decorate(&section_header(entry.section), Style::Header)
            )?;
        }

        section_rows.get_or_insert_with(Builder::default).push_record([
            deco.decorate(entry.command, Style::Command),
            deco.decorate(entry.details, Style::Dim),
        ]);
        rows += 1;
    }
    if let Some(section) = section_rows {
        write_rows(out, section)?;
    }

    if show_all {
        writeln!(out)?;
        writeln!(out, "Version: {build}")?;
    }
    Ok(rows)
}

/// Render one section's rows as an aligned, borderless table.
fn write_rows<W: Write>(out: &mut W, rows: Builder) -> HelpResult<()> {
    let mut table = rows.build();
    table
        .with(TableStyle::empty())
        .with(Padding::zero())
        .modify(Columns::first(), Padding::new(ROW_INDENT, COLUMN_GAP, 0, 0));

    // the details column is padded to its widest cell
    for line in table.to_string().lines() {
        writeln!(out, "{}", line.trim_end())?;
    }
    Ok(())
}

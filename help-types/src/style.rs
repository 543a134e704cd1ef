/// Presentation roles used by the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    /// Section header (cyan, bold)
    Header,
    /// Command column (yellow)
    Command,
    /// Details column (faint)
    Dim,
    /// "all entries" banner (bold, underlined)
    Banner,
}

/// Capability that turns plain text into styled text.
///
/// Implementations must not change the printable content, only wrap it.
pub trait Decorate {
    fn decorate(&self, text: &str, style: Style) -> String;
}

/// Leaves text untouched.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainDecorator;

impl Decorate for PlainDecorator {
    fn decorate(&self, text: &str, _style: Style) -> String {
        text.to_string()
    }
}

//! Keys addressing a single member of a node.

use std::cmp::Ordering;
use std::fmt;

/// A single-hop key, in one of its two spellings.
///
/// Data that round-trips through loosely typed sources often carries the
/// same member under two spellings: the plain string name, and an interned
/// symbol tag. Both spellings compare as distinct map keys, so a table can
/// hold `Key::name("id")` and `Key::symbol("id")` side by side. Lookups
/// performed by [`Interface`](crate::Interface) treat the two forms as
/// interchangeable, preferring the name form.
///
/// ## Examples
///
/// ```
/// use keypath::Key;
///
/// let name = Key::name("id");
/// let symbol = Key::symbol("id");
///
/// assert_eq!(name.text(), symbol.text());
/// assert_ne!(name, symbol);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// A plain string name.
    Name(String),
    /// A symbol tag, kept distinct from the name spelling.
    Symbol(String),
}

impl Key {
    /// Creates a key in the name form.
    pub fn name(text: impl Into<String>) -> Self {
        Key::Name(text.into())
    }

    /// Creates a key in the symbol form.
    pub fn symbol(text: impl Into<String>) -> Self {
        Key::Symbol(text.into())
    }

    /// The textual content, regardless of form.
    pub fn text(&self) -> &str {
        match self {
            Key::Name(text) | Key::Symbol(text) => text,
        }
    }

    /// Consumes the key, returning its textual content.
    pub fn into_text(self) -> String {
        match self {
            Key::Name(text) | Key::Symbol(text) => text,
        }
    }

    /// Returns `true` for the name form.
    pub fn is_name(&self) -> bool {
        matches!(self, Key::Name(_))
    }

    /// Returns `true` for the symbol form.
    pub fn is_symbol(&self) -> bool {
        matches!(self, Key::Symbol(_))
    }

    /// This key's text under the name form.
    pub fn to_name(&self) -> Key {
        Key::Name(self.text().to_owned())
    }

    /// This key's text under the symbol form.
    pub fn to_symbol(&self) -> Key {
        Key::Symbol(self.text().to_owned())
    }

    fn rank(&self) -> u8 {
        match self {
            Key::Name(_) => 0,
            Key::Symbol(_) => 1,
        }
    }
}

/// Keys order by text first, then by form, with the name form leading.
/// The two spellings of one member therefore sit adjacent in a sorted table.
impl Ord for Key {
    fn cmp(&self, other: &Self) -> Ordering {
        self.text()
            .cmp(other.text())
            .then_with(|| self.rank().cmp(&other.rank()))
    }
}

impl PartialOrd for Key {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Both forms display as their bare text.
impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

impl From<&str> for Key {
    fn from(text: &str) -> Self {
        Key::Name(text.to_owned())
    }
}

impl From<String> for Key {
    fn from(text: String) -> Self {
        Key::Name(text)
    }
}

//! Positional substitution table.
//!
//! The table is borrowed from the caller for the length of a session. Index
//! lookups past the end resolve to empty text rather than failing.

/// Number of addressable entries: placeholders are `$0` through `$9`.
pub const MAX_PLACEHOLDERS: usize = 10;

/// Borrowed, ordered substitution values.
///
/// Holds only a reference to the caller's table; building one never
/// allocates.
#[derive(Debug, Clone, Copy, Default)]
pub struct Values<'v> {
    table: Table<'v>,
}

#[derive(Debug, Clone, Copy, Default)]
enum Table<'v> {
    #[default]
    Empty,
    Strs(&'v [&'v str]),
    Strings(&'v [String]),
    Bytes(&'v [&'v [u8]]),
}

impl<'v> Values<'v> {
    /// A table with no substitutions; every placeholder resolves to nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        match self.table {
            Table::Empty => 0,
            Table::Strs(items) => items.len(),
            Table::Strings(items) => items.len(),
            Table::Bytes(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Value at `index`, or `None` past the end of the table.
    pub fn resolve(&self, index: usize) -> Option<&'v [u8]> {
        match self.table {
            Table::Empty => None,
            Table::Strs(items) => items.get(index).map(|s| s.as_bytes()),
            Table::Strings(items) => items.get(index).map(|s| s.as_bytes()),
            Table::Bytes(items) => items.get(index).copied(),
        }
    }

    /// Value at `index`, empty past the end of the table.
    pub fn get(&self, index: usize) -> &'v [u8] {
        self.resolve(index).unwrap_or_default()
    }

    /// Entries past `$9` can never be referenced.
    pub fn unreachable_count(&self) -> usize {
        self.len().saturating_sub(MAX_PLACEHOLDERS)
    }
}

impl PartialEq for Values<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && (0..self.len()).all(|i| self.get(i) == other.get(i))
    }
}

impl Eq for Values<'_> {}

impl<'v> From<&'v [&'v str]> for Values<'v> {
    fn from(items: &'v [&'v str]) -> Self {
        Self {
            table: Table::Strs(items),
        }
    }
}

impl<'v, const N: usize> From<&'v [&'v str; N]> for Values<'v> {
    fn from(items: &'v [&'v str; N]) -> Self {
        Self::from(&items[..])
    }
}

impl<'v> From<&'v [String]> for Values<'v> {
    fn from(items: &'v [String]) -> Self {
        Self {
            table: Table::Strings(items),
        }
    }
}

impl<'v> From<&'v Vec<String>> for Values<'v> {
    fn from(items: &'v Vec<String>) -> Self {
        Self::from(items.as_slice())
    }
}

impl<'v> From<&'v [&'v [u8]]> for Values<'v> {
    fn from(items: &'v [&'v [u8]]) -> Self {
        Self {
            table: Table::Bytes(items),
        }
    }
}

impl<'v, const N: usize> From<&'v [&'v [u8]; N]> for Values<'v> {
    fn from(items: &'v [&'v [u8]; N]) -> Self {
        Self::from(&items[..])
    }
}

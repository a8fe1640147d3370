//! Nginx autoindex listing types

/// One row of an autoindex directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// Percent-decoded display name, without the trailing slash for
    /// directories.
    pub name: String,
    /// Href exactly as it appears in the listing (relative to the listed
    /// directory).
    pub href: String,
    pub kind: EntryKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

impl DirEntry {
    #[must_use]
    pub const fn is_directory(&self) -> bool {
        matches!(self.kind, EntryKind::Directory)
    }
}

use std::io;

use crate::error::Result;

/// A trait that allows writing a single changelog entry to an arbitrary
/// destination. The single required function `write_entry()` accepts the
/// already-trimmed commit message.
///
/// `appendlog` provides one default implementor, `fmt::BulletWriter`, which
/// emits the entry as a Markdown list item.
pub trait EntryWriter {
    /// Writes one entry for the given commit message
    fn write_entry(&mut self, message: &str) -> Result<()>;
}

/// Wraps a `std::io::Write` object to write `appendlog` entries as Markdown
/// bullets
///
/// # Example
///
/// ```no_run
/// # use std::fs::OpenOptions;
/// # use appendlog::fmt::{BulletWriter, EntryWriter};
/// let mut file = OpenOptions::new()
///     .append(true)
///     .create(true)
///     .open("CHANGELOG.md")
///     .unwrap();
///
/// let mut writer = BulletWriter::new(&mut file);
/// writer.write_entry("fix: handle null pointer").unwrap();
/// ```
pub struct BulletWriter<'a>(&'a mut dyn io::Write);

impl<'a> BulletWriter<'a> {
    /// Creates a new instance of the `BulletWriter` struct using a
    /// `std::io::Write` object.
    pub fn new<T: io::Write>(writer: &'a mut T) -> BulletWriter<'a> {
        BulletWriter(writer)
    }
}

impl<'a> EntryWriter for BulletWriter<'a> {
    fn write_entry(&mut self, message: &str) -> Result<()> {
        // Leading newline, no trailing one; the next entry supplies its own
        write!(self.0, "\n- {message}")?;
        self.0.flush().map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_bullet_record() {
        let mut buf = Vec::new();
        BulletWriter::new(&mut buf)
            .write_entry("fix: handle null pointer")
            .unwrap();
        assert_eq!(buf, b"\n- fix: handle null pointer");
    }

    #[test]
    fn empty_message_writes_bare_bullet() {
        let mut buf = Vec::new();
        BulletWriter::new(&mut buf).write_entry("").unwrap();
        assert_eq!(buf, b"\n- ");
    }

    #[test]
    fn interior_newlines_pass_through() {
        let mut buf = Vec::new();
        BulletWriter::new(&mut buf)
            .write_entry("feat: add zones\n\nsupports nested zones")
            .unwrap();
        assert_eq!(buf, b"\n- feat: add zones\n\nsupports nested zones");
    }
}

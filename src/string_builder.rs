//! Collects string fragments and joins them once at the end.

use std::fmt;

use crate::linked_list::LinkedList;

/// Accumulates string fragments.
///
/// # Examples
///
/// ```
/// use bst_kit::string_builder::StringBuilder;
///
/// let mut builder = StringBuilder::new();
/// builder.append("Hello");
/// builder.append(", ");
/// builder.append(String::from("world"));
///
/// assert_eq!(builder.len(), 12);
/// assert_eq!(builder.to_string(), "Hello, world");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringBuilder {
    parts: LinkedList<String>,
    len: usize,
}

impl StringBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `part` to the end of the string being built.
    pub fn append(&mut self, part: impl Into<String>) {
        let part = part.into();
        self.len += part.len();
        self.parts.append(part);
    }

    /// The length in bytes of the string built so far.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if nothing (or only empty strings) has been appended.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Joins all fragments into one `String`.
    pub fn build(&self) -> String {
        let mut out = String::with_capacity(self.len);
        for part in &self.parts {
            out.push_str(part);
        }
        out
    }
}

impl fmt::Display for StringBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.parts.iter().try_for_each(|part| f.write_str(part))
    }
}

impl<S: Into<String>> Extend<S> for StringBuilder {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for part in iter {
            self.append(part);
        }
    }
}

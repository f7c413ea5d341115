//! Generic section/key document parsing
//!
//! Phase one of the two-phase parse: a document is an ordered list of
//! sections, each an ordered list of key/value entries, with no knowledge
//! of what the sections mean. Typed projections live in
//! [`crate::credentials`] and [`crate::project`].

use crate::{Error, Result};

/// An ordered, untyped configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawDocument {
    pub sections: Vec<RawSection>,
}

/// One `[name]` section and its entries, in source order.
///
/// Keys may repeat; repeated keys are meaningful (dotted key families
/// such as `trans.<lang>` are grouped into maps by the typed layer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSection {
    pub name: String,
    pub entries: Vec<(String, String)>,
}

impl RawSection {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// First value for `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.push((key.into(), value.into()));
    }
}

impl RawDocument {
    /// Parse document text into sections and entries.
    ///
    /// Leading and trailing whitespace on every line is insignificant;
    /// blank lines and `#`/`;` comment lines are skipped. An entry before
    /// the first section header, a header missing its closing bracket,
    /// or a line without `=` is a syntax error.
    pub fn parse(text: &str) -> Result<Self> {
        let mut sections: Vec<RawSection> = Vec::new();

        for (idx, raw_line) in text.lines().enumerate() {
            let line = raw_line.trim();
            let line_no = idx + 1;

            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            if let Some(rest) = line.strip_prefix('[') {
                let Some(name) = rest.strip_suffix(']') else {
                    return Err(Error::Syntax {
                        line: line_no,
                        message: format!("unterminated section header '{line}'"),
                    });
                };
                let name = name.trim();
                if name.is_empty() {
                    return Err(Error::Syntax {
                        line: line_no,
                        message: "empty section header".to_string(),
                    });
                }
                sections.push(RawSection::new(name));
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                return Err(Error::Syntax {
                    line: line_no,
                    message: format!("expected 'key = value', got '{line}'"),
                });
            };
            let Some(section) = sections.last_mut() else {
                return Err(Error::Syntax {
                    line: line_no,
                    message: "entry before any section header".to_string(),
                });
            };
            section.push(key.trim(), value.trim());
        }

        Ok(Self { sections })
    }

    /// Serialize back to document text.
    ///
    /// Sections are emitted in order, one blank line between them.
    /// Comments from the source are not preserved; the document is fully
    /// re-emitted, not patched.
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        for (idx, section) in self.sections.iter().enumerate() {
            if idx > 0 {
                out.push('\n');
            }
            out.push('[');
            out.push_str(&section.name);
            out.push_str("]\n");
            for (key, value) in &section.entries {
                out.push_str(key);
                out.push_str(" = ");
                out.push_str(value);
                out.push('\n');
            }
        }
        out
    }
}

//! Placeholder-based file-filter search
//!
//! A file filter like `locale/<lang>.po` describes where translation files
//! live relative to a project root. [`search_filter`] walks the directory
//! tree and binds the `<lang>` placeholder to the language codes found on
//! disk. The placeholder may occur several times in one filter; every
//! occurrence must bind the same value for a path to match.

use std::collections::BTreeMap;
use std::fs;

use crate::NormalizedPath;

/// The placeholder token bound to a language code during search.
pub const LANG_PLACEHOLDER: &str = "<lang>";

/// Rewrite both separator styles in a filter to forward slashes.
///
/// Idempotent; filters written on Windows and Unix compare equal after
/// normalization.
pub fn normalize_filter(filter: &str) -> String {
    filter.replace('\\', "/")
}

/// Replace every placeholder occurrence with a concrete language code.
pub fn substitute_lang(filter: &str, lang: &str) -> String {
    filter.replace(LANG_PLACEHOLDER, lang)
}

/// Search the tree under `root` for files matching `filter`.
///
/// Returns a map from bound language code to the matching path. An empty
/// filter matches `root` itself under the empty code. A filter without a
/// placeholder binds the empty code to the first matching file. When two
/// paths would bind the same code, the one reached first in lexicographic
/// traversal order wins.
///
/// Every call is a fresh traversal; nothing is cached.
pub fn search_filter(root: &NormalizedPath, filter: &str) -> BTreeMap<String, NormalizedPath> {
    let mut found = BTreeMap::new();
    if filter.is_empty() {
        found.insert(String::new(), root.clone());
        return found;
    }

    let normalized = normalize_filter(filter);
    let segments: Vec<Segment> = normalized
        .split('/')
        .filter(|s| !s.is_empty())
        .map(Segment::compile)
        .collect();
    if segments.is_empty() {
        found.insert(String::new(), root.clone());
        return found;
    }

    walk(root, &segments, None, &mut found);
    found
}

/// One path component of a compiled filter.
struct Segment {
    parts: Vec<Part>,
}

enum Part {
    Literal(String),
    Lang,
}

impl Segment {
    fn compile(text: &str) -> Self {
        let mut parts = Vec::new();
        let mut rest = text;
        while let Some(idx) = rest.find(LANG_PLACEHOLDER) {
            if idx > 0 {
                parts.push(Part::Literal(rest[..idx].to_string()));
            }
            parts.push(Part::Lang);
            rest = &rest[idx + LANG_PLACEHOLDER.len()..];
        }
        if !rest.is_empty() {
            parts.push(Part::Literal(rest.to_string()));
        }
        Segment { parts }
    }

    /// Match one directory-entry name against this segment.
    ///
    /// `binding` is the placeholder value fixed by earlier segments, if
    /// any. On success, returns the binding in effect afterwards.
    fn matches(&self, name: &str, binding: Option<&str>) -> Option<Option<String>> {
        match_parts(&self.parts, name, binding)
    }
}

fn match_parts(parts: &[Part], text: &str, binding: Option<&str>) -> Option<Option<String>> {
    let Some((first, rest)) = parts.split_first() else {
        return text.is_empty().then(|| binding.map(str::to_owned));
    };
    match first {
        Part::Literal(lit) => match_parts(rest, text.strip_prefix(lit.as_str())?, binding),
        Part::Lang => {
            if let Some(bound) = binding {
                // Unification: a later occurrence must repeat the value
                // bound by the first one.
                match_parts(rest, text.strip_prefix(bound)?, binding)
            } else {
                // Unbound: try candidate values longest-first, like a
                // greedy wildcard, backtracking on failure.
                let boundaries: Vec<usize> = text
                    .char_indices()
                    .map(|(i, _)| i)
                    .skip(1)
                    .chain(std::iter::once(text.len()))
                    .collect();
                for end in boundaries.into_iter().rev() {
                    let candidate = &text[..end];
                    if candidate.is_empty() {
                        continue;
                    }
                    if let Some(result) = match_parts(rest, &text[end..], Some(candidate)) {
                        return Some(result);
                    }
                }
                None
            }
        }
    }
}

fn walk(
    dir: &NormalizedPath,
    segments: &[Segment],
    binding: Option<&str>,
    found: &mut BTreeMap<String, NormalizedPath>,
) {
    let Some((segment, rest)) = segments.split_first() else {
        return;
    };

    let entries = match fs::read_dir(dir.to_native()) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(dir = %dir, error = %e, "skipping unreadable directory");
            return;
        }
    };

    let mut names: Vec<String> = entries
        .flatten()
        .filter_map(|entry| entry.file_name().into_string().ok())
        .collect();
    names.sort();

    for name in names {
        let Some(new_binding) = segment.matches(&name, binding) else {
            continue;
        };
        let child = dir.join(&name);
        if rest.is_empty() {
            if child.is_file() {
                found
                    .entry(new_binding.unwrap_or_default())
                    .or_insert(child);
            }
        } else if child.is_dir() {
            walk(&child, rest, new_binding.as_deref(), found);
        }
    }
}

//! File name helpers: Markdown detection and humanized titles.

/// Name of the per-directory index file.
pub const README_NAME: &str = "README.md";

const MARKDOWN_EXTENSION: &str = ".md";

/// True when `name` ends in the Markdown extension (case-sensitive).
pub fn is_markdown(name: &str) -> bool {
    name.ends_with(MARKDOWN_EXTENSION)
}

/// True for Markdown files other than `README.md`.
pub fn is_qualifying(name: &str) -> bool {
    is_markdown(name) && name != README_NAME
}

/// Derive a display title from a file name.
///
/// The extension is dropped, the stem is split on `_` and every part is
/// capitalized (first character upper case, the rest lower case). Empty parts
/// from repeated underscores are kept, so `a__b.md` becomes `A  B`.
pub fn title_of(file_name: &str) -> String {
    let stem = match file_name.rfind('.') {
        Some(0) | None => file_name,
        Some(idx) => &file_name[..idx],
    };
    stem.split('_')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

//! Splices generated content between two sentinel lines.
//!
//! The patcher is a two-state machine over the original lines. Outside the
//! marked region lines are copied verbatim, line terminators included. Inside
//! it every original line is dropped and replaced by the generated block.

use thiserror::Error;

/// The start and end sentinel lines, compared after trimming whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    pub start: String,
    pub end: String,
}

impl Markers {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    fn is_start(&self, line: &str) -> bool {
        line.trim() == self.start
    }

    fn is_end(&self, line: &str) -> bool {
        line.trim() == self.end
    }
}

/// Result of patching a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOutcome {
    /// The document with the marked region replaced.
    Patched(String),
    /// No start marker; the document must be left as it is.
    NoMarkers,
}

/// Structural problems that make a document unpatchable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatchError {
    #[error("start marker on line {opened_at} has no matching end marker")]
    MissingEnd { opened_at: usize },

    #[error("start marker on line {line} appears inside the region opened on line {opened_at}")]
    NestedStart { opened_at: usize, line: usize },
}

enum Region {
    Outside,
    Inside { opened_at: usize },
}

/// Replace the text between the markers in `original` with `block`.
///
/// `block` is emitted right after the start marker line and followed by one
/// blank line, then the end marker. A stray end marker outside a region is
/// ordinary text.
pub fn patch_section(
    original: &str,
    block: &str,
    markers: &Markers,
) -> Result<PatchOutcome, PatchError> {
    let mut out = String::with_capacity(original.len() + block.len());
    let mut region = Region::Outside;
    let mut seen_start = false;

    for (idx, line) in original.split_inclusive('\n').enumerate() {
        let line_no = idx + 1;
        region = match region {
            Region::Outside if markers.is_start(line) => {
                out.push_str(line);
                if !line.ends_with('\n') {
                    out.push('\n');
                }
                out.push_str(block);
                if !block.is_empty() && !block.ends_with('\n') {
                    out.push('\n');
                }
                out.push('\n');
                seen_start = true;
                Region::Inside { opened_at: line_no }
            }
            Region::Outside => {
                out.push_str(line);
                Region::Outside
            }
            Region::Inside { .. } if markers.is_end(line) => {
                out.push_str(line);
                Region::Outside
            }
            Region::Inside { opened_at } if markers.is_start(line) => {
                return Err(PatchError::NestedStart {
                    opened_at,
                    line: line_no,
                });
            }
            inside @ Region::Inside { .. } => inside,
        };
    }

    if let Region::Inside { opened_at } = region {
        return Err(PatchError::MissingEnd { opened_at });
    }
    if !seen_start {
        return Ok(PatchOutcome::NoMarkers);
    }
    Ok(PatchOutcome::Patched(out))
}

//! Icon id extraction from the upstream README table.
//!
//! The upstream README lists icons in a markdown table. Each data row holds
//! up to two icons side by side, with the icon id written as inline code:
//!
//! ```markdown
//! | Id | Icon | Name | Id | Icon | Name |
//! | --- | --- | --- | --- | --- | --- |
//! | `bash` | ![bash](icons/bash.svg) | Bash | `bun` | ![bun](icons/bun.svg) | Bun |
//! ```
//!
//! Only rows that begin with `|` and embed an image (`![`) are considered,
//! which discards the header, the separator and any surrounding prose.
//!
//! # Key Functions
//!
//! - [`extract_icon_ids`]: All ids in document order
//! - [`extract_row_ids`]: Ids from a single table row
//! - [`extract_backticked`]: The first inline-code token in a cell
//!
//! The column positions are fixed. If the upstream layout drifts, this is the
//! only module that needs to change.

use std::sync::LazyLock;

use regex::Regex;

/// Leading delimiter of a table row.
const ROW_DELIMITER: char = '|';

/// Marker for an inline image reference.
const IMAGE_MARKER: &str = "![";

/// Positions of the id cells within a row, indexed over the raw split on
/// `|` (so index 0 is the empty segment before the leading delimiter).
pub const ID_COLUMNS: [usize; 2] = [1, 4];

static BACKTICKED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]+)`").expect("Invalid backtick regex"));

/// Whether a line is an icon row of the README table.
///
/// # Example
///
/// ```rust
/// use skills_content::readme::is_icon_row;
///
/// assert!(is_icon_row("| `go` | ![go](icons/go.svg) | Go |"));
/// assert!(!is_icon_row("| Id | Icon | Name |"));
/// assert!(!is_icon_row("See ![logo](logo.svg) | for details"));
/// ```
pub fn is_icon_row(line: &str) -> bool {
    line.starts_with(ROW_DELIMITER) && line.contains(IMAGE_MARKER)
}

/// Split a table row into trimmed columns.
///
/// No cells are dropped, so the result includes the empty segments outside
/// the leading and trailing delimiters.
///
/// # Example
///
/// ```rust
/// use skills_content::readme::split_columns;
///
/// assert_eq!(split_columns("| a |  b |"), vec!["", "a", "b", ""]);
/// ```
pub fn split_columns(line: &str) -> Vec<&str> {
    line.split(ROW_DELIMITER).map(str::trim).collect()
}

/// Extract the first backtick-quoted token from a cell.
///
/// Returns `None` when the cell holds no inline code.
///
/// # Example
///
/// ```rust
/// use skills_content::readme::extract_backticked;
///
/// assert_eq!(extract_backticked("`nodejs` (LTS)"), Some("nodejs"));
/// assert_eq!(extract_backticked("Node.js"), None);
/// ```
pub fn extract_backticked(column: &str) -> Option<&str> {
    BACKTICKED
        .captures(column)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Extract the icon ids from one table row.
///
/// Yields zero, one or two ids, in column order. Rows that are not icon rows
/// (see [`is_icon_row`]) yield nothing.
///
/// # Example
///
/// ```rust
/// use skills_content::readme::extract_row_ids;
///
/// let row = "| `vue` | ![vue](icons/vue.svg) | Vue | | | |";
/// assert_eq!(extract_row_ids(row), vec!["vue"]);
/// ```
pub fn extract_row_ids(line: &str) -> Vec<&str> {
    if !is_icon_row(line) {
        return Vec::new();
    }

    let columns = split_columns(line);
    ID_COLUMNS
        .iter()
        .filter_map(|&idx| columns.get(idx).copied())
        .filter_map(extract_backticked)
        .collect()
}

/// Extract every icon id from a README document, in document order.
///
/// Duplicates are kept as they appear.
pub fn extract_icon_ids(markdown: &str) -> Vec<String> {
    markdown
        .lines()
        .flat_map(extract_row_ids)
        .map(str::to_string)
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

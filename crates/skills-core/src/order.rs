//! Catalog ordering.
//!
//! Scraped catalogs are returned sorted by id using a collation close to a
//! browser's default `localeCompare`:
//!
//! - characters are grouped as whitespace and punctuation, then digits,
//!   then letters, so `a_b` sorts before `a1` and `a1` before `ab`;
//! - within a group, letters compare case-insensitively;
//! - only exact case-folded ties fall back to case, lowercase first.
//!
//! Accents are not folded and digit runs are not compared numerically.
//! The result is a total order, so equal inputs always produce identical
//! output.

use std::cmp::Ordering;

use crate::IconRecord;

/// Compare two icon ids for catalog ordering.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use skills_core::compare_ids;
///
/// assert_eq!(compare_ids("Angular", "babel"), Ordering::Less);
/// assert_eq!(compare_ids("a", "A"), Ordering::Less);
/// assert_eq!(compare_ids("a_b", "a1"), Ordering::Less);
/// assert_eq!(compare_ids("go", "go"), Ordering::Equal);
/// ```
pub fn compare_ids(a: &str, b: &str) -> Ordering {
    collation_keys(a)
        .cmp(collation_keys(b))
        // Reversed byte order puts lowercase ahead of uppercase on ties.
        .then_with(|| b.cmp(a))
}

/// Primary collation weight of a character group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Punctuation,
    Digit,
    Letter,
}

fn char_class(c: char) -> CharClass {
    if c.is_alphabetic() {
        CharClass::Letter
    } else if c.is_numeric() {
        CharClass::Digit
    } else {
        CharClass::Punctuation
    }
}

fn collation_keys(id: &str) -> impl Iterator<Item = (CharClass, char)> + '_ {
    id.chars()
        .flat_map(char::to_lowercase)
        .map(|c| (char_class(c), c))
}

/// Sort icon records ascending by id, in place.
pub fn sort_by_id(icons: &mut [IconRecord]) {
    icons.sort_by(|a, b| compare_ids(&a.id, &b.id));
}

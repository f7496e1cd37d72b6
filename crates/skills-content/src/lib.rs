//! README table and SVG title extraction.
//!
//! Pure parsing helpers behind the scraping acquisition strategy. Nothing
//! here performs I/O: callers fetch the documents and hand over text.
//!
//! # Modules
//!
//! - [`readme`]: Icon id extraction from the upstream README table
//! - [`svg`]: `title` attribute extraction from SVG assets
//!
//! # Example
//!
//! ```rust
//! use skills_content::{display_name, extract_icon_ids, extract_svg_title};
//!
//! let readme = "\
//! | Id | Icon | Name | Id | Icon | Name |\n\
//! | --- | --- | --- | --- | --- | --- |\n\
//! | `python` | ![python](icons/python.svg) | Python | `rust` | ![rust](icons/rust.svg) | Rust |\n";
//!
//! let ids = extract_icon_ids(readme);
//! assert_eq!(ids, vec!["python", "rust"]);
//!
//! let title = extract_svg_title(r#"<svg title="Rust"></svg>"#).unwrap();
//! assert_eq!(display_name("rust", title), "Rust");
//! ```

pub mod readme;
pub mod svg;

pub use readme::{
    extract_backticked, extract_icon_ids, extract_row_ids, is_icon_row, split_columns, ID_COLUMNS,
};
pub use svg::{display_name, extract_svg_title};

//! HTML to XAML conversion.
//!
//! `main` holds the dispatcher; `block`, `inline` and `list` hold one handler per
//! supported tag. Handlers append to the shared output buffer and recurse through
//! [`main::process_children`].

pub(crate) mod block;
pub(crate) mod inline;
pub(crate) mod list;
pub(crate) mod main;

pub(crate) use main::{convert_html, convert_nodes};

//! XML parsing and DOM navigation helpers.

mod utils;

pub use utils::{
    elements_named, find_child, get_tag_name, has_tag, parse_document, trimmed_text,
};

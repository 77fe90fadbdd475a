//! Plain-text rendering of the wiki list.

use crate::fandom::{FandomState, Wiki};

/// One list row: position, title, article count and id.
pub fn format_row(position: usize, wiki: &Wiki) -> String {
    let title = if wiki.title.is_empty() {
        "(untitled)"
    } else {
        wiki.title.as_str()
    };
    format!(
        "{:>4}. {} ({}) [{}]",
        position,
        title,
        wiki.stats.articles_label(),
        wiki.id
    )
}

/// Rows for the wikis after the first `already_shown`, numbered from 1.
///
/// If the list shrank (a re-initialisation replaced it), everything is
/// rendered again.
pub fn new_rows(state: &FandomState, already_shown: usize) -> Vec<String> {
    let start = if already_shown > state.wikis.len() {
        0
    } else {
        already_shown
    };

    state.wikis[start..]
        .iter()
        .enumerate()
        .map(|(offset, wiki)| format_row(start + offset + 1, wiki))
        .collect()
}

/// Status line shown after each batch.
pub fn footer(state: &FandomState) -> String {
    format!("-- page {}, {} wikis loaded --", state.page, state.wikis.len())
}

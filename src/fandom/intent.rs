use crate::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FandomIntent {
    /// Load the first batch, replacing whatever is loaded.
    Init,
    /// Load the batch after the current page and append it.
    NextPage,
}

impl Intent for FandomIntent {}

use crate::fandom::wiki::Wiki;
use crate::mvi::UiState;

/// Snapshot of the wiki list screen.
#[derive(Debug, Clone, PartialEq)]
pub struct FandomState {
    /// Loaded wikis, in the order the batches arrived.
    pub wikis: Vec<Wiki>,
    /// Last batch requested (1-based).
    pub page: u32,
}

impl Default for FandomState {
    fn default() -> Self {
        Self {
            wikis: Vec::new(),
            page: 1,
        }
    }
}

impl UiState for FandomState {}

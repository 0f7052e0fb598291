use crate::files::FilterCriteria;
use std::collections::HashMap;
use std::path::PathBuf;

use super::view::RowId;

/// File picked in the upload form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub path: PathBuf,
    pub content_type: Option<String>,
}

#[derive(Debug, Default)]
pub(crate) struct WidgetState {
    pub criteria: FilterCriteria,
    pub selection: Option<Selection>,
    /// Row to filename association of the current render
    pub rows: HashMap<RowId, String>,
    /// Bumped by every list load; only the newest load may render.
    pub load_generation: u64,
    /// Bumped by every filter edit; used to drop debounced reloads.
    pub input_generation: u64,
}

impl WidgetState {
    pub fn next_load(&mut self) -> u64 {
        self.load_generation += 1;
        self.load_generation
    }

    pub fn next_input(&mut self) -> u64 {
        self.input_generation += 1;
        self.input_generation
    }

    pub fn is_current_load(&self, generation: u64) -> bool {
        self.load_generation == generation
    }
}

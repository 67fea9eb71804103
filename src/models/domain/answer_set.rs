use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

use super::question::Question;

/// Canonical answer representation: one selection per snapshot question, in
/// snapshot order. `None` means unattempted. Both legacy wire shapes
/// (positional option indices and value maps keyed by question id) convert
/// into this at the boundary.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct AnswerSet(Vec<Option<String>>);

impl AnswerSet {
    pub fn from_selections(selections: Vec<Option<String>>) -> Self {
        Self(selections.into_iter().map(normalize_selection).collect())
    }

    /// Positional option indices aligned with the snapshot. An out-of-range
    /// or negative index counts as unattempted; a length mismatch is a
    /// validation failure, never silently truncated or padded.
    pub fn from_indices(indices: &[Option<i64>], snapshot: &[Question]) -> AppResult<Self> {
        if indices.len() != snapshot.len() {
            return Err(AppError::ValidationError(format!(
                "expected {} answers, got {}",
                snapshot.len(),
                indices.len()
            )));
        }

        let selections = indices
            .iter()
            .zip(snapshot)
            .map(|(index, question)| {
                index
                    .and_then(|i| usize::try_from(i).ok())
                    .and_then(|i| question.options.get(i))
                    .and_then(|option| option.primary().map(str::to_string))
            })
            .collect();

        Ok(Self(selections))
    }

    /// Selected option values keyed by question id. Missing keys count as
    /// unattempted; a key not present in the snapshot is a validation
    /// failure.
    pub fn from_value_map(
        map: &HashMap<String, Option<String>>,
        snapshot: &[Question],
    ) -> AppResult<Self> {
        for key in map.keys() {
            if !snapshot.iter().any(|q| q.id == *key) {
                return Err(AppError::ValidationError(format!(
                    "answer references unknown question id '{}'",
                    key
                )));
            }
        }

        let selections = snapshot
            .iter()
            .map(|question| normalize_selection(map.get(&question.id).cloned().flatten()))
            .collect();

        Ok(Self(selections))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn selections(&self) -> &[Option<String>] {
        &self.0
    }
}

fn normalize_selection(selection: Option<String>) -> Option<String> {
    selection
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

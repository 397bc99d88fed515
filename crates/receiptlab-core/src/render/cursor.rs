//! List cursors and memoized list lengths

use serde_json::Value;
use std::collections::HashMap;

use super::resolve::{normalize, resolve};

/// Per-row cursor state, keyed by normalized list path
#[derive(Debug, Default)]
pub struct CursorStore {
    positions: HashMap<String, usize>,
    lengths: HashMap<String, usize>,
}

impl CursorStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget every position and memoized list
    pub fn reset(&mut self) {
        self.positions.clear();
        self.lengths.clear();
    }

    /// Current position for a normalized list path (0 when never set)
    pub fn position(&self, normalized: &str) -> usize {
        self.positions.get(normalized).copied().unwrap_or(0)
    }

    /// Move the cursor of `list` to `position` and return the list length
    ///
    /// The list is resolved once and its length memoized; memoized lists
    /// nested under `list` are dropped because they depend on the selected
    /// element. Unresolvable lists and non-sequence values count as empty.
    pub fn set_cursor(&mut self, source: &Value, list: &str, position: usize) -> usize {
        let normalized = normalize(list);
        self.positions.insert(normalized.clone(), position);

        let count = match self.lengths.get(&normalized) {
            Some(&count) => count,
            None => {
                let count = match resolve(source, &normalized, self).as_deref() {
                    Some(Value::Array(items)) => items.len(),
                    _ => 0,
                };
                self.lengths.insert(normalized.clone(), count);
                count
            }
        };

        self.lengths
            .retain(|key, _| !is_strict_descendant(key, &normalized));

        tracing::trace!(list = %normalized, position, count, "cursor moved");
        count
    }

    /// Memoized length of a list, if it is currently cached
    pub fn cached_len(&self, list: &str) -> Option<usize> {
        self.lengths.get(&normalize(list)).copied()
    }
}

fn is_strict_descendant(key: &str, ancestor: &str) -> bool {
    key.len() > ancestor.len() && key.starts_with(ancestor) && key[ancestor.len()..].starts_with('.')
}

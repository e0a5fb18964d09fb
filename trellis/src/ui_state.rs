//! Values shared between the render thread and background updaters.
//!
//! Layout runs on one thread, but a timer or worker may change the values a
//! frame displays. Those live in a [`UiState`]: the render path samples them
//! under a read lock, updaters change them under the write lock. Share it as
//! `Arc<UiState>`.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard};

use crate::binding::{Value, kind_mismatch};

/// Lock-guarded map of named values.
///
/// # Thread Safety
///
/// Any number of readers may sample concurrently. A panic while a guard is
/// held does not lock everyone out: the values are plain data, so a
/// poisoned lock is recovered.
#[derive(Debug, Default)]
pub struct UiState {
    values: RwLock<HashMap<String, Value>>,
}

/// Read access to every value, held for one frame's sampling.
pub struct UiStateReader<'a> {
    guard: RwLockReadGuard<'a, HashMap<String, Value>>,
}

impl UiStateReader<'_> {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.guard.get(name)
    }

    pub fn len(&self) -> usize {
        self.guard.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guard.is_empty()
    }
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Take the read lock for several lookups in a row.
    pub fn read(&self) -> UiStateReader<'_> {
        UiStateReader {
            guard: self.values.read().unwrap_or_else(PoisonError::into_inner),
        }
    }

    /// Copy of one value.
    pub fn get(&self, name: &str) -> Option<Value> {
        self.read().get(name).cloned()
    }

    /// Store a value. A new name takes the kind of its first value.
    ///
    /// # Panics
    ///
    /// If `name` already holds a value of another kind.
    #[track_caller]
    pub fn set(&self, name: &str, value: impl Into<Value>) {
        let value = value.into();
        let mut values = self.values.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(current) = values.get_mut(name) {
            if current.kind() != value.kind() {
                let expected = current.kind();
                drop(values);
                kind_mismatch(name, expected, value.kind());
            }
            *current = value;
        } else {
            tracing::trace!(name, kind = %value.kind(), "ui value defined");
            values.insert(name.to_string(), value);
        }
    }

    /// Modify a value in place under the write lock. Returns `false` if
    /// there is no value called `name`.
    ///
    /// # Panics
    ///
    /// If `f` changes the value's kind.
    #[track_caller]
    pub fn update(&self, name: &str, f: impl FnOnce(&mut Value)) -> bool {
        let mut values = self.values.write().unwrap_or_else(PoisonError::into_inner);
        let Some(current) = values.get_mut(name) else {
            return false;
        };
        let before = current.kind();
        let mut next = current.clone();
        f(&mut next);
        if next.kind() != before {
            drop(values);
            kind_mismatch(name, before, next.kind());
        }
        *current = next;
        true
    }

    pub fn remove(&self, name: &str) -> Option<Value> {
        self.values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::ValueKind;

    #[test]
    fn test_set_and_get() {
        let state = UiState::new();
        assert_eq!(state.get("progress"), None);
        state.set("progress", 0.25);
        state.set("progress", 0.5);
        assert_eq!(state.get("progress"), Some(Value::Float(0.5)));

        let reader = state.read();
        assert_eq!(reader.len(), 1);
        assert_eq!(reader.get("progress").map(Value::kind), Some(ValueKind::Float));
    }

    #[test]
    fn test_update_in_place() {
        let state = UiState::new();
        state.set("ticks", 1i64);
        assert!(state.update("ticks", |v| {
            if let Value::Int(n) = v {
                *n += 1;
            }
        }));
        assert_eq!(state.get("ticks"), Some(Value::Int(2)));
        assert!(!state.update("missing", |_| {}));
    }

    #[test]
    #[should_panic(expected = "holds float values, cannot assign text")]
    fn test_set_wrong_kind_panics() {
        let state = UiState::new();
        state.set("progress", 0.25);
        state.set("progress", "done");
    }

    #[test]
    fn test_wrong_kind_does_not_poison() {
        let state = Arc::new(UiState::new());
        state.set("count", 1i64);
        let s = Arc::clone(&state);
        let result =
            std::thread::spawn(move || s.update("count", |v| *v = Value::Float(1.0))).join();
        assert!(result.is_err());
        assert_eq!(state.get("count"), Some(Value::Int(1)));
        state.set("count", 2i64);
        assert_eq!(state.get("count"), Some(Value::Int(2)));
    }

    #[test]
    fn test_background_writer_and_render_reader() {
        let state = UiState::shared();
        state.set("progress", 0.0);

        std::thread::scope(|scope| {
            let writer = Arc::clone(&state);
            scope.spawn(move || {
                for i in 1..=100 {
                    writer.set("progress", i as f64 / 100.0);
                }
            });
            for _ in 0..100 {
                let reader = state.read();
                let progress = reader.get("progress").and_then(Value::as_float);
                assert!(progress.is_some_and(|p| (0.0..=1.0).contains(&p)));
            }
        });

        assert_eq!(state.get("progress"), Some(Value::Float(1.0)));
    }
}

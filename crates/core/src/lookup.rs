//! Primary-key lookup result shared by handlers that resolve a single row.

/// Outcome of resolving an entity by primary key.
///
/// Absence is an expected outcome, not an error: each caller decides how to
/// present it (notice, silent redirect, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    Found(T),
    NotFound,
}

impl<T> From<Option<T>> for Lookup<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Lookup::Found(v),
            None => Lookup::NotFound,
        }
    }
}

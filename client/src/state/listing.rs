//! Table state for the role-restricted list screens.

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

use crate::net::http::ApiError;
use crate::net::types::TableRow;

/// Rows already flattened to strings, plus load status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListState {
    pub loading: bool,
    pub error: Option<String>,
    pub rows: Vec<Vec<String>>,
}

impl ListState {
    pub fn loading() -> Self {
        Self { loading: true, ..Self::default() }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self { loading: false, error: Some(message.into()), rows: Vec::new() }
    }

    pub fn from_result<T: TableRow>(result: Result<Vec<T>, ApiError>) -> Self {
        match result {
            Ok(items) => Self {
                loading: false,
                error: None,
                rows: items.iter().map(T::cells).collect(),
            },
            Err(e) => Self::failed(e.user_message()),
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.loading && self.error.is_none() && self.rows.is_empty()
    }
}

use serde::{Deserialize, Serialize};

/// Lifecycle of one remotely fetched section of the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Loadable<T> {
    /// Never requested (for example because a prerequisite such as the major is missing)
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> Loadable<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Loadable::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Loadable::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Loadable::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// Replaces the section with the outcome of a request
    pub fn settle(&mut self, result: Result<T, String>) {
        *self = match result {
            Ok(value) => Loadable::Loaded(value),
            Err(error) => Loadable::Failed(error),
        };
    }
}

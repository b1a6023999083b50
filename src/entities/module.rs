use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named container of resources.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    pub id: Uuid,
    pub name: String,
    /// Display order among all modules, dense `0..N-1`.
    pub position: usize,
}

impl Model {
    pub fn new(name: impl Into<String>, position: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            position,
        }
    }

    /// Name used when the user submits no name at all.
    pub fn default_name(ordinal: usize) -> String {
        format!("Module {}", ordinal)
    }
}

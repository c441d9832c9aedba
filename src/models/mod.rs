use std::fmt;
use serde::{Deserialize, Serialize};

pub mod booking;
pub mod listing;
pub mod user;

/// Backend ids arrive as numbers or as uuid strings depending on the table.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl Default for RecordId {
    fn default() -> Self {
        RecordId::Text(String::new())
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(id) => write!(f, "{}", id),
            RecordId::Text(id) => f.write_str(id),
        }
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionReport {
    pub checked_at: DateTime<Utc>,
    pub attempt: u32,
}

impl ConnectionReport {
    pub fn new(checked_at: DateTime<Utc>, attempt: u32) -> Self {
        Self {
            checked_at,
            attempt,
        }
    }
}

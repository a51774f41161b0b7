use chrono::DateTime;
use chrono::Utc;

/// Creation and modification times shared by every persisted entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamps {
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Timestamps {
    pub fn now() -> Self {
        let now = Utc::now();
        Self {
            created_at: now,
            updated_at: now,
        }
    }

    /// Mark the entity as modified at the current time.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

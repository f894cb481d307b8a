use serde::{Deserialize, Serialize};

/// Метаданные жизненного цикла записи
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityMetadata {
    /// Дата создания записи
    pub created_at: chrono::DateTime<chrono::Utc>,
    /// Дата последнего обновления
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl EntityMetadata {
    /// Создать метаданные для новой записи
    pub fn new() -> Self {
        let now = chrono::Utc::now();
        Self {
            created_at: now,
            updated_at: now,
        }
    }

    /// Обновить timestamp последнего изменения
    pub fn touch(&mut self) {
        self.updated_at = chrono::Utc::now();
    }
}

impl Default for EntityMetadata {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touch_moves_updated_at_forward() {
        let mut meta = EntityMetadata::new();
        let created = meta.created_at;
        meta.touch();
        assert!(meta.updated_at >= created);
        assert_eq!(meta.created_at, created);
    }
}

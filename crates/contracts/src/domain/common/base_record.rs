use super::EntityMetadata;
use serde::{Deserialize, Serialize};

/// Базовая часть любого агрегата: идентификатор и метаданные жизненного цикла.
///
/// Встраивается в агрегат через `#[serde(flatten)]`, поэтому на проводе
/// запись выглядит плоской строкой таблицы.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseRecord<Id> {
    /// Уникальный идентификатор записи
    pub id: Id,
    /// Метаданные жизненного цикла
    pub metadata: EntityMetadata,
}

impl<Id> BaseRecord<Id> {
    /// Создать базу нового агрегата
    pub fn new(id: Id) -> Self {
        Self {
            id,
            metadata: EntityMetadata::new(),
        }
    }

    /// Создать базу с существующими метаданными (при загрузке из БД)
    pub fn with_metadata(id: Id, metadata: EntityMetadata) -> Self {
        Self { id, metadata }
    }

    /// Обновить timestamp
    pub fn touch(&mut self) {
        self.metadata.touch();
    }
}

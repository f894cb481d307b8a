use crate::domain::common::{AggregateId, AggregateRoot, BaseRecord, EntityMetadata};
use crate::enums::RecordStatus;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор вина
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WineId(pub Uuid);

impl WineId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for WineId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(WineId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Вино в каталоге
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wine {
    #[serde(flatten)]
    pub base: BaseRecord<WineId>,

    // Специфичные поля агрегата
    pub name: String,
    pub producer: String,
    pub vintage: i32,

    #[serde(rename = "grapeVariety")]
    pub grape_variety: String,

    #[serde(rename = "volumeMl")]
    pub volume_ml: i32,

    pub price: f64,
    pub stock: i32,
    /// URL изображения бутылки
    pub image: String,
    pub status: RecordStatus,
}

impl Wine {
    /// Создать новое вино для вставки в БД
    pub fn new_for_insert(dto: &WineDto) -> Self {
        let mut wine = Self {
            base: BaseRecord::new(WineId::new_v4()),
            name: String::new(),
            producer: String::new(),
            vintage: 0,
            grape_variety: String::new(),
            volume_ml: 750,
            price: 0.0,
            stock: 0,
            image: String::new(),
            status: RecordStatus::Draft,
        };
        wine.update(dto);
        wine
    }

    /// Получить ID как строку
    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Обновить данные из DTO
    pub fn update(&mut self, dto: &WineDto) {
        self.name = dto.name.clone();
        self.producer = dto.producer.clone();
        self.vintage = dto.vintage;
        self.grape_variety = dto.grape_variety.clone();
        self.volume_ml = dto.volume_ml;
        self.price = dto.price;
        self.stock = dto.stock;
        self.image = dto.image.clone();
        self.status = dto.status;
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Название не может быть пустым".into());
        }
        if self.producer.trim().is_empty() {
            return Err("Производитель не может быть пустым".into());
        }
        if !(1900..=2100).contains(&self.vintage) {
            return Err("Год урожая должен быть в диапазоне 1900–2100".into());
        }
        if self.volume_ml <= 0 {
            return Err("Объём должен быть положительным".into());
        }
        if self.price < 0.0 {
            return Err("Цена не может быть отрицательной".into());
        }
        if self.stock < 0 {
            return Err("Остаток не может быть отрицательным".into());
        }
        Ok(())
    }

    /// Хук перед записью
    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for Wine {
    type Id = WineId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a006"
    }

    fn collection_name() -> &'static str {
        "wine"
    }

    fn element_name() -> &'static str {
        "Вино"
    }

    fn list_name() -> &'static str {
        "Вина"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания/обновления вина
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WineDto {
    pub id: Option<String>,
    pub name: String,
    pub producer: String,
    pub vintage: i32,

    #[serde(rename = "grapeVariety")]
    pub grape_variety: String,

    #[serde(rename = "volumeMl")]
    pub volume_ml: i32,

    pub price: f64,
    pub stock: i32,
    pub image: String,

    #[serde(default)]
    pub status: RecordStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> WineDto {
        WineDto {
            id: None,
            name: "Саперави Резерв".to_string(),
            producer: "Усадьба Дивноморское".to_string(),
            vintage: 2021,
            grape_variety: "Саперави".to_string(),
            volume_ml: 750,
            price: 1850.0,
            stock: 24,
            image: "/media/wines/saperavi-reserve.jpg".to_string(),
            status: RecordStatus::Active,
        }
    }

    #[test]
    fn test_new_for_insert_applies_dto() {
        let wine = Wine::new_for_insert(&dto());
        assert_eq!(wine.name, "Саперави Резерв");
        assert_eq!(wine.status, RecordStatus::Active);
        assert!(wine.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_vintage() {
        let mut wine = Wine::new_for_insert(&dto());
        wine.vintage = 1537;
        assert!(wine.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_negative_stock() {
        let mut wine = Wine::new_for_insert(&dto());
        wine.stock = -1;
        assert!(wine.validate().is_err());
    }
}

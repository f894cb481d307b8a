use crate::domain::common::{AggregateId, AggregateRoot, BaseRecord, EntityMetadata};
use crate::enums::RecordStatus;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор размещения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccommodationId(pub Uuid);

impl AccommodationId {
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

impl AggregateId for AccommodationId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(AccommodationId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Размещение: гостевой дом или номер при винодельне
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Accommodation {
    #[serde(flatten)]
    pub base: BaseRecord<AccommodationId>,

    // Специфичные поля агрегата
    pub name: String,
    pub description: String,
    pub capacity: i32,

    #[serde(rename = "pricePerNight")]
    pub price_per_night: f64,

    pub status: RecordStatus,
}

impl Accommodation {
    /// Создать новое размещение для вставки в БД
    pub fn new_for_insert(dto: &AccommodationDto) -> Self {
        let mut item = Self {
            base: BaseRecord::new(AccommodationId::new_v4()),
            name: String::new(),
            description: String::new(),
            capacity: 1,
            price_per_night: 0.0,
            status: RecordStatus::Draft,
        };
        item.update(dto);
        item
    }

    /// Получить ID как строку
    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Обновить данные из DTO
    pub fn update(&mut self, dto: &AccommodationDto) {
        self.name = dto.name.clone();
        self.description = dto.description.clone();
        self.capacity = dto.capacity;
        self.price_per_night = dto.price_per_night;
        self.status = dto.status;
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Название не может быть пустым".into());
        }
        if self.capacity < 1 {
            return Err("Вместимость должна быть не меньше одного гостя".into());
        }
        if self.price_per_night < 0.0 {
            return Err("Цена за ночь не может быть отрицательной".into());
        }
        Ok(())
    }

    /// Хук перед записью
    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for Accommodation {
    type Id = AccommodationId;

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
        "a001"
    }

    fn collection_name() -> &'static str {
        "accommodation"
    }

    fn element_name() -> &'static str {
        "Размещение"
    }

    fn list_name() -> &'static str {
        "Размещения"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания/обновления размещения
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AccommodationDto {
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub capacity: i32,

    #[serde(rename = "pricePerNight")]
    pub price_per_night: f64,

    #[serde(default)]
    pub status: RecordStatus,
}

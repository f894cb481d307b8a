use crate::domain::common::{AggregateId, AggregateRoot, BaseRecord, EntityMetadata};
use crate::enums::RecordStatus;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор вопроса-ответа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FaqId(pub Uuid);

impl FaqId {
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

impl AggregateId for FaqId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(FaqId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Вопрос-ответ для публичного сайта
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Faq {
    #[serde(flatten)]
    pub base: BaseRecord<FaqId>,

    // Специфичные поля агрегата
    pub question: String,
    pub answer: String,
    /// Позиция в публичном списке (меньше — выше)
    pub position: i32,
    pub status: RecordStatus,
}

impl Faq {
    /// Создать новый вопрос-ответ для вставки в БД
    pub fn new_for_insert(dto: &FaqDto) -> Self {
        let mut item = Self {
            base: BaseRecord::new(FaqId::new_v4()),
            question: String::new(),
            answer: String::new(),
            position: 0,
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
    pub fn update(&mut self, dto: &FaqDto) {
        self.question = dto.question.clone();
        self.answer = dto.answer.clone();
        self.position = dto.position;
        self.status = dto.status;
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.question.trim().is_empty() {
            return Err("Вопрос не может быть пустым".into());
        }
        if self.answer.trim().is_empty() {
            return Err("Ответ не может быть пустым".into());
        }
        if self.position < 0 {
            return Err("Позиция не может быть отрицательной".into());
        }
        Ok(())
    }

    /// Хук перед записью
    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for Faq {
    type Id = FaqId;

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
        "a002"
    }

    fn collection_name() -> &'static str {
        "faq"
    }

    fn element_name() -> &'static str {
        "Вопрос-ответ"
    }

    fn list_name() -> &'static str {
        "Вопросы и ответы"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания/обновления вопроса-ответа
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FaqDto {
    pub id: Option<String>,
    pub question: String,
    pub answer: String,
    pub position: i32,

    #[serde(default)]
    pub status: RecordStatus,
}

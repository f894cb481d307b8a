use crate::domain::common::{AggregateId, AggregateRoot, BaseRecord, EntityMetadata};
use crate::enums::RecordStatus;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор графика доставки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeliveryScheduleId(pub Uuid);

impl DeliveryScheduleId {
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

impl AggregateId for DeliveryScheduleId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(DeliveryScheduleId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// График доставки: зона, день недели и время приёма заказов
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliverySchedule {
    #[serde(flatten)]
    pub base: BaseRecord<DeliveryScheduleId>,

    // Специфичные поля агрегата
    pub zone: String,
    /// День недели, 1 (понедельник) … 7 (воскресенье)
    pub weekday: u8,

    /// Время окончания приёма заказов на этот день, "HH:MM"
    #[serde(rename = "cutoffTime")]
    pub cutoff_time: String,

    pub fee: f64,
    pub status: RecordStatus,
}

impl DeliverySchedule {
    /// Создать новый график для вставки в БД
    pub fn new_for_insert(dto: &DeliveryScheduleDto) -> Self {
        let mut item = Self {
            base: BaseRecord::new(DeliveryScheduleId::new_v4()),
            zone: String::new(),
            weekday: 1,
            cutoff_time: "12:00".to_string(),
            fee: 0.0,
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
    pub fn update(&mut self, dto: &DeliveryScheduleDto) {
        self.zone = dto.zone.clone();
        self.weekday = dto.weekday;
        self.cutoff_time = dto.cutoff_time.clone();
        self.fee = dto.fee;
        self.status = dto.status;
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.zone.trim().is_empty() {
            return Err("Зона доставки не может быть пустой".into());
        }
        if !(1..=7).contains(&self.weekday) {
            return Err("День недели должен быть в диапазоне 1–7".into());
        }
        if !is_valid_cutoff(&self.cutoff_time) {
            return Err("Время приёма заказов должно быть в формате HH:MM".into());
        }
        if self.fee < 0.0 {
            return Err("Стоимость доставки не может быть отрицательной".into());
        }
        Ok(())
    }

    /// Хук перед записью
    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

fn is_valid_cutoff(value: &str) -> bool {
    let Some((hh, mm)) = value.split_once(':') else {
        return false;
    };
    let (Ok(hh), Ok(mm)) = (hh.parse::<u8>(), mm.parse::<u8>()) else {
        return false;
    };
    hh < 24 && mm < 60
}

impl AggregateRoot for DeliverySchedule {
    type Id = DeliveryScheduleId;

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
        "a003"
    }

    fn collection_name() -> &'static str {
        "delivery-schedule"
    }

    fn element_name() -> &'static str {
        "График доставки"
    }

    fn list_name() -> &'static str {
        "Графики доставки"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания/обновления графика доставки
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DeliveryScheduleDto {
    pub id: Option<String>,
    pub zone: String,
    pub weekday: u8,

    #[serde(rename = "cutoffTime")]
    pub cutoff_time: String,

    pub fee: f64,

    #[serde(default)]
    pub status: RecordStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cutoff_format() {
        assert!(is_valid_cutoff("12:00"));
        assert!(is_valid_cutoff("23:59"));
        assert!(!is_valid_cutoff("24:00"));
        assert!(!is_valid_cutoff("12-00"));
        assert!(!is_valid_cutoff("noon"));
    }
}

use serde::{Deserialize, Serialize};

/// Статус публикации записи
///
/// Используется всеми сущностями, кроме способов оплаты (у них нет черновиков).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    Draft,
    Active,
    Inactive,
}

impl RecordStatus {
    /// Получить код статуса (значение на проводе и в фильтрах)
    pub const fn code(&self) -> &'static str {
        match self {
            RecordStatus::Draft => "draft",
            RecordStatus::Active => "active",
            RecordStatus::Inactive => "inactive",
        }
    }

    /// Получить человекочитаемое название
    pub const fn display_name(&self) -> &'static str {
        match self {
            RecordStatus::Draft => "Черновик",
            RecordStatus::Active => "Активен",
            RecordStatus::Inactive => "Неактивен",
        }
    }

    /// Получить все статусы в порядке отображения
    pub fn all() -> Vec<RecordStatus> {
        vec![
            RecordStatus::Draft,
            RecordStatus::Active,
            RecordStatus::Inactive,
        ]
    }

    /// Парсинг из кода
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "draft" => Some(RecordStatus::Draft),
            "active" => Some(RecordStatus::Active),
            "inactive" => Some(RecordStatus::Inactive),
            _ => None,
        }
    }
}

impl Default for RecordStatus {
    fn default() -> Self {
        RecordStatus::Draft
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for status in RecordStatus::all() {
            assert_eq!(RecordStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(RecordStatus::from_code("unknown"), None);
    }

    #[test]
    fn test_wire_form_is_lowercase() {
        let json = serde_json::to_string(&RecordStatus::Draft).unwrap();
        assert_eq!(json, "\"draft\"");
        let back: RecordStatus = serde_json::from_str("\"inactive\"").unwrap();
        assert_eq!(back, RecordStatus::Inactive);
    }
}

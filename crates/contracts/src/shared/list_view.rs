//! Декларативный контракт списковой формы.
//!
//! Каждая сущность определяет рядом со своим агрегатом статичный
//! `ListViewConfig`: видимые по умолчанию колонки, сортировку, фасеты
//! фильтров. Конфигурация неизменяема на всём времени жизни процесса и
//! проверяется fail-fast при первом обращении — фильтр с «выбранным»
//! значением, которого нет среди вариантов, не должен дожить до рендера.

use anyhow::{bail, ensure, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Колонка и направление сортировки по умолчанию
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub column: &'static str,
    pub ascending: bool,
}

/// Один вариант значения фасетного фильтра
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOption {
    pub label: &'static str,
    pub value: &'static str,
}

/// Описание одного фильтра списковой формы
///
/// Пустой `options` — фильтр со свободным вводом (имя, email, телефон).
#[derive(Debug, Clone, Copy)]
pub struct FilterSpec {
    pub id: &'static str,
    pub label: &'static str,
    pub options: &'static [FilterOption],
    pub default_selected: &'static [&'static str],
}

impl FilterSpec {
    /// Фильтр со свободным вводом (без предопределённых вариантов)
    pub fn is_free_text(&self) -> bool {
        self.options.is_empty()
    }
}

/// Статичная конфигурация списковой формы одной сущности
#[derive(Debug, Clone, Copy)]
pub struct ListViewConfig {
    /// Полное имя агрегата ("a006_wine")
    pub entity: &'static str,
    /// Полный набор известных колонок сущности
    pub columns: &'static [&'static str],
    /// Колонки, видимые по умолчанию (порядок значим: слева направо)
    pub default_columns: &'static [&'static str],
    /// Колонки, которые запрашиваются всегда, независимо от видимости
    pub required_columns: &'static [&'static str],
    /// Колонки, которые пользователь не может скрыть
    pub disabled_columns: &'static [&'static str],
    /// Сортировка, применяемая пока пользователь не выбрал свою
    pub default_order: SortOrder,
    /// Значения статусного фасета в порядке отображения
    pub status_filters: &'static [FilterOption],
    /// Остальные фильтры списка в порядке отображения
    pub filters: &'static [FilterSpec],
}

impl ListViewConfig {
    /// Проверить согласованность конфигурации.
    ///
    /// Нарушение — ошибка программирования, а не данные пользователя:
    /// вызывающая сторона падает сразу, при первом обращении к конфигурации.
    pub fn validate(&self) -> Result<()> {
        for col in self.default_columns {
            ensure!(
                self.columns.contains(col),
                "{}: колонка по умолчанию '{}' не объявлена в наборе колонок",
                self.entity,
                col
            );
        }
        for col in self.required_columns {
            ensure!(
                self.columns.contains(col),
                "{}: обязательная колонка '{}' не объявлена в наборе колонок",
                self.entity,
                col
            );
        }
        for col in self.disabled_columns {
            ensure!(
                self.columns.contains(col),
                "{}: нескрываемая колонка '{}' не объявлена в наборе колонок",
                self.entity,
                col
            );
        }
        if !self.columns.contains(&self.default_order.column) {
            bail!(
                "{}: колонка сортировки '{}' не объявлена в наборе колонок",
                self.entity,
                self.default_order.column
            );
        }
        for spec in self.filters {
            if spec.is_free_text() {
                // Свободный ввод не имеет вариантов, предвыбор проверять не по чему
                ensure!(
                    spec.default_selected.is_empty(),
                    "{}: фильтр '{}' со свободным вводом не может иметь предвыбранных значений",
                    self.entity,
                    spec.id
                );
                continue;
            }
            for selected in spec.default_selected {
                ensure!(
                    spec.options.iter().any(|o| o.value == *selected),
                    "{}: предвыбранное значение '{}' фильтра '{}' отсутствует среди вариантов",
                    self.entity,
                    selected,
                    spec.id
                );
            }
        }
        Ok(())
    }

    /// Есть ли такая колонка у сущности
    pub fn has_column(&self, column: &str) -> bool {
        self.columns.contains(&column)
    }

    /// Может ли пользователь скрыть колонку
    pub fn is_hideable(&self, column: &str) -> bool {
        !self.disabled_columns.contains(&column)
    }

    /// Найти фильтр по идентификатору
    pub fn filter(&self, id: &str) -> Option<&FilterSpec> {
        self.filters.iter().find(|f| f.id == id)
    }
}

// ============================================================================
// Параметры запроса списка
// ============================================================================

/// Сортировка в запросе списка
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBy {
    pub column: String,
    #[serde(default)]
    pub ascending: bool,
}

/// Параметры запроса списка, сериализуемые в query string.
///
/// Форму значений ожидает серверная сторона; frontend собирает их из
/// состояния списка и `ListViewConfig`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub per_page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<OrderBy>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub filters: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub visible_columns: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub search: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATUS: &[FilterOption] = &[
        FilterOption {
            label: "Активен",
            value: "active",
        },
        FilterOption {
            label: "Неактивен",
            value: "inactive",
        },
    ];

    fn valid_config() -> ListViewConfig {
        ListViewConfig {
            entity: "a999_test",
            columns: &["id", "name", "status", "created_at"],
            default_columns: &["name", "status"],
            required_columns: &["id"],
            disabled_columns: &["created_at"],
            default_order: SortOrder {
                column: "name",
                ascending: true,
            },
            status_filters: STATUS,
            filters: &[FilterSpec {
                id: "status",
                label: "Статус",
                options: STATUS,
                default_selected: &["active"],
            }],
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_unknown_default_column_rejected() {
        let mut config = valid_config();
        config.default_columns = &["name", "ghost"];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_sort_column_rejected() {
        let mut config = valid_config();
        config.default_order = SortOrder {
            column: "ghost",
            ascending: false,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_selected_outside_options_rejected() {
        let mut config = valid_config();
        config.filters = &[FilterSpec {
            id: "status",
            label: "Статус",
            options: STATUS,
            default_selected: &["draft"],
        }];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_free_text_filter_allows_empty_options() {
        let mut config = valid_config();
        config.filters = &[FilterSpec {
            id: "name",
            label: "Имя",
            options: &[],
            default_selected: &[],
        }];
        assert!(config.validate().is_ok());
        assert!(config.filter("name").unwrap().is_free_text());
    }

    #[test]
    fn test_hideable_respects_disabled_columns() {
        let config = valid_config();
        assert!(!config.is_hideable("created_at"));
        assert!(config.is_hideable("name"));
    }

    #[test]
    fn test_list_query_skips_empty_parts() {
        let query = ListQuery {
            page: 1,
            per_page: 50,
            ..Default::default()
        };
        let json = serde_json::to_value(&query).unwrap();
        assert!(json.get("filters").is_none());
        assert!(json.get("search").is_none());
        assert!(json.get("order_by").is_none());
    }
}

use crate::shared::list_view::{FilterOption, FilterSpec, ListViewConfig, SortOrder};
use once_cell::sync::Lazy;

/// Статусные фасеты списка графиков доставки
const STATUS_FILTERS: &[FilterOption] = &[
    FilterOption {
        label: "Черновик",
        value: "draft",
    },
    FilterOption {
        label: "Активен",
        value: "active",
    },
    FilterOption {
        label: "Неактивен",
        value: "inactive",
    },
];

/// Фасет по дню недели
const WEEKDAY_FILTERS: &[FilterOption] = &[
    FilterOption {
        label: "Понедельник",
        value: "1",
    },
    FilterOption {
        label: "Вторник",
        value: "2",
    },
    FilterOption {
        label: "Среда",
        value: "3",
    },
    FilterOption {
        label: "Четверг",
        value: "4",
    },
    FilterOption {
        label: "Пятница",
        value: "5",
    },
    FilterOption {
        label: "Суббота",
        value: "6",
    },
    FilterOption {
        label: "Воскресенье",
        value: "7",
    },
];

static CONFIG: Lazy<ListViewConfig> = Lazy::new(|| {
    let config = ListViewConfig {
        entity: "a003_delivery_schedule",
        columns: &[
            "id",
            "zone",
            "weekday",
            "cutoff_time",
            "fee",
            "status",
            "created_at",
            "updated_at",
        ],
        default_columns: &["zone", "weekday", "cutoff_time", "fee", "status"],
        required_columns: &[],
        disabled_columns: &[],
        default_order: SortOrder {
            column: "zone",
            ascending: true,
        },
        status_filters: STATUS_FILTERS,
        filters: &[
            FilterSpec {
                id: "status",
                label: "Статус",
                options: STATUS_FILTERS,
                default_selected: &[],
            },
            FilterSpec {
                id: "weekday",
                label: "День недели",
                options: WEEKDAY_FILTERS,
                default_selected: &[],
            },
        ],
    };
    config
        .validate()
        .expect("a003_delivery_schedule: некорректная конфигурация списка");
    config
});

/// Конфигурация списковой формы графиков доставки
pub fn list_view_config() -> &'static ListViewConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_is_valid() {
        assert!(list_view_config().validate().is_ok());
    }

    #[test]
    fn test_weekday_facet_has_seven_options() {
        let spec = list_view_config().filter("weekday").unwrap();
        assert_eq!(spec.options.len(), 7);
        assert!(!spec.is_free_text());
    }
}

use crate::shared::list_view::{FilterOption, FilterSpec, ListViewConfig, SortOrder};
use once_cell::sync::Lazy;

/// Статусные фасеты списка клиентов
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

static CONFIG: Lazy<ListViewConfig> = Lazy::new(|| {
    let config = ListViewConfig {
        entity: "a004_customer",
        columns: &[
            "id",
            "full_name",
            "email",
            "phone",
            "comment",
            "status",
            "created_at",
            "updated_at",
        ],
        default_columns: &["full_name", "email", "phone", "status"],
        required_columns: &[],
        disabled_columns: &[],
        default_order: SortOrder {
            column: "full_name",
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
            // Свободный ввод: у этих фильтров нет предопределённых вариантов
            FilterSpec {
                id: "full_name",
                label: "Имя",
                options: &[],
                default_selected: &[],
            },
            FilterSpec {
                id: "email",
                label: "Email",
                options: &[],
                default_selected: &[],
            },
            FilterSpec {
                id: "phone",
                label: "Телефон",
                options: &[],
                default_selected: &[],
            },
        ],
    };
    config
        .validate()
        .expect("a004_customer: некорректная конфигурация списка");
    config
});

/// Конфигурация списковой формы клиентов
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
    fn test_contact_filters_are_free_text() {
        let config = list_view_config();
        for id in ["full_name", "email", "phone"] {
            let spec = config.filter(id).unwrap();
            assert!(spec.is_free_text(), "{} должен быть свободным вводом", id);
        }
        assert!(!config.filter("status").unwrap().is_free_text());
    }
}

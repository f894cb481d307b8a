use crate::shared::list_view::{FilterOption, FilterSpec, ListViewConfig, SortOrder};
use once_cell::sync::Lazy;

/// Статусные фасеты списка вопросов-ответов
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
        entity: "a002_faq",
        columns: &[
            "id",
            "position",
            "question",
            "answer",
            "status",
            "created_at",
            "updated_at",
        ],
        default_columns: &["position", "question", "status"],
        required_columns: &[],
        disabled_columns: &[],
        default_order: SortOrder {
            column: "position",
            ascending: true,
        },
        status_filters: STATUS_FILTERS,
        filters: &[FilterSpec {
            id: "status",
            label: "Статус",
            options: STATUS_FILTERS,
            default_selected: &[],
        }],
    };
    config
        .validate()
        .expect("a002_faq: некорректная конфигурация списка");
    config
});

/// Конфигурация списковой формы вопросов-ответов
pub fn list_view_config() -> &'static ListViewConfig {
    &CONFIG
}

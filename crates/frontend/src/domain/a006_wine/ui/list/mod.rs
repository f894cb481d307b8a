use crate::domain::a006_wine::ui::details::WineDetails;
use crate::shared::api_utils;
use crate::shared::column_prefs;
use crate::shared::components::column_picker::{self, ColumnPicker};
use crate::shared::components::{Spinner, StatusBadge, TableCheckbox};
use crate::shared::date_utils::format_timestamp;
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, get_sort_indicator, sort_list, SearchInput, Searchable, Sortable};
use crate::shared::overlay::PanelFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::panel_state::PanelController;
use contracts::domain::a006_wine::aggregate::Wine;
use contracts::domain::a006_wine::list_config::list_view_config;
use contracts::domain::common::{AggregateId, AggregateRoot};
use contracts::enums::RecordStatus;
use contracts::shared::list_view::{ListQuery, OrderBy};
use leptos::prelude::*;
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

const STORAGE_KEY: &str = "a006_wine_visible_columns";

#[derive(Clone, Debug)]
pub struct WineRow {
    pub id: String,
    pub image: String,
    pub name: String,
    pub producer: String,
    pub vintage: i32,
    pub grape_variety: String,
    pub volume_ml: i32,
    pub price: f64,
    pub stock: i32,
    pub status: RecordStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Wine> for WineRow {
    fn from(w: Wine) -> Self {
        Self {
            id: w.base.id.as_string(),
            image: w.image,
            name: w.name,
            producer: w.producer,
            vintage: w.vintage,
            grape_variety: w.grape_variety,
            volume_ml: w.volume_ml,
            price: w.price,
            stock: w.stock,
            status: w.status,
            created_at: w.base.metadata.created_at,
            updated_at: w.base.metadata.updated_at,
        }
    }
}

impl Searchable for WineRow {
    fn matches_filter(&self, filter: &str) -> bool {
        let filter = filter.to_lowercase();
        self.name.to_lowercase().contains(&filter)
            || self.producer.to_lowercase().contains(&filter)
            || self.grape_variety.to_lowercase().contains(&filter)
    }

    fn get_field_value(&self, field: &str) -> Option<String> {
        match field {
            "name" => Some(self.name.clone()),
            "producer" => Some(self.producer.clone()),
            "grape_variety" => Some(self.grape_variety.clone()),
            _ => None,
        }
    }
}

impl Sortable for WineRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "producer" => self.producer.cmp(&other.producer),
            "vintage" => self.vintage.cmp(&other.vintage),
            "grape_variety" => self.grape_variety.cmp(&other.grape_variety),
            "volume_ml" => self.volume_ml.cmp(&other.volume_ml),
            "price" => self
                .price
                .partial_cmp(&other.price)
                .unwrap_or(Ordering::Equal),
            "stock" => self.stock.cmp(&other.stock),
            "status" => self.status.code().cmp(other.status.code()),
            "created_at" => self.created_at.cmp(&other.created_at),
            "updated_at" => self.updated_at.cmp(&other.updated_at),
            _ => self.name.cmp(&other.name),
        }
    }
}

fn column_label(column: &str) -> &'static str {
    match column {
        "id" => "ID",
        "image" => "Фото",
        "name" => "Название",
        "producer" => "Производитель",
        "vintage" => "Год",
        "grape_variety" => "Сорт",
        "volume_ml" => "Объём, мл",
        "price" => "Цена",
        "stock" => "Остаток",
        "status" => "Статус",
        "created_at" => "Создано",
        "updated_at" => "Обновлено",
        _ => "",
    }
}

fn render_cell(row: &WineRow, column: &str) -> AnyView {
    match column {
        "id" => view! { <td class="table__cell table__cell--mono">{row.id.clone()}</td> }
            .into_any(),
        "image" => {
            let src = row.image.clone();
            let alt = row.name.clone();
            view! {
                <td class="table__cell table__cell--image">
                    <img class="table__thumb" src=src alt=alt />
                </td>
            }
            .into_any()
        }
        "name" => view! { <td class="table__cell">{row.name.clone()}</td> }.into_any(),
        "producer" => view! { <td class="table__cell">{row.producer.clone()}</td> }.into_any(),
        "vintage" => view! { <td class="table__cell">{row.vintage}</td> }.into_any(),
        "grape_variety" => {
            view! { <td class="table__cell">{row.grape_variety.clone()}</td> }.into_any()
        }
        "volume_ml" => view! { <td class="table__cell">{row.volume_ml}</td> }.into_any(),
        "price" => {
            view! { <td class="table__cell table__cell--number">{format!("{:.2}", row.price)}</td> }
                .into_any()
        }
        "stock" => view! { <td class="table__cell table__cell--number">{row.stock}</td> }
            .into_any(),
        "status" => view! {
            <td class="table__cell">
                <StatusBadge code=row.status.code() label=row.status.display_name() />
            </td>
        }
        .into_any(),
        "created_at" => {
            view! { <td class="table__cell">{format_timestamp(row.created_at)}</td> }.into_any()
        }
        "updated_at" => {
            view! { <td class="table__cell">{format_timestamp(row.updated_at)}</td> }.into_any()
        }
        _ => view! { <td class="table__cell"></td> }.into_any(),
    }
}

#[component]
#[allow(non_snake_case)]
pub fn WineList() -> impl IntoView {
    let config = list_view_config();
    let (items, set_items) = signal::<Vec<WineRow>>(Vec::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (search, set_search) = signal(String::new());
    let (status_filter, set_status_filter) = signal(String::new());
    let (sort_field, set_sort_field) = signal(config.default_order.column.to_string());
    let (sort_ascending, set_sort_ascending) = signal(config.default_order.ascending);
    let (visible, set_visible) = signal(column_prefs::resolve_visible(
        config,
        column_prefs::load_visible_columns(STORAGE_KEY),
    ));
    let (selected, set_selected) = signal::<HashSet<String>>(HashSet::new());
    let panel = PanelController::<String>::new();

    let fetch = move || {
        set_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let query = build_query(visible.get_untracked());
            match fetch_wines(&query).await {
                Ok(v) => {
                    let rows: Vec<WineRow> = v.into_iter().map(Into::into).collect();
                    set_items.set(rows);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    };

    let handle_edit = move |id: String| {
        if items.get().iter().any(|item| item.id == id) {
            panel.open_edit(id);
        }
    };

    let handle_column_toggle = move |column: String| {
        if let Some(next) =
            column_picker::handle_toggle(config, STORAGE_KEY, &visible.get_untracked(), &column)
        {
            set_visible.set(next);
        }
    };

    // Производный список: поиск -> статусный фасет -> сортировка
    let rows = move || {
        let mut rows = filter_list(items.get(), &search.get());
        let status = status_filter.get();
        if !status.is_empty() {
            rows.retain(|r| r.status.code() == status);
        }
        sort_list(&mut rows, &sort_field.get(), sort_ascending.get());
        rows
    };

    let toggle_select = move |id: String, checked: bool| {
        set_selected.update(|s| {
            if checked {
                s.insert(id.clone());
            } else {
                s.remove(&id);
            }
        });
    };

    let delete_selected = move || {
        let ids: Vec<String> = selected.get().into_iter().collect();
        if ids.is_empty() {
            return;
        }

        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message(&format!(
                    "Удалить выбранные элементы? Количество: {}",
                    ids.len()
                ))
                .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        wasm_bindgen_futures::spawn_local(async move {
            for id in ids {
                if let Err(e) = delete_wine(&id).await {
                    log::warn!("delete wine {}: {}", id, e);
                }
            }
        });
        fetch();
        set_selected.set(HashSet::new());
    };

    fetch();

    view! {
        <div class="page" id="a006_wine--list" data-page-category=PAGE_CAT_LIST>
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{Wine::list_name()}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| panel.open_create()>
                        {icon("plus")}
                        {"Новое вино"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        {"Обновить"}
                    </button>
                    <button
                        class="button button--secondary"
                        on:click=move |_| delete_selected()
                        disabled=move || selected.get().is_empty()
                    >
                        {icon("delete")}
                        {move || format!("Удалить ({})", selected.get().len())}
                    </button>
                    <ColumnPicker
                        config=config
                        visible=visible
                        on_toggle=Callback::new(handle_column_toggle)
                        label_for=column_label
                    />
                </div>
            </div>

            <div class="filter-bar">
                <SearchInput
                    value=search
                    on_change=Callback::new(move |v| set_search.set(v))
                    placeholder="Название, производитель или сорт..."
                />
                <select
                    class="filter-select"
                    on:change=move |ev| set_status_filter.set(event_target_value(&ev))
                >
                    <option value="" selected=move || status_filter.get().is_empty()>
                        {"Все статусы"}
                    </option>
                    {config
                        .status_filters
                        .iter()
                        .map(|o| {
                            let value = o.value;
                            view! {
                                <option
                                    value=value
                                    selected=move || status_filter.get() == value
                                >
                                    {o.label}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <Show when=move || loading.get()>
                <Spinner />
            </Show>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell table__header-cell--checkbox">
                                <input
                                    type="checkbox"
                                    class="table__checkbox"
                                    on:change=move |ev| {
                                        let checked = event_target_checked(&ev);
                                        if checked {
                                            let all: HashSet<String> = items
                                                .get()
                                                .iter()
                                                .map(|i| i.id.clone())
                                                .collect();
                                            set_selected.set(all);
                                        } else {
                                            set_selected.set(HashSet::new());
                                        }
                                    }
                                />
                            </th>
                            {move || {
                                visible
                                    .get()
                                    .into_iter()
                                    .map(|column| {
                                        let column_for_click = column.clone();
                                        let column_for_indicator = column.clone();
                                        view! {
                                            <th
                                                class="table__header-cell table__header-cell--sortable"
                                                on:click=move |_| {
                                                    if sort_field.get() == column_for_click {
                                                        set_sort_ascending.update(|v| *v = !*v);
                                                    } else {
                                                        set_sort_field.set(column_for_click.clone());
                                                        set_sort_ascending.set(true);
                                                    }
                                                }
                                            >
                                                {column_label(&column)}
                                                {move || get_sort_indicator(
                                                    &sort_field.get(),
                                                    &column_for_indicator,
                                                    sort_ascending.get(),
                                                )}
                                            </th>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </tr>
                    </thead>
                    <tbody>
                        {move || rows().into_iter().map(|row| {
                            let id = row.id.clone();
                            let id_for_click = id.clone();
                            let id_for_checkbox = id.clone();
                            let id_for_toggle = id.clone();
                            let is_selected = selected.get().contains(&id);
                            view! {
                                <tr
                                    class="table__row"
                                    class:table__row--selected=is_selected
                                    on:click=move |_| handle_edit(id_for_click.clone())
                                >
                                    <TableCheckbox
                                        checked=Signal::derive(move || selected.get().contains(&id_for_checkbox))
                                        on_change=Callback::new(move |checked| toggle_select(id_for_toggle.clone(), checked))
                                    />
                                    {visible
                                        .get()
                                        .iter()
                                        .map(|column| render_cell(&row, column))
                                        .collect_view()}
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            <Show when=move || panel.is_open()>
                {move || {
                    let on_saved: Arc<dyn Fn(()) + Send + Sync> = Arc::new(move |_| {
                        panel.close();
                        fetch();
                    });
                    let on_cancel: Arc<dyn Fn(()) + Send + Sync> = Arc::new(move |_| panel.close());
                    view! {
                        <PanelFrame
                            on_close=Callback::new(move |_| panel.close())
                            panel_class="wine-details-panel".to_string()
                        >
                            <WineDetails
                                id=panel.edit_target()
                                on_saved=on_saved
                                on_cancel=on_cancel
                            />
                        </PanelFrame>
                    }
                }}
            </Show>
        </div>
    }
}

/// Параметры запроса списка: сортировка по умолчанию и колонки, которые
/// нужны строкам (обязательные плюс видимые)
fn build_query(visible: Vec<String>) -> ListQuery {
    let config = list_view_config();
    let mut columns: Vec<String> = config
        .required_columns
        .iter()
        .map(|c| c.to_string())
        .collect();
    for col in visible {
        if !columns.contains(&col) {
            columns.push(col);
        }
    }
    ListQuery {
        page: 0,
        per_page: 500,
        order_by: Some(OrderBy {
            column: config.default_order.column.to_string(),
            ascending: config.default_order.ascending,
        }),
        filters: BTreeMap::new(),
        visible_columns: columns,
        search: String::new(),
    }
}

async fn fetch_wines(query: &ListQuery) -> Result<Vec<Wine>, String> {
    let qs = serde_qs::to_string(query).map_err(|e| e.to_string())?;
    api_utils::get_json(&format!("{}?{}", Wine::api_path(), qs)).await
}

async fn delete_wine(id: &str) -> Result<(), String> {
    api_utils::delete(&format!("{}/{}", Wine::api_path(), id)).await
}

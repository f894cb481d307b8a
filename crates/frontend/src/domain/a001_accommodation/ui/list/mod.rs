use crate::domain::a001_accommodation::ui::details::AccommodationDetails;
use crate::shared::api_utils;
use crate::shared::components::{StatusBadge, TableCheckbox};
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    create_sort_toggle, filter_list, get_sort_indicator, sort_list, SearchInput, Searchable,
    Sortable,
};
use crate::shared::overlay::PanelFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::panel_state::PanelController;
use crate::shared::url_state;
use contracts::domain::a001_accommodation::aggregate::Accommodation;
use contracts::domain::a001_accommodation::list_config::list_view_config;
use contracts::domain::common::{AggregateId, AggregateRoot};
use contracts::enums::RecordStatus;
use leptos::prelude::*;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct AccommodationRow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub capacity: i32,
    pub price_per_night: f64,
    pub status: RecordStatus,
}

impl From<Accommodation> for AccommodationRow {
    fn from(a: Accommodation) -> Self {
        Self {
            id: a.base.id.as_string(),
            name: a.name,
            description: a.description,
            capacity: a.capacity,
            price_per_night: a.price_per_night,
            status: a.status,
        }
    }
}

impl Searchable for AccommodationRow {
    fn matches_filter(&self, filter: &str) -> bool {
        let filter = filter.to_lowercase();
        self.name.to_lowercase().contains(&filter)
            || self.description.to_lowercase().contains(&filter)
    }

    fn get_field_value(&self, field: &str) -> Option<String> {
        match field {
            "name" => Some(self.name.clone()),
            "description" => Some(self.description.clone()),
            _ => None,
        }
    }
}

impl Sortable for AccommodationRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "capacity" => self.capacity.cmp(&other.capacity),
            "price_per_night" => self
                .price_per_night
                .partial_cmp(&other.price_per_night)
                .unwrap_or(Ordering::Equal),
            "status" => self.status.code().cmp(other.status.code()),
            _ => self.name.cmp(&other.name),
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn AccommodationList() -> impl IntoView {
    let config = list_view_config();
    let (items, set_items) = signal::<Vec<AccommodationRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (search, set_search) = signal(String::new());
    // Предвыбор статусного фасета приходит из конфигурации
    let (status_filter, set_status_filter) = signal(
        config
            .filter("status")
            .and_then(|s| s.default_selected.first())
            .map(|s| s.to_string())
            .unwrap_or_default(),
    );
    let (sort_field, set_sort_field) = signal(config.default_order.column.to_string());
    let (sort_ascending, set_sort_ascending) = signal(config.default_order.ascending);
    let (selected, set_selected) = signal::<HashSet<String>>(HashSet::new());
    let panel = PanelController::<String>::new();

    // Открытая панель создания шарится ссылкой: ?create=true
    url_state::sync_create_flag(panel);

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_accommodations().await {
                Ok(v) => {
                    let rows: Vec<AccommodationRow> = v.into_iter().map(Into::into).collect();
                    set_items.set(rows);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let handle_edit = move |id: String| {
        if items.get().iter().any(|item| item.id == id) {
            panel.open_edit(id);
        }
    };

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
                if let Err(e) = delete_accommodation(&id).await {
                    log::warn!("delete accommodation {}: {}", id, e);
                }
            }
        });
        fetch();
        set_selected.set(HashSet::new());
    };

    fetch();

    view! {
        <div class="page" id="a001_accommodation--list" data-page-category=PAGE_CAT_LIST>
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{Accommodation::list_name()}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| panel.open_create()>
                        {icon("plus")}
                        {"Новое размещение"}
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
                </div>
            </div>

            <div class="filter-bar">
                <SearchInput
                    value=search
                    on_change=Callback::new(move |v| set_search.set(v))
                    placeholder="Название или описание..."
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
                            <th
                                class="table__header-cell table__header-cell--sortable"
                                on:click=create_sort_toggle(
                                    "name",
                                    sort_field.into(),
                                    set_sort_field,
                                    set_sort_ascending,
                                )
                            >
                                {"Название"}
                                {move || get_sort_indicator(&sort_field.get(), "name", sort_ascending.get())}
                            </th>
                            <th
                                class="table__header-cell table__header-cell--sortable"
                                on:click=create_sort_toggle(
                                    "capacity",
                                    sort_field.into(),
                                    set_sort_field,
                                    set_sort_ascending,
                                )
                            >
                                {"Гостей"}
                                {move || get_sort_indicator(&sort_field.get(), "capacity", sort_ascending.get())}
                            </th>
                            <th
                                class="table__header-cell table__header-cell--sortable"
                                on:click=create_sort_toggle(
                                    "price_per_night",
                                    sort_field.into(),
                                    set_sort_field,
                                    set_sort_ascending,
                                )
                            >
                                {"Цена за ночь"}
                                {move || get_sort_indicator(&sort_field.get(), "price_per_night", sort_ascending.get())}
                            </th>
                            <th class="table__header-cell">{"Статус"}</th>
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
                                    <td class="table__cell">{row.name}</td>
                                    <td class="table__cell table__cell--number">{row.capacity}</td>
                                    <td class="table__cell table__cell--number">
                                        {format!("{:.2}", row.price_per_night)}
                                    </td>
                                    <td class="table__cell">
                                        <StatusBadge
                                            code=row.status.code()
                                            label=row.status.display_name()
                                        />
                                    </td>
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
                        <PanelFrame on_close=Callback::new(move |_| panel.close())>
                            <AccommodationDetails
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

async fn fetch_accommodations() -> Result<Vec<Accommodation>, String> {
    api_utils::get_json(&Accommodation::api_path()).await
}

async fn delete_accommodation(id: &str) -> Result<(), String> {
    api_utils::delete(&format!("{}/{}", Accommodation::api_path(), id)).await
}

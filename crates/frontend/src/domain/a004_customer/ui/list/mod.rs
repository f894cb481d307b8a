use crate::domain::a004_customer::ui::details::CustomerDetails;
use crate::shared::api_utils;
use crate::shared::components::{StatusBadge, TableCheckbox};
use crate::shared::date_utils::format_timestamp;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    create_sort_toggle, get_sort_indicator, highlight_matches, sort_list, SearchInput, Searchable,
    Sortable,
};
use crate::shared::overlay::PanelFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::panel_state::PanelController;
use contracts::domain::a004_customer::aggregate::Customer;
use contracts::domain::a004_customer::list_config::list_view_config;
use contracts::domain::common::{AggregateId, AggregateRoot};
use contracts::enums::RecordStatus;
use leptos::prelude::*;
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct CustomerRow {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub status: RecordStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Customer> for CustomerRow {
    fn from(c: Customer) -> Self {
        Self {
            id: c.base.id.as_string(),
            full_name: c.full_name,
            email: c.email,
            phone: c.phone,
            status: c.status,
            created_at: c.base.metadata.created_at,
        }
    }
}

impl Searchable for CustomerRow {
    fn matches_filter(&self, filter: &str) -> bool {
        self.full_name
            .to_lowercase()
            .contains(&filter.to_lowercase())
    }

    fn get_field_value(&self, field: &str) -> Option<String> {
        match field {
            "full_name" => Some(self.full_name.clone()),
            "email" => Some(self.email.clone()),
            "phone" => Some(self.phone.clone()),
            _ => None,
        }
    }
}

impl Sortable for CustomerRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "email" => self.email.cmp(&other.email),
            "phone" => self.phone.cmp(&other.phone),
            "status" => self.status.code().cmp(other.status.code()),
            "created_at" => self.created_at.cmp(&other.created_at),
            _ => self.full_name.cmp(&other.full_name),
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn CustomerList() -> impl IntoView {
    let config = list_view_config();
    let (items, set_items) = signal::<Vec<CustomerRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (search, set_search) = signal(String::new());
    let (status_filter, set_status_filter) = signal(String::new());
    // Значения фильтров со свободным вводом, по id из конфигурации
    let (text_filters, set_text_filters) = signal::<BTreeMap<String, String>>(BTreeMap::new());
    let (sort_field, set_sort_field) = signal(config.default_order.column.to_string());
    let (sort_ascending, set_sort_ascending) = signal(config.default_order.ascending);
    let (selected, set_selected) = signal::<HashSet<String>>(HashSet::new());
    let panel = PanelController::<String>::new();

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_customers().await {
                Ok(v) => {
                    let rows: Vec<CustomerRow> = v.into_iter().map(Into::into).collect();
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
        let mut rows = items.get();
        let query = search.get();
        if query.trim().len() >= crate::shared::list_utils::MIN_FILTER_LEN {
            rows.retain(|r| r.matches_filter(&query));
        }
        let status = status_filter.get();
        if !status.is_empty() {
            rows.retain(|r| r.status.code() == status);
        }
        for (field, value) in text_filters.get() {
            let value = value.trim().to_lowercase();
            if value.is_empty() {
                continue;
            }
            rows.retain(|r| {
                r.get_field_value(&field)
                    .map(|v| v.to_lowercase().contains(&value))
                    .unwrap_or(false)
            });
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
                if let Err(e) = delete_customer(&id).await {
                    log::warn!("delete customer {}: {}", id, e);
                }
            }
        });
        fetch();
        set_selected.set(HashSet::new());
    };

    fetch();

    view! {
        <div class="page" id="a004_customer--list" data-page-category=PAGE_CAT_LIST>
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{Customer::list_name()}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| panel.open_create()>
                        {icon("plus")}
                        {"Новый клиент"}
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
                    placeholder="Имя клиента..."
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
                // Фильтры со свободным вводом приходят из конфигурации;
                // поиск по имени уже занят полем выше
                {config
                    .filters
                    .iter()
                    .filter(|spec| spec.is_free_text() && spec.id != "full_name")
                    .map(|spec| {
                        let field = spec.id;
                        view! {
                            <input
                                type="text"
                                class="filter-input"
                                placeholder=spec.label
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    set_text_filters.update(|filters| {
                                        if value.trim().is_empty() {
                                            filters.remove(field);
                                        } else {
                                            filters.insert(field.to_string(), value);
                                        }
                                    });
                                }
                            />
                        }
                    })
                    .collect_view()}
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
                                    "full_name",
                                    sort_field.into(),
                                    set_sort_field,
                                    set_sort_ascending,
                                )
                            >
                                {"Имя"}
                                {move || get_sort_indicator(&sort_field.get(), "full_name", sort_ascending.get())}
                            </th>
                            <th
                                class="table__header-cell table__header-cell--sortable"
                                on:click=create_sort_toggle(
                                    "email",
                                    sort_field.into(),
                                    set_sort_field,
                                    set_sort_ascending,
                                )
                            >
                                {"Email"}
                                {move || get_sort_indicator(&sort_field.get(), "email", sort_ascending.get())}
                            </th>
                            <th class="table__header-cell">{"Телефон"}</th>
                            <th class="table__header-cell">{"Статус"}</th>
                            <th
                                class="table__header-cell table__header-cell--sortable"
                                on:click=create_sort_toggle(
                                    "created_at",
                                    sort_field.into(),
                                    set_sort_field,
                                    set_sort_ascending,
                                )
                            >
                                {"Создан"}
                                {move || get_sort_indicator(&sort_field.get(), "created_at", sort_ascending.get())}
                            </th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || rows().into_iter().map(|row| {
                            let id = row.id.clone();
                            let id_for_click = id.clone();
                            let id_for_checkbox = id.clone();
                            let id_for_toggle = id.clone();
                            let is_selected = selected.get().contains(&id);
                            let query = search.get();
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
                                    <td class="table__cell">
                                        {highlight_matches(&row.full_name, &query)}
                                    </td>
                                    <td class="table__cell">{row.email}</td>
                                    <td class="table__cell">{row.phone}</td>
                                    <td class="table__cell">
                                        <StatusBadge
                                            code=row.status.code()
                                            label=row.status.display_name()
                                        />
                                    </td>
                                    <td class="table__cell">{format_timestamp(row.created_at)}</td>
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
                            <CustomerDetails
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

async fn fetch_customers() -> Result<Vec<Customer>, String> {
    api_utils::get_json(&Customer::api_path()).await
}

async fn delete_customer(id: &str) -> Result<(), String> {
    api_utils::delete(&format!("{}/{}", Customer::api_path(), id)).await
}

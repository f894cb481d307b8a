use crate::domain::a003_delivery_schedule::ui::details::DeliveryScheduleDetails;
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
use contracts::domain::a003_delivery_schedule::aggregate::DeliverySchedule;
use contracts::domain::a003_delivery_schedule::list_config::list_view_config;
use contracts::domain::common::{AggregateId, AggregateRoot};
use contracts::enums::RecordStatus;
use leptos::prelude::*;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct DeliveryScheduleRow {
    pub id: String,
    pub zone: String,
    pub weekday: u8,
    pub cutoff_time: String,
    pub fee: f64,
    pub status: RecordStatus,
}

impl From<DeliverySchedule> for DeliveryScheduleRow {
    fn from(d: DeliverySchedule) -> Self {
        Self {
            id: d.base.id.as_string(),
            zone: d.zone,
            weekday: d.weekday,
            cutoff_time: d.cutoff_time,
            fee: d.fee,
            status: d.status,
        }
    }
}

impl Searchable for DeliveryScheduleRow {
    fn matches_filter(&self, filter: &str) -> bool {
        self.zone.to_lowercase().contains(&filter.to_lowercase())
    }

    fn get_field_value(&self, field: &str) -> Option<String> {
        match field {
            "zone" => Some(self.zone.clone()),
            _ => None,
        }
    }
}

impl Sortable for DeliveryScheduleRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "weekday" => self.weekday.cmp(&other.weekday),
            "cutoff_time" => self.cutoff_time.cmp(&other.cutoff_time),
            "fee" => self.fee.partial_cmp(&other.fee).unwrap_or(Ordering::Equal),
            "status" => self.status.code().cmp(other.status.code()),
            _ => self.zone.cmp(&other.zone),
        }
    }
}

/// Подпись дня недели из конфигурации фасета
fn weekday_label(weekday: u8) -> &'static str {
    let code = weekday.to_string();
    list_view_config()
        .filter("weekday")
        .and_then(|spec| spec.options.iter().find(|o| o.value == code))
        .map(|o| o.label)
        .unwrap_or("?")
}

#[component]
#[allow(non_snake_case)]
pub fn DeliveryScheduleList() -> impl IntoView {
    let config = list_view_config();
    let (items, set_items) = signal::<Vec<DeliveryScheduleRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (search, set_search) = signal(String::new());
    let (status_filter, set_status_filter) = signal(String::new());
    let (weekday_filter, set_weekday_filter) = signal(String::new());
    let (sort_field, set_sort_field) = signal(config.default_order.column.to_string());
    let (sort_ascending, set_sort_ascending) = signal(config.default_order.ascending);
    let (selected, set_selected) = signal::<HashSet<String>>(HashSet::new());
    let panel = PanelController::<String>::new();

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_schedules().await {
                Ok(v) => {
                    let rows: Vec<DeliveryScheduleRow> = v.into_iter().map(Into::into).collect();
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
        let weekday = weekday_filter.get();
        if !weekday.is_empty() {
            rows.retain(|r| r.weekday.to_string() == weekday);
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
                if let Err(e) = delete_schedule(&id).await {
                    log::warn!("delete delivery schedule {}: {}", id, e);
                }
            }
        });
        fetch();
        set_selected.set(HashSet::new());
    };

    fetch();

    view! {
        <div class="page" id="a003_delivery_schedule--list" data-page-category=PAGE_CAT_LIST>
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{DeliverySchedule::list_name()}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| panel.open_create()>
                        {icon("plus")}
                        {"Новый график"}
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
                    placeholder="Зона доставки..."
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
                <select
                    class="filter-select"
                    on:change=move |ev| set_weekday_filter.set(event_target_value(&ev))
                >
                    <option value="" selected=move || weekday_filter.get().is_empty()>
                        {"Все дни"}
                    </option>
                    {config
                        .filter("weekday")
                        .map(|spec| spec.options)
                        .unwrap_or_default()
                        .iter()
                        .map(|o| {
                            let value = o.value;
                            view! {
                                <option
                                    value=value
                                    selected=move || weekday_filter.get() == value
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
                                    "zone",
                                    sort_field.into(),
                                    set_sort_field,
                                    set_sort_ascending,
                                )
                            >
                                {"Зона"}
                                {move || get_sort_indicator(&sort_field.get(), "zone", sort_ascending.get())}
                            </th>
                            <th
                                class="table__header-cell table__header-cell--sortable"
                                on:click=create_sort_toggle(
                                    "weekday",
                                    sort_field.into(),
                                    set_sort_field,
                                    set_sort_ascending,
                                )
                            >
                                {"День недели"}
                                {move || get_sort_indicator(&sort_field.get(), "weekday", sort_ascending.get())}
                            </th>
                            <th class="table__header-cell">{"Приём заказов до"}</th>
                            <th
                                class="table__header-cell table__header-cell--sortable"
                                on:click=create_sort_toggle(
                                    "fee",
                                    sort_field.into(),
                                    set_sort_field,
                                    set_sort_ascending,
                                )
                            >
                                {"Стоимость"}
                                {move || get_sort_indicator(&sort_field.get(), "fee", sort_ascending.get())}
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
                                    <td class="table__cell">{row.zone}</td>
                                    <td class="table__cell">{weekday_label(row.weekday)}</td>
                                    <td class="table__cell">{row.cutoff_time}</td>
                                    <td class="table__cell table__cell--number">
                                        {format!("{:.2}", row.fee)}
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
                            <DeliveryScheduleDetails
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

async fn fetch_schedules() -> Result<Vec<DeliverySchedule>, String> {
    api_utils::get_json(&DeliverySchedule::api_path()).await
}

async fn delete_schedule(id: &str) -> Result<(), String> {
    api_utils::delete(&format!("{}/{}", DeliverySchedule::api_path(), id)).await
}

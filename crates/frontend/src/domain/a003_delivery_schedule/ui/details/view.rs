use super::view_model::DeliveryScheduleDetailsViewModel;
use crate::shared::icons::icon;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a003_delivery_schedule::list_config::list_view_config;
use contracts::enums::RecordStatus;
use leptos::prelude::*;
use std::sync::Arc;

#[component]
pub fn DeliveryScheduleDetails(
    id: Option<String>,
    on_saved: Arc<dyn Fn(()) + Send + Sync>,
    on_cancel: Arc<dyn Fn(()) + Send + Sync>,
) -> impl IntoView {
    let vm = DeliveryScheduleDetailsViewModel::new();
    vm.load_if_needed(id);

    let vm_clone = vm.clone();

    // Варианты дня недели совпадают с фасетом списка
    let weekday_options = list_view_config()
        .filter("weekday")
        .map(|spec| spec.options)
        .unwrap_or_default();

    view! {
        <div class="details-container delivery-schedule-details" id="a003_delivery_schedule--detail" data-page-category=PAGE_CAT_DETAIL>
            <div class="details-header">
                <h3>
                    {
                        let vm = vm_clone.clone();
                        move || if vm.is_edit_mode()() {
                            "Редактирование графика доставки"
                        } else {
                            "Новый график доставки"
                        }
                    }
                </h3>
            </div>

            {
                let vm = vm_clone.clone();
                move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })
            }

            <div class="details-form">
                <div class="form-group">
                    <label for="zone">{"Зона доставки"}</label>
                    <input
                        type="text"
                        id="zone"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().zone
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.zone = event_target_value(&ev));
                            }
                        }
                        placeholder="Город, район..."
                    />
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="weekday">{"День недели"}</label>
                        <select
                            id="weekday"
                            on:change={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    let value = event_target_value(&ev).parse().unwrap_or(1);
                                    vm.form.update(|f| f.weekday = value);
                                }
                            }
                        >
                            {weekday_options.iter().map(|o| {
                                let vm = vm_clone.clone();
                                let value = o.value;
                                view! {
                                    <option
                                        value=value
                                        selected=move || vm.form.get().weekday.to_string() == value
                                    >
                                        {o.label}
                                    </option>
                                }
                            }).collect_view()}
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="cutoff_time">{"Приём заказов до"}</label>
                        <input
                            type="time"
                            id="cutoff_time"
                            prop:value={
                                let vm = vm_clone.clone();
                                move || vm.form.get().cutoff_time
                            }
                            on:input={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    vm.form.update(|f| f.cutoff_time = event_target_value(&ev));
                                }
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="fee">{"Стоимость, ₽"}</label>
                        <input
                            type="number"
                            id="fee"
                            min="0"
                            step="0.01"
                            prop:value={
                                let vm = vm_clone.clone();
                                move || vm.form.get().fee.to_string()
                            }
                            on:input={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    let value = event_target_value(&ev).parse().unwrap_or(0.0);
                                    vm.form.update(|f| f.fee = value);
                                }
                            }
                        />
                    </div>
                </div>

                <div class="form-group">
                    <label for="status">{"Статус"}</label>
                    <select
                        id="status"
                        on:change={
                            let vm = vm_clone.clone();
                            move |ev| {
                                if let Some(status) = RecordStatus::from_code(&event_target_value(&ev)) {
                                    vm.form.update(|f| f.status = status);
                                }
                            }
                        }
                    >
                        {RecordStatus::all().into_iter().map(|status| {
                            let vm = vm_clone.clone();
                            view! {
                                <option
                                    value=status.code()
                                    selected=move || vm.form.get().status == status
                                >
                                    {status.display_name()}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>
            </div>

            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    on:click={
                        let vm = vm_clone.clone();
                        let on_saved = on_saved.clone();
                        move |_| vm.save_command(on_saved.clone())
                    }
                    disabled={
                        let vm = vm_clone.clone();
                        move || !vm.is_form_valid()()
                    }
                >
                    {icon("save")}
                    {
                        let vm = vm_clone.clone();
                        move || if vm.is_edit_mode()() { "Сохранить" } else { "Создать" }
                    }
                </button>
                <button
                    class="btn btn-secondary"
                    on:click=move |_| (on_cancel)(())
                >
                    {icon("cancel")}
                    {"Отмена"}
                </button>
            </div>
        </div>
    }
}

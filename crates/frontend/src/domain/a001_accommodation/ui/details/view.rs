use super::view_model::AccommodationDetailsViewModel;
use crate::shared::icons::icon;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::enums::RecordStatus;
use leptos::prelude::*;
use std::sync::Arc;

#[component]
pub fn AccommodationDetails(
    id: Option<String>,
    on_saved: Arc<dyn Fn(()) + Send + Sync>,
    on_cancel: Arc<dyn Fn(()) + Send + Sync>,
) -> impl IntoView {
    let vm = AccommodationDetailsViewModel::new();
    vm.load_if_needed(id);

    let vm_clone = vm.clone();

    view! {
        <div class="details-container accommodation-details" id="a001_accommodation--detail" data-page-category=PAGE_CAT_DETAIL>
            <div class="details-header">
                <h3>
                    {
                        let vm = vm_clone.clone();
                        move || if vm.is_edit_mode()() {
                            "Редактирование размещения"
                        } else {
                            "Новое размещение"
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
                    <label for="name">{"Название"}</label>
                    <input
                        type="text"
                        id="name"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().name
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.name = event_target_value(&ev));
                            }
                        }
                        placeholder="Гостевой дом, номер..."
                    />
                </div>

                <div class="form-group">
                    <label for="description">{"Описание"}</label>
                    <textarea
                        id="description"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().description
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.description = event_target_value(&ev));
                            }
                        }
                        placeholder="Что увидит гость в карточке размещения"
                        rows="4"
                    />
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="capacity">{"Вместимость, гостей"}</label>
                        <input
                            type="number"
                            id="capacity"
                            min="1"
                            prop:value={
                                let vm = vm_clone.clone();
                                move || vm.form.get().capacity.to_string()
                            }
                            on:input={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    let value = event_target_value(&ev).parse().unwrap_or(1);
                                    vm.form.update(|f| f.capacity = value);
                                }
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="price_per_night">{"Цена за ночь, ₽"}</label>
                        <input
                            type="number"
                            id="price_per_night"
                            min="0"
                            step="0.01"
                            prop:value={
                                let vm = vm_clone.clone();
                                move || vm.form.get().price_per_night.to_string()
                            }
                            on:input={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    let value = event_target_value(&ev).parse().unwrap_or(0.0);
                                    vm.form.update(|f| f.price_per_night = value);
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

use super::view_model::WineDetailsViewModel;
use crate::shared::icons::icon;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::enums::RecordStatus;
use leptos::prelude::*;
use std::sync::Arc;

#[component]
pub fn WineDetails(
    id: Option<String>,
    on_saved: Arc<dyn Fn(()) + Send + Sync>,
    on_cancel: Arc<dyn Fn(()) + Send + Sync>,
) -> impl IntoView {
    let vm = WineDetailsViewModel::new();
    vm.load_if_needed(id);

    // Clone vm for multiple closures
    let vm_clone = vm.clone();

    view! {
        <div class="details-container wine-details" id="a006_wine--detail" data-page-category=PAGE_CAT_DETAIL>
            <div class="details-header">
                <h3>
                    {
                        let vm = vm_clone.clone();
                        move || if vm.is_edit_mode()() { "Редактирование вина" } else { "Новое вино" }
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
                        placeholder="Введите название вина"
                    />
                </div>

                <div class="form-group">
                    <label for="producer">{"Производитель"}</label>
                    <input
                        type="text"
                        id="producer"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().producer
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.producer = event_target_value(&ev));
                            }
                        }
                        placeholder="Винодельня"
                    />
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="vintage">{"Год урожая"}</label>
                        <input
                            type="number"
                            id="vintage"
                            min="1900"
                            max="2100"
                            prop:value={
                                let vm = vm_clone.clone();
                                move || vm.form.get().vintage.to_string()
                            }
                            on:input={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    let value = event_target_value(&ev).parse().unwrap_or(0);
                                    vm.form.update(|f| f.vintage = value);
                                }
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="grape_variety">{"Сорт винограда"}</label>
                        <input
                            type="text"
                            id="grape_variety"
                            prop:value={
                                let vm = vm_clone.clone();
                                move || vm.form.get().grape_variety
                            }
                            on:input={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    vm.form.update(|f| f.grape_variety = event_target_value(&ev));
                                }
                            }
                            placeholder="Саперави, Рислинг..."
                        />
                    </div>

                    <div class="form-group">
                        <label for="volume_ml">{"Объём, мл"}</label>
                        <select
                            id="volume_ml"
                            on:change={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    let value = event_target_value(&ev).parse().unwrap_or(750);
                                    vm.form.update(|f| f.volume_ml = value);
                                }
                            }
                        >
                            {vec![375, 750, 1500].into_iter().map(|volume| {
                                let vm = vm_clone.clone();
                                view! {
                                    <option
                                        value=volume.to_string()
                                        selected=move || vm.form.get().volume_ml == volume
                                    >
                                        {volume.to_string()}
                                    </option>
                                }
                            }).collect_view()}
                        </select>
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="price">{"Цена, ₽"}</label>
                        <input
                            type="number"
                            id="price"
                            min="0"
                            step="0.01"
                            prop:value={
                                let vm = vm_clone.clone();
                                move || vm.form.get().price.to_string()
                            }
                            on:input={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    let value = event_target_value(&ev).parse().unwrap_or(0.0);
                                    vm.form.update(|f| f.price = value);
                                }
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="stock">{"Остаток, бут."}</label>
                        <input
                            type="number"
                            id="stock"
                            min="0"
                            prop:value={
                                let vm = vm_clone.clone();
                                move || vm.form.get().stock.to_string()
                            }
                            on:input={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    let value = event_target_value(&ev).parse().unwrap_or(0);
                                    vm.form.update(|f| f.stock = value);
                                }
                            }
                        />
                    </div>
                </div>

                <div class="form-group">
                    <label for="image">{"Изображение (URL)"}</label>
                    <input
                        type="text"
                        id="image"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().image
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.image = event_target_value(&ev));
                            }
                        }
                        placeholder="/media/wines/..."
                    />
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

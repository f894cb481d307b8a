use super::view_model::PaymentMethodDetailsViewModel;
use crate::shared::icons::icon;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::enums::PaymentMethodStatus;
use leptos::prelude::*;
use std::sync::Arc;

#[component]
pub fn PaymentMethodDetails(
    id: Option<String>,
    on_saved: Arc<dyn Fn(()) + Send + Sync>,
    on_cancel: Arc<dyn Fn(()) + Send + Sync>,
) -> impl IntoView {
    let vm = PaymentMethodDetailsViewModel::new();
    vm.load_if_needed(id);

    let vm_clone = vm.clone();

    view! {
        <div class="details-container payment-method-details" id="a005_payment_method--detail" data-page-category=PAGE_CAT_DETAIL>
            <div class="details-header">
                <h3>
                    {
                        let vm = vm_clone.clone();
                        move || if vm.is_edit_mode()() {
                            "Редактирование способа оплаты"
                        } else {
                            "Новый способ оплаты"
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
                        placeholder="СБП, карта онлайн..."
                    />
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="provider_code">{"Код провайдера"}</label>
                        <input
                            type="text"
                            id="provider_code"
                            prop:value={
                                let vm = vm_clone.clone();
                                move || vm.form.get().provider_code
                            }
                            on:input={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    vm.form.update(|f| f.provider_code = event_target_value(&ev));
                                }
                            }
                            placeholder="sbp, card-online, cash"
                        />
                    </div>

                    <div class="form-group">
                        <label for="commission_percent">{"Комиссия, %"}</label>
                        <input
                            type="number"
                            id="commission_percent"
                            min="0"
                            max="100"
                            step="0.1"
                            prop:value={
                                let vm = vm_clone.clone();
                                move || vm.form.get().commission_percent.to_string()
                            }
                            on:input={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    let value = event_target_value(&ev).parse().unwrap_or(0.0);
                                    vm.form.update(|f| f.commission_percent = value);
                                }
                            }
                        />
                    </div>
                </div>

                <div class="form-group">
                    <label for="status">{"Статус"}</label>
                    // Черновиков у способов оплаты нет
                    <select
                        id="status"
                        on:change={
                            let vm = vm_clone.clone();
                            move |ev| {
                                if let Some(status) =
                                    PaymentMethodStatus::from_code(&event_target_value(&ev))
                                {
                                    vm.form.update(|f| f.status = status);
                                }
                            }
                        }
                    >
                        {PaymentMethodStatus::all().into_iter().map(|status| {
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

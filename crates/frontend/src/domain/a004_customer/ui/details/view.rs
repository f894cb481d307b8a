use super::view_model::CustomerDetailsViewModel;
use crate::shared::icons::icon;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::enums::RecordStatus;
use leptos::prelude::*;
use std::sync::Arc;

#[component]
pub fn CustomerDetails(
    id: Option<String>,
    on_saved: Arc<dyn Fn(()) + Send + Sync>,
    on_cancel: Arc<dyn Fn(()) + Send + Sync>,
) -> impl IntoView {
    let vm = CustomerDetailsViewModel::new();
    vm.load_if_needed(id);

    let vm_clone = vm.clone();

    view! {
        <div class="details-container customer-details" id="a004_customer--detail" data-page-category=PAGE_CAT_DETAIL>
            <div class="details-header">
                <h3>
                    {
                        let vm = vm_clone.clone();
                        move || if vm.is_edit_mode()() { "Редактирование клиента" } else { "Новый клиент" }
                    }
                </h3>
            </div>

            {
                let vm = vm_clone.clone();
                move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })
            }

            <div class="details-form">
                <div class="form-group">
                    <label for="full_name">{"Имя"}</label>
                    <input
                        type="text"
                        id="full_name"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().full_name
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.full_name = event_target_value(&ev));
                            }
                        }
                        placeholder="Фамилия Имя"
                    />
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="email">{"Email"}</label>
                        <input
                            type="email"
                            id="email"
                            prop:value={
                                let vm = vm_clone.clone();
                                move || vm.form.get().email
                            }
                            on:input={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    vm.form.update(|f| f.email = event_target_value(&ev));
                                }
                            }
                            placeholder="client@example.com"
                        />
                    </div>

                    <div class="form-group">
                        <label for="phone">{"Телефон"}</label>
                        <input
                            type="tel"
                            id="phone"
                            prop:value={
                                let vm = vm_clone.clone();
                                move || vm.form.get().phone
                            }
                            on:input={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    vm.form.update(|f| f.phone = event_target_value(&ev));
                                }
                            }
                            placeholder="+7 ..."
                        />
                    </div>
                </div>

                <div class="form-group">
                    <label for="comment">{"Комментарий"}</label>
                    <textarea
                        id="comment"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().comment.clone().unwrap_or_default()
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                let value = event_target_value(&ev);
                                vm.form.update(|f| {
                                    f.comment = if value.is_empty() { None } else { Some(value) };
                                });
                            }
                        }
                        placeholder="Заметки менеджера (необязательно)"
                        rows="3"
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

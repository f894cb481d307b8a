use super::model;
use contracts::domain::a004_customer::aggregate::{Customer, CustomerDto};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use std::sync::Arc;

/// ViewModel формы клиента
#[derive(Clone)]
pub struct CustomerDetailsViewModel {
    pub form: RwSignal<CustomerDto>,
    pub error: RwSignal<Option<String>>,
}

impl CustomerDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(CustomerDto::default()),
            error: RwSignal::new(None),
        }
    }

    pub fn is_edit_mode(&self) -> impl Fn() -> bool + '_ {
        move || self.form.get().id.is_some()
    }

    pub fn is_form_valid(&self) -> impl Fn() -> bool + '_ {
        move || {
            let f = self.form.get();
            !f.full_name.trim().is_empty()
                && (!f.email.trim().is_empty() || !f.phone.trim().is_empty())
        }
    }

    /// Загрузить данные с сервера, если передан ID
    pub fn load_if_needed(&self, id: Option<String>) {
        if let Some(existing_id) = id {
            let form = self.form;
            let error = self.error;
            wasm_bindgen_futures::spawn_local(async move {
                match model::fetch_by_id(existing_id).await {
                    Ok(aggregate) => form.set(to_dto(aggregate)),
                    Err(e) => error.set(Some(format!("Ошибка загрузки: {}", e))),
                }
            });
        }
    }

    /// Сохранить форму на сервере
    pub fn save_command(&self, on_saved: Arc<dyn Fn(()) + Send + Sync>) {
        let current = self.form.get();

        if current.full_name.trim().is_empty() {
            self.error
                .set(Some("Имя клиента обязательно для заполнения".to_string()));
            return;
        }
        if current.email.trim().is_empty() && current.phone.trim().is_empty() {
            self.error.set(Some("Укажите email или телефон".to_string()));
            return;
        }
        if !current.email.trim().is_empty() && !current.email.contains('@') {
            self.error.set(Some("Некорректный email".to_string()));
            return;
        }

        let on_saved_cb = on_saved.clone();
        let error = self.error;
        wasm_bindgen_futures::spawn_local(async move {
            match model::save_form(&current).await {
                Ok(()) => (on_saved_cb)(()),
                Err(e) => error.set(Some(e)),
            }
        });
    }
}

fn to_dto(aggregate: Customer) -> CustomerDto {
    CustomerDto {
        id: Some(aggregate.base.id.as_string()),
        full_name: aggregate.full_name,
        email: aggregate.email,
        phone: aggregate.phone,
        comment: aggregate.comment,
        status: aggregate.status,
    }
}

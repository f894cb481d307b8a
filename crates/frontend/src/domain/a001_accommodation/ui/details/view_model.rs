use super::model;
use contracts::domain::a001_accommodation::aggregate::{Accommodation, AccommodationDto};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use std::sync::Arc;

/// ViewModel формы размещения
#[derive(Clone)]
pub struct AccommodationDetailsViewModel {
    pub form: RwSignal<AccommodationDto>,
    pub error: RwSignal<Option<String>>,
}

impl AccommodationDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(AccommodationDto {
                capacity: 2,
                ..Default::default()
            }),
            error: RwSignal::new(None),
        }
    }

    pub fn is_edit_mode(&self) -> impl Fn() -> bool + '_ {
        move || self.form.get().id.is_some()
    }

    pub fn is_form_valid(&self) -> impl Fn() -> bool + '_ {
        move || {
            let f = self.form.get();
            !f.name.trim().is_empty() && f.capacity >= 1
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

        if current.name.trim().is_empty() {
            self.error
                .set(Some("Название обязательно для заполнения".to_string()));
            return;
        }
        if current.capacity < 1 {
            self.error
                .set(Some("Вместимость должна быть не меньше одного гостя".to_string()));
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

fn to_dto(aggregate: Accommodation) -> AccommodationDto {
    AccommodationDto {
        id: Some(aggregate.base.id.as_string()),
        name: aggregate.name,
        description: aggregate.description,
        capacity: aggregate.capacity,
        price_per_night: aggregate.price_per_night,
        status: aggregate.status,
    }
}

use super::model;
use contracts::domain::a003_delivery_schedule::aggregate::{DeliverySchedule, DeliveryScheduleDto};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use std::sync::Arc;

/// ViewModel формы графика доставки
#[derive(Clone)]
pub struct DeliveryScheduleDetailsViewModel {
    pub form: RwSignal<DeliveryScheduleDto>,
    pub error: RwSignal<Option<String>>,
}

impl DeliveryScheduleDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(DeliveryScheduleDto {
                weekday: 1,
                cutoff_time: "12:00".to_string(),
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
            !f.zone.trim().is_empty() && (1..=7).contains(&f.weekday)
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

        if current.zone.trim().is_empty() {
            self.error
                .set(Some("Зона доставки обязательна для заполнения".to_string()));
            return;
        }
        if current.cutoff_time.split_once(':').is_none() {
            self.error
                .set(Some("Время приёма заказов должно быть в формате HH:MM".to_string()));
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

fn to_dto(aggregate: DeliverySchedule) -> DeliveryScheduleDto {
    DeliveryScheduleDto {
        id: Some(aggregate.base.id.as_string()),
        zone: aggregate.zone,
        weekday: aggregate.weekday,
        cutoff_time: aggregate.cutoff_time,
        fee: aggregate.fee,
        status: aggregate.status,
    }
}

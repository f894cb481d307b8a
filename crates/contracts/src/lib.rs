//! Контракты данных бэкофиса: типы агрегатов, статусы, конфигурация списков.
//!
//! Крейт не содержит UI и сетевого кода — только типы, которыми обмениваются
//! frontend и серверный API.

pub mod domain;
pub mod enums;
pub mod shared;

use super::EntityMetadata;

/// Трейт для корня агрегата
///
/// Определяет обязательные методы экземпляра и статические метаданные
/// класса агрегата, которые использует UI и слой запросов.
pub trait AggregateRoot {
    /// Тип идентификатора агрегата
    type Id;

    // ============================================================================
    // Методы экземпляра (данные конкретной записи)
    // ============================================================================

    /// Получить ID записи
    fn id(&self) -> Self::Id;

    /// Получить метаданные жизненного цикла
    fn metadata(&self) -> &EntityMetadata;

    /// Получить изменяемые метаданные
    fn metadata_mut(&mut self) -> &mut EntityMetadata;

    // ============================================================================
    // Метаданные класса агрегата (статические данные)
    // ============================================================================

    /// Индекс агрегата в системе (например, "a006")
    fn aggregate_index() -> &'static str;

    /// Имя коллекции для API (например, "wine")
    fn collection_name() -> &'static str;

    /// Имя элемента для UI (единственное число, например, "Вино")
    fn element_name() -> &'static str;

    /// Имя списка для UI (множественное число, например, "Вина")
    fn list_name() -> &'static str;

    // ============================================================================
    // Методы с реализацией по умолчанию
    // ============================================================================

    /// Полное имя агрегата в системе (например, "a006_wine")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }

    /// Базовый путь REST API коллекции (например, "/api/wine")
    fn api_path() -> String {
        format!("/api/{}", Self::collection_name())
    }
}

//! Состояние панели создания/редактирования записи.
//!
//! Каждая списковая форма держит ровно один `PanelController` на время
//! своей жизни: он решает, какая панель (создание или редактирование
//! конкретной записи) смонтирована над списком. Контроллер создаётся в
//! области видимости страницы и передаётся дочерним компонентам значением,
//! поэтому «обращение вне инициализированной области» невозможно по типам.

use leptos::prelude::*;

/// Снимок состояния панели одной сущности.
///
/// Режимы взаимоисключающие: открыта либо панель создания, либо панель
/// редактирования одной записи, либо ничего.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelState<Id> {
    pub create_open: bool,
    pub edit_target: Option<Id>,
}

impl<Id> PanelState<Id> {
    /// Состояние «всё закрыто»
    pub fn closed() -> Self {
        Self {
            create_open: false,
            edit_target: None,
        }
    }

    pub fn is_closed(&self) -> bool {
        !self.create_open && self.edit_target.is_none()
    }

    /// Единственная функция переходов.
    ///
    /// - `open == false` закрывает обе панели безусловно;
    /// - `open == true` с `id` открывает редактирование и сбрасывает
    ///   флаг создания;
    /// - `open == true` без `id` открывает создание и сбрасывает цель
    ///   редактирования.
    pub fn apply(self, open: bool, id: Option<Id>) -> Self {
        match (open, id) {
            (false, _) => Self::closed(),
            (true, Some(id)) => Self {
                create_open: false,
                edit_target: Some(id),
            },
            (true, None) => Self {
                create_open: true,
                edit_target: None,
            },
        }
    }
}

impl<Id> Default for PanelState<Id> {
    fn default() -> Self {
        Self::closed()
    }
}

/// Контроллер панели: единственный источник истины для открытой панели
/// одной сущности.
///
/// Обобщён по типу идентификатора, чтобы каждая списковая форма не
/// копировала машину переходов заново.
#[derive(Debug)]
pub struct PanelController<Id>
where
    Id: Clone + PartialEq + Send + Sync + 'static,
{
    state: RwSignal<PanelState<Id>>,
}

// RwSignal копируется независимо от Id, derive здесь навесил бы лишние
// ограничения на Id
impl<Id: Clone + PartialEq + Send + Sync + 'static> Clone for PanelController<Id> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Id: Clone + PartialEq + Send + Sync + 'static> Copy for PanelController<Id> {}

impl<Id: Clone + PartialEq + Send + Sync + 'static> PanelController<Id> {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(PanelState::closed()),
        }
    }

    /// Текущее состояние (реактивное чтение)
    pub fn state(&self) -> PanelState<Id> {
        self.state.get()
    }

    /// Единственная точка мутации состояния панели
    pub fn set_open_state(&self, open: bool, id: Option<Id>) {
        let next = self.state.get_untracked().apply(open, id);
        self.state.set(next);
    }

    pub fn open_create(&self) {
        self.set_open_state(true, None);
    }

    pub fn open_edit(&self, id: Id) {
        self.set_open_state(true, Some(id));
    }

    pub fn close(&self) {
        self.set_open_state(false, None);
    }

    /// Открыта ли хоть какая-то панель (реактивное чтение)
    pub fn is_open(&self) -> bool {
        !self.state.get().is_closed()
    }

    /// Открыта ли панель создания (реактивное чтение)
    pub fn create_open(&self) -> bool {
        self.state.get().create_open
    }

    /// Цель редактирования, если открыта панель редактирования
    pub fn edit_target(&self) -> Option<Id> {
        self.state.get().edit_target
    }
}

impl<Id: Clone + PartialEq + Send + Sync + 'static> Default for PanelController<Id> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_from_any_state_yields_closed() {
        for start in [
            PanelState::<String>::closed(),
            PanelState::closed().apply(true, None),
            PanelState::closed().apply(true, Some("a".to_string())),
        ] {
            let closed = start.apply(false, None);
            assert!(closed.is_closed());
            assert!(!closed.create_open);
            assert_eq!(closed.edit_target, None);
        }
    }

    #[test]
    fn test_close_ignores_supplied_id() {
        let state = PanelState::closed()
            .apply(true, Some("a".to_string()))
            .apply(false, Some("b".to_string()));
        assert!(state.is_closed());
    }

    #[test]
    fn test_edit_overwrites_without_accumulation() {
        let controller = PanelController::<String>::new();
        controller.set_open_state(true, Some("record-1".to_string()));
        assert_eq!(controller.state().edit_target.as_deref(), Some("record-1"));
        assert!(!controller.state().create_open);

        controller.set_open_state(true, Some("record-2".to_string()));
        assert_eq!(controller.state().edit_target.as_deref(), Some("record-2"));
        assert!(!controller.state().create_open);
    }

    #[test]
    fn test_create_clears_edit_target() {
        let controller = PanelController::<String>::new();
        controller.set_open_state(true, None);
        let state = controller.state();
        assert!(state.create_open);
        assert_eq!(state.edit_target, None);
    }

    #[test]
    fn test_edit_then_create_leaves_no_residual_target() {
        // Переход Editing -> Creating не должен оставить старую цель
        let controller = PanelController::<String>::new();
        controller.set_open_state(true, Some("A".to_string()));
        controller.set_open_state(true, None);
        let state = controller.state();
        assert!(state.create_open);
        assert_eq!(state.edit_target, None);
    }

    #[test]
    fn test_controller_is_generic_over_id_type() {
        let controller = PanelController::<i64>::new();
        controller.open_edit(42);
        assert_eq!(controller.edit_target(), Some(42));
        controller.close();
        assert!(controller.state().is_closed());
    }
}

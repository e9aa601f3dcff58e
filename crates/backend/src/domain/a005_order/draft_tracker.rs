use super::builder::OrderBuilder;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

use crate::shared::error::PosError;

/// Открытые черновики заказов (in-memory, по одному на сессию ввода)
#[derive(Clone, Default)]
pub struct DraftTracker {
    drafts: Arc<RwLock<HashMap<Uuid, OrderBuilder>>>,
}

impl DraftTracker {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<Uuid, OrderBuilder>> {
        self.drafts.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<Uuid, OrderBuilder>> {
        self.drafts.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Зарегистрировать новый черновик
    pub fn create(&self, builder: OrderBuilder) -> Uuid {
        let draft_id = Uuid::new_v4();
        self.write().insert(draft_id, builder);
        draft_id
    }

    /// Выполнить операцию над черновиком под блокировкой записи
    pub fn with_draft<T>(
        &self,
        draft_id: Uuid,
        f: impl FnOnce(&mut OrderBuilder) -> Result<T, PosError>,
    ) -> Result<T, PosError> {
        let mut drafts = self.write();
        let builder = drafts
            .get_mut(&draft_id)
            .ok_or_else(|| PosError::not_found(format!("borrador {}", draft_id)))?;
        f(builder)
    }

    /// Прочитать черновик без изменения
    pub fn inspect<T>(
        &self,
        draft_id: Uuid,
        f: impl FnOnce(&OrderBuilder) -> T,
    ) -> Result<T, PosError> {
        let drafts = self.read();
        drafts
            .get(&draft_id)
            .map(f)
            .ok_or_else(|| PosError::not_found(format!("borrador {}", draft_id)))
    }

    pub fn remove(&self, draft_id: Uuid) -> Option<OrderBuilder> {
        self.write().remove(&draft_id)
    }

    /// Вернуть черновик под прежним идентификатором
    pub fn restore(&self, draft_id: Uuid, builder: OrderBuilder) {
        self.write().insert(draft_id, builder);
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }
}

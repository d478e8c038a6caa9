use crate::components::PopupLayer;
use crate::error::PopupError;
use crate::hooks::PopupHandle;
use crate::models::{CloseReason, PopupConfig, PopupId, PopupState};
use dioxus::prelude::*;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

/// Ids are unique across providers so DOM ids and document listeners never collide.
static POPUP_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

#[derive(Clone, Debug)]
pub struct PopupEntry {
    pub id: PopupId,
    pub config: PopupConfig,
    pub state: PopupState,
}

/// Every popup constructed under one provider, in construction order.
#[derive(Clone, Debug, Default)]
pub struct PopupRegistry {
    entries: Vec<PopupEntry>,
}

impl PopupRegistry {
    pub fn insert(&mut self, config: PopupConfig) -> PopupId {
        let id = PopupId(POPUP_ID_COUNTER.fetch_add(1, Ordering::Relaxed));
        self.entries.push(PopupEntry {
            id,
            config,
            state: PopupState::default(),
        });
        id
    }

    pub fn get(&self, id: PopupId) -> Option<&PopupEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    fn get_mut(&mut self, id: PopupId) -> Result<&mut PopupEntry, PopupError> {
        self.entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(PopupError::Destroyed(id))
    }

    pub fn ids(&self) -> Vec<PopupId> {
        self.entries.iter().map(|e| e.id).collect()
    }

    pub fn show(&mut self, id: PopupId) -> Result<bool, PopupError> {
        Ok(self.get_mut(id)?.state.show())
    }

    /// Returns whether the close fired, see [`PopupState::close`].
    pub fn close(&mut self, id: PopupId, reason: CloseReason) -> Result<bool, PopupError> {
        Ok(self.get_mut(id)?.state.close(reason))
    }

    pub fn on_close(&self, id: PopupId) -> Option<EventHandler<CloseReason>> {
        self.get(id).and_then(|e| e.config.on_close)
    }

    pub fn remove(&mut self, id: PopupId) -> Option<PopupEntry> {
        let index = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(index))
    }
}

/// Access to the registry of the nearest [`PopupProvider`].
#[derive(Clone, Copy, PartialEq)]
pub struct PopupHost {
    pub(crate) registry: Signal<PopupRegistry>,
}

impl PopupHost {
    /// Builds a new popup. It is rendered by the provider right away, hidden.
    pub fn create(&self, config: PopupConfig) -> PopupHandle {
        let mut registry = self.registry;
        let title = config.title.clone();
        let id = registry.write().insert(config);
        debug!(popup = %id, %title, "popup created");
        PopupHandle::new(*self, id)
    }

    pub fn entry(&self, id: PopupId) -> Option<PopupEntry> {
        self.registry.read().get(id).cloned()
    }

    pub fn popup_ids(&self) -> Vec<PopupId> {
        self.registry.read().ids()
    }
}

/// Hosts every popup built below it and renders them after its children.
#[component]
pub fn PopupProvider(children: Element) -> Element {
    let registry = use_signal(PopupRegistry::default);
    let host = use_context_provider(|| PopupHost { registry });

    rsx! {
        div { class: "contents",
            {children}
            PopupLayer { host }
        }
    }
}

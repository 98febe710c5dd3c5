use log::{debug, info, warn};
use thiserror::Error;
use yew::Callback;

use crate::config::DARK_MODE_KEY;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("storage rejected write to `{0}`")]
    Rejected(String),
    #[error("could not encode preference: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Key/value persistence for user preferences.
pub trait PreferenceStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// The browser's `window.localStorage`.
#[derive(Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, StoreError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(StoreError::Unavailable)
    }
}

impl PreferenceStore for LocalStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(Self::storage()?.get_item(key).ok().flatten())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|_| StoreError::Rejected(key.to_string()))
    }
}

pub fn save_flag(store: &impl PreferenceStore, key: &str, value: bool) -> Result<(), StoreError> {
    let encoded = serde_json::to_string(&value)?;
    store.write(key, &encoded)
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SubscriptionId(usize);

/// Sole owner of the dark mode flag.
///
/// Loads the persisted value once, writes it back on every change and
/// notifies subscribers after the flag flips.
pub struct ThemeController<S: PreferenceStore> {
    store: S,
    dark: bool,
    subscribers: Vec<(SubscriptionId, Callback<bool>)>,
    next_id: usize,
}

impl<S: PreferenceStore> ThemeController<S> {
    pub fn load(store: S) -> Self {
        let stored = store.read(DARK_MODE_KEY).unwrap_or_else(|err| {
            warn!("Could not read {} preference: {}", DARK_MODE_KEY, err);
            None
        });

        let decoded = match stored.as_deref().map(serde_json::from_str::<bool>) {
            Some(Ok(dark)) => Some(dark),
            Some(Err(err)) => {
                warn!("Ignoring malformed {} preference: {}", DARK_MODE_KEY, err);
                None
            }
            None => None,
        };

        let controller = Self {
            store,
            dark: decoded.unwrap_or(false),
            subscribers: Vec::new(),
            next_id: 0,
        };
        if decoded.is_none() {
            controller.persist();
        }
        debug!("Loaded theme preference, dark = {}", controller.dark);
        controller
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    pub fn set(&mut self, dark: bool) {
        let changed = self.dark != dark;
        self.dark = dark;
        self.persist();
        if changed {
            info!("Switched to {} mode", if dark { "dark" } else { "light" });
            for (_, subscriber) in &self.subscribers {
                subscriber.emit(dark);
            }
        }
    }

    pub fn toggle(&mut self) -> bool {
        self.set(!self.dark);
        self.dark
    }

    pub fn subscribe(&mut self, subscriber: Callback<bool>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, subscriber));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.retain(|(existing, _)| *existing != id);
    }

    fn persist(&self) {
        if let Err(err) = save_flag(&self.store, DARK_MODE_KEY, self.dark) {
            warn!("Could not persist {} preference: {}", DARK_MODE_KEY, err);
        }
    }
}

/// What views see of the theme: the current flag and a way to flip it.
#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    pub dark: bool,
    pub toggle: Callback<()>,
}

/// Mirrors the flag into the `dark` class on `<html>`.
pub fn apply_document_theme(dark: bool) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        warn!("No document root to apply theme to");
        return;
    };

    let classes = root.class_list();
    let result = if dark {
        classes.add_1("dark")
    } else {
        classes.remove_1("dark")
    };
    if result.is_err() {
        warn!("Failed to update document theme class");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct MemoryStore {
        values: Rc<RefCell<HashMap<String, String>>>,
    }

    impl MemoryStore {
        fn with(key: &str, value: &str) -> Self {
            let store = Self::default();
            store.values.borrow_mut().insert(key.to_string(), value.to_string());
            store
        }

        fn get(&self, key: &str) -> Option<String> {
            self.values.borrow().get(key).cloned()
        }
    }

    impl PreferenceStore for MemoryStore {
        fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
            Ok(self.get(key))
        }

        fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
            self.values.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn read(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Unavailable)
        }

        fn write(&self, key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Rejected(key.to_string()))
        }
    }

    fn recorder() -> (Rc<RefCell<Vec<bool>>>, Callback<bool>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let callback = {
            let seen = seen.clone();
            Callback::from(move |dark| seen.borrow_mut().push(dark))
        };
        (seen, callback)
    }

    #[test]
    fn first_load_defaults_to_light_and_persists_it() {
        let store = MemoryStore::default();
        let controller = ThemeController::load(store.clone());

        assert!(!controller.is_dark());
        assert_eq!(store.get(DARK_MODE_KEY).as_deref(), Some("false"));
    }

    #[test]
    fn loads_saved_preference() {
        let store = MemoryStore::with(DARK_MODE_KEY, "true");
        let controller = ThemeController::load(store);
        assert!(controller.is_dark());
    }

    #[test]
    fn malformed_preference_falls_back_to_default() {
        let store = MemoryStore::with(DARK_MODE_KEY, "yes please");
        let controller = ThemeController::load(store.clone());

        assert!(!controller.is_dark());
        assert_eq!(store.get(DARK_MODE_KEY).as_deref(), Some("false"));
    }

    #[test]
    fn toggling_twice_returns_to_default_and_store_tracks_memory() {
        let store = MemoryStore::default();
        let mut controller = ThemeController::load(store.clone());

        assert!(controller.toggle());
        assert_eq!(store.get(DARK_MODE_KEY).as_deref(), Some("true"));

        assert!(!controller.toggle());
        assert_eq!(store.get(DARK_MODE_KEY).as_deref(), Some("false"));
        assert!(!controller.is_dark());
    }

    #[test]
    fn subscribers_hear_changes_until_unsubscribed() {
        let mut controller = ThemeController::load(MemoryStore::default());
        let (seen, callback) = recorder();
        let id = controller.subscribe(callback);

        controller.toggle();
        controller.set(true);
        controller.toggle();
        controller.unsubscribe(id);
        controller.toggle();

        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn storage_failures_do_not_block_the_toggle() {
        let mut controller = ThemeController::load(BrokenStore);
        assert!(!controller.is_dark());
        assert!(controller.toggle());
        assert!(controller.is_dark());
    }

    #[test]
    fn saved_flag_is_json() {
        let store = MemoryStore::default();
        save_flag(&store, "flag", true).unwrap();
        assert_eq!(store.get("flag").as_deref(), Some("true"));
    }
}

//! Theme management with best-effort persistence.
//!
//! Provides the light/dark preference, the document presentation derived from
//! it, and a [`ThemeManager`] that keeps the three in step: every applied
//! preference is written back to the [`PreferenceStore`].

use std::fmt;

#[cfg(feature = "server")]
pub mod cookie;

/// Key under which the preference is persisted
pub const STORAGE_KEY: &str = "theme";

/// Marker class placed on the document root while dark is active
pub const DARK_MARKER: &str = "dark";

/// Theme options
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemePreference {
    #[default]
    Dark,
    Light,
}

impl ThemePreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Dark => "dark",
            ThemePreference::Light => "light",
        }
    }

    /// Parse a stored value. Only the exact literals are accepted.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "dark" => Some(ThemePreference::Dark),
            "light" => Some(ThemePreference::Light),
            _ => None,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemePreference::Dark)
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemePreference::Dark => ThemePreference::Light,
            ThemePreference::Light => ThemePreference::Dark,
        }
    }

    /// Label for the toggle control (names the theme it switches to)
    pub fn toggle_label(&self) -> &'static str {
        match self {
            ThemePreference::Dark => "Switch to light theme",
            ThemePreference::Light => "Switch to dark theme",
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Document-wide attributes for one preference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Presentation {
    pub preference: ThemePreference,
    /// Class on `<html>` (None removes the marker)
    pub root_class: Option<&'static str>,
    pub background: &'static str,
    pub foreground: &'static str,
}

impl Presentation {
    pub const DARK: Presentation = Presentation {
        preference: ThemePreference::Dark,
        root_class: Some(DARK_MARKER),
        background: "#0f172a",
        foreground: "#f8fafc",
    };

    pub const LIGHT: Presentation = Presentation {
        preference: ThemePreference::Light,
        root_class: None,
        background: "#f8fafc",
        foreground: "#0f172a",
    };

    pub fn for_preference(preference: ThemePreference) -> Self {
        match preference {
            ThemePreference::Dark => Self::DARK,
            ThemePreference::Light => Self::LIGHT,
        }
    }

    /// Inline style for `<body>`
    pub fn body_style(&self) -> String {
        format!(
            "background-color: {}; color: {};",
            self.background, self.foreground
        )
    }

    /// Opening `<html>` tag carrying the root marker
    pub fn html_open_tag(&self) -> String {
        match self.root_class {
            Some(class) => format!("<html lang=\"en\" class=\"{class}\">"),
            None => "<html lang=\"en\">".to_string(),
        }
    }
}

impl Default for Presentation {
    fn default() -> Self {
        Self::DARK
    }
}

/// Key/value storage for the preference. Best effort: reads may come back
/// empty and writes may be dropped, neither is reported.
pub trait PreferenceStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&mut self, key: &str, value: &str);
}

/// In-process store. `unavailable()` models disabled storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: std::collections::HashMap<String, String>,
    disabled: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unavailable() -> Self {
        Self {
            entries: Default::default(),
            disabled: true,
        }
    }

    /// Store pre-seeded with a raw value (may be invalid)
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        if self.disabled {
            return None;
        }
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) {
        if self.disabled {
            return;
        }
        self.entries.insert(key.to_string(), value.to_string());
    }
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for &mut T {
    fn read(&self, key: &str) -> Option<String> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) {
        (**self).write(key, value)
    }
}

/// Handle returned by [`ThemeManager::subscribe`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(ThemePreference) + Send>;

/// Theme state shared by every page rendered for one visitor.
pub struct ThemeManager<S: PreferenceStore> {
    store: S,
    current: ThemePreference,
    presentation: Presentation,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl<S: PreferenceStore> ThemeManager<S> {
    /// Load the persisted preference (dark when absent or invalid) and apply it.
    pub fn initialize(store: S) -> Self {
        let stored = store.read(STORAGE_KEY);
        let current = stored
            .as_deref()
            .and_then(ThemePreference::parse)
            .unwrap_or_default();

        if let Some(raw) = stored.as_deref() {
            if ThemePreference::parse(raw).is_none() {
                tracing::debug!("Ignoring invalid stored theme value: {:?}", raw);
            }
        }

        let mut manager = Self {
            store,
            current,
            presentation: Presentation::for_preference(current),
            listeners: Vec::new(),
            next_id: 0,
        };
        // Re-write on read so missing or invalid values get normalized
        manager.apply_preference(current);
        manager
    }

    /// Get current preference
    pub fn get(&self) -> ThemePreference {
        self.current
    }

    pub fn is_dark(&self) -> bool {
        self.current.is_dark()
    }

    /// Presentation last applied to the document
    pub fn presentation(&self) -> Presentation {
        self.presentation
    }

    /// Apply to the document and persist. Does not notify listeners.
    pub fn apply_preference(&mut self, preference: ThemePreference) {
        self.current = preference;
        self.presentation = Presentation::for_preference(preference);
        self.store.write(STORAGE_KEY, preference.as_str());
    }

    /// Set, persist, and notify listeners
    pub fn set(&mut self, preference: ThemePreference) {
        self.apply_preference(preference);
        for (_, listener) in self.listeners.iter_mut() {
            listener(preference);
        }
    }

    /// Flip dark/light. Returns the new preference.
    pub fn toggle(&mut self) -> ThemePreference {
        let next = self.current.toggled();
        self.set(next);
        next
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(ThemePreference) + Send + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false when the id was not subscribed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    /// Give the store back (e.g. to turn it into response headers)
    pub fn into_store(self) -> S {
        self.store
    }
}

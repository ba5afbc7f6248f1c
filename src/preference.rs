use thiserror::Error;

pub const DARK_MODE_KEY: &str = "darkMode";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("failed to read `{0}` from storage")]
    Read(String),
    #[error("failed to write `{0}` to storage")]
    Write(String),
}

/// Minimal string key-value interface over the browser's durable storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Applies the document-wide dark-mode flag.
pub trait DocumentFlag {
    fn apply_dark_mode(&self, enabled: bool);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn from_enabled(enabled: bool) -> Self {
        if enabled {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn as_class(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Switch to dark mode",
            Self::Dark => "Switch to light mode",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "☀",
            Self::Dark => "☾",
        }
    }
}

fn encode_flag(enabled: bool) -> &'static str {
    if enabled {
        "true"
    } else {
        "false"
    }
}

fn decode_flag(value: &str) -> bool {
    value == "true"
}

/// Dark-mode preference mirrored into durable storage.
///
/// A store built with [`PreferenceStore::session_only`] keeps working for the
/// current page view; it simply never persists anything.
pub struct PreferenceStore<S> {
    storage: Option<S>,
}

impl<S: KeyValueStore> PreferenceStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage: Some(storage),
        }
    }

    pub fn session_only() -> Self {
        Self { storage: None }
    }

    pub fn restore(&self) -> bool {
        self.storage
            .as_ref()
            .and_then(|storage| storage.get(DARK_MODE_KEY).ok().flatten())
            .is_some_and(|value| decode_flag(&value))
    }

    /// Flips the preference, applies it to the document and returns the new
    /// value. A refused write leaves the flag session-only.
    pub fn toggle(&self, current: bool, document: &impl DocumentFlag) -> bool {
        let next = !current;
        if let Some(storage) = self.storage.as_ref() {
            let _ = storage.set(DARK_MODE_KEY, encode_flag(next));
        }
        document.apply_dark_mode(next);
        next
    }
}

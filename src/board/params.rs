//! Raw parameter store backed by the URL hash fragment.
//!
//! The store only knows strings. Typed access goes through [`super::field::Field`].

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Every key the board understands.
///
/// Declaration order is the order keys are written back into the hash.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ParamKey {
    /// Selected preset name.
    Preset,
    /// Selected stage within the preset.
    PresetStage,
    /// Top-left corner caption.
    TopLeftText,
    /// Top-right corner caption.
    TopRightText,
    /// Bottom-left corner caption.
    BottomLeftText,
    /// Bottom-right corner caption.
    BottomRightText,
    /// What the center of the board shows.
    MainContentState,
    /// Question of the day.
    Qotd,
    /// Location used when generating the question of the day.
    QotdLocation,
    /// Title shown above the countdown.
    CountdownTitle,
    /// Countdown target, `H:MM`.
    CountdownToTime,
    /// Free text shown in the center.
    CenterText,
    /// Top-left notes (markdown).
    TopLeftNotes,
    /// Top-left notes font size.
    TopLeftNotesSize,
    /// Top-left notes visibility.
    ShowTopLeftNotes,
    /// Top-right notes (markdown).
    TopRightNotes,
    /// Top-right notes font size.
    TopRightNotesSize,
    /// Top-right notes visibility.
    ShowTopRightNotes,
    /// Bottom-left notes (markdown).
    BottomLeftNotes,
    /// Bottom-left notes font size.
    BottomLeftNotesSize,
    /// Bottom-left notes visibility.
    ShowBottomLeftNotes,
    /// Bottom-right notes (markdown).
    BottomRightNotes,
    /// Bottom-right notes font size.
    BottomRightNotesSize,
    /// Bottom-right notes visibility.
    ShowBottomRightNotes,
}

impl ParamKey {
    /// All keys, in declaration order.
    pub const ALL: [Self; 24] = [
        Self::Preset,
        Self::PresetStage,
        Self::TopLeftText,
        Self::TopRightText,
        Self::BottomLeftText,
        Self::BottomRightText,
        Self::MainContentState,
        Self::Qotd,
        Self::QotdLocation,
        Self::CountdownTitle,
        Self::CountdownToTime,
        Self::CenterText,
        Self::TopLeftNotes,
        Self::TopLeftNotesSize,
        Self::ShowTopLeftNotes,
        Self::TopRightNotes,
        Self::TopRightNotesSize,
        Self::ShowTopRightNotes,
        Self::BottomLeftNotes,
        Self::BottomLeftNotesSize,
        Self::ShowBottomLeftNotes,
        Self::BottomRightNotes,
        Self::BottomRightNotesSize,
        Self::ShowBottomRightNotes,
    ];

    /// Name of the key as it appears in the URL.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Preset => "preset",
            Self::PresetStage => "presetStage",
            Self::TopLeftText => "topLeftText",
            Self::TopRightText => "topRightText",
            Self::BottomLeftText => "bottomLeftText",
            Self::BottomRightText => "bottomRightText",
            Self::MainContentState => "mainContentState",
            Self::Qotd => "qotd",
            Self::QotdLocation => "qotdLocation",
            Self::CountdownTitle => "countdownTitle",
            Self::CountdownToTime => "countdownToTime",
            Self::CenterText => "centerText",
            Self::TopLeftNotes => "topLeftNotes",
            Self::TopLeftNotesSize => "topLeftNotesSize",
            Self::ShowTopLeftNotes => "showTopLeftNotes",
            Self::TopRightNotes => "topRightNotes",
            Self::TopRightNotesSize => "topRightNotesSize",
            Self::ShowTopRightNotes => "showTopRightNotes",
            Self::BottomLeftNotes => "bottomLeftNotes",
            Self::BottomLeftNotesSize => "bottomLeftNotesSize",
            Self::ShowBottomLeftNotes => "showBottomLeftNotes",
            Self::BottomRightNotes => "bottomRightNotes",
            Self::BottomRightNotesSize => "bottomRightNotesSize",
            Self::ShowBottomRightNotes => "showBottomRightNotes",
        }
    }

    /// Look a key up by its URL name.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == name)
    }
}

impl fmt::Display for ParamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw string values keyed by [`ParamKey`]. Absent keys are absent, not empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParamStore {
    values: BTreeMap<ParamKey, String>,
}

impl ParamStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a hash fragment such as `#qotd=Hi&mainContentState=text`.
    ///
    /// The leading `#` is optional. Unknown keys are dropped; for repeated keys
    /// the last occurrence wins.
    #[must_use]
    pub fn from_hash(hash: &str) -> Self {
        let fragment = hash.strip_prefix('#').unwrap_or(hash);
        let mut store = Self::new();

        for (name, value) in url::form_urlencoded::parse(fragment.as_bytes()) {
            match ParamKey::parse(&name) {
                Some(key) => store.set(key, value.into_owned()),
                None => tracing::debug!("Ignoring unknown board parameter: {name}"),
            }
        }

        store
    }

    /// Serialize back to a hash fragment (without the leading `#`).
    ///
    /// Returns an empty string when nothing is set.
    #[must_use]
    pub fn to_hash(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.values {
            serializer.append_pair(key.as_str(), value);
        }
        serializer.finish()
    }

    /// Raw value for `key`, if present.
    #[must_use]
    pub fn get(&self, key: ParamKey) -> Option<&str> {
        self.values.get(&key).map(String::as_str)
    }

    /// Store a raw value.
    pub fn set(&mut self, key: ParamKey, raw: impl Into<String>) {
        self.values.insert(key, raw.into());
    }

    /// Drop `key` from the store.
    pub fn remove(&mut self, key: ParamKey) {
        self.values.remove(&key);
    }

    /// Whether `key` has a raw value.
    #[must_use]
    pub fn contains(&self, key: ParamKey) -> bool {
        self.values.contains_key(&key)
    }

    /// Clear every key.
    pub fn reset(&mut self) {
        self.values.clear();
    }

    /// True when no key is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of keys set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }
}

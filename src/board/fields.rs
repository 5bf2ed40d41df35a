//! Definitions of every board field and the value types they cook to.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::field::{Field, RawParam, decode_bool, decode_number, encode_bool};
use super::params::ParamKey;

/// Default caption of the top-left corner (rendered as the wall clock).
pub const DEFAULT_TOP_LEFT_TEXT: &str = ":time:";
/// Default location for the question of the day.
pub const DEFAULT_QOTD_LOCATION: &str = "Vancouver, BC, Canada";
/// Default countdown title.
pub const DEFAULT_COUNTDOWN_TITLE: &str = "Break Starts";
/// Default countdown target.
pub const DEFAULT_COUNTDOWN_TO_TIME: CountdownTime = CountdownTime::new(13, 20);
/// Default notes font size.
pub const DEFAULT_NOTES_SIZE: f64 = 3.0;

/// What the center of the board shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentMode {
    /// Countdown timer.
    Timer,
    /// Free text.
    Text,
    /// Question of the day.
    #[default]
    Qotd,
}

impl ContentMode {
    /// Raw name used in the URL.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Timer => "timer",
            Self::Text => "text",
            Self::Qotd => "qotd",
        }
    }
}

impl RawParam for ContentMode {
    fn from_raw(raw: &str) -> Option<Self> {
        match raw {
            "timer" => Some(Self::Timer),
            "text" => Some(Self::Text),
            "qotd" => Some(Self::Qotd),
            _ => None,
        }
    }

    fn to_raw(&self) -> String {
        self.as_str().to_string()
    }
}

/// Wall-clock target of the countdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CountdownTime {
    /// Hour of day.
    pub hour: u32,
    /// Minute of hour.
    pub minute: u32,
}

impl CountdownTime {
    /// Create a countdown target.
    #[must_use]
    pub const fn new(hour: u32, minute: u32) -> Self {
        Self { hour, minute }
    }

    /// Decode `H:MM`. Non-numeric parts become `0`; an empty string yields nothing.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            return None;
        }

        let mut parts = raw.split(':').map(decode_part);
        let hour = parts.next().unwrap_or(0);
        let minute = parts.next().unwrap_or(0);
        Some(Self { hour, minute })
    }
}

/// One `H:MM` component. Negative values clamp to `0`, huge ones to `u32::MAX`.
// Clamped to the u32 range before the cast, so only the fraction is dropped
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn decode_part(part: &str) -> u32 {
    part.trim()
        .parse::<u32>()
        .unwrap_or_else(|_| decode_number(part).clamp(0.0, f64::from(u32::MAX)) as u32)
}

impl fmt::Display for CountdownTime {
    /// `H:MM`, carrying whole hours out of the minute.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hour = self.hour.saturating_add(self.minute / 60);
        let minute = self.minute % 60;
        write!(f, "{hour}:{minute:02}")
    }
}

impl RawParam for CountdownTime {
    fn from_raw(raw: &str) -> Option<Self> {
        Self::parse(raw)
    }

    fn to_raw(&self) -> String {
        self.to_string()
    }
}

/// A corner of the board. Each corner carries a caption and a notes panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Corner {
    /// Top left.
    TopLeft,
    /// Top right.
    TopRight,
    /// Bottom left.
    BottomLeft,
    /// Bottom right.
    BottomRight,
}

impl Corner {
    /// Every corner.
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];

    /// Caption field.
    #[must_use]
    pub fn text(self) -> Field<String> {
        let (key, default) = match self {
            Self::TopLeft => (ParamKey::TopLeftText, DEFAULT_TOP_LEFT_TEXT),
            Self::TopRight => (ParamKey::TopRightText, ""),
            Self::BottomLeft => (ParamKey::BottomLeftText, ""),
            Self::BottomRight => (ParamKey::BottomRightText, ""),
        };
        Field::with_default(key, default.to_string())
    }

    /// Notes field (markdown or HTML).
    #[must_use]
    pub fn notes(self) -> Field<String> {
        let key = match self {
            Self::TopLeft => ParamKey::TopLeftNotes,
            Self::TopRight => ParamKey::TopRightNotes,
            Self::BottomLeft => ParamKey::BottomLeftNotes,
            Self::BottomRight => ParamKey::BottomRightNotes,
        };
        Field::with_default(key, String::new())
    }

    /// Notes font size.
    #[must_use]
    pub fn notes_size(self) -> Field<f64> {
        let key = match self {
            Self::TopLeft => ParamKey::TopLeftNotesSize,
            Self::TopRight => ParamKey::TopRightNotesSize,
            Self::BottomLeft => ParamKey::BottomLeftNotesSize,
            Self::BottomRight => ParamKey::BottomRightNotesSize,
        };
        Field::with_codec(key, DEFAULT_NOTES_SIZE, |raw| Some(decode_number(raw)), None)
    }

    /// Notes visibility flag.
    #[must_use]
    pub fn show_notes(self) -> Field<bool> {
        let key = match self {
            Self::TopLeft => ParamKey::ShowTopLeftNotes,
            Self::TopRight => ParamKey::ShowTopRightNotes,
            Self::BottomLeft => ParamKey::ShowBottomLeftNotes,
            Self::BottomRight => ParamKey::ShowBottomRightNotes,
        };
        Field::with_codec(key, true, |raw| Some(decode_bool(raw)), Some(encode_bool))
    }
}

/// Selected preset, if any.
#[must_use]
pub const fn selected_preset() -> Field<Option<String>> {
    Field::with_default(ParamKey::Preset, None)
}

/// Selected stage, if any.
#[must_use]
pub const fn selected_preset_stage() -> Field<Option<String>> {
    Field::with_default(ParamKey::PresetStage, None)
}

/// Center content mode.
#[must_use]
pub const fn main_content_state() -> Field<ContentMode> {
    Field::with_default(ParamKey::MainContentState, ContentMode::Qotd)
}

/// Question of the day.
#[must_use]
pub const fn qotd() -> Field<String> {
    Field::with_default(ParamKey::Qotd, String::new())
}

/// Location fed to question generation.
#[must_use]
pub fn qotd_location() -> Field<String> {
    Field::with_default(ParamKey::QotdLocation, DEFAULT_QOTD_LOCATION.to_string())
}

/// Countdown title.
#[must_use]
pub fn countdown_title() -> Field<String> {
    Field::with_default(ParamKey::CountdownTitle, DEFAULT_COUNTDOWN_TITLE.to_string())
}

/// Countdown target time.
#[must_use]
pub const fn countdown_to_time() -> Field<CountdownTime> {
    Field::with_codec(
        ParamKey::CountdownToTime,
        DEFAULT_COUNTDOWN_TO_TIME,
        CountdownTime::parse,
        None,
    )
}

/// Free text in the center.
#[must_use]
pub const fn center_text() -> Field<String> {
    Field::with_default(ParamKey::CenterText, String::new())
}

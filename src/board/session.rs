//! The board state: a [`ParamStore`] plus typed accessors.

use serde::Serialize;

use super::field::{Field, RawParam};
use super::fields::{self, ContentMode, Corner, CountdownTime};
use super::params::ParamStore;

/// Owns the raw parameters of one board.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionBoard {
    store: ParamStore,
}

impl SessionBoard {
    /// Empty board: every field reads its default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Board decoded from a URL hash fragment.
    #[must_use]
    pub fn from_hash(hash: &str) -> Self {
        Self {
            store: ParamStore::from_hash(hash),
        }
    }

    /// Current hash fragment.
    #[must_use]
    pub fn to_hash(&self) -> String {
        self.store.to_hash()
    }

    /// Raw parameters.
    #[must_use]
    pub const fn store(&self) -> &ParamStore {
        &self.store
    }

    /// Read a field.
    #[must_use]
    pub fn get<T>(&self, field: &Field<T>) -> T
    where
        T: RawParam + Clone + PartialEq,
    {
        field.get(&self.store)
    }

    /// Write a field.
    pub fn set<T>(&mut self, field: &Field<T>, value: T)
    where
        T: RawParam + Clone + PartialEq,
    {
        field.set(&mut self.store, value);
    }

    /// Clear every parameter.
    pub fn reset(&mut self) {
        self.store.reset();
    }

    /// True when nothing has been set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Cooked view of every field.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        let cook_corner = |corner: Corner| CornerSnapshot {
            text: self.get(&corner.text()),
            notes: self.get(&corner.notes()),
            notes_size: self.get(&corner.notes_size()),
            show_notes: self.get(&corner.show_notes()),
        };

        BoardSnapshot {
            preset: self.get(&fields::selected_preset()),
            preset_stage: self.get(&fields::selected_preset_stage()),
            main_content_state: self.get(&fields::main_content_state()),
            qotd: self.get(&fields::qotd()),
            qotd_location: self.get(&fields::qotd_location()),
            countdown_title: self.get(&fields::countdown_title()),
            countdown_to_time: self.get(&fields::countdown_to_time()),
            center_text: self.get(&fields::center_text()),
            top_left: cook_corner(Corner::TopLeft),
            top_right: cook_corner(Corner::TopRight),
            bottom_left: cook_corner(Corner::BottomLeft),
            bottom_right: cook_corner(Corner::BottomRight),
            is_empty: self.is_empty(),
        }
    }
}

/// Cooked values of one corner.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CornerSnapshot {
    /// Caption.
    pub text: String,
    /// Notes body.
    pub notes: String,
    /// Notes font size.
    pub notes_size: f64,
    /// Whether the notes are shown.
    pub show_notes: bool,
}

/// Cooked values of the whole board.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSnapshot {
    /// Selected preset.
    pub preset: Option<String>,
    /// Selected stage.
    pub preset_stage: Option<String>,
    /// Center content mode.
    pub main_content_state: ContentMode,
    /// Question of the day.
    pub qotd: String,
    /// Question-of-the-day location.
    pub qotd_location: String,
    /// Countdown title.
    pub countdown_title: String,
    /// Countdown target.
    pub countdown_to_time: CountdownTime,
    /// Center text.
    pub center_text: String,
    /// Top-left corner.
    pub top_left: CornerSnapshot,
    /// Top-right corner.
    pub top_right: CornerSnapshot,
    /// Bottom-left corner.
    pub bottom_left: CornerSnapshot,
    /// Bottom-right corner.
    pub bottom_right: CornerSnapshot,
    /// True when the hash carries no parameters.
    pub is_empty: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_snapshot_is_all_defaults() {
        let snapshot = SessionBoard::new().snapshot();
        assert!(snapshot.is_empty);
        assert_eq!(snapshot.preset, None);
        assert_eq!(snapshot.main_content_state, ContentMode::Qotd);
        assert_eq!(snapshot.qotd_location, "Vancouver, BC, Canada");
        assert_eq!(snapshot.countdown_title, "Break Starts");
        assert_eq!(snapshot.countdown_to_time, CountdownTime::new(13, 20));
        assert_eq!(snapshot.top_left.text, ":time:");
        assert_eq!(snapshot.bottom_right.notes_size, 3.0);
        assert!(snapshot.bottom_right.show_notes);
    }

    #[test]
    fn test_hash_round_trip_through_board() {
        let mut board = SessionBoard::new();
        board.set(&fields::center_text(), "Gather around".to_string());
        board.set(&Corner::TopRight.show_notes(), false);

        let restored = SessionBoard::from_hash(&format!("#{}", board.to_hash()));
        assert_eq!(restored, board);
        assert_eq!(restored.get(&fields::center_text()), "Gather around");
        assert!(!restored.get(&Corner::TopRight.show_notes()));
    }

    #[test]
    fn test_snapshot_serializes_camel_case() {
        let board = SessionBoard::from_hash("mainContentState=timer&countdownToTime=9:30");
        let json = serde_json::to_value(board.snapshot()).unwrap_or_default();
        assert_eq!(json["mainContentState"], "timer");
        assert_eq!(json["countdownToTime"]["hour"], 9);
        assert_eq!(json["countdownToTime"]["minute"], 30);
        assert_eq!(json["topLeft"]["showNotes"], true);
        assert_eq!(json["isEmpty"], false);
    }
}

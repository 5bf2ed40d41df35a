//! Presets: named run-of-show sequences of board stages.
//!
//! A stage is a static list of [`Effect`]s. Applying a stage runs its effects in
//! order against a [`SessionBoard`] and records the preset/stage selection.
//! Stages only touch the fields they name, so later stages keep whatever earlier
//! stages left behind (notes, hosts, ...). Only a leading [`Effect::Reset`]
//! wipes the board.

use chrono::NaiveTime;

use super::clock::rounded_target;
use super::error::{PresetError, PresetResult};
use super::field::Field;
use super::fields::{self, ContentMode, Corner};
use super::session::SessionBoard;

/// A string field a stage can write.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextField {
    /// Corner caption.
    CornerText(Corner),
    /// Corner notes.
    CornerNotes(Corner),
    /// Question of the day.
    Qotd,
    /// Question-of-the-day location.
    QotdLocation,
    /// Countdown title.
    CountdownTitle,
    /// Center text.
    CenterText,
}

impl TextField {
    /// Field definition behind this target.
    #[must_use]
    pub fn field(self) -> Field<String> {
        match self {
            Self::CornerText(corner) => corner.text(),
            Self::CornerNotes(corner) => corner.notes(),
            Self::Qotd => fields::qotd(),
            Self::QotdLocation => fields::qotd_location(),
            Self::CountdownTitle => fields::countdown_title(),
            Self::CenterText => fields::center_text(),
        }
    }
}

/// One field assignment performed by a stage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Effect {
    /// Clear every parameter.
    Reset,
    /// Write a string field.
    Text(TextField, &'static str),
    /// Switch the center content.
    Content(ContentMode),
    /// Set a corner's notes font size.
    NotesSize(Corner, f64),
    /// Point the countdown at the rounded current time plus this many minutes.
    CountdownIn(u32),
}

impl Effect {
    /// Apply the effect. `now` feeds [`Effect::CountdownIn`].
    pub fn apply(&self, board: &mut SessionBoard, now: NaiveTime) {
        match *self {
            Self::Reset => board.reset(),
            Self::Text(target, value) => board.set(&target.field(), value.to_string()),
            Self::Content(mode) => board.set(&fields::main_content_state(), mode),
            Self::NotesSize(corner, size) => board.set(&corner.notes_size(), size),
            Self::CountdownIn(minutes) => {
                board.set(&fields::countdown_to_time(), rounded_target(now, minutes));
            }
        }
    }
}

/// A named configuration within a preset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stage {
    /// Stage name, as stored in `presetStage`.
    pub name: &'static str,
    /// Assignments, in order.
    pub effects: &'static [Effect],
}

/// An ordered list of stages for one event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Preset {
    /// Preset name, as stored in `preset`.
    pub name: &'static str,
    /// Stages in running order.
    pub stages: &'static [Stage],
}

impl Preset {
    /// Find a preset by name.
    #[must_use]
    pub fn find(name: &str) -> Option<&'static Self> {
        PRESETS.iter().find(|preset| preset.name == name)
    }

    /// Stage by name.
    ///
    /// # Errors
    /// Returns [`PresetError::UnknownStage`] if the preset has no such stage.
    pub fn stage(&self, name: &str) -> PresetResult<&'static Stage> {
        self.position(name)
            .map(|index| &self.stages[index])
            .ok_or_else(|| PresetError::UnknownStage {
                preset: self.name.to_string(),
                stage: name.to_string(),
            })
    }

    /// Stage after `current`; the first stage when nothing is selected.
    #[must_use]
    pub fn next_stage(&self, current: Option<&str>) -> Option<&'static Stage> {
        match current {
            None => self.stages.first(),
            Some(name) => self.position(name).and_then(|i| self.stages.get(i + 1)),
        }
    }

    /// Stage before `current`.
    #[must_use]
    pub fn previous_stage(&self, current: Option<&str>) -> Option<&'static Stage> {
        let index = self.position(current?)?;
        index.checked_sub(1).and_then(|i| self.stages.get(i))
    }

    /// Apply `stage` of this preset at time `now`.
    pub fn apply(&self, stage: &Stage, board: &mut SessionBoard, now: NaiveTime) {
        tracing::debug!("Applying stage {:?} of preset {:?}", stage.name, self.name);

        for effect in stage.effects {
            effect.apply(board, now);
        }

        board.set(&fields::selected_preset(), Some(self.name.to_string()));
        board.set(&fields::selected_preset_stage(), Some(stage.name.to_string()));
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.stages.iter().position(|stage| stage.name == name)
    }
}

/// Look up `preset_name`/`stage_name` and apply it to `board`.
///
/// # Errors
/// Returns an error if the preset or stage does not exist.
pub fn apply_stage(
    board: &mut SessionBoard,
    preset_name: &str,
    stage_name: &str,
    now: NaiveTime,
) -> PresetResult<()> {
    let preset = Preset::find(preset_name)
        .ok_or_else(|| PresetError::UnknownPreset(preset_name.to_string()))?;
    let stage = preset.stage(stage_name)?;
    preset.apply(stage, board, now);
    Ok(())
}

/// UBC AI Safety co-working session.
pub const UBC_AI_SAFETY: Preset = Preset {
    name: "UBC AI Safety",
    stages: &[
        Stage {
            name: "welcome",
            effects: &[
                Effect::Reset,
                Effect::Text(TextField::CornerText(Corner::TopRight), "UBC AI Safety"),
                Effect::Text(TextField::Qotd, "[TODO]"),
                Effect::Text(
                    TextField::CornerNotes(Corner::BottomRight),
                    "Welcome to UBC AI Safety",
                ),
                Effect::Text(
                    TextField::CornerNotes(Corner::BottomLeft),
                    "# Hosts\n\n[Add host names]",
                ),
                Effect::NotesSize(Corner::BottomLeft, 2.0),
                Effect::Text(TextField::QotdLocation, "UBC, Vancouver, BC, Canada"),
            ],
        },
        Stage {
            name: "intro",
            effects: &[
                Effect::Text(
                    TextField::CornerNotes(Corner::BottomRight),
                    "# Intro\n1. Name\n1. What are you working on?\n1. Question of the day",
                ),
                Effect::NotesSize(Corner::BottomRight, 2.0),
            ],
        },
        Stage {
            name: "work session1",
            effects: &[
                Effect::Text(
                    TextField::CornerNotes(Corner::BottomRight),
                    "Talk to a host for demos (short 2-min max show and tell)",
                ),
                Effect::Content(ContentMode::Timer),
                Effect::CountdownIn(50),
                Effect::Text(TextField::CountdownTitle, "Break Starts"),
            ],
        },
        Stage {
            name: "break",
            effects: &[
                Effect::Content(ContentMode::Timer),
                Effect::CountdownIn(10),
                Effect::Text(TextField::CountdownTitle, "Break Ends"),
            ],
        },
        Stage {
            name: "work session2",
            effects: &[
                Effect::Content(ContentMode::Timer),
                Effect::CountdownIn(50),
                Effect::Text(TextField::CountdownTitle, "Demos Start"),
            ],
        },
        Stage {
            name: "demos",
            effects: &[
                Effect::Content(ContentMode::Text),
                Effect::Text(TextField::CenterText, "Gather around for demos!"),
            ],
        },
        Stage {
            name: "closing",
            effects: &[
                Effect::Content(ContentMode::Text),
                Effect::Text(TextField::CenterText, "Thank you for coming!\n\nSee you next time"),
                Effect::Text(
                    TextField::CornerNotes(Corner::BottomRight),
                    "<p style=\"text-align:end\">Learn more at<br>ubcaisafety.org</p>",
                ),
                Effect::NotesSize(Corner::BottomRight, 1.0),
            ],
        },
    ],
};

/// Every built-in preset.
pub const PRESETS: &[Preset] = &[UBC_AI_SAFETY];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::fields::CountdownTime;
    use crate::board::params::ParamKey;

    fn at(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
    }

    fn run(board: &mut SessionBoard, stage: &str, now: NaiveTime) {
        let result = apply_stage(board, "UBC AI Safety", stage, now);
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn test_welcome_resets_and_selects() {
        let mut board = SessionBoard::from_hash("centerText=leftover&mainContentState=text");
        run(&mut board, "welcome", at(18, 0));

        let snapshot = board.snapshot();
        assert_eq!(snapshot.preset.as_deref(), Some("UBC AI Safety"));
        assert_eq!(snapshot.preset_stage.as_deref(), Some("welcome"));
        assert_eq!(snapshot.center_text, "");
        assert_eq!(snapshot.main_content_state, ContentMode::Qotd);
        assert_eq!(snapshot.top_right.text, "UBC AI Safety");
        assert_eq!(snapshot.qotd, "[TODO]");
        assert_eq!(snapshot.bottom_left.notes, "# Hosts\n\n[Add host names]");
        assert_eq!(snapshot.bottom_left.notes_size, 2.0);
        assert_eq!(snapshot.qotd_location, "UBC, Vancouver, BC, Canada");
    }

    #[test]
    fn test_break_keeps_fields_from_welcome() {
        let mut board = SessionBoard::new();
        run(&mut board, "welcome", at(18, 0));
        run(&mut board, "break", at(19, 7));

        let snapshot = board.snapshot();
        assert_eq!(snapshot.countdown_title, "Break Ends");
        assert_eq!(snapshot.main_content_state, ContentMode::Timer);
        assert_eq!(snapshot.countdown_to_time, CountdownTime::new(19, 20));
        assert_eq!(snapshot.bottom_left.notes, "# Hosts\n\n[Add host names]");
        assert_eq!(snapshot.preset_stage.as_deref(), Some("break"));
    }

    #[test]
    fn test_work_session_title_matches_default() {
        let mut board = SessionBoard::new();
        run(&mut board, "work session1", at(10, 7));

        // "Break Starts" is the default title, so it is not stored.
        assert!(!board.store().contains(ParamKey::CountdownTitle));
        assert_eq!(board.get(&fields::countdown_title()), "Break Starts");
        assert_eq!(board.get(&fields::countdown_to_time()), CountdownTime::new(11, 0));
    }

    #[test]
    fn test_stages_are_idempotent() {
        let mut once = SessionBoard::new();
        run(&mut once, "welcome", at(9, 0));
        run(&mut once, "closing", at(9, 0));

        let mut twice = once.clone();
        run(&mut twice, "closing", at(9, 0));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_closing_notes() {
        let mut board = SessionBoard::new();
        run(&mut board, "closing", at(21, 0));
        let snapshot = board.snapshot();
        assert_eq!(snapshot.main_content_state, ContentMode::Text);
        assert_eq!(snapshot.center_text, "Thank you for coming!\n\nSee you next time");
        assert_eq!(snapshot.bottom_right.notes_size, 1.0);
    }

    #[test]
    fn test_unknown_lookups() {
        let mut board = SessionBoard::new();
        assert_eq!(
            apply_stage(&mut board, "Nope", "welcome", at(9, 0)),
            Err(PresetError::UnknownPreset("Nope".to_string()))
        );
        assert!(matches!(
            apply_stage(&mut board, "UBC AI Safety", "lunch", at(9, 0)),
            Err(PresetError::UnknownStage { .. })
        ));
        assert!(board.is_empty());
    }

    #[test]
    fn test_stage_navigation() {
        let preset = UBC_AI_SAFETY;
        assert_eq!(preset.next_stage(None).map(|s| s.name), Some("welcome"));
        assert_eq!(preset.next_stage(Some("break")).map(|s| s.name), Some("work session2"));
        assert_eq!(preset.next_stage(Some("closing")), None);
        assert_eq!(preset.previous_stage(Some("intro")).map(|s| s.name), Some("welcome"));
        assert_eq!(preset.previous_stage(Some("welcome")), None);
        assert_eq!(preset.previous_stage(None), None);
    }
}

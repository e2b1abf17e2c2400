//! Education Hub panel state: active track, open lesson, completion.

#[cfg(test)]
#[path = "education_test.rs"]
mod education_test;

use std::collections::BTreeSet;

use records::Percent;

use crate::data::lessons::Lesson;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Track {
    #[default]
    Basics,
    Floats,
    Climate,
}

impl Track {
    pub const ALL: [Self; 3] = [Self::Basics, Self::Floats, Self::Climate];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Basics => "Ocean Basics",
            Self::Floats => "How ARGO Floats Work",
            Self::Climate => "Ocean & Climate",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EducationState {
    pub track: Track,
    pub open_lesson: Option<&'static str>,
    pub completed: BTreeSet<&'static str>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EducationAction {
    SelectTrack(Track),
    OpenLesson(&'static str),
    CloseLesson,
    /// Mark done and close.
    CompleteLesson(&'static str),
    ResetProgress,
}

#[must_use]
pub fn reduce(mut state: EducationState, action: EducationAction) -> EducationState {
    match action {
        EducationAction::SelectTrack(track) => {
            if state.track != track {
                state.track = track;
                state.open_lesson = None;
            }
        }
        EducationAction::OpenLesson(id) => state.open_lesson = Some(id),
        EducationAction::CloseLesson => state.open_lesson = None,
        EducationAction::CompleteLesson(id) => {
            state.completed.insert(id);
            if state.open_lesson == Some(id) {
                state.open_lesson = None;
            }
        }
        EducationAction::ResetProgress => state.completed.clear(),
    }
    state
}

impl EducationState {
    #[must_use]
    pub fn is_completed(&self, lesson_id: &str) -> bool {
        self.completed.contains(lesson_id)
    }

    /// Share of the active track's lessons completed.
    #[must_use]
    pub fn track_progress(&self, lessons: &[Lesson]) -> Percent {
        let in_track: Vec<&Lesson> = lessons.iter().filter(|l| l.track == self.track).collect();
        if in_track.is_empty() {
            return Percent::ZERO;
        }
        let done = in_track.iter().filter(|l| self.is_completed(l.id)).count();
        let pct = (done * 100 + in_track.len() / 2) / in_track.len();
        Percent::clamped(i32::try_from(pct).unwrap_or(100))
    }
}

use super::*;
use crate::data::lessons::LESSONS;

#[test]
fn default_track_is_basics_with_nothing_completed() {
    let s = EducationState::default();
    assert_eq!(s.track, Track::Basics);
    assert!(s.completed.is_empty());
    assert_eq!(s.track_progress(LESSONS), Percent::ZERO);
}

#[test]
fn switching_track_closes_open_lesson() {
    let s = reduce(EducationState::default(), EducationAction::OpenLesson("basics-currents"));
    let s = reduce(s, EducationAction::SelectTrack(Track::Basics));
    assert_eq!(s.open_lesson, Some("basics-currents"));
    let s = reduce(s, EducationAction::SelectTrack(Track::Climate));
    assert!(s.open_lesson.is_none());
}

#[test]
fn completing_every_lesson_in_track_reaches_full() {
    let mut s = EducationState::default();
    for lesson in LESSONS.iter().filter(|l| l.track == Track::Floats) {
        s = reduce(s, EducationAction::CompleteLesson(lesson.id));
    }
    assert_eq!(s.track_progress(LESSONS), Percent::ZERO);
    s = reduce(s, EducationAction::SelectTrack(Track::Floats));
    assert_eq!(s.track_progress(LESSONS), Percent::FULL);
}

#[test]
fn partial_completion_rounds() {
    let basics: Vec<&Lesson> = LESSONS.iter().filter(|l| l.track == Track::Basics).collect();
    assert_eq!(basics.len(), 3);
    let s = reduce(EducationState::default(), EducationAction::CompleteLesson(basics[0].id));
    assert_eq!(s.track_progress(LESSONS).value(), 33);
}

#[test]
fn complete_closes_lesson_and_reset_clears() {
    let s = reduce(EducationState::default(), EducationAction::OpenLesson("basics-salinity"));
    let s = reduce(s, EducationAction::CompleteLesson("basics-salinity"));
    assert!(s.open_lesson.is_none());
    assert!(s.is_completed("basics-salinity"));
    let s = reduce(s, EducationAction::ResetProgress);
    assert!(s.completed.is_empty());
}

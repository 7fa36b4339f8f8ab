use midihero::game::timeline::{NoteEvent, Timeline};

#[test]
fn events_are_sorted_by_onset_at_load() {
    let timeline = Timeline::from_events(vec![
        NoteEvent { pitch: 3, time: 2.0 },
        NoteEvent { pitch: 1, time: 0.5 },
        NoteEvent { pitch: 2, time: 1.0 },
    ]);
    let onsets: Vec<f32> = timeline.notes().iter().map(|n| n.time).collect();
    assert_eq!(onsets, vec![0.5, 1.0, 2.0]);
}

#[test]
fn invalid_onsets_are_discarded() {
    let timeline = Timeline::from_events(vec![
        NoteEvent { pitch: 0, time: f32::NAN },
        NoteEvent { pitch: 1, time: -1.0 },
        NoteEvent { pitch: 2, time: f32::INFINITY },
        NoteEvent { pitch: 3, time: 1.0 },
    ]);
    assert_eq!(timeline.len(), 1);
    assert_eq!(timeline.notes()[0].pitch, 3);
}

#[test]
fn empty_timeline_reports_cleanly() {
    let timeline = Timeline::from_events(Vec::new());
    assert!(timeline.is_empty());
    assert_eq!(timeline.last_onset(), 0.0);
    assert!(timeline.all_spawned());
}

#[test]
fn lane_is_pitch_modulo_lane_count() {
    let timeline = Timeline::from_events(vec![
        NoteEvent { pitch: 0, time: 0.0 },
        NoteEvent { pitch: 7, time: 1.0 },
        NoteEvent { pitch: 64, time: 2.0 },
    ]);
    let lanes: Vec<usize> = timeline.notes().iter().map(|n| n.lane(4)).collect();
    assert_eq!(lanes, vec![0, 3, 0]);
}

#[test]
fn fresh_notes_are_unspawned() {
    let timeline = Timeline::from_events(vec![NoteEvent { pitch: 0, time: 0.0 }]);
    assert!(!timeline.all_spawned());
    assert!(timeline.notes().iter().all(|n| !n.is_spawned()));
}

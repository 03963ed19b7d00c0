use std::time::{Duration, Instant};

use eframe_animator::{EditorSession, PlaybackState};

fn three_frame_session() -> EditorSession {
    let mut session = EditorSession::default();
    session.add_frame();
    session.add_frame();
    session.select_frame(0).unwrap();
    session
}

#[test]
fn test_tick_visits_frames_in_order_and_wraps() {
    let mut session = three_frame_session();
    assert!(session.play());

    let mut visited = vec![session.project().current_index()];
    for _ in 0..6 {
        session.tick();
        visited.push(session.project().current_index());
    }
    assert_eq!(visited, vec![0, 1, 2, 0, 1, 2, 0]);
}

#[test]
fn test_poll_steps_at_fps_interval() {
    let mut session = three_frame_session();
    let start = Instant::now();
    session.play();

    // First step is due immediately
    assert_eq!(session.poll_playback(start), Some(Duration::from_millis(166)));
    assert_eq!(session.project().current_index(), 1);

    // Too early: nothing happens
    let early = start + Duration::from_millis(100);
    assert_eq!(session.poll_playback(early), Some(Duration::from_millis(66)));
    assert_eq!(session.project().current_index(), 1);

    let due = start + Duration::from_millis(166);
    session.poll_playback(due);
    assert_eq!(session.project().current_index(), 2);

    session.poll_playback(due + Duration::from_millis(166));
    assert_eq!(session.project().current_index(), 0);
}

#[test]
fn test_stop_halts_until_play() {
    let mut session = three_frame_session();
    let start = Instant::now();
    session.play();
    session.poll_playback(start);
    session.stop();

    assert_eq!(session.playback().state(), PlaybackState::Stopped);
    assert_eq!(session.poll_playback(start + Duration::from_secs(5)), None);
    assert!(!session.tick());
    assert_eq!(session.project().current_index(), 1);

    session.play();
    session.poll_playback(start + Duration::from_secs(6));
    assert_eq!(session.project().current_index(), 2);
}

#[test]
fn test_fps_change_applies_to_next_scheduled_step() {
    let mut session = three_frame_session();
    let start = Instant::now();
    session.play();
    session.poll_playback(start);

    // Pending wait keeps its 166ms deadline
    session.set_fps(12).unwrap();
    let early = start + Duration::from_millis(100);
    session.poll_playback(early);
    assert_eq!(session.project().current_index(), 1);

    let due = start + Duration::from_millis(166);
    assert_eq!(session.poll_playback(due), Some(Duration::from_millis(83)));
    assert_eq!(session.project().current_index(), 2);
}

#[test]
fn test_single_frame_playback_stays_put() {
    let mut session = EditorSession::default();
    session.play();
    session.tick();
    assert_eq!(session.project().current_index(), 0);
}

//! Round timer tests on a paused Tokio clock.
//!
//! These drive `SharedSession` end to end: the tick task, the single-writer
//! lock, stale-tick rejection and snapshot publishing.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::sleep;
use word_guess::cards::Card;
use word_guess::core::{Phase, Settings, TeamId};
use word_guess::session::{GameSession, RecordingFeedback, RoundEnding, SharedSession, Signal};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn shared(round_time: u32, feedback: Arc<RecordingFeedback>) -> SharedSession {
    init_tracing();
    let cards = (0..8)
        .map(|i| Card::new(format!("t{i}"), format!("Word {i}"), ["a", "b", "c"]))
        .collect();
    let session = GameSession::builder()
        .settings(Settings::default().with_round_time(round_time).with_target_score(20))
        .cards(cards)
        .feedback(feedback)
        .seed(11)
        .build()
        .unwrap();
    SharedSession::on_current_runtime(session)
}

#[tokio::test(start_paused = true)]
async fn test_countdown_ticks_each_second() {
    let session = shared(10, Arc::new(RecordingFeedback::new()));
    session.start_game().unwrap();
    session.start_round().unwrap();
    assert!(session.timer_active());

    sleep(Duration::from_millis(3500)).await;
    assert_eq!(session.snapshot().time_remaining(), 7);
    assert_eq!(session.snapshot().phase, Phase::Playing);
}

#[tokio::test(start_paused = true)]
async fn test_round_expires_and_rotates_team() {
    let feedback = Arc::new(RecordingFeedback::new());
    let session = shared(3, feedback.clone());
    session.start_game().unwrap();
    session.start_round().unwrap();
    session.mark_correct().unwrap();
    session.mark_correct().unwrap();

    // Ticks at 1s, 2s, 3s count down to zero; the 4s tick expires the round
    sleep(Duration::from_millis(3500)).await;
    assert_eq!(session.snapshot().phase, Phase::Playing);
    assert_eq!(session.snapshot().time_remaining(), 0);

    sleep(Duration::from_secs(1)).await;
    let snap = session.snapshot();
    assert_eq!(snap.phase, Phase::BetweenRounds);
    assert_eq!(snap.teams.scores(), [2, 0]);
    assert_eq!(snap.active_team, TeamId(1));
    assert_eq!(snap.history[0].ending, RoundEnding::TimeUp);
    assert!(!session.timer_active());

    // No duplicate expiry later on
    sleep(Duration::from_secs(10)).await;
    assert_eq!(feedback.count(Signal::RoundTimeUp), 1);
    assert_eq!(session.snapshot().history.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_pause_freezes_time() {
    let session = shared(30, Arc::new(RecordingFeedback::new()));
    session.start_game().unwrap();
    session.start_round().unwrap();

    sleep(Duration::from_millis(2500)).await;
    session.pause_game().unwrap();
    assert!(!session.timer_active());
    assert_eq!(session.snapshot().time_remaining(), 28);

    sleep(Duration::from_secs(60)).await;
    assert_eq!(session.snapshot().time_remaining(), 28);
    assert_eq!(session.snapshot().phase, Phase::Paused);

    session.resume_game().unwrap();
    sleep(Duration::from_millis(2500)).await;
    assert_eq!(session.snapshot().time_remaining(), 26);
}

#[tokio::test(start_paused = true)]
async fn test_end_round_stops_timer() {
    let feedback = Arc::new(RecordingFeedback::new());
    let session = shared(5, feedback.clone());
    session.start_game().unwrap();
    session.start_round().unwrap();

    sleep(Duration::from_millis(1500)).await;
    session.end_round().unwrap();
    assert!(!session.timer_active());

    sleep(Duration::from_secs(30)).await;
    let snap = session.snapshot();
    assert_eq!(snap.phase, Phase::BetweenRounds);
    assert_eq!(snap.history.len(), 1);
    assert_eq!(snap.history[0].ending, RoundEnding::Ended);
    assert_eq!(feedback.count(Signal::RoundTimeUp), 1);
}

#[tokio::test(start_paused = true)]
async fn test_quit_cancels_timer() {
    let session = shared(5, Arc::new(RecordingFeedback::new()));
    session.start_game().unwrap();
    session.start_round().unwrap();
    session.mark_correct().unwrap();

    session.quit_game();
    session.quit_game();
    assert!(!session.timer_active());

    sleep(Duration::from_secs(30)).await;
    let snap = session.snapshot();
    assert_eq!(snap.phase, Phase::Idle);
    assert_eq!(snap.teams.scores(), [0, 0]);
    assert!(snap.history.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_instant_win_stops_timer() {
    let session = shared(60, Arc::new(RecordingFeedback::new()));
    session.update_settings(Settings::default().with_target_score(2)).unwrap();
    session.start_game().unwrap();
    session.start_round().unwrap();

    session.mark_correct().unwrap();
    session.mark_correct().unwrap();
    assert_eq!(session.snapshot().phase, Phase::GameOver);
    assert!(!session.timer_active());

    sleep(Duration::from_secs(120)).await;
    assert_eq!(session.snapshot().phase, Phase::GameOver);
    assert_eq!(session.read(|s| s.result().map(|r| r.winner)), Some(TeamId(0)));
}

#[tokio::test(start_paused = true)]
async fn test_subscribers_see_updates() {
    let session = shared(10, Arc::new(RecordingFeedback::new()));
    let mut updates = session.subscribe();
    assert_eq!(updates.borrow_and_update().phase, Phase::Idle);

    session.start_game().unwrap();
    updates.changed().await.unwrap();
    assert_eq!(updates.borrow_and_update().phase, Phase::BetweenRounds);

    session.start_round().unwrap();
    updates.changed().await.unwrap();
    assert_eq!(updates.borrow_and_update().time_remaining(), 10);

    // The next publication comes from the tick task
    updates.changed().await.unwrap();
    assert_eq!(updates.borrow_and_update().time_remaining(), 9);
}

#[tokio::test(start_paused = true)]
async fn test_rapid_pause_resume_keeps_single_timer() {
    let session = shared(20, Arc::new(RecordingFeedback::new()));
    session.start_game().unwrap();
    session.start_round().unwrap();

    for _ in 0..5 {
        session.pause_game().unwrap();
        session.resume_game().unwrap();
    }

    sleep(Duration::from_millis(3500)).await;
    assert_eq!(session.snapshot().time_remaining(), 17);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_concurrent_actions_and_ticks() {
    let session = shared(1, Arc::new(RecordingFeedback::new()));
    session.update_settings(Settings::default().with_round_time(1).with_target_score(1000)).unwrap();
    session.start_game().unwrap();
    session.start_round().unwrap();

    let worker = {
        let session = session.clone();
        tokio::task::spawn_blocking(move || {
            let mut accepted = 0;
            while session.mark_correct().is_ok() {
                accepted += 1;
                std::thread::sleep(Duration::from_millis(5));
            }
            accepted
        })
    };

    let accepted = worker.await.unwrap();
    sleep(Duration::from_millis(100)).await;

    // Every accepted guess landed in exactly one committed round, whether
    // the clock or the target ended it
    let snap = session.snapshot();
    assert!(matches!(snap.phase, Phase::BetweenRounds | Phase::GameOver));
    assert_eq!(snap.history.len(), 1);
    assert_eq!(snap.history[0].round_score, accepted);
    assert_eq!(i64::from(snap.teams.scores()[0]), accepted);
}

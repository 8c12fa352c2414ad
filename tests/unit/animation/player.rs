use super::*;
use std::time::{Duration, Instant};

fn secs(s: f64) -> Duration {
    Duration::from_secs_f64(s)
}

#[test]
fn stopped_player_holds_zero() {
    let mut player = Player::new(5.0);
    let now = Instant::now();
    assert!(!player.is_playing());
    assert_eq!(player.tick(now), 0.0);
    assert_eq!(player.direction(), Direction::Shrink);
}

#[test]
fn progress_is_quintic_eased_elapsed_over_cycle() {
    let mut player = Player::new(5.0);
    let start = Instant::now();
    player.play(start);
    assert_eq!(player.direction(), Direction::Grow);

    let quarter = player.tick(start + secs(1.25));
    assert!((quarter - Ease::InOutQuint.apply(0.25)).abs() < 1e-9);
    let half = player.tick(start + secs(2.5));
    assert!((half - 0.5).abs() < 1e-9);
}

#[test]
fn non_looping_run_stops_and_holds_at_one() {
    let mut player = Player::new(5.0);
    let start = Instant::now();
    player.play(start);

    assert_eq!(player.tick(start + secs(5.0)), 1.0);
    assert!(!player.is_playing());
    // Subsequent ticks hold at 1.
    assert_eq!(player.tick(start + secs(9.0)), 1.0);
}

#[test]
fn looping_run_resets_to_elapsed_zero() {
    let mut player = Player::new(5.0);
    player.set_looping(true);
    let start = Instant::now();
    player.play(start);

    // Reaching raw progress 1 restarts the cycle instead of stopping.
    assert_eq!(player.tick(start + secs(5.0)), 0.0);
    assert!(player.is_playing());

    // 1.25 s into the new cycle matches 1.25 s into a fresh one.
    let v = player.tick(start + secs(6.25));
    assert!((v - Ease::InOutQuint.apply(0.25)).abs() < 1e-9);
}

#[test]
fn pause_freezes_and_resume_does_not_jump() {
    let mut player = Player::new(5.0);
    let start = Instant::now();
    player.play(start);

    player.pause(start + secs(2.5));
    let frozen = player.tick(start + secs(100.0));
    assert!((frozen - 0.5).abs() < 1e-9);
    assert_eq!(player.direction(), Direction::Shrink);

    // Resume much later; progress continues from the frozen value.
    player.play(start + secs(200.0));
    let resumed = player.tick(start + secs(200.0));
    assert!((resumed - 0.5).abs() < 1e-9);
    let later = player.tick(start + secs(201.25));
    assert!((later - Ease::InOutQuint.apply(0.75)).abs() < 1e-9);
}

#[test]
fn toggle_play_alternates_states() {
    let mut player = Player::new(5.0);
    let now = Instant::now();
    player.toggle_play(now);
    assert!(player.is_playing());
    player.toggle_play(now + secs(1.0));
    assert!(!player.is_playing());
}

#[test]
fn replay_after_completion_starts_from_zero() {
    let mut player = Player::new(5.0);
    let start = Instant::now();
    player.play(start);
    player.tick(start + secs(5.0));
    assert!(!player.is_playing());

    let restart = start + secs(10.0);
    player.play(restart);
    assert_eq!(player.tick(restart), 0.0);
}

#[test]
fn loop_toggle_is_independent_of_play_state() {
    let mut player = Player::new(5.0);
    player.set_looping(true);
    assert!(player.is_looping());
    assert!(!player.is_playing());
    player.set_looping(false);
    assert!(!player.is_looping());
}

#[test]
fn cycle_updates_ignore_invalid_values() {
    let mut player = Player::new(5.0);
    player.set_cycle_secs(0.0);
    player.set_cycle_secs(-3.0);
    player.set_cycle_secs(f64::NAN);
    assert_eq!(player.cycle_secs(), 5.0);
    player.set_cycle_secs(2.5);
    assert_eq!(player.cycle_secs(), 2.5);
}

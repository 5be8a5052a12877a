// Host-side tests for the music player model.

use app_core::constants::{DEFAULT_VOLUME, PLAYER_BAR_COUNT, PLAYER_BAR_FLOOR};
use app_core::player::Player;

#[test]
fn starts_at_standard_volume_unmuted() {
    let player = Player::new();
    assert_eq!(player.volume(), DEFAULT_VOLUME);
    assert!(!player.is_muted());
    assert_eq!(player.effective_volume(), DEFAULT_VOLUME);
}

#[test]
fn volume_clamps_to_unit_range() {
    let mut player = Player::new();
    player.set_volume(1.5);
    assert_eq!(player.volume(), 1.0);
    player.set_volume(-0.25);
    assert_eq!(player.volume(), 0.0);
}

#[test]
fn mute_silences_without_losing_the_volume() {
    let mut player = Player::new();
    player.set_volume(0.4);
    player.toggle_mute();
    assert!(player.is_muted());
    assert_eq!(player.effective_volume(), 0.0);
    assert_eq!(player.volume(), 0.4, "set volume survives muting");
    player.toggle_mute();
    assert_eq!(player.effective_volume(), 0.4);
}

#[test]
fn raising_the_slider_unmutes() {
    let mut player = Player::new();
    player.toggle_mute();
    player.set_volume(0.6);
    assert!(!player.is_muted());
    assert_eq!(player.effective_volume(), 0.6);
}

#[test]
fn zero_volume_keeps_the_mute_state() {
    let mut player = Player::new();
    player.toggle_mute();
    player.set_volume(0.0);
    assert!(player.is_muted(), "dragging to zero is not an unmute");
}

#[test]
fn bars_sample_the_spectrum_at_fixed_stride() {
    let mut player = Player::new();
    // 64 analyser bins of a rising ramp; 20 bars stride every 3rd bin.
    let frame: Vec<u8> = (0..64).map(|i| (i * 4) as u8).collect();
    player.update_bars(&frame);
    let bars = player.bars();
    for (i, bar) in bars.iter().enumerate() {
        let expected = frame[i * 3] as f32 / 255.0;
        assert!(
            (bar - expected).abs() < 1e-6,
            "bar {i} = {bar}, expected {expected}"
        );
    }
}

#[test]
fn short_frames_fall_back_to_unit_stride() {
    let mut player = Player::new();
    let frame = [255u8; 8];
    player.update_bars(&frame);
    let bars = player.bars();
    for bar in &bars[..8] {
        assert_eq!(*bar, 1.0);
    }
    for bar in &bars[8..] {
        assert_eq!(*bar, 0.0, "bins past the frame read zero");
    }
}

#[test]
fn muted_player_shows_dead_bars() {
    let mut player = Player::new();
    player.update_bars(&[200u8; 64]);
    assert!(player.bars().iter().any(|b| *b > 0.0));
    player.toggle_mute();
    player.update_bars(&[200u8; 64]);
    assert!(player.bars().iter().all(|b| *b == 0.0));
}

#[test]
fn bar_heights_never_collapse_flat() {
    let player = Player::new();
    for bar in 0..PLAYER_BAR_COUNT {
        assert_eq!(player.bar_height(bar), PLAYER_BAR_FLOOR);
    }
    // Out of range also reads the floor rather than panicking.
    assert_eq!(player.bar_height(PLAYER_BAR_COUNT + 5), PLAYER_BAR_FLOOR);
}

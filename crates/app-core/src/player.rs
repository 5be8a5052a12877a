//! Volume/mute state and spectrum bars for the retro music player.

use crate::constants::{DEFAULT_VOLUME, PLAYER_BAR_COUNT, PLAYER_BAR_FLOOR};

/// Pure player model. Frontends feed it analyser frames and mirror its
/// volume onto whatever audio output they drive.
#[derive(Debug, Clone)]
pub struct Player {
    volume: f32,
    muted: bool,
    bars: [f32; PLAYER_BAR_COUNT],
}

impl Default for Player {
    fn default() -> Self {
        Self {
            volume: DEFAULT_VOLUME,
            muted: false,
            bars: [0.0; PLAYER_BAR_COUNT],
        }
    }
}

impl Player {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn volume(&self) -> f32 {
        self.volume
    }

    #[inline]
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Gain the output chain should run at right now.
    #[inline]
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.volume
        }
    }

    /// Set the volume, clamped to `[0, 1]`. Raising it above zero also
    /// unmutes, matching how the slider behaves.
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
        if self.volume > 0.0 && self.muted {
            self.muted = false;
        }
    }

    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    /// Fold a byte frequency frame down to the display bars.
    ///
    /// Bins are sampled at a fixed stride rather than averaged, and values
    /// normalize to `[0, 1]`. While muted the bars read zero regardless of
    /// what the analyser still reports.
    pub fn update_bars(&mut self, frequency_bytes: &[u8]) {
        if self.muted || frequency_bytes.is_empty() {
            self.bars = [0.0; PLAYER_BAR_COUNT];
            return;
        }
        let step = (frequency_bytes.len() / PLAYER_BAR_COUNT).max(1);
        for (i, bar) in self.bars.iter_mut().enumerate() {
            let value = frequency_bytes.get(i * step).copied().unwrap_or(0);
            *bar = value as f32 / 255.0;
        }
    }

    #[inline]
    pub fn bars(&self) -> &[f32; PLAYER_BAR_COUNT] {
        &self.bars
    }

    /// Display height of a bar in `[0, 1]`, with the resting floor applied
    /// so the equalizer never collapses flat.
    pub fn bar_height(&self, bar: usize) -> f32 {
        self.bars
            .get(bar)
            .map(|v| v.max(PLAYER_BAR_FLOOR))
            .unwrap_or(PLAYER_BAR_FLOOR)
    }
}

//! State machine behind the presentation mode. Pure data and
//! transitions; the component in `mode.rs` owns the timers, the audio
//! element and the scrolling, and re-arms them off this state.

/// A named page region the walkthrough scrolls through, with the time it
/// stays on screen during automated playback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
    pub duration_ms: u32,
}

pub const DEFAULT_VOLUME: u8 = 30;

/// Progress bar polling granularity.
pub const PROGRESS_TICK_MS: u32 = 50;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Playing,
    Paused,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShowcaseConfig {
    /// When `true` (the historical behavior), resuming from pause
    /// restarts the current section's full dwell. When `false`, only the
    /// remaining fraction is replayed.
    pub resume_restarts_section: bool,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self { resume_restarts_section: true }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ShowcaseState {
    pub phase: Phase,
    pub current: usize,
    /// 0..=100 within the current section's dwell.
    pub progress: f64,
    /// 0..=100, persisted across start/stop.
    pub volume: u8,
    pub muted: bool,
    pub controls_visible: bool,
    pub config: ShowcaseConfig,
}

impl Default for ShowcaseState {
    fn default() -> Self {
        Self::new()
    }
}

impl ShowcaseState {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            current: 0,
            progress: 0.0,
            volume: DEFAULT_VOLUME,
            muted: false,
            controls_visible: true,
            config: ShowcaseConfig::default(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.phase != Phase::Idle
    }

    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }

    pub fn start(&mut self) {
        self.phase = Phase::Playing;
        self.current = 0;
        self.progress = 0.0;
    }

    /// Back to `Idle` from any phase. Volume, mute and panel visibility
    /// survive; playback position does not.
    pub fn stop(&mut self) {
        self.phase = Phase::Idle;
        self.current = 0;
        self.progress = 0.0;
    }

    pub fn toggle_play(&mut self) {
        match self.phase {
            Phase::Playing => self.phase = Phase::Paused,
            Phase::Paused => {
                if self.config.resume_restarts_section {
                    self.progress = 0.0;
                }
                self.phase = Phase::Playing;
            }
            Phase::Idle => {}
        }
    }

    /// Dwell timer fired: move to the next section, wrapping after the
    /// last one. Ignored unless playing, so a stale timer can never move
    /// the index.
    pub fn advance(&mut self, len: usize) {
        if self.phase != Phase::Playing || len == 0 {
            return;
        }
        self.current = if self.current + 1 >= len { 0 } else { self.current + 1 };
        self.progress = 0.0;
    }

    /// Jump to `index` (clamped) and restart its dwell. Selecting the
    /// section already on screen is a no-op, so the armed dwell timer
    /// and the progress bar never disagree.
    pub fn go_to(&mut self, index: usize, len: usize) {
        if len == 0 {
            return;
        }
        let index = index.min(len - 1);
        if index != self.current {
            self.current = index;
            self.progress = 0.0;
        }
    }

    pub fn go_previous(&mut self) {
        if self.current > 0 {
            self.current -= 1;
            self.progress = 0.0;
        }
    }

    pub fn go_next(&mut self, len: usize) {
        if self.current + 1 < len {
            self.current += 1;
            self.progress = 0.0;
        }
    }

    pub fn tick(&mut self, increment: f64) {
        if self.phase == Phase::Playing {
            self.progress = (self.progress + increment).min(100.0);
        }
    }

    pub fn set_volume(&mut self, percent: i32) {
        self.volume = percent.clamp(0, 100) as u8;
        if self.volume > 0 {
            self.muted = false;
        }
    }

    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    pub fn toggle_controls(&mut self) {
        self.controls_visible = !self.controls_visible;
    }

    /// Playback volume in `0.0..=1.0` as the audio element expects it.
    pub fn effective_volume(&self) -> f64 {
        if self.muted {
            0.0
        } else {
            f64::from(self.volume) / 100.0
        }
    }

    /// Dwell still owed for the current section given its configured
    /// duration. Equals the full duration unless a pause left partial
    /// progress behind.
    pub fn remaining_ms(&self, duration_ms: u32) -> u32 {
        let remaining = (100.0 - self.progress) / 100.0 * f64::from(duration_ms);
        (remaining as u32).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEN: usize = 9;

    fn playing_state() -> ShowcaseState {
        let mut state = ShowcaseState::new();
        state.start();
        state
    }

    #[test]
    fn stop_restores_the_initial_playback_state() {
        let mut state = playing_state();
        state.advance(LEN);
        state.tick(40.0);
        state.stop();
        assert_eq!(state.phase, Phase::Idle);
        assert_eq!(state.current, 0);
        assert_eq!(state.progress, 0.0);

        // Same from a paused walkthrough.
        state.start();
        state.toggle_play();
        state.stop();
        assert_eq!(state, ShowcaseState::new());
    }

    #[test]
    fn stop_keeps_volume_and_mute() {
        let mut state = playing_state();
        state.set_volume(65);
        state.toggle_mute();
        state.stop();
        assert_eq!(state.volume, 65);
        assert!(state.muted);
    }

    #[test]
    fn auto_advance_visits_every_index_in_order_and_wraps() {
        let mut state = playing_state();
        let mut visited = vec![state.current];
        for _ in 0..LEN {
            state.advance(LEN);
            visited.push(state.current);
        }
        assert_eq!(visited, vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 0]);
    }

    #[test]
    fn advance_is_ignored_while_paused_or_idle() {
        let mut state = ShowcaseState::new();
        state.advance(LEN);
        assert_eq!(state.current, 0);

        state.start();
        state.toggle_play();
        state.advance(LEN);
        assert_eq!(state.current, 0);
    }

    #[test]
    fn toggle_play_alternates_between_playing_and_paused() {
        let mut state = playing_state();
        for _ in 0..3 {
            state.toggle_play();
            assert_eq!(state.phase, Phase::Paused);
            state.toggle_play();
            assert_eq!(state.phase, Phase::Playing);
        }
    }

    #[test]
    fn toggle_play_does_nothing_when_idle() {
        let mut state = ShowcaseState::new();
        state.toggle_play();
        assert_eq!(state.phase, Phase::Idle);
    }

    #[test]
    fn resume_restarts_the_section_dwell_by_default() {
        let mut state = playing_state();
        state.tick(60.0);
        state.toggle_play();
        state.toggle_play();
        assert_eq!(state.progress, 0.0);
        assert_eq!(state.remaining_ms(8_000), 8_000);
    }

    #[test]
    fn resume_can_keep_the_remaining_dwell() {
        let mut state = playing_state();
        state.config.resume_restarts_section = false;
        state.tick(75.0);
        state.toggle_play();
        state.toggle_play();
        assert_eq!(state.progress, 75.0);
        assert_eq!(state.remaining_ms(8_000), 2_000);
    }

    #[test]
    fn go_to_sets_index_and_resets_progress_in_any_phase() {
        let mut state = playing_state();
        state.tick(30.0);
        state.go_to(4, LEN);
        assert_eq!((state.current, state.progress), (4, 0.0));
        assert_eq!(state.phase, Phase::Playing);

        state.toggle_play();
        state.go_to(7, LEN);
        assert_eq!((state.current, state.progress), (7, 0.0));
        assert_eq!(state.phase, Phase::Paused);
    }

    #[test]
    fn reselecting_the_current_section_keeps_its_dwell() {
        let mut state = playing_state();
        state.tick(40.0);
        state.go_to(0, LEN);
        assert_eq!((state.current, state.progress), (0, 40.0));

        // Clamped navigation at the edges is equally a no-op.
        state.go_previous();
        assert_eq!(state.progress, 40.0);
        state.go_to(LEN - 1, LEN);
        state.tick(25.0);
        state.go_next(LEN);
        assert_eq!((state.current, state.progress), (LEN - 1, 25.0));
    }

    #[test]
    fn navigation_clamps_at_both_ends() {
        let mut state = playing_state();
        state.go_previous();
        assert_eq!(state.current, 0);
        state.go_to(LEN + 10, LEN);
        assert_eq!(state.current, LEN - 1);
        state.go_next(LEN);
        assert_eq!(state.current, LEN - 1);
    }

    #[test]
    fn setting_an_audible_volume_clears_mute() {
        let mut state = ShowcaseState::new();
        state.set_volume(0);
        state.toggle_mute();
        assert!(state.muted);
        state.set_volume(50);
        assert!(!state.muted);
        assert_eq!(state.effective_volume(), 0.5);
    }

    #[test]
    fn mute_silences_without_losing_the_level() {
        let mut state = ShowcaseState::new();
        state.set_volume(30);
        state.toggle_mute();
        assert_eq!(state.effective_volume(), 0.0);
        state.toggle_mute();
        assert_eq!(state.effective_volume(), 0.3);
    }

    #[test]
    fn volume_is_clamped_to_percent_range() {
        let mut state = ShowcaseState::new();
        state.set_volume(180);
        assert_eq!(state.volume, 100);
        state.set_volume(-5);
        assert_eq!(state.volume, 0);
    }

    #[test]
    fn progress_saturates_at_one_hundred() {
        let mut state = playing_state();
        for _ in 0..300 {
            state.tick(0.625);
        }
        assert_eq!(state.progress, 100.0);
    }

    #[test]
    fn controls_toggle_never_touches_playback() {
        let mut state = playing_state();
        state.advance(LEN);
        let before = (state.phase, state.current, state.progress);
        state.toggle_controls();
        assert!(!state.controls_visible);
        assert_eq!((state.phase, state.current, state.progress), before);
    }

    #[test]
    fn two_section_walkthrough_advances_then_wraps() {
        // sections a (1000 ms) and b (2000 ms): the host arms a timer per
        // dwell; each firing maps to one advance() call.
        let mut state = playing_state();
        state.advance(2);
        assert_eq!(state.current, 1);
        state.advance(2);
        assert_eq!(state.current, 0);
    }
}

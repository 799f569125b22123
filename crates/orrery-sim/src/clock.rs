//! The simulation playback clock.
//!
//! A small state machine over {running, paused} x sign(time_scale). The
//! controls mirror the UI actions: pause toggle, speed doubling/halving,
//! instantaneous direction inversion, and reset-to-zero.

/// Owns simulation time and playback rate.
///
/// `sim_time_sec` is monotonic only while running with an unchanged scale
/// sign; it runs backward when the scale is negative.
#[derive(Clone, Debug)]
pub struct SimulationClock {
    sim_time_sec: f64,
    time_scale: f64,
    paused: bool,
    last_timestamp: Option<f64>,
}

impl SimulationClock {
    pub fn new(time_scale: f64, start_paused: bool) -> Self {
        Self {
            sim_time_sec: 0.0,
            time_scale,
            paused: start_paused,
            last_timestamp: None,
        }
    }

    pub fn sim_time_sec(&self) -> f64 {
        self.sim_time_sec
    }

    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Advance by the wall-clock delta since the previous call, scaled.
    ///
    /// The first call has no previous timestamp and contributes a zero delta,
    /// so a slow startup never produces a multi-second jump. The timestamp is
    /// recorded even while paused, so unpausing does not replay the paused
    /// interval.
    pub fn advance(&mut self, wall_clock_sec: f64) -> f64 {
        let delta = match self.last_timestamp {
            Some(previous) => wall_clock_sec - previous,
            None => 0.0,
        };
        self.last_timestamp = Some(wall_clock_sec);
        if !self.paused {
            self.sim_time_sec += delta * self.time_scale;
        }
        self.sim_time_sec
    }

    /// Flip running/paused without touching simulation time.
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Double the playback speed. No ceiling; the magnitude is open-ended.
    pub fn speed_up(&mut self) {
        self.time_scale *= 2.0;
    }

    /// Halve the playback speed. No floor.
    pub fn slow_down(&mut self) {
        self.time_scale /= 2.0;
    }

    /// Negate the scale in place: instantaneous reversal, no interpolation.
    pub fn invert_direction(&mut self) {
        self.time_scale = -self.time_scale;
    }

    /// Reset simulation time to zero. Scale and pause state are untouched.
    pub fn reset(&mut self) {
        self.sim_time_sec = 0.0;
    }
}

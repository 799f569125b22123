//! Temporal supersampling of the asteroid field.
//!
//! The motion trail is produced by re-evaluating the same orbital-element
//! buffer at several time offsets with decreasing opacity, not by storing
//! historical positions. The sampler only emits (time, opacity) pairs; the
//! orchestrator turns each into one asteroid draw with a different time
//! uniform.

use serde::{Deserialize, Serialize};

/// One time-shifted re-evaluation of the asteroid field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlurSample {
    pub time_sec: f64,
    pub opacity: f32,
}

/// Motion-blur configuration.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MotionBlurConfig {
    pub enabled: bool,
    /// Number of time-shifted draws per frame.
    pub sample_count: u32,
    /// Trail span as a multiple of the frame's simulation-time delta.
    pub span_multiplier: f64,
    /// Hard cap on the trail span, so extreme time scales cannot smear the
    /// field across a whole orbit.
    pub max_span_seconds: f64,
    /// Base opacity of the most recent sample.
    pub opacity: f32,
}

impl Default for MotionBlurConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            sample_count: 4,
            span_multiplier: 24.0,
            max_span_seconds: 2.0e6,
            opacity: 0.85,
        }
    }
}

impl MotionBlurConfig {
    /// Produce the frame's sample set, most recent first.
    ///
    /// Sample `i` of `n` sits at fraction `i / n` of the span behind
    /// `sim_time_sec` and carries opacity `base * (1 - i/n)^2`; the quadratic
    /// falloff fades trailing samples faster than linear. The oldest sample
    /// sits at `(n - 1) / n` of the span, so the trail deliberately stops
    /// short of `sim_time_sec - span`: a sample at the full span would carry
    /// zero opacity and be a wasted draw. A zero span (e.g.
    /// paused simulation) or disabled blur collapses to one full-opacity
    /// sample so no redundant draws are issued. The span depends only on the
    /// delta's magnitude, so reversed time blurs identically.
    pub fn samples(&self, sim_time_sec: f64, frame_delta_sec: f64) -> Vec<BlurSample> {
        let single = vec![BlurSample {
            time_sec: sim_time_sec,
            opacity: 1.0,
        }];
        if !self.enabled || self.sample_count <= 1 {
            return single;
        }

        let span = self.max_span_seconds.min(frame_delta_sec.abs() * self.span_multiplier);
        if span <= 0.0 || !span.is_finite() {
            return single;
        }

        let count = self.sample_count;
        (0..count)
            .map(|i| {
                let blend = f64::from(i) / f64::from(count);
                let weight = 1.0 - blend as f32;
                BlurSample {
                    time_sec: sim_time_sec - span * blend,
                    opacity: self.opacity * weight * weight,
                }
            })
            .collect()
    }
}

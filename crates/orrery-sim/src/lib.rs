//! Simulation time: the playback clock, epoch reconciliation, and the
//! temporal-supersampling (motion blur) sampler.

mod blur;
mod clock;
mod epoch;

pub use blur::{BlurSample, MotionBlurConfig};
pub use clock::SimulationClock;
pub use epoch::{J2000_JD, SECONDS_PER_DAY, epoch_offset_seconds, julian_day};

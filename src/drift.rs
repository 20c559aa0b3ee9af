use std::fmt;

use crate::ease::EaseInOut;
use crate::target::TargetPolicy;

/// Where a drifter currently is in its transition cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Transitioning,
    Paused,
}

/// When a drifter picks its next target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Cadence {
    /// Finish the eased transition, hold for `seconds`, then retarget.
    Dwell { seconds: f32 },
    /// Retarget every `frames` ticks, blending continuously with no hold.
    /// This path skips the phase machinery and the easing curve entirely.
    FrameInterval { frames: u32 },
}

#[derive(Debug, Clone, PartialEq)]
pub enum DriftError {
    NonPositiveRate(f32),
    NonPositiveStrength(f32),
    NegativeDwell(f32),
    ZeroFrameInterval,
    EmptyWaypoints,
    InvalidJitter(f32),
    NonFiniteWaypoint(usize),
    InvalidBounds { axis: usize, lo: f32, hi: f32 },
}

impl fmt::Display for DriftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveRate(rate) => {
                write!(f, "transition rate must be positive and finite, got {rate}")
            }
            Self::NonPositiveStrength(strength) => {
                write!(f, "ease strength must be positive and finite, got {strength}")
            }
            Self::NegativeDwell(seconds) => {
                write!(f, "dwell duration must be non-negative and finite, got {seconds}")
            }
            Self::ZeroFrameInterval => write!(f, "frame interval must be at least 1"),
            Self::EmptyWaypoints => write!(f, "waypoint list must contain at least one point"),
            Self::InvalidJitter(jitter) => {
                write!(f, "jitter must be non-negative and finite, got {jitter}")
            }
            Self::NonFiniteWaypoint(idx) => {
                write!(f, "waypoint #{idx} has a non-finite component")
            }
            Self::InvalidBounds { axis, lo, hi } => {
                write!(f, "invalid bounds on axis {axis}: lo={lo} hi={hi}")
            }
        }
    }
}

impl std::error::Error for DriftError {}

/// Blend `t` of the way from `a` toward `b`, per component.
///
/// Written as a weighted sum so that `t = 1` lands exactly on `b` (and
/// `t = 0` exactly on `a`) with no floating-point residue. `t` is not
/// clamped.
pub fn lerp<const N: usize>(a: [f32; N], b: [f32; N], t: f32) -> [f32; N] {
    let mut out = [0.0f32; N];
    for i in 0..N {
        out[i] = a[i] * (1.0 - t) + b[i] * t;
    }
    out
}

/// Drives one animated parameter toward periodically re-chosen targets.
///
/// A drifter owns the full transition state for a single `[f32; N]`
/// parameter: the moving `current` value, the `target` it is heading for,
/// raw transition progress, the transition/pause phase, and the seeded
/// random source its policy draws from. An external scheduler calls
/// [`tick`](Self::tick) once per frame with the elapsed seconds; the drifter
/// never performs I/O of its own, it only returns the freshly blended value
/// for the caller to apply.
///
/// The blend is intentionally compounding: every tick re-blends from the
/// *previous* `current` rather than from the transition's start point, so
/// the value approaches the target along a frame-rate-coupled curve and the
/// end of one transition is exactly the start of the next. Callers that
/// want a pure parametric ease from a fixed start point will not find one
/// here; the compounding form is the motion this crate is built around.
#[derive(Debug)]
pub struct Drifter<const N: usize> {
    current: [f32; N],
    target: [f32; N],
    progress: f32,
    phase: Phase,
    pause_remaining: f32,
    frames_since_draw: u32,
    rate: f32,
    easing: EaseInOut,
    cadence: Cadence,
    policy: TargetPolicy<N>,
    rng: fastrand::Rng,
}

impl<const N: usize> Drifter<N> {
    /// Build a drifter starting at `initial`, with its first target already
    /// drawn from `policy` and the phase set to `Transitioning`.
    ///
    /// All configuration is checked here; [`tick`](Self::tick) cannot fail
    /// afterwards. `rate` is the fraction of a transition covered per
    /// second.
    pub fn new(
        initial: [f32; N],
        policy: TargetPolicy<N>,
        easing: EaseInOut,
        rate: f32,
        cadence: Cadence,
        mut rng: fastrand::Rng,
    ) -> Result<Self, DriftError> {
        if !rate.is_finite() || rate <= 0.0 {
            return Err(DriftError::NonPositiveRate(rate));
        }
        if !easing.strength.is_finite() || easing.strength <= 0.0 {
            return Err(DriftError::NonPositiveStrength(easing.strength));
        }
        match cadence {
            Cadence::Dwell { seconds } => {
                if !seconds.is_finite() || seconds < 0.0 {
                    return Err(DriftError::NegativeDwell(seconds));
                }
            }
            Cadence::FrameInterval { frames } => {
                if frames == 0 {
                    return Err(DriftError::ZeroFrameInterval);
                }
            }
        }
        policy.validate()?;

        let target = policy.draw(&mut rng);
        Ok(Self {
            current: initial,
            target,
            progress: 0.0,
            phase: Phase::Transitioning,
            pause_remaining: 0.0,
            frames_since_draw: 0,
            rate,
            easing,
            cadence,
            policy,
            rng,
        })
    }

    /// Advance the state machine by `dt` seconds and return the new value.
    ///
    /// A negative `dt` is accepted and walks progress (or the dwell timer)
    /// backwards; nothing clamps it.
    pub fn tick(&mut self, dt: f32) -> [f32; N] {
        match self.cadence {
            Cadence::Dwell { seconds } => self.tick_dwell(dt, seconds),
            Cadence::FrameInterval { frames } => self.tick_frames(dt, frames),
        }
        self.current
    }

    fn tick_dwell(&mut self, dt: f32, dwell: f32) {
        match self.phase {
            Phase::Transitioning => {
                self.progress += self.rate * dt;
                let eased = self.easing.apply(self.progress.min(1.0));
                self.current = lerp(self.current, self.target, eased);
                if self.progress >= 1.0 {
                    self.phase = Phase::Paused;
                    self.pause_remaining = dwell;
                }
            }
            Phase::Paused => {
                self.pause_remaining -= dt;
                if self.pause_remaining <= 0.0 {
                    self.target = self.policy.draw(&mut self.rng);
                    self.progress = 0.0;
                    self.phase = Phase::Transitioning;
                    log::debug!("retarget: {:?} -> {:?}", self.current, self.target);
                }
            }
        }
    }

    fn tick_frames(&mut self, dt: f32, frames: u32) {
        self.frames_since_draw += 1;
        if self.frames_since_draw >= frames {
            self.target = self.policy.draw(&mut self.rng);
            self.frames_since_draw = 0;
            log::debug!("retarget: {:?} -> {:?}", self.current, self.target);
        }
        // Raw per-tick fraction, no easing: the frame-interval animator
        // creeps toward its target every tick instead of completing
        // discrete transitions.
        self.current = lerp(self.current, self.target, (self.rate * dt).min(1.0));
    }

    pub fn current(&self) -> [f32; N] {
        self.current
    }

    pub fn target(&self) -> [f32; N] {
        self.target
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn pause_remaining(&self) -> f32 {
        self.pause_remaining
    }
}

use crate::drift::{Cadence, DriftError, Drifter};
use crate::ease::EaseInOut;
use crate::tour;

// Hard zoom clamp applied to the returned value only; the drifters
// themselves are never clamped.
pub const ZOOM_CLAMP: (f32, f32) = (0.1, 100.0);

// Per-parameter RNG stream tweaks so one base seed replays the whole rig.
const ZOOM_STREAM: u64 = 0x5EED_0002;
const JULIA_STREAM: u64 = 0x5EED_0004;

/// One tick's worth of shader-facing values. The consuming renderer knows
/// these as the `_Center`, `_Zoom` and `_c` uniforms.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShaderParams {
    pub center: [f32; 2],
    pub zoom: f32,
    pub c: [f32; 4],
}

#[derive(Clone, Debug, PartialEq)]
pub struct RigOptions {
    pub seed: u64,
    /// Fraction of a center/zoom transition covered per second.
    pub transition_rate: f32,
    pub dwell_seconds: f32,
    pub ease_strength: f32,
    pub center_jitter: f32,
    pub min_zoom: f32,
    pub max_zoom: f32,
    /// Per-second blend rate for the Julia constant.
    pub c_rate: f32,
    pub c_frame_interval: u32,
    pub initial_center: [f32; 2],
    pub initial_zoom: f32,
    pub initial_c: [f32; 4],
}

impl Default for RigOptions {
    fn default() -> Self {
        Self {
            seed: 0xF2AC_7A1D,
            transition_rate: 0.5,
            dwell_seconds: 1.0,
            ease_strength: 2.0,
            center_jitter: tour::CENTER_JITTER,
            min_zoom: tour::ZOOM_RANGE.0,
            max_zoom: tour::ZOOM_RANGE.1,
            c_rate: 0.1,
            c_frame_interval: 10,
            initial_center: [0.0, 0.0],
            initial_zoom: 1.0,
            initial_c: [0.0; 4],
        }
    }
}

/// The full three-parameter animation rig: pan center and zoom wander
/// between dwell stops on a shared cadence, while the Julia constant creeps
/// after a target that is redrawn on a fixed frame interval.
#[derive(Debug)]
pub struct DriftRig {
    center: Drifter<2>,
    zoom: Drifter<1>,
    julia_c: Drifter<4>,
}

impl DriftRig {
    pub fn new(opts: &RigOptions) -> Result<Self, DriftError> {
        let easing = EaseInOut::new(opts.ease_strength);
        let dwell = Cadence::Dwell {
            seconds: opts.dwell_seconds,
        };
        let center = Drifter::new(
            opts.initial_center,
            tour::center_policy(opts.center_jitter),
            easing,
            opts.transition_rate,
            dwell,
            fastrand::Rng::with_seed(opts.seed),
        )?;
        let zoom = Drifter::new(
            [opts.initial_zoom],
            tour::zoom_policy(opts.min_zoom, opts.max_zoom),
            easing,
            opts.transition_rate,
            dwell,
            fastrand::Rng::with_seed(opts.seed ^ ZOOM_STREAM),
        )?;
        let julia_c = Drifter::new(
            opts.initial_c,
            tour::julia_c_policy(),
            easing,
            opts.c_rate,
            Cadence::FrameInterval {
                frames: opts.c_frame_interval,
            },
            fastrand::Rng::with_seed(opts.seed ^ JULIA_STREAM),
        )?;
        Ok(Self {
            center,
            zoom,
            julia_c,
        })
    }

    /// Advance every drifter by `dt` seconds and return the new values.
    pub fn tick(&mut self, dt: f32) -> ShaderParams {
        let center = self.center.tick(dt);
        let [zoom] = self.zoom.tick(dt);
        let c = self.julia_c.tick(dt);
        ShaderParams {
            center,
            zoom: zoom.clamp(ZOOM_CLAMP.0, ZOOM_CLAMP.1),
            c,
        }
    }

    pub fn center(&self) -> &Drifter<2> {
        &self.center
    }

    pub fn zoom(&self) -> &Drifter<1> {
        &self.zoom
    }

    pub fn julia_c(&self) -> &Drifter<4> {
        &self.julia_c
    }
}

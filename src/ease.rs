/// Symmetric ease-in/ease-out curve with an adjustable acceleration exponent.
///
/// `strength = 1` degenerates to linear; `strength = 2` (the default) gives a
/// smoothstep-like ramp. Higher strengths sharpen the acceleration at both
/// ends. The curve maps 0 to 0 and 1 to 1 and is symmetric about `t = 0.5`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EaseInOut {
    pub strength: f32,
}

pub const DEFAULT_STRENGTH: f32 = 2.0;

impl Default for EaseInOut {
    fn default() -> Self {
        Self {
            strength: DEFAULT_STRENGTH,
        }
    }
}

impl EaseInOut {
    pub fn new(strength: f32) -> Self {
        Self { strength }
    }

    pub fn apply(self, t: f32) -> f32 {
        if t < 0.5 {
            (2.0 * t).powf(self.strength) / 2.0
        } else {
            1.0 - (-2.0 * t + 2.0).powf(self.strength) / 2.0
        }
    }
}

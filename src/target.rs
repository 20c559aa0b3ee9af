use crate::drift::DriftError;

/// Strategy for choosing the next drift target.
///
/// Draws are stateless given the random source: the same `fastrand::Rng`
/// state always produces the same target, which is what makes whole runs
/// replayable from a single seed.
#[derive(Debug, Clone, PartialEq)]
pub enum TargetPolicy<const N: usize> {
    /// Pick uniformly among a curated list of base vectors, then add
    /// independent uniform noise in `±jitter` per dimension. The same base
    /// may be drawn twice in a row.
    Waypoints { points: Vec<[f32; N]>, jitter: f32 },
    /// Independent uniform draw per dimension in `[lo, hi]`. A dimension
    /// with `lo == hi` is pinned to that constant.
    UniformBox { lo: [f32; N], hi: [f32; N] },
}

impl<const N: usize> TargetPolicy<N> {
    pub fn validate(&self) -> Result<(), DriftError> {
        match self {
            Self::Waypoints { points, jitter } => {
                if points.is_empty() {
                    return Err(DriftError::EmptyWaypoints);
                }
                if !jitter.is_finite() || *jitter < 0.0 {
                    return Err(DriftError::InvalidJitter(*jitter));
                }
                for (idx, point) in points.iter().enumerate() {
                    if point.iter().any(|v| !v.is_finite()) {
                        return Err(DriftError::NonFiniteWaypoint(idx));
                    }
                }
            }
            Self::UniformBox { lo, hi } => {
                for axis in 0..N {
                    if !lo[axis].is_finite() || !hi[axis].is_finite() || lo[axis] > hi[axis] {
                        return Err(DriftError::InvalidBounds {
                            axis,
                            lo: lo[axis],
                            hi: hi[axis],
                        });
                    }
                }
            }
        }
        Ok(())
    }

    pub fn draw(&self, rng: &mut fastrand::Rng) -> [f32; N] {
        match self {
            Self::Waypoints { points, jitter } => {
                let mut out = points[rng.usize(..points.len())];
                if *jitter > 0.0 {
                    for v in &mut out {
                        *v += (rng.f32() * 2.0 - 1.0) * jitter;
                    }
                }
                out
            }
            Self::UniformBox { lo, hi } => {
                let mut out = [0.0f32; N];
                for axis in 0..N {
                    out[axis] = lo[axis] + rng.f32() * (hi[axis] - lo[axis]);
                }
                out
            }
        }
    }
}

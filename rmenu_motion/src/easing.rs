// Copyright 2025 the Rmenu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easing curves for the step-based strategy.

use core::f64::consts::PI;

#[inline]
fn cos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        x.cos()
    }
    #[cfg(all(not(feature = "std"), feature = "libm"))]
    {
        libm::cos(x)
    }
}

/// Easing curve applied to step-based height interpolation.
///
/// Identifiers come from the configuration as strings; unknown identifiers
/// resolve to [`Easing::Swing`], the historical default.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Easing {
    /// Constant-velocity interpolation.
    Linear,
    /// Half-cosine ease-in-out.
    #[default]
    Swing,
}

impl Easing {
    /// Resolve an easing identifier.
    pub fn from_id(id: &str) -> Self {
        match id {
            "linear" => Self::Linear,
            _ => Self::Swing,
        }
    }

    /// Map linear progress `p` in `[0, 1]` onto the curve.
    pub fn apply(self, p: f64) -> f64 {
        let p = p.clamp(0.0, 1.0);
        match self {
            Self::Linear => p,
            Self::Swing => 0.5 - cos(p * PI) / 2.0,
        }
    }
}

// Copyright 2025 the Rmenu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rmenu Caps: host capability detection for the responsive menu core.
//!
//! The widget needs three yes/no answers from its environment:
//!
//! - can the host evaluate conditional viewport-width queries directly
//!   (media queries), or must the core fall back to comparing a numeric
//!   viewport width against a parsed pixel breakpoint?
//! - can the host animate a `max-height`-equivalent property via
//!   transitions?
//! - does the host support 3-D transform acceleration?
//!
//! Hosts answer through the [`CapabilityProbe`] trait. A feature-detection
//! collaborator, a direct style-probing shim, and a test double all look the
//! same from here. Probing happens once per page: the resulting
//! [`Capabilities`] value is `Copy`, read-only, and shared across every
//! widget instance (the only cross-instance state in the system).
//!
//! [`MotionFlags::resolve`] applies the downgrade rules: detection can turn
//! the configured animate/accelerate flags off, never on.
//!
//! ```
//! use rmenu_caps::{Capabilities, MotionFlags};
//!
//! // Transitions work but 3-D transforms do not.
//! let caps = Capabilities {
//!     conditional_queries: true,
//!     transitions: true,
//!     transforms_3d: false,
//! };
//! let flags = MotionFlags::resolve(true, true, caps);
//! assert!(flags.animate);
//! assert!(!flags.accelerate);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use log::debug;

/// Capability questions a host environment can answer.
///
/// Implementations must not fail: when a signal cannot be obtained, answer
/// `false`. The conservative default keeps the widget functional with motion
/// and media-query support switched off.
pub trait CapabilityProbe {
    /// Can the host evaluate arbitrary "viewport at least this wide?"
    /// expressions itself?
    fn supports_conditional_queries(&self) -> bool;

    /// Can the host animate a `max-height`-equivalent property through a
    /// transition declaration, signalling completion when it settles?
    fn supports_transitions(&self) -> bool;

    /// Does the host support 3-D transform acceleration?
    fn supports_transforms_3d(&self) -> bool;
}

/// Detected host capabilities.
///
/// Computed once per page via [`Capabilities::detect`] and passed by value to
/// each widget instance. Absence of a probe resolves every answer to `false`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Capabilities {
    /// Conditional viewport-width queries are supported.
    pub conditional_queries: bool,
    /// Animated max-height transitions are supported.
    pub transitions: bool,
    /// 3-D transforms are supported.
    pub transforms_3d: bool,
}

impl Capabilities {
    /// Everything unsupported; the conservative no-probe fallback.
    pub const UNSUPPORTED: Self = Self {
        conditional_queries: false,
        transitions: false,
        transforms_3d: false,
    };

    /// Query a probe, or fall back to [`Self::UNSUPPORTED`] when none exists.
    ///
    /// The detection result is logged only when `verbose` is set.
    pub fn detect(probe: Option<&dyn CapabilityProbe>, verbose: bool) -> Self {
        let caps = match probe {
            Some(probe) => Self {
                conditional_queries: probe.supports_conditional_queries(),
                transitions: probe.supports_transitions(),
                transforms_3d: probe.supports_transforms_3d(),
            },
            None => Self::UNSUPPORTED,
        };
        if verbose {
            debug!(
                "capability detection: conditional_queries={} transitions={} transforms_3d={}",
                caps.conditional_queries, caps.transitions, caps.transforms_3d
            );
        }
        caps
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::UNSUPPORTED
    }
}

/// Effective animation flags after the capability downgrade.
///
/// `animate` and `accelerate` start from the configuration and are only ever
/// lowered:
///
/// - no transition support forces both off;
/// - no 3-D transform support forces `accelerate` off;
/// - `accelerate` is never on without `animate`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MotionFlags {
    /// Use the transition-based motion strategy.
    pub animate: bool,
    /// Tag menus for 3-D acceleration.
    pub accelerate: bool,
}

impl MotionFlags {
    /// Downgrade the configured flags against detected capabilities.
    pub fn resolve(animate: bool, accelerate: bool, caps: Capabilities) -> Self {
        let animate = animate && caps.transitions;
        let accelerate = animate && accelerate && caps.transforms_3d;
        Self {
            animate,
            accelerate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedProbe(bool, bool, bool);

    impl CapabilityProbe for FixedProbe {
        fn supports_conditional_queries(&self) -> bool {
            self.0
        }
        fn supports_transitions(&self) -> bool {
            self.1
        }
        fn supports_transforms_3d(&self) -> bool {
            self.2
        }
    }

    #[test]
    fn missing_probe_resolves_to_unsupported() {
        assert_eq!(Capabilities::detect(None, false), Capabilities::UNSUPPORTED);
    }

    #[test]
    fn probe_answers_are_carried_through() {
        let caps = Capabilities::detect(Some(&FixedProbe(true, false, true)), false);
        assert!(caps.conditional_queries);
        assert!(!caps.transitions);
        assert!(caps.transforms_3d);
    }

    #[test]
    fn diagnostics_do_not_change_detection() {
        let quiet = Capabilities::detect(Some(&FixedProbe(true, true, false)), false);
        let loud = Capabilities::detect(Some(&FixedProbe(true, true, false)), true);
        assert_eq!(quiet, loud);
        assert_eq!(
            Capabilities::detect(None, true),
            Capabilities::UNSUPPORTED
        );
    }

    #[test]
    fn no_transition_support_forces_both_flags_off() {
        let caps = Capabilities {
            conditional_queries: true,
            transitions: false,
            transforms_3d: true,
        };
        let flags = MotionFlags::resolve(true, true, caps);
        assert!(!flags.animate);
        assert!(!flags.accelerate);
    }

    #[test]
    fn no_transform_support_forces_accelerate_off() {
        let caps = Capabilities {
            conditional_queries: false,
            transitions: true,
            transforms_3d: false,
        };
        let flags = MotionFlags::resolve(true, true, caps);
        assert!(flags.animate);
        assert!(!flags.accelerate);
    }

    #[test]
    fn flags_are_never_upgraded() {
        let caps = Capabilities {
            conditional_queries: true,
            transitions: true,
            transforms_3d: true,
        };
        let flags = MotionFlags::resolve(false, false, caps);
        assert!(!flags.animate);
        assert!(!flags.accelerate);

        // Accelerate without animate stays off even with full support.
        let flags = MotionFlags::resolve(false, true, caps);
        assert!(!flags.accelerate);
    }

    #[test]
    fn downgrade_is_monotonic_over_all_inputs() {
        for bits in 0_u8..32 {
            let caps = Capabilities {
                conditional_queries: bits & 1 != 0,
                transitions: bits & 2 != 0,
                transforms_3d: bits & 4 != 0,
            };
            let animate = bits & 8 != 0;
            let accelerate = bits & 16 != 0;
            let flags = MotionFlags::resolve(animate, accelerate, caps);

            assert!(!flags.animate || (animate && caps.transitions));
            assert!(!flags.accelerate || (flags.animate && accelerate && caps.transforms_3d));
        }
    }
}

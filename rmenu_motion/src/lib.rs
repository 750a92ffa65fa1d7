// Copyright 2025 the Rmenu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rmenu Motion: expand/contract strategies for menu lists.
//!
//! A menu opens and closes by animating its max-height between zero and its
//! natural height. Two interchangeable [`Motion`] strategies produce that
//! animation; one is picked at setup from the downgraded animate flag:
//!
//! - [`TransitionMotion`]: install an inline transition declaration and set
//!   the target max-height, then wait for the host's transition-end signal
//!   on the animated property. This is the preferred path when the host
//!   supports animated transitions.
//! - [`StepMotion`]: interpolate the height over the configured duration
//!   with a [`Easing`] curve, driven by host ticks (animation frames). The
//!   fallback when transitions are unsupported or animation is disabled.
//!
//! Whichever path ran, completions funnel into [`finish_expand`] /
//! [`finish_contract`], so the settled class and style state is identical —
//! strategies differ only in how they get there.
//!
//! Natural heights cannot be read off a collapsed element, so they are
//! measured up front and cached in [`MenuHeights`]. Measurement briefly
//! restyles every menu to its natural state (the calculation-in-progress
//! class), reads heights through the host's [`HeightProbe`], and restores
//! the collapsed styling.
//!
//! This crate is `no_std` and uses `alloc`. Either the `std` (default) or
//! `libm` feature must be enabled for floating-point math.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[cfg(all(not(feature = "std"), not(feature = "libm")))]
compile_error!("rmenu_motion requires either the `std` or `libm` feature");

use alloc::vec::Vec;

use hashbrown::HashMap;
use smallvec::SmallVec;

use rmenu_tree::{classes, Display, Effect, MaxHeight, MenuId, MenuTree, Overflow, Target};

mod easing;
mod step;
mod transition;

pub use easing::Easing;
pub use step::StepMotion;
pub use transition::TransitionMotion;

/// Direction of an in-flight menu animation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// The menu is opening toward its natural height.
    Expand,
    /// The menu is closing toward zero height.
    Contract,
}

/// A finished expand or contract, reported exactly once per animation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Completion {
    /// The menu whose animation settled.
    pub menu: MenuId,
    /// Which direction it was travelling.
    pub phase: Phase,
}

/// Batch of completions surfaced by one tick.
pub type Completions = SmallVec<[Completion; 2]>;

/// An interchangeable expand/contract implementation.
///
/// Strategies emit effects into `out` and report settlement through one of
/// the two completion channels: [`Motion::on_transition_end`] for
/// host-signalled transitions, [`Motion::tick`] for stepped interpolation.
/// A strategy uses exactly one channel; the other is inert.
pub trait Motion {
    /// Start opening `menu` toward `target_height`.
    fn expand(&mut self, menu: MenuId, target_height: f64, now_ms: u64, out: &mut Vec<Effect>);

    /// Start closing `menu` from `from_height`.
    fn contract(&mut self, menu: MenuId, from_height: f64, now_ms: u64, out: &mut Vec<Effect>);

    /// The host observed a transition-end signal for `property` on `menu`.
    fn on_transition_end(&mut self, menu: MenuId, property: &str) -> Option<Completion>;

    /// Advance stepped animations to `now_ms`.
    fn tick(&mut self, now_ms: u64, out: &mut Vec<Effect>) -> Completions;

    /// Returns `true` while any animation is in flight.
    fn is_idle(&self) -> bool;
}

/// Settle a menu into its expanded terminal state.
///
/// Identical for both strategies: the transient inline transition goes away,
/// height becomes unconstrained, nested submenus may overflow, and the menu
/// carries the expanded class.
pub fn finish_expand(menu: MenuId, out: &mut Vec<Effect>) {
    let target = Target::Menu(menu);
    out.push(Effect::ClearTransition(target));
    out.push(Effect::RemoveClass(target, classes::HIDDEN));
    out.push(Effect::SetMaxHeight(target, MaxHeight::Unconstrained));
    out.push(Effect::SetOverflow(target, Overflow::Visible));
    out.push(Effect::AddClass(target, classes::MENU_EXPANDED));
}

/// Settle a menu into its contracted terminal state.
///
/// The top-level menu additionally becomes accessibly hidden: in the
/// contracted layout a closed top menu is still in the document for
/// assistive technology, just not visible.
pub fn finish_contract(menu: MenuId, out: &mut Vec<Effect>) {
    let target = Target::Menu(menu);
    out.push(Effect::ClearTransition(target));
    out.push(Effect::SetMaxHeight(target, MaxHeight::Zero));
    out.push(Effect::SetOverflow(target, Overflow::Hidden));
    out.push(Effect::RemoveClass(target, classes::MENU_EXPANDED));
    if menu == MenuId::Top {
        out.push(Effect::AddClass(target, classes::HIDDEN));
        out.push(Effect::SetDisplay(target, Display::Shown));
    }
}

/// Answers "how tall would this menu be if fully open?".
///
/// Implemented by the host, which can actually measure rendered boxes. Only
/// consulted while the measurement styling from [`MenuHeights::recalculate`]
/// is in place.
pub trait HeightProbe {
    /// Natural (fully expanded) height of the menu, in pixels.
    fn natural_height(&mut self, menu: MenuId) -> f64;
}

/// Cache of natural menu heights, keyed by menu.
///
/// Recalculated on every layout change in animate mode; queried by the
/// widget when it starts an expand or contract.
#[derive(Clone, Debug, Default)]
pub struct MenuHeights {
    map: HashMap<MenuId, f64>,
}

impl MenuHeights {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached natural height of a menu.
    pub fn get(&self, menu: MenuId) -> Option<f64> {
        self.map.get(&menu).copied()
    }

    /// Re-measure every menu in the tree.
    ///
    /// Emits the measurement styling (calculation class on, expanded class
    /// and inline styles off, menus shown), reads each height through the
    /// probe, then restores the collapsed styling. The host must apply the
    /// leading effects before its probe answers are meaningful, so effects
    /// are split around the probe calls in the emitted order.
    pub fn recalculate(
        &mut self,
        tree: &MenuTree,
        probe: &mut dyn HeightProbe,
        out: &mut Vec<Effect>,
    ) {
        let menus = tree.menus();
        for &menu in &menus {
            let target = Target::Menu(menu);
            out.push(Effect::AddClass(target, classes::CALCULATING));
            out.push(Effect::RemoveClass(target, classes::MENU_EXPANDED));
            out.push(Effect::ClearInlineStyles(target));
            out.push(Effect::SetDisplay(target, Display::Shown));
        }
        self.map.clear();
        for &menu in &menus {
            self.map.insert(menu, probe.natural_height(menu));
        }
        for &menu in &menus {
            let target = Target::Menu(menu);
            out.push(Effect::SetMaxHeight(target, MaxHeight::Zero));
            out.push(Effect::RemoveClass(target, classes::CALCULATING));
        }
    }
}

// Copyright 2025 the Rmenu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transition-based motion: set a max-height target, wait for the host.

use alloc::string::String;
use alloc::vec::Vec;

use smallvec::SmallVec;

use rmenu_tree::{Effect, MaxHeight, MenuId, Overflow, Target, TransitionSpec};

use crate::{Completion, Completions, Motion, Phase};

/// The property every transition animates; completion signals are filtered
/// to it so unrelated transitions on the same element are ignored.
const PROPERTY: &str = "max-height";

/// Motion strategy backed by host-native animated transitions.
///
/// Expanding installs an inline transition declaration and sets the target
/// max-height; the host animates and eventually reports a transition-end
/// signal for the property, which [`Motion::on_transition_end`] converts
/// into a single [`Completion`]. The completion listener is one-shot: the
/// pending entry is removed as it fires.
#[derive(Clone, Debug)]
pub struct TransitionMotion {
    duration_ms: u32,
    easing: String,
    /// Menus with an in-flight transition and the direction they travel.
    /// Restarting a menu replaces its entry (last writer wins).
    pending: SmallVec<[(MenuId, Phase); 4]>,
}

impl TransitionMotion {
    /// Create a strategy with the configured duration and easing identifier.
    pub fn new(duration_ms: u32, easing: String) -> Self {
        Self {
            duration_ms,
            easing,
            pending: SmallVec::new(),
        }
    }

    fn spec(&self) -> TransitionSpec {
        TransitionSpec {
            property: PROPERTY,
            duration_ms: self.duration_ms,
            easing: self.easing.clone(),
        }
    }

    fn track(&mut self, menu: MenuId, phase: Phase) {
        self.pending.retain(|(m, _)| *m != menu);
        self.pending.push((menu, phase));
    }
}

impl Motion for TransitionMotion {
    fn expand(&mut self, menu: MenuId, target_height: f64, _now_ms: u64, out: &mut Vec<Effect>) {
        let target = Target::Menu(menu);
        out.push(Effect::SetOverflow(target, Overflow::Hidden));
        out.push(Effect::SetTransition(target, self.spec()));
        out.push(Effect::SetMaxHeight(target, MaxHeight::Px(target_height)));
        self.track(menu, Phase::Expand);
    }

    fn contract(&mut self, menu: MenuId, from_height: f64, _now_ms: u64, out: &mut Vec<Effect>) {
        let target = Target::Menu(menu);
        // Pin the current height first so the transition has a concrete
        // starting value; collapsing from `none` does not animate.
        out.push(Effect::SetMaxHeight(target, MaxHeight::Px(from_height)));
        out.push(Effect::SetTransition(target, self.spec()));
        out.push(Effect::SetOverflow(target, Overflow::Hidden));
        out.push(Effect::SetMaxHeight(target, MaxHeight::Zero));
        self.track(menu, Phase::Contract);
    }

    fn on_transition_end(&mut self, menu: MenuId, property: &str) -> Option<Completion> {
        if property != PROPERTY {
            return None;
        }
        let idx = self.pending.iter().position(|(m, _)| *m == menu)?;
        let (menu, phase) = self.pending.remove(idx);
        Some(Completion { menu, phase })
    }

    fn tick(&mut self, _now_ms: u64, _out: &mut Vec<Effect>) -> Completions {
        Completions::new()
    }

    fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }
}

// Copyright 2025 the Rmenu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Step-based motion: timed height interpolation driven by host ticks.

use alloc::vec::Vec;

use smallvec::SmallVec;

use rmenu_tree::{Effect, MaxHeight, MenuId, Overflow, Target};

use crate::easing::Easing;
use crate::{Completion, Completions, Motion, Phase};

#[derive(Clone, Debug)]
struct Animation {
    menu: MenuId,
    phase: Phase,
    from: f64,
    to: f64,
    start_ms: u64,
}

/// Motion strategy that interpolates max-height itself.
///
/// Used when the host cannot animate transitions (or animation is simply
/// configured off the transition path). The host calls [`Motion::tick`] on
/// its frame cadence; each tick emits the interpolated height for every
/// in-flight menu and reports completions once the duration has elapsed.
#[derive(Clone, Debug)]
pub struct StepMotion {
    duration_ms: u32,
    easing: Easing,
    active: SmallVec<[Animation; 4]>,
}

impl StepMotion {
    /// Create a strategy with the configured duration and easing curve.
    pub fn new(duration_ms: u32, easing: Easing) -> Self {
        Self {
            duration_ms,
            easing,
            active: SmallVec::new(),
        }
    }

    fn start(&mut self, animation: Animation, out: &mut Vec<Effect>) {
        let target = Target::Menu(animation.menu);
        out.push(Effect::SetOverflow(target, Overflow::Hidden));
        out.push(Effect::SetMaxHeight(target, MaxHeight::Px(animation.from)));
        // Restarting a menu mid-flight replaces the old animation.
        self.active.retain(|a| a.menu != animation.menu);
        self.active.push(animation);
    }
}

impl Motion for StepMotion {
    fn expand(&mut self, menu: MenuId, target_height: f64, now_ms: u64, out: &mut Vec<Effect>) {
        self.start(
            Animation {
                menu,
                phase: Phase::Expand,
                from: 0.0,
                to: target_height,
                start_ms: now_ms,
            },
            out,
        );
    }

    fn contract(&mut self, menu: MenuId, from_height: f64, now_ms: u64, out: &mut Vec<Effect>) {
        self.start(
            Animation {
                menu,
                phase: Phase::Contract,
                from: from_height,
                to: 0.0,
                start_ms: now_ms,
            },
            out,
        );
    }

    fn on_transition_end(&mut self, _menu: MenuId, _property: &str) -> Option<Completion> {
        // Completion comes from ticks; host transition signals are inert.
        None
    }

    fn tick(&mut self, now_ms: u64, out: &mut Vec<Effect>) -> Completions {
        let duration = f64::from(self.duration_ms.max(1));
        let easing = self.easing;
        let mut done = Completions::new();

        for animation in &self.active {
            let elapsed = now_ms.saturating_sub(animation.start_ms) as f64;
            let progress = (elapsed / duration).clamp(0.0, 1.0);
            let eased = easing.apply(progress);
            let height = animation.from + (animation.to - animation.from) * eased;
            out.push(Effect::SetMaxHeight(
                Target::Menu(animation.menu),
                MaxHeight::Px(height),
            ));
            if progress >= 1.0 {
                done.push(Completion {
                    menu: animation.menu,
                    phase: animation.phase,
                });
            }
        }
        self.active
            .retain(|a| !done.iter().any(|c| c.menu == a.menu));
        done
    }

    fn is_idle(&self) -> bool {
        self.active.is_empty()
    }
}

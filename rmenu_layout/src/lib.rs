// Copyright 2025 the Rmenu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rmenu Layout: layout mode decision and mode-transition planning.
//!
//! Two responsibilities, both pure:
//!
//! - [`decide_mode`] answers "expanded or contracted?" for the current
//!   viewport. Hosts with conditional-query support evaluate the configured
//!   breakpoint expression themselves (through [`ViewportProbe`]); everyone
//!   else gets the numeric fallback, which compares the viewport width
//!   against the strictly parsed pixel breakpoint (malformed values degrade
//!   to the 769 px default, with a warning in verbose mode).
//! - [`plan_transition`] produces the effect list for an actual mode change:
//!   layout class swap on the wrapper, hover-class cleanup, hover tracking
//!   on/off, toggle control show/hide, and top-menu visibility synchronized
//!   with the toggle state. Planning the mode that already holds yields
//!   `None` — re-applying a layout is free.
//!
//! The unconditional "close all open submenus" safety net that accompanies
//! every adjust, and the resize debounce in front of it, live in the widget
//! crate; they involve the shared interaction timer, not layout policy.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use log::{debug, warn};

use rmenu_caps::Capabilities;
use rmenu_config::Breakpoint;
use rmenu_tree::{classes, Display, Effect, MaxHeight, MenuId, MenuTree, Overflow, Target};

/// Which of the two responsive layouts holds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LayoutMode {
    /// Wide viewport: top menu always visible, submenus open on hover/focus.
    Expanded,
    /// Narrow viewport: top menu behind the toggle control, accordion
    /// submenus.
    Contracted,
}

/// Toggle control state; only meaningful in the contracted layout.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ToggleState {
    /// Expanded layout: the control is not shown.
    Hidden,
    /// Shown, menu closed.
    Inactive,
    /// Shown, menu open.
    Active,
}

impl ToggleState {
    /// Returns `true` when the control is visible.
    pub const fn is_shown(self) -> bool {
        matches!(self, Self::Inactive | Self::Active)
    }
}

/// Host-supplied viewport answers.
pub trait ViewportProbe {
    /// Current outer viewport width in pixels.
    fn width(&self) -> f64;

    /// Evaluate "is the viewport at least `breakpoint` wide?" natively.
    ///
    /// Return `None` when the expression cannot be evaluated; the caller
    /// then falls back to the numeric comparison.
    fn matches_min_width(&self, breakpoint: &str) -> Option<bool>;
}

/// Decide the layout mode for the current viewport.
///
/// Diagnostics are opt-in: nothing is logged unless `verbose` is set.
pub fn decide_mode(
    caps: Capabilities,
    probe: &dyn ViewportProbe,
    breakpoint: &str,
    verbose: bool,
) -> LayoutMode {
    if caps.conditional_queries
        && let Some(matches) = probe.matches_min_width(breakpoint)
    {
        if verbose {
            debug!("layout: conditional query '{breakpoint}' matched={matches}");
        }
        return if matches {
            LayoutMode::Expanded
        } else {
            LayoutMode::Contracted
        };
    }

    let threshold = match Breakpoint::parse_px(breakpoint) {
        Ok(px) => px,
        Err(err) => {
            let fallback = rmenu_config::DEFAULT_BREAKPOINT_PX;
            if verbose {
                warn!("layout: breakpoint '{breakpoint}' rejected ({err}), using {fallback}px");
            }
            fallback
        }
    };
    if probe.width() < threshold {
        LayoutMode::Contracted
    } else {
        LayoutMode::Expanded
    }
}

/// Effects and resulting toggle state for a layout mode change.
#[derive(Clone, Debug)]
pub struct TransitionPlan {
    /// Host mutations to apply, in order.
    pub effects: Vec<Effect>,
    /// Toggle state after the transition.
    pub toggle: ToggleState,
    /// Submenu natural heights must be re-measured (animate mode only;
    /// the accordion animation needs them).
    pub recalculate_heights: bool,
}

/// Plan the transition into `target`, or `None` when that mode already holds.
///
/// `current` is `None` before the first adjust, so the initial adjust always
/// produces a plan. Clearing the `OPEN` item flags themselves is the caller's
/// job (it owns the tree); the plan only emits their class projections.
pub fn plan_transition(
    tree: &MenuTree,
    current: Option<LayoutMode>,
    target: LayoutMode,
    toggle: ToggleState,
    animate: bool,
) -> Option<TransitionPlan> {
    if current == Some(target) {
        return None;
    }

    let mut effects = Vec::new();
    let top = Target::Menu(MenuId::Top);

    // Hover styling never survives a layout change.
    for item in tree.open_items() {
        effects.push(Effect::RemoveClass(Target::Item(item), classes::ITEM_OPEN));
    }

    let toggle_state = match target {
        LayoutMode::Contracted => {
            effects.push(Effect::RemoveClass(Target::Wrapper, classes::LAYOUT_EXPANDED));
            effects.push(Effect::AddClass(Target::Wrapper, classes::LAYOUT_CONTRACTED));
            effects.push(Effect::SetHoverTracking(false));
            effects.push(Effect::AddClass(Target::Toggle, classes::TOGGLE_SHOWN));

            if toggle == ToggleState::Active {
                // The menu stays open across the layout change.
                effects.push(Effect::RemoveClass(top, classes::HIDDEN));
                effects.push(Effect::SetDisplay(top, Display::Shown));
                effects.push(Effect::AddClass(top, classes::MENU_EXPANDED));
                if animate {
                    effects.push(Effect::SetMaxHeight(top, MaxHeight::Unconstrained));
                }
                ToggleState::Active
            } else {
                effects.push(Effect::AddClass(top, classes::HIDDEN));
                effects.push(Effect::SetDisplay(top, Display::Shown));
                effects.push(Effect::RemoveClass(top, classes::MENU_EXPANDED));
                ToggleState::Inactive
            }
        }
        LayoutMode::Expanded => {
            effects.push(Effect::RemoveClass(Target::Wrapper, classes::LAYOUT_CONTRACTED));
            effects.push(Effect::AddClass(Target::Wrapper, classes::LAYOUT_EXPANDED));
            effects.push(Effect::SetHoverTracking(true));
            effects.push(Effect::RemoveClass(Target::Toggle, classes::TOGGLE_SHOWN));
            effects.push(Effect::RemoveClass(Target::Toggle, classes::TOGGLE_ACTIVE));

            effects.push(Effect::RemoveClass(top, classes::HIDDEN));
            effects.push(Effect::SetDisplay(top, Display::Shown));
            effects.push(Effect::AddClass(top, classes::MENU_EXPANDED));
            if animate {
                effects.push(Effect::SetMaxHeight(top, MaxHeight::Unconstrained));
                effects.push(Effect::SetOverflow(top, Overflow::Visible));
            }
            ToggleState::Hidden
        }
    };

    Some(TransitionPlan {
        effects,
        toggle: toggle_state,
        recalculate_heights: animate,
    })
}

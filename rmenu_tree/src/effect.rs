// Copyright 2025 the Rmenu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-side mutation vocabulary.
//!
//! Every state transition in the workspace returns a sequence of [`Effect`]
//! values instead of mutating a document directly. A host shell walks the
//! sequence in order and applies each effect to its DOM. Effects are
//! idempotent by construction (adding a class twice, setting the same style
//! twice), so replaying a sequence cannot corrupt host state.

use alloc::string::String;

use crate::types::{ItemId, MenuId};

/// Element addressed by an effect.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    /// The container's parent element; carries the layout classes.
    Wrapper,
    /// The bound container element.
    Container,
    /// The toggle control.
    Toggle,
    /// A menu list.
    Menu(MenuId),
    /// A menu item.
    Item(ItemId),
    /// The interactive anchor inside a menu item.
    Anchor(ItemId),
}

/// Max-height style value.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MaxHeight {
    /// `max-height: 0` — fully contracted.
    Zero,
    /// A pixel value, mid-animation or as an expand target.
    Px(f64),
    /// `max-height: none` — the settled expanded state.
    Unconstrained,
}

/// Overflow style value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Overflow {
    /// Clip overflowing content (while animating height).
    Hidden,
    /// Let submenus escape their parent's box.
    Visible,
}

/// Display state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Display {
    /// Element participates in layout.
    Shown,
    /// Element is removed from layout.
    Hidden,
}

/// An inline transition declaration for the transition-based motion strategy.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TransitionSpec {
    /// Animated property; always a max-height equivalent.
    pub property: &'static str,
    /// Duration in milliseconds.
    pub duration_ms: u32,
    /// Easing identifier, passed through verbatim.
    pub easing: String,
}

/// A single host-side mutation.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Add a class from the [`crate::classes`] contract.
    AddClass(Target, &'static str),
    /// Remove a class from the [`crate::classes`] contract.
    RemoveClass(Target, &'static str),
    /// Assign a tabindex attribute.
    SetTabIndex(Target, i32),
    /// Assign the `aria-hidden` attribute.
    SetAriaHidden(Target, bool),
    /// Show or hide the element entirely.
    SetDisplay(Target, Display),
    /// Assign the max-height style.
    SetMaxHeight(Target, MaxHeight),
    /// Assign the overflow style.
    SetOverflow(Target, Overflow),
    /// Install an inline transition declaration.
    SetTransition(Target, TransitionSpec),
    /// Remove any inline transition declaration.
    ClearTransition(Target),
    /// Strip all inline styles (used around height measurement).
    ClearInlineStyles(Target),
    /// Attach (`true`) or detach (`false`) hover tracking on menu items;
    /// only the expanded layout is hover-driven.
    SetHoverTracking(bool),
    /// Move keyboard focus to an item's anchor.
    FocusAnchor(ItemId),
    /// Drop keyboard focus from an item's anchor.
    BlurAnchor(ItemId),
    /// Follow a link target.
    Navigate(String),
    /// Scroll the item into the viewport if it is off screen; hosts resolve
    /// this with real geometry (see the widget crate's scroll helper).
    ScrollIntoView(ItemId),
}

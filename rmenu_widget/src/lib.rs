// Copyright 2025 the Rmenu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rmenu Widget: the per-container responsive menu instance.
//!
//! This crate ties the workspace together into one host-facing state
//! machine. A [`Widget`] owns the resolved configuration, the detected
//! capabilities and their downgraded motion flags, the bound menu tree, the
//! layout and toggle state, keyboard focus, the natural-height cache, and
//! the selected motion strategy. Hosts feed it events and apply the
//! returned effect lists; the widget never touches a DOM.
//!
//! Time never comes from a clock here. Every time-sensitive entry point
//! takes a `now_ms` timestamp supplied by the host, and delayed work runs
//! through a single [`DelaySlot`]: rescheduling replaces whatever was
//! pending, so a burst of resize or interaction events settles into exactly
//! one outcome. Resize waits 500 ms of quiet time, interaction 100 ms, and
//! there is at most one live delayed action per instance.
//!
//! The host side of the contract is small: implement the viewport and
//! height probes (the [`Host`] trait), apply effects in order, report
//! transition-end signals, call [`Widget::poll`] as time passes and
//! [`Widget::tick`] per frame while a step animation runs, and resolve
//! scroll effects with [`scroll_target`].
//!
//! ```
//! use rmenu_caps::Capabilities;
//! use rmenu_config::Options;
//! use rmenu_layout::{LayoutMode, ViewportProbe};
//! use rmenu_motion::HeightProbe;
//! use rmenu_tree::{MenuId, MenuTree};
//! use rmenu_widget::Widget;
//!
//! struct Page;
//!
//! impl ViewportProbe for Page {
//!     fn width(&self) -> f64 {
//!         1024.0
//!     }
//!     fn matches_min_width(&self, _breakpoint: &str) -> Option<bool> {
//!         None
//!     }
//! }
//!
//! impl HeightProbe for Page {
//!     fn natural_height(&mut self, _menu: MenuId) -> f64 {
//!         240.0
//!     }
//! }
//!
//! let mut tree = MenuTree::new();
//! let products = tree.add_item(MenuId::Top, Some("/products"));
//! tree.add_item(MenuId::Sub(products), Some("/products/widgets"));
//!
//! let mut widget = Widget::new(Options::default(), Capabilities::UNSUPPORTED, tree);
//! let effects = widget.setup(0, &mut Page);
//! assert!(!effects.is_empty());
//! assert_eq!(widget.mode(), Some(LayoutMode::Expanded));
//! ```
//!
//! This crate is `no_std` and uses `alloc`. Either the `std` (default) or
//! `libm` feature must be enabled for the geometry dependency.

#![no_std]

extern crate alloc;

mod schedule;
mod scroll;
mod widget;

pub use schedule::DelaySlot;
pub use scroll::scroll_target;
pub use widget::{
    Activation, Disposition, Host, INTERACTION_DELAY_MS, RESIZE_DELAY_MS, Widget,
};

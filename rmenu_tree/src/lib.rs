// Copyright 2025 the Rmenu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rmenu Tree: the menu structure model behind the responsive menu core.
//!
//! The widget never touches a real DOM. This crate supplies the three pieces
//! the rest of the workspace shares instead:
//!
//! - [`MenuTree`]: an arena of menu items mirroring the nested list markup.
//!   Each item knows its owning menu, its submenu items, an optional link
//!   target, and a set of [`ItemFlags`] (positional flags recomputed on every
//!   decoration pass, plus the transient open state).
//! - [`Effect`]: the vocabulary of host-side mutations — class and attribute
//!   changes, style assignments, focus moves, navigation, scrolling. State
//!   transitions everywhere in the workspace return `Vec<Effect>`; a host
//!   shell applies them to its DOM in order. Applying the same effect twice
//!   is always harmless.
//! - [`classes`]: the class-name wire contract shared with the stylesheet.
//!   These strings are load-bearing for visual correctness and must not
//!   change.
//!
//! [`decorate`] is the setup pass: it recomputes derived item flags and emits
//! the structural classes, accessibility attributes, and tabindex assignments
//! for the whole subtree. It is a pure function of the tree and
//! configuration, so re-running setup over unchanged markup produces an
//! identical effect list.
//!
//! ```
//! use rmenu_caps::MotionFlags;
//! use rmenu_config::{Config, Options};
//! use rmenu_tree::{decorate, MenuId, MenuTree};
//!
//! let mut tree = MenuTree::new();
//! let products = tree.add_item(MenuId::Top, Some("/products"));
//! tree.add_item(MenuId::Sub(products), Some("/products/widgets"));
//!
//! let config = Config::resolve(Options::default());
//! let effects = decorate(&mut tree, &config, MotionFlags::default());
//! assert!(!effects.is_empty());
//! assert!(tree.has_submenu(products));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod classes;
mod decorate;
mod effect;
mod tree;
mod types;

pub use decorate::decorate;
pub use effect::{Display, Effect, MaxHeight, Overflow, Target, TransitionSpec};
pub use tree::MenuTree;
pub use types::{ItemFlags, ItemId, MenuId};

// Copyright 2025 the Rmenu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Class-name wire contract shared with the stylesheet.
//!
//! These strings are the interface between the interaction core and the
//! accompanying CSS. The stylesheet keys every visual rule off them, so they
//! are stable names: renaming one here is a breaking change for every host.

/// Applied to the wrapper (the container's parent element).
pub const WRAPPER: &str = "rm-container";

/// Applied to the bound container element.
pub const CONTAINER: &str = "rm-nav";

/// Applied to the wrapper to trigger the expanded layout.
pub const LAYOUT_EXPANDED: &str = "rm-layout-expanded";

/// Applied to the wrapper to trigger the contracted layout.
pub const LAYOUT_CONTRACTED: &str = "rm-layout-contracted";

/// Present in static markup; removed once scripting takes over.
pub const NO_SCRIPT: &str = "rm-nojs";

/// Applied to every menu list.
pub const MENU: &str = "rm-menu";

/// Applied to the top-level menu list.
pub const TOP_MENU: &str = "rm-top-menu";

/// Applied to a menu while it is expanded.
pub const MENU_EXPANDED: &str = "rm-menu-expanded";

/// Hides an element visually while keeping it available to assistive
/// technology.
pub const HIDDEN: &str = "accessibly-hidden";

/// Applied to menus while their natural height is being measured.
pub const CALCULATING: &str = "rm-calculate";

/// Applied to every menu item.
pub const MENU_ITEM: &str = "rm-menu-item";

/// Applied to items that contain a submenu.
pub const PARENT_ITEM: &str = "rm-parent";

/// Applied to an item while its submenu is open.
pub const ITEM_OPEN: &str = "rm-hover";

/// Applied to the first item of a sibling group.
pub const ITEM_FIRST: &str = "rm-first";

/// Applied to the last item of a sibling group.
pub const ITEM_LAST: &str = "rm-last";

/// Applied to the second-to-last item of a sibling group.
pub const ITEM_SECOND_TO_LAST: &str = "rm-2nd-last";

/// Applied to menus when the transition strategy is active.
pub const ANIMATE: &str = "rm-css-animate";

/// Applied to menus when 3-D acceleration is forced.
pub const ACCELERATE: &str = "rm-accelerate";

/// Styles the toggle control as a button.
pub const TOGGLE_BUTTON: &str = "rm-button";

/// Applied to the toggle control while it is shown (contracted layout).
pub const TOGGLE_SHOWN: &str = "rm-show";

/// Applied to the toggle control while the menu is open.
pub const TOGGLE_ACTIVE: &str = "rm-active";

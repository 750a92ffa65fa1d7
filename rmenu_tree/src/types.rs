// Copyright 2025 the Rmenu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Identifiers and per-item flags.

/// Identifier for a menu item within a [`crate::MenuTree`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ItemId(pub(crate) u32);

impl ItemId {
    pub(crate) const fn new(idx: usize) -> Self {
        Self(idx as u32)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// Identifier for a menu list: the top-level menu, or the submenu owned by a
/// parent item.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum MenuId {
    /// The top-level menu directly under the bound container.
    Top,
    /// The submenu nested inside the given item.
    Sub(ItemId),
}

impl MenuId {
    /// The item owning this menu, if it is a submenu.
    pub const fn owner(self) -> Option<ItemId> {
        match self {
            Self::Top => None,
            Self::Sub(item) => Some(item),
        }
    }
}

bitflags::bitflags! {
    /// Per-item state flags.
    ///
    /// The positional flags and `PARENT` are derived from the tree shape and
    /// recomputed by every decoration pass. `OPEN` is interaction state owned
    /// by the widget; the `rm-hover` class is its projection.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ItemFlags: u8 {
        /// Item contains a nested menu.
        const PARENT         = 0b0000_0001;
        /// First item in its sibling group.
        const FIRST          = 0b0000_0010;
        /// Last item in its sibling group.
        const LAST           = 0b0000_0100;
        /// Second to last item in its sibling group.
        const SECOND_TO_LAST = 0b0000_1000;
        /// Item's submenu is currently expanded (or expanding).
        const OPEN           = 0b0001_0000;
    }
}

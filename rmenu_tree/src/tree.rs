// Copyright 2025 the Rmenu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arena-based menu tree.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use smallvec::SmallVec;

use crate::types::{ItemFlags, ItemId, MenuId};

#[derive(Clone, Debug)]
struct ItemNode {
    /// Owning parent item; `None` for items of the top-level menu.
    parent: Option<ItemId>,
    /// Items of this item's submenu, in document order.
    children: SmallVec<[ItemId; 4]>,
    /// Link target of the item's anchor.
    href: Option<String>,
    flags: ItemFlags,
}

/// The nested menu structure a widget instance is bound to.
///
/// Items are stored in an arena and addressed by [`ItemId`]; ids are minted
/// by [`MenuTree::add_item`] and stay valid for the tree's lifetime (items
/// are never removed — a host re-binding changed markup builds a new tree
/// and re-runs setup).
///
/// ```
/// use rmenu_tree::{MenuId, MenuTree};
///
/// let mut tree = MenuTree::new();
/// let about = tree.add_item(MenuId::Top, Some("/about"));
/// let team = tree.add_item(MenuId::Sub(about), Some("/about/team"));
///
/// assert_eq!(tree.menu_of(team), MenuId::Sub(about));
/// assert!(tree.has_submenu(about));
/// assert!(!tree.has_submenu(team));
/// ```
#[derive(Clone, Debug, Default)]
pub struct MenuTree {
    items: Vec<ItemNode>,
    /// Items of the top-level menu, in document order.
    top: SmallVec<[ItemId; 8]>,
}

impl MenuTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item to the given menu, returning its id.
    pub fn add_item(&mut self, menu: MenuId, href: Option<&str>) -> ItemId {
        let id = ItemId::new(self.items.len());
        self.items.push(ItemNode {
            parent: menu.owner(),
            children: SmallVec::new(),
            href: href.map(ToString::to_string),
            flags: ItemFlags::empty(),
        });
        match menu {
            MenuId::Top => self.top.push(id),
            MenuId::Sub(owner) => self.items[owner.idx()].children.push(id),
        }
        id
    }

    /// Number of items in the tree.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the tree has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over all item ids in insertion order.
    pub fn items(&self) -> impl Iterator<Item = ItemId> + '_ {
        (0..self.items.len()).map(ItemId::new)
    }

    /// The item's link target, if any.
    pub fn href(&self, item: ItemId) -> Option<&str> {
        self.items[item.idx()].href.as_deref()
    }

    /// The item's current flags.
    pub fn flags(&self, item: ItemId) -> ItemFlags {
        self.items[item.idx()].flags
    }

    /// Set the given flags on an item.
    pub fn insert_flags(&mut self, item: ItemId, flags: ItemFlags) {
        self.items[item.idx()].flags |= flags;
    }

    /// Clear the given flags on an item.
    pub fn remove_flags(&mut self, item: ItemId, flags: ItemFlags) {
        self.items[item.idx()].flags &= !flags;
    }

    /// The parent item owning the menu this item lives in, if any.
    pub fn parent_of(&self, item: ItemId) -> Option<ItemId> {
        self.items[item.idx()].parent
    }

    /// The menu containing this item.
    pub fn menu_of(&self, item: ItemId) -> MenuId {
        match self.items[item.idx()].parent {
            Some(parent) => MenuId::Sub(parent),
            None => MenuId::Top,
        }
    }

    /// Items of the given menu, in document order.
    pub fn children(&self, menu: MenuId) -> &[ItemId] {
        match menu {
            MenuId::Top => &self.top,
            MenuId::Sub(owner) => &self.items[owner.idx()].children,
        }
    }

    /// Returns `true` if the item owns a submenu.
    pub fn has_submenu(&self, item: ItemId) -> bool {
        !self.items[item.idx()].children.is_empty()
    }

    /// The item's submenu, if it owns one.
    pub fn submenu(&self, item: ItemId) -> Option<MenuId> {
        self.has_submenu(item).then_some(MenuId::Sub(item))
    }

    /// All menus in the tree: the top-level menu followed by every submenu,
    /// in item insertion order.
    pub fn menus(&self) -> Vec<MenuId> {
        let mut out = Vec::with_capacity(1 + self.items.len() / 2);
        out.push(MenuId::Top);
        out.extend(self.items().filter_map(|item| self.submenu(item)));
        out
    }

    /// Submenus strictly inside the given menu, in depth-first document
    /// order. The menu itself is not included.
    pub fn submenus_within(&self, menu: MenuId) -> Vec<MenuId> {
        let mut out = Vec::new();
        let mut stack: Vec<ItemId> = self.children(menu).iter().rev().copied().collect();
        while let Some(item) = stack.pop() {
            if let Some(submenu) = self.submenu(item) {
                out.push(submenu);
                stack.extend(self.children(submenu).iter().rev().copied());
            }
        }
        out
    }

    /// Items currently carrying the `OPEN` flag.
    pub fn open_items(&self) -> Vec<ItemId> {
        self.items()
            .filter(|&item| self.flags(item).contains(ItemFlags::OPEN))
            .collect()
    }

    /// Recompute the derived flags: `PARENT` plus the first/last/second-to-
    /// last positional flags per sibling group. `OPEN` is untouched.
    pub fn refresh_positions(&mut self) {
        let derived =
            ItemFlags::PARENT | ItemFlags::FIRST | ItemFlags::LAST | ItemFlags::SECOND_TO_LAST;
        for node in &mut self.items {
            node.flags &= !derived;
        }
        let menus = self.menus();
        for menu in menus {
            let children: SmallVec<[ItemId; 8]> = self.children(menu).iter().copied().collect();
            if let Some((&first, _)) = children.split_first() {
                self.insert_flags(first, ItemFlags::FIRST);
            }
            if let Some((&last, rest)) = children.split_last() {
                self.insert_flags(last, ItemFlags::LAST);
                if let Some(&second_to_last) = rest.last() {
                    self.insert_flags(second_to_last, ItemFlags::SECOND_TO_LAST);
                }
            }
        }
        for item in (0..self.items.len()).map(ItemId::new) {
            if self.has_submenu(item) {
                self.insert_flags(item, ItemFlags::PARENT);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn sample() -> (MenuTree, ItemId, ItemId, ItemId, ItemId) {
        let mut tree = MenuTree::new();
        let home = tree.add_item(MenuId::Top, Some("/"));
        let products = tree.add_item(MenuId::Top, Some("/products"));
        let widgets = tree.add_item(MenuId::Sub(products), Some("/products/widgets"));
        let gadgets = tree.add_item(MenuId::Sub(products), Some("/products/gadgets"));
        (tree, home, products, widgets, gadgets)
    }

    #[test]
    fn structure_queries() {
        let (tree, home, products, widgets, gadgets) = sample();

        assert_eq!(tree.item_count(), 4);
        assert_eq!(tree.menu_of(home), MenuId::Top);
        assert_eq!(tree.menu_of(widgets), MenuId::Sub(products));
        assert_eq!(tree.parent_of(widgets), Some(products));
        assert_eq!(tree.parent_of(home), None);
        assert_eq!(tree.children(MenuId::Top), &[home, products]);
        assert_eq!(tree.children(MenuId::Sub(products)), &[widgets, gadgets]);
        assert!(tree.has_submenu(products));
        assert!(!tree.has_submenu(home));
        assert_eq!(tree.submenu(products), Some(MenuId::Sub(products)));
        assert_eq!(tree.submenu(home), None);
        assert_eq!(tree.href(gadgets), Some("/products/gadgets"));
    }

    #[test]
    fn menus_lists_top_then_submenus() {
        let (tree, _, products, _, _) = sample();
        assert_eq!(tree.menus(), vec![MenuId::Top, MenuId::Sub(products)]);
    }

    #[test]
    fn submenus_within_is_depth_first_and_exclusive() {
        let mut tree = MenuTree::new();
        let a = tree.add_item(MenuId::Top, None);
        let b = tree.add_item(MenuId::Sub(a), None);
        let _c = tree.add_item(MenuId::Sub(b), None);
        let d = tree.add_item(MenuId::Top, None);
        let _e = tree.add_item(MenuId::Sub(d), None);

        assert_eq!(
            tree.submenus_within(MenuId::Top),
            vec![MenuId::Sub(a), MenuId::Sub(b), MenuId::Sub(d)]
        );
        assert_eq!(tree.submenus_within(MenuId::Sub(a)), vec![MenuId::Sub(b)]);
        assert_eq!(tree.submenus_within(MenuId::Sub(b)), vec![]);
    }

    #[test]
    fn refresh_positions_marks_sibling_groups() {
        let (mut tree, home, products, widgets, gadgets) = sample();
        tree.refresh_positions();

        assert!(tree.flags(home).contains(ItemFlags::FIRST));
        assert!(tree.flags(home).contains(ItemFlags::SECOND_TO_LAST));
        assert!(tree.flags(products).contains(ItemFlags::LAST));
        assert!(tree.flags(products).contains(ItemFlags::PARENT));
        assert!(!tree.flags(home).contains(ItemFlags::PARENT));

        assert!(tree.flags(widgets).contains(ItemFlags::FIRST));
        assert!(tree.flags(widgets).contains(ItemFlags::SECOND_TO_LAST));
        assert!(tree.flags(gadgets).contains(ItemFlags::LAST));
    }

    #[test]
    fn refresh_positions_is_recomputed_not_accumulated() {
        let (mut tree, _, products, _, gadgets) = sample();
        tree.refresh_positions();
        // Growing a sibling group moves the positional flags.
        let extra = tree.add_item(MenuId::Sub(products), None);
        tree.refresh_positions();

        assert!(!tree.flags(gadgets).contains(ItemFlags::LAST));
        assert!(tree.flags(gadgets).contains(ItemFlags::SECOND_TO_LAST));
        assert!(tree.flags(extra).contains(ItemFlags::LAST));
    }

    #[test]
    fn refresh_positions_preserves_open() {
        let (mut tree, _, products, _, _) = sample();
        tree.insert_flags(products, ItemFlags::OPEN);
        tree.refresh_positions();
        assert!(tree.flags(products).contains(ItemFlags::OPEN));
    }

    #[test]
    fn open_items_reflects_flags() {
        let (mut tree, _, products, widgets, _) = sample();
        assert!(tree.open_items().is_empty());
        tree.insert_flags(products, ItemFlags::OPEN);
        tree.insert_flags(widgets, ItemFlags::OPEN);
        assert_eq!(tree.open_items(), vec![products, widgets]);
        tree.remove_flags(products, ItemFlags::OPEN);
        assert_eq!(tree.open_items(), vec![widgets]);
    }
}

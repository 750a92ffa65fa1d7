// Copyright 2025 the Rmenu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Structural decoration: the setup pass over the bound subtree.

use alloc::vec::Vec;

use rmenu_caps::MotionFlags;
use rmenu_config::Config;

use crate::classes;
use crate::effect::{Display, Effect, Target};
use crate::tree::MenuTree;
use crate::types::{ItemFlags, ItemId, MenuId};

/// Recompute derived item flags and emit the structural classes and
/// accessibility attributes for the whole subtree.
///
/// This is the effect-producing half of `setup`. It announces that scripting
/// has taken over (removing the no-script markers), attaches the structural
/// classes, assigns anchor tabindexes sequentially in document order starting
/// at [`Config::tabindex_start`], and mirrors the derived positional flags
/// into their classes. Positional classes are emitted as add/remove pairs, so
/// re-running over changed markup repairs stale state and re-running over
/// unchanged markup produces an identical effect list.
pub fn decorate(tree: &mut MenuTree, config: &Config, flags: MotionFlags) -> Vec<Effect> {
    tree.refresh_positions();

    let mut out = Vec::with_capacity(8 + tree.item_count() * 6);

    out.push(Effect::AddClass(Target::Wrapper, classes::WRAPPER));

    if config.toggle_button_styling {
        out.push(Effect::AddClass(Target::Toggle, classes::TOGGLE_BUTTON));
    } else {
        out.push(Effect::RemoveClass(Target::Toggle, classes::TOGGLE_BUTTON));
    }
    out.push(Effect::RemoveClass(Target::Toggle, classes::NO_SCRIPT));
    out.push(Effect::SetTabIndex(Target::Toggle, 0));

    for menu in tree.menus() {
        let target = Target::Menu(menu);
        out.push(Effect::AddClass(target, classes::MENU));
        out.push(Effect::SetAriaHidden(target, false));
        out.push(Effect::SetDisplay(target, Display::Hidden));
        if flags.animate {
            out.push(Effect::AddClass(target, classes::ANIMATE));
            if flags.accelerate {
                out.push(Effect::AddClass(target, classes::ACCELERATE));
            }
        }
    }
    out.push(Effect::AddClass(Target::Menu(MenuId::Top), classes::TOP_MENU));

    out.push(Effect::RemoveClass(Target::Container, classes::NO_SCRIPT));
    out.push(Effect::AddClass(Target::Container, classes::CONTAINER));

    let mut next_tabindex = config.tabindex_start;
    for item in document_order(tree) {
        let target = Target::Item(item);
        out.push(Effect::AddClass(target, classes::MENU_ITEM));
        out.push(Effect::SetTabIndex(Target::Anchor(item), next_tabindex));
        next_tabindex += 1;

        let item_flags = tree.flags(item);
        positional(&mut out, target, item_flags, ItemFlags::FIRST, classes::ITEM_FIRST);
        positional(&mut out, target, item_flags, ItemFlags::LAST, classes::ITEM_LAST);
        positional(
            &mut out,
            target,
            item_flags,
            ItemFlags::SECOND_TO_LAST,
            classes::ITEM_SECOND_TO_LAST,
        );
        positional(
            &mut out,
            target,
            item_flags,
            ItemFlags::PARENT,
            classes::PARENT_ITEM,
        );
    }

    out
}

fn positional(
    out: &mut Vec<Effect>,
    target: Target,
    item_flags: ItemFlags,
    flag: ItemFlags,
    class: &'static str,
) {
    if item_flags.contains(flag) {
        out.push(Effect::AddClass(target, class));
    } else {
        out.push(Effect::RemoveClass(target, class));
    }
}

/// Items in depth-first document order, starting from the top-level menu.
fn document_order(tree: &MenuTree) -> Vec<ItemId> {
    let mut out = Vec::with_capacity(tree.item_count());
    let mut stack: Vec<ItemId> = tree.children(MenuId::Top).iter().rev().copied().collect();
    while let Some(item) = stack.pop() {
        out.push(item);
        if let Some(submenu) = tree.submenu(item) {
            stack.extend(tree.children(submenu).iter().rev().copied());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmenu_config::Options;

    fn sample() -> (MenuTree, ItemId, ItemId, ItemId) {
        let mut tree = MenuTree::new();
        let home = tree.add_item(MenuId::Top, Some("/"));
        let products = tree.add_item(MenuId::Top, Some("/products"));
        let widgets = tree.add_item(MenuId::Sub(products), Some("/products/widgets"));
        (tree, home, products, widgets)
    }

    fn default_config() -> Config {
        Config::resolve(Options::default())
    }

    #[test]
    fn decoration_is_idempotent() {
        let (mut tree, _, _, _) = sample();
        let config = default_config();
        let flags = MotionFlags {
            animate: true,
            accelerate: false,
        };

        let first = decorate(&mut tree, &config, flags);
        let second = decorate(&mut tree, &config, flags);
        assert_eq!(first, second);
    }

    #[test]
    fn structural_classes_are_emitted() {
        let (mut tree, _, products, _) = sample();
        let config = default_config();
        let effects = decorate(&mut tree, &config, MotionFlags::default());

        assert!(effects.contains(&Effect::AddClass(Target::Wrapper, classes::WRAPPER)));
        assert!(effects.contains(&Effect::AddClass(Target::Container, classes::CONTAINER)));
        assert!(effects.contains(&Effect::RemoveClass(Target::Container, classes::NO_SCRIPT)));
        assert!(effects.contains(&Effect::AddClass(Target::Menu(MenuId::Top), classes::TOP_MENU)));
        assert!(effects.contains(&Effect::AddClass(
            Target::Menu(MenuId::Sub(products)),
            classes::MENU
        )));
        assert!(effects.contains(&Effect::AddClass(Target::Item(products), classes::PARENT_ITEM)));
    }

    #[test]
    fn animate_classes_follow_motion_flags() {
        let (mut tree, _, _, _) = sample();
        let config = default_config();

        let effects = decorate(
            &mut tree,
            &config,
            MotionFlags {
                animate: true,
                accelerate: true,
            },
        );
        assert!(effects.contains(&Effect::AddClass(Target::Menu(MenuId::Top), classes::ANIMATE)));
        assert!(effects.contains(&Effect::AddClass(
            Target::Menu(MenuId::Top),
            classes::ACCELERATE
        )));

        let effects = decorate(&mut tree, &config, MotionFlags::default());
        assert!(!effects.contains(&Effect::AddClass(Target::Menu(MenuId::Top), classes::ANIMATE)));
    }

    #[test]
    fn toggle_button_styling_is_configurable() {
        let (mut tree, _, _, _) = sample();
        let styled = decorate(&mut tree, &default_config(), MotionFlags::default());
        assert!(styled.contains(&Effect::AddClass(Target::Toggle, classes::TOGGLE_BUTTON)));

        let config = Config::resolve(Options {
            toggle_button_styling: Some(false),
            ..Options::default()
        });
        let unstyled = decorate(&mut tree, &config, MotionFlags::default());
        assert!(unstyled.contains(&Effect::RemoveClass(Target::Toggle, classes::TOGGLE_BUTTON)));
    }

    #[test]
    fn anchor_tabindexes_are_sequential_in_document_order() {
        let (mut tree, home, products, widgets) = sample();
        let config = Config::resolve(Options {
            tabindex_start: Some(5),
            ..Options::default()
        });
        let effects = decorate(&mut tree, &config, MotionFlags::default());

        // Document order: home, products, widgets (submenu follows its owner).
        assert!(effects.contains(&Effect::SetTabIndex(Target::Anchor(home), 5)));
        assert!(effects.contains(&Effect::SetTabIndex(Target::Anchor(products), 6)));
        assert!(effects.contains(&Effect::SetTabIndex(Target::Anchor(widgets), 7)));
    }

    #[test]
    fn positional_classes_are_paired_with_removals() {
        let (mut tree, home, products, widgets) = sample();
        let effects = decorate(&mut tree, &default_config(), MotionFlags::default());

        assert!(effects.contains(&Effect::AddClass(Target::Item(home), classes::ITEM_FIRST)));
        assert!(effects.contains(&Effect::AddClass(Target::Item(products), classes::ITEM_LAST)));
        assert!(effects.contains(&Effect::AddClass(
            Target::Item(home),
            classes::ITEM_SECOND_TO_LAST
        )));
        // The lone submenu item is both first and last, and not second-to-last.
        assert!(effects.contains(&Effect::AddClass(Target::Item(widgets), classes::ITEM_FIRST)));
        assert!(effects.contains(&Effect::AddClass(Target::Item(widgets), classes::ITEM_LAST)));
        assert!(effects.contains(&Effect::RemoveClass(
            Target::Item(widgets),
            classes::ITEM_SECOND_TO_LAST
        )));
        // Leaf items get their stale parent marker cleared, not added.
        assert!(effects.contains(&Effect::RemoveClass(Target::Item(home), classes::PARENT_ITEM)));
    }
}

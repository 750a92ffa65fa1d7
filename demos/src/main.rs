// Copyright 2025 the Rmenu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted walkthrough of a responsive menu instance.
//!
//! Stands in for a browser shell: a tiny fake DOM applies every [`Effect`]
//! the widget emits and prints what happened, while the script plays a
//! typical session — setup on a wide viewport, hover navigation, a resize
//! below the breakpoint, and the toggle-driven accordion.

use std::collections::{BTreeSet, HashMap};

use kurbo::Rect;

use rmenu_caps::Capabilities;
use rmenu_config::Options;
use rmenu_layout::ViewportProbe;
use rmenu_motion::HeightProbe;
use rmenu_tree::{Effect, ItemId, MaxHeight, MenuId, MenuTree, Target};
use rmenu_widget::{INTERACTION_DELAY_MS, RESIZE_DELAY_MS, Widget, scroll_target};

/// Just enough DOM to watch the widget work: class sets and a few styles
/// per element, keyed by effect target.
struct FakeDom {
    width: f64,
    classes: HashMap<Target, BTreeSet<&'static str>>,
    max_heights: HashMap<Target, MaxHeight>,
    hover_tracking: bool,
}

impl FakeDom {
    fn new(width: f64) -> Self {
        Self {
            width,
            classes: HashMap::new(),
            max_heights: HashMap::new(),
            hover_tracking: false,
        }
    }

    fn apply_all(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            self.apply(effect);
        }
    }

    fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::AddClass(target, class) => {
                self.classes.entry(target).or_default().insert(class);
            }
            Effect::RemoveClass(target, class) => {
                self.classes.entry(target).or_default().remove(class);
            }
            Effect::SetMaxHeight(target, value) => {
                self.max_heights.insert(target, value);
            }
            Effect::SetHoverTracking(enabled) => self.hover_tracking = enabled,
            Effect::Navigate(href) => println!("  -> navigate to {href}"),
            Effect::ScrollIntoView(item) => {
                // Pretend the item sits below the fold.
                let viewport = Rect::new(0.0, 0.0, self.width, 768.0);
                let bounds = Rect::new(0.0, 900.0, 200.0, 940.0);
                if let Some(top) = scroll_target(bounds, viewport) {
                    println!("  -> scroll item {item:?} into view (top {top})");
                }
            }
            Effect::FocusAnchor(item) => println!("  -> focus anchor of {item:?}"),
            Effect::BlurAnchor(item) => println!("  -> blur anchor of {item:?}"),
            Effect::SetTabIndex(..)
            | Effect::SetAriaHidden(..)
            | Effect::SetDisplay(..)
            | Effect::SetOverflow(..)
            | Effect::SetTransition(..)
            | Effect::ClearTransition(..)
            | Effect::ClearInlineStyles(..) => {}
        }
    }

    fn describe(&self, label: &str, target: Target) {
        let classes = self
            .classes
            .get(&target)
            .map(|set| {
                set.iter()
                    .copied()
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .unwrap_or_default();
        match self.max_heights.get(&target) {
            Some(height) => println!("  {label}: [{classes}] max-height {height:?}"),
            None => println!("  {label}: [{classes}]"),
        }
    }

    fn snapshot(&self, products: ItemId) {
        self.describe("wrapper  ", Target::Wrapper);
        self.describe("toggle   ", Target::Toggle);
        self.describe("top menu ", Target::Menu(MenuId::Top));
        self.describe("products ", Target::Item(products));
        println!("  hover tracking: {}", self.hover_tracking);
    }
}

impl ViewportProbe for FakeDom {
    fn width(&self) -> f64 {
        self.width
    }

    fn matches_min_width(&self, _breakpoint: &str) -> Option<bool> {
        // This shell has no media-query engine; the numeric fallback decides.
        None
    }
}

impl HeightProbe for FakeDom {
    fn natural_height(&mut self, menu: MenuId) -> f64 {
        match menu {
            MenuId::Top => 320.0,
            MenuId::Sub(_) => 120.0,
        }
    }
}

fn build_nav() -> (MenuTree, ItemId, ItemId) {
    let mut tree = MenuTree::new();
    tree.add_item(MenuId::Top, Some("/"));
    let products = tree.add_item(MenuId::Top, Some("/products"));
    tree.add_item(MenuId::Sub(products), Some("/products/widgets"));
    tree.add_item(MenuId::Sub(products), Some("/products/gadgets"));
    let contact = tree.add_item(MenuId::Top, Some("/contact"));
    (tree, products, contact)
}

fn main() {
    let (tree, products, contact) = build_nav();
    let caps = Capabilities {
        conditional_queries: false,
        transitions: true,
        transforms_3d: false,
    };
    let mut dom = FakeDom::new(1024.0);
    let mut widget = Widget::new(Options::default(), caps, tree);
    let mut now: u64 = 0;

    println!("setup at 1024px:");
    let effects = widget.setup(now, &mut dom);
    dom.apply_all(effects);
    now += INTERACTION_DELAY_MS;
    let effects = widget.poll(now, &mut dom);
    dom.apply_all(effects);
    dom.snapshot(products);

    println!("\nhover over the products item:");
    let effects = widget.on_item_hover(products);
    dom.apply_all(effects);
    widget.on_item_focus(now, products);
    now += INTERACTION_DELAY_MS;
    let effects = widget.poll(now, &mut dom);
    dom.apply_all(effects);
    let effects = widget.on_transition_end(MenuId::Sub(products), "max-height");
    dom.apply_all(effects);
    dom.snapshot(products);

    println!("\nresize below the breakpoint:");
    dom.width = 480.0;
    widget.on_resize(now, 480.0);
    now += RESIZE_DELAY_MS;
    let effects = widget.poll(now, &mut dom);
    dom.apply_all(effects);
    now += INTERACTION_DELAY_MS;
    let effects = widget.poll(now, &mut dom);
    dom.apply_all(effects);
    dom.snapshot(products);

    println!("\npress the toggle control:");
    widget.on_toggle_press(now);
    now += INTERACTION_DELAY_MS;
    let effects = widget.poll(now, &mut dom);
    dom.apply_all(effects);
    let effects = widget.on_transition_end(MenuId::Top, "max-height");
    dom.apply_all(effects);
    dom.snapshot(products);

    println!("\ntap the contact link:");
    let activation = widget.on_item_activate(now, contact, true);
    dom.apply_all(activation.effects);
    println!("  prevent default: {}", activation.prevent_default);
}

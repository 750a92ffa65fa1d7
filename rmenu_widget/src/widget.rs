// Copyright 2025 the Rmenu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-container widget instance and its interaction state machine.

use alloc::boxed::Box;
use alloc::string::ToString;
use alloc::vec::Vec;

use log::debug;

use rmenu_caps::{Capabilities, MotionFlags};
use rmenu_config::{Config, Options};
use rmenu_layout::{LayoutMode, ToggleState, ViewportProbe, decide_mode, plan_transition};
use rmenu_motion::{
    Completion, Easing, HeightProbe, MenuHeights, Motion, Phase, StepMotion, TransitionMotion,
    finish_contract, finish_expand,
};
use rmenu_tree::{Display, Effect, ItemFlags, ItemId, MenuId, MenuTree, Target, classes, decorate};

use crate::schedule::DelaySlot;

/// Quiet time after the last qualifying resize before layout re-adjusts.
pub const RESIZE_DELAY_MS: u64 = 500;

/// Debounce applied to every interaction event.
pub const INTERACTION_DELAY_MS: u64 = 100;

/// Everything the widget needs from its environment: viewport answers for
/// layout decisions and rendered-height measurement for the accordion.
pub trait Host: ViewportProbe + HeightProbe {}

impl<T: ViewportProbe + HeightProbe + ?Sized> Host for T {}

/// How the host should treat the event that produced a decision.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Disposition {
    /// Suppress the event's default behavior.
    pub prevent_default: bool,
    /// Stop the event from propagating further.
    pub stop_propagation: bool,
}

/// Outcome of an item activation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Activation {
    /// Host mutations to apply, in order.
    pub effects: Vec<Effect>,
    /// Suppress the activation's default behavior (e.g. following a link).
    pub prevent_default: bool,
}

/// The delayed action occupying the instance's single slot.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Action {
    Adjust,
    ToggleMenu,
    FocusItem(ItemId),
    LeaveItem(ItemId),
    BlurMenu,
}

/// A responsive menu widget instance, one per bound container.
///
/// The widget is a pure state machine: hosts feed it events (with a
/// millisecond timestamp where timing matters) and apply the returned
/// [`Effect`] lists to their DOM. It never sleeps and never mutates the
/// host directly. Delayed work goes through one [`DelaySlot`]; hosts drive
/// it by calling [`Widget::poll`] as time passes, and [`Widget::tick`] on
/// their frame cadence while a step animation is in flight.
pub struct Widget {
    config: Config,
    caps: Capabilities,
    flags: MotionFlags,
    tree: MenuTree,
    mode: Option<LayoutMode>,
    toggle: ToggleState,
    focused: Option<ItemId>,
    slot: DelaySlot<Action>,
    heights: MenuHeights,
    motion: Box<dyn Motion>,
    touch_moved: bool,
    window_width: f64,
}

impl core::fmt::Debug for Widget {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Widget")
            .field("flags", &self.flags)
            .field("mode", &self.mode)
            .field("toggle", &self.toggle)
            .field("focused", &self.focused)
            .field("touch_moved", &self.touch_moved)
            .field("window_width", &self.window_width)
            .finish_non_exhaustive()
    }
}

/// Pick the expand/contract strategy once, from the resolved flags.
///
/// The downgraded animate flag selects the transition strategy; everything
/// else runs the stepped interpolation, whether animation was configured
/// off or transitions are unsupported.
fn select_motion(config: &Config, flags: MotionFlags) -> Box<dyn Motion> {
    if flags.animate {
        Box::new(TransitionMotion::new(
            config.transition_ms,
            config.transition_easing.clone(),
        ))
    } else {
        Box::new(StepMotion::new(
            config.transition_ms,
            Easing::from_id(&config.step_easing),
        ))
    }
}

impl Widget {
    /// Create an instance over an already-bound menu tree.
    ///
    /// `caps` is the page-wide detection result; binding markup to a
    /// [`MenuTree`] is the host's job. Nothing is emitted until
    /// [`Widget::setup`] runs.
    pub fn new(options: Options, caps: Capabilities, tree: MenuTree) -> Self {
        let config = Config::resolve(options);
        let flags = MotionFlags::resolve(config.animate, config.accelerate, caps);
        let motion = select_motion(&config, flags);
        Self {
            config,
            caps,
            flags,
            tree,
            mode: None,
            toggle: ToggleState::Hidden,
            focused: None,
            slot: DelaySlot::new(),
            heights: MenuHeights::new(),
            motion,
            touch_moved: false,
            window_width: 0.0,
        }
    }

    /// The resolved configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The downgraded animate/accelerate flags.
    pub fn motion_flags(&self) -> MotionFlags {
        self.flags
    }

    /// The bound menu tree.
    pub fn tree(&self) -> &MenuTree {
        &self.tree
    }

    /// Current layout mode; `None` before the first adjust.
    pub fn mode(&self) -> Option<LayoutMode> {
        self.mode
    }

    /// Current toggle control state.
    pub fn toggle_state(&self) -> ToggleState {
        self.toggle
    }

    /// The item holding focus, if any.
    pub fn focused(&self) -> Option<ItemId> {
        self.focused
    }

    /// Decorate the subtree and apply the initial layout.
    ///
    /// Re-invocable: decoration is idempotent, and when the layout mode
    /// already matches the viewport only the top menu's visibility is
    /// re-emitted (decoration hid it).
    pub fn setup(&mut self, now_ms: u64, host: &mut impl Host) -> Vec<Effect> {
        let before = self.mode;
        let mut out = decorate(&mut self.tree, &self.config, self.flags);
        self.window_width = host.width();
        out.extend(self.adjust(now_ms, host));
        if before.is_some() && self.mode == before {
            self.resync_visibility(&mut out);
        }
        if let Some(on_setup) = self.config.on_setup {
            on_setup();
        }
        out
    }

    /// Re-evaluate the layout mode against the current viewport.
    ///
    /// Always schedules the clean-slate menu blur; emits mode-transition
    /// effects only when the mode actually changes, re-measuring submenu
    /// heights afterwards.
    pub fn adjust(&mut self, now_ms: u64, host: &mut impl Host) -> Vec<Effect> {
        let mut out = Vec::new();

        // Layout changes always imply a clean slate.
        self.slot
            .schedule(now_ms, INTERACTION_DELAY_MS, Action::BlurMenu);

        let target = decide_mode(self.caps, &*host, &self.config.breakpoint, self.config.verbose);
        // Both strategies animate max-height, so heights are always measured.
        if let Some(plan) = plan_transition(&self.tree, self.mode, target, self.toggle, true) {
            if self.config.verbose {
                debug!("widget: layout {:?} -> {target:?}", self.mode);
            }
            for item in self.tree.open_items() {
                self.tree.remove_flags(item, ItemFlags::OPEN);
            }
            out.extend(plan.effects);
            self.mode = Some(target);
            self.toggle = plan.toggle;
            if plan.recalculate_heights {
                self.heights.recalculate(&self.tree, &mut *host, &mut out);
            }
        }
        out
    }

    /// The viewport was resized to `width` pixels.
    ///
    /// Height-only resizes are ignored; a width change schedules an adjust
    /// after [`RESIZE_DELAY_MS`] of quiet time.
    pub fn on_resize(&mut self, now_ms: u64, width: f64) {
        if width != self.window_width {
            self.window_width = width;
            self.slot.schedule(now_ms, RESIZE_DELAY_MS, Action::Adjust);
        }
    }

    /// The toggle control was pressed or received focus.
    pub fn on_toggle_press(&mut self, now_ms: u64) {
        self.slot
            .schedule(now_ms, INTERACTION_DELAY_MS, Action::ToggleMenu);
    }

    /// The toggle control was clicked.
    ///
    /// Clicks are suppressed outright; the control is press/focus driven so
    /// mouse, touch, and keyboard activation behave identically.
    pub fn on_toggle_click(&self) -> Disposition {
        Disposition {
            prevent_default: true,
            stop_propagation: true,
        }
    }

    /// The pointer entered an item (expanded layout only).
    ///
    /// Hover is unified with focus: the host moves keyboard focus to the
    /// item's anchor and the resulting focus event drives the rest.
    pub fn on_item_hover(&mut self, item: ItemId) -> Vec<Effect> {
        let mut out = Vec::new();
        if self.mode == Some(LayoutMode::Expanded) {
            out.push(Effect::FocusAnchor(item));
        }
        out
    }

    /// An item's anchor received focus.
    pub fn on_item_focus(&mut self, now_ms: u64, item: ItemId) {
        self.focused = Some(item);
        self.slot
            .schedule(now_ms, INTERACTION_DELAY_MS, Action::FocusItem(item));
    }

    /// The pointer left an item (expanded layout only).
    pub fn on_item_leave(&mut self, now_ms: u64, item: ItemId) {
        if self.mode == Some(LayoutMode::Expanded) {
            self.slot
                .schedule(now_ms, INTERACTION_DELAY_MS, Action::LeaveItem(item));
        }
    }

    /// Focus left the menu entirely.
    pub fn on_menu_blur(&mut self, now_ms: u64) {
        self.slot
            .schedule(now_ms, INTERACTION_DELAY_MS, Action::BlurMenu);
    }

    /// A touch moved across a menu item; the next activation is a scroll
    /// gesture, not a tap.
    pub fn on_touch_move(&mut self) {
        self.touch_moved = true;
    }

    /// An item was activated by click or touch-end.
    ///
    /// Navigation happens when the item is already open or has no submenu
    /// and no touch-scroll was latched. An unexpanded parent item suppresses
    /// default on non-touch activation so the first click opens instead of
    /// navigating; touch-end passes through, preserving
    /// tap-to-open-then-tap-to-follow. The latch is consumed either way.
    pub fn on_item_activate(&mut self, now_ms: u64, item: ItemId, touch: bool) -> Activation {
        let mut effects = Vec::new();
        let open_or_leaf = self.tree.flags(item).contains(ItemFlags::OPEN)
            || !self.tree.has_submenu(item);
        let touch_moved = core::mem::take(&mut self.touch_moved);

        let prevent_default = if touch_moved {
            true
        } else if open_or_leaf {
            if let Some(href) = self.tree.href(item) {
                effects.push(Effect::Navigate(href.to_string()));
            }
            self.slot
                .schedule(now_ms, INTERACTION_DELAY_MS, Action::BlurMenu);
            false
        } else {
            !touch
        };

        Activation {
            effects,
            prevent_default,
        }
    }

    /// The host observed a transition-end signal on a menu.
    pub fn on_transition_end(&mut self, menu: MenuId, property: &str) -> Vec<Effect> {
        let mut out = Vec::new();
        if let Some(completion) = self.motion.on_transition_end(menu, property) {
            self.finalize(completion, &mut out);
        }
        out
    }

    /// Advance stepped animations to `now_ms`.
    pub fn tick(&mut self, now_ms: u64) -> Vec<Effect> {
        let mut out = Vec::new();
        let completions = self.motion.tick(now_ms, &mut out);
        for completion in completions {
            self.finalize(completion, &mut out);
        }
        out
    }

    /// Fire the pending delayed action if its deadline has passed.
    pub fn poll(&mut self, now_ms: u64, host: &mut impl Host) -> Vec<Effect> {
        let mut out = Vec::new();
        if let Some(action) = self.slot.poll(now_ms) {
            match action {
                Action::Adjust => out.extend(self.adjust(now_ms, host)),
                Action::ToggleMenu => self.toggle_menu(now_ms, &mut out),
                Action::FocusItem(item) => self.focus_item(now_ms, item, &mut out),
                Action::LeaveItem(item) => self.leave_item(now_ms, item, &mut out),
                Action::BlurMenu => self.blur_menu(now_ms, &mut out),
            }
        }
        out
    }

    /// Settle a finished animation and bring the focused item into view.
    fn finalize(&mut self, completion: Completion, out: &mut Vec<Effect>) {
        match completion.phase {
            Phase::Expand => finish_expand(completion.menu, out),
            Phase::Contract => finish_contract(completion.menu, out),
        }
        if let Some(item) = self.focused {
            out.push(Effect::ScrollIntoView(item));
        }
    }

    /// Re-emit the top menu's visibility for the mode that already holds.
    ///
    /// Decoration hides the top menu, and an adjust that lands on the current
    /// mode plans nothing, so a repeated setup must restore what the mode and
    /// toggle state expect.
    fn resync_visibility(&self, out: &mut Vec<Effect>) {
        let top = Target::Menu(MenuId::Top);
        match self.mode {
            Some(LayoutMode::Expanded) => {
                out.push(Effect::RemoveClass(top, classes::HIDDEN));
                out.push(Effect::SetDisplay(top, Display::Shown));
                out.push(Effect::AddClass(top, classes::MENU_EXPANDED));
            }
            Some(LayoutMode::Contracted) => {
                out.push(Effect::SetDisplay(top, Display::Shown));
                if self.toggle == ToggleState::Active {
                    out.push(Effect::RemoveClass(top, classes::HIDDEN));
                    out.push(Effect::AddClass(top, classes::MENU_EXPANDED));
                } else {
                    out.push(Effect::AddClass(top, classes::HIDDEN));
                    out.push(Effect::RemoveClass(top, classes::MENU_EXPANDED));
                }
            }
            None => {}
        }
    }

    /// Start opening a menu; a menu with no measured height settles in place.
    fn expand_menu(&mut self, now_ms: u64, menu: MenuId, out: &mut Vec<Effect>) {
        let target = Target::Menu(menu);
        out.push(Effect::RemoveClass(target, classes::HIDDEN));
        out.push(Effect::SetDisplay(target, Display::Shown));
        if let Some(height) = self.heights.get(menu) {
            self.motion.expand(menu, height, now_ms, out);
        } else {
            self.finalize(
                Completion {
                    menu,
                    phase: Phase::Expand,
                },
                out,
            );
        }
    }

    /// Start closing a menu; a menu with no measured height settles in place.
    fn contract_menu(&mut self, now_ms: u64, menu: MenuId, out: &mut Vec<Effect>) {
        if let Some(height) = self.heights.get(menu) {
            self.motion.contract(menu, height, now_ms, out);
        } else {
            self.finalize(
                Completion {
                    menu,
                    phase: Phase::Contract,
                },
                out,
            );
        }
    }

    /// Open an item's submenu, marking the item open.
    fn expand_submenu(&mut self, now_ms: u64, item: ItemId, out: &mut Vec<Effect>) {
        self.tree.insert_flags(item, ItemFlags::OPEN);
        out.push(Effect::AddClass(Target::Item(item), classes::ITEM_OPEN));
        if let Some(menu) = self.tree.submenu(item) {
            self.expand_menu(now_ms, menu, out);
        }
    }

    /// Close an item's submenu and every open submenu nested inside it.
    fn contract_submenu(&mut self, now_ms: u64, item: ItemId, out: &mut Vec<Effect>) {
        if let Some(menu) = self.tree.submenu(item) {
            for nested in self.tree.submenus_within(menu) {
                if let MenuId::Sub(owner) = nested
                    && self.tree.flags(owner).contains(ItemFlags::OPEN)
                {
                    self.tree.remove_flags(owner, ItemFlags::OPEN);
                    out.push(Effect::RemoveClass(Target::Item(owner), classes::ITEM_OPEN));
                    self.contract_menu(now_ms, nested, out);
                }
            }
            self.tree.remove_flags(item, ItemFlags::OPEN);
            out.push(Effect::RemoveClass(Target::Item(item), classes::ITEM_OPEN));
            self.contract_menu(now_ms, menu, out);
        } else {
            self.tree.remove_flags(item, ItemFlags::OPEN);
            out.push(Effect::RemoveClass(Target::Item(item), classes::ITEM_OPEN));
        }
    }

    /// Toggle overall menu visibility (contracted layout).
    fn toggle_menu(&mut self, now_ms: u64, out: &mut Vec<Effect>) {
        match self.toggle {
            ToggleState::Hidden => {}
            ToggleState::Active => {
                self.toggle = ToggleState::Inactive;
                out.push(Effect::RemoveClass(Target::Toggle, classes::TOGGLE_ACTIVE));
                for item in self.tree.open_items() {
                    if self.tree.flags(item).contains(ItemFlags::OPEN) {
                        self.contract_submenu(now_ms, item, out);
                    }
                }
                self.contract_menu(now_ms, MenuId::Top, out);
            }
            ToggleState::Inactive => {
                self.toggle = ToggleState::Active;
                out.push(Effect::AddClass(Target::Toggle, classes::TOGGLE_ACTIVE));
                self.expand_menu(now_ms, MenuId::Top, out);
            }
        }
    }

    /// The debounced half of item focus.
    fn focus_item(&mut self, now_ms: u64, item: ItemId, out: &mut Vec<Effect>) {
        if self.mode == Some(LayoutMode::Contracted) && self.toggle == ToggleState::Inactive {
            self.toggle_menu(now_ms, out);
        }

        // At most one open submenu per sibling group.
        let siblings: Vec<ItemId> = self.tree.children(self.tree.menu_of(item)).to_vec();
        for sibling in siblings {
            if sibling != item && self.tree.flags(sibling).contains(ItemFlags::OPEN) {
                self.contract_submenu(now_ms, sibling, out);
            }
        }

        if self.tree.has_submenu(item) && !self.tree.flags(item).contains(ItemFlags::OPEN) {
            self.expand_submenu(now_ms, item, out);
        }
    }

    /// The debounced half of item leave: hand focus back to the nearest
    /// still-open ancestor, or blur the menu when there is none.
    fn leave_item(&mut self, now_ms: u64, item: ItemId, out: &mut Vec<Effect>) {
        let mut current = Some(item);
        while let Some(it) = current {
            if self.tree.flags(it).contains(ItemFlags::OPEN) {
                out.push(Effect::FocusAnchor(it));
                return;
            }
            current = self.tree.parent_of(it);
        }
        self.blur_menu(now_ms, out);
    }

    /// The debounced half of menu blur: drop focus and contract the whole
    /// open tree.
    fn blur_menu(&mut self, now_ms: u64, out: &mut Vec<Effect>) {
        if let Some(item) = self.focused.take() {
            out.push(Effect::BlurAnchor(item));
        }
        for item in self.tree.open_items() {
            if self.tree.flags(item).contains(ItemFlags::OPEN) {
                self.contract_submenu(now_ms, item, out);
            }
        }
    }
}

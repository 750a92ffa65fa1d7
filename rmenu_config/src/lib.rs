// Copyright 2025 the Rmenu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rmenu Config: option resolution for the responsive menu core.
//!
//! Callers hand the widget a sparse [`Options`] value; [`Config::resolve`]
//! merges it over the built-in defaults into a complete, immutable [`Config`].
//! The merge is shallow and never fails — malformed values surface later as
//! layout or motion misbehavior, not as resolver errors.
//!
//! The one deliberately strict surface is [`Breakpoint::parse_px`]. The
//! original widget compared viewport widths against `parseInt` of whatever
//! string the caller supplied, which silently produced not-a-number
//! comparisons for malformed input. Here the pixel fallback path demands a
//! finite, non-negative decimal number with a literal `px` suffix and reports
//! everything else as a [`BreakpointError`]; callers fall back to
//! [`DEFAULT_BREAKPOINT_PX`] on error. Richer length expressions are only
//! meaningful to hosts that can evaluate conditional width queries natively.
//!
//! ```
//! use rmenu_config::{Breakpoint, Config, Options};
//!
//! let config = Config::resolve(Options {
//!     breakpoint: Some("48em".into()),
//!     transition_ms: Some(250),
//!     ..Options::default()
//! });
//! assert_eq!(config.transition_ms, 250);
//! assert!(config.animate);
//!
//! // "48em" is fine for a media-query host but not for the pixel fallback.
//! assert!(Breakpoint::parse_px(&config.breakpoint).is_err());
//! assert_eq!(Breakpoint::parse_px("769px"), Ok(769.0));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::string::ToString;

use thiserror::Error;

/// Default breakpoint string; should match the media query in the stylesheet.
pub const DEFAULT_BREAKPOINT: &str = "769px";

/// Pixel value of [`DEFAULT_BREAKPOINT`], used when a configured breakpoint
/// fails the strict parse on the numeric fallback path.
pub const DEFAULT_BREAKPOINT_PX: f64 = 769.0;

/// Caller-supplied options. Every field is optional; absent fields fall back
/// to the defaults documented on [`Config`].
#[derive(Clone, Debug, Default)]
pub struct Options {
    /// Minimum viewport width for the expanded layout.
    pub breakpoint: Option<String>,
    /// Expand/contract duration in milliseconds.
    pub transition_ms: Option<u32>,
    /// Easing identifier for the step-based motion strategy.
    pub step_easing: Option<String>,
    /// Easing identifier passed through to transition declarations.
    pub transition_easing: Option<String>,
    /// Style the toggle control as a button.
    pub toggle_button_styling: Option<bool>,
    /// Selector for the toggle control.
    pub toggle_selector: Option<String>,
    /// Selector for menu lists.
    pub menu_selector: Option<String>,
    /// Selector for menu items.
    pub item_selector: Option<String>,
    /// Animate expand/contract (may be downgraded by capability detection).
    pub animate: Option<bool>,
    /// Force 3-D acceleration (may be downgraded by capability detection).
    pub accelerate: Option<bool>,
    /// Invoked once setup has completed.
    pub on_setup: Option<fn()>,
    /// First tabindex value assigned to menu anchors.
    pub tabindex_start: Option<i32>,
    /// Emit diagnostic output through `log`.
    pub verbose: Option<bool>,
}

/// Fully resolved configuration. Immutable after [`Config::resolve`].
#[derive(Clone, Debug)]
pub struct Config {
    /// Minimum viewport width for the expanded layout. Default `"769px"`.
    ///
    /// Must be a pixel length unless the host supports conditional width
    /// queries, in which case any expression the host understands is legal.
    pub breakpoint: String,
    /// Expand/contract duration in milliseconds. Default `400`.
    pub transition_ms: u32,
    /// Easing identifier for the step-based strategy. Default `"swing"`.
    pub step_easing: String,
    /// Easing identifier for transition declarations. Default `"ease"`.
    pub transition_easing: String,
    /// Style the toggle control as a button. Default `true`.
    pub toggle_button_styling: bool,
    /// Selector for the toggle control. Default `".rm-toggle"`.
    pub toggle_selector: String,
    /// Selector for menu lists. Default `"ul"`.
    pub menu_selector: String,
    /// Selector for menu items. Default `"li"`.
    pub item_selector: String,
    /// Animate expand/contract. Default `true`.
    pub animate: bool,
    /// Force 3-D acceleration. Default `false`.
    pub accelerate: bool,
    /// Setup-completion callback. Default none.
    pub on_setup: Option<fn()>,
    /// First tabindex value assigned to menu anchors. Default `1`.
    pub tabindex_start: i32,
    /// Emit diagnostic output through `log`. Default `false`.
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            breakpoint: DEFAULT_BREAKPOINT.to_string(),
            transition_ms: 400,
            step_easing: "swing".to_string(),
            transition_easing: "ease".to_string(),
            toggle_button_styling: true,
            toggle_selector: ".rm-toggle".to_string(),
            menu_selector: "ul".to_string(),
            item_selector: "li".to_string(),
            animate: true,
            accelerate: false,
            on_setup: None,
            tabindex_start: 1,
            verbose: false,
        }
    }
}

impl Config {
    /// Merge caller options over the defaults.
    pub fn resolve(options: Options) -> Self {
        let defaults = Self::default();
        Self {
            breakpoint: options.breakpoint.unwrap_or(defaults.breakpoint),
            transition_ms: options.transition_ms.unwrap_or(defaults.transition_ms),
            step_easing: options.step_easing.unwrap_or(defaults.step_easing),
            transition_easing: options
                .transition_easing
                .unwrap_or(defaults.transition_easing),
            toggle_button_styling: options
                .toggle_button_styling
                .unwrap_or(defaults.toggle_button_styling),
            toggle_selector: options.toggle_selector.unwrap_or(defaults.toggle_selector),
            menu_selector: options.menu_selector.unwrap_or(defaults.menu_selector),
            item_selector: options.item_selector.unwrap_or(defaults.item_selector),
            animate: options.animate.unwrap_or(defaults.animate),
            accelerate: options.accelerate.unwrap_or(defaults.accelerate),
            on_setup: options.on_setup.or(defaults.on_setup),
            tabindex_start: options.tabindex_start.unwrap_or(defaults.tabindex_start),
            verbose: options.verbose.unwrap_or(defaults.verbose),
        }
    }
}

/// Why a breakpoint string failed the strict pixel parse.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum BreakpointError {
    /// The string was empty or all whitespace.
    #[error("breakpoint value is empty")]
    Empty,
    /// The string did not end in `px`.
    #[error("breakpoint value must carry a `px` suffix")]
    MissingPxSuffix,
    /// The part before `px` was not a finite, non-negative decimal number.
    #[error("breakpoint value is not a valid pixel length")]
    InvalidNumber,
}

/// Strict pixel-length parsing for the numeric viewport-width fallback.
#[derive(Clone, Copy, Debug)]
pub struct Breakpoint;

impl Breakpoint {
    /// Parse a pixel length such as `"769px"`.
    ///
    /// Accepts optional surrounding ASCII whitespace, then a finite,
    /// non-negative decimal number immediately followed by `px`. Anything
    /// else is an error; there is no lenient prefix parsing.
    pub fn parse_px(value: &str) -> Result<f64, BreakpointError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(BreakpointError::Empty);
        }
        let Some(number) = trimmed.strip_suffix("px") else {
            return Err(BreakpointError::MissingPxSuffix);
        };
        let parsed: f64 = number
            .parse()
            .map_err(|_| BreakpointError::InvalidNumber)?;
        if !parsed.is_finite() || parsed < 0.0 {
            return Err(BreakpointError::InvalidNumber);
        }
        Ok(parsed)
    }

    /// Parse a pixel length, falling back to [`DEFAULT_BREAKPOINT_PX`].
    ///
    /// Convenience for the layout engine, which degrades gracefully rather
    /// than propagating configuration errors.
    pub fn parse_px_or_default(value: &str) -> f64 {
        Self::parse_px(value).unwrap_or(DEFAULT_BREAKPOINT_PX)
    }
}

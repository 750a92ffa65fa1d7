// Copyright 2025 the Rmenu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport scroll alignment for the focused item.

use kurbo::Rect;

/// Scroll offset that brings an off-screen item back into view.
///
/// `item` and `viewport` are document-space rectangles. When the item is not
/// fully inside the viewport vertically, returns the scroll position that
/// aligns the item's top edge with the viewport top; when it is already
/// fully visible, returns `None` and the host should not scroll.
///
/// Hosts call this while resolving a scroll-into-view effect after an
/// expand or contract settles, with the real measured geometry.
pub fn scroll_target(item: Rect, viewport: Rect) -> Option<f64> {
    if viewport.y0 <= item.y0 && item.y1 <= viewport.y1 {
        None
    } else {
        Some(item.y0)
    }
}

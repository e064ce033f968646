// Copyright 2026 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Waymark Nav: the navigation-consumer layer over `waymark_linkmap`.
//!
//! `waymark_linkmap` is a pure function from a geometry snapshot to a
//! directional link map. This crate supplies the pieces a host wires around
//! it to turn key presses into focus moves:
//!
//! - [`KeyMap`]: key-code → [`Direction`](waymark_linkmap::Direction)
//!   bindings, with the classic DOM arrow-key table as a preset.
//! - [`ElementTraits`]: host-declared flags for the focused element that
//!   suppress directional interception (free-text inputs keep their arrow
//!   keys; so do widgets that consume arrows themselves).
//! - [`MapCache`]: explicit, timestamped reuse of built maps. Positions
//!   change as the user scrolls, so a map is only trusted for a bounded
//!   time (5 seconds by default) and is rebuilt wholesale when stale.
//! - [`NavDriver`]: composes the above; one call per key press yields a
//!   [`NavResponse`] the host acts on.
//! - [`reveal`]: the scroll delta that brings the newly focused element
//!   into the viewport.
//!
//! Time never comes from a clock inside this crate: hosts pass `u64`
//! millisecond timestamps into every time-sensitive call, which keeps the
//! whole layer deterministic and trivially testable.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use waymark_linkmap::LinkMap;
//! use waymark_nav::{ElementTraits, KeyMap, NavDriver, NavResponse};
//!
//! let rects = [
//!     ('a', Rect::new(0.0, 0.0, 50.0, 50.0)),
//!     ('b', Rect::new(200.0, 0.0, 250.0, 50.0)),
//! ];
//! let mut driver = NavDriver::new(KeyMap::dom_arrows());
//!
//! // Right arrow (DOM key code 39) moves focus from `a` to `b`.
//! let response = driver
//!     .handle_key(&39, &'a', ElementTraits::empty(), 0, || {
//!         LinkMap::from_rects(rects, Size::new(400.0, 400.0))
//!     })
//!     .unwrap();
//! assert_eq!(response, NavResponse::Moved('b'));
//!
//! // Arrow keys inside a text field are never intercepted.
//! let response = driver
//!     .handle_key(&39, &'a', ElementTraits::TEXT_ENTRY, 100, || {
//!         unreachable!("fresh map; no rebuild")
//!     })
//!     .unwrap();
//! assert_eq!(response, NavResponse::PassThrough);
//! ```
//!
//! The host owns every side effect: moving input focus, scrolling by the
//! reveal delta, and deciding *when* to call in (there is no event loop
//! here). This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod cache;
mod driver;
mod keymap;
mod scroll;

pub use cache::{DEFAULT_MAX_AGE_MS, MapCache};
pub use driver::{ElementTraits, NavDriver, NavResponse};
pub use keymap::KeyMap;
pub use scroll::reveal;

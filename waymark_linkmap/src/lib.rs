// Copyright 2026 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Waymark Link Map: directional nearest-neighbor maps for spatial focus navigation.
//!
//! Given a snapshot of on-screen, positioned, rectangular UI elements, this crate
//! computes, for every element, at most one "best" neighbor in each of the four
//! cardinal directions. A navigation consumer can then translate "user pressed
//! *right* while element E has focus" into "focus E's right link", jumping between
//! elements by screen geometry rather than document order. This is the building
//! block for remote-control, keyboard-arrow, and game-pad D-pad input schemes
//! where tab order is insufficient.
//!
//! ## Model
//!
//! - [`LinkMap::build`] snapshots a candidate sequence through a host-provided
//!   [`GeometrySource`] and resolves all links in one synchronous pass.
//! - Each [`FocusEntry`] records its rectangle, its center, and four
//!   [`Links`]: keys of other entries in the same map, or `None`.
//! - [`LinkMap::entry_for`] and [`LinkMap::neighbor`] are the query surface.
//!
//! A map is immutable once returned. Element positions are expected to change
//! between builds (scrolling, relayout), so there is no incremental patching and
//! no score memoization: a caller that wants reuse caches the whole map and
//! rebuilds it wholesale when stale (see `waymark_nav` for such a cache).
//!
//! ## Matching
//!
//! For each entry and direction, every other entry is partitioned by a strict
//! dead-zone test (centers must differ by more than 2 coordinate units along the
//! relevant axis, on the correct side), then scored by a weighted sum of
//! horizontal and vertical proximity normalized against the overall content
//! extent. Cross-axis alignment is weighted five times the travel-axis proximity,
//! so vertical moves strongly prefer staying in the same column and horizontal
//! moves the same row. Only a candidate scoring strictly above zero can become a
//! link; a very poor link is worse than none.
//!
//! Links are directed and independent: `a → b` rightward does not imply
//! `b → a` leftward.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use waymark_linkmap::{Direction, LinkMap};
//!
//! // Two buttons side by side on a 400x400 page.
//! let map = LinkMap::from_rects(
//!     [
//!         ('a', Rect::new(0.0, 0.0, 50.0, 50.0)),
//!         ('b', Rect::new(200.0, 0.0, 250.0, 50.0)),
//!     ],
//!     Size::new(400.0, 400.0),
//! )
//! .unwrap();
//!
//! assert_eq!(map.neighbor(&'a', Direction::Right), Some('b'));
//! assert_eq!(map.neighbor(&'b', Direction::Left), Some('a'));
//! assert_eq!(map.neighbor(&'a', Direction::Up), None);
//! ```
//!
//! The map is generic over the element key `K`, so callers can use any small,
//! copyable, hashable handle (a slotmap key, a DOM node id, an application id).
//! Geometry is expressed in terms of [`kurbo::Rect`] in a single shared
//! coordinate space (for example document/page coordinates); the extent passed
//! to the builder is the size of that space and is used to normalize scores.
//!
//! ## Complexity and errors
//!
//! Matching is O(n²) over the candidate count per build, where n is the
//! number of interactive elements on one screen, expected to be tens to low
//! hundreds.
//! Builds are pure and idempotent; a geometry read failing mid-build aborts the
//! whole build (no partial map is ever returned). See [`BuildError`].
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for
//!   floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod map;
mod score;
mod types;

pub use map::{BuildError, GeometrySource, LinkMap};
pub use types::{Direction, FocusEntry, Links};

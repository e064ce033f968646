// Copyright 2026 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Directional navigation driver: key handling over a cached link map.

use core::hash::Hash;

use waymark_linkmap::{BuildError, LinkMap};

use crate::cache::MapCache;
use crate::keymap::KeyMap;

bitflags::bitflags! {
    /// Host-declared traits of the currently focused element.
    ///
    /// Declared per element by the host, which knows what kind of control
    /// has focus; the link map itself treats elements as opaque.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ElementTraits: u8 {
        /// A free-text input control. Directional keys edit text and are
        /// never intercepted for navigation.
        const TEXT_ENTRY = 1 << 0;
        /// A widget that consumes arrow keys itself (a select box, a
        /// slider). Same pass-through behavior as [`Self::TEXT_ENTRY`].
        const OWNS_ARROW_KEYS = 1 << 1;
    }
}

/// Outcome of one directional key press.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NavResponse<K> {
    /// Focus should move to this element. The host moves input focus and
    /// scrolls it into view (see [`reveal`](crate::reveal)).
    Moved(K),
    /// The key was directional but the focused element has no link that
    /// way; the press was consumed with nowhere to go.
    NoTarget,
    /// Not ours: an unbound key, a text-entry focus, or an element the
    /// current map does not know (a stale snapshot). The host lets the
    /// event continue to its default handling.
    PassThrough,
}

/// Drives directional focus moves from key input.
///
/// Composes a [`KeyMap`] with a [`MapCache`]. The host supplies, per key
/// press, the focused element, its [`ElementTraits`], the current time in
/// milliseconds, and a closure that rebuilds the link map from current
/// geometry; the closure runs only when the cached map is missing or stale.
#[derive(Clone, Debug)]
pub struct NavDriver<K, B> {
    keys: KeyMap<B>,
    cache: MapCache<K>,
}

impl<K: Copy + Eq + Hash, B: PartialEq> NavDriver<K, B> {
    /// A driver over `keys` with the default cache policy.
    pub fn new(keys: KeyMap<B>) -> Self {
        Self {
            keys,
            cache: MapCache::new(),
        }
    }

    /// A driver over `keys` with an explicitly configured cache.
    pub fn with_cache(keys: KeyMap<B>, cache: MapCache<K>) -> Self {
        Self { keys, cache }
    }

    /// The key bindings.
    pub fn keys(&self) -> &KeyMap<B> {
        &self.keys
    }

    /// Mutable access to the key bindings.
    pub fn keys_mut(&mut self) -> &mut KeyMap<B> {
        &mut self.keys
    }

    /// The map cache.
    pub fn cache(&self) -> &MapCache<K> {
        &self.cache
    }

    /// Mutable access to the map cache (e.g. to invalidate on resize).
    pub fn cache_mut(&mut self) -> &mut MapCache<K> {
        &mut self.cache
    }

    /// Handle one key press at `now_ms` while `focused` holds input focus.
    ///
    /// A build failure from `build` is returned as-is; the driver's state
    /// is unchanged and the caller retries on a later press once the scene
    /// stabilizes.
    pub fn handle_key<F>(
        &mut self,
        key: &B,
        focused: &K,
        traits: ElementTraits,
        now_ms: u64,
        build: F,
    ) -> Result<NavResponse<K>, BuildError>
    where
        F: FnOnce() -> Result<LinkMap<K>, BuildError>,
    {
        let Some(direction) = self.keys.direction_for(key) else {
            return Ok(NavResponse::PassThrough);
        };
        if traits.intersects(ElementTraits::TEXT_ENTRY | ElementTraits::OWNS_ARROW_KEYS) {
            return Ok(NavResponse::PassThrough);
        }

        let map = self.cache.get_or_build(now_ms, build)?;
        let response = match map.entry_for(focused) {
            None => NavResponse::PassThrough,
            Some(entry) => match entry.link(direction) {
                Some(target) => NavResponse::Moved(target),
                None => NavResponse::NoTarget,
            },
        };
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Rect, Size};
    use waymark_linkmap::Direction;

    use super::*;

    const EXTENT: Size = Size::new(400.0, 400.0);

    /// A 1x2 row: `a` on the left, `b` on the right.
    fn row() -> Result<LinkMap<char>, BuildError> {
        LinkMap::from_rects(
            [
                ('a', Rect::new(0.0, 0.0, 50.0, 50.0)),
                ('b', Rect::new(200.0, 0.0, 250.0, 50.0)),
            ],
            EXTENT,
        )
    }

    fn driver() -> NavDriver<char, u32> {
        NavDriver::new(KeyMap::dom_arrows())
    }

    #[test]
    fn arrow_moves_along_link() {
        let mut driver = driver();
        let response = driver
            .handle_key(&39, &'a', ElementTraits::empty(), 0, row)
            .unwrap();
        assert_eq!(response, NavResponse::Moved('b'));

        let response = driver
            .handle_key(&37, &'b', ElementTraits::empty(), 10, row)
            .unwrap();
        assert_eq!(response, NavResponse::Moved('a'));
    }

    #[test]
    fn missing_link_is_no_target() {
        let mut driver = driver();
        let response = driver
            .handle_key(&38, &'a', ElementTraits::empty(), 0, row)
            .unwrap();
        assert_eq!(response, NavResponse::NoTarget);
    }

    #[test]
    fn unbound_key_passes_through() {
        let mut driver = driver();
        // Tab (9) is not a directional key; the map is never built.
        let response = driver
            .handle_key(&9, &'a', ElementTraits::empty(), 0, || {
                unreachable!("unbound keys must not trigger a build")
            })
            .unwrap();
        assert_eq!(response, NavResponse::PassThrough);
    }

    #[test]
    fn text_entry_focus_passes_through() {
        let mut driver = driver();
        for traits in [
            ElementTraits::TEXT_ENTRY,
            ElementTraits::OWNS_ARROW_KEYS,
            ElementTraits::TEXT_ENTRY | ElementTraits::OWNS_ARROW_KEYS,
        ] {
            let response = driver
                .handle_key(&39, &'a', traits, 0, || {
                    unreachable!("suppressed keys must not trigger a build")
                })
                .unwrap();
            assert_eq!(response, NavResponse::PassThrough);
        }
    }

    #[test]
    fn stale_focus_passes_through() {
        let mut driver = driver();
        // `z` is not in the map: the consumer's idea of focus is newer than
        // the snapshot. Expected, not an error.
        let response = driver
            .handle_key(&39, &'z', ElementTraits::empty(), 0, row)
            .unwrap();
        assert_eq!(response, NavResponse::PassThrough);
    }

    #[test]
    fn build_failure_surfaces_and_recovers() {
        let mut driver = driver();
        let err = driver
            .handle_key(&39, &'a', ElementTraits::empty(), 0, || {
                Err(BuildError::MissingGeometry { index: 1 })
            })
            .unwrap_err();
        assert_eq!(err, BuildError::MissingGeometry { index: 1 });

        // The next press retries the build and succeeds.
        let response = driver
            .handle_key(&39, &'a', ElementTraits::empty(), 1, row)
            .unwrap();
        assert_eq!(response, NavResponse::Moved('b'));
    }

    #[test]
    fn fresh_map_is_not_rebuilt_between_presses() {
        let mut driver = driver();
        driver
            .handle_key(&39, &'a', ElementTraits::empty(), 0, row)
            .unwrap();
        let response = driver
            .handle_key(&40, &'a', ElementTraits::empty(), 4_000, || {
                unreachable!("map is fresh for 5 seconds")
            })
            .unwrap();
        // The row has nothing below `a`.
        assert_eq!(response, NavResponse::NoTarget);
    }

    #[test]
    fn rebound_keys_change_behavior() {
        let mut driver = driver();
        driver.keys_mut().bind(72, Direction::Left); // vi-style `h`
        let response = driver
            .handle_key(&72, &'b', ElementTraits::empty(), 0, row)
            .unwrap();
        assert_eq!(response, NavResponse::Moved('a'));
    }
}

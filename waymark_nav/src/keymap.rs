// Copyright 2026 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Key-to-direction binding tables.

use smallvec::SmallVec;
use waymark_linkmap::Direction;

/// An ordered table of key → direction bindings.
///
/// Generic over the host's key code type `B` (a DOM `keyCode`, a terminal
/// key enum, a game-pad button id). A navigation scheme has a handful of
/// bindings, so storage is inline.
#[derive(Clone, Debug)]
pub struct KeyMap<B> {
    bindings: SmallVec<[(B, Direction); 4]>,
}

impl<B: PartialEq> KeyMap<B> {
    /// An empty key map.
    pub fn new() -> Self {
        Self {
            bindings: SmallVec::new(),
        }
    }

    /// Bind `key` to `direction`, replacing any existing binding for `key`.
    pub fn bind(&mut self, key: B, direction: Direction) {
        if let Some(slot) = self.bindings.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = direction;
        } else {
            self.bindings.push((key, direction));
        }
    }

    /// The direction bound to `key`, if any.
    pub fn direction_for(&self, key: &B) -> Option<Direction> {
        self.bindings
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, d)| *d)
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether no keys are bound.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl KeyMap<u32> {
    /// The DOM arrow-key codes: 37 → left, 38 → up, 39 → right, 40 → down.
    pub fn dom_arrows() -> Self {
        let mut map = Self::new();
        map.bind(37, Direction::Left);
        map.bind(38, Direction::Up);
        map.bind(39, Direction::Right);
        map.bind(40, Direction::Down);
        map
    }
}

impl<B: PartialEq> Default for KeyMap<B> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dom_arrows_match_key_codes() {
        let map = KeyMap::dom_arrows();
        assert_eq!(map.len(), 4);
        assert_eq!(map.direction_for(&37), Some(Direction::Left));
        assert_eq!(map.direction_for(&38), Some(Direction::Up));
        assert_eq!(map.direction_for(&39), Some(Direction::Right));
        assert_eq!(map.direction_for(&40), Some(Direction::Down));
        // Tab is not a directional key.
        assert_eq!(map.direction_for(&9), None);
    }

    #[test]
    fn bind_replaces_existing_binding() {
        let mut map = KeyMap::new();
        map.bind('h', Direction::Left);
        map.bind('h', Direction::Right);
        assert_eq!(map.len(), 1);
        assert_eq!(map.direction_for(&'h'), Some(Direction::Right));
    }

    #[test]
    fn empty_map_binds_nothing() {
        let map = KeyMap::<u32>::new();
        assert!(map.is_empty());
        assert_eq!(map.direction_for(&39), None);
    }
}

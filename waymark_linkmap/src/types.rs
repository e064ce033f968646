// Copyright 2026 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the link map: directions, links, and per-element entries.

use kurbo::{Point, Rect};

/// A cardinal navigation direction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward smaller y.
    Up,
    /// Toward larger y.
    Down,
    /// Toward smaller x.
    Left,
    /// Toward larger x.
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// The opposite direction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// The four directional links of a [`FocusEntry`].
///
/// Each field is either `None` or the key of another entry in the *same*
/// [`LinkMap`](crate::LinkMap) build; resolve it with
/// [`LinkMap::entry_for`](crate::LinkMap::entry_for). Links are directed and
/// independent: `a.links.right == Some(b)` does not imply the map links `b`
/// back to `a`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Links<K> {
    /// Best neighbor above, if any.
    pub up: Option<K>,
    /// Best neighbor below, if any.
    pub down: Option<K>,
    /// Best neighbor to the left, if any.
    pub left: Option<K>,
    /// Best neighbor to the right, if any.
    pub right: Option<K>,
}

impl<K> Links<K> {
    pub(crate) const NONE: Self = Self {
        up: None,
        down: None,
        left: None,
        right: None,
    };
}

impl<K: Copy> Links<K> {
    /// The link for `direction`, if any.
    pub fn get(&self, direction: Direction) -> Option<K> {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }
}

impl<K> Default for Links<K> {
    fn default() -> Self {
        Self::NONE
    }
}

/// One candidate element within a [`LinkMap`](crate::LinkMap).
///
/// Bundles the externally-owned element key with the geometry captured at
/// build time and the resolved directional links. The key is opaque to this
/// crate; it is only compared, hashed, and handed back.
#[derive(Clone, Debug, PartialEq)]
pub struct FocusEntry<K> {
    /// Identity of the underlying UI element.
    pub key: K,
    /// Screen rectangle in the map's shared coordinate space.
    pub rect: Rect,
    /// Center of `rect`, captured once at collection time.
    pub center: Point,
    /// Resolved directional links.
    pub links: Links<K>,
}

impl<K> FocusEntry<K> {
    pub(crate) fn new(key: K, rect: Rect) -> Self {
        Self {
            key,
            rect,
            center: rect.center(),
            links: Links::NONE,
        }
    }
}

impl<K: Copy> FocusEntry<K> {
    /// The key of this entry's neighbor in `direction`, if any.
    pub fn link(&self, direction: Direction) -> Option<K> {
        self.links.get(direction)
    }
}

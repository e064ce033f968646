// Copyright 2026 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Link map construction and queries.

use alloc::vec::Vec;
use core::fmt;
use core::hash::Hash;

use hashbrown::HashMap;
use kurbo::{Rect, Size};

use crate::score;
use crate::types::{Direction, FocusEntry, Links};

/// Resolves an element key to its current screen rectangle.
///
/// Implemented by the host over its layout engine or scene. Must be a pure,
/// cheap read at call time; the map never caches geometry across builds.
/// Returning `None` means the element is gone from the scene and aborts the
/// build with [`BuildError::MissingGeometry`], since a map built against
/// inconsistent geometry would be unsafe to navigate.
pub trait GeometrySource<K> {
    /// The current rectangle of `key`, in the shared coordinate space.
    fn rect_of(&self, key: &K) -> Option<Rect>;
}

/// Errors from [`LinkMap`] construction.
///
/// Builds are pure and idempotent, so there is nothing to retry inside the
/// library: a caller seeing [`BuildError::MissingGeometry`] simply rebuilds
/// once the underlying scene stabilizes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BuildError {
    /// The normalization extent was not finite and strictly positive in
    /// both axes.
    InvalidExtent,
    /// The geometry source returned no rectangle for a candidate.
    MissingGeometry {
        /// Position of the candidate in the input sequence.
        index: usize,
    },
    /// A candidate repeated the key of an earlier candidate.
    DuplicateCandidate {
        /// Position of the repeated candidate in the input sequence.
        index: usize,
    },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidExtent => {
                write!(f, "extent must be finite and strictly positive")
            }
            Self::MissingGeometry { index } => {
                write!(f, "no geometry for candidate at index {index}")
            }
            Self::DuplicateCandidate { index } => {
                write!(f, "duplicate candidate key at index {index}")
            }
        }
    }
}

impl core::error::Error for BuildError {}

/// A complete directional link map over one snapshot of candidate elements.
///
/// Built fresh per invocation and immutable once returned: any geometry
/// change requires a full rebuild. Entries keep the candidate discovery
/// order; the order carries no meaning beyond the documented tie-break.
///
/// The map owns an explicit key → entry index, so nothing is ever attached
/// to the host's elements and the map's lifetime is independent of the
/// scene that produced it.
#[derive(Clone, Debug)]
pub struct LinkMap<K> {
    entries: Vec<FocusEntry<K>>,
    index: HashMap<K, usize>,
    extent: Size,
}

impl<K: Copy + Eq + Hash> LinkMap<K> {
    /// Build a map by resolving every candidate's rectangle through
    /// `geometry`.
    ///
    /// `candidates` is the exhaustive candidate set, already filtered for
    /// interactivity and visibility by the caller; nothing is skipped
    /// silently here. `extent` is the overall content size used to
    /// normalize scores. An empty candidate sequence yields an empty map.
    ///
    /// Entry collection fully completes before any matching happens, and a
    /// failure leaves no partial map behind.
    pub fn build<G>(
        candidates: impl IntoIterator<Item = K>,
        geometry: &G,
        extent: Size,
    ) -> Result<Self, BuildError>
    where
        G: GeometrySource<K>,
    {
        let mut map = Self::empty(extent)?;
        for (i, key) in candidates.into_iter().enumerate() {
            let rect = geometry
                .rect_of(&key)
                .ok_or(BuildError::MissingGeometry { index: i })?;
            map.push(i, key, rect)?;
        }
        map.link();
        Ok(map)
    }

    /// Build a map from candidates whose rectangles are already known.
    ///
    /// Same semantics as [`LinkMap::build`] with geometry resolution
    /// already done by the caller.
    pub fn from_rects(
        candidates: impl IntoIterator<Item = (K, Rect)>,
        extent: Size,
    ) -> Result<Self, BuildError> {
        let mut map = Self::empty(extent)?;
        for (i, (key, rect)) in candidates.into_iter().enumerate() {
            map.push(i, key, rect)?;
        }
        map.link();
        Ok(map)
    }

    fn empty(extent: Size) -> Result<Self, BuildError> {
        let valid = extent.width.is_finite()
            && extent.height.is_finite()
            && extent.width > 0.0
            && extent.height > 0.0;
        if !valid {
            return Err(BuildError::InvalidExtent);
        }
        Ok(Self {
            entries: Vec::new(),
            index: HashMap::new(),
            extent,
        })
    }

    fn push(&mut self, i: usize, key: K, rect: Rect) -> Result<(), BuildError> {
        debug_assert!(
            rect.x0.is_finite() && rect.y0.is_finite() && rect.x1.is_finite() && rect.y1.is_finite(),
            "candidate rectangles must be finite"
        );
        if self.index.insert(key, self.entries.len()).is_some() {
            return Err(BuildError::DuplicateCandidate { index: i });
        }
        self.entries.push(FocusEntry::new(key, rect));
        Ok(())
    }

    /// Resolve all four links of every entry. Runs once, after collection.
    fn link(&mut self) {
        for i in 0..self.entries.len() {
            let links = Links {
                up: score::best_link(i, Direction::Up, &self.entries, self.extent),
                down: score::best_link(i, Direction::Down, &self.entries, self.extent),
                left: score::best_link(i, Direction::Left, &self.entries, self.extent),
                right: score::best_link(i, Direction::Right, &self.entries, self.extent),
            };
            self.entries[i].links = links;
        }
    }

    /// The entry for `key`, or `None` when `key` was not a candidate of
    /// this build.
    ///
    /// A miss is expected, not exceptional: consumers routinely hold a map
    /// that is stale relative to the current scene.
    pub fn entry_for(&self, key: &K) -> Option<&FocusEntry<K>> {
        self.index.get(key).map(|&i| &self.entries[i])
    }

    /// The key of `key`'s best neighbor in `direction`, if any.
    pub fn neighbor(&self, key: &K, direction: Direction) -> Option<K> {
        self.entry_for(key)?.link(direction)
    }
}

impl<K> LinkMap<K> {
    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in candidate discovery order.
    pub fn entries(&self) -> impl Iterator<Item = &FocusEntry<K>> {
        self.entries.iter()
    }

    /// The content extent this map's scores were normalized against.
    pub fn extent(&self) -> Size {
        self.extent
    }
}

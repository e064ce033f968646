// Copyright 2026 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timestamped reuse of built link maps.

use waymark_linkmap::{BuildError, LinkMap};

/// Default maximum age of a cached map, in milliseconds.
pub const DEFAULT_MAX_AGE_MS: u64 = 5_000;

/// An explicit, injectable cache for [`LinkMap`] builds.
///
/// Element positions change between builds (scrolling, relayout), so a map
/// is only trusted for a bounded time. The cache never reads a clock:
/// callers pass the current time in milliseconds to every time-sensitive
/// call, from whatever monotonic source the host has.
///
/// ```rust
/// use kurbo::{Rect, Size};
/// use waymark_linkmap::LinkMap;
/// use waymark_nav::MapCache;
///
/// let mut cache: MapCache<u32> = MapCache::new();
/// let build = || {
///     LinkMap::from_rects(
///         [(1, Rect::new(0.0, 0.0, 50.0, 50.0))],
///         Size::new(400.0, 400.0),
///     )
/// };
///
/// // First call builds; a second call within 5 seconds reuses.
/// cache.get_or_build(1_000, build).unwrap();
/// assert!(cache.is_fresh(4_000));
/// // Past the age limit the map is stale and the next call rebuilds.
/// assert!(!cache.is_fresh(7_000));
/// ```
#[derive(Clone, Debug)]
pub struct MapCache<K> {
    cached: Option<Cached<K>>,
    /// Maximum age before a cached map is considered stale, in milliseconds.
    pub max_age_ms: u64,
}

#[derive(Clone, Debug)]
struct Cached<K> {
    map: LinkMap<K>,
    built_at_ms: u64,
}

impl<K> MapCache<K> {
    /// An empty cache with the default 5-second age limit.
    pub fn new() -> Self {
        Self::with_max_age(DEFAULT_MAX_AGE_MS)
    }

    /// An empty cache with an explicit age limit in milliseconds.
    pub fn with_max_age(max_age_ms: u64) -> Self {
        Self {
            cached: None,
            max_age_ms,
        }
    }

    /// Whether a cached map exists and is still fresh at `now_ms`.
    pub fn is_fresh(&self, now_ms: u64) -> bool {
        self.cached
            .as_ref()
            .is_some_and(|c| now_ms.saturating_sub(c.built_at_ms) <= self.max_age_ms)
    }

    /// The cached map regardless of freshness, if any.
    pub fn map(&self) -> Option<&LinkMap<K>> {
        self.cached.as_ref().map(|c| &c.map)
    }

    /// Drop the cached map so the next [`MapCache::get_or_build`] rebuilds.
    ///
    /// Hosts call this on events that invalidate geometry wholesale, such
    /// as a window resize.
    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    /// The cached map if fresh at `now_ms`, otherwise the result of `build`.
    ///
    /// On a failed build the previous (stale) map is retained untouched and
    /// the error is returned; a later call simply retries. Builds are
    /// idempotent, so there is no retry logic here.
    pub fn get_or_build<F>(&mut self, now_ms: u64, build: F) -> Result<&LinkMap<K>, BuildError>
    where
        F: FnOnce() -> Result<LinkMap<K>, BuildError>,
    {
        if !self.is_fresh(now_ms) {
            let map = build()?;
            self.cached = Some(Cached {
                map,
                built_at_ms: now_ms,
            });
        }
        let cached = self.cached.as_ref().expect("fresh or just built");
        Ok(&cached.map)
    }
}

impl<K> Default for MapCache<K> {
    fn default() -> Self {
        Self::new()
    }
}

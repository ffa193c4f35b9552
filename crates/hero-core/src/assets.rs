//! Readiness bookkeeping for the hero image pool.
//!
//! The browser loader reports each image as it settles; the tracker decides
//! when the pool is "ready enough" to create particles. Readiness fires once:
//! on reaching the success threshold, when every request has settled, or on
//! timeout. Loads that finish later still land in the pool but are only seen
//! by a later [`snapshot`](AssetTracker::snapshot).

use crate::constants::PROGRESS_LOG_EVERY;
use fnv::FnvHashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Readiness {
    Pending,
    /// The pool holds at least one decoded asset; create particles now.
    Ready,
    /// Nothing decoded; install the synthetic fallback set, then create particles.
    NeedsFallback,
    /// Readiness was already reported earlier.
    AlreadyReady,
}

pub struct AssetTracker<H> {
    requested: usize,
    threshold: usize,
    pool: Vec<H>,
    // request index -> decoded successfully
    settled: FnvHashMap<usize, bool>,
    failures: usize,
    ready: bool,
}

impl<H: Clone> AssetTracker<H> {
    pub fn new(requested: usize, threshold: usize) -> Self {
        Self {
            requested,
            threshold: threshold.clamp(1, requested.max(1)),
            pool: Vec::with_capacity(requested),
            settled: FnvHashMap::default(),
            failures: 0,
            ready: false,
        }
    }

    #[inline]
    pub fn requested(&self) -> usize {
        self.requested
    }

    #[inline]
    pub fn loaded(&self) -> usize {
        self.settled.values().filter(|ok| **ok).count()
    }

    #[inline]
    pub fn failed(&self) -> usize {
        self.failures
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    #[inline]
    pub fn all_settled(&self) -> bool {
        self.settled.len() >= self.requested
    }

    /// Number of handles currently in the pool, fallbacks included.
    #[inline]
    pub fn pool_len(&self) -> usize {
        self.pool.len()
    }

    pub fn on_loaded(&mut self, index: usize, handle: H) -> Readiness {
        if self.settled.contains_key(&index) {
            return self.poll_settled();
        }
        self.settled.insert(index, true);
        self.pool.push(handle);

        let loaded = self.loaded();
        if loaded % PROGRESS_LOG_EVERY == 0 || self.all_settled() {
            log::info!("[assets] loaded {}/{}", loaded, self.requested);
        }
        if self.all_settled() {
            log::info!(
                "[assets] all requests settled ({} ok, {} failed)",
                loaded,
                self.failures
            );
        }
        self.poll()
    }

    pub fn on_failed(&mut self, index: usize) -> Readiness {
        if self.settled.contains_key(&index) {
            return self.poll_settled();
        }
        self.settled.insert(index, false);
        self.failures += 1;
        log::warn!("[assets] request {} failed to decode", index);
        self.poll()
    }

    /// The loader's deadline elapsed: report whatever is there.
    pub fn on_timeout(&mut self) -> Readiness {
        if self.ready {
            return Readiness::AlreadyReady;
        }
        self.ready = true;
        if self.pool.is_empty() {
            log::info!("[assets] timeout with nothing decoded, using fallback set");
            Readiness::NeedsFallback
        } else {
            log::info!("[assets] timeout, starting with {} assets", self.pool.len());
            Readiness::Ready
        }
    }

    /// Re-evaluate readiness without a new event (e.g. right after wiring an
    /// empty request list).
    pub fn poll(&mut self) -> Readiness {
        if self.ready {
            return Readiness::AlreadyReady;
        }
        let loaded = self.loaded();
        if loaded >= self.threshold || (self.all_settled() && loaded > 0) {
            self.ready = true;
            Readiness::Ready
        } else if self.all_settled() {
            self.ready = true;
            Readiness::NeedsFallback
        } else {
            Readiness::Pending
        }
    }

    fn poll_settled(&self) -> Readiness {
        if self.ready {
            Readiness::AlreadyReady
        } else {
            Readiness::Pending
        }
    }

    pub fn install_fallback(&mut self, handles: impl IntoIterator<Item = H>) {
        let before = self.pool.len();
        self.pool.extend(handles);
        log::info!(
            "[assets] installed {} fallback assets",
            self.pool.len() - before
        );
    }

    /// Copy of the pool as it is right now.
    pub fn snapshot(&self) -> Vec<H> {
        self.pool.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ready_fires_once_at_threshold() {
        let mut t = AssetTracker::new(20, 10);
        for i in 0..9 {
            assert_eq!(t.on_loaded(i, i), Readiness::Pending);
        }
        assert_eq!(t.on_loaded(9, 9), Readiness::Ready);
        assert_eq!(t.on_loaded(10, 10), Readiness::AlreadyReady);
        assert_eq!(t.on_timeout(), Readiness::AlreadyReady);
        assert_eq!(t.snapshot().len(), 11);
    }

    #[test]
    fn failures_do_not_abort_the_batch() {
        let mut t = AssetTracker::new(4, 10);
        assert_eq!(t.on_failed(0), Readiness::Pending);
        assert_eq!(t.on_loaded(1, "a"), Readiness::Pending);
        assert_eq!(t.on_failed(2), Readiness::Pending);
        // last request settles: threshold is clamped to the request count,
        // but every request has settled with one success
        assert_eq!(t.on_loaded(3, "b"), Readiness::Ready);
        assert_eq!(t.failed(), 2);
        assert_eq!(t.loaded(), 2);
    }

    #[test]
    fn all_failed_asks_for_fallback_without_waiting() {
        let mut t: AssetTracker<u8> = AssetTracker::new(2, 10);
        assert_eq!(t.on_failed(0), Readiness::Pending);
        assert_eq!(t.on_failed(1), Readiness::NeedsFallback);
        t.install_fallback([1, 2, 3, 4]);
        assert_eq!(t.snapshot(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn duplicate_settles_are_ignored() {
        let mut t = AssetTracker::new(3, 2);
        t.on_loaded(0, 'x');
        assert_eq!(t.on_loaded(0, 'y'), Readiness::Pending);
        assert_eq!(t.on_failed(0), Readiness::Pending);
        assert_eq!(t.loaded(), 1);
        assert_eq!(t.failed(), 0);
        assert_eq!(t.snapshot(), vec!['x']);
    }

    #[test]
    fn empty_request_list_is_immediately_fallback() {
        let mut t: AssetTracker<u8> = AssetTracker::new(0, 10);
        assert_eq!(t.poll(), Readiness::NeedsFallback);
    }
}

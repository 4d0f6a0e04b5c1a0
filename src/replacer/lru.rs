//! LRU (Least-Recently-Used) page replacement engine.

use std::collections::HashMap;

use log::{debug, trace};

use crate::common::{Error, PageNumber, Result};
use crate::replacer::{AccessKind, StepOutcome};

/// Fill level of an engine, derived from `len()` vs `capacity()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// No page is resident.
    Empty,
    /// Some frames are free; a fault loads without evicting.
    PartiallyFull,
    /// Every frame is occupied; a fault must evict the LRU page.
    Full,
}

/// One slot of the recency list.
#[derive(Debug, Clone)]
struct Node {
    page: PageNumber,
    /// Neighbour towards the MRU end.
    prev: Option<usize>,
    /// Neighbour towards the LRU end.
    next: Option<usize>,
}

/// Simulates a fixed number of physical frames under the LRU policy.
///
/// # Architecture
/// ```text
/// ┌───────────────────────────────────────────────────────────┐
/// │                        LruEngine                          │
/// │  ┌────────────────┐    ┌──────────────────────────────┐   │
/// │  │     index      │    │     nodes: Vec<Node> (slab)  │   │
/// │  │ Page → slot    │───▶│  head (MRU) ⇄ ... ⇄ tail (LRU)│   │
/// │  └────────────────┘    └──────────────────────────────┘   │
/// └───────────────────────────────────────────────────────────┘
/// ```
///
/// The slab only grows while the engine is not full. Once full, every fault
/// reuses the tail slot for the incoming page, so `nodes.len() <= capacity`
/// always holds. Membership, promotion and eviction are all O(1).
///
/// # Example
/// ```
/// use pagesim::{LruEngine, PageNumber};
///
/// let mut engine = LruEngine::new(2).unwrap();
/// for n in [1, 2, 1, 3] {
///     engine.access(PageNumber::new(n));
/// }
/// assert_eq!(engine.fault_count(), 3);
/// assert_eq!(engine.resident(), vec![PageNumber::new(3), PageNumber::new(1)]);
/// ```
#[derive(Debug, Clone)]
pub struct LruEngine {
    /// Number of frames (immutable after construction).
    capacity: usize,

    /// Slot storage for the recency list.
    nodes: Vec<Node>,

    /// Maps resident pages to their slot.
    index: HashMap<PageNumber, usize>,

    /// Most recently used slot.
    head: Option<usize>,

    /// Least recently used slot.
    tail: Option<usize>,

    faults: u64,
    hits: u64,
}

impl LruEngine {
    /// Create an engine with `capacity` empty frames.
    ///
    /// # Errors
    /// - `Error::InvalidCapacity` if `capacity` is 0
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity(capacity));
        }

        Ok(Self {
            capacity,
            // Grown lazily in `load`; capacity may be far larger than any run.
            nodes: Vec::new(),
            index: HashMap::new(),
            head: None,
            tail: None,
            faults: 0,
            hits: 0,
        })
    }

    // ========================================================================
    // Public API: Access
    // ========================================================================

    /// Process one page reference.
    ///
    /// A resident page is promoted to the MRU end and counts as a hit. A
    /// missing page counts as a fault and is inserted at the MRU end, after
    /// evicting the LRU page if every frame is occupied.
    pub fn access(&mut self, page: PageNumber) -> StepOutcome {
        if let Some(&slot) = self.index.get(&page) {
            self.hits += 1;
            self.move_to_front(slot);
            trace!("hit on {}", page);

            return StepOutcome {
                page,
                kind: AccessKind::Hit,
                evicted: None,
                resident: self.resident(),
            };
        }

        self.faults += 1;
        let evicted = self.load(page);
        trace!("fault on {} (faults so far: {})", page, self.faults);

        StepOutcome {
            page,
            kind: AccessKind::Fault,
            evicted,
            resident: self.resident(),
        }
    }

    /// Empty every frame and zero the counters, keeping the capacity.
    pub fn reset(&mut self) {
        self.nodes.clear();
        self.index.clear();
        self.head = None;
        self.tail = None;
        self.faults = 0;
        self.hits = 0;
    }

    // ========================================================================
    // Public API: Read accessors
    // ========================================================================

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of resident pages.
    #[inline]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len() == self.capacity
    }

    pub fn state(&self) -> EngineState {
        if self.is_empty() {
            EngineState::Empty
        } else if self.is_full() {
            EngineState::Full
        } else {
            EngineState::PartiallyFull
        }
    }

    pub fn contains(&self, page: PageNumber) -> bool {
        self.index.contains_key(&page)
    }

    /// Number of accesses whose page was not resident at the time.
    #[inline]
    pub fn fault_count(&self) -> u64 {
        self.faults
    }

    #[inline]
    pub fn hit_count(&self) -> u64 {
        self.hits
    }

    #[inline]
    pub fn access_count(&self) -> u64 {
        self.hits + self.faults
    }

    /// The most recently used page.
    pub fn mru(&self) -> Option<PageNumber> {
        self.head.map(|slot| self.nodes[slot].page)
    }

    /// The least recently used page, i.e. the next eviction victim.
    pub fn lru(&self) -> Option<PageNumber> {
        self.tail.map(|slot| self.nodes[slot].page)
    }

    /// Iterate resident pages from MRU to LRU.
    pub fn iter(&self) -> impl Iterator<Item = PageNumber> + '_ {
        std::iter::successors(self.head, move |&slot| self.nodes[slot].next)
            .map(move |slot| self.nodes[slot].page)
    }

    /// Snapshot of resident pages ordered MRU -> LRU.
    pub fn resident(&self) -> Vec<PageNumber> {
        self.iter().collect()
    }

    // ========================================================================
    // Internal: recency list
    // ========================================================================

    /// Insert a non-resident page at the MRU end, returning the victim if
    /// a frame had to be reclaimed.
    fn load(&mut self, page: PageNumber) -> Option<PageNumber> {
        match self.tail {
            Some(slot) if self.nodes.len() >= self.capacity => {
                self.unlink(slot);
                let victim = std::mem::replace(&mut self.nodes[slot].page, page);
                self.index.remove(&victim);
                self.index.insert(page, slot);
                self.link_front(slot);
                debug!("evicted {} to load {}", victim, page);
                Some(victim)
            }
            _ => {
                let slot = self.nodes.len();
                self.nodes.push(Node {
                    page,
                    prev: None,
                    next: None,
                });
                self.index.insert(page, slot);
                self.link_front(slot);
                None
            }
        }
    }

    fn move_to_front(&mut self, slot: usize) {
        if self.head == Some(slot) {
            return;
        }
        self.unlink(slot);
        self.link_front(slot);
    }

    fn unlink(&mut self, slot: usize) {
        let prev = self.nodes[slot].prev.take();
        let next = self.nodes[slot].next.take();

        match prev {
            Some(p) => self.nodes[p].next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.nodes[n].prev = prev,
            None => self.tail = prev,
        }
    }

    fn link_front(&mut self, slot: usize) {
        self.nodes[slot].prev = None;
        self.nodes[slot].next = self.head;

        match self.head {
            Some(h) => self.nodes[h].prev = Some(slot),
            None => self.tail = Some(slot),
        }
        self.head = Some(slot);
    }
}

//! Cell identities and the tracing contract for garbage-collected platform objects.
//!
//! The collector itself lives in the engine adapter. Platform objects only need
//! to expose which other cells they reference, owning or not, so that the
//! collector's reachability and cycle analysis stays correct.

use log::trace;

/// A 64-bit identity for a collector-managed cell.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct CellId(pub u64);

impl CellId {
    /// Pack realm+counter into a single 64-bit id.
    #[inline]
    pub const fn pack(realm: u16, counter: u64) -> Self {
        let masked = counter & ((1u64 << 48) - 1);
        Self(((realm as u64) << 48) | masked)
    }

    /// Extract the realm the cell was allocated in.
    #[inline]
    pub const fn realm(self) -> u16 {
        (self.0 >> 48) as u16
    }

    /// Extract the per-realm counter.
    #[inline]
    pub const fn counter(self) -> u64 {
        self.0 & ((1u64 << 48) - 1)
    }
}

/// Mints cell ids for the objects created in one realm.
#[derive(Debug)]
pub struct Realm {
    id: u16,
    counter: u64,
}

impl Realm {
    #[inline]
    pub const fn new(id: u16) -> Self {
        Self { id, counter: 1 }
    }

    #[inline]
    pub const fn id(&self) -> u16 {
        self.id
    }

    /// Allocate a fresh cell id in this realm.
    #[inline]
    pub const fn allocate(&mut self) -> CellId {
        let cell = CellId::pack(self.id, self.counter);
        self.counter = self.counter.wrapping_add(1);
        cell
    }
}

impl Default for Realm {
    #[inline]
    fn default() -> Self {
        Self::new(1)
    }
}

/// Implemented by every object the collector walks.
pub trait Trace {
    /// Report every cell this object references to the visitor.
    fn visit_edges(&self, visitor: &mut Visitor);
}

/// Collects the edges reported by `Trace::visit_edges`.
#[derive(Debug, Default)]
pub struct Visitor {
    edges: Vec<CellId>,
}

impl Visitor {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn visit(&mut self, cell: CellId) {
        self.edges.push(cell);
    }

    /// Walk a single object and return the cells it reported.
    pub fn edges_of(object: &dyn Trace) -> Vec<CellId> {
        let mut visitor = Self::new();
        object.visit_edges(&mut visitor);
        trace!("visited {} edge(s)", visitor.edges.len());
        visitor.edges
    }
}

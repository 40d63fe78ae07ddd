//! Fixed-size capability sets
//!
//! A capability matrix is a bitset over an enumerated set of capability
//! identifiers. Bits are only ever set, never cleared, so merging is a plain OR:
//! commutative, associative and idempotent.

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

/// An enumerated capability identifier backed by a verb string
pub trait Capability: Copy + Eq + fmt::Debug + 'static {
    /// Every capability, in declaration order
    fn all() -> &'static [Self];

    /// Bit position, unique and below 64
    fn index(self) -> u32;

    /// Resource-qualified verb, `<family>:<action>`
    fn verb(self) -> &'static str;

    fn family(self) -> &'static str {
        self.verb().split_once(':').map_or("", |(family, _)| family)
    }

    fn action(self) -> &'static str {
        self.verb().split_once(':').map_or("", |(_, action)| action)
    }

    fn bit(self) -> u64 {
        1u64 << self.index()
    }
}

/// Bitset of capabilities of one kind
pub struct CapabilitySet<C: Capability> {
    bits: u64,
    _marker: PhantomData<fn() -> C>,
}

impl<C: Capability> CapabilitySet<C> {
    /// The all-false matrix
    pub const fn empty() -> Self {
        Self {
            bits: 0,
            _marker: PhantomData,
        }
    }

    /// Set a capability to true
    pub fn insert(&mut self, capability: C) {
        self.bits |= capability.bit();
    }

    pub fn contains(&self, capability: C) -> bool {
        self.bits & capability.bit() != 0
    }

    /// OR another set into this one
    pub fn merge(&mut self, other: &Self) {
        self.bits |= other.bits;
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Granted capabilities in declaration order
    pub fn iter(&self) -> impl Iterator<Item = C> + '_ {
        C::all().iter().copied().filter(|cap| self.contains(*cap))
    }

    /// Fixed-shape view: every family and action present, `true` where granted
    pub fn matrix(&self) -> BTreeMap<&'static str, BTreeMap<&'static str, bool>> {
        let mut matrix: BTreeMap<&'static str, BTreeMap<&'static str, bool>> = BTreeMap::new();
        for cap in C::all() {
            matrix
                .entry(cap.family())
                .or_default()
                .insert(cap.action(), self.contains(*cap));
        }
        matrix
    }
}

impl<C: Capability> Clone for CapabilitySet<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: Capability> Copy for CapabilitySet<C> {}

impl<C: Capability> Default for CapabilitySet<C> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<C: Capability> PartialEq for CapabilitySet<C> {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl<C: Capability> Eq for CapabilitySet<C> {}

impl<C: Capability> fmt::Debug for CapabilitySet<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(|cap| cap.verb())).finish()
    }
}

impl<C: Capability> FromIterator<C> for CapabilitySet<C> {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        let mut set = Self::empty();
        for cap in iter {
            set.insert(cap);
        }
        set
    }
}

impl<C: Capability> Extend<C> for CapabilitySet<C> {
    fn extend<I: IntoIterator<Item = C>>(&mut self, iter: I) {
        for cap in iter {
            self.insert(cap);
        }
    }
}

impl<C: Capability> Serialize for CapabilitySet<C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let matrix = self.matrix();
        let mut map = serializer.serialize_map(Some(matrix.len()))?;
        for (family, actions) in &matrix {
            map.serialize_entry(family, actions)?;
        }
        map.end()
    }
}

// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 SDL3-RS Contributors


//! Pin bookkeeping for native projections
//!
//! The borrow checker already keeps a borrowed value in place; what it cannot
//! see is a raw pointer held by native code. A [`PinStack`] records every
//! address handed across the boundary in acquisition order and releases them
//! in reverse, so a container is always released before its children.

use std::fmt;
use std::marker::PhantomData;

/// Identifies one entry in a [`PinStack`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PinId(usize);

#[derive(Debug)]
struct PinRecord {
    addr: usize,
    active: bool,
}

/// Ordered record of addresses lent to native code
#[derive(Default)]
pub struct PinStack {
    records: Vec<PinRecord>,
}

impl PinStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `value`'s address and return it.
    ///
    /// The caller keeps `value` in place (borrowed or on the heap) until the
    /// pin is released.
    pub fn pin<T: ?Sized>(&mut self, value: &T) -> (PinId, *const T) {
        let ptr = value as *const T;
        let id = PinId(self.records.len());
        self.records.push(PinRecord {
            addr: ptr.cast::<()>() as usize,
            active: true,
        });
        (id, ptr)
    }

    /// Release one pin. Returns `false`, and does nothing, when the pin is
    /// not active.
    ///
    /// Unpinning twice is a caller bug but stays a logged no-op rather than
    /// a debug assertion: a repeated unpin must leave the stack unchanged and
    /// never fail, and `unpin_all` relies on the same idempotence.
    pub fn unpin(&mut self, id: PinId) -> bool {
        match self.records.get_mut(id.0) {
            Some(record) if record.active => {
                record.active = false;
                true
            }
            _ => {
                log::warn!("unpin of inactive pin {:?} ignored", id);
                false
            }
        }
    }

    /// Whether `addr` is currently pinned
    pub fn is_pinned<T: ?Sized>(&self, addr: *const T) -> bool {
        let addr = addr.cast::<()>() as usize;
        self.records.iter().any(|r| r.active && r.addr == addr)
    }

    /// Number of active pins
    pub fn active(&self) -> usize {
        self.records.iter().filter(|r| r.active).count()
    }

    /// Addresses of active pins in acquisition order
    pub fn addresses(&self) -> Vec<usize> {
        self.records.iter().filter(|r| r.active).map(|r| r.addr).collect()
    }

    /// Release every active pin, newest first. Returns how many were released.
    pub fn unpin_all(&mut self) -> usize {
        let mut released = 0;
        for record in self.records.iter_mut().rev() {
            if record.active {
                record.active = false;
                released += 1;
            }
        }
        released
    }
}

impl Drop for PinStack {
    fn drop(&mut self) {
        self.unpin_all();
    }
}

impl fmt::Debug for PinStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PinStack")
            .field("active", &self.active())
            .field("total", &self.records.len())
            .finish()
    }
}

/// A native projection `R` together with the storage it points into
///
/// `S` owns the encoded strings and auxiliary arrays on the heap; the
/// lifetime ties the projection to any source data pointed to directly.
pub struct Pinned<'a, R, S> {
    // Released before the storage it describes
    pins: PinStack,
    raw: R,
    storage: Box<S>,
    _source: PhantomData<&'a ()>,
}

impl<'a, R, S> Pinned<'a, R, S> {
    pub(crate) fn new(pins: PinStack, raw: R, storage: Box<S>) -> Self {
        Self {
            pins,
            raw,
            storage,
            _source: PhantomData,
        }
    }

    /// The projection
    pub fn get(&self) -> &R {
        &self.raw
    }

    /// Pointer to pass to native code
    pub fn as_ptr(&self) -> *const R {
        &self.raw
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn pins(&self) -> &PinStack {
        &self.pins
    }
}

impl<R: fmt::Debug, S> fmt::Debug for Pinned<'_, R, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pinned")
            .field("raw", &self.raw)
            .field("pins", &self.pins)
            .finish_non_exhaustive()
    }
}

// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 SDL3-RS Contributors


//! Transient buffer pool
//!
//! Buffers are grouped into power-of-two size classes. Each class keeps a
//! small free list behind its own mutex; a rented buffer is exclusively
//! owned by its [`Pooled`] guard and goes back to the free list exactly once
//! when the guard drops, whichever way the scope is left.

use std::fmt;
use std::ops::{Deref, DerefMut};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

const MIN_CLASS_SHIFT: u32 = 4;
const MAX_CLASS_SHIFT: u32 = 20;
const CLASS_COUNT: usize = (MAX_CLASS_SHIFT - MIN_CLASS_SHIFT + 1) as usize;

/// Pool of reusable `Vec<T>` buffers
pub struct BufferPool<T> {
    classes: Vec<Mutex<Vec<Vec<T>>>>,
    max_retained: usize,
    outstanding: AtomicUsize,
}

impl<T> BufferPool<T> {
    /// Create a pool keeping up to `max_retained_per_size` idle buffers per class
    pub fn new(max_retained_per_size: usize) -> Self {
        Self {
            classes: (0..CLASS_COUNT).map(|_| Mutex::new(Vec::new())).collect(),
            max_retained: max_retained_per_size,
            outstanding: AtomicUsize::new(0),
        }
    }

    /// Smallest element count served from the pool
    pub const fn min_class() -> usize {
        1 << MIN_CLASS_SHIFT
    }

    /// Largest element count served from the pool; bigger requests are
    /// allocated and freed directly
    pub const fn max_class() -> usize {
        1 << MAX_CLASS_SHIFT
    }

    fn class_index(min: usize) -> Option<usize> {
        let size = min.max(Self::min_class()).checked_next_power_of_two()?;
        let shift = size.trailing_zeros();
        (shift <= MAX_CLASS_SHIFT).then(|| (shift - MIN_CLASS_SHIFT) as usize)
    }

    /// Rent an empty buffer with capacity for at least `min` elements
    pub fn rent(self: &Arc<Self>, min: usize) -> Pooled<T> {
        let class = Self::class_index(min);
        let buf = match class {
            Some(idx) => {
                let reused = {
                    let mut free = self.classes[idx].lock().unwrap_or_else(|e| e.into_inner());
                    free.pop()
                };
                reused.unwrap_or_else(|| Vec::with_capacity(1 << (idx as u32 + MIN_CLASS_SHIFT)))
            }
            None => Vec::with_capacity(min),
        };
        self.outstanding.fetch_add(1, Ordering::AcqRel);
        Pooled {
            buf,
            class,
            pool: Arc::clone(self),
        }
    }

    fn give_back(&self, mut buf: Vec<T>, class: Option<usize>) {
        buf.clear();
        if let Some(idx) = class {
            let mut free = self.classes[idx].lock().unwrap_or_else(|e| e.into_inner());
            if free.len() < self.max_retained {
                free.push(buf);
            }
        }
        self.outstanding.fetch_sub(1, Ordering::AcqRel);
    }

    /// Buffers rented and not yet returned
    pub fn outstanding(&self) -> usize {
        self.outstanding.load(Ordering::Acquire)
    }

    /// Idle buffers currently held in the free lists
    pub fn retained(&self) -> usize {
        self.classes
            .iter()
            .map(|c| c.lock().unwrap_or_else(|e| e.into_inner()).len())
            .sum()
    }
}

impl<T> Default for BufferPool<T> {
    fn default() -> Self {
        Self::new(crate::options::DEFAULT_MAX_RETAINED_PER_SIZE)
    }
}

impl<T> fmt::Debug for BufferPool<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BufferPool")
            .field("outstanding", &self.outstanding())
            .field("retained", &self.retained())
            .field("max_retained", &self.max_retained)
            .finish()
    }
}

/// A rented buffer; returned to its pool when dropped
pub struct Pooled<T> {
    buf: Vec<T>,
    class: Option<usize>,
    pool: Arc<BufferPool<T>>,
}

impl<T> Pooled<T> {
    /// Whether this buffer came from a size class (and will be reused)
    pub fn is_pooled(&self) -> bool {
        self.class.is_some()
    }
}

impl<T> Deref for Pooled<T> {
    type Target = Vec<T>;

    fn deref(&self) -> &Vec<T> {
        &self.buf
    }
}

impl<T> DerefMut for Pooled<T> {
    fn deref_mut(&mut self) -> &mut Vec<T> {
        &mut self.buf
    }
}

impl<T> Drop for Pooled<T> {
    fn drop(&mut self) {
        let buf = std::mem::take(&mut self.buf);
        self.pool.give_back(buf, self.class);
    }
}

impl<T: fmt::Debug> fmt::Debug for Pooled<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pooled")
            .field("len", &self.buf.len())
            .field("capacity", &self.buf.capacity())
            .field("class", &self.class)
            .finish()
    }
}

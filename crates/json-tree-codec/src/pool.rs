//! Bounded per-thread pool of string-building buffers.

use std::cell::RefCell;

/// A bounded pool of reusable `String` buffers.
///
/// Acquiring clears a pooled buffer in place rather than reallocating;
/// releasing retains it unless the pool is full or the buffer outgrew the
/// per-buffer capacity bound, in which case it is dropped.
///
/// The writer draws from one pool instance per thread, so no locking is
/// involved. Pooling is an optimization only — every writer contract holds
/// with plain allocation.
#[derive(Debug)]
pub struct BufferPool {
    buffers: Vec<String>,
    max_retained: usize,
    max_buffer_capacity: usize,
}

impl BufferPool {
    pub const DEFAULT_MAX_RETAINED: usize = 8;
    pub const DEFAULT_MAX_BUFFER_CAPACITY: usize = 64 * 1024;

    pub fn new(max_retained: usize, max_buffer_capacity: usize) -> Self {
        Self {
            buffers: Vec::new(),
            max_retained,
            max_buffer_capacity,
        }
    }

    /// Takes a cleared buffer from the pool, or allocates a fresh one.
    pub fn acquire(&mut self) -> String {
        match self.buffers.pop() {
            Some(mut buf) => {
                buf.clear();
                buf
            }
            None => String::new(),
        }
    }

    /// Returns a buffer to the pool, dropping it instead when the pool is at
    /// capacity or the buffer exceeds the retained-size bound.
    pub fn release(&mut self, buf: String) {
        if self.buffers.len() < self.max_retained && buf.capacity() <= self.max_buffer_capacity {
            self.buffers.push(buf);
        }
    }

    /// Number of buffers currently held.
    pub fn retained(&self) -> usize {
        self.buffers.len()
    }
}

impl Default for BufferPool {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_MAX_RETAINED,
            Self::DEFAULT_MAX_BUFFER_CAPACITY,
        )
    }
}

thread_local! {
    static POOL: RefCell<BufferPool> = RefCell::new(BufferPool::default());
}

/// Runs `f` with a buffer drawn from this thread's pool, returning the
/// buffer afterwards.
pub(crate) fn with_thread_buffer<R>(f: impl FnOnce(&mut String) -> R) -> R {
    POOL.with(|pool| {
        let mut buf = pool.borrow_mut().acquire();
        let result = f(&mut buf);
        pool.borrow_mut().release(buf);
        result
    })
}

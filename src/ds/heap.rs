/// Array-backed binary min-heap over `i32`
///
/// The tree is stored positionally: for index `k` the children sit at
/// `2k + 1` and `2k + 2`, the parent at `(k + 1) / 2 - 1`.
use crate::{config::*, prelude::*};
use log::{debug, trace, warn};

/// Returned by `pop` on an empty heap
pub const EMPTY: i32 = -1;

#[inline]
fn parent(k: usize) -> usize {
    (k + 1) / 2 - 1
}

#[derive(Clone, Debug)]
pub struct MinHeap {
    config: Config,
    max_size: usize,
    elems: Vec<i32>,
}

impl MinHeap {
    /// An empty heap holding at most `max_size` elements
    pub fn new(max_size: usize) -> Self {
        Self::with_config(Config::new(max_size))
    }

    pub fn with_config(config: Config) -> Self {
        let max_size = config.capacity;
        Self { config, max_size, elems: Vec::with_capacity(max_size) }
    }

    /// Copy `array` into a heap of the same capacity and heapify it bottom-up
    pub fn new_from_array(array: &[i32]) -> Self {
        let mut heap = Self::new(array.len());
        heap.elems.extend_from_slice(array);

        // leaves already satisfy the heap property
        if heap.elems.len() > 1 {
            for k in (0..=parent(heap.elems.len() - 1)).rev() {
                heap.sift_down(k);
            }
        }

        trace!("heap: built from {} elements", heap.elems.len());
        heap
    }

    /// Release the heap
    pub fn free(self) {}

    pub fn len(&self) -> usize {
        self.elems.len()
    }

    pub fn get_size(&self) -> usize {
        self.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.max_size
    }

    /// The elements in tree order
    pub fn as_slice(&self) -> &[i32] {
        &self.elems
    }

    /// The minimum, `Error::Empty` if there is none
    pub fn peek(&self) -> IResult<i32> {
        self.elems.first().copied().ok_or(Error::Empty)
    }

    /// Insert `value` and sift it up, O(log n).
    ///
    /// Once the heap holds `capacity()` elements the configured `Overflow`
    /// policy decides between `Error::Full` and doubling the capacity.
    pub fn insert(&mut self, value: i32) -> IResult<()> {
        if self.elems.len() >= self.max_size {
            match self.config.overflow {
                Overflow::Reject => {
                    warn!("heap: rejecting {}, capacity {} reached", value, self.max_size);
                    return Err(Error::Full { capacity: self.max_size });
                }
                Overflow::Grow => self.grow(),
            }
        }

        let mut i = self.elems.len();
        self.elems.push(value);

        while i > 0 && value < self.elems[parent(i)] {
            let p = parent(i);
            self.elems.swap(i, p);
            i = p;
        }

        Ok(())
    }

    /// Remove the minimum, or `EMPTY` when there is nothing to remove
    pub fn pop(&mut self) -> i32 {
        self.try_pop().unwrap_or(EMPTY)
    }

    pub fn try_pop(&mut self) -> Option<i32> {
        let last = self.elems.pop()?;

        if self.elems.is_empty() {
            return Some(last);
        }

        let min = std::mem::replace(&mut self.elems[0], last);
        self.sift_down(0);
        Some(min)
    }

    fn grow(&mut self) {
        let max_size = (self.max_size * 2).max(1);
        self.elems.reserve_exact(max_size - self.elems.len());

        debug!("heap: capacity {} -> {}", self.max_size, max_size);
        self.max_size = max_size;
    }

    /// Push `elems[k]` down until neither child is smaller.
    ///
    /// The right child wins only when strictly smaller than the left one,
    /// so equal children always resolve to the left.
    fn sift_down(&mut self, mut k: usize) {
        let size = self.elems.len();

        loop {
            let left = 2 * k + 1;
            let right = 2 * k + 2;
            let mut min = k;

            if left < size && self.elems[left] < self.elems[k] {
                min = left;
            }

            if right < size && self.elems[right] < self.elems[min] {
                min = right;
            }

            if min == k {
                return
            }

            self.elems.swap(k, min);
            k = min;
        }
    }
}

/// Heapsort `array` ascending in place
pub fn sort_array(array: &mut [i32]) {
    let mut heap = MinHeap::new_from_array(array);

    for slot in array.iter_mut() {
        *slot = heap.pop();
    }
}

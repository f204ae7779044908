/// Growable circular store addressed by absolute timeline offsets.
///
/// Physically retains the contiguous span `[start, start + len)`; cells
/// are located modulo the current capacity. Growth doubles the capacity
/// and relocates retained cells to their new modulo positions.
#[derive(Debug)]
pub(crate) struct RingStore<T> {
    cells: Vec<Option<T>>,
    start: u64,
    len: usize,
}

const INITIAL_CAPACITY: usize = 8;

impl<T> RingStore<T> {
    pub(crate) fn new() -> Self {
        Self {
            cells: Vec::new(),
            start: 0,
            len: 0,
        }
    }

    /// Absolute offset one past the newest retained element.
    pub(crate) fn end(&self) -> u64 {
        self.start + self.len as u64
    }

    pub(crate) fn start(&self) -> u64 {
        self.start
    }

    #[cfg(any(test, feature = "trace"))]
    pub(crate) fn capacity(&self) -> usize {
        self.cells.len()
    }

    /// Returns the element at `offset`, if it is within the retained span.
    pub(crate) fn get(&self, offset: u64) -> Option<&T> {
        if offset < self.start || offset >= self.end() {
            return None;
        }
        self.cells[(offset % self.cells.len() as u64) as usize].as_ref()
    }

    /// Appends one element at the end of the span; returns true if the
    /// store had to grow.
    pub(crate) fn push(&mut self, value: T) -> bool {
        let grew = self.len == self.cells.len();
        if grew {
            self.grow();
        }
        let capacity = self.cells.len() as u64;
        let index = (self.end() % capacity) as usize;
        self.cells[index] = Some(value);
        self.len += 1;
        grew
    }

    fn grow(&mut self) {
        let old_capacity = self.cells.len();
        let new_capacity = if old_capacity == 0 {
            INITIAL_CAPACITY
        } else {
            old_capacity * 2
        };
        let mut next: Vec<Option<T>> = Vec::with_capacity(new_capacity);
        next.resize_with(new_capacity, || None);
        for i in 0..self.len {
            let offset = self.start + i as u64;
            let old_index = (offset % old_capacity as u64) as usize;
            let new_index = (offset % new_capacity as u64) as usize;
            next[new_index] = self.cells[old_index].take();
        }
        self.cells = next;
    }

    /// Drops every element below `new_start`, shrinking the retained span.
    pub(crate) fn evict_below(&mut self, new_start: u64) {
        let capacity = self.cells.len() as u64;
        while self.start < new_start && self.len > 0 {
            let index = (self.start % capacity) as usize;
            self.cells[index] = None;
            self.start += 1;
            self.len -= 1;
        }
        if self.len == 0 && self.start < new_start {
            self.start = new_start;
        }
    }
}

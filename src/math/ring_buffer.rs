/// A fixed-capacity FIFO that overwrites its oldest element once full.
///
/// Storage is allocated up front. Elements are never moved after being
/// written; instead we track where the oldest one lives.
#[derive(Debug, Clone)]
pub struct RingBuffer<T> {
    // Invariants:
    //   - buffer.len() <= capacity
    //   - start == 0 unless buffer.len() == capacity
    buffer: Vec<T>,
    capacity: usize,
    // index of the oldest element
    start: usize,
}

impl<T> RingBuffer<T> {
    pub fn new(capacity: usize) -> Self {
        assert!(
            capacity >= 1,
            "Must have room for at least one element, capacity was {}",
            capacity
        );
        RingBuffer {
            buffer: Vec::with_capacity(capacity),
            capacity,
            start: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.buffer.len() == self.capacity
    }

    pub fn start(&self) -> usize {
        self.start
    }

    /// Appends an element. If the buffer is full, the oldest element is
    /// evicted and returned.
    pub fn push(&mut self, item: T) -> Option<T> {
        if !self.is_full() {
            self.buffer.push(item);
            return None;
        }

        let evicted = std::mem::replace(&mut self.buffer[self.start], item);
        self.start = (self.start + 1) % self.capacity;
        Some(evicted)
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.start = 0;
    }

    /// The most recently pushed element.
    pub fn newest(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        // When not full, start is 0 and this is just the last slot
        let idx = (self.start + self.buffer.len() - 1) % self.capacity;
        self.buffer.get(idx)
    }

    pub fn oldest(&self) -> Option<&T> {
        self.buffer.get(self.start)
    }

    /// Returns the contents as two slices which, concatenated, are in
    /// oldest-to-newest order. The second slice is empty unless the buffer
    /// has wrapped.
    pub fn as_slices(&self) -> (&[T], &[T]) {
        let (head, tail) = self.buffer.split_at(self.start);
        (tail, head)
    }

    /// Iterates from oldest to newest, without copying.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + '_ {
        let (older, newer) = self.as_slices();
        older.iter().chain(newer.iter())
    }
}

/*!
A max-heap over a subset of elements with fixed indices.

The heap is backed by a vector of values which stays in place, with a
companion vector tracking where (if anywhere) each value index currently sits
on the heap. So, the structure doubles as a store of values which may be moved
on and off the heap without losing their index.

[IndexHeap] backs the activity ordering of atoms: every atom keeps an
activity, and atoms without a value are kept active on the heap so the most
active may be popped when a decision is needed.
*/

/// The index heap struct.
pub struct IndexHeap<V: PartialOrd + Default> {
    /// The value of each index, on the heap or not.
    values: Vec<V>,

    /// For each value index, its current location on the heap, if any.
    positions: Vec<Option<usize>>,

    /// The heap of value indices.
    heap: Vec<usize>,

    /// The count of active heap entries, i.e. `heap[..limit]` is the heap.
    limit: usize,
}

impl<V: PartialOrd + Default> Default for IndexHeap<V> {
    fn default() -> Self {
        IndexHeap {
            values: Vec::default(),
            positions: Vec::default(),
            heap: Vec::default(),
            limit: 0,
        }
    }
}

impl<V: PartialOrd + Default> IndexHeap<V> {
    /// Index `value` with `value_index`, growing the structure as needed.
    /// Returns true if `value_index` was a fresh index, false otherwise.
    ///
    /// To place `value_index` on the heap, [activate](IndexHeap::activate) it.
    pub fn add(&mut self, value_index: usize, value: V) -> bool {
        let fresh = self.values.len() <= value_index;
        while self.values.len() <= value_index {
            self.values.push(V::default());
            self.positions.push(None);
            self.heap.push(usize::MAX);
        }
        self.revalue(value_index, value);
        fresh
    }

    /// Place `value_index` on the heap, or restore heap order at its current
    /// position if already present.
    /// Returns true if `value_index` was newly placed, false otherwise.
    pub fn activate(&mut self, value_index: usize) -> bool {
        match self.positions[value_index] {
            None => {
                self.heap[self.limit] = value_index;
                self.positions[value_index] = Some(self.limit);
                self.sift_up(self.limit);
                self.limit += 1;
                true
            }
            Some(heap_index) => {
                self.sift_up(heap_index);
                self.sift_down(heap_index);
                false
            }
        }
    }

    /// Remove `value_index` from the heap, if present.
    /// Returns true if `value_index` was removed, false otherwise.
    pub fn remove(&mut self, value_index: usize) -> bool {
        match self.positions[value_index] {
            None => false,
            Some(heap_index) => {
                self.limit -= 1;
                self.positions[value_index] = None;
                if heap_index != self.limit {
                    let moved = self.heap[self.limit];
                    self.heap[heap_index] = moved;
                    self.positions[moved] = Some(heap_index);
                    self.sift_down(heap_index);
                    self.sift_up(heap_index);
                }
                true
            }
        }
    }

    /// Restore heap order at the position of `value_index`, if active.
    pub fn heapify_if_active(&mut self, value_index: usize) {
        if let Some(heap_index) = self.positions[value_index] {
            self.sift_down(heap_index);
            self.sift_up(heap_index);
        }
    }

    /// Restore heap order throughout, e.g. after revaluing many indices.
    pub fn reheap(&mut self) {
        for heap_index in (0..self.limit / 2).rev() {
            self.sift_down(heap_index);
        }
    }

    /// The index holding the maximum value of the heap.
    pub fn peek_max(&self) -> Option<usize> {
        match self.limit {
            0 => None,
            _ => Some(self.heap[0]),
        }
    }

    /// The maximum value of the heap.
    pub fn peek_max_value(&self) -> Option<&V> {
        self.peek_max().map(|value_index| self.value_at(value_index))
    }

    /// Pop the index holding the maximum value off the heap.
    pub fn pop_max(&mut self) -> Option<usize> {
        match self.peek_max() {
            None => None,
            Some(value_index) => {
                self.remove(value_index);
                Some(value_index)
            }
        }
    }

    /// The value indexed by `value_index`.
    pub fn value_at(&self, value_index: usize) -> &V {
        &self.values[value_index]
    }

    /// Set the value of `value_index` to `value`.
    ///
    /// Does not restore heap order; see [heapify_if_active](IndexHeap::heapify_if_active).
    pub fn revalue(&mut self, value_index: usize, value: V) {
        self.values[value_index] = value;
    }

    /// Apply `f` to all indexed values, active or not.
    pub fn apply_to_all(&mut self, f: impl Fn(&V) -> V) {
        for value in self.values.iter_mut() {
            *value = f(value)
        }
    }

    /// A count of values indexed by the structure.
    pub fn count(&self) -> usize {
        self.values.len()
    }

    /// True if no values are indexed, false otherwise.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<V: PartialOrd + Default> IndexHeap<V> {
    /// Swap the heap entries at `a` and `b`, maintaining position notes.
    fn swap_entries(&mut self, a: usize, b: usize) {
        let (index_a, index_b) = (self.heap[a], self.heap[b]);
        self.positions[index_a] = Some(b);
        self.positions[index_b] = Some(a);
        self.heap.swap(a, b);
    }

    /// Shuffle the entry at `heap_index` down the heap, as required.
    fn sift_down(&mut self, mut heap_index: usize) {
        loop {
            let left = (2 * heap_index) + 1;
            if left >= self.limit {
                break;
            }
            let right = left + 1;

            let mut largest = heap_index;
            if self.values[self.heap[left]] > self.values[self.heap[largest]] {
                largest = left;
            }
            if right < self.limit && self.values[self.heap[right]] > self.values[self.heap[largest]]
            {
                largest = right;
            }

            if largest == heap_index {
                break;
            }
            self.swap_entries(heap_index, largest);
            heap_index = largest;
        }
    }

    /// Shuffle the entry at `heap_index` up the heap, as required.
    fn sift_up(&mut self, mut heap_index: usize) {
        while heap_index != 0 {
            let parent = (heap_index - 1) / 2;
            if self.values[self.heap[parent]] >= self.values[self.heap[heap_index]] {
                break;
            }
            self.swap_entries(heap_index, parent);
            heap_index = parent;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heap_simple() {
        let mut test_heap = IndexHeap::default();
        test_heap.add(6, 10);
        test_heap.add(5, 20);
        test_heap.add(4, 30);
        test_heap.add(1, 60);
        test_heap.add(0, 70);
        for index in [6, 5, 4, 1, 0] {
            test_heap.activate(index);
        }

        assert_eq!(test_heap.pop_max(), Some(0));
        assert_eq!(test_heap.pop_max(), Some(1));
        assert_eq!(test_heap.pop_max(), Some(4));
        assert_eq!(test_heap.pop_max(), Some(5));
        assert_eq!(test_heap.pop_max(), Some(6));
        assert!(test_heap.pop_max().is_none());
    }

    #[test]
    fn heap_update() {
        let mut test_heap = IndexHeap::default();
        test_heap.add(6, 10);
        test_heap.add(4, 30);
        test_heap.add(1, 60);
        test_heap.add(0, 70);
        for index in [6, 4, 1, 0] {
            test_heap.activate(index);
        }

        test_heap.revalue(0, 0);
        test_heap.revalue(1, 1);
        test_heap.revalue(4, 4);
        test_heap.revalue(6, 6);
        test_heap.reheap();

        assert_eq!(test_heap.pop_max(), Some(6));
        assert_eq!(test_heap.pop_max(), Some(4));
        assert_eq!(test_heap.pop_max(), Some(1));
        assert_eq!(test_heap.pop_max(), Some(0));
        assert!(test_heap.pop_max().is_none());
    }

    #[test]
    fn heap_sparse() {
        let mut test_heap = IndexHeap::default();
        test_heap.add(600, 10);
        test_heap.add(0, 70);
        test_heap.activate(600);
        test_heap.activate(0);

        assert_eq!(test_heap.count(), 601);
        assert_eq!(test_heap.value_at(5), &i32::default());
        assert_eq!(test_heap.pop_max(), Some(0));
        assert_eq!(test_heap.pop_max(), Some(600));
        assert!(test_heap.pop_max().is_none());
    }

    #[test]
    fn heap_remove() {
        let mut test_heap = IndexHeap::default();
        for index in [6, 5, 4, 1, 0] {
            test_heap.add(index, index as i32);
            test_heap.activate(index);
        }

        assert!(test_heap.remove(4));
        assert!(!test_heap.remove(4));
        assert!(test_heap.remove(6));
        assert!(!test_heap.add(4, 10));
        assert!(!test_heap.add(4, 3));
        test_heap.activate(4);

        assert_eq!(test_heap.pop_max(), Some(5));
        assert_eq!(test_heap.pop_max(), Some(4));
        assert_eq!(test_heap.pop_max(), Some(1));
        assert_eq!(test_heap.pop_max(), Some(0));
    }
}

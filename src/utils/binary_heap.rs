use std::{ops::Range, cmp};

/// binary min heap that tracks the position of every element so that its key can be decreased in place
pub struct MinBinaryHeap<T: HeapElement + Ord> {
    data: Vec<T>,
    indices: Vec<usize>
}

pub trait HeapElement {

    /// index in 0..size identifying the element, at most one element per index is stored in the heap
    fn unique_index(&self) -> usize;
}

const INVALID_POSITION: usize = usize::MAX;

impl<T: HeapElement + Ord> MinBinaryHeap<T> {

    pub fn new(size: usize) -> Self {
        MinBinaryHeap {
            data: Vec::new(),
            indices: vec![INVALID_POSITION; size]
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// removes all elements and changes the number of unique indices
    pub fn reset(&mut self, size: usize) {
        self.data.clear();
        self.indices.clear();
        self.indices.resize(size, INVALID_POSITION);
    }

    pub fn insert(&mut self, entry: T) {
        let initial_index = self.data.len();
        let entry_unique_id = entry.unique_index();
        self.data.push(entry);
        self.indices[entry_unique_id] = initial_index;

        self.sift_up(initial_index);
    }

    pub fn insert_or_decrease(&mut self, entry: T) {
        if self.contains_unique_index(entry.unique_index()) {
            self.decrease(entry);
        }
        else {
            self.insert(entry);
        }
    }

    /// replaces the stored element with the same unique index, the new element must not be bigger
    pub fn decrease(&mut self, entry: T) {
        let unique_id = entry.unique_index();

        self.data[self.indices[unique_id]] = entry;
        self.sift_up(self.indices[unique_id]);
    }

    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let last = self.len() - 1;
        self.swap(0, last); // move first element to the back
        let min_element = self.data.pop()?;
        self.indices[min_element.unique_index()] = INVALID_POSITION;

        if !self.is_empty() {
            self.sift_down(0);
        }

        Some(min_element)
    }

    pub fn contains_unique_index(&self, unique_index: usize) -> bool {
        self.indices[unique_index] != INVALID_POSITION
    }

    fn sift_up(&mut self, index: usize) {
        let mut current_index = index;

        while 0 < current_index {
            let parent_index = Self::parent_index(current_index);

            if self.data[parent_index] <= self.data[current_index] {
                break;
            }

            self.swap(parent_index, current_index);
            current_index = parent_index;
        }
    }

    fn sift_down(&mut self, index: usize) {
        let mut current_index = index;

        while current_index < self.len() {
            let mut min_entry_index: usize = current_index;

            for child_index in self.children_indices(current_index) {
                if self.data[child_index] < self.data[min_entry_index] {
                    min_entry_index = child_index;
                }
            }

            if min_entry_index != current_index {
                self.swap(min_entry_index, current_index);

                current_index = min_entry_index;
            }
            else {
                break;
            }
        }
    }

    fn parent_index(index: usize) -> usize {
        (index - 1) / 2
    }

    fn children_indices(&self, index: usize) -> Range<usize> {
        let min_index = cmp::min(self.len(), 2 * index + 1);
        let max_index = cmp::min(self.len(), 2 * index + 3);

        min_index..max_index
    }

    fn swap(&mut self, first: usize, second: usize) {
        self.indices[self.data[first].unique_index()] = second;
        self.indices[self.data[second].unique_index()] = first;

        self.data.swap(first, second);
    }
}

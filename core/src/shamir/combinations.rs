/// Lazy enumeration of all k-element subsets of a slice.
///
/// Subsets are yielded in lexicographic index order and each subset keeps
/// the relative order of the underlying slice. Nothing is materialized up
/// front; the iterator holds one index vector and advances it in place.
/// Cloning the iterator clones its cursor, and a fresh call to [`new`]
/// always restarts from the first subset.
///
/// [`new`]: Combinations::new
#[derive(Clone, Debug)]
pub struct Combinations<'a, T> {
    items: &'a [T],
    take: usize,
    indices: Vec<usize>,
    started: bool,
    exhausted: bool,
}

impl<'a, T> Combinations<'a, T> {
    pub fn new(items: &'a [T], take: usize) -> Self {
        Combinations {
            items,
            take,
            indices: (0..take).collect(),
            started: false,
            exhausted: take > items.len(),
        }
    }

    fn current(&self) -> Vec<&'a T> {
        self.indices.iter().map(|&index| &self.items[index]).collect()
    }

    /// Step `indices` to its lexicographic successor, or mark the end.
    ///
    /// An index may only move right while the suffix after it still has
    /// room to complete the selection, hence the `n - take + i` bound.
    fn advance(&mut self) {
        let n = self.items.len();
        for i in (0..self.take).rev() {
            if self.indices[i] < n - self.take + i {
                self.indices[i] += 1;
                for j in i + 1..self.take {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                return;
            }
        }
        self.exhausted = true;
    }
}

impl<'a, T> Iterator for Combinations<'a, T> {
    type Item = Vec<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        if self.started {
            self.advance();
            if self.exhausted {
                return None;
            }
        } else {
            self.started = true;
        }
        Some(self.current())
    }
}

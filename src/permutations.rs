use std::iter::FusedIterator;

/// Every ordering of a fixed-size array, generated lazily with Heap's algorithm.
///
/// The first item is the input array itself. Each following item differs from
/// the previous one by a single swap, so `N!` arrays are produced in total and,
/// for distinct elements, no two of them are equal.
#[derive(Debug, Clone)]
pub struct Permutations<T, const N: usize> {
    arr: [T; N],
    counters: [usize; N],
    idx: usize,
    started: bool,
}

impl<T: Copy, const N: usize> Permutations<T, N> {
    pub fn new(arr: [T; N]) -> Self {
        Self {
            arr,
            counters: [0; N],
            idx: 1,
            started: false,
        }
    }
}

impl<T: Copy, const N: usize> Iterator for Permutations<T, N> {
    type Item = [T; N];

    fn next(&mut self) -> Option<Self::Item> {
        if !self.started {
            self.started = true;
            return Some(self.arr);
        }

        while self.idx < N {
            let idx = self.idx;

            if self.counters[idx] < idx {
                let j = if idx % 2 == 0 { 0 } else { self.counters[idx] };
                self.arr.swap(idx, j);

                self.counters[idx] += 1;
                self.idx = 1;
                return Some(self.arr);
            }

            self.counters[idx] = 0;
            self.idx += 1;
        }

        None
    }
}

impl<T: Copy, const N: usize> FusedIterator for Permutations<T, N> {}

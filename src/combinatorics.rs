// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Lazy combination and permutation producers.
//!
//! Both producers are finite and restartable ([`Combinations::reset`],
//! [`Permutations::reset`]) and emit in the same lexicographic index order as
//! the textbook algorithms, so enumeration order is reproducible.

/// `n!`, or `None` on overflow.
pub const fn factorial(n: usize) -> Option<usize> {
    let mut acc: usize = 1;
    let mut i = 2;
    while i <= n {
        acc = match acc.checked_mul(i) {
            Some(v) => v,
            None => return None,
        };
        i += 1;
    }
    Some(acc)
}

/// Binomial coefficient `n choose k`, or `None` on overflow.
pub const fn choose(n: usize, k: usize) -> Option<usize> {
    if k > n {
        return Some(0);
    }
    let k = if k > n - k { n - k } else { k };
    let mut acc: u128 = 1;
    let mut i = 0;
    while i < k {
        // acc * (n - i) / (i + 1) stays integral at every step.
        acc = match acc.checked_mul((n - i) as u128) {
            Some(v) => v / (i + 1) as u128,
            None => return None,
        };
        if acc > usize::MAX as u128 {
            return None;
        }
        i += 1;
    }
    Some(acc as usize)
}

/// All `k`-element subsets of `pool`, in lexicographic index order.
#[derive(Debug, Clone)]
pub struct Combinations<T> {
    pool: Vec<T>,
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

impl<T: Copy> Combinations<T> {
    pub fn new(pool: Vec<T>, k: usize) -> Self {
        let done = k > pool.len();
        Self {
            pool,
            indices: (0..k).collect(),
            started: false,
            done,
        }
    }

    /// Restart from the first combination.
    pub fn reset(&mut self) {
        let k = self.indices.len();
        self.indices.iter_mut().enumerate().for_each(|(i, v)| *v = i);
        self.started = false;
        self.done = k > self.pool.len();
    }

    /// Number of combinations in a full pass.
    pub fn count_total(&self) -> Option<usize> {
        choose(self.pool.len(), self.indices.len())
    }

    fn advance(&mut self) -> bool {
        let n = self.pool.len();
        let k = self.indices.len();
        let mut i = k;
        while i > 0 {
            i -= 1;
            if self.indices[i] != i + n - k {
                self.indices[i] += 1;
                for j in i + 1..k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                return true;
            }
        }
        false
    }
}

impl<T: Copy> Iterator for Combinations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.started {
            if !self.advance() {
                self.done = true;
                return None;
            }
        } else {
            self.started = true;
        }
        Some(self.indices.iter().map(|&i| self.pool[i]).collect())
    }
}

/// All orderings of `items`, in lexicographic index order.
///
/// [`Permutations::next_indices`] exposes the current index ordering without
/// allocating; the `Iterator` impl collects the items.
#[derive(Debug, Clone)]
pub struct Permutations<T> {
    items: Vec<T>,
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

impl<T: Copy> Permutations<T> {
    pub fn new(items: Vec<T>) -> Self {
        let indices = (0..items.len()).collect();
        Self {
            items,
            indices,
            started: false,
            done: false,
        }
    }

    pub fn reset(&mut self) {
        self.indices.iter_mut().enumerate().for_each(|(i, v)| *v = i);
        self.started = false;
        self.done = false;
    }

    /// Number of permutations in a full pass.
    pub fn count_total(&self) -> Option<usize> {
        factorial(self.items.len())
    }

    /// Advance and return the next index ordering.
    pub fn next_indices(&mut self) -> Option<&[usize]> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(&self.indices);
        }
        let n = self.indices.len();
        // Largest i with indices[i] < indices[i + 1].
        let Some(i) = (0..n.saturating_sub(1))
            .rev()
            .find(|&i| self.indices[i] < self.indices[i + 1])
        else {
            self.done = true;
            return None;
        };
        let j = (i + 1..n)
            .rev()
            .find(|&j| self.indices[j] > self.indices[i])
            .unwrap_or(i + 1);
        self.indices.swap(i, j);
        self.indices[i + 1..].reverse();
        Some(&self.indices)
    }
}

impl<T: Copy> Iterator for Permutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_indices()?;
        Some(self.indices.iter().map(|&i| self.items[i]).collect())
    }
}

/// Ordered pairs of distinct positions of `items`: `(0,1), (0,2), …, (1,0), …`.
pub fn ordered_pairs<T: Copy>(items: &[T]) -> impl Iterator<Item = (T, T)> + '_ {
    (0..items.len()).flat_map(move |i| {
        (0..items.len())
            .filter(move |&j| j != i)
            .map(move |j| (items[i], items[j]))
    })
}

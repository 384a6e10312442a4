//! Lazy enumeration of per-row arrangements and candidate counting.
//!
//! An arrangement is one ordered, length-`k` selection of a row's non-zero
//! values. Selection is by position, not by magnitude: a row containing the
//! same value twice enumerates both source positions separately, which
//! matters for candidate counts but not for correctness (equivalent column
//! sets collapse during deduplication).

/// Lazy iterator over every ordered `k`-selection of a value slice.
///
/// Produces `n! / (n - k)!` arrangements in a fixed lexicographic-by-index
/// order, so enumeration (and therefore discovery order downstream) is
/// deterministic. Cloning restarts nothing: a clone continues from the same
/// point; build a fresh iterator to restart.
///
/// Uses the indices/cycles scheme so each step is O(k) and no candidate
/// space is materialized.
#[derive(Debug, Clone)]
pub struct Arrangements<'a> {
    values: &'a [f64],
    k: usize,
    indices: Vec<usize>,
    cycles: Vec<usize>,
    started: bool,
    done: bool,
}

impl<'a> Arrangements<'a> {
    pub fn new(values: &'a [f64], k: usize) -> Arrangements<'a> {
        let n = values.len();
        Arrangements {
            values,
            k,
            indices: (0..n).collect(),
            cycles: (0..k.min(n)).map(|i| n - i).collect(),
            started: false,
            done: k > n,
        }
    }

    fn current(&self) -> Vec<f64> {
        self.indices[..self.k]
            .iter()
            .map(|&i| self.values[i])
            .collect()
    }
}

impl Iterator for Arrangements<'_> {
    type Item = Vec<f64>;

    fn next(&mut self) -> Option<Vec<f64>> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.current());
        }

        let n = self.values.len();
        for i in (0..self.k).rev() {
            self.cycles[i] -= 1;
            if self.cycles[i] == 0 {
                self.indices[i..].rotate_left(1);
                self.cycles[i] = n - i;
            } else {
                let j = n - self.cycles[i];
                self.indices.swap(i, j);
                return Some(self.current());
            }
        }

        self.done = true;
        None
    }
}

/// Number of ordered `k`-selections from `n` values: `n! / (n - k)!`,
/// saturating at `u64::MAX`.
pub fn arrangement_count(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }
    let mut count: u64 = 1;
    for i in 0..k {
        count = count.saturating_mul((n - i) as u64);
    }
    count
}

/// Raw candidate total for a search: the product of per-row arrangement
/// counts, saturating at `u64::MAX`.
pub fn total_candidates(counts: &[u64]) -> u64 {
    counts.iter().fold(1u64, |acc, &c| acc.saturating_mul(c))
}

/// Streaming cursor over the cartesian product of per-row arrangements.
///
/// Holds one live [`Arrangements`] iterator per row plus the current
/// arrangement tuple, so memory stays O(rows × k) no matter how large the
/// product is. Advances like an odometer: the last row spins fastest.
#[derive(Debug)]
pub(crate) struct TupleCursor<'a> {
    rows: &'a [&'a [f64]],
    k: usize,
    iters: Vec<Arrangements<'a>>,
    current: Vec<Vec<f64>>,
    started: bool,
    done: bool,
}

impl<'a> TupleCursor<'a> {
    pub(crate) fn new(rows: &'a [&'a [f64]], k: usize) -> TupleCursor<'a> {
        let iters = rows.iter().map(|r| Arrangements::new(r, k)).collect();
        TupleCursor {
            rows,
            k,
            iters,
            current: Vec::new(),
            started: false,
            done: rows.is_empty(),
        }
    }

    /// Steps to the next tuple. Returns `false` once the product is
    /// exhausted; `current()` is only meaningful after `advance()` returned
    /// `true`.
    pub(crate) fn advance(&mut self) -> bool {
        if self.done {
            return false;
        }

        if !self.started {
            for iter in &mut self.iters {
                match iter.next() {
                    Some(arrangement) => self.current.push(arrangement),
                    None => {
                        self.done = true;
                        return false;
                    }
                }
            }
            self.started = true;
            return true;
        }

        for i in (0..self.iters.len()).rev() {
            if let Some(arrangement) = self.iters[i].next() {
                self.current[i] = arrangement;
                return true;
            }
            // Exhausted: reset this row and carry into the one before it.
            self.iters[i] = Arrangements::new(self.rows[i], self.k);
            self.current[i] = self.iters[i]
                .next()
                .expect("non-empty arrangement sequence resets to its first element");
        }

        self.done = true;
        false
    }

    pub(crate) fn current(&self) -> &[Vec<f64>] {
        &self.current
    }
}

//! Multiset partitions (Knuth's Algorithm M) and integer partitions

use super::Multiset;

/// One entry of the Algorithm M component stack
#[derive(Clone, Copy, Debug, Default)]
struct PartComponent {
    /// Component index into the distinct elements
    c: usize,
    /// Amount of the component still to be partitioned
    u: usize,
    /// Amount of the component in the current part
    v: usize,
}

/// Lazy enumeration of every partition of a multiset into non-empty parts
///
/// Follows Algorithm M of Knuth, TAOCP Vol. 4A, 7.2.1.5. Each partition is
/// yielded exactly once, as a vector of parts in decreasing order.
#[derive(Clone, Debug)]
pub struct MultisetPartitions<T: Ord + Clone> {
    elements: Vec<T>,
    stack: Vec<PartComponent>,
    frames: Vec<usize>,
    a: usize,
    b: usize,
    lpart: usize,
    started: bool,
    done: bool,
}

impl<T: Ord + Clone> MultisetPartitions<T> {
    /// Start enumerating the partitions of `mset`
    pub fn new(mset: &Multiset<T>) -> Self {
        let (elements, multiplicities) = mset.split();
        let m = elements.len();
        let n = mset.len();

        let mut stack = vec![PartComponent::default(); n * m + 1];
        for (j, &mult) in multiplicities.iter().enumerate() {
            stack[j] = PartComponent { c: j, u: mult, v: mult };
        }
        let mut frames = vec![0; n + 2];
        frames[1] = m;

        MultisetPartitions {
            elements: elements.into_iter().cloned().collect(),
            stack,
            frames,
            a: 0,
            b: m,
            lpart: 0,
            started: false,
            done: m == 0,
        }
    }

    /// Steps M2 and M3: subtract v from u, pushing new frames while they are non-empty
    fn subtract_and_push(&mut self) {
        loop {
            let (mut j, mut k) = (self.a, self.b);
            let mut changed = false;
            while j < self.b {
                let u = self.stack[j].u - self.stack[j].v;
                self.stack[k].u = u;
                if u == 0 {
                    changed = true;
                } else if !changed {
                    self.stack[k].c = self.stack[j].c;
                    self.stack[k].v = self.stack[j].v.min(u);
                    changed = u < self.stack[j].v;
                    k += 1;
                } else {
                    self.stack[k].c = self.stack[j].c;
                    self.stack[k].v = u;
                    k += 1;
                }
                j += 1;
            }

            if k > self.b {
                self.a = self.b;
                self.b = k;
                self.lpart += 1;
                self.frames[self.lpart + 1] = self.b;
            } else {
                return;
            }
        }
    }

    /// Steps M5 and M6: decrease v, backtracking as needed. Returns false when exhausted.
    fn decrease(&mut self) -> bool {
        loop {
            let mut j = self.b - 1;
            while self.stack[j].v == 0 {
                j -= 1;
            }
            if j == self.a && self.stack[j].v == 1 {
                if self.lpart == 0 {
                    return false;
                }
                self.lpart -= 1;
                self.b = self.a;
                self.a = self.frames[self.lpart];
            } else {
                self.stack[j].v -= 1;
                for k in j + 1..self.b {
                    self.stack[k].v = self.stack[k].u;
                }
                return true;
            }
        }
    }

    /// Read the current partition off the stack frames (step M4)
    fn visit(&self) -> Vec<Multiset<T>> {
        (0..=self.lpart)
            .map(|i| {
                Multiset::from_counts(
                    self.stack[self.frames[i]..self.frames[i + 1]]
                        .iter()
                        .map(|comp| (self.elements[comp.c].clone(), comp.v)),
                )
            })
            .collect()
    }
}

impl<T: Ord + Clone> Iterator for MultisetPartitions<T> {
    type Item = Vec<Multiset<T>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.started {
            if !self.decrease() {
                self.done = true;
                return None;
            }
        } else {
            self.started = true;
        }
        self.subtract_and_push();
        Some(self.visit())
    }
}

/// Lazy enumeration of the integer partitions of n in reverse lexicographic order
///
/// Starts at `{n}` and ends at `{1^n}`. The empty partition is the single
/// partition of zero.
#[derive(Clone, Debug)]
pub struct IntegerPartitions {
    parts: Vec<usize>,
    done: bool,
}

impl IntegerPartitions {
    /// Partitions of `n`
    pub fn new(n: usize) -> Self {
        IntegerPartitions {
            parts: if n == 0 { Vec::new() } else { vec![n] },
            done: false,
        }
    }

    /// Advance `parts` to the next partition; false after `{1^n}`
    fn advance(&mut self) -> bool {
        let Some(k) = self.parts.iter().rposition(|&p| p > 1) else {
            return false;
        };
        let part = self.parts[k] - 1;
        // parts[k..] sums to part + 1 + (number of trailing ones)
        let mut remaining = self.parts.len() - k + part;
        self.parts.truncate(k);
        while remaining >= part {
            self.parts.push(part);
            remaining -= part;
        }
        if remaining > 0 {
            self.parts.push(remaining);
        }
        true
    }
}

impl Iterator for IntegerPartitions {
    type Item = Multiset<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let current = self.parts.iter().copied().collect();
        self.done = !self.advance();
        Some(current)
    }
}

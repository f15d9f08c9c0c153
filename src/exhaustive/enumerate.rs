//! Lazy enumeration of every matching of a roster.

/// Number of distinct matchings of `n` members, `None` on overflow.
///
/// Even `n` gives the double factorial `(n-1)!!`; odd `n` multiplies the
/// count for `n - 1` by the `n` choices of leftover.
///
/// ```
/// use u_pairing::exhaustive::match_count;
///
/// assert_eq!(match_count(4), Some(3));
/// assert_eq!(match_count(5), Some(15));
/// assert_eq!(match_count(8), Some(105));
/// assert_eq!(match_count(16), Some(2_027_025));
/// ```
pub fn match_count(n: usize) -> Option<u128> {
    let mut count: u128 = 1;
    let mut k = n;
    if k % 2 == 1 {
        count = k as u128;
        k -= 1;
    }
    while k > 2 {
        count = count.checked_mul((k - 1) as u128)?;
        k -= 2;
    }
    Some(count)
}

/// One complete matching: pairs in enumeration order plus the leftover
/// of an odd roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    pub pairs: Vec<(usize, usize)>,
    pub leftover: Option<usize>,
}

#[derive(Debug, Clone)]
struct Frame {
    anchor: usize,
    /// `None` stands for "anchor is the leftover".
    candidates: Vec<Option<usize>>,
    cursor: usize,
}

impl Frame {
    fn choice(&self) -> Option<usize> {
        self.candidates[self.cursor]
    }
}

/// Iterator over every matching of positions `0..n`.
///
/// The first unplaced position is either paired with each later
/// unplaced position in turn or, while an odd number remain, left over;
/// the search then recurses on what is left. Each matching is produced
/// exactly once and nothing is materialised up front, so callers can stop
/// early. An empty roster yields one empty matching.
#[derive(Debug, Clone)]
pub struct Partitions {
    n: usize,
    placed: Vec<bool>,
    remaining: usize,
    frames: Vec<Frame>,
    started: bool,
}

impl Partitions {
    /// Fresh enumeration over `n` positions.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            placed: vec![false; n],
            remaining: n,
            frames: Vec::with_capacity(n / 2 + 1),
            started: false,
        }
    }

    fn apply(&mut self, anchor: usize, choice: Option<usize>) {
        self.placed[anchor] = true;
        self.remaining -= 1;
        if let Some(p) = choice {
            self.placed[p] = true;
            self.remaining -= 1;
        }
    }

    fn undo(&mut self, anchor: usize, choice: Option<usize>) {
        self.placed[anchor] = false;
        self.remaining += 1;
        if let Some(p) = choice {
            self.placed[p] = false;
            self.remaining += 1;
        }
    }

    /// Extends the current prefix with first choices until all are placed.
    fn descend(&mut self) {
        let mut from = self.frames.last().map_or(0, |f| f.anchor + 1);
        while self.remaining > 0 {
            let Some(anchor) = (from..self.n).find(|&i| !self.placed[i]) else {
                break;
            };
            let mut candidates = Vec::with_capacity(self.remaining);
            if self.remaining % 2 == 1 {
                candidates.push(None);
            }
            candidates.extend(((anchor + 1)..self.n).filter(|&p| !self.placed[p]).map(Some));
            let first = candidates[0];
            self.frames.push(Frame {
                anchor,
                candidates,
                cursor: 0,
            });
            self.apply(anchor, first);
            from = anchor + 1;
        }
    }

    fn current(&self) -> Partition {
        let mut pairs = Vec::with_capacity(self.frames.len());
        let mut leftover = None;
        for f in &self.frames {
            match f.choice() {
                Some(p) => pairs.push((f.anchor, p)),
                None => leftover = Some(f.anchor),
            }
        }
        Partition { pairs, leftover }
    }
}

impl Iterator for Partitions {
    type Item = Partition;

    fn next(&mut self) -> Option<Partition> {
        if !self.started {
            self.started = true;
            self.descend();
            return Some(self.current());
        }
        loop {
            let (anchor, choice) = {
                let f = self.frames.last()?;
                (f.anchor, f.choice())
            };
            self.undo(anchor, choice);
            let frame = self.frames.last_mut()?;
            frame.cursor += 1;
            if frame.cursor < frame.candidates.len() {
                let next = frame.choice();
                self.apply(anchor, next);
                self.descend();
                return Some(self.current());
            }
            self.frames.pop();
        }
    }
}

/// Every matching of positions `0..n`, see [`Partitions`].
pub fn partitions(n: usize) -> Partitions {
    Partitions::new(n)
}

use std::cmp;
use std::convert::TryFrom;
use std::fmt;
use std::slice::Iter;
use log::{debug, error};
use common::config::IntervalConfig;
use common::error::Errno;
use common::json;
use crate::interval::Interval;

// checks a raw range before any mutation, an empty slice stands for a missing range.
pub fn validate(range: &[i64]) -> Result<Interval, Errno> {
    let ret = Interval::try_from(range);
    if let Err(err) = &ret {
        error!("rejected range {:?}, err: {}", range, err);
    }
    ret
}

/// Disjoint closed integer intervals kept in ascending start order.
///
/// `insert` merges the new interval with every interval it overlaps or
/// touches. `remove` trims, splits or drops the intervals it overlaps and
/// never merges anything back together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntervalSet {
    intervals: Vec<Interval>,
}

impl IntervalSet {
    pub fn new() -> Self {
        IntervalSet{
            intervals: Vec::new(),
        }
    }

    /// Builds a set by inserting each range in order, stops at the first invalid one.
    pub fn from_ranges(ranges: &[Vec<i64>]) -> Result<Self, Errno> {
        let mut set = IntervalSet::new();
        for r in ranges {
            set.insert(r)?;
        }
        Ok(set)
    }

    pub fn from_config(cfg: &IntervalConfig) -> Result<Self, Errno> {
        let set = IntervalSet::from_ranges(&cfg.seed)?;
        debug!("seeded {} ranges into {} intervals", cfg.seed.len(), set.len());
        Ok(set)
    }

    /// Decodes a json array of `[start, end]` pairs and inserts every pair.
    pub fn from_json(body: &str) -> Result<Self, Errno> {
        let ranges: Vec<Vec<i64>> = json::decode_from_str(body)?;
        IntervalSet::from_ranges(&ranges)
    }

    pub fn to_json(&self) -> Result<String, Errno> {
        json::encode_to_str(&self.intervals)
    }

    pub fn insert(&mut self, range: &[i64]) -> Result<(), Errno> {
        let intr = validate(range)?;
        self.insert_interval(intr);
        Ok(())
    }

    pub fn remove(&mut self, range: &[i64]) -> Result<(), Errno> {
        let intr = validate(range)?;
        self.remove_interval(intr);
        Ok(())
    }

    pub fn insert_interval(&mut self, intr: Interval) {
        let mut merged = intr;
        let mut placed = false;
        let mut absorbed = 0;
        let mut out: Vec<Interval> = Vec::with_capacity(self.intervals.len() + 1);
        for curr in self.intervals.drain(..) {
            if placed {
                out.push(curr);
                continue;
            }
            if merged.end < curr.start {
                // nothing after curr can overlap, place the new interval before it.
                out.push(merged);
                out.push(curr);
                placed = true;
            } else if merged.start > curr.end {
                out.push(curr);
            } else {
                // overlapping or touching, the merged interval keeps growing.
                merged.start = cmp::min(merged.start, curr.start);
                merged.end = cmp::max(merged.end, curr.end);
                absorbed += 1;
            }
        }
        if !placed {
            out.push(merged);
        }
        self.intervals = out;
        debug!("insert {}: absorbed {} intervals into {}, total {}",
            intr, absorbed, merged, self.intervals.len());
    }

    pub fn remove_interval(&mut self, intr: Interval) {
        let (rm_start, rm_end) = intr.pair();
        let before = self.intervals.len();
        let mut out: Vec<Interval> = Vec::with_capacity(before + 1);
        for curr in self.intervals.drain(..) {
            if curr.end < rm_start || curr.start > rm_end {
                out.push(curr);
            } else if rm_start <= curr.start && rm_end >= curr.end {
                // fully covered, drop it.
                continue;
            } else if rm_start <= curr.start {
                // rm_end < curr.end here.
                out.push(Interval{start: rm_end, end: curr.end});
            } else if rm_end >= curr.end {
                // rm_start > curr.start here.
                out.push(Interval{start: curr.start, end: rm_start});
            } else {
                out.push(Interval{start: curr.start, end: rm_start});
                out.push(Interval{start: rm_end, end: curr.end});
            }
        }
        self.intervals = out;
        debug!("remove {}: {} intervals before, {} after", intr, before, self.intervals.len());
    }

    pub fn snapshot(&self) -> Vec<Interval> {
        self.intervals.clone()
    }

    pub fn iter(&self) -> Iter<'_, Interval> {
        self.intervals.iter()
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }
}

impl<'a> IntoIterator for &'a IntervalSet {
    type Item = &'a Interval;
    type IntoIter = Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

impl fmt::Display for IntervalSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, intr) in self.intervals.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", intr)?;
        }
        write!(f, "]")
    }
}

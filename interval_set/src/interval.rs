use std::convert::TryFrom;
use std::fmt;
use serde_derive::Serialize;
use common::error::Errno;

// closed range [start, end], start <= end always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "[i64; 2]")]
pub struct Interval {
    pub(crate) start: i64,
    pub(crate) end: i64,
}

impl Interval {
    pub fn new(start: i64, end: i64) -> Result<Self, Errno> {
        if start > end {
            return Err(Errno::InvalidRange(start, end));
        }
        Ok(Interval{
            start: start,
            end: end,
        })
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn end(&self) -> i64 {
        self.end
    }

    pub fn pair(&self) -> (i64, i64) {
        (self.start, self.end)
    }
}

impl TryFrom<&[i64]> for Interval {
    type Error = Errno;

    fn try_from(range: &[i64]) -> Result<Self, Self::Error> {
        match range {
            [start, end] => Interval::new(*start, *end),
            _ => Err(Errno::InvalidArity(range.len())),
        }
    }
}

impl From<Interval> for [i64; 2] {
    fn from(intr: Interval) -> Self {
        [intr.start, intr.end]
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Errno{
    // the interval is missing or doesn't have exactly two bounds, carries the length.
    InvalidArity(usize),
    // start > end.
    InvalidRange(i64, i64),
    // failed to encode or decode json.
    Ejson(String),
}

impl fmt::Display for Errno {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Errno::InvalidArity(len) => {
                write!(f, "interval must have exactly 2 bounds, got {}", len)
            }
            Errno::InvalidRange(start, end) => {
                write!(f, "interval start {} is greater than end {}", start, end)
            }
            Errno::Ejson(err) => {
                write!(f, "json error: {}", err)
            }
        }
    }
}

impl std::error::Error for Errno {}

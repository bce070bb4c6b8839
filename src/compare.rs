use std::cmp::Ordering;

use thiserror::Error;

pub const DELIMITER: char = '.';

/// Stands in for a segment missing from the shorter version.
const ZERO_FILL: &str = "0";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("Malformed version input: version string must not be empty.")]
    MalformedInput,

    #[error(
        "Malformed version segment \"{segment}\" at position {position} of \"{version}\": expected a non-negative integer."
    )]
    MalformedSegment {
        segment: String,
        position: usize,
        version: String,
    },
}

/// Compares two dotted version strings segment by segment.
///
/// Missing trailing segments count as `0`, so `"1.3"` and `"1.3.0"` are
/// equal. The walk stops at the first differing segment; anything after it
/// is never parsed. Byte-identical inputs are equal without being parsed.
pub fn compare_versions(a: &str, b: &str) -> Result<Ordering, VersionError> {
    if a.is_empty() || b.is_empty() {
        return Err(VersionError::MalformedInput);
    }

    if a == b {
        return Ok(Ordering::Equal);
    }

    let mut a_iter = Segments::new(a);
    let mut b_iter = Segments::new(b);

    loop {
        let (a_seg, b_seg) = match (a_iter.next(), b_iter.next()) {
            (None, None) => return Ok(Ordering::Equal),
            (a_seg, b_seg) => (a_seg.unwrap_or(ZERO_FILL), b_seg.unwrap_or(ZERO_FILL)),
        };

        let a_num = a_iter.parse(a_seg)?;
        let b_num = b_iter.parse(b_seg)?;

        let ord = a_num.cmp(&b_num);
        if ord != Ordering::Equal {
            return Ok(ord);
        }
    }
}

/// A validated segment with its leading zeros removed.
///
/// Ordering is numeric for any length: fewer significant digits is smaller,
/// equal digit counts compare lexically.
#[derive(Debug, Eq, PartialEq)]
struct SegmentValue<'a>(&'a str);

impl Ord for SegmentValue<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(other.0))
    }
}

impl PartialOrd for SegmentValue<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

struct Segments<'a> {
    input: &'a str,
    parts: std::str::Split<'a, char>,
    pos: usize,
}

impl<'a> Segments<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            parts: input.split(DELIMITER),
            pos: 0,
        }
    }

    fn next(&mut self) -> Option<&'a str> {
        self.parts.next()
    }

    // Called once per walk step, so `pos` tracks the segment just yielded.
    fn parse<'s>(&mut self, segment: &'s str) -> Result<SegmentValue<'s>, VersionError> {
        let position = self.pos;
        self.pos += 1;

        if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
            return Err(VersionError::MalformedSegment {
                segment: segment.to_string(),
                position,
                version: self.input.to_string(),
            });
        }

        Ok(SegmentValue(segment.trim_start_matches('0')))
    }
}

//! An empirical probability mass function over run lengths, where lengths are
//! grouped into buckets such as "1", "4-5" or "51-100".

use super::model::{check_length, LengthModel};
use crate::{ConfigError, Error};
use std::fmt;
use std::ops::RangeInclusive;

/// A range of run lengths that share a single probability.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bucket {
    pub start: usize,
    pub end: usize,
    pub probability: f64,
}

impl Bucket {
    /// Parse a label of the form "N" or "N-M".
    pub fn parse(label: &str, probability: f64) -> Result<Self, ConfigError> {
        let bad =
            || ConfigError::Bucket(format!("malformed bucket '{}'", label));
        let parse_num = |s: &str| s.trim().parse::<usize>().map_err(|_| bad());
        let (start, end) = match label.split_once('-') {
            Some((a, b)) => (parse_num(a)?, parse_num(b)?),
            None => {
                let n = parse_num(label)?;
                (n, n)
            }
        };
        Self::new(start..=end, probability)
    }

    pub fn new(
        lengths: RangeInclusive<usize>,
        probability: f64,
    ) -> Result<Self, ConfigError> {
        let (start, end) = lengths.into_inner();
        if start == 0 || start > end {
            return Err(ConfigError::Bucket(format!(
                "empty or invalid range {}-{}",
                start, end
            )));
        }
        if !(0.0..=1.0).contains(&probability) {
            return Err(ConfigError::Bucket(format!(
                "probability {} of bucket {}-{} is not in [0, 1]",
                probability, start, end
            )));
        }
        Ok(Self {
            start,
            end,
            probability,
        })
    }

    pub fn contains(&self, length: usize) -> bool {
        self.start <= length && length <= self.end
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// A set of non-overlapping buckets, sorted by their range.
#[derive(Debug, Clone, PartialEq)]
pub struct BucketTable {
    buckets: Vec<Bucket>,
}

impl BucketTable {
    /// Build a table from 'buckets', given in any order. Overlapping buckets
    /// are rejected.
    pub fn new(mut buckets: Vec<Bucket>) -> Result<Self, ConfigError> {
        buckets.sort_by_key(|b| b.start);
        for pair in buckets.windows(2) {
            if pair[1].start <= pair[0].end {
                return Err(ConfigError::Bucket(format!(
                    "buckets {} and {} overlap",
                    pair[0], pair[1]
                )));
            }
        }
        Ok(Self { buckets })
    }

    /// Build a table from (label, probability) pairs.
    pub fn from_labels<'a, I>(labels: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let buckets = labels
            .into_iter()
            .map(|(label, p)| Bucket::parse(label, p))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(buckets)
    }

    /// Returns the bucket that contains 'length', if any.
    pub fn find(&self, length: usize) -> Option<&Bucket> {
        // The buckets are sorted and disjoint, so their ends are sorted too.
        let idx = self.buckets.partition_point(|b| b.end < length);
        self.buckets.get(idx).filter(|b| b.contains(length))
    }

    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    /// Returns the sum of the probabilities of all buckets.
    pub fn total(&self) -> f64 {
        self.buckets.iter().map(|b| b.probability).sum()
    }
}

impl LengthModel for BucketTable {
    fn probability(&self, length: usize) -> Result<f64, Error> {
        check_length(length)?;
        self.find(length)
            .map(|b| b.probability)
            .ok_or(Error::OutOfRangeRunLength(length))
    }
}

#[test]
fn test_bucket_parse() {
    let b = Bucket::parse("4-5", 0.25).unwrap();
    assert_eq!((b.start, b.end), (4, 5));
    assert_eq!(b.to_string(), "4-5");
    let b = Bucket::parse("7", 0.5).unwrap();
    assert_eq!((b.start, b.end), (7, 7));
    assert_eq!(b.to_string(), "7");

    assert!(Bucket::parse("0", 0.5).is_err());
    assert!(Bucket::parse("5-4", 0.5).is_err());
    assert!(Bucket::parse("a-4", 0.5).is_err());
    assert!(Bucket::parse("3", 1.5).is_err());
    assert!(Bucket::parse("3", f64::NAN).is_err());
}

#[test]
fn test_overlap() {
    assert!(BucketTable::from_labels([("1-3", 0.5), ("3-4", 0.5)]).is_err());
    let table = BucketTable::from_labels([("5-9", 0.5), ("1-4", 0.5)]).unwrap();
    assert_eq!(table.buckets()[0].start, 1);
    assert_eq!(table.find(4).map(|b| b.end), Some(4));
    assert_eq!(table.find(5).map(|b| b.end), Some(9));
    assert!(table.find(10).is_none());
}

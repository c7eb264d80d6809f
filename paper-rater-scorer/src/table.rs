//! Weighted keyword tables.
//!
//! A [`RatingTable`] maps signed weights to the keywords that earn them.
//! Buckets are kept in ascending weight order regardless of how they were
//! declared, because both matching strategies depend on traversal order:
//! best-of matching walks upwards, phrase accumulation walks downwards.
#![forbid(unsafe_code)]

use paper_rater_core::KeywordGroup;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::TableError;

/// Largest accepted weight magnitude.
///
/// Buckets weighted beyond this in either direction are rejected when a table
/// is built, which keeps summed ratings finite.
pub const MAX_WEIGHT: f64 = 1.0e6;

/// One weight and the keywords (or keyword groups) that earn it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bucket<T> {
    /// Signed weight; negative values penalise a match.
    pub weight: f64,
    /// Entries that earn `weight` when matched.
    pub keywords: Vec<T>,
}

/// An entry that may appear in a [`RatingTable`] bucket.
pub trait TableEntry {
    /// Check the entry can take part in matching.
    ///
    /// # Errors
    /// Returns [`TableError`] describing why the entry is unusable.
    fn validate(&self, weight: f64) -> Result<(), TableError>;
}

impl TableEntry for String {
    fn validate(&self, weight: f64) -> Result<(), TableError> {
        if self.trim().is_empty() {
            return Err(TableError::EmptyKeyword { weight });
        }
        Ok(())
    }
}

impl TableEntry for KeywordGroup {
    fn validate(&self, weight: f64) -> Result<(), TableError> {
        if self.is_empty() {
            return Err(TableError::EmptyGroup { weight });
        }
        self.iter().try_for_each(|keyword| keyword.validate(weight))
    }
}

/// Ordered mapping from weight to match targets.
///
/// Buckets that declare the same weight are merged, keeping declaration
/// order, so a weight behaves like a key.
///
/// # Examples
/// ```
/// use paper_rater_scorer::FlatTable;
///
/// # fn main() -> Result<(), paper_rater_scorer::TableError> {
/// let table = FlatTable::from_buckets([
///     (1.0, vec!["APSIPA".to_owned()]),
///     (0.5, vec!["ICASSP".to_owned()]),
///     (1.0, vec!["WACV".to_owned()]),
/// ])?;
/// let weights: Vec<f64> = table.ascending().map(|bucket| bucket.weight).collect();
/// assert_eq!(weights, [0.5, 1.0]);
/// assert_eq!(table.keyword_count(), 3);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RatingTable<T> {
    buckets: Vec<Bucket<T>>,
}

/// Single keywords per entry; used for best-of dimensions.
pub type FlatTable = RatingTable<String>;

/// Keyword groups per entry; used for the accumulating phrase dimension.
pub type GroupedTable = RatingTable<KeywordGroup>;

impl<T> Default for RatingTable<T> {
    fn default() -> Self {
        Self {
            buckets: Vec::new(),
        }
    }
}

impl<T: TableEntry> RatingTable<T> {
    /// Validate and order `(weight, entries)` pairs.
    ///
    /// # Errors
    /// Returns [`TableError`] when a weight is not finite, exceeds
    /// [`MAX_WEIGHT`] in magnitude, or an entry is empty.
    pub fn from_buckets<I>(buckets: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (f64, Vec<T>)>,
    {
        let mut validated = buckets
            .into_iter()
            .map(|(weight, keywords)| validate_bucket(Bucket { weight, keywords }))
            .collect::<Result<Vec<_>, _>>()?;
        validated.sort_by(|left, right| left.weight.total_cmp(&right.weight));

        let mut merged: Vec<Bucket<T>> = Vec::with_capacity(validated.len());
        for bucket in validated {
            match merged.last_mut() {
                Some(last) if last.weight.total_cmp(&bucket.weight).is_eq() => {
                    last.keywords.extend(bucket.keywords);
                }
                _ => merged.push(bucket),
            }
        }
        Ok(Self { buckets: merged })
    }
}

impl<T> RatingTable<T> {
    /// Build a table from buckets already in ascending, de-duplicated order.
    pub(crate) const fn from_sorted(buckets: Vec<Bucket<T>>) -> Self {
        Self { buckets }
    }

    /// Iterate buckets from the lowest weight to the highest.
    pub fn ascending(&self) -> impl DoubleEndedIterator<Item = &Bucket<T>> {
        self.buckets.iter()
    }

    /// Iterate buckets from the highest weight to the lowest.
    pub fn descending(&self) -> impl Iterator<Item = &Bucket<T>> {
        self.buckets.iter().rev()
    }

    /// Total number of entries across all buckets.
    #[must_use]
    pub fn keyword_count(&self) -> usize {
        self.buckets.iter().map(|bucket| bucket.keywords.len()).sum()
    }
}

fn validate_bucket<T: TableEntry>(bucket: Bucket<T>) -> Result<Bucket<T>, TableError> {
    if !bucket.weight.is_finite() {
        return Err(TableError::NonFiniteWeight {
            weight: bucket.weight,
        });
    }
    if bucket.weight.abs() > MAX_WEIGHT {
        return Err(TableError::WeightOutOfRange {
            weight: bucket.weight,
            limit: MAX_WEIGHT,
        });
    }
    bucket
        .keywords
        .iter()
        .try_for_each(|entry| entry.validate(bucket.weight))?;
    Ok(bucket)
}

impl<T: Serialize> Serialize for RatingTable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.buckets.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for RatingTable<T>
where
    T: Deserialize<'de> + TableEntry,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let buckets = Vec::<Bucket<T>>::deserialize(deserializer)?;
        Self::from_buckets(
            buckets
                .into_iter()
                .map(|bucket| (bucket.weight, bucket.keywords)),
        )
        .map_err(serde::de::Error::custom)
    }
}

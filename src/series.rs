use std::slice;

use crate::error::EmptyInputError;

/// Number of reading slots reserved by [`ReadingSeries::new`]
pub const DEFAULT_CAPACITY: usize = 5;

/// An ordered, growable series of readings taken at one location
///
/// The [`Self::new`] constructor creates an empty series under a label.
/// Readings are then appended with [`Self::push`], and can be summarised at any time
/// with [`Self::average`] and [`Self::count_above`].
///
/// Readings keep their insertion order until [`Self::sort`] is called.
/// There is no way to remove a reading: the series only ever grows.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadingSeries {
    /// Free-form name of the place the readings came from
    ///
    /// May be empty, and must not contain line breaks if the series is going to be serialized
    label: String,

    /// Readings, in insertion order (or ascending, after a sort)
    ///
    /// Growth is driven by [`Self::push`], which doubles the capacity whenever it runs out
    values: Vec<f32>,
}

impl ReadingSeries {
    /// Constructs an empty series with room for [`DEFAULT_CAPACITY`] readings
    pub fn new(label: impl Into<String>) -> Self {
        Self::with_capacity(label, DEFAULT_CAPACITY)
    }

    /// Constructs an empty series with room for `capacity` readings
    ///
    /// The capacity is only a hint: the series grows on demand, and a capacity of zero is fine.
    pub fn with_capacity(label: impl Into<String>, capacity: usize) -> Self {
        Self {
            label: label.into(),
            values: Vec::with_capacity(capacity),
        }
    }

    /// Constructs a series from a label and an existing batch of readings, kept in order
    pub fn from_readings(label: impl Into<String>, readings: impl IntoIterator<Item = f32>) -> Self {
        let readings = readings.into_iter();
        let mut series = Self::with_capacity(label, readings.size_hint().0);
        series.extend(readings);
        series
    }

    /// Label of the location the readings belong to
    pub fn label(&self) -> &str {
        &self.label
    }

    /// All readings, in their current order
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Total number of readings collected so far
    pub fn count(&self) -> usize {
        self.values.len()
    }

    /// Whether the series holds no readings
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of readings the series can hold before it has to grow again
    pub fn capacity(&self) -> usize {
        self.values.capacity()
    }

    /// Iterates over the readings in their current order
    pub fn iter(&self) -> slice::Iter<'_, f32> {
        self.values.iter()
    }

    /// Appends a reading to the end of the series
    ///
    /// If the series is full, its storage is doubled first.
    /// Existing readings keep their values and positions.
    pub fn push(&mut self, value: f32) {
        if self.values.len() == self.values.capacity() {
            self.grow();
        }

        self.values.push(value);
    }

    fn grow(&mut self) {
        let old_capacity = self.values.capacity();

        // A zero-capacity series has nothing to double, so start at one slot
        self.values.reserve_exact(old_capacity.max(1));

        #[cfg(feature = "log")]
        log::trace!(
            "Grew series {:?} from {} to {} slots",
            self.label,
            old_capacity,
            self.values.capacity()
        );
    }

    /// Sorts the readings in ascending order, in place
    ///
    /// NaN readings, if any, end up last.
    pub fn sort(&mut self) {
        self.values.sort_unstable_by(f32::total_cmp);
    }

    /// Number of readings strictly greater than `threshold`
    pub fn count_above(&self, threshold: f32) -> usize {
        self.values.iter().filter(|&&v| v > threshold).count()
    }

    /// Arithmetic mean of the readings
    ///
    /// Fails with [`EmptyInputError`] if there are no readings.
    pub fn average(&self) -> Result<f32, EmptyInputError> {
        mean(&self.values)
    }
}

impl Extend<f32> for ReadingSeries {
    fn extend<I: IntoIterator<Item = f32>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a> IntoIterator for &'a ReadingSeries {
    type Item = &'a f32;
    type IntoIter = slice::Iter<'a, f32>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Arithmetic mean of a slice of readings
///
/// The sum is accumulated in `f64`.
/// Fails with [`EmptyInputError`] if the slice is empty.
pub fn mean(values: &[f32]) -> Result<f32, EmptyInputError> {
    if values.is_empty() {
        return Err(EmptyInputError);
    }

    let sum: f64 = values.iter().map(|&v| f64::from(v)).sum();
    Ok((sum / values.len() as f64) as f32)
}

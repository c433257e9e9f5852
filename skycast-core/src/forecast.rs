//! Slicing of the 3-hour forecast series
//!
//! The provider returns up to 40 samples, 8 per day. The hourly strip is the
//! next 24 hours; the daily list picks the same local hour from each day.

/// Samples shown in the hourly strip
pub const HOURLY_SAMPLES: usize = 8;

/// 24h / 3h
pub const SAMPLES_PER_DAY: usize = 8;

/// Index of the first daily sample
pub const DAILY_OFFSET: usize = 7;

/// First [`HOURLY_SAMPLES`] entries (fewer if the series is short)
pub fn hourly_slice<T>(series: &[T]) -> &[T] {
    &series[..series.len().min(HOURLY_SAMPLES)]
}

/// Indices 7, 15, 23, … below `len`
pub fn daily_indices(len: usize) -> impl Iterator<Item = usize> {
    (DAILY_OFFSET..len).step_by(SAMPLES_PER_DAY)
}

/// One sample per day, starting at [`DAILY_OFFSET`]
pub fn daily_slice<T>(series: &[T]) -> impl Iterator<Item = &T> {
    series.iter().skip(DAILY_OFFSET).step_by(SAMPLES_PER_DAY)
}

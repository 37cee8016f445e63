//! Min/max over short sample arrays.

/// Smallest element of `values`.
///
/// # Panics
///
/// Panics if `values` is empty. Callers guarantee at least one sample.
pub fn minimum<T: Ord + Copy>(values: &[T]) -> T {
    let mut min = values[0];
    for &value in &values[1..] {
        if value < min {
            min = value;
        }
    }
    min
}

/// Largest element of `values`.
///
/// # Panics
///
/// Panics if `values` is empty. Callers guarantee at least one sample.
pub fn maximum<T: Ord + Copy>(values: &[T]) -> T {
    let mut max = values[0];
    for &value in &values[1..] {
        if value > max {
            max = value;
        }
    }
    max
}

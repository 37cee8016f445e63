/// Anything that can report the current wall clock as Unix seconds, e.g. an
/// SNTP client or an RTC.
pub trait TimeSource {
    /// Current epoch seconds, or 0 if the source has never been set.
    fn epoch_seconds(&self) -> u64;
}

/// A timestamp already read from a clock.
impl TimeSource for u64 {
    fn epoch_seconds(&self) -> u64 {
        *self
    }
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn epoch_seconds(&self) -> u64 {
        (**self).epoch_seconds()
    }
}

/// True once `source` has completed at least one synchronization.
///
/// Epoch 0 is the "never synced" sentinel; any later value counts as synced.
pub fn is_time_synced<T: TimeSource + ?Sized>(source: &T) -> bool {
    source.epoch_seconds() > 0
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedTime(u64);

    impl TimeSource for FixedTime {
        fn epoch_seconds(&self) -> u64 {
            self.0
        }
    }

    #[test]
    fn test_unsynced_source() {
        assert!(!is_time_synced(&FixedTime(0)));
    }

    #[test]
    fn test_synced_source() {
        assert!(is_time_synced(&FixedTime(1_700_000_000)));
        assert!(is_time_synced(&FixedTime(1)));
    }

    #[test]
    fn test_plain_timestamp() {
        assert!(!is_time_synced(&0u64));
        assert!(is_time_synced(&1_700_000_000u64));
    }

    #[test]
    fn test_through_reference_and_trait_object() {
        let source = FixedTime(1_700_000_000);
        let by_ref = &source;
        assert!(is_time_synced(&by_ref));

        let dynamic: &dyn TimeSource = &FixedTime(0);
        assert!(!is_time_synced(dynamic));
    }
}

// ABOUTME: Per-queue timing capture for the prepare and render phases
// ABOUTME: Buckets accumulate elapsed wall time and reset when read

use std::time::Duration;

/// Accumulated elapsed time for one queue, split by phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Profile {
    pub prepare: Duration,
    pub render: Duration,
}

impl Profile {
    /// Read both buckets and reset them to zero.
    pub fn take(&mut self) -> Profile {
        std::mem::take(self)
    }

    pub fn is_zero(&self) -> bool {
        self.prepare.is_zero() && self.render.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_resets() {
        let mut profile = Profile {
            prepare: Duration::from_millis(3),
            render: Duration::from_millis(5),
        };

        let taken = profile.take();

        assert_eq!(taken.prepare, Duration::from_millis(3));
        assert_eq!(taken.render, Duration::from_millis(5));
        assert!(profile.is_zero());
    }
}

//! Round countdown
//!
//! Frame deltas are fractional; the countdown moves in whole seconds. The
//! leftover fraction is carried between ticks so the clock never drifts.

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoundTimer {
    /// Seconds accumulated toward the next whole-second decrement
    pub accumulator: f32,
}

impl RoundTimer {
    /// Advance by `dt` seconds, decrementing `time_left` once per whole second.
    ///
    /// Returns true on the tick where `time_left` reaches zero.
    pub fn advance(&mut self, time_left: &mut u32, dt: f32) -> bool {
        if *time_left == 0 {
            return false;
        }
        self.accumulator += dt.max(0.0);
        while self.accumulator >= 1.0 {
            self.accumulator -= 1.0;
            *time_left = time_left.saturating_sub(1);
            if *time_left == 0 {
                self.accumulator = 0.0;
                return true;
            }
        }
        false
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_second_decrement() {
        let mut timer = RoundTimer::default();
        let mut left = 10;
        // 1/32 is exact in binary, 32 ticks = 1s
        for _ in 0..31 {
            assert!(!timer.advance(&mut left, 0.03125));
        }
        assert_eq!(left, 10);
        timer.advance(&mut left, 0.03125);
        assert_eq!(left, 9);
        assert_eq!(timer.accumulator, 0.0);
    }

    #[test]
    fn test_fraction_carries_over() {
        let mut timer = RoundTimer::default();
        let mut left = 10;
        timer.advance(&mut left, 0.75);
        timer.advance(&mut left, 0.5);
        assert_eq!(left, 9);
        assert!((timer.accumulator - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_expiry_reported_once() {
        let mut timer = RoundTimer::default();
        let mut left = 1;
        assert!(timer.advance(&mut left, 1.0));
        assert_eq!(left, 0);
        assert!(!timer.advance(&mut left, 1.0));
        assert_eq!(left, 0);
    }
}

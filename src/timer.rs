//! Re-arming the 64-bit machine timer comparator
//!
//! The timer and its comparator are 64 bits wide but only reachable as two
//! 32-bit halves. Programming a new deadline therefore takes several
//! register writes, and the comparator must never hold a value in the past
//! while they happen, otherwise it fires early.

/// The free running 64-bit timer and its comparator, as 32-bit halves
pub trait MachineTimer {
    fn time_low(&self) -> u32;

    fn time_high(&self) -> u32;

    fn set_compare_low(&mut self, low: u32);

    fn set_compare_high(&mut self, high: u32);
}

/// The processor status register gating global interrupt delivery.
/// Writing 0 disables all interrupts.
pub trait InterruptStatus {
    fn read(&self) -> u32;

    fn write(&mut self, status: u32);
}

/// Interrupts stay disabled for as long as this is alive
struct InterruptsDisabled<'a, S: InterruptStatus> {
    status: &'a mut S,
    saved: u32,
}

impl<'a, S: InterruptStatus> InterruptsDisabled<'a, S> {
    fn new(status: &'a mut S) -> Self {
        let saved = status.read();
        status.write(0);
        Self { status, saved }
    }
}

impl<S: InterruptStatus> Drop for InterruptsDisabled<'_, S> {
    fn drop(&mut self) {
        self.status.write(self.saved);
    }
}

/// Combine two 32-bit halves into a 64-bit time
pub const fn join(low: u32, high: u32) -> u64 {
    ((high as u64) << 32) | low as u64
}

/// Split a 64-bit time into its (low, high) halves
pub const fn split(time: u64) -> (u32, u32) {
    (time as u32, (time >> 32) as u32)
}

/// Point in time `count` ticks after `now`. Wraps at 2^64.
pub const fn deadline(now: u64, count: u32) -> u64 {
    now.wrapping_add(count as u64)
}

/// Program the comparator to fire `count` ticks from now.
///
/// Runs with interrupts disabled. The comparator low half is parked at
/// `u32::MAX` before the high half is written, so no intermediate
/// comparator value lies in the past.
pub fn advance<T, S>(timer: &mut T, status: &mut S, count: u32)
where
    T: MachineTimer,
    S: InterruptStatus,
{
    let _masked = InterruptsDisabled::new(status);

    let low = timer.time_low();
    let high = timer.time_high();
    let (low, high) = split(deadline(join(low, high), count));

    timer.set_compare_low(u32::MAX);
    timer.set_compare_high(high);
    timer.set_compare_low(low);
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Access {
        ReadTimeLow,
        ReadTimeHigh,
        CompareLow(u32),
        CompareHigh(u32),
        ReadStatus,
        WriteStatus(u32),
    }

    type Log = Rc<RefCell<Vec<Access>>>;

    struct MockTimer {
        now: u64,
        log: Log,
    }

    impl MachineTimer for MockTimer {
        fn time_low(&self) -> u32 {
            self.log.borrow_mut().push(Access::ReadTimeLow);
            self.now as u32
        }

        fn time_high(&self) -> u32 {
            self.log.borrow_mut().push(Access::ReadTimeHigh);
            (self.now >> 32) as u32
        }

        fn set_compare_low(&mut self, low: u32) {
            self.log.borrow_mut().push(Access::CompareLow(low));
        }

        fn set_compare_high(&mut self, high: u32) {
            self.log.borrow_mut().push(Access::CompareHigh(high));
        }
    }

    struct MockStatus {
        value: u32,
        log: Log,
    }

    impl InterruptStatus for MockStatus {
        fn read(&self) -> u32 {
            self.log.borrow_mut().push(Access::ReadStatus);
            self.value
        }

        fn write(&mut self, status: u32) {
            self.log.borrow_mut().push(Access::WriteStatus(status));
            self.value = status;
        }
    }

    fn run(now: u64, count: u32) -> Vec<Access> {
        let log = Log::default();
        let mut timer = MockTimer {
            now,
            log: log.clone(),
        };
        let mut status = MockStatus {
            value: 0x88,
            log: log.clone(),
        };
        advance(&mut timer, &mut status, count);
        assert_eq!(status.value, 0x88);
        let accesses = log.borrow().clone();
        accesses
    }

    #[test]
    fn test_register_sequence() {
        let accesses = run(0x0000_0001_FFFF_FF00, 0x200);
        assert_eq!(
            accesses,
            vec![
                Access::ReadStatus,
                Access::WriteStatus(0),
                Access::ReadTimeLow,
                Access::ReadTimeHigh,
                Access::CompareLow(u32::MAX),
                Access::CompareHigh(2),
                Access::CompareLow(0x100),
                Access::WriteStatus(0x88),
            ]
        );
    }

    #[test]
    fn test_deadline_wraps() {
        let accesses = run(u64::MAX - 9, 20);
        assert_eq!(accesses[5], Access::CompareHigh(0));
        assert_eq!(accesses[6], Access::CompareLow(10));
    }

    #[test]
    fn test_join_split() {
        assert_eq!(join(0xDEAD_BEEF, 0x1234_5678), 0x1234_5678_DEAD_BEEF);
        assert_eq!(split(0x1234_5678_DEAD_BEEF), (0xDEAD_BEEF, 0x1234_5678));
    }

    proptest! {
        #[test]
        fn prop_deadline_is_now_plus_count(now in any::<u64>(), count in any::<u32>()) {
            let accesses = run(now, count);
            let (low, high) = split(now.wrapping_add(count as u64));
            prop_assert_eq!(&accesses[4..7], &[
                Access::CompareLow(u32::MAX),
                Access::CompareHigh(high),
                Access::CompareLow(low),
            ]);
        }
    }
}

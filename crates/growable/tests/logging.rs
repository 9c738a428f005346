// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod logging_tests {
    use std::cell::RefCell;
    use std::string::{String, ToString};
    use std::sync::Once;
    use std::vec::Vec;

    use growable::GrowVec;
    use growable_test_utils::{CountingStrategy, StrategyBehaviour};
    use log::{Level, LevelFilter, Log, Metadata, Record};

    thread_local! {
        static RECORDS: RefCell<Vec<(Level, String, String)>> = const { RefCell::new(Vec::new()) };
    }

    /// Collects records on the emitting thread so parallel tests stay apart.
    struct CaptureLogger;

    impl Log for CaptureLogger {
        fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
            true
        }

        fn log(&self, record: &Record<'_>) {
            RECORDS.with(|records| {
                records.borrow_mut().push((
                    record.level(),
                    record.target().to_string(),
                    record.args().to_string(),
                ));
            });
        }

        fn flush(&self) {}
    }

    static LOGGER: CaptureLogger = CaptureLogger;
    static INSTALL: Once = Once::new();

    fn capture(run: impl FnOnce()) -> Vec<(Level, String)> {
        INSTALL.call_once(|| {
            log::set_logger(&LOGGER).expect("Failed to set_logger()");
            log::set_max_level(LevelFilter::Trace);
        });

        RECORDS.with(|records| records.borrow_mut().clear());
        run();

        RECORDS.with(|records| {
            records
                .borrow_mut()
                .drain(..)
                .filter(|(_, target, _)| target == "growable")
                .map(|(level, _, message)| (level, message))
                .collect()
        })
    }

    fn trace(message: &str) -> (Level, String) {
        (Level::Trace, message.to_string())
    }

    #[test]
    fn test_growth_logs_acquire_release_and_relocate() {
        let records = capture(|| {
            let mut vec = GrowVec::new();
            vec.push_back(1u32);
            vec.push_back(2u32);
            drop(vec);
        });

        assert_eq!(
            records,
            [
                trace("acquired 1 slots (4 bytes)"),
                trace("relocated: capacity 0 -> 1"),
                trace("acquired 2 slots (8 bytes)"),
                trace("released 1 slots (4 bytes)"),
                trace("relocated: capacity 1 -> 2"),
                trace("released 2 slots (8 bytes)"),
            ]
        );
    }

    #[test]
    fn test_shrink_to_fit_logs_relocation() {
        let records = capture(|| {
            let mut vec: GrowVec<u64> = GrowVec::with_capacity(4);
            vec.push_back(7);
            vec.shrink_to_fit();
            drop(vec);
        });

        assert_eq!(
            records,
            [
                trace("acquired 4 slots (32 bytes)"),
                trace("relocated: capacity 0 -> 4"),
                trace("acquired 1 slots (8 bytes)"),
                trace("released 4 slots (32 bytes)"),
                trace("relocated: capacity 4 -> 1"),
                trace("released 1 slots (8 bytes)"),
            ]
        );
    }

    #[test]
    fn test_allocation_failure_logs_at_debug() {
        let strategy = CountingStrategy::new();
        strategy.change_behaviour(StrategyBehaviour::FailAtAllocate);

        let records = capture(|| {
            let mut vec = GrowVec::new_in(strategy.clone());
            assert!(vec.try_push_back(1u32).is_err());
        });

        assert_eq!(
            records,
            [(
                Level::Debug,
                "failed to acquire 1 slots: allocation failed: 4 bytes, align 4".to_string()
            )]
        );
    }

    #[test]
    fn test_zero_sized_elements_never_acquire() {
        let records = capture(|| {
            let mut vec = GrowVec::new();
            for _ in 0..4 {
                vec.push_back(());
            }
            drop(vec);
        });

        assert_eq!(
            records,
            [
                trace("relocated: capacity 0 -> 1"),
                trace("relocated: capacity 1 -> 2"),
                trace("relocated: capacity 2 -> 4"),
            ]
        );
    }
}

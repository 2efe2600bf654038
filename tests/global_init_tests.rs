//! First use of the process-wide logger under contention
//!
//! Nothing else in this binary touches `logx::global`, so the threads
//! below are the ones that race to create it.

use logx::global;
use std::sync::{Arc, Barrier};
use std::thread;

const THREADS: usize = 32;

#[test]
fn test_concurrent_first_use_creates_one_logger() {
    let barrier = Arc::new(Barrier::new(THREADS));
    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                global::logger() as *const _ as usize
            })
        })
        .collect();

    let addresses: Vec<usize> = handles
        .into_iter()
        .map(|handle| handle.join().expect("thread panicked"))
        .collect();

    assert_eq!(addresses.len(), THREADS);
    assert!(addresses.windows(2).all(|pair| pair[0] == pair[1]));
    assert!(std::ptr::eq(
        addresses[0] as *const logx::Logger,
        global::logger()
    ));

    let logger = global::logger();
    assert_eq!(logger.caller_skip(), global::GLOBAL_CALLER_SKIP);
    assert!(format!("{:?}", logger).contains("stderr"));
}

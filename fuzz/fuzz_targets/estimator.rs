#![no_main]

use hll_estimator::HyperLogLog;
use libfuzzer_sys::fuzz_target;
use wyhash::wyhash;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let split_index = wyhash(data, 0) as usize % data.len();
    let (first_half, second_half) = data.split_at(split_index);

    let mut forward: HyperLogLog = HyperLogLog::with_precision(8).unwrap();
    for chunk in first_half.chunks(4).chain(second_half.chunks(4)) {
        let registers: Vec<u8> = (0..256).map(|idx| forward.register(idx).unwrap()).collect();
        forward.add(chunk);
        assert!(forward.count() > 0);
        for (idx, &before) in registers.iter().enumerate() {
            assert!(forward.register(idx).unwrap() >= before);
        }
    }

    let mut backward: HyperLogLog = HyperLogLog::with_precision(8).unwrap();
    for chunk in second_half.chunks(4).rev().chain(first_half.chunks(4).rev()) {
        backward.add(chunk);
    }

    assert_eq!(forward, backward);
    assert_eq!(forward.count(), backward.count());
});

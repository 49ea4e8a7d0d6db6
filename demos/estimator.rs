use hll_estimator::HyperLogLog;

fn main() -> Result<(), hll_estimator::Error> {
    let mut visitors: HyperLogLog = HyperLogLog::new(0.01)?;
    for i in 0..10_000u64 {
        // every visitor shows up three times
        let visitor = format!("visitor-{}", i.wrapping_mul(0x9e37_79b9_7f4a_7c15));
        for _ in 0..3 {
            visitors.add(&visitor);
        }
    }
    println!("registers = {}", visitors.register_count());
    println!("estimated visitors = {}", visitors.count());
    println!("estimator = {:?}", visitors);

    if let Err(e) = HyperLogLog::<hll_estimator::Fnv1Hasher>::new(0.05) {
        println!("rejected: {}", e);
    }
    Ok(())
}

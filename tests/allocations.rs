#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use hll_estimator::{HyperLogLog, RepresentationKind};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tabled::{
    settings::{Settings, Style},
    Table, Tabled,
};

#[derive(Tabled)]
struct Record {
    cardinality: usize,
    representation: String,
    estimate: usize,
    size_of: usize,
    heap_bytes: usize,
}

fn measure_memory_usage(cardinality: usize) -> Record {
    let mut rng = StdRng::seed_from_u64(cardinality as u64);
    let _profiler = dhat::Profiler::builder().testing().build();
    let mut hll: HyperLogLog = HyperLogLog::new(0.01).unwrap();
    for _ in 0..cardinality {
        hll.add(&rng.gen::<u64>().to_le_bytes());
    }
    let stats = dhat::HeapStats::get();
    Record {
        cardinality,
        representation: format!("{:?}", hll.representation()),
        estimate: hll.count(),
        size_of: hll.size_of(),
        heap_bytes: stats.curr_bytes,
    }
}

/// Register logging callsites before any heap profiling starts
fn warm_up() {
    let mut hll: HyperLogLog = HyperLogLog::new(0.01).unwrap();
    let mut rng = StdRng::seed_from_u64(0);
    while hll.representation() == RepresentationKind::Sparse {
        hll.add(&rng.gen::<u64>().to_le_bytes());
    }
}

#[test]
fn test_allocations() {
    warm_up();
    let results: Vec<Record> = std::iter::once(0)
        .chain((0..).map(|c| 1 << c))
        .take_while(|&c| c <= 1 << 16)
        .map(measure_memory_usage)
        .collect();

    for record in &results {
        if record.cardinality == 0 {
            assert_eq!(record.heap_bytes, 0);
        }
        if record.representation == format!("{:?}", RepresentationKind::Dense) {
            // 16384 one-byte registers
            assert_eq!(record.heap_bytes, 16384);
        } else {
            assert!(record.heap_bytes < 16384, "sparse uses {} bytes", record.heap_bytes);
        }
    }
    let last = results.last().unwrap();
    assert_eq!(last.representation, "Dense");

    let table_config = Settings::default().with(Style::markdown());
    let markdown = Table::new(results).with(table_config).to_string();
    println!("{}", markdown);
}

//! Performance benchmarks for dispatch_core using Criterion.rs.

use bevy_ecs::prelude::Entity;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dispatch_core::matching::{
    FirstAvailableMatching, MatchCandidate, MatchingAlgorithm, NearestDriverMatching,
};
use dispatch_core::scenario::{populate, random_destinations, FleetParams};
use dispatch_core::{DispatchRegistry, Location, RiderRegistry};

fn candidates(count: u32) -> Vec<MatchCandidate> {
    (0..count)
        .map(|i| MatchCandidate {
            driver_entity: Entity::from_raw(i + 1),
            registration_seq: u64::from(i),
            position: Location::new((i * 37 % 1000) as i32, (i * 91 % 1000) as i32),
        })
        .collect()
}

fn bench_matching_algorithms(c: &mut Criterion) {
    let rider_pos = Location::new(500, 500);

    let mut group = c.benchmark_group("matching_algorithms");
    for size in [100u32, 1_000] {
        let drivers = candidates(size);

        group.bench_with_input(BenchmarkId::new("nearest", size), &drivers, |b, drivers| {
            b.iter(|| black_box(NearestDriverMatching.find_match(rider_pos, drivers)));
        });
        group.bench_with_input(
            BenchmarkId::new("first_available", size),
            &drivers,
            |b, drivers| {
                b.iter(|| black_box(FirstAvailableMatching.find_match(rider_pos, drivers)));
            },
        );
    }
    group.finish();
}

fn bench_booking_cycle(c: &mut Criterion) {
    let scenarios = vec![("small", 50), ("medium", 200), ("large", 1_000)];

    let mut group = c.benchmark_group("book_end_cycle");
    for (name, drivers) in scenarios {
        let registry = DispatchRegistry::new();
        let params = FleetParams::default()
            .with_drivers(drivers)
            .with_riders(100)
            .with_grid_size(1_000)
            .with_seed(42);
        let fleet = populate(&registry, params).expect("fleet");
        let destinations = random_destinations(params, fleet.riders.len());

        group.bench_function(BenchmarkId::from_parameter(name), |b| {
            let mut next = 0usize;
            b.iter(|| {
                let i = next % fleet.riders.len();
                next += 1;
                let trip = registry
                    .book_cab(fleet.riders[i], destinations[i])
                    .expect("trip");
                black_box(registry.end_trip(trip.id).expect("end"));
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_matching_algorithms, bench_booking_cycle);
criterion_main!(benches);

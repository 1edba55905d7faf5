use criterion::{criterion_group, criterion_main, Criterion};
use std::sync::Arc;

use common::pagination::Pagination;
use service::cargo::domain::{CargoRequest, CargoSearchRequest, CargoStatus};
use service::cargo::filter::CargoFilterBuilder;
use service::cargo::repository::mock::MockCargoRepository;
use service::cargo::CargoService;
use service::vehicle::lookup::mock::MockVehicleLookup;

const STATUSES: [CargoStatus; 4] =
    [CargoStatus::Pending, CargoStatus::InTransit, CargoStatus::Delivered, CargoStatus::Cancelled];

fn search() -> CargoSearchRequest {
    CargoSearchRequest {
        description: Some("glass".into()),
        status: Some(CargoStatus::InTransit),
        min_weight: Some(100.0),
        max_weight: Some(5_000.0),
        vehicle_number: None,
    }
}

fn bench_filtered_page(c: &mut Criterion) {
    let vehicles = Arc::new(MockVehicleLookup::default());
    vehicles.insert("AA1111AA", "Volvo FH16");
    vehicles.insert("BB2222BB", "MAN TGX");
    let svc = CargoService::new(Arc::new(MockCargoRepository::default()), vehicles);

    // seed outside of the measured loop
    let rt = tokio::runtime::Runtime::new().unwrap();
    for i in 0..1_000u32 {
        let kind = if i % 3 == 0 { "glass" } else { "timber" };
        let number = if i % 2 == 0 { "AA1111AA" } else { "BB2222BB" };
        let req = CargoRequest {
            description: format!("{kind} lot {i}"),
            weight: f64::from(i * 10),
            status: STATUSES[(i % 4) as usize],
            vehicle_number: number.into(),
        };
        rt.block_on(svc.create(req)).unwrap();
    }

    c.bench_function("filter_build", |b| {
        let search = search();
        b.iter(|| CargoFilterBuilder.build(&search));
    });

    c.bench_function("cargo_filtered_page", |b| {
        let search = search();
        b.iter(|| rt.block_on(svc.get_paginated_filtered_list(Pagination::new(1, 20), &search)).unwrap());
    });
}

criterion_group!(benches, bench_filtered_page);
criterion_main!(benches);

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use mizan_ffi_c::{
    MizanRating, MizanRatingRequest, MizanStatus, MizanTransit, mizan_build_rating,
    mizan_build_rating_internal, mizan_hour_ruler_strength_internal,
};
use mizan_rating::{Element, Planet, RatingRequest, build_authentic_rating};

fn rating_bench(c: &mut Criterion) {
    let req = MizanRatingRequest {
        hour_planet: 4,
        hour_element: 2,
        user_element: 0,
        planet_strength: 77.0,
    };
    let rust_req = RatingRequest {
        hour_planet: Planet::Jupiter,
        hour_element: Element::Air,
        user_element: Element::Fire,
        planet_strength: 77.0,
    };

    let mut group = c.benchmark_group("ffi_rating");
    group.bench_function("rust_build_authentic_rating", |b| {
        b.iter(|| build_authentic_rating(black_box(&rust_req)))
    });
    group.bench_function("ffi_internal", |b| {
        b.iter(|| mizan_build_rating_internal(black_box(&req)))
    });
    group.bench_function("ffi_extern", |b| {
        b.iter(|| {
            let mut out = std::mem::MaybeUninit::<MizanRating>::uninit();
            // SAFETY: Request is a valid reference; output has room for one struct.
            let status = unsafe { mizan_build_rating(black_box(&req), out.as_mut_ptr()) };
            assert_eq!(status, MizanStatus::Ok);
        })
    });
    group.finish();
}

fn strength_bench(c: &mut Criterion) {
    let transits: Vec<MizanTransit> = (0..7)
        .map(|p| MizanTransit {
            planet: p,
            longitude_deg: 41.0 * p as f64,
            retrograde: u8::from(p % 3 == 0),
        })
        .collect();

    let mut group = c.benchmark_group("ffi_strength");
    group.bench_function("hour_ruler_strength_internal", |b| {
        b.iter(|| mizan_hour_ruler_strength_internal(black_box(6), black_box(&transits)))
    });
    group.finish();
}

criterion_group!(benches, rating_bench, strength_bench);
criterion_main!(benches);

use rand::SeedableRng;

use circle_scatter::model::Item;
use circle_scatter::{ScatterConfig, scatter};

fn items() -> Vec<Item<u32>> {
    (0..30)
        .map(|i| Item::new(i, 30.0 + (i % 4) as f32 * 20.0))
        .collect()
}

#[test]
fn same_seed_same_result() {
    let cfg = ScatterConfig::builder().with_canvas(360.0, 400.0).build();

    let mut rng1 = rand::rngs::StdRng::seed_from_u64(0xDEADBEEF);
    let r1 = scatter(items(), cfg.clone(), &mut rng1).expect("valid input");

    let mut rng2 = rand::rngs::StdRng::seed_from_u64(0xDEADBEEF);
    let r2 = scatter(items(), cfg, &mut rng2).expect("valid input");

    assert_eq!(r1, r2);
}

#[test]
fn different_seeds_usually_differ() {
    let cfg = ScatterConfig::builder().with_canvas(360.0, 400.0).build();

    let mut rng1 = rand::rngs::StdRng::seed_from_u64(1);
    let r1 = scatter(items(), cfg.clone(), &mut rng1).expect("valid input");

    let mut rng2 = rand::rngs::StdRng::seed_from_u64(2);
    let r2 = scatter(items(), cfg, &mut rng2).expect("valid input");

    // Not a guarantee in principle, but with 30 items over a 360x400 canvas
    // two independent streams matching coordinate-for-coordinate would mean
    // the generator is broken.
    assert_ne!(r1, r2);
}

#[test]
fn small_rng_also_works_as_source() {
    // The engine takes any rand generator, not just StdRng.
    let cfg = ScatterConfig::builder().with_canvas(360.0, 400.0).build();
    let mut rng = rand::rngs::SmallRng::seed_from_u64(5);
    let result = scatter(items(), cfg, &mut rng).expect("valid input");
    assert_eq!(result.len(), 30);
}

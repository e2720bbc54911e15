//! End-to-end behavior of the engine as a driver sees it: stamp, step,
//! read the exported buffer.

use std::collections::BTreeSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use toroidal_life::{Pattern, Universe, presets};

fn live_set(universe: &Universe) -> BTreeSet<(u32, u32)> {
    let width = universe.width();
    universe
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.is_alive())
        .map(|(idx, _)| (idx as u32 / width, idx as u32 % width))
        .collect()
}

fn shifted(cells: &[(u32, u32)], row: u32, col: u32) -> BTreeSet<(u32, u32)> {
    cells.iter().map(|&(r, c)| (r + row, c + col)).collect()
}

#[test]
fn glider_phase_sequence_matches_canon() {
    let mut universe = Universe::new(12, 12);
    universe.add_spaceship(4, 4);

    // Anchor-relative live sets for one full period of the glider.
    let phases: [&[(u32, u32)]; 5] = [
        &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
        &[(1, 0), (1, 2), (2, 1), (2, 2), (3, 1)],
        &[(1, 2), (2, 0), (2, 2), (3, 1), (3, 2)],
        &[(1, 1), (2, 2), (2, 3), (3, 1), (3, 2)],
        &[(1, 2), (2, 3), (3, 1), (3, 2), (3, 3)],
    ];

    assert_eq!(live_set(&universe), shifted(phases[0], 4, 4));
    for phase in &phases[1..] {
        universe.tick();
        assert_eq!(live_set(&universe), shifted(phase, 4, 4));
    }

    // Period 4: the final phase is the initial shape translated by (1, 1).
    assert_eq!(live_set(&universe), shifted(phases[0], 5, 5));
}

#[test]
fn glider_crosses_the_torus_and_returns() {
    let mut universe = Universe::new(8, 8);
    universe.add_spaceship(5, 5);
    let start = live_set(&universe);

    // 8 periods translate by (8, 8), which is the identity on an 8x8 torus.
    for _ in 0..32 {
        universe.tick();
    }
    assert_eq!(live_set(&universe), start);
    assert_eq!(universe.population(), 5);
}

#[test]
fn randomise_hits_the_documented_density() {
    let mut universe = Universe::new(128, 128);
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    universe.randomise_with(&mut rng);

    let fraction = universe.population() as f64 / (128.0 * 128.0);
    assert!(
        (0.45..=0.55).contains(&fraction),
        "live fraction {fraction} outside the 50% +/- 5% band"
    );
}

#[test]
fn randomise_is_reproducible_per_seed() {
    let mut first = Universe::new(64, 64);
    let mut second = Universe::new(64, 64);
    first.randomise_with(&mut ChaCha8Rng::seed_from_u64(3));
    second.randomise_with(&mut ChaCha8Rng::seed_from_u64(3));

    assert_eq!(first.cells(), second.cells());
}

#[test]
fn parsed_pattern_behaves_like_preset() {
    let text = ".O.\n..O\nOOO";
    let parsed = Pattern::from_plaintext("glider", text).unwrap();
    assert_eq!(parsed.cells, presets::glider().cells);

    let mut from_text = Universe::new(16, 16);
    let mut from_preset = Universe::new(16, 16);
    from_text.place_pattern(&parsed, 3, 3);
    from_preset.add_spaceship(3, 3);
    assert_eq!(from_text.cells(), from_preset.cells());
}

#[test]
fn driver_loop_reads_fresh_state_every_frame() {
    let mut universe = Universe::new(32, 32);
    universe.place_pattern(&presets::blinker(), 10, 10);

    // Render-loop cadence: read, step, read again.
    let before: Vec<u8> = universe.as_bytes().to_vec();
    universe.tick();
    let after: Vec<u8> = universe.as_bytes().to_vec();

    assert_ne!(before, after);
    assert_eq!(after.len(), 32 * 32);
    assert!(after.iter().all(|&byte| byte <= 1));
}

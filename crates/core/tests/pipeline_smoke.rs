use cavegen_core::ascii;
use cavegen_core::mapgen::{
    CaveGenerator, GenerationEvent, GenerationOutcome, GenerationParameters,
};
use cavegen_core::types::{Cell, Pos};

fn seeded(seed: u64) -> GenerationParameters {
    GenerationParameters {
        width: 64,
        height: 48,
        use_custom_seed: true,
        custom_seed: seed,
        ..GenerationParameters::default()
    }
}

#[test]
fn hostile_fill_probability_still_returns_a_usable_map_via_fallback() {
    let params = GenerationParameters {
        fill_probability: 0.95,
        max_regeneration_attempts: 0,
        min_floor_percentage: 0.9,
        ..seeded(404)
    };
    let cave = CaveGenerator::new(params).generate();

    assert_eq!(cave.outcome, GenerationOutcome::ExhaustedFallback);
    assert!(cave.floor_percentage() > 0.0, "fallback carve must open floor space");
    assert!(cave.events.contains(&GenerationEvent::FallbackApplied));
    assert!(
        cave.events
            .iter()
            .any(|event| matches!(event, GenerationEvent::AttemptRejected { .. })),
        "every failed attempt should be recorded before the fallback"
    );
}

#[test]
fn fallback_maps_still_get_endpoints() {
    let params = GenerationParameters {
        fill_probability: 0.95,
        max_regeneration_attempts: 0,
        min_floor_percentage: 0.9,
        ..seeded(405)
    };
    let cave = CaveGenerator::new(params).generate();
    assert!(cave.has_endpoints(), "the fallback layout has plenty of room for markers");
}

#[test]
fn endpoints_on_large_maps_are_well_separated() {
    let params = GenerationParameters { width: 100, height: 80, ..seeded(7) };
    let cave = CaveGenerator::new(params).generate();

    let (Some(start), Some(end)) = (cave.start, cave.end) else {
        panic!("a 100x80 default-parameter map should always place endpoints");
    };
    let dx = (start.x - end.x) as f64;
    let dy = (start.y - end.y) as f64;
    assert!(
        (dx * dx + dy * dy).sqrt() >= 30.0,
        "start {start:?} and end {end:?} should honor the separation heuristic"
    );
}

#[test]
fn saved_maps_round_trip_through_the_ascii_format() {
    let cave = CaveGenerator::new(seeded(11)).generate();
    let dir = tempfile::tempdir().expect("temp dir should be available");

    let path = ascii::save_to_dir(dir.path(), &cave).expect("map should save");
    assert_eq!(
        path.file_name().and_then(|name| name.to_str()),
        Some("cave_11.txt"),
        "filename should carry the generating seed"
    );

    let restored = ascii::load_from_file(&path).expect("saved map should load");
    assert_eq!(restored, cave.grid);
}

#[test]
fn successful_runs_place_exactly_one_start_and_one_end() {
    for seed in [1_u64, 2, 3, 40, 99, 321, 1_024, 999_999] {
        let cave = CaveGenerator::new(seeded(seed)).generate();
        if !cave.has_endpoints() {
            continue;
        }

        let mut starts = 0;
        let mut ends = 0;
        for y in 0..cave.grid.height() as i32 {
            for x in 0..cave.grid.width() as i32 {
                match cave.grid.cell_at(Pos { y, x }) {
                    Cell::Start => starts += 1,
                    Cell::End => ends += 1,
                    _ => {}
                }
            }
        }
        assert_eq!((starts, ends), (1, 1), "seed {seed} placed duplicate markers");
    }
}

#[test]
fn undersized_dimensions_are_floored_to_the_minimum_map_size() {
    let params = GenerationParameters { width: 3, height: 5, ..seeded(13) };
    let cave = CaveGenerator::new(params).generate();
    assert_eq!(cave.grid.width(), 10);
    assert_eq!(cave.grid.height(), 10);
}

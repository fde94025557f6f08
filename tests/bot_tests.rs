use broadside::{
    choose_move_kind, choose_target, decide_meaningful, meaningful_cell, random_anchor,
    random_cell, BotIntel, CellSet, CellState, Coord, Difficulty, Grid, Inventory, MoveKind,
    Target,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn at(row: usize, col: usize) -> Coord {
    Coord::new(row, col).unwrap()
}

fn miss(grid: &mut Grid, coord: Coord) {
    grid.put(coord, CellState::Miss).unwrap();
}

#[test]
fn a_fresh_hit_is_followed_up_downwards_first() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut intel = BotIntel::new(Difficulty::Hard);
    let mut grid = Grid::new();
    grid.put(at(5, 5), CellState::Hit).unwrap();
    intel.hits.insert(at(5, 5));

    assert_eq!(meaningful_cell(&mut intel, &grid, &mut rng), Some(at(6, 5)));
    miss(&mut grid, at(6, 5));
    assert_eq!(meaningful_cell(&mut intel, &grid, &mut rng), Some(at(4, 5)));
    miss(&mut grid, at(4, 5));
    miss(&mut grid, at(5, 4));
    assert_eq!(meaningful_cell(&mut intel, &grid, &mut rng), Some(at(5, 6)));
}

#[test]
fn exhausted_hits_are_dropped() {
    let mut rng = SmallRng::seed_from_u64(2);
    let mut intel = BotIntel::new(Difficulty::Hard);
    let mut grid = Grid::new();
    grid.put(at(5, 5), CellState::Hit).unwrap();
    intel.hits.insert(at(5, 5));
    for n in at(5, 5).neighbours() {
        miss(&mut grid, n);
    }
    // falls through to the first heuristic anchor
    assert_eq!(meaningful_cell(&mut intel, &grid, &mut rng), Some(at(0, 0)));
    assert!(intel.hits.is_empty());
}

#[test]
fn radar_contacts_take_priority() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut intel = BotIntel::new(Difficulty::Hard);
    let mut grid = Grid::new();
    grid.put(at(5, 5), CellState::Hit).unwrap();
    intel.hits.insert(at(5, 5));
    intel.found.insert(at(1, 1));
    intel.found.insert(at(7, 7));
    miss(&mut grid, at(1, 1));

    assert_eq!(meaningful_cell(&mut intel, &grid, &mut rng), Some(at(7, 7)));
    assert!(intel.found.is_empty());
    assert_eq!(meaningful_cell(&mut intel, &grid, &mut rng), Some(at(6, 5)));
}

#[test]
fn heuristic_anchors_are_probed_in_order() {
    let mut rng = SmallRng::seed_from_u64(4);
    let mut intel = BotIntel::new(Difficulty::Hard);
    let mut grid = Grid::new();
    assert_eq!(meaningful_cell(&mut intel, &grid, &mut rng), Some(at(0, 0)));
    miss(&mut grid, at(0, 0));
    assert_eq!(meaningful_cell(&mut intel, &grid, &mut rng), Some(at(0, 4)));
    miss(&mut grid, at(0, 4));
    assert_eq!(meaningful_cell(&mut intel, &grid, &mut rng), Some(at(0, 9)));
}

#[test]
fn meaningful_targeting_never_repeats_a_resolved_cell() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut intel = BotIntel::new(Difficulty::Hard);
    let mut grid = Grid::new();
    grid.put(at(5, 5), CellState::Hit).unwrap();
    intel.hits.insert(at(5, 5));

    let mut seen = CellSet::new();
    while let Some(c) = meaningful_cell(&mut intel, &grid, &mut rng) {
        assert!(!grid.is_resolved(c), "picked resolved cell {}", c);
        assert!(seen.insert(c));
        miss(&mut grid, c);
    }
    assert_eq!(seen.len(), 99);
}

#[test]
fn random_cell_only_offers_unresolved_cells() {
    let mut rng = SmallRng::seed_from_u64(6);
    let mut grid = Grid::new();
    for c in Coord::all().filter(|&c| c != at(3, 7)) {
        miss(&mut grid, c);
    }
    for _ in 0..10 {
        assert_eq!(random_cell(&grid, &mut rng), Some(at(3, 7)));
    }
    miss(&mut grid, at(3, 7));
    assert_eq!(random_cell(&grid, &mut rng), None);
    assert!(random_anchor(&grid, &mut rng).is_anchor());
}

#[test]
fn heavy_moves_are_used_as_soon_as_available() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut inv = Inventory::new();
    inv.refresh(1);
    assert_eq!(choose_move_kind(&inv, &mut rng), MoveKind::Artillery);
    inv.consume(MoveKind::Artillery).unwrap();
    assert_eq!(choose_move_kind(&inv, &mut rng), MoveKind::SmokeScreen);
    inv.refresh(3);
    assert_eq!(choose_move_kind(&inv, &mut rng), MoveKind::Torpedo);
}

#[test]
fn light_moves_fall_back_to_fire_once_radar_is_spent() {
    let mut rng = SmallRng::seed_from_u64(8);
    let mut inv = Inventory::new();
    let mut saw_radar = false;
    for _ in 0..200 {
        let kind = choose_move_kind(&inv, &mut rng);
        assert!(matches!(kind, MoveKind::Fire | MoveKind::RadarSweep));
        saw_radar |= kind == MoveKind::RadarSweep;
    }
    assert!(saw_radar);

    for _ in 0..3 {
        inv.consume(MoveKind::RadarSweep).unwrap();
    }
    for _ in 0..50 {
        assert_eq!(choose_move_kind(&inv, &mut rng), MoveKind::Fire);
    }
}

#[test]
fn difficulty_sets_how_often_targeting_is_meaningful() {
    let mut rng = SmallRng::seed_from_u64(9);
    assert!((0..100).all(|_| decide_meaningful(Difficulty::Hard, &mut rng)));
    let easy: Vec<bool> = (0..200)
        .map(|_| decide_meaningful(Difficulty::Easy, &mut rng))
        .collect();
    assert!(easy.contains(&true));
    assert!(easy.contains(&false));
}

#[test]
fn block_moves_near_the_edge_are_clamped() {
    let mut rng = SmallRng::seed_from_u64(10);
    let mut intel = BotIntel::new(Difficulty::Hard);
    let mut grid = Grid::new();
    grid.put(at(9, 9), CellState::Hit).unwrap();
    intel.hits.insert(at(9, 9));
    let smoke = CellSet::new();

    // radar sweeps around the unswept hit
    let radar = choose_target(MoveKind::RadarSweep, true, &mut intel, &smoke, &grid, &mut rng);
    assert_eq!(radar, Target::Cell { row: 8, col: 8 });

    // artillery aims at the open neighbour (8, 9), clamped into range
    let artillery = choose_target(MoveKind::Artillery, true, &mut intel, &smoke, &grid, &mut rng);
    assert_eq!(artillery, Target::Cell { row: 8, col: 8 });

    intel.radared.insert(at(9, 9));
    match choose_target(MoveKind::RadarSweep, true, &mut intel, &smoke, &grid, &mut rng) {
        Target::Cell { row, col } => assert!(at(row, col).is_anchor()),
        other => panic!("unexpected radar target {:?}", other),
    }
}

#[test]
fn smoke_covers_the_first_unsmoked_own_ship() {
    let mut rng = SmallRng::seed_from_u64(11);
    let mut intel = BotIntel::new(Difficulty::Easy);
    for c in 5..10 {
        intel.own_ships.insert(at(9, c));
    }
    let grid = Grid::new();
    let mut smoke = CellSet::new();
    let first = choose_target(MoveKind::SmokeScreen, false, &mut intel, &smoke, &grid, &mut rng);
    assert_eq!(first, Target::Cell { row: 8, col: 5 });

    smoke.insert(at(9, 5));
    smoke.insert(at(9, 6));
    let next = choose_target(MoveKind::SmokeScreen, false, &mut intel, &smoke, &grid, &mut rng);
    assert_eq!(next, Target::Cell { row: 8, col: 7 });
}

#[test]
fn torpedo_runs_through_the_meaningful_cell() {
    let mut rng = SmallRng::seed_from_u64(12);
    let mut intel = BotIntel::new(Difficulty::Hard);
    let mut grid = Grid::new();
    grid.put(at(5, 5), CellState::Hit).unwrap();
    intel.hits.insert(at(5, 5));
    let smoke = CellSet::new();
    for _ in 0..20 {
        let t = choose_target(MoveKind::Torpedo, true, &mut intel, &smoke, &grid, &mut rng);
        assert!(
            t == Target::Row(6) || t == Target::Column(5),
            "unexpected torpedo target {:?}",
            t
        );
    }
}

#[test]
fn random_fire_avoids_resolved_cells() {
    let mut rng = SmallRng::seed_from_u64(13);
    let mut intel = BotIntel::new(Difficulty::Easy);
    let mut grid = Grid::new();
    for c in Coord::all().filter(|c| c.row() < 9) {
        miss(&mut grid, c);
    }
    let smoke = CellSet::new();
    for _ in 0..30 {
        match choose_target(MoveKind::Fire, false, &mut intel, &smoke, &grid, &mut rng) {
            Target::Cell { row, .. } => assert_eq!(row, 9),
            other => panic!("unexpected fire target {:?}", other),
        }
    }
}

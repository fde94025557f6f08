use broadside::{
    CellState, Coord, Difficulty, GameError, Orientation, Player, Roster, ShipClass, FLEET,
    TOTAL_SHIP_CELLS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn roster_starts_at_full_health() {
    let roster = Roster::new();
    for class in FLEET {
        assert_eq!(roster.ship(class).remaining_hits() as usize, class.size());
        assert!(!roster.ship(class).is_sunk());
    }
}

#[test]
fn hits_are_matched_by_size() {
    let mut roster = Roster::new();
    roster.apply_hit(ShipClass::Carrier);
    assert_eq!(roster.ship(ShipClass::Carrier).remaining_hits(), 4);
    assert_eq!(roster.ship(ShipClass::Battleship).remaining_hits(), 4);
    assert!(roster.sunk_just_now().is_empty());
}

#[test]
fn sinking_is_reported_exactly_once() {
    let mut roster = Roster::new();
    roster.apply_hit(ShipClass::Submarine);
    assert!(roster.sunk_just_now().is_empty());
    roster.apply_hit(ShipClass::Submarine);
    assert_eq!(roster.sunk_just_now(), vec![ShipClass::Submarine]);
    assert!(roster.sunk_just_now().is_empty());

    // a stray extra hit never re-reports or underflows
    roster.apply_hit(ShipClass::Submarine);
    assert_eq!(roster.ship(ShipClass::Submarine).remaining_hits(), 0);
    assert!(roster.sunk_just_now().is_empty());
}

#[test]
fn several_ships_can_sink_in_one_call() {
    let mut roster = Roster::new();
    for _ in 0..2 {
        roster.apply_hit(ShipClass::Submarine);
    }
    for _ in 0..3 {
        roster.apply_hit(ShipClass::Destroyer);
    }
    assert_eq!(
        roster.sunk_just_now(),
        vec![ShipClass::Submarine, ShipClass::Destroyer]
    );
    assert!(!roster.all_sunk());
}

#[test]
fn footprint_respects_grid_edges() {
    assert_eq!(
        ShipClass::Carrier
            .footprint(0, 6, Orientation::Horizontal)
            .unwrap_err(),
        GameError::ShipOutOfBounds
    );
    let cells = ShipClass::Carrier
        .footprint(5, 9, Orientation::Vertical)
        .unwrap();
    assert_eq!(cells.len(), 5);
    assert_eq!(cells[4], Coord::new(9, 9).unwrap());
}

#[test]
fn placement_writes_markers_and_rejects_conflicts() {
    let mut player = Player::human("A");
    player
        .place_ship(ShipClass::Carrier, 0, 0, Orientation::Horizontal)
        .unwrap();
    for c in 0..5 {
        assert_eq!(
            player.grid().get(0, c).unwrap(),
            CellState::Ship(ShipClass::Carrier)
        );
    }
    assert_eq!(
        player
            .place_ship(ShipClass::Carrier, 5, 0, Orientation::Horizontal)
            .unwrap_err(),
        GameError::ShipAlreadyPlaced(ShipClass::Carrier)
    );
    assert_eq!(
        player
            .place_ship(ShipClass::Battleship, 0, 2, Orientation::Vertical)
            .unwrap_err(),
        GameError::ShipOverlaps
    );
    assert_eq!(
        player
            .place_ship(ShipClass::Battleship, 7, 2, Orientation::Vertical)
            .unwrap_err(),
        GameError::ShipOutOfBounds
    );
    assert!(!player.fleet_ready());
}

#[test]
fn random_fleet_fills_fourteen_cells() {
    let mut rng = SmallRng::seed_from_u64(42);
    let mut bot = Player::bot("Bot", Difficulty::Hard);
    bot.place_fleet_randomly(&mut rng).unwrap();
    assert!(bot.fleet_ready());
    assert_eq!(bot.grid().ship_cells_remaining(), TOTAL_SHIP_CELLS);
    let own = bot.intel().unwrap().own_ships;
    assert_eq!(own.len(), TOTAL_SHIP_CELLS);
    for cell in own.iter() {
        assert!(matches!(bot.grid().at(cell), CellState::Ship(_)));
    }
}

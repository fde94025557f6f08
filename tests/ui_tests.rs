use broadside::ui::{self, DisplayMode};
use broadside::{
    resolve_move, settle_sinkings, GameError, GameStatus, Inventory, MoveKind, MoveOutcome,
    Order, Orientation, Player, Seat, ShipClass, Target, TurnReport,
};

fn row_line(rendered: &str, row: usize) -> &str {
    rendered.lines().nth(row + 1).unwrap()
}

fn shot_at_grid() -> Player {
    let mut attacker = Player::human("A");
    let mut defender = Player::human("D");
    defender
        .place_ship(ShipClass::Destroyer, 0, 1, Orientation::Horizontal)
        .unwrap();
    for col in [0, 1] {
        let order = Order::new(MoveKind::Fire, Target::Cell { row: 0, col });
        resolve_move(&mut attacker, &mut defender, order).unwrap();
    }
    defender
}

#[test]
fn tracking_view_hides_ships_and_shows_shots() {
    let defender = shot_at_grid();
    let easy = ui::render_tracking(defender.grid(), DisplayMode::Easy);
    assert_eq!(easy.lines().next().unwrap(), "   A B C D E F G H I J");
    assert_eq!(row_line(&easy, 0), " 1 o * ~ ~ ~ ~ ~ ~ ~ ~");
    assert_eq!(row_line(&easy, 9), "10 ~ ~ ~ ~ ~ ~ ~ ~ ~ ~");
}

#[test]
fn hard_mode_hides_misses() {
    let defender = shot_at_grid();
    let hard = ui::render_tracking(defender.grid(), DisplayMode::Hard);
    assert_eq!(row_line(&hard, 0), " 1 ~ * ~ ~ ~ ~ ~ ~ ~ ~");
}

#[test]
fn own_view_shows_ships_and_smoke() {
    let mut defender = shot_at_grid();
    assert_eq!(row_line(&ui::render_own(&defender), 0), " 1 o * 3 3 ~ ~ ~ ~ ~ ~");

    let mut other = Player::human("X");
    defender.inventory_mut().refresh(1);
    let smoke = Order::new(MoveKind::SmokeScreen, Target::Cell { row: 0, col: 2 });
    resolve_move(&mut defender, &mut other, smoke).unwrap();

    let own = ui::render_own(&defender);
    assert_eq!(row_line(&own, 0), " 1 o * # # ~ ~ ~ ~ ~ ~");
    assert!(own.contains("destroyer (3): afloat"));
}

#[test]
fn move_menu_lists_only_charged_moves() {
    let mut inv = Inventory::new();
    let menu = ui::render_moves(&inv);
    assert!(menu.contains("[0] FIRE (unlimited left)"));
    assert!(menu.contains("[1] RADAR SWEEP (3 left)"));
    assert!(!menu.contains("SMOKE SCREEN"));

    inv.refresh(1);
    let menu = ui::render_moves(&inv);
    assert!(menu.contains("[2] SMOKE SCREEN (1 left)"));
    assert!(menu.contains("[3] ARTILLERY (1 left)"));
    assert!(!menu.contains("TORPEDO"));
}

#[test]
fn turn_summary_names_sinkings_and_the_winner() {
    let mut a = Player::human("Alice");
    let mut d = Player::human("Bob");
    d.place_ship(ShipClass::Submarine, 0, 0, Orientation::Vertical)
        .unwrap();
    for row in [0, 1] {
        let order = Order::new(MoveKind::Fire, Target::Cell { row, col: 0 });
        resolve_move(&mut a, &mut d, order).unwrap();
    }
    let sunk = settle_sinkings(&mut a, &mut d);

    let report = TurnReport {
        seat: Seat::First,
        kind: Some(MoveKind::Fire),
        target: Some(Target::Cell { row: 1, col: 0 }),
        result: Ok(MoveOutcome::Hit),
        sunk,
        expired: vec![MoveKind::Artillery],
        status: GameStatus::Finished {
            winner: Seat::First,
        },
    };
    let text = ui::describe_turn(&report, &a, &d);
    assert!(text.starts_with("Alice used FIRE at A2: hit!"));
    assert!(text.contains("Alice's last ARTILLERY charge expired."));
    assert!(text.contains("One of Bob's ships, a submarine, has been sunk!"));
    assert!(text.contains("All of Bob's ships have been sunk! Alice wins."));
}

#[test]
fn forfeits_are_explained() {
    let a = Player::human("Alice");
    let d = Player::human("Bob");
    let report = TurnReport {
        seat: Seat::First,
        kind: Some(MoveKind::Torpedo),
        target: None,
        result: Err(GameError::NoMovesAvailable(MoveKind::Torpedo)),
        sunk: Vec::new(),
        expired: Vec::new(),
        status: GameStatus::InProgress,
    };
    assert_eq!(
        ui::describe_turn(&report, &a, &d),
        "Alice has no TORPEDO move available and loses the turn."
    );
}

use broadside::{BotCommander, Commander, Difficulty, Game, GameStatus, MoveKind, Player, Seat};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

/// Guard against a stalled match; a real game ends well before this.
const TURN_LIMIT: u32 = 1_000;

fn parse_difficulty(arg: Option<&String>) -> anyhow::Result<Difficulty> {
    match arg.map(|s| s.to_ascii_lowercase()).as_deref() {
        None | Some("hard") => Ok(Difficulty::Hard),
        Some("medium") => Ok(Difficulty::Medium),
        Some("easy") => Ok(Difficulty::Easy),
        Some(other) => Err(anyhow::anyhow!("unknown difficulty '{}'", other)),
    }
}

fn main() -> anyhow::Result<()> {
    broadside::init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 4 {
        eprintln!("Usage: {} <seed> [difficulty1] [difficulty2]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let first_level = parse_difficulty(args.get(2))?;
    let second_level = parse_difficulty(args.get(3))?;

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut bots = BotCommander::new();

    let mut first = Player::bot("player1", first_level);
    let mut second = Player::bot("player2", second_level);
    bots.place_fleet(&mut rng, &mut first)?;
    bots.place_fleet(&mut rng, &mut second)?;

    let mut game = Game::random_start(first, second, &mut rng);
    let starting = game.current();
    let mut used = [[0u32; 5]; 2];
    let mut forfeits = [0u32; 2];

    while game.status() == GameStatus::InProgress && game.turns() < TURN_LIMIT {
        let report = game.take_turn(&mut bots, &mut rng)?;
        let seat = report.seat.index();
        match (report.kind, report.forfeited()) {
            (Some(kind), false) => used[seat][kind.index()] += 1,
            _ => forfeits[seat] += 1,
        }
    }

    let winner = match game.status() {
        GameStatus::Finished { winner } => Some(game.player(winner).name().to_string()),
        GameStatus::InProgress => None,
    };

    let seat_summary = |seat: Seat| {
        let player = game.player(seat);
        let moves: serde_json::Map<String, serde_json::Value> = MoveKind::ALL
            .iter()
            .map(|k| (k.name().to_string(), json!(used[seat.index()][k.index()])))
            .collect();
        json!({
            "ships_sunk": player.ships_sunk(),
            "forfeits": forfeits[seat.index()],
            "moves": moves,
        })
    };

    let result = json!({
        "seed": seed,
        "starting": game.player(starting).name(),
        "turns": game.turns(),
        "player1": seat_summary(Seat::First),
        "player2": seat_summary(Seat::Second),
        "winner": winner,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}

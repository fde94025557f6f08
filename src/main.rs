use broadside::{
    init_logging,
    ui::{self, DisplayMode},
    BotCommander, CliCommander, Commander, Difficulty, Game, GameStatus, Player, Seat,
};

use clap::{Parser, ValueEnum};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Mode {
    /// Misses are marked on the tracking grid.
    Easy,
    /// Misses are hidden on the tracking grid.
    Hard,
}

impl From<Mode> for DisplayMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Easy => DisplayMode::Easy,
            Mode::Hard => DisplayMode::Hard,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum BotLevel {
    Easy,
    Medium,
    Hard,
}

impl From<BotLevel> for Difficulty {
    fn from(level: BotLevel) -> Self {
        match level {
            BotLevel::Easy => Difficulty::Easy,
            BotLevel::Medium => Difficulty::Medium,
            BotLevel::Hard => Difficulty::Hard,
        }
    }
}

#[derive(Parser)]
enum Commands {
    /// Play against a bot on the local machine.
    Bot {
        #[arg(long, default_value = "Player")]
        name: String,
        #[arg(long, value_enum, default_value_t = BotLevel::Medium)]
        difficulty: BotLevel,
        #[arg(long, value_enum, default_value_t = Mode::Easy)]
        mode: Mode,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Two humans sharing one terminal.
    Hotseat {
        #[arg(long, default_value = "Player1")]
        first: String,
        #[arg(long, default_value = "Player2")]
        second: String,
        #[arg(long, value_enum, default_value_t = Mode::Easy)]
        mode: Mode,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Watch two bots play each other.
    Watch {
        #[arg(long, value_enum, default_value_t = BotLevel::Hard)]
        first: BotLevel,
        #[arg(long, value_enum, default_value_t = BotLevel::Hard)]
        second: BotLevel,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

/// Which commander drives which seat. Hot-seat humans share one terminal
/// reader.
enum Seating<'a> {
    Split(&'a mut dyn Commander, &'a mut dyn Commander),
    Shared(&'a mut dyn Commander),
}

impl<'a> Seating<'a> {
    fn get(&mut self, seat: Seat) -> &mut (dyn Commander + 'a) {
        match self {
            Seating::Split(first, second) => match seat {
                Seat::First => &mut **first,
                Seat::Second => &mut **second,
            },
            Seating::Shared(commander) => &mut **commander,
        }
    }
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn setup(
    mut seating: Seating<'_>,
    mut first: Player,
    mut second: Player,
    rng: &mut SmallRng,
    mode: DisplayMode,
) -> anyhow::Result<()> {
    println!("Placing {}'s ships:", first.name());
    seating.get(Seat::First).place_fleet(rng, &mut first)?;
    println!("Placing {}'s ships:", second.name());
    seating.get(Seat::Second).place_fleet(rng, &mut second)?;

    let mut game = Game::random_start(first, second, rng);
    println!("{} will start!", game.player(game.current()).name());

    while game.status() == GameStatus::InProgress {
        let seat = game.current();
        let report = game.take_turn(seating.get(seat), rng)?;
        let actor = game.player(seat);
        let opponent = game.player(seat.other());
        println!("\n{}", ui::describe_turn(&report, actor, opponent));
        if !actor.is_bot() && !report.forfeited() {
            println!(
                "\n{}'s updated grid:\n{}",
                opponent.name(),
                ui::render_tracking(opponent.grid(), mode)
            );
        }
    }

    if let GameStatus::Finished { winner } = game.status() {
        println!(
            "\nGame over after {} turns. {} wins!",
            game.turns(),
            game.player(winner).name()
        );
        for seat in [Seat::First, Seat::Second] {
            println!("\n{}'s fleet:\n{}", game.player(seat).name(), ui::render_own(game.player(seat)));
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Bot {
            name,
            difficulty,
            mode,
            seed,
        } => {
            let mut rng = make_rng(seed);
            let mode = DisplayMode::from(mode);
            let mut human = CliCommander::stdio(mode);
            let mut bot = BotCommander::new();
            setup(
                Seating::Split(&mut human, &mut bot),
                Player::human(name),
                Player::bot("Bot", difficulty.into()),
                &mut rng,
                mode,
            )?;
        }
        Commands::Hotseat {
            first,
            second,
            mode,
            seed,
        } => {
            let mut rng = make_rng(seed);
            let mode = DisplayMode::from(mode);
            let mut humans = CliCommander::stdio(mode);
            setup(
                Seating::Shared(&mut humans),
                Player::human(first),
                Player::human(second),
                &mut rng,
                mode,
            )?;
        }
        Commands::Watch {
            first,
            second,
            seed,
        } => {
            let mut rng = make_rng(seed);
            let mut bots = BotCommander::new();
            setup(
                Seating::Shared(&mut bots),
                Player::bot("Bot 1", first.into()),
                Player::bot("Bot 2", second.into()),
                &mut rng,
                DisplayMode::Easy,
            )?;
        }
    }
    Ok(())
}

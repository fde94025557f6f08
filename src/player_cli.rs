#![cfg(feature = "std")]

use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};

use rand::rngs::SmallRng;

use crate::{
    common::GameError,
    config::{MAX_PLACEMENT_ATTEMPTS, PLACEMENT_ORDER},
    moves::MoveKind,
    player::{Commander, Player},
    resolver::Target,
    ship::Orientation,
    ui::{self, DisplayMode},
};

/// Parse `B3`-style input into raw `(row, col)`. Range checks are left to the
/// resolver so an off-grid entry forfeits the turn like any other bad target.
pub fn parse_coord(input: &str) -> Option<(usize, usize)> {
    let mut chars = input.trim().chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return None;
    }
    let col = (col_ch as u8 - b'A') as usize;
    let row: usize = chars.as_str().parse().ok()?;
    if row == 0 {
        return None;
    }
    Some((row - 1, col))
}

/// Parse a torpedo line: a row number (`1`-`10`) or a column letter.
pub fn parse_line(input: &str) -> Option<Target> {
    let input = input.trim();
    if let Ok(row) = input.parse::<usize>() {
        return row.checked_sub(1).map(Target::Row);
    }
    let mut chars = input.chars();
    let ch = chars.next()?.to_ascii_uppercase();
    if chars.next().is_some() || !ch.is_ascii_alphabetic() {
        return None;
    }
    Some(Target::Column((ch as u8 - b'A') as usize))
}

pub fn parse_orientation(input: &str) -> Option<Orientation> {
    match input.trim().chars().next()?.to_ascii_uppercase() {
        'H' => Some(Orientation::Horizontal),
        'V' => Some(Orientation::Vertical),
        _ => None,
    }
}

fn io_err(e: io::Error) -> GameError {
    GameError::Input(e.to_string())
}

/// A human seat driven by line-oriented text input.
pub struct CliCommander<R, W> {
    input: R,
    output: W,
    mode: DisplayMode,
}

impl CliCommander<StdinLock<'static>, Stdout> {
    /// Commander reading from stdin and writing to stdout.
    pub fn stdio(mode: DisplayMode) -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout(), mode)
    }
}

impl<R: BufRead, W: Write> CliCommander<R, W> {
    pub fn new(input: R, output: W, mode: DisplayMode) -> Self {
        Self {
            input,
            output,
            mode,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn say(&mut self, text: &str) -> Result<(), GameError> {
        self.output.write_all(text.as_bytes()).map_err(io_err)?;
        self.output.flush().map_err(io_err)
    }

    fn prompt(&mut self, text: &str) -> Result<String, GameError> {
        self.say(text)?;
        let mut line = String::new();
        let n = self.input.read_line(&mut line).map_err(io_err)?;
        if n == 0 {
            return Err(GameError::Input("input closed".to_string()));
        }
        Ok(line.trim().to_string())
    }
}

impl<R: BufRead, W: Write> Commander for CliCommander<R, W> {
    fn place_fleet(&mut self, rng: &mut SmallRng, player: &mut Player) -> Result<(), GameError> {
        self.say(
            "Place each ship by its starting cell and orientation (e.g. B3 H).\n\
             Horizontal ships extend to the right, vertical ships extend down.\n\
             Press enter for a random placement.\n",
        )?;
        for class in PLACEMENT_ORDER {
            let mut placed = false;
            for _ in 0..MAX_PLACEMENT_ATTEMPTS {
                let board = ui::render_own(player);
                self.say(&board)?;
                let line = self.prompt(&format!("{} ({} cells): ", class, class.size()))?;
                if line.is_empty() {
                    let (r, c, o) = player.random_placement(rng, class)?;
                    player.place_ship(class, r, c, o)?;
                    placed = true;
                    break;
                }
                let mut parts = line.split_whitespace();
                let coord = parts.next().and_then(parse_coord);
                let orientation = parts.next().and_then(parse_orientation);
                match (coord, orientation) {
                    (Some((r, c)), Some(o)) => match player.place_ship(class, r, c, o) {
                        Ok(()) => {
                            placed = true;
                            break;
                        }
                        Err(e) => self.say(&format!("Error: {}. Try again.\n", e))?,
                    },
                    _ => self.say("Invalid input format! Try again (e.g. B3 H).\n")?,
                }
            }
            if !placed {
                return Err(GameError::UnableToPlaceShip(class));
            }
        }
        Ok(())
    }

    fn choose_kind(
        &mut self,
        _rng: &mut SmallRng,
        actor: &Player,
        opponent: &Player,
    ) -> Result<MoveKind, GameError> {
        let view = format!(
            "\n{}'s grid:\n{}\nAvailable moves:\n{}",
            opponent.name(),
            ui::render_tracking(opponent.grid(), self.mode),
            ui::render_moves(actor.inventory())
        );
        self.say(&view)?;
        loop {
            let line = self.prompt("Enter the identifier for your chosen move: ")?;
            if let Some(kind) = line.parse::<usize>().ok().and_then(MoveKind::from_index) {
                return Ok(kind);
            }
            self.say("Invalid input! Choose one of the listed identifiers.\n")?;
        }
    }

    fn choose_target(
        &mut self,
        _rng: &mut SmallRng,
        kind: MoveKind,
        _actor: &mut Player,
        _opponent: &Player,
    ) -> Result<Target, GameError> {
        match kind {
            MoveKind::Torpedo => {
                let line = self.prompt("Enter row (e.g. 3) or column (e.g. B): ")?;
                parse_line(&line).ok_or(GameError::InvalidTarget("expected a row or a column"))
            }
            MoveKind::Fire => {
                let line = self.prompt("Enter coordinate (e.g. B3): ")?;
                parse_coord(&line)
                    .map(|(row, col)| Target::Cell { row, col })
                    .ok_or(GameError::InvalidTarget("malformed coordinate"))
            }
            _ => {
                let line = self.prompt("Enter top-left coordinate (e.g. B3): ")?;
                parse_coord(&line)
                    .map(|(row, col)| Target::Cell { row, col })
                    .ok_or(GameError::InvalidTarget("malformed coordinate"))
            }
        }
    }
}

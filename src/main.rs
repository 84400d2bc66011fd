use anyhow::{anyhow, Context, Result};
use minereplay::{Game, GameConfig, GameRecord, MoveKind, MoveRequest};
use std::{
    fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
};
use structopt::StructOpt;

#[derive(Debug, structopt::StructOpt)]
struct Opt {
    /// The number of rows in the grid.
    #[structopt(short, long, default_value = "9")]
    rows: usize,

    /// The number of columns in the grid.
    #[structopt(short, long, default_value = "9")]
    columns: usize,

    /// The chance of any one cell hiding a mine.
    #[structopt(short, long, default_value = "0.15")]
    mine_probability: f64,

    /// Seed for a reproducible mine layout.
    #[structopt(short, long)]
    seed: Option<u64>,

    /// Replay a game saved with --save instead of generating a new one.
    #[structopt(short, long, parse(from_os_str))]
    load: Option<PathBuf>,

    /// Write the game record to this file after every move.
    #[structopt(short = "o", long, parse(from_os_str))]
    save: Option<PathBuf>,
}

enum Command {
    Move(MoveRequest),
    Help,
    Quit,
}

const HELP: &str = "commands: open <column> <row> | flag <column> <row> | unflag <column> <row> | help | quit";

fn parse_command(line: &str) -> Result<Command> {
    let words = line.split_whitespace().collect::<Vec<_>>();
    match words.as_slice() {
        ["quit" | "q" | "exit"] => Ok(Command::Quit),
        ["help" | "h" | "?"] => Ok(Command::Help),
        [kind, column, row] => Ok(Command::Move(MoveRequest::new(
            kind.parse::<MoveKind>()?,
            column
                .parse()
                .with_context(|| format!("invalid column: {column}"))?,
            row.parse().with_context(|| format!("invalid row: {row}"))?,
        ))),
        _ => Err(anyhow!("could not understand {line:?}")),
    }
}

fn load(path: &Path) -> Result<Game> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let record = GameRecord::from_json(&json).context("failed to parse game record")?;
    Game::from_record(record).context("failed to replay game record")
}

fn save(game: &Game, path: &Path) -> Result<()> {
    let json = game
        .to_record()
        .to_json()
        .context("failed to serialize game record")?;
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
}

fn print_game(out: &mut impl Write, game: &Game) -> Result<()> {
    writeln!(out, "{game}")?;
    writeln!(
        out,
        "game {} | {} mines | {} moves | {}",
        game.id(),
        game.mine_total(),
        game.moves().len(),
        game.game_status()
    )?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let Opt {
        rows,
        columns,
        mine_probability,
        seed,
        load: load_path,
        save: save_path,
    } = Opt::from_args();

    let mut game = match load_path {
        Some(path) => load(&path)?,
        None => {
            let config = GameConfig {
                rows,
                columns,
                mine_probability,
                seed,
            };
            Game::new(&config).context("failed to generate game")?
        }
    };

    if let Some(path) = &save_path {
        save(&game, path)?;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    print_game(&mut out, &game)?;
    if game.game_status().is_complete() {
        return Ok(());
    }
    writeln!(out, "{HELP}")?;

    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read command")?;
        if line.trim().is_empty() {
            continue;
        }

        let request = match parse_command(&line) {
            Ok(Command::Move(request)) => request,
            Ok(Command::Help) => {
                writeln!(out, "{HELP}")?;
                continue;
            }
            Ok(Command::Quit) => break,
            Err(err) => {
                writeln!(out, "{err:#}")?;
                continue;
            }
        };

        game = match game.apply(request) {
            Ok(next) => next,
            Err(err) => {
                writeln!(out, "{err}")?;
                continue;
            }
        };

        if let Some(path) = &save_path {
            save(&game, path)?;
        }

        print_game(&mut out, &game)?;
        if game.game_status().is_complete() {
            break;
        }
    }

    Ok(())
}

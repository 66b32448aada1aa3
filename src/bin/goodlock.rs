//! goodlock: play a dice battle in the terminal.
//!
//! Reads one command per line from stdin and prints the board after every
//! change. Logs go to stderr; set `RUST_LOG=debug` to see the board state
//! logged at the start of every round.

use std::env;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use anyhow::{bail, Context, Result};

use goodlock::{BoardView, CharacterIndex, EffectRegistry, Game, GameConfig, PlayerIndex, RoundOutcome};

const HELP: &str = r#"goodlock - two-player dice battle

USAGE:
    goodlock [--seed S] [--config PATH]

OPTIONS:
    --seed S         RNG seed (default: random, logged at startup)
    --config PATH    JSON game config (rolls per round, teams, history)
    -h, --help       Print this help message

COMMANDS:
    roll             Roll every unlocked die
    lock P C         Lock or unlock the die of player P, character C (1-based)
    next             Resolve the round and start the next one
    undo             Step back one action
    show             Print the board
    help             Print the commands
    quit             Leave the game
"#;

/// One line of player input.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Roll,
    Lock(PlayerIndex, CharacterIndex),
    Next,
    Undo,
    Show,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<Command> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        bail!("empty command");
    };

    let command = match head {
        "roll" | "r" => Command::Roll,
        "next" | "n" => Command::Next,
        "undo" | "u" => Command::Undo,
        "show" | "s" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        "lock" | "l" => {
            let player = one_based(words.next(), "player")?;
            let character = one_based(words.next(), "character")?;
            Command::Lock(PlayerIndex::try_from(player)?, CharacterIndex::new(character)?)
        }
        other => bail!("unknown command: {other} (try `help`)"),
    };

    if words.next().is_some() {
        bail!("too many arguments for `{head}`");
    }
    Ok(command)
}

/// Parse a 1-based number into a 0-based index.
fn one_based(word: Option<&str>, what: &str) -> Result<usize> {
    let word = word.with_context(|| format!("missing {what} number"))?;
    let n: usize = word
        .parse()
        .with_context(|| format!("invalid {what} number: {word}"))?;
    n.checked_sub(1)
        .with_context(|| format!("{what} numbers start at 1"))
}

struct Args {
    seed: Option<u64>,
    config: Option<PathBuf>,
}

fn parse_args(args: &[String]) -> Args {
    let mut parsed = Args { seed: None, config: None };

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                println!("{HELP}");
                process::exit(0);
            }
            "--seed" => {
                if i + 1 >= args.len() {
                    eprintln!("Missing value for --seed");
                    process::exit(1);
                }
                parsed.seed = Some(args[i + 1].parse().unwrap_or_else(|_| {
                    eprintln!("Invalid --seed value: {}", args[i + 1]);
                    process::exit(1);
                }));
                i += 2;
            }
            "--config" => {
                if i + 1 >= args.len() {
                    eprintln!("Missing value for --config");
                    process::exit(1);
                }
                parsed.config = Some(PathBuf::from(&args[i + 1]));
                i += 2;
            }
            other => {
                eprintln!("Unknown option: {other}");
                eprintln!("Run `goodlock --help` for usage.");
                process::exit(1);
            }
        }
    }

    parsed
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn load_config(args: &Args) -> Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            GameConfig::from_json(&json)?
        }
        None => GameConfig::new(),
    };
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    Ok(config)
}

/// Apply one command. Returns `false` when the player quits.
fn run_command(game: &mut Game, command: Command) -> Result<bool> {
    match command {
        Command::Roll => game.roll_dice()?,
        Command::Lock(player, character) => game.toggle_die_lock(player, character)?,
        Command::Next => {
            if let RoundOutcome::GameOver(result) = game.next_round()? {
                println!("{result}");
                return Ok(true);
            }
        }
        Command::Undo => game.undo()?,
        Command::Show => {}
        Command::Help => {
            println!("{HELP}");
            return Ok(true);
        }
        Command::Quit => return Ok(false),
    }

    println!("{}", BoardView(game.state()));
    Ok(true)
}

fn main() -> Result<()> {
    let argv: Vec<String> = env::args().skip(1).collect();
    let args = parse_args(&argv);
    init_tracing();

    let config = load_config(&args)?;
    let mut game = Game::new(config, Arc::new(EffectRegistry::with_defaults()))
        .context("starting game")?;

    println!("{}", BoardView(game.state()));

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        let outcome = parse_command(&line).and_then(|command| run_command(&mut game, command));
        match outcome {
            Ok(true) => {}
            Ok(false) => break,
            Err(err) => println!("error: {err:#}"),
        }
    }

    Ok(())
}

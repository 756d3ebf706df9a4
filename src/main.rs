use std::process::ExitCode;
use std::str::FromStr;

use log::{error, info};

use tictactoe_engine::{
    play_match, EngineConfig, EngineError, EnginePlayer, GameOutcome, Player, Result, Strategy,
};

const USAGE: &str = "usage: tictactoe_engine [first-strategy] [second-strategy] [games]";

struct Args {
    first: Strategy,
    second: Strategy,
    games: u32,
}

fn parse_args() -> Result<Args> {
    let mut args = std::env::args().skip(1);

    let first = args.next().map(|s| Strategy::from_str(&s)).transpose()?;
    let second = args.next().map(|s| Strategy::from_str(&s)).transpose()?;
    let games = match args.next() {
        Some(s) => s.parse::<u32>().map_err(|_| {
            EngineError::InvalidConfiguration(format!("games must be a non-negative integer, got {:?}", s))
        })?,
        None => 1,
    };

    Ok(Args {
        first: first.unwrap_or(Strategy::AlphaBeta),
        second: second.unwrap_or(Strategy::MonteCarloTree),
        games,
    })
}

fn run(args: Args) -> Result<()> {
    let mut first = EnginePlayer::new(EngineConfig::new(args.first))?;
    let mut second = EnginePlayer::new(EngineConfig::new(args.second))?;

    let (mut x_wins, mut o_wins, mut draws) = (0u32, 0u32, 0u32);
    for game in 1..=args.games {
        info!("game {}/{}", game, args.games);
        let record = play_match(&mut first, &mut second)?;

        match record.outcome {
            GameOutcome::Win(Player::First) => x_wins += 1,
            GameOutcome::Win(Player::Second) => o_wins += 1,
            _ => draws += 1,
        }
        info!(
            "X {} [{}] | O {} [{}]",
            args.first,
            record.totals(Player::First),
            args.second,
            record.totals(Player::Second)
        );
    }

    info!(
        "{} games: {} (X) won {}, {} (O) won {}, {} draws",
        args.games, args.first, x_wins, args.second, o_wins, draws
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            error!("{}", e);
            let names: Vec<&str> = Strategy::all().iter().map(|s| s.cli_name()).collect();
            error!("{} (strategies: {})", USAGE, names.join(", "));
            return ExitCode::FAILURE;
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

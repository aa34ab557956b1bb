use std::io::{self, Write};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use hotseat_ttt::session::{GameSession, SessionEvent, SessionPhase};

/// Local two-player tic-tac-toe in the terminal.
///
/// Cells are addressed by index 0-8, left to right, top to bottom.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Name of the player with the X mark (skips the prompt)
    #[arg(long, env = "HOTSEAT_PLAYER1")]
    player1: Option<String>,
    /// Name of the player with the O mark (skips the prompt)
    #[arg(long, env = "HOTSEAT_PLAYER2")]
    player2: Option<String>,
}

type Lines = io::Lines<io::StdinLock<'static>>;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .try_init();

    let args = Args::parse();
    let mut lines = io::stdin().lines();
    let mut session = GameSession::new();

    register(&mut session, &args, &mut lines)?;
    render(&session);

    while let Some(line) = lines.next() {
        let line = line?;
        match line.trim() {
            "" => continue,
            "q" | "quit" => break,
            "r" | "restart" => {
                session.handle(SessionEvent::Restart)?;
                register(&mut session, &args, &mut lines)?;
            }
            input => match input.parse::<usize>() {
                Ok(cell_index) => session.handle(SessionEvent::CellClicked(cell_index))?,
                Err(_) => {
                    println!("enter a cell index 0-8, 'restart' or 'quit'");
                    continue;
                }
            },
        }
        render(&session);
        if session.phase() == SessionPhase::Finished {
            println!("type 'restart' to play again or 'quit' to exit");
        }
    }

    Ok(())
}

/// Collects both player names and submits them until the session accepts.
fn register(
    session: &mut GameSession,
    args: &Args,
    lines: &mut Lines,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        let first = match &args.player1 {
            Some(name) => name.clone(),
            None => prompt("player 1 (X) name: ", lines)?,
        };
        let second = match &args.player2 {
            Some(name) => name.clone(),
            None => prompt("player 2 (O) name: ", lines)?,
        };
        match session.handle(SessionEvent::SubmitPlayers { first, second }) {
            Ok(()) => return Ok(()),
            // names passed on the command line won't get better by retrying
            Err(err) if args.player1.is_some() && args.player2.is_some() => {
                return Err(err.into())
            }
            Err(err) => println!("{err}"),
        }
    }
}

fn prompt(label: &str, lines: &mut Lines) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => line,
        None => Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed")),
    }
}

fn render(session: &GameSession) {
    if let Some(game) = session.game() {
        println!("{game}");
    }
    for line in session.player_lines() {
        println!("{line}");
    }
    if let Some(clock) = session.clock_display() {
        println!("{clock}");
    }
    println!("{}", session.status_message());
}

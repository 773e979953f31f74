//! Terminal shell for rust-bingo.
//!
//! Two screens, mirroring the mobile layout: dimension entry with the
//! player ID, then the card. Cells are tapped by typing their number.

use std::io::{self, BufRead, Write};

use clap::{CommandFactory, Parser, ValueEnum};
use rust_bingo::core::{DEFAULT_POOL_MAX, DEFAULT_POOL_MIN};
use rust_bingo::{
    announce_all, Announcement, Announcer, BingoSession, CardConfig, OversizePolicy, Screen,
    SessionConfig,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Play bingo in the terminal
#[derive(Parser, Debug)]
#[command(name = "rust-bingo")]
#[command(about = "Generate a bingo card and mark it until a line completes", long_about = None)]
#[command(version)]
struct Cli {
    /// Skip dimension entry and start with this card size
    #[arg(short, long)]
    dimension: Option<String>,

    /// RNG seed for a reproducible session
    #[arg(long)]
    seed: Option<u64>,

    /// What to do when a card needs more numbers than the pool holds
    #[arg(long, value_enum, default_value_t = Oversize::Reject)]
    oversize: Oversize,

    /// Smallest number that can appear on a card
    #[arg(long, default_value_t = DEFAULT_POOL_MIN)]
    pool_min: u8,

    /// Largest number that can appear on a card
    #[arg(long, default_value_t = DEFAULT_POOL_MAX)]
    pool_max: u8,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Oversize {
    /// Ask for a smaller size
    Reject,
    /// Shrink to the largest size the pool can fill
    Clamp,
}

impl From<Oversize> for OversizePolicy {
    fn from(value: Oversize) -> Self {
        match value {
            Oversize::Reject => OversizePolicy::Reject,
            Oversize::Clamp => OversizePolicy::Clamp,
        }
    }
}

/// Prints the spoken phrase and the win dialog.
struct TerminalAnnouncer<W: Write> {
    out: W,
}

impl<W: Write> Announcer for TerminalAnnouncer<W> {
    fn announce(&mut self, announcement: &Announcement) {
        // Fire-and-forget: a failed write must not interrupt play.
        let _ = writeln!(
            self.out,
            "\n(speaking {}) {}\n\n  {}\n  {} ({})\n  [ {} ]  press Enter",
            announcement.locale,
            announcement.phrase,
            announcement.title,
            announcement.message,
            announcement.line,
            announcement.accept_label,
        );
        let _ = self.out.flush();
    }
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    if cli.pool_min > cli.pool_max {
        Cli::command()
            .error(
                clap::error::ErrorKind::ValueValidation,
                "--pool-min must not exceed --pool-max",
            )
            .exit();
    }

    let config = SessionConfig::new().with_card(
        CardConfig::new(cli.pool_min, cli.pool_max).with_oversize(cli.oversize.into()),
    );
    let mut session = match cli.seed {
        Some(seed) => BingoSession::new(config, seed),
        None => BingoSession::from_entropy(config),
    };
    debug!(seed = session.seed(), "session started");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut out = io::stdout().lock();
    let mut announcer = TerminalAnnouncer { out: io::stdout() };

    if let Some(dimension) = &cli.dimension {
        if let Err(err) = session.submit_dimension(dimension) {
            writeln!(out, "{err}")?;
        }
    }

    loop {
        render(&mut out, &session)?;

        let Some(line) = lines.next().transpose()? else {
            break;
        };
        let input = line.trim();

        match (session.screen(), input) {
            (_, "q") => break,
            (_, "b") => {
                if !session.back() {
                    break;
                }
            }
            (Screen::Setup, _) => {
                if let Err(err) = session.submit_dimension(input) {
                    writeln!(out, "{err}")?;
                }
            }
            (Screen::Playing, "r") => match session.regenerate() {
                Ok(_) => writeln!(out, "New Card Generated!")?,
                Err(err) => writeln!(out, "{err}")?,
            },
            (Screen::Playing, _) => match input.parse::<u8>() {
                Ok(number) => match session.toggle(number) {
                    Ok(outcome) => {
                        if let Some((row, col)) = session.card().and_then(|c| c.position(number)) {
                            let verb = if outcome.mark.is_marked() { "Marked" } else { "Unmarked" };
                            writeln!(out, "{verb} {number} at row {}, column {}", row + 1, col + 1)?;
                        }
                    }
                    Err(err) => writeln!(out, "{err}")?,
                },
                Err(_) => writeln!(out, "Type a number from the card, r, b, or q")?,
            },
        }

        let events = session.drain_events();
        if announce_all(&events, &mut announcer) > 0 {
            // The dialog stays up until dismissed.
            if lines.next().transpose()?.is_none() {
                break;
            }
        }
    }

    Ok(())
}

fn render(out: &mut impl Write, session: &BingoSession) -> io::Result<()> {
    writeln!(out, "\n{}", session.player_uid())?;

    match (session.screen(), session.dimension()) {
        (Screen::Playing, Some(dimension)) => {
            for row in session.cell_states().chunks(dimension.get()) {
                let cells: Vec<String> = row
                    .iter()
                    .map(|cell| {
                        if cell.marked {
                            format!("[{:>3}]", cell.number)
                        } else {
                            format!(" {:>3} ", cell.number)
                        }
                    })
                    .collect();
                writeln!(out, "{}", cells.join(""))?;
            }
            write!(out, "number = mark/unmark, r = new card, b = back, q = quit\n> ")?;
        }
        _ => write!(out, "Enter matrix size: ")?,
    }

    out.flush()
}

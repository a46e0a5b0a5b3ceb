use clap::Parser;
use geoquiz::catalog::{self, Catalog};
use geoquiz::render;
use geoquiz::session::{Session, Verdict};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Geoquiz: guess the place behind the map marker.
///
/// Shows an unlabeled marker on an ASCII world map plus a hint, and
/// asks which place it is out of three candidates. One point per
/// correct answer.
///
/// Examples:
///   geoquiz
///   geoquiz --catalog data/catalog.json
///   geoquiz --seed 42
///   geoquiz --dump-catalog
#[derive(Parser)]
#[command(name = "geoquiz", version, about, long_about = None)]
struct Cli {
    /// Catalog file: a JSON array of {name, hint, coords} objects.
    /// Default search order: ./data/catalog.json, ~/.geoquiz/catalog.json,
    /// then the built-in dataset.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Seed for a deterministic question order.
    #[arg(long)]
    seed: Option<u64>,

    /// Print the validated catalog as pretty JSON to stdout and exit.
    #[arg(long)]
    dump_catalog: bool,
}

fn main() {
    let cli = Cli::parse();

    // ── Load and validate the catalog ───────────────────────────

    let source = catalog::resolve_source(cli.catalog.as_deref());
    let (places, problems) = catalog::load(&source).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    for msg in &problems {
        eprintln!("  \u{26A0}\u{FE0F}  {}", msg);
    }

    let catalog = Catalog::from_places(places).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    if cli.dump_catalog {
        println!("{}", serde_json::to_string_pretty(catalog.places()).unwrap());
        return;
    }

    eprintln!("  \u{1F30D} {} places loaded ({})", catalog.len(), source);

    // ── Start the session ───────────────────────────────────────

    let session = match cli.seed {
        Some(seed) => Session::with_rng(catalog, ChaCha20Rng::seed_from_u64(seed)),
        None => Session::new(catalog),
    };

    run(session);
}

/// The interactive loop. Every state change is followed by a full view
/// reprint; there is no partial redraw.
fn run(mut session: Session) {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("\n  Place Guessing Game");

    while session.is_active() {
        print!("{}", render::render_round(session.round(), session.score()));

        let answer = match prompt_answer(&mut lines, &session) {
            Some(answer) => answer,
            None => return, // EOF: quit without the farewell banner
        };

        match session.submit(&answer) {
            Ok(Verdict::Correct) => println!("  \u{2705} Correct! \u{1F389}"),
            Ok(Verdict::Wrong) => println!(
                "  \u{274C} Wrong! The correct answer was {}.",
                session.round().question.name
            ),
            Err(e) => {
                eprintln!("  \u{26A0}\u{FE0F}  {}", e);
                continue;
            }
        }

        if !prompt_after_answer(&mut lines, &mut session) {
            return; // EOF
        }
    }

    println!("\n  Thanks for playing! Come back soon. \u{1F44B}");
    println!("  Final score: {}", session.score());
}

/// Ask for the player's pick: `1`–`3` selects an option, anything else
/// is taken as a literal place name. Returns None on EOF.
fn prompt_answer(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    session: &Session,
) -> Option<String> {
    loop {
        print!("  Your answer [1-3]: ");
        let _ = io::stdout().flush();
        let input = read_line(lines)?;
        if input.is_empty() {
            continue;
        }
        if let Ok(index) = input.parse::<usize>() {
            match session.round().options.get(index.wrapping_sub(1)) {
                Some(option) => return Some(option.name.clone()),
                None => {
                    println!("  Pick 1, 2 or 3.");
                    continue;
                }
            }
        }
        return Some(input);
    }
}

/// Post-answer menu: next round, restart, or exit. Returns false on EOF.
fn prompt_after_answer(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    session: &mut Session,
) -> bool {
    loop {
        print!("  [n] play next   [r] restart   [x] exit: ");
        let _ = io::stdout().flush();
        let input = match read_line(lines) {
            Some(input) => input.to_lowercase(),
            None => return false,
        };
        let result = match input.as_str() {
            "n" | "next" => session.play_next(),
            "r" | "restart" => session.restart(),
            "x" | "exit" => session.exit(),
            _ => {
                println!("  Unrecognized choice.");
                continue;
            }
        };
        if let Err(e) = result {
            eprintln!("  \u{26A0}\u{FE0F}  {}", e);
        }
        return true;
    }
}

fn read_line(lines: &mut impl Iterator<Item = io::Result<String>>) -> Option<String> {
    match lines.next() {
        Some(Ok(line)) => Some(line.trim().to_string()),
        _ => None,
    }
}

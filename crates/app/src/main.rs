use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use quiz_core::Clock;
use quiz_core::data::{category_registry, question_bank};
use quiz_core::model::{Category, CategoryId, Phase};
use services::sessions::view::{format_datetime, format_elapsed};
use services::{GameService, Tick, Ticker};
use storage::leaderboard::LeaderboardStore;
use storage::sqlite::SqliteKeyValueStore;
use tokio::sync::mpsc;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

struct Args {
    db_url: String,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--db <sqlite_url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db sqlite:quiz.sqlite3");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_DB_URL");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut db_url = std::env::var("QUIZ_DB_URL")
            .ok()
            .map_or_else(|| "sqlite://quiz.sqlite3".into(), normalize_sqlite_url);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = args.next().ok_or(ArgsError::MissingValue { flag: "--db" })?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { db_url })
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

/// Spawn a blocking stdin reader feeding lines into the event loop.
fn spawn_stdin_reader() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel(16);
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        let mut line = String::new();
        loop {
            line.clear();
            match std::io::BufRead::read_line(&mut stdin.lock(), &mut line) {
                Ok(0) | Err(_) => break,
                Ok(_) => {
                    if tx.blocking_send(line.trim_end().to_string()).is_err() {
                        break;
                    }
                }
            }
        }
    });
    rx
}

struct Shell {
    game: GameService,
    categories: Vec<Category>,
    ticker: Option<Ticker>,
    tick_tx: mpsc::Sender<Tick>,
}

impl Shell {
    fn new(game: GameService, tick_tx: mpsc::Sender<Tick>) -> Self {
        Self {
            game,
            categories: category_registry(),
            ticker: None,
            tick_tx,
        }
    }

    /// Keep the ticker's lifetime bound to the playing phase: started on
    /// entry, dropped (and thereby aborted) on any exit.
    fn sync_ticker(&mut self) {
        let playing = self.game.session().phase().is_playing();
        if playing && self.ticker.is_none() {
            self.ticker = Some(Ticker::start(self.tick_tx.clone()));
        } else if !playing {
            self.ticker = None;
        }
    }

    /// Returns false when the shell should exit.
    async fn handle_line(&mut self, line: &str) -> bool {
        let line = line.trim();
        let (command, rest) = match line.split_once(' ') {
            Some((head, tail)) => (head, tail.trim()),
            None => (line, ""),
        };

        match command {
            "" => {}
            "name" => self.game.set_player_name(rest),
            "how" => self.game.go_to_instructions(),
            "start" => self.game.start_game(),
            "back" => match self.game.session().phase() {
                Phase::Instructions => self.game.dismiss_instructions(),
                _ => self.game.return_to_start(),
            },
            "pick" => self.game.select_number(rest),
            "put" => match CategoryId::from_str(rest) {
                Ok(category) => self.game.place_in_category(category),
                Err(err) => println!("{err}"),
            },
            "take" => match rest.rsplit_once(' ') {
                Some((id, raw_category)) => match CategoryId::from_str(raw_category.trim()) {
                    Ok(category) => self.game.remove_from_category(id.trim(), category),
                    Err(err) => println!("{err}"),
                },
                None => println!("usage: take <number> <category>"),
            },
            "submit" => self.game.submit(),
            "continue" => self.game.continue_after_results().await,
            "board" => self.game.open_leaderboard(),
            "close" => self.game.close_leaderboard(),
            "quit" | "exit" => return false,
            other => println!("unknown command: {other} (try: name, how, start, pick, put, take, submit, continue, board, back, quit)"),
        }
        true
    }

    fn render(&self) {
        let session = self.game.session();

        if session.leaderboard_open() {
            println!("── Leaderboard ──");
            if self.game.leaderboard().is_empty() {
                println!("No scores yet. Be the first to play!");
            }
            for (rank, entry) in self.game.leaderboard().iter().enumerate() {
                println!(
                    "{:>2}. {:<20} {:>5}  {}",
                    rank + 1,
                    entry.name(),
                    entry.score(),
                    format_datetime(entry.date())
                );
            }
            println!("(close — back to the game)");
            return;
        }

        match session.phase() {
            Phase::Start => {
                println!("── Number Classification ──");
                if session.player_name().is_empty() {
                    println!("Enter your name with: name <your name>");
                } else {
                    println!("Welcome, {}!", session.player_name());
                }
                println!("Commands: how (instructions), start, board (leaderboard), quit");
            }
            Phase::Instructions => {
                println!("── How to Play ──");
                println!("You will see 20 numbers drawn at random.");
                println!("pick <number>      select a number from the pool");
                println!("put <category>     place the selected number");
                println!("take <number> <category>   send it back to the pool");
                println!("submit             finish and see your results");
                println!("Categories:");
                for category in &self.categories {
                    println!("  {:<12} {}", category.id(), category.description());
                }
                println!("(start — begin, back — return to the menu)");
            }
            Phase::Playing => {
                println!(
                    "── Playing ── time {} ── placed {}/{}",
                    format_elapsed(session.elapsed_seconds()),
                    session.placed_count(),
                    session.selected_questions().len()
                );
                println!("Pool: {}", session.pool().join("  |  "));
                for category in &self.categories {
                    let bucket = session.bucket(category.id());
                    if !bucket.is_empty() {
                        println!("  [{}] {}", category.id(), bucket.join("  |  "));
                    }
                }
                if let Some(selected) = session.selected_number() {
                    println!("Selected: {selected}");
                }
            }
            Phase::Results => {
                if let Some(results) = session.results() {
                    println!("── Results ──");
                    println!(
                        "correct {}  wrong {}  total {}  (time {})",
                        results.correct(),
                        results.wrong(),
                        results.total(),
                        format_elapsed(session.elapsed_seconds())
                    );
                }
                println!("(continue — to your final score)");
            }
            Phase::GameOver => {
                println!("── Game Over ──");
                println!("{}, your score: {}", session.player_name(), session.score());
                println!("(board — leaderboard, back — main menu, quit)");
            }
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let args = Args::parse(&mut argv).map_err(|err| {
        eprintln!("{err}");
        print_usage();
        err
    })?;

    // Open + migrate SQLite at startup. Binary glue keeps core/services pure.
    prepare_sqlite_file(&args.db_url)?;
    let backend = SqliteKeyValueStore::connect(&args.db_url).await?;
    backend.migrate().await?;
    tracing::info!(db = %args.db_url, "leaderboard storage ready");
    let store = LeaderboardStore::new(Arc::new(backend));

    let bank = Arc::new(question_bank()?);
    let mut game = GameService::new(bank, store, Clock::default_clock());
    game.refresh_leaderboard().await;

    let (tick_tx, mut tick_rx) = mpsc::channel(8);
    let mut shell = Shell::new(game, tick_tx);
    let mut lines = spawn_stdin_reader();

    shell.render();
    loop {
        tokio::select! {
            line = lines.recv() => {
                let Some(line) = line else { break };
                if !shell.handle_line(&line).await {
                    break;
                }
                shell.sync_ticker();
                shell.render();
            }
            tick = tick_rx.recv() => {
                if tick.is_some() {
                    // Applied on this loop, so the session stays single-writer.
                    shell.game.tick();
                }
            }
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

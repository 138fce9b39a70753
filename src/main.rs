use std::io::Write;

use anyhow::Context as _;
use clap::Parser;
use clap::Subcommand;
use config::Config;
use config::ConfigArgs;
use config::StorageLocation;
use period::Period;
use storage::FileStore;
use storage::KeyValueStore;
use storage::MemoryStore;
use store::MoodStore;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use types::Mood;

mod analysis;
mod config;
mod error;
mod period;
mod storage;
mod store;
mod types;
mod view;

type Store = MoodStore<Box<dyn KeyValueStore>>;

#[derive(Parser)]
#[command(version, about = "Record moods and see how the week is going", long_about = None)]
struct Args {
    #[command(flatten)]
    config: ConfigArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Interactive prompt (default)
    Track,
    /// Record one mood
    Add { mood: Mood },
    /// Average mood over the last seven days
    Week,
    /// Average and entries of a period
    History {
        #[arg(value_enum, default_value_t = Period::Day)]
        period: Period,
    },
    /// Delete all recorded moods
    Clear {
        #[arg(long, short)]
        yes: bool,
    },
    /// List the moods that can be recorded
    Moods,
}

mod world {
    use clap::Parser;

    use crate::period::Period;

    #[derive(Parser)]
    #[command(version, about, long_about = None)]
    pub(crate) enum Command {
        Moods,
        Week,
        History {
            #[arg(value_enum, default_value_t = Period::Day)]
            period: Period,
        },
        Clear,
        Exit,
    }
}

fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn open_store(config: &Config) -> Store {
    let storage: Box<dyn KeyValueStore> = match &config.storage {
        StorageLocation::Directory(dir) => {
            let files = FileStore::new(dir.clone());
            debug!(dir = %files.dir().display(), "using file storage");
            Box::new(files)
        }
        StorageLocation::Memory => {
            debug!("using in-memory storage");
            Box::new(MemoryStore::default())
        }
    };
    MoodStore::load(storage)
}

fn confirm(question: &str) -> anyhow::Result<bool> {
    print!("{} [y/N] ", question);
    std::io::stdout().flush()?;
    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

fn print_weekly(store: &Store) {
    println!("{}", view::weekly(&store.weekly_analysis()));
}

fn print_history(store: &Store, period: Period) {
    println!("{} history", period);
    println!("{}", view::period(&store.period_view(period)));
}

fn exec_clear(store: &mut Store, confirmed: bool) -> anyhow::Result<()> {
    if !confirmed && !confirm("Are you sure you want to clear all mood history?")? {
        println!("world: Nothing cleared.");
        return Ok(());
    }
    store.clear_all().context("failed to remove saved mood history")?;
    println!("Mood history cleared.");
    Ok(())
}

fn exec_add(store: &mut Store, mood: Mood) -> anyhow::Result<()> {
    println!("{}", mood.emoji());
    store.insert(mood).context("failed to save mood")?;
    print_weekly(store);
    Ok(())
}

fn exec_track(store: &mut Store) -> anyhow::Result<()> {
    let user_name = whoami::username();

    println!("{}", view::menu());
    if !store.history().is_empty() {
        println!("world: {} recent moods loaded", store.history().all.len());
    }
    print_weekly(store);

    loop {
        print!("{}: ", user_name);
        std::io::stdout().flush()?;

        let mut input = String::new();
        if std::io::stdin().read_line(&mut input)? == 0 {
            println!("\nworld: Exiting.");
            return Ok(());
        }
        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        if let Some(command) = input.strip_prefix('#') {
            let mut sw = vec!["#".to_string()];
            match shellwords::split(command) {
                Ok(mut words) => sw.append(&mut words),
                Err(_) => {
                    println!("world: mismatched quotes");
                    continue;
                }
            }

            match world::Command::try_parse_from(sw) {
                Ok(world::Command::Moods) => println!("{}", view::menu()),
                Ok(world::Command::Week) => print_weekly(store),
                Ok(world::Command::History { period }) => print_history(store, period),
                Ok(world::Command::Clear) => {
                    if let Err(err) = exec_clear(store, false) {
                        println!("world: warning: {:#}", err);
                    }
                    print_weekly(store);
                }
                Ok(world::Command::Exit) => {
                    println!("world: Exiting.");
                    return Ok(());
                }
                Err(err) => println!("world: {}", err),
            }
        } else {
            match input.parse::<Mood>() {
                Ok(mood) => {
                    println!("{}", mood.emoji());
                    if let Err(err) = store.insert(mood) {
                        println!("world: warning: {}; this mood is kept until exit only", err);
                    }
                    print_weekly(store);
                }
                Err(err) => println!("world: {}", err),
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = Config::resolve(args.config)?;
    init_logging(&config);

    let mut store = open_store(&config);
    match args.command.unwrap_or(Command::Track) {
        Command::Track => exec_track(&mut store),
        Command::Add { mood } => exec_add(&mut store, mood),
        Command::Week => {
            print_weekly(&store);
            Ok(())
        }
        Command::History { period } => {
            print_history(&store, period);
            Ok(())
        }
        Command::Clear { yes } => exec_clear(&mut store, yes),
        Command::Moods => {
            println!("{}", view::menu());
            Ok(())
        }
    }
}

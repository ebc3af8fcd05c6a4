use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use review_sentiment::session::{classify_manual, EVENT_HELP};
use review_sentiment::{render_text, Config, Dashboard, Event, LexiconScorer, Page, WidgetState};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "review_sentiment=info";

#[derive(Parser)]
#[command(name = "review-sentiment", version, about = "Review sentiment dashboard")]
struct Cli {
    /// Configuration file (defaults are used when it does not exist)
    #[arg(long, global = true, default_value = "config.toml")]
    config: PathBuf,
    /// Seed for synthetic titles and years (overrides the config file)
    #[arg(long, global = true)]
    seed: Option<u64>,
    /// Print the render model as JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the whole dashboard once
    Dashboard {
        /// CSV with 'review' and 'sentiment' columns (bundled dataset when omitted)
        #[arg(long)]
        upload: Option<PathBuf>,
        /// Show for your own review
        #[arg(long)]
        title: Option<String>,
        /// Your own review; presses the analyze button
        #[arg(long)]
        review: Option<String>,
        /// Show for the pie chart
        #[arg(long)]
        pie: Option<String>,
        /// Two shows to compare
        #[arg(long, num_args = 2, value_names = ["FIRST", "SECOND"])]
        compare: Option<Vec<String>>,
    },
    /// Classify a single review
    Analyze {
        /// Show the review is about
        #[arg(long)]
        title: Option<String>,
        /// Review text
        text: String,
    },
    /// Read UI events from stdin, one per line, re-rendering after each
    Interactive {
        /// CSV to start with (bundled dataset when omitted)
        #[arg(long)]
        upload: Option<PathBuf>,
    },
}

/// `RUST_LOG` when set and valid, otherwise info for this crate.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref()))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = Config::load_or_default(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    if cli.seed.is_some() {
        config.augment.seed = cli.seed;
    }

    match cli.command {
        Commands::Dashboard {
            upload,
            title,
            review,
            pie,
            compare,
        } => {
            let mut state = WidgetState::default();
            if let Some(path) = upload {
                state.apply(Event::Upload(path))?;
            }
            state.manual_title = title;
            if let Some(text) = review {
                state.manual_text = text;
                state.analyze = true;
            }
            state.pie_show = pie;
            if let Some(shows) = compare {
                let mut shows = shows.into_iter();
                state.compare_first = shows.next();
                state.compare_second = shows.next();
            }

            let mut dashboard = Dashboard::from_config(config, LexiconScorer::new());
            let page = dashboard.handle(&state)?;
            print_page(&page, cli.json)?;
        }
        Commands::Analyze { title, text } => {
            let section = classify_manual(title.as_deref(), &text, &LexiconScorer::new());
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&section)?);
            } else {
                println!("{}", section.notice.message);
            }
        }
        Commands::Interactive { upload } => {
            let mut state = WidgetState::default();
            if let Some(path) = upload {
                state.apply(Event::Upload(path))?;
            }
            let mut dashboard = Dashboard::from_config(config, LexiconScorer::new());
            run_interactive(&mut dashboard, &mut state, cli.json)?;
        }
    }

    Ok(())
}

fn print_page(page: &Page, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(page)?);
    } else {
        print!("{}", render_text(page));
    }
    Ok(())
}

fn run_interactive(
    dashboard: &mut Dashboard<LexiconScorer>,
    state: &mut WidgetState,
    json: bool,
) -> Result<()> {
    println!("{EVENT_HELP}\n");
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        // Each pass is one interaction: render, then wait for the next event.
        match dashboard.handle(state) {
            Ok(page) => print_page(&page, json)?,
            Err(e) => eprintln!("Error: {e}"),
        }
        state.end_turn();

        loop {
            print!("> ");
            io::stdout().flush()?;
            let Some(line) = lines.next() else {
                return Ok(());
            };
            let event = match line?.parse::<Event>() {
                Ok(event) => event,
                Err(e) => {
                    eprintln!("{e}\n{EVENT_HELP}");
                    continue;
                }
            };
            if event == Event::Quit {
                return Ok(());
            }
            match state.apply(event) {
                Ok(()) => break,
                Err(e) => eprintln!("Error: {e}"),
            }
        }
    }
}

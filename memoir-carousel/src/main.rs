use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, bail};
use clap::Parser;
use env_logger::{Builder, Target};
use log::LevelFilter;
use tokio::io::{AsyncBufReadExt, BufReader};
use url::Url;

use memoir_carousel::capabilities::{
    FullScreenViewer, IconName, ViewerCommand, ViewerRecord,
};
use memoir_carousel::carousel::Key;
use memoir_carousel::preload::{FsImageProbe, HttpImageProbe, SchemeProbe};
use memoir_carousel::{
    Carousel, CarouselConfig, CarouselMessage, CarouselSession, SlideChange,
    ViewMode,
};

/// Drive a chronological carousel from a JSON file of dated entries.
#[derive(Debug, Parser)]
#[command(name = "memoir-carousel", version)]
struct Args {
    /// JSON array of entries ({id, date, year, title, description, image}).
    entries: PathBuf,

    /// Directory that site-relative image paths resolve against.
    #[arg(long, default_value = ".")]
    media_root: PathBuf,

    /// Base URL for relative images when probing over HTTP.
    #[arg(long)]
    base_url: Option<Url>,

    /// Stop after this long (e.g. "30s", "2m"). Runs until `quit` otherwise.
    #[arg(long, value_parser = humantime::parse_duration)]
    run_for: Option<Duration>,

    /// Viewport width in logical pixels.
    #[arg(long)]
    width: Option<f32>,

    /// Skip probing images before showing the first slide.
    #[arg(long)]
    no_preload: bool,

    /// Alternate config file instead of the user config directory.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
enum Command {
    Message(CarouselMessage),
    Show,
    Quit,
}

/// Viewer that prints what it would display.
#[derive(Debug, Default)]
struct ConsoleViewer;

impl FullScreenViewer for ConsoleViewer {
    fn open(&mut self, record: &ViewerRecord) {
        println!(
            "[viewer] {} | {} | {}\n         {}",
            record.date, record.title, record.src, record.description
        );
    }

    fn close(&mut self) {
        println!("[viewer] closed");
    }
}

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("memoir_carousel", LevelFilter::Debug)
        .init();
}

fn parse_command(line: &str) -> Option<Command> {
    let mut parts = line.split_whitespace();
    let verb = parts.next()?.to_ascii_lowercase();
    let arg = parts.next();

    let message = match verb.as_str() {
        "next" | "n" => CarouselMessage::Next,
        "prev" | "p" => CarouselMessage::Previous,
        "year" | "y" => CarouselMessage::JumpToYear(arg?.parse().ok()?),
        "goto" | "g" => CarouselMessage::GoTo(arg?.parse().ok()?),
        "select" => CarouselMessage::SelectFromOverview(arg?.parse().ok()?),
        "scrub" => CarouselMessage::ScrubStarted(arg?.parse().ok()?),
        "drag" => CarouselMessage::ScrubMoved(arg?.parse().ok()?),
        "release" => CarouselMessage::ScrubReleased,
        "hover" => CarouselMessage::PointerEntered,
        "leave" => CarouselMessage::PointerLeft,
        "width" => CarouselMessage::Resized(arg?.parse().ok()?),
        "card" => CarouselMessage::ViewModeSelected(ViewMode::Carousel),
        "grid" => CarouselMessage::ViewModeSelected(ViewMode::Grid),
        "list" => CarouselMessage::ViewModeSelected(ViewMode::List),
        "open" => CarouselMessage::OpenFullView,
        "close" => CarouselMessage::Viewer(ViewerCommand::Close),
        "left" => CarouselMessage::KeyPressed(Key::ArrowLeft),
        "right" => CarouselMessage::KeyPressed(Key::ArrowRight),
        "home" => CarouselMessage::KeyPressed(Key::Home),
        "end" => CarouselMessage::KeyPressed(Key::End),
        "esc" => CarouselMessage::KeyPressed(Key::Escape),
        "show" | "s" => return Some(Command::Show),
        "quit" | "q" | "exit" => return Some(Command::Quit),
        _ => return None,
    };
    Some(Command::Message(message))
}

fn print_slide(session: &CarouselSession<ConsoleViewer>, change: SlideChange) {
    session.carousel().read(|carousel| {
        if let Some(entry) = carousel.current_entry() {
            println!(
                "[{}/{}] {} - {} ({:?}{})",
                change.index + 1,
                carousel.len(),
                entry.date,
                entry.title,
                change.direction,
                if change.autoplay { ", autoplay" } else { "" }
            );
        }
    });
}

fn print_view(session: &CarouselSession<ConsoleViewer>) {
    let view = session.view(&IconName);
    println!(
        "presentation={:?} scrub={:.1} loading={} autoplay={}",
        view.presentation,
        view.scrub_position,
        view.is_loading,
        view.autoplay_enabled
    );
    let ticks: Vec<String> = view
        .ticks
        .iter()
        .map(|tick| {
            if tick.active {
                format!("[{}]", tick.year)
            } else {
                tick.year.to_string()
            }
        })
        .collect();
    println!("timeline: {}", ticks.join(" "));
    for item in &view.overview {
        println!(
            "{} {:>3}  {}  {}",
            if item.selected { ">" } else { " " },
            item.index,
            item.record.date,
            item.record.title
        );
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => CarouselConfig::load_from(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => CarouselConfig::load(),
    };

    let json = tokio::fs::read_to_string(&args.entries)
        .await
        .with_context(|| format!("reading {}", args.entries.display()))?;
    let entries = memoir_model::entries_from_json(&json)
        .with_context(|| format!("parsing {}", args.entries.display()))?;
    if entries.is_empty() {
        bail!("{} contains no entries", args.entries.display());
    }

    let mut carousel = Carousel::with_config(entries, &config)?;
    if let Some(width) = args.width {
        carousel.resize(width);
    }

    let mut session = CarouselSession::mount(carousel, ConsoleViewer, config)?;
    let mut changes = session.subscribe();

    if args.no_preload {
        session.skip_preload();
    } else {
        let probe = SchemeProbe::new(
            HttpImageProbe::new(args.base_url.clone()),
            FsImageProbe::new(&args.media_root),
        );
        let report = session.preload(&probe).await;
        println!(
            "preloaded {}/{} images",
            report.loaded.len(),
            report.total()
        );
    }

    print_slide(&session, *changes.borrow_and_update());

    let deadline = args.run_for.map(|d| tokio::time::Instant::now() + d);
    let timeout = async {
        match deadline {
            Some(at) => tokio::time::sleep_until(at).await,
            None => futures::future::pending::<()>().await,
        }
    };
    tokio::pin!(timeout);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;

    loop {
        tokio::select! {
            _ = &mut timeout => break,
            changed = changes.changed() => {
                if changed.is_err() {
                    break;
                }
                let change = *changes.borrow_and_update();
                print_slide(&session, change);
            }
            line = lines.next_line(), if stdin_open => {
                match line.context("reading stdin")? {
                    Some(line) => match parse_command(&line) {
                        Some(Command::Quit) => break,
                        Some(Command::Show) => print_view(&session),
                        Some(Command::Message(message)) => {
                            if !session.dispatch(message) {
                                println!("(no change)");
                            }
                        }
                        None if line.trim().is_empty() => {}
                        None => println!("unknown command: {}", line.trim()),
                    },
                    None => {
                        stdin_open = false;
                        if deadline.is_none() && !session.is_autoplay_running() {
                            break;
                        }
                    }
                }
            }
        }
    }

    session.shutdown();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_navigation_commands() {
        assert_eq!(
            parse_command("next"),
            Some(Command::Message(CarouselMessage::Next))
        );
        assert_eq!(
            parse_command("year 2008"),
            Some(Command::Message(CarouselMessage::JumpToYear(2008)))
        );
        assert_eq!(
            parse_command("scrub 42.5"),
            Some(Command::Message(CarouselMessage::ScrubStarted(42.5)))
        );
        assert_eq!(parse_command("Q"), Some(Command::Quit));
    }

    #[test]
    fn rejects_unknown_or_incomplete_commands() {
        assert_eq!(parse_command("year"), None);
        assert_eq!(parse_command("year soon"), None);
        assert_eq!(parse_command("dance"), None);
        assert_eq!(parse_command("   "), None);
    }
}

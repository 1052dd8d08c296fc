use anyhow::{Context, Result, bail};
use chrono::Utc;
use clap::{Args as ClapArgs, Parser, Subcommand};
use log::LevelFilter;
use std::path::{Path, PathBuf};

use trackmap::config::FileConfig;
use trackmap::notes::{DEFAULT_SESSION, NoteBook, NoteStore, SessionExport, format_time};
use trackmap::notes::{progress, time_for_pos};
use trackmap::track::{BuildOptions, build_polyline, oval_track};
use trackmap::{NoteDraft, ProjectedPoint, Severity, TrackIndex, ViewBox};

/// Project track centerlines to drawing space and pin session notes along the lap
///
/// Examples:
///   # Print the projected centerline of a circuit
///   trackmap --track cota.geojson project
///
///   # Where is 40% of the lap?
///   trackmap --track cota.geojson locate --pos 0.4
///
///   # Turn a click on the map into a lap position
///   trackmap --track cota.geojson nearest --x 212 --y 64
///
///   # Pin a note where the driver clicked, on a 2:16 lap video
///   trackmap --track cota.geojson notes add --click-x 212 --click-y 64 --duration 136 --text "Brake later"
#[derive(Parser, Debug)]
#[command(name = "trackmap")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches trackmap.toml if not provided)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// GeoJSON track centerline (defaults to an oval)
    #[arg(short = 't', long, global = true)]
    track: Option<PathBuf>,

    /// Drawing surface width
    #[arg(long, global = true)]
    width: Option<f64>,

    /// Drawing surface height
    #[arg(long, global = true)]
    height: Option<f64>,

    /// Margin as a fraction of the width, below 0.5
    #[arg(long, global = true)]
    padding: Option<f64>,

    /// Douglas-Peucker tolerance in degrees applied before projection (0 = off)
    #[arg(long, global = true)]
    simplify: Option<f64>,

    /// Notes file (defaults to the user data directory)
    #[arg(long, global = true)]
    notes: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the projected track polyline as JSON
    Project,
    /// Print the point at a normalized lap position
    Locate {
        /// Position around the lap, clamped to 0..1
        #[arg(long, allow_hyphen_values = true)]
        pos: f64,
    },
    /// Print the lap position nearest to a drawing-surface point
    Nearest {
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
        #[arg(long, allow_hyphen_values = true)]
        y: f64,
    },
    /// Manage session notes
    Notes {
        #[command(subcommand)]
        action: NotesCommand,
    },
}

#[derive(Subcommand, Debug)]
enum NotesCommand {
    /// List notes in video order
    List,
    /// Add a note at the playhead, a lap position, or a map click
    Add(AddArgs),
    /// Delete a note by id
    Remove { id: String },
    /// Delete every note
    Clear,
    /// Write notes as a shareable JSON document
    Export {
        /// Output file (prints to stdout if omitted)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// Session label
        #[arg(long)]
        session: Option<String>,
    },
}

#[derive(ClapArgs, Debug)]
struct AddArgs {
    #[arg(long, default_value = "")]
    text: String,

    /// Note label (defaults to "Coach note")
    #[arg(long = "type", default_value = "")]
    kind: String,

    #[arg(long, value_enum, default_value = "info")]
    severity: Severity,

    /// Comma-separated tags
    #[arg(long, default_value = "")]
    tags: String,

    /// Share the note with the driver
    #[arg(long)]
    publish: bool,

    /// Playhead time in seconds
    #[arg(long, requires = "duration", conflicts_with_all = ["pos", "click_x"])]
    at: Option<f64>,

    /// Lap position, 0..1
    #[arg(long, conflicts_with = "click_x")]
    pos: Option<f64>,

    /// Map click x in drawing-surface units
    #[arg(long, requires_all = ["click_y", "duration"], allow_hyphen_values = true)]
    click_x: Option<f64>,

    /// Map click y in drawing-surface units
    #[arg(long, requires = "click_x", allow_hyphen_values = true)]
    click_y: Option<f64>,

    /// Lap video duration in seconds
    #[arg(long)]
    duration: Option<f64>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // config-file `verbose` raises the level after the file is read
    let rust_log_set = std::env::var_os("RUST_LOG").is_some();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    if !rust_log_set && !args.verbose {
        log::set_max_level(LevelFilter::Warn);
    }

    let file_config = if let Some(ref config_path) = args.config {
        if !config_path.exists() {
            bail!("Config file not found: {:?}", config_path);
        }
        Some(FileConfig::load_from(config_path)?)
    } else {
        FileConfig::load()
    };
    let file_config = file_config.unwrap_or_default();

    if !rust_log_set && file_config.verbose {
        log::set_max_level(LevelFilter::Debug);
    }

    let view_box = ViewBox::new(
        args.width.unwrap_or(file_config.view_box.width),
        args.height.unwrap_or(file_config.view_box.height),
        args.padding.unwrap_or(file_config.view_box.padding),
    );
    if !view_box.is_valid() {
        bail!(
            "Invalid view box {}x{} with padding {}: size must be positive and padding must leave room on both axes",
            view_box.width,
            view_box.height,
            view_box.padding
        );
    }

    let options = BuildOptions {
        view_box,
        simplify: args.simplify.unwrap_or(file_config.simplify),
    };

    let store = args
        .notes
        .clone()
        .or_else(|| file_config.notes.clone())
        .map(NoteStore::new)
        .unwrap_or_else(NoteStore::default_location);

    log::debug!("View box: {:?}", view_box);
    log::debug!("Notes file: {}", store.path().display());

    match args.command {
        Command::Project => {
            let index = load_track(args.track.as_deref(), &options)?;
            print_json(&serde_json::json!({
                "points": index.polyline().points(),
                "total_length": index.total_length(),
                "view_box": index.polyline().view_box(),
            }))?;
        }
        Command::Locate { pos } => {
            let index = load_track(args.track.as_deref(), &options)?;
            print_json(&index.point_for_pos(pos))?;
        }
        Command::Nearest { x, y } => {
            let index = load_track(args.track.as_deref(), &options)?;
            print_json(&index.nearest_point(ProjectedPoint::new(x, y)))?;
        }
        Command::Notes { action } => {
            let session = file_config.session.as_deref();
            run_notes(action, &store, args.track.as_deref(), &options, session)?;
        }
    }

    Ok(())
}

fn run_notes(
    action: NotesCommand,
    store: &NoteStore,
    track: Option<&Path>,
    options: &BuildOptions,
    session: Option<&str>,
) -> Result<()> {
    let mut book = NoteBook::new(store.load());

    match action {
        NotesCommand::List => {
            if book.is_empty() {
                println!("No notes yet. Add one at the playhead or click the track.");
            }
            for note in book.notes() {
                let tags = if note.tags.is_empty() {
                    String::new()
                } else {
                    format!("  #{}", note.tags.join(" #"))
                };
                println!(
                    "{}  {:>6}  pos {:.3}  {:<8} {}{}: {}{}",
                    note.id,
                    format_time(note.t),
                    note.pos,
                    note.severity.to_string(),
                    note.kind,
                    if note.publish { " (published)" } else { "" },
                    note.text,
                    tags
                );
            }
        }
        NotesCommand::Add(add) => {
            let duration = add.duration.unwrap_or(0.0);

            let (t, pos) = if let (Some(x), Some(y)) = (add.click_x, add.click_y) {
                let index = load_track(track, options)?;
                let hit = index.nearest_point(ProjectedPoint::new(x, y));
                (time_for_pos(hit.pos, duration), hit.pos)
            } else if let Some(at) = add.at {
                (at, progress(at, duration))
            } else if let Some(pos) = add.pos {
                (time_for_pos(pos, duration), pos)
            } else {
                bail!("Specify where the note goes: --at, --pos, or --click-x/--click-y");
            };

            let draft = NoteDraft {
                t,
                pos,
                kind: add.kind,
                severity: add.severity,
                tags: add.tags,
                text: add.text,
                publish: add.publish,
            };
            let note = draft.into_annotation(Utc::now());

            println!(
                "Added {} at {} (pos {:.3})",
                note.id,
                format_time(note.t),
                note.pos
            );
            book.add(note);
            store.save(book.notes())?;
        }
        NotesCommand::Remove { id } => {
            if !book.remove(&id) {
                bail!("No note with id {}", id);
            }
            store.save(book.notes())?;
            println!("Removed {}", id);
        }
        NotesCommand::Clear => {
            let count = book.len();
            book.clear();
            store.save(book.notes())?;
            println!("Removed {} notes", count);
        }
        NotesCommand::Export { output, session: label } => {
            let label = label.as_deref().or(session).unwrap_or(DEFAULT_SESSION);
            let export = SessionExport::new(label, book.notes(), Utc::now());
            match output {
                Some(path) => {
                    export.write(&path)?;
                    println!("Exported {} notes to {}", book.len(), path.display());
                }
                None => println!("{}", export.to_json()?),
            }
        }
    }

    Ok(())
}

/// Build the track index, substituting the default oval when no usable track is given
fn load_track(path: Option<&Path>, options: &BuildOptions) -> Result<TrackIndex> {
    let polyline = match path {
        Some(path) => {
            let document = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read track file: {:?}", path))?;
            let polyline = build_polyline(&document, options);
            if polyline.is_empty() {
                log::warn!("Track map unavailable, using the default oval");
                oval_track(options.view_box)
            } else {
                polyline
            }
        }
        None => oval_track(options.view_box),
    };

    let index = TrackIndex::new(polyline);
    log::debug!(
        "Track: {} points, {:.1} units long",
        index.polyline().len(),
        index.total_length()
    );
    Ok(index)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).context("Failed to serialize output")?
    );
    Ok(())
}

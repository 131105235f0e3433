//! roomplan CLI
//!
//! Usage:
//!   roomplan [OPTIONS] <COMMAND>
//!
//! Commands:
//!   seed     Insert the demo rooms if the owner has none
//!   list     List rooms, optionally for one floor
//!   add      Create a room at the default position
//!   remove   Delete a room
//!   move     Move a room, rejecting illegal placements
//!   resize   Resize a room, rejecting illegal placements
//!   lint     Report rooms that break the canvas invariants
//!   render   Render the floor plan as SVG
//!
//! Options:
//!   --store <FILE>   JSON room store [default: rooms.json]
//!   --owner <ID>     Owner whose rooms are used [default: demo-user-id]
//!   --config <FILE>  Canvas configuration (TOML format)
//!   -v, --verbose    Log debug output to stderr

use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use roomplan::layout::{
    available_floors, find_collision, find_room, lint, Proposal, RoomStatus, RoomType,
};
use roomplan::store::{seed_demo, DEMO_OWNER_ID};
use roomplan::{
    render_with_config, CanvasConfig, CanvasController, CommitOutcome, JsonFileStore, LayoutError,
    NewRoom, PlanError, RenderConfig, Room, Stylesheet, ViewMode,
};

#[derive(Parser)]
#[command(name = "roomplan")]
#[command(about = "Floor-plan layout tool for rental room dashboards")]
struct Cli {
    /// JSON room store
    #[arg(long, global = true, default_value = "rooms.json")]
    store: PathBuf,

    /// Owner whose rooms are used
    #[arg(long, global = true, default_value = DEMO_OWNER_ID)]
    owner: String,

    /// Canvas configuration file (TOML format)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Insert the demo rooms if the owner has none
    Seed,

    /// List rooms, optionally for one floor
    List {
        #[arg(short, long)]
        floor: Option<i32>,
    },

    /// Create a room at the default position
    Add {
        /// Room number shown on the card
        number: String,

        #[arg(short, long)]
        floor: i32,

        #[arg(long, default_value = "vacant")]
        status: RoomStatus,

        #[arg(long = "type", default_value = "window")]
        room_type: RoomType,

        #[arg(long)]
        price: Option<u64>,
    },

    /// Delete a room
    Remove {
        /// Room id or number
        room: String,
    },

    /// Move a room, rejecting illegal placements
    Move {
        /// Room id or number
        room: String,
        x: f64,
        y: f64,
    },

    /// Resize a room, rejecting illegal placements
    Resize {
        /// Room id or number
        room: String,
        width: f64,
        height: f64,
    },

    /// Report rooms that break the canvas invariants
    Lint,

    /// Render the floor plan as SVG
    Render {
        /// "all" or a floor number
        #[arg(long, default_value = "all")]
        view: ViewMode,

        /// Stylesheet file for status colors (TOML format)
        #[arg(short, long)]
        stylesheet: Option<PathBuf>,

        /// Output file (stdout if not provided)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            if let PlanError::Layout(layout) = &e {
                print_suggestions(layout);
            }
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "roomplan=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn print_suggestions(error: &LayoutError) {
    if let Some(suggestions) = error.suggestions() {
        if !suggestions.is_empty() {
            eprintln!("  did you mean: {}?", suggestions.join(", "));
        }
    }
}

/// Run one command; `Ok(false)` means the command ran but reported a problem
fn run(cli: Cli) -> Result<bool, PlanError> {
    let config = match &cli.config {
        Some(path) => CanvasConfig::from_file(path)?,
        None => CanvasConfig::default(),
    };
    let store = JsonFileStore::open(&cli.store).with_config(config.clone());
    let mut controller = CanvasController::load(store, cli.owner.clone(), config.clone())?;

    match cli.command {
        Command::Seed => {
            let mut store = controller.into_store();
            let created = seed_demo(&mut store, &cli.owner)?;
            if created.is_empty() {
                println!("{} already has rooms; nothing seeded", cli.owner);
            } else {
                println!("Seeded {} rooms into {}", created.len(), cli.store.display());
            }
            Ok(true)
        }
        Command::List { floor } => {
            let floors = match floor {
                Some(floor) => vec![floor],
                None => available_floors(controller.rooms()).into_iter().rev().collect(),
            };
            for floor in floors {
                println!("Floor {}", floor);
                for room in controller.rooms().iter().filter(|r| r.floor == floor) {
                    print_room(room);
                }
            }
            Ok(true)
        }
        Command::Add {
            number,
            floor,
            status,
            room_type,
            price,
        } => {
            let mut new_room = NewRoom::new(cli.owner.clone(), number, floor)
                .with_status(status)
                .with_type(room_type);
            if let Some(price) = price {
                new_room = new_room.with_base_price(price);
            }
            let room = controller.create_room(new_room)?;
            println!("Created room {} ({})", room.number, room.id);
            let placed = Proposal::at(room.x, room.y);
            if let Some(collision) = find_collision(&room, controller.rooms(), &placed, &config) {
                eprintln!("warning: room {} {}; move it before use", room.number, collision);
            }
            Ok(true)
        }
        Command::Remove { room } => {
            let id = find_room(controller.rooms(), &room)?.id.clone();
            controller.remove_room(&id)?;
            println!("Removed room {}", room);
            Ok(true)
        }
        Command::Move { room, x, y } => {
            let id = find_room(controller.rooms(), &room)?.id.clone();
            Ok(report(controller.commit_move(&id, x, y)?))
        }
        Command::Resize {
            room,
            width,
            height,
        } => {
            let id = find_room(controller.rooms(), &room)?.id.clone();
            Ok(report(controller.commit_resize(&id, width, height)?))
        }
        Command::Lint => {
            let warnings = lint::check(controller.rooms(), &config);
            for warning in &warnings {
                println!("{}", warning);
            }
            if warnings.is_empty() {
                println!("No issues found in {} rooms", controller.rooms().len());
            }
            Ok(warnings.is_empty())
        }
        Command::Render {
            view,
            stylesheet,
            output,
        } => {
            let stylesheet = match &stylesheet {
                Some(path) => Stylesheet::from_file(path)?,
                None => Stylesheet::default(),
            };
            let render_config = RenderConfig::new()
                .with_canvas(config)
                .with_stylesheet(stylesheet);
            let svg = render_with_config(controller.rooms(), view, &render_config)?;
            match &output {
                Some(path) => {
                    if let Err(e) = fs::write(path, svg) {
                        eprintln!("Error writing '{}': {}", path.display(), e);
                        return Ok(false);
                    }
                }
                None => println!("{}", svg),
            }
            Ok(true)
        }
    }
}

fn print_room(room: &Room) {
    println!(
        "  {:<8} {:<10} {:<13} {:<10} at ({}, {}) size {}x{}",
        room.number,
        room.id,
        room.status.label(),
        room.room_type.label(),
        room.x,
        room.y,
        room.width,
        room.height
    );
}

fn report(outcome: CommitOutcome) -> bool {
    match outcome {
        CommitOutcome::Committed(room) => {
            println!(
                "Room {} now at ({}, {}) size {}x{}",
                room.number, room.x, room.y, room.width, room.height
            );
            true
        }
        CommitOutcome::Rejected(collision) => {
            eprintln!("Rejected: {}", collision);
            false
        }
        CommitOutcome::Ignored => {
            eprintln!("Room is no longer in the store");
            false
        }
    }
}

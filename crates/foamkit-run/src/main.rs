//! foamkit-run - inspect, validate, format and generate case files.

use clap::{Parser, Subcommand};
use foamkit::{case, write, ConditionRegistry, FieldFile, FoamResult};
use std::path::PathBuf;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "foamkit-run")]
#[command(about = "Inspect, validate and format OpenFOAM case dictionaries")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a case file and print a summary
    Parse {
        /// Path to the case file
        file: PathBuf,
    },

    /// Parse a case file and validate its boundary conditions
    Check {
        /// Path to the case file
        file: PathBuf,
    },

    /// Re-emit a case file in canonical form
    Fmt {
        /// Path to the case file
        file: PathBuf,

        /// Write here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write a skeleton sampleDict produced by the builder
    Sample {
        /// Output path
        output: PathBuf,
    },
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "foamkit=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> FoamResult<()> {
    match cli.command {
        Command::Parse { file } => {
            let parsed = foamkit::parse_file(&file)?;
            print_summary(&parsed);
            Ok(())
        }
        Command::Check { file } => {
            let parsed = foamkit::parse_file(&file)?;
            let registry = ConditionRegistry::builtin();
            if parsed.body.contains_key("boundaryField") {
                registry
                    .validate_field(&parsed)
                    .map_err(|e| e.in_file(&file))?;
                let patches = parsed.boundary_field().map(|b| b.len()).unwrap_or(0);
                println!("{}: ok ({} patches)", file.display(), patches);
            } else {
                println!("{}: ok (no boundaryField)", file.display());
            }
            Ok(())
        }
        Command::Fmt { file, output } => {
            let parsed = foamkit::parse_file(&file)?;
            match output {
                Some(out) => write::write_file(out, &parsed),
                None => {
                    print!("{}", write::serialize(&parsed));
                    Ok(())
                }
            }
        }
        Command::Sample { output } => {
            let dict = case::SampleDict::new()
                .line_set("lineX1", "distance", [0.02, 0.0, 0.0], [0.02, 0.0, 0.1], 100)
                .patch_surface("frontWall", &["front"], false)
                .field("U")
                .to_field_file();
            write::write_file(&output, &dict)?;
            println!("wrote {}", output.display());
            Ok(())
        }
    }
}

fn print_summary(file: &FieldFile) {
    println!("class   {}", file.header.class);
    println!("object  {}", file.header.object);
    if let Ok(dimensions) = file.dimensions() {
        println!("dims    {}", dimensions);
    }
    println!("entries:");
    for (key, value) in file.body.iter() {
        println!("  {:<16} {}", key, value.type_name());
    }
    if let Ok(boundary) = file.boundary_field() {
        println!("patches:");
        for (name, patch) in boundary.iter() {
            let kind = patch
                .as_dict()
                .and_then(|d| d.get("type"))
                .and_then(|v| v.as_word())
                .unwrap_or("?");
            println!("  {:<16} {}", name, kind);
        }
    }
}

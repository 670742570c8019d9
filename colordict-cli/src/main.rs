use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colordict::{
    Color, ColorDict, ColorDictOptions, ColorSpace, Encoding, HexColor, HexParams, JsonDirStore,
};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "cdict",
    about = "Manage named color palettes",
    version,
    author
)]
struct Cli {
    /// Directory holding one JSON file per palette
    #[arg(long, global = true)]
    palettes_path: Option<PathBuf>,

    /// Backup file (defaults to backup.json next to the palettes directory)
    #[arg(long, global = true)]
    backup_path: Option<PathBuf>,

    /// Log palette reads and writes
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List colors, optionally of a single palette
    List {
        /// Palette to list
        #[arg(short, long)]
        palette: Option<String>,
    },

    /// Show a color
    Get {
        /// Color name
        name: String,

        /// Representation to show the color in
        #[arg(short, long, value_enum, default_value = "hex")]
        space: Space,
    },

    /// Add a color to a palette
    Add {
        /// Color name
        name: String,

        /// Color as `rrggbb` or `aarrggbb`, with or without a leading '#'
        hex: String,

        /// Palette to add the color to
        #[arg(short, long, default_value = colordict::DEFAULT_PALETTE)]
        palette: String,
    },

    /// Remove a color from one palette, or from every palette
    Remove {
        /// Color name
        name: String,

        /// Palette to remove the color from (all palettes if not specified)
        #[arg(short, long)]
        palette: Option<String>,
    },

    /// Convert a hex color to another representation
    Convert {
        /// Color as `rrggbb` or `aarrggbb`
        hex: String,

        /// Target representation
        #[arg(short, long, value_enum)]
        space: Space,
    },

    /// Write every palette to the backup file
    Backup,

    /// Replace the palettes with the contents of the backup file
    Restore,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Space {
    Rgb,
    Hsl,
    Hsv,
    Cmyk,
    Cmy,
    Hex,
}

impl Space {
    fn encoding(self) -> Encoding {
        match self {
            Space::Rgb => Encoding::Srgb(Default::default()),
            Space::Hsl => Encoding::Hsl(Default::default()),
            Space::Hsv => Encoding::Hsv(Default::default()),
            Space::Cmyk => Encoding::Cmyk(Default::default()),
            Space::Cmy => Encoding::Cmy(Default::default()),
            Space::Hex => Encoding::Hex(Default::default()),
        }
    }

    fn show(self, color: &Color) -> String {
        self.encoding().materialize(color.rgba()).to_string()
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "colordict=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn open(cli: &Cli) -> Result<ColorDict<JsonDirStore>> {
    let mut options = ColorDictOptions::default();
    if let Some(path) = &cli.palettes_path {
        options = options.with_palettes_path(path);
    }
    if let Some(path) = &cli.backup_path {
        options = options.with_backup_path(path);
    }

    let path = options.palettes_path.clone();
    debug!(path = %path.display(), "opening palettes");
    ColorDict::open(options)
        .with_context(|| format!("Failed to load palettes from {}", path.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Commands::List { palette } => {
            let colors = open(&cli)?;
            match palette {
                Some(palette) => {
                    let members = colors
                        .palette(palette)
                        .with_context(|| format!("Palette '{palette}' does not exist"))?;
                    for name in members {
                        if let Some(color) = colors.get(name) {
                            println!("{name}\t{}", color.hex());
                        }
                    }
                }
                None => {
                    for (palette, members) in colors.palettes() {
                        println!("{palette} ({} colors)", members.len());
                        for name in members {
                            if let Some(color) = colors.get(name) {
                                println!("  {name}\t{}", color.hex());
                            }
                        }
                    }
                }
            }
        }

        Commands::Get { name, space } => {
            let colors = open(&cli)?;
            let color = colors
                .get(name)
                .with_context(|| format!("Color '{name}' does not exist"))?;
            println!("{}", space.show(color));
        }

        Commands::Add { name, hex, palette } => {
            let mut colors = open(&cli)?;
            colors
                .add_to(name, hex.as_str(), palette)
                .with_context(|| format!("Failed to add '{name}' to palette '{palette}'"))?;
            colors.save().context("Failed to save palettes")?;
            println!("Added {name} to {palette}");
        }

        Commands::Remove { name, palette } => {
            let mut colors = open(&cli)?;
            match palette {
                Some(palette) => {
                    colors.remove(name, palette)?;
                    println!("Removed {name} from {palette}");
                }
                None => {
                    colors.remove_all(name)?;
                    println!("Removed {name}");
                }
            }
            colors.save().context("Failed to save palettes")?;
        }

        Commands::Convert { hex, space } => {
            let color = HexColor::parse(hex, HexParams::default())
                .with_context(|| format!("'{hex}' is not a hex color"))?;
            println!("{}", space.show(&Color::from(color)));
        }

        Commands::Backup => {
            let mut colors = open(&cli)?;
            colors.backup().context("Failed to write backup")?;
            println!("Backed up {} palettes", colors.palettes().count());
        }

        Commands::Restore => {
            let mut colors = open(&cli)?;
            let report = colors.restore_backup().context("Failed to read backup")?;
            let written = colors.save().context("Failed to save palettes")?;
            println!(
                "Restored {} colors into {written} palettes",
                colors.len()
            );
            for collision in &report.collisions {
                eprintln!(
                    "warning: '{}' in {} ignored, already bound to {}",
                    collision.name, collision.palette, collision.kept
                );
            }
        }
    }

    Ok(())
}

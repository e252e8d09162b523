use anyhow::{Context, Result};
use bootfs::MappedImage;
use clap::{Parser, Subcommand};
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};
use tracing::{Level, info};

mod commands;
mod hexdump;

use commands::{cat::cat_file, dump::dump_image, info::print_info, list::list_entries};

#[derive(Parser)]
#[command(name = "bootfs-dump")]
#[command(about = "Inspect BootFS images")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the header fields and entry count
    Info {
        /// BootFS image file
        image: PathBuf,
    },

    /// List directory entries: name, size and payload offset
    List {
        /// BootFS image file
        image: PathBuf,
    },

    /// Print the header, then every file with a hexdump of its payload
    Dump {
        /// BootFS image file
        image: PathBuf,

        /// Only dump the first entry with this name
        #[arg(long)]
        name: Option<String>,
    },

    /// Write one payload to stdout or a file
    Cat {
        /// BootFS image file
        image: PathBuf,

        /// Entry name, matched byte for byte
        name: String,

        /// Output path (defaults to stdout)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

fn map_image(path: &Path) -> Result<MappedImage> {
    info!("reading bootfs image {}", path.display());
    MappedImage::open(path).with_context(|| format!("map {}", path.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let mut stdout = BufWriter::new(stdout.lock());

    match cli.command {
        Commands::Info { image } => {
            let mapped = map_image(&image)?;
            print_info(&mapped.image()?, &mut stdout)?;
        }
        Commands::List { image } => {
            let mapped = map_image(&image)?;
            list_entries(&mapped.image()?, &mut stdout)?;
        }
        Commands::Dump { image, name } => {
            let mapped = map_image(&image)?;
            dump_image(&mapped.image()?, name.as_deref(), &mut stdout)?;
        }
        Commands::Cat { image, name, out } => {
            let mapped = map_image(&image)?;
            let img = mapped.image()?;
            let written = match out {
                Some(p) => {
                    let f = File::create(&p).with_context(|| format!("create {}", p.display()))?;
                    let mut w = BufWriter::new(f);
                    let n = cat_file(&img, &name, &mut w)?;
                    w.flush().context("flush output")?;
                    n
                }
                None => cat_file(&img, &name, &mut stdout)?,
            };
            info!(name = %name, bytes = written, "payload written");
        }
    }

    stdout.flush().context("flush stdout")?;
    Ok(())
}

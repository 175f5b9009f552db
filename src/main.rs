use clap::{Parser, Subcommand};
use folio::types::{CollectionSummary, ImageSummary};
use folio::{Store, config, output};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Browse image collections stored on the local filesystem")]
#[command(long_about = "\
Browse image collections stored on the local filesystem

Every immediate subdirectory of the root is a collection. Files ending in
.gif, .jpg or .png (any case) are its images; everything else is ignored.

  media/                 # root
  ├── coll-a/            # collection → <base_url>/coll-a
  │   ├── a2i.jpg        # image      → <base_url>/coll-a/a2i.jpg
  │   └── notes.txt      # ignored
  └── coll-b/

Run 'folio gen-config' to generate a documented folio.toml.")]
#[command(version)]
struct Cli {
    /// Config file (defaults to ./folio.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Store root directory (overrides config)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Base URL for collection and image URLs (overrides config)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Log debug events from the catalog
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every collection with its image count
    Collections {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Page through the images of one collection
    Images {
        /// Collection name (its directory name)
        collection: String,
        /// Images per batch; 0 lists everything in one batch
        #[arg(long, default_value_t = 20)]
        batch: isize,
        /// Print one JSON array per batch, one per line
        #[arg(long)]
        json: bool,
    },
    /// Scan the root and every collection, failing on the first I/O error
    Check,
    /// Print a stock folio.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let Cli {
        config: config_path,
        root,
        base_url,
        verbose,
        command,
    } = Cli::parse();

    let open = || -> Result<(config::CatalogConfig, Store), Box<dyn std::error::Error>> {
        let mut site = match &config_path {
            Some(path) => config::load_config_file(path)?,
            None => config::load_config(Path::new("."))?,
        };
        if let Some(root) = &root {
            site.root = root.to_string_lossy().to_string();
        }
        if let Some(base_url) = &base_url {
            site.base_url = base_url.clone();
        }
        init_tracing(&site.logging, verbose);
        let store = Store::from_config(&site)?;
        Ok((site, store))
    };

    match command {
        Command::Collections { json } => {
            let (_, store) = open()?;
            let mut summaries = Vec::with_capacity(store.len());
            for coll in store.collections() {
                let images = coll.images()?.len();
                summaries.push(CollectionSummary::new(&coll, images));
            }
            if json {
                println!("{}", serde_json::to_string_pretty(&summaries)?);
            } else {
                output::print_collections(&summaries);
            }
        }
        Command::Images {
            collection,
            batch,
            json,
        } => {
            let (site, store) = open()?;
            let coll = store
                .collection(&collection)
                .ok_or_else(|| format!("No collection named '{collection}' in {}", site.root))?;
            let mut list = coll.images()?;

            if !json {
                println!("{}", coll.name());
            }
            let mut index = 1;
            let mut position = 1;
            loop {
                let page = list.read_list(batch);
                let summaries: Vec<ImageSummary> = page.items.iter().map(Into::into).collect();
                // Drain mode never reports the end; it is always a single batch.
                let end = page.is_end() || batch <= 0;
                if !summaries.is_empty() || index == 1 {
                    if json {
                        println!("{}", output::format_image_batch_json(&summaries)?);
                    } else {
                        output::print_image_batch(index, position, &summaries, end);
                    }
                }
                if end {
                    break;
                }
                position += summaries.len();
                index += 1;
            }
        }
        Command::Check => {
            let (_, store) = open()?;
            println!("==> Checking {}", store.root().display());
            let mut images = 0;
            for coll in store.collections() {
                images += coll.images()?.len();
            }
            println!("{}", output::format_check_summary(store.len(), images));
            println!("==> Catalog is readable");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins over `--verbose`, which wins over `[logging] filter`.
fn init_tracing(logging: &config::LoggingConfig, verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("folio=debug")
        } else {
            EnvFilter::new(&logging.filter)
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

use clap::{Parser, Subcommand};
use docboard::{config, emit, group, output, scan};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "docboard")]
#[command(about = "Static dashboard generator for Markdown document trees")]
#[command(long_about = "\
Static dashboard generator for Markdown document trees

Your filesystem is the data source. Every .md file becomes a page, every
folder becomes a group on the index, and documents are ordered by
modification time, newest first.

Content structure:

  docs/
  ├── config.toml              # Site config (optional)
  ├── root.md                  # Root document → root.html
  └── notes/
      └── sub.md               # Nested document → notes_sub.html, grouped as \"notes\"

  assets/                      # Sibling asset directory → copied to <output>/assets/

Hidden directories and names on the ignore list (node_modules, dist, ...)
are skipped entirely.

Metadata resolution:
  Title:       first '# ' heading → filename
  Description: first non-blank, non-heading line, truncated to 150 chars
  Order:       modification time, newest first

Run 'docboard gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Document source directory
    #[arg(long, default_value = "docs", global = true)]
    source: PathBuf,

    /// Asset directory, copied verbatim into the output
    #[arg(long, default_value = "assets", global = true)]
    assets: PathBuf,

    /// Output directory
    #[arg(long, default_value = "site", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the full pipeline: scan → generate pages → copy assets
    Build,
    /// Scan the source tree and print the document inventory
    Scan {
        /// Print scanned records as JSON instead of the inventory
        #[arg(long)]
        json: bool,
    },
    /// Validate the source tree without writing output
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            println!("==> Stage 1: Scanning {}", cli.source.display());
            let config = config::load_config(&cli.source)?;
            let records = scan::scan(&cli.source, &config)?;
            let groups = group::by_folder(&records, &config.root_group_label);
            output::print_scan_output(&groups, &cli.source);

            println!(
                "==> Stage 2: Generating HTML \u{2192} {}",
                cli.output.display()
            );
            let site = emit::assemble(&records, &config);
            let summary = emit::emit(&site, &cli.assets, &cli.output)?;
            output::print_build_output(&site.model, &summary);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Scan { json } => {
            let config = config::load_config(&cli.source)?;
            let records = scan::scan(&cli.source, &config)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else {
                let groups = group::by_folder(&records, &config.root_group_label);
                output::print_scan_output(&groups, &cli.source);
            }
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let config = config::load_config(&cli.source)?;
            let records = scan::scan(&cli.source, &config)?;
            let groups = group::by_folder(&records, &config.root_group_label);
            output::print_scan_output(&groups, &cli.source);
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

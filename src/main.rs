use clap::{Parser, Subcommand};
use searock_site::cms::ContentAdapter;
use searock_site::types::ContentSnapshot;
use searock_site::{config, generate, output};
use std::path::{Path, PathBuf};

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "searock-site")]
#[command(about = "Static site builder for the Searock brochure website")]
#[command(long_about = "\
Static site builder for the Searock brochure website

Blogs, gallery images, testimonials and the hero background come from a
Storyblok space when an access token is available, and from built-in
placeholder content otherwise.

Source structure:

  site/
  ├── config.toml          # Site config (optional, overrides stock defaults)
  └── public/              # Static assets → copied to output root
      └── images/

Content token:

  Set the variable named by [cms].token_env (default STORYBLOK_TOKEN).
  Without it no request is made and the build is fully offline.

Run 'searock-site gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Source directory (config.toml and public/)
    #[arg(long, default_value = "site", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Directory for intermediate files (content snapshot)
    #[arg(long, default_value = ".searock-temp", global = true)]
    temp_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch remote content into a snapshot
    Fetch,
    /// Produce the final HTML site from the snapshot
    Generate,
    /// Run the full pipeline: fetch → generate
    Build,
    /// Validate config.toml without building
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let content_path = cli.temp_dir.join("content.json");

    match cli.command {
        Command::Fetch => {
            let site_config = config::load_config(&cli.source)?;
            let snapshot = fetch(&site_config)?;
            write_snapshot(&content_path, &snapshot)?;
            output::print_fetch_output(&snapshot);
        }
        Command::Generate => {
            let site_config = config::load_config(&cli.source)?;
            let report =
                generate::generate(&content_path, &cli.source, &cli.output, &site_config)?;
            output::print_generate_output(&report);
        }
        Command::Build => {
            let site_config = config::load_config(&cli.source)?;

            println!("==> Stage 1: Fetching content");
            let snapshot = fetch(&site_config)?;
            write_snapshot(&content_path, &snapshot)?;
            output::print_fetch_output(&snapshot);

            println!("==> Stage 2: Generating HTML → {}", cli.output.display());
            let report =
                generate::generate(&content_path, &cli.source, &cli.output, &site_config)?;
            output::print_generate_output(&report);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let site_config = config::load_config(&cli.source)?;
            let token_present = site_config.cms.token_from_env().is_some();
            output::print_check_output(&site_config, token_present);
            println!("==> Config is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Run the four content fetches on a multi-threaded runtime.
fn fetch(site_config: &config::SiteConfig) -> Result<ContentSnapshot, std::io::Error> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let adapter = ContentAdapter::from_config(&site_config.cms);
    Ok(runtime.block_on(adapter.fetch_all()))
}

fn write_snapshot(
    path: &Path,
    snapshot: &ContentSnapshot,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(snapshot)?;
    std::fs::write(path, json)?;
    Ok(())
}

//! `gr-logo` command line renderer.
//!
//! Examples:
//!   gr-logo render -o logo.png                          # original theme, 256×256
//!   gr-logo render -t rainbow -W 512 -H 256 --fill -o banner.png
//!   gr-logo render -t random --background "#ffffff" -o random.png
//!   gr-logo render --profile saved.json -o logo.png     # settings from a profile
//!   gr-logo themes                                      # list theme names

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use gr_logo::{Component, Configurable, LogoComponent, LogoProfile, Rgba, ThemeName, raster};
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "gr-logo", version, about = "Render the GR logo in any theme")]
struct Cli {
    /// Log debug output (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the logo to a PNG file
    Render(RenderArgs),
    /// List the available themes
    Themes,
}

#[derive(clap::Args, Debug)]
struct RenderArgs {
    /// Theme name, or "random"
    #[arg(short, long)]
    theme: Option<String>,

    /// Width of the box the logo is placed in, in pixels
    #[arg(short = 'W', long)]
    width: Option<u32>,

    /// Height of the box the logo is placed in, in pixels
    #[arg(short = 'H', long)]
    height: Option<u32>,

    /// Stretch the background to the box instead of staying square
    #[arg(short, long)]
    fill: bool,

    /// Flatten onto this color instead of keeping transparency
    #[arg(short, long, value_name = "COLOR")]
    background: Option<String>,

    /// JSON profile to start from; other flags override its fields
    #[arg(short, long, value_name = "PATH")]
    profile: Option<PathBuf>,

    /// Also write the effective profile as JSON
    #[arg(long, value_name = "PATH")]
    save_profile: Option<PathBuf>,

    /// Output PNG path
    #[arg(short, long, value_name = "PATH")]
    output: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    match cli.command {
        Command::Render(args) => render(args),
        Command::Themes => {
            for name in ThemeName::ALL {
                if name.is_selectable() {
                    println!("{name}");
                } else {
                    println!("{name} (never picked at random)");
                }
            }
            Ok(())
        }
    }
}

fn setup_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("gr_logo=debug,warn")
        } else {
            EnvFilter::new("warn")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_profile(args: &RenderArgs) -> Result<LogoProfile> {
    let mut profile = match &args.profile {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading profile {}", path.display()))?;
            LogoProfile::from_json(&json)
                .with_context(|| format!("parsing profile {}", path.display()))?
        }
        None => LogoProfile::new(),
    };

    if let Some(theme) = &args.theme {
        profile.theme = theme.clone();
    }
    if let Some(width) = args.width {
        profile.width = width;
    }
    if let Some(height) = args.height {
        profile.height = height;
    }
    if args.fill {
        profile.fill = true;
    }
    if let Some(background) = &args.background {
        profile.background = Some(background.clone());
    }
    Ok(profile)
}

fn render(args: RenderArgs) -> Result<()> {
    let profile = load_profile(&args)?;
    debug!(?profile, "effective profile");

    let background = profile
        .background
        .as_deref()
        .map(str::parse::<Rgba>)
        .transpose()
        .context("parsing --background")?;

    let mut logo = LogoComponent::new();
    logo.apply_profile(&profile);
    logo.on_attach(profile.width, profile.height);

    let Some(canvas) = logo.canvas() else {
        bail!("cannot render into a {}x{} box", profile.width, profile.height);
    };

    match background {
        Some(color) => raster::encode_png(&raster::flatten_onto(canvas, color)?, &args.output)?,
        None => raster::encode_png(canvas, &args.output)?,
    }
    info!(path = %args.output.display(), theme = %logo.theme(), "wrote logo");

    if let Some(path) = &args.save_profile {
        let mut exported = logo.export_profile();
        exported.background = profile.background.clone();
        std::fs::write(path, exported.to_json_pretty()?)
            .with_context(|| format!("writing profile {}", path.display()))?;
    }

    Ok(())
}

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use eyre::WrapErr;
use text_fit::{encode_png, render_card, resolve_font, Diagnostics, RenderConfig};
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};

/// Render text, centred and as large as it fits, onto a PNG card.
#[derive(Parser)]
#[clap(version)]
struct Args {
    /// The text to render
    #[clap(long, short)]
    text: String,

    /// Credited in brackets in the bottom right corner
    #[clap(long, short)]
    source: Option<String>,

    /// Where to write the PNG; `-` writes to stdout
    #[clap(long, short, default_value = "image.png")]
    output: PathBuf,

    /// A JSON file overriding the default configuration
    #[clap(long, short)]
    config: Option<PathBuf>,

    /// A font to try before the configured candidates
    #[clap(long)]
    font: Option<PathBuf>,

    /// A background image to try before the configured candidates
    #[clap(long)]
    background: Option<PathBuf>,

    /// Keep the text on a single line
    #[clap(long)]
    no_wrap: bool,

    /// Print layout diagnostics as JSON instead of writing the image
    #[clap(long)]
    debug: bool,
}

fn init_log() {
    let mut filter = EnvFilter::default();

    if cfg!(debug_assertions) {
        filter = filter.add_directive(tracing::Level::DEBUG.into());
    }

    if let Ok(env) = std::env::var("RUST_LOG") {
        if let Ok(env) = env.parse() {
            filter = filter.add_directive(env);
        }
    }

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn run(args: Args) -> eyre::Result<()> {
    let mut config = match &args.config {
        Some(path) => RenderConfig::from_json_file(path)
            .wrap_err_with(|| format!("reading config {}", path.display()))?,
        None => RenderConfig::default(),
    };
    if let Some(font) = args.font {
        config.font_candidates.insert(0, font);
    }
    if let Some(background) = args.background {
        config.background_candidates.insert(0, background);
    }
    if args.no_wrap {
        config.wrap = false;
    }

    let mut diagnostics = if args.debug {
        Diagnostics::enabled()
    } else {
        Diagnostics::disabled()
    };

    let font = resolve_font(&config, &mut diagnostics)?;
    let image = render_card(
        &config,
        &font,
        &args.text,
        args.source.as_deref(),
        &mut diagnostics,
    )?;

    if diagnostics.is_enabled() {
        println!("{}", diagnostics.to_json_pretty()?);
        return Ok(());
    }

    let png = encode_png(&image)?;
    if args.output.as_os_str() == "-" {
        std::io::stdout().lock().write_all(&png)?;
    } else {
        std::fs::write(&args.output, png)
            .wrap_err_with(|| format!("writing {}", args.output.display()))?;
        tracing::info!(path = %args.output.display(), "wrote card");
    }

    Ok(())
}

fn main() -> ExitCode {
    init_log();

    if let Err(err) = run(Args::parse()) {
        eprintln!("{err:#}");

        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

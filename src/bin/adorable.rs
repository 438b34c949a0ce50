use std::{
    fmt::Write as _,
    path::{Path, PathBuf},
};

use adorable::{Generator, GeneratorConfig, Rgba8};
use anyhow::Context as _;
use base64::Engine as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(name = "adorable", version, about = "Deterministic cartoon avatars")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the avatar derived from a seed.
    Seed(SeedArgs),
    /// Write an avatar from a fresh random seed.
    Random(RandomArgs),
    /// Write an HTML page of sample avatars for eyeballing the generator.
    Sampler(SamplerArgs),
}

#[derive(Args, Debug)]
struct GenOpts {
    /// Fixed background color (`#rrggbb` or `#rrggbbaa`).
    #[arg(long, value_parser = parse_color)]
    color: Option<Rgba8>,

    /// Generator config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct SeedArgs {
    /// Seed text (UTF-8 bytes, or hex digits with `--hex`).
    seed: String,

    /// Interpret the seed as hex.
    #[arg(long)]
    hex: bool,

    #[command(flatten)]
    opts: GenOpts,
}

#[derive(Parser, Debug)]
struct RandomArgs {
    #[command(flatten)]
    opts: GenOpts,
}

#[derive(Parser, Debug)]
struct SamplerArgs {
    /// Avatars per section.
    #[arg(long, default_value_t = 125)]
    count: usize,

    /// Output HTML path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Seed(args) => cmd_seed(args),
        Command::Random(args) => cmd_random(args),
        Command::Sampler(args) => cmd_sampler(args),
    }
}

fn parse_color(s: &str) -> Result<Rgba8, String> {
    Rgba8::from_hex(s).map_err(|e| e.to_string())
}

fn make_generator(config: Option<&Path>) -> anyhow::Result<Generator> {
    let config = match config {
        Some(path) => GeneratorConfig::from_json_file(path)?,
        None => GeneratorConfig::default(),
    };
    Ok(Generator::new(config)?)
}

fn cmd_seed(args: SeedArgs) -> anyhow::Result<()> {
    let seed = if args.hex {
        hex::decode(args.seed.trim()).context("parse hex seed")?
    } else {
        args.seed.into_bytes()
    };

    let generator = make_generator(args.opts.config.as_deref())?;
    let png = match args.opts.color {
        Some(color) => generator.from_seed_with_color(&seed, color)?,
        None => generator.from_seed(&seed)?,
    };
    write_output(&args.opts.out, &png)
}

fn cmd_random(args: RandomArgs) -> anyhow::Result<()> {
    let generator = make_generator(args.opts.config.as_deref())?;
    let png = match args.opts.color {
        Some(color) => generator.random_with_color(color)?,
        None => generator.random()?,
    };
    write_output(&args.opts.out, &png)
}

fn cmd_sampler(args: SamplerArgs) -> anyhow::Result<()> {
    let generator = Generator::default();
    let tint = |i: usize| Rgba8::opaque(96, (2 * i) as u8, 192);

    let mut html = String::from("<html><body>");

    tracing::info!(count = args.count, "generating fully random avatars");
    html.push_str("<h3>Fully random</h3>");
    for _ in 0..args.count {
        push_img(&mut html, &generator.random()?);
    }

    tracing::info!(count = args.count, "generating random avatars with color");
    html.push_str("<h3>Random with color</h3>");
    for i in 0..args.count {
        push_img(&mut html, &generator.random_with_color(tint(i))?);
    }

    tracing::info!(count = args.count, "generating pseudorandom avatars");
    html.push_str("<h3>Fully pseudorandom</h3>");
    for i in 0..args.count {
        push_img(&mut html, &generator.from_seed(&[i as u8])?);
    }

    tracing::info!(count = args.count, "generating pseudorandom avatars with color");
    html.push_str("<h3>Pseudorandom with color</h3>");
    for i in 0..args.count {
        push_img(
            &mut html,
            &generator.from_seed_with_color(&[i as u8], tint(i))?,
        );
    }

    html.push_str("</body></html>");
    write_output(&args.out, html.as_bytes())
}

fn push_img(html: &mut String, png: &[u8]) {
    let b64 = base64::engine::general_purpose::STANDARD.encode(png);
    // writing to a String cannot fail
    let _ = write!(
        html,
        "<img src='data:image/png;base64,{b64}' width='64px' height='64px' style='margin: 4px'/>"
    );
}

fn write_output(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write '{}'", path.display()))?;
    eprintln!("wrote {}", path.display());
    Ok(())
}

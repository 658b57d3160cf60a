use std::fs::File;
use std::io::{self, Read};
use std::thread;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rewind::{ClientConfig, ClientError, RewindClient};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod replay;
mod scene;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error("stream decode failed: {0}")]
    Decode(#[from] rewind::primitives::CodecError),
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

#[derive(Parser, Debug)]
#[command(name = "rewind-cli", about = "Send drawing primitives to a running rewind viewer")]
struct Cli {
    #[arg(long, help = "Viewer host; overrides REWIND_HOST (default 127.0.0.1)")]
    host: Option<String>,

    #[arg(long, help = "Viewer port; overrides REWIND_PORT (default 9111)")]
    port: Option<u16>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Stream a random scene, one frame per tick.
    Demo(DemoArgs),
    /// Resend a captured message stream.
    Replay(ReplayArgs),
    /// Show one line of text and end the frame.
    Message { text: String },
    /// End the current frame.
    End,
}

#[derive(Args, Debug)]
struct DemoArgs {
    #[arg(long, default_value_t = 100)]
    frames: u32,

    #[arg(long, default_value_t = 50)]
    interval_ms: u64,

    #[arg(long, default_value_t = 20)]
    units: usize,

    #[arg(long, help = "Seed for a reproducible scene")]
    seed: Option<u64>,
}

#[derive(Args, Debug)]
struct ReplayArgs {
    #[arg(long, default_value = "-", help = "Capture file path, or - for stdin")]
    input: String,
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = client_config(&cli, ClientConfig::from_env()?)?;

    match cli.command {
        Command::Demo(args) => run_demo(&config, &args),
        Command::Replay(args) => run_replay(&config, &args),
        Command::Message { text } => {
            let mut viewer = RewindClient::with_config(&config)?;
            viewer.frame(|v| v.message(&text))?;
            viewer.close()?;
            Ok(())
        }
        Command::End => {
            let mut viewer = RewindClient::with_config(&config)?;
            viewer.end_frame()?;
            viewer.close()?;
            Ok(())
        }
    }
}

/// Flags win over `REWIND_*` variables, which win over the defaults.
fn client_config(cli: &Cli, mut config: ClientConfig) -> Result<ClientConfig, ClientError> {
    if let Some(host) = &cli.host {
        config.host.clone_from(host);
    }
    if let Some(port) = cli.port {
        config.port = port;
    }
    config.validate()?;
    Ok(config)
}

fn run_demo(config: &ClientConfig, args: &DemoArgs) -> Result<(), CliError> {
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut scene = scene::Scene::new(rng, args.units);
    let mut viewer = RewindClient::with_config(config)?;
    let interval = Duration::from_millis(args.interval_ms);

    scene.draw_background(&mut viewer)?;
    for tick in 0..args.frames {
        scene.draw_frame(&mut viewer, tick)?;
        if !viewer.is_open() {
            break;
        }
        thread::sleep(interval);
    }
    viewer.close()?;

    info!(frames = args.frames, units = scene.units().len(), "demo finished");
    Ok(())
}

fn run_replay(config: &ClientConfig, args: &ReplayArgs) -> Result<(), CliError> {
    let input = read_input(&args.input)?;
    let mut viewer = RewindClient::with_config(config)?;
    let stats = replay::replay(&input, &mut viewer)?;
    viewer.close()?;

    info!(
        messages = stats.messages,
        frames = stats.frames,
        input = %args.input,
        "replay finished"
    );
    Ok(())
}

fn read_input(path: &str) -> Result<Vec<u8>, CliError> {
    let mut bytes = Vec::new();
    let result = if path == "-" {
        io::stdin().lock().read_to_end(&mut bytes)
    } else {
        File::open(path).and_then(|mut file| file.read_to_end(&mut bytes))
    };
    result.map_err(|source| CliError::Io {
        path: path.to_owned(),
        source,
    })?;
    Ok(bytes)
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;

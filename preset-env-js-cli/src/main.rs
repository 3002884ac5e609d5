use anyhow::Context;
use anyhow::Result;
use clap::{Parser, Subcommand};
use preset_env_js::ast::emit_block;
use preset_env_js::entry::create_imports;
use preset_env_js::targets::describe_targets;
use preset_env_js::targets::parse_targets;
use preset_env_js::{
  get_lowest_unreleased, prettify_targets, prettify_version, semverify, Config, RequireType,
};
use std::fs;
use std::io::stdin;
use std::io::Read;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing::Level;

#[derive(Parser)]
#[command(name = "preset-env-js", version, about = "Target version and polyfill helpers")]
struct Cli {
  /// JSON file with `unreleasedLabels` and/or `modulePaths` tables replacing the built-in ones.
  #[arg(long, global = true)]
  config: Option<PathBuf>,

  /// Emit tracing events to stderr.
  #[arg(long, global = true)]
  trace: bool,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Prettify a JSON object of targets.
  Targets {
    /// File containing the targets; omit for stdin.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Print JSON instead of the human-readable listing.
    #[arg(long)]
    json: bool,
  },
  /// Print the lower of two versions for an environment.
  Lowest {
    a: String,
    b: String,
    #[arg(long)]
    env: String,
  },
  /// Coerce a version to `major.minor.patch`.
  Semverify { version: String },
  /// Print a version in its shortest form.
  Prettify { version: String },
  /// Print the statements loading the given polyfill modules.
  Import {
    #[arg(required = true)]
    modules: Vec<String>,

    /// `import` or `require`.
    #[arg(long, default_value_t = RequireType::Import)]
    style: RequireType,

    /// Also load the regenerator runtime.
    #[arg(long)]
    regenerator: bool,
  },
}

fn main() -> ExitCode {
  match try_main() {
    Ok(output) => {
      print!("{output}");
      ExitCode::SUCCESS
    }
    Err(err) => {
      eprintln!("error: {err:#}");
      ExitCode::FAILURE
    }
  }
}

fn try_main() -> Result<String> {
  let cli = Cli::parse();
  init_tracing(cli.trace);
  let config = match cli.config.as_deref() {
    Some(path) => load_config(path)?,
    None => Config::builtin().clone(),
  };

  let output = match cli.command {
    Command::Targets { input, json } => {
      let source = read_input(input.as_deref())?;
      let targets = parse_targets(&source)?;
      debug!(count = targets.len(), "parsed targets");
      if json {
        let mut out = serde_json::to_string_pretty(&prettify_targets(&config, &targets))?;
        out.push('\n');
        out
      } else {
        describe_targets(&config, &targets)?
      }
    }
    Command::Lowest { a, b, env } => {
      let lowest = get_lowest_unreleased(&config, &a.into(), &b.into(), &env);
      format!("{lowest}\n")
    }
    Command::Semverify { version } => format!("{}\n", semverify(version)),
    Command::Prettify { version } => format!("{}\n", prettify_version(&version)),
    Command::Import {
      modules,
      style,
      regenerator,
    } => emit_block(&create_imports(&config, modules.as_slice(), style, regenerator)),
  };
  Ok(output)
}

fn load_config(path: &Path) -> Result<Config> {
  let source =
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  let config =
    Config::from_json(&source).with_context(|| format!("failed to load {}", path.display()))?;
  debug!(path = %path.display(), "loaded config");
  Ok(config)
}

fn read_input(input: Option<&Path>) -> Result<String> {
  match input {
    Some(path) => {
      fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
    }
    None => {
      let mut source = String::new();
      stdin()
        .read_to_string(&mut source)
        .context("failed to read stdin")?;
      Ok(source)
    }
  }
}

fn init_tracing(enabled: bool) {
  if !enabled {
    return;
  }
  let _ = tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_writer(std::io::stderr)
    .with_ansi(false)
    .try_init();
}

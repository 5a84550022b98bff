use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::Parser;

const DEFAULT_ENV_FILE: &str = ".env";
const DEFAULT_TEMPLATE: &str = "web/index.html.template";
const DEFAULT_OUTPUT: &str = "web/index.html";
const DEFAULT_NEXT_STEP: &str = "flutter run -d chrome";

#[derive(Debug, Parser)]
#[command(
    name = "maps-key-injector",
    version,
    about = "Inject GOOGLE_MAPS_API_KEY from .env into web/index.html.template, writing web/index.html."
)]
pub struct Cli {
    /// Directory the default paths are resolved against. Defaults to the executable's directory.
    #[arg(long, env = "MAPS_KEY_INJECTOR_ROOT")]
    pub root: Option<PathBuf>,

    /// Environment file holding GOOGLE_MAPS_API_KEY.
    #[arg(long, env = "MAPS_KEY_INJECTOR_ENV_FILE", default_value = DEFAULT_ENV_FILE)]
    pub env_file: PathBuf,

    /// HTML template containing the {{GOOGLE_MAPS_API_KEY}} placeholder.
    #[arg(long, env = "MAPS_KEY_INJECTOR_TEMPLATE", default_value = DEFAULT_TEMPLATE)]
    pub template: PathBuf,

    /// Generated HTML file, overwritten on success.
    #[arg(long, env = "MAPS_KEY_INJECTOR_OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Command suggested once the output has been generated.
    #[arg(long, env = "MAPS_KEY_INJECTOR_NEXT_STEP", default_value = DEFAULT_NEXT_STEP)]
    pub next_step: String,

    /// Skip the follow-up reminder.
    #[arg(long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub env_path: PathBuf,
    pub template_path: PathBuf,
    pub output_path: PathBuf,
    pub next_step: Option<String>,
}

impl Config {
    pub fn from_cli() -> Result<Self> {
        let cli = Cli::parse();
        let root = match cli.root.clone() {
            Some(root) => root,
            None => executable_dir()?,
        };
        Config::from_parts(cli, &root)
    }

    pub fn for_root(root: &Path) -> Self {
        Self {
            env_path: root.join(DEFAULT_ENV_FILE),
            template_path: root.join(DEFAULT_TEMPLATE),
            output_path: root.join(DEFAULT_OUTPUT),
            next_step: Some(DEFAULT_NEXT_STEP.to_string()),
        }
    }

    fn from_parts(cli: Cli, root: &Path) -> Result<Self> {
        let next_step = if cli.quiet {
            None
        } else {
            let step = cli.next_step.trim();
            if step.is_empty() {
                return Err(anyhow!("next step must not be empty (use --quiet to skip it)"));
            }
            Some(step.to_string())
        };

        Ok(Self {
            env_path: root.join(cli.env_file),
            template_path: root.join(cli.template),
            output_path: root.join(cli.output),
            next_step,
        })
    }
}

fn executable_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("failed to locate the running executable")?;
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| anyhow!("executable path has no parent: {}", exe.display()))
}

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::env_file::{ApiKey, read_api_key};
use crate::error::{InjectError, Result};
use crate::template::{read_template, render};

pub trait Progress {
    fn message(&mut self, line: &str);
}

#[derive(Debug, Default)]
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn message(&mut self, line: &str) {
        println!("{line}");
    }
}

impl Progress for Vec<String> {
    fn message(&mut self, line: &str) {
        self.push(line.to_string());
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InjectionReport {
    pub api_key: ApiKey,
    pub output_path: PathBuf,
    pub placeholder_replaced: bool,
}

// Nothing is written unless every read succeeds.
pub fn run(config: &Config, progress: &mut dyn Progress) -> Result<InjectionReport> {
    let api_key = read_api_key(&config.env_path)?;
    progress.message(&format!("Found API key: {api_key}"));

    let template = read_template(&config.template_path)?;
    let rendered = render(&template, &api_key);

    fs::write(&config.output_path, &rendered.contents)
        .map_err(|err| InjectError::write(&config.output_path, err))?;

    progress.message(&format!(
        "Generated {} with API key",
        display_name(&config.output_path)
    ));
    if let Some(step) = &config.next_step {
        progress.message(&format!("Now run: {step}"));
    }

    Ok(InjectionReport {
        api_key,
        output_path: config.output_path.clone(),
        placeholder_replaced: rendered.placeholder_replaced,
    })
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

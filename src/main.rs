use std::process::ExitCode;

use anyhow::Result;
use maps_key_injector::Config;
use maps_key_injector::InjectError;
use maps_key_injector::pipeline::{ConsoleProgress, run};

fn main() -> ExitCode {
    match inject() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<InjectError>() {
                Some(inject_err) if inject_err.is_configuration() => {
                    eprintln!("ERROR: {inject_err}");
                }
                _ => eprintln!("Error: {err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

fn inject() -> Result<()> {
    let config = Config::from_cli()?;
    let report = run(&config, &mut ConsoleProgress)?;
    if !report.placeholder_replaced {
        eprintln!(
            "Warning: no {} placeholder in {}; output is a copy of the template",
            maps_key_injector::template::PLACEHOLDER,
            config.template_path.display()
        );
    }
    Ok(())
}

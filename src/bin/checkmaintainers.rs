use anyhow::Result;
use std::process::ExitCode;

use maintainers_check::app::run;
use maintainers_check::config::Config;

fn main() -> Result<ExitCode> {
    let config = Config::from_args_and_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    let found = run(&config)?;
    if config.deny && found > 0 {
        log::info!("{} diagnostics found, failing", found);
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}

mod args;
mod config;
mod menu;
mod prompt;
mod render;
mod script;
mod session;

use prompt::Prompt;
use session::Session;

use tbs::{Bank, Result};

use std::io;

fn main() -> Result {
    config::configure_app()?;

    log::debug!("Application configured. Beginning session...");

    let mut bank = Bank::new();

    match args::parse_script_arg()? {
        Some(path) => {
            log::debug!("Found script path as input arg: {path:?}");
            script::run_file(path, &mut bank, &mut io::stdout().lock())?;
        }
        None => {
            let prompt = Prompt::new(io::stdin().lock(), io::stdout());
            Session::new(bank, prompt).run()?;
        }
    }

    log::debug!("Application finished successfully!");

    Ok(())
}

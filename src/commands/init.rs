//! Configuration initialization command.
//!
//! Runs the interactive setup wizard and saves the result, or with
//! `--delete` removes the configuration file and the cached API key.

use crate::{
    api::redmine::forget_cached_api_key,
    libs::{config::Config, messages::Message},
    msg_debug, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::fs;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove the existing configuration and cached API key instead of creating a new one
    #[arg(short, long)]
    delete: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    if init_args.delete {
        let path = Config::path()?;
        msg_debug!(format!("Removing configuration at {}", path.display()));
        if path.exists() {
            fs::remove_file(&path)?;
        }
        forget_cached_api_key()?;
        msg_success!(Message::ConfigDeleted(path.display().to_string()));
        return Ok(());
    }

    let path = Config::init()?.save()?;
    msg_success!(Message::ConfigSaved(path.display().to_string()));
    Ok(())
}

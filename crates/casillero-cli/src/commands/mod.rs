use anyhow::Result;
use casillero_config::AppConfig;
use casillero_core::IdentityMatcher;
use casillero_store::Store;
use serde::Serialize;
use std::io::{self, Write};

pub mod addresses;
pub mod clients;
pub mod quotes;
pub mod sheet;
pub mod trackings;

pub struct Context<'a> {
    pub store: &'a Store,
    pub json: bool,
    pub config: &'a AppConfig,
    pub matcher: &'a IdentityMatcher,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

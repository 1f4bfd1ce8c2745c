use crate::commands::{print_json, Context};
use anyhow::Result;
use casillero_core::TrackingListDto;
use clap::{Args, Subcommand};
use tracing::debug;

#[derive(Debug, Subcommand)]
pub enum TrackingCommand {
    /// List the trackings registered under a client name
    Ls(TrackingListArgs),
}

#[derive(Debug, Args)]
pub struct TrackingListArgs {
    pub client_name: String,
}

pub fn list_trackings(ctx: &Context<'_>, args: TrackingListArgs) -> Result<()> {
    let items = ctx
        .store
        .trackings(&ctx.config.sheets.trackings)
        .list_for_client(&args.client_name)?;
    debug!(count = items.len(), "trackings loaded");

    if ctx.json {
        return print_json(&TrackingListDto {
            client_name: args.client_name.trim().to_string(),
            items,
        });
    }

    if items.is_empty() {
        println!("no trackings");
        return Ok(());
    }

    for item in items {
        println!(
            "{}  {}  {}  {}{}",
            item.tracking_code,
            item.status,
            item.origin,
            item.weight,
            if item.comments.is_empty() {
                String::new()
            } else {
                format!("  ({})", item.comments)
            }
        );
    }
    Ok(())
}

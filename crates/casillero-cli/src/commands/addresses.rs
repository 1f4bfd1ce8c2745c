use crate::commands::{print_json, Context};
use crate::error::not_found;
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Subcommand)]
pub enum AddressCommand {
    /// Print the warehouse addresses personalised for a client
    Show(AddressShowArgs),
}

#[derive(Debug, Args)]
pub struct AddressShowArgs {
    pub client_name: String,
    /// Only print the block with this key
    #[arg(long)]
    pub region: Option<String>,
}

pub fn show_addresses(ctx: &Context<'_>, args: AddressShowArgs) -> Result<()> {
    let addresses = ctx
        .store
        .addresses(&ctx.config.sheets.addresses, &ctx.config.addresses);

    let blocks = match args.region {
        Some(key) => {
            let block = addresses
                .block(&key, &args.client_name)?
                .ok_or_else(|| not_found(format!("address region {key}")))?;
            vec![block]
        }
        None => addresses.render(&args.client_name)?,
    };

    if ctx.json {
        return print_json(&blocks);
    }

    for (index, block) in blocks.iter().enumerate() {
        if index > 0 {
            println!();
        }
        println!("== {} ==", block.label);
        if block.text.is_empty() {
            println!("(empty)");
        } else {
            println!("{}", block.text);
        }
    }
    Ok(())
}

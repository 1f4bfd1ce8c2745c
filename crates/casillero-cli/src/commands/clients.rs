use crate::commands::{print_json, Context};
use crate::error::{invalid_input, not_found};
use anyhow::Result;
use casillero_core::ClientNew;
use casillero_store::repo::Registration;
use clap::{ArgAction, Args, Subcommand};
use tracing::{debug, info};

#[derive(Debug, Subcommand)]
pub enum ClientCommand {
    /// Find a client by email or phone number
    Find(FindArgs),
    /// Register a new client
    Register(RegisterArgs),
}

#[derive(Debug, Args)]
pub struct FindArgs {
    /// Email address or phone number
    pub query: String,
}

#[derive(Debug, Args)]
pub struct RegisterArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long, default_value = "")]
    pub email: String,
    #[arg(long, default_value = "")]
    pub phone: String,
    #[arg(long, default_value = "")]
    pub address: String,
    /// Append even when the email or phone already belongs to a client
    #[arg(long, action = ArgAction::SetTrue)]
    pub allow_duplicate: bool,
}

pub fn find_client(ctx: &Context<'_>, args: FindArgs) -> Result<()> {
    let range = &ctx.config.sheets.clients;
    debug!(range = %range, "looking up client");
    let found = ctx
        .store
        .clients(range, ctx.matcher)
        .find(&args.query)?
        .ok_or_else(|| not_found(format!("no client matches {}", args.query.trim())))?;

    if ctx.json {
        return print_json(&found);
    }

    let client = &found.client;
    println!("{} (row {})", client.name, found.position);
    println!("email: {}", display_or_dash(&client.email));
    println!("phone: {}", display_or_dash(&client.contact_phone));
    println!("address: {}", display_or_dash(&client.address));
    println!("balance: {:.2}", client.balance);
    Ok(())
}

pub fn register_client(ctx: &Context<'_>, args: RegisterArgs) -> Result<()> {
    if args.email.trim().is_empty() && args.phone.trim().is_empty() {
        return Err(invalid_input("an email or a phone number is required"));
    }
    let clients = ctx.store.clients(&ctx.config.sheets.clients, ctx.matcher);
    let client = ClientNew {
        name: args.name,
        email: args.email,
        phone: args.phone,
        address: args.address,
    };
    let registration = if args.allow_duplicate {
        clients.register_unchecked(client)?
    } else {
        clients.register(client)?
    };

    match &registration {
        Registration::Created { row, client } => {
            info!(row, name = %client.name, "client registered");
        }
        Registration::Existing { matched } => {
            debug!(position = matched.position, "client already registered");
        }
    }

    if ctx.json {
        return print_json(&registration);
    }
    match registration {
        Registration::Created { row, client } => {
            println!("registered {} (row {})", client.name, row);
        }
        Registration::Existing { matched } => {
            println!(
                "already registered as {} (row {})",
                matched.client.name, matched.position
            );
        }
    }
    Ok(())
}

fn display_or_dash(value: &str) -> &str {
    if value.trim().is_empty() {
        "-"
    } else {
        value
    }
}

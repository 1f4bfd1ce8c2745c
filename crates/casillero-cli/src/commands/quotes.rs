use crate::commands::{print_json, Context};
use crate::util::optional_text;
use anyhow::Result;
use casillero_core::time::local_timestamp_now;
use casillero_core::{ClassificationDto, ClassificationInput, QuoteRequest};
use clap::{Args, Subcommand};
use tracing::{debug, info};

#[derive(Debug, Subcommand)]
pub enum QuoteCommand {
    /// Classify merchandise without recording a quote
    Classify(ClassifyArgs),
    /// Classify merchandise and record the quote
    Create(CreateQuoteArgs),
}

#[derive(Debug, Args)]
pub struct ClassifyArgs {
    #[arg(long, default_value = "")]
    pub description: String,
    #[arg(long, default_value = "")]
    pub category: String,
    #[arg(long, default_value = "")]
    pub origin: String,
}

#[derive(Debug, Args)]
pub struct CreateQuoteArgs {
    #[arg(long)]
    pub client_name: Option<String>,
    #[arg(long)]
    pub contact: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub origin: Option<String>,
    #[arg(long)]
    pub weight: Option<f64>,
    #[arg(long)]
    pub value: Option<f64>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
}

pub fn classify(ctx: &Context<'_>, args: ClassifyArgs) -> Result<()> {
    let input = ClassificationInput {
        description: &args.description,
        category_label: &args.category,
        origin: &args.origin,
    };
    let (rule, result) = ctx.config.classifier.classify_with_rule(&input);
    debug!(rule = rule.name(), tier = %result.tier, "classified");

    if ctx.json {
        return print_json(&ClassificationDto {
            tier: result.tier,
            tags: result.tags,
            rule: rule.name().to_string(),
        });
    }

    if result.tags.is_empty() {
        println!("{}", result.tier);
    } else {
        println!("{} [{}]", result.tier, result.joined_tags());
    }
    Ok(())
}

pub fn create_quote(ctx: &Context<'_>, args: CreateQuoteArgs) -> Result<()> {
    let request = QuoteRequest {
        client_name: optional_text(args.client_name),
        client_contact: optional_text(args.contact),
        client_email: optional_text(args.email),
        origin: optional_text(args.origin),
        weight: args.weight,
        declared_value: args.value,
        category: optional_text(args.category),
        description: optional_text(args.description),
    };
    let record = ctx.store.quotes(&ctx.config.sheets.quotes).create(
        &ctx.config.classifier,
        &request,
        &local_timestamp_now(),
    )?;
    info!(tier = %record.tier, client = %record.client_name, "quote recorded");

    if ctx.json {
        return print_json(&record);
    }

    if record.tags.is_empty() {
        println!("quote recorded: {}", record.tier);
    } else {
        println!("quote recorded: {} [{}]", record.tier, record.tags);
    }
    Ok(())
}

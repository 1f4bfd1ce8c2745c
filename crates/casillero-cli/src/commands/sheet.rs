use crate::commands::{print_json, Context};
use crate::util::parse_cell_ref;
use anyhow::Result;
use casillero_core::A1Range;
use clap::{Args, Subcommand};
use tracing::info;

#[derive(Debug, Subcommand)]
pub enum SheetCommand {
    /// List the sheets that hold at least one cell
    Ls,
    /// Print the cells of a range, one tab-separated row per line
    Show(SheetShowArgs),
    /// Append a row after the last populated row of a range
    Append(SheetAppendArgs),
    /// Write a single cell
    Set(SheetSetArgs),
}

#[derive(Debug, Args)]
pub struct SheetShowArgs {
    /// Range in A1 notation, e.g. Clientes!A2:H
    pub range: A1Range,
}

#[derive(Debug, Args)]
pub struct SheetAppendArgs {
    pub range: A1Range,
    #[arg(num_args = 1.., required = true)]
    pub cells: Vec<String>,
}

#[derive(Debug, Args)]
pub struct SheetSetArgs {
    pub sheet: String,
    /// Cell reference, e.g. B3
    pub cell: String,
    pub value: String,
}

pub fn list_sheets(ctx: &Context<'_>) -> Result<()> {
    let names = ctx.store.workbook().sheet_names()?;
    if ctx.json {
        return print_json(&names);
    }
    for name in names {
        println!("{name}");
    }
    Ok(())
}

pub fn show_range(ctx: &Context<'_>, args: SheetShowArgs) -> Result<()> {
    let grid = ctx.store.workbook().fetch(&args.range)?;
    if ctx.json {
        return print_json(&grid);
    }
    for row in grid {
        println!("{}", row.join("\t"));
    }
    Ok(())
}

pub fn append_row(ctx: &Context<'_>, args: SheetAppendArgs) -> Result<()> {
    let row = ctx.store.workbook().append(&args.range, &args.cells)?;
    info!(range = %args.range, row, "row appended");
    if ctx.json {
        return print_json(&serde_json::json!({ "range": args.range.to_string(), "row": row }));
    }
    println!("appended row {}", row);
    Ok(())
}

pub fn set_cell(ctx: &Context<'_>, args: SheetSetArgs) -> Result<()> {
    let (row, col) = parse_cell_ref(&args.cell)?;
    ctx.store
        .workbook()
        .set_cell(args.sheet.trim(), row, col, &args.value)?;
    if ctx.json {
        return print_json(&serde_json::json!({
            "sheet": args.sheet.trim(),
            "cell": args.cell.trim().to_ascii_uppercase(),
            "value": args.value,
        }));
    }
    println!("set {}!{}", args.sheet.trim(), args.cell.trim().to_ascii_uppercase());
    Ok(())
}

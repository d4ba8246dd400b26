pub mod bout;
pub mod card;
pub mod fortune;

use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use serde::de::DeserializeOwned;

use dohyo_engine::entropy::{CRITICAL_FAIL, CRITICAL_SUCCESS};
use dohyo_engine::{BoutContext, Side};

/// Read and parse a JSON file.
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    serde_json::from_str(&content).map_err(|e| format!("invalid JSON in {}: {e}", path.display()))
}

/// Render fortune values, highlighting sentinels.
fn format_fortune(values: &[i32]) -> String {
    values
        .iter()
        .map(|&v| match v {
            CRITICAL_SUCCESS => v.to_string().green().bold().to_string(),
            CRITICAL_FAIL => v.to_string().red().bold().to_string(),
            _ => v.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Print a resolved bout for humans.
fn print_bout(ctx: &BoutContext) {
    let result = &ctx.result;
    println!(
        "  {} {} {} {}",
        "Bout".bold(),
        ctx.east.id,
        "vs".dimmed(),
        ctx.west.id
    );
    println!(
        "  {}",
        format!("tier {}, fortune {}", result.tier, format_fortune(&ctx.fortune)).dimmed()
    );
    println!();

    let verdict = format!("{} wins by {}", ctx.winner().id, result.technique);
    if result.is_upset() {
        println!("  {} {}", verdict.bold(), "UPSET".yellow().bold());
    } else {
        println!("  {}", verdict.bold());
    }
    println!(
        "  {} margin, {} lead change(s)",
        result.margin, result.momentum_shifts
    );
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Side", "Rikishi", "Ability", "Result", "XP"]);
    for side in [Side::East, Side::West] {
        let profile = ctx.profile(side);
        let outcome = if side == result.winner { "win" } else { "loss" };
        table.add_row(vec![
            side.to_string(),
            profile.id.clone(),
            profile.attributes.current.to_string(),
            outcome.to_string(),
            result.reward(side).to_string(),
        ]);
    }
    println!("{table}");
    println!();

    println!("  {} {}", "Excitement".bold(), result.excitement);
    for modifier in &result.modifiers {
        println!("    {}", modifier.to_string().dimmed());
    }
}

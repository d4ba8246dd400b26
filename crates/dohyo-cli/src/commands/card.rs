use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use serde::Serialize;

use dohyo_engine::{BoutContext, CardEntry, FortuneConfig, Pairing, resolve_card};

#[derive(Serialize)]
struct CardRecord<'a> {
    index: usize,
    seed: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    bout: Option<&'a BoutContext>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<'a> From<&'a CardEntry> for CardRecord<'a> {
    fn from(entry: &'a CardEntry) -> Self {
        Self {
            index: entry.index,
            seed: entry.seed,
            bout: entry.result.as_ref().ok(),
            error: entry.result.as_ref().err().map(|e| e.to_string()),
        }
    }
}

pub fn run(path: &Path, seed: u64, json: bool) -> Result<(), String> {
    let pairings: Vec<Pairing> = super::read_json(path)?;
    if pairings.is_empty() {
        println!("  No bouts on the card.");
        return Ok(());
    }

    let entries = resolve_card(&pairings, &FortuneConfig::default().with_seed(seed));

    if json {
        let records: Vec<CardRecord<'_>> = entries.iter().map(CardRecord::from).collect();
        let out = serde_json::to_string_pretty(&records).map_err(|e| e.to_string())?;
        println!("{out}");
    } else {
        print_card(&pairings, &entries, seed);
    }

    let failed = entries.iter().filter(|e| e.result.is_err()).count();
    if failed > 0 {
        return Err(format!("{failed} of {} bouts could not be resolved", entries.len()));
    }
    Ok(())
}

fn print_card(pairings: &[Pairing], entries: &[CardEntry], seed: u64) {
    println!(
        "  {} {}",
        "Card".bold(),
        format!("({} bouts, seed={seed})", entries.len()).dimmed()
    );
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "#",
        "East",
        "West",
        "Winner",
        "Kimarite",
        "Excitement",
        "XP (E/W)",
    ]);

    let mut upsets = 0;
    for (entry, pairing) in entries.iter().zip(pairings) {
        let number = (entry.index + 1).to_string();
        match &entry.result {
            Ok(ctx) => {
                let result = &ctx.result;
                let mut winner = ctx.winner().id.clone();
                if result.is_upset() {
                    upsets += 1;
                    winner.push_str(" *");
                }
                table.add_row(vec![
                    number,
                    ctx.east.id.clone(),
                    ctx.west.id.clone(),
                    winner,
                    result.technique.to_string(),
                    result.excitement.to_string(),
                    format!("{}/{}", result.east_reward, result.west_reward),
                ]);
            }
            Err(e) => {
                table.add_row(vec![
                    number,
                    pairing.east.id.clone(),
                    pairing.west.id.clone(),
                    format!("error: {e}"),
                    "--".to_string(),
                    "--".to_string(),
                    "--".to_string(),
                ]);
            }
        }
    }

    println!("{table}");
    println!();
    println!("  {upsets} upset(s), * marks the underdog");
}

use colored::Colorize;

use dohyo_engine::{FortuneConfig, generate_fortune};

pub fn run(seed: u64, count: usize) -> Result<(), String> {
    let config = FortuneConfig::default().with_seed(seed).with_count(count);
    let stream = generate_fortune(&config);

    println!(
        "  {} {}",
        "Fortune".bold(),
        format!("(seed={seed}, count={})", config.count).dimmed()
    );
    println!("  {}", super::format_fortune(stream.values()));
    Ok(())
}

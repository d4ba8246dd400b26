use std::path::Path;

use dohyo_engine::{
    CombatantProfile, EntropyStream, FortuneConfig, ResolutionEngine, generate_fortune,
};

pub fn run(
    east: &Path,
    west: &Path,
    seed: u64,
    fortune: Option<&str>,
    json: bool,
) -> Result<(), String> {
    let east: CombatantProfile = super::read_json(east)?;
    let west: CombatantProfile = super::read_json(west)?;

    let mut stream = match fortune {
        Some(list) => EntropyStream::new(parse_fortune(list)?).map_err(|e| e.to_string())?,
        None => generate_fortune(&FortuneConfig::default().with_seed(seed)),
    };

    let ctx = ResolutionEngine::new()
        .resolve_context(&east, &west, &mut stream)
        .map_err(|e| e.to_string())?;

    if json {
        let out = serde_json::to_string_pretty(&ctx).map_err(|e| e.to_string())?;
        println!("{out}");
    } else {
        super::print_bout(&ctx);
    }
    Ok(())
}

fn parse_fortune(list: &str) -> Result<Vec<i32>, String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<i32>()
                .map_err(|_| format!("invalid fortune value '{s}'"))
        })
        .collect()
}

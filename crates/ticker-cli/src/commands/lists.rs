use anyhow::Result;

use ticker_core::AppConfig;

pub fn run(config: &AppConfig) -> Result<()> {
    let lists = config.character_lists()?;

    println!("Character lists ({}), in lookup order:\n", lists.len());

    for (name, list) in config.ticker.character_lists.iter().zip(&lists) {
        let source = if config.lists.contains_key(name) {
            "custom"
        } else {
            "preset"
        };

        println!("  {} ({})", name, source);
        println!("    Characters: {}", list);
        println!(
            "    Size: {} characters, {} buffer slots",
            list.len(),
            list.character_buffer().len()
        );
        println!();
    }

    Ok(())
}

#[macro_use]
extern crate lazy_static;

use anyhow::Context;
use log::info;

use config::{BakeConfig, Target, HELP};
use fetch::{CachedFetcher, Fetch};
use output::*;

mod codepoints;
mod config;
mod emoji;
mod error;
mod fetch;
mod logging;
mod macros;
mod output;
mod stats;

fn main() -> anyhow::Result<()>
{
    let Some(config) = BakeConfig::from_args(pico_args::Arguments::from_env())? else {
        eprint!("{HELP}");
        return Ok(());
    };

    let _logger = logging::init(&config.log_level, config.log_dir.as_deref())
        .map_err(anyhow::Error::msg)?;

    let fetcher = CachedFetcher::new(&config.cache_dir, config.timeout);

    for dir in [&config.output_dir, &config.stats_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("cannot create directory {}", dir.display()))?;
    }

    for &target in &config.targets {
        run(target, &config, &fetcher)?;
    }

    Ok(())
}

fn run(target: Target, config: &BakeConfig, fetcher: &dyn Fetch) -> anyhow::Result<()>
{
    match target {
        Target::Codepoints => {
            let tables = codepoints::bake(fetcher, config).context("codepoints")?;

            let path = config.output_dir.join("codepoints.rs");
            write_codepoints(&path, &tables)
                .with_context(|| format!("cannot write {}", path.display()))?;

            let path = config.stats_dir.join("codepoints.txt");
            write_stats(&path, &tables.stats)
                .with_context(|| format!("cannot write {}", path.display()))?;

            println!("codepoints: {}", tables.codepoints.len());
        }
        Target::Emojis => {
            let tables = emoji::bake(fetcher, config).context("emojis")?;

            let path = config.output_dir.join("emojis.rs");
            write_emojis(&path, &tables)
                .with_context(|| format!("cannot write {}", path.display()))?;

            let path = config.stats_dir.join("emojis.txt");
            write_stats(&path, &tables.stats)
                .with_context(|| format!("cannot write {}", path.display()))?;

            println!("emojis: {}", tables.emojis.len());
        }
    }

    info!("event=write module=output status=ok target={:?}", target);

    Ok(())
}

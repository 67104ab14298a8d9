mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use sunpath::{generate_sun_path, write_svg, SunPathConfig};

use cli::Args;

fn load_config(args: &Args) -> Result<SunPathConfig> {
    let mut config = match &args.config {
        Some(path) => SunPathConfig::from_json_file(path)?,
        None => SunPathConfig::default(),
    };
    if let Some(year) = args.year {
        config = config
            .with_year(year)
            .with_context(|| format!("unsupported year {year}"))?;
    }
    if let Some(latitude) = args.latitude {
        config.location.latitude = latitude;
    }
    if let Some(longitude) = args.longitude {
        config.location.longitude = longitude;
    }
    if args.no_dst {
        config.dst = None;
    }
    if let Some(language) = args.language {
        config.language = language.into();
    }
    if let Some(output) = &args.output {
        config.output = output.clone();
    }
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = load_config(&args)?;

    match &config.dst {
        Some(window) => log::info!("daylight saving between {} and {}", window.start, window.end),
        None => log::info!("no daylight saving correction"),
    }

    let sun_path = generate_sun_path(&config).context("sampling sun positions")?;
    write_svg(&sun_path, &config.output)?;
    println!("Wrote {}", config.output.display());
    Ok(())
}

use clap::Parser;
use cmdgen::{
    cli::Cli,
    config::Config,
    generator::Generator,
    logging::init_logging,
    output::print_listing,
    scan::ExtractionMode,
};
use colored::Colorize;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color);

    let config = Config::from_cli(cli)?;

    log::debug!("Configuration: {:?}", config);
    for root in &config.roots {
        log::debug!("Search root: {}", root.path.display());
    }

    let generator = Generator::new(&config);

    // Listing mode prints what would be generated and leaves files alone
    if let Some(format) = config.list {
        let commands = generator.collect(ExtractionMode::Documented)?;
        print_listing(format, &commands)?;
        return Ok(());
    }

    let generated = generator.generate()?;

    let summary = format!(
        "Generated {} file(s) for {} in {}",
        generated.len(),
        config.project_name,
        config.output_dir.display()
    );
    println!("{}", summary.green());

    Ok(())
}

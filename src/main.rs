use card_mapper::cli::commands::{cmd_paths, cmd_preview, cmd_suggest};
use card_mapper::cli::config::{load_config, Cli, Commands};
use card_mapper::trace::logger::TraceLogger;
use clap::Parser;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    let tracer = if config.trace.enabled {
        TraceLogger::new(&config.trace.path)
    } else {
        TraceLogger::disabled()
    };

    match cli.command {
        Commands::Paths {
            input,
            base,
            format,
        } => {
            cmd_paths(&input, base.as_deref(), &format, cli.verbose, &tracer)?;
        }
        Commands::Preview {
            input,
            mapping,
            card_type,
            format,
            output,
            max_images,
        } => {
            // Resolve preview settings: CLI > config > defaults
            let format = format.unwrap_or_else(|| config.preview.format.clone());
            let output = output.or_else(|| config.preview.output.clone());
            let max_images = max_images.unwrap_or(config.preview.max_images);

            cmd_preview(
                &input,
                &mapping,
                card_type.as_deref(),
                &format,
                output.as_deref(),
                max_images,
                cli.verbose,
                &tracer,
            )?;
        }
        Commands::Suggest {
            input,
            card_type,
            output,
        } => {
            cmd_suggest(&input, &card_type, output.as_deref(), cli.verbose, &tracer)?;
        }
    }

    Ok(())
}

use anyhow::Result;
use clap::Parser;
use estimap::cli::{Cli, Commands};
use estimap::commands::{self, Context};
use estimap::core::{ModuleMetrics, DEFAULT_FUNCTION_POINTS};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if let Commands::Init { force } = cli.command {
        return commands::init::init_config(force);
    }

    let ctx = Context::resolve(cli.config.as_deref(), cli.store_dir)?;

    match cli.command {
        Commands::Analyze {
            module_name,
            lines_of_code,
            complexity,
            commit_frequency,
            team_size,
            function_points,
            format,
            output,
        } => {
            let metrics = ModuleMetrics {
                module_name,
                lines_of_code,
                complexity: complexity.into(),
                commit_frequency,
                team_size,
                function_points: function_points
                    .unwrap_or_else(|| DEFAULT_FUNCTION_POINTS.to_string()),
            };
            commands::analyze::run(
                &ctx,
                commands::AnalyzeOptions {
                    metrics,
                    format,
                    output,
                },
            )
        }
        Commands::Dashboard {
            recent,
            format,
            output,
        } => commands::dashboard::run(&ctx, recent, format, output),
        Commands::List {
            top,
            format,
            output,
        } => commands::list::run(&ctx, top, format, output),
        Commands::Insights { format, output } => commands::insights::run(&ctx, format, output),
        Commands::Clear { force } => commands::clear::run(&ctx, force),
        Commands::Init { .. } => unreachable!("handled above"),
    }
}

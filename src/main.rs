use clap::Parser;
use colored::Colorize;
use postwright::{
    Result,
    cli::{Cli, Commands, GenerateArgs},
    commands::{self, GenerateCommandArgs},
    config::EnvConfig,
    telemetry,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    telemetry::init_tracing(cli.verbose);

    // A missing .env file is not an error
    dotenv::dotenv().ok();
    let env = EnvConfig::from_env();

    let result = match cli.command {
        None => generate(&cli.generate, &env),
        Some(Commands::Generate(ref args)) => generate(args, &env),
        Some(Commands::List { ref collection }) => commands::execute_list(collection),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "✗".red(), e);
            ExitCode::FAILURE
        }
    }
}

fn generate(args: &GenerateArgs, env: &EnvConfig) -> Result<()> {
    if let Some(jobs) = args.jobs {
        rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build_global()
            .ok();
    }

    commands::execute_generate(
        GenerateCommandArgs {
            collection_path: &args.collection,
            variables_path: args.variables.as_deref(),
            output_dir: &args.output,
            dry_run: args.dry_run,
        },
        env,
    )?;

    Ok(())
}

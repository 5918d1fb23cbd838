use clap::Parser;
use tagpath::application::{init, ConfigService, InspectService, RelateService};
use tagpath::cli::{format_relation, format_report, format_tag, format_tokens, Cli, Commands};
use tagpath::domain::{make_lower, split};
use tagpath::error::TagpathError;
use tagpath::infrastructure::{assertion, Config};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    assertion::set_assert_handler(assertion::log_failure);

    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), TagpathError> {
    match cli.command {
        Commands::Parse { tag } => {
            let tag = InspectService::new(Config::discover()?).parse(&tag)?;
            println!("{}", format_tag(&tag));
            Ok(())
        }
        Commands::Inspect { tag } => {
            let report = InspectService::new(Config::discover()?).inspect(&tag)?;
            print!("{}", format_report(&report));
            Ok(())
        }
        Commands::Parent { tag, level } => {
            let parent = InspectService::new(Config::discover()?).parent(&tag, level)?;
            println!("{}", format_tag(&parent));
            Ok(())
        }
        Commands::Sub { tag, count } => {
            let sub = InspectService::new(Config::discover()?).sub_tag(&tag, count)?;
            println!("{}", format_tag(&sub));
            Ok(())
        }
        Commands::Relate { left, right } => {
            let relation = RelateService::new(Config::discover()?).relate(&left, &right)?;
            print!("{}", format_relation(&relation));
            Ok(())
        }
        Commands::Common { left, right } => {
            let common = RelateService::new(Config::discover()?).common_parent(&left, &right)?;
            println!("{}", format_tag(&common));
            Ok(())
        }
        Commands::Split {
            text,
            delimiters,
            lower,
        } => {
            let text = if lower { make_lower(&text) } else { text };
            print!("{}", format_tokens(&split(&text, delimiters.as_str())));
            Ok(())
        }
        Commands::Init { path } => {
            let written = init::init(&path)?;
            println!("Initialized tagpath config at {}", written.display());
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let service = ConfigService::discover()?;

            if list {
                let config = service.list()?;
                println!("strict = {}", config.strict);
                println!("fold_case = {}", config.fold_case);
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    println!("{}", service.get(&k)?);
                    Ok(())
                }
            } else {
                // No key provided, show usage
                println!("Usage: tagpath config [--list | <key> [<value>]]");
                println!("Valid keys: strict, fold_case");
                println!("File: {}", service.path().display());
                Ok(())
            }
        }
    }
}

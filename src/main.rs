use anyhow::Result;
use clap::Parser;

use ultima_cli::cli::commands::{configure, history, keys, models, session, translate};
use ultima_cli::cli::{Args, Command, ModelsCommand};
use ultima_cli::output::{self, OutputConfig};
use ultima_cli::provider::CatalogError;
use ultima_cli::translation::{TranslateError, print_languages};
use ultima_cli::ui::Style;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse();

    output::init(OutputConfig {
        quiet: args.quiet,
        no_color: args.no_color || OutputConfig::default().no_color,
    });
    output::init_tracing(args.verbose);

    if let Err(e) = run(args).await {
        eprintln!("{} {e:#}", Style::error("Error:"));
        std::process::exit(exit_code(&e));
    }
}

async fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Command::Configure) => configure::run_configure()?,
        Some(Command::Use { provider }) => session::use_provider(provider)?,
        Some(Command::Keys { command }) => keys::run_keys(command)?,
        Some(Command::Models { command }) => match command {
            ModelsCommand::List { provider } => models::list_models(provider)?,
            ModelsCommand::Refresh { provider } => models::refresh_models(provider).await?,
            ModelsCommand::Select { provider, model } => models::select_model(provider, &model)?,
        },
        Some(Command::History { command }) => history::run_history(command)?,
        Some(Command::Languages) => print_languages(),
        Some(Command::Swap) => session::swap()?,
        Some(Command::Show) => session::show()?,
        Some(Command::Clear) => session::clear()?,
        None => {
            let options = translate::TranslateOptions {
                file: args.file,
                text: args.text,
                from: args.from,
                to: args.to,
                tone: args.tone,
                provider: args.provider,
            };
            translate::run_translate(options).await?;
        }
    }

    Ok(())
}

fn exit_code(error: &anyhow::Error) -> exitcode::ExitCode {
    if let Some(e) = error.downcast_ref::<TranslateError>() {
        return match e {
            TranslateError::EmptySource => exitcode::DATAERR,
            TranslateError::Gateway(_) => exitcode::UNAVAILABLE,
        };
    }
    if error.downcast_ref::<CatalogError>().is_some() {
        return exitcode::UNAVAILABLE;
    }
    1
}

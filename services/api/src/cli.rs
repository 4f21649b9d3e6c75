use crate::demo::{run_analyze, run_demo, AnalyzeArgs, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use schema_intel::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Schema Intelligence Service",
    about = "Run the schema.org analysis service or inspect extracted markup from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Work with extracted schema.org markup offline
    Schema {
        #[command(subcommand)]
        command: SchemaCommand,
    },
    /// Run a built-in sample page through the analysis engine
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum SchemaCommand {
    /// Analyze a JSON file of extracted entities and print the report
    Analyze(AnalyzeArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Schema {
            command: SchemaCommand::Analyze(args),
        } => run_analyze(args),
        Command::Demo(args) => run_demo(args),
    }
}

use crate::report::{
    run_analyse, run_costs, run_exemption, run_finder, run_grants, run_parse, run_schemes,
    CostsArgs, ParseArgs, SchemesArgs, ToolArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use epc_advisor::config::AppConfig;
use epc_advisor::error::AppError;
use epc_advisor::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "epc-advisor",
    about = "Grant, cost, certificate and exemption checks for landlords facing EPC rules",
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
    /// Check grant eligibility across the funding schemes
    Grants(ToolArgs),
    /// Find national and council funding for a postcode
    Finder(ToolArgs),
    /// Price and rank upgrades for a property
    Costs(CostsArgs),
    /// Explain an existing EPC certificate
    Analyse(ToolArgs),
    /// Read analyser fields from the text of an EPC certificate
    Parse(ParseArgs),
    /// Grade a PRS exemption claim and list the evidence it needs
    Exemption(ToolArgs),
    /// List the grant scheme catalog and flag stale entries
    Schemes(SchemesArgs),
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
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(config, args).await,
        Command::Grants(args) => run_grants(args),
        Command::Finder(args) => run_finder(args),
        Command::Costs(args) => run_costs(args),
        Command::Analyse(args) => run_analyse(args),
        Command::Parse(args) => run_parse(args),
        Command::Exemption(args) => run_exemption(args),
        Command::Schemes(args) => run_schemes(args),
    }
}

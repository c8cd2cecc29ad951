use clap::{Parser, Subcommand};

mod cmd;
mod declaration;
mod deduction;
mod income;
mod money;
mod tax;
mod validation;

#[derive(Parser, Debug)]
#[command(name = "irrfc", version, about = "Brazilian IRRF withholding tax calculator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute withholding for a declaration file
    Report(cmd::report::ReportCommand),
    /// Display a year's bracket table
    Brackets(cmd::brackets::BracketsCommand),
    /// Print expected input formats
    Schema(cmd::schema::SchemaCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Report(cmd) => cmd.exec(),
        Command::Brackets(cmd) => cmd.exec(),
        Command::Schema(cmd) => cmd.exec(),
    }
}

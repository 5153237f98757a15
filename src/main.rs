use clap::Parser;
use log::debug;
use stderrlog::{ColorChoice, Timestamp};
use tezos_codec::{
    cli::{Command, LogLevelFilter},
    constants::VERSION,
    context,
};

#[derive(Parser, Debug)]
#[command(name = "tezos-codec", author, version = VERSION, about, long_about = Some("Tezos codec\n\n\
Validate, derive and sign Tezos identifiers"))]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Max stderr log level
    #[arg(long, global = true, default_value_t = LogLevelFilter::default())]
    log_level: LogLevelFilter,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
}

pub fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    // initialize logging
    stderrlog::new()
        .module(module_path!())
        .color(ColorChoice::Never)
        .timestamp(Timestamp::Microsecond)
        .verbosity(args.log_level.0)
        .init()?;

    context::init();
    debug!("secp256k1 context ready");

    let output = args.command.run(args.json)?;
    println!("{output}");

    context::teardown();
    Ok(())
}

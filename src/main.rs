use clap::Parser;
use ipv4_calculator::output::{render_summary, NetworkSummary};
use ipv4_calculator::Network;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use std::error::Error;

/// Show network details for an IPv4 CIDR and optionally split it.
#[derive(Parser, Debug)]
#[command(name = "ipcalc", version, about)]
struct Args {
    /// Network as A.B.C.D/n or A.B.C.D/M.M.M.M
    cidr: String,

    /// Split into at least this many subnets
    #[arg(short, long, env = "IPCALC_SPLIT")]
    split: Option<usize>,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

fn init_logging() {
    if log4rs::init_file("log4rs.yml", Default::default()).is_ok() {
        return;
    }
    // No usable log4rs.yml, warnings to stderr.
    let stderr = ConsoleAppender::builder().target(Target::Stderr).build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn));
    if let Ok(config) = config {
        let _ = log4rs::init_config(config);
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    init_logging();
    let args = Args::parse();
    log::info!("#Start main() cidr={}", args.cidr);

    let network = Network::create(&args.cidr)?;
    let summary = NetworkSummary::new(&network, args.split)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", render_summary(&summary));
    }

    Ok(())
}

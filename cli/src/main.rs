mod commands;
mod terminal;

use bugscan_common::config::Config;
use commands::{CommandLine, Commands, pending, ping, sni};
use terminal::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging();

    match commands.command {
        Commands::Ping(args) => {
            let cfg = Config::new(commands.threads, args.output.clone());
            ping::ping(args, &cfg).await
        }
        Commands::Sni(args) => {
            let cfg = Config::new(commands.threads, args.output.clone());
            sni::sni(args, &cfg).await
        }
        Commands::Direct => pending::pending("direct"),
        Commands::Proxy => pending::pending("proxy"),
        Commands::CdnSsl => pending::pending("cdn-ssl"),
    }
}

use std::time::Duration;

use bugscan_common::{config::Config, info, input};
use bugscan_probes::{PingOptions, PingProbe, ping as ping_probe};

use super::{PingArgs, run_scan};

pub async fn ping(args: PingArgs, cfg: &Config) -> anyhow::Result<()> {
    let hosts: Vec<String> = input::read_lines(&args.filename)?;
    info!("Pinging hosts on port {}", args.port);

    let probe = PingProbe::new(PingOptions {
        port: args.port,
        timeout: Duration::from_secs(args.timeout),
    });

    run_scan(probe, ping_probe::jobs(hosts), cfg, "Host").await;
    Ok(())
}

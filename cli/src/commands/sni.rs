use std::time::Duration;

use anyhow::Context;
use bugscan_common::{config::Config, info, input};
use bugscan_probes::{SniOptions, SniProbe, sni as sni_probe};

use super::{SniArgs, run_scan};

pub async fn sni(args: SniArgs, cfg: &Config) -> anyhow::Result<()> {
    let hosts: Vec<String> = input::read_lines(&args.filename)?;
    if args.deep > 0 {
        info!("Trimming hosts to their last {} labels", args.deep);
    }

    let opts = SniOptions {
        deep: args.deep,
        handshake_timeout: Duration::from_secs(args.timeout),
    };
    let probe: SniProbe = SniProbe::new(opts).context("failed to set up TLS client")?;

    run_scan(probe, sni_probe::jobs(hosts, opts.deep), cfg, "SNI").await;
    Ok(())
}

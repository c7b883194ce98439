/// Modes advertised by the tool whose probes are not implemented yet.
pub fn pending(mode: &str) -> anyhow::Result<()> {
    anyhow::bail!("'{mode}' subcommand not implemented yet");
}

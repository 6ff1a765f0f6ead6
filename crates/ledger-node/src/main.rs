//! # Peer Ledger Node
//!
//! Reads newline-delimited JSON request envelopes from stdin, applies them
//! one at a time, and writes one JSON response per line to stdout. Logs go
//! to stderr. On end of input the node flushes its handlers and logs a
//! metrics snapshot.
//!
//! ## Startup Sequence
//!
//! 1. Load configuration from the environment
//! 2. Initialize logging and metrics
//! 3. Build the container and start event handlers
//! 4. Serve stdin until EOF or Ctrl+C

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{info, warn};

use ledger_node::container::NodeConfig;
use ledger_node::protocol::{decode_line, encode_response};
use ledger_node::LedgerRuntime;
use ledger_telemetry::{gather_metrics, init_telemetry, TelemetryConfig};

#[tokio::main]
async fn main() -> Result<()> {
    init_telemetry(TelemetryConfig::from_env()).context("Failed to initialize telemetry")?;

    let config = NodeConfig::from_env().context("Invalid node configuration")?;

    let mut runtime = LedgerRuntime::new(config);
    runtime.start();

    info!("Peer Ledger node ready, reading requests from stdin");
    tokio::select! {
        result = serve(&runtime) => result?,
        _ = tokio::signal::ctrl_c() => warn!("Interrupted, stopping"),
    }

    runtime.shutdown().await?;

    match gather_metrics() {
        Ok(snapshot) => info!(metrics = %snapshot, "Final metrics snapshot"),
        Err(e) => warn!(error = %e, "Could not gather metrics"),
    }
    Ok(())
}

async fn serve(runtime: &LedgerRuntime) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    let mut handled = 0u64;

    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let response = match decode_line(line) {
            Ok(msg) => runtime.dispatch(msg),
            Err(response) => response,
        };

        let mut out = encode_response(&response).context("Failed to encode response")?;
        out.push('\n');
        stdout
            .write_all(out.as_bytes())
            .await
            .context("Failed to write stdout")?;
        stdout.flush().await.context("Failed to flush stdout")?;
        handled += 1;
    }

    info!(handled, "End of input");
    Ok(())
}

//! Headless host for the bridge.
//!
//! Reads one instruction per line from stdin:
//!
//! - `link <uri>` delivers a link as if the OS resumed the app with it
//! - `call <method> [json]` invokes a bridge method as the UI would
//!
//! Replies and pushed events are written to stdout as JSON lines.

mod host;

use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::thread;

use anyhow::{Context, Result};
use crossbeam_channel::Receiver;
use serde_json::json;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hostbridge_audio::{AudioService, MockAudioService};
use hostbridge_engine::{create_bridge, BridgeConfig};
use hostbridge_ipc::{event_channel, method_channel, BridgeEvent, MethodChannelClient};

use crate::host::CliHost;

/// Initialize logging.
fn init_logging() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "hostbridge=debug,hostbridge_engine=debug,hostbridge_link=debug,hostbridge_audio=debug"
                .into()
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn load_config() -> BridgeConfig {
    match std::env::var("HOSTBRIDGE_CHANNEL") {
        Ok(name) if !name.is_empty() => BridgeConfig::default().with_channel_name(name),
        _ => BridgeConfig::default(),
    }
}

fn main() -> Result<()> {
    init_logging();

    let config = load_config();
    let host = CliHost::from_args(std::env::args().skip(1));
    let audio: Arc<dyn AudioService> = Arc::new(MockAudioService::new());

    let (event_tx, event_rx) = event_channel();
    let bridge = create_bridge(config, &host, audio, event_tx);
    info!(channel = bridge.channel_name(), "Host bridge started");

    let (call_tx, call_rx) = method_channel();
    let server = {
        let bridge = Arc::clone(&bridge);
        thread::spawn(move || bridge.serve(call_rx))
    };
    let printer = thread::spawn(move || print_events(event_rx));

    let client = MethodChannelClient::new(call_tx);
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read stdin")?;
        handle_line(line.trim(), &host, &client)?;
    }

    // Closing both ends lets the serve loop and the printer finish.
    drop(client);
    bridge.teardown();
    drop(bridge);

    if server.join().is_err() {
        warn!("Bridge thread panicked");
    }
    if printer.join().is_err() {
        warn!("Event printer panicked");
    }

    info!("Host bridge stopped");
    Ok(())
}

fn handle_line(line: &str, host: &CliHost, client: &MethodChannelClient) -> Result<()> {
    let (verb, rest) = line.split_once(' ').unwrap_or((line, ""));

    match verb {
        "" => {}
        "link" if !rest.is_empty() => host.deliver(rest.trim().to_string()),
        "call" if !rest.is_empty() => {
            let (method, arguments) = match rest.trim().split_once(' ') {
                Some((method, raw)) => {
                    let arguments = serde_json::from_str(raw)
                        .with_context(|| format!("Invalid arguments for {method}"))?;
                    (method, Some(arguments))
                }
                None => (rest.trim(), None),
            };

            let result = client.invoke(method, arguments)?;
            let line = match result.to_value() {
                Some(value) => json!({ "method": method, "result": value }),
                None => json!({ "method": method, "notImplemented": true }),
            };
            write_line(&line)?;
        }
        _ => warn!(line, "Unrecognized instruction"),
    }

    Ok(())
}

fn print_events(event_rx: Receiver<BridgeEvent>) {
    for event in event_rx.iter() {
        let line = json!({ "event": event.method(), "arguments": event.payload() });
        if let Err(e) = write_line(&line) {
            warn!("Failed to write event: {}", e);
        }
    }
}

fn write_line(value: &serde_json::Value) -> Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{value}").context("Failed to write stdout")?;
    stdout.flush().context("Failed to flush stdout")
}

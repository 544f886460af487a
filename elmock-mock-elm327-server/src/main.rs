//! Mock ELM327 OBD2 adapter serving fixed responses over TCP
//!
//! Usage: cargo run -p elmock-mock-elm327-server -- [OPTIONS]
//! Then point the client under test at 127.0.0.1:35000

mod config;

use clap::Parser;
use config::{ConfigError, LogLevel, ServerConfig};
use elmock_elm327_lib::{CommandReader, Device, LineSettings, MockDevice};
use log::{debug, error, info, warn};
use std::io::{self, Read, Write};
use std::net::TcpListener;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "elmock-mock-elm327")]
#[command(version, about = "Mock ELM327 adapter answering with fixed OBD2 responses")]
struct Args {
    /// JSON config file; command line options override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to listen on [default: 0.0.0.0:35000]
    #[arg(short, long)]
    listen: Option<String>,

    /// Echo received characters back [default: true]
    #[arg(long)]
    echo: Option<bool>,

    /// End lines with CR LF instead of CR [default: true]
    #[arg(long)]
    linefeeds: Option<bool>,

    /// Log level [default: info]
    #[arg(long, value_enum)]
    log_level: Option<LogLevel>,
}

impl Args {
    /// Defaults, then the config file, then the command line
    fn resolve(&self) -> Result<ServerConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => ServerConfig::load(path)?,
            None => ServerConfig::default(),
        };

        if let Some(listen) = &self.listen {
            config.listen.clone_from(listen);
        }
        if let Some(echo) = self.echo {
            config.echo = echo;
        }
        if let Some(linefeeds) = self.linefeeds {
            config.linefeeds = linefeeds;
        }
        if let Some(log_level) = self.log_level {
            config.log_level = log_level;
        }

        Ok(config)
    }
}

fn init_logging(level: LogLevel) {
    env_logger::Builder::from_default_env()
        .filter_level(level.as_level_filter())
        .format_timestamp_millis()
        .init();
}

fn main() {
    let args = Args::parse();

    let config = match args.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    init_logging(config.log_level);
    debug!("Config: {config:?}");

    let listener = match TcpListener::bind(&config.listen) {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {}: {e}", config.listen);
            std::process::exit(1);
        }
    };
    info!("Mock ELM327 ready on {} - waiting for connections...", config.listen);

    let settings = config.line_settings();

    for stream in listener.incoming() {
        match stream {
            Ok(stream) => {
                let peer = stream
                    .peer_addr()
                    .map_or_else(|_| "unknown".to_string(), |addr| addr.to_string());
                info!("Client connected: {peer}");
                std::thread::spawn(move || match handle_client(stream, &MockDevice, settings) {
                    Ok(()) => info!("Client {peer} disconnected"),
                    Err(e) => warn!("Client {peer} dropped: {e}"),
                });
            }
            Err(e) => error!("Connection error: {e}"),
        }
    }
}

/// Serve one client until it closes the connection.
///
/// Each carriage-return terminated command is run through `device` and the
/// framed response written back. Received bytes are echoed first when
/// enabled, like a real adapter does.
fn handle_client<S: Read + Write, D: Device>(
    mut stream: S,
    device: &D,
    settings: LineSettings,
) -> io::Result<()> {
    let mut reader = CommandReader::new();
    let mut buffer = [0u8; 256];
    let mut reply = Vec::new();

    loop {
        let len = match stream.read(&mut buffer) {
            Ok(0) => return Ok(()),
            Ok(len) => len,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };

        reply.clear();
        for &byte in &buffer[..len] {
            if settings.echo_enabled {
                reply.push(byte);
            }

            if let Some(command) = reader.push(byte) {
                debug!("RX: {command}");
                let result = device.execute(&command);
                let response = settings.frame_result(&result);
                debug!("TX: {}", response.escape_debug());
                reply.extend_from_slice(response.as_bytes());
            }
        }

        if !reply.is_empty() {
            stream.write_all(&reply)?;
            stream.flush()?;
        }
    }
}

//! Basic logger usage example
//!
//! Demonstrates levels, prefixes, custom formatters and the global logger.
//!
//! Run with: cargo run --example basic_usage

use logx::prelude::*;
use logx::{global, info, warn};

fn main() -> Result<()> {
    println!("=== logx - Basic Usage Example ===\n");

    // A logger writing to stdout; the default formatter colors only on a terminal
    let logger = Logger::new(Stdout);

    println!("1. Logging at different levels:");
    logger.debug("This is a debug message");
    logger.info("This is an info message");
    logger.warn("This is a warning message");
    logger.error("This is an error message");
    logger.log(Level::new(2), "This is an INFO+2 message")?;

    println!("\n2. Prefix and format arguments:");
    logger.set_prefix("server");
    let port = 8080;
    info!(logger, "Listening on port {}", port);
    warn!(logger, "{} requests queued", 17);

    println!("\n3. JSON output:");
    logger.set_formatter(JsonFormatter::new());
    logger.info("Structured line");

    println!("\n4. Custom formatter:");
    logger.set_formatter(|entry: &LogEntry| {
        format!("[{}] {}\n", entry.level, entry.message).into_bytes()
    });
    logger.info("Rendered by a closure");

    println!("\n5. Global logger (stderr):");
    global::set_prefix("app");
    global::info("Hello from the global logger");

    println!("\n=== Example completed successfully! ===");

    Ok(())
}

//! # wachat CLI
//!
//! Command-line interface for the wachat library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use wachat::{MessageType, WachatError};
use wachat::cli::Args;
use wachat::config::ChatConfig;
use wachat::format::{OutputFormat, write_to_format};
use wachat::parser::ChatParser;

fn main() {
    let args = <Args as ClapParser>::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "wachat=debug" } else { "wachat=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: &Args) -> Result<(), WachatError> {
    let total_start = Instant::now();
    let output_path = args.output_path();
    let format: OutputFormat = args.format.into();

    let mut config = match &args.config {
        Some(path) => ChatConfig::from_json_file(path)?,
        None => ChatConfig::default(),
    };
    if args.skip_system {
        config = config.with_skip_system_messages(true);
    }

    println!("💬 wachat v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input.display());
    println!("💾 Output:  {}", output_path);
    println!("📄 Format:  {} ({})", format, format.mime_type());
    println!();

    println!("⏳ Parsing...");
    let parse_start = Instant::now();
    let parsed = ChatParser::with_config(config).parse_dir(&args.input)?;
    let parse_time = parse_start.elapsed();
    let stats = parsed.stats;

    println!(
        "   Found {} messages ({:.2}s)",
        stats.messages,
        parse_time.as_secs_f64()
    );

    println!("💾 Writing {}...", format);
    write_to_format(&parsed.export, &output_path, format, &args.output_config())?;

    println!();
    println!("✅ Done! Output saved to {}", output_path);

    println!();
    println!("📊 Summary:");
    println!(
        "   Title:        {}",
        parsed.export.title.as_deref().unwrap_or("(none)")
    );
    println!("   Messages:     {}", stats.exported());
    let by_type: Vec<String> = MessageType::all()
        .iter()
        .map(|kind| format!("{} {}", stats.count_of(*kind), kind))
        .collect();
    println!("   By type:      {}", by_type.join(", "));
    println!(
        "   Media:        {} messages",
        parsed
            .export
            .messages
            .iter()
            .filter(|m| m.kind.is_media())
            .count()
    );
    if stats.dropped_system > 0 {
        println!("   Dropped:      {} system notices", stats.dropped_system);
    }
    println!(
        "   Attachments:  {} resolved, {} missing",
        stats.attachments_resolved, stats.attachments_unresolved
    );
    println!(
        "   Skipped:      {} lines ({:.1}% recognized)",
        stats.skipped_lines,
        stats.recognition_rate()
    );
    println!("   Senders:      {}", parsed.export.senders().len());
    println!(
        "   Total time:   {:.2}s",
        total_start.elapsed().as_secs_f64()
    );

    Ok(())
}

use std::io::Write;

use snowuid::{Components, Uid, UidConfig, UidGenerator};

use super::config::{GenArgs, ParseArgs};

/// Write `args.count` fresh uids to `out`, one per line.
pub fn run_gen<W: Write>(args: &GenArgs, out: &mut W) -> anyhow::Result<()> {
    let config = UidConfig::try_from(args)?;
    let generator = UidGenerator::with_config(config);

    tracing::info!(count = args.count, "generating uids");
    for _ in 0..args.count {
        writeln!(out, "{}", generator.next_id())?;
    }
    Ok(())
}

/// Decode `args.uid` and write its fields to `out` on a single line.
pub fn run_parse<W: Write>(args: &ParseArgs, out: &mut W) -> anyhow::Result<()> {
    let config = UidConfig::from(args);
    let uid = Uid::parse(&args.uid)?;
    let parts = UidGenerator::with_config(config).extract(&uid);

    if let (Some(expected), Some(found)) = (config.tag(), parts.tag) {
        if expected != found {
            tracing::warn!(expected, found, "uid carries a different tag");
        }
    }

    writeln!(out, "{}", format_components(&parts))?;
    Ok(())
}

fn format_components(parts: &Components) -> String {
    let timestamp = match parts.datetime() {
        Some(datetime) => datetime.to_rfc3339(),
        None => parts.timestamp.to_string(),
    };
    let mut line = format!(
        "timestamp={} counter={} random={}",
        timestamp,
        parts.counter,
        parts.random_hex()
    );
    if let Some(tag) = parts.tag {
        line.push_str(&format!(" tag={tag}"));
    }
    line
}

//! Rendering a parsed record to stdout.

use anyhow::{Context, Result};
use sectxt_core::SecurityTxt;

pub fn render_text(addr: &str, sec: &SecurityTxt) -> String {
    format!("security.txt for {}\n{}", addr, sec)
}

pub fn print_text(addr: &str, sec: &SecurityTxt) {
    print!("{}", render_text(addr, sec));
}

pub fn print_json(sec: &SecurityTxt) -> Result<()> {
    let json = serde_json::to_string_pretty(sec).context("serialize record")?;
    println!("{}", json);
    Ok(())
}

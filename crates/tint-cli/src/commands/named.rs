//! `tint named`: list the X11 table.

use anyhow::Result;
use serde_json::{Map, Value};
use tint_core::Color;

use crate::NamedArgs;

/// Entries whose name contains `filter` (case-insensitive).
pub fn matching(filter: Option<&str>) -> Vec<(&'static str, Color)> {
    let needle = filter.map(|f| f.to_ascii_lowercase().replace([' ', '_', '-'], ""));
    tint_palette::NAMED
        .iter()
        .filter(|(name, _)| needle.as_deref().is_none_or(|n| name.contains(n)))
        .copied()
        .collect()
}

pub fn run(args: NamedArgs, json: bool) -> Result<()> {
    let entries = matching(args.filter.as_deref());
    if json {
        let map: Map<String, Value> = entries
            .iter()
            .map(|(name, c)| (name.to_string(), Value::String(c.to_html(true))))
            .collect();
        println!("{}", serde_json::to_string_pretty(&map)?);
    } else {
        let width = entries.iter().map(|(n, _)| n.len()).max().unwrap_or(0);
        for (name, c) in &entries {
            println!("{name:<width$}  #{}", c.to_html(true));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_filter_lists_all() {
        assert_eq!(matching(None).len(), tint_palette::NAMED.len());
    }

    #[test]
    fn test_filter() {
        let names: Vec<_> = matching(Some("Slate Gray")).into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["darkslategray", "lightslategray", "slategray"]);
        assert!(matching(Some("zzz")).is_empty());
    }
}

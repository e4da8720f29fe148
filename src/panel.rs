use crate::errors::Result;
use chrono::{DateTime, Local};
use serde_json::Value;
use std::io::Write;

/// Region identifiers, in draw order
pub const REGION_IDS: [&str; 4] = ["capital", "stocks", "algos", "positions"];

/// ANSI clear-screen plus cursor home, for full redraws in watch mode
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[1;1H";

/// Render a JSON payload the way every region displays it
pub fn render_value(value: &Value) -> Result<String> {
    let text = serde_json::to_string_pretty(value)?;
    Ok(text)
}

struct Region {
    id: &'static str,
    text: String,
}

/// The console panel: four text regions plus a status line.
/// A region's text is replaced wholesale on each update.
pub struct Panel {
    regions: Vec<Region>,
    last_refresh: Option<DateTime<Local>>,
}

impl Panel {
    pub fn new() -> Self {
        Self {
            regions: REGION_IDS
                .iter()
                .map(|&id| Region {
                    id,
                    text: String::new(),
                })
                .collect(),
            last_refresh: None,
        }
    }

    /// Replace a region's text. Unknown identifiers are ignored.
    pub fn set_text(&mut self, id: &str, text: String) {
        if let Some(region) = self.regions.iter_mut().find(|r| r.id == id) {
            region.text = text;
        }
    }

    pub fn region_text(&self, id: &str) -> Option<&str> {
        self.regions
            .iter()
            .find(|r| r.id == id)
            .map(|r| r.text.as_str())
    }

    pub fn mark_refreshed(&mut self) {
        self.last_refresh = Some(Local::now());
    }

    pub fn last_refresh(&self) -> Option<DateTime<Local>> {
        self.last_refresh
    }

    /// Draw every region to the sink, in the fixed region order
    pub fn draw<W: Write>(&self, out: &mut W) -> Result<()> {
        for region in &self.regions {
            writeln!(out, "== {} ==", region.id)?;
            writeln!(out, "{}", region.text)?;
            writeln!(out)?;
        }

        if let Some(ts) = self.last_refresh {
            writeln!(out, "updated: {}", ts.format("%Y-%m-%d %H:%M:%S"))?;
        } else {
            writeln!(out, "waiting for first refresh...")?;
        }

        Ok(())
    }
}

impl Default for Panel {
    fn default() -> Self {
        Self::new()
    }
}

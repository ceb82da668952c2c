//! Minimal INI reader and writer for the `.gadd` file.
//!
//! Accepts the subset of INI that Python's `configparser` writes: section
//! headers, `key = value` / `key: value` options, `#`/`;` comments and
//! indented continuation lines.

use regex::Regex;
use tracing::warn;

use super::{PatternConfig, PatternKey, SECTION_NAME};
use crate::domain::GaddError;

/// One `[section]` with its options in file order.
#[derive(Debug, Default)]
struct Section {
    name: String,
    options: Vec<(String, String)>,
}

/// Parse INI text into sections.
fn parse_sections(content: &str) -> Result<Vec<Section>, GaddError> {
    let header_re = Regex::new(r"^\[(?P<name>[^\]]+)\]\s*$")?;
    let option_re = Regex::new(r"^(?P<key>[^=:\s][^=:]*?)\s*[=:]\s*(?P<value>.*?)\s*$")?;

    let mut sections: Vec<Section> = Vec::new();
    // Continuations extend the last option, across blank and comment lines.
    let mut in_option = false;

    for (idx, raw) in content.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = raw.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with(';') {
            continue;
        }

        if raw.starts_with(char::is_whitespace) && in_option {
            if let Some((_, value)) = sections.last_mut().and_then(|s| s.options.last_mut()) {
                if !value.is_empty() {
                    value.push('\n');
                }
                value.push_str(trimmed);
            }
            continue;
        }

        if let Some(caps) = header_re.captures(trimmed) {
            let name = caps["name"].trim().to_string();
            if sections.iter().any(|s| s.name == name) {
                return Err(GaddError::ConfigSyntax {
                    line: line_no,
                    message: format!("section '{}' already exists", name),
                });
            }
            sections.push(Section {
                name,
                options: Vec::new(),
            });
            in_option = false;
            continue;
        }

        let section = sections.last_mut().ok_or_else(|| GaddError::ConfigSyntax {
            line: line_no,
            message: "file contains no section headers".to_string(),
        })?;

        let caps = option_re
            .captures(trimmed)
            .ok_or_else(|| GaddError::ConfigSyntax {
                line: line_no,
                message: format!("cannot parse line: {}", trimmed),
            })?;

        let key = caps["key"].trim().to_ascii_lowercase();
        if section.options.iter().any(|(k, _)| *k == key) {
            return Err(GaddError::ConfigSyntax {
                line: line_no,
                message: format!("option '{}' in section '{}' already exists", key, section.name),
            });
        }
        section.options.push((key, caps["value"].to_string()));
        in_option = true;
    }

    Ok(sections)
}

/// Split a stored value into patterns. Commas and any whitespace separate entries.
fn split_patterns(value: &str) -> impl Iterator<Item = &str> {
    value
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|p| !p.is_empty())
}

/// Decode the `[GADD]` section into a pattern configuration.
pub fn decode(content: &str) -> Result<PatternConfig, GaddError> {
    let sections = parse_sections(content)?;
    let mut config = PatternConfig::default();
    let mut found = false;

    for section in &sections {
        if section.name != SECTION_NAME {
            warn!(section = %section.name, "Ignoring unknown config section");
            continue;
        }
        found = true;

        for (key, value) in &section.options {
            match PatternKey::parse(key) {
                Some(k) => config.extend(k, split_patterns(value)),
                None => warn!(key = %key, "Ignoring unknown config key"),
            }
        }
    }

    if !found {
        return Err(GaddError::MissingSection(SECTION_NAME.to_string()));
    }

    Ok(config)
}

/// Render a pattern configuration as INI text.
pub fn encode(config: &PatternConfig) -> String {
    let mut out = format!("[{}]\n", SECTION_NAME);
    for key in PatternKey::ALL {
        let joined = config
            .get(key)
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(",");
        out.push_str(&format!("{} = {}\n", key, joined));
    }
    out.push('\n');
    out
}

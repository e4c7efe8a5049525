//! Badge-line ingestion: externally supplied `(code, desc, surface)`
//! triples, one per line, merged into the inventory by the caller.

use crate::errors::{BadgeError, VeilResult};
use crate::grammar::{BADGE_ARROW_RE, BADGE_PIPE_RE};

/// One parsed badge line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub code: String,
    pub desc: String,
    pub surface: String,
}

/// Parse badge lines, ARROW form tried before PIPE:
///
/// ```text
/// [REDACTED: (3)(A)(b), api key] => AKIA...
/// (3)(A)(b) | api key | AKIA...
/// ```
///
/// Blank lines and lines starting with `#` are skipped and not counted as
/// errors. The first line matching neither form aborts parsing with its
/// 1-based line number; a code outside the classification grammar fails the
/// line match.
pub fn parse_badges(input: &str) -> VeilResult<Vec<Badge>> {
    let mut badges = Vec::new();
    for (idx, line) in input.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        match parse_badge_line(line) {
            Some(badge) => badges.push(badge),
            None => {
                return Err(BadgeError::InvalidLine {
                    line: idx + 1,
                    content: trimmed.to_string(),
                }
                .into());
            }
        }
    }
    Ok(badges)
}

fn parse_badge_line(line: &str) -> Option<Badge> {
    let caps = BADGE_ARROW_RE
        .captures(line)
        .or_else(|| BADGE_PIPE_RE.captures(line))?;
    Some(Badge {
        code: caps[1].to_string(),
        desc: caps[2].trim().to_string(),
        surface: caps[3].to_string(),
    })
}

//! Text summaries consumed by agents.
//!
//! Both entry points take a file path and return a `String`, never an error:
//! failures are rendered into the returned text so a language model (or a
//! human skimming a transcript) always gets something readable. The text is a
//! pure projection of the structured [`TableProfile`](crate::types::TableProfile);
//! callers that want values instead of prose should profile the table
//! directly.

mod stats;
mod structure;

pub use stats::{render_statistics, statistical_summary};
pub use structure::{render_structure, structural_summary};

const RULE_HEAVY: &str =
    "================================================================================";
const RULE_LIGHT: &str =
    "--------------------------------------------------------------------------------";

/// Format an integer with thousands separators, e.g. 1234567 -> "1,234,567".
fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_rules_are_80_chars() {
        assert_eq!(RULE_HEAVY.len(), 80);
        assert_eq!(RULE_LIGHT.len(), 80);
    }
}

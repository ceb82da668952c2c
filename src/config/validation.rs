//! Configuration validation.

use super::{PatternConfig, PatternKey};
use crate::domain::GaddError;

/// Validate every stored pattern.
pub fn validate(config: &PatternConfig) -> Result<(), GaddError> {
    for key in PatternKey::ALL {
        for pattern in config.get(key) {
            // Stored lists are split on whitespace, so a pattern may not contain any.
            if pattern.contains(|c: char| c.is_whitespace() || c.is_control()) {
                return Err(GaddError::InvalidPattern {
                    key,
                    pattern: pattern.escape_debug().to_string(),
                    reason: "contains whitespace or a control character".to_string(),
                });
            }

            if key == PatternKey::IgnoreDecorators && !pattern.starts_with('@') {
                return Err(GaddError::InvalidPattern {
                    key,
                    pattern: pattern.clone(),
                    reason: "decorator patterns must start with '@'".to_string(),
                });
            }
        }
    }

    Ok(())
}

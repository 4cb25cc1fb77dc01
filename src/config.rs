// External Crate Imports
use tracing::debug;

// Local Crate Imports
use crate::{error::AttachError, message::ErrorMessage};

// Public API ==========================================================================================================

// NOTE: These are the attribute names without their `data-` prefix, matching how they're looked up in a `dataset`
pub const TARGET_FOR: &str = "target-for";
pub const MAX_SIZE: &str = "max-size";
pub const ERROR_MESSAGE: &str = "error-message";

#[derive(Clone, PartialEq, Debug)]
pub struct Config {
    target_for: String,
    max_size: MaxSize,
    error_message: ErrorMessage,
}

impl Config {
    /// Reads the configuration attributes and resolves the target they point at
    ///
    /// Attributes are checked in the order `target-for`, `max-size`, then `error-message`, with the target being
    /// looked up as soon as its id is known. The first problem found aborts the read.
    pub fn read<T>(
        attribute: impl Fn(&str) -> Option<String>,
        lookup: impl FnOnce(&str) -> Option<T>,
    ) -> Result<(Self, T), AttachError> {
        let target_for = required(&attribute, TARGET_FOR)?;
        let target = lookup(&target_for).ok_or_else(|| AttachError::TargetNotFound(target_for.clone()))?;

        let max_size = attribute(MAX_SIZE).map_or(MaxSize::DEFAULT, |raw| MaxSize::parse(&raw));
        let error_message = required(&attribute, ERROR_MESSAGE)?.into();

        debug!(%target_for, ?max_size, "read `FilePreviewInput` configuration");

        let config = Self {
            target_for,
            max_size,
            error_message,
        };

        Ok((config, target))
    }

    #[must_use]
    pub fn target_for(&self) -> &str {
        &self.target_for
    }

    #[must_use]
    pub const fn max_size(&self) -> MaxSize {
        self.max_size
    }

    #[must_use]
    pub const fn error_message(&self) -> &ErrorMessage {
        &self.error_message
    }
}

/// The inclusive upper bound, in bytes, on the size of files that will be previewed
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct MaxSize(f64);

impl MaxSize {
    pub const DEFAULT: Self = Self(10_485_760.0);

    /// Coerces an attribute value to a number the way a browser's `Number()` does
    ///
    /// Surrounding whitespace is ignored, a blank string is zero, `0x` / `0o` / `0b` prefixes select a radix, and
    /// anything unparsable becomes `NaN`. A `NaN` limit rejects nothing, since no size compares greater than it.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() {
            return Self(0.0);
        }

        let radix_prefixed = [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)]
            .into_iter()
            .find_map(|(prefix, radix)| raw.strip_prefix(prefix).map(|digits| (digits, radix)));

        #[expect(clippy::cast_precision_loss)]
        let bytes = match radix_prefixed {
            Some((digits, radix)) => u64::from_str_radix(digits, radix).map_or(f64::NAN, |bytes| bytes as f64),
            None => match raw {
                "Infinity" | "+Infinity" => f64::INFINITY,
                "-Infinity" => f64::NEG_INFINITY,
                _ if raw.chars().any(char::is_alphabetic) && !raw.contains(['e', 'E']) => f64::NAN,
                _ => raw.parse().unwrap_or(f64::NAN),
            },
        };

        Self(bytes)
    }

    #[must_use]
    pub const fn bytes(self) -> f64 {
        self.0
    }

    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub fn allows(self, size: u64) -> bool {
        // NOTE: Written as a negated `>` so that a `NaN` limit allows every size
        !(size as f64 > self.0)
    }
}

impl Default for MaxSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// Private Helper Code =================================================================================================

fn required(
    attribute: impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<String, AttachError> {
    attribute(name).ok_or(AttachError::MissingAttribute(name))
}

// Unit Tests ==========================================================================================================

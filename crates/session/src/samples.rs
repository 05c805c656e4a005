//! Built-in sample texts.
//!
//! Inert preset data; the CLI offers these as quick inputs.

pub const SAMPLE_TEXTS: &[&str] = &[
    "https://www.google.com",
    "Hello World!",
    "https://github.com",
    "這是一個中文 QR Code 測試",
    "mailto:example@email.com",
    "tel:+886-912-345-678",
];

/// Look up a sample text by index.
pub fn sample(index: usize) -> Option<&'static str> {
    SAMPLE_TEXTS.get(index).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_lookup() {
        assert_eq!(sample(0), Some("https://www.google.com"));
        assert_eq!(sample(SAMPLE_TEXTS.len()), None);
    }
}

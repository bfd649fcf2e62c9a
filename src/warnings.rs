//! Non-fatal warnings for jotter.
//!
//! These are printed to stderr and never change the exit status.

/// Note count above which whole-file rewrites start to feel slow.
pub const NOTE_WARNING_THRESHOLD: usize = 1000;

/// A warning shown to the user without aborting the command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// An add was rejected by validation, e.g. an empty body. Holds the reason.
    Rejected(String),
    /// Note count exceeds the recommended threshold.
    LargeStore { count: usize, threshold: usize },
}

/// Check thresholds and return any warnings.
pub fn check_thresholds(note_count: usize) -> Vec<Warning> {
    let mut warnings = Vec::new();

    if note_count > NOTE_WARNING_THRESHOLD {
        warnings.push(Warning::LargeStore {
            count: note_count,
            threshold: NOTE_WARNING_THRESHOLD,
        });
    }

    warnings
}

/// Format a warning for display.
pub fn format_warning(warning: &Warning) -> String {
    match warning {
        Warning::Rejected(reason) => format!("Warning: {} Nothing was saved.", reason),
        Warning::LargeStore { count, threshold } => {
            format!(
                "Warning: {} notes exceeds recommended {} - every save rewrites the whole file",
                count, threshold
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_warnings_under_threshold() {
        assert!(check_thresholds(0).is_empty());
        assert!(check_thresholds(NOTE_WARNING_THRESHOLD).is_empty());
    }

    #[test]
    fn test_large_store_warning() {
        let warnings = check_thresholds(1500);
        assert_eq!(
            warnings,
            vec![Warning::LargeStore {
                count: 1500,
                threshold: NOTE_WARNING_THRESHOLD
            }]
        );
    }

    #[test]
    fn test_format_large_store() {
        let msg = format_warning(&Warning::LargeStore {
            count: 1500,
            threshold: 1000,
        });
        assert!(msg.starts_with("Warning:"));
        assert!(msg.contains("1500"));
        assert!(msg.contains("1000"));
    }

    #[test]
    fn test_format_rejected() {
        let msg = format_warning(&Warning::Rejected("Note is empty.".to_string()));
        assert_eq!(msg, "Warning: Note is empty. Nothing was saved.");
    }
}

use std::fmt;

use regex::Regex;

use crate::domain::{classify, VersionString};

const CHANNEL_KEYWORDS: [&str; 4] = ["SNAPSHOT", "ALPHA", "BETA", "RC"];

/// Inputs that classify fine but probably not the way the caller meant.
/// These are non-fatal and only reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassificationWarning {
    /// Suffix spells a channel keyword in the wrong case, and the uppercase
    /// spelling would have selected an earlier level
    LowercaseQualifier { suffix: String, keyword: String },
    /// Suffix embedded in the version was replaced by an explicit one
    EmbeddedSuffixIgnored { version: String },
}

impl fmt::Display for ClassificationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassificationWarning::LowercaseQualifier { suffix, keyword } => write!(
                f,
                "Suffix '{}' looks like '{}' but qualifiers are case-sensitive",
                suffix, keyword
            ),
            ClassificationWarning::EmbeddedSuffixIgnored { version } => write!(
                f,
                "Suffix in '{}' was replaced by the explicit suffix",
                version
            ),
        }
    }
}

/// Collect warnings for a parsed version about to be classified
///
/// # Arguments
/// * `parsed` - Version as given, with any embedded suffix
/// * `explicit_suffix` - Suffix passed separately; replaces the embedded one
pub fn inspect(parsed: &VersionString, explicit_suffix: Option<&str>) -> Vec<ClassificationWarning> {
    let mut warnings = Vec::new();

    let suffix = match explicit_suffix {
        Some(explicit) => {
            if parsed.suffix.is_some() {
                warnings.push(ClassificationWarning::EmbeddedSuffixIgnored {
                    version: parsed.to_string(),
                });
            }
            Some(explicit).filter(|s| !s.is_empty())
        }
        None => parsed.suffix.as_deref(),
    };

    if let Some(suffix) = suffix {
        warnings.extend(lowercase_qualifier(&parsed.version, suffix));
    }

    warnings
}

/// Warn about a whole-word keyword in the wrong case, e.g. "beta2" or
/// "rc.1", when uppercasing it would select an earlier level.
fn lowercase_qualifier(version: &str, suffix: &str) -> Option<ClassificationWarning> {
    let words = Regex::new(r"[A-Za-z]+").ok()?;
    let actual = classify(version, Some(suffix));

    let warning = words.find_iter(suffix).find_map(|m| {
        let word = m.as_str();
        let upper = word.to_ascii_uppercase();
        if word == upper {
            return None;
        }
        let keyword = CHANNEL_KEYWORDS.into_iter().find(|k| *k == upper)?;

        let corrected = format!("{}{}{}", &suffix[..m.start()], upper, &suffix[m.end()..]);
        if classify(version, Some(&corrected)) < actual {
            Some(ClassificationWarning::LowercaseQualifier {
                suffix: suffix.to_string(),
                keyword: keyword.to_string(),
            })
        } else {
            None
        }
    });
    warning
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(input: &str) -> VersionString {
        VersionString::parse(input).unwrap()
    }

    #[test]
    fn test_clean_input_has_no_warnings() {
        assert!(inspect(&parsed("1.2.3-SNAPSHOT"), None).is_empty());
        assert!(inspect(&parsed("2.0"), None).is_empty());
    }

    #[test]
    fn test_lowercase_qualifier() {
        let warnings = inspect(&parsed("1.2-beta1"), None);
        assert_eq!(
            warnings,
            vec![ClassificationWarning::LowercaseQualifier {
                suffix: "beta1".to_string(),
                keyword: "BETA".to_string(),
            }]
        );
    }

    #[test]
    fn test_explicit_suffix_replaces_embedded() {
        let warnings = inspect(&parsed("1.2-RC1"), Some("SNAPSHOT"));
        assert_eq!(
            warnings,
            vec![ClassificationWarning::EmbeddedSuffixIgnored {
                version: "1.2-RC1".to_string()
            }]
        );
    }

    #[test]
    fn test_explicit_suffix_without_embedded_is_clean() {
        assert!(inspect(&parsed("1.2"), Some("RC1")).is_empty());
    }

    #[test]
    fn test_explicit_suffix_is_the_one_checked() {
        let warnings = inspect(&parsed("1.2"), Some("rc1"));
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].to_string().contains("'RC'"));
    }
}

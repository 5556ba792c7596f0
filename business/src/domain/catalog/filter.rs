/// How keyword substrings are compared against catalog columns.
///
/// The catalog's own collation decides this in practice, so it is exposed
/// as configuration instead of being hardcoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseSensitivity {
    Sensitive,
    #[default]
    Insensitive,
}

impl std::fmt::Display for CaseSensitivity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CaseSensitivity::Sensitive => write!(f, "sensitive"),
            CaseSensitivity::Insensitive => write!(f, "insensitive"),
        }
    }
}

impl From<bool> for CaseSensitivity {
    fn from(case_sensitive: bool) -> Self {
        if case_sensitive {
            CaseSensitivity::Sensitive
        } else {
            CaseSensitivity::Insensitive
        }
    }
}

/// Disjunctive substring filter: a product matches when, for any keyword `k`,
/// `category CONTAINS k OR name CONTAINS k`.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordFilter {
    keywords: Vec<String>,
    case_sensitivity: CaseSensitivity,
}

impl KeywordFilter {
    pub fn new(keywords: Vec<String>, case_sensitivity: CaseSensitivity) -> Self {
        Self {
            keywords,
            case_sensitivity,
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn case_sensitivity(&self) -> CaseSensitivity {
        self.case_sensitivity
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_case_insensitive_matching() {
        assert_eq!(CaseSensitivity::default(), CaseSensitivity::Insensitive);
    }

    #[test]
    fn should_map_flag_to_case_sensitivity() {
        assert_eq!(CaseSensitivity::from(true), CaseSensitivity::Sensitive);
        assert_eq!(CaseSensitivity::from(false), CaseSensitivity::Insensitive);
    }

    #[test]
    fn should_report_empty_when_no_keywords() {
        let filter = KeywordFilter::new(vec![], CaseSensitivity::Sensitive);
        assert!(filter.is_empty());
        assert_eq!(filter.case_sensitivity(), CaseSensitivity::Sensitive);
    }
}

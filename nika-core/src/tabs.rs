//! Tab identifiers and initial-tab resolution.

/// The dashboard's result tabs, keyed by identifier string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TabId {
    Upload,
    CsvResults,
    ImageResults,
}

impl TabId {
    pub const ALL: [TabId; 3] = [TabId::Upload, TabId::CsvResults, TabId::ImageResults];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Upload => "upload",
            Self::CsvResults => "csv-results",
            Self::ImageResults => "image-results",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Upload => "Upload",
            Self::CsvResults => "CSV Results",
            Self::ImageResults => "Image Results",
        }
    }

    pub fn from_str(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|tab| tab.as_str() == id)
    }
}

/// Resolve which tab a fresh page view starts on.
///
/// An explicit `?tab=` query parameter wins. Otherwise auto-switch to
/// whichever results are present, preferring image results, falling back
/// to the upload tab.
pub fn initial_tab(query_tab: Option<&str>, has_image_results: bool, has_csv_results: bool) -> TabId {
    if let Some(tab) = query_tab.and_then(TabId::from_str) {
        return tab;
    }

    if has_image_results {
        TabId::ImageResults
    } else if has_csv_results {
        TabId::CsvResults
    } else {
        TabId::Upload
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str_maps_known_identifiers() {
        assert_eq!(TabId::from_str("upload"), Some(TabId::Upload));
        assert_eq!(TabId::from_str("csv-results"), Some(TabId::CsvResults));
        assert_eq!(TabId::from_str("image-results"), Some(TabId::ImageResults));
    }

    #[test]
    fn from_str_rejects_unknown_identifier() {
        assert_eq!(TabId::from_str("settings"), None);
    }

    #[test]
    fn query_parameter_wins_over_available_results() {
        let tab = initial_tab(Some("upload"), true, true);
        assert_eq!(tab, TabId::Upload);
    }

    #[test]
    fn unknown_query_parameter_falls_through_to_results() {
        let tab = initial_tab(Some("bogus"), false, true);
        assert_eq!(tab, TabId::CsvResults);
    }

    #[test]
    fn image_results_preferred_over_csv() {
        let tab = initial_tab(None, true, true);
        assert_eq!(tab, TabId::ImageResults);
    }

    #[test]
    fn csv_results_used_when_no_image_results() {
        let tab = initial_tab(None, false, true);
        assert_eq!(tab, TabId::CsvResults);
    }

    #[test]
    fn defaults_to_upload_with_no_results() {
        let tab = initial_tab(None, false, false);
        assert_eq!(tab, TabId::Upload);
    }
}

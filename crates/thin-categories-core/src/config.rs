/// Input dataset location, relative to the working directory
pub const DEFAULT_INPUT_PATH: &str = "data/words.json";

/// Report location, relative to the working directory
pub const DEFAULT_OUTPUT_PATH: &str = "data/thin_categories.json";

/// Minimum number of words a category needs to fill a row of the 4x4 grid
pub const USABILITY_THRESHOLD: usize = 4;

/// Category families that are never reported, regardless of size
pub const EXCLUDED_PREFIXES: &[&str] = &["Starts with", "Ends with"];

/// Parameters of the thin-category analysis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Categories with fewer words than this are thin
    pub threshold: usize,

    /// Name prefixes excluded from both the report and the summary
    pub excluded_prefixes: Vec<String>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            threshold: USABILITY_THRESHOLD,
            excluded_prefixes: EXCLUDED_PREFIXES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl AnalysisConfig {
    /// Check if a category name belongs to an excluded family
    pub fn is_excluded(&self, category: &str) -> bool {
        self.excluded_prefixes
            .iter()
            .any(|prefix| category.starts_with(prefix.as_str()))
    }

    /// Check if a category of the given size can fill a grid row
    pub fn is_usable(&self, word_count: usize) -> bool {
        word_count >= self.threshold
    }

    /// Human readable list of excluded prefixes, e.g. `'Starts with' and 'Ends with'`
    pub fn excluded_label(&self) -> String {
        let quoted: Vec<String> = self
            .excluded_prefixes
            .iter()
            .map(|p| format!("'{}'", p))
            .collect();

        match quoted.split_last() {
            None => String::new(),
            Some((last, [])) => last.clone(),
            Some((last, rest)) => format!("{} and {}", rest.join(", "), last),
        }
    }
}

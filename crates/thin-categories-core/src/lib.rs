pub mod analysis;
pub mod config;
pub mod dataset;
pub mod error;
pub mod index;
mod ordered;
pub mod report;

pub use analysis::{filter_thin_categories, summarize, Summary, ThinCategories};
pub use config::{
    AnalysisConfig, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH, EXCLUDED_PREFIXES,
    USABILITY_THRESHOLD,
};
pub use dataset::{Dataset, WordEntry};
pub use error::{Result, ThinCategoriesError};
pub use index::{build_category_index, Category, CategoryIndex};
pub use report::{generate_report, write_listing, write_summary, write_thin_categories};

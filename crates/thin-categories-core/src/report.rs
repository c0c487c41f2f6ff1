//! Report output: the console listing, the summary block and the
//! `thin_categories.json` file.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::analysis::{filter_thin_categories, summarize, Summary, ThinCategories};
use crate::config::AnalysisConfig;
use crate::dataset::Dataset;
use crate::error::{Result, ThinCategoriesError};
use crate::index::CategoryIndex;

const RULE_WIDTH: usize = 80;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Write thin categories as a 2-space indented JSON object, replacing the file
pub fn write_thin_categories(path: &Path, thin: &ThinCategories) -> Result<()> {
    let content = serde_json::to_string_pretty(thin)?;
    fs::write(path, content).map_err(|source| ThinCategoriesError::ReportWrite {
        path: path.to_path_buf(),
        source,
    })
}

/// Header plus one `<name> (<n> items): <words>` line per thin category
pub fn write_listing<W: Write>(
    out: &mut W,
    thin: &ThinCategories,
    config: &AnalysisConfig,
) -> Result<()> {
    writeln!(
        out,
        "Found {} categories with fewer than {} items (excluding {}):",
        thin.len(),
        config.threshold,
        config.excluded_label()
    )?;
    writeln!(out, "{}", rule())?;

    for category in thin {
        writeln!(
            out,
            "{} ({} items): {}",
            category.name,
            category.len(),
            category.words.join(", ")
        )?;
    }
    Ok(())
}

/// Summary block. The count lines are emitted before the percentage is
/// computed, so an empty summary fails after printing them.
pub fn write_summary<W: Write>(
    out: &mut W,
    summary: &Summary,
    config: &AnalysisConfig,
) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", rule())?;
    writeln!(out, "Summary (excluding {}):", config.excluded_label())?;
    writeln!(out, "Total categories: {}", summary.total)?;
    writeln!(
        out,
        "Categories with {}+ items (usable): {}",
        config.threshold, summary.usable
    )?;
    writeln!(
        out,
        "Categories with <{} items (need expansion): {}",
        config.threshold, summary.thin
    )?;

    let percentage = summary.usable_percentage()?;
    writeln!(out, "Usable percentage: {:.1}%", percentage)?;
    Ok(())
}

/// Run the whole analysis: load, index, filter, print, write, summarize
pub fn generate_report<W: Write>(
    input: &Path,
    output: &Path,
    config: &AnalysisConfig,
    out: &mut W,
) -> Result<Summary> {
    let dataset = Dataset::load(input)?;
    let index = CategoryIndex::build(&dataset);
    let thin = filter_thin_categories(&index, config);

    write_listing(out, &thin, config)?;

    write_thin_categories(output, &thin)?;
    writeln!(out)?;
    writeln!(
        out,
        "Saved {} thin categories to {}",
        thin.len(),
        output.display()
    )?;

    let summary = summarize(&index, config);
    write_summary(out, &summary, config)?;

    Ok(summary)
}

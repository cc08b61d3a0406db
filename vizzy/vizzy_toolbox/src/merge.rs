//! Folding an extension palette into the host palette.

use tracing::{debug, info};

use crate::Toolbox;

/// What a merge changed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Colors written (new or replaced).
    pub colors: usize,
    /// Styles written (new or replaced).
    pub styles: usize,
    /// Categories appended whole.
    pub categories_added: usize,
    /// Templates appended to existing categories.
    pub templates_added: usize,
    /// Templates skipped because their style key was already present.
    pub duplicates_skipped: usize,
}

/// Merge `extension` into `base`.
///
/// Colors and styles overwrite entries with the same key. A category with
/// no case-insensitive match in `base` is appended as is; otherwise its
/// templates are appended to the end of the matching category in order,
/// skipping any whose style key the category already has.
#[tracing::instrument(level = "debug", skip_all)]
pub fn merge_toolbox(base: &mut Toolbox, extension: &Toolbox) -> MergeReport {
    let mut report = MergeReport::default();

    for (key, color) in &extension.colors {
        debug!(color = key.as_str(), "adding color");
        base.colors.insert(key.clone(), *color);
        report.colors += 1;
    }

    for (key, style) in &extension.styles {
        debug!(style = key.as_str(), "adding style");
        base.styles.insert(key.clone(), style.clone());
        report.styles += 1;
    }

    for category in &extension.categories {
        let Some(existing) = base.category_mut(&category.name) else {
            debug!(category = category.name.as_str(), "adding category");
            base.categories.push(category.clone());
            report.categories_added += 1;
            continue;
        };
        for node in &category.nodes {
            if existing.has_style(&node.style) {
                info!(
                    style = node.style.as_str(),
                    category = existing.name.as_str(),
                    "skipping toolbox node with duplicate style"
                );
                report.duplicates_skipped += 1;
            } else {
                existing.nodes.push(node.clone());
                report.templates_added += 1;
            }
        }
    }

    debug!(?report, "toolbox merged");
    report
}

#[cfg(test)]
mod tests;

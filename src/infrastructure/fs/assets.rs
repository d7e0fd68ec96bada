//! Static asset copying

use ignore::WalkBuilder;

use crate::domain::value_objects::AssetCopyRule;
use crate::error::{BundleError, BundleResult};

use super::staging::StagedBundle;

/// Copy every file under the rule's source into the staged bundle.
///
/// Hidden and git-ignored files are copied too; the static directory is
/// shipped as-is. Returns the number of files copied.
pub fn copy_assets(rule: &AssetCopyRule, staged: &mut StagedBundle) -> BundleResult<usize> {
    let source = rule.source_dir();
    if !source.is_dir() {
        return Err(BundleError::AssetDirNotFound {
            path: source.to_path_buf(),
        });
    }

    let dest = rule.relative_dest(staged.output_dir());
    let walker = WalkBuilder::new(source)
        .standard_filters(false)
        .follow_links(true)
        .build();

    let mut copied = 0;
    for entry in walker {
        let entry = entry.map_err(|e| std::io::Error::other(e.to_string()))?;
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }

        let path = entry.path();
        let relative = path.strip_prefix(source).unwrap_or(path);
        staged.copy_file(path, &dest.join(relative))?;
        copied += 1;
    }

    tracing::debug!(source = %source.display(), copied, "copied static assets");
    Ok(copied)
}

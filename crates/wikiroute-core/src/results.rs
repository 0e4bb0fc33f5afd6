//! Human-readable rendering of a query result

use std::fs;
use std::path::Path;

use crate::error::{Result, RouteError};
use crate::graph::{NodeId, PathResult};
use crate::titles::TitleMap;

/// Join path nodes with arrows, labelling nodes whose title is known
pub fn path_line(path: &[NodeId], titles: Option<&TitleMap>) -> String {
    path.iter()
        .map(|&node| match titles {
            Some(map) => map.label(node),
            None => node.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Render the outcome of a query, ending with a newline
pub fn render(
    source: NodeId,
    target: NodeId,
    result: &PathResult,
    titles: Option<&TitleMap>,
) -> String {
    if !result.found() {
        return format!("No path found from {} to {}.\n", source, target);
    }
    format!(
        "Path from {} to {}:\n{}\nLength: {}\n",
        source,
        target,
        path_line(&result.path, titles),
        result.path_length()
    )
}

/// Overwrite `path` with `text`, creating parent directories first
#[tracing::instrument(skip(text), fields(path = %path.display()))]
pub fn write_result(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| RouteError::io_operation("create directory", parent.display(), e))?;
    }
    fs::write(path, text)
        .map_err(|e| RouteError::io_operation("write result", path.display(), e))?;
    Ok(())
}

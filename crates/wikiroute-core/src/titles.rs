//! Node id ⇄ title dictionary
//!
//! Read from a TSV file with one `<id>\t<title>` pair per line. Surrounding
//! whitespace is stripped from each line; lines without a tab or with a
//! non-integer id are skipped.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::bail_usage;
use crate::error::{Result, RouteError};
use crate::graph::NodeId;

#[derive(Debug, Clone, Default)]
pub struct TitleMap {
    by_id: HashMap<NodeId, String>,
    by_title: HashMap<String, NodeId>,
}

impl TitleMap {
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .map_err(|e| RouteError::io_operation("open titles", path.display(), e))?;
        Self::load(BufReader::new(file))
    }

    #[tracing::instrument(skip(reader))]
    pub fn load<R: BufRead>(reader: R) -> Result<Self> {
        let mut map = Self::default();
        let mut skipped = 0usize;

        for line in reader.lines() {
            let line = line?;
            let line = line.trim();
            let Some((id, title)) = line.split_once('\t') else {
                skipped += usize::from(!line.is_empty());
                continue;
            };
            let Ok(id) = id.trim().parse::<NodeId>() else {
                skipped += 1;
                continue;
            };
            map.by_title.insert(title.to_string(), id);
            map.by_id.insert(id, title.to_string());
        }

        if skipped > 0 {
            tracing::debug!(skipped, "ignored title lines");
        }
        Ok(map)
    }

    pub fn title(&self, id: NodeId) -> Option<&str> {
        self.by_id.get(&id).map(String::as_str)
    }

    pub fn id_for(&self, title: &str) -> Option<NodeId> {
        self.by_title.get(title).copied()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Interpret `arg` as a node id, or else as an exact title
    pub fn resolve(&self, arg: &str) -> Result<NodeId> {
        let arg = arg.trim();
        if let Ok(id) = arg.parse::<NodeId>() {
            return Ok(id);
        }
        self.id_for(arg)
            .ok_or_else(|| RouteError::not_found("title", arg))
    }

    /// Render `id`, appending its title when known
    pub fn label(&self, id: NodeId) -> String {
        match self.title(id) {
            Some(title) => format!("{} ({})", id, title),
            None => id.to_string(),
        }
    }
}

/// Resolve a node argument, by title only when a title map is loaded
pub fn resolve_node(arg: &str, titles: Option<&TitleMap>) -> Result<NodeId> {
    if let Some(map) = titles {
        return map.resolve(arg);
    }
    match arg.trim().parse::<NodeId>() {
        Ok(id) => Ok(id),
        Err(_) => bail_usage!(format!(
            "invalid node id: {} (pass --titles to look up nodes by title)",
            arg
        )),
    }
}

use std::path::PathBuf;

use serde_json::Value;

use crate::prelude::*;

/// Where aggregate documents come from.
pub trait DocumentSource {
    /// Fetch the current snapshot of a document, `None` when it does not exist.
    fn fetch(&self, collection: &str, id: &str) -> Result<Option<Value>>;
}

/// Snapshots exported as `<root>/<collection>/<id>.json`.
pub struct JsonDirectory(PathBuf);

impl JsonDirectory {
    pub const fn new(root: PathBuf) -> Self {
        Self(root)
    }
}

impl DocumentSource for JsonDirectory {
    #[instrument(skip(self))]
    fn fetch(&self, collection: &str, id: &str) -> Result<Option<Value>> {
        let path = self.0.join(collection).join(format!("{id}.json"));
        if !path.is_file() {
            warn!(path = %path.display(), "document not found");
            return Ok(None);
        }
        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read `{}`", path.display()))?;
        let document = serde_json::from_str(&contents)
            .with_context(|| format!("malformed document `{}`", path.display()))?;
        debug!(path = %path.display(), "fetched");
        Ok(Some(document))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use serde_json::json;

    use super::*;

    fn temp_root(name: &str) -> PathBuf {
        let root = std::env::temp_dir().join(format!("energybill-{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&root);
        fs::create_dir_all(root.join("hourlyAggregates")).unwrap();
        root
    }

    #[test]
    fn test_fetch_existing() {
        let root = temp_root("existing");
        fs::write(root.join("hourlyAggregates").join("dev_2025-09-15.json"), r#"{"totalKwh": 1.5}"#)
            .unwrap();
        let document =
            JsonDirectory::new(root.clone()).fetch("hourlyAggregates", "dev_2025-09-15").unwrap();
        assert_eq!(document, Some(json!({ "totalKwh": 1.5 })));
        fs::remove_dir_all(root).unwrap();
    }

    #[test]
    fn test_fetch_missing() {
        let root = temp_root("missing");
        let document = JsonDirectory::new(root.clone()).fetch("hourlyAggregates", "nope").unwrap();
        assert_eq!(document, None);
        fs::remove_dir_all(root).unwrap();
    }

    #[test]
    fn test_fetch_malformed() {
        let root = temp_root("malformed");
        fs::write(root.join("hourlyAggregates").join("bad.json"), "{").unwrap();
        let error = JsonDirectory::new(root.clone()).fetch("hourlyAggregates", "bad").unwrap_err();
        assert!(format!("{error:#}").contains("malformed document"));
        fs::remove_dir_all(root).unwrap();
    }
}

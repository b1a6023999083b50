use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    File,
    Link,
}

/// An uploaded file or an external link, optionally assigned to a module.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    pub id: Uuid,
    pub name: String,
    pub kind: ResourceKind,
    /// Transient `local://` reference for files, the external URL for links.
    pub url: String,
    /// `None` means unassigned.
    pub module_id: Option<Uuid>,
    /// Order inside the resource's own partition (its `module_id`).
    pub position: usize,
}

impl Model {
    pub fn new_file(id: Uuid, name: impl Into<String>, url: impl Into<String>, position: usize) -> Self {
        Self {
            id,
            name: name.into(),
            kind: ResourceKind::File,
            url: url.into(),
            module_id: None,
            position,
        }
    }

    pub fn new_link(name: impl Into<String>, url: impl Into<String>, position: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind: ResourceKind::Link,
            url: url.into(),
            module_id: None,
            position,
        }
    }

    pub fn is_file(&self) -> bool {
        self.kind == ResourceKind::File
    }

    pub fn is_link(&self) -> bool {
        self.kind == ResourceKind::Link
    }

    /// Short type label shown under the name: the file extension in upper case, or `Link`.
    pub fn kind_label(&self) -> String {
        match self.kind {
            ResourceKind::Link => "Link".to_string(),
            ResourceKind::File => Path::new(&self.name)
                .extension()
                .and_then(|ext| ext.to_str())
                .filter(|ext| !ext.is_empty())
                .map(|ext| ext.to_uppercase())
                .unwrap_or_else(|| "File".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_label_uses_extension() {
        let pdf = Model::new_file(Uuid::new_v4(), "syllabus.pdf", "local://x", 0);
        assert_eq!(pdf.kind_label(), "PDF");

        let bare = Model::new_file(Uuid::new_v4(), "README", "local://y", 0);
        assert_eq!(bare.kind_label(), "File");

        let link = Model::new_link("Docs", "https://example.com", 0);
        assert_eq!(link.kind_label(), "Link");
    }
}

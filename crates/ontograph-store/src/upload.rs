//! Ontology document upload: local vault plus bulk load into the store.
//!
//! Uploaded documents are kept under a single configured directory keyed
//! by their original filename, then loaded into the repository over the
//! statements endpoint with a content type derived from the extension.

use std::fs;
use std::path::{Path, PathBuf};

use crate::client::{StoreClient, StoreError};

/// RDF serialization formats accepted for upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RdfFormat {
    /// `.owl`, `.rdf`, `.xml` and anything unrecognized.
    RdfXml,
    /// `.ttl`
    Turtle,
    /// `.nt`
    NTriples,
}

impl RdfFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("ttl") => Self::Turtle,
            Some("nt") => Self::NTriples,
            _ => Self::RdfXml,
        }
    }

    /// Content type the statements endpoint expects for this format.
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::RdfXml => "application/rdf+xml",
            Self::Turtle => "text/turtle",
            Self::NTriples => "text/plain",
        }
    }
}

/// File-system store for uploaded ontology documents.
///
/// A re-upload under the same name overwrites the previous document.
pub struct OntologyVault {
    root: PathBuf,
}

impl OntologyVault {
    /// Create a vault rooted at the given directory, creating it if
    /// it doesn't exist.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Write a document under its original filename. Only the final path
    /// component of the supplied name is used, so a name cannot escape
    /// the vault directory.
    pub fn save(&self, name: &str, content: &[u8]) -> Result<PathBuf, StoreError> {
        let filename = Path::new(name)
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| StoreError::InvalidFilename(name.to_owned()))?;

        let path = self.root.join(filename);
        fs::write(&path, content)?;

        tracing::debug!(
            path = %path.display(),
            bytes = content.len(),
            "Ontology document saved"
        );
        Ok(path)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl StoreClient {
    /// Persist an uploaded document and bulk-load it into the repository.
    ///
    /// Empty content reports `false` without touching the vault or the
    /// store. The load follows the update contract: `Ok(false)` means the
    /// store rejected the document, while store faults and transport
    /// failures surface as errors instead of silent success.
    pub async fn upload_and_register(
        &self,
        vault: &OntologyVault,
        name: &str,
        content: &[u8],
    ) -> Result<bool, StoreError> {
        if content.is_empty() {
            return Ok(false);
        }

        let path = vault.save(name, content)?;
        let format = RdfFormat::from_path(&path);
        tracing::info!(
            path = %path.display(),
            content_type = format.content_type(),
            "Loading ontology document into repository"
        );

        self.post_statements(content.to_vec(), format.content_type())
            .await
    }
}

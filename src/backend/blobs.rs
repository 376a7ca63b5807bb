use base64::{engine::general_purpose, Engine as _};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use tracing::debug;

const REFERENCE_PREFIX: &str = "blob:";

#[derive(Debug, Clone, PartialEq)]
struct StoredBlob {
    mime_type: String,
    data: String, // Base64 encoded data
    size: usize,
}

/// Process-local home of uploaded files. References handed out here are only
/// meaningful to this store and vanish with the process.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlobStore {
    blobs: HashMap<String, StoredBlob>,
}

impl BlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `bytes` and returns its `blob:<sha256>` reference. Identical content shares a reference.
    pub fn put(&mut self, mime_type: &str, bytes: &[u8]) -> String {
        let cid = hex::encode(Sha256::digest(bytes));
        let reference = format!("{}{}", REFERENCE_PREFIX, cid);

        self.blobs.entry(cid).or_insert_with(|| {
            debug!(reference = %reference, size = bytes.len(), "Stored local blob");
            StoredBlob {
                mime_type: mime_type.to_string(),
                data: general_purpose::STANDARD.encode(bytes),
                size: bytes.len(),
            }
        });

        reference
    }

    /// Data URL for a reference issued by [`BlobStore::put`].
    pub fn resolve(&self, reference: &str) -> Option<String> {
        let cid = reference.strip_prefix(REFERENCE_PREFIX)?;
        self.blobs
            .get(cid)
            .map(|blob| format!("data:{};base64,{}", blob.mime_type, blob.data))
    }

    pub fn contains(&self, reference: &str) -> bool {
        reference
            .strip_prefix(REFERENCE_PREFIX)
            .is_some_and(|cid| self.blobs.contains_key(cid))
    }

    /// (blob_count, total_bytes)
    pub fn stats(&self) -> (usize, usize) {
        (self.blobs.len(), self.blobs.values().map(|b| b.size).sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_resolve() {
        let mut store = BlobStore::new();
        let reference = store.put("application/pdf", b"%PDF-1.4 hello");

        assert!(reference.starts_with("blob:"));
        assert_eq!(reference.len(), "blob:".len() + 64);
        assert!(store.contains(&reference));

        let url = store.resolve(&reference).expect("blob should resolve");
        assert_eq!(
            url,
            format!(
                "data:application/pdf;base64,{}",
                general_purpose::STANDARD.encode(b"%PDF-1.4 hello")
            )
        );
    }

    #[test]
    fn test_identical_bytes_share_reference() {
        let mut store = BlobStore::new();
        let a = store.put("application/pdf", b"same");
        let b = store.put("application/pdf", b"same");
        let c = store.put("application/pdf", b"different");

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(store.stats(), (2, 4 + 9));
    }

    #[test]
    fn test_foreign_references_do_not_resolve() {
        let store = BlobStore::new();
        assert_eq!(store.resolve("#solution1"), None);
        assert_eq!(store.resolve("blob:0000"), None);
        assert!(!store.contains("#"));
    }
}

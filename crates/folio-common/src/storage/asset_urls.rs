//! Bucket-backed asset URL derivation
//!
//! Uploads happen out of band; profiles store only the bucket key. URLs are
//! derived from keys on every read because signed URLs expire.

use folio_core::AssetUrlIssuer;

/// Derives public URLs of the form `https://{bucket}.{domain}/{key}` and
/// recognizes keys inside URLs it (or the upload pipeline) produced.
#[derive(Debug, Clone)]
pub struct BucketAssetUrls {
    bucket: String,
    domain: String,
}

impl BucketAssetUrls {
    #[must_use]
    pub fn new(bucket: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            domain: domain.into(),
        }
    }

    fn host_marker(&self) -> String {
        format!("{}.{}/", self.bucket, self.domain)
    }
}

impl AssetUrlIssuer for BucketAssetUrls {
    fn download_url(&self, key: &str) -> String {
        format!("https://{}.{}/{}", self.bucket, self.domain, key)
    }

    fn extract_key(&self, url: &str) -> Option<String> {
        let marker = self.host_marker();
        let (_, rest) = url.split_once(&marker)?;
        // Signed URLs carry query parameters after the key
        let key = rest.split('?').next().unwrap_or(rest);
        if key.is_empty() {
            return None;
        }
        Some(key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls() -> BucketAssetUrls {
        BucketAssetUrls::new("folio-assets", "s3.amazonaws.com")
    }

    #[test]
    fn test_download_url() {
        assert_eq!(
            urls().download_url("avatars/sub-1.png"),
            "https://folio-assets.s3.amazonaws.com/avatars/sub-1.png"
        );
    }

    #[test]
    fn test_extract_key_from_own_url() {
        let key = urls().extract_key("https://folio-assets.s3.amazonaws.com/avatars/sub-1.png");
        assert_eq!(key.as_deref(), Some("avatars/sub-1.png"));
    }

    #[test]
    fn test_extract_key_strips_query_params() {
        let key = urls().extract_key(
            "https://folio-assets.s3.amazonaws.com/resumes/sub-1.pdf?X-Signature=abc&Expires=123",
        );
        assert_eq!(key.as_deref(), Some("resumes/sub-1.pdf"));
    }

    #[test]
    fn test_extract_key_rejects_foreign_url() {
        assert_eq!(urls().extract_key("https://example.com/avatars/sub-1.png"), None);
        assert_eq!(urls().extract_key("https://folio-assets.s3.amazonaws.com/"), None);
    }
}

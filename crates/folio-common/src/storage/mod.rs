//! Asset URL derivation

mod asset_urls;

pub use asset_urls::BucketAssetUrls;

//! Domain ports

mod repositories;

pub use repositories::{
    AccountRepository, AssetUrlIssuer, DirectoryIdentity, IdentityDirectory, LinkRepository,
    ProfileRepository, RepoResult,
};

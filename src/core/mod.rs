pub mod repository;
pub mod index;
pub mod commit;
pub mod branch;
pub mod remote;
pub mod stash;
pub mod config;
pub mod error;

pub use repository::Repository;
pub use index::Index;
pub use commit::{Commit, Author};
pub use branch::{Branch, Branches, DEFAULT_BRANCH};
pub use remote::{Remote, Remotes};
pub use stash::{Stash, StashEntry};
pub use config::Config;
pub use error::{GitError, ErrorKind};

//! labelsync Core Library
//! 
//! This library contains the core functionality for labelsync, a tool that
//! pushes a declarative set of GitHub labels into a repository. It provides
//! the definitions loader, the category/label resolution model, and the
//! GitHub client used by the `labelsync` binary.

pub mod category;
pub mod constants;
pub mod context;
pub mod definitions;
pub mod error;
pub mod github;
pub mod overrides;
pub mod resolver;

// Re-export commonly used items
pub use category::CategoryTable;
pub use context::Context;
pub use definitions::Definitions;
pub use error::{LabelSyncError, Result};
pub use github::{GitHubClient, Importer, LabelApi, SyncSummary};
pub use overrides::Override;
pub use resolver::{LabelResolver, ResolvedLabel};

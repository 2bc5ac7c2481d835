pub mod commands;
pub mod core;
pub mod session;
pub mod settings;
pub mod telemetry;
pub mod utils;

pub use commands::{execute, run_line, Command, CommandKind, Interpreter};
pub use core::repository::Repository;
pub use core::commit::{Commit, Author};
pub use core::branch::{Branch, Branches};
pub use core::config::Config;
pub use core::error::{GitError, ErrorKind};
pub use session::{Session, Rendered};
pub use settings::Settings;
pub use utils::hash::HashStrategy;

use thiserror::Error;

/// Every way a simulated git command can fail.
///
/// Failures never escape the dispatch boundary as panics; they are rendered
/// as `Error: <message>` and the repository is left exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GitError {
    // protocol
    #[error("This is a Git practice environment. Please use {0} commands.")]
    UnsupportedInvocation(String),
    #[error("No git command given")]
    MissingCommand,
    #[error("Unknown git command \"{0}\"")]
    UnknownCommand(String),

    // precondition
    #[error("Not a git repository (use \"git init\" first)")]
    NotInitialized,

    // argument
    #[error("Only --global configuration is supported")]
    OnlyGlobalConfig,
    #[error("Invalid configuration setting '{0}' (expected <category>.<key>)")]
    InvalidSetting(String),
    #[error("Please provide a value for {0}")]
    MissingConfigValue(String),
    #[error("Please specify a file to add")]
    MissingPath,
    #[error("Please provide a commit message (-m \"your message\")")]
    MissingMessage,
    #[error("Please specify a branch name")]
    MissingBranchName,
    #[error("Please provide a name and URL for the remote")]
    MissingRemoteArgs,
    #[error("Please specify a remote to remove")]
    MissingRemoteName,
    #[error("Please specify a remote and branch to {0}")]
    MissingRemoteAndBranch(&'static str),
    #[error("Unknown remote command")]
    UnknownRemoteCommand,

    // referential
    #[error("Invalid configuration category '{0}'")]
    InvalidCategory(String),
    #[error("branch '{0}' does not exist")]
    BranchDoesNotExist(String),
    #[error("Branch {0} not found")]
    BranchNotFound(String),
    #[error("Remote {0} not found")]
    RemoteNotFound(String),

    // state
    #[error("Nothing to commit")]
    NothingToCommit,
    #[error("Cannot delete the current branch")]
    CannotDeleteCurrentBranch,
    #[error("No local changes to save")]
    NothingToStash,
}

impl GitError {
    /// Coarse class of the failure, used for logging.
    pub fn kind(&self) -> ErrorKind {
        match self {
            GitError::UnsupportedInvocation(_)
            | GitError::MissingCommand
            | GitError::UnknownCommand(_) => ErrorKind::Protocol,
            GitError::NotInitialized => ErrorKind::Precondition,
            GitError::OnlyGlobalConfig
            | GitError::InvalidSetting(_)
            | GitError::MissingConfigValue(_)
            | GitError::MissingPath
            | GitError::MissingMessage
            | GitError::MissingBranchName
            | GitError::MissingRemoteArgs
            | GitError::MissingRemoteName
            | GitError::MissingRemoteAndBranch(_)
            | GitError::UnknownRemoteCommand => ErrorKind::Argument,
            GitError::InvalidCategory(_)
            | GitError::BranchDoesNotExist(_)
            | GitError::BranchNotFound(_)
            | GitError::RemoteNotFound(_) => ErrorKind::Referential,
            GitError::NothingToCommit
            | GitError::CannotDeleteCurrentBranch
            | GitError::NothingToStash => ErrorKind::State,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Protocol,
    Precondition,
    Argument,
    Referential,
    State,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ErrorKind::Protocol => "protocol",
            ErrorKind::Precondition => "precondition",
            ErrorKind::Argument => "argument",
            ErrorKind::Referential => "referential",
            ErrorKind::State => "state",
        };
        write!(f, "{}", name)
    }
}

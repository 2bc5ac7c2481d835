//! Command interpreter.
//!
//! A raw line goes through four gates, in this order:
//!
//! 1. the first token must be the program name,
//! 2. the second token must name a known subcommand,
//! 3. the repository must be initialized (except for `init` and `config`),
//! 4. the remaining tokens must parse into that subcommand's arguments.
//!
//! Only then is the handler run. Handlers validate before they mutate, so a
//! failed command leaves the repository untouched.

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod config;
pub mod diff;
pub mod init;
pub mod log;
pub mod merge;
pub mod pull;
pub mod push;
pub mod remote;
pub mod stash;
pub mod status;

use crate::core::{GitError, Repository};
use tracing::{debug, warn};

pub use add::AddArgs;
pub use branch::BranchArgs;
pub use checkout::CheckoutArgs;
pub use commit::CommitArgs;
pub use config::ConfigArgs;
pub use merge::MergeArgs;
pub use push::TransferArgs;
pub use remote::RemoteArgs;

pub const PROGRAM: &str = "git";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Config,
    Init,
    Add,
    Commit,
    Status,
    Branch,
    Checkout,
    Merge,
    Remote,
    Push,
    Pull,
    Log,
    Diff,
    Stash,
}

impl CommandKind {
    pub const ALL: [CommandKind; 14] = [
        CommandKind::Config,
        CommandKind::Init,
        CommandKind::Add,
        CommandKind::Commit,
        CommandKind::Status,
        CommandKind::Branch,
        CommandKind::Checkout,
        CommandKind::Merge,
        CommandKind::Remote,
        CommandKind::Push,
        CommandKind::Pull,
        CommandKind::Log,
        CommandKind::Diff,
        CommandKind::Stash,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    pub fn name(&self) -> &'static str {
        match self {
            CommandKind::Config => "config",
            CommandKind::Init => "init",
            CommandKind::Add => "add",
            CommandKind::Commit => "commit",
            CommandKind::Status => "status",
            CommandKind::Branch => "branch",
            CommandKind::Checkout => "checkout",
            CommandKind::Merge => "merge",
            CommandKind::Remote => "remote",
            CommandKind::Push => "push",
            CommandKind::Pull => "pull",
            CommandKind::Log => "log",
            CommandKind::Diff => "diff",
            CommandKind::Stash => "stash",
        }
    }

    pub fn requires_repository(&self) -> bool {
        !matches!(self, CommandKind::Init | CommandKind::Config)
    }
}

impl std::fmt::Display for CommandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A line that passed the protocol gates but whose arguments are still raw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub kind: CommandKind,
    pub args: Vec<String>,
}

/// A fully parsed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Config(ConfigArgs),
    Init,
    Add(AddArgs),
    Commit(CommitArgs),
    Status,
    Branch(BranchArgs),
    Checkout(CheckoutArgs),
    Merge(MergeArgs),
    Remote(RemoteArgs),
    Push(TransferArgs),
    Pull(TransferArgs),
    Log,
    Diff,
    Stash,
}

impl Command {
    pub fn parse(invocation: &Invocation) -> Result<Self, GitError> {
        let args = invocation.args.as_slice();
        let command = match invocation.kind {
            CommandKind::Config => Command::Config(ConfigArgs::parse(args)?),
            CommandKind::Init => Command::Init,
            CommandKind::Add => Command::Add(AddArgs::parse(args)?),
            CommandKind::Commit => Command::Commit(CommitArgs::parse(args)),
            CommandKind::Status => Command::Status,
            CommandKind::Branch => Command::Branch(BranchArgs::parse(args)?),
            CommandKind::Checkout => Command::Checkout(CheckoutArgs::parse(args)?),
            CommandKind::Merge => Command::Merge(MergeArgs::parse(args)?),
            CommandKind::Remote => Command::Remote(RemoteArgs::parse(args)?),
            CommandKind::Push => Command::Push(TransferArgs::parse(args, "push to")?),
            CommandKind::Pull => Command::Pull(TransferArgs::parse(args, "pull from")?),
            CommandKind::Log => Command::Log,
            CommandKind::Diff => Command::Diff,
            CommandKind::Stash => Command::Stash,
        };
        Ok(command)
    }

    pub fn kind(&self) -> CommandKind {
        match self {
            Command::Config(_) => CommandKind::Config,
            Command::Init => CommandKind::Init,
            Command::Add(_) => CommandKind::Add,
            Command::Commit(_) => CommandKind::Commit,
            Command::Status => CommandKind::Status,
            Command::Branch(_) => CommandKind::Branch,
            Command::Checkout(_) => CommandKind::Checkout,
            Command::Merge(_) => CommandKind::Merge,
            Command::Remote(_) => CommandKind::Remote,
            Command::Push(_) => CommandKind::Push,
            Command::Pull(_) => CommandKind::Pull,
            Command::Log => CommandKind::Log,
            Command::Diff => CommandKind::Diff,
            Command::Stash => CommandKind::Stash,
        }
    }
}

/// Runs a parsed command against `repo`. The caller has already checked
/// the initialization precondition.
pub fn dispatch(repo: &mut Repository, command: Command) -> Result<String, GitError> {
    match command {
        Command::Config(args) => config::run(repo, args),
        Command::Init => init::run(repo),
        Command::Add(args) => add::run(repo, args),
        Command::Commit(args) => commit::run(repo, args),
        Command::Status => status::run(repo),
        Command::Branch(args) => branch::run(repo, args),
        Command::Checkout(args) => checkout::run(repo, args),
        Command::Merge(args) => merge::run(repo, args),
        Command::Remote(args) => remote::run(repo, args),
        Command::Push(args) => push::run(repo, args),
        Command::Pull(args) => pull::run(repo, args),
        Command::Log => log::run(repo),
        Command::Diff => diff::run(repo),
        Command::Stash => stash::run(repo),
    }
}

/// Splits a raw line and checks the program name and subcommand.
pub fn tokenize(line: &str, program: &str) -> Result<Invocation, GitError> {
    let mut tokens = line.split_whitespace();

    if tokens.next() != Some(program) {
        return Err(GitError::UnsupportedInvocation(program.to_string()));
    }

    let name = tokens.next().ok_or(GitError::MissingCommand)?;
    let kind =
        CommandKind::from_name(name).ok_or_else(|| GitError::UnknownCommand(name.to_string()))?;

    Ok(Invocation {
        kind,
        args: tokens.map(str::to_string).collect(),
    })
}

/// Line interpreter bound to a program name.
#[derive(Debug, Clone)]
pub struct Interpreter {
    program: String,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new(PROGRAM)
    }
}

impl Interpreter {
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn execute(&self, repo: &mut Repository, line: &str) -> Result<String, GitError> {
        let result = self.try_execute(repo, line);
        if let Err(e) = &result {
            warn!(kind = %e.kind(), error = %e, "command failed");
        }
        result
    }

    fn try_execute(&self, repo: &mut Repository, line: &str) -> Result<String, GitError> {
        let invocation = tokenize(line, &self.program)?;
        debug!(command = %invocation.kind, args = invocation.args.len(), "dispatching");

        if invocation.kind.requires_repository() {
            repo.require_initialized()?;
        }

        let command = Command::parse(&invocation)?;
        dispatch(repo, command)
    }

    /// Like [`Interpreter::execute`], with failures rendered as text.
    pub fn run_line(&self, repo: &mut Repository, line: &str) -> String {
        self.execute(repo, line)
            .unwrap_or_else(|e| format!("Error: {}", e))
    }
}

pub fn execute(repo: &mut Repository, line: &str) -> Result<String, GitError> {
    Interpreter::default().execute(repo, line)
}

pub fn run_line(repo: &mut Repository, line: &str) -> String {
    Interpreter::default().run_line(repo, line)
}

/// Initialized repository with deterministic commit hashes.
#[cfg(test)]
pub(crate) fn initialized_repo() -> Repository {
    let mut repo =
        Repository::with_hash_strategy(crate::utils::hash::HashStrategy::Sequential);
    repo.init();
    repo
}

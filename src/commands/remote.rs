use crate::core::{GitError, Repository};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteArgs {
    Add { name: String, url: String },
    Remove(String),
    List,
}

impl RemoteArgs {
    pub fn parse(args: &[String]) -> Result<Self, GitError> {
        match args.first().map(String::as_str) {
            Some("add") => match (args.get(1), args.get(2)) {
                (Some(name), Some(url)) => Ok(RemoteArgs::Add {
                    name: name.clone(),
                    url: url.clone(),
                }),
                _ => Err(GitError::MissingRemoteArgs),
            },
            Some("remove") => args
                .get(1)
                .map(|name| RemoteArgs::Remove(name.clone()))
                .ok_or(GitError::MissingRemoteName),
            Some("-v") | Some("--verbose") => Ok(RemoteArgs::List),
            _ => Err(GitError::UnknownRemoteCommand),
        }
    }
}

pub fn run(repo: &mut Repository, args: RemoteArgs) -> Result<String, GitError> {
    match args {
        RemoteArgs::Add { name, url } => {
            repo.remotes.add(&name, &url);
            info!(remote = %name, url = %url, "added remote");
            Ok(format!("Added remote {} with URL {}", name, url))
        }
        RemoteArgs::Remove(name) => {
            if repo.remotes.remove(&name).is_none() {
                return Err(GitError::RemoteNotFound(name));
            }
            info!(remote = %name, "removed remote");
            Ok(format!("Removed remote {}", name))
        }
        RemoteArgs::List => Ok(list_remotes(repo)),
    }
}

fn list_remotes(repo: &Repository) -> String {
    if repo.remotes.is_empty() {
        return "No remotes configured".to_string();
    }

    repo.remotes
        .iter()
        .map(|remote| format!("{}\t{}", remote.name, remote.url))
        .collect::<Vec<_>>()
        .join("\n")
}

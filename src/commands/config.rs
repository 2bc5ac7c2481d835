use crate::core::{GitError, Repository};
use crate::utils::quote::join_unquoted;
use tracing::info;

/// `config --global <category>.<key> <value...>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigArgs {
    pub category: String,
    pub key: String,
    pub value: String,
}

impl ConfigArgs {
    pub fn parse(args: &[String]) -> Result<Self, GitError> {
        if args.first().map(String::as_str) != Some("--global") {
            return Err(GitError::OnlyGlobalConfig);
        }

        let setting = args.get(1).cloned().unwrap_or_default();
        let (category, key) = match setting.split_once('.') {
            Some((category, key)) if !category.is_empty() && !key.is_empty() => {
                (category.to_string(), key.to_string())
            }
            _ => return Err(GitError::InvalidSetting(setting)),
        };

        if args.len() < 3 {
            return Err(GitError::MissingConfigValue(setting));
        }

        Ok(Self {
            category,
            key,
            value: join_unquoted(&args[2..]),
        })
    }
}

pub fn run(repo: &mut Repository, args: ConfigArgs) -> Result<String, GitError> {
    if !repo.config.set(&args.category, &args.key, &args.value) {
        return Err(GitError::InvalidCategory(args.category));
    }

    info!(category = %args.category, key = %args.key, "configuration updated");
    Ok(format!("Set {}.{} to {}", args.category, args.key, args.value))
}

use crate::core::Author;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Two-level `<category>.<key>` configuration record.
///
/// The set of categories is fixed at construction; only keys inside an
/// existing category can be written.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    settings: BTreeMap<String, BTreeMap<String, String>>,
}

impl Default for Config {
    fn default() -> Self {
        let mut user = BTreeMap::new();
        user.insert("name".to_string(), String::new());
        user.insert("email".to_string(), String::new());

        let mut settings = BTreeMap::new();
        settings.insert("user".to_string(), user);
        Self { settings }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.settings.contains_key(category)
    }

    /// Writes `category.key`. Returns `false` without touching anything when
    /// the category does not exist.
    pub fn set(&mut self, category: &str, key: &str, value: &str) -> bool {
        match self.settings.get_mut(category) {
            Some(keys) => {
                keys.insert(key.to_string(), value.to_string());
                true
            }
            None => false,
        }
    }

    pub fn get(&self, category: &str, key: &str) -> Option<&str> {
        self.settings
            .get(category)
            .and_then(|keys| keys.get(key))
            .map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (String, &String)> {
        self.settings.iter().flat_map(|(category, keys)| {
            keys.iter()
                .map(move |(key, value)| (format!("{}.{}", category, key), value))
        })
    }

    pub fn get_user_name(&self) -> String {
        self.get("user", "name").unwrap_or_default().to_string()
    }

    pub fn get_user_email(&self) -> String {
        self.get("user", "email").unwrap_or_default().to_string()
    }

    pub fn author(&self) -> Author {
        Author::new(self.get_user_name(), self.get_user_email())
    }
}

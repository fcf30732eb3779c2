//! Repository metadata from `svn info`

/// Working-copy and repository identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoInfo {
    pub path: String,
    pub working_copy_root: Option<String>,
    pub url: String,
    /// `^/trunk` style URL, absent before svn 1.8
    pub relative_url: Option<String>,
    pub repository_root: String,
    pub repository_uuid: String,
    pub revision: i64,
    pub node_kind: String,
    pub last_changed_author: Option<String>,
    pub last_changed_revision: i64,
}

impl Default for RepoInfo {
    fn default() -> Self {
        Self {
            path: String::new(),
            working_copy_root: None,
            url: String::new(),
            relative_url: None,
            repository_root: String::new(),
            repository_uuid: String::new(),
            revision: -1,
            node_kind: String::new(),
            last_changed_author: None,
            last_changed_revision: -1,
        }
    }
}

impl RepoInfo {
    /// Location of the working copy inside the repository, e.g. `trunk`
    pub fn module_name(&self) -> Option<String> {
        if let Some(relative) = &self.relative_url {
            let name = relative.trim_start_matches('^').trim_matches('/');
            return (!name.is_empty()).then(|| name.to_string());
        }
        let rest = self.url.strip_prefix(&self.repository_root)?;
        let name = rest.trim_matches('/');
        (!name.is_empty()).then(|| name.to_string())
    }
}

use serde::{Deserialize, Serialize};

/// Number of recommendations returned when no `top_k` is configured.
pub const DEFAULT_TOP_K: usize = 5;

/// Which similarity the scores are propagated through.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CfMethod {
    /// Items popular among similar users (`Su[u, :] · R`).
    #[default]
    UserUser,
    /// Items similar to the user's own history (`(R · Si)[u, :]`).
    ItemItem,
}

impl std::fmt::Display for CfMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CfMethod::UserUser => write!(f, "User-User CF"),
            CfMethod::ItemItem => write!(f, "Item-Item CF"),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RecommenderConfig {
    pub top_k: usize,
    pub method: CfMethod,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self { top_k: DEFAULT_TOP_K, method: CfMethod::default() }
    }
}

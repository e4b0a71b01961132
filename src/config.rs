use std::env;

pub const DEFAULT_BASE_URL: &str = "https://fsa-puppy-bowl.herokuapp.com/api";
pub const DEFAULT_COHORT: &str = "2302-acc-pt-web-pt-e";

/// Where the remote Puppy Bowl API lives. Built once at startup and handed to
/// the client, instead of reading globals at call sites.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub cohort: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>, cohort: impl Into<String>) -> Self {
        Self {
            base_url: trim_trailing_slash(base_url.into()),
            cohort: cohort.into(),
        }
    }

    pub fn from_env() -> Self {
        let base_url =
            env::var("PUPPY_BOWL_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let cohort = env::var("PUPPY_BOWL_COHORT").unwrap_or_else(|_| DEFAULT_COHORT.to_string());
        Self::new(base_url, cohort)
    }

    pub fn players_url(&self) -> String {
        format!("{}/{}/players", self.base_url, self.cohort)
    }

    pub fn player_url(&self, id: i64) -> String {
        format!("{}/{}/players/{}", self.base_url, self.cohort, id)
    }
}

fn trim_trailing_slash(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}

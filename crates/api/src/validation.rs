//! Shared URL-shape regexes for request validation.

use std::sync::LazyLock;

use regex::Regex;

/// A GitHub profile URL: `https://github.com/{user}`.
pub static GITHUB_PROFILE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://(www\.)?github\.com/[a-zA-Z0-9-]+$").expect("valid regex")
});

/// A GitHub repository URL: `https://github.com/{user}/{repo}`.
pub static GITHUB_REPO_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://(www\.)?github\.com/[a-zA-Z0-9-]+/[a-zA-Z0-9-]+$").expect("valid regex")
});

/// A LinkedIn profile URL: `https://linkedin.com/in/{user}`.
pub static LINKEDIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://(www\.)?linkedin\.com/in/[a-zA-Z0-9-]+$").expect("valid regex")
});

/// Any http(s) URL.
pub static HTTP_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://.+").expect("valid regex"));

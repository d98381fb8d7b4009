use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Hosting platform a bundle's scaffold files are tailored for.
///
/// A pure selector: target choice decides which scaffold files accompany
/// the bundle and nothing else; HTML/CSS/JS generation never sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeploymentTarget {
    Vercel,
    Netlify,
    GithubPages,
    Docker,
    Vps,
    Heroku,
}

impl DeploymentTarget {
    /// Wire/CLI name of this target.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeploymentTarget::Vercel => "vercel",
            DeploymentTarget::Netlify => "netlify",
            DeploymentTarget::GithubPages => "github-pages",
            DeploymentTarget::Docker => "docker",
            DeploymentTarget::Vps => "vps",
            DeploymentTarget::Heroku => "heroku",
        }
    }

    /// All targets, in documentation order.
    pub fn all() -> [DeploymentTarget; 6] {
        [
            DeploymentTarget::Vercel,
            DeploymentTarget::Netlify,
            DeploymentTarget::GithubPages,
            DeploymentTarget::Docker,
            DeploymentTarget::Vps,
            DeploymentTarget::Heroku,
        ]
    }
}

impl fmt::Display for DeploymentTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeploymentTarget {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        DeploymentTarget::all()
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!(
                    "unknown deployment target '{s}' (expected one of: vercel, netlify, github-pages, docker, vps, heroku)"
                )
            })
    }
}

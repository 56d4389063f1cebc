//! Platform detection.

/// Check if running in a CI environment.
///
/// Used by `main()` to force plain, uncolored output when no human is
/// watching. Checks common CI environment variables: `CI`,
/// `GITHUB_ACTIONS`, `GITLAB_CI`, `CIRCLECI`, `TRAVIS`, `JENKINS_URL`.
pub fn is_ci() -> bool {
    is_ci_with(|var| std::env::var_os(var).is_some())
}

fn is_ci_with(is_set: impl Fn(&str) -> bool) -> bool {
    CI_VARS.into_iter().any(is_set)
}

const CI_VARS: [&str; 6] = [
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "CIRCLECI",
    "TRAVIS",
    "JENKINS_URL",
];

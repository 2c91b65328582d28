use std::fmt;
use std::path::Path;

use stevedore_cloud::AwsClient;
use stevedore_core::StevedoreConfig;
use stevedore_docker::DockerClient;

/// Run all diagnostic checks without early return, then report.
pub async fn doctor() -> anyhow::Result<()> {
    let project_dir = Path::new(".");
    let mut report = DoctorReport::default();

    // 1. git CLI + working tree
    match stevedore_git::git_version() {
        Ok(v) => report.git = CheckResult::ok(&v),
        Err(e) => report.git = CheckResult::fail(&e.to_string()),
    }
    if stevedore_git::is_inside_work_tree(project_dir) {
        report.work_tree = CheckResult::ok("Inside a git working tree");
    } else {
        report.work_tree = CheckResult::fail("Not a git working tree — run: git init");
    }

    // 2. docker CLI
    let docker = DockerClient::new();
    match docker.version().await {
        Ok(v) => report.docker = CheckResult::ok(&v),
        Err(e) => report.docker = CheckResult::fail(&e.to_string()),
    }

    // 3. aws CLI + ambient credentials
    let aws = AwsClient::new();
    match aws.version().await {
        Ok(v) => report.aws = CheckResult::ok(&v),
        Err(e) => report.aws = CheckResult::fail(&e.to_string()),
    }
    if report.aws.passed {
        match aws.account_id().await {
            Ok(account) => report.credentials = CheckResult::ok(&format!("Account {account}")),
            Err(_) => {
                report.credentials =
                    CheckResult::fail("No usable AWS credentials — run: aws configure")
            }
        }
    } else {
        report.credentials = CheckResult::fail("Skipped (aws CLI unavailable)");
    }

    // 4. Configuration
    if project_dir.join("stevedore.toml").exists() {
        report.config_file = CheckResult::ok("Found");
    } else {
        report.config_file = CheckResult::fail("Not found — run: stevedore init");
    }
    match StevedoreConfig::load(project_dir) {
        Ok(config) => match config.registry.host {
            Some(host) => report.registry_host = CheckResult::ok(&host),
            None => {
                report.registry_host = CheckResult::fail("Not set — set [registry].host")
            }
        },
        Err(e) => report.registry_host = CheckResult::fail(&e.to_string()),
    }

    println!();
    println!("{report}");

    if !report.all_passed() {
        anyhow::bail!("some checks failed — see above for details");
    }

    Ok(())
}

// ── Report types ──

#[derive(Debug, Default)]
pub struct DoctorReport {
    pub git: CheckResult,
    pub work_tree: CheckResult,
    pub docker: CheckResult,
    pub aws: CheckResult,
    pub credentials: CheckResult,
    pub config_file: CheckResult,
    pub registry_host: CheckResult,
}

impl DoctorReport {
    pub fn all_passed(&self) -> bool {
        self.git.passed
            && self.work_tree.passed
            && self.docker.passed
            && self.aws.passed
            && self.credentials.passed
            && self.config_file.passed
            && self.registry_host.passed
    }
}

impl fmt::Display for DoctorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = [
            ("git", &self.git),
            ("working tree", &self.work_tree),
            ("docker", &self.docker),
            ("aws CLI", &self.aws),
            ("AWS credentials", &self.credentials),
            ("stevedore.toml", &self.config_file),
            ("registry host", &self.registry_host),
        ];
        for (label, check) in rows {
            writeln!(f, "[{}] {label:<16} {}", check.icon(), check.detail)?;
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct CheckResult {
    pub passed: bool,
    pub detail: String,
}

impl CheckResult {
    pub fn ok(detail: &str) -> Self {
        Self {
            passed: true,
            detail: detail.to_owned(),
        }
    }

    pub fn fail(detail: &str) -> Self {
        Self {
            passed: false,
            detail: detail.to_owned(),
        }
    }

    pub fn icon(&self) -> &'static str {
        if self.passed { "OK" } else { "NG" }
    }
}

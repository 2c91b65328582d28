use std::path::{Path, PathBuf};

use stevedore_cloud::AwsClient;
use stevedore_core::{ImageRef, StevedoreConfig};
use stevedore_docker::DockerClient;
use stevedore_git::Revision;

/// Execute the full push pipeline: revision → build → login → push.
///
/// Every step gates the next; the first failing external command aborts
/// the run. Already-applied local tags and already-pushed images are left
/// in place, and rerunning the command is the recovery mechanism.
pub async fn push(no_latest: bool) -> anyhow::Result<()> {
    let project_dir = PathBuf::from(".");
    let docker = DockerClient::new();
    let aws = AwsClient::new();

    // Version-control state, captured once up front
    let revision = Revision::resolve(&project_dir)?;

    let config = StevedoreConfig::load(&project_dir)?;
    let name = config.image.resolve_name(&project_dir)?;
    let host = super::require_registry_host(&config)?;
    let region = &config.registry.region;

    let release = ImageRef::local(&name, &revision.release_tag());
    let latest = ImageRef::local(&name, "latest");

    if revision.dirty {
        println!("Working tree has uncommitted changes; tagging as {release}");
    }

    // Build with the release tag, then alias latest locally
    println!("Building {release}...");
    docker
        .build(
            Path::new(&config.image.context),
            config.image.dockerfile.as_deref(),
            &config.image.build_args,
            &release,
        )
        .await?;
    docker.tag(&release, &latest).await?;

    // Registry authentication: short-lived password piped into docker login
    println!("Authenticating with {host}...");
    let password = aws.login_password(region).await?;
    docker.login(host, super::REGISTRY_USERNAME, &password).await?;

    // Ensure the ECR repository exists before the first push
    if aws.ensure_repository(&name, region).await? {
        println!("Created ECR repository {name}");
    }

    // Release tag
    let remote_release = release.in_registry(host);
    docker.tag(&release, &remote_release).await?;
    println!("Pushing {remote_release}...");
    docker.push(&remote_release).await?;

    // Latest alias
    if no_latest || !config.registry.push_latest {
        println!("Skipping latest alias");
    } else {
        let remote_latest = latest.in_registry(host);
        docker.tag(&latest, &remote_latest).await?;
        println!("Pushing {remote_latest}...");
        docker.push(&remote_latest).await?;
    }

    println!();
    println!("Pushed: {remote_release}");

    Ok(())
}

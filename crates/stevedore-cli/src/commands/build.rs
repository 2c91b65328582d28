use std::path::{Path, PathBuf};

use stevedore_core::{ImageRef, StevedoreConfig};
use stevedore_docker::DockerClient;
use stevedore_git::Revision;

/// Build the image and apply local tags, without touching the registry.
pub async fn build() -> anyhow::Result<()> {
    let project_dir = PathBuf::from(".");
    let docker = DockerClient::new();

    let revision = Revision::resolve(&project_dir)?;
    let config = StevedoreConfig::load(&project_dir)?;
    let name = config.image.resolve_name(&project_dir)?;

    let release = ImageRef::local(&name, &revision.release_tag());
    let latest = ImageRef::local(&name, "latest");

    if revision.dirty {
        println!("Working tree has uncommitted changes; tagging as {release}");
    }

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

    println!();
    println!("Built: {release} (also tagged {latest})");

    Ok(())
}

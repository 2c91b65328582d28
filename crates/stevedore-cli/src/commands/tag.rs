use std::path::PathBuf;

use stevedore_git::Revision;

/// Print the release tag for the current working tree.
///
/// Scriptable: `docker run $REGISTRY/webapp:$(stevedore tag)`.
pub fn tag() -> anyhow::Result<()> {
    let revision = Revision::resolve(&PathBuf::from("."))?;
    println!("{}", revision.release_tag());
    Ok(())
}

use std::path::Path;

/// Write a stevedore.toml skeleton into the current directory.
pub fn init() -> anyhow::Result<()> {
    let config_path = Path::new("stevedore.toml");
    if config_path.exists() {
        eprintln!("stevedore.toml already exists, skipping");
    } else {
        let skeleton = r#"[image]
# name = "webapp"              # defaults to the directory name
# context = "."
# dockerfile = "Dockerfile"

# [image.build_args]
# RUST_VERSION = "1.88"

[registry]
# host = "123456789012.dkr.ecr.us-east-1.amazonaws.com"
# region = "us-east-1"
# push_latest = true
"#;
        std::fs::write(config_path, skeleton)?;
        println!("Created stevedore.toml");
    }

    println!();
    println!("Next steps:");
    println!();
    println!("  1. Set your registry:");
    println!("     edit stevedore.toml and set [registry].host");
    println!();
    println!("  2. Check your environment:");
    println!("     stevedore doctor");
    println!();
    println!("  3. Build and push:");
    println!("     stevedore push");

    Ok(())
}

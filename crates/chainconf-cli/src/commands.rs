//! Subcommand implementations

use anyhow::{bail, Context, Result};
use chainconf_config::{
    ConfigLoader, EnvSnapshot, FileLoader, Manifest, NetworkProfile, ProjectConfig,
};
use clap::ValueEnum;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Toml,
}

/// Where the environment snapshot comes from
#[derive(Debug, Clone, Default)]
pub struct EnvSource {
    pub env_file: Option<PathBuf>,
    pub no_dotenv: bool,
}

impl EnvSource {
    /// Capture the process environment and merge the requested dotenv file
    pub fn snapshot(&self) -> Result<EnvSnapshot> {
        let env = EnvSnapshot::from_process();
        tracing::debug!(variables = env.len(), "Captured environment");
        match (&self.env_file, self.no_dotenv) {
            (Some(path), _) => env
                .with_dotenv_file(path)
                .with_context(|| format!("Failed to read env file {}", path.display())),
            (None, true) => Ok(env),
            (None, false) => env.with_default_dotenv().context("Failed to read .env"),
        }
    }
}

pub async fn load_project(manifest: Option<&Path>, source: &EnvSource) -> Result<ProjectConfig> {
    let env = source.snapshot()?;
    let project = ConfigLoader::load_project(manifest, &env)
        .await
        .context("Failed to load manifest")?;
    Ok(project)
}

/// Framework configuration in the requested format
pub fn render(project: &ProjectConfig, format: OutputFormat) -> Result<String> {
    let framework = project.framework();
    let rendered = match format {
        OutputFormat::Json => framework.to_json_pretty()?,
        OutputFormat::Toml => framework.to_toml()?,
    };
    Ok(rendered)
}

/// Profiles to show: every network, or the named ones in the given order.
/// Names may be preset aliases such as `mumbai`.
pub fn select_networks<'a>(
    project: &'a ProjectConfig,
    names: &[String],
) -> Result<Vec<&'a NetworkProfile>> {
    if names.is_empty() {
        return Ok(project.networks.values().collect());
    }

    names
        .iter()
        .map(|name| {
            project
                .lookup(name)
                .with_context(|| format!("Unknown network {}", name))
        })
        .collect()
}

/// One line per network. Keys are never printed.
pub fn network_table(profiles: &[&NetworkProfile]) -> String {
    let width = profiles
        .iter()
        .map(|profile| profile.name.len())
        .max()
        .unwrap_or(0)
        .max("NETWORK".len());

    let mut out = format!("{:<width$}  {:<8}  ENDPOINT\n", "NETWORK", "ACCOUNTS");
    for profile in profiles {
        let endpoint = if profile.has_endpoint() {
            profile.endpoint_url.as_str()
        } else {
            "(unset)"
        };
        out.push_str(&format!(
            "{:<width$}  {:<8}  {}\n",
            profile.name,
            profile.credentials.len(),
            endpoint
        ));
    }
    out
}

/// Write the built-in manifest as a starting point
pub async fn init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!("{} already exists, pass --force to overwrite", path.display());
    }

    FileLoader::save_toml(&Manifest::default(), path)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::info!(path = %path.display(), "Wrote manifest");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn project(pairs: &[(&str, &str)]) -> ProjectConfig {
        let env = EnvSnapshot::from_pairs(pairs.iter().copied());
        ProjectConfig::resolve(&env, &Manifest::default())
    }

    #[test]
    fn table_hides_keys() {
        let project = project(&[
            ("MAINNET_URL", "https://rpc.example"),
            ("PRIVATE_KEY", "0xtopsecret"),
        ]);
        let profiles = select_networks(&project, &[]).unwrap();
        let table = network_table(&profiles);

        assert!(!table.contains("topsecret"));
        assert!(table.contains("https://rpc.example"));
        assert!(table.contains("(unset)"));
        assert_eq!(table.lines().count(), 6);
    }

    #[test]
    fn select_by_name_and_alias() {
        let project = project(&[("POLYGONMUMBAI_URL", "https://mumbai.example")]);
        let names = vec!["mumbai".to_string(), "mainnet".to_string()];
        let profiles = select_networks(&project, &names).unwrap();

        let selected: Vec<&str> = profiles.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(selected, vec!["polygonMumbai", "mainnet"]);

        let table = network_table(&profiles);
        assert_eq!(table.lines().count(), 3);
        assert!(table.contains("https://mumbai.example"));
    }

    #[test]
    fn select_unknown_network_fails() {
        let project = project(&[]);
        assert!(select_networks(&project, &["goerli".to_string()]).is_err());
    }

    #[test]
    fn render_both_formats() {
        let project = project(&[("ROPSTEN_URL", "https://ropsten.example")]);
        assert!(render(&project, OutputFormat::Json)
            .unwrap()
            .contains("\"url\": \"https://ropsten.example\""));
        assert!(render(&project, OutputFormat::Toml)
            .unwrap()
            .contains("https://ropsten.example"));
    }

    #[tokio::test]
    async fn init_refuses_to_overwrite() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("chainconf.toml");

        init(&path, false).await.unwrap();
        assert!(init(&path, false).await.is_err());
        init(&path, true).await.unwrap();

        let manifest = FileLoader::load_auto(&path).await.unwrap();
        assert_eq!(manifest, Manifest::default());
    }

    #[tokio::test]
    async fn explicit_env_file_is_merged() {
        let dir = tempdir().unwrap();
        let env_file = dir.path().join("deploy.env");
        std::fs::write(&env_file, "CHAINCONF_TEST_ONLY_URL=https://file.example\n").unwrap();

        let source = EnvSource {
            env_file: Some(env_file),
            no_dotenv: false,
        };
        let env = source.snapshot().unwrap();
        assert_eq!(env.get("CHAINCONF_TEST_ONLY_URL"), Some("https://file.example"));
    }
}

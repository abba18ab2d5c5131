use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use project_ingest::fetch::AutoFetcher;
use project_ingest::manifest::{render_manifest, scan_directory};
use project_ingest::{get_vm_load_config, render_tree, LoaderConfig, ProjectLoader, ProjectSource};
use serde::Serialize;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "project-ingest")]
#[command(about = "Load a project from a manifest, a zip archive or GitHub")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load a project and print its file tree
    Load {
        #[command(flatten)]
        source: SourceArgs,

        /// Print `{files, fileTree}` as JSON instead of a tree
        #[arg(long)]
        json: bool,

        /// HTTP timeout in seconds
        #[arg(long, default_value_t = 30)]
        timeout: u64,

        /// Largest single file accepted, in bytes
        #[arg(long)]
        max_file_size: Option<u64>,

        /// Largest total project size, in bytes
        #[arg(long)]
        max_total_size: Option<u64>,
    },
    /// Print the sandbox load parameters for a source (or `null`)
    VmConfig {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Write a manifest listing every file in a directory
    Manifest {
        /// Project directory
        dir: PathBuf,

        /// Manifest file name inside the directory
        #[arg(long, default_value = "manifest.txt")]
        name: String,

        /// Print to stdout instead of writing the file
        #[arg(long)]
        stdout: bool,
    },
}

#[derive(Args)]
struct SourceArgs {
    /// Source as JSON, e.g. '{"type":"github","owner":"o","repo":"r"}'
    #[arg(long, conflicts_with_all = ["local", "zip", "github"])]
    source: Option<String>,

    /// Local project directory or base URL containing a manifest
    #[arg(long)]
    local: Option<String>,

    /// Explicit manifest location for --local
    #[arg(long, requires = "local")]
    manifest: Option<String>,

    /// Zip archive URL or path
    #[arg(long)]
    zip: Option<String>,

    /// Keep the archive's top-level directory
    #[arg(long)]
    no_strip: bool,

    /// Fetch the zip through the sandbox path
    #[arg(long, requires = "zip")]
    use_vm: bool,

    /// GitHub repository as owner/repo
    #[arg(long)]
    github: Option<String>,

    /// Branch, tag or commit for --github
    #[arg(long = "ref", requires = "github")]
    git_ref: Option<String>,

    /// Subdirectory for --github
    #[arg(long, requires = "github")]
    path: Option<String>,
}

impl SourceArgs {
    fn into_source(self) -> Result<ProjectSource> {
        if let Some(json) = self.source {
            return serde_json::from_str(&json).context("Invalid --source JSON");
        }
        if let Some(path) = self.local {
            return Ok(ProjectSource::Local {
                path,
                manifest_path: self.manifest,
            });
        }
        if let Some(url) = self.zip {
            return Ok(ProjectSource::Zip {
                url,
                strip_prefix: Some(!self.no_strip),
                use_vm: self.use_vm,
            });
        }
        if let Some(repo) = self.github {
            let Some((owner, repo)) = repo.split_once('/') else {
                bail!("--github expects owner/repo, got {:?}", repo);
            };
            return Ok(ProjectSource::Github {
                owner: owner.to_string(),
                repo: repo.to_string(),
                git_ref: self.git_ref,
                path: self.path,
            });
        }
        bail!("one of --source, --local, --zip or --github is required")
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FileSummary<'a> {
    path: &'a str,
    size: usize,
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "project_ingest=info".into()),
    );

    // stdout is reserved for tree/JSON output
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run_load(source: ProjectSource, json: bool, config: LoaderConfig) -> Result<()> {
    let start = Instant::now();
    let fetcher = AutoFetcher::new(&config)?;
    // Natively there is no cross-origin policy, so the sandbox is the same fetcher
    let loader = ProjectLoader::new(&fetcher).with_config(config);

    let project = loader
        .load(&source, &fetcher)
        .await
        .with_context(|| format!("Failed to load {}", source.description()))?;

    if json {
        let files: Vec<FileSummary> = project
            .files
            .iter()
            .map(|file| FileSummary {
                path: &file.path,
                size: file.content.len(),
            })
            .collect();
        let output = serde_json::json!({
            "files": files,
            "fileTree": project.file_tree,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", render_tree(&project.file_tree));
        eprintln!(
            "✓ Loaded {} files ({} bytes total) [{:.2}s]",
            project.file_count(),
            project.total_size(),
            start.elapsed().as_secs_f64()
        );
    }

    Ok(())
}

fn run_manifest(dir: PathBuf, name: String, stdout: bool) -> Result<()> {
    let paths = scan_directory(&dir, &name)
        .with_context(|| format!("Failed to scan {}", dir.display()))?;
    let text = render_manifest(&paths);

    if stdout {
        print!("{}", text);
    } else {
        let target = dir.join(&name);
        std::fs::write(&target, text)
            .with_context(|| format!("Failed to write {}", target.display()))?;
        eprintln!("✓ Wrote {} paths to {}", paths.len(), target.display());
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Load {
            source,
            json,
            timeout,
            max_file_size,
            max_total_size,
        } => {
            let mut config = LoaderConfig::default().timeout(Duration::from_secs(timeout));
            if let Some(size) = max_file_size {
                config = config.max_file_size(size);
            }
            if let Some(size) = max_total_size {
                config = config.max_total_size(size);
            }
            run_load(source.into_source()?, json, config).await
        }
        Command::VmConfig { source } => {
            let vm_config = get_vm_load_config(&source.into_source()?);
            println!("{}", serde_json::to_string_pretty(&vm_config)?);
            Ok(())
        }
        Command::Manifest { dir, name, stdout } => run_manifest(dir, name, stdout),
    }
}

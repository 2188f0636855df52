//! Command-line interface for gqlmodel.
//!
//! # Usage
//!
//! ```bash
//! # C# model from a live endpoint
//! gqlmodel -e http://localhost:8081/udp/content -o Model.cs -n Sdl.Web.PublicContentApi
//!
//! # Java model from a saved introspection result
//! gqlmodel -e schema.json -o ContentModel.java -n com.sdl.web.pca.client.contentmodel
//!
//! # Authenticated endpoint, skipping unions
//! gqlmodel -e https://cms.example.com/graphql -H 'Authorization: Bearer token' \
//!     --retries 3 --skip-unsupported -o Model.cs -n Example.Model
//! ```

mod config;

pub use config::{ConfigError, GenerateConfig, SchemaSource};

use clap::{Parser, ValueEnum};
use colored::Colorize;
use gqlmodel_codegen::CodeGenerator;
use gqlmodel_core::DiagnosticSeverity;
use gqlmodel_schema::{load_schema_file, IntrospectionError, Schema, DEFAULT_TIMEOUT_SECS};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "gqlmodel")]
#[command(author, version, about = "Generate typed model classes from a GraphQL schema", long_about = None)]
pub struct Cli {
    /// Namespace (C#) or package (Java) of the generated model
    #[arg(short, long)]
    pub namespace: Option<String>,

    /// GraphQL endpoint URL, or a saved introspection JSON file
    #[arg(short, long)]
    pub endpoint: Option<String>,

    /// Output file; a .cs or .java extension selects the language
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output language, overriding the output extension
    #[arg(short, long, value_enum)]
    pub lang: Option<LanguageArg>,

    /// Extra request header, `Name: value` (repeatable)
    #[arg(short = 'H', long = "header", value_name = "HEADER")]
    pub headers: Vec<String>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Retries for failed requests
    #[arg(long, default_value_t = 0)]
    pub retries: u32,

    /// Skip union and other unsupported types instead of failing
    #[arg(long)]
    pub skip_unsupported: bool,

    #[arg(short, long)]
    pub verbose: bool,

    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LanguageArg {
    /// C# with Newtonsoft.Json attributes
    #[value(alias = "csharp")]
    Cs,
    /// Java with Jackson annotations
    Java,
}

/// Rewrites legacy single-dash spellings (`-ns`, `-NS`, `-E`, `-O`) to the
/// flags clap understands.
pub fn normalize_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    args.into_iter()
        .map(|arg| match arg.to_ascii_lowercase().as_str() {
            "-ns" => "--namespace".to_string(),
            "-e" | "-o" => arg.to_ascii_lowercase(),
            _ => arg,
        })
        .collect()
}

/// Runs one generation.
///
/// Returns the process exit code. The output file is written only after the
/// whole model has been generated.
///
/// # Errors
///
/// Returns invalid flags as [`ConfigError`] and output write failures as I/O
/// errors.
pub async fn run(cli: Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let config = GenerateConfig::from_cli(&cli)?;
    tracing::debug!(
        source = ?config.source,
        output = %config.output.display(),
        language = ?config.language,
        "Starting generation"
    );

    let schema = match acquire_schema(&config).await {
        Ok(schema) => schema,
        Err(e) => {
            eprintln!("{} Could not read the schema", "Error:".red().bold());
            eprintln!("  {} {}", "-->".blue(), e);
            return Ok(1);
        }
    };

    let options = config.codegen_options();
    let generated = match CodeGenerator::with_options(&schema, options).generate() {
        Ok(generated) => generated,
        Err(e) => {
            eprintln!(
                "{} An error occurred when generating the model",
                "Error:".red().bold()
            );
            eprintln!("  {} {}", "-->".blue(), e);
            return Ok(1);
        }
    };

    if !cli.quiet {
        for diagnostic in generated.diagnostics.warnings() {
            eprintln!("{}", diagnostic.to_string().yellow());
        }
        if cli.verbose {
            for diagnostic in generated
                .diagnostics
                .iter()
                .filter(|d| d.severity == DiagnosticSeverity::Info)
            {
                eprintln!("{}", diagnostic.to_string().dimmed());
            }
        }
    }

    write_output(&config.output, &generated.code)?;

    if !cli.quiet {
        println!(
            "{} {} ({} types)",
            "Generated".green(),
            config.output.display(),
            generated.emitted
        );
    }
    Ok(0)
}

/// Replaces `path` with `contents` in one step.
///
/// The model is written to a temporary file next to `path` and renamed over
/// it, so a failed write never leaves a truncated model behind.
fn write_output(path: &Path, contents: &str) -> std::io::Result<()> {
    let dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut file = tempfile::NamedTempFile::new_in(dir)?;
    file.write_all(contents.as_bytes())?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

async fn acquire_schema(config: &GenerateConfig) -> Result<Schema, IntrospectionError> {
    match &config.source {
        SchemaSource::Endpoint(url) => config.client().fetch_schema(url).await,
        SchemaSource::File(path) => load_schema_file(path),
    }
}

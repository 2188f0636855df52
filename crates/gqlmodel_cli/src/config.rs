//! Validation of command-line flags into a generation run.

use crate::{Cli, LanguageArg};
use gqlmodel_codegen::{holder_name, CodegenOptions, Language};
use gqlmodel_schema::IntrospectionClient;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// A required flag is missing or a flag value is malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Specify GraphQL endpoint address.")]
    MissingEndpoint,

    #[error("Specify output file.")]
    MissingOutput,

    #[error("Specify namespace.")]
    MissingNamespace,

    #[error(
        "cannot infer the output language from `{}`; use a .cs or .java file or pass --lang",
        .0.display()
    )]
    UnknownLanguage(PathBuf),

    #[error("invalid header `{0}`, expected `Name: value`")]
    InvalidHeader(String),

    #[error(
        "`{}` cannot hold a Java model: the file name must be a valid Java class name, such as ContentModel.java",
        .0.display()
    )]
    InvalidJavaFileName(PathBuf),
}

/// Where the schema comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaSource {
    /// Live endpoint, introspected over HTTP.
    Endpoint(String),
    /// Saved introspection result.
    File(PathBuf),
}

impl SchemaSource {
    /// `http://` and `https://` addresses are endpoints; anything else is a path.
    pub fn parse(endpoint: &str) -> Self {
        let lower = endpoint.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Self::Endpoint(endpoint.to_string())
        } else {
            Self::File(PathBuf::from(endpoint))
        }
    }
}

/// A validated generation run.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub source: SchemaSource,
    pub output: PathBuf,
    pub namespace: String,
    pub language: Language,
    /// Java holder class, named after the output file.
    pub holder: Option<String>,
    pub headers: Vec<(String, String)>,
    pub timeout: Duration,
    pub retries: u32,
    pub skip_unsupported: bool,
}

impl GenerateConfig {
    /// Validates the parsed flags.
    ///
    /// Required flags are checked in the order endpoint, output, namespace and
    /// only the first missing one is reported.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let endpoint = present(cli.endpoint.as_deref()).ok_or(ConfigError::MissingEndpoint)?;
        let output = cli
            .output
            .clone()
            .filter(|path| !path.as_os_str().is_empty())
            .ok_or(ConfigError::MissingOutput)?;
        let namespace = present(cli.namespace.as_deref()).ok_or(ConfigError::MissingNamespace)?;

        let language = match cli.lang {
            Some(LanguageArg::Cs) => Language::CSharp,
            Some(LanguageArg::Java) => Language::Java,
            None => Language::from_path(&output)
                .ok_or_else(|| ConfigError::UnknownLanguage(output.clone()))?,
        };

        let holder = match language {
            Language::CSharp => None,
            Language::Java => Some(
                output
                    .file_stem()
                    .and_then(|stem| stem.to_str())
                    .and_then(holder_name)
                    .ok_or_else(|| ConfigError::InvalidJavaFileName(output.clone()))?,
            ),
        };

        let headers = cli
            .headers
            .iter()
            .map(|raw| parse_header(raw))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            source: SchemaSource::parse(endpoint),
            output,
            namespace: namespace.to_string(),
            language,
            holder,
            headers,
            timeout: Duration::from_secs(cli.timeout),
            retries: cli.retries,
            skip_unsupported: cli.skip_unsupported,
        })
    }

    /// Generator options for this run, stamped with the current time.
    pub fn codegen_options(&self) -> CodegenOptions {
        let mut options = CodegenOptions::new(self.namespace.clone(), self.language);
        options.skip_unsupported = self.skip_unsupported;
        if let Some(holder) = &self.holder {
            options.holder_name.clone_from(holder);
        }
        options
    }

    /// HTTP client configured from the connection flags.
    pub fn client(&self) -> IntrospectionClient {
        IntrospectionClient::new()
            .with_headers(self.headers.iter().cloned())
            .with_timeout(self.timeout)
            .with_retries(self.retries)
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

/// Splits `Name: value` at the first colon.
fn parse_header(raw: &str) -> Result<(String, String), ConfigError> {
    let invalid = || ConfigError::InvalidHeader(raw.to_string());
    let (name, value) = raw.split_once(':').ok_or_else(invalid)?;
    let name = name.trim();
    if name.is_empty() || name.contains(char::is_whitespace) {
        return Err(invalid());
    }
    Ok((name.to_string(), value.trim().to_string()))
}

pub mod cli;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_identifier, validate_non_empty_string, validate_path, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};

/// Defaults mirror the layout of a generated AWS SDK v3 client package,
/// which is what this tool was written against.
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "opscan")]
#[command(about = "Cross-references a generated client's operations against declaration files")]
pub struct CliConfig {
    /// Root directory of the generated declaration tree
    #[arg(
        long,
        default_value = "node_modules/@aws-sdk/client-cognito-identity-provider/dist-types"
    )]
    pub types_dir: String,

    /// Client declaration file, relative to the types root
    #[arg(long, default_value = "CognitoIdentityProvider.d.ts")]
    pub client_file: String,

    /// Name of the interface enumerating the client's operations
    #[arg(long, default_value = "CognitoIdentityProvider")]
    pub client_interface: String,

    /// Subdirectory of the types root holding the model declaration files
    #[arg(long, default_value = "models")]
    pub models_subdir: String,

    /// File-name prefix selecting model declaration files
    #[arg(long, default_value = "models_")]
    pub model_prefix: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn types_dir(&self) -> &str {
        &self.types_dir
    }

    fn client_file(&self) -> &str {
        &self.client_file
    }

    fn client_interface(&self) -> &str {
        &self.client_interface
    }

    fn models_subdir(&self) -> &str {
        &self.models_subdir
    }

    fn model_prefix(&self) -> &str {
        &self.model_prefix
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("types_dir", &self.types_dir)?;
        validate_path("client_file", &self.client_file)?;
        validate_path("models_subdir", &self.models_subdir)?;
        validate_identifier("client_interface", &self.client_interface)?;
        validate_non_empty_string("model_prefix", &self.model_prefix)?;
        Ok(())
    }
}

use std::path::PathBuf;
use std::sync::OnceLock;

use crate::error::Result;

static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Get the base data directory (~/.roas-cli/)
pub fn data_dir() -> &'static PathBuf {
    DATA_DIR.get_or_init(|| {
        std::env::var("ROAS_CLI_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                dirs::home_dir()
                    .expect("Could not determine home directory")
                    .join(".roas-cli")
            })
    })
}

/// Get the .env file path
pub fn env_file_path() -> PathBuf {
    data_dir().join(".env")
}

/// Load environment variables from the data directory's .env file
pub fn load_env() {
    let env_path = env_file_path();
    if env_path.exists() {
        let _ = dotenvy::from_path(&env_path);
    } else {
        // Try current directory as fallback
        let _ = dotenvy::dotenv();
    }
}

/// Get the YouTube Data API key
pub fn youtube_api_key() -> Option<String> {
    std::env::var("YOUTUBE_API_KEY").ok()
}

/// Create the data directory if it doesn't exist
pub fn ensure_directories() -> Result<()> {
    std::fs::create_dir_all(data_dir())?;
    Ok(())
}

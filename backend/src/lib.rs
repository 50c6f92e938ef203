pub mod types;
pub mod helpers;
pub mod gita;
pub mod verse_map;
pub mod section_splitter;
pub mod verse_identifier;
pub mod structurer;
pub mod export_helpers;
pub mod sanskrit_nlp;
pub mod logger;

use std::env;
use std::error::Error;
use std::fs::create_dir_all;
use std::path::PathBuf;

use app_dirs::{get_app_root, AppDataType, AppInfo};

pub const APP_INFO: AppInfo = AppInfo { name: "gitavyasa", author: "gitavyasa-project" };

/// The base directory for logs and generated data.
///
/// Precedence:
/// - the GITAVYASA_DIR environment variable
/// - the platform user-data directory for the app
pub fn get_create_gitavyasa_dir() -> Result<PathBuf, Box<dyn Error>> {
    let p = match env::var("GITAVYASA_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => get_app_root(AppDataType::UserData, &APP_INFO)?,
    };
    if !p.exists() {
        create_dir_all(&p)?;
    }
    Ok(p)
}

//! Folder configuration: loading, fallback resolution, and the shared instance.
//!
//! Construct [`Folders`] once at startup and pass it to whatever needs folder
//! paths. Code that cannot take it as an argument can use [`init`] and
//! [`folders`] instead.

pub mod loader;
pub mod model;
pub mod paths;

use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock, RwLock};

use serde::Serialize;
use tracing::{info, warn};

use crate::error::ConfigError;
pub use loader::{LoadStatus, LoadedSettings};
pub use model::FolderSettings;

/// Thread-safe handle to the process-wide folders.
pub type SharedFolders = Arc<RwLock<Folders>>;

static FOLDERS: OnceLock<SharedFolders> = OnceLock::new();

/// Options for constructing [`Folders`].
#[derive(Debug, Clone)]
pub struct FolderOptions {
    /// Config file to load. `None` uses the bundled config file.
    pub config_file: Option<PathBuf>,

    /// Suppress diagnostic output.
    pub mute: bool,

    /// Home directory for the fallback data folder. `None` reads the environment.
    pub home_dir: Option<PathBuf>,
}

impl Default for FolderOptions {
    fn default() -> Self {
        Self {
            config_file: None,
            mute: true,
            home_dir: None,
        }
    }
}

/// Resolved folder locations.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Folders {
    mute: bool,
    config_file: Option<PathBuf>,
    default_data_folder: PathBuf,
    settings: FolderSettings,
    #[serde(skip)]
    load_status: LoadStatus,
    #[serde(skip)]
    home_dir: Option<PathBuf>,
}

impl Folders {
    /// Loads folders from `config_file`, or the bundled config file if `None`.
    pub fn new(config_file: Option<&Path>, mute: bool) -> Result<Self, ConfigError> {
        Self::with_options(FolderOptions {
            config_file: config_file.map(Path::to_path_buf),
            mute,
            ..FolderOptions::default()
        })
    }

    /// Loads folders with explicit options.
    pub fn with_options(options: FolderOptions) -> Result<Self, ConfigError> {
        let mut folders = Self {
            mute: options.mute,
            config_file: None,
            default_data_folder: PathBuf::new(),
            settings: FolderSettings::default(),
            load_status: LoadStatus::Clean,
            home_dir: options.home_dir,
        };

        folders.load_config(options.config_file.as_deref())?;
        Ok(folders)
    }

    /// Loads settings from a config file and resolves every folder.
    ///
    /// `None` loads the config embedded in this crate. On error nothing is
    /// changed. Malformed content is not an error; it is reported through
    /// the returned [`LoadStatus`] and every setting falls back to its default.
    pub fn load_config(&mut self, path: Option<&Path>) -> Result<LoadStatus, ConfigError> {
        let (path, LoadedSettings { settings, status }) = match path {
            Some(path) => (path.to_path_buf(), loader::load_from_path(path)?),
            None => (loader::bundled_config_path(), loader::load_bundled()),
        };

        if let LoadStatus::Degraded { message } = &status {
            if !self.mute {
                warn!(path = %path.display(), "{}", message);
            }
        }

        let data_folder = self.compute_data_folder(settings.data_folder())?;

        self.settings = settings;
        self.default_data_folder = data_folder;
        self.config_file = Some(path);
        self.load_status = status.clone();
        self.report_data_folder();

        Ok(status)
    }

    /// Sets the default data folder.
    ///
    /// An empty or missing path resolves to `<home>/ladybug`, which is
    /// created if it does not exist. Any other path is stored as given.
    pub fn resolve_data_folder(&mut self, path: Option<&str>) -> Result<&Path, ConfigError> {
        self.default_data_folder = self.compute_data_folder(path)?;
        self.report_data_folder();
        Ok(&self.default_data_folder)
    }

    /// Folder where EPW files are stored. Never empty.
    pub fn default_data_folder(&self) -> &Path {
        &self.default_data_folder
    }

    /// The config file folders were last loaded from.
    pub fn config_file(&self) -> Option<&Path> {
        self.config_file.as_deref()
    }

    /// Settings as read from the last config file.
    pub fn settings(&self) -> &FolderSettings {
        &self.settings
    }

    /// How the last config file load went.
    pub fn load_status(&self) -> &LoadStatus {
        &self.load_status
    }

    /// Whether diagnostic output is suppressed.
    pub fn mute(&self) -> bool {
        self.mute
    }

    pub fn set_mute(&mut self, mute: bool) {
        self.mute = mute;
    }

    fn compute_data_folder(&self, path: Option<&str>) -> Result<PathBuf, ConfigError> {
        match path.filter(|p| !p.is_empty()) {
            Some(explicit) => Ok(PathBuf::from(explicit)),
            None => {
                let home = self
                    .home_dir
                    .clone()
                    .or_else(paths::home_from_env)
                    .ok_or(ConfigError::NoHomeDir)?;
                paths::ensure_fallback_folder(&home)
            }
        }
    }

    fn report_data_folder(&self) {
        if !self.mute && !self.default_data_folder.as_os_str().is_empty() {
            info!(
                path = %self.default_data_folder.display(),
                "Path to the default data folder is set"
            );
        }
    }
}

/// Loads the process-wide folders. May only succeed once per process.
pub fn init(config_file: Option<&Path>, mute: bool) -> Result<SharedFolders, ConfigError> {
    if FOLDERS.get().is_some() {
        return Err(ConfigError::AlreadyInitialized);
    }

    let shared = Arc::new(RwLock::new(Folders::new(config_file, mute)?));
    FOLDERS
        .set(Arc::clone(&shared))
        .map_err(|_| ConfigError::AlreadyInitialized)?;

    Ok(shared)
}

/// Returns the process-wide folders loaded by [`init`].
pub fn folders() -> Result<SharedFolders, ConfigError> {
    FOLDERS.get().cloned().ok_or(ConfigError::NotInitialized)
}

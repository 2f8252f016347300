//! Locating the root template and the stylesheet library.
//!
//! Assets live in a `_templates` directory holding `root.css` and a `styles/`
//! tree. During development that directory sits in the working directory; an
//! installed binary finds it next to its own install prefix
//! (`<bin dir>/../_templates`), whatever the current directory is.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::HuekitError;

/// Name of the templates directory.
pub const TEMPLATES_DIR: &str = "_templates";

/// Root template file inside the templates directory.
pub const ROOT_TEMPLATE: &str = "root.css";

/// Stylesheet library directory inside the templates directory.
pub const STYLE_LIBRARY: &str = "styles";

/// Where to look for assets. Chosen once per process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetMode {
    /// Running from a source checkout: `./_templates`.
    Dev,
    /// Running an installed binary: `<bin dir>/../_templates`.
    Packaged,
}

impl AssetMode {
    pub fn from_dev_flag(dev: bool) -> Self {
        if dev {
            AssetMode::Dev
        } else {
            AssetMode::Packaged
        }
    }
}

/// Resolved asset locations, threaded into the generator and copier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateAssets {
    pub root_template: PathBuf,
    pub style_library: PathBuf,
}

impl TemplateAssets {
    /// Both assets under a single templates directory.
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            root_template: dir.join(ROOT_TEMPLATE),
            style_library: dir.join(STYLE_LIBRARY),
        }
    }

    /// Resolves assets for `mode`.
    ///
    /// Dev mode resolves against `base_dir` (the working directory); packaged
    /// mode against the location of the running executable.
    pub fn resolve(mode: AssetMode, base_dir: &Path) -> Result<Self, HuekitError> {
        let assets = match mode {
            AssetMode::Dev => Self::from_dir(base_dir.join(TEMPLATES_DIR)),
            AssetMode::Packaged => {
                let exe = std::env::current_exe().map_err(HuekitError::ExecutableLocation)?;
                // Follow symlinks such as ~/.cargo/bin shims to the real install.
                let exe = exe.canonicalize().unwrap_or(exe);
                Self::packaged(&exe)
            }
        };
        debug!(
            ?mode,
            root_template = %assets.root_template.display(),
            style_library = %assets.style_library.display(),
            "resolved template assets"
        );
        Ok(assets)
    }

    /// Assets of an installation whose binary lives at `exe`.
    pub fn packaged(exe: &Path) -> Self {
        let bin_dir = exe.parent().unwrap_or_else(|| Path::new("."));
        Self::from_dir(bin_dir.join("..").join(TEMPLATES_DIR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dev_flag_selects_mode() {
        assert_eq!(AssetMode::from_dev_flag(true), AssetMode::Dev);
        assert_eq!(AssetMode::from_dev_flag(false), AssetMode::Packaged);
    }

    #[test]
    fn dev_mode_resolves_under_base_dir() {
        let assets = TemplateAssets::resolve(AssetMode::Dev, Path::new("/work/site")).unwrap();
        assert_eq!(
            assets.root_template,
            PathBuf::from("/work/site/_templates/root.css")
        );
        assert_eq!(
            assets.style_library,
            PathBuf::from("/work/site/_templates/styles")
        );
    }

    #[test]
    fn packaged_mode_resolves_beside_install_prefix() {
        let assets = TemplateAssets::packaged(Path::new("/opt/huekit/bin/huekit"));
        assert_eq!(
            assets.root_template,
            PathBuf::from("/opt/huekit/bin/../_templates/root.css")
        );
        assert_eq!(
            assets.style_library,
            PathBuf::from("/opt/huekit/bin/../_templates/styles")
        );
    }

    #[test]
    fn packaged_mode_ignores_working_directory() {
        let a = TemplateAssets::resolve(AssetMode::Packaged, Path::new("/one")).unwrap();
        let b = TemplateAssets::resolve(AssetMode::Packaged, Path::new("/two")).unwrap();
        assert_eq!(a, b);
    }
}

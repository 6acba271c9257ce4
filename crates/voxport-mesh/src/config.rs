use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::Path;

/// Export settings. The compiler reads the face filters and threading knobs; the remaining
/// fields are passed through for the mesh writer and texture extraction.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ExportConfig {
    /// Drop faces whose neighbour cell lies outside the grid.
    #[serde(default)]
    pub suppress_outer_faces: bool,
    /// Skip every voxel on the grid's outer shell.
    #[serde(default)]
    pub interior_only: bool,
    #[serde(default)]
    pub center_mesh: bool,
    #[serde(default = "default_true")]
    pub emit_normals: bool,
    #[serde(default = "default_true")]
    pub emit_uvs: bool,
    #[serde(default)]
    pub texture_pack: Option<String>,
    #[serde(default)]
    pub output_folder: Option<String>,
    /// Compile grid layers on the rayon pool.
    #[serde(default)]
    pub parallel: bool,
    /// Size of a dedicated pool; the global pool is used when unset.
    #[serde(default)]
    pub threads: Option<usize>,
}

fn default_true() -> bool {
    true
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            suppress_outer_faces: false,
            interior_only: false,
            center_mesh: false,
            emit_normals: true,
            emit_uvs: true,
            texture_pack: None,
            output_folder: None,
            parallel: false,
            threads: None,
        }
    }
}

impl ExportConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, Box<dyn Error>> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_all_defaults() {
        let cfg = ExportConfig::from_toml_str("").unwrap();
        assert!(!cfg.suppress_outer_faces);
        assert!(!cfg.interior_only);
        assert!(cfg.emit_normals && cfg.emit_uvs);
        assert_eq!(cfg.threads, None);
        assert_eq!(cfg, ExportConfig::default());
    }

    #[test]
    fn reads_filters_and_paths() {
        let cfg = ExportConfig::from_toml_str(
            r#"
            suppress_outer_faces = true
            texture_pack = "packs/faithful"
            parallel = true
            threads = 4
        "#,
        )
        .unwrap();
        assert!(cfg.suppress_outer_faces);
        assert_eq!(cfg.texture_pack.as_deref(), Some("packs/faithful"));
        assert_eq!(cfg.threads, Some(4));
    }

    #[test]
    fn unknown_types_are_rejected() {
        assert!(ExportConfig::from_toml_str("parallel = \"yes\"").is_err());
    }
}

//! TOML preset files for the drive chain.
//!
//! A preset names knob values by their stable string IDs:
//!
//! ```toml
//! name = "Crunch"
//! description = "Mid-gain breakup"
//!
//! [params]
//! drv_drive = 0.35
//! drv_range = 60.0
//! drv_curve = 0.7
//! ```
//!
//! Knobs a preset omits keep their current values. Unknown IDs are an error
//! rather than silently ignored; a typo in a preset should not load.

use anyhow::Context;
use lemondrive_dsp::{DriveParams, LemonDrive, PARAMS};
use std::collections::BTreeMap;
use std::path::Path;

use lemondrive_core::ParameterInfo;

/// A named set of knob values, keyed by stable string ID.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct DrivePreset {
    /// Display name.
    pub name: String,

    /// Optional free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Knob values by string ID (e.g., `drv_curve = 0.7`).
    #[serde(default)]
    pub params: BTreeMap<String, f32>,
}

impl DrivePreset {
    /// Load a preset from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading preset {}", path.display()))?;
        let preset: Self = toml::from_str(&content)
            .with_context(|| format!("parsing preset {}", path.display()))?;
        preset.validate()?;
        Ok(preset)
    }

    /// Save the preset to a TOML file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self).context("serializing preset")?;
        std::fs::write(path, content)
            .with_context(|| format!("writing preset {}", path.display()))?;
        Ok(())
    }

    /// Capture the current knob values of a drive channel as a preset.
    pub fn from_drive(name: impl Into<String>, drive: &LemonDrive) -> Self {
        let params = PARAMS
            .iter()
            .enumerate()
            .map(|(i, desc)| (desc.string_id.to_string(), drive.get_param(i)))
            .collect();
        Self {
            name: name.into(),
            description: None,
            params,
        }
    }

    /// Reject any string ID that no knob carries.
    fn validate(&self) -> anyhow::Result<()> {
        for id in self.params.keys() {
            if !PARAMS.iter().any(|desc| desc.string_id == id) {
                anyhow::bail!("unknown parameter '{id}' in preset '{}'", self.name);
            }
        }
        Ok(())
    }

    /// Apply the preset's values to shared parameter cells.
    ///
    /// Values land through the clamping setters, so an out-of-range preset
    /// value degrades to the nearest valid one.
    pub fn apply(&self, params: &DriveParams) {
        for (id, &value) in &self.params {
            if let Some(index) = PARAMS.iter().position(|desc| desc.string_id == id) {
                params.set_by_index(index, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn roundtrip_through_file() {
        let mut drive = LemonDrive::new(48000.0);
        drive.set_drive(0.35);
        drive.set_curve(0.7);
        let preset = DrivePreset::from_drive("Crunch", &drive);

        let dir = tempdir().unwrap();
        let path = dir.path().join("crunch.toml");
        preset.save(&path).unwrap();

        let loaded = DrivePreset::load(&path).unwrap();
        assert_eq!(loaded.name, "Crunch");
        assert_eq!(loaded.params["drv_drive"], 0.35);
        assert_eq!(loaded.params["drv_curve"], 0.7);

        let cells = DriveParams::default();
        loaded.apply(&cells);
        let snap = cells.snapshot();
        assert_eq!(snap.drive, 0.35);
        assert_eq!(snap.curve, 0.7);
        // Untouched knobs keep their defaults... from_drive captured them all
        assert_eq!(snap.range, 40.0);
    }

    #[test]
    fn partial_preset_leaves_other_knobs_alone() {
        let preset: DrivePreset = toml::from_str(
            r#"
            name = "Just drive"

            [params]
            drv_drive = 0.9
            "#,
        )
        .unwrap();

        let cells = DriveParams::default();
        cells.set_range(100.0);
        preset.apply(&cells);

        let snap = cells.snapshot();
        assert_eq!(snap.drive, 0.9);
        assert_eq!(snap.range, 100.0);
    }

    #[test]
    fn out_of_range_value_is_clamped_on_apply() {
        let preset: DrivePreset = toml::from_str(
            r#"
            name = "Hot"

            [params]
            drv_curve = 2.0
            "#,
        )
        .unwrap();

        let cells = DriveParams::default();
        preset.apply(&cells);
        assert_eq!(cells.snapshot().curve, 0.9);
    }

    #[test]
    fn unknown_id_fails_to_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("typo.toml");
        std::fs::write(
            &path,
            r#"
            name = "Typo"

            [params]
            drv_driev = 0.5
            "#,
        )
        .unwrap();

        let err = DrivePreset::load(&path).unwrap_err();
        assert!(err.to_string().contains("drv_driev"));
    }
}

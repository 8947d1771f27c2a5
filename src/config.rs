use crate::error::ParseOptionError;
use crate::geometry::ProjectionType;
use crate::materials::{DEFAULT_COLOR, PLACEHOLDER_COLOR};
use crate::ColorRGB;
use std::fmt::Display;
use std::str::FromStr;

/// Determines when meshes and materials are converted again. Lights are converted on every build.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum RebuildPolicy {
    /// Rebuild every time, regardless of the structural hash.
    Always,
    /// Rebuild only if the structural hash differs from the previous build.
    ///
    /// The hash only tracks the number of objects and the points of the first object, so
    /// changes to materials or to other objects are not detected. Call
    /// [SceneBuilder::invalidate][crate::SceneBuilder::invalidate] after such edits.
    #[default]
    OnChange,
}

impl RebuildPolicy {
    pub fn all() -> [Self; 2] {
        [Self::Always, Self::OnChange]
    }

    pub fn name(&self) -> &'static str {
        match self {
            RebuildPolicy::Always => "Always",
            RebuildPolicy::OnChange => "OnChange",
        }
    }
}

impl TryFrom<u8> for RebuildPolicy {
    type Error = ParseOptionError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(RebuildPolicy::Always),
            1 => Ok(RebuildPolicy::OnChange),
            _ => Err(ParseOptionError {
                option: "rebuild policy",
                value: value.to_string(),
            }),
        }
    }
}

impl From<RebuildPolicy> for u8 {
    fn from(policy: RebuildPolicy) -> Self {
        match policy {
            RebuildPolicy::Always => 0,
            RebuildPolicy::OnChange => 1,
        }
    }
}

impl FromStr for RebuildPolicy {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RebuildPolicy::all()
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseOptionError {
                option: "rebuild policy",
                value: s.to_string(),
            })
    }
}

impl Display for RebuildPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Options controlling the conversion, usually mapped to knobs of the render node.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildOptions {
    /// Projection assigned to the converted camera.
    pub projection: ProjectionType,
    pub rebuild: RebuildPolicy,
    /// Convert spot lights as such, instead of as point lights.
    pub spot_lights: bool,
    /// Convert objects in parallel.
    pub parallel: bool,
    /// Color of objects without a material.
    pub default_color: ColorRGB,
    /// Color of objects with a placeholder material.
    pub placeholder_color: ColorRGB,
}

impl Default for BuildOptions {
    fn default() -> Self {
        BuildOptions {
            projection: ProjectionType::Perspective,
            rebuild: RebuildPolicy::OnChange,
            spot_lights: false,
            parallel: false,
            default_color: DEFAULT_COLOR,
            placeholder_color: PLACEHOLDER_COLOR,
        }
    }
}

use super::transform;
use crate::error::ParseOptionError;
use crate::host::{HostCamera, KNOB_ROTATE, KNOB_TRANSLATE};
use cgmath::{Matrix4, Vector3 as Vec3, Zero};
use std::fmt::Display;
use std::str::FromStr;

/// Projection used by the renderer camera.
///
/// The host cameras carry no projection information, so this is chosen by the user.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum ProjectionType {
    #[default]
    Perspective,
    Spherical,
    Fisheye,
}

impl ProjectionType {
    pub fn all() -> [Self; 3] {
        [Self::Perspective, Self::Spherical, Self::Fisheye]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ProjectionType::Perspective => "Perspective",
            ProjectionType::Spherical => "Spherical",
            ProjectionType::Fisheye => "Fisheye",
        }
    }
}

impl TryFrom<u8> for ProjectionType {
    type Error = ParseOptionError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ProjectionType::Perspective),
            1 => Ok(ProjectionType::Spherical),
            2 => Ok(ProjectionType::Fisheye),
            _ => Err(ParseOptionError {
                option: "projection",
                value: value.to_string(),
            }),
        }
    }
}

impl From<ProjectionType> for u8 {
    fn from(ptype: ProjectionType) -> Self {
        match ptype {
            ProjectionType::Perspective => 0,
            ProjectionType::Spherical => 1,
            ProjectionType::Fisheye => 2,
        }
    }
}

impl FromStr for ProjectionType {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProjectionType::all()
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseOptionError {
                option: "projection",
                value: s.to_string(),
            })
    }
}

impl Display for ProjectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The renderer camera.
///
/// The transform is baked at conversion time: changes on the host camera are picked up only by
/// the next build.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub transform: Matrix4<f32>,
    /// Horizontal field of view, in degrees.
    pub fov: f32,
    pub projection: ProjectionType,
}

impl Camera {
    /// Computes the horizontal field of view, in degrees, of a lens with the given focal length
    /// and film back width.
    pub fn fov_from_lens(focal_length: f32, horizontal_aperture: f32) -> f32 {
        f32::to_degrees(2.0 * f32::atan((horizontal_aperture * 0.5) / focal_length))
    }

    /// Field of view in radians.
    pub fn fov_radians(&self) -> f32 {
        f32::to_radians(self.fov)
    }
}

pub(crate) fn convert_camera(camera: &dyn HostCamera, projection: ProjectionType) -> Camera {
    let position = camera.vector3(KNOB_TRANSLATE).unwrap_or_else(Vec3::zero);
    let rotation = camera.vector3(KNOB_ROTATE).unwrap_or_else(Vec3::zero);
    let fov = Camera::fov_from_lens(camera.focal_length(), camera.horizontal_aperture());
    log::debug!("Converted camera: fov {:.3} deg, {} projection", fov, projection);
    Camera {
        transform: transform::from_position_rotation(position, rotation),
        fov,
        projection,
    }
}

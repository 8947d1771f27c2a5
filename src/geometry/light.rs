use crate::host::{
    HostLight, KNOB_CONE_ANGLE, KNOB_INTENSITY, KNOB_LIGHT_TYPE, KNOB_ROTATE, KNOB_TRANSLATE,
};
use cgmath::{EuclideanSpace, Point3, Vector3 as Vec3, Zero};

/// Factor converting host light intensities into renderer radiometric units.
pub const INTENSITY_SCALE: f32 = 4.0;
/// Cone angle assigned to spot lights without a cone angle knob.
pub const DEFAULT_CONE_ANGLE: f32 = 30.0;

#[derive(Debug, Clone, PartialEq)]
pub enum Light {
    Point(PointLight),
    Spot(SpotLight),
}

/// Used to safely update all the light instances if new lights are added.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
#[allow(non_camel_case_types)]
pub enum LightType {
    POINT,
    SPOT,
}

impl LightType {
    pub fn all() -> [Self; 2] {
        [Self::POINT, Self::SPOT]
    }

    pub fn name(&self) -> &'static str {
        match self {
            LightType::POINT => "Point",
            LightType::SPOT => "Spot",
        }
    }

    pub fn has_direction(&self) -> bool {
        match self {
            LightType::POINT => false,
            LightType::SPOT => true,
        }
    }

    /// Maps the numeric code stored in the host `light_type` knob.
    ///
    /// Only point (0) and spot (2) lights have a renderer counterpart.
    pub fn from_host_code(code: f32) -> Option<Self> {
        if code == 0.0 {
            Some(LightType::POINT)
        } else if code == 2.0 {
            Some(LightType::SPOT)
        } else {
            None
        }
    }
}

impl Light {
    pub fn new_point(name: String, position: Point3<f32>, rotation: Vec3<f32>, intensity: f32) -> Self {
        Light::Point(PointLight {
            name,
            position,
            rotation,
            intensity,
        })
    }

    pub fn new_spot(
        name: String,
        position: Point3<f32>,
        rotation: Vec3<f32>,
        intensity: f32,
        cone_angle: f32,
    ) -> Self {
        Light::Spot(SpotLight {
            name,
            position,
            rotation,
            intensity,
            cone_angle,
        })
    }

    pub fn ltype(&self) -> LightType {
        match self {
            Light::Point(_) => LightType::POINT,
            Light::Spot(_) => LightType::SPOT,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Light::Point(l) => &l.name,
            Light::Spot(l) => &l.name,
        }
    }

    pub fn position(&self) -> Point3<f32> {
        match self {
            Light::Point(l) => l.position,
            Light::Spot(l) => l.position,
        }
    }

    /// Euler rotation, in degrees, YXZ order.
    pub fn rotation(&self) -> Vec3<f32> {
        match self {
            Light::Point(l) => l.rotation,
            Light::Spot(l) => l.rotation,
        }
    }

    pub fn intensity(&self) -> f32 {
        match self {
            Light::Point(l) => l.intensity,
            Light::Spot(l) => l.intensity,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PointLight {
    pub name: String,
    pub position: Point3<f32>,
    /// Unused for lighting, but kept so the light can be manipulated by the renderer UI.
    pub rotation: Vec3<f32>,
    pub intensity: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpotLight {
    pub name: String,
    pub position: Point3<f32>,
    pub rotation: Vec3<f32>,
    pub intensity: f32,
    /// Full cone angle, in degrees.
    pub cone_angle: f32,
}

pub(crate) fn convert_light(light: &dyn HostLight, spot_lights: bool) -> Light {
    let position = Point3::from_vec(light.vector3(KNOB_TRANSLATE).unwrap_or_else(Vec3::zero));
    let rotation = light.vector3(KNOB_ROTATE).unwrap_or_else(Vec3::zero);
    let intensity = light.param(KNOB_INTENSITY, 0).unwrap_or(1.0) / INTENSITY_SCALE;
    let ltype = light
        .param(KNOB_LIGHT_TYPE, 0)
        .and_then(LightType::from_host_code)
        .unwrap_or(LightType::POINT);
    let name = light.name().to_string();
    match ltype {
        LightType::SPOT if spot_lights => {
            let cone_angle = light
                .param(KNOB_CONE_ANGLE, 0)
                .unwrap_or(DEFAULT_CONE_ANGLE);
            Light::new_spot(name, position, rotation, intensity, cone_angle)
        }
        _ => {
            if ltype == LightType::SPOT {
                log::debug!("Spot light {} converted as point light", name);
            }
            Light::new_point(name, position, rotation, intensity)
        }
    }
}

mod color;
pub use self::color::ColorRGB;
pub mod transform;
mod mesh;
pub(crate) use self::mesh::{build_geometry, uv_attribute};
pub use self::mesh::{GeometryInstance, Mesh};
mod camera;
pub(crate) use self::camera::convert_camera;
pub use self::camera::{Camera, ProjectionType};
mod light;
pub(crate) use self::light::convert_light;
pub use self::light::{Light, LightType, PointLight, SpotLight, DEFAULT_CONE_ANGLE, INTENSITY_SCALE};

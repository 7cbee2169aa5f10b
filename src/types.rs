use glam::{Mat4, Vec3};

/// Sphere primitive as owned and animated by a scenario
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub position: Vec3,
    pub color: Vec3,
    pub radius: f32,
}

/// Torus primitive. Rotation is stored as Euler angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Torus {
    pub position: Vec3,
    pub rotation: Vec3,
    pub color: Vec3,
    pub inner_radius: f32,
    pub outer_radius: f32,
}

/// Box primitive. `scale` holds the full extents along each axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SdfBox {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
    pub color: Vec3,
}

/// A primitive that contributes a fixed-layout record to the scene uniforms
pub trait Primitive: Clone {
    type Gpu: bytemuck::Pod;

    /// Inert value used to pad packed arrays
    fn dummy() -> Self;

    /// True when the primitive has no geometric extent
    fn is_inert(&self) -> bool;

    fn to_gpu(&self) -> Self::Gpu;
}

impl Primitive for Sphere {
    type Gpu = SphereData;

    fn dummy() -> Self {
        Self {
            position: Vec3::ZERO,
            color: Vec3::ZERO,
            radius: 0.0,
        }
    }

    fn is_inert(&self) -> bool {
        self.radius == 0.0
    }

    fn to_gpu(&self) -> SphereData {
        SphereData {
            position: self.position.to_array(),
            radius: self.radius,
            color: self.color.to_array(),
            _pad: 0.0,
        }
    }
}

impl Primitive for Torus {
    type Gpu = TorusData;

    fn dummy() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            color: Vec3::ZERO,
            inner_radius: 0.0,
            outer_radius: 0.0,
        }
    }

    fn is_inert(&self) -> bool {
        self.inner_radius == 0.0 && self.outer_radius == 0.0
    }

    fn to_gpu(&self) -> TorusData {
        TorusData {
            position: self.position.to_array(),
            inner_radius: self.inner_radius,
            rotation: self.rotation.to_array(),
            outer_radius: self.outer_radius,
            color: self.color.to_array(),
            _pad: 0.0,
        }
    }
}

impl Primitive for SdfBox {
    type Gpu = BoxData;

    fn dummy() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ZERO,
            color: Vec3::ZERO,
        }
    }

    fn is_inert(&self) -> bool {
        self.scale == Vec3::ZERO
    }

    fn to_gpu(&self) -> BoxData {
        BoxData {
            position: self.position.to_array(),
            _pad1: 0.0,
            rotation: self.rotation.to_array(),
            _pad2: 0.0,
            scale: self.scale.to_array(),
            _pad3: 0.0,
            color: self.color.to_array(),
            _pad4: 0.0,
        }
    }
}

// === GPU Data Structures ===
// Layouts follow WGSL uniform rules: vec3 aligns to 16 bytes and array strides are multiples of 16.

/// `SdfSphere` in the fragment shader (32 bytes)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SphereData {
    pub position: [f32; 3],
    pub radius: f32,
    pub color: [f32; 3],
    pub _pad: f32,
}

/// `SdfTorus` in the fragment shader (48 bytes)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TorusData {
    pub position: [f32; 3],
    pub inner_radius: f32,
    pub rotation: [f32; 3],
    pub outer_radius: f32,
    pub color: [f32; 3],
    pub _pad: f32,
}

/// `SdfBox` in the fragment shader (64 bytes)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BoxData {
    pub position: [f32; 3],
    pub _pad1: f32,
    pub rotation: [f32; 3],
    pub _pad2: f32,
    pub scale: [f32; 3],
    pub _pad3: f32,
    pub color: [f32; 3],
    pub _pad4: f32,
}

/// Camera uniform buffer data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub position: [f32; 3],
    pub time: f32,
}

/// Display quad model transform for the vertex stage
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct QuadUniform {
    pub model: [[f32; 4]; 4],
}

impl QuadUniform {
    pub fn from_matrix(model: Mat4) -> Self {
        Self {
            model: model.to_cols_array_2d(),
        }
    }
}

use glam::Vec3;

use crate::packer::{pack, MAX_SDF};
use crate::scenes::SceneContent;
use crate::types::{BoxData, Primitive, SdfBox, Sphere, SphereData, Torus, TorusData};

/// Byte image of the fragment shader's scene uniform block.
///
/// Field order follows WGSL layout rules; the shader names are `uSpheres`, `uToruses`,
/// `uBoxes`, `uBackgroundColor`, `uNumSpheres`, `uNumToruses` and `uNumBoxes`.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniforms {
    pub spheres: [SphereData; MAX_SDF],
    pub toruses: [TorusData; MAX_SDF],
    pub boxes: [BoxData; MAX_SDF],
    pub background_color: [f32; 3],
    pub num_spheres: i32,
    pub num_toruses: i32,
    pub num_boxes: i32,
    pub _pad: [i32; 2],
}

fn pack_records<P: Primitive>(list: &[P]) -> ([P::Gpu; MAX_SDF], i32) {
    let packed = pack(list, &P::dummy(), MAX_SDF);
    let records = std::array::from_fn(|i| packed.entries[i].to_gpu());
    (records, packed.active_count as i32)
}

impl SceneUniforms {
    pub fn from_scene(scene: &SceneContent) -> Self {
        let (spheres, num_spheres) = pack_records::<Sphere>(&scene.spheres);
        let (toruses, num_toruses) = pack_records::<Torus>(&scene.toruses);
        let (boxes, num_boxes) = pack_records::<SdfBox>(&scene.boxes);

        Self {
            spheres,
            toruses,
            boxes,
            background_color: scene.background_color.to_array(),
            num_spheres,
            num_toruses,
            num_boxes,
            _pad: [0; 2],
        }
    }
}

/// Uniform bundle bound to the display quad
#[derive(Clone)]
pub struct SdfMaterial {
    uniforms: Box<SceneUniforms>,
}

impl SdfMaterial {
    pub fn from_scene(scene: &SceneContent) -> Self {
        Self {
            uniforms: Box::new(SceneUniforms::from_scene(scene)),
        }
    }

    /// Re-pack after the owning scenario mutated its primitives
    pub fn refresh(&mut self, scene: &SceneContent) {
        *self.uniforms = SceneUniforms::from_scene(scene);
    }

    pub fn uniforms(&self) -> &SceneUniforms {
        &self.uniforms
    }

    pub fn background_color(&self) -> Vec3 {
        Vec3::from_array(self.uniforms.background_color)
    }

    pub fn active_counts(&self) -> (usize, usize, usize) {
        (
            self.uniforms.num_spheres as usize,
            self.uniforms.num_toruses as usize,
            self.uniforms.num_boxes as usize,
        )
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self.uniforms.as_ref())
    }
}

impl std::fmt::Debug for SdfMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SdfMaterial")
            .field("active_counts", &self.active_counts())
            .field("background_color", &self.background_color())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sphere(y: f32) -> Sphere {
        Sphere {
            position: Vec3::new(0.0, y, 0.0),
            color: Vec3::ONE,
            radius: 1.0,
        }
    }

    #[test]
    fn layout_matches_shader_block() {
        assert_eq!(std::mem::size_of::<SphereData>(), 32);
        assert_eq!(std::mem::size_of::<TorusData>(), 48);
        assert_eq!(std::mem::size_of::<BoxData>(), 64);
        assert_eq!(std::mem::size_of::<SceneUniforms>(), 7232);
        assert_eq!(std::mem::size_of::<SceneUniforms>() % 16, 0);
    }

    #[test]
    fn empty_scene_is_all_inert() {
        let uniforms = SceneUniforms::from_scene(&SceneContent::default());

        assert_eq!(uniforms.num_spheres, 0);
        assert_eq!(uniforms.num_toruses, 0);
        assert_eq!(uniforms.num_boxes, 0);
        assert!(uniforms.spheres.iter().all(|s| s.radius == 0.0));
        assert!(uniforms.boxes.iter().all(|b| b.scale == [0.0; 3]));
        assert!(uniforms
            .toruses
            .iter()
            .all(|t| t.inner_radius == 0.0 && t.outer_radius == 0.0));
    }

    #[test]
    fn counts_are_capped() {
        let scene = SceneContent {
            spheres: (0..70).map(|i| sphere(i as f32)).collect(),
            ..Default::default()
        };
        let material = SdfMaterial::from_scene(&scene);

        assert_eq!(material.active_counts(), (MAX_SDF, 0, 0));
        assert_eq!(material.uniforms().spheres[MAX_SDF - 1].position[1], 49.0);
    }

    #[test]
    fn refresh_tracks_mutation() {
        let mut scene = SceneContent {
            spheres: vec![sphere(0.0)],
            background_color: Vec3::new(0.1, 0.2, 0.3),
            ..Default::default()
        };
        let mut material = SdfMaterial::from_scene(&scene);

        scene.spheres[0].position.y = 4.0;
        material.refresh(&scene);

        assert_eq!(material.uniforms().spheres[0].position[1], 4.0);
        assert_eq!(material.background_color(), Vec3::new(0.1, 0.2, 0.3));
        assert_eq!(material.as_bytes().len(), 7232);
    }
}

//! CPU ray picking against atom spheres
//!
//! The renderer unprojects the pointer into a world-space [`Ray`]; this
//! module casts it against the displayed atom spheres of a molecule and
//! reports the closest hit. Atom positions are taken after the molecule's
//! rotation is applied, so picking agrees with what is on screen.

use lin_alg::f32::Vec3;

use molview_mol::{AtomIndex, Molecule};

/// A picking ray in world space
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Ray origin
    pub origin: Vec3,
    /// Ray direction (normalized)
    pub direction: Vec3,
}

impl Ray {
    /// Create a ray, normalizing the direction
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.to_normalized(),
        }
    }

    /// Point along the ray at parameter `t`
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Intersect with a sphere, returning the nearest non-negative `t`
    pub fn intersect_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        let oc = self.origin - center;
        let b = oc.dot(self.direction);
        let c = oc.magnitude_squared() - radius * radius;
        let discriminant = b * b - c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrt_d = discriminant.sqrt();
        let t_near = -b - sqrt_d;
        if t_near >= 0.0 {
            Some(t_near)
        } else {
            let t_far = -b + sqrt_d;
            (t_far >= 0.0).then_some(t_far)
        }
    }
}

/// A pick hit on an atom
#[derive(Debug, Clone, Copy)]
pub struct PickHit {
    /// Index of the atom that was hit
    pub atom_index: AtomIndex,
    /// World-space position of the hit
    pub position: Vec3,
    /// Ray parameter at the hit
    pub distance: f32,
}

/// Cast a ray against a molecule's atom spheres
///
/// Sphere radii are the display radii scaled by the molecule's view mode, so
/// wireframe mode picks against the smaller spheres it draws. Returns the
/// closest hit, or `None` on a miss.
pub fn pick_atom(molecule: &Molecule, ray: &Ray) -> Option<PickHit> {
    let scale = molecule.view_mode().atom_scale();
    let mut closest: Option<PickHit> = None;
    let mut closest_distance = f32::MAX;

    for (i, atom) in molecule.atoms().iter().enumerate() {
        let index = AtomIndex::from(i);
        let center = molecule
            .world_atom_position(index)
            .unwrap_or(atom.position);
        let radius = atom.display_radius() * scale;

        if let Some(t) = ray.intersect_sphere(center, radius) {
            if t < closest_distance {
                closest = Some(PickHit {
                    atom_index: index,
                    position: ray.at(t),
                    distance: t,
                });
                closest_distance = t;
            }
        }
    }

    closest
}

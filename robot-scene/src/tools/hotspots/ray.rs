use bevy::prelude::*;

/// Ray-sphere intersection. `direction` must be normalised.
///
/// Returns the distance to the nearest intersection in front of the origin,
/// or the exit distance when the origin is inside the sphere.
pub fn ray_sphere_hit_t(origin: Vec3, direction: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let offset = origin - center;
    let b = offset.dot(direction);
    let c = offset.length_squared() - radius * radius;
    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return None;
    }

    let root = discriminant.sqrt();
    let (near, far) = (-b - root, -b + root);
    if far < 0.0 {
        return None;
    }
    Some(if near >= 0.0 { near } else { far })
}

/// Nearest sphere hit along the ray, as `(key, distance)`.
pub fn nearest_sphere_hit<K>(
    origin: Vec3,
    direction: Vec3,
    spheres: impl IntoIterator<Item = (K, Vec3, f32)>,
) -> Option<(K, f32)> {
    spheres
        .into_iter()
        .filter_map(|(key, center, radius)| {
            ray_sphere_hit_t(origin, direction, center, radius).map(|t| (key, t))
        })
        .min_by(|(_, a), (_, b)| a.total_cmp(b))
}

use glam::Vec3;
use ordered_float::OrderedFloat;

/// A picking ray, usually produced by unprojecting the pointer through the
/// active camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    origin: Vec3,
    direction: Vec3,
}

impl Ray {
    /// Builds a ray, normalizing the direction. Returns `None` for a zero or
    /// non-finite direction.
    #[must_use]
    pub fn new(origin: Vec3, direction: Vec3) -> Option<Self> {
        if !origin.is_finite() || !direction.is_finite() {
            return None;
        }
        let direction = direction.try_normalize()?;
        Some(Self { origin, direction })
    }

    #[must_use]
    pub fn origin(self) -> Vec3 {
        self.origin
    }

    #[must_use]
    pub fn direction(self) -> Vec3 {
        self.direction
    }
}

/// An interactive scene object (point marker or card sprite) with a
/// spherical pick bound.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneMarker {
    pub id: String,
    pub position: Vec3,
    pub radius: f32,
}

impl SceneMarker {
    #[must_use]
    pub fn new(id: impl Into<String>, position: Vec3, radius: f32) -> Self {
        Self {
            id: id.into(),
            position,
            radius,
        }
    }
}

/// Casts the ray against every marker and returns the nearest intersection
/// along the ray, or `None` when nothing is hit.
#[must_use]
pub fn pick_nearest<'a>(ray: Ray, markers: &'a [SceneMarker]) -> Option<&'a SceneMarker> {
    markers
        .iter()
        .filter_map(|marker| ray_sphere_distance(ray, marker).map(|t| (OrderedFloat(t), marker)))
        .min_by_key(|(t, _)| *t)
        .map(|(_, marker)| marker)
}

/// Distance along the ray to the sphere's near intersection, if any.
fn ray_sphere_distance(ray: Ray, marker: &SceneMarker) -> Option<f32> {
    let to_center = ray.origin - marker.position;
    let half_b = to_center.dot(ray.direction);
    let c = to_center.length_squared() - marker.radius * marker.radius;
    let discriminant = half_b * half_b - c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrt_d = discriminant.sqrt();
    let near = -half_b - sqrt_d;
    if near >= 0.0 {
        return Some(near);
    }
    let far = -half_b + sqrt_d;
    (far >= 0.0).then_some(far)
}

/// What a hover-target change requires of the renderer, in order: clear the
/// old emphasis first, then apply the new one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HoverChange {
    pub cleared: Option<String>,
    pub emphasized: Option<String>,
}

/// Tracks the currently hovered object across frames.
///
/// Reporting the outgoing target before the incoming one prevents stuck
/// highlights when the pointer jumps between objects within one frame.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HoverTracker {
    current: Option<String>,
}

impl HoverTracker {
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Records the new hover target and reports the emphasis transition.
    ///
    /// Re-hovering the current target is a no-op transition.
    pub fn update(&mut self, hit: Option<&str>) -> HoverChange {
        if self.current.as_deref() == hit {
            return HoverChange::default();
        }

        let cleared = self.current.take();
        self.current = hit.map(str::to_owned);
        HoverChange {
            cleared,
            emphasized: self.current.clone(),
        }
    }
}

use bevy::prelude::*;

use super::particle::Boundary;
use super::store::ParticleStore;
use crate::config::{BALL_RADIUS, BOUNDARY_COLOR, DRAW_Z_STEP, WINDOW_HEIGHT, WINDOW_WIDTH};

/// Receiver of immediate-mode disc draw calls.
pub trait DiscSink {
    fn draw_disc(&mut self, center: Vec2, radius: f32, color: Color);
}

/// One recorded draw call (simulation space).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DiscCommand {
    pub center: Vec2,
    pub radius: f32,
    pub color: Color,
}

/// Draw calls recorded this frame, in issue order.
#[derive(Resource, Default, Debug)]
pub struct DrawList(pub Vec<DiscCommand>);

impl DiscSink for DrawList {
    fn draw_disc(&mut self, center: Vec2, radius: f32, color: Color) {
        self.0.push(DiscCommand {
            center,
            radius,
            color,
        });
    }
}

/// Boundary first, then every live ball in store order.
pub fn draw_frame(store: &ParticleStore, boundary: &Boundary, sink: &mut impl DiscSink) {
    sink.draw_disc(boundary.center, boundary.radius, BOUNDARY_COLOR);
    for p in store.iterate_live() {
        sink.draw_disc(p.position, BALL_RADIUS, p.color);
    }
}

/// Simulation space (top-left origin, +Y down) to Bevy 2D world (center origin, +Y up).
pub fn to_world(p: Vec2) -> Vec2 {
    Vec2::new(
        p.x - WINDOW_WIDTH as f32 / 2.0,
        WINDOW_HEIGHT as f32 / 2.0 - p.y,
    )
}

/// A pooled disc entity; draw call `index` lands here.
#[derive(Component, Debug)]
pub struct DiscSlot {
    pub index: usize,
    /// Color currently held by the slot's material.
    pub color: Color,
}

/// Spawn the camera and one hidden unit-disc entity per possible draw call
/// (the boundary plus every store slot).
pub fn spawn_disc_pool(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    store: Res<ParticleStore>,
) {
    commands.spawn(Camera2d);

    let mesh = meshes.add(Circle::new(1.0));
    for index in 0..=store.capacity() {
        let color = Color::NONE;
        commands.spawn((
            Mesh2d(mesh.clone()),
            MeshMaterial2d(materials.add(color)),
            Transform::default(),
            Visibility::Hidden,
            DiscSlot { index, color },
        ));
    }
}

/// Record this frame's draw calls.
pub fn record_draw_list(
    store: Res<ParticleStore>,
    boundary: Res<Boundary>,
    mut list: ResMut<DrawList>,
) {
    list.0.clear();
    draw_frame(&store, &boundary, &mut *list);
}

/// Apply recorded draw calls to the pooled entities; later calls sit on top.
pub fn apply_draw_list(
    list: Res<DrawList>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut slots: Query<(
        &mut DiscSlot,
        &mut Transform,
        &mut Visibility,
        &MeshMaterial2d<ColorMaterial>,
    )>,
) {
    for (mut slot, mut tf, mut vis, mat) in &mut slots {
        let Some(cmd) = list.0.get(slot.index) else {
            *vis = Visibility::Hidden;
            continue;
        };

        let world = to_world(cmd.center);
        tf.translation = world.extend(slot.index as f32 * DRAW_Z_STEP);
        tf.scale = Vec3::new(cmd.radius, cmd.radius, 1.0);
        *vis = Visibility::Inherited;

        // only touch the asset when the color actually changed
        if slot.color != cmd.color {
            if let Some(mut material) = materials.get_mut(&mat.0) {
                material.color = cmd.color;
            }
            slot.color = cmd.color;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn boundary_is_drawn_before_particles() {
        let mut rng = StdRng::seed_from_u64(42);
        let boundary = Boundary::new(Vec2::new(360.0, 360.0), 360.0);
        let mut store = ParticleStore::new(8, boundary.center, 1000.0, &mut rng);
        store.spawn_until_full(&mut rng);

        let mut list = DrawList::default();
        draw_frame(&store, &boundary, &mut list);

        assert_eq!(list.0.len(), 9);
        assert_eq!(list.0[0].radius, 360.0);
        assert_eq!(list.0[0].color, BOUNDARY_COLOR);
        for (cmd, p) in list.0[1..].iter().zip(store.iterate_live()) {
            assert_eq!(cmd.center, p.position);
            assert_eq!(cmd.color, p.color);
            assert_eq!(cmd.radius, BALL_RADIUS);
        }
    }

    #[test]
    fn stale_slots_are_never_drawn() {
        let mut rng = StdRng::seed_from_u64(5);
        let boundary = Boundary::new(Vec2::new(360.0, 360.0), 360.0);
        let mut store = ParticleStore::new(16, boundary.center, 1000.0, &mut rng);
        store.spawn_until_full(&mut rng);
        store.reset_primary(&mut rng);

        let mut list = DrawList::default();
        draw_frame(&store, &boundary, &mut list);
        assert_eq!(list.0.len(), 2);
    }

    #[test]
    fn world_mapping_flips_y_about_the_center() {
        assert_eq!(to_world(Vec2::new(360.0, 360.0)), Vec2::ZERO);
        assert_eq!(to_world(Vec2::new(360.0, 720.0)), Vec2::new(0.0, -360.0));
        assert_eq!(to_world(Vec2::new(0.0, 0.0)), Vec2::new(-360.0, 360.0));
    }
}

use bevy::prelude::*;
use folio_core::Rgba;
use folio_physics::DrawCommand;
use folio_sim::state::{FieldCanvas, FolioSettings};
use std::collections::HashMap;

use super::camera::page_to_world;

/// Disc entity replaying the n-th circle of the display list
#[derive(Component)]
pub struct ParticleDisc {
    pub index: usize,
}

/// Shared unit-circle mesh and one material per distinct fill colour
#[derive(Resource)]
pub struct DiscAssets {
    mesh: Handle<Mesh>,
    materials: HashMap<[u8; 4], Handle<ColorMaterial>>,
}

/// Particles sit behind everything else
const FIELD_Z: f32 = -10.0;

pub fn init_disc_assets(mut commands: Commands, mut meshes: ResMut<Assets<Mesh>>) {
    commands.insert_resource(DiscAssets {
        mesh: meshes.add(Circle::new(1.0)),
        materials: HashMap::new(),
    });
}

/// Connection strokes are hairlines; gizmo width is global per group
pub fn configure_line_width(settings: Res<FolioSettings>, mut store: ResMut<GizmoConfigStore>) {
    let (config, _) = store.config_mut::<DefaultGizmoConfigGroup>();
    config.line_width = settings.0.field.stroke_width.max(0.1);
}

pub fn to_color(c: Rgba) -> Color {
    let [r, g, b, a] = c.to_f32();
    Color::srgba(r, g, b, a)
}

fn colour_key(c: Rgba) -> [u8; 4] {
    [c.r, c.g, c.b, (c.a.clamp(0.0, 1.0) * 255.0).round() as u8]
}

/// Mirror the display list's circles onto disc entities. Entities are
/// pooled: extra discs are spawned when the population grows and hidden
/// when it shrinks.
pub fn sync_particle_discs(
    mut commands: Commands,
    canvas: Option<Res<FieldCanvas>>,
    mut assets: ResMut<DiscAssets>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut discs: Query<(
        &ParticleDisc,
        &mut Transform,
        &mut Visibility,
        &mut MeshMaterial2d<ColorMaterial>,
    )>,
) {
    let Some(canvas) = canvas else {
        return;
    };
    if !canvas.is_changed() {
        return;
    }
    let list = &canvas.0;
    let circles: Vec<_> = list.circles().collect();

    let mut seen = 0;
    for (disc, mut transform, mut visibility, mut material) in &mut discs {
        seen = seen.max(disc.index + 1);
        let Some(&(center, radius, color)) = circles.get(disc.index) else {
            *visibility = Visibility::Hidden;
            continue;
        };
        let pos = page_to_world(*center, list.size);
        transform.translation = pos.extend(FIELD_Z);
        transform.scale = Vec3::splat(radius);
        *visibility = Visibility::Visible;
        let handle = material_for(&mut assets, &mut materials, *color);
        if material.0 != handle {
            material.0 = handle;
        }
    }

    for (index, &(center, radius, color)) in circles.iter().enumerate().skip(seen) {
        let handle = material_for(&mut assets, &mut materials, *color);
        commands.spawn((
            Mesh2d(assets.mesh.clone()),
            MeshMaterial2d(handle),
            Transform::from_translation(page_to_world(*center, list.size).extend(FIELD_Z))
                .with_scale(Vec3::splat(radius)),
            ParticleDisc { index },
        ));
    }
}

fn material_for(
    assets: &mut DiscAssets,
    materials: &mut Assets<ColorMaterial>,
    color: Rgba,
) -> Handle<ColorMaterial> {
    assets
        .materials
        .entry(colour_key(color))
        .or_insert_with(|| materials.add(ColorMaterial::from(to_color(color))))
        .clone()
}

/// Replay the display list's lines as immediate-mode gizmos
pub fn draw_connections(canvas: Option<Res<FieldCanvas>>, mut gizmos: Gizmos) {
    let Some(canvas) = canvas else {
        return;
    };
    let size = canvas.0.size;
    for command in &canvas.0.commands {
        if let DrawCommand::Line { from, to, color, .. } = command {
            gizmos.line_2d(page_to_world(*from, size), page_to_world(*to, size), to_color(*color));
        }
    }
}

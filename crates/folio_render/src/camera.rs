use bevy::prelude::*;
use folio_core::Viewport;

/// Marker for the page camera
#[derive(Component)]
pub struct PageCamera;

pub fn spawn_camera(mut commands: Commands) {
    commands.spawn((Camera2d, PageCamera));
}

/// Page coordinates (origin top-left, y down) to world space for a
/// 2-D camera centred on the window (origin centre, y up)
pub fn page_to_world(point: [f32; 2], viewport: Viewport) -> Vec2 {
    Vec2::new(
        point[0] - viewport.width_f32() * 0.5,
        viewport.height_f32() * 0.5 - point[1],
    )
}

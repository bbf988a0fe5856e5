use bevy::prelude::*;
use bevy::window::{CursorMoved, PrimaryWindow};
use folio_core::Rgba;
use folio_physics::glow::CursorGlow;
use folio_physics::parallax::card_offset;
use folio_sim::state::{FolioSettings, window_viewport};

use super::camera::page_to_world;
use super::particles::to_color;

#[derive(Resource, Default)]
pub struct Pointer {
    /// Last cursor position in page coordinates
    pub position: [f32; 2],
    pub glow: CursorGlow,
}

#[derive(Component)]
pub struct GlowSprite;

/// Decorative card that drifts against the pointer
#[derive(Component)]
pub struct FloatCard {
    pub index: usize,
    /// Rest position in page coordinates
    pub anchor: [f32; 2],
}

const GLOW_Z: f32 = -5.0;
const CARD_Z: f32 = -2.0;
const CARD_COUNT: usize = 3;

pub fn spawn_pointer_visuals(mut commands: Commands, settings: Res<FolioSettings>) {
    commands.insert_resource(Pointer {
        position: [0.0, 0.0],
        glow: CursorGlow::new(settings.0.glow.easing),
    });

    commands.spawn((
        Sprite {
            color: to_color(Rgba::ACCENT.with_alpha(0.08)),
            custom_size: Some(Vec2::splat(300.0)),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, GLOW_Z),
        GlowSprite,
    ));

    let tints = [
        Rgba::ACCENT.with_alpha(0.25),
        Rgba::new(99, 102, 241, 0.25),
        Rgba::new(236, 72, 153, 0.25),
    ];
    for (index, tint) in tints.into_iter().enumerate().take(CARD_COUNT) {
        commands.spawn((
            Sprite {
                color: to_color(tint),
                custom_size: Some(Vec2::new(140.0, 90.0)),
                ..default()
            },
            Transform::from_xyz(0.0, 0.0, CARD_Z),
            FloatCard {
                index,
                anchor: [0.0, 0.0],
            },
        ));
    }
}

pub fn track_cursor(mut events: EventReader<CursorMoved>, mut pointer: ResMut<Pointer>) {
    if let Some(last) = events.read().last() {
        let p = [last.position.x, last.position.y];
        pointer.position = p;
        pointer.glow.set_target(p);
    }
}

/// Ease the glow one step per frame and place it under the pointer
pub fn animate_glow(
    mut pointer: ResMut<Pointer>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut sprite: Query<&mut Transform, With<GlowSprite>>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Ok(mut transform) = sprite.get_single_mut() else {
        return;
    };
    let pos = pointer.glow.step();
    transform.translation = page_to_world(pos, window_viewport(window)).extend(GLOW_Z);
}

/// Lay the cards out along the right edge of the hero, offset by parallax
pub fn animate_cards(
    pointer: Res<Pointer>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut cards: Query<(&mut FloatCard, &mut Transform)>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let viewport = window_viewport(window);
    for (mut card, mut transform) in &mut cards {
        card.anchor = [
            viewport.width_f32() * 0.78,
            viewport.height_f32() * (0.3 + 0.2 * card.index as f32),
        ];
        let offset = card_offset(card.index, pointer.position, viewport);
        let page = [card.anchor[0] + offset.x, card.anchor[1] + offset.y];
        transform.translation = page_to_world(page, viewport).extend(CARD_Z);
        // CSS rotates clockwise for positive degrees, world space is y-up
        transform.rotation = Quat::from_rotation_z(-offset.rotation.to_radians());
    }
}

use bevy::prelude::*;
use folio_sim::pipeline::FieldStep;

use super::camera;
use super::hud;
use super::page;
use super::particles;
use super::pointer;

/// Draws the particle field and drives the portfolio page on top of it
pub struct FolioRenderPlugin;

impl Plugin for FolioRenderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<hud::HudThrottle>()
            .add_systems(
                Startup,
                (
                    camera::spawn_camera,
                    particles::init_disc_assets,
                    particles::configure_line_width,
                    pointer::spawn_pointer_visuals,
                    page::init_page,
                    hud::spawn_hud,
                ),
            )
            .add_systems(
                Update,
                (
                    particles::sync_particle_discs,
                    particles::draw_connections,
                    pointer::track_cursor,
                    pointer::animate_glow.after(pointer::track_cursor),
                    pointer::animate_cards.after(pointer::track_cursor),
                )
                    .after(FieldStep),
            )
            .add_systems(
                Update,
                (
                    page::page_resize,
                    page::menu_keys,
                    page::scroll_input.after(page::menu_keys),
                    page::update_page_state
                        .after(page::scroll_input)
                        .after(page::page_resize),
                    page::field_keys.before(FieldStep),
                    page::contact_keys,
                    page::poll_contact.after(page::contact_keys),
                    hud::update_page_hud.after(page::update_page_state),
                    hud::update_status_panel.after(page::update_page_state),
                ),
            );
    }
}

use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};
use folio_core::Viewport;
use folio_physics::ParticleField;

use super::animation::{FieldAnimation, FrameOutcome};
use super::state::{FieldCanvas, FieldRng, FolioSettings, FrameRequests, Headline, window_viewport};

/// Bevy plugin for the particle field loop and the headline typewriter
pub struct SimulationPlugin;

/// Systems that advance the field; renderers order themselves after it
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldStep;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FolioSettings>()
            .init_resource::<FieldCanvas>()
            .init_resource::<FrameRequests>()
            .add_systems(Startup, (start_field, init_headline))
            .add_systems(
                Update,
                (
                    resize_field,
                    field_frame.after(resize_field).run_if(frame_requested),
                    headline_tick,
                )
                    .in_set(FieldStep),
            );
    }
}

fn frame_requested(requests: Res<FrameRequests>) -> bool {
    requests.0.pending() > 0
}

/// Build the field for the primary window and request its first frame.
/// Without a window there is nothing to draw on and the loop never starts.
fn start_field(
    mut commands: Commands,
    settings: Res<FolioSettings>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut canvas: ResMut<FieldCanvas>,
    mut requests: ResMut<FrameRequests>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let viewport = window_viewport(window);
    let config = settings.0.field.clone();
    let mut rng = FieldRng::from_seed(config.seed);

    let mut anim = FieldAnimation::new(ParticleField::new(config.clone(), viewport));
    anim.reinitialize(config.particle_count, &mut rng.0);
    anim.start(Some(&mut canvas.0), &mut *requests);

    commands.insert_resource(anim);
    commands.insert_resource(rng);
}

fn init_headline(mut commands: Commands, settings: Res<FolioSettings>) {
    commands.insert_resource(Headline::from_config(&settings.0));
}

/// Track the primary window size; the last event of a frame wins
fn resize_field(
    mut events: EventReader<WindowResized>,
    primary: Query<Entity, With<PrimaryWindow>>,
    anim: Option<ResMut<FieldAnimation>>,
    canvas: Option<ResMut<FieldCanvas>>,
) {
    let Ok(primary) = primary.get_single() else {
        events.clear();
        return;
    };
    let Some(last) = events.read().filter(|e| e.window == primary).last() else {
        return;
    };
    let Some(mut anim) = anim else {
        return;
    };
    let viewport = Viewport::new(last.width.max(0.0) as u32, last.height.max(0.0) as u32);
    if viewport == anim.field().viewport() {
        return;
    }
    anim.resize(viewport, canvas.map(|c| &mut c.into_inner().0));
}

/// One scheduled frame of the field
fn field_frame(
    anim: Option<ResMut<FieldAnimation>>,
    canvas: Option<ResMut<FieldCanvas>>,
    mut requests: ResMut<FrameRequests>,
) {
    if !requests.0.take() {
        return;
    }
    let Some(mut anim) = anim else {
        return;
    };
    let outcome = anim.on_frame(canvas.map(|c| &mut c.into_inner().0), &mut *requests);
    if outcome == FrameOutcome::SurfaceLost {
        debug!("Field canvas gone; animation loop ended");
    }
}

fn headline_tick(time: Res<Time>, headline: Option<ResMut<Headline>>) {
    if let Some(mut headline) = headline {
        headline.0.advance(time.delta());
    }
}

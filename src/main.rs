use bevy::prelude::*;
use folio_core::FolioConfig;
use folio_render::plugin::FolioRenderPlugin;
use folio_sim::pipeline::SimulationPlugin;
use folio_sim::state::FolioSettings;
use std::path::PathBuf;

/// Config file read when `FOLIO_CONFIG` is not set
const DEFAULT_CONFIG: &str = "folio.json";

/// A missing file means defaults
fn load_config() -> Result<Option<(FolioConfig, PathBuf)>, String> {
    let path = std::env::var_os("FOLIO_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG));
    if !path.exists() {
        return Ok(None);
    }
    let config = FolioConfig::load(&path)?;
    Ok(Some((config, path)))
}

fn main() {
    // Logging only starts with the app, so the outcome is reported from a
    // startup system
    let loaded = load_config();
    let config = match &loaded {
        Ok(Some((config, _))) => config.clone(),
        _ => FolioConfig::default(),
    };

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Portfolio".into(),
                resolution: (1440.0, 900.0).into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::srgb(0.04, 0.05, 0.09)))
        .insert_resource(FolioSettings(config))
        .add_plugins(SimulationPlugin)
        .add_plugins(FolioRenderPlugin)
        .add_systems(Startup, move || match &loaded {
            Ok(Some((_, path))) => info!("Loaded config from {}", path.display()),
            Ok(None) => debug!("No config file, using defaults"),
            Err(err) => error!("{err}; using defaults"),
        })
        .run();
}

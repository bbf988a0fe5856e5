use bevy::input::mouse::{AccumulatedMouseScroll, MouseScrollUnit};
use bevy::prelude::*;
use bevy::tasks::{AsyncComputeTaskPool, Task, block_on, poll_once};
use bevy::window::{PrimaryWindow, WindowResized};
use folio_core::{RevealConfig, Section};
use folio_page::contact::{DryRunRelay, EmailRelay, RelayError, RelayReceipt};
use folio_page::scroll::anchor_target;
use folio_page::{ContactForm, NavState, RevealObserver, SmoothScroll};
use folio_sim::FieldAnimation;
use folio_sim::state::{FieldCanvas, FieldRng, FolioSettings, FrameRequests};
use std::sync::Arc;

/// The portfolio's sections stacked top to bottom, plus their reveal state
#[derive(Resource)]
pub struct PageLayout {
    pub sections: Vec<Section>,
    pub reveal: RevealObserver,
    /// Reveal handle per section, same order as `sections`
    pub handles: Vec<usize>,
}

impl PageLayout {
    /// (id, height, animated children)
    const SECTIONS: [(&'static str, f32, usize); 5] = [
        ("home", 900.0, 0),
        ("about", 700.0, 3),
        ("projects", 1100.0, 6),
        ("skills", 800.0, 8),
        ("contact", 700.0, 2),
    ];

    pub fn standard(config: RevealConfig) -> Self {
        let mut reveal = RevealObserver::new(config);
        let mut sections = Vec::new();
        let mut handles = Vec::new();
        let mut top = 0.0;
        for (id, height, children) in Self::SECTIONS {
            let section = Section::new(id, top, height);
            handles.push(reveal.observe(section.clone(), children));
            sections.push(section);
            top += height;
        }
        Self {
            sections,
            reveal,
            handles,
        }
    }

    pub fn document_height(&self) -> f32 {
        self.sections.last().map_or(0.0, |s| s.bottom())
    }
}

/// Virtual scroll position of the page
#[derive(Resource, Default)]
pub struct PageScroll {
    pub smooth: SmoothScroll,
    pub viewport_height: f32,
}

impl PageScroll {
    pub fn max_scroll(&self, layout: &PageLayout) -> f32 {
        (layout.document_height() - self.viewport_height).max(0.0)
    }
}

/// Relay used for contact submissions
#[derive(Resource, Clone)]
pub struct RelayHandle(pub Arc<dyn EmailRelay>);

#[derive(Resource)]
pub struct ContactTask(Task<Result<RelayReceipt, RelayError>>);

/// Pixels per wheel line
const LINE_HEIGHT: f32 = 40.0;

pub fn init_page(
    mut commands: Commands,
    settings: Res<FolioSettings>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    let config = &settings.0;
    let viewport_height = windows
        .get_single()
        .map(|w| w.resolution.height())
        .unwrap_or(0.0);

    commands.insert_resource(NavState::new(config.nav.clone()));
    commands.insert_resource(PageLayout::standard(config.reveal.clone()));
    commands.insert_resource(PageScroll {
        smooth: SmoothScroll::default(),
        viewport_height,
    });
    commands.insert_resource(ContactForm::new(config.contact.clone()));
    commands.insert_resource(RelayHandle(Arc::new(DryRunRelay)));
}

/// Wheel scrolling, section shortcuts [1-5] and [Home] back to top
pub fn scroll_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    wheel: Res<AccumulatedMouseScroll>,
    settings: Res<FolioSettings>,
    layout: Res<PageLayout>,
    mut nav: ResMut<NavState>,
    mut scroll: ResMut<PageScroll>,
) {
    let max = scroll.max_scroll(&layout);

    if wheel.delta.y != 0.0 && !nav.body_scroll_locked {
        let step = match wheel.unit {
            MouseScrollUnit::Line => wheel.delta.y * LINE_HEIGHT,
            MouseScrollUnit::Pixel => wheel.delta.y,
        };
        let position = (scroll.smooth.position - step).clamp(0.0, max);
        scroll.smooth.jump(position);
    }

    let shortcuts = [
        KeyCode::Digit1,
        KeyCode::Digit2,
        KeyCode::Digit3,
        KeyCode::Digit4,
        KeyCode::Digit5,
    ];
    for (key, section) in shortcuts.iter().zip(&layout.sections) {
        if keyboard.just_pressed(*key) {
            let href = format!("#{}", section.id);
            if let Some(target) = anchor_target(&href, &layout.sections, settings.0.nav.anchor_offset)
            {
                scroll.smooth.scroll_to(target.min(max));
            }
            nav.on_link_click();
        }
    }

    if keyboard.just_pressed(KeyCode::Home) {
        scroll.smooth.to_top();
    }

    let position = scroll.smooth.step();
    if position > max {
        scroll.smooth.jump(max);
    }
}

/// [M] toggles the mobile menu, [Esc] closes it
pub fn menu_keys(keyboard: Res<ButtonInput<KeyCode>>, mut nav: ResMut<NavState>) {
    if keyboard.just_pressed(KeyCode::KeyM) {
        nav.toggle_menu();
    }
    if keyboard.just_pressed(KeyCode::Escape) {
        nav.on_escape();
    }
}

/// Same primary-window filter as the field's resize handling
pub fn page_resize(
    mut events: EventReader<WindowResized>,
    primary: Query<Entity, With<PrimaryWindow>>,
    time: Res<Time>,
    mut nav: ResMut<NavState>,
    mut scroll: ResMut<PageScroll>,
) {
    let Ok(primary) = primary.get_single() else {
        events.clear();
        return;
    };
    if let Some(last) = events.read().filter(|e| e.window == primary).last() {
        nav.on_resize(last.width, time.elapsed());
        scroll.viewport_height = last.height;
    }
}

/// Navbar state, reveal observer and pending timers
pub fn update_page_state(
    time: Res<Time>,
    scroll: Res<PageScroll>,
    mut layout: ResMut<PageLayout>,
    mut nav: ResMut<NavState>,
    mut form: ResMut<ContactForm>,
) {
    let now = time.elapsed();
    let y = scroll.smooth.position;

    nav.on_scroll(y, &layout.sections);
    if nav.poll(now) {
        info!("Menu closed after resize past breakpoint");
    }

    let layout = &mut *layout;
    for handle in layout.reveal.update(y, scroll.viewport_height, now) {
        if let Some(bounds) = layout.reveal.bounds(handle) {
            debug!("Revealed section {}", bounds.id);
        }
    }
    layout.reveal.poll(now);

    form.poll(now);
}

/// [Space] stops or restarts the background, [R] scatters a new field
pub fn field_keys(
    keyboard: Res<ButtonInput<KeyCode>>,
    settings: Res<FolioSettings>,
    anim: Option<ResMut<FieldAnimation>>,
    rng: Option<ResMut<FieldRng>>,
    mut canvas: ResMut<FieldCanvas>,
    mut requests: ResMut<FrameRequests>,
) {
    let Some(mut anim) = anim else {
        return;
    };

    if keyboard.just_pressed(KeyCode::Space) {
        if anim.is_running() {
            anim.stop();
        } else {
            anim.restart(Some(&mut canvas.0), &mut *requests);
        }
    }

    if keyboard.just_pressed(KeyCode::KeyR) {
        if let Some(mut rng) = rng {
            anim.reinitialize(settings.0.field.particle_count, &mut rng.0);
        }
    }
}

/// [C] submits a sample message through the relay on a background task
pub fn contact_keys(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    relay: Res<RelayHandle>,
    task: Option<Res<ContactTask>>,
    mut form: ResMut<ContactForm>,
) {
    if !keyboard.just_pressed(KeyCode::KeyC) || task.is_some() {
        return;
    }

    if form.name.is_empty() {
        form.name = "Visitor".into();
        form.email = "visitor@example.com".into();
        form.subject = "Hello from the portfolio".into();
        form.message = "Loved the particle background!".into();
    }

    let Some(params) = form.prepare() else {
        return;
    };
    let relay = relay.0.clone();
    let service = form.config().service_id.clone();
    let template = form.config().template_id.clone();
    let pool = AsyncComputeTaskPool::get();
    let task = pool.spawn(async move { relay.send(&service, &template, &params) });
    commands.insert_resource(ContactTask(task));
}

pub fn poll_contact(
    mut commands: Commands,
    time: Res<Time>,
    task: Option<ResMut<ContactTask>>,
    mut form: ResMut<ContactForm>,
) {
    let Some(mut task) = task else { return };

    let Some(result) = block_on(poll_once(&mut task.0)) else {
        return;
    };

    form.finish(result, time.elapsed());
    commands.remove_resource::<ContactTask>();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_layout_is_contiguous() {
        let layout = PageLayout::standard(RevealConfig::default());
        assert_eq!(layout.sections.len(), 5);
        for pair in layout.sections.windows(2) {
            assert_eq!(pair[0].bottom(), pair[1].top);
        }
        assert_eq!(layout.document_height(), 4200.0);
    }

    #[test]
    fn test_max_scroll() {
        let layout = PageLayout::standard(RevealConfig::default());
        let scroll = PageScroll {
            viewport_height: 1000.0,
            ..default()
        };
        assert_eq!(scroll.max_scroll(&layout), 3200.0);
        let tall = PageScroll {
            viewport_height: 9000.0,
            ..default()
        };
        assert_eq!(tall.max_scroll(&layout), 0.0);
    }

    #[test]
    fn test_resize_only_follows_primary_window() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_event::<WindowResized>()
            .init_resource::<NavState>()
            .init_resource::<PageScroll>()
            .add_systems(Update, page_resize);

        let primary = app.world_mut().spawn((Window::default(), PrimaryWindow)).id();
        let other = app.world_mut().spawn(Window::default()).id();
        app.world_mut().send_event(WindowResized {
            window: primary,
            width: 1200.0,
            height: 700.0,
        });
        app.world_mut().send_event(WindowResized {
            window: other,
            width: 400.0,
            height: 300.0,
        });
        app.update();

        assert_eq!(app.world().resource::<PageScroll>().viewport_height, 700.0);
    }
}

use bevy::prelude::*;
use folio_page::contact::StatusKind;
use folio_page::scroll::{back_to_top_visible, scroll_progress};
use folio_page::{ContactForm, NavState};
use folio_sim::FieldAnimation;
use folio_sim::state::{FolioSettings, Headline};

use super::page::{PageLayout, PageScroll};

/// Navbar line: links, active section, menu state
#[derive(Component)]
pub struct NavText;

/// Rotating headline under the hero title
#[derive(Component)]
pub struct HeadlineText;

/// Fill of the scroll progress bar
#[derive(Component)]
pub struct ProgressFill;

#[derive(Component)]
pub struct BackToTop;

/// Bottom-left panel: section reveals, contact form and field stats
#[derive(Component)]
pub struct StatusPanel;

const ACCENT: Color = Color::srgba(0.0, 0.83, 1.0, 0.95);
const DIM: Color = Color::srgba(0.8, 0.85, 0.9, 0.85);

pub fn spawn_hud(mut commands: Commands) {
    // Progress bar along the top edge
    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(0.0),
            left: Val::Px(0.0),
            width: Val::Percent(0.0),
            height: Val::Px(3.0),
            ..default()
        },
        BackgroundColor(ACCENT),
        ProgressFill,
    ));

    commands.spawn((
        Text::new(""),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(DIM),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(12.0),
            left: Val::Px(16.0),
            ..default()
        },
        NavText,
    ));

    commands.spawn((
        Text::new(""),
        TextFont {
            font_size: 32.0,
            ..default()
        },
        TextColor(ACCENT),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Percent(40.0),
            left: Val::Px(48.0),
            ..default()
        },
        HeadlineText,
    ));

    commands.spawn((
        Text::new("^ Top [Home]"),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(ACCENT),
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(16.0),
            right: Val::Px(16.0),
            ..default()
        },
        Visibility::Hidden,
        BackToTop,
    ));

    commands.spawn((
        Text::new(""),
        TextFont {
            font_size: 13.0,
            ..default()
        },
        TextColor(DIM),
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(16.0),
            left: Val::Px(16.0),
            max_width: Val::Px(520.0),
            ..default()
        },
        StatusPanel,
    ));
}

/// HUD frame counter for throttling
#[derive(Resource, Default)]
pub struct HudThrottle {
    pub frame: u32,
}

fn nav_line(nav: &NavState, layout: &PageLayout) -> String {
    let links: Vec<String> = layout
        .sections
        .iter()
        .enumerate()
        .map(|(i, s)| {
            if nav.link_is_active(&format!("#{}", s.id)) {
                format!("[{}:{}]", i + 1, s.id.to_uppercase())
            } else {
                format!(" {}:{} ", i + 1, s.id)
            }
        })
        .collect();
    let style = if nav.scrolled { "compact" } else { "full" };
    let menu = if nav.menu_open { "open" } else { "closed" };
    format!("{}   | navbar {} | menu {} [M]", links.join(" "), style, menu)
}

/// Scroll-driven pieces update every frame
pub fn update_page_hud(
    nav: Res<NavState>,
    layout: Res<PageLayout>,
    scroll: Res<PageScroll>,
    settings: Res<FolioSettings>,
    headline: Option<Res<Headline>>,
    mut nav_query: Query<&mut Text, (With<NavText>, Without<HeadlineText>)>,
    mut headline_query: Query<&mut Text, (With<HeadlineText>, Without<NavText>)>,
    mut fill_query: Query<&mut Node, With<ProgressFill>>,
    mut top_query: Query<&mut Visibility, With<BackToTop>>,
) {
    let y = scroll.smooth.position;

    if let Ok(mut text) = nav_query.get_single_mut() {
        **text = nav_line(&nav, &layout);
    }
    if let (Ok(mut text), Some(headline)) = (headline_query.get_single_mut(), headline) {
        let line = format!("{}|", headline.0.text());
        if text.as_str() != line {
            **text = line;
        }
    }
    if let Ok(mut node) = fill_query.get_single_mut() {
        let progress = scroll_progress(y, layout.document_height(), scroll.viewport_height);
        node.width = Val::Percent(progress);
    }
    if let Ok(mut visibility) = top_query.get_single_mut() {
        *visibility = if back_to_top_visible(y, settings.0.nav.back_to_top_threshold) {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }
}

/// Update the status panel every 10th frame
pub fn update_status_panel(
    layout: Res<PageLayout>,
    form: Res<ContactForm>,
    anim: Option<Res<FieldAnimation>>,
    mut throttle: ResMut<HudThrottle>,
    mut panel_query: Query<&mut Text, With<StatusPanel>>,
) {
    throttle.frame = throttle.frame.wrapping_add(1);
    if throttle.frame % 10 != 0 {
        return;
    }
    let Ok(mut text) = panel_query.get_single_mut() else {
        return;
    };

    let mut lines = Vec::new();

    let reveals: Vec<String> = layout
        .sections
        .iter()
        .zip(&layout.handles)
        .map(|(section, &handle)| {
            let mark = if layout.reveal.is_revealed(handle) { "+" } else { "." };
            format!("{}{}", mark, section.id)
        })
        .collect();
    lines.push(format!("Sections: {}", reveals.join(" ")));

    let status = match form.status() {
        Some(status) if status.visible => match status.kind {
            StatusKind::Success => format!(" | {}", status.message),
            StatusKind::Error => format!(" | ! {}", status.message),
        },
        _ => String::new(),
    };
    lines.push(format!("Contact: ({}) [C]{}", form.button_label(), status));

    if let Some(anim) = anim {
        let stats = anim.last_stats();
        let state = if anim.is_running() { "" } else { " [STOPPED]" };
        lines.push(format!(
            "Field: {} particles | {} links | {} bounces | frame {}{}",
            anim.field().len(),
            stats.connections,
            stats.bounces,
            anim.frames(),
            state,
        ));
    }
    lines.push("[Wheel] Scroll  [1-5] Sections  [Space] Stop/Start  [R] Rescatter".into());

    **text = lines.join("\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::RevealConfig;

    #[test]
    fn test_nav_line_marks_active_section() {
        let layout = PageLayout::standard(RevealConfig::default());
        let mut nav = NavState::default();
        nav.on_scroll(1_700.0, &layout.sections);

        let line = nav_line(&nav, &layout);
        assert!(line.contains("[3:PROJECTS]"));
        assert!(line.contains(" 2:about "));
        assert!(line.contains("navbar compact"));
        assert!(line.contains("menu closed"));
    }

    #[test]
    fn test_nav_line_at_top() {
        let layout = PageLayout::standard(RevealConfig::default());
        let mut nav = NavState::default();
        nav.on_scroll(0.0, &layout.sections);
        nav.toggle_menu();

        let line = nav_line(&nav, &layout);
        assert!(line.contains("[1:HOME]"));
        assert!(line.contains("navbar full"));
        assert!(line.contains("menu open"));
    }
}

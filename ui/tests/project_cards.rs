#![cfg(feature = "web")]

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use ui::components::project_card::ProjectGrid;
use ui::profile::{PROFILE, ProjectEntry};

fn entry(title: &str, note: Option<&str>) -> ProjectEntry {
    ProjectEntry {
        title: title.to_owned(),
        description: format!("{title} description"),
        image: format!("./assets/{}.png", title.to_lowercase()),
        link: "#".to_owned(),
        note: note.map(String::from),
    }
}

fn render(entries: Vec<ProjectEntry>) -> String {
    Owner::new().with(|| view! { <ProjectGrid entries/> }.to_html())
}

#[test]
fn cards_render_in_registry_order_with_labels() {
    let entries = vec![
        entry("Alpha", Some("(Coming Soon)")),
        entry("Bravo", None),
        entry("Charlie", None),
        entry("Delta", Some("(Beta)")),
    ];
    let html = render(entries);

    let at = |needle: &str| html.find(needle).unwrap_or_else(|| panic!("{needle} missing in {html}"));
    let positions: Vec<_> = ["Alpha", "Bravo", "Charlie", "Delta"].iter().map(|t| at(t)).collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "cards out of order: {positions:?}");

    assert_eq!(html.matches("<article").count(), 4);
    assert_eq!(html.matches("View App").count(), 4);
    assert!(at("View App (Coming Soon)") < at("Bravo"));
    assert!(at("View App (Beta)") > at("Delta"));
}

#[test]
fn embedded_registry_has_four_cards_with_one_note() {
    let labels: Vec<_> = PROFILE.projects.iter().map(ProjectEntry::cta_label).collect();
    assert_eq!(labels, ["View App (Coming Soon)", "View App", "View App", "View App"]);
}

#[test]
fn empty_registry_renders_empty_grid() {
    let html = render(Vec::new());
    assert!(!html.contains("<article"));
}

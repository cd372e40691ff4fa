#![cfg(feature = "web")]

use any_spawner::Executor;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use ui::components::nav_bar::NavBar;
use ui::components::progress_bar::ScrollProgressBar;
use ui::nav::NavAnchor;
use ui::pages::portfolio::Portfolio;

const NEW_CONTEXT: &str = r#"target="_blank" rel="noopener noreferrer""#;

fn portfolio_html() -> String {
    // the hero typewriter spawns its timer task while rendering
    let _ = Executor::init_futures_executor();
    Owner::new().with(|| view! { <Portfolio/> }.to_html())
}

#[test]
fn nav_bar_has_one_control_per_anchor_in_order() {
    let html = Owner::new().with(|| view! { <NavBar name="Ashley Glenn"/> }.to_html());

    let positions: Vec<_> = NavAnchor::ALL
        .iter()
        .map(|a| {
            let href = format!(r##"href="#{}""##, a.target_id());
            assert_eq!(html.matches(&href).count(), 1, "{href} in {html}");
            html.find(&href).unwrap()
        })
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert!(html.contains("position:fixed"));
}

#[test]
fn portfolio_renders_every_section_anchor() {
    let html = portfolio_html();

    assert!(html.contains(r#"id="hero""#));
    for anchor in NavAnchor::ALL {
        let id = format!(r#"id="{}""#, anchor.target_id());
        assert_eq!(html.matches(&id).count(), 1, "{id} missing or duplicated");
    }
}

#[test]
fn portfolio_outbound_links_open_in_new_context() {
    let html = portfolio_html();

    assert!(html.contains(r#"href="mailto:arglenn023@gmail.com""#));
    // four project buttons, two resumes, two profiles
    assert_eq!(html.matches(NEW_CONTEXT).count(), 8);
    assert!(html.contains(r#"href="https://github.com/ashleyglenn0""#));
    assert!(html.contains(r#"href="/resumes/cloud-engineer.pdf""#));
    assert!(!html.contains("devicon-google"));
}

#[test]
fn hero_words_are_spoken_once_not_per_keystroke() {
    let html = portfolio_html();

    assert!(html.contains("Software Engineer, Tech Leader, Community Builder"));
    assert!(!html.contains("aria-live"));
}

#[test]
fn progress_bar_is_visible_without_stylesheet() {
    let html = Owner::new().with(|| {
        let progress = RwSignal::new(42.0);
        view! { <ScrollProgressBar progress=progress.read_only()/> }.to_html()
    });

    for prop in ["position:fixed", "top:0", "height:4px", "background:#1E3A8A", "z-index:2000", "width:42.00%"] {
        assert!(html.contains(prop), "{prop} missing in {html}");
    }
    assert!(html.contains(r#"aria-valuenow="42""#));
}

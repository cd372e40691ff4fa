use leptos::prelude::*;

use crate::components::cycling_text::CyclingText;
use crate::components::nav_bar::NavLink;
use crate::components::project_card::ProjectGrid;
use crate::components::section::Section;
use crate::nav::NavAnchor;
use crate::profile::{PROFILE, Profile};

#[component]
fn Hero(profile: &'static Profile) -> impl IntoView {
    view! {
        <section
            id="hero"
            class="min-h-[90vh] mt-16 flex flex-col justify-center items-center text-center px-4 text-white bg-gradient-to-br from-primary to-blue-500"
        >
            <h1 class="text-5xl sm:text-6xl font-display mb-4 animate-fade-in">{ profile.greeting.clone() }</h1>
            <p class="text-2xl mb-8 h-8">
                <CyclingText words=profile.roles.clone() config=profile.typewriter.clone()/>
            </p>
            <NavLink
                anchor=NavAnchor::Projects
                class="inline-block bg-accent text-white px-8 py-4 rounded-full uppercase font-medium hover:brightness-110 animate-pulse"
            >"View Projects"</NavLink>
        </section>
    }
}

#[component]
fn ResumeList(profile: &'static Profile) -> impl IntoView {
    view! {
        <ul class="list-disc pl-6 space-y-1">
            { profile.resumes.iter().map(|r| view! {
                <li>
                    <a href=r.href.clone() target="_blank" rel="noopener noreferrer" class="underline hover:text-primary">
                        { r.label.clone() }
                    </a>
                </li>
            }).collect_view() }
        </ul>
    }
}

#[component]
fn ContactLinks(profile: &'static Profile) -> impl IntoView {
    let contact = &profile.contact;

    view! {
        <div class="flex flex-col gap-4">
            <a href=contact.mailto() class="flex items-center gap-2 hover:text-primary">
                <span aria-hidden="true">"✉"</span>
                { contact.email.clone() }
            </a>
            { contact.links.iter().map(|l| view! {
                <a
                    href=l.url.clone()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="flex items-center gap-2 hover:text-primary"
                >
                    { l.icon.as_ref().map(|ic| view! {
                        <i class=format!("devicon-{ic}-plain") aria-hidden="true"></i>
                    }) }
                    { l.label.clone() }
                </a>
            }).collect_view() }
        </div>
    }
}

#[component]
pub fn Portfolio() -> impl IntoView {
    let profile: &'static Profile = &PROFILE;

    view! {
        <Hero profile/>

        <div class="max-w-6xl mx-auto px-6">
            <Section anchor=NavAnchor::About title="About Me" class="py-16">
                <p class="text-lg leading-relaxed">{ profile.about.clone() }</p>
            </Section>
        </div>

        <div class="bg-slate-200">
            <div class="max-w-6xl mx-auto px-6">
                <Section anchor=NavAnchor::Projects title="Projects" class="py-16">
                    <ProjectGrid entries=profile.projects.clone()/>
                </Section>
            </div>
        </div>

        <div class="max-w-6xl mx-auto px-6 py-8 grid grid-cols-1 md:grid-cols-2 gap-x-12 gap-y-8">
            <Section anchor=NavAnchor::Leadership title="Leadership & Community">
                <p class="leading-relaxed">{ profile.leadership.clone() }</p>
            </Section>
            <Section anchor=NavAnchor::Skills title="Technical Skills">
                <p class="leading-relaxed">{ profile.skills_line() }</p>
            </Section>
            <Section anchor=NavAnchor::Resume title="Resumes">
                <ResumeList profile/>
            </Section>
            <Section anchor=NavAnchor::Contact title="Contact">
                <ContactLinks profile/>
            </Section>
        </div>
    }
}

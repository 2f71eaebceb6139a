use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use log::{info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, MouseEvent};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::config;
use crate::scroll::transition::{
    reachable_target, Section, SettlePoll, SettleTracker, TransitionGuard, COVER_DELAY_MS,
};
use crate::scroll::viewport;

/// The overlay menu only exists below the breakpoint.
pub fn menu_open_after_resize(open: bool, width: f64) -> bool {
    open && width < config::MENU_BREAKPOINT_PX
}

fn target_for(section: Section) -> Option<f64> {
    viewport::section_top(section.anchor()).map(|top| reachable_target(top, viewport::max_scroll()))
}

/// Cover, wait, scroll, wait until the page is still, uncover. A newer request takes
/// over from an older one at any await point.
async fn run_transition(
    section: Section,
    ticket: u64,
    guard: Rc<RefCell<TransitionGuard>>,
    menu_open: UseStateHandle<bool>,
    cover_active: UseStateHandle<bool>,
) {
    TimeoutFuture::new(COVER_DELAY_MS).await;
    if !guard.borrow().is_current(ticket) {
        return;
    }
    menu_open.set(false);

    let Some(target) = target_for(section) else {
        warn!("Section '{}' disappeared during transition", section.anchor());
        if guard.borrow_mut().finish(ticket) {
            cover_active.set(false);
        }
        return;
    };
    viewport::smooth_scroll_to(target);

    let mut tracker = SettleTracker::new();
    loop {
        viewport::next_frame().await;
        if !guard.borrow().is_current(ticket) {
            return;
        }
        let target = target_for(section).unwrap_or(target);
        match tracker.observe(viewport::scroll_y(), target) {
            SettlePoll::Pending => continue,
            SettlePoll::Settled => break,
            SettlePoll::GaveUp => {
                warn!("Scroll to '{}' never settled", section.anchor());
                break;
            }
        }
    }

    if guard.borrow_mut().finish(ticket) {
        cover_active.set(false);
    }
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu_open = use_state_eq(|| false);
    let cover_active = use_state(|| false);
    let guard = use_mut_ref(TransitionGuard::default);

    {
        let menu_open = menu_open.clone();
        use_event_with_window("resize", move |_: Event| {
            if !menu_open_after_resize(*menu_open, viewport::inner_width()) {
                menu_open.set(false);
            }
        });
    }

    {
        use_effect_with_deps(
            move |open: &bool| {
                viewport::set_body_scroll_locked(*open);
                || ()
            },
            *menu_open,
        );
    }

    let navigate = {
        let menu_open = menu_open.clone();
        let cover_active = cover_active.clone();
        let guard = guard.clone();
        Callback::from(move |section: Section| {
            if target_for(section).is_none() {
                warn!("No section '{}' on the page", section.anchor());
                return;
            }
            let ticket = guard.borrow_mut().begin();
            info!("Transition #{} to '{}'", ticket, section.anchor());
            cover_active.set(true);
            spawn_local(run_transition(
                section,
                ticket,
                guard.clone(),
                menu_open.clone(),
                cover_active.clone(),
            ));
        })
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let section_button = |section: Section, class: &'static str| {
        let navigate = navigate.clone();
        html! {
            <button
                type="button"
                class={class}
                aria-label={section.aria_label()}
                onclick={Callback::from(move |_: MouseEvent| navigate.emit(section))}
            >
                {section.label()}
            </button>
        }
    };

    html! {
        <>
            <div
                class={classes!("page-cover", (*cover_active).then(|| "active"))}
                aria-hidden="true"
            ></div>

            <nav class="top-nav" role="navigation" aria-label="Nawigacja główna">
                <div class="nav-content">
                    <a href={config::SITE_URL} aria-label="Przejdź na początek strony" class="nav-logo">
                        <img src="/logo.png" alt="Dark Oak Logo" loading="eager" decoding="async" />
                    </a>

                    <ul class="nav-links">
                        { for Section::ALL.iter().map(|s| html! { <li>{ section_button(*s, "nav-link") }</li> }) }
                        <li>
                            <a
                                href={config::WHATSAPP_URL}
                                target="_blank"
                                rel="noopener noreferrer"
                                class="nav-cta"
                                aria-label="Otwórz WhatsApp, aby rozpocząć projekt"
                            >
                                {"Zacznij Projekt"}
                            </a>
                        </li>
                    </ul>

                    <button
                        type="button"
                        class="burger-menu"
                        aria-label={if *menu_open { "Zamknij menu" } else { "Otwórz menu" }}
                        aria-expanded={(*menu_open).to_string()}
                        aria-controls="mobile-menu"
                        onclick={toggle_menu}
                    >
                        <span aria-hidden="true">{ if *menu_open { "✕" } else { "☰" } }</span>
                    </button>
                </div>

                <div
                    id="mobile-menu"
                    class={classes!("mobile-menu", (*menu_open).then(|| "open"))}
                    role="dialog"
                    aria-modal="true"
                    aria-label="Menu nawigacyjne"
                    aria-hidden={(!*menu_open).to_string()}
                >
                    <nav aria-label="Linki w menu mobilnym">
                        <ul>
                            { for Section::ALL.iter().map(|s| html! { <li>{ section_button(*s, "mobile-link") }</li> }) }
                            <li>
                                <a
                                    href={config::WHATSAPP_URL}
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="mobile-cta"
                                    aria-label="Otwórz WhatsApp, aby rozpocząć projekt"
                                >
                                    {"Zacznij Projekt"}
                                </a>
                            </li>
                        </ul>
                    </nav>
                </div>
            </nav>

            <style>
                {r#"
                    .page-cover {
                        position: fixed;
                        inset: 0;
                        height: 100vh;
                        background: #e3b214;
                        z-index: 50;
                        transform: translateX(100%);
                        transition: transform 1s ease-in-out;
                        pointer-events: none;
                    }
                    .page-cover.active {
                        transform: translateX(0);
                    }
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 100%;
                        z-index: 40;
                        opacity: 0;
                        animation: navFadeIn 1s ease-in-out 1s forwards;
                    }
                    @keyframes navFadeIn {
                        to { opacity: 1; }
                    }
                    .nav-content {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding: 1.25rem 5rem;
                    }
                    .nav-logo img {
                        width: 6rem;
                        cursor: pointer;
                    }
                    .nav-links {
                        display: flex;
                        align-items: center;
                        gap: 5rem;
                        list-style: none;
                        color: #fff;
                        font-weight: 500;
                    }
                    .nav-link, .mobile-link {
                        background: none;
                        border: none;
                        color: inherit;
                        font: inherit;
                        cursor: pointer;
                        transition: color 0.5s;
                    }
                    .nav-link:hover, .mobile-link:hover {
                        color: #e3b214;
                    }
                    .nav-cta {
                        background: #e3b214;
                        color: #fff;
                        border-radius: 9999px;
                        padding: 0.25rem 1.25rem;
                        font-weight: 700;
                        text-decoration: none;
                        transition: background 0.5s;
                    }
                    .burger-menu {
                        display: none;
                        background: none;
                        border: none;
                        color: #fff;
                        font-size: 1.75rem;
                        cursor: pointer;
                        z-index: 50;
                    }
                    .mobile-menu {
                        position: fixed;
                        inset: 0;
                        height: 100dvh;
                        background: #1c1c1c;
                        color: #fff;
                        font-size: 1.75rem;
                        z-index: 40;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        transform: translateX(100%);
                        transition: transform 1s ease-in-out;
                    }
                    .mobile-menu.open {
                        transform: translateX(0);
                    }
                    .mobile-menu ul {
                        display: grid;
                        place-items: center;
                        row-gap: 2.5rem;
                        list-style: none;
                        padding: 0;
                    }
                    .mobile-menu li {
                        opacity: 0;
                        transition: opacity 0.5s ease-in-out;
                    }
                    .mobile-menu.open li {
                        opacity: 1;
                        transition: opacity 1s ease-in-out;
                    }
                    .mobile-menu.open li:nth-child(1) { transition-delay: 0.5s; }
                    .mobile-menu.open li:nth-child(2) { transition-delay: 0.8s; }
                    .mobile-menu.open li:nth-child(3) { transition-delay: 1.1s; }
                    .mobile-menu.open li:nth-child(4) { transition-delay: 1.4s; }
                    .mobile-cta {
                        background: #e3b214;
                        color: #1c1c1c;
                        border-radius: 9999px;
                        padding: 0.5rem 1.25rem;
                        font-size: 2rem;
                        font-weight: 700;
                        text-decoration: none;
                    }
                    @media (max-width: 879px) {
                        .nav-content {
                            padding: 1.25rem;
                        }
                        .nav-links {
                            display: none;
                        }
                        .burger-menu {
                            display: block;
                        }
                    }
                    @media (max-height: 550px) {
                        .mobile-menu ul {
                            row-gap: 1.25rem;
                        }
                    }
                "#}
            </style>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_closes_at_and_above_breakpoint() {
        assert!(menu_open_after_resize(true, 500.0));
        assert!(menu_open_after_resize(true, 879.0));
        assert!(!menu_open_after_resize(true, 880.0));
        assert!(!menu_open_after_resize(true, 1440.0));
        assert!(!menu_open_after_resize(false, 500.0));
    }

    #[test]
    fn resize_never_opens_a_closed_menu() {
        assert!(!menu_open_after_resize(false, 1440.0));
        assert!(!menu_open_after_resize(false, 320.0));
    }
}

use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;
use crate::content::HERO_IMAGE;
use crate::scroll::transition::Section;
use crate::scroll::viewport;

#[function_component(Hero)]
pub fn hero() -> Html {
    let show_gallery = Callback::from(|_: MouseEvent| {
        viewport::scroll_into_view(Section::Gallery.anchor());
    });

    html! {
        <header class="hero">
            <img
                class="hero-image"
                src={HERO_IMAGE.source}
                alt={HERO_IMAGE.alt}
                width={HERO_IMAGE.width.to_string()}
                height={HERO_IMAGE.height.to_string()}
                fetchpriority="high"
                decoding="async"
                loading="eager"
            />
            <section class="hero-content" aria-labelledby="main-heading">
                <div class="hero-overlay"></div>
                <div class="hero-inner">
                    <h1 id="main-heading" class="hero-title">
                        <span>{"Kuchnie Na Wymiar"}</span>
                    </h1>
                    <div class="hero-cta-group">
                        <a
                            href={config::WHATSAPP_URL}
                            target="_blank"
                            rel="noopener noreferrer"
                            class="hero-cta"
                            aria-label="Rozpocznij projekt kuchni na wymiar - kontakt przez WhatsApp"
                        >
                            <span>{"Zacznij Projekt"}</span>
                        </a>
                        <button
                            type="button"
                            class="hero-secondary"
                            aria-label="Zobacz galerię projektów kuchni"
                            onclick={show_gallery}
                        >
                            <span>{"Zobacz Realizacje"}</span>
                        </button>
                    </div>
                </div>
                <div class="scroll-hint">
                    <span>{"Przewiń"}</span>
                    <svg class="scroll-chevron" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5">
                        <path d="M6 9l6 6 6-6" />
                    </svg>
                </div>
            </section>
            <style>
                {r#"
                    .hero {
                        position: relative;
                        isolation: isolate;
                        height: 100vh;
                        width: 100%;
                    }
                    .hero-image {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        pointer-events: none;
                        user-select: none;
                    }
                    .hero-content {
                        position: relative;
                        z-index: 10;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        align-items: center;
                        height: 100%;
                        padding: 0 1.25rem;
                    }
                    .hero-overlay {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to bottom, rgba(0,0,0,0.6), rgba(0,0,0,0.4), rgba(0,0,0,0.7));
                        pointer-events: none;
                    }
                    .hero-inner {
                        position: relative;
                        z-index: 10;
                        text-align: center;
                    }
                    .hero-title {
                        color: #e3b214;
                        font-weight: 700;
                        font-size: clamp(3rem, 9vw, 8rem);
                        letter-spacing: -0.05em;
                        line-height: 0.95;
                        margin-bottom: 2.5rem;
                        opacity: 0;
                        transform: translateY(10%);
                        animation: heroRise 1.4s cubic-bezier(0.25, 0.1, 0.25, 1) 2s forwards;
                    }
                    .hero-cta-group {
                        display: flex;
                        gap: 1.5rem;
                        justify-content: center;
                        opacity: 0;
                        transform: translateY(20px);
                        animation: heroRise 1s ease-out 3s forwards;
                    }
                    @keyframes heroRise {
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .hero-cta, .hero-secondary {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        font-weight: 700;
                        padding: 1.25rem 3rem;
                        border-radius: 2px;
                        transition: all 0.5s;
                        cursor: pointer;
                        text-decoration: none;
                    }
                    .hero-cta {
                        background: #e3b214;
                        color: #1c1c1c;
                    }
                    .hero-cta:hover {
                        box-shadow: 0 8px 30px rgba(227,178,20,0.4);
                        transform: translateY(-2px);
                    }
                    .hero-secondary {
                        background: rgba(255,255,255,0.1);
                        backdrop-filter: blur(4px);
                        color: #fff;
                        border: 1px solid rgba(255,255,255,0.2);
                    }
                    .scroll-hint {
                        position: absolute;
                        bottom: 2.5rem;
                        left: 50%;
                        transform: translateX(-50%);
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 0.75rem;
                        color: rgba(255,255,255,0.5);
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        opacity: 0;
                        animation: heroFade 1s ease-out 3.5s forwards;
                    }
                    @keyframes heroFade {
                        to { opacity: 1; }
                    }
                    .scroll-chevron {
                        width: 1.5rem;
                        height: 1.5rem;
                        color: rgba(227,178,20,0.8);
                        animation: chevronBob 2s ease-in-out infinite;
                    }
                    @keyframes chevronBob {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(8px); }
                    }
                    @media (max-width: 640px) {
                        .hero-cta-group {
                            flex-direction: column;
                        }
                    }
                    @media (prefers-reduced-motion: reduce) {
                        .hero-title, .hero-cta-group, .scroll-hint {
                            animation-duration: 0.01s;
                            animation-delay: 0s;
                        }
                    }
                "#}
            </style>
        </header>
    }
}

use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::reveal::use_reveal;
use crate::config;
use crate::content::{partner_loop, split_words, ABOUT_IMAGE, ABOUT_PARAGRAPH};
use crate::scroll::viewport;

/// Delay between consecutive words fading in.
const WORD_STAGGER_S: f64 = 0.05;

#[function_component(About)]
pub fn about() -> Html {
    let heading_ref = use_node_ref();
    let paragraph_ref = use_node_ref();
    let button_ref = use_node_ref();
    let partners_ref = use_node_ref();

    let heading_visible = use_reveal(heading_ref.clone(), 0.5);
    let paragraph_visible = use_reveal(paragraph_ref.clone(), 0.5);
    let button_visible = use_reveal(button_ref.clone(), 0.5);
    let partners_visible = use_reveal(partners_ref.clone(), 0.5);

    let start_project = Callback::from(|_: MouseEvent| viewport::open_in_new_tab(config::WHATSAPP_URL));

    let words = split_words(ABOUT_PARAGRAPH);

    html! {
        <section class="about" aria-labelledby="about-heading">
            <div class="about-main">
                <div class="about-image">
                    <img
                        src={ABOUT_IMAGE.source}
                        alt={ABOUT_IMAGE.alt}
                        width={ABOUT_IMAGE.width.to_string()}
                        height={ABOUT_IMAGE.height.to_string()}
                        decoding="async"
                    />
                </div>
                <div class="about-text">
                    <div class="about-copy">
                        <h2
                            id="about-heading"
                            ref={heading_ref}
                            class={classes!("about-heading", "reveal-rise", heading_visible.then(|| "visible"))}
                        >
                            {"O nas"}
                        </h2>
                        <p ref={paragraph_ref} class={classes!("about-paragraph", paragraph_visible.then(|| "visible"))}>
                            { for words.iter().enumerate().map(|(idx, word)| html! {
                                <span
                                    key={idx}
                                    class="about-word"
                                    style={format!("transition-delay: {:.2}s;", idx as f64 * WORD_STAGGER_S)}
                                >
                                    {*word}
                                </span>
                            }) }
                        </p>
                    </div>
                    <button
                        ref={button_ref}
                        class={classes!("about-cta", "reveal-fade", button_visible.then(|| "visible"))}
                        aria-label="Rozpocznij projekt kuchni"
                        onclick={start_project}
                    >
                        {"Zacznij Projekt"}
                    </button>
                </div>
            </div>

            <section id="partners" class="partners" aria-labelledby="partners-heading">
                <h3 id="partners-heading" class="sr-only">{"Our Partners"}</h3>
                <div ref={partners_ref} class={classes!("partners-window", "reveal-fade", partners_visible.then(|| "visible"))}>
                    <div class="marquee">
                        { for partner_loop().into_iter().enumerate().map(|(idx, partner)| html! {
                            <a
                                key={idx}
                                href={partner.link_url}
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label={format!("Visit {}", partner.alt)}
                                title={partner.description}
                                class="partner-link"
                            >
                                <img src={partner.logo_source} alt={partner.alt} decoding="async" />
                            </a>
                        }) }
                    </div>
                </div>
            </section>

            <style>
                {r#"
                    .about {
                        width: 100%;
                        display: flex;
                        flex-direction: column;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .about-main {
                        width: 100%;
                        display: flex;
                    }
                    .about-image {
                        display: flex;
                        justify-content: center;
                        width: 50%;
                        height: 55rem;
                    }
                    .about-image img {
                        width: 100%;
                        object-fit: cover;
                        padding: 2.5rem;
                    }
                    .about-text {
                        display: flex;
                        flex-direction: column;
                        justify-content: space-between;
                        align-items: flex-start;
                        width: 50%;
                        height: 55rem;
                        padding: 2.5rem;
                    }
                    .about-copy {
                        flex: 1;
                    }
                    .about-heading {
                        color: #e3b214;
                        font-weight: 700;
                        font-size: 4.5rem;
                    }
                    .about-paragraph {
                        display: flex;
                        flex-wrap: wrap;
                        color: #fff;
                        font-weight: 500;
                        font-size: 1.5rem;
                        max-width: 50rem;
                    }
                    .about-word {
                        margin-right: 0.3rem;
                        opacity: 0;
                        transition: opacity 1s ease-in-out;
                    }
                    .about-paragraph.visible .about-word {
                        opacity: 1;
                    }
                    .about-cta {
                        padding: 0.5rem 2.5rem;
                        border: none;
                        border-radius: 9999px;
                        background: #e3b214;
                        color: #1c1c1c;
                        font-weight: 700;
                        font-size: 1.25rem;
                        cursor: pointer;
                        transition: background-color 0.5s, opacity 1s ease-in-out;
                    }
                    .reveal-rise {
                        opacity: 0;
                        transform: translateY(10%);
                        transition: opacity 1s ease-out, transform 1s ease-out;
                    }
                    .reveal-rise.visible {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    .reveal-fade {
                        opacity: 0;
                        transition: opacity 1s ease-in-out;
                    }
                    .reveal-fade.visible {
                        opacity: 1;
                    }
                    .partners {
                        width: 100%;
                        padding-bottom: 2.5rem;
                    }
                    .partners-window {
                        overflow: hidden;
                    }
                    .marquee {
                        display: flex;
                        align-items: center;
                        width: max-content;
                        animation: marquee 20s linear infinite;
                        will-change: transform;
                    }
                    @keyframes marquee {
                        0% { transform: translateX(0); }
                        100% { transform: translateX(-50%); }
                    }
                    .partner-link {
                        flex-shrink: 0;
                        margin-right: 10rem;
                    }
                    .partner-link img {
                        width: 10rem;
                        object-fit: contain;
                    }
                    .sr-only {
                        position: absolute;
                        width: 1px;
                        height: 1px;
                        overflow: hidden;
                        clip: rect(0, 0, 0, 0);
                        white-space: nowrap;
                    }
                    @media (max-width: 768px) {
                        .about {
                            padding: 1.25rem;
                        }
                        .about-main {
                            flex-direction: column;
                        }
                        .about-image, .about-text {
                            width: 100%;
                            height: auto;
                            padding: 0;
                        }
                        .about-image {
                            min-height: 15rem;
                        }
                        .about-cta {
                            width: 100%;
                            margin-top: 5rem;
                        }
                        .partner-link {
                            margin-right: 5rem;
                        }
                        .partner-link img {
                            width: 7.5rem;
                        }
                    }
                "#}
            </style>
        </section>
    }
}

use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::reveal::use_reveal;
use crate::content::FEATURES;
use crate::scroll::transition::Section;
use crate::scroll::viewport;

#[function_component(WhyChooseUs)]
pub fn why_choose_us() -> Html {
    let heading_ref = use_node_ref();
    let grid_ref = use_node_ref();
    let cta_ref = use_node_ref();

    let heading_visible = use_reveal(heading_ref.clone(), 0.3);
    let grid_visible = use_reveal(grid_ref.clone(), 0.2);
    let cta_visible = use_reveal(cta_ref.clone(), 0.5);

    let to_contact = Callback::from(|_: MouseEvent| {
        viewport::scroll_into_view(Section::Contact.anchor());
    });

    html! {
        <section id="why-choose-us" class="why" aria-labelledby="why-heading">
            <div ref={heading_ref} class={classes!("why-head", heading_visible.then(|| "visible"))}>
                <h2 id="why-heading">{"Dlaczego Dark Oak?"}</h2>
                <p>{"Studio kuchenne z pasją do perfekcji i dbałością o każdy detal"}</p>
            </div>

            <div ref={grid_ref} class={classes!("why-grid", grid_visible.then(|| "visible"))}>
                { for FEATURES.iter().enumerate().map(|(index, feature)| html! {
                    <article
                        key={index}
                        class="why-card"
                        style={format!("transition-delay: {:.1}s;", 0.3 + index as f64 * 0.2)}
                    >
                        <div class="why-icon">
                            <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round">
                                <path d={feature.icon.path()} />
                            </svg>
                        </div>
                        <h3>{feature.title}</h3>
                        <p>{feature.description}</p>
                    </article>
                }) }
            </div>

            <div ref={cta_ref} class={classes!("why-cta-wrap", cta_visible.then(|| "visible"))}>
                <button
                    type="button"
                    class="why-cta"
                    aria-label="Skontaktuj się z Dark Oak - przejdź do formularza kontaktowego"
                    onclick={to_contact}
                >
                    <span>{"Porozmawiajmy o Twojej Kuchni"}</span>
                    <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                        <path d="M17 8l4 4m0 0l-4 4m4-4H3" />
                    </svg>
                </button>
            </div>

            <style>
                {r#"
                    .why {
                        background: #1c1c1c;
                        color: #fff;
                        padding: 8rem 1.25rem;
                    }
                    .why-head {
                        text-align: center;
                        margin-bottom: 4rem;
                        opacity: 0;
                        transform: translateY(20px);
                        transition: opacity 1s ease-out, transform 1s ease-out;
                    }
                    .why-head h2 {
                        font-size: 3.5rem;
                        font-weight: 700;
                        color: #e3b214;
                    }
                    .why-head p {
                        color: rgba(255,255,255,0.6);
                    }
                    .why-grid {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 2rem;
                        max-width: 90rem;
                        margin: 0 auto;
                    }
                    .why-card {
                        border: 1px solid rgba(255,255,255,0.1);
                        padding: 2.5rem 2rem;
                        opacity: 0;
                        transform: translateY(30px);
                        transition: opacity 0.8s cubic-bezier(0.25, 0.1, 0.25, 1), transform 0.8s cubic-bezier(0.25, 0.1, 0.25, 1), border-color 0.5s;
                    }
                    .why-card:hover {
                        border-color: rgba(227,178,20,0.4);
                    }
                    .why-icon svg {
                        width: 2.5rem;
                        height: 2.5rem;
                        color: #e3b214;
                    }
                    .why-card h3 {
                        font-size: 1.5rem;
                        font-weight: 700;
                    }
                    .why-card p {
                        color: rgba(255,255,255,0.7);
                        line-height: 1.6;
                    }
                    .why-cta-wrap {
                        display: flex;
                        justify-content: center;
                        margin-top: 4rem;
                        opacity: 0;
                        transform: translateY(20px);
                        transition: opacity 1s ease-out 0.4s, transform 1s ease-out 0.4s;
                    }
                    .why-cta {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.75rem;
                        background: #e3b214;
                        color: #1c1c1c;
                        border: none;
                        padding: 1.25rem 3rem;
                        font-weight: 700;
                        cursor: pointer;
                    }
                    .why-cta svg {
                        width: 1.25rem;
                        height: 1.25rem;
                    }
                    .why-head.visible, .why-grid.visible .why-card, .why-cta-wrap.visible {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    @media (max-width: 1024px) {
                        .why-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }
                    @media (max-width: 640px) {
                        .why-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </section>
    }
}

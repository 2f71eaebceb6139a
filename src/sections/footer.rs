use chrono::Datelike;
use gloo_timers::future::TimeoutFuture;
use log::info;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, SubmitEvent};
use yew::prelude::*;

use crate::components::reveal::use_reveal;
use crate::config;
use crate::contact::form_state::{
    FailureReason, Field, FormModel, FormSubmissionState, SubmissionOutcome,
};
use crate::contact::relay::{self, RelayError};
use crate::content::SOCIAL_LINKS;

pub enum ContactMsg {
    Input(Field, String),
    Submit,
    Settled(u64, Result<SubmissionOutcome, RelayError>),
    Reset(u64),
}

pub struct ContactForm {
    model: FormModel,
}

impl Component for ContactForm {
    type Message = ContactMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            model: FormModel::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactMsg::Input(field, value) => {
                self.model.fields.set(field, value);
                true
            }
            ContactMsg::Submit => {
                let Some(submission) = self.model.begin_submit() else {
                    return false;
                };
                info!("Sending contact form, attempt #{}", submission.attempt);
                ctx.link().send_future(async move {
                    let result = relay::submit(&submission.payload).await;
                    ContactMsg::Settled(submission.attempt, result)
                });
                true
            }
            ContactMsg::Settled(attempt, result) => {
                let transport_error = result.as_ref().err().map(ToString::to_string);
                let Some(delay) = self.model.settle(attempt, result) else {
                    return false;
                };
                match self.model.state() {
                    FormSubmissionState::Failed(FailureReason::Rejected(message)) => {
                        gloo_console::error!("Relay rejected submission:", format!("{:?}", message));
                    }
                    FormSubmissionState::Failed(FailureReason::Network) => gloo_console::error!(
                        "Relay request failed:",
                        transport_error.unwrap_or_default()
                    ),
                    _ => info!("Contact form #{} delivered", attempt),
                }
                ctx.link().send_future(async move {
                    TimeoutFuture::new(delay).await;
                    ContactMsg::Reset(attempt)
                });
                true
            }
            ContactMsg::Reset(attempt) => self.model.reset(attempt),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let fields = &self.model.fields;
        let label = self.model.state().label();

        let on_input = |field: Field| {
            link.callback(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                ContactMsg::Input(field, input.value())
            })
        };

        html! {
            <form
                id="form"
                class="contact-form"
                aria-labelledby="contact-form-heading"
                onsubmit={link.callback(|e: SubmitEvent| {
                    e.prevent_default();
                    ContactMsg::Submit
                })}
            >
                <h3 id="contact-form-heading" class="sr-only">
                    {"Formularz kontaktowy - kuchnie na wymiar Dark Oak"}
                </h3>

                <label class="sr-only" for="name">{"Imię"}</label>
                <input
                    id="name"
                    name="name"
                    type="text"
                    required=true
                    autocomplete="name"
                    placeholder="Imię"
                    value={fields.name.clone()}
                    oninput={on_input(Field::Name)}
                />

                <label class="sr-only" for="phone">{"Numer"}</label>
                <input
                    id="phone"
                    name="tel"
                    type="tel"
                    required=true
                    autocomplete="tel"
                    placeholder="Numer Telefonu"
                    value={fields.tel.clone()}
                    oninput={on_input(Field::Tel)}
                />

                <label class="sr-only" for="email">{"Email"}</label>
                <input
                    id="email"
                    name="email"
                    type="email"
                    required=true
                    autocomplete="email"
                    placeholder="Adres Email"
                    value={fields.email.clone()}
                    oninput={on_input(Field::Email)}
                />

                <label class="sr-only" for="message">{"Jak możemy pomóc?"}</label>
                <textarea
                    id="message"
                    name="message"
                    required=true
                    rows="5"
                    placeholder="Opisz swój projekt kuchni..."
                    value={fields.message.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        let input: HtmlTextAreaElement = e.target_unchecked_into();
                        ContactMsg::Input(Field::Message, input.value())
                    })}
                />

                <button
                    type="submit"
                    class="contact-submit"
                    disabled={self.model.control_disabled()}
                >
                    {label.clone()}
                </button>
                <div class="sr-only" role="status" aria-live="polite">{label}</div>
            </form>
        }
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let intro_ref = use_node_ref();
    let aside_ref = use_node_ref();
    let map_ref = use_node_ref();
    let copyright_ref = use_node_ref();

    let intro_visible = use_reveal(intro_ref.clone(), 0.3);
    let aside_visible = use_reveal(aside_ref.clone(), 0.3);
    let map_visible = use_reveal(map_ref.clone(), 0.3);
    let copyright_visible = use_reveal(copyright_ref.clone(), 0.5);

    let year = chrono::Local::now().year();

    html! {
        <div class="site-footer" role="contentinfo">
            <div class="footer-inner">
                <div class="footer-grid">
                    <article ref={intro_ref} class={classes!("reveal-up", intro_visible.then(|| "visible"))}>
                        <span class="eyebrow">{"Kontakt"}</span>
                        <h2 class="footer-heading">{"Skontaktuj się z nami"}</h2>
                        <ContactForm />
                    </article>

                    <aside
                        ref={aside_ref}
                        class={classes!("contact-info", "reveal-up", aside_visible.then(|| "visible"))}
                        aria-label="Informacje kontaktowe Dark Oak"
                    >
                        <h3>{"Informacje Kontaktowe"}</h3>
                        <a
                            href={config::PHONE_HREF}
                            aria-label={format!("Zadzwoń do Dark Oak: {}", config::PHONE_DISPLAY)}
                            itemprop="telephone"
                        >
                            <span>{config::PHONE_DISPLAY}</span>
                        </a>
                        <a
                            href={format!("mailto:{}", config::EMAIL)}
                            aria-label={format!("Wyślij email do Dark Oak: {}", config::EMAIL)}
                            itemprop="email"
                        >
                            <span>{config::EMAIL}</span>
                        </a>
                        <div class="business-lines">
                            <p>{"Dark Oak - Kuchnie na Wymiar"}</p>
                            <p>{"Wapienna 6/8 p.109, 87-100 Toruń"}</p>
                        </div>
                        <nav class="socials" aria-label="Social media Dark Oak">
                            { for SOCIAL_LINKS.iter().map(|social| html! {
                                <a
                                    href={social.url}
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label={social.label}
                                >
                                    <img src={social.icon} alt={social.alt} decoding="async" loading="lazy" />
                                </a>
                            }) }
                        </nav>
                    </aside>
                </div>

                <section class="location" aria-labelledby="location-heading">
                    <div class="location-head">
                        <span class="eyebrow">{"Nasza Lokalizacja"}</span>
                        <h3 id="location-heading">{"Odwiedź Nas w Toruniu"}</h3>
                    </div>
                    <figure ref={map_ref} class={classes!("map", "reveal-up", map_visible.then(|| "visible"))}>
                        <iframe
                            src={config::MAP_EMBED_URL}
                            loading="lazy"
                            allowfullscreen=true
                            title="Mapa lokalizacji Dark Oak - Kuchnie na Wymiar, Wapienna 6/8 p.109, 87-100 Toruń"
                            referrerpolicy="no-referrer-when-downgrade"
                        ></iframe>
                        <figcaption class="sr-only" itemscope=true itemtype="https://schema.org/PostalAddress">
                            <span itemprop="name">{"Dark Oak - Kuchnie na Wymiar"}</span>
                            <span itemprop="streetAddress">{"Wapienna 6/8 p.109"}</span>
                            <span itemprop="postalCode">{"87-100"}</span>
                            <span itemprop="addressLocality">{"Toruń"}</span>
                            <span itemprop="addressCountry">{"Polska"}</span>
                        </figcaption>
                    </figure>
                </section>

                <div ref={copyright_ref} class={classes!("copyright", "reveal-up", copyright_visible.then(|| "visible"))}>
                    <p>{format!("© {} Dark Oak. Wszelkie prawa zastrzeżone.", year)}</p>
                </div>
            </div>

            <style>
                {r#"
                    .site-footer {
                        background: #1c1c1c;
                        color: #fff;
                        padding: 8rem 1.25rem;
                        border-top: 1px solid rgba(255,255,255,0.1);
                    }
                    .footer-inner {
                        max-width: 100rem;
                        margin: 0 auto;
                        padding: 0 5rem;
                    }
                    .footer-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 5rem;
                        align-items: start;
                    }
                    .eyebrow {
                        display: block;
                        color: rgba(227,178,20,0.8);
                        font-weight: 500;
                        letter-spacing: 0.2em;
                        text-transform: uppercase;
                        margin-bottom: 1.5rem;
                    }
                    .footer-heading {
                        font-size: 4.5rem;
                        font-weight: 700;
                        letter-spacing: -0.025em;
                        margin-bottom: 2rem;
                    }
                    .contact-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }
                    .contact-form input, .contact-form textarea {
                        width: 100%;
                        background: transparent;
                        color: #fff;
                        outline: none;
                        font-size: 1.25rem;
                        border: none;
                        border-bottom: 1px solid rgba(255,255,255,0.2);
                        padding: 1rem 0;
                        transition: border-color 0.5s ease-out;
                    }
                    .contact-form textarea {
                        border: 1px solid rgba(255,255,255,0.2);
                        border-radius: 2px;
                        padding: 1rem 1.25rem;
                        resize: none;
                    }
                    .contact-form input:focus, .contact-form textarea:focus {
                        border-color: #e3b214;
                    }
                    .contact-submit {
                        align-self: flex-start;
                        background: #e3b214;
                        color: #1c1c1c;
                        border: none;
                        border-radius: 9999px;
                        padding: 0.75rem 2.5rem;
                        font-weight: 700;
                        font-size: 1.25rem;
                        cursor: pointer;
                        transition: background-color 0.5s;
                    }
                    .contact-submit:disabled {
                        opacity: 0.6;
                        cursor: not-allowed;
                    }
                    .contact-info {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }
                    .contact-info a {
                        color: #fff;
                        font-size: 1.5rem;
                        text-decoration: none;
                        transition: color 0.5s;
                    }
                    .contact-info a:hover {
                        color: #e3b214;
                    }
                    .business-lines p {
                        color: rgba(255,255,255,0.6);
                        margin: 0.25rem 0;
                    }
                    .socials {
                        display: flex;
                        gap: 1.25rem;
                    }
                    .socials img {
                        width: 2rem;
                        height: 2rem;
                    }
                    .location {
                        margin-top: 6rem;
                        padding-top: 6rem;
                        border-top: 1px solid rgba(255,255,255,0.1);
                    }
                    .location-head {
                        text-align: center;
                        margin-bottom: 4rem;
                    }
                    .location-head h3 {
                        font-size: 2.5rem;
                        font-weight: 700;
                    }
                    .map {
                        position: relative;
                        margin: 0;
                        border: 1px solid rgba(255,255,255,0.1);
                        border-radius: 2px;
                        overflow: hidden;
                    }
                    .map iframe {
                        display: block;
                        width: 100%;
                        height: 500px;
                        border: 0;
                    }
                    .copyright {
                        margin-top: 6rem;
                        padding-top: 2.5rem;
                        border-top: 1px solid rgba(255,255,255,0.1);
                        text-align: center;
                        color: rgba(255,255,255,0.4);
                    }
                    .reveal-up {
                        opacity: 0;
                        transform: translateY(20px);
                        transition: opacity 1s ease-out, transform 1s ease-out;
                    }
                    .reveal-up.visible {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    @media (max-width: 1024px) {
                        .footer-grid {
                            grid-template-columns: 1fr;
                        }
                        .footer-inner {
                            padding: 0 1.25rem;
                        }
                        .footer-heading {
                            font-size: 3rem;
                        }
                        .map iframe {
                            height: 400px;
                        }
                    }
                "#}
            </style>
        </div>
    }
}

use yew::prelude::*;
use log::{info, Level};

mod config;
mod content;
mod scroll {
    pub mod progress;
    pub mod transition;
    pub mod viewport;
}
mod contact {
    pub mod form_state;
    pub mod relay;
}
mod components {
    pub mod navbar;
    pub mod reveal;
}
mod sections {
    pub mod about;
    pub mod footer;
    pub mod gallery;
    pub mod hero;
    pub mod why_choose_us;
}

use components::navbar::Navbar;
use scroll::transition::Section;
use sections::{
    about::About,
    footer::Footer,
    gallery::Gallery,
    hero::Hero,
    why_choose_us::WhyChooseUs,
};

#[function_component]
fn App() -> Html {
    html! {
        <>
            <Navbar />
            <main id="main">
                <Hero />

                <section id={Section::About.anchor()} class="about-wrap">
                    <About />
                </section>

                <section id={Section::Gallery.anchor()}>
                    <Gallery />
                </section>

                <WhyChooseUs />
            </main>

            <footer id={Section::Contact.anchor()}>
                <Footer />
            </footer>

            <style>
                {r#"
                    html, body {
                        margin: 0;
                        background: #1c1c1c;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    }
                    *, *::before, *::after {
                        box-sizing: border-box;
                    }
                    .about-wrap {
                        max-height: 1100px;
                        background: #1c1c1c;
                    }
                "#}
            </style>
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting Dark Oak site");
    yew::Renderer::<App>::new().render();
}

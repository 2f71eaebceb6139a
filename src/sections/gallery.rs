use log::error;
use web_sys::{Element, Event};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::content::{GalleryImage, GALLERY_IMAGES};
use crate::scroll::progress::{GalleryLayout, ScrollProgress};
use crate::scroll::viewport;

fn measure(container: &NodeRef) -> Option<ScrollProgress> {
    let element = container.cast::<Element>()?;
    let rect = element.get_bounding_client_rect();
    Some(ScrollProgress::from_region(
        rect.top(),
        rect.height(),
        viewport::inner_height(),
    ))
}

#[function_component(Gallery)]
pub fn gallery() -> Html {
    let images: &[GalleryImage] = &GALLERY_IMAGES;
    let container = use_node_ref();
    let progress = use_state_eq(ScrollProgress::default);

    let recompute = {
        let container = container.clone();
        let progress = progress.clone();
        move || {
            if let Some(measured) = measure(&container) {
                progress.set(measured);
            }
        }
    };

    {
        let recompute = recompute.clone();
        use_event_with_window("scroll", move |_: Event| recompute());
    }
    {
        let recompute = recompute.clone();
        use_event_with_window("resize", move |_: Event| recompute());
    }
    {
        use_effect_with_deps(
            move |_| {
                recompute();
                || ()
            },
            (),
        );
    }

    let layout = match GalleryLayout::new(images.len()) {
        Ok(layout) => layout,
        Err(e) => {
            error!("Gallery not rendered: {}", e);
            return html! {};
        }
    };

    let indicator = layout.indicator(*progress);
    let active = layout.active_index(*progress);

    html! {
        <section
            ref={container}
            class="gallery"
            aria-label="Galeria realizacji kuchni na wymiar Dark Oak"
            style={format!("height: calc(100vh * {});", layout.count())}
        >
            <div class="gallery-pin">
                { for images.iter().enumerate().map(|(index, image)| {
                    let offset = layout.image_offset_percent(index, *progress);
                    let first = index == 0;
                    html! {
                        <img
                            key={index}
                            class="gallery-image"
                            src={image.source}
                            alt={image.alt}
                            width={image.width.to_string()}
                            height={image.height.to_string()}
                            decoding="async"
                            loading={if first { "eager" } else { "lazy" }}
                            fetchpriority={if first { "high" } else { "low" }}
                            style={format!("transform: translateY({:.3}%);", offset)}
                        />
                    }
                }) }

                <nav
                    class="gallery-dots"
                    aria-label="Wskaźnik postępu galerii"
                    style={format!("gap: {}px;", layout.dot_gap())}
                >
                    { for (0..layout.count()).map(|idx| html! {
                        <div
                            key={idx}
                            class="gallery-dot"
                            aria-current={(idx == active).then(|| "step")}
                            style={format!("width: {0}px; height: {0}px;", layout.dot_size())}
                        ></div>
                    }) }
                    <div
                        class="gallery-highlight"
                        aria-hidden="true"
                        style={format!(
                            "left: {:.3}px; width: {:.3}px; height: {}px;",
                            indicator.left,
                            indicator.width,
                            layout.dot_size()
                        )}
                    ></div>
                </nav>
            </div>
            <style>
                {r#"
                    .gallery {
                        position: relative;
                        width: 100%;
                    }
                    .gallery-pin {
                        position: sticky;
                        top: 0;
                        width: 100%;
                        height: 100vh;
                        overflow: hidden;
                    }
                    .gallery-image {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        object-position: center;
                        will-change: transform;
                    }
                    .gallery-dots {
                        position: absolute;
                        bottom: 1.25rem;
                        left: 50%;
                        transform: translateX(-50%);
                        display: flex;
                        z-index: 50;
                    }
                    .gallery-dot {
                        border-radius: 50%;
                        background: #fff;
                    }
                    .gallery-highlight {
                        position: absolute;
                        top: 0;
                        background: #e3b214;
                        border-radius: 9999px;
                        will-change: left, width;
                    }
                "#}
            </style>
        </section>
    }
}

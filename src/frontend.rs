use crate::{
    analytics::{load_timing_event, AnalyticsEvent, EventEmitter},
    browser::{self, DocumentTheme, RegionObserver, WindowListener},
    carousel::{Layout, Playback},
    config::LandingConfig,
    content::{
        slide_alt, BRAND_TITLE, COPYRIGHT, LOGO_IMAGE, SLIDE_IMAGES, SOCIAL_LINKS, STORE_LINKS,
        TAGLINE_AR, TAGLINE_EN, WHATSAPP_LABEL, WHATSAPP_URL,
    },
    preference::Theme,
    session::PageSession,
    visibility::{Region, RevealMode},
};
use gloo_timers::callback::Interval;
use serde_json::json;
use std::rc::Rc;
use web_sys::{window, Element, MouseEvent};
use yew::prelude::*;

fn track_click(emitter: &Rc<EventEmitter>, event: AnalyticsEvent) -> Callback<MouseEvent> {
    let emitter = emitter.clone();
    Callback::from(move |_: MouseEvent| emitter.track(event.clone()))
}

fn region_classes(session: &PageSession, region: Region) -> Classes {
    classes!(
        "region",
        format!("region-{}", region.id()),
        session.is_revealed(region).then_some("is-visible")
    )
}

#[derive(Properties, PartialEq)]
struct CarouselProps {
    current: usize,
    loaded: Vec<bool>,
    paused: bool,
    transition_ms: u32,
    on_pointer_enter: Callback<MouseEvent>,
    on_pointer_leave: Callback<MouseEvent>,
    on_dot: Callback<usize>,
    on_image_load: Callback<usize>,
}

#[function_component(Carousel)]
fn carousel(props: &CarouselProps) -> Html {
    let layout = Layout::for_viewport(browser::viewport_width());
    let fade = format!("transition: opacity {}ms linear;", props.transition_ms);

    html! {
        <div
            class={classes!(
                "slider",
                format!("slides-{}", layout.slides_to_show),
                format!("scroll-{}", layout.slides_to_scroll),
                props.paused.then_some("is-paused")
            )}
            onmouseenter={props.on_pointer_enter.clone()}
            onmouseleave={props.on_pointer_leave.clone()}
        >
            <div class="slider-track">
                { for SLIDE_IMAGES.iter().enumerate().map(|(index, src)| {
                    let loaded = props.loaded.get(index).copied().unwrap_or(false);
                    let onload = {
                        let on_image_load = props.on_image_load.clone();
                        Callback::from(move |_: Event| on_image_load.emit(index))
                    };
                    html! {
                        <div
                            key={index}
                            class={classes!("slide-frame", (index == props.current).then_some("is-active"))}
                            style={fade.clone()}
                            aria-hidden={(index != props.current).to_string()}
                        >
                            if !loaded {
                                <div class="slide-skeleton" aria-hidden="true"></div>
                            }
                            <img
                                class={classes!("slide", loaded.then_some("is-loaded"))}
                                src={*src}
                                alt={slide_alt(index)}
                                onload={onload}
                            />
                        </div>
                    }
                }) }
            </div>
            <ul class="slider-dots" role="tablist">
                { for (0..SLIDE_IMAGES.len()).map(|index| {
                    let onclick = {
                        let on_dot = props.on_dot.clone();
                        Callback::from(move |_: MouseEvent| on_dot.emit(index))
                    };
                    html! {
                        <li key={index}>
                            <button
                                type="button"
                                class={classes!("slider-dot", (index == props.current).then_some("is-active"))}
                                aria-label={slide_alt(index)}
                                aria-selected={(index == props.current).to_string()}
                                onclick={onclick}
                            />
                        </li>
                    }
                }) }
            </ul>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: LandingConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let emitter = use_memo((), |_| browser::emitter());
    let preferences = use_memo((), |_| browser::preference_store());
    let dark_mode = use_state(|| preferences.restore());
    let session = use_mut_ref(|| PageSession::new(&props.config, SLIDE_IMAGES.len()));
    let rerender = use_force_update();

    let hero_ref = use_node_ref();
    let carousel_ref = use_node_ref();
    let download_ref = use_node_ref();
    let contact_ref = use_node_ref();
    let social_ref = use_node_ref();

    {
        let enabled = *dark_mode;
        use_effect_with((), move |_| {
            DocumentTheme::apply_immediately(enabled);
            || ()
        });
    }

    {
        let session = session.clone();
        let rerender = rerender.clone();
        let emitter = emitter.clone();
        let options = props.config.observer;
        let refs = [
            hero_ref.clone(),
            carousel_ref.clone(),
            download_ref.clone(),
            contact_ref.clone(),
            social_ref.clone(),
        ];
        use_effect_with((), move |_| {
            let mode = session
                .borrow_mut()
                .mount(browser::intersection_observer_supported());

            let observer = match mode {
                RevealMode::Eager => None,
                RevealMode::Lazy => {
                    let targets: Vec<Element> =
                        refs.iter().filter_map(|node| node.cast::<Element>()).collect();
                    let on_batch = {
                        let session = session.clone();
                        let rerender = rerender.clone();
                        move |batch: Vec<(Region, bool)>| {
                            if session.borrow_mut().on_intersections(batch) {
                                rerender.force_update();
                            }
                        }
                    };
                    let attached = RegionObserver::attach(&options, &targets, on_batch);
                    if attached.is_none() {
                        emitter.warn("viewport_observer_unavailable", json!({ "fallback": "eager" }));
                        session.borrow_mut().mount(false);
                    }
                    attached
                }
            };
            rerender.force_update();

            move || drop(observer)
        });
    }

    {
        let session = session.clone();
        let emitter = emitter.clone();
        use_effect_with((), move |_| {
            let listener = WindowListener::attach("scroll", move || {
                if let Some(metrics) = browser::scroll_metrics() {
                    session.borrow_mut().on_scroll(metrics, &emitter);
                }
            });

            move || drop(listener)
        });
    }

    {
        let emitter = emitter.clone();
        use_effect_with((), move |_| {
            let track_load = move || {
                if let Some(event) = browser::navigation_load_timing()
                    .and_then(|(start, end)| load_timing_event(start, end))
                {
                    emitter.track(event);
                }
            };

            let listener = if browser::document_complete() {
                track_load();
                None
            } else {
                WindowListener::attach("load", track_load)
            };

            move || drop(listener)
        });
    }

    {
        let generation = session.borrow().autoplay_generation();
        let session = session.clone();
        let rerender = rerender.clone();
        use_effect_with((props.config.autoplay_interval_ms, generation), move |(interval_ms, _)| {
            let interval = Interval::new(*interval_ms, move || {
                if session.borrow_mut().on_tick() {
                    rerender.force_update();
                }
            });

            move || drop(interval)
        });
    }

    let on_toggle = {
        let dark_mode = dark_mode.clone();
        let preferences = preferences.clone();
        let emitter = emitter.clone();
        Callback::from(move |_: MouseEvent| {
            let next = preferences.toggle(*dark_mode, &DocumentTheme);
            emitter.track(AnalyticsEvent::new("dark_mode_toggle").with("enabled", next));
            dark_mode.set(next);
        })
    };

    let on_pointer_enter = {
        let session = session.clone();
        let rerender = rerender.clone();
        Callback::from(move |_: MouseEvent| {
            session.borrow_mut().on_pointer_enter();
            rerender.force_update();
        })
    };

    let on_pointer_leave = {
        let session = session.clone();
        let rerender = rerender.clone();
        Callback::from(move |_: MouseEvent| {
            session.borrow_mut().on_pointer_leave();
            rerender.force_update();
        })
    };

    let on_dot = {
        let session = session.clone();
        let rerender = rerender.clone();
        let emitter = emitter.clone();
        Callback::from(move |index: usize| {
            // Rerender even without a move so the autoplay timer restarts.
            session.borrow_mut().on_dot_click(index, &emitter);
            rerender.force_update();
        })
    };

    let on_image_load = {
        let session = session.clone();
        let rerender = rerender.clone();
        Callback::from(move |index: usize| {
            if session.borrow_mut().on_image_load(index) {
                rerender.force_update();
            }
        })
    };

    let theme = Theme::from_enabled(*dark_mode);
    let session = session.borrow();
    let loaded: Vec<bool> = (0..session.slide_count())
        .map(|index| session.is_slide_loaded(index))
        .collect();

    html! {
        <div class={classes!("landing-page", theme.as_class())}>
            <header>
                <button
                    class="dark-mode-toggle"
                    type="button"
                    aria-label={theme.toggle_label()}
                    aria-pressed={theme.is_dark().to_string()}
                    onclick={on_toggle}
                >
                    <span aria-hidden="true">{theme.icon()}</span>
                </button>
            </header>

            <section ref={carousel_ref} data-region={Region::Carousel.id()} class={region_classes(&session, Region::Carousel)}>
                <Carousel
                    current={session.current_slide()}
                    loaded={loaded}
                    paused={session.playback() == Playback::Paused}
                    transition_ms={props.config.transition_ms}
                    on_pointer_enter={on_pointer_enter}
                    on_pointer_leave={on_pointer_leave}
                    on_dot={on_dot}
                    on_image_load={on_image_load}
                />
            </section>

            <section ref={hero_ref} data-region={Region::Hero.id()} class={region_classes(&session, Region::Hero)}>
                <div class="logo">
                    <img src={LOGO_IMAGE} alt="Company Logo" />
                </div>
                <div class="description">
                    <h1>{BRAND_TITLE}</h1>
                    <p lang="ar" dir="rtl">{TAGLINE_AR}</p>
                    <p lang="en">{TAGLINE_EN}</p>
                </div>
            </section>

            <section ref={download_ref} data-region={Region::Download.id()} class={classes!(region_classes(&session, Region::Download), "download-buttons")}>
                { for STORE_LINKS.iter().map(|link| html! {
                    <a
                        href={link.href}
                        target="_blank"
                        rel="noopener noreferrer"
                        onclick={track_click(&emitter, AnalyticsEvent::new("download_click").with("store", link.store))}
                    >
                        <img src={link.badge} alt={link.alt} class="store-badge" />
                    </a>
                }) }
            </section>

            <section ref={contact_ref} data-region={Region::Contact.id()} class={region_classes(&session, Region::Contact)}>
                <a
                    href={WHATSAPP_URL}
                    class="whatsapp-button"
                    target="_blank"
                    rel="noopener noreferrer"
                    dir="rtl"
                    onclick={track_click(&emitter, AnalyticsEvent::new("whatsapp_click"))}
                >
                    {WHATSAPP_LABEL}
                </a>
            </section>

            <section ref={social_ref} data-region={Region::Social.id()} class={classes!(region_classes(&session, Region::Social), "social-media")}>
                { for SOCIAL_LINKS.iter().map(|link| html! {
                    <a
                        href={link.href}
                        target="_blank"
                        rel="noopener noreferrer"
                        class={classes!("social", link.platform)}
                        aria-label={link.label}
                        onclick={track_click(&emitter, AnalyticsEvent::new("social_click").with("platform", link.platform))}
                    >
                        <span class="sr-only">{link.label}</span>
                    </a>
                }) }
            </section>

            <footer class="footer">
                <div class="footer-banner">
                    <p dir="rtl">{COPYRIGHT}</p>
                </div>
            </footer>
        </div>
    }
}

pub fn run() {
    console_error_panic_hook::set_once();

    let root = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("app"))
        .expect("missing #app mount point");
    let config = LandingConfig::from_lookup(|key| root.get_attribute(key));

    yew::Renderer::<App>::with_root_and_props(root, AppProps { config }).render();
}

use crate::components::{
    card_track::CardTrack, faq::Faq, nav::Nav, progress_bar::ProgressBar,
    scroll_top::ScrollTopButton, timeline::Timeline,
};
use crate::config::{SectionConfig, SectionKind, SiteConfig};
use crate::dom::scroll_to_section;
use crate::hooks::use_page_scroll;
use crate::scroll::PageState;
use std::rc::Rc;
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub config: Rc<SiteConfig>,
}

fn contact_id(config: &SiteConfig) -> Option<String> {
    config
        .sections
        .iter()
        .find(|s| s.kind == SectionKind::Contact)
        .map(|s| s.id.clone())
}

fn jump_to(id: Option<String>) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        if let Some(id) = &id {
            scroll_to_section(id);
        }
    })
}

fn render_section(section: &SectionConfig, config: &SiteConfig, page: &PageState) -> Html {
    let heading = if section.title.is_empty() {
        html! {}
    } else {
        html! { <h2 class="section-title">{&section.title}</h2> }
    };
    let body = if section.body.is_empty() {
        html! {}
    } else {
        html! { <p class="section-body">{&section.body}</p> }
    };

    match section.kind {
        SectionKind::Hero => {
            let contact = contact_id(config);
            html! {
                <section id={section.id.clone()} class="hero">
                    <div class="hero-content" style={format!("transform: translateY({}px);", page.parallax)}>
                        <h1 class="hero-marca">{&config.brand}</h1>
                        <p class="hero-subtitle">{&config.tagline}</p>
                        <a
                            href={format!("#{}", contact.clone().unwrap_or_default())}
                            class="hero-cta"
                            onclick={jump_to(contact)}
                        >
                            {"Get a free quote"}
                        </a>
                    </div>
                </section>
            }
        }
        SectionKind::Gallery => html! {
            <section id={section.id.clone()} class="services">
                <div class="section-inner">
                    {heading}
                    {body}
                </div>
                <CardTrack cards={config.cards.clone()} track={page.track}>
                    <div class="track-end-content">
                        <h3>{"Your project could be next"}</h3>
                        <a
                            href={format!("#{}", contact_id(config).unwrap_or_default())}
                            class="hero-cta"
                            onclick={jump_to(contact_id(config))}
                        >
                            {"Start a conversation"}
                        </a>
                    </div>
                </CardTrack>
            </section>
        },
        SectionKind::Faq => html! {
            <section id={section.id.clone()} class="faq">
                <div class="section-inner">
                    {heading}
                    {body}
                    <Faq items={config.faqs.clone()} />
                </div>
            </section>
        },
        SectionKind::Contact => html! {
            <section id={section.id.clone()} class="contact">
                <div class="section-inner">
                    {heading}
                    {body}
                    <ul class="contact-details">
                        <li>{"Email: "}{&config.contact.email}</li>
                        <li>{"Phone: "}{&config.contact.phone}</li>
                    </ul>
                </div>
            </section>
        },
        SectionKind::Text => html! {
            <section id={section.id.clone()} class="text-section">
                <div class="section-inner">
                    {heading}
                    {body}
                </div>
            </section>
        },
    }
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let config = props.config.clone();
    let page = use_page_scroll(config.clone());

    html! {
        <div class="landing-page">
            <ProgressBar percent={page.progress} />
            <Nav
                brand={config.brand.clone()}
                sections={config.sections.clone()}
                scrolled={page.scrolled}
            />
            <Timeline sections={config.sections.clone()} active={page.active_section.clone()} />

            { for config.sections.iter().map(|section| render_section(section, &config, &page)) }

            <footer class="site-footer">
                <p>{format!("© {}", config.brand)}</p>
            </footer>

            <ScrollTopButton visible={page.show_scroll_top} />

            <style>
                {r#"
                .landing-page {
                    color: #ffffff;
                    background: #0b0f1a;
                    min-height: 100vh;
                }
                .scroll-progress {
                    position: fixed;
                    top: 0;
                    left: 0;
                    height: 3px;
                    background: linear-gradient(90deg, #00d4ff, #ff6b6b);
                    z-index: 1100;
                }
                .navbar {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 1000;
                    padding: 1.5rem 0;
                    transition: all 0.3s ease;
                }
                .navbar.scrolled {
                    padding: 0.75rem 0;
                    background: rgba(11, 15, 26, 0.92);
                    backdrop-filter: blur(10px);
                }
                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    color: #ffffff;
                    font-weight: 700;
                    text-decoration: none;
                }
                .nav-menu {
                    display: flex;
                    gap: 1.5rem;
                    list-style: none;
                    margin: 0;
                    padding: 0;
                }
                .nav-menu a {
                    color: rgba(255, 255, 255, 0.8);
                    text-decoration: none;
                }
                .hamburger {
                    display: none;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .hamburger span {
                    display: block;
                    width: 24px;
                    height: 2px;
                    margin: 5px 0;
                    background: #ffffff;
                }
                .section-timeline {
                    position: fixed;
                    right: 24px;
                    top: 50%;
                    transform: translateY(-50%);
                    z-index: 900;
                }
                .timeline-step {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    cursor: pointer;
                    transition: transform 0.2s ease;
                }
                .step-dot {
                    width: 10px;
                    height: 10px;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.3);
                }
                .step-dot.active {
                    background: #00d4ff;
                    box-shadow: 0 0 10px rgba(0, 212, 255, 0.6);
                }
                .step-connector {
                    width: 2px;
                    height: 28px;
                    background: rgba(255, 255, 255, 0.15);
                }
                .step-connector.active {
                    background: rgba(0, 212, 255, 0.6);
                }
                .hero {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    overflow: hidden;
                }
                .hero-marca {
                    font-size: 3.5rem;
                    margin-bottom: 1rem;
                }
                .hero-cta {
                    display: inline-block;
                    margin-top: 2rem;
                    padding: 0.9rem 2rem;
                    border-radius: 999px;
                    background: linear-gradient(135deg, #00d4ff, #0099cc);
                    color: #ffffff;
                    text-decoration: none;
                }
                .section-inner {
                    max-width: 900px;
                    margin: 0 auto;
                    padding: 6rem 1.5rem;
                }
                .faq-item {
                    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    padding: 1.2rem 0;
                    background: none;
                    border: none;
                    color: #ffffff;
                    font-size: 1.1rem;
                    cursor: pointer;
                }
                .faq-answer {
                    display: none;
                    color: rgba(255, 255, 255, 0.75);
                }
                .faq-item.active .faq-answer {
                    display: block;
                }
                .site-footer {
                    padding: 2rem;
                    text-align: center;
                    color: rgba(255, 255, 255, 0.5);
                }
                @media (max-width: 768px) {
                    .hamburger {
                        display: block;
                    }
                    .nav-menu {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        padding: 1.5rem;
                        background: rgba(11, 15, 26, 0.97);
                    }
                    .nav-menu.active {
                        display: flex;
                    }
                    .section-timeline {
                        display: none;
                    }
                    .hero-marca {
                        font-size: 2.4rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}

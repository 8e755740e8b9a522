use yew::prelude::*;

use crate::components::anchor_link::AnchorLink;
use crate::components::fade_in::FadeIn;
use crate::components::navbar::Navbar;
use crate::components::waitlist_form::{FormVariant, WaitlistFormView};

struct Card {
    icon: &'static str,
    title: &'static str,
    text: &'static str,
}

const ABOUT: &[Card] = &[
    Card {
        icon: "fas fa-brain",
        title: "AI at the core",
        text: "Every app we ship is built around models that learn how you work.",
    },
    Card {
        icon: "fas fa-lock",
        title: "Private by default",
        text: "Your data stays yours. Processing happens on-device wherever it can.",
    },
    Card {
        icon: "fas fa-bolt",
        title: "Fast and light",
        text: "Small, focused tools that open instantly and stay out of your way.",
    },
];

const FEATURES: &[Card] = &[
    Card {
        icon: "fas fa-comments",
        title: "Natural conversations",
        text: "Ask in plain language and get answers grounded in your own notes and files.",
    },
    Card {
        icon: "fas fa-calendar-check",
        title: "Smart scheduling",
        text: "Neuron finds the time, drafts the invite and reminds you before it starts.",
    },
    Card {
        icon: "fas fa-chart-line",
        title: "Insights that matter",
        text: "Weekly summaries of what changed, what is blocked and what needs you.",
    },
    Card {
        icon: "fas fa-plug",
        title: "Works with your tools",
        text: "Email, calendar and chat integrations out of the box.",
    },
];

const APPS: &[Card] = &[
    Card {
        icon: "fas fa-pen-nib",
        title: "Neuron Notes",
        text: "A notebook that links related ideas for you as you write.",
    },
    Card {
        icon: "fas fa-inbox",
        title: "Neuron Mail",
        text: "An inbox that sorts, summarises and drafts replies.",
    },
    Card {
        icon: "fas fa-list-check",
        title: "Neuron Tasks",
        text: "Turns conversations and emails into a task list that keeps itself current.",
    },
];

fn render_cards(cards: &[Card], class: &'static str) -> Html {
    cards
        .iter()
        .map(|card| {
            html! {
                <FadeIn class={class}>
                    <i class={card.icon}></i>
                    <h3>{card.title}</h3>
                    <p>{card.text}</p>
                </FadeIn>
            }
        })
        .collect()
}

fn section_header(title: &'static str, subtitle: &'static str) -> Html {
    html! {
        <FadeIn class="section-header">
            <h2>{title}</h2>
            <p>{subtitle}</p>
        </FadeIn>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <head>
                <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.2/css/all.min.css" integrity="sha512-SnH5WK+bZxgPHs44uWIX+LLJAJ9/2PkPKZ5QiAj6Ta86w+fsb2TkcmfRyVX3pBnMFcV7oQPJkl9QevSCWr3W6A==" crossorigin="anonymous" referrerpolicy="no-referrer" />
            </head>
            <Navbar />
            <header class="hero">
                <div class="hero-content">
                    <h1 class="hero-title">
                        {"AI apps for a "}<span class="highlight">{"smarter world"}</span>
                    </h1>
                    <p class="hero-subtitle">
                        {"We're building a family of small, private, AI-powered apps. Be the first to try them."}
                    </p>
                    <WaitlistFormView variant={FormVariant::Compact} />
                    <AnchorLink href="#features" classes="hero-secondary">{"See what's coming"}</AnchorLink>
                </div>
            </header>

            <section id="about" class="about-section">
                { section_header("Why Neuron", "Software that thinks with you, not for you.") }
                <div class="card-grid">
                    { render_cards(ABOUT, "about-card") }
                </div>
            </section>

            <section id="features" class="features-section">
                { section_header("Features", "Everything shares one brain, so every app gets smarter together.") }
                <div class="card-grid">
                    { render_cards(FEATURES, "feature-card") }
                </div>
            </section>

            <section id="apps" class="apps-section">
                { section_header("The apps", "Launching one by one. Waitlist members get in first.") }
                <div class="card-grid">
                    { render_cards(APPS, "app-card") }
                </div>
            </section>

            <section id="waitlist" class="waitlist-section">
                { section_header("Join the waitlist", "Early members shape what we build and keep founder pricing.") }
                <WaitlistFormView variant={FormVariant::Large} with_name=true button_label="Get Early Access" />
            </section>

            <footer class="footer">
                <p>{"© Neuron. Building AI-powered apps for a smarter world."}</p>
                <AnchorLink href="#about">{"Back to top"}</AnchorLink>
            </footer>
            <style>{LANDING_CSS}</style>
        </div>
    }
}

const LANDING_CSS: &str = r#"
    .navbar {
        position: fixed;
        top: 0;
        left: 0;
        width: 100%;
        z-index: 100;
        background: rgba(10, 10, 20, 0.9);
        backdrop-filter: blur(10px);
        transition: box-shadow 0.3s ease;
    }
    .nav-container {
        display: flex;
        align-items: center;
        justify-content: space-between;
        max-width: 1200px;
        margin: 0 auto;
        padding: 1rem 2rem;
    }
    .nav-links {
        display: flex;
        gap: 2rem;
    }
    .mobile-menu-btn {
        display: none;
        flex-direction: column;
        gap: 5px;
        background: none;
        border: none;
        cursor: pointer;
    }
    .mobile-menu-btn span {
        width: 24px;
        height: 2px;
        background: #fff;
        transition: all 0.3s ease;
    }
    .mobile-menu {
        display: none;
        flex-direction: column;
        padding: 1rem 2rem;
    }
    .mobile-menu.active {
        display: flex;
    }
    @media (max-width: 768px) {
        .nav-links {
            display: none;
        }
        .mobile-menu-btn {
            display: flex;
        }
    }
    .fade-in {
        opacity: 0;
        transform: translateY(30px);
        transition: opacity 0.6s ease, transform 0.6s ease;
    }
    .fade-in.visible {
        opacity: 1;
        transform: translateY(0);
    }
    .waitlist-form,
    .waitlist-form-large {
        display: flex;
        gap: 0.75rem;
        max-width: 520px;
        margin: 2rem auto;
    }
    .waitlist-form-large {
        flex-direction: column;
    }
    .waitlist-form input,
    .waitlist-form-large input {
        flex: 1;
        padding: 0.9rem 1.2rem;
        border: 1px solid rgba(255, 255, 255, 0.2);
        border-radius: 8px;
    }
    .input-invalid {
        border-color: #ff4757 !important;
        animation: shake 0.5s ease;
    }
    .btn-primary:disabled {
        opacity: 0.7;
        cursor: not-allowed;
    }
    @keyframes shake {
        0%, 100% { transform: translateX(0); }
        25% { transform: translateX(-5px); }
        50% { transform: translateX(5px); }
        75% { transform: translateX(-5px); }
    }
    .form-success {
        opacity: 0;
        transform: translateY(20px);
        transition: all 0.3s ease;
        text-align: center;
    }
    .form-success.shown {
        opacity: 1;
        transform: translateY(0);
    }
"#;

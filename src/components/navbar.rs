use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::anchor_link::AnchorLink;
use crate::utils::scroll::{current_scroll_y, navbar_shadow};

pub const NAV_LINKS: &[(&str, &str)] = &[
    ("#about", "About"),
    ("#features", "Features"),
    ("#apps", "Apps"),
    ("#waitlist", "Waitlist"),
];

/// Inline styles for the three hamburger bars; open turns them into an X.
pub fn hamburger_bar_styles(open: bool) -> [&'static str; 3] {
    if open {
        [
            "transform: rotate(45deg) translate(5px, 5px);",
            "opacity: 0;",
            "transform: rotate(-45deg) translate(5px, -5px);",
        ]
    } else {
        ["transform: none;", "opacity: 1;", "transform: none;"]
    }
}

#[function_component]
pub fn Navbar() -> Html {
    let menu_open = use_state(|| false);
    let shadow = use_state_eq(|| navbar_shadow(current_scroll_y()));

    // Track scroll depth for the drop shadow
    {
        let shadow = shadow.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let shadow = shadow.clone();
                        move || shadow.set(navbar_shadow(current_scroll_y()))
                    });
                    if let Err(e) = window
                        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                    {
                        log::error!("Failed to attach navbar scroll listener: {:?}", e);
                    }
                    shadow.set(navbar_shadow(current_scroll_y()));
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            let _ = win.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            );
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| menu_open.set(false))
    };

    let active = (*menu_open).then_some("active");
    let bars = hamburger_bar_styles(*menu_open);

    html! {
        <nav class="navbar" style={(*shadow).unwrap_or("box-shadow: none;")}>
            <div class="nav-container">
                <AnchorLink href="#" classes="nav-logo">{"Neuron"}</AnchorLink>
                <div class="nav-links">
                    { for NAV_LINKS.iter().map(|(href, label)| html! {
                        <AnchorLink href={*href}>{*label}</AnchorLink>
                    }) }
                </div>
                <button
                    class={classes!("mobile-menu-btn", active)}
                    aria-label="Toggle menu"
                    onclick={toggle_menu}
                >
                    { for bars.iter().map(|style| html! { <span style={*style}></span> }) }
                </button>
            </div>
            <div class={classes!("mobile-menu", active)}>
                { for NAV_LINKS.iter().map(|(href, label)| html! {
                    <AnchorLink href={*href} on_navigate={close_menu.clone()}>{*label}</AnchorLink>
                }) }
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hamburger_morphs_into_x() {
        let [top, middle, bottom] = hamburger_bar_styles(true);
        assert!(top.contains("rotate(45deg)"));
        assert_eq!(middle, "opacity: 0;");
        assert!(bottom.contains("rotate(-45deg)"));
        assert_eq!(hamburger_bar_styles(false)[1], "opacity: 1;");
    }

    #[test]
    fn nav_links_are_in_page_anchors() {
        for (href, _) in NAV_LINKS {
            assert!(crate::utils::scroll::anchor_target(href).is_some());
        }
    }
}

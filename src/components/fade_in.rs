use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

pub const FADE_IN_THRESHOLD: f64 = 0.1;
pub const FADE_IN_ROOT_MARGIN: &str = "0px 0px -50px 0px";

#[derive(Properties, PartialEq)]
pub struct FadeInProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

/// Wrapper that fades its content in the first time it scrolls into view.
#[function_component]
pub fn FadeIn(props: &FadeInProps) -> Html {
    let node = use_node_ref();
    let visible = use_state_eq(|| false);

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let mut observing = None;
                if let Some(element) = node.cast::<Element>() {
                    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new({
                        let visible = visible.clone();
                        move |entries: js_sys::Array, observer: IntersectionObserver| {
                            for entry in entries.iter() {
                                let entry: IntersectionObserverEntry = entry.unchecked_into();
                                if entry.is_intersecting() {
                                    visible.set(true);
                                    observer.unobserve(&entry.target());
                                }
                            }
                        }
                    });
                    let mut options = IntersectionObserverInit::new();
                    options.threshold(&JsValue::from_f64(FADE_IN_THRESHOLD));
                    options.root_margin(FADE_IN_ROOT_MARGIN);
                    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
                        Ok(observer) => {
                            observer.observe(&element);
                            observing = Some((observer, callback));
                        }
                        Err(e) => {
                            // No observer support, just show the content
                            log::warn!("IntersectionObserver unavailable: {:?}", e);
                            visible.set(true);
                        }
                    }
                }
                move || {
                    if let Some((observer, _callback)) = observing {
                        observer.disconnect();
                    }
                }
            },
            (),
        );
    }

    html! {
        <div
            ref={node}
            id={props.id.clone()}
            class={classes!(props.class.clone(), "fade-in", (*visible).then_some("visible"))}
        >
            { for props.children.iter() }
        </div>
    }
}

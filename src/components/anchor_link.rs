use yew::prelude::*;

use crate::utils::scroll::{anchor_target, smooth_scroll_to};

#[derive(Properties, PartialEq)]
pub struct AnchorLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub classes: Classes,
    /// Fired after the click has been handled, e.g. to close a menu.
    #[prop_or_default]
    pub on_navigate: Option<Callback<()>>,
    #[prop_or_default]
    pub children: Children,
}

/// In-page link that scrolls smoothly instead of jumping.
#[function_component]
pub fn AnchorLink(props: &AnchorLinkProps) -> Html {
    let onclick = {
        let href = props.href.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(id) = anchor_target(&href) {
                e.prevent_default();
                smooth_scroll_to(id);
            }
            if let Some(callback) = &on_navigate {
                callback.emit(());
            }
        })
    };

    html! {
        <a href={props.href.clone()} class={props.classes.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}

use web_sys::Element;
use yew::prelude::*;

use crate::{hooks::use_assets, utils::markdown_to_html};

#[derive(Properties, Clone, PartialEq)]
pub struct MarkdownBlockProps {
    pub markdown: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Render a Markdown fragment as sanitized HTML. The host element's children
/// are written directly and never diffed by Yew.
#[function_component(MarkdownBlock)]
pub fn markdown_block(props: &MarkdownBlockProps) -> Html {
    let host_ref = use_node_ref();
    let assets = use_assets();
    let rendered = use_memo((props.markdown.clone(), assets), |(markdown, assets)| {
        markdown_to_html(markdown, assets)
    });

    {
        let host_ref = host_ref.clone();
        use_effect_with(rendered, move |rendered| {
            if let Some(host) = host_ref.cast::<Element>() {
                host.set_inner_html(rendered.as_str());
            }
            || ()
        });
    }

    html! {
        <div ref={host_ref} class={classes!("markdown-body", props.class.clone())} />
    }
}

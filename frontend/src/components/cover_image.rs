use scicover_shared::image::{ImageLoad, ImageLoadState};
use yew::prelude::*;

use crate::hooks::use_assets;

#[derive(Properties, PartialEq, Clone)]
pub struct CoverImageProps {
    /// Cover path or URL as stored in the data files.
    pub src: Option<String>,
    /// Journal of the article; picks the fallback cover.
    pub journal: String,
    pub alt: String,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub container_class: Classes,
    #[prop_or_default]
    pub eager: bool,
}

/// Cover image with a shimmer placeholder that swaps in the journal's default
/// cover once if the real one fails to load.
#[function_component(CoverImage)]
pub fn cover_image(props: &CoverImageProps) -> Html {
    let assets = use_assets();
    let primary = props.src.as_deref().map(|src| assets.resolve(src));
    let fallback = assets.resolve_default_cover(&props.journal);

    let load = {
        let primary = primary.clone();
        let fallback = fallback.clone();
        use_state(move || ImageLoad::new(primary, fallback))
    };

    {
        let load = load.clone();
        use_effect_with((primary, fallback), move |(primary, fallback)| {
            // A new source restarts the sequence, fallback budget included.
            let fresh = ImageLoad::new(primary.clone(), fallback.clone());
            if *load != fresh {
                load.set(fresh);
            }
            || ()
        });
    }

    let on_image_load = {
        let load = load.clone();
        Callback::from(move |_: Event| {
            let mut next = (*load).clone();
            next.on_load();
            load.set(next);
        })
    };
    let on_image_error = {
        let load = load.clone();
        Callback::from(move |_: Event| {
            let mut next = (*load).clone();
            next.on_error();
            load.set(next);
        })
    };

    let settled = matches!(load.state(), ImageLoadState::Loaded | ImageLoadState::FailedFallback);

    let container_classes = classes!(
        props.container_class.clone(),
        "relative",
        "overflow-hidden",
        if !settled { "bg-[var(--surface-alt)]" } else { "" }
    );

    let image_classes = classes!(
        props.class.clone(),
        load.uses_fallback().then_some("cover-fallback"),
        "transition-opacity",
        "duration-500",
        if load.state() == ImageLoadState::Loaded { "opacity-100" } else { "opacity-0" }
    );

    html! {
        <div class={container_classes}>
            {
                if !settled {
                    html! {
                        <div class={classes!(
                            "absolute",
                            "inset-0",
                            "bg-gradient-to-br",
                            "from-[var(--surface-alt)]",
                            "to-[var(--surface)]",
                            "animate-pulse",
                            "pointer-events-none"
                        )} />
                    }
                } else {
                    html! {}
                }
            }
            <img
                src={load.src().to_string()}
                alt={props.alt.clone()}
                class={image_classes}
                loading={if props.eager { "eager" } else { "lazy" }}
                decoding="async"
                onload={on_image_load}
                onerror={on_image_error}
            />
        </div>
    }
}

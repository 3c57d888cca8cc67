use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, MouseEvent};
use yew::prelude::*;

mod catalog;
mod config;
mod controller {
    pub mod effects;
    pub mod error;
    pub mod page;
    pub mod scheduler;
    pub mod state;
}
mod pages {
    pub mod home;
}
mod components {
    pub mod toast;
}

use catalog::NAV_LINKS;
use pages::home::FelineFrenzy;

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let listener = window().map(|win| {
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_y = window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
                    is_scrolled.set(scroll_y > 400.0); // roughly the hero image height
                }) as Box<dyn FnMut()>);

                if let Err(err) = win
                    .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                {
                    gloo_console::error!("failed to attach scroll listener:", err);
                }
                (win, scroll_callback)
            });

            move || {
                if let Some((win, scroll_callback)) = listener {
                    let _ = win.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <h1 class="nav-logo">{"🐱 Feline Frenzy"}</h1>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for NAV_LINKS.iter().map(|label| html! {
                        <button class="nav-link" onclick={close_menu.clone()}>{*label}</button>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: sticky;
                    top: 0;
                    background: #ffffff;
                    box-shadow: 0 2px 6px rgba(0, 0, 0, 0.08);
                    padding: 1rem;
                    z-index: 20;
                    transition: background 0.3s ease;
                }
                .top-nav.scrolled { background: rgba(255, 255, 255, 0.9); backdrop-filter: blur(8px); }
                .nav-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .nav-logo { font-size: 1.75rem; color: #7c3aed; margin: 0; }
                .nav-right { display: flex; gap: 1rem; }
                .nav-link { background: none; border: none; font-size: 1rem; cursor: pointer; }
                .burger-menu { display: none; background: none; border: none; cursor: pointer; }
                .burger-menu span { display: block; width: 24px; height: 2px; margin: 5px 0; background: #7c3aed; }
                @media (max-width: 640px) {
                    .burger-menu { display: block; }
                    .nav-right { display: none; }
                    .nav-right.mobile-menu-open {
                        display: flex;
                        flex-direction: column;
                        position: absolute;
                        top: 100%;
                        right: 1rem;
                        background: #ffffff;
                        padding: 1rem;
                        border-radius: 8px;
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <div class="app">
            <Nav />
            <FelineFrenzy />
        </div>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting Feline Frenzy");
    yew::Renderer::<App>::new().render();
}

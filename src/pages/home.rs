use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::catalog::{BREEDS, CHARACTERISTICS, FACTS, HERO_IMAGE};
use crate::components::toast::ToastSlot;
use crate::config::PageTimings;
use crate::controller::effects::{CanvasConfetti, Toast, ToastSink};
use crate::controller::page::PageController;
use crate::controller::scheduler::BrowserScheduler;
use crate::controller::state::{PageState, Tab, PROGRESS_MAX};

type Controller = PageController<BrowserScheduler>;

fn with_controller(slot: &Rc<RefCell<Option<Controller>>>, action: impl FnOnce(&mut Controller)) {
    match slot.borrow_mut().as_mut() {
        Some(page) => action(page),
        None => log::debug!("page controller not mounted, ignoring input"),
    }
}

#[function_component]
pub fn FelineFrenzy() -> Html {
    let snapshot = use_state(PageState::default);
    let toast = use_state(|| None::<Toast>);
    let controller = use_mut_ref(|| None::<Controller>);
    let toast_timer = use_mut_ref(|| None::<Timeout>);

    // Activate on mount, release every timer on unmount
    {
        let snapshot = snapshot.clone();
        let toast = toast.clone();
        let controller = controller.clone();
        let toast_timer = toast_timer.clone();

        use_effect_with_deps(move |_| {
            let timings = PageTimings::default();
            let lifetime = u32::try_from(timings.toast_lifetime.as_millis()).unwrap_or(u32::MAX);

            let on_toast = {
                let toast_timer = toast_timer.clone();
                Callback::from(move |next: Toast| {
                    let toast_clear = toast.clone();
                    toast.set(Some(next));
                    // replacing the handle drops the previous dismissal
                    *toast_timer.borrow_mut() = Some(Timeout::new(lifetime, move || {
                        toast_clear.set(None);
                    }));
                })
            };

            let mut page = PageController::new(
                BrowserScheduler::default(),
                timings,
                Rc::new(CanvasConfetti),
                Rc::new(ToastSink::new(on_toast)),
            );
            page.set_observer(move |state: &PageState| snapshot.set(state.clone()));
            page.on_activate();
            *controller.borrow_mut() = Some(page);

            move || {
                if let Some(mut page) = controller.borrow_mut().take() {
                    page.on_deactivate();
                }
                toast_timer.borrow_mut().take();
            }
        }, ());
    }

    let on_like = {
        let controller = controller.clone();
        Callback::from(move |_: MouseEvent| with_controller(&controller, |page| page.like()))
    };

    let on_email_input = {
        let controller = controller.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            with_controller(&controller, |page| page.set_email(input.value()));
        })
    };

    let on_subscribe = {
        let controller = controller.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            // rejection is already reported through the toast
            with_controller(&controller, |page| {
                let _ = page.subscribe();
            });
        })
    };

    let select_tab = |tab: Tab| {
        let controller = controller.clone();
        Callback::from(move |_: MouseEvent| with_controller(&controller, |page| page.select_tab(tab)))
    };

    let on_prev_breed = {
        let controller = controller.clone();
        Callback::from(move |_: MouseEvent| with_controller(&controller, |page| page.previous_breed()))
    };

    let on_next_breed = {
        let controller = controller.clone();
        Callback::from(move |_: MouseEvent| with_controller(&controller, |page| page.next_breed()))
    };

    let on_dismiss_toast = {
        let toast = toast.clone();
        let toast_timer = toast_timer.clone();
        Callback::from(move |_: ()| {
            toast_timer.borrow_mut().take();
            toast.set(None);
        })
    };

    let state = (*snapshot).clone();
    let fact = FACTS.get(state.fact_index).copied().unwrap_or_default();
    let fact_class = if state.fact_visible { "fact-panel visible" } else { "fact-panel" };

    html! {
        <div class="frenzy">
            <section class="hero">
                <img src={HERO_IMAGE} alt="Cute cat" class="hero__image" />
                <h2 class="hero__title">{"Welcome to Feline Frenzy"}</h2>
                <p class="hero__subtitle">{"Everything you never knew you needed to know about cats."}</p>
            </section>

            <section class={fact_class}>
                <h3>{"Did you know?"}</h3>
                <p>{fact}</p>
            </section>

            <section class="tabs">
                <div class="tabs__list">
                    { for [Tab::Characteristics, Tab::Breeds].into_iter().map(|tab| {
                        let class = if state.active_tab == tab { "tabs__trigger active" } else { "tabs__trigger" };
                        html! {
                            <button class={class} onclick={select_tab(tab)}>{tab.label()}</button>
                        }
                    }) }
                </div>
                <div class="card">
                    {
                        match state.active_tab {
                            Tab::Characteristics => html! {
                                <>
                                    <h3>{"Characteristics of Cats"}</h3>
                                    <p class="card__description">{"What makes cats unique?"}</p>
                                    <ul>
                                        { for CHARACTERISTICS.iter().map(|item| html! { <li>{*item}</li> }) }
                                    </ul>
                                </>
                            },
                            Tab::Breeds => html! {
                                <>
                                    <h3>{"Popular Cat Breeds"}</h3>
                                    <p class="card__description">{"Some well-known cat breeds around the world"}</p>
                                    <ul>
                                        { for BREEDS.iter().map(|breed| html! { <li>{breed.name}</li> }) }
                                    </ul>
                                </>
                            },
                        }
                    }
                </div>
            </section>

            <section class="carousel">
                <button class="carousel__nav" onclick={on_prev_breed}>{"‹"}</button>
                {
                    if let Some(breed) = BREEDS.get(state.carousel_index) {
                        html! {
                            <div class="carousel__slide">
                                <img src={breed.image_ref} alt={breed.name} />
                                <h3>{breed.name}</h3>
                                <p>{breed.description}</p>
                                <span class="carousel__rating">{format!("★ {:.1} / 5", breed.rating)}</span>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
                <button class="carousel__nav" onclick={on_next_breed}>{"›"}</button>
                <div class="carousel__dots">
                    { for (0..BREEDS.len()).map(|i| {
                        let class = if i == state.carousel_index { "dot active" } else { "dot" };
                        html! { <span class={class}></span> }
                    }) }
                </div>
            </section>

            <section class="adoption">
                <h3>{"Adoption drive"}</h3>
                <div class="progress">
                    <div class="progress__bar" style={format!("width: {}%;", state.progress)}></div>
                </div>
                <p>{format!("{}% of {} shelter cats found a home", state.progress, PROGRESS_MAX)}</p>
            </section>

            <section class="like">
                <button class="like__button" onclick={on_like}>
                    {format!("♥ Like this page ({})", state.like_count)}
                </button>
            </section>

            <section class="newsletter">
                <h3>{"Join the clowder"}</h3>
                <p>{"Get a weekly dose of cat facts straight to your inbox."}</p>
                <form class="newsletter__form" onsubmit={on_subscribe}>
                    <input
                        type="text"
                        class="newsletter__input"
                        placeholder="you@example.com"
                        value={state.email.clone()}
                        oninput={on_email_input}
                    />
                    <button type="submit" class="newsletter__submit">{"Subscribe"}</button>
                </form>
            </section>

            <ToastSlot toast={(*toast).clone()} on_dismiss={on_dismiss_toast} />

            <style>
                {r#"
                .frenzy {
                    max-width: 56rem;
                    margin: 0 auto;
                    padding: 2rem;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }
                .hero { text-align: center; margin-bottom: 2rem; }
                .hero__image {
                    width: 100%;
                    height: 400px;
                    object-fit: cover;
                    border-radius: 12px;
                    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.15);
                    animation: riseIn 0.5s ease-out;
                }
                .hero__title { font-size: 2.5rem; color: #7c3aed; }
                .fact-panel {
                    background: #ffffff;
                    border-radius: 12px;
                    padding: 1.5rem;
                    margin-bottom: 2rem;
                    opacity: 0;
                    transform: translateY(20px);
                    transition: opacity 0.5s ease, transform 0.5s ease;
                }
                .fact-panel.visible { opacity: 1; transform: translateY(0); }
                .tabs__list { display: grid; grid-template-columns: 1fr 1fr; gap: 0.5rem; }
                .tabs__trigger {
                    padding: 0.75rem;
                    border: none;
                    border-radius: 8px;
                    background: #ede9fe;
                    cursor: pointer;
                }
                .tabs__trigger.active { background: #7c3aed; color: #ffffff; }
                .card {
                    background: #ffffff;
                    border-radius: 12px;
                    padding: 1.5rem;
                    margin: 1rem 0 2rem;
                }
                .card__description { color: #6b7280; }
                .carousel {
                    position: relative;
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    margin-bottom: 2rem;
                }
                .carousel__slide { flex: 1; text-align: center; }
                .carousel__slide img {
                    width: 100%;
                    height: 280px;
                    object-fit: cover;
                    border-radius: 12px;
                }
                .carousel__nav {
                    font-size: 2rem;
                    background: none;
                    border: none;
                    cursor: pointer;
                    color: #7c3aed;
                }
                .carousel__rating { color: #f59e0b; font-weight: 600; }
                .carousel__dots { width: 100%; display: flex; justify-content: center; gap: 0.5rem; }
                .dot { width: 10px; height: 10px; border-radius: 50%; background: #ddd6fe; }
                .dot.active { background: #7c3aed; }
                .progress {
                    height: 12px;
                    background: #ede9fe;
                    border-radius: 9999px;
                    overflow: hidden;
                }
                .progress__bar { height: 100%; background: linear-gradient(90deg, #a855f7, #ec4899); }
                .like { text-align: center; margin: 2rem 0; }
                .like__button {
                    padding: 0.75rem 1.5rem;
                    font-size: 1.1rem;
                    border: 2px solid #7c3aed;
                    border-radius: 9999px;
                    background: #ffffff;
                    cursor: pointer;
                }
                .like__button:hover { color: #ef4444; }
                .newsletter__form { display: flex; gap: 0.5rem; }
                .newsletter__input {
                    flex: 1;
                    padding: 0.75rem;
                    border: 1px solid #d1d5db;
                    border-radius: 8px;
                }
                .newsletter__submit {
                    padding: 0.75rem 1.25rem;
                    border: none;
                    border-radius: 8px;
                    background: #ec4899;
                    color: #ffffff;
                    cursor: pointer;
                }
                @keyframes riseIn {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                "#}
            </style>
        </div>
    }
}

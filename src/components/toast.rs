use yew::prelude::*;

use crate::controller::effects::{Toast, ToastKind};

#[derive(Properties, PartialEq)]
pub struct ToastSlotProps {
    pub toast: Option<Toast>,
    pub on_dismiss: Callback<()>,
}

#[function_component(ToastSlot)]
pub fn toast_slot(props: &ToastSlotProps) -> Html {
    let Some(toast) = props.toast.as_ref() else {
        return html! {};
    };

    let kind_class = match toast.kind {
        ToastKind::Success => "toast toast--success",
        ToastKind::Error => "toast toast--error",
    };
    let on_click = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    html! {
        <div class={kind_class} role="status" onclick={on_click}>
            <div class="toast__title">{toast.title.clone()}</div>
            <div class="toast__message">{toast.message.clone()}</div>
            <style>
                {r#"
                .toast {
                    position: fixed;
                    bottom: 1.5rem;
                    right: 1.5rem;
                    min-width: 260px;
                    padding: 1rem 1.25rem;
                    border-radius: 12px;
                    background: #ffffff;
                    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.15);
                    cursor: pointer;
                    animation: toastIn 0.3s ease-out;
                    z-index: 50;
                }
                .toast--success { border-left: 6px solid #22c55e; }
                .toast--error { border-left: 6px solid #ef4444; }
                .toast__title { font-weight: 700; margin-bottom: 0.25rem; }
                .toast__message { color: #4b5563; }
                @keyframes toastIn {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                "#}
            </style>
        </div>
    }
}

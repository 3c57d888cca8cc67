use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Function, Object, Reflect};
use yew::Callback;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConfettiBurst {
    pub particle_count: u32,
    pub spread: f64,
    /// Vertical origin as a fraction of the viewport height.
    pub origin_y: f64,
}

pub trait Celebration {
    fn celebrate(&self, burst: &ConfettiBurst);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
}

impl Toast {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            title: title.into(),
            message: message.into(),
        }
    }
}

pub trait Notifier {
    fn notify(&self, toast: Toast);
}

/// Fires the page-global `confetti` function from the canvas-confetti script
/// tag. Missing script just means no particles.
pub struct CanvasConfetti;

impl CanvasConfetti {
    fn options(burst: &ConfettiBurst) -> Result<Object, JsValue> {
        let origin = Object::new();
        Reflect::set(&origin, &"y".into(), &JsValue::from_f64(burst.origin_y))?;

        let options = Object::new();
        Reflect::set(
            &options,
            &"particleCount".into(),
            &JsValue::from(burst.particle_count),
        )?;
        Reflect::set(&options, &"spread".into(), &JsValue::from_f64(burst.spread))?;
        Reflect::set(&options, &"origin".into(), &origin)?;
        Ok(options)
    }
}

impl Celebration for CanvasConfetti {
    fn celebrate(&self, burst: &ConfettiBurst) {
        let Some(window) = web_sys::window() else {
            log::warn!("no window, skipping confetti");
            return;
        };

        let confetti = match Reflect::get(&window, &"confetti".into()) {
            Ok(value) if value.is_function() => value.unchecked_into::<Function>(),
            _ => {
                log::warn!("canvas-confetti not loaded, skipping burst");
                return;
            }
        };

        let result = Self::options(burst).and_then(|options| confetti.call1(&JsValue::NULL, &options));
        if let Err(err) = result {
            gloo_console::error!("confetti burst failed:", err);
        }
    }
}

/// Routes toasts into the page's toast slot.
pub struct ToastSink {
    on_toast: Callback<Toast>,
}

impl ToastSink {
    pub fn new(on_toast: Callback<Toast>) -> Self {
        Self { on_toast }
    }
}

impl Notifier for ToastSink {
    fn notify(&self, toast: Toast) {
        self.on_toast.emit(toast);
    }
}

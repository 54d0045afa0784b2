use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

/// Overlay plus modal surface. Header and buttons are rendered by the caller.
#[component]
pub fn ModalFrame(
    on_close: Callback<()>,
    /// Close when the overlay itself is clicked (default: true).
    #[prop(optional)]
    close_on_overlay: Option<bool>,
    #[prop(optional)] z_index: Option<i32>,
    #[prop(optional, into)] modal_class: Option<String>,
    #[prop(optional, into)] modal_style: Option<String>,
    children: Children,
) -> impl IntoView {
    let close_on_overlay = close_on_overlay.unwrap_or(true);
    let z_index = z_index.unwrap_or(1000);
    // Press and release must both land on the overlay, otherwise a text
    // selection dragged out of the modal would close it.
    let pressed_on_overlay = RwSignal::new(false);

    let on_overlay = |ev: &ev::MouseEvent| match (ev.target(), ev.current_target()) {
        (Some(target), Some(current)) => target == current,
        _ => false,
    };

    let handle_mouse_down = move |ev: ev::MouseEvent| {
        pressed_on_overlay.set(on_overlay(&ev));
    };

    let handle_click = move |ev: ev::MouseEvent| {
        let should_close = close_on_overlay && pressed_on_overlay.get() && on_overlay(&ev);
        pressed_on_overlay.set(false);
        if should_close {
            // Closing on the next tick keeps the delegated click handler alive
            // while its own overlay is being removed.
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_close.run(());
            });
        }
    };

    let surface_class = match modal_class {
        Some(cls) => format!("modal {cls}"),
        None => "modal".to_string(),
    };
    let surface_style = match modal_style {
        Some(extra) => format!("position: relative; {extra}"),
        None => "position: relative;".to_string(),
    };

    view! {
        <div
            class="modal-overlay"
            style=format!("z-index: {z_index};")
            on:mousedown=handle_mouse_down
            on:click=handle_click
        >
            <div class=surface_class style=surface_style on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                {children()}
            </div>
        </div>
    }
}

/// Compact header used inside [`ModalFrame`]: title plus close button.
#[component]
pub fn ModalHeader(#[prop(into)] title: String, on_close: Callback<()>) -> impl IntoView {
    view! {
        <div class="modal__header">
            <h2 class="modal__title">{title}</h2>
            <button class="modal__close" title="Cerrar" on:click=move |_| on_close.run(())>
                {crate::shared::icons::small_icon("x")}
            </button>
        </div>
    }
}

/// Yes/no confirmation in a modal. `pending` disables both buttons while the
/// confirmed action is running.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(optional, into)] confirm_label: Option<String>,
    /// Renders the confirm button as a destructive action.
    #[prop(optional)]
    danger: bool,
    #[prop(optional, into)] pending: Signal<bool>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let confirm_label = confirm_label.unwrap_or_else(|| "Confirmar".to_string());
    let confirm_class = if danger { "btn-danger" } else { "" };

    view! {
        <ModalFrame on_close=on_cancel modal_class="modal--confirm">
            <ModalHeader title=title on_close=on_cancel />
            <div class="modal__body">
                <p>{message}</p>
            </div>
            <div class="modal__footer">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_cancel.run(())
                    disabled=pending
                >
                    "Cancelar"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    class=confirm_class
                    on_click=move |_| on_confirm.run(())
                    disabled=pending
                >
                    {move || if pending.get() { "Procesando...".to_string() } else { confirm_label.clone() }}
                </Button>
            </div>
        </ModalFrame>
    }
}

mod app;
mod colors;
mod config;
mod gate;
mod members;
mod rules;
mod transport;
mod updates;

use std::cell::RefCell;

use leptos::mount::mount_to;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

const MOUNT_ID: &str = "app";

thread_local! {
    // Keeps the dashboard alive; dropping the handle unmounts it.
    static DASHBOARD: RefCell<Option<Box<dyn std::any::Any>>> = const { RefCell::new(None) };
}

/// `#app` when the page provides it, else `<body>`.
fn mount_target() -> Option<HtmlElement> {
    let document = web_sys::window()?.document()?;
    document
        .get_element_by_id(MOUNT_ID)
        .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        .or_else(|| document.body())
}

fn main() {
    console_error_panic_hook::set_once();

    let Some(target) = mount_target() else {
        web_sys::console::error_1(&format!("No #{MOUNT_ID} or <body> to mount into").into());
        return;
    };

    DASHBOARD.with(|slot| {
        // Unmount a previous instance before its replacement starts loading.
        drop(slot.borrow_mut().take());
        *slot.borrow_mut() = Some(Box::new(mount_to(target, app::App)));
    });
}

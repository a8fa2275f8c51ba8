use gloo_storage::{LocalStorage, Storage};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use house_points_shared::{AccessGate, GateError};

use crate::colors::{BRAND_GOLD, BRAND_PURPLE, rgba_css};
use crate::config;

/// Persisted "access granted" flag from a previous visit.
pub fn load_access_flag() -> bool {
    LocalStorage::get::<bool>(config::ACCESS_FLAG_KEY).unwrap_or(false)
}

fn store_access_flag() {
    if let Err(e) = LocalStorage::set(config::ACCESS_FLAG_KEY, true) {
        web_sys::console::warn_1(&format!("Failed to persist access flag: {e}").into());
    }
}

fn gate_message(error: GateError) -> String {
    match error {
        GateError::NotConfigured => {
            format!("{error} Set {} when building the site.", config::ACCESS_CODE_VAR)
        }
        GateError::Incorrect => error.to_string(),
    }
}

/// Passphrase screen shown until the gate is unlocked.
#[component]
pub fn PasswordGate(access: RwSignal<AccessGate>) -> impl IntoView {
    let input: RwSignal<String> = RwSignal::new(String::new());
    let error: RwSignal<Option<String>> = RwSignal::new(None);

    let on_input = move |e: leptos::ev::Event| {
        let Some(target) = e.target() else {
            return;
        };
        let Ok(el) = target.dyn_into::<web_sys::HtmlInputElement>() else {
            return;
        };
        input.set(el.value());
    };

    let on_submit = move |e: leptos::ev::SubmitEvent| {
        e.prevent_default();
        let mut gate = access.get_untracked();
        match gate.submit(&input.get_untracked()) {
            Ok(()) => {
                store_access_flag();
                error.set(None);
                access.set(gate);
            }
            Err(e) => error.set(Some(gate_message(e))),
        }
    };

    let panel = format!(
        "width: 100%; max-width: 28rem; border-radius: 16px; border: 1px solid rgba(255,255,255,0.25); box-shadow: 0 20px 40px -12px rgba(28,25,23,0.25); padding: 24px; background: linear-gradient(135deg, {}, {}, rgba(255,255,255,0.7));",
        rgba_css(BRAND_PURPLE.rgb, 0.15),
        rgba_css(BRAND_PURPLE.rgb, 0.08)
    );
    let button = format!(
        "width: 100%; padding: 8px 16px; border-radius: 12px; border: none; font-weight: 600; cursor: pointer; color: #1c1917; background: {};",
        rgba_css(BRAND_GOLD.rgb, 1.0)
    );

    view! {
        <div style="min-height: 100vh; display: flex; align-items: center; justify-content: center; padding: 24px; box-sizing: border-box;">
            <div style=panel>
                <div style="text-align: center; margin-bottom: 16px;">
                    <div style="font-size: 1.5rem; font-weight: 800; color: #1c1917;">"House Points"</div>
                    <div style="color: #57534e; font-size: 0.875rem; margin-top: 4px;">"Enter the access code to continue"</div>
                </div>
                <form on:submit=on_submit style="display: flex; flex-direction: column; gap: 12px;">
                    <input
                        type="password"
                        placeholder="Access code"
                        style="width: 100%; box-sizing: border-box; border-radius: 12px; border: 1px solid rgba(255,255,255,0.3); background: rgba(255,255,255,0.7); padding: 8px 12px; font-size: 0.875rem; color: #1c1917;"
                        prop:value=move || input.get()
                        on:input=on_input
                    />
                    {move || {
                        error
                            .get()
                            .map(|message| {
                                view! {
                                    <div style="font-size: 0.875rem; color: #e11d48;">{message}</div>
                                }
                            })
                    }}
                    <button type="submit" style=button>"Unlock"</button>
                </form>
                <div style="margin-top: 16px; font-size: 11px; color: #78716c; text-align: center;">
                    "Ask someone for the current code."
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use house_points_shared::GateError;

    use super::gate_message;

    #[test]
    fn not_configured_message_names_the_variable() {
        let message = gate_message(GateError::NotConfigured);
        assert!(message.contains("HOUSE_POINTS_ACCESS_CODE"), "got {message}");
        assert_eq!(gate_message(GateError::Incorrect), "Incorrect code. Try again.");
    }
}

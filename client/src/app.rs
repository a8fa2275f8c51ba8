use std::cell::RefCell;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use gloo_timers::callback::Interval;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use house_points_shared::{AccessGate, LoadStatus, SnapshotLoader};

use crate::colors::{BRAND_GOLD, BRAND_PURPLE, rgba_css};
use crate::config;
use crate::gate::{self, PasswordGate};
use crate::members::MembersPage;
use crate::rules::RulesPage;
use crate::transport::GlooTransport;
use crate::updates::UpdatesPage;

/// Newtype wrappers so each signal gets its own Leptos context slot.
#[derive(Clone, Copy)]
pub(crate) struct SnapshotStatus(pub RwSignal<LoadStatus>);
#[derive(Clone, Copy)]
pub(crate) struct Now(pub RwSignal<DateTime<Utc>>);

pub(crate) const PAGE_STYLE: &str = "max-width: 72rem; margin: 0 auto; padding: 32px 16px;";
pub(crate) const PAGE_HEADER_STYLE: &str = "display: flex; align-items: center; justify-content: space-between; gap: 12px; margin-bottom: 24px;";
pub(crate) const PAGE_TITLE_STYLE: &str = "font-size: 1.875rem; font-weight: 800; color: #1c1917; letter-spacing: -0.025em; margin: 0;";
pub(crate) const CARD_GRID_STYLE: &str = "display: grid; grid-template-columns: repeat(auto-fill, minmax(min(100%, 26rem), 1fr)); gap: 24px;";
pub(crate) const FEED_STYLE: &str = "display: grid; gap: 16px;";

type Loader = SnapshotLoader<GlooTransport>;

thread_local! {
    static AGE_REFRESH: RefCell<Option<Interval>> = const { RefCell::new(None) };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Tab {
    Members,
    Updates,
    Rules,
}

impl Tab {
    const ALL: [Tab; 3] = [Tab::Members, Tab::Updates, Tab::Rules];

    fn label(self) -> &'static str {
        match self {
            Self::Members => "Members",
            Self::Updates => "Updates",
            Self::Rules => "Rules",
        }
    }

    fn hash(self) -> &'static str {
        match self {
            Self::Members => "#/",
            Self::Updates => "#/updates",
            Self::Rules => "#/rules",
        }
    }

    fn from_hash(hash: &str) -> Self {
        match hash.trim_start_matches('#').trim_matches('/') {
            "updates" => Self::Updates,
            "rules" => Self::Rules,
            _ => Self::Members,
        }
    }
}

fn current_hash() -> String {
    web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .unwrap_or_default()
}

fn set_hash(tab: Tab) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let _ = window.location().set_hash(tab.hash());
}

/// Root component: the access gate, then the dashboard.
#[component]
pub fn App() -> impl IntoView {
    let granted = gate::load_access_flag();
    let access = AccessGate::new(config::access_code(), granted);
    if !access.is_configured() && !granted {
        web_sys::console::warn_1(
            &format!("{} is not set; the access gate cannot be unlocked", config::ACCESS_CODE_VAR)
                .into(),
        );
    }
    let access: RwSignal<AccessGate> = RwSignal::new(access);

    let background = format!(
        "min-height: 100vh; background-color: {}; background-image: radial-gradient(circle at 1px 1px, rgba(28,25,23,0.08) 1px, transparent 1px); background-size: 18px 18px; font-family: 'Inter', system-ui, sans-serif;",
        rgba_css(BRAND_GOLD.rgb, 0.15)
    );

    view! {
        <div style=background>
            {move || {
                if access.with(AccessGate::is_granted) {
                    view! { <Dashboard /> }.into_any()
                } else {
                    view! { <PasswordGate access=access /> }.into_any()
                }
            }}
        </div>
    }
}

/// Kick off one snapshot load. Stale or post-teardown results are dropped by the loader.
fn start_load(loader: Arc<Loader>, status: RwSignal<LoadStatus>) {
    status.set(LoadStatus::Loading);
    web_sys::console::info_1(&"Snapshot load started".into());
    spawn_local(async move {
        match loader.load(js_sys::Date::now() as i64).await {
            Some(next) => {
                match (next.error(), next.snapshot()) {
                    (Some(message), _) => {
                        web_sys::console::warn_1(&format!("Snapshot load failed: {message}").into());
                    }
                    (None, Some(snapshot)) => web_sys::console::info_1(
                        &format!(
                            "Snapshot loaded: members={} updates={} rules={}",
                            snapshot.members.len(),
                            snapshot.updates.len(),
                            snapshot.rules.len()
                        )
                        .into(),
                    ),
                    (None, None) => {}
                }
                status.set(next);
            }
            None => {
                web_sys::console::info_1(&"Discarded a superseded snapshot load".into());
            }
        }
    });
}

#[component]
fn Dashboard() -> impl IntoView {
    let status: RwSignal<LoadStatus> = RwSignal::new(LoadStatus::Loading);
    // Drives relative-age labels; no refetch.
    let now: RwSignal<DateTime<Utc>> = RwSignal::new(Utc::now());
    let tab: RwSignal<Tab> = RwSignal::new(Tab::from_hash(&current_hash()));

    provide_context(SnapshotStatus(status));
    provide_context(Now(now));

    let loader = Arc::new(Loader::new(
        GlooTransport,
        config::data_url().map(str::to_owned),
    ));
    start_load(Arc::clone(&loader), status);
    on_cleanup(move || loader.close());

    let interval = Interval::new(config::AGE_REFRESH_MS, move || now.set(Utc::now()));
    AGE_REFRESH.with(|slot| {
        *slot.borrow_mut() = Some(interval);
    });
    on_cleanup(|| {
        AGE_REFRESH.with(|slot| {
            slot.borrow_mut().take();
        });
    });

    view! {
        <Nav tab=tab />
        <StatusBanner />
        {move || match tab.get() {
            Tab::Members => view! { <MembersPage /> }.into_any(),
            Tab::Updates => view! { <UpdatesPage /> }.into_any(),
            Tab::Rules => view! { <RulesPage /> }.into_any(),
        }}
    }
}

#[component]
fn Nav(tab: RwSignal<Tab>) -> impl IntoView {
    let bar = format!(
        "position: sticky; top: 0; z-index: 40; backdrop-filter: blur(12px); background: linear-gradient(to bottom, {}, transparent);",
        rgba_css(BRAND_PURPLE.rgb, 0.14)
    );

    let links = Tab::ALL
        .into_iter()
        .map(|item| {
            let style = move || {
                let (color, weight, background) = if tab.get() == item {
                    ("#1c1917", 600, "rgba(255,255,255,0.4)")
                } else {
                    ("#44403c", 400, "rgba(255,255,255,0.1)")
                };
                format!(
                    "padding: 8px 16px; border-radius: 12px; border: 1px solid rgba(255,255,255,0.2); cursor: pointer; font-size: 0.95rem; color: {color}; font-weight: {weight}; background: {background};"
                )
            };
            view! {
                <button
                    type="button"
                    style=style
                    on:click=move |_| {
                        tab.set(item);
                        set_hash(item);
                    }
                >
                    {item.label()}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div style=bar>
            <div style="max-width: 72rem; margin: 0 auto; padding: 12px 16px; display: flex; flex-wrap: wrap; align-items: center; justify-content: space-between; gap: 12px;">
                <div style="display: flex; align-items: center; gap: 12px;">
                    <div style=format!(
                        "height: 48px; width: 48px; border-radius: 12px; display: flex; align-items: center; justify-content: center; font-weight: 800; color: #fff; background: {};",
                        rgba_css(BRAND_PURPLE.rgb, 1.0)
                    )>"HP"</div>
                    <div style="font-size: 1.125rem; font-weight: 800; letter-spacing: -0.025em; color: #1c1917;">"House Points"</div>
                </div>
                <div style="display: flex; flex-wrap: wrap; align-items: center; gap: 8px;">{links}</div>
            </div>
        </div>
    }
}

/// Loading indicator or persistent error banner above the active page.
#[component]
fn StatusBanner() -> impl IntoView {
    let SnapshotStatus(status) = expect_context();

    move || match status.get() {
        LoadStatus::Loading => view! {
            <div style="max-width: 72rem; margin: 24px auto 0; padding: 0 16px;">
                <div style="border-radius: 16px; border: 1px solid rgba(255,255,255,0.2); background: rgba(255,255,255,0.4); padding: 16px; display: flex; align-items: center; gap: 12px;">
                    <div style=format!(
                        "height: 12px; width: 12px; border-radius: 9999px; background: {};",
                        rgba_css(BRAND_GOLD.rgb, 1.0)
                    ) />
                    <div style="color: #292524; font-weight: 500;">"Fetching points data\u{2026}"</div>
                </div>
            </div>
        }
        .into_any(),
        LoadStatus::Error(message) => view! {
            <div style="max-width: 72rem; margin: 24px auto 0; padding: 0 16px;">
                <div style="border-radius: 16px; border: 1px solid #fecaca; background: #fef2f2; color: #991b1b; padding: 16px;">
                    <div style="font-weight: 600;">"Error"</div>
                    <div style="font-size: 0.875rem; margin-top: 4px;">{message}</div>
                    <div style="font-size: 0.875rem; margin-top: 8px; color: rgba(185,28,28,0.8);">
                        {format!(
                            "Make sure the data endpoint is deployed and public, and that {} was set when this site was built.",
                            config::DATA_URL_VAR
                        )}
                    </div>
                </div>
            </div>
        }
        .into_any(),
        LoadStatus::Ready(_) => ().into_any(),
    }
}

/// Pulsing placeholder shown while the snapshot loads.
#[component]
pub(crate) fn LoadingCard(#[prop(default = 3)] lines: usize) -> impl IntoView {
    let bars = (0..lines)
        .map(|i| {
            let width = if i == 0 {
                "66%"
            } else if i + 1 == lines {
                "33%"
            } else {
                "100%"
            };
            view! {
                <div style=format!(
                    "height: 16px; width: {width}; background: rgba(214,211,209,0.4); border-radius: 4px; margin-bottom: 12px;"
                ) />
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div style="border-radius: 16px; border: 1px solid rgba(255,255,255,0.2); background: rgba(255,255,255,0.1); padding: 20px;">
            {bars}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::Tab;

    #[test]
    fn tab_from_hash() {
        assert_eq!(Tab::from_hash(""), Tab::Members);
        assert_eq!(Tab::from_hash("#/"), Tab::Members);
        assert_eq!(Tab::from_hash("#/updates"), Tab::Updates);
        assert_eq!(Tab::from_hash("#/rules/"), Tab::Rules);
        assert_eq!(Tab::from_hash("#/unknown"), Tab::Members);
    }

    #[test]
    fn tab_hash_round_trips() {
        for tab in Tab::ALL {
            assert_eq!(Tab::from_hash(tab.hash()), tab);
        }
    }
}

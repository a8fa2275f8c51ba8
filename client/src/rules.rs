use leptos::prelude::*;

use house_points_shared::{LoadStatus, Rule};

use crate::app::{CARD_GRID_STYLE, LoadingCard, PAGE_HEADER_STYLE, PAGE_STYLE, PAGE_TITLE_STYLE, SnapshotStatus};
use crate::colors::{BRAND_GOLD, BRAND_PURPLE, rgba_css};

#[component]
pub fn RulesPage() -> impl IntoView {
    let SnapshotStatus(status) = expect_context();

    view! {
        <div style=PAGE_STYLE>
            <div style=PAGE_HEADER_STYLE>
                <h1 style=PAGE_TITLE_STYLE>"Rules"</h1>
            </div>
            {move || match status.get() {
                LoadStatus::Loading => view! {
                    <div style=CARD_GRID_STYLE>
                        <LoadingCard lines=2 />
                        <LoadingCard lines=2 />
                    </div>
                }
                .into_any(),
                LoadStatus::Error(_) => ().into_any(),
                LoadStatus::Ready(snapshot) if snapshot.rules.is_empty() => view! {
                    <div style="text-align: center; color: #57534e; font-weight: 500; padding: 32px 0;">
                        "No rules yet"
                    </div>
                }
                .into_any(),
                LoadStatus::Ready(snapshot) => view! {
                    <div style=CARD_GRID_STYLE>
                        {snapshot
                            .rules
                            .iter()
                            .cloned()
                            .map(|rule| view! { <RuleCardView rule=rule /> })
                            .collect::<Vec<_>>()}
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}

#[component]
fn RuleCardView(rule: Rule) -> impl IntoView {
    let card = format!(
        "border-radius: 16px; border: 1px solid rgba(255,255,255,0.25); padding: 20px; background: linear-gradient(135deg, {}, rgba(255,255,255,0.7));",
        rgba_css(BRAND_PURPLE.rgb, 0.12)
    );
    let reward = format!(
        "padding: 4px 12px; border-radius: 9999px; font-weight: 700; white-space: nowrap; flex-shrink: 0; color: #1c1917; background: {};",
        rgba_css(BRAND_GOLD.rgb, 0.9)
    );
    let category = format!(
        "font-size: 0.75rem; font-weight: 600; text-transform: uppercase; letter-spacing: 0.05em; color: {};",
        BRAND_PURPLE.hex
    );

    view! {
        <div style=card>
            <div style="display: flex; align-items: flex-start; justify-content: space-between; gap: 12px;">
                <div style="min-width: 0; flex: 1;">
                    <div style=category>
                        {rule.category}
                    </div>
                    <div style="margin-top: 4px; color: #1c1917; font-weight: 500;">{rule.text}</div>
                </div>
                <div style=reward>{format!("{} {}", rule.reward, rule.reward.label())}</div>
            </div>
        </div>
    }
}

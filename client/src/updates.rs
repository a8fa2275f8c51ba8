use leptos::prelude::*;

use house_points_shared::{LoadStatus, UpdateCard, update_cards};

use crate::app::{FEED_STYLE, LoadingCard, Now, PAGE_HEADER_STYLE, PAGE_STYLE, PAGE_TITLE_STYLE, SnapshotStatus};
use crate::colors::{card_style, pill_style};

/// Newest-first feed of point changes.
#[component]
pub fn UpdatesPage() -> impl IntoView {
    let SnapshotStatus(status) = expect_context();
    let Now(now) = expect_context();

    let category_keys = Memo::new(move |_| {
        status.with(|status| {
            status
                .snapshot()
                .map(|snapshot| snapshot.category_keys_by_name())
                .unwrap_or_default()
        })
    });

    // Re-derived on every age tick so labels stay fresh without a refetch.
    let cards = Memo::new(move |_| {
        let now = now.get();
        category_keys.with(|keys| {
            status.with(|status| {
                status
                    .snapshot()
                    .map(|snapshot| update_cards(&snapshot.updates, keys, now))
            })
        })
    });

    view! {
        <div style=PAGE_STYLE>
            <div style=PAGE_HEADER_STYLE>
                <h1 style=PAGE_TITLE_STYLE>"Updates"</h1>
            </div>
            {move || {
                if status.with(LoadStatus::is_loading) {
                    return view! {
                        <div style=FEED_STYLE>
                            <LoadingCard lines=4 />
                            <LoadingCard lines=4 />
                        </div>
                    }
                    .into_any();
                }
                match cards.get() {
                    None => ().into_any(),
                    Some(cards) if cards.is_empty() => view! {
                        <div style="text-align: center; color: #57534e; font-weight: 500; padding: 32px 0;">
                            "No updates yet"
                        </div>
                    }
                    .into_any(),
                    Some(cards) => view! {
                        <div style=FEED_STYLE>
                            {cards
                                .into_iter()
                                .map(|card| view! { <UpdateCardView card=card /> })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                    .into_any(),
                }
            }}
        </div>
    }
}

#[component]
fn UpdateCardView(card: UpdateCard) -> impl IntoView {
    let badge = pill_style(&card.theme.badge.css(), "0.8rem");

    view! {
        <div style=card_style(card.theme)>
            <div style="display: flex; align-items: flex-start; justify-content: space-between; gap: 12px;">
                <div style="min-width: 0; flex: 1;">
                    <div style="font-size: 0.75rem; color: #78716c; margin-bottom: 4px;">{card.age}</div>
                    <div style="font-size: 1.5rem; font-weight: 800; color: #1c1917;">
                        {format!("{} {}", card.delta, card.unit)}
                    </div>
                    <div style="margin-top: 4px; color: #44403c; overflow-wrap: anywhere;">
                        {card.description}
                    </div>
                </div>
                <div style=badge>{card.member}</div>
            </div>
        </div>
    }
}

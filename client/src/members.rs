use leptos::prelude::*;
use wasm_bindgen::JsCast;

use house_points_shared::{LoadStatus, MemberCard, MemberSearch, RankMap, search_members};

use crate::app::{
    CARD_GRID_STYLE, LoadingCard, PAGE_HEADER_STYLE, PAGE_STYLE, PAGE_TITLE_STYLE, SnapshotStatus,
};
use crate::colors::{card_style, pill_style};

/// Ranked member list with name search.
#[component]
pub fn MembersPage() -> impl IntoView {
    let SnapshotStatus(status) = expect_context();
    let query: RwSignal<String> = RwSignal::new(String::new());

    // Ranks always come from the full list so search never reshuffles the podium.
    let ranks = Memo::new(move |_| {
        status.with(|status| {
            status
                .snapshot()
                .map(|snapshot| RankMap::from_members(&snapshot.members))
                .unwrap_or_default()
        })
    });

    let listing = Memo::new(move |_| {
        let query = query.get();
        ranks.with(|ranks| {
            status.with(|status| match status {
                LoadStatus::Loading => Some(MemberSearch::Loading),
                LoadStatus::Error(_) => None,
                LoadStatus::Ready(snapshot) => Some(
                    search_members(Some(snapshot.members.as_slice()), &query)
                        .map(|(position, member)| MemberCard::new(position, member, ranks)),
                ),
            })
        })
    });

    view! {
        <div style=PAGE_STYLE>
            <div style=PAGE_HEADER_STYLE>
                <h1 style=PAGE_TITLE_STYLE>"Members"</h1>
                <SearchBox query=query />
            </div>
            {move || match listing.get() {
                None => ().into_any(),
                Some(MemberSearch::Loading) => view! {
                    <div style=CARD_GRID_STYLE>
                        <LoadingCard />
                        <LoadingCard />
                        <LoadingCard />
                    </div>
                }
                .into_any(),
                Some(MemberSearch::NoResults) => view! {
                    <div style="text-align: center; color: #57534e; font-weight: 500; padding: 32px 0;">
                        "No member found"
                    </div>
                }
                .into_any(),
                Some(MemberSearch::Matches(cards)) => view! {
                    <div style=CARD_GRID_STYLE>
                        {cards
                            .into_iter()
                            .map(|card| view! { <MemberCardView card=card /> })
                            .collect::<Vec<_>>()}
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}

#[component]
fn SearchBox(query: RwSignal<String>) -> impl IntoView {
    let on_input = move |e: leptos::ev::Event| {
        let Some(target) = e.target() else {
            return;
        };
        let Ok(input) = target.dyn_into::<web_sys::HtmlInputElement>() else {
            return;
        };
        query.set(input.value());
    };

    view! {
        <div style="position: relative;">
            <input
                type="text"
                placeholder="Search members\u{2026}"
                aria-label="Search members by name"
                style="width: 16rem; max-width: 60vw; box-sizing: border-box; border-radius: 12px; border: 1px solid rgba(255,255,255,0.3); background: rgba(255,255,255,0.6); padding: 8px 28px 8px 12px; font-size: 0.875rem; color: #1c1917;"
                prop:value=move || query.get()
                on:input=on_input
            />
            {move || {
                (!query.get().is_empty())
                    .then(|| {
                        view! {
                            <button
                                type="button"
                                aria-label="Clear search"
                                title="Clear"
                                style="position: absolute; right: 8px; top: 50%; transform: translateY(-50%); border: none; background: transparent; color: #78716c; cursor: pointer; font-size: 1rem;"
                                on:click=move |_| query.set(String::new())
                            >
                                "\u{00D7}"
                            </button>
                        }
                    })
            }}
        </div>
    }
}

#[component]
fn MemberCardView(card: MemberCard) -> impl IntoView {
    let theme = card.theme;
    let pill = pill_style(&theme.pill.css(), "0.75rem");
    let medal = card
        .medal()
        .map(|medal| view! { <span style="font-size: 1.5rem; flex-shrink: 0;">{medal}</span> });
    let category_pill = (!card.category.is_empty()).then(|| {
        view! { <div style=pill.clone()>{format!("Class: {}", card.category)}</div> }
    });
    let role_pills = card
        .roles
        .into_iter()
        .map(|role| view! { <div style=pill.clone()>{role}</div> })
        .collect::<Vec<_>>();
    let avatar = format!(
        "height: 44px; width: 44px; border-radius: 9999px; display: flex; align-items: center; justify-content: center; font-weight: 700; flex-shrink: 0; {}",
        theme.avatar.css()
    );

    view! {
        <div style=card_style(theme)>
            <div style="display: flex; align-items: center; justify-content: space-between; gap: 8px; overflow: hidden;">
                <div style="display: flex; align-items: center; gap: 8px; min-width: 0; flex: 1;">
                    <div style=avatar>{card.initial.to_string()}</div>
                    <div style="min-width: 0; flex: 1;">
                        <div style="display: flex; align-items: center; gap: 8px; min-width: 0;">
                            <div style="font-size: 1.125rem; font-weight: 700; color: #1c1917; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;">
                                {card.name}
                            </div>
                            {medal}
                        </div>
                        <div style="display: flex; gap: 8px; margin-top: 4px; flex-wrap: wrap;">
                            {category_pill}
                            {role_pills}
                        </div>
                    </div>
                </div>
                <div style="display: flex; flex-direction: column; align-items: flex-end; flex-shrink: 0; white-space: nowrap; padding-left: 4px;">
                    <div style="font-size: 2.75rem; font-weight: 800; color: #1c1917; line-height: 1;">
                        {card.points}
                    </div>
                    <div style="font-size: 0.95rem; font-weight: 600; color: #57534e;">{card.unit}</div>
                </div>
            </div>
        </div>
    }
}

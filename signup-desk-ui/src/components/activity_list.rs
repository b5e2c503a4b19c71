//! Activity List Component
//!
//! Activity cards with capacity and roster. Remove buttons appear on
//! participant rows only while a teacher is signed in.

use leptos::*;
use signup_desk::view::{
    activity_list, ActivityCard as CardModel, ActivityListView, ParticipantRow, ParticipantSection,
};

use super::Loading;
use crate::state::use_app_context;

/// The list area: loading spinner, failure notice or cards
#[component]
pub fn ActivityList() -> impl IntoView {
    let context = use_app_context();
    let view_state = context.view;
    let session = context.session;

    // Re-rendered on every state change; the memo keeps the DOM stable
    // unless the rendered model actually differs
    let list = create_memo(move |_| {
        let session = session.get();
        view_state.with(|s| activity_list(&s.activities, session.as_ref()))
    });

    view! {
        <div id="activities-list">
            {move || match list.get() {
                ActivityListView::Loading => view! { <Loading /> }.into_view(),
                ActivityListView::Failed { notice } => view! { <p>{notice}</p> }.into_view(),
                ActivityListView::Cards(cards) => cards
                    .into_iter()
                    .map(|card| view! { <ActivityCard card /> })
                    .collect_view(),
            }}
        </div>
    }
}

#[component]
fn ActivityCard(card: CardModel) -> impl IntoView {
    let participants = match card.participants {
        ParticipantSection::Empty => view! {
            <p><em>"No participants yet"</em></p>
        }
        .into_view(),
        ParticipantSection::Listed(rows) => view! {
            <div class="participants-section">
                <h5>"Participants:"</h5>
                <ul class="participants-list">
                    {rows.into_iter().map(|row| view! { <Participant row /> }).collect_view()}
                </ul>
            </div>
        }
        .into_view(),
    };

    view! {
        <div class="activity-card">
            <h4>{card.name}</h4>
            <p>{card.description}</p>
            <p><strong>"Schedule:"</strong>" "{card.schedule}</p>
            <p><strong>"Availability:"</strong>" "{card.availability}</p>
            <div class="participants-container">{participants}</div>
        </div>
    }
}

#[component]
fn Participant(row: ParticipantRow) -> impl IntoView {
    let context = use_app_context();

    let remove_button = row.removal.map(|target| {
        let on_click = move |_| {
            context.unregister(target.activity.clone(), target.email.clone());
        };

        view! {
            <button class="delete-btn" title="Unregister" on:click=on_click>
                "❌"
            </button>
        }
    });

    view! {
        <li>
            <span class="participant-email">{row.email}</span>
            {remove_button}
        </li>
    }
}

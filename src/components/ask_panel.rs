//! Ask Panel Component
//!
//! Slide-in side panel for free-text questions to the answering service.
//! All transition rules live in `state::ask`; this component only renders
//! the current state and forwards events.

use leptos::*;

use crate::api;
use crate::state::ask::{AskPhase, SUGGESTED_QUESTIONS};
use crate::state::expect_global_state;

/// Question/answer side panel. Rendered only while the panel is open; the
/// state it displays persists across close/reopen.
#[component]
pub fn AskPanel() -> impl IntoView {
    let state = expect_global_state();

    let asking = move || state.ask.with(|a| a.phase == AskPhase::Asking);
    let can_submit = move || state.ask.with(|a| a.can_submit());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        // The state machine hands out the question at most once per
        // in-flight request; submits while Asking fall through to None.
        let question = state.ask.try_update(|a| a.begin_submit()).flatten();
        if let Some(question) = question {
            spawn_local(async move {
                let result = api::ask_question(&question).await;
                state.ask.update(|a| a.resolve(result));
            });
        }
    };

    view! {
        <div class="ask-panel">
            <div class="ask-header">
                <h2>"🤖 Ask AI"</h2>
                <button
                    class="ask-close"
                    on:click=move |_| state.ask.update(|a| a.toggle())
                >
                    "×"
                </button>
            </div>

            <form on:submit=on_submit>
                <input
                    type="text"
                    class="ask-input"
                    placeholder="Ask about SA economy..."
                    prop:value=move || state.ask.with(|a| a.question.clone())
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        state.ask.update(|a| a.set_question(&text));
                    }
                />
                <button
                    type="submit"
                    class="btn-primary ask-submit"
                    disabled=move || !can_submit()
                >
                    {move || if asking() { "Thinking..." } else { "Get Answer" }}
                </button>
            </form>

            <Answer />

            <div class="ask-suggestions">
                <p>"Try asking:"</p>
                {SUGGESTED_QUESTIONS
                    .iter()
                    .map(|&text| view! {
                        <button
                            type="button"
                            class="ask-suggestion"
                            on:click=move |_| {
                                state.ask.update(|a| a.select_suggestion(text))
                            }
                        >
                            {text}
                        </button>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Answer area: the latest answer verbatim, plus sources and confidence
/// when the backend sent them.
#[component]
fn Answer() -> impl IntoView {
    let state = expect_global_state();

    view! {
        {move || {
            state.ask.with(|a| a.answer.clone()).map(|answer| {
                let meta = state.ask.with(|a| {
                    if a.sources.is_empty() {
                        None
                    } else {
                        let mut line = format!("Sources: {}", a.sources.join(", "));
                        if let Some(confidence) = &a.confidence {
                            line.push_str(&format!(" · confidence {}", confidence));
                        }
                        Some(line)
                    }
                });

                view! {
                    <div class="ask-answer">
                        {answer}
                        {meta.map(|line| view! { <div class="ask-meta">{line}</div> })}
                    </div>
                }
            })
        }}
    }
}

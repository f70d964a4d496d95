use leptos::ev;
use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use super::state::{SelectionMode, SelectionState};
use super::traits::SelectableItem;

/// Dropdown with a filter input; selected items render as chips.
///
/// A pointer press anywhere outside the component closes the list. The window
/// listener lives exactly as long as the component.
#[component]
pub fn SelectDropdown<T>(
    /// All available items
    #[prop(into)]
    items: Signal<Vec<T>>,
    #[prop(optional)]
    mode: SelectionMode,
    /// Items selected on mount
    #[prop(optional)]
    initial_selected: Vec<T>,
    #[prop(optional, into)]
    placeholder: String,
    /// Called with the full selection after every select/remove
    on_change: Callback<Vec<T>>,
) -> impl IntoView
where
    T: SelectableItem + Clone + PartialEq + Send + Sync + 'static,
{
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let state = RwSignal::new(
        SelectionState::new(items.get_untracked(), mode).with_selected(initial_selected),
    );

    Effect::new(move |_| {
        let next = items.get();
        state.update(|s| s.set_items(next));
    });

    let container = NodeRef::<Div>::new();

    let outside_listener = window_event_listener(ev::pointerdown, move |event| {
        let Some(root) = container.get_untracked() else {
            return;
        };
        let inside = event
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
            .is_some_and(|node| root.contains(Some(&node)));
        if !inside && state.with_untracked(|s| s.is_open()) {
            state.update(|s| s.close());
        }
    });
    on_cleanup(move || outside_listener.remove());

    let emit = move || on_change.run(state.with_untracked(|s| s.selected().to_vec()));

    let select = move |item: T| {
        state.update(|s| s.select_item(item));
        emit();
    };

    let remove = move |id: String| {
        state.update(|s| s.remove_item(&id));
        emit();
    };

    view! {
        <div class="select-dropdown" node_ref=container>
            <div class="select-dropdown__control">
                <For
                    each=move || state.with(|s| s.selected().to_vec())
                    key=|item| item.id()
                    children=move |item: T| {
                        let id = item.id();
                        view! {
                            <span class="select-dropdown__chip">
                                {item.display_name()}
                                <button
                                    class="select-dropdown__chip-remove"
                                    title="Remove"
                                    on:click=move |_| remove(id.clone())
                                >
                                    "×"
                                </button>
                            </span>
                        }
                    }
                />
                <input
                    class="select-dropdown__input"
                    type="text"
                    placeholder=placeholder
                    prop:value=move || state.with(|s| s.query().to_string())
                    on:focus=move |_| state.update(|s| s.on_focus())
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        state.update(|s| s.on_input_change(text));
                    }
                    on:keydown=move |ev: ev::KeyboardEvent| {
                        if ev.key() == "Escape" {
                            state.update(|s| s.close());
                        }
                    }
                />
            </div>
            <Show when=move || state.with(|s| s.is_open())>
                <ul class="select-dropdown__menu">
                    {move || {
                        let candidates = state.with(|s| s.candidates().to_vec());
                        if candidates.is_empty() {
                            view! { <li class="select-dropdown__empty">"No matches"</li> }.into_any()
                        } else {
                            candidates
                                .into_iter()
                                .map(|item| {
                                    let label = item.display_name();
                                    view! {
                                        <li
                                            class="select-dropdown__option"
                                            on:click=move |_| select(item.clone())
                                        >
                                            {label}
                                        </li>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </ul>
            </Show>
        </div>
    }
}

//! "Open by number" field: an id input and a go button

use leptos::ev;
use leptos::prelude::*;
use thaw::*;

/// Trims the input and drops a leading `#`; `None` when nothing is left.
pub fn normalize_lookup(input: &str) -> Option<String> {
    let value = input.trim().trim_start_matches('#').trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[component]
pub fn LookupField(
    #[prop(into)]
    label: String,
    #[prop(optional, into)]
    placeholder: String,
    /// Called with the normalized identifier on Enter or button click
    on_open: Callback<String>,
) -> impl IntoView {
    let value = RwSignal::new(String::new());

    let submit = move || {
        if let Some(id) = value.with_untracked(|v| normalize_lookup(v)) {
            on_open.run(id);
            value.set(String::new());
        }
    };

    view! {
        <div class="lookup-field">
            <label class="lookup-field__label">{label}</label>
            <input
                type="text"
                class="lookup-field__input"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                on:keydown=move |ev: ev::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        submit();
                    }
                }
            />
            <Button
                appearance=ButtonAppearance::Primary
                disabled=Signal::derive(move || value.with(|v| normalize_lookup(v).is_none()))
                on_click=move |_| submit()
            >
                "Open"
            </Button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lookup() {
        assert_eq!(normalize_lookup("  #1042 "), Some("1042".to_string()));
        assert_eq!(normalize_lookup("ord_9f"), Some("ord_9f".to_string()));
        assert_eq!(normalize_lookup(" # "), None);
        assert_eq!(normalize_lookup(""), None);
    }
}

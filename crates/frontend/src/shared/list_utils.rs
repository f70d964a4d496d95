/// Shared list helpers: sort indicators and the search box
use contracts::shared::list_query::SortOrder;
use leptos::prelude::*;

/// Sort indicator for a column header
pub fn get_sort_indicator(current_field: &str, field: &str, order: SortOrder) -> &'static str {
    if current_field == field {
        if order.is_ascending() { " ▲" } else { " ▼" }
    } else {
        " ⇅"
    }
}

/// Indicator CSS class; the active column is highlighted
pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "sort-indicator sort-indicator--active"
    } else {
        "sort-indicator"
    }
}

/// Search box with a clear button.
///
/// Keystrokes go to `on_input` unthrottled; the list hook debounces them.
#[component]
pub fn SearchInput(
    /// Current raw value, before debounce
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    on_input: Callback<String>,
    #[prop(into)]
    on_clear: Callback<()>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=move || !value.get().trim().is_empty()
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <Show when=move || !value.get().is_empty()>
                <button
                    class="search-input__clear"
                    title="Clear"
                    on:click=move |_| on_clear.run(())
                >
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("title", "title", SortOrder::Asc), " ▲");
        assert_eq!(get_sort_indicator("title", "title", SortOrder::Desc), " ▼");
        assert_eq!(get_sort_indicator("title", "position", SortOrder::Asc), " ⇅");
        assert_eq!(get_sort_class("", "title"), "sort-indicator");
    }
}

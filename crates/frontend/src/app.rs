use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::toast::ToastService;
use leptos::prelude::*;
use thaw::{ConfigProvider, ToasterProvider};

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    view! {
        <ConfigProvider>
            <ToasterProvider>
                <Workspace />
            </ToasterProvider>
        </ConfigProvider>
    }
}

/// The toaster injection only exists inside `ToasterProvider`.
#[component]
fn Workspace() -> impl IntoView {
    // Toasts for outcomes of destructive actions.
    provide_context(ToastService::new());

    view! { <AppShell /> }
}

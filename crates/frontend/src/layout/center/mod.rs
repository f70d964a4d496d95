pub mod center;
pub mod tabs;

pub use center::Center;
pub use tabs::Tabs;

#[cfg(test)]
mod tests {
    #[test]
    fn test_tab_bar_is_reachable_from_center() {
        let _ = super::Tabs;
        let _ = crate::app_shell::AppShell;
    }
}

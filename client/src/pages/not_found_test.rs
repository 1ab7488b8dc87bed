#[cfg(feature = "ssr")]
mod rendered {
    use super::super::*;

    fn render_not_found() -> String {
        // No ResponseOptions in context here, so the 404 status hook is a
        // no-op and only the markup is exercised.
        let owner = Owner::new_root(None);
        owner.with(|| view! { <NotFoundPage/> }.to_html())
    }

    #[test]
    fn unmatched_path_view_names_the_miss() {
        let html = render_not_found();
        assert!(html.contains("Page not found"), "missing heading: {html}");
    }

    #[test]
    fn offers_a_way_back_home() {
        let html = render_not_found();
        assert!(html.contains(r#"href="/""#), "missing home link: {html}");
    }
}

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use site_ui::prelude::*;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Atrium" />
        <Meta name="description" content="A routed shell for the shared control primitives." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=HomeRoute />
                    <Route path="/gallery" view=GalleryRoute />
                    <Route path="/about" view=AboutRoute />
                    <Route path="/*any" view=NotFoundRoute />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn HomeRoute() -> impl IntoView {
    view! {
        <section class="route-panel route-home">
            <h1>"Atrium"</h1>
            <p>"Entry placeholder for the routed interface shell."</p>
            <nav class="route-links" aria-label="Section links">
                <A href="/gallery">"Control gallery"</A>
                <A href="/about">"About this shell"</A>
            </nav>
        </section>
    }
}

#[component]
fn GalleryRoute() -> impl IntoView {
    let busy = create_rw_signal(false);

    view! {
        <section class="route-panel route-gallery">
            <h1>
                <Icon icon=IconName::Compass size=IconSize::Lg layout_class="route-title-icon" />
                "Control gallery"
            </h1>
            <p>"Every button emphasis, size, and render strategy on one page."</p>

            <div class="gallery-row" role="group" aria-label="Emphasis variants">
                <Button>"Standard"</Button>
                <Button variant=ButtonVariant::Primary>"Primary"</Button>
                <Button variant=ButtonVariant::Quiet>"Quiet"</Button>
                <Button variant=ButtonVariant::Accent>"Accent"</Button>
                <Button variant=ButtonVariant::Danger>"Danger"</Button>
            </div>

            <div class="gallery-row" role="group" aria-label="Sizes">
                <Button size=ButtonSize::Sm>"Small"</Button>
                <Button size=ButtonSize::Md>"Medium"</Button>
                <Button size=ButtonSize::Lg>"Large"</Button>
            </div>

            <div class="gallery-row" role="group" aria-label="Busy state">
                <Button
                    variant=ButtonVariant::Primary
                    busy=busy
                    attr:id="busy-demo"
                    on_click=Callback::new(move |_| busy.set(true))
                >
                    "Start work"
                </Button>
                <Button
                    variant=ButtonVariant::Quiet
                    on_click=Callback::new(move |_| busy.set(false))
                >
                    "Reset"
                </Button>
            </div>

            <div class="gallery-row" role="group" aria-label="Passthrough rendering">
                <Button
                    variant=ButtonVariant::Quiet
                    class="route-link-button"
                    as_child=view! { <a href="/about">"About, styled as a button"</a> }.into_any()
                />
            </div>
        </section>
    }
}

#[component]
fn AboutRoute() -> impl IntoView {
    view! {
        <section class="route-panel route-about">
            <h1>"About this shell"</h1>
            <p>"Static placeholder copy. The router supplies no data to this view."</p>
            <A href="/">"Back to the entry page"</A>
        </section>
    }
}

#[component]
fn NotFoundRoute() -> impl IntoView {
    let requested = window()
        .location()
        .pathname()
        .unwrap_or_else(|_| "/".to_string());

    view! {
        <section class="route-panel route-missing">
            <h1>"Nothing registered here"</h1>
            <p>{format!("No route is registered for {requested}.")}</p>
            <A href="/">"Back to the entry page"</A>
        </section>
    }
}

use dioxus::prelude::*;

use ui::gate::{self, Access, Gate};
use ui::{use_app_state, use_app_state_provider, ToastStack, MAIN_CSS};
use views::{Dashboard, Home, Login, ProjectDetails};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/project/:id")]
        ProjectDetails { id: String },
        #[route("/admin/login")]
        Login {},
        #[route("/admin/dashboard")]
        Dashboard {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

impl Route {
    fn access(&self) -> Access {
        match self {
            Route::Dashboard {} => Access::Protected,
            _ => Access::Public,
        }
    }
}

fn main() {
    #[cfg(feature = "server")]
    {
        let runtime = match tokio::runtime::Runtime::new() {
            Ok(runtime) => runtime,
            Err(e) => {
                eprintln!("Failed to start runtime: {e}");
                std::process::exit(1);
            }
        };
        if let Err(e) = runtime.block_on(launch_server()) {
            tracing::error!("Server exited: {}", e);
            std::process::exit(1);
        }
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
async fn launch_server() -> Result<(), Box<dyn std::error::Error>> {
    use dioxus::server::{DioxusRouterExt, ServeConfig};
    use std::time::Duration;
    use tower_sessions::cookie::SameSite;
    use tower_sessions::{Expiry, SessionManagerLayer};
    use tower_sessions_sqlx_store::PostgresStore;
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn")),
        )
        .init();

    let settings = api::settings::Settings::new()?;

    let pool = api::db::get_pool().await?;
    api::db::MIGRATOR.run(pool).await?;

    if api::auth::ensure_admin(pool, &settings.admin).await? {
        tracing::info!("Bootstrapped admin account");
    }

    let session_store = PostgresStore::new(pool.clone());
    session_store.migrate().await?;

    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(settings.session.secure)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(
            Duration::from_secs(60 * 60 * 24 * 7).try_into()?,
        ));

    let transport = api::email::ResendTransport::new(&settings.email);
    let router = axum::Router::new()
        .merge(api::functions::router(transport, settings.email.clone()))
        .serve_dioxus_application(ServeConfig::new(), App)
        .layer(session_layer);

    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router.into_make_service()).await?;
    Ok(())
}

#[component]
fn App() -> Element {
    let state = use_app_state_provider();

    rsx! {
        document::Title { "Portfolio" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
        ToastStack { toasts: state.toasts }
    }
}

/// Applies each route's access rule before rendering it.
#[component]
fn Shell() -> Element {
    let state = use_app_state();
    let route = use_route::<Route>();
    let nav = use_navigator();

    match gate::decide(route.access(), &state.session.state()) {
        Gate::Render => rsx! { Outlet::<Route> {} },
        Gate::Pending => rsx! {
            div { class: "page-center",
                div { class: "spinner" }
            }
        },
        Gate::RedirectToLogin => {
            nav.replace(Route::Login {});
            rsx! {}
        }
    }
}

/// Unknown paths go back to the home page.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    tracing::warn!("No route for /{}", segments.join("/"));
    nav.replace(Route::Home {});
    rsx! {}
}

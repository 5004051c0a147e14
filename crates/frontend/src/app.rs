use leptos::prelude::*;

use crate::screens::balance_report::BalanceReportPage;
use crate::screens::data_viewer::DataViewerPage;
use crate::screens::date_range_etl::DateRangePage;
use crate::shared::http::ApiClient;

/// Pantallas de la aplicación. Cada una posee su propio formulario y su
/// propio orquestador de envío; no comparten estado entre sí.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    ReporteBalance,
    ProcesoRango,
    VisorDatos,
}

#[component]
pub fn App() -> impl IntoView {
    // El origen del backend se inyecta una sola vez vía contexto; ninguna
    // pantalla construye URLs absolutas por su cuenta.
    provide_context(ApiClient::from_window());

    let (screen, set_screen) = signal(Screen::ReporteBalance);

    let nav_class = move |target: Screen| {
        if screen.get() == target {
            "app__nav-button app__nav-button--active"
        } else {
            "app__nav-button"
        }
    };

    view! {
        <div class="app">
            <header class="app__header">
                <h1>"Siigo - Reportes y Consultas"</h1>
                <p class="app__subtitle">"Sistema de integración con la API de Siigo"</p>
                <nav class="app__nav">
                    <button
                        class=move || nav_class(Screen::ReporteBalance)
                        on:click=move |_| set_screen.set(Screen::ReporteBalance)
                    >
                        "Reporte de Balance"
                    </button>
                    <button
                        class=move || nav_class(Screen::ProcesoRango)
                        on:click=move |_| set_screen.set(Screen::ProcesoRango)
                    >
                        "Procesar por Rango"
                    </button>
                    <button
                        class=move || nav_class(Screen::VisorDatos)
                        on:click=move |_| set_screen.set(Screen::VisorDatos)
                    >
                        "Ver Datos"
                    </button>
                </nav>
            </header>

            <main class="app__main">
                {move || match screen.get() {
                    Screen::ReporteBalance => view! { <BalanceReportPage /> }.into_any(),
                    Screen::ProcesoRango => view! { <DateRangePage /> }.into_any(),
                    Screen::VisorDatos => view! { <DataViewerPage /> }.into_any(),
                }}
            </main>

            <footer class="app__footer">
                <p>"Versión 1.0.0 - Powered by Siigo API"</p>
            </footer>
        </div>
    }
}

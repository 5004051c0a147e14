use contracts::reports::powerbi::{BalanceReportsPage, BalanceStats};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::api;
use super::state::{
    build_query, query_display, stats_display, validate, QueryDisplay, QueryFilters,
    EMPTY_STATE_MESSAGE,
};
use crate::shared::http::ApiClient;
use crate::shared::submit::SubmitState;

/// La carga de estadísticas es independiente de la consulta principal: se
/// dispara al montar y con el botón de refresco, nunca junto a la otra.
fn load_stats(client: ApiClient, stats: RwSignal<SubmitState<BalanceStats>>) {
    let mut ticket = 0;
    stats.update(|s| ticket = s.begin());
    spawn_local(async move {
        let outcome = api::fetch_stats(&client).await;
        if let Err(err) = &outcome {
            log::warn!("No se pudieron cargar las estadísticas: {}", err);
        }
        stats.update(|s| {
            s.settle(ticket, outcome);
        });
    });
}

#[component]
pub fn DataViewerPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let filters = RwSignal::new(QueryFilters::default());
    let stats = RwSignal::new(SubmitState::<BalanceStats>::idle());
    let query = RwSignal::new(SubmitState::<BalanceReportsPage>::idle());

    {
        let client = client.clone();
        Effect::new(move || {
            load_stats(client.clone(), stats);
        });
    }

    let on_refresh_stats = {
        let client = client.clone();
        move |_| load_stats(client.clone(), stats)
    };

    let on_query = move |_| {
        let current = filters.get();
        if let Err(message) = validate(&current) {
            query.update(|s| s.reject(message));
            return;
        }
        let query_string = build_query(&current);
        let mut ticket = 0;
        query.update(|s| ticket = s.begin());
        let client = client.clone();
        spawn_local(async move {
            let outcome = api::fetch_balance_reports(&client, &query_string).await;
            if let Err(err) = &outcome {
                log::error!("Consulta de datos falló: {}", err);
            }
            query.update(|s| {
                s.settle(ticket, outcome);
            });
        });
    };

    let query_busy = Signal::derive(move || query.get().busy);
    let stats_busy = Signal::derive(move || stats.get().busy);

    view! {
        <div class="card">
            <div class="card__body">
                <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                    <h2 class="section-title">"📊 Ver Datos Procesados"</h2>
                    <Button on_click=on_refresh_stats disabled=stats_busy>
                        "🔄 Actualizar Estadísticas"
                    </Button>
                </Flex>

                {move || {
                    stats.get().error.map(|message| view! {
                        <div class="warning-box warning-box--error">
                            <span class="warning-box__icon">"⚠"</span>
                            <span class="warning-box__text">{message}</span>
                        </div>
                    })
                }}

                {move || {
                    stats.get().result.map(|current| {
                        let display = stats_display(&current);
                        view! {
                            <div class="stats-container">
                                <h3 class="section-title">"📈 Estadísticas"</h3>
                                <div class="stats-grid">
                                    <div class="stat-item">
                                        <strong>"Total de Registros: "</strong>
                                        <span class="stat-item__value">{display.total_records}</span>
                                    </div>
                                    <div class="stat-item">
                                        <strong>"Saldo Final Total: "</strong>
                                        <span class="stat-item__value">{display.total_saldo_final}</span>
                                    </div>
                                    <div class="stat-item">
                                        <strong>"Años Disponibles: "</strong>
                                        <span class="stat-item__value">{display.years}</span>
                                    </div>
                                    <div class="stat-item">
                                        <strong>"Periodos Disponibles: "</strong>
                                        <span class="stat-item__value">{display.period_count}</span>
                                    </div>
                                </div>
                                {(!display.period_badges.is_empty()).then(|| view! {
                                    <div class="periodos-list">
                                        <strong>"Periodos:"</strong>
                                        <div class="periodos-grid">
                                            {display.period_badges.iter().map(|periodo| {
                                                let periodo = periodo.clone();
                                                view! {
                                                    <span class="periodo-badge">{periodo}</span>
                                                }
                                            }).collect_view()}
                                            {(display.hidden_periods > 0).then(|| view! {
                                                <span class="periodo-more">
                                                    "+" {display.hidden_periods} " más"
                                                </span>
                                            })}
                                        </div>
                                    </div>
                                })}
                            </div>
                        }
                    })
                }}

                <div class="filters-container">
                    <h3 class="section-title">"🔍 Consultar Datos"</h3>
                    <div class="form__row">
                        <div class="form__group">
                            <label class="form__label">"Año (opcional)"</label>
                            <input
                                class="form__input"
                                type="number"
                                min="2000"
                                max="2100"
                                placeholder="2024"
                                prop:value=move || filters.get().anio
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    filters.update(|f| f.anio = value);
                                    query.update(|s| s.touch());
                                }
                            />
                        </div>
                        <div class="form__group">
                            <label class="form__label">"Periodo AAAAMM (opcional)"</label>
                            <input
                                class="form__input"
                                type="number"
                                placeholder="202401"
                                prop:value=move || filters.get().periodo
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    filters.update(|f| f.periodo = value);
                                    query.update(|s| s.touch());
                                }
                            />
                        </div>
                        <div class="form__group">
                            <label class="form__label">"Límite de registros"</label>
                            <input
                                class="form__input"
                                type="number"
                                min="1"
                                max="10000"
                                prop:value=move || filters.get().limit
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    filters.update(|f| f.limit = value);
                                    query.update(|s| s.touch());
                                }
                            />
                        </div>
                    </div>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_query
                        disabled=query_busy
                    >
                        {move || if query.get().busy {
                            "⏳ Cargando..."
                        } else {
                            "🔍 Consultar Datos"
                        }}
                    </Button>
                </div>

                {move || {
                    query.get().error.map(|message| view! {
                        <div class="warning-box warning-box--error">
                            <span class="warning-box__icon">"❌"</span>
                            <span class="warning-box__text">{message}</span>
                        </div>
                    })
                }}

                {move || {
                    query.get().result.map(|page| {
                        let display = query_display(&page);
                        let shown = page.data.len();
                        view! {
                            <div class="results-container">
                                <h3 class="section-title">"📋 Resultados"</h3>
                                <div class="results-info">
                                    <span>
                                        <strong>"Total encontrados: "</strong>
                                        {page.total}
                                    </span>
                                    <span>
                                        <strong>"Mostrando: "</strong>
                                        {shown}
                                    </span>
                                    {page.has_more.then(|| view! {
                                        <span class="results-info__has-more">
                                            "⚠️ Hay más registros disponibles"
                                        </span>
                                    })}
                                </div>
                                {match display {
                                    QueryDisplay::Empty => view! {
                                        <div class="no-data">{EMPTY_STATE_MESSAGE}</div>
                                    }.into_any(),
                                    QueryDisplay::Rows(rows) => view! {
                                        <div class="table-container">
                                            <table class="data-table">
                                                <thead>
                                                    <tr>
                                                        <th>"ID"</th>
                                                        <th>"Periodo"</th>
                                                        <th>"Código Cuenta"</th>
                                                        <th>"Nombre Cuenta"</th>
                                                        <th>"Identificación"</th>
                                                        <th>"Nombre Tercero"</th>
                                                        <th>"Saldo Inicial"</th>
                                                        <th>"Movimiento"</th>
                                                        <th>"Saldo Final"</th>
                                                        <th>"Fecha"</th>
                                                    </tr>
                                                </thead>
                                                <tbody>
                                                    {rows.into_iter().map(|row| view! {
                                                        <tr>
                                                            <td>{row.id}</td>
                                                            <td>{row.periodo}</td>
                                                            <td>{row.codigo_cuenta}</td>
                                                            <td class="data-table__text">{row.nombre_cuenta}</td>
                                                            <td>{row.identificacion}</td>
                                                            <td class="data-table__text">{row.nombre_tercero}</td>
                                                            <td class="data-table__number">{row.saldo_inicial}</td>
                                                            <td class="data-table__number">{row.movimiento}</td>
                                                            <td class="data-table__number">{row.saldo_final}</td>
                                                            <td>{row.fecha}</td>
                                                        </tr>
                                                    }).collect_view()}
                                                </tbody>
                                            </table>
                                        </div>
                                    }.into_any(),
                                }}
                            </div>
                        }
                    })
                }}
            </div>
        </div>
    }
}

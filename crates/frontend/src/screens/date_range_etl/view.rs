use contracts::reports::etl::DateRangeResult;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::api;
use super::state::{build_payload, summarize, validate, DateRangeForm};
use crate::shared::http::ApiClient;
use crate::shared::submit::SubmitState;

#[component]
pub fn DateRangePage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let form = RwSignal::new(DateRangeForm::default());
    let submit = RwSignal::new(SubmitState::<DateRangeResult>::idle());

    let on_submit = move |_| {
        let current = form.get();
        if let Err(message) = validate(&current) {
            submit.update(|s| s.reject(message));
            return;
        }
        let payload = build_payload(&current);
        let mut ticket = 0;
        submit.update(|s| ticket = s.begin());
        let client = client.clone();
        spawn_local(async move {
            let outcome = api::process_date_range(&client, &payload).await;
            if let Err(err) = &outcome {
                log::error!("Procesamiento por rango falló: {}", err);
            }
            submit.update(|s| {
                s.settle(ticket, outcome);
            });
        });
    };

    let submit_disabled =
        Signal::derive(move || submit.get().busy || form.get().fecha_fin.trim().is_empty());

    view! {
        <div class="card">
            <div class="card__body">
                <h2 class="section-title">"📅 Procesar por Rango de Fechas"</h2>
                <p class="form__description">
                    "Procesa automáticamente cada periodo mensual entre las dos fechas indicadas"
                </p>

                <div class="form__row">
                    <div class="form__group">
                        <label class="form__label">"Fecha de Inicio *"</label>
                        <input
                            class="form__input"
                            type="date"
                            min="2024-01-31"
                            max="2100-12-31"
                            prop:value=move || form.get().fecha_inicio
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.fecha_inicio = value);
                                submit.update(|s| s.touch());
                            }
                        />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Fecha de Fin *"</label>
                        <input
                            class="form__input"
                            type="date"
                            min="2024-01-31"
                            max="2100-12-31"
                            prop:value=move || form.get().fecha_fin
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.fecha_fin = value);
                                submit.update(|s| s.touch());
                            }
                        />
                        <small class="form__help">
                            "Ejemplo: 2025-09-30 procesará desde la fecha de inicio hasta 30/09/2025"
                        </small>
                    </div>
                </div>

                <div class="form__checkbox-wrapper">
                    <input
                        class="form__checkbox"
                        type="checkbox"
                        prop:checked=move || form.get().includes_tax_diff
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            form.update(|f| f.includes_tax_diff = checked);
                            submit.update(|s| s.touch());
                        }
                    />
                    <label class="form__checkbox-label">"Incluir diferencia de impuestos"</label>
                </div>

                <div class="form__checkbox-wrapper">
                    <input
                        class="form__checkbox"
                        type="checkbox"
                        prop:checked=move || form.get().clear_existing
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            form.update(|f| f.clear_existing = checked);
                            submit.update(|s| s.touch());
                        }
                    />
                    <label class="form__checkbox-label">
                        "Limpiar datos existentes antes de procesar"
                    </label>
                </div>

                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=on_submit
                    disabled=submit_disabled
                >
                    {move || if submit.get().busy {
                        "⏳ Procesando..."
                    } else {
                        "🚀 Procesar Rango de Fechas"
                    }}
                </Button>

                <Show when=move || submit.get().busy>
                    <div class="info-box">
                        <p>"Procesando periodos... Esto puede tardar varios minutos."</p>
                        <p class="info-box__note">
                            "El sistema está descargando y procesando cada mes secuencialmente."
                        </p>
                    </div>
                </Show>

                {move || {
                    submit.get().error.map(|message| view! {
                        <div class="warning-box warning-box--error">
                            <span class="warning-box__icon">"❌"</span>
                            <span class="warning-box__text">{message}</span>
                        </div>
                    })
                }}

                {move || {
                    submit.get().result.map(|result| {
                        let summary = summarize(&result);
                        let status_class = if summary.success {
                            "result-summary__status result-summary__status--success"
                        } else {
                            "result-summary__status result-summary__status--warning"
                        };
                        view! {
                            <div class="result-container">
                                <h3 class="section-title">"Resultado del Procesamiento"</h3>

                                <div class="result-summary">
                                    <div class="result-summary__item">
                                        <strong>"Fecha Inicio: "</strong>
                                        {summary.fecha_inicio}
                                    </div>
                                    <div class="result-summary__item">
                                        <strong>"Fecha Fin: "</strong>
                                        {summary.fecha_fin}
                                    </div>
                                    <div class="result-summary__item">
                                        <strong>"Periodos Procesados: "</strong>
                                        {summary.total_periodos}
                                    </div>
                                    <div class="result-summary__item">
                                        <strong>"Total de Registros: "</strong>
                                        {summary.total_rows}
                                    </div>
                                    <div class="result-summary__item">
                                        <strong>"Estado: "</strong>
                                        <span class=status_class>{summary.status_label}</span>
                                    </div>
                                </div>

                                {(!summary.periodos.is_empty()).then(|| view! {
                                    <div class="periodos-list">
                                        <h4 class="section-title section-title--spaced">
                                            "Periodos Procesados:"
                                        </h4>
                                        <div class="periodos-grid">
                                            {summary.periodos.iter().map(|periodo| {
                                                let periodo = periodo.clone();
                                                view! {
                                                    <span class="periodo-badge">{periodo}</span>
                                                }
                                            }).collect_view()}
                                        </div>
                                    </div>
                                })}

                                {(!summary.errors.is_empty()).then(|| view! {
                                    <div class="errors-list">
                                        <h4 class="section-title section-title--spaced">
                                            "⚠️ Errores:"
                                        </h4>
                                        <ul>
                                            {summary.errors.iter().map(|error| {
                                                let error = error.clone();
                                                view! { <li>{error}</li> }
                                            }).collect_view()}
                                        </ul>
                                    </div>
                                })}

                                <div class="result-container__actions">
                                    <Button on_click=move |_| {
                                        submit.update(|s| s.clear_result());
                                    }>
                                        "Limpiar Resultado"
                                    </Button>
                                </div>
                            </div>
                        }
                    })
                }}
            </div>
        </div>
    }
}

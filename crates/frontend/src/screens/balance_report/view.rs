use contracts::reports::balance::BalanceReportResponse;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::api;
use super::state::{build_payload, report_display, validate, BalanceReportForm};
use crate::shared::http::ApiClient;
use crate::shared::submit::SubmitState;

#[component]
pub fn BalanceReportPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let form = RwSignal::new(BalanceReportForm::default());
    let submit = RwSignal::new(SubmitState::<BalanceReportResponse>::idle());

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
            let outcome = api::request_report(&client, &payload).await;
            if let Err(err) = &outcome {
                log::error!("Reporte de balance falló: {}", err);
            }
            submit.update(|s| {
                s.settle(ticket, outcome);
            });
        });
    };

    let busy = Signal::derive(move || submit.get().busy);

    view! {
        <div class="card">
            <div class="card__body">
                <h2 class="section-title">"Reporte de Balance por Terceros"</h2>
                <p class="form__description">
                    "Completa los siguientes campos para obtener el reporte de balance desde Siigo"
                </p>

                <div class="form__group">
                    <label class="form__label">"Año *"</label>
                    <input
                        class="form__input"
                        type="number"
                        min="2000"
                        max="2100"
                        placeholder="Ej: 2024"
                        prop:value=move || form.get().year.to_string()
                        on:input=move |ev| {
                            let year = event_target_value(&ev).parse().unwrap_or(0);
                            form.update(|f| f.year = year);
                            submit.update(|s| s.touch());
                        }
                    />
                </div>

                <div class="form__row">
                    <div class="form__group">
                        <label class="form__label">"Mes de Inicio *"</label>
                        <input
                            class="form__input"
                            type="number"
                            min="1"
                            max="13"
                            placeholder="1-13"
                            prop:value=move || form.get().month_start.to_string()
                            on:input=move |ev| {
                                let month = event_target_value(&ev).parse().unwrap_or(0);
                                form.update(|f| f.month_start = month);
                                submit.update(|s| s.touch());
                            }
                        />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Mes de Fin *"</label>
                        <input
                            class="form__input"
                            type="number"
                            min="1"
                            max="13"
                            placeholder="1-13"
                            prop:value=move || form.get().month_end.to_string()
                            on:input=move |ev| {
                                let month = event_target_value(&ev).parse().unwrap_or(0);
                                form.update(|f| f.month_end = month);
                                submit.update(|s| s.touch());
                            }
                        />
                    </div>
                </div>

                <div class="form__row">
                    <div class="form__group">
                        <label class="form__label">"Código de Cuenta Inicial (Opcional)"</label>
                        <input
                            class="form__input"
                            type="text"
                            placeholder="Ej: 1105"
                            prop:value=move || form.get().account_start
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.account_start = value);
                                submit.update(|s| s.touch());
                            }
                        />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Código de Cuenta Final (Opcional)"</label>
                        <input
                            class="form__input"
                            type="text"
                            placeholder="Ej: 1199"
                            prop:value=move || form.get().account_end
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.account_end = value);
                                submit.update(|s| s.touch());
                            }
                        />
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

                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=on_submit
                    disabled=busy
                >
                    {move || if submit.get().busy { "Consultando..." } else { "Obtener Reporte" }}
                </Button>

                {move || {
                    submit.get().error.map(|message| view! {
                        <div class="warning-box warning-box--error">
                            <span class="warning-box__icon">"⚠"</span>
                            <span class="warning-box__text">{message}</span>
                        </div>
                    })
                }}

                {move || {
                    submit.get().result.map(|response| {
                        let display = report_display(&response);
                        view! {
                            <div class="report-results">
                                <h3 class="section-title">"Resultados del Reporte"</h3>
                                {display.download.map(|download| view! {
                                    <div class="report-results__download">
                                        <a
                                            href=download.file_url
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="download-button"
                                        >
                                            "📥 Descargar Reporte Excel"
                                        </a>
                                        {download.file_id.map(|id| view! {
                                            <p class="report-results__file-id">
                                                "ID del archivo: " {id}
                                            </p>
                                        })}
                                    </div>
                                })}
                                <details class="report-results__details">
                                    <summary>"Ver respuesta completa de la API"</summary>
                                    <pre class="report-results__json">{display.raw_json}</pre>
                                </details>
                            </div>
                        }
                    })
                }}
            </div>
        </div>
    }
}

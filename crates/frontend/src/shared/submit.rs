//! Máquina de estados de envío compartida por las pantallas:
//! `Idle → Validating → Submitting → (Succeeded | Failed) → Idle`.
//!
//! Cada pantalla guarda un `SubmitState<T>` dentro de un `RwSignal` y lo
//! muta solo a través de estos métodos. Cada intento recibe un tiquete
//! creciente; una respuesta que llega con tiquete viejo fue reemplazada por
//! un intento más nuevo y se descarta sin tocar el estado.

use super::http::ApiFailure;

#[derive(Debug, Clone, PartialEq)]
pub struct SubmitState<T> {
    /// Hay una petición en vuelo; la UI bloquea reenvíos mientras tanto.
    pub busy: bool,

    /// Mensaje de error visible. Nunca convive con `result`.
    pub error: Option<String>,

    /// Último desenlace exitoso visible.
    pub result: Option<T>,

    seq: u64,
}

impl<T> Default for SubmitState<T> {
    fn default() -> Self {
        Self::idle()
    }
}

impl<T> SubmitState<T> {
    pub fn idle() -> Self {
        Self {
            busy: false,
            error: None,
            result: None,
            seq: 0,
        }
    }

    /// La validación pasó: limpia el desenlace anterior, marca ocupado y
    /// devuelve el tiquete que identifica este intento.
    pub fn begin(&mut self) -> u64 {
        self.busy = true;
        self.error = None;
        self.result = None;
        self.seq += 1;
        self.seq
    }

    /// La validación falló: queda el mensaje y no se toca la red.
    pub fn reject(&mut self, message: impl Into<String>) {
        self.busy = false;
        self.result = None;
        self.error = Some(message.into());
    }

    /// Cierra el intento identificado por `ticket`. Devuelve `false` si el
    /// tiquete quedó obsoleto y la respuesta se descartó.
    pub fn settle(&mut self, ticket: u64, outcome: Result<T, ApiFailure>) -> bool {
        if ticket != self.seq {
            return false;
        }
        self.busy = false;
        match outcome {
            Ok(value) => {
                self.result = Some(value);
                self.error = None;
            }
            Err(failure) => {
                self.error = Some(failure.to_string());
                self.result = None;
            }
        }
        true
    }

    /// El operador editó un campo: el error deja de ser actual; el
    /// resultado se conserva.
    pub fn touch(&mut self) {
        self.error = None;
    }

    pub fn clear_result(&mut self) {
        self.result = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_busy_cleared_on_every_settlement() {
        let outcomes: Vec<Result<String, ApiFailure>> = vec![
            Ok("ok".to_string()),
            Err(ApiFailure::ServerRejected("boom".to_string())),
            Err(ApiFailure::Unreachable("sin respuesta".to_string())),
            Err(ApiFailure::ClientError("mal construida".to_string())),
        ];
        for outcome in outcomes {
            let mut state = SubmitState::<String>::idle();
            let ticket = state.begin();
            assert!(state.busy);
            assert!(state.settle(ticket, outcome));
            assert!(!state.busy);
            // exactamente uno de los dos desenlaces queda visible
            assert!(state.error.is_some() != state.result.is_some());
        }
    }

    #[test]
    fn test_begin_clears_previous_outcome() {
        let mut state = SubmitState::<u32>::idle();
        let ticket = state.begin();
        state.settle(ticket, Ok(7));
        assert_eq!(state.result, Some(7));

        state.begin();
        assert!(state.result.is_none());
        assert!(state.error.is_none());
        assert!(state.busy);
    }

    #[test]
    fn test_stale_ticket_is_discarded() {
        let mut state = SubmitState::<u32>::idle();
        let first = state.begin();
        let second = state.begin();

        // la respuesta del primer intento llega tarde
        assert!(!state.settle(first, Ok(1)));
        assert!(state.busy);
        assert!(state.result.is_none());

        assert!(state.settle(second, Ok(2)));
        assert_eq!(state.result, Some(2));
        assert!(!state.busy);
    }

    #[test]
    fn test_reject_sets_error_without_network() {
        let mut state = SubmitState::<u32>::idle();
        state.reject("El año debe estar entre 2000 y 2100");
        assert!(!state.busy);
        assert_eq!(
            state.error.as_deref(),
            Some("El año debe estar entre 2000 y 2100")
        );
    }

    #[test]
    fn test_touch_clears_error_but_keeps_result() {
        let mut state = SubmitState::<u32>::idle();
        let ticket = state.begin();
        state.settle(ticket, Ok(5));
        state.reject("error transitorio");

        state.touch();
        assert!(state.error.is_none());

        let ticket = state.begin();
        state.settle(ticket, Ok(9));
        state.touch();
        assert_eq!(state.result, Some(9));
    }

    #[test]
    fn test_clear_result() {
        let mut state = SubmitState::<u32>::idle();
        let ticket = state.begin();
        state.settle(ticket, Ok(3));
        state.clear_result();
        assert!(state.result.is_none());
    }
}

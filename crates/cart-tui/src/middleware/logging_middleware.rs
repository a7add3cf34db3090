use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

/// LoggingMiddleware - logs all actions passing through
#[derive(Debug, Default)]
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, _dispatcher: &Dispatcher) -> bool {
        log::debug!("Action {}: {:?}", action.action_type(), action);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::CartAction;

    #[test]
    fn test_logging_middleware_passes_through() {
        let mut middleware = LoggingMiddleware::new();
        let dispatcher = Dispatcher::new();
        let state = AppState::default();

        assert!(middleware.handle(&Action::Cart(CartAction::Clear), &state, &dispatcher));
        assert!(dispatcher.is_empty());
    }
}

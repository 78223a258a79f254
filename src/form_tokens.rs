//! One-shot tokens carried by the rendered contact form.
//!
//! A token is claimed by the first POST that carries it. Repeats of that POST
//! (double click, browser refresh) never reach the mailer again.

use std::{
    collections::{HashMap, VecDeque},
    sync::Mutex,
};

/// Tokens remembered before the oldest ones are forgotten
const CAPACITY: usize = 4096;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Claim {
    /// First use, the caller must submit and then call [`FormTokens::finish`]
    Fresh,
    /// Another request with this token is still being delivered
    InFlight,
    /// The submission carrying this token was already sent
    Sent,
}

#[derive(Debug, Clone, Copy)]
enum TokenState {
    Pending,
    Sent,
}

#[derive(Debug, Default)]
struct Ledger {
    states: HashMap<String, TokenState>,
    order: VecDeque<String>,
}

#[derive(Debug, Default)]
pub struct FormTokens {
    ledger: Mutex<Ledger>,
}

impl FormTokens {
    pub fn issue() -> String {
        ulid::Ulid::new().to_string()
    }

    pub fn claim(&self, token: &str) -> Claim {
        let mut ledger = self.ledger.lock().unwrap_or_else(|e| e.into_inner());

        match ledger.states.get(token) {
            Some(TokenState::Pending) => return Claim::InFlight,
            Some(TokenState::Sent) => return Claim::Sent,
            None => {}
        }

        if ledger.order.len() >= CAPACITY {
            if let Some(oldest) = ledger.order.pop_front() {
                ledger.states.remove(&oldest);
            }
        }

        ledger.states.insert(token.to_owned(), TokenState::Pending);
        ledger.order.push_back(token.to_owned());

        Claim::Fresh
    }

    /// Record the outcome of a fresh claim. A failed attempt releases the
    /// token so the same form can be retried.
    pub fn finish(&self, token: &str, sent: bool) {
        let mut ledger = self.ledger.lock().unwrap_or_else(|e| e.into_inner());

        if sent {
            if let Some(state) = ledger.states.get_mut(token) {
                *state = TokenState::Sent;
            }
            return;
        }

        ledger.states.remove(token);
        ledger.order.retain(|t| t != token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_lifecycle() {
        let tokens = FormTokens::default();
        let token = FormTokens::issue();

        assert_eq!(tokens.claim(&token), Claim::Fresh);
        assert_eq!(tokens.claim(&token), Claim::InFlight);

        tokens.finish(&token, true);
        assert_eq!(tokens.claim(&token), Claim::Sent);
    }

    #[test]
    fn test_failure_releases_token() {
        let tokens = FormTokens::default();

        assert_eq!(tokens.claim("t-1"), Claim::Fresh);
        tokens.finish("t-1", false);

        assert_eq!(tokens.claim("t-1"), Claim::Fresh);
    }

    #[test]
    fn test_oldest_tokens_are_forgotten() {
        let tokens = FormTokens::default();

        for n in 0..=CAPACITY {
            tokens.claim(&format!("t-{n}"));
        }

        assert_eq!(tokens.claim("t-0"), Claim::Fresh);
        assert_eq!(tokens.claim(&format!("t-{CAPACITY}")), Claim::InFlight);
    }

    #[test]
    fn test_issued_tokens_differ() {
        assert_ne!(FormTokens::issue(), FormTokens::issue());
    }
}

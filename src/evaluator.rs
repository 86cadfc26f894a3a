//! Password strength evaluator - main evaluation logic.

use secrecy::SecretString;

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::sections::SECTIONS;
use crate::types::{PasswordEvaluation, PasswordScore};

/// Delay before an interactive evaluation starts, so fast typing can cancel it.
#[cfg(feature = "async")]
pub const EVALUATION_DEBOUNCE: Duration = Duration::from_millis(300);

/// Runs the sections in order while `keep_going` allows it.
///
/// Returns the evaluation built so far and whether every section ran.
fn run_sections(
    password: &SecretString,
    mut keep_going: impl FnMut() -> bool,
) -> (PasswordEvaluation, bool) {
    let mut score = 0u8;
    let mut feedback = Vec::new();

    for (_section_name, section_fn) in SECTIONS {
        if !keep_going() {
            #[cfg(feature = "tracing")]
            tracing::debug!("Evaluation cancelled before section: {}", _section_name);
            return (PasswordEvaluation::default(), false);
        }

        match section_fn(password) {
            Some(message) => feedback.push(message.to_string()),
            None => score += 1,
        }
    }

    let evaluation = PasswordEvaluation {
        score: PasswordScore::new(score),
        feedback,
    };
    (evaluation, true)
}

/// Evaluates password strength.
///
/// Every string is accepted, the empty one included. The score is the number
/// of passed sections and `feedback` holds one message per failed section.
pub fn evaluate_password_strength(password: &SecretString) -> PasswordEvaluation {
    let (evaluation, _) = run_sections(password, || true);
    evaluation
}

/// Like [`evaluate_password_strength`], but checks `token` before each
/// section. Returns `None` when the evaluation was cancelled.
#[cfg(feature = "async")]
pub fn evaluate_password_strength_cancellable(
    password: &SecretString,
    token: &CancellationToken,
) -> Option<PasswordEvaluation> {
    let (evaluation, completed) = run_sections(password, || !token.is_cancelled());
    completed.then_some(evaluation)
}

/// Async version that sends the evaluation result via channel.
///
/// Waits [`EVALUATION_DEBOUNCE`] first. Nothing is sent if `token` is
/// cancelled in the meantime.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordEvaluation>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::time::sleep(EVALUATION_DEBOUNCE).await;

    let Some(evaluation) = evaluate_password_strength_cancellable(password, &token) else {
        #[cfg(feature = "tracing")]
        tracing::debug!("evaluation cancelled, nothing sent");
        return;
    };

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PasswordRank;

    fn evaluate(pwd: &str) -> PasswordEvaluation {
        evaluate_password_strength(&SecretString::new(pwd.to_string().into()))
    }

    #[test]
    fn test_evaluate_excellent_password() {
        let evaluation = evaluate("Secure@123");
        assert_eq!(evaluation.score.value(), 4);
        assert_eq!(evaluation.rank(), PasswordRank::Excellent);
        assert!(evaluation.feedback.is_empty());
    }

    #[test]
    fn test_evaluate_weak_password() {
        let evaluation = evaluate("weak");
        assert_eq!(evaluation.score.value(), 0);
        assert_eq!(evaluation.rank(), PasswordRank::Weak);
        assert_eq!(evaluation.feedback.len(), 4);
    }

    #[test]
    fn test_evaluate_empty_password() {
        let evaluation = evaluate("");
        assert_eq!(evaluation.score.value(), 0);
        assert_eq!(evaluation.feedback.len(), 4);
    }

    #[test]
    fn test_evaluate_feedback_order() {
        let evaluation = evaluate("");
        assert_eq!(
            evaluation.feedback,
            vec![
                "❌ Password must be at least 8 characters long.",
                "❌ Include both uppercase and lowercase letters.",
                "❌ Add at least one number (0-9).",
                "❌ Include at least one special character (!@#$%^&*).",
            ]
        );
    }

    #[test]
    fn test_short_passwords_always_miss_length_point() {
        for pwd in ["A", "Ab1!", "Ab1!Ab1", "Zz9#", "ééééééé"] {
            let evaluation = evaluate(pwd);
            assert!(evaluation.score.value() <= 3, "password {:?}", pwd);
            assert_eq!(
                evaluation.feedback.first().map(String::as_str),
                Some("❌ Password must be at least 8 characters long."),
                "password {:?}",
                pwd
            );
        }
    }

    #[test]
    fn test_each_rank_is_reachable() {
        let cases = [
            ("abc", PasswordRank::Weak),
            ("abcdefgh", PasswordRank::Moderate),
            ("abcdefg1", PasswordRank::Good),
            ("Abcdefg1", PasswordRank::Strong),
            ("Abcdefg1!", PasswordRank::Excellent),
        ];
        for (pwd, rank) in cases {
            assert_eq!(evaluate(pwd).rank(), rank, "password {:?}", pwd);
        }
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        assert_eq!(evaluate("Some#Pass1"), evaluate("Some#Pass1"));
    }
}

#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;
    use crate::types::PasswordRank;

    #[tokio::test]
    async fn test_evaluate_with_cancellation() {
        let token = CancellationToken::new();
        token.cancel();

        let pwd = SecretString::new("SomePassword123!".to_string().into());
        assert!(evaluate_password_strength_cancellable(&pwd, &token).is_none());
    }

    #[tokio::test]
    async fn test_evaluate_without_cancellation() {
        let token = CancellationToken::new();

        let pwd = SecretString::new("TestPass123!".to_string().into());
        let evaluation = evaluate_password_strength_cancellable(&pwd, &token)
            .expect("Should complete");
        assert_eq!(evaluation.rank(), PasswordRank::Excellent);
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_password_strength_tx() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        let pwd = SecretString::new("TestPass123".to_string().into());
        evaluate_password_strength_tx(&pwd, token, tx).await;

        let evaluation = rx.recv().await.expect("Should receive evaluation");
        assert_eq!(evaluation.score.value(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_password_strength_tx_cancelled() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();

        let pwd = SecretString::new("TestPass123!".to_string().into());
        evaluate_password_strength_tx(&pwd, token, tx).await;

        // Sender was dropped without sending
        assert!(rx.recv().await.is_none());
    }
}

//! In-process verification gateway
//!
//! Stands in for a remote identity-verification provider during local
//! development: codes are generated and checked in memory, and each issued
//! code is handed to the caller's notice hook so it can be shown in the UI.

use super::ApiError;
use super::traits::VerificationGateway;
use crate::input::OTP_LEN;
use crate::state::VerificationTarget;
use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use uuid::Uuid;

/// Receives `(target, code)` whenever a code is issued
pub type CodeNotice = Box<dyn Fn(&VerificationTarget, &str) + Send + Sync>;

/// Gateway that keeps issued codes in memory
#[derive(Default)]
pub struct LocalGateway {
    issued: HashMap<VerificationTarget, String>,
    notice: Option<CodeNotice>,
}

impl LocalGateway {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Call `notice` with every issued code
    pub fn with_notice(notice: CodeNotice) -> Self {
        Self {
            issued: HashMap::new(),
            notice: Some(notice),
        }
    }

    /// The outstanding code for a target, if any
    #[cfg(test)]
    pub fn issued_code(&self, target: &VerificationTarget) -> Option<&str> {
        self.issued.get(target).map(String::as_str)
    }
}

/// Derive a zero-padded numeric code from a random v4 UUID
fn generate_code() -> String {
    let modulus = 10u128.pow(OTP_LEN as u32);
    format!("{:0width$}", Uuid::new_v4().as_u128() % modulus, width = OTP_LEN)
}

#[async_trait]
impl VerificationGateway for LocalGateway {
    async fn send_code(&mut self, target: &VerificationTarget) -> Result<()> {
        let code = generate_code();
        tracing::info!("Sending OTP to {target}");
        if let Some(notice) = &self.notice {
            notice(target, &code);
        }
        self.issued.insert(target.clone(), code);
        Ok(())
    }

    async fn verify_code(&mut self, target: &VerificationTarget, code: &str) -> Result<bool> {
        let Some(expected) = self.issued.get(target) else {
            return Err(ApiError::NoCodeIssued(target.to_string()).into());
        };

        if expected != code {
            tracing::warn!("OTP mismatch for {target}");
            return Ok(false);
        }

        tracing::info!("Verified OTP for {target}");
        self.issued.remove(target);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::VerificationChannel;
    use std::sync::{Arc, Mutex};

    fn phone() -> VerificationTarget {
        VerificationTarget::new(VerificationChannel::Phone, "9876543210")
    }

    #[test]
    fn test_generated_code_shape() {
        for _ in 0..50 {
            let code = generate_code();
            assert_eq!(code.len(), OTP_LEN);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_verify_without_send_is_an_error() {
        let mut gateway = LocalGateway::new();
        let result = tokio_test::block_on(gateway.verify_code(&phone(), "123456"));
        assert!(result.is_err());
    }

    #[test]
    fn test_send_then_verify() {
        let mut gateway = LocalGateway::new();
        tokio_test::block_on(gateway.send_code(&phone())).unwrap();
        let code = gateway.issued_code(&phone()).unwrap().to_string();

        let ok = tokio_test::block_on(gateway.verify_code(&phone(), &code)).unwrap();
        assert!(ok);
        // A verified code is consumed
        assert!(gateway.issued_code(&phone()).is_none());
    }

    #[test]
    fn test_wrong_code_keeps_the_issued_one() {
        let mut gateway = LocalGateway::new();
        tokio_test::block_on(gateway.send_code(&phone())).unwrap();
        let code = gateway.issued_code(&phone()).unwrap().to_string();
        let wrong = if code == "000000" { "111111" } else { "000000" };

        let ok = tokio_test::block_on(gateway.verify_code(&phone(), wrong)).unwrap();
        assert!(!ok);
        assert_eq!(gateway.issued_code(&phone()), Some(code.as_str()));
    }

    #[test]
    fn test_resend_replaces_code_and_notifies() {
        let seen: Arc<Mutex<Vec<String>>> = Arc::default();
        let sink = Arc::clone(&seen);
        let notice = move |_: &VerificationTarget, code: &str| {
            sink.lock().unwrap().push(code.to_string());
        };
        let mut gateway = LocalGateway::with_notice(Box::new(notice));

        tokio_test::block_on(gateway.send_code(&phone())).unwrap();
        tokio_test::block_on(gateway.send_code(&phone())).unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(gateway.issued_code(&phone()), Some(seen[1].as_str()));
    }

    #[test]
    fn test_targets_are_independent() {
        let mut gateway = LocalGateway::new();
        let pan = VerificationTarget::new(VerificationChannel::TaxId, "ABCDE1234F");
        tokio_test::block_on(gateway.send_code(&phone())).unwrap();
        assert!(gateway.issued_code(&pan).is_none());
    }
}

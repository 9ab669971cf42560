use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::gateway::AuthGateway;
use crate::domain::auth::use_cases::login::{LoginParams, LoginUseCase};
use crate::domain::auth::value_objects::Email;
use crate::domain::logger::Logger;
use crate::domain::navigation::{AppRoute, Navigator};
use crate::domain::session::model::Session;
use crate::domain::session::store::SessionStore;

pub struct LoginUseCaseImpl {
    pub gateway: Arc<dyn AuthGateway>,
    pub session: Arc<SessionStore>,
    pub navigator: Arc<dyn Navigator>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LoginUseCase for LoginUseCaseImpl {
    async fn execute(&self, params: LoginParams) -> Result<Session, AuthError> {
        let email = Email::parse(&params.email).inspect_err(|_| {
            self.logger.warn("Login rejected: invalid email format");
        })?;

        self.logger.info(&format!("Authenticating {}", email));
        let token = self.gateway.login(&email).await.inspect_err(|e| {
            self.logger.error(&format!("Authentication failed: {}", e));
        })?;

        if token.trim().is_empty() {
            self.logger.error("Authentication response carried no token");
            return Err(AuthError::InvalidResponse);
        }

        self.session.set_session(token, email.as_str());
        self.navigator.navigate(AppRoute::Products);

        self.logger.info(&format!("Signed in as {}", email));
        Ok(self.session.current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::GatewayError;
    use crate::domain::session::storage::{SessionStorage, SessionStorageError};
    use mockall::mock;
    use mockall::predicate::eq;
    use proptest::prelude::*;

    mock! {
        pub Auth {}

        #[async_trait]
        impl AuthGateway for Auth {
            async fn login(&self, email: &Email) -> Result<String, GatewayError>;
        }
    }

    mock! {
        pub Storage {}

        impl SessionStorage for Storage {
            fn load(&self) -> Result<Session, SessionStorageError>;
            fn save(&self, session: &Session) -> Result<(), SessionStorageError>;
            fn clear(&self) -> Result<(), SessionStorageError>;
        }
    }

    mock! {
        pub Nav {}

        impl Navigator for Nav {
            fn navigate(&self, route: AppRoute);
            fn redirect(&self, route: AppRoute);
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn session_store() -> Arc<SessionStore> {
        let mut storage = MockStorage::new();
        storage.expect_save().returning(|_| Ok(()));
        Arc::new(SessionStore::new(Arc::new(storage), mock_logger()))
    }

    #[tokio::test]
    async fn should_store_session_and_open_products_when_login_succeeds() {
        let mut gateway = MockAuth::new();
        gateway
            .expect_login()
            .times(1)
            .returning(|_| Ok("tok-123".to_string()));
        let mut navigator = MockNav::new();
        navigator
            .expect_navigate()
            .with(eq(AppRoute::Products))
            .times(1)
            .returning(|_| ());

        let session = session_store();
        let use_case = LoginUseCaseImpl {
            gateway: Arc::new(gateway),
            session: session.clone(),
            navigator: Arc::new(navigator),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(LoginParams {
                email: "jane@example.com".to_string(),
            })
            .await;

        assert!(result.is_ok());
        assert_eq!(session.token().as_deref(), Some("tok-123"));
        assert_eq!(session.email().as_deref(), Some("jane@example.com"));
    }

    #[tokio::test]
    async fn should_reject_invalid_email_without_network_call() {
        let mut gateway = MockAuth::new();
        gateway.expect_login().times(0);

        let use_case = LoginUseCaseImpl {
            gateway: Arc::new(gateway),
            session: session_store(),
            navigator: Arc::new(MockNav::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(LoginParams {
                email: "not-an-email".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), AuthError::InvalidEmail));
    }

    #[tokio::test]
    async fn should_fail_when_token_is_empty() {
        let mut gateway = MockAuth::new();
        gateway.expect_login().returning(|_| Ok(String::new()));

        let session = session_store();
        let use_case = LoginUseCaseImpl {
            gateway: Arc::new(gateway),
            session: session.clone(),
            navigator: Arc::new(MockNav::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(LoginParams {
                email: "jane@example.com".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), AuthError::InvalidResponse));
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn should_surface_gateway_failure() {
        let mut gateway = MockAuth::new();
        gateway
            .expect_login()
            .returning(|_| Err(GatewayError::Timeout));

        let use_case = LoginUseCaseImpl {
            gateway: Arc::new(gateway),
            session: session_store(),
            navigator: Arc::new(MockNav::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(LoginParams {
                email: "jane@example.com".to_string(),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            AuthError::Gateway(GatewayError::Timeout)
        ));
    }

    proptest! {
        #[test]
        fn should_reject_padded_email_without_network_call(
            leading in "[ \t]{0,3}",
            trailing in "[ \t]{0,3}",
        ) {
            prop_assume!(!leading.is_empty() || !trailing.is_empty());

            let mut gateway = MockAuth::new();
            gateway.expect_login().times(0);

            let use_case = LoginUseCaseImpl {
                gateway: Arc::new(gateway),
                session: session_store(),
                navigator: Arc::new(MockNav::new()),
                logger: mock_logger(),
            };
            let runtime = tokio::runtime::Builder::new_current_thread()
                .build()
                .unwrap();

            let result = runtime.block_on(use_case.execute(LoginParams {
                email: format!("{}jane@example.com{}", leading, trailing),
            }));

            prop_assert!(matches!(result, Err(AuthError::InvalidEmail)));
        }
    }
}

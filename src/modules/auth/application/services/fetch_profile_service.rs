use async_trait::async_trait;

use crate::auth::application::{
    domain::entities::UserId,
    ports::{
        incoming::use_cases::{FetchProfileError, FetchProfileUseCase, UserProfile},
        outgoing::UserQuery,
    },
};

#[derive(Debug, Clone)]
pub struct FetchProfileService<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
}

impl<Q> FetchProfileService<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> FetchProfileUseCase for FetchProfileService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<UserProfile, FetchProfileError> {
        let user = self
            .query
            .find_by_id(user_id)
            .await
            .map_err(|e| FetchProfileError::QueryError(e.to_string()))?
            .ok_or(FetchProfileError::UserNotFound)?;

        Ok(UserProfile {
            email: user.email,
            name: user.name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    use crate::auth::application::ports::outgoing::{UserQueryError, UserQueryResult};

    struct MockUserQuery {
        result: Result<Option<UserQueryResult>, UserQueryError>,
    }

    #[async_trait]
    impl UserQuery for MockUserQuery {
        async fn find_by_id(
            &self,
            _user_id: UserId,
        ) -> Result<Option<UserQueryResult>, UserQueryError> {
            self.result.clone()
        }

        async fn find_by_email(
            &self,
            _email: &str,
        ) -> Result<Option<UserQueryResult>, UserQueryError> {
            unimplemented!()
        }
    }

    fn stored_user(id: UserId) -> UserQueryResult {
        UserQueryResult {
            id,
            email: "test@example.com".to_string(),
            name: "Test Name".to_string(),
            password_hash: "hash".to_string(),
            is_active: true,
            is_staff: false,
            is_superuser: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn returns_email_and_name_only() {
        let id = UserId::from(Uuid::new_v4());
        let svc = FetchProfileService::new(MockUserQuery {
            result: Ok(Some(stored_user(id))),
        });

        let profile = svc.execute(id).await.unwrap();

        assert_eq!(
            profile,
            UserProfile {
                email: "test@example.com".to_string(),
                name: "Test Name".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn missing_user_is_not_found() {
        let svc = FetchProfileService::new(MockUserQuery { result: Ok(None) });

        let result = svc.execute(UserId::from(Uuid::new_v4())).await;

        assert!(matches!(result, Err(FetchProfileError::UserNotFound)));
    }

    #[tokio::test]
    async fn query_error_is_mapped() {
        let svc = FetchProfileService::new(MockUserQuery {
            result: Err(UserQueryError::DatabaseError("boom".into())),
        });

        let result = svc.execute(UserId::from(Uuid::new_v4())).await;

        assert!(matches!(result, Err(FetchProfileError::QueryError(_))));
    }
}

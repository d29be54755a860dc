//! # 사용자 CRUD 서비스 구현
//!
//! 사용자 리소스의 생성/조회/수정/삭제를 담당하는 핵심 비즈니스 로직입니다.
//! Spring Framework의 UserCRUDService 패턴을 참고하여 설계되었으며,
//! 검증, 매핑, 저장소 호출, 응답 봉투 구성을 모두 이 계층에서 조율합니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        UserCrudService                          │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────┐  │
//! │  │   Validation    │  │     Mapping     │  │    Envelope     │  │
//! │  │                 │  │                 │  │                 │  │
//! │  │ • 필수 필드 검증   │  │ • DTO → Entity  │  │ • status 0/1    │  │
//! │  │ • 생성 시에만 적용 │  │ • Entity → DTO  │  │ • 고정 메시지     │  │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────┘  │
//! └─────────────────────────────────────────────────────────────────┘
//!                                 │
//!                                 ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     UserRepository (trait)                      │
//! │ • PostgreSQL CRUD Operations                                    │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 에러 처리 전략
//!
//! 이 서비스의 모든 메서드는 `Result`가 아닌 응답 봉투를 직접 반환합니다.
//! 저장소에서 발생한 모든 에러는 이 경계에서 실패 봉투로 변환되며,
//! 어떤 에러도 호출자에게 예외로 전파되지 않습니다. 전체 조회만 예외적으로
//! 실패 시 빈 목록을 반환합니다(단건 조회와의 의도된 비대칭).

use std::sync::Arc;

use chrono::Utc;
use validator::Validate;

use crate::core::errors::AppError;
use crate::core::registry::{Service, ServiceLocator, ServiceRegistration};
use crate::domain::dto::users::request::user_dto::UserDto;
use crate::domain::dto::users::response::response::Response;
use crate::domain::dto::users::response::user_response_dto::UserResponseDto;
use crate::domain::mappers::user_mapper;
use crate::repositories::users::user_repo::{PgUserRepository, UserRepository};

/// 사용자 CRUD 비즈니스 로직 서비스
///
/// 검증, 매핑, 저장소 호출, 봉투 구성을 담당하는 상태 없는 서비스입니다.
/// 동일한 입력과 변하지 않은 저장소에 대해 항상 동등한 봉투를 반환합니다.
///
/// ## 싱글톤 패턴 및 의존성 주입
///
/// 레지스트리를 통해 싱글톤으로 관리되며, 저장소 계약(trait)이 주입됩니다:
///
/// ```rust,ignore
/// let service = UserCrudService::instance(); // 항상 동일한 인스턴스
/// ```
pub struct UserCrudService {
    /// 사용자 데이터 액세스 저장소
    ///
    /// trait으로 추상화되어 있어 테스트에서는 mock으로 대체됩니다.
    user_repo: Arc<dyn UserRepository>,
}

impl UserCrudService {
    /// 싱글톤 인스턴스를 반환합니다.
    pub fn instance() -> Arc<Self> {
        ServiceLocator::get::<UserCrudService>()
    }

    /// 레지스트리 생성자. PostgreSQL 리포지토리 싱글톤을 주입받습니다.
    fn new() -> Self {
        Self {
            user_repo: PgUserRepository::instance(),
        }
    }

    /// 주어진 저장소로 서비스를 구성합니다. (테스트 전용)
    #[cfg(test)]
    fn with_repository(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// id로 사용자 단건을 조회합니다.
    ///
    /// # 인자
    ///
    /// * `id` - 조회할 사용자의 식별자
    ///
    /// # 반환값
    ///
    /// * 존재하는 경우 - 매핑된 DTO를 감싼 성공 봉투
    /// * 없거나 조회가 실패한 경우 - 실패 원인의 설명을 단일 에러로 담은 실패 봉투
    ///
    /// "없음"과 그 외 조회 실패는 status 수준에서 구분하지 않습니다.
    /// 둘 다 `status = 1`로 수렴합니다.
    pub async fn get_by_id(&self, id: i32) -> UserResponseDto {
        log::info!("Get by id {}", id);

        let found = self.user_repo.find_by_id(id).await.and_then(|user| {
            user.ok_or_else(|| AppError::NotFound(format!("user with id {} not found", id)))
        });

        match found {
            Ok(user) => UserResponseDto::success(user_mapper::to_dto(&user)),
            Err(e) => UserResponseDto::failure(vec![e.to_string()]),
        }
    }

    /// 저장된 모든 사용자를 조회합니다.
    ///
    /// # 반환값
    ///
    /// 저장소 순회 순서(id 오름차순)대로, 사용자 한 명당 성공 봉투 하나씩 담은 목록.
    ///
    /// 조회가 실패하면 실패 봉투 대신 빈 목록을 반환합니다.
    /// 단건 조회와 다른 이 비대칭은 의도된 동작입니다.
    pub async fn get_all(&self) -> Vec<UserResponseDto> {
        match self.user_repo.find_all().await {
            Ok(users) => users
                .iter()
                .map(|user| UserResponseDto::success(user_mapper::to_dto(user)))
                .collect(),
            Err(e) => {
                log::warn!("Get all failed: {}", e);
                Vec::new()
            }
        }
    }

    /// 새 사용자를 생성합니다.
    ///
    /// # 인자
    ///
    /// * `user_dto` - 생성할 사용자 데이터
    ///
    /// # 처리 과정
    ///
    /// 1. **필수 필드 검증**: `name`, `email`, `age`가 모두 존재해야 합니다.
    ///    검증 실패 시 저장소를 호출하지 않고 즉시 실패 봉투를 반환합니다.
    /// 2. **생성 시각 할당**: `created_at`은 호출자가 아닌 서비스가 할당합니다.
    /// 3. **영구 저장**: id는 데이터베이스가 할당합니다.
    ///
    /// # 반환값
    ///
    /// * 저장 성공 - 고정 확인 메시지를 담은 성공 봉투 (페이로드 없음)
    /// * 검증 실패 - "not all required fields were supplied" 에러를 담은 실패 봉투
    /// * 저장 실패 - 실패 원인의 설명을 담은 실패 봉투
    pub async fn create(&self, user_dto: UserDto) -> Response {
        if user_dto.validate().is_err() {
            return Response::failure(
                "an error occurred while saving the user",
                vec!["not all required fields were supplied".to_string()],
            );
        }

        log::info!("Create");

        let mut user = user_mapper::to_entity(&user_dto);
        // 생성 시각은 서비스가 할당합니다. 역직렬화 기본값에 의존하지 않습니다.
        user.created_at = Some(Utc::now());

        match self.user_repo.save(user).await {
            Ok(_) => Response::success("user saved"),
            Err(e) => Response::failure(
                "an error occurred while saving the user",
                vec![e.to_string()],
            ),
        }
    }

    /// 기존 사용자를 수정합니다.
    ///
    /// # 인자
    ///
    /// * `id` - 경로에서 추출한 사용자 식별자. 본문의 id보다 항상 우선합니다.
    /// * `user_dto` - 수정할 사용자 데이터
    ///
    /// 존재 여부 사전 확인 없이 id 기준으로 덮어씁니다(upsert).
    /// 생성과 달리 필드 검증을 수행하지 않으며, 비어 있는 필드는 NULL로
    /// 저장됩니다. 이 비대칭은 관찰된 동작 그대로 유지됩니다.
    pub async fn update(&self, id: i32, mut user_dto: UserDto) -> Response {
        log::info!("Update");

        // 경로의 id가 본문의 값을 덮어씁니다
        user_dto.id = Some(id);

        match self.user_repo.save(user_mapper::to_entity(&user_dto)).await {
            Ok(_) => Response::success("user updated"),
            Err(e) => Response::failure(
                "an error occurred while updating the user",
                vec![e.to_string()],
            ),
        }
    }

    /// 사용자를 삭제합니다.
    ///
    /// # 인자
    ///
    /// * `id` - 삭제할 사용자의 식별자
    ///
    /// # 처리 과정
    ///
    /// 1. **존재 확인**: 조회로 존재 여부를 먼저 확인합니다.
    ///    없으면 저장소의 삭제 호출 없이 고정 메시지의 실패 봉투를 반환합니다.
    ///    (존재 확인이 깨끗하게 "없음"을 반환한 것은 에러 경로가 아닙니다)
    /// 2. **삭제 수행**: 존재하면 삭제하고 성공 봉투를 반환합니다.
    ///
    /// 존재 확인 또는 삭제 호출에서 발생한 에러는 모두 실패 봉투로 변환됩니다.
    pub async fn delete(&self, id: i32) -> Response {
        match self.user_repo.find_by_id(id).await {
            Ok(Some(_)) => {
                log::info!("Delete user {}", id);

                match self.user_repo.delete_by_id(id).await {
                    Ok(()) => Response::success("user deleted"),
                    Err(e) => Response::failure(
                        "an error occurred while deleting the user",
                        vec![e.to_string()],
                    ),
                }
            }
            Ok(None) => Response::failure(
                "user deletion impossible",
                vec!["no such id".to_string()],
            ),
            Err(e) => Response::failure(
                "an error occurred while deleting the user",
                vec![e.to_string()],
            ),
        }
    }
}

#[async_trait::async_trait]
impl Service for UserCrudService {
    fn name(&self) -> &str {
        "usercrud_service"
    }

    async fn init(&self) -> Result<(), Box<dyn std::error::Error>> {
        Ok(())
    }
}

// 레지스트리 등록 (컴파일 타임 수집)
inventory::submit! {
    ServiceRegistration {
        name: "usercrud_service",
        constructor: || Box::new(Arc::new(UserCrudService::new())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use mockall::predicate::eq;

    use crate::domain::entities::users::user::User;
    use crate::repositories::users::user_repo::MockUserRepository;

    fn fixed_date_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap()
    }

    fn sample_user() -> User {
        User {
            id: Some(1),
            name: Some("John Doe".to_string()),
            email: Some("john.doe@example.com".to_string()),
            age: Some(30),
            created_at: Some(fixed_date_time()),
        }
    }

    fn sample_dto() -> UserDto {
        UserDto {
            id: Some(1),
            name: Some("John Doe".to_string()),
            email: Some("john.doe@example.com".to_string()),
            age: Some(30),
            created_at: Some(fixed_date_time()),
        }
    }

    fn service_with(repo: MockUserRepository) -> UserCrudService {
        UserCrudService::with_repository(Arc::new(repo))
    }

    mod get_by_id {
        use super::*;

        #[actix_web::test]
        async fn returns_user_when_user_exists() {
            let mut repo = MockUserRepository::new();
            repo.expect_find_by_id()
                .with(eq(1))
                .times(1)
                .returning(|_| Ok(Some(sample_user())));

            let result = service_with(repo).get_by_id(1).await;

            assert_eq!(result.status, 0);
            assert_eq!(result.errors, None);
            let user = result.user.expect("success envelope carries the payload");
            assert_eq!(user.id, Some(1));
            assert_eq!(user.name, Some("John Doe".to_string()));
            assert_eq!(user.email, Some("john.doe@example.com".to_string()));
            assert_eq!(user.age, Some(30));
        }

        #[actix_web::test]
        async fn returns_error_envelope_when_user_not_found() {
            let mut repo = MockUserRepository::new();
            repo.expect_find_by_id()
                .with(eq(999))
                .times(1)
                .returning(|_| Ok(None));

            let result = service_with(repo).get_by_id(999).await;

            assert_eq!(result.status, 1);
            assert_eq!(result.user, None);
            let errors = result.errors.expect("failure envelope carries errors");
            assert_eq!(errors.len(), 1);
            assert!(errors[0].contains("not found"));
        }

        #[actix_web::test]
        async fn returns_error_envelope_when_lookup_fails() {
            // "없음"과 조회 실패는 모두 status 1로 수렴합니다
            let mut repo = MockUserRepository::new();
            repo.expect_find_by_id()
                .times(1)
                .returning(|_| Err(AppError::DatabaseError("connection refused".to_string())));

            let result = service_with(repo).get_by_id(1).await;

            assert_eq!(result.status, 1);
            assert!(result.errors.unwrap()[0].contains("connection refused"));
        }
    }

    mod get_all {
        use super::*;

        #[actix_web::test]
        async fn returns_all_users_in_store_order() {
            let second = User {
                id: Some(2),
                name: Some("Jane Smith".to_string()),
                email: Some("jane.smith@example.com".to_string()),
                age: Some(25),
                created_at: Some(fixed_date_time()),
            };
            let mut repo = MockUserRepository::new();
            repo.expect_find_all()
                .times(1)
                .returning(move || Ok(vec![sample_user(), second.clone()]));

            let result = service_with(repo).get_all().await;

            assert_eq!(result.len(), 2);
            assert_eq!(result[0].status, 0);
            assert_eq!(result[0].user.as_ref().unwrap().id, Some(1));
            assert_eq!(
                result[0].user.as_ref().unwrap().name,
                Some("John Doe".to_string())
            );
            assert_eq!(result[1].status, 0);
            assert_eq!(result[1].user.as_ref().unwrap().id, Some(2));
            assert_eq!(
                result[1].user.as_ref().unwrap().name,
                Some("Jane Smith".to_string())
            );
        }

        #[actix_web::test]
        async fn returns_empty_list_when_fetch_fails() {
            // 단건 조회와 달리 실패 봉투가 아닌 빈 목록을 반환합니다
            let mut repo = MockUserRepository::new();
            repo.expect_find_all()
                .times(1)
                .returning(|| Err(AppError::DatabaseError("connection refused".to_string())));

            let result = service_with(repo).get_all().await;

            assert!(result.is_empty());
        }
    }

    mod create {
        use super::*;

        #[actix_web::test]
        async fn creates_user_when_valid_data_provided() {
            let mut repo = MockUserRepository::new();
            repo.expect_save()
                .withf(|user: &User| {
                    // id는 저장 시점에 데이터베이스가 할당하도록 비어 있어야 하고,
                    // created_at은 서비스가 이미 할당했어야 합니다
                    user.id.is_none()
                        && user.created_at.is_some()
                        && user.name == Some("A".to_string())
                        && user.email == Some("a@x.com".to_string())
                        && user.age == Some(30)
                })
                .times(1)
                .returning(|mut user| {
                    user.id = Some(1);
                    Ok(user)
                });

            let dto = UserDto {
                id: None,
                name: Some("A".to_string()),
                email: Some("a@x.com".to_string()),
                age: Some(30),
                created_at: None,
            };
            let result = service_with(repo).create(dto).await;

            assert_eq!(result.status, 0);
            assert_eq!(result.message, Some("user saved".to_string()));
            assert_eq!(result.errors, None);
        }

        #[actix_web::test]
        async fn returns_error_when_name_is_missing() {
            let mut repo = MockUserRepository::new();
            repo.expect_save().times(0);

            let mut dto = sample_dto();
            dto.name = None;
            let result = service_with(repo).create(dto).await;

            assert_eq!(result.status, 1);
            assert_eq!(
                result.message,
                Some("an error occurred while saving the user".to_string())
            );
            assert_eq!(
                result.errors,
                Some(vec!["not all required fields were supplied".to_string()])
            );
        }

        #[actix_web::test]
        async fn returns_error_when_email_is_missing() {
            let mut repo = MockUserRepository::new();
            repo.expect_save().times(0);

            let mut dto = sample_dto();
            dto.email = None;
            let result = service_with(repo).create(dto).await;

            assert_eq!(result.status, 1);
            assert_eq!(
                result.errors,
                Some(vec!["not all required fields were supplied".to_string()])
            );
        }

        #[actix_web::test]
        async fn returns_error_when_age_is_missing() {
            let mut repo = MockUserRepository::new();
            repo.expect_save().times(0);

            let mut dto = sample_dto();
            dto.age = None;
            let result = service_with(repo).create(dto).await;

            assert_eq!(result.status, 1);
            assert_eq!(
                result.errors,
                Some(vec!["not all required fields were supplied".to_string()])
            );
        }

        #[actix_web::test]
        async fn returns_error_envelope_when_save_fails() {
            let mut repo = MockUserRepository::new();
            repo.expect_save()
                .times(1)
                .returning(|_| Err(AppError::DatabaseError("unique violation".to_string())));

            let result = service_with(repo).create(sample_dto()).await;

            assert_eq!(result.status, 1);
            assert_eq!(
                result.message,
                Some("an error occurred while saving the user".to_string())
            );
            assert!(result.errors.unwrap()[0].contains("unique violation"));
        }
    }

    mod update {
        use super::*;

        #[actix_web::test]
        async fn updates_user_when_valid_data_provided() {
            let mut repo = MockUserRepository::new();
            repo.expect_save()
                .withf(|user: &User| user.id == Some(1))
                .times(1)
                .returning(|user| Ok(user));

            let result = service_with(repo).update(1, sample_dto()).await;

            assert_eq!(result.status, 0);
            assert_eq!(result.message, Some("user updated".to_string()));
            assert_eq!(result.errors, None);
        }

        #[actix_web::test]
        async fn path_id_overwrites_body_id() {
            let mut repo = MockUserRepository::new();
            repo.expect_save()
                .withf(|user: &User| user.id == Some(7))
                .times(1)
                .returning(|user| Ok(user));

            let mut dto = sample_dto();
            dto.id = Some(999); // 본문의 id는 무시됩니다
            let result = service_with(repo).update(7, dto).await;

            assert_eq!(result.status, 0);
        }

        #[actix_web::test]
        async fn performs_no_field_validation() {
            // 생성과 달리 수정은 필드 검증을 하지 않습니다 (의도된 비대칭)
            let mut repo = MockUserRepository::new();
            repo.expect_save()
                .withf(|user: &User| {
                    user.id == Some(1) && user.name.is_none() && user.email.is_none()
                })
                .times(1)
                .returning(|user| Ok(user));

            let result = service_with(repo).update(1, UserDto::default()).await;

            assert_eq!(result.status, 0);
            assert_eq!(result.message, Some("user updated".to_string()));
        }

        #[actix_web::test]
        async fn returns_error_envelope_when_save_fails() {
            let mut repo = MockUserRepository::new();
            repo.expect_save()
                .times(1)
                .returning(|_| Err(AppError::DatabaseError("connection refused".to_string())));

            let result = service_with(repo).update(1, sample_dto()).await;

            assert_eq!(result.status, 1);
            assert_eq!(
                result.message,
                Some("an error occurred while updating the user".to_string())
            );
        }
    }

    mod delete {
        use super::*;

        #[actix_web::test]
        async fn deletes_user_when_user_exists() {
            let mut repo = MockUserRepository::new();
            repo.expect_find_by_id()
                .with(eq(1))
                .times(1)
                .returning(|_| Ok(Some(sample_user())));
            repo.expect_delete_by_id()
                .with(eq(1))
                .times(1)
                .returning(|_| Ok(()));

            let result = service_with(repo).delete(1).await;

            assert_eq!(result.status, 0);
            assert_eq!(result.message, Some("user deleted".to_string()));
            assert_eq!(result.errors, None);
        }

        #[actix_web::test]
        async fn returns_error_when_user_not_found() {
            let mut repo = MockUserRepository::new();
            repo.expect_find_by_id()
                .with(eq(999))
                .times(1)
                .returning(|_| Ok(None));
            repo.expect_delete_by_id().times(0);

            let result = service_with(repo).delete(999).await;

            assert_eq!(result.status, 1);
            assert_eq!(
                result.message,
                Some("user deletion impossible".to_string())
            );
            assert_eq!(result.errors, Some(vec!["no such id".to_string()]));
        }

        #[actix_web::test]
        async fn returns_error_envelope_when_existence_check_fails() {
            let mut repo = MockUserRepository::new();
            repo.expect_find_by_id()
                .times(1)
                .returning(|_| Err(AppError::DatabaseError("connection refused".to_string())));
            repo.expect_delete_by_id().times(0);

            let result = service_with(repo).delete(1).await;

            assert_eq!(result.status, 1);
            assert_eq!(
                result.message,
                Some("an error occurred while deleting the user".to_string())
            );
            assert!(result.errors.unwrap()[0].contains("connection refused"));
        }

        #[actix_web::test]
        async fn returns_error_envelope_when_delete_call_fails() {
            let mut repo = MockUserRepository::new();
            repo.expect_find_by_id()
                .times(1)
                .returning(|_| Ok(Some(sample_user())));
            repo.expect_delete_by_id()
                .times(1)
                .returning(|_| Err(AppError::DatabaseError("connection refused".to_string())));

            let result = service_with(repo).delete(1).await;

            assert_eq!(result.status, 1);
            assert!(result.errors.unwrap()[0].contains("connection refused"));
        }
    }
}

//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! PostgreSQL을 저장소로 사용하며, 서비스 계층에는 trait으로 추상화된
//! 저장소 계약만 노출합니다.
//!
//! ## 저장소 계약
//!
//! Spring Data의 `UserRepository` 인터페이스에 해당하는 trait을 정의합니다:
//!
//! - `find_by_id(id)` - id로 단건 조회
//! - `find_all()` - 전체 조회 (id 오름차순)
//! - `save(user)` - 삽입 또는 id 기준 덮어쓰기 (upsert)
//! - `delete_by_id(id)` - id로 삭제
//!
//! ## 에러 처리
//!
//! 모든 sqlx 에러는 이 경계에서 `AppError::DatabaseError`로 변환됩니다.

use std::sync::Arc;

use async_trait::async_trait;

use crate::core::errors::AppError;
use crate::core::registry::{Repository, RepositoryRegistration, ServiceLocator};
use crate::db::Database;
use crate::domain::entities::users::user::User;

/// 사용자 저장소 계약
///
/// 서비스 계층이 의존하는 추상 인터페이스입니다. 프로덕션에서는
/// [`PgUserRepository`]가 구현하며, 테스트에서는 mock으로 대체됩니다.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// id로 사용자를 조회합니다. 없으면 `Ok(None)`을 반환합니다.
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, AppError>;

    /// 저장된 모든 사용자를 id 오름차순으로 조회합니다.
    async fn find_all(&self) -> Result<Vec<User>, AppError>;

    /// 사용자를 저장합니다.
    ///
    /// `id`가 `None`이면 새 행을 삽입하고 데이터베이스가 id를 할당합니다.
    /// `id`가 있으면 해당 id로 삽입하거나 기존 행을 덮어씁니다(upsert).
    /// 기존 행의 `created_at`은 덮어쓰지 않습니다.
    async fn save(&self, user: User) -> Result<User, AppError>;

    /// id로 사용자를 삭제합니다.
    async fn delete_by_id(&self, id: i32) -> Result<(), AppError>;
}

/// PostgreSQL 사용자 리포지토리
///
/// `users` 테이블에 대한 CRUD 연산을 수행합니다.
/// 싱글톤으로 관리되며 Database 핸들이 자동 주입됩니다.
pub struct PgUserRepository {
    /// PostgreSQL 커넥션 풀 래퍼 (자동 주입)
    db: Arc<Database>,
}

impl PgUserRepository {
    /// 싱글톤 인스턴스를 반환합니다.
    pub fn instance() -> Arc<Self> {
        ServiceLocator::get::<PgUserRepository>()
    }

    /// 레지스트리 생성자. Database 의존성을 주입받습니다.
    fn new() -> Self {
        Self {
            db: ServiceLocator::get::<Database>(),
        }
    }

    /// `users` 테이블을 생성합니다.
    ///
    /// 애플리케이션 초기화 시점에 한 번 실행됩니다.
    /// id는 데이터베이스가 할당하고, 나머지 컬럼은 모두 nullable입니다.
    pub async fn ensure_schema(&self) -> Result<(), AppError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id SERIAL PRIMARY KEY,
                name TEXT,
                email TEXT,
                age INTEGER,
                created_at TIMESTAMPTZ
            )
            "#,
        )
        .execute(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        sqlx::query_as::<_, User>(
            "SELECT id, name, email, age, created_at FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_all(&self) -> Result<Vec<User>, AppError> {
        sqlx::query_as::<_, User>(
            "SELECT id, name, email, age, created_at FROM users ORDER BY id",
        )
        .fetch_all(self.db.pool())
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn save(&self, user: User) -> Result<User, AppError> {
        let saved = match user.id {
            // id가 있으면 삽입 또는 덮어쓰기.
            // created_at은 DO UPDATE 대상에서 제외되어 기존 값이 보존됩니다.
            Some(id) => {
                sqlx::query_as::<_, User>(
                    r#"
                    INSERT INTO users (id, name, email, age, created_at)
                    VALUES ($1, $2, $3, $4, $5)
                    ON CONFLICT (id) DO UPDATE
                        SET name = EXCLUDED.name,
                            email = EXCLUDED.email,
                            age = EXCLUDED.age
                    RETURNING id, name, email, age, created_at
                    "#,
                )
                .bind(id)
                .bind(&user.name)
                .bind(&user.email)
                .bind(user.age)
                .bind(user.created_at)
                .fetch_one(self.db.pool())
                .await
            }
            // id가 없으면 새 행을 삽입하고 데이터베이스가 id를 할당합니다.
            None => {
                sqlx::query_as::<_, User>(
                    r#"
                    INSERT INTO users (name, email, age, created_at)
                    VALUES ($1, $2, $3, $4)
                    RETURNING id, name, email, age, created_at
                    "#,
                )
                .bind(&user.name)
                .bind(&user.email)
                .bind(user.age)
                .bind(user.created_at)
                .fetch_one(self.db.pool())
                .await
            }
        };

        saved.map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), AppError> {
        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(self.db.pool())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl Repository for PgUserRepository {
    fn name(&self) -> &str {
        "pguser_repository"
    }

    fn table_name(&self) -> &str {
        "users"
    }

    async fn init(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.ensure_schema().await?;
        Ok(())
    }
}

// 레지스트리 등록 (컴파일 타임 수집)
inventory::submit! {
    RepositoryRegistration {
        name: "pguser_repository",
        constructor: || Box::new(Arc::new(PgUserRepository::new())),
    }
}

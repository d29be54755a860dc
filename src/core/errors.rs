//! # Application Error Handling System
//!
//! 백엔드 서비스를 위한 통합 에러 처리 시스템입니다.
//! Spring Framework의 `@ExceptionHandler`와 글로벌 에러 처리 메커니즘을
//! Rust의 타입 시스템과 결합하여 안전하고 일관된 에러 처리를 제공합니다.
//!
//! ## 에러 전파 정책
//!
//! 리포지토리 계층에서 발생한 모든 저장소 에러는 `AppError::DatabaseError`로
//! 변환되고, 서비스 계층은 이를 다시 실패 봉투(Envelope)로 변환합니다.
//! 따라서 CRUD 흐름에서는 어떤 에러도 서비스 경계를 `Err`로 넘지 않습니다.
//! `ResponseError` 구현은 핸들러 경계의 장애(역직렬화 실패 등)를 위해 남아 있습니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 입력값 검증 실패 |
//! | `NotFound` | 404 Not Found | 리소스 없음 |
//! | `DatabaseError` | 500 Internal Server Error | 데이터베이스 오류 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! let user = self.user_repo.find_by_id(id).await?
//!     .ok_or_else(|| AppError::NotFound(format!("user with id {} not found", id)))?;
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 백엔드 서비스에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// `thiserror` 크레이트를 사용하여 자동으로 `Error` trait을 구현하고,
/// `actix_web::ResponseError`를 구현하여 HTTP 응답으로 자동 변환됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러
    ///
    /// PostgreSQL 연산 중 발생하는 오류를 나타냅니다.
    /// 연결 실패, 쿼리 실행 오류, 제약 조건 위반 등이 포함됩니다.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러
    ///
    /// 클라이언트가 제공한 데이터가 필수 필드 요구사항을
    /// 만족하지 않을 때 발생합니다.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러
    ///
    /// 요청된 사용자가 저장소에 존재하지 않을 때 발생합니다.
    #[error("Not found: {0}")]
    NotFound(String),

    /// 내부 서버 에러
    ///
    /// 예상하지 못한 시스템 오류 시 발생합니다.
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 `AppError` 변형을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    /// Spring의 `@ExceptionHandler`와 동일한 역할을 수행합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let status = match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("name is required".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("User not found".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_database_error_response() {
        let error = AppError::DatabaseError("connection refused".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_internal_error_response() {
        let error = AppError::InternalError("Something went wrong".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_display_carries_description() {
        let error = AppError::DatabaseError("connection refused".to_string());

        assert_eq!(error.to_string(), "Database error: connection refused");
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        assert!(app_result.is_err());
        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}

//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//! 사용자 CRUD 라우트와 헬스체크 엔드포인트를 포함합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new().configure(configure_all_routes);
//! ```

use crate::handlers;
use actix_web::web;
use chrono;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// 기능별로 분할된 라우트들을 통합하여 애플리케이션에 등록합니다.
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    // Feature-specific routes
    configure_user_routes(cfg);
}

/// 사용자 관련 라우트를 설정합니다
///
/// 사용자 생성, 조회, 수정, 삭제 API 엔드포인트를 등록합니다.
///
/// # Routes
///
/// - `POST /users` - 사용자 생성
/// - `GET /users/{id}` - 사용자 단건 조회
/// - `GET /users` - 사용자 전체 조회
/// - `PUT /users/{id}` - 사용자 수정
/// - `DELETE /users/{id}` - 사용자 삭제
///
/// # Examples
///
/// ```bash
/// curl -X POST http://localhost:8080/users \
///   -H "Content-Type: application/json" \
///   -d '{"name":"John Doe","email":"john.doe@example.com","age":30}'
///
/// curl http://localhost:8080/users/1
/// ```
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .service(handlers::users::create_user)
            .service(handlers::users::get_all_users)
            .service(handlers::users::get_user)
            .service(handlers::users::update_user)
            .service(handlers::users::delete_user),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "user_service_backend",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00Z",
///   "features": {
///     "database": "PostgreSQL",
///     "dependency_injection": "Service Registry"
///   }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "user_service_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "PostgreSQL",
            "dependency_injection": "Service Registry"
        }
    }))
}

//! # User Management HTTP Handlers
//!
//! 사용자 관리와 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! CRUD(Create, Read, Update, Delete) 작업을 지원하며,
//! RESTful API 설계 원칙을 따릅니다.
//!
//! ## 구현된 엔드포인트
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/users` | 새 사용자 생성 | 200 OK |
//! | `GET` | `/users/{id}` | 사용자 단건 조회 | 200 OK |
//! | `GET` | `/users` | 사용자 전체 조회 | 200 OK |
//! | `PUT` | `/users/{id}` | 사용자 수정 | 200 OK |
//! | `DELETE` | `/users/{id}` | 사용자 삭제 | 200 OK |
//!
//! 모든 엔드포인트는 결과와 무관하게 200을 반환하며,
//! 성공/실패는 응답 봉투의 `status` 필드(0/1)로 전달됩니다.

use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::core::errors::AppError;
use crate::domain::dto::users::request::user_dto::UserDto;
use crate::services::users::user_crud_service::UserCrudService;

/// 사용자 생성 핸들러
///
/// 새로운 사용자를 생성합니다. `name`, `email`, `age`가 모두 존재해야 하며,
/// 검증 실패 시에도 200과 함께 실패 봉투가 반환됩니다.
///
/// # 엔드포인트
///
/// `POST /users`
///
/// # 요청 본문
///
/// ```json
/// {
///   "name": "John Doe",
///   "email": "john.doe@example.com",
///   "age": 30
/// }
/// ```
///
/// # 응답
///
/// ## 성공
/// ```json
/// { "status": 0, "message": "user saved" }
/// ```
///
/// ## 검증 실패
/// ```json
/// {
///   "status": 1,
///   "message": "an error occurred while saving the user",
///   "errors": ["not all required fields were supplied"]
/// }
/// ```
#[post("")]
pub async fn create_user(
    payload: web::Json<UserDto>,
) -> Result<HttpResponse, AppError> {
    let service = UserCrudService::instance();
    let response = service.create(payload.into_inner()).await;

    Ok(HttpResponse::Ok().json(response))
}

/// 사용자 단건 조회 핸들러
///
/// 지정된 id의 사용자 정보를 조회합니다.
///
/// # 엔드포인트
///
/// `GET /users/{user_id}`
///
/// # 응답
///
/// ## 성공
/// ```json
/// {
///   "status": 0,
///   "user": {
///     "id": 1,
///     "name": "John Doe",
///     "email": "john.doe@example.com",
///     "age": 30,
///     "created_at": "2024-01-01T10:00:00Z"
///   }
/// }
/// ```
///
/// ## 사용자 없음
/// ```json
/// { "status": 1, "errors": ["Not found: user with id 999 not found"] }
/// ```
#[get("/{user_id}")]
pub async fn get_user(
    user_id: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let service = UserCrudService::instance();
    let response = service.get_by_id(user_id.into_inner()).await;

    Ok(HttpResponse::Ok().json(response))
}

/// 사용자 전체 조회 핸들러
///
/// 저장된 모든 사용자를 id 오름차순으로 조회합니다.
/// 사용자 한 명당 봉투 하나씩 담긴 배열이 반환되며,
/// 조회 실패 시에는 빈 배열이 반환됩니다.
///
/// # 엔드포인트
///
/// `GET /users`
#[get("")]
pub async fn get_all_users() -> Result<HttpResponse, AppError> {
    let service = UserCrudService::instance();
    let response = service.get_all().await;

    Ok(HttpResponse::Ok().json(response))
}

/// 사용자 수정 핸들러
///
/// 지정된 id의 사용자를 본문의 내용으로 덮어씁니다.
/// 본문에 id가 있어도 경로의 id가 우선합니다.
///
/// # 엔드포인트
///
/// `PUT /users/{user_id}`
///
/// # 응답
///
/// ```json
/// { "status": 0, "message": "user updated" }
/// ```
#[put("/{user_id}")]
pub async fn update_user(
    user_id: web::Path<i32>,
    payload: web::Json<UserDto>,
) -> Result<HttpResponse, AppError> {
    let service = UserCrudService::instance();
    let response = service.update(user_id.into_inner(), payload.into_inner()).await;

    Ok(HttpResponse::Ok().json(response))
}

/// 사용자 삭제 핸들러
///
/// 지정된 id의 사용자를 삭제합니다. 존재하지 않는 id인 경우
/// 저장소 삭제 호출 없이 실패 봉투가 반환됩니다.
///
/// # 엔드포인트
///
/// `DELETE /users/{user_id}`
///
/// # 응답
///
/// ## 성공
/// ```json
/// { "status": 0, "message": "user deleted" }
/// ```
///
/// ## 사용자 없음
/// ```json
/// {
///   "status": 1,
///   "message": "user deletion impossible",
///   "errors": ["no such id"]
/// }
/// ```
#[delete("/{user_id}")]
pub async fn delete_user(
    user_id: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let service = UserCrudService::instance();
    let response = service.delete(user_id.into_inner()).await;

    Ok(HttpResponse::Ok().json(response))
}

//! 조회 연산용 응답 봉투
//!
//! 단건/전체 조회 연산의 결과를 감싸는 봉투입니다.
//! 성공 시에는 사용자 DTO를, 실패 시에는 에러 메시지 목록을 담습니다.

use serde::{Deserialize, Serialize};

use crate::domain::dto::users::request::user_dto::UserDto;

/// 조회 응답 봉투
///
/// 불변식: `status = 0`이면 `user`만, `status = 1`이면 `errors`만 채워집니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponseDto {
    /// 도메인 결과 코드 (0 = 성공, 1 = 실패)
    pub status: i32,
    /// 성공 시에만 존재하는 사용자 페이로드
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserDto>,
    /// 실패 시에만 존재하는 에러 메시지 목록 (순서 유지)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl UserResponseDto {
    /// 사용자 DTO를 감싸는 성공 봉투를 생성합니다.
    pub fn success(user: UserDto) -> Self {
        Self {
            status: 0,
            user: Some(user),
            errors: None,
        }
    }

    /// 실패 봉투를 생성합니다. 페이로드는 절대 포함되지 않습니다.
    pub fn failure(errors: Vec<String>) -> Self {
        Self {
            status: 1,
            user: None,
            errors: Some(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_wraps_payload_only() {
        let dto = UserDto {
            id: Some(1),
            name: Some("John Doe".to_string()),
            ..UserDto::default()
        };
        let response = UserResponseDto::success(dto.clone());

        assert_eq!(response.status, 0);
        assert_eq!(response.user, Some(dto));
        assert_eq!(response.errors, None);
    }

    #[test]
    fn test_failure_envelope_wraps_errors_only() {
        let response = UserResponseDto::failure(vec!["Not found: user with id 999 not found".to_string()]);

        assert_eq!(response.status, 1);
        assert_eq!(response.user, None);
        assert_eq!(response.errors.as_ref().map(|e| e.len()), Some(1));
    }
}

//! 사용자 전송 객체 (DTO)
//!
//! 사용자 리소스의 외부 노출 형태입니다. 요청 본문 역직렬화와
//! 응답 봉투의 페이로드 양쪽에 모두 사용됩니다.
//!
//! 모든 필드는 입력 시 선택적이며, 생성 연산에서만 `name`/`email`/`age`의
//! 존재 여부가 검증됩니다(형식 검증 없음). `created_at`은 역직렬화 시점에
//! 기본값을 갖지 않습니다. 생성 시각은 서비스 계층이 할당합니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 사용자 DTO
///
/// 엔티티와 동일한 필드 집합을 가지며, JSON 역직렬화와 입력 검증을
/// 자동으로 수행합니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct UserDto {
    /// 사용자 식별자 (수정 시 경로의 id가 본문의 값을 덮어씁니다)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,

    /// 사용자 이름 (생성 시 필수)
    #[validate(required)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// 이메일 주소 (생성 시 필수, 형식 검증은 하지 않음)
    #[validate(required)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// 나이 (생성 시 필수, 범위 검증은 하지 않음)
    #[validate(required)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,

    /// 생성 시각 (생성 시 서비스가 할당하며, 수정 시 저장소가 기존 값을 보존)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_dto() -> UserDto {
        UserDto {
            id: None,
            name: Some("John Doe".to_string()),
            email: Some("john.doe@example.com".to_string()),
            age: Some(30),
            created_at: None,
        }
    }

    #[test]
    fn test_dto_with_all_required_fields_is_valid() {
        assert!(full_dto().validate().is_ok());
    }

    #[test]
    fn test_dto_missing_name_is_invalid() {
        let mut dto = full_dto();
        dto.name = None;

        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_dto_missing_email_is_invalid() {
        let mut dto = full_dto();
        dto.email = None;

        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_dto_missing_age_is_invalid() {
        let mut dto = full_dto();
        dto.age = None;

        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_absent_fields_are_not_serialized() {
        let dto = UserDto {
            id: Some(1),
            ..UserDto::default()
        };
        let json = serde_json::to_string(&dto).unwrap();

        assert_eq!(json, r#"{"id":1}"#);
    }

    #[test]
    fn test_deserialized_dto_does_not_acquire_created_at() {
        // 역직렬화만으로 생성 시각이 생기면 안 됩니다. 할당 주체는 서비스입니다.
        let dto: UserDto =
            serde_json::from_str(r#"{"name":"A","email":"a@x.com","age":30}"#).unwrap();

        assert_eq!(dto.created_at, None);
    }
}

//! 변경 연산용 응답 봉투
//!
//! 생성/수정/삭제 연산의 결과를 감싸는 봉투입니다. 성공과 실패는
//! HTTP 상태 코드가 아닌 `status` 필드로 구분합니다(0 = 성공, 1 = 실패).

use serde::{Deserialize, Serialize};

/// 변경 연산 응답 봉투
///
/// 불변식: `status = 0`이면 `errors`는 항상 `None`이고,
/// `status = 1`이면 `errors`가 항상 채워집니다.
/// `message`는 양쪽 모두에서 고정 요약 문구를 담습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// 도메인 결과 코드 (0 = 성공, 1 = 실패)
    pub status: i32,
    /// 사람이 읽을 수 있는 고정 요약 문구
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// 실패 시에만 존재하는 에러 메시지 목록 (순서 유지)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl Response {
    /// 성공 봉투를 생성합니다. 에러 목록은 절대 포함되지 않습니다.
    pub fn success(message: &str) -> Self {
        Self {
            status: 0,
            message: Some(message.to_string()),
            errors: None,
        }
    }

    /// 실패 봉투를 생성합니다.
    pub fn failure(message: &str, errors: Vec<String>) -> Self {
        Self {
            status: 1,
            message: Some(message.to_string()),
            errors: Some(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_never_carries_errors() {
        let response = Response::success("user saved");

        assert_eq!(response.status, 0);
        assert_eq!(response.message, Some("user saved".to_string()));
        assert_eq!(response.errors, None);
    }

    #[test]
    fn test_failure_envelope_carries_errors() {
        let response = Response::failure(
            "user deletion impossible",
            vec!["no such id".to_string()],
        );

        assert_eq!(response.status, 1);
        assert_eq!(response.errors, Some(vec!["no such id".to_string()]));
    }

    #[test]
    fn test_success_envelope_serialization_omits_errors() {
        let json = serde_json::to_string(&Response::success("user saved")).unwrap();

        assert_eq!(json, r#"{"status":0,"message":"user saved"}"#);
    }
}

//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! `users` 테이블의 한 행을 표현하며, 저장소 계층이 생명주기를 소유합니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// 사용자 엔티티
///
/// 시스템의 사용자 한 명을 표현하는 영속 도메인 엔티티입니다.
/// `id`는 데이터베이스가 할당하며(serial), 저장 전에는 `None`입니다.
/// `created_at`은 생성 시점에 한 번 기록된 후 변경되지 않습니다.
///
/// `id`를 제외한 모든 컬럼은 nullable입니다. 수정 연산은 필드 검증을
/// 수행하지 않으므로 비어 있는 필드는 NULL로 저장됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct User {
    /// 시스템 할당 식별자 (저장 전에는 None)
    pub id: Option<i32>,
    /// 사용자 이름
    pub name: Option<String>,
    /// 이메일 주소
    pub email: Option<String>,
    /// 나이
    pub age: Option<i32>,
    /// 생성 시각 (생성 이후 불변)
    pub created_at: Option<DateTime<Utc>>,
}

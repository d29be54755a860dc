//! 사용자 엔티티 ⇄ DTO 매퍼
//!
//! 필드 단위 복사만 수행하는 순수 변환 함수들입니다.
//! 검증이나 부수 효과 없이 양방향 변환을 제공하며,
//! 공유 필드 집합에 대해 서로 역함수입니다(왕복 법칙).

use crate::domain::dto::users::request::user_dto::UserDto;
use crate::domain::entities::users::user::User;

/// 엔티티를 DTO로 변환합니다.
pub fn to_dto(user: &User) -> UserDto {
    UserDto {
        id: user.id,
        name: user.name.clone(),
        email: user.email.clone(),
        age: user.age,
        created_at: user.created_at,
    }
}

/// DTO를 엔티티로 변환합니다.
pub fn to_entity(dto: &UserDto) -> User {
    User {
        id: dto.id,
        name: dto.name.clone(),
        email: dto.email.clone(),
        age: dto.age,
        created_at: dto.created_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sample_dto() -> UserDto {
        UserDto {
            id: Some(1),
            name: Some("John Doe".to_string()),
            email: Some("john.doe@example.com".to_string()),
            age: Some(30),
            created_at: Some(Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap()),
        }
    }

    #[test]
    fn test_round_trip_preserves_all_fields() {
        let dto = sample_dto();

        assert_eq!(to_dto(&to_entity(&dto)), dto);
    }

    #[test]
    fn test_round_trip_preserves_absent_fields() {
        let dto = UserDto::default();

        assert_eq!(to_dto(&to_entity(&dto)), dto);
    }

    #[test]
    fn test_to_entity_copies_field_for_field() {
        let dto = sample_dto();
        let user = to_entity(&dto);

        assert_eq!(user.id, Some(1));
        assert_eq!(user.name, Some("John Doe".to_string()));
        assert_eq!(user.email, Some("john.doe@example.com".to_string()));
        assert_eq!(user.age, Some(30));
        assert_eq!(user.created_at, dto.created_at);
    }

    #[test]
    fn test_to_dto_does_not_mutate_input() {
        let user = to_entity(&sample_dto());
        let before = user.clone();

        let _ = to_dto(&user);

        assert_eq!(user, before);
    }
}

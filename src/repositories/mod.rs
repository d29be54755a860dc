//! # Repository Module
//!
//! 데이터 액세스 계층을 담당하는 리포지토리들을 정의합니다.
//! Spring Framework의 `@Repository` 계층과 동일한 역할을 수행합니다.

pub mod users;

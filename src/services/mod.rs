//! # Service Module
//!
//! 비즈니스 로직을 담당하는 서비스들을 정의합니다.
//! Spring Framework의 `@Service` 계층과 동일한 역할을 수행합니다.

pub mod users;

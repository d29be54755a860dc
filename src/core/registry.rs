//! # Service Registry - 싱글톤 의존성 주입 시스템
//!
//! 백엔드 서비스를 위한 싱글톤 기반 의존성 주입 시스템의 핵심입니다.
//! Spring Framework의 ApplicationContext와 BeanFactory 역할을 Rust에서 구현한 것으로,
//! 컴파일 타임 타입 안전성과 런타임 효율성을 모두 제공합니다.
//!
//! ## Spring Framework와의 비교
//!
//! | Spring 개념 | 이 시스템 | 비고 |
//! |-------------|-----------|------|
//! | `ApplicationContext` | `ServiceLocator` | 전역 DI 컨테이너 |
//! | `@Service` | `ServiceRegistration` | 비즈니스 로직 컴포넌트 |
//! | `@Repository` | `RepositoryRegistration` | 데이터 액세스 컴포넌트 |
//! | `@Autowired` | `Arc<T>` 필드 | 자동 의존성 주입 |
//! | `@Bean` / `registerSingleton()` | `ServiceLocator::set()` | 인프라 컴포넌트 수동 등록 |
//! | `@Lazy` | 기본 동작 | 모든 컴포넌트가 지연 초기화 |
//! | `CircularDependencyException` | 런타임 패닉 | 순환 참조 조기 발견 |
//!
//! ## 동작 원리
//!
//! ```text
//! 1. 컴파일 타임 (Component Scanning)
//!    ├─ inventory::submit! → ServiceRegistration / RepositoryRegistration 등록
//!    └─ inventory::collect! → 전역 레지스트리에 수집
//!
//! 2. 런타임 초기화 (Infrastructure Beans)
//!    └─ ServiceLocator::set(database) → 전역 컨테이너에 저장
//!
//! 3. 의존성 주입 (Autowiring)
//!    ├─ ServiceLocator::get::<T>() → 타입 분석 및 레지스트리 검색
//!    ├─ 인스턴스 생성 → 등록된 생성자 함수 호출
//!    └─ 캐싱 → 이후 동일 타입 요청 시 동일 인스턴스 반환
//! ```

use std::any::{Any, TypeId};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use crate::utils::display_terminal::{print_boxed_title, print_cache_initialized, print_final_summary, print_step_complete, print_step_start, print_sub_task};

/// 비즈니스 로직 서비스를 위한 공통 인터페이스
///
/// 레지스트리에 등록되는 모든 서비스 구조체가 구현합니다.
/// 서비스의 기본 메타데이터와 생명주기 관리를 담당합니다.
#[async_trait]
pub trait Service: Send + Sync {
    /// 서비스의 고유 이름을 반환합니다.
    ///
    /// 이 이름은 레지스트리에서 서비스를 식별하는 키로 사용됩니다.
    fn name(&self) -> &str;

    /// 서비스 초기화 로직을 수행합니다.
    ///
    /// 서비스가 처음 생성된 후 호출되며, 필요한 초기 설정 작업을 수행할 수 있습니다.
    async fn init(&self) -> Result<(), Box<dyn std::error::Error>>;
}

/// 데이터 액세스 리포지토리를 위한 공통 인터페이스
///
/// 레지스트리에 등록되는 모든 리포지토리 구조체가 구현합니다.
/// 데이터 저장소와의 상호작용과 관련된 메타데이터를 관리합니다.
#[async_trait]
pub trait Repository: Send + Sync {
    /// 리포지토리의 고유 이름을 반환합니다.
    fn name(&self) -> &str;

    /// 연결된 데이터베이스 테이블의 이름을 반환합니다.
    fn table_name(&self) -> &str;

    /// 리포지토리 초기화 로직을 수행합니다.
    ///
    /// 테이블 생성, 연결 상태 확인 등 데이터 액세스와 관련된
    /// 초기화 작업을 수행합니다.
    async fn init(&self) -> Result<(), Box<dyn std::error::Error>>;
}

/// 서비스 등록 정보
///
/// `inventory` 크레이트를 통해 컴파일 타임에 수집되어 전역 레지스트리에 등록됩니다.
pub struct ServiceRegistration {
    /// 서비스의 고유 이름 (검색 키로 사용)
    pub name: &'static str,
    /// 인스턴스 생성 함수 (지연 초기화에 사용)
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

/// 리포지토리 등록 정보
///
/// ServiceRegistration과 동일한 구조를 가지지만 별도 타입으로 관리됩니다.
pub struct RepositoryRegistration {
    /// 리포지토리의 고유 이름 (검색 키로 사용)
    pub name: &'static str,
    /// 인스턴스 생성 함수 (지연 초기화에 사용)
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

// inventory를 통한 자동 수집 설정
// 컴파일 타임에 모든 ServiceRegistration과 RepositoryRegistration을 수집합니다.
inventory::collect!(ServiceRegistration);
inventory::collect!(RepositoryRegistration);

/// 서비스 이름 → 등록정보 매핑 캐시 (성능 최적화)
/// 첫 접근 시 한 번만 구성되며, 이후 O(1) 조회 제공
static SERVICE_NAME_CACHE: Lazy<HashMap<String, &'static ServiceRegistration>> = Lazy::new(|| {
    let mut cache = HashMap::new();

    for registration in inventory::iter::<ServiceRegistration>() {
        let clean_name = extract_clean_name_static(registration.name);
        cache.insert(clean_name, registration);
    }

    print_cache_initialized("Service", cache.len());
    cache
});

/// 리포지토리 이름 → 등록정보 매핑 캐시 (성능 최적화)
/// 첫 접근 시 한 번만 구성되며, 이후 O(1) 조회 제공
static REPOSITORY_NAME_CACHE: Lazy<HashMap<String, &'static RepositoryRegistration>> = Lazy::new(|| {
    let mut cache = HashMap::new();

    for registration in inventory::iter::<RepositoryRegistration>() {
        let clean_name = extract_clean_name_static(registration.name);
        cache.insert(clean_name, registration);
    }

    print_cache_initialized("Repository", cache.len());
    cache
});

/// 등록된 이름에서 접미사를 제거하여 정규화합니다
///
/// 등록 이름은 `usercrud_service`, `pguser_repository` 형태이므로,
/// 이를 `usercrud`, `pguser`로 정규화하여 타입 이름과 매칭합니다.
fn extract_clean_name_static(name: &str) -> String {
    if name.ends_with("_service") {
        name[..name.len() - 8].to_string()
    } else if name.ends_with("_repository") {
        name[..name.len() - 11].to_string()
    } else {
        name.to_string()
    }
}

/// 싱글톤 의존성 주입 컨테이너
///
/// 전체 DI 시스템의 핵심으로, Spring Framework의
/// ApplicationContext + BeanFactory 역할을 담당합니다.
///
/// # 주요 기능
///
/// - **싱글톤 보장**: 각 타입당 정확히 하나의 인스턴스만 생성
/// - **지연 초기화**: 첫 요청 시점에 인스턴스 생성
/// - **Thread-safe**: `RwLock`을 사용한 동시성 안전성
/// - **순환 참조 방지**: 초기화 중인 타입을 추적하여 데드락 방지
pub struct ServiceLocator {
    /// 생성된 인스턴스들의 캐시
    /// `TypeId`를 키로 사용하여 각 타입당 하나의 인스턴스를 저장
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
    /// 현재 초기화 중인 타입들 (순환 참조 방지용)
    initializing: RwLock<HashSet<TypeId>>,
}

impl ServiceLocator {
    /// 새로운 ServiceLocator 인스턴스를 생성합니다.
    /// 전역 Lazy static에서만 호출됩니다.
    fn new() -> Self {
        Self {
            instances: RwLock::new(HashMap::new()),
            initializing: RwLock::new(HashSet::new()),
        }
    }

    /// 지정된 타입의 싱글톤 인스턴스를 가져옵니다.
    ///
    /// Spring의 `ApplicationContext.getBean(Class<T>)`과 동일한 역할을 수행합니다.
    ///
    /// ## 처리 과정
    ///
    /// 1. **캐시 확인**: 이미 생성된 인스턴스가 있으면 즉시 반환
    /// 2. **순환 참조 검사**: 현재 생성 중인 타입이면 패닉
    /// 3. **타입 분석**: 타입 이름으로 Service/Repository 카테고리 결정
    /// 4. **레지스트리 검색**: 이름 캐시에서 매칭되는 등록 정보 조회
    /// 5. **인스턴스 생성 및 캐싱**: 생성자 함수 호출 후 캐시에 저장
    ///
    /// ## 사용 예제
    ///
    /// ```rust,ignore
    /// let service = ServiceLocator::get::<UserCrudService>();
    /// let repo = ServiceLocator::get::<PgUserRepository>();
    /// ```
    ///
    /// # 패닉 상황
    ///
    /// - **순환 참조**: A → B → A 형태의 의존성 순환
    /// - **미등록 타입**: 레지스트리에 등록되지 않은 타입 요청
    /// - **타입 불일치**: 등록된 타입과 요청 타입이 다른 경우
    pub fn get<T: 'static + Send + Sync>() -> Arc<T> {
        let type_id = TypeId::of::<T>();
        let type_name = std::any::type_name::<T>();

        // 이미 생성된 인스턴스 확인
        {
            let instances = LOCATOR.instances.read().unwrap();
            if let Some(instance) = instances.get(&type_id) {
                return instance.clone()
                    .downcast::<T>()
                    .expect("Type mismatch in ServiceLocator");
            }
        }

        // 현재 초기화 중인지 확인 (순환 참조 방지)
        {
            let initializing = LOCATOR.initializing.read().unwrap();
            if initializing.contains(&type_id) {
                eprintln!("❌ Circular dependency detected for type: {}", type_name);
                panic!("Circular dependency detected: {} is already being initialized", type_name);
            }
        }
        // 초기화 중임을 표시
        {
            let mut initializing = LOCATOR.initializing.write().unwrap();
            initializing.insert(type_id);
        }

        // 인스턴스 생성 시도
        let result = std::panic::catch_unwind(|| {
            let mut instances = LOCATOR.instances.write().unwrap();

            // 더블 체크
            if let Some(instance) = instances.get(&type_id) {
                return instance.clone()
                    .downcast::<T>()
                    .expect("Type mismatch in ServiceLocator");
            }

            // 타입 이름에서 실제 타입 이름 추출
            let clean_type_name = Self::extract_clean_type_name(type_name);

            // 리포지토리 찾기 (캐시 사용으로 O(1) 조회)
            if clean_type_name.contains("Repository") {
                // "PgUserRepository" -> "pguser"
                let entity_name = clean_type_name
                    .strip_suffix("Repository")
                    .unwrap_or(&clean_type_name)
                    .to_lowercase();

                if let Some(registration) = REPOSITORY_NAME_CACHE.get(&entity_name) {
                    let boxed_instance = (registration.constructor)();

                    if let Ok(arc_instance) = boxed_instance.downcast::<Arc<T>>() {
                        let instance = (*arc_instance).clone();
                        instances.insert(type_id, instance.clone() as Arc<dyn Any + Send + Sync>);
                        return instance;
                    } else {
                        panic!("Type mismatch for repository: {}", registration.name);
                    }
                } else {
                    panic!("No repository found for entity: {}", entity_name);
                }
            }

            // 서비스 찾기 (캐시 사용으로 O(1) 조회)
            if clean_type_name.contains("Service") {
                // "UserCrudService" -> "usercrud"
                let entity_name = clean_type_name
                    .strip_suffix("Service")
                    .unwrap_or(&clean_type_name)
                    .to_lowercase();

                if let Some(registration) = SERVICE_NAME_CACHE.get(&entity_name) {
                    let boxed_instance = (registration.constructor)();

                    if let Ok(arc_instance) = boxed_instance.downcast::<Arc<T>>() {
                        let instance = (*arc_instance).clone();
                        instances.insert(type_id, instance.clone() as Arc<dyn Any + Send + Sync>);
                        return instance;
                    } else {
                        panic!("Type mismatch for service: {}", registration.name);
                    }
                } else {
                    panic!("No service found for entity: {}", entity_name);
                }
            }

            // 매칭 실패 - 에러 처리
            panic!("Service not found: {}. Make sure it's registered with inventory::submit!, or manually registered with ServiceLocator::set()", type_name);
        });

        // 초기화 완료 표시
        {
            let mut initializing = LOCATOR.initializing.write().unwrap();
            initializing.remove(&type_id);
        }

        match result {
            Ok(instance) => instance,
            Err(e) => {
                // 초기화 실패 시에도 초기화 중 플래그 제거
                let mut initializing = LOCATOR.initializing.write().unwrap();
                initializing.remove(&type_id);

                eprintln!("ERROR: Failed to create instance for {}: {:?}", type_name, e);
                panic!("Failed to create instance for {}", type_name);
            }
        }
    }

    /// 타입 이름에서 실제 타입 이름을 추출합니다.
    ///
    /// Rust의 `std::any::type_name::<T>()`는 전체 모듈 경로를 포함하므로
    /// (예: `user_service_backend::services::UserCrudService`),
    /// 실제 타입 이름만 추출하여 매칭에 사용합니다.
    fn extract_clean_type_name(type_name: &str) -> String {
        if let Some(pos) = type_name.rfind("::") {
            type_name[pos + 2..].to_string()
        } else {
            type_name.to_string()
        }
    }

    /// 외부에서 생성된 인스턴스를 직접 등록합니다.
    ///
    /// Spring의 `@Bean` 메서드나 `registerSingleton()`과 동일한 역할을 하며,
    /// 레지스트리로 관리되지 않는 인프라 컴포넌트(Database 등)를
    /// 수동으로 등록할 때 사용됩니다.
    ///
    /// ## 사용 예제
    ///
    /// ```rust,ignore
    /// let database = Arc::new(Database::new().await?);
    /// ServiceLocator::set(database);
    /// ServiceLocator::initialize_all().await?;
    /// ```
    pub fn set<T: 'static + Send + Sync>(instance: Arc<T>) {
        let type_id = TypeId::of::<T>();
        let type_name = std::any::type_name::<T>();
        let clean_name = Self::extract_clean_type_name(type_name);

        println!("📦 Registering: {}", clean_name);

        let mut instances = LOCATOR.instances.write().unwrap();
        instances.insert(type_id, instance as Arc<dyn Any + Send + Sync>);
    }

    /// 모든 서비스와 리포지토리를 초기화합니다.
    ///
    /// 애플리케이션 시작 시 호출되어 등록된 모든 컴포넌트의 인스턴스를 미리 생성합니다.
    /// 지연 초기화와 달리 모든 의존성을 한 번에 해결하여 런타임 성능을 향상시킵니다.
    ///
    /// # 초기화 순서
    ///
    /// 1. **Repository 먼저**: 데이터 계층이 비즈니스 계층보다 먼저 초기화
    /// 2. **Service 나중에**: 리포지토리 의존성이 해결된 후 서비스 초기화
    pub async fn initialize_all() -> Result<(), Box<dyn std::error::Error>> {
        print_boxed_title("🔄 INITIALIZING SERVICE REGISTRY");

        // 1단계: 리포지토리 등록 정보 수집
        let repo_registrations: Vec<_> = inventory::iter::<RepositoryRegistration>().collect();
        let repo_count = repo_registrations.len();

        if repo_count > 0 {
            print_step_start(1, "Creating Repository instances");

            for registration in repo_registrations {
                print_sub_task(registration.name, "Creating...");
                let _boxed_instance = (registration.constructor)();
                print_sub_task(registration.name, "✓ Created");
            }

            print_step_complete(1, "Repository instances created", repo_count);
        }

        // 2단계: 서비스 등록 정보 수집
        let service_registrations: Vec<_> = inventory::iter::<ServiceRegistration>().collect();
        let service_count = service_registrations.len();

        if service_count > 0 {
            print_step_start(2, "Creating Service instances");

            for registration in service_registrations {
                print_sub_task(registration.name, "Creating...");
                let _boxed_instance = (registration.constructor)();
                print_sub_task(registration.name, "✓ Created");
            }

            print_step_complete(2, "Service instances created", service_count);
        }

        print_final_summary(repo_count, service_count);

        Ok(())
    }
}

/// 전역 서비스 로케이터 인스턴스
///
/// 애플리케이션 전체에서 사용되는 유일한 ServiceLocator 인스턴스입니다.
/// `Lazy<T>`를 사용하여 첫 접근 시에만 초기화되며, 이후에는 동일한
/// 인스턴스가 재사용됩니다.
static LOCATOR: Lazy<ServiceLocator> = Lazy::new(ServiceLocator::new);
